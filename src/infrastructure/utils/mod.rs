pub mod list_field;
pub mod location;
pub mod month_year;
