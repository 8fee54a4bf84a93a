pub mod basics;
pub mod education;
pub mod experience;
pub mod preferences;
pub mod session;
pub mod work_profile;
