//! Reference tables the form transformers resolve composite strings against.

pub const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// End-date marker for an ongoing experience entry.
pub const PRESENT: &str = "Present";

/// Degree levels that are always present in the education editor.
/// Existing records are matched against these by exact name.
pub const MANDATORY_DEGREES: [&str; 4] = [
    "Secondary (X)",
    "Senior Secondary (XII)",
    "Graduation",
    "Post Graduation",
];

/// The only institution with a campus selection.
pub const CAMPUS_INSTITUTION: &str = "Graphic Era Hill University";

pub const CAMPUSES: [&str; 3] = ["Dehradun", "Bhimtal", "Haldwani"];

pub const EMPLOYMENT_TYPES: [&str; 6] = [
    "Full-time",
    "Part-time",
    "Internship",
    "Freelance",
    "Contract",
    "Self-employed",
];

pub const LOCATION_TYPES: [&str; 3] = ["On-site", "Hybrid", "Remote"];
