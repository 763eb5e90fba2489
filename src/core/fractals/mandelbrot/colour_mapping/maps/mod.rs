pub mod grayscale;
pub mod psych;
pub mod smooth;
pub mod ultra;
