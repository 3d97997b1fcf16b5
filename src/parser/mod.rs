pub mod dates;
pub mod records;
