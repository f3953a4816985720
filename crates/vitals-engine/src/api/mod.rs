pub mod types;
pub mod vitals;
