pub mod help;
pub mod reset;
pub mod usage;
