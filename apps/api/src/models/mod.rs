pub mod analysis;
pub mod opportunity;
