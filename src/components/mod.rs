// src/components/mod.rs

pub mod drawn_numbers;
pub mod limit;

pub use drawn_numbers::DrawnNumbers;
pub use limit::Limit;
