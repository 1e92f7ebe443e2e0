pub mod gas_calculator;

pub use gas_calculator::*;
