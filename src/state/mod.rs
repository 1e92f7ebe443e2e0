pub mod parameter_reader;
pub mod parameter_store;

pub use parameter_reader::*;
pub use parameter_store::*;
