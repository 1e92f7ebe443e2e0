pub mod context;
pub mod cost;
pub mod error;
pub mod scalar;

pub use context::*;
pub use cost::*;
pub use error::*;
pub use scalar::*;
