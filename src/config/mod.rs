pub mod chain_config;

pub use chain_config::*;
