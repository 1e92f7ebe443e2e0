pub mod common;
pub mod config;
pub mod fee;
pub mod gas;
pub mod state;

// Re-export commonly used types for convenience
pub use config::{ChainConfig, L1FeeConfig};
pub use fee::{
    FeeBreakdown, FeeContext, FeeError, Scalar, build_context, convert, l1_cost,
    l1_cost_breakdown, l1_cost_encodable, scale_decimals,
};
pub use gas::{ByteCounts, GasCalculator, estimate_gas};
pub use state::{InMemoryParameterStore, ParameterReader};

// Export anyhow::Result for convenience
pub use anyhow::Result;
