use alloy::primitives::{Address, Bytes, U256, address};
use alloy::rlp::{BufMut, Encodable, Header};
use anyhow::Result;
use speed_l1_fee::common::{
    DECIMALS_SLOT, GAS_PRICE_ORACLE_ADDRESS, L1_BASE_FEE_SLOT, L1_BLOCK_ADDRESS, OVERHEAD_SLOT,
    SCALAR_SLOT,
};
use speed_l1_fee::{
    ChainConfig, FeeContext, FeeError, InMemoryParameterStore, l1_cost, l1_cost_encodable,
};
use std::io::Write;
use tempfile::NamedTempFile;

const CHAIN_CONFIG_JSON: &str = r#"{
    "chainId": 17,
    "l1Fee": {
        "enabled": true,
        "l1Block": "0x4200000000000000000000000000000000000015",
        "gasPriceOracle": "0x420000000000000000000000000000000000000f"
    }
}"#;

// Helper functions for realistic amounts
fn gwei_to_wei(gwei: u64) -> U256 {
    U256::from(gwei) * U256::from(10_u64.pow(9)) // 1 gwei = 10^9 wei
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn write_config(json: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(json.as_bytes())?;
    Ok(file)
}

fn oracle_store(
    base_fee: U256,
    overhead: u64,
    scalar: u64,
    decimals: u64,
) -> InMemoryParameterStore {
    InMemoryParameterStore::new()
        .with_u256(L1_BLOCK_ADDRESS, L1_BASE_FEE_SLOT, base_fee)
        .with_u256(GAS_PRICE_ORACLE_ADDRESS, OVERHEAD_SLOT, U256::from(overhead))
        .with_u256(GAS_PRICE_ORACLE_ADDRESS, SCALAR_SLOT, U256::from(scalar))
        .with_u256(GAS_PRICE_ORACLE_ADDRESS, DECIMALS_SLOT, U256::from(decimals))
}

// minimal legacy-style transaction, enough to exercise RLP pricing
struct TestTransaction {
    nonce: u64,
    to: Address,
    value: U256,
    data: Bytes,
}

impl TestTransaction {
    fn payload_length(&self) -> usize {
        self.nonce.length() + self.to.length() + self.value.length() + self.data.length()
    }
}

impl Encodable for TestTransaction {
    fn encode(&self, out: &mut dyn BufMut) {
        Header {
            list: true,
            payload_length: self.payload_length(),
        }
        .encode(out);
        self.nonce.encode(out);
        self.to.encode(out);
        self.value.encode(out);
        self.data.encode(out);
    }

    fn length(&self) -> usize {
        let payload_length = self.payload_length();
        payload_length + alloy::rlp::length_of_length(payload_length)
    }
}

#[test]
fn test_config_file_to_cost() -> Result<()> {
    init_tracing();

    let file = write_config(CHAIN_CONFIG_JSON)?;
    let config = ChainConfig::from_file(file.path())?;
    assert!(config.is_l1_fee_enabled());

    let store = oracle_store(U256::from(1_000), 100, 15_000, 4);
    let ctx = FeeContext::build(&config, &store)?;

    let payload = hex::decode("00000000aabbccddeeff")?;
    assert_eq!(l1_cost(&payload, &ctx)?, U256::from(1_950_000));

    Ok(())
}

#[test]
fn test_missing_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ChainConfig::from_file(dir.path().join("missing.json")).unwrap_err();
    assert!(err.to_string().contains("Failed to read chain config"));
}

#[test]
fn test_malformed_config_file_is_an_error() -> Result<()> {
    let file = write_config("{ not json")?;
    let err = ChainConfig::from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Invalid chain config"));
    Ok(())
}

#[test]
fn test_disabled_config_file_charges_nothing() -> Result<()> {
    let json = CHAIN_CONFIG_JSON.replace(r#""enabled": true"#, r#""enabled": false"#);
    let file = write_config(&json)?;
    let config = ChainConfig::from_file(file.path())?;

    let store = oracle_store(gwei_to_wei(30), 2_100, 1_000_000, 6);
    let ctx = FeeContext::build(&config, &store)?;

    assert!(ctx.is_zero());
    assert_eq!(l1_cost(&[0xff; 512], &ctx)?, U256::ZERO);
    Ok(())
}

#[test]
fn test_realistic_transfer_cost() -> Result<()> {
    init_tracing();

    let config = ChainConfig::from_json_str(CHAIN_CONFIG_JSON)?;
    // 30 gwei L1 base fee, 2100 overhead, scalar 1.0 with 6 decimals
    let store = oracle_store(gwei_to_wei(30), 2_100, 1_000_000, 6);
    let ctx = FeeContext::build(&config, &store)?;

    let tx = TestTransaction {
        nonce: 7,
        to: address!("00000000000000000000000000000000deadbeef"),
        value: U256::from(2_000_000_000_000_000_000u128),
        data: Bytes::new(),
    };

    let encoded = alloy::rlp::encode(&tx);
    let breakdown = ctx.l1_cost_breakdown(&encoded)?;

    assert_eq!(l1_cost_encodable(&tx, &ctx)?, breakdown.cost);
    // scalar of exactly one leaves the raw cost untouched
    assert_eq!(breakdown.cost, breakdown.raw_cost);
    assert_eq!(breakdown.raw_cost, breakdown.l1_gas * gwei_to_wei(30));

    Ok(())
}

#[test]
fn test_full_encoding_costs_more_than_data_alone() -> Result<()> {
    let config = ChainConfig::from_json_str(CHAIN_CONFIG_JSON)?;
    let ctx = FeeContext::build(&config, &oracle_store(U256::from(10), 0, 1, 0))?;

    let data = Bytes::from(vec![0x01, 0x00, 0x02]);
    let tx = TestTransaction {
        nonce: 1,
        to: address!("00000000000000000000000000000000000000ff"),
        value: U256::from(5),
        data: data.clone(),
    };

    let full = l1_cost_encodable(&tx, &ctx)?;
    let data_only = l1_cost(&data, &ctx)?;
    assert!(full > data_only);

    Ok(())
}

#[test]
fn test_bad_decimals_abort_pipeline() -> Result<()> {
    let config = ChainConfig::from_json_str(CHAIN_CONFIG_JSON)?;
    let store = oracle_store(U256::from(1), 0, 1, 78);

    let err = FeeContext::build(&config, &store).unwrap_err();
    assert_eq!(
        err,
        FeeError::ParameterOverflow {
            decimals: U256::from(78)
        }
    );
    Ok(())
}

#[test]
fn test_huge_base_fee_overflows() -> Result<()> {
    let config = ChainConfig::from_json_str(CHAIN_CONFIG_JSON)?;
    let store = oracle_store(U256::MAX, 0, 1, 0);
    let ctx = FeeContext::build(&config, &store)?;

    assert_eq!(l1_cost(&[1, 2, 3], &ctx).unwrap_err(), FeeError::Overflow);
    Ok(())
}

// configuration loading through the crate-level Result alias
fn load_chain_config(json: &str) -> speed_l1_fee::Result<ChainConfig> {
    let file = write_config(json)?;
    ChainConfig::from_file(file.path())
}

#[test]
fn test_crate_result_alias_carries_config_errors() {
    assert!(load_chain_config(CHAIN_CONFIG_JSON).unwrap().is_l1_fee_enabled());
    assert!(load_chain_config("[]").is_err());
}
