//! Config parsing and resolution.
//!
//! This crate is IO-free: it parses configuration provided as strings and
//! environment pairs supplied by the caller.

#![forbid(unsafe_code)]

mod env;
mod model;
mod resolve;

pub use env::{
    ENV_CONFIG, ENV_MANIFEST, ENV_PROVIDER, ENV_PROVIDER_LEGACY, ENV_STORAGE_DIR,
    ENV_UNIVERSE_MEANING,
};
pub use model::CustomsConfigV1;
pub use resolve::{
    ConfigError, DEFAULT_CONFIG_PATH, DEFAULT_MANIFEST_PATH, DEFAULT_STORAGE_DIR, Overrides,
    ResolvedConfig,
};

/// Parse `customs.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<CustomsConfigV1> {
    let cfg: CustomsConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config (defaults < config file < overrides).
pub fn resolve_config(cfg: CustomsConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}

/// JSON schema for `customs.toml`, for editor tooling.
pub fn config_schema_json() -> anyhow::Result<String> {
    let schema = schemars::schema_for!(CustomsConfigV1);
    Ok(serde_json::to_string_pretty(&schema)?)
}
