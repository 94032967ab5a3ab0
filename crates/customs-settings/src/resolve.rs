use crate::model::CustomsConfigV1;
use anyhow::Context;
use camino::Utf8PathBuf;
use customs_domain::policy::EngineConfig;
use customs_types::StorageProvider;

pub const DEFAULT_CONFIG_PATH: &str = "customs.toml";
pub const DEFAULT_STORAGE_DIR: &str = "storage";
pub const DEFAULT_MANIFEST_PATH: &str = "passenger_manifest.csv";

/// Values that take precedence over the config file. Kept as raw strings so
/// every source is validated in one place.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub provider: Option<String>,
    pub universe_meaning: Option<String>,
    pub storage_dir: Option<String>,
    pub manifest: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub engine: EngineConfig,
    pub provider: StorageProvider,
    pub storage_dir: Utf8PathBuf,
    pub manifest_path: Utf8PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            provider: StorageProvider::default(),
            storage_dir: Utf8PathBuf::from(DEFAULT_STORAGE_DIR),
            manifest_path: Utf8PathBuf::from(DEFAULT_MANIFEST_PATH),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("provider {0} is not supported")]
    UnsupportedProvider(String),

    #[error("invalid universe_meaning {value:?}: {reason}")]
    InvalidMeaning { value: String, reason: String },
}

pub fn resolve_config(cfg: CustomsConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let mut resolved = ResolvedConfig::default();

    if let Some(provider) = overrides.provider.or(cfg.provider) {
        resolved.provider = parse_provider(&provider)?;
    }

    if let Some(meaning) = overrides.universe_meaning {
        resolved.engine.universe_meaning =
            parse_meaning(&meaning).context("resolve universe_meaning override")?;
    } else if let Some(meaning) = cfg.universe_meaning {
        resolved.engine.universe_meaning = meaning;
    }

    if let Some(dir) = overrides.storage_dir.or(cfg.storage_dir) {
        resolved.storage_dir = Utf8PathBuf::from(dir);
    }

    if let Some(manifest) = overrides.manifest.or(cfg.manifest) {
        resolved.manifest_path = Utf8PathBuf::from(manifest);
    }

    Ok(resolved)
}

fn parse_provider(v: &str) -> Result<StorageProvider, ConfigError> {
    v.trim()
        .parse()
        .map_err(|_| ConfigError::UnsupportedProvider(v.to_string()))
}

fn parse_meaning(v: &str) -> Result<u32, ConfigError> {
    v.trim()
        .parse::<u32>()
        .map_err(|err| ConfigError::InvalidMeaning {
            value: v.to_string(),
            reason: err.to_string(),
        })
}
