use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `customs.toml` schema v1.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CustomsConfigV1 {
    /// Storage provider identifier. Only `fileItem` is available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    /// Offset the universe oracle subtracts from character codes (default 42).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub universe_meaning: Option<u32>,

    /// Directory holding `safe.txt`, `dangerous.txt` and `universe.json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_dir: Option<String>,

    /// Passenger manifest to inspect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<String>,
}
