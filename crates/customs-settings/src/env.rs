use crate::resolve::Overrides;

pub const ENV_CONFIG: &str = "CUSTOMS_CONFIG";
pub const ENV_PROVIDER: &str = "CUSTOMS_PROVIDER";
/// Older deployments set the bare name.
pub const ENV_PROVIDER_LEGACY: &str = "PROVIDER";
pub const ENV_UNIVERSE_MEANING: &str = "CUSTOMS_UNIVERSE_MEANING";
pub const ENV_STORAGE_DIR: &str = "CUSTOMS_STORAGE_DIR";
pub const ENV_MANIFEST: &str = "CUSTOMS_MANIFEST";

impl Overrides {
    /// Collect overrides from environment pairs (typically `std::env::vars()`).
    ///
    /// Empty values are ignored. `CUSTOMS_PROVIDER` wins over `PROVIDER`.
    pub fn from_env_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut out = Overrides::default();
        let mut legacy_provider = None;

        for (key, value) in vars {
            let value: String = value.into();
            if value.trim().is_empty() {
                continue;
            }
            match key.as_ref() {
                ENV_PROVIDER => out.provider = Some(value),
                ENV_PROVIDER_LEGACY => legacy_provider = Some(value),
                ENV_UNIVERSE_MEANING => out.universe_meaning = Some(value),
                ENV_STORAGE_DIR => out.storage_dir = Some(value),
                ENV_MANIFEST => out.manifest = Some(value),
                _ => {}
            }
        }

        if out.provider.is_none() {
            out.provider = legacy_provider;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_known_variables_only() {
        let o = Overrides::from_env_vars([
            ("CUSTOMS_UNIVERSE_MEANING", "7"),
            ("CUSTOMS_STORAGE_DIR", "/data"),
            ("CUSTOMS_MANIFEST", "m.csv"),
            ("HOME", "/root"),
        ]);
        assert_eq!(o.universe_meaning.as_deref(), Some("7"));
        assert_eq!(o.storage_dir.as_deref(), Some("/data"));
        assert_eq!(o.manifest.as_deref(), Some("m.csv"));
        assert_eq!(o.provider, None);
    }

    #[test]
    fn prefixed_provider_wins_over_legacy() {
        let o = Overrides::from_env_vars([("PROVIDER", "legacy"), ("CUSTOMS_PROVIDER", "fileItem")]);
        assert_eq!(o.provider.as_deref(), Some("fileItem"));

        let o = Overrides::from_env_vars([("PROVIDER", "fileItem")]);
        assert_eq!(o.provider.as_deref(), Some("fileItem"));
    }

    #[test]
    fn blank_values_are_ignored() {
        let o = Overrides::from_env_vars([("CUSTOMS_PROVIDER", "  ")]);
        assert_eq!(o.provider, None);
    }
}
