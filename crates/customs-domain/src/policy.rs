use crate::oracle::UNIVERSE_MEANING;

/// Knobs the engine needs at runtime. Built once by the settings layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Offset subtracted from every character code by the universe oracle.
    pub universe_meaning: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            universe_meaning: UNIVERSE_MEANING,
        }
    }
}
