//! CLI runtime configuration read from the process environment.
use std::env;
use std::path::PathBuf;

/// Settings that do not come from the command line.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    /// Directory holding `config.toml`, `catalog.ron`, and `players.ron`.
    pub data_dir: Option<PathBuf>,
    /// Seed for reproducible rolls; thread RNG when absent.
    pub seed: Option<u64>,
    /// Capacity of each event topic.
    pub event_buffer: Option<usize>,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `REWARD_DATA_DIR` - Content directory (default: bundled data)
    /// - `REWARD_SEED` - Fixed RNG seed (default: unseeded)
    /// - `REWARD_EVENT_BUFFER` - Event topic capacity (default: 100)
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var("REWARD_DATA_DIR").ok().map(PathBuf::from),
            seed: read_env::<u64>("REWARD_SEED"),
            event_buffer: read_env::<usize>("REWARD_EVENT_BUFFER").map(|size| size.max(1)),
        }
    }

    /// Content directory, falling back to the bundled data.
    ///
    /// Tried in order: `REWARD_DATA_DIR`, then `crates/game/content/data`
    /// relative to the current directory.
    pub fn resolve_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join("crates/game/content/data")
        })
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
