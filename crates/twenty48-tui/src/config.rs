use std::collections::BTreeMap;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use twenty48_engine::engine::Direction;

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Config {
    /// Seed for tile spawns. Entropy is used when absent.
    pub seed: Option<u64>,

    /// File that receives log output. No logger is installed without one,
    /// since stderr shares the terminal with the board.
    pub log_file: Option<PathBuf>,

    /// Extra single-character bindings, key -> direction name. Arrow keys are
    /// always bound. A `[keys]` table replaces the defaults entirely.
    #[serde(default = "defaults::keys")]
    pub keys: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            log_file: None,
            keys: defaults::keys(),
        }
    }
}

impl Config {
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut file = std::fs::File::open(path)
            .with_context(|| format!("failed to open config {}", path.display()))?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let cfg: Self = toml::from_str(contents)?;
        Ok(cfg)
    }

    /// Resolve `keys` into character bindings, rejecting multi-character keys
    /// and unknown direction names.
    pub fn key_bindings(&self) -> Result<Vec<(char, Direction)>> {
        self.keys
            .iter()
            .map(|(key, name)| -> Result<(char, Direction)> {
                let mut chars = key.chars();
                let ch = match (chars.next(), chars.next()) {
                    (Some(c), None) => c,
                    _ => bail!("key binding {key:?} must be a single character"),
                };
                let direction = name
                    .parse::<Direction>()
                    .with_context(|| format!("bad binding for key {key:?}"))?;
                Ok((ch, direction))
            })
            .collect()
    }
}

mod defaults {
    use std::collections::BTreeMap;

    pub fn keys() -> BTreeMap<String, String> {
        [
            ("h", "left"),
            ("j", "down"),
            ("k", "up"),
            ("l", "right"),
            ("a", "left"),
            ("s", "down"),
            ("w", "up"),
            ("d", "right"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }
}
