use anyhow::{Context, Result};
use drawable::{Resolver, DEFAULT_RES_DIRS};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "andy.yaml";

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Resource folders bare filenames are looked up in, first existing wins.
    pub res_dirs: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            res_dirs: DEFAULT_RES_DIRS.iter().map(PathBuf::from).collect(),
        }
    }
}

impl Config {
    /// Reads the config at `path`, falling back to the defaults when there is
    /// no such file.
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Default::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config `{}`", path.display()))?;
        if contents.trim().is_empty() {
            return Ok(Default::default());
        }
        let config: Self = serde_yaml::from_str(&contents)
            .with_context(|| format!("invalid config `{}`", path.display()))?;
        tracing::debug!("loaded {:?} from {}", config, path.display());
        Ok(config)
    }

    pub fn resolver(&self) -> Resolver {
        Resolver::new(self.res_dirs.clone())
    }
}
