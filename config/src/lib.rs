use serde::Deserialize;
use tracing::debug;
use std::{env, path::Path};
use std::path::PathBuf;
use std::fs::read_to_string;
use anyhow::{anyhow, bail, Result};


#[derive(Debug, Clone, Deserialize)]
pub struct Logo {
    pub source: PathBuf,
    pub output: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(skip)]
    pub dir: PathBuf,
    pub logo: Option<Logo>,
}

impl Config {
    pub fn new() -> Result<Self> {
        let path = match env::args().nth(1) {
            Some(p) => PathBuf::from(p),
            None => PathBuf::from("."),
        };

        // Allow config path to point to a 'config.toml' file or a dir where it's present.
        let dir = match &path {
            p if p.is_file() => p.parent().unwrap_or_else(|| Path::new(".")).to_owned(),
            p if p.is_dir() => path,
            _ => bail!("Unable to determine config.toml path from {:?}", &path),
        };

        let mut file = dir.to_owned();
        file.push("config.toml");

        let contents = read_to_string(file).map_err(|e|
            anyhow!("Unable to read config.toml file to string: {}", e)
        )?;

        let mut config = toml::from_str::<Self>(&contents).map_err(|e|
            anyhow!("Unable to read config.toml file path as toml: {}", e)
        )?;

        debug!("Config dir set to {}", dir.display());

        // Add decided dir path to config
        config.dir = dir;

        Ok(config)
    }
    pub fn logo(&self) -> Result<Logo> {
        self.logo.clone().ok_or_else(|| anyhow!("Logo config not defined"))
    }
}
