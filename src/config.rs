use eyre::{Report, WrapErr, ensure};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "enrollbench.toml";

pub const DEFAULT_SIZES: [usize; 10] = [
    100, 1000, 5000, 10000, 20000, 30000, 40000, 50000, 75000, 100000,
];

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub data_dir: PathBuf,
    pub sizes: Vec<usize>,
    pub seed: Option<u64>,
    pub generator: GeneratorConfig,
}

/// Bounds used when generating datasets. Upper bounds are exclusive.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub min_length: usize,
    pub max_length: usize,
    pub max_score: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            sizes: DEFAULT_SIZES.to_vec(),
            seed: None,
            generator: GeneratorConfig::default(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_length: 10,
            max_length: 60,
            max_score: 310,
        }
    }
}

impl Config {
    pub fn load(file_name: &Path) -> Result<Config, Report> {
        let content = fs::read_to_string(file_name).wrap_err_with(|| {
            format!("cannot load configuration file {}", file_name.display())
        })?;
        Self::parse(&content)
            .wrap_err_with(|| format!("cannot parse configuration file {}", file_name.display()))
    }

    pub fn parse(content: &str) -> Result<Config, Report> {
        let config: Config = toml::from_str(content)?;
        config.generator.check()?;
        Ok(config)
    }
}

impl GeneratorConfig {
    fn check(&self) -> Result<(), Report> {
        ensure!(self.min_length > 0, "generator.min_length must be positive");
        ensure!(
            self.min_length < self.max_length,
            "generator.min_length ({}) must be lower than generator.max_length ({})",
            self.min_length,
            self.max_length
        );
        ensure!(self.max_score > 0, "generator.max_score must be positive");
        Ok(())
    }
}
