use std::{fs::File, io::BufReader, path::Path, str::FromStr};

use clap::ValueEnum;
use serde::Deserialize;
use shared::{
    errors::{SolverError, SolverResult},
    MAX_THREADS,
    MIN_THREADS,
    SEARCH_SPACE,
};

use crate::distributor::Strategy;

/// Worker pool size, always within `[MIN_THREADS, MAX_THREADS]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadCount(usize);

impl ThreadCount {
    pub fn get(self) -> usize {
        self.0
    }
}

impl FromStr for ThreadCount {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<usize>() {
            Ok(n) if (MIN_THREADS..=MAX_THREADS).contains(&n) => Ok(ThreadCount(n)),
            _ => Err(SolverError::InvalidThreadCount(s.to_string())),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<challenge> s1 ... s8`
    #[default]
    Text,
    /// One JSON object per challenge
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    pub space: u64,
    pub strategy: Strategy,
    pub pin_cores: bool,
    pub format: OutputFormat,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            space: SEARCH_SPACE,
            strategy: Strategy::default(),
            pin_cores: false,
            format: OutputFormat::default(),
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> SolverResult<()> {
        if self.space == 0 {
            return Err(SolverError::InvalidConfig("space must hold at least one candidate".into()));
        }
        Ok(())
    }
}

pub fn load_config_file<P>(config_file: P) -> SolverResult<SearchConfig>
where
    P: AsRef<Path>, {
    let path = config_file.as_ref();
    let file = File::open(path).map_err(|source| SolverError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| SolverError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}
