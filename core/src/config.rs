use crate::ranker::{QueryLikelihoodModel, DEFAULT_LAMBDA};
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Tunables for a ranking run.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RankerConfig {
    /// Jelinek-Mercer weight in `[0, 1]`: 1.0 scores on the document alone, 0.0 on the collection alone.
    pub lambda: f64,
}

impl Default for RankerConfig {
    fn default() -> Self { Self { lambda: DEFAULT_LAMBDA } }
}

impl RankerConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: RankerConfig = serde_json::from_str(s)?;
        Ok(cfg)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut f = File::open(path).with_context(|| format!("opening config {}", path.display()))?;
        let mut buf = String::new();
        f.read_to_string(&mut buf)?;
        Self::from_json_str(&buf).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        if !self.lambda.is_finite() || !(0.0..=1.0).contains(&self.lambda) {
            bail!("lambda must be within [0, 1], got {}", self.lambda);
        }
        Ok(())
    }

    pub fn model(&self) -> QueryLikelihoodModel {
        QueryLikelihoodModel::new(self.lambda)
    }
}
