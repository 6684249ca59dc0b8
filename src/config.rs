use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::io::RenderOptions;

/// Settings for a `matfact` run.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FactorConfig {
    /// Factorization applied in single-matrix mode.
    pub factorization: Factorization,

    /// LU pivots with magnitude at or below this are treated as singular.
    pub pivot_tolerance: f64,

    pub padding: usize,
    pub precision: Option<usize>,
}

/// Supported factorizations.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Factorization {
    #[default]
    Lu,
    Cholesky,
    Hessenberg,
}

impl Factorization {
    pub fn name(&self) -> &'static str {
        match self {
            Factorization::Lu => "lu",
            Factorization::Cholesky => "cholesky",
            Factorization::Hessenberg => "hessenberg",
        }
    }
}

impl FromStr for Factorization {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lu" => Ok(Factorization::Lu),
            "cholesky" => Ok(Factorization::Cholesky),
            "hessenberg" => Ok(Factorization::Hessenberg),
            _ => Err(format!(
                "Unknown factorization: {}. Expected one of: lu, cholesky, hessenberg",
                s
            )),
        }
    }
}

impl FactorConfig {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            padding: self.padding,
            precision: self.precision,
        }
    }
}

impl Default for FactorConfig {
    fn default() -> Self {
        Self {
            factorization: Factorization::default(),
            pivot_tolerance: 0.0,
            padding: RenderOptions::default().padding,
            precision: None,
        }
    }
}

/// Load a JSON run configuration. Missing fields take their default values.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<FactorConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: FactorConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}
