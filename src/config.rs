//! Demo configuration loaded from TOML.
//!
//! Every field has a default, and `DemoConfig::default()` reproduces the
//! canonical usage output. A file only needs the keys it wants to change:
//!
//! ```toml
//! [observer]
//! message = "Hi there"
//!
//! [strategy]
//! a = 10
//! b = 4
//! sequence = ["multiply", "subtract"]
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::behavioral::StrategyKind;
use crate::creational::CreatorKind;
use crate::error::{PatternError, Result};

/// Upper bound on `[decorator] layers`. Each layer adds a stack frame to
/// `operation()` and to the drop of the chain.
pub const MAX_DECORATOR_LAYERS: usize = 1024;

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct DemoConfig {
    pub factory: FactoryConfig,
    pub observer: ObserverConfig,
    pub decorator: DecoratorConfig,
    pub strategy: StrategyConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FactoryConfig {
    pub creators: Vec<CreatorKind>,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            creators: vec![CreatorKind::A],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ObserverConfig {
    pub message: String,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            message: "Hello, Observers!".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DecoratorConfig {
    pub layers: usize,
}

impl Default for DecoratorConfig {
    fn default() -> Self {
        Self { layers: 1 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    pub a: i64,
    pub b: i64,
    pub sequence: Vec<StrategyKind>,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            a: 5,
            b: 3,
            sequence: vec![StrategyKind::Add, StrategyKind::Subtract],
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let layers = self.decorator.layers;
        if layers > MAX_DECORATOR_LAYERS {
            return Err(PatternError::TooManyLayers {
                layers,
                max: MAX_DECORATOR_LAYERS,
            });
        }
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| PatternError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }
}
