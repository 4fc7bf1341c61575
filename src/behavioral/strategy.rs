// Strategy Pattern with Trait Objects
// A context delegates a binary operation to whichever strategy it holds.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use tracing::debug;

use crate::error::PatternError;

// ============================================================================
// Strategies
// ============================================================================

/// Arithmetic wraps on overflow so every strategy is total over `i64`.
pub trait Strategy {
    fn execute(&self, a: i64, b: i64) -> i64;
    fn name(&self) -> &'static str;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AddStrategy;

impl Strategy for AddStrategy {
    fn execute(&self, a: i64, b: i64) -> i64 {
        a.wrapping_add(b)
    }

    fn name(&self) -> &'static str {
        "add"
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SubtractStrategy;

impl Strategy for SubtractStrategy {
    fn execute(&self, a: i64, b: i64) -> i64 {
        a.wrapping_sub(b)
    }

    fn name(&self) -> &'static str {
        "subtract"
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MultiplyStrategy;

impl Strategy for MultiplyStrategy {
    fn execute(&self, a: i64, b: i64) -> i64 {
        a.wrapping_mul(b)
    }

    fn name(&self) -> &'static str {
        "multiply"
    }
}

// ============================================================================
// Context
// ============================================================================

pub struct Context {
    strategy: Box<dyn Strategy>,
}

impl Context {
    pub fn new(strategy: Box<dyn Strategy>) -> Self {
        Self { strategy }
    }

    /// Replaces the current strategy. The previous one is dropped.
    pub fn set_strategy(&mut self, strategy: Box<dyn Strategy>) {
        debug!(from = self.strategy.name(), to = strategy.name(), "strategy swapped");
        self.strategy = strategy;
    }

    pub fn execute_strategy(&self, a: i64, b: i64) -> i64 {
        self.strategy.execute(a, b)
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }
}

// ============================================================================
// Selecting a strategy by name
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Add,
    Subtract,
    Multiply,
}

impl StrategyKind {
    pub fn strategy(self) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Add => Box::new(AddStrategy),
            StrategyKind::Subtract => Box::new(SubtractStrategy),
            StrategyKind::Multiply => Box::new(MultiplyStrategy),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" => Ok(StrategyKind::Add),
            "subtract" => Ok(StrategyKind::Subtract),
            "multiply" => Ok(StrategyKind::Multiply),
            _ => Err(PatternError::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.strategy().name())
    }
}
