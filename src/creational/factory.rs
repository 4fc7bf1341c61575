// Factory Method Pattern
// Callers ask a creator for a product and only ever see `dyn Product`.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::PatternError;

// ============================================================================
// Products
// ============================================================================

pub trait Product {
    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConcreteProductA;

impl Product for ConcreteProductA {
    fn name(&self) -> &'static str {
        "Product A"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConcreteProductB;

impl Product for ConcreteProductB {
    fn name(&self) -> &'static str {
        "Product B"
    }
}

// ============================================================================
// Creators
// ============================================================================

pub trait Creator {
    fn factory_method(&self) -> Box<dyn Product>;

    /// Business logic that depends only on the product interface.
    fn some_operation(&self) -> String {
        let product = self.factory_method();
        format!("Creator: working with {}", product.name())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ConcreteCreatorA;

impl Creator for ConcreteCreatorA {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ConcreteProductA)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ConcreteCreatorB;

impl Creator for ConcreteCreatorB {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ConcreteProductB)
    }
}

// ============================================================================
// Selecting a creator by name
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreatorKind {
    A,
    B,
}

impl CreatorKind {
    pub fn creator(self) -> Box<dyn Creator> {
        match self {
            CreatorKind::A => Box::new(ConcreteCreatorA),
            CreatorKind::B => Box::new(ConcreteCreatorB),
        }
    }
}

impl FromStr for CreatorKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" => Ok(CreatorKind::A),
            "b" => Ok(CreatorKind::B),
            _ => Err(PatternError::UnknownCreator(s.to_string())),
        }
    }
}

impl fmt::Display for CreatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreatorKind::A => write!(f, "a"),
            CreatorKind::B => write!(f, "b"),
        }
    }
}
