//! # Design Patterns in Rust
//!
//! Five classic object-oriented patterns, each expressed with traits and
//! ownership instead of class hierarchies.
//!
//! ## Creational Patterns
//! - Singleton (`OnceLock`, init-once holder)
//! - Factory Method (trait objects, enum selection)
//!
//! ## Structural Patterns
//! - Decorator (composition, arbitrarily deep chains)
//!
//! ## Behavioral Patterns
//! - Observer (borrowed listeners, registration order)
//! - Strategy (boxed strategies swappable at runtime)
//!
//! Run the usage snippets with:
//! ```bash
//! cargo run --bin patterns
//! cargo run --bin patterns -- strategy
//! cargo run --bin patterns -- all --config demo.toml
//! ```

pub mod behavioral;
pub mod config;
pub mod creational;
pub mod demo;
pub mod error;
pub mod structural;

pub use config::DemoConfig;
pub use error::{PatternError, Result};
