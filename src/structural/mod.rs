//! Structural patterns: composing values into larger behaviors.

pub mod decorator;

pub use decorator::{decorate, Component, ConcreteComponent, ConcreteDecorator, Decorator};
