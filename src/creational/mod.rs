//! Creational patterns: controlling how and how often values are created.

pub mod factory;
pub mod singleton;

pub use factory::{
    ConcreteCreatorA, ConcreteCreatorB, ConcreteProductA, ConcreteProductB, Creator, CreatorKind,
    Product,
};
pub use singleton::{Singleton, SingletonHolder};
