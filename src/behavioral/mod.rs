//! Behavioral patterns: how values communicate and delegate work.

pub mod observer;
pub mod strategy;

pub use observer::{ConsoleObserver, FnObserver, Observer, RecordingObserver, Subject};
pub use strategy::{
    AddStrategy, Context, MultiplyStrategy, Strategy, StrategyKind, SubtractStrategy,
};
