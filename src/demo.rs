//! Usage snippets for each pattern.
//!
//! Each `run_*` function writes exactly the lines the snippet prints, so the
//! binary can send them to stdout and tests can capture them in a buffer.

use std::io::{self, Write};

use clap::ValueEnum;

use crate::behavioral::{ConsoleObserver, Context, Subject};
use crate::config::DemoConfig;
use crate::creational::Singleton;
use crate::structural::{decorate, Component, ConcreteComponent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Pattern {
    All,
    Singleton,
    Factory,
    Observer,
    Decorator,
    Strategy,
}

impl Pattern {
    pub const EACH: [Pattern; 5] = [
        Pattern::Singleton,
        Pattern::Factory,
        Pattern::Observer,
        Pattern::Decorator,
        Pattern::Strategy,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Pattern::All => "All Patterns",
            Pattern::Singleton => "Singleton Pattern",
            Pattern::Factory => "Factory Method Pattern",
            Pattern::Observer => "Observer Pattern",
            Pattern::Decorator => "Decorator Pattern",
            Pattern::Strategy => "Strategy Pattern",
        }
    }
}

/// Runs a single snippet. `Pattern::All` runs every snippet back to back
/// without headers. Any failed write to `out` is returned, including one
/// the observer snippet hit while notifying.
pub fn run(pattern: Pattern, config: &DemoConfig, out: &mut dyn Write) -> io::Result<()> {
    match pattern {
        Pattern::All => {
            for each in Pattern::EACH {
                run(each, config, out)?;
            }
            Ok(())
        }
        Pattern::Singleton => run_singleton(out),
        Pattern::Factory => run_factory(config, out),
        Pattern::Observer => run_observer(config, out),
        Pattern::Decorator => run_decorator(config, out),
        Pattern::Strategy => run_strategy(config, out),
    }
}

pub fn run_singleton(out: &mut dyn Write) -> io::Result<()> {
    let first = Singleton::instance();
    let second = Singleton::instance();
    writeln!(out, "Same instance: {}", std::ptr::eq(first, second))
}

pub fn run_factory(config: &DemoConfig, out: &mut dyn Write) -> io::Result<()> {
    for kind in &config.factory.creators {
        let product = kind.creator().factory_method();
        writeln!(out, "{}", product.name())?;
    }
    Ok(())
}

pub fn run_observer(config: &DemoConfig, out: &mut dyn Write) -> io::Result<()> {
    let observer = ConsoleObserver::new(&mut *out);
    let mut subject: Subject<'_, str> = Subject::new();
    subject.add_observer(&observer);
    subject.notify_observers(&config.observer.message);
    match observer.take_error() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

pub fn run_decorator(config: &DemoConfig, out: &mut dyn Write) -> io::Result<()> {
    let decorated = decorate(Box::new(ConcreteComponent), config.decorator.layers);
    writeln!(out, "{}", decorated.operation())
}

pub fn run_strategy(config: &DemoConfig, out: &mut dyn Write) -> io::Result<()> {
    let (a, b) = (config.strategy.a, config.strategy.b);
    let mut kinds = config.strategy.sequence.iter();

    let Some(first) = kinds.next() else {
        return Ok(());
    };

    let mut context = Context::new(first.strategy());
    writeln!(out, "{}", context.execute_strategy(a, b))?;

    for kind in kinds {
        context.set_strategy(kind.strategy());
        writeln!(out, "{}", context.execute_strategy(a, b))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(pattern: Pattern, config: &DemoConfig) -> String {
        let mut buf = Vec::<u8>::new();
        run(pattern, config, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_default_outputs() {
        let config = DemoConfig::default();
        assert_eq!(capture(Pattern::Singleton, &config), "Same instance: true\n");
        assert_eq!(capture(Pattern::Factory, &config), "Product A\n");
        assert_eq!(
            capture(Pattern::Observer, &config),
            "Received message: Hello, Observers!\n"
        );
        assert_eq!(
            capture(Pattern::Decorator, &config),
            "ConcreteDecorator(ConcreteComponent)\n"
        );
        assert_eq!(capture(Pattern::Strategy, &config), "8\n2\n");
    }

    struct ClosedSink;

    impl Write for ClosedSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_observer_reports_lost_output() {
        let err = run(Pattern::Observer, &DemoConfig::default(), &mut ClosedSink).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_empty_strategy_sequence_prints_nothing() {
        let mut config = DemoConfig::default();
        config.strategy.sequence.clear();
        assert_eq!(capture(Pattern::Strategy, &config), "");
    }

    #[test]
    fn test_all_runs_in_order() {
        let output = capture(Pattern::All, &DemoConfig::default());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            [
                "Same instance: true",
                "Product A",
                "Received message: Hello, Observers!",
                "ConcreteDecorator(ConcreteComponent)",
                "8",
                "2",
            ]
        );
    }
}
