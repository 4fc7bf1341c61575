// Decorator Pattern via Composition
// Each decorator owns the component it wraps and extends its description.

// ============================================================================
// Component interface
// ============================================================================

pub trait Component {
    fn operation(&self) -> String;

    /// Number of decorator layers between this value and the base component.
    fn depth(&self) -> usize {
        0
    }
}

impl Component for Box<dyn Component> {
    fn operation(&self) -> String {
        (**self).operation()
    }

    fn depth(&self) -> usize {
        (**self).depth()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ConcreteComponent;

impl Component for ConcreteComponent {
    fn operation(&self) -> String {
        "ConcreteComponent".to_string()
    }
}

// ============================================================================
// Decorators
// ============================================================================

/// Forwarding base shared by concrete decorators. On its own it is
/// transparent: same output, one extra layer.
pub struct Decorator<C> {
    component: C,
}

impl<C: Component> Decorator<C> {
    pub fn new(component: C) -> Self {
        Self { component }
    }

    pub fn inner(&self) -> &C {
        &self.component
    }

    pub fn into_inner(self) -> C {
        self.component
    }
}

impl<C: Component> Component for Decorator<C> {
    fn operation(&self) -> String {
        self.component.operation()
    }

    fn depth(&self) -> usize {
        self.component.depth() + 1
    }
}

pub struct ConcreteDecorator<C> {
    base: Decorator<C>,
}

impl<C: Component> ConcreteDecorator<C> {
    pub fn new(component: C) -> Self {
        Self {
            base: Decorator::new(component),
        }
    }
}

impl<C: Component> Component for ConcreteDecorator<C> {
    fn operation(&self) -> String {
        format!("ConcreteDecorator({})", self.base.operation())
    }

    fn depth(&self) -> usize {
        self.base.depth()
    }
}

/// Wraps `component` in `layers` concrete decorators, innermost first.
pub fn decorate(component: Box<dyn Component>, layers: usize) -> Box<dyn Component> {
    (0..layers).fold(component, |inner, _| -> Box<dyn Component> {
        Box::new(ConcreteDecorator::new(inner))
    })
}
