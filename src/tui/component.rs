use ratatui::{buffer::Buffer, layout::Rect};

use super::action::Action;

/// Core component trait - like React.Component
///
/// Components are the building blocks of the UI. Each component:
/// - Has Props (input data owned by someone else)
/// - Has State (internal state, like useState)
/// - Has Messages (internal events, like setState callbacks)
/// - Renders to an Element tree (virtual DOM)
/// - Gets a post-render pass for effects (like useEffect)
pub trait Component: Send {
    /// Props type for this component
    type Props: Clone;

    /// Local state type (if any)
    type State: Default + Clone + Send + Sync + 'static;

    /// Message type for internal events
    type Message;

    /// Create initial state from props (like useState)
    fn init(_props: &Self::Props) -> Self::State {
        Self::State::default()
    }

    /// Update state based on message (like reducer)
    fn update(
        &mut self,
        _props: &Self::Props,
        _msg: Self::Message,
        _state: &mut Self::State,
    ) -> Effect {
        Effect::None
    }

    /// Render component given props and state (pure function)
    fn view(&self, props: &Self::Props, state: &Self::State) -> Element;

    /// Lifecycle: runs after every render, never during it
    ///
    /// Returns true when state changed and another render is needed.
    fn after_render(&mut self, _props: &Self::Props, _state: &mut Self::State) -> bool {
        false
    }
}

/// Element in virtual component tree
#[derive(Clone)]
pub enum Element {
    /// A widget that can be directly rendered to ratatui buffer
    Widget(Box<dyn ElementWidget>),

    /// A container with layout and children
    Container {
        children: Vec<Element>,
        layout: ContainerLayout,
    },

    /// A fragment (just groups children, no layout)
    Fragment(Vec<Element>),

    /// Nothing to render
    None,
}

impl Element {
    pub fn widget(widget: impl ElementWidget + 'static) -> Self {
        Element::Widget(Box::new(widget))
    }
}

/// Layout for container elements
#[derive(Clone, Debug, PartialEq)]
pub enum ContainerLayout {
    Vertical(Vec<Constraint>),
    Horizontal(Vec<Constraint>),
}

/// Constraint for layout
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constraint {
    Length(u16),
    Min(u16),
    Max(u16),
    Percentage(u16),
    Ratio(u32, u32),
}

impl From<Constraint> for ratatui::layout::Constraint {
    fn from(constraint: Constraint) -> Self {
        match constraint {
            Constraint::Length(n) => ratatui::layout::Constraint::Length(n),
            Constraint::Min(n) => ratatui::layout::Constraint::Min(n),
            Constraint::Max(n) => ratatui::layout::Constraint::Max(n),
            Constraint::Percentage(n) => ratatui::layout::Constraint::Percentage(n),
            Constraint::Ratio(a, b) => ratatui::layout::Constraint::Ratio(a, b),
        }
    }
}

/// Side effects to run after an update
#[derive(Debug)]
pub enum Effect {
    None,
    Action(Action),
    Batch(Vec<Effect>),
}

/// Trait for widgets that can be wrapped in the Element tree
///
/// Widgets carry their already-resolved styles, so rendering needs nothing
/// but the target area and buffer.
pub trait ElementWidget: Send + Sync {
    /// Render this widget into the provided buffer
    fn render(&self, area: Rect, buf: &mut Buffer);

    /// Clone this widget into a boxed trait object
    fn clone_box(&self) -> Box<dyn ElementWidget>;

    /// Get the preferred height of this widget
    ///
    /// Returns None if the widget can adapt to any height.
    fn preferred_height(&self) -> Option<u16> {
        None
    }
}

impl Clone for Box<dyn ElementWidget> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Helper to create a container with vertical layout
pub fn vertical(constraints: Vec<Constraint>, children: Vec<Element>) -> Element {
    Element::Container {
        children,
        layout: ContainerLayout::Vertical(constraints),
    }
}

/// Helper to create a container with horizontal layout
pub fn horizontal(constraints: Vec<Constraint>, children: Vec<Element>) -> Element {
    Element::Container {
        children,
        layout: ContainerLayout::Horizontal(constraints),
    }
}
