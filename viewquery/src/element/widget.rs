use std::any::Any;
use std::fmt::Debug;

/// The concrete payload behind an [`Element`](super::Element).
///
/// Queries match widget types through [`as_any`](Widget::as_any), so each
/// implementation must return `self` from both accessors.
pub trait Widget: Any + Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Interactive controls are what control queries look for.
    fn is_control(&self) -> bool {
        false
    }
}

/// Plain grouping box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Container;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Button {
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Checkbox {
    pub label: String,
    pub checked: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    pub value: String,
    pub placeholder: Option<String>,
}

impl Widget for Container {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl Widget for Text {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl Widget for Button {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn is_control(&self) -> bool {
        true
    }
}

impl Widget for Checkbox {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn is_control(&self) -> bool {
        true
    }
}

impl Widget for TextInput {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn is_control(&self) -> bool {
        true
    }
}
