use std::any::Any;
use std::sync::atomic::{AtomicU64, Ordering};

use super::widget::{Button, Checkbox, Container, Text, TextInput, Widget};
use crate::sorter::QuerySorter;
use crate::view::View;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug)]
pub struct Element {
    // Identity
    pub id: String,

    // Content
    pub widget: Box<dyn Widget>,
    pub children: Vec<Element>,

    // State
    pub visible: bool,
    /// Disabled elements are skipped by control and tab-order queries.
    pub disabled: bool,

    // Interaction
    pub focusable: bool,
    /// When true, this element is the root of its own focus hierarchy
    /// (a dialog, popover or floating panel).
    pub interaction_scope: bool,
    /// Tab navigation visits lower groups first. Ties keep tree order.
    pub tab_group: i16,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            widget: Box::new(Container),
            children: Vec::new(),
            visible: true,
            disabled: false,
            focusable: false,
            interaction_scope: false,
            tab_group: 0,
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            widget: Box::new(Text {
                content: content.into(),
            }),
            ..Default::default()
        }
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self {
            id: generate_id("button"),
            widget: Box::new(Button {
                label: label.into(),
            }),
            focusable: true,
            ..Default::default()
        }
    }

    pub fn checkbox(label: impl Into<String>, checked: bool) -> Self {
        Self {
            id: generate_id("checkbox"),
            widget: Box::new(Checkbox {
                label: label.into(),
                checked,
            }),
            focusable: true,
            ..Default::default()
        }
    }

    /// Create a text input element.
    pub fn text_input(value: impl Into<String>) -> Self {
        Self {
            id: generate_id("input"),
            widget: Box::new(TextInput {
                value: value.into(),
                placeholder: None,
            }),
            focusable: true,
            ..Default::default()
        }
    }

    /// Create a container that starts its own interaction scope.
    pub fn scope() -> Self {
        Self {
            id: generate_id("scope"),
            interaction_scope: true,
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // State
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    // Interaction
    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn interaction_scope(mut self, scope: bool) -> Self {
        self.interaction_scope = scope;
        self
    }

    pub fn tab_group(mut self, group: i16) -> Self {
        self.tab_group = group;
        self
    }

    /// Set the placeholder text for a text input.
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        if let Some(input) = self.widget_as_mut::<TextInput>() {
            input.placeholder = Some(text.into());
        }
        self
    }

    // Widget access
    pub fn widget_as<T: Widget>(&self) -> Option<&T> {
        self.widget.as_any().downcast_ref::<T>()
    }

    fn widget_as_mut<T: Widget>(&mut self) -> Option<&mut T> {
        self.widget.as_any_mut().downcast_mut::<T>()
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(new_children);
        self
    }
}

impl View for Element {
    fn name(&self) -> &str {
        &self.id
    }

    fn children(&self) -> &[Self] {
        &self.children
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn is_enabled(&self) -> bool {
        !self.disabled
    }

    fn has_tab_stop(&self) -> bool {
        self.focusable
    }

    fn is_control(&self) -> bool {
        self.widget.is_control()
    }

    fn is_root(&self) -> bool {
        self.interaction_scope
    }

    fn widget(&self) -> &dyn Any {
        self.widget.as_any()
    }
}

/// Orders a sibling group by [`Element::tab_group`], keeping tree order
/// within a group.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabGroupSorter;

impl QuerySorter<Element> for TabGroupSorter {
    fn sort<'v>(&self, _parent: &'v Element, children: &mut [&'v Element]) {
        children.sort_by_key(|el| el.tab_group);
    }
}
