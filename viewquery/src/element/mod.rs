mod node;
mod widget;

pub use node::{Element, TabGroupSorter};
pub use widget::{Button, Checkbox, Container, Text, TextInput, Widget};

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    crate::view::find_view(root, id)
}
