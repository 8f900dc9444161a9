use std::any::Any;

/// A node in a view hierarchy that queries can walk.
///
/// The query engine only ever reads through this trait. It never mutates a
/// view, and the references it returns borrow from the tree, so the tree
/// cannot change while a result is alive.
///
/// Implementations must describe a finite tree: no view may be its own
/// ancestor through `children()`.
pub trait View: Sized {
    /// Identifier used for lookups and focus tracking.
    fn name(&self) -> &str;

    /// Structural children in their natural order.
    fn children(&self) -> &[Self];

    fn is_visible(&self) -> bool;

    fn is_enabled(&self) -> bool;

    /// Whether this view accepts keyboard focus.
    fn has_tab_stop(&self) -> bool;

    /// Whether this view is an interactive control.
    fn is_control(&self) -> bool;

    /// Whether this view is a designated root (a scope that owns its own
    /// subtree, such as a dialog or floating panel).
    fn is_root(&self) -> bool;

    /// The concrete widget behind this view, used for type matching.
    fn widget(&self) -> &dyn Any;
}

/// Find a view by name in the tree (depth-first, parent before children).
pub fn find_view<'a, V: View>(root: &'a V, name: &str) -> Option<&'a V> {
    if root.name() == name {
        return Some(root);
    }

    for child in root.children() {
        if let Some(found) = find_view(child, name) {
            return Some(found);
        }
    }

    None
}
