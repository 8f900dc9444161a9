//! Child sources define which relation the traversal follows.
//!
//! The default walks structural children. Supplying another source lets the
//! same query walk an alternate relation (for example only the active page
//! of a tab container) without changing the traversal itself.

use std::fmt;

use crate::view::View;

/// Yields the ordered traversal children of a view.
///
/// The relation must be acyclic; a source that reports an ancestor as a
/// child makes the traversal recurse forever.
pub trait ChildSource<V>: Send + Sync {
    fn children<'v>(&self, view: &'v V) -> Vec<&'v V>;
}

/// Structural children, in their natural order.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralChildren;

pub static STRUCTURAL: StructuralChildren = StructuralChildren;

impl<V: View> ChildSource<V> for StructuralChildren {
    fn children<'v>(&self, view: &'v V) -> Vec<&'v V> {
        view.children().iter().collect()
    }
}

/// Adapts a closure into a [`ChildSource`].
pub struct FnChildSource<F> {
    f: F,
}

impl<F> FnChildSource<F> {
    pub fn new<V>(f: F) -> Self
    where
        F: for<'v> Fn(&'v V) -> Vec<&'v V>,
    {
        Self { f }
    }
}

impl<F> fmt::Debug for FnChildSource<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnChildSource").finish_non_exhaustive()
    }
}

impl<V, F> ChildSource<V> for FnChildSource<F>
where
    F: for<'v> Fn(&'v V) -> Vec<&'v V> + Send + Sync,
{
    fn children<'v>(&self, view: &'v V) -> Vec<&'v V> {
        (self.f)(view)
    }
}
