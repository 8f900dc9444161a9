use std::any::Any;
use std::fmt;
use std::marker::PhantomData;

use super::{QueryFilter, Verdict};
use crate::view::View;

/// Selects views with no children. Always descends.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeavesFilter;

/// Selects designated roots and stops below them.
#[derive(Debug, Clone, Copy, Default)]
pub struct RootsFilter;

/// Selects visible views. Hidden subtrees are pruned entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct VisibleFilter;

/// Selects enabled views. Always descends.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnabledFilter;

/// Selects views that accept keyboard focus. Always descends.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabStopFilter;

/// Selects interactive controls. Always descends.
#[derive(Debug, Clone, Copy, Default)]
pub struct ControlFilter;

pub static LEAVES: LeavesFilter = LeavesFilter;
pub static ROOTS: RootsFilter = RootsFilter;
pub static VISIBLE: VisibleFilter = VisibleFilter;
pub static ENABLED: EnabledFilter = EnabledFilter;
pub static TAB_STOP: TabStopFilter = TabStopFilter;
pub static CONTROLS: ControlFilter = ControlFilter;

impl<V: View> QueryFilter<V> for LeavesFilter {
    fn evaluate(&self, _view: &V, children: &[&V]) -> Verdict {
        Verdict::new(children.is_empty(), true)
    }
}

impl<V: View> QueryFilter<V> for RootsFilter {
    fn evaluate(&self, view: &V, _children: &[&V]) -> Verdict {
        let is_root = view.is_root();
        Verdict::new(is_root, !is_root)
    }
}

impl<V: View> QueryFilter<V> for VisibleFilter {
    fn evaluate(&self, view: &V, _children: &[&V]) -> Verdict {
        let visible = view.is_visible();
        Verdict::new(visible, visible)
    }
}

impl<V: View> QueryFilter<V> for EnabledFilter {
    fn evaluate(&self, view: &V, _children: &[&V]) -> Verdict {
        Verdict::new(view.is_enabled(), true)
    }
}

impl<V: View> QueryFilter<V> for TabStopFilter {
    fn evaluate(&self, view: &V, _children: &[&V]) -> Verdict {
        Verdict::new(view.has_tab_stop(), true)
    }
}

impl<V: View> QueryFilter<V> for ControlFilter {
    fn evaluate(&self, view: &V, _children: &[&V]) -> Verdict {
        Verdict::new(view.is_control(), true)
    }
}

/// Selects views whose widget is exactly `T`. Always descends.
pub struct TypeFilter<T> {
    _marker: PhantomData<fn() -> T>,
}

/// Build a [`TypeFilter`] for `T`. Usable in `static` position.
pub const fn widget_type<T: Any>() -> TypeFilter<T> {
    TypeFilter::new()
}

impl<T: Any> TypeFilter<T> {
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T: Any> Default for TypeFilter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for TypeFilter<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypeFilter<T> {}

impl<T> fmt::Debug for TypeFilter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeFilter<{}>", std::any::type_name::<T>())
    }
}

impl<V: View, T: Any> QueryFilter<V> for TypeFilter<T> {
    fn evaluate(&self, view: &V, _children: &[&V]) -> Verdict {
        Verdict::new(view.widget().is::<T>(), true)
    }
}
