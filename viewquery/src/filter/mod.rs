//! Filters decide, per view, whether it is selected and whether the
//! traversal keeps going below it.

mod builtin;

pub use builtin::{
    CONTROLS, ControlFilter, ENABLED, EnabledFilter, LEAVES, LeavesFilter, ROOTS, RootsFilter,
    TAB_STOP, TabStopFilter, TypeFilter, VISIBLE, VisibleFilter, widget_type,
};

/// Outcome of evaluating a filter (or a whole chain) at one view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Verdict {
    /// Include this view in the result.
    pub selected: bool,
    /// Keep traversing below this view. As a pre-filter verdict this gates
    /// recursion; as a post-filter verdict `false` drops everything the
    /// subtree contributed.
    pub continue_descent: bool,
}

impl Verdict {
    /// Select and keep descending. This is the neutral element of a chain.
    pub const ACCEPT: Self = Self::new(true, true);

    /// Neither select nor descend.
    pub const REJECT: Self = Self::new(false, false);

    pub const fn new(selected: bool, continue_descent: bool) -> Self {
        Self {
            selected,
            continue_descent,
        }
    }

    /// Conjunction of both fields.
    pub const fn and(self, other: Self) -> Self {
        Self {
            selected: self.selected && other.selected,
            continue_descent: self.continue_descent && other.continue_descent,
        }
    }

    /// True once no further conjunction can change the outcome.
    pub const fn is_rejected(&self) -> bool {
        !self.selected && !self.continue_descent
    }
}

impl Default for Verdict {
    fn default() -> Self {
        Self::ACCEPT
    }
}

/// A predicate over a view and the child results collected for it.
///
/// For pre-filters `children` is the raw traversal children, before any
/// recursion. For post-filters it is the flattened, filtered (and possibly
/// sorted) results of the subtree.
///
/// Filters must be pure: no interior mutation of the filter or the tree.
/// They are shared between queries and threads.
pub trait QueryFilter<V>: Send + Sync {
    fn evaluate(&self, view: &V, children: &[&V]) -> Verdict;
}

/// Evaluate a chain of filters conjunctively.
///
/// An empty chain accepts. Evaluation stops as soon as both fields are
/// false.
pub fn run_filters<V>(view: &V, children: &[&V], filters: &[&dyn QueryFilter<V>]) -> Verdict {
    let mut verdict = Verdict::ACCEPT;
    for filter in filters {
        verdict = verdict.and(filter.evaluate(view, children));
        if verdict.is_rejected() {
            break;
        }
    }
    verdict
}
