use std::fmt;

use crate::children::{ChildSource, FnChildSource, STRUCTURAL};
use crate::error::QueryError;
use crate::filter::{CONTROLS, ENABLED, QueryFilter, VISIBLE, run_filters};
use crate::sorter::QuerySorter;
use crate::view::{View, find_view};

/// Flattens a view hierarchy into an ordered list of selected views.
///
/// A query is configured up front with pre-filters, post-filters, an
/// optional sorter and an optional child source, then run against a root.
/// Filters and sorters are borrowed; the built-in ones are `'static`.
///
/// At each view:
/// 1. The pre-filter chain sees the raw traversal children and decides
///    whether to descend. A view rejected on both counts contributes nothing.
/// 2. Children are run recursively and their results are concatenated in
///    order, then reordered by the sorter if one is installed.
/// 3. The post-filter chain sees the accumulated results.
/// 4. The view itself comes first in its result when both chains select it.
/// 5. The accumulated results follow unless the post chain stops descent,
///    in which case the whole subtree contribution is dropped.
///
/// With no filters every view is selected, in pre-order.
pub struct ViewQuery<'f, V> {
    pre_filters: Vec<&'f dyn QueryFilter<V>>,
    post_filters: Vec<&'f dyn QueryFilter<V>>,
    sorter: Option<&'f dyn QuerySorter<V>>,
    child_source: Option<Box<dyn ChildSource<V> + 'f>>,
}

impl<V> Default for ViewQuery<'_, V> {
    fn default() -> Self {
        Self {
            pre_filters: Vec::new(),
            post_filters: Vec::new(),
            sorter: None,
            child_source: None,
        }
    }
}

impl<V> fmt::Debug for ViewQuery<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewQuery")
            .field("pre_filters", &self.pre_filters.len())
            .field("post_filters", &self.post_filters.len())
            .field("sorter", &self.sorter.is_some())
            .field("child_source", &self.child_source.is_some())
            .finish()
    }
}

impl<'f, V: View> ViewQuery<'f, V> {
    pub fn new() -> Self {
        Self::default()
    }

    // Configuration

    pub fn pre_filter(mut self, filter: &'f dyn QueryFilter<V>) -> Self {
        self.pre_filters.push(filter);
        self
    }

    pub fn post_filter(mut self, filter: &'f dyn QueryFilter<V>) -> Self {
        self.post_filters.push(filter);
        self
    }

    pub fn sorter(mut self, sorter: &'f dyn QuerySorter<V>) -> Self {
        self.sorter = Some(sorter);
        self
    }

    /// Walk a different child relation instead of structural children.
    pub fn with_child_source(mut self, source: impl ChildSource<V> + 'f) -> Self {
        self.child_source = Some(Box::new(source));
        self
    }

    /// Closure form of [`with_child_source`](Self::with_child_source).
    pub fn with_children_fn<F>(self, f: F) -> Self
    where
        F: for<'v> Fn(&'v V) -> Vec<&'v V> + Send + Sync + 'f,
    {
        self.with_child_source(FnChildSource::new::<V>(f))
    }

    // Accessors

    pub fn pre_filters(&self) -> &[&'f dyn QueryFilter<V>] {
        &self.pre_filters
    }

    pub fn post_filters(&self) -> &[&'f dyn QueryFilter<V>] {
        &self.post_filters
    }

    pub fn get_sorter(&self) -> Option<&'f dyn QuerySorter<V>> {
        self.sorter
    }

    pub fn has_child_source(&self) -> bool {
        self.child_source.is_some()
    }

    // Running

    /// Run the query from `root`. The result borrows from the tree.
    pub fn run<'v>(&self, root: &'v V) -> Vec<&'v V> {
        log::trace!(
            "[query] run root={} pre={} post={} sorted={}",
            root.name(),
            self.pre_filters.len(),
            self.post_filters.len(),
            self.sorter.is_some()
        );

        let source: &dyn ChildSource<V> = match &self.child_source {
            Some(source) => &**source,
            None => &STRUCTURAL,
        };
        let result = self.collect(root, source);

        log::trace!("[query] root={} selected={}", root.name(), result.len());
        result
    }

    /// Run the query from the view named `name` somewhere under `root`.
    pub fn run_from<'v>(&self, root: &'v V, name: &str) -> Result<Vec<&'v V>, QueryError> {
        let start =
            find_view(root, name).ok_or_else(|| QueryError::ViewNotFound(name.to_string()))?;
        Ok(self.run(start))
    }

    fn collect<'v>(&self, view: &'v V, source: &dyn ChildSource<V>) -> Vec<&'v V> {
        let children = source.children(view);

        let pre = run_filters(view, &children, &self.pre_filters);
        if pre.is_rejected() {
            return Vec::new();
        }

        let mut accumulated = Vec::new();
        if pre.continue_descent {
            for child in children {
                accumulated.extend(self.collect(child, source));
            }
            if let Some(sorter) = self.sorter {
                sorter.sort(view, &mut accumulated);
            }
        }

        let post = run_filters(view, &accumulated, &self.post_filters);

        let mut result = Vec::with_capacity(accumulated.len() + 1);
        if pre.selected && post.selected {
            result.push(view);
        }
        if post.continue_descent {
            result.append(&mut accumulated);
        }
        result
    }
}

/// A query for interactive controls that are enabled and visible.
///
/// Hidden subtrees contribute nothing, even if they contain controls.
pub fn control_query<V: View>() -> ViewQuery<'static, V> {
    ViewQuery::new()
        .post_filter(&CONTROLS)
        .post_filter(&ENABLED)
        .post_filter(&VISIBLE)
}
