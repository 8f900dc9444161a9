use std::fmt;
use std::marker::PhantomData;

/// Reorders a sibling group before it is spliced into the parent's result.
///
/// Applied once per view to the child results accumulated for it. Sorters
/// are expected to be idempotent (a stable sort by some key is).
pub trait QuerySorter<V>: Send + Sync {
    fn sort<'v>(&self, parent: &'v V, children: &mut [&'v V]);
}

/// Stable sort of the sibling group by a key extracted from each view.
pub struct SortByKey<F, K> {
    key: F,
    _key: PhantomData<fn() -> K>,
}

impl<F, K> SortByKey<F, K> {
    pub fn new<V>(key: F) -> Self
    where
        F: Fn(&V) -> K,
    {
        Self {
            key,
            _key: PhantomData,
        }
    }
}

impl<F, K> fmt::Debug for SortByKey<F, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortByKey").finish_non_exhaustive()
    }
}

impl<V, K, F> QuerySorter<V> for SortByKey<F, K>
where
    K: Ord,
    F: Fn(&V) -> K + Send + Sync,
{
    fn sort<'v>(&self, _parent: &'v V, children: &mut [&'v V]) {
        children.sort_by_key(|view| (self.key)(*view));
    }
}
