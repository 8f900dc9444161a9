/// Errors from lookup-based entry points.
///
/// The traversal itself cannot fail; these only arise when a caller names a
/// view that the tree does not provide.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// No view with this name exists under the root.
    #[error("view not found: {0}")]
    ViewNotFound(String),

    /// The view exists but is not part of the tab order.
    #[error("view is not focusable: {0}")]
    NotFocusable(String),
}
