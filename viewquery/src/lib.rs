//! Flatten and filter view hierarchies.
//!
//! A [`ViewQuery`] walks a tree of [`View`]s, asks its pre-filters whether to
//! descend and its post-filters whether to select, and returns the selected
//! views in tree order (optionally reordered per sibling group by a
//! [`QuerySorter`]). Results borrow from the tree.
//!
//! ```
//! use viewquery::{Element, control_query};
//!
//! let root = Element::box_()
//!     .id("form")
//!     .child(Element::text("Name").id("label"))
//!     .child(Element::text_input("").id("name"))
//!     .child(Element::button("Save").id("save").disabled(true));
//!
//! let controls = control_query().run(&root);
//! let ids: Vec<&str> = controls.iter().map(|el| el.id.as_str()).collect();
//! assert_eq!(ids, ["name"]);
//! ```

pub mod children;
pub mod element;
pub mod error;
pub mod filter;
pub mod focus;
pub mod query;
pub mod sorter;
pub mod view;

pub use children::{ChildSource, FnChildSource, StructuralChildren};
pub use element::{Element, TabGroupSorter, Widget, find_element};
pub use error::QueryError;
pub use filter::{
    CONTROLS, ENABLED, LEAVES, QueryFilter, ROOTS, TAB_STOP, TypeFilter, VISIBLE, Verdict,
    run_filters, widget_type,
};
pub use focus::{FocusState, tab_order, tab_order_query};
pub use query::{ViewQuery, control_query};
pub use sorter::{QuerySorter, SortByKey};
pub use view::{View, find_view};
