use crate::element::{Element, TabGroupSorter};
use crate::error::QueryError;
use crate::filter::{ENABLED, TAB_STOP, VISIBLE};
use crate::query::ViewQuery;

static TAB_GROUPS: TabGroupSorter = TabGroupSorter;

/// Query selecting the elements Tab navigation visits, in visiting order.
///
/// Hidden subtrees are pruned before descent. Disabled elements are skipped
/// but their children still count.
pub fn tab_order_query() -> ViewQuery<'static, Element> {
    ViewQuery::new()
        .pre_filter(&VISIBLE)
        .post_filter(&TAB_STOP)
        .post_filter(&ENABLED)
        .sorter(&TAB_GROUPS)
}

/// Collect all focusable elements in tab order.
pub fn tab_order(root: &Element) -> Vec<&Element> {
    tab_order_query().run(root)
}

fn tab_order_ids(root: &Element) -> Vec<String> {
    tab_order(root).into_iter().map(|el| el.id.clone()).collect()
}

/// Tracks which element is currently focused.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, root: &Element, id: &str) -> Result<bool, QueryError> {
        if !tab_order(root).iter().any(|el| el.id == id) {
            return Err(match crate::element::find_element(root, id) {
                Some(_) => QueryError::NotFocusable(id.to_string()),
                None => QueryError::ViewNotFound(id.to_string()),
            });
        }
        if self.focused.as_deref() == Some(id) {
            return Ok(false);
        }
        log::debug!("[focus] Changing focus from {:?} to {}", self.focused, id);
        self.focused = Some(id.to_string());
        Ok(true)
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// Focus the next element in tab order, wrapping at the end.
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_next(&mut self, root: &Element) -> Option<String> {
        let order = tab_order_ids(root);
        if order.is_empty() {
            return None;
        }

        let new_focus = match &self.focused {
            None => order[0].clone(),
            Some(current) => match order.iter().position(|id| id == current) {
                Some(i) => order[(i + 1) % order.len()].clone(),
                None => order[0].clone(),
            },
        };

        self.move_to(new_focus)
    }

    /// Focus the previous element in tab order, wrapping at the start.
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_prev(&mut self, root: &Element) -> Option<String> {
        let order = tab_order_ids(root);
        let last = order.last()?.clone();

        let new_focus = match &self.focused {
            None => last,
            Some(current) => match order.iter().position(|id| id == current) {
                Some(0) | None => last,
                Some(i) => order[i - 1].clone(),
            },
        };

        self.move_to(new_focus)
    }

    fn move_to(&mut self, new_focus: String) -> Option<String> {
        if self.focused.as_ref() == Some(&new_focus) {
            return None;
        }
        log::debug!("[focus] Changing focus from {:?} to {}", self.focused, new_focus);
        self.focused = Some(new_focus.clone());
        Some(new_focus)
    }
}
