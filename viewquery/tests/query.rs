use viewquery::{
    Element, LEAVES, QueryError, QueryFilter, QuerySorter, SortByKey, VISIBLE, Verdict, View,
    ViewQuery,
};

fn ids<'a>(views: &[&'a Element]) -> Vec<&'a str> {
    views.iter().map(|el| el.id.as_str()).collect()
}

/// A(B, C(D, E))
fn abcde() -> Element {
    Element::box_()
        .id("A")
        .child(Element::box_().id("B"))
        .child(
            Element::box_()
                .id("C")
                .child(Element::box_().id("D"))
                .child(Element::box_().id("E")),
        )
}

fn sample_trees() -> Vec<Element> {
    vec![
        Element::box_().id("single"),
        abcde(),
        Element::box_()
            .id("root")
            .child(
                Element::box_()
                    .id("l1")
                    .child(Element::box_().id("l2").child(Element::text("l3").id("l3"))),
            )
            .child(Element::button("ok").id("ok"))
            .child(
                Element::box_()
                    .id("wide")
                    .children((0..5).map(|i| Element::text(format!("t{i}")).id(format!("t{i}")))),
            ),
    ]
}

fn preorder(el: &Element) -> Vec<&str> {
    let mut out = vec![el.id.as_str()];
    for child in &el.children {
        out.extend(preorder(child));
    }
    out
}

fn leaves(el: &Element) -> Vec<&str> {
    if el.children.is_empty() {
        return vec![el.id.as_str()];
    }
    el.children.iter().flat_map(leaves).collect()
}

/// Selects every view, and stops descent at the named one.
struct StopAt(&'static str);

impl QueryFilter<Element> for StopAt {
    fn evaluate(&self, view: &Element, _children: &[&Element]) -> Verdict {
        Verdict::new(true, view.id != self.0)
    }
}

/// Rejects the named view on both counts, accepts everything else.
struct RejectAt(&'static str);

impl QueryFilter<Element> for RejectAt {
    fn evaluate(&self, view: &Element, _children: &[&Element]) -> Verdict {
        if view.id == self.0 {
            Verdict::REJECT
        } else {
            Verdict::ACCEPT
        }
    }
}

/// Skips the named view itself but still descends into it.
struct SkipSelf(&'static str);

impl QueryFilter<Element> for SkipSelf {
    fn evaluate(&self, view: &Element, _children: &[&Element]) -> Verdict {
        Verdict::new(view.id != self.0, true)
    }
}

struct Always;

impl QueryFilter<Element> for Always {
    fn evaluate(&self, _view: &Element, _children: &[&Element]) -> Verdict {
        Verdict::ACCEPT
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_no_filters_flattens_preorder() {
    let root = abcde();
    let result = ViewQuery::new().run(&root);
    assert_eq!(ids(&result), ["A", "B", "C", "D", "E"]);
}

#[test]
fn test_leaves_post_filter() {
    let root = abcde();
    let result = ViewQuery::new().post_filter(&LEAVES).run(&root);
    assert_eq!(ids(&result), ["B", "D", "E"]);
}

#[test]
fn test_visible_pre_filter_prunes_hidden_subtree() {
    let root = Element::box_()
        .id("A")
        .child(
            Element::box_()
                .id("B")
                .visible(false)
                .child(Element::box_().id("X")),
        )
        .child(Element::box_().id("C"));

    let result = ViewQuery::new().pre_filter(&VISIBLE).run(&root);
    assert_eq!(ids(&result), ["A", "C"]);
}

#[test]
fn test_single_view_tree() {
    let root = Element::box_().id("only");
    assert_eq!(ids(&ViewQuery::new().run(&root)), ["only"]);
    assert_eq!(ids(&ViewQuery::new().post_filter(&LEAVES).run(&root)), ["only"]);
}

// ============================================================================
// Laws
// ============================================================================

#[test]
fn test_identity_law() {
    for tree in sample_trees() {
        let result = ViewQuery::new().run(&tree);
        assert_eq!(ids(&result), preorder(&tree), "tree {}", tree.id);
    }
}

#[test]
fn test_leaf_law() {
    for tree in sample_trees() {
        let result = ViewQuery::new().post_filter(&LEAVES).run(&tree);
        assert_eq!(ids(&result), leaves(&tree), "tree {}", tree.id);
    }
}

#[test]
fn test_pruning_law() {
    let root = abcde();
    let prune = StopAt("C");
    let result = ViewQuery::new()
        .pre_filter(&prune)
        .post_filter(&LEAVES)
        .run(&root);

    // C is not descended into, so it looks like a leaf to the post filter,
    // and neither D nor E can be selected.
    assert_eq!(ids(&result), ["B", "C"]);
}

#[test]
fn test_veto_keeps_selected_view_drops_descendants() {
    let root = abcde();
    let veto = StopAt("C");
    let result = ViewQuery::new().post_filter(&veto).run(&root);
    assert_eq!(ids(&result), ["A", "B", "C"]);
}

#[test]
fn test_veto_without_selection_drops_everything() {
    let root = abcde();
    let veto = RejectAt("C");
    let result = ViewQuery::new().post_filter(&veto).run(&root);
    assert_eq!(ids(&result), ["A", "B"]);
}

#[test]
fn test_veto_at_root_returns_only_root() {
    let root = abcde();
    let veto = StopAt("A");
    let result = ViewQuery::new().post_filter(&veto).run(&root);
    assert_eq!(ids(&result), ["A"]);
}

#[test]
fn test_reject_at_pre_filter_drops_subtree() {
    let root = abcde();
    let reject = RejectAt("C");
    let result = ViewQuery::new().pre_filter(&reject).run(&root);
    assert_eq!(ids(&result), ["A", "B"]);
}

#[test]
fn test_conjunction_law() {
    let always = Always;
    for tree in sample_trees() {
        let alone = ViewQuery::new().post_filter(&LEAVES).run(&tree);
        let with_neutral = ViewQuery::new()
            .post_filter(&always)
            .post_filter(&LEAVES)
            .run(&tree);
        assert_eq!(ids(&alone), ids(&with_neutral));
    }
}

#[test]
fn test_views_appear_once() {
    for tree in sample_trees() {
        let result = ViewQuery::new().run(&tree);
        let mut seen = ids(&result);
        let total = seen.len();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), total);
    }
}

// ============================================================================
// Pre- vs post-filter inputs
// ============================================================================

#[test]
fn test_pre_filter_sees_raw_children() {
    // B's only child is hidden. After descent B has no results, but its raw
    // child list is not empty.
    let root = Element::box_().id("A").child(
        Element::box_()
            .id("B")
            .child(Element::box_().id("X").visible(false)),
    );

    let post = ViewQuery::new()
        .post_filter(&LEAVES)
        .post_filter(&VISIBLE)
        .run(&root);
    assert_eq!(ids(&post), ["B"]);

    let pre = ViewQuery::new()
        .pre_filter(&LEAVES)
        .post_filter(&VISIBLE)
        .run(&root);
    assert!(pre.is_empty());
}

#[test]
fn test_pre_filter_selection_skips_view_keeps_subtree() {
    let root = Element::box_()
        .id("A")
        .child(Element::box_().id("B").child(Element::box_().id("X")))
        .child(Element::box_().id("C"));

    let skip = SkipSelf("B");
    let result = ViewQuery::new().pre_filter(&skip).run(&root);
    assert_eq!(ids(&result), ["A", "X", "C"]);

    // The post chain selecting B does not bring it back.
    let always = Always;
    let result = ViewQuery::new()
        .pre_filter(&skip)
        .post_filter(&always)
        .run(&root);
    assert_eq!(ids(&result), ["A", "X", "C"]);
}

// ============================================================================
// Sorting
// ============================================================================

fn grouped() -> Element {
    Element::box_()
        .id("root")
        .child(Element::box_().id("c").tab_group(2))
        .child(
            Element::box_()
                .id("a")
                .tab_group(0)
                .child(Element::box_().id("a2").tab_group(1))
                .child(Element::box_().id("a1").tab_group(0)),
        )
        .child(Element::box_().id("b").tab_group(1))
}

#[test]
fn test_sorter_reorders_sibling_results() {
    let root = grouped();
    let by_group = SortByKey::new(|el: &Element| el.tab_group);
    let result = ViewQuery::new().sorter(&by_group).run(&root);

    // Under "a": [a2, a1] sorts to [a1, a2]; "a" stays ahead of them.
    // Under root: [c, a, a1, a2, b] sorts stably by group.
    assert_eq!(ids(&result), ["root", "a", "a1", "a2", "b", "c"]);
}

#[test]
fn test_no_sorter_keeps_child_order() {
    let root = grouped();
    let result = ViewQuery::new().run(&root);
    assert_eq!(ids(&result), ["root", "c", "a", "a2", "a1", "b"]);
}

#[test]
fn test_sorter_idempotence() {
    let root = grouped();
    let by_group = SortByKey::new(|el: &Element| el.tab_group);

    let mut once: Vec<&Element> = root.children.iter().collect();
    by_group.sort(&root, &mut once[..]);

    let mut twice = once.clone();
    by_group.sort(&root, &mut twice[..]);

    assert_eq!(ids(&once), ids(&twice));
    assert_eq!(ids(&once), ["a", "b", "c"]);
}

// ============================================================================
// Child sources
// ============================================================================

#[test]
fn test_child_source_override() {
    let root = abcde();
    let query = ViewQuery::new()
        .with_children_fn(|el: &Element| el.children.iter().rev().collect());
    assert!(query.has_child_source());
    assert_eq!(ids(&query.run(&root)), ["A", "C", "E", "D", "B"]);
}

#[test]
fn test_child_source_restricts_relation() {
    // Only walk the first child, like the active page of a tab container.
    let root = abcde();
    let query = ViewQuery::new()
        .with_children_fn(|el: &Element| el.children.iter().take(1).collect());
    assert_eq!(ids(&query.run(&root)), ["A", "B"]);
}

#[test]
fn test_child_source_feeds_leaves_filter() {
    let root = abcde();
    let query = ViewQuery::new()
        .post_filter(&LEAVES)
        .with_children_fn(|el: &Element| el.children.iter().skip(1).collect());
    // A -> C -> E only.
    assert_eq!(ids(&query.run(&root)), ["E"]);
}

// ============================================================================
// Configuration and entry points
// ============================================================================

#[test]
fn test_accessors() {
    let by_group = SortByKey::new(|el: &Element| el.tab_group);
    let query = ViewQuery::new()
        .pre_filter(&VISIBLE)
        .post_filter(&LEAVES)
        .post_filter(&VISIBLE)
        .sorter(&by_group);

    assert_eq!(query.pre_filters().len(), 1);
    assert_eq!(query.post_filters().len(), 2);
    assert!(query.get_sorter().is_some());
    assert!(!query.has_child_source());

    let empty: ViewQuery<'_, Element> = ViewQuery::new();
    assert!(empty.pre_filters().is_empty());
    assert!(empty.get_sorter().is_none());
}

#[test]
fn test_run_from_named_view() {
    let root = abcde();
    let result = ViewQuery::new().run_from(&root, "C").unwrap();
    assert_eq!(ids(&result), ["C", "D", "E"]);
}

#[test]
fn test_run_from_unknown_view() {
    let root = abcde();
    let err = ViewQuery::new().run_from(&root, "Z").unwrap_err();
    assert_eq!(err, QueryError::ViewNotFound("Z".to_string()));
    assert_eq!(err.to_string(), "view not found: Z");
}

#[test]
fn test_query_is_reusable() {
    let query = ViewQuery::new().post_filter(&LEAVES);
    let first = abcde();
    let second = Element::box_().id("solo");

    assert_eq!(ids(&query.run(&first)), ["B", "D", "E"]);
    assert_eq!(ids(&query.run(&second)), ["solo"]);
    assert_eq!(ids(&query.run(&first)), ["B", "D", "E"]);
}

#[test]
fn test_shared_across_threads() {
    let root = abcde();
    let query = ViewQuery::new().post_filter(&LEAVES);

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| ids(&query.run(&root)).join(",")))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "B,D,E");
        }
    });
}

#[test]
fn test_view_trait_on_element() {
    let root = abcde();
    assert_eq!(root.name(), "A");
    assert_eq!(View::children(&root).len(), 2);
}
