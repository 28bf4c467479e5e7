use rustavl::{render, AvlTree};

#[test]
fn in_order_line_separates_with_spaces() {
    let tree: AvlTree<i64> = [30, -5, 10].into_iter().collect();
    assert_eq!(render::in_order_line(&tree), "-5 10 30");
    assert_eq!(render::in_order_line(&AvlTree::<i64>::new()), "");
}

#[test]
fn sideways_puts_right_subtree_on_top() {
    let tree: AvlTree<i64> = [10, 20, 30].into_iter().collect();
    assert_eq!(
        render::sideways(&tree, 4),
        "\n    30\n\n20\n\n    10\n"
    );
}

#[test]
fn sideways_default_indent() {
    let tree: AvlTree<i64> = [1, 2].into_iter().collect();
    let expected = format!("\n{}2\n\n1\n", " ".repeat(render::DEFAULT_INDENT));
    assert_eq!(render::sideways(&tree, render::DEFAULT_INDENT), expected);
}

#[test]
fn outline_shows_heights() {
    let tree: AvlTree<i64> = [10, 20, 30, 40].into_iter().collect();
    assert_eq!(
        render::outline(&tree),
        "R- [20] height:3\n   L- [10] height:1\n   R- [30] height:2\n      R- [40] height:1\n"
    );
}

#[test]
fn empty_tree_renders_nothing() {
    let tree = AvlTree::<i64>::new();
    assert!(render::sideways(&tree, 10).is_empty());
    assert!(render::outline(&tree).is_empty());
}

#[test]
fn sideways_clamps_oversized_indent() {
    let tree: AvlTree<i64> = [10, 20, 30].into_iter().collect();
    assert_eq!(
        render::sideways(&tree, usize::MAX),
        render::sideways(&tree, render::MAX_INDENT)
    );
}
