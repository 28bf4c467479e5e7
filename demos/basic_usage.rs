use rustavl::{render, AvlTree, InvariantResult};

fn main() -> InvariantResult<()> {
    let mut tree: AvlTree<i32> = [9, 5, 10, 0, 6, 11, -1, 1, 2].into_iter().collect();

    println!("In order: {}", render::in_order_line(&tree));
    println!("Outline:\n{}", render::outline(&tree));

    tree.remove(10);
    println!("After removing 10:\n{}", render::outline(&tree));
    println!("Sideways:{}", render::sideways(&tree, render::DEFAULT_INDENT));

    let height = tree.validate()?;
    println!("Height {} with {} keys", height, tree.len());
    println!("Released {} nodes", tree.clear());
    Ok(())
}
