extern crate optree;

use std::env;

use optree::tree::OpTree;

fn main() {
    let expr = env::args().skip(1).collect::<Vec<_>>().join(" ");
    println!("Expression: {}", expr);

    let tree = OpTree::parse(&expr);
    if tree.is_empty() {
        println!("(empty tree)");
        return;
    }

    println!("Postfix:    {}", tree.postfix());
    println!("Infix:      {}", tree.infix());
    println!("Value:      {}", tree.eval());

    // walk the tree one position at a time, showing the partial expression
    // and its value at each step
    println!("Walk:");
    for at in tree.positions() {
        let mut infix = String::new();
        let mut postfix = String::new();
        tree.print_at(&mut infix, false, at).unwrap();
        tree.print_at(&mut postfix, true, at).unwrap();
        println!(
            "  {} | {} = {}",
            infix,
            postfix.trim_end(),
            tree.eval_at(at)
        );
    }
}
