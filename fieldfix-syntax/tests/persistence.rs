//! Structural sharing and ancestor lookup through the public API.

use fieldfix_syntax::{
    AstNode, FieldDeclaration, Modifier, NodeKind, NodeWire, SyntaxTree, TextSpan, TypeDeclaration,
    factory, find_ancestor_of_type,
};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn field(name: &str, start: usize) -> Arc<fieldfix_syntax::Node> {
    factory::spanned(
        factory::field_declaration(
            &[Modifier::Public],
            factory::spanned(factory::type_ref("int"), TextSpan::new(start + 7, start + 10)),
            factory::spanned(
                factory::variable_declarator(name, None),
                TextSpan::new(start + 11, start + 12),
            ),
        ),
        TextSpan::new(start, start + 13),
    )
}

fn two_classes() -> SyntaxTree {
    let first = factory::spanned(
        factory::type_declaration("class", "A", &[], [field("a", 10), field("b", 30)]),
        TextSpan::new(0, 50),
    );
    let second = factory::spanned(
        factory::type_declaration("class", "B", &[], [field("c", 60)]),
        TextSpan::new(50, 80),
    );
    SyntaxTree::new(factory::spanned(
        factory::compilation_unit([first, second]),
        TextSpan::new(0, 80),
    ))
}

#[test]
fn editing_one_class_shares_the_other() {
    let tree = two_classes();
    let untouched = tree.node_at_path(&[1]).expect("class B").green().clone();
    let sibling = tree.node_at_path(&[0, 1]).expect("field b").green().clone();

    let edited = tree
        .replace_at(&[0, 0], [factory::statement("x;")])
        .expect("replace");

    assert!(Arc::ptr_eq(
        edited.node_at_path(&[1]).expect("class B").green(),
        &untouched
    ));
    assert!(Arc::ptr_eq(
        edited.node_at_path(&[0, 1]).expect("field b").green(),
        &sibling
    ));
    assert!(!Arc::ptr_eq(edited.root_green(), tree.root_green()));
    assert_eq!(tree, two_classes());
}

#[test]
fn position_resolves_to_enclosing_field_and_type() {
    let tree = two_classes();
    let token = tree.token_at(71).expect("token");
    assert!(matches!(token.kind(), NodeKind::VariableDeclarator { name, .. } if name == "c"));

    let field: FieldDeclaration = find_ancestor_of_type(&token).expect("field");
    assert_eq!(field.syntax().path(), vec![1, 0]);

    let class: TypeDeclaration = find_ancestor_of_type(&token).expect("class");
    assert_eq!(class.name(), "B");
}

#[test]
fn wire_form_keeps_spans() {
    let tree = two_classes();
    let json = serde_json::to_string(&tree.to_wire()).expect("serialize");
    let wire: NodeWire = serde_json::from_str(&json).expect("deserialize");
    let back = SyntaxTree::from_wire(&wire);
    assert_eq!(back, tree);
    assert_eq!(
        back.token_at(31).map(|n| n.kind().label()),
        Some("field_declaration")
    );
}

#[test]
fn trees_can_be_shared_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SyntaxTree>();
    assert_send_sync::<fieldfix_syntax::SyntaxNode>();

    let tree = two_classes();
    let handles: Vec<_> = [21usize, 41, 71]
        .into_iter()
        .map(|pos| {
            let tree = tree.clone();
            std::thread::spawn(move || {
                tree.token_at(pos)
                    .and_then(|n| find_ancestor_of_type::<FieldDeclaration>(&n))
                    .is_some()
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().expect("thread"));
    }
}

// field_declaration > block > block > ... > statement, every node covering offset 0.
fn deeply_nested(depth: usize) -> SyntaxTree {
    let span = Some(TextSpan::new(0, 1));
    let mut node = Arc::new(fieldfix_syntax::Node::leaf(
        NodeKind::Statement {
            text: "x = 1;".to_string(),
        },
        span,
    ));
    for _ in 0..depth {
        node = Arc::new(fieldfix_syntax::Node::new(NodeKind::Block, span, [node]));
    }
    let field = Arc::new(fieldfix_syntax::Node::new(
        NodeKind::FieldDeclaration {
            modifiers: vec![Modifier::Public],
        },
        span,
        [node],
    ));
    SyntaxTree::new(factory::compilation_unit([field]))
}

#[test]
fn deep_trees_walk_and_drop_without_recursion() {
    let tree = deeply_nested(100_000);

    let leaf = tree.token_at(0).expect("leaf");
    assert_eq!(leaf.kind().label(), "statement");
    let decl = find_ancestor_of_type::<FieldDeclaration>(&leaf).expect("field declaration");
    assert_eq!(decl.syntax().path(), vec![0]);

    drop(decl);
    drop(leaf);
    drop(tree);
}

#[test]
fn dropping_a_deep_tree_keeps_shared_subtrees_alive() {
    let tree = deeply_nested(100_000);
    let inner = tree
        .node_at_path(&[0, 0])
        .map(|n| n.green().clone())
        .expect("outer block");
    drop(tree);
    assert_eq!(inner.kind().label(), "block");
    assert_eq!(inner.child_count(), 1);
}
