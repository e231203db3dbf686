use crate::cursor::SyntaxNode;
use crate::node::{Node, NodeVector};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("the root node cannot be replaced by a sequence of nodes")]
    RootReplacement,

    #[error("path {path:?} does not address a node in this tree")]
    InvalidPath { path: Vec<usize> },

    #[error("node belongs to a different tree")]
    ForeignNode,
}

/// An immutable syntax tree.
///
/// Cloning is an `Arc` bump. Every edit returns a new tree; the receiver is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    root: Arc<Node>,
}

impl SyntaxTree {
    pub fn new(root: Arc<Node>) -> Self {
        Self { root }
    }

    pub fn from_node(root: Node) -> Self {
        Self::new(Arc::new(root))
    }

    /// Cursor at the root.
    pub fn root(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.root.clone())
    }

    pub fn root_green(&self) -> &Arc<Node> {
        &self.root
    }

    /// Deepest node whose span contains `position`.
    ///
    /// Children without a span are not descended into. Returns `None` when no node covers the
    /// position.
    pub fn token_at(&self, position: usize) -> Option<SyntaxNode> {
        let covers = |n: &SyntaxNode| n.span().is_some_and(|s| s.contains(position));

        let mut current = self.root();
        let mut found = covers(&current).then(|| current.clone());
        loop {
            let next = current.children().find(|c| covers(c));
            match next {
                Some(next) => {
                    found = Some(next.clone());
                    current = next;
                }
                None => return found,
            }
        }
    }

    pub fn node_at_path(&self, path: &[usize]) -> Option<SyntaxNode> {
        let mut node = self.root();
        for &index in path {
            node = node.child(index)?;
        }
        Some(node)
    }

    /// Replace the node at `path` with `replacement` (zero or more nodes spliced into its
    /// parent's child list).
    ///
    /// Only the nodes on the route from the root to the parent are reallocated; all other
    /// subtrees are shared with `self`.
    pub fn replace_at(
        &self,
        path: &[usize],
        replacement: impl IntoIterator<Item = Arc<Node>>,
    ) -> Result<SyntaxTree, TreeError> {
        let Some((&target, parent_path)) = path.split_last() else {
            return Err(TreeError::RootReplacement);
        };
        let invalid = || TreeError::InvalidPath {
            path: path.to_vec(),
        };

        // spine[i] is the node reached after following parent_path[..i].
        let mut spine: Vec<&Arc<Node>> = Vec::with_capacity(path.len());
        spine.push(&self.root);
        for &index in parent_path {
            let last = spine[spine.len() - 1];
            spine.push(last.child(index).ok_or_else(invalid)?);
        }

        let parent = spine[spine.len() - 1];
        if target >= parent.child_count() {
            return Err(invalid());
        }

        let mut replacement = Some(replacement);
        let mut children = NodeVector::new_with_ptr_kind();
        for (i, child) in parent.children().iter().enumerate() {
            if i == target {
                for node in replacement.take().into_iter().flatten() {
                    children.push_back_mut(node);
                }
            } else {
                children.push_back_mut(child.clone());
            }
        }

        let mut rebuilt = Arc::new(parent.with_children(children));
        for (node, &index) in spine.iter().rev().skip(1).zip(parent_path.iter().rev()) {
            let children = node.children().set(index, rebuilt).ok_or_else(invalid)?;
            rebuilt = Arc::new(node.with_children(children));
        }

        Ok(SyntaxTree::new(rebuilt))
    }

    /// [`replace_at`](Self::replace_at) addressed by a cursor obtained from this tree.
    pub fn replace_node(
        &self,
        node: &SyntaxNode,
        replacement: impl IntoIterator<Item = Arc<Node>>,
    ) -> Result<SyntaxTree, TreeError> {
        let top = node.ancestors().last().ok_or(TreeError::ForeignNode)?;
        if !Arc::ptr_eq(top.green(), &self.root) {
            return Err(TreeError::ForeignNode);
        }
        self.replace_at(&node.path(), replacement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory;
    use crate::node::{Modifier, NodeKind, TextSpan};
    use pretty_assertions::assert_eq;

    // class C { public int a; void M() { x; } }
    fn sample() -> SyntaxTree {
        let field = factory::spanned(
            factory::field_declaration(
                &[Modifier::Public],
                factory::spanned(factory::type_ref("int"), TextSpan::new(17, 20)),
                factory::spanned(factory::variable_declarator("a", None), TextSpan::new(21, 22)),
            ),
            TextSpan::new(10, 23),
        );
        let method = factory::spanned(
            factory::method_declaration(
                &[],
                factory::spanned(factory::type_ref("void"), TextSpan::new(24, 28)),
                "M",
                "",
                [factory::spanned(factory::statement("x;"), TextSpan::new(35, 37))],
            ),
            TextSpan::new(24, 39),
        );
        let class = factory::spanned(
            factory::type_declaration("class", "C", &[], [field, method]),
            TextSpan::new(0, 41),
        );
        SyntaxTree::new(factory::spanned(
            factory::compilation_unit([class]),
            TextSpan::new(0, 41),
        ))
    }

    #[test]
    fn token_at_returns_deepest_covering_node() {
        let tree = sample();
        let node = tree.token_at(21).expect("node");
        assert_eq!(node.kind().label(), "variable_declarator");
        assert_eq!(node.path(), vec![0, 0, 1]);

        let node = tree.token_at(12).expect("node");
        assert_eq!(node.kind().label(), "field_declaration");
    }

    #[test]
    fn token_at_outside_every_span_is_none() {
        assert!(sample().token_at(500).is_none());
    }

    #[test]
    fn token_at_does_not_enter_spanless_nodes() {
        // The method block was synthesized without a span, so its statement is unreachable.
        let node = sample().token_at(35).expect("node");
        assert_eq!(node.kind().label(), "method_declaration");
    }

    #[test]
    fn node_at_path_follows_indices() {
        let tree = sample();
        let node = tree.node_at_path(&[0, 1]).expect("method");
        assert_eq!(node.kind().label(), "method_declaration");
        assert!(tree.node_at_path(&[0, 7]).is_none());
    }

    #[test]
    fn replace_at_splices_and_shares_siblings() {
        let tree = sample();
        let before_field = tree.node_at_path(&[0, 0]).expect("field").green().clone();
        let before_method = tree.node_at_path(&[0, 1]).expect("method").green().clone();

        let a = factory::statement("one;");
        let b = factory::statement("two;");
        let edited = tree.replace_at(&[0, 0], [a.clone(), b.clone()]).expect("replace");

        let class = edited.node_at_path(&[0]).expect("class");
        assert_eq!(class.green().child_count(), 3);
        assert!(Arc::ptr_eq(class.child(0).expect("a").green(), &a));
        assert!(Arc::ptr_eq(class.child(1).expect("b").green(), &b));
        assert!(Arc::ptr_eq(
            class.child(2).expect("method").green(),
            &before_method
        ));

        // Spine nodes keep kind and span.
        assert_eq!(class.span(), Some(TextSpan::new(0, 41)));
        assert_eq!(edited.root().span(), Some(TextSpan::new(0, 41)));

        // Input is unchanged.
        assert!(Arc::ptr_eq(
            tree.node_at_path(&[0, 0]).expect("field").green(),
            &before_field
        ));
        assert_eq!(tree.root_green().descendant_count(), 9);
    }

    #[test]
    fn replace_at_with_nothing_removes_the_node() {
        let edited = sample()
            .replace_at(&[0, 0], std::iter::empty())
            .expect("replace");
        let class = edited.node_at_path(&[0]).expect("class");
        assert_eq!(class.green().child_count(), 1);
        assert!(matches!(
            class.child(0).expect("method").kind(),
            NodeKind::MethodDeclaration { .. }
        ));
    }

    #[test]
    fn replace_at_rejects_root_and_bad_paths() {
        let tree = sample();
        assert_eq!(
            tree.replace_at(&[], std::iter::empty()),
            Err(TreeError::RootReplacement)
        );
        assert_eq!(
            tree.replace_at(&[0, 9], std::iter::empty()),
            Err(TreeError::InvalidPath { path: vec![0, 9] })
        );
        assert_eq!(
            tree.replace_at(&[3, 0], std::iter::empty()),
            Err(TreeError::InvalidPath { path: vec![3, 0] })
        );
    }

    #[test]
    fn replace_node_rejects_cursor_from_another_tree() {
        let tree = sample();
        let other = sample();
        let node = other.node_at_path(&[0, 0]).expect("field");
        assert_eq!(
            tree.replace_node(&node, std::iter::empty()),
            Err(TreeError::ForeignNode)
        );

        let own = tree.node_at_path(&[0, 0]).expect("field");
        assert!(tree.replace_node(&own, std::iter::empty()).is_ok());
    }
}
