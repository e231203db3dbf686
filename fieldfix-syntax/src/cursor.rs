use crate::node::{Node, NodeKind, TextSpan};
use std::fmt;
use std::sync::Arc;

/// A node together with the route used to reach it from the root.
///
/// Cheap to clone. Parent links point at other cursors, never into the green nodes, so the same
/// `Arc<Node>` can be shared by many trees.
#[derive(Clone)]
pub struct SyntaxNode {
    data: Arc<CursorData>,
}

struct CursorData {
    green: Arc<Node>,
    parent: Option<SyntaxNode>,
    index: usize,
}

impl SyntaxNode {
    pub(crate) fn new_root(green: Arc<Node>) -> Self {
        Self {
            data: Arc::new(CursorData {
                green,
                parent: None,
                index: 0,
            }),
        }
    }

    pub fn green(&self) -> &Arc<Node> {
        &self.data.green
    }

    pub fn kind(&self) -> &NodeKind {
        self.data.green.kind()
    }

    pub fn span(&self) -> Option<TextSpan> {
        self.data.green.span()
    }

    pub fn parent(&self) -> Option<SyntaxNode> {
        self.data.parent.clone()
    }

    /// Position among the parent's children; 0 for the root.
    pub fn index(&self) -> usize {
        self.data.index
    }

    pub fn child(&self, index: usize) -> Option<SyntaxNode> {
        let green = self.data.green.child(index)?.clone();
        Some(SyntaxNode {
            data: Arc::new(CursorData {
                green,
                parent: Some(self.clone()),
                index,
            }),
        })
    }

    pub fn children(&self) -> impl Iterator<Item = SyntaxNode> + '_ {
        (0..self.data.green.child_count()).filter_map(move |i| self.child(i))
    }

    /// This node, then its parent, up to the root.
    pub fn ancestors(&self) -> impl Iterator<Item = SyntaxNode> {
        std::iter::successors(Some(self.clone()), SyntaxNode::parent)
    }

    /// Child indices leading from the root to this node.
    pub fn path(&self) -> Vec<usize> {
        let mut path: Vec<usize> = self
            .ancestors()
            .filter(|n| n.data.parent.is_some())
            .map(|n| n.data.index)
            .collect();
        path.reverse();
        path
    }

    pub fn depth(&self) -> usize {
        self.ancestors().count() - 1
    }
}

// Unwinds the parent chain in a loop; the default drop recurses once per ancestor.
impl Drop for CursorData {
    fn drop(&mut self) {
        let mut parent = self.parent.take();
        while let Some(node) = parent {
            parent = Arc::into_inner(node.data).and_then(|mut data| data.parent.take());
        }
    }
}

impl fmt::Debug for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyntaxNode")
            .field("kind", &self.kind().label())
            .field("span", &self.span())
            .field("index", &self.data.index)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory;

    #[test]
    fn path_and_depth_follow_child_indices() {
        let ty = factory::type_ref("int");
        let field = factory::field_declaration(
            &[crate::Modifier::Public],
            ty,
            factory::variable_declarator("a", None),
        );
        let method = factory::method_declaration(
            &[],
            factory::type_ref("void"),
            "Reset",
            "",
            [factory::statement("a = 0;")],
        );
        let class = factory::type_declaration("class", "C", &[], [method, field]);
        let root = SyntaxNode::new_root(factory::compilation_unit([class]));

        let declarator = root
            .child(0)
            .and_then(|c| c.child(1))
            .and_then(|f| f.child(1))
            .expect("declarator");
        assert_eq!(declarator.path(), vec![0, 1, 1]);
        assert_eq!(declarator.depth(), 3);
        assert_eq!(root.path(), Vec::<usize>::new());

        let kinds: Vec<&str> = declarator.ancestors().map(|n| n.kind().label()).collect();
        assert_eq!(
            kinds,
            vec![
                "variable_declarator",
                "field_declaration",
                "type_declaration",
                "compilation_unit"
            ]
        );
    }
}
