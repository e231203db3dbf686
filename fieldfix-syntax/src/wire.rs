//! Serialized form of a tree, as exchanged in unit files.
//!
//! ```json
//! { "kind": "field_declaration", "modifiers": ["public"], "span": { "start": 10, "end": 23 },
//!   "children": [ { "kind": "type_ref", "name": "int" },
//!                 { "kind": "variable_declarator", "name": "a" } ] }
//! ```

use crate::node::{Node, NodeKind, TextSpan};
use crate::tree::SyntaxTree;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeWire {
    #[serde(flatten)]
    pub kind: NodeKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<TextSpan>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeWire>,
}

impl NodeWire {
    pub fn to_node(&self) -> Arc<Node> {
        Arc::new(Node::new(
            self.kind.clone(),
            self.span,
            self.children.iter().map(NodeWire::to_node),
        ))
    }

    pub fn from_node(node: &Node) -> Self {
        Self {
            kind: node.kind().clone(),
            span: node.span(),
            children: node
                .children()
                .iter()
                .map(|c| NodeWire::from_node(c))
                .collect(),
        }
    }
}

impl SyntaxTree {
    pub fn from_wire(wire: &NodeWire) -> Self {
        SyntaxTree::new(wire.to_node())
    }

    pub fn to_wire(&self) -> NodeWire {
        NodeWire::from_node(self.root_green())
    }
}
