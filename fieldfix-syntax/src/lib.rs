//! Persistent syntax trees for fieldfix.
//!
//! Trees are built from immutable `Arc<Node>` values whose children live in a persistent vector.
//! Editing a tree never mutates it: [`SyntaxTree::replace_at`] rebuilds only the path from the
//! root to the edited parent and shares every other subtree with the input.
//!
//! Nodes carry no parent pointers. [`SyntaxNode`] is a cursor that remembers how it was reached,
//! which is what ancestor walks use.

mod ast;
mod cursor;
pub mod factory;
mod node;
mod tree;
pub mod wire;

pub use ast::{
    Accessor, AstNode, Block, FieldDeclaration, MethodDeclaration, PropertyDeclaration,
    TypeDeclaration, VariableDeclarator, find_ancestor_of_type,
};
pub use cursor::SyntaxNode;
pub use node::{AccessorKind, Modifier, Node, NodeKind, NodeVector, TextSpan};
pub use tree::{SyntaxTree, TreeError};
pub use wire::NodeWire;
