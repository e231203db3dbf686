//! Error types for fieldfix-edit.
//!
//! Both enums are plain values: a failed rewrite leaves the input tree exactly as it was.

use fieldfix_syntax::TreeError;
use thiserror::Error;

/// Why a single field could not be encapsulated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncapsulationError {
    /// No field declaration encloses the position, or the declaration has no parent to splice
    /// the replacement into.
    #[error("no field declaration at position {position}")]
    NotAFieldDeclaration { position: usize },

    /// The declaration does not have exactly one declarator and a declared type.
    #[error(
        "unsupported field declaration shape: {declarators} declarator(s){}",
        type_note(.missing_type)
    )]
    UnsupportedDeclarationShape {
        declarators: usize,
        missing_type: bool,
    },

    /// The located declaration could not be replaced in the tree.
    #[error("tree edit failed: {0}")]
    Tree(#[from] TreeError),
}

/// Why a batch of rewrites was rejected as a whole.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BatchError {
    #[error("target at position {position}: {source}")]
    Target {
        position: usize,
        #[source]
        source: EncapsulationError,
    },

    /// Two targets resolve to the same declaration, or one lies inside the other.
    #[error("targets at positions {first} and {second} overlap")]
    OverlappingTargets { first: usize, second: usize },

    #[error("tree edit failed: {0}")]
    Tree(#[from] TreeError),
}

fn type_note(missing_type: &bool) -> &'static str {
    if *missing_type { ", no declared type" } else { "" }
}

impl BatchError {
    pub fn is_overlap(&self) -> bool {
        matches!(self, BatchError::OverlappingTargets { .. })
    }
}
