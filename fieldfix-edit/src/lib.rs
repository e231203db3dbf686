//! Rewrite engine: turn a public field into a private backing field plus a property.
//!
//! Every operation takes a [`SyntaxTree`](fieldfix_syntax::SyntaxTree) by reference and returns a
//! new one; inputs are never modified and nothing here touches the file system.

mod batch;
mod encapsulate;
mod error;
mod naming;
mod patch;

pub use batch::{FixOutcome, ViolationFix, encapsulate_all, fix_violations};
pub use encapsulate::{
    EncapsulateOptions, EncapsulationPlan, encapsulate, encapsulate_with, plan_encapsulation,
};
pub use error::{BatchError, EncapsulationError};
pub use naming::{DerivedNames, derive_names};
pub use patch::render_patch;
