//! Rendering helpers: source text for trees, markdown for reports.

mod markdown;
mod source;

pub use markdown::{render_check_md, render_fix_md};
pub use source::render_source;
