use diffy::PatchFormatter;

/// Unified diff between two renderings of `path`, with git-style headers.
///
/// Returns an empty string when the texts are equal.
pub fn render_patch(path: &str, before: &str, after: &str) -> String {
    if before == after {
        return String::new();
    }

    let mut out = String::new();
    out.push_str(&format!("diff --git a/{0} b/{0}\n", path));
    out.push_str(&format!("--- a/{0}\n+++ b/{0}\n", path));

    let patch = diffy::create_patch(before, after);
    let formatted = PatchFormatter::new().fmt_patch(&patch).to_string();
    // diffy emits its own `---`/`+++` pair ahead of the hunks.
    let hunks = formatted
        .lines()
        .skip_while(|l| l.starts_with("--- ") || l.starts_with("+++ "));
    for line in hunks {
        out.push_str(line);
        out.push('\n');
    }
    out
}
