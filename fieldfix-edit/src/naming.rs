/// Names chosen for the rewritten members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedNames {
    /// Private backing field, always `_`-prefixed.
    pub field: String,
    /// Public property.
    pub property: String,
}

/// Derive backing-field and property names from a field name.
///
/// Leading underscores are stripped first. `Score` gives `_score`/`Score`, `_count` gives
/// `_count`/`Count`, and a name made only of underscores gives `_field`/`Field`.
pub fn derive_names(original: &str) -> DerivedNames {
    let base = original.trim_start_matches('_');
    if base.is_empty() {
        return DerivedNames {
            field: "_field".to_string(),
            property: "Field".to_string(),
        };
    }

    DerivedNames {
        field: format!("_{}", map_first(base, char::to_lowercase)),
        property: map_first(base, char::to_uppercase),
    }
}

/// Case-map the first character, keeping it as is when the mapping is not one-to-one.
fn map_first<I>(s: &str, f: impl Fn(char) -> I) -> String
where
    I: Iterator<Item = char>,
{
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut mapped = f(first);
    let first = match (mapped.next(), mapped.next()) {
        (Some(single), None) => single,
        _ => first,
    };
    std::iter::once(first).chain(chars).collect()
}
