//! Property-based tests for backing-field and property naming.

use fieldfix_edit::derive_names;
use proptest::prelude::*;

proptest! {
    #[test]
    fn backing_field_is_underscore_prefixed(name in "_{0,3}[A-Za-z][A-Za-z0-9_]{0,10}") {
        let names = derive_names(&name);
        prop_assert!(names.field.starts_with('_'));
        prop_assert!(!names.property.starts_with('_'));
        prop_assert_eq!(
            names.field[1..].to_ascii_lowercase(),
            names.property.to_ascii_lowercase()
        );
    }

    #[test]
    fn derivation_is_idempotent(name in "_{0,3}[A-Za-z][A-Za-z0-9_]{0,10}") {
        let once = derive_names(&name);
        let again = derive_names(&once.field);
        prop_assert_eq!(&again, &once);
        prop_assert_eq!(derive_names(&once.property).property, once.property);
    }

    #[test]
    fn underscores_only_fall_back(n in 1usize..6) {
        let names = derive_names(&"_".repeat(n));
        prop_assert_eq!(names.field, "_field");
        prop_assert_eq!(names.property, "Field");
    }
}
