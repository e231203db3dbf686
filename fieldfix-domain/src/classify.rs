use fieldfix_types::{FieldMetadata, MemberKind, Violation};

/// Report `field` if it is a public, mutable, non-polymorphic instance field.
///
/// Any one of const, static, abstract, virtual, override, readonly, sealed or extern exempts the
/// field, as does any accessibility other than `public`.
pub fn classify(field: &FieldMetadata) -> Option<Violation> {
    let exempt = field.is_const
        || field.is_static
        || field.is_abstract
        || field.is_virtual
        || field.is_override
        || field.is_read_only
        || field.is_sealed
        || field.is_extern;

    if !field.accessibility.is_public() || exempt {
        return None;
    }

    Some(Violation {
        name: field.name.clone(),
        location: field.location.clone(),
    })
}

/// Classify every field among `members`, in the order given.
pub fn classify_members(members: &[MemberKind]) -> Vec<Violation> {
    members
        .iter()
        .filter_map(MemberKind::as_field)
        .filter_map(classify)
        .collect()
}
