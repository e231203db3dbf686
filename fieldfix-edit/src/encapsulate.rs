use crate::error::EncapsulationError;
use crate::naming::{DerivedNames, derive_names};
use fieldfix_syntax::{
    AccessorKind, AstNode, FieldDeclaration, Modifier, Node, SyntaxTree, factory,
    find_ancestor_of_type,
};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncapsulateOptions {
    /// Carry the original declarator's initializer over to the backing field.
    pub preserve_initializer: bool,
}

impl Default for EncapsulateOptions {
    fn default() -> Self {
        Self {
            preserve_initializer: true,
        }
    }
}

/// A located field declaration and the nodes that will replace it.
#[derive(Debug, Clone)]
pub struct EncapsulationPlan {
    /// Position the rewrite was requested at.
    pub position: usize,
    /// Child-index path of the field declaration from the root.
    pub path: Vec<usize>,
    pub original_name: String,
    pub names: DerivedNames,
    /// `private T _name;`
    pub field: Arc<Node>,
    /// `public T Name { get { return _name; } set { _name = value; } }`
    pub property: Arc<Node>,
}

impl EncapsulationPlan {
    pub fn replacement(&self) -> [Arc<Node>; 2] {
        [self.field.clone(), self.property.clone()]
    }
}

/// Locate the field declaration enclosing `position` and build its replacement.
///
/// Nothing is applied; the plan can be committed with [`SyntaxTree::replace_at`] or batched with
/// other plans.
pub fn plan_encapsulation(
    tree: &SyntaxTree,
    position: usize,
    opts: &EncapsulateOptions,
) -> Result<EncapsulationPlan, EncapsulationError> {
    let not_a_field = EncapsulationError::NotAFieldDeclaration { position };

    let token = tree.token_at(position).ok_or(not_a_field.clone())?;
    let decl: FieldDeclaration = find_ancestor_of_type(&token).ok_or(not_a_field.clone())?;
    if decl.syntax().parent().is_none() {
        return Err(not_a_field);
    }

    let declarators: Vec<_> = decl.declarators().collect();
    let declared_type = decl.declared_type();
    let (Some(ty), [declarator]) = (declared_type.as_ref(), declarators.as_slice()) else {
        return Err(EncapsulationError::UnsupportedDeclarationShape {
            declarators: declarators.len(),
            missing_type: declared_type.is_none(),
        });
    };

    let names = derive_names(declarator.name());
    let initializer = if opts.preserve_initializer {
        declarator.initializer()
    } else {
        None
    };

    let field = factory::field_declaration(
        &[Modifier::Private],
        ty.green().clone(),
        factory::variable_declarator(&names.field, initializer),
    );
    let property = factory::property_declaration(
        &[Modifier::Public],
        ty.green().clone(),
        &names.property,
        [
            factory::accessor(
                AccessorKind::Get,
                [factory::return_statement(&names.field)],
            ),
            factory::accessor(
                AccessorKind::Set,
                [factory::assignment_statement(&names.field, "value")],
            ),
        ],
    );

    Ok(EncapsulationPlan {
        position,
        path: decl.syntax().path(),
        original_name: declarator.name().to_string(),
        names,
        field,
        property,
    })
}

/// Replace the field declaration enclosing `target_position` with a private backing field and a
/// public property, keeping the original initializer.
pub fn encapsulate(
    tree: &SyntaxTree,
    target_position: usize,
) -> Result<SyntaxTree, EncapsulationError> {
    encapsulate_with(tree, target_position, &EncapsulateOptions::default())
}

pub fn encapsulate_with(
    tree: &SyntaxTree,
    target_position: usize,
    opts: &EncapsulateOptions,
) -> Result<SyntaxTree, EncapsulationError> {
    let plan = plan_encapsulation(tree, target_position, opts)?;
    Ok(tree.replace_at(&plan.path, plan.replacement())?)
}
