use fieldfix_syntax::{Modifier, Node, NodeKind, SyntaxTree};

const INDENT: &str = "    ";

/// Render a tree as C#-style source text.
///
/// Layout is canonical (Allman braces, four-space indent), not the layout of the original file,
/// so renderings of two trees can be diffed line by line.
pub fn render_source(tree: &SyntaxTree) -> String {
    let mut out = String::new();
    write_node(&mut out, tree.root_green(), 0);
    out
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    let pad = INDENT.repeat(depth);
    match node.kind() {
        NodeKind::CompilationUnit => {
            for (i, child) in node.children().iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                write_node(out, child, depth);
            }
        }
        NodeKind::NamespaceDeclaration { name } => {
            out.push_str(&format!("{pad}namespace {name}\n{pad}{{\n"));
            write_members(out, node, depth + 1);
            out.push_str(&format!("{pad}}}\n"));
        }
        NodeKind::TypeDeclaration {
            keyword,
            name,
            modifiers,
        } => {
            out.push_str(&format!(
                "{pad}{}{keyword} {name}\n{pad}{{\n",
                modifier_prefix(modifiers)
            ));
            write_members(out, node, depth + 1);
            out.push_str(&format!("{pad}}}\n"));
        }
        NodeKind::FieldDeclaration { modifiers } => {
            let declarators: Vec<String> = node
                .children()
                .iter()
                .filter_map(|c| declarator_text(c))
                .collect();
            out.push_str(&format!(
                "{pad}{}{}{};\n",
                modifier_prefix(modifiers),
                type_prefix(node),
                declarators.join(", ")
            ));
        }
        NodeKind::PropertyDeclaration { modifiers, name } => {
            out.push_str(&format!(
                "{pad}{}{}{name}\n{pad}{{\n",
                modifier_prefix(modifiers),
                type_prefix(node)
            ));
            for child in node.children().iter() {
                if matches!(child.kind(), NodeKind::Accessor { .. }) {
                    write_node(out, child, depth + 1);
                }
            }
            out.push_str(&format!("{pad}}}\n"));
        }
        NodeKind::Accessor { accessor } => {
            let keyword = accessor.keyword();
            match block_of(node) {
                Some(block) => {
                    let body: Vec<String> =
                        block.children().iter().map(|s| statement_text(s)).collect();
                    if body.is_empty() {
                        out.push_str(&format!("{pad}{keyword} {{ }}\n"));
                    } else {
                        out.push_str(&format!("{pad}{keyword} {{ {} }}\n", body.join(" ")));
                    }
                }
                None => out.push_str(&format!("{pad}{keyword};\n")),
            }
        }
        NodeKind::MethodDeclaration {
            modifiers,
            name,
            parameters,
        } => {
            let head = format!(
                "{pad}{}{}{name}({parameters})",
                modifier_prefix(modifiers),
                type_prefix(node)
            );
            match block_of(node) {
                Some(block) => {
                    out.push_str(&format!("{head}\n"));
                    write_node(out, block, depth);
                }
                None => out.push_str(&format!("{head};\n")),
            }
        }
        NodeKind::Block => {
            out.push_str(&format!("{pad}{{\n"));
            let inner = INDENT.repeat(depth + 1);
            for statement in node.children().iter() {
                out.push_str(&format!("{inner}{}\n", statement_text(statement)));
            }
            out.push_str(&format!("{pad}}}\n"));
        }
        NodeKind::ReturnStatement { .. }
        | NodeKind::AssignmentStatement { .. }
        | NodeKind::Statement { .. } => {
            out.push_str(&format!("{pad}{}\n", statement_text(node)));
        }
        NodeKind::VariableDeclarator { .. } | NodeKind::TypeRef { .. } => {
            if let Some(text) = declarator_text(node).or_else(|| type_name(node)) {
                out.push_str(&format!("{pad}{text}\n"));
            }
        }
    }
}

fn write_members(out: &mut String, node: &Node, depth: usize) {
    for child in node.children().iter() {
        write_node(out, child, depth);
    }
}

fn modifier_prefix(modifiers: &[Modifier]) -> String {
    modifiers
        .iter()
        .map(|m| format!("{} ", m.keyword()))
        .collect()
}

fn type_name(node: &Node) -> Option<String> {
    match node.kind() {
        NodeKind::TypeRef { name } => Some(name.clone()),
        _ => None,
    }
}

fn type_prefix(node: &Node) -> String {
    node.children()
        .iter()
        .find_map(|c| type_name(c))
        .map(|t| format!("{t} "))
        .unwrap_or_default()
}

fn declarator_text(node: &Node) -> Option<String> {
    match node.kind() {
        NodeKind::VariableDeclarator {
            name,
            initializer: Some(init),
        } => Some(format!("{name} = {init}")),
        NodeKind::VariableDeclarator { name, .. } => Some(name.clone()),
        _ => None,
    }
}

fn block_of(node: &Node) -> Option<&Node> {
    node.children()
        .iter()
        .find(|c| matches!(c.kind(), NodeKind::Block))
        .map(|c| &**c)
}

fn statement_text(node: &Node) -> String {
    match node.kind() {
        NodeKind::ReturnStatement { expression } => format!("return {expression};"),
        NodeKind::AssignmentStatement { target, value } => format!("{target} = {value};"),
        NodeKind::Statement { text } => text.clone(),
        other => format!("/* {} */", other.label()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldfix_syntax::{AccessorKind, factory};
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_class_with_field_property_and_method() {
        let class = factory::type_declaration(
            "class",
            "Player",
            &[Modifier::Public],
            [
                factory::field_declaration(
                    &[Modifier::Private],
                    factory::type_ref("int"),
                    factory::variable_declarator("_score", Some("10")),
                ),
                factory::property_declaration(
                    &[Modifier::Public],
                    factory::type_ref("int"),
                    "Score",
                    [
                        factory::accessor(AccessorKind::Get, [factory::return_statement("_score")]),
                        factory::accessor(
                            AccessorKind::Set,
                            [factory::assignment_statement("_score", "value")],
                        ),
                    ],
                ),
                factory::method_declaration(
                    &[Modifier::Public],
                    factory::type_ref("void"),
                    "Reset",
                    "",
                    [factory::statement("Score = 0;")],
                ),
            ],
        );
        let tree = SyntaxTree::new(factory::compilation_unit([class]));
        let expected = "\
public class Player
{
    private int _score = 10;
    public int Score
    {
        get { return _score; }
        set { _score = value; }
    }
    public void Reset()
    {
        Score = 0;
    }
}
";
        assert_eq!(render_source(&tree), expected);
    }

    #[test]
    fn renders_namespace_and_multi_declarator_field() {
        let field = std::sync::Arc::new(Node::new(
            NodeKind::FieldDeclaration {
                modifiers: vec![Modifier::Public],
            },
            None,
            [
                factory::type_ref("int"),
                factory::variable_declarator("x", None),
                factory::variable_declarator("y", Some("2")),
            ],
        ));
        let ns = std::sync::Arc::new(Node::new(
            NodeKind::NamespaceDeclaration {
                name: "Geo".to_string(),
            },
            None,
            [factory::type_declaration("struct", "Point", &[], [field])],
        ));
        let tree = SyntaxTree::new(factory::compilation_unit([ns]));
        let expected = "\
namespace Geo
{
    struct Point
    {
        public int x, y = 2;
    }
}
";
        assert_eq!(render_source(&tree), expected);
    }
}
