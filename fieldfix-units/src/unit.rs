use camino::Utf8PathBuf;
use fieldfix_syntax::{NodeWire, SyntaxTree};
use fieldfix_types::schema::FIELDFIX_UNIT_V1;
use serde::{Deserialize, Serialize};

/// On-disk form of one compilation unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitFile {
    pub schema: String,

    /// Source file the tree was parsed from; used in finding locations.
    pub path: Utf8PathBuf,

    pub tree: NodeWire,
}

impl UnitFile {
    pub fn from_tree(path: impl Into<Utf8PathBuf>, tree: &SyntaxTree) -> Self {
        Self {
            schema: FIELDFIX_UNIT_V1.to_string(),
            path: path.into(),
            tree: tree.to_wire(),
        }
    }

    pub fn syntax_tree(&self) -> SyntaxTree {
        SyntaxTree::from_wire(&self.tree)
    }

    pub fn to_json_pretty(&self) -> anyhow::Result<String> {
        let mut s = serde_json::to_string_pretty(self)?;
        s.push('\n');
        Ok(s)
    }
}
