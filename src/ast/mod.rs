//! TypeScript source reading and syntax indexing
//!
//! Module files are parsed with tree-sitter's TypeScript grammar so that the
//! patch planner can locate import statements and `@NgModule` metadata
//! structurally instead of by string search.

mod ng_module;

pub use ng_module::{metadata_property, ng_module_metadata};

use tree_sitter::{Node, Parser, Tree as SyntaxTree};

use crate::error::{self, Result};
use crate::tree::{self, Tree};

/// A parsed TypeScript file
///
/// Holds the original text together with its syntax tree. Node spans are
/// byte offsets into [`SourceFile::text`].
pub struct SourceFile {
    path: String,
    text: String,
    syntax: SyntaxTree,
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("path", &self.path)
            .field("len", &self.text.len())
            .finish_non_exhaustive()
    }
}

impl SourceFile {
    /// Parse TypeScript text
    ///
    /// Any error or missing node in the resulting tree is reported as a
    /// syntax error at the position of the first such node.
    pub fn parse(path: impl Into<String>, text: impl Into<String>) -> Result<Self> {
        let path = path.into();
        let text = text.into();

        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into())
            .map_err(|e| error::io_error(format!("Failed to load TypeScript grammar: {e}")))?;

        let syntax = parser
            .parse(&text, None)
            .ok_or_else(|| error::syntax_error(&path, 1, 1))?;

        let root = syntax.root_node();
        if root.has_error() {
            let node = first_error(root).unwrap_or(root);
            let position = node.start_position();
            return Err(error::syntax_error(
                path,
                position.row + 1,
                position.column + 1,
            ));
        }

        Ok(Self { path, text, syntax })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Root `program` node
    pub fn root(&self) -> Node<'_> {
        self.syntax.root_node()
    }

    /// Source text covered by a node
    pub fn node_text(&self, node: Node<'_>) -> &str {
        &self.text[node.byte_range()]
    }

    /// Every top-level `import` statement, in source order
    pub fn imports(&self) -> Vec<Node<'_>> {
        named_children(self.root())
            .into_iter()
            .filter(|n| n.kind() == "import_statement")
            .collect()
    }
}

/// Read a file from the tree and parse it
pub fn read_into_source_file(tree: &dyn Tree, path: &str) -> Result<SourceFile> {
    let path = tree::normalize(path);
    let text = tree::read_to_string(tree, &path)?;
    SourceFile::parse(path, text)
}

/// Named children of a node, comments excluded
pub fn named_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|n| n.kind() != "comment")
        .collect()
}

/// All descendants of `node` (including itself) of the given kind, in source order
pub fn find_nodes<'t>(node: Node<'t>, kind: &str) -> Vec<Node<'t>> {
    let mut found = Vec::new();
    let mut stack = vec![node];
    while let Some(current) = stack.pop() {
        if current.kind() == kind {
            found.push(current);
        }
        let mut cursor = current.walk();
        let children: Vec<Node<'t>> = current.children(&mut cursor).collect();
        stack.extend(children.into_iter().rev());
    }
    found
}

/// Strip the quotes of a string literal
pub fn unquote(literal: &str) -> &str {
    literal.trim_matches(|c| c == '\'' || c == '"' || c == '`')
}

fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}
