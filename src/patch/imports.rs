//! Import statement planning

use tree_sitter::Node;

use super::InsertChange;
use crate::ast::{SourceFile, named_children, unquote};

/// Plan the import of `symbol` from `import_path`
///
/// Returns `None` when the symbol is already imported from that specifier.
/// An existing named import from the same specifier is extended; otherwise a
/// new statement goes after the last import, or at the top of the file.
pub fn insert_import(source: &SourceFile, symbol: &str, import_path: &str) -> Option<InsertChange> {
    let imports = source.imports();
    let mut extendable: Option<Node<'_>> = None;

    for import in &imports {
        let Some(specifier) = import.child_by_field_name("source") else {
            continue;
        };
        if unquote(source.node_text(specifier)) != import_path {
            continue;
        }

        let bindings = ImportBindings::of(source, *import);
        if bindings.binds(symbol) {
            return None;
        }
        if extendable.is_none() {
            extendable = bindings.last_specifier;
        }
    }

    let path = source.path();
    if let Some(last) = extendable {
        return Some(InsertChange::new(
            path,
            last.end_byte(),
            format!(", {symbol}"),
            format!("Added {symbol} to the import from '{import_path}'"),
        ));
    }

    let statement = format!("import {{ {symbol} }} from '{import_path}';");
    let description = format!("Imported {symbol} from '{import_path}'");
    Some(match imports.last() {
        Some(last) => InsertChange::new(path, last.end_byte(), format!("\n{statement}"), description),
        None => InsertChange::new(path, 0, format!("{statement}\n"), description),
    })
}

/// Local names bound by one import statement
struct ImportBindings<'t> {
    names: Vec<String>,
    last_specifier: Option<Node<'t>>,
}

impl<'t> ImportBindings<'t> {
    fn of(source: &SourceFile, import: Node<'t>) -> Self {
        let mut names = Vec::new();
        let mut last_specifier = None;

        let clause = named_children(import)
            .into_iter()
            .find(|n| n.kind() == "import_clause");
        for part in clause.map(named_children).unwrap_or_default() {
            match part.kind() {
                "identifier" => names.push(source.node_text(part).to_string()),
                "named_imports" => {
                    for specifier in named_children(part)
                        .into_iter()
                        .filter(|n| n.kind() == "import_specifier")
                    {
                        let local = specifier
                            .child_by_field_name("alias")
                            .or_else(|| specifier.child_by_field_name("name"));
                        if let Some(local) = local {
                            names.push(source.node_text(local).to_string());
                        }
                        last_specifier = Some(specifier);
                    }
                }
                _ => {}
            }
        }

        Self {
            names,
            last_specifier,
        }
    }

    fn binds(&self, symbol: &str) -> bool {
        self.names.iter().any(|n| n == symbol)
    }
}
