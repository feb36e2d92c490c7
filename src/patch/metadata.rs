//! `@NgModule` metadata planning

use tracing::warn;
use tree_sitter::Node;

use super::{InsertChange, insert_import};
use crate::ast::{SourceFile, metadata_property, named_children, ng_module_metadata};
use crate::error::{self, Result};

/// Plan the import of `symbol` and its addition to the `imports` list
pub fn add_import_to_module(
    source: &SourceFile,
    symbol: &str,
    import_path: &str,
) -> Result<Vec<InsertChange>> {
    add_symbol_to_ng_module_metadata(source, "imports", symbol, Some(import_path))
}

/// Plan the import of `symbol` and its addition to the `declarations` list
pub fn add_declaration_to_module(
    source: &SourceFile,
    symbol: &str,
    import_path: &str,
) -> Result<Vec<InsertChange>> {
    add_symbol_to_ng_module_metadata(source, "declarations", symbol, Some(import_path))
}

/// Plan the changes that register `symbol` in the `field` list of the module metadata
///
/// The import statement (if any) comes first, the list entry second. When
/// the file has no `@NgModule` metadata only the import is planned. When the
/// metadata exists but has no `field` array literal the plan fails with
/// `TargetNotFound`.
pub fn add_symbol_to_ng_module_metadata(
    source: &SourceFile,
    field: &str,
    symbol: &str,
    import_path: Option<&str>,
) -> Result<Vec<InsertChange>> {
    let mut changes = Vec::new();
    if let Some(import_path) = import_path {
        changes.extend(insert_import(source, symbol, import_path));
    }

    let Some(object) = ng_module_metadata(source).into_iter().next() else {
        warn!(
            path = source.path(),
            "no @NgModule metadata found, only the import of {symbol} was planned"
        );
        return Ok(changes);
    };

    let list = metadata_property(source, object, field)
        .filter(|value| value.kind() == "array")
        .ok_or_else(|| error::target_not_found(source.path(), format!("the `{field}` array")))?;

    changes.extend(append_to_array(source, list, field, symbol));
    Ok(changes)
}

/// Plan `symbol` as the new last element of an array literal
fn append_to_array(
    source: &SourceFile,
    array: Node<'_>,
    field: &str,
    symbol: &str,
) -> Option<InsertChange> {
    let elements = named_children(array);
    if elements.iter().any(|e| source.node_text(*e) == symbol) {
        return None;
    }

    let path = source.path();
    let description = format!("Added {symbol} to {field}");
    let Some(last) = elements.last() else {
        return Some(InsertChange::new(
            path,
            array.start_byte() + 1,
            symbol,
            description,
        ));
    };

    let separator = if last.start_position().row > array.start_position().row {
        format!("\n{}", indentation_at(source.text(), last.start_byte()))
    } else {
        " ".to_string()
    };

    Some(match trailing_comma(*last) {
        Some(comma) => InsertChange::new(
            path,
            comma.end_byte(),
            format!("{separator}{symbol},"),
            description,
        ),
        None => InsertChange::new(
            path,
            last.end_byte(),
            format!(",{separator}{symbol}"),
            description,
        ),
    })
}

fn trailing_comma(last: Node<'_>) -> Option<Node<'_>> {
    let mut next = last.next_sibling();
    while let Some(node) = next {
        if !node.is_extra() {
            return (node.kind() == ",").then_some(node);
        }
        next = node.next_sibling();
    }
    None
}

/// Leading whitespace of the line containing `offset`
fn indentation_at(text: &str, offset: usize) -> &str {
    let line_start = text[..offset].rfind('\n').map_or(0, |i| i + 1);
    let line = &text[line_start..offset];
    let indent_len = line.len() - line.trim_start().len();
    &line[..indent_len]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::apply_changes;
    use crate::tree::{MemoryTree, Tree};

    const PATH: &str = "src/app/app.module.ts";

    const APP_MODULE: &str = r"import { NgModule } from '@angular/core';
import { BrowserModule } from '@angular/platform-browser';

import { AppComponent } from './app.component';

@NgModule({
  declarations: [
    AppComponent
  ],
  imports: [
    BrowserModule
  ],
  providers: [],
  bootstrap: [AppComponent]
})
export class AppModule { }
";

    fn patch(text: &str, symbol: &str, import_path: &str) -> (Vec<InsertChange>, String) {
        let source = SourceFile::parse(PATH, text).unwrap();
        let changes = add_import_to_module(&source, symbol, import_path).unwrap();
        let mut tree = MemoryTree::new().with_file(PATH, text);
        apply_changes(&mut tree, PATH, &changes).unwrap();
        (changes, tree.read_string(PATH).unwrap())
    }

    #[test]
    fn test_adds_import_and_multiline_entry() {
        let (changes, patched) = patch(APP_MODULE, "CoreModule", "./core/core.module");

        assert_eq!(changes.len(), 2);
        assert!(patched.contains(
            "import { AppComponent } from './app.component';\nimport { CoreModule } from './core/core.module';\n"
        ));
        assert!(patched.contains("  imports: [\n    BrowserModule,\n    CoreModule\n  ],"));
        assert!(patched.contains("  declarations: [\n    AppComponent\n  ],"));
    }

    #[test]
    fn test_patching_twice_is_idempotent() {
        let (_, patched) = patch(APP_MODULE, "CoreModule", "./core/core.module");

        let source = SourceFile::parse(PATH, patched.as_str()).unwrap();
        let changes = add_import_to_module(&source, "CoreModule", "./core/core.module").unwrap();
        assert!(changes.is_empty());
        assert_eq!(patched.matches("import { CoreModule }").count(), 1);
    }

    #[test]
    fn test_single_line_array_gets_comma() {
        let text = "@NgModule({ imports: [BrowserModule, HttpClientModule] })\nexport class AppModule {}\n";
        let (_, patched) = patch(text, "CoreModule", "./core/core.module");
        assert!(patched.contains("imports: [BrowserModule, HttpClientModule, CoreModule] })"));
    }

    #[test]
    fn test_empty_array_gets_bare_entry() {
        let text = "@NgModule({ imports: [] })\nexport class AppModule {}\n";
        let (_, patched) = patch(text, "CoreModule", "./core/core.module");
        assert!(patched.contains("imports: [CoreModule] })"));
    }

    #[test]
    fn test_trailing_comma_is_reused() {
        let text = "@NgModule({\n  imports: [\n    BrowserModule,\n  ],\n})\nexport class AppModule {}\n";
        let (_, patched) = patch(text, "CoreModule", "./core/core.module");
        assert!(patched.contains("  imports: [\n    BrowserModule,\n    CoreModule,\n  ],"));
    }

    #[test]
    fn test_existing_entries_are_not_corrupted() {
        let text = "@NgModule({ imports: [A, B.forRoot(routes), C] })\nexport class AppModule {}\n";
        let (_, patched) = patch(text, "CoreModule", "./core/core.module");
        assert!(patched.contains("[A, B.forRoot(routes), C, CoreModule]"));
    }

    #[test]
    fn test_module_without_metadata_only_gets_import() {
        let text = "export class AppModule {}";
        let (changes, patched) = patch(text, "CoreModule", "./core/core.module");
        assert_eq!(changes.len(), 1);
        assert!(patched.starts_with("import { CoreModule } from './core/core.module';"));
        assert!(patched.ends_with("export class AppModule {}"));
    }

    #[test]
    fn test_missing_property_is_target_not_found() {
        let text = "@NgModule({ imports: [] })\nexport class AppModule {}\n";
        let source = SourceFile::parse(PATH, text).unwrap();
        let err = add_declaration_to_module(&source, "ShellComponent", "./shell.component")
            .unwrap_err();
        assert!(matches!(err, crate::error::CoregenError::TargetNotFound { .. }));
    }

    #[test]
    fn test_non_array_property_is_target_not_found() {
        let text = "const shared = [A];\n@NgModule({ imports: shared })\nexport class AppModule {}\n";
        let source = SourceFile::parse(PATH, text).unwrap();
        assert!(add_import_to_module(&source, "CoreModule", "./core/core.module").is_err());
    }

    #[test]
    fn test_declarations_list() {
        let source = SourceFile::parse(PATH, APP_MODULE).unwrap();
        let changes =
            add_declaration_to_module(&source, "ShellComponent", "./core/shell/shell.component")
                .unwrap();
        let mut tree = MemoryTree::new().with_file(PATH, APP_MODULE);
        apply_changes(&mut tree, PATH, &changes).unwrap();
        let patched = tree.read_string(PATH).unwrap();
        assert!(patched.contains("declarations: [\n    AppComponent,\n    ShellComponent\n  ],"));
        assert_eq!(tree.actions().len(), 1);
    }

    #[test]
    fn test_entry_already_listed_but_not_imported() {
        let text = "@NgModule({ imports: [CoreModule] })\nexport class AppModule {}\n";
        let source = SourceFile::parse(PATH, text).unwrap();
        let changes = add_import_to_module(&source, "CoreModule", "./core/core.module").unwrap();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].pos, 0);
    }

    #[test]
    fn test_aliased_import_gets_symbol_bound_before_listing() {
        let text = "import { CoreModule as Core } from './core/core.module';\n\
                    @NgModule({ imports: [BrowserModule] })\nexport class AppModule {}\n";
        let (changes, patched) = patch(text, "CoreModule", "./core/core.module");

        assert_eq!(changes.len(), 2);
        assert!(patched.starts_with(
            "import { CoreModule as Core, CoreModule } from './core/core.module';\n"
        ));
        assert!(patched.contains("@NgModule({ imports: [BrowserModule, CoreModule] })"));
    }

    #[test]
    fn test_indentation_at() {
        let text = "a\n    b";
        assert_eq!(indentation_at(text, 6), "    ");
        assert_eq!(indentation_at("x", 0), "");
    }
}
