//! Locating `@NgModule` metadata in a parsed module file

use tree_sitter::Node;

use super::{SourceFile, find_nodes, named_children, unquote};

/// Object literals passed to `@NgModule(...)`, in source order
///
/// Both `@NgModule({...})` and qualified forms such as
/// `@core.NgModule({...})` are recognized. Decorators without an object
/// argument are skipped.
pub fn ng_module_metadata(source: &SourceFile) -> Vec<Node<'_>> {
    find_nodes(source.root(), "decorator")
        .into_iter()
        .filter_map(|decorator| {
            let call = named_children(decorator)
                .into_iter()
                .find(|n| n.kind() == "call_expression")?;
            let function = call.child_by_field_name("function")?;
            let name = source.node_text(function);
            if name != "NgModule" && !name.ends_with(".NgModule") {
                return None;
            }
            let arguments = call.child_by_field_name("arguments")?;
            named_children(arguments)
                .into_iter()
                .next()
                .filter(|arg| arg.kind() == "object")
        })
        .collect()
}

/// Value node of the property `name` in an object literal
pub fn metadata_property<'t>(
    source: &SourceFile,
    object: Node<'t>,
    name: &str,
) -> Option<Node<'t>> {
    named_children(object)
        .into_iter()
        .filter(|n| n.kind() == "pair")
        .find(|pair| {
            pair.child_by_field_name("key")
                .is_some_and(|key| unquote(source.node_text(key)) == name)
        })
        .and_then(|pair| pair.child_by_field_name("value"))
}
