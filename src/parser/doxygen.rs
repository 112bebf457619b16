//! Doxygen compound-definition extraction.
//!
//! Walks a parsed `doxygen` document and builds one [`Symbol`] per member
//! definition. The tree is never mutated: sections that are captured
//! separately (parameter lists, the first return/note annotation, see-also
//! content) are excluded when the residual main description is flattened.

use crate::model::{Kind, Param, Symbol};
use crate::parser::text;
use indexmap::IndexMap;
use roxmltree::Node;

/// Extract all documented symbols from the document root, functions first,
/// then defines, enum values, and typedefs. Each category keeps its
/// document order.
pub fn extract(root: Node) -> Vec<Symbol> {
    let mut symbols = Vec::new();
    for member in members(root, "func") {
        symbols.push(build_symbol(member, Kind::Function));
    }
    for member in members(root, "define") {
        symbols.push(build_symbol(member, Kind::Define));
    }
    for value in enum_values(root) {
        symbols.push(build_symbol(value, Kind::EnumValue));
    }
    for member in members(root, "typedef") {
        symbols.push(build_symbol(member, Kind::Typedef));
    }
    symbols
}

/// `memberdef` nodes under every `sectiondef` of the given kind.
fn members<'a, 'input>(root: Node<'a, 'input>, kind: &str) -> Vec<Node<'a, 'input>> {
    let mut found = Vec::new();
    for compound in children_named(root, "compounddef") {
        for section in children_named(compound, "sectiondef")
            .filter(|s| s.attribute("kind") == Some(kind))
        {
            found.extend(children_named(section, "memberdef"));
        }
    }
    found
}

/// Individual `enumvalue` nodes nested inside enum-section members.
fn enum_values<'a, 'input>(root: Node<'a, 'input>) -> Vec<Node<'a, 'input>> {
    members(root, "enum")
        .into_iter()
        .flat_map(|member| {
            member
                .descendants()
                .filter(|n| n.has_tag_name("enumvalue"))
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Build one symbol record from a member (or enum-value) node.
pub fn build_symbol(node: Node, kind: Kind) -> Symbol {
    let ty = unref(child_named(node, "type"));
    let name = unref(child_named(node, "name"));

    let mut params: IndexMap<String, Param> = IndexMap::new();
    for param in children_named(node, "param") {
        let declname = unref(child_named(param, "declname"));
        if declname.is_empty() {
            continue;
        }
        let ty = unref(child_named(param, "type"));
        params.insert(
            declname.clone(),
            Param {
                name: declname,
                ty,
                description: None,
            },
        );
    }

    let (description, return_desc, warning) = extract_descriptions(node, &mut params);

    Symbol {
        kind,
        name,
        ty,
        params,
        description,
        return_desc,
        warning,
    }
}

/// Pull parameter descriptions, the return annotation, and the note
/// annotation out of the member's detailed description, and flatten what
/// remains into the main description. Falls back to the brief description
/// when the residual text is empty.
fn extract_descriptions(
    member: Node,
    params: &mut IndexMap<String, Param>,
) -> (String, Option<String>, Option<String>) {
    let detail = child_named(member, "detaileddescription");

    if let Some(detail) = detail {
        // Parameter-list entries attach to declared parameters by exact name.
        // Entries without a match are dropped.
        for list in detail
            .descendants()
            .filter(|n| n.has_tag_name("parameterlist"))
        {
            for item in children_named(list, "parameteritem") {
                let name = child_named(item, "parameternamelist")
                    .and_then(|names| child_named(names, "parametername"))
                    .and_then(|n| n.text());
                let desc = child_named(item, "parameterdescription")
                    .and_then(|d| children_named(d, "para").next());
                if let (Some(name), Some(desc)) = (name, desc) {
                    if let Some(param) = params.get_mut(name) {
                        param.description = Some(text::normalize(Some(desc)));
                    }
                }
            }
        }
    }

    // Capture order: parameter lists drop out first, then the first return
    // annotation, then the first note in what remains. Later return/note
    // sections are not captured and stay in the main text.
    let ret_node = detail.and_then(|d| {
        d.descendants().find(|n| {
            is_simplesect(*n, "return") && !inside_parameterlist(*n)
        })
    });
    let note_node = detail.and_then(|d| {
        d.descendants().find(|n| {
            is_simplesect(*n, "note")
                && !inside_parameterlist(*n)
                && ret_node.map_or(true, |ret| !is_within(*n, ret))
        })
    });

    let return_desc = ret_node.map(|n| text::normalize(Some(n)));
    let warning = note_node.map(|n| text::normalize(Some(n)));

    // Residual main description: the captured sections are excluded by node
    // identity; see-also sections contribute nothing.
    let mut description = text::normalize_filtered(detail, |n| {
        if n.has_tag_name("parameterlist") {
            return false;
        }
        if Some(n) == ret_node || Some(n) == note_node {
            return false;
        }
        !is_simplesect(n, "see")
    });

    if description.is_empty() {
        description = text::normalize(child_named(member, "briefdescription"));
    }

    (description, return_desc, warning)
}

fn is_simplesect(node: Node, kind: &str) -> bool {
    node.has_tag_name("simplesect") && node.attribute("kind") == Some(kind)
}

/// True when `node` is `container` or lies anywhere beneath it.
fn is_within<'a, 'input>(node: Node<'a, 'input>, container: Node<'a, 'input>) -> bool {
    let mut current = Some(node);
    while let Some(n) = current {
        if n == container {
            return true;
        }
        current = n.parent();
    }
    false
}

fn inside_parameterlist(node: Node) -> bool {
    let mut current = node.parent();
    while let Some(n) = current {
        if n.has_tag_name("parameterlist") {
            return true;
        }
        current = n.parent();
    }
    false
}

/// Resolve a field through reference indirection: recurse into the first
/// element child until a leaf element is reached, then take its text.
/// Absent node or absent text resolve to an empty string.
fn unref(node: Option<Node>) -> String {
    let Some(node) = node else {
        return String::new();
    };
    match node.children().find(|c| c.is_element()) {
        Some(child) => unref(Some(child)),
        None => node.text().unwrap_or("").to_string(),
    }
}

fn child_named<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|c| c.has_tag_name(name))
}

fn children_named<'a, 'input>(
    node: Node<'a, 'input>,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a
where
    'input: 'a,
{
    node.children().filter(move |c| c.has_tag_name(name))
}
