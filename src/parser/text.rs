//! Description flattening.
//!
//! Turns a documentation subtree into a single string, reconstructing
//! paragraph and list structure as lightweight HTML and wrapping
//! underscore-bearing identifiers in `<code>` markers.

use regex::Regex;
use roxmltree::Node;
use std::sync::LazyLock;

/// Identifier-like tokens: the underscore naming convention separates API
/// symbols and macros from prose words. An optional `()` suffix is part of
/// the match.
static RE_SYMBOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z0-9]+_[a-zA-Z0-9_]+(?:\(\))?").unwrap());

/// Flatten a description subtree into normalized text.
///
/// The passed node itself is a transparent container; descendant `para`,
/// `itemizedlist` and `listitem` elements are reconstructed as
/// `<p>`/`<ul>`/`<li>` pairs around their content. Absent input yields an
/// empty string.
pub fn normalize(node: Option<Node>) -> String {
    normalize_filtered(node, |_| true)
}

/// Like [`normalize`], but `keep` decides per element whether its subtree
/// contributes text. Returning `false` drops the element and everything
/// beneath it.
pub fn normalize_filtered<'a, 'input, F>(node: Option<Node<'a, 'input>>, mut keep: F) -> String
where
    F: FnMut(Node<'a, 'input>) -> bool,
{
    let Some(node) = node else {
        return String::new();
    };
    let mut out = String::new();
    flatten(node, &mut out, &mut keep);
    RE_SYMBOL
        .replace_all(out.trim(), "<code>$0</code>")
        .into_owned()
}

/// Concatenate text content in document order, emitting markup for the
/// structural elements.
fn flatten<'a, 'input, F>(node: Node<'a, 'input>, out: &mut String, keep: &mut F)
where
    F: FnMut(Node<'a, 'input>) -> bool,
{
    for child in node.children() {
        if child.is_text() {
            if let Some(text) = child.text() {
                out.push_str(text);
            }
            continue;
        }
        if !child.is_element() || !keep(child) {
            continue;
        }
        let (open, close) = match child.tag_name().name() {
            "para" => ("<p>", "</p>"),
            "itemizedlist" => ("<ul>", "</ul>"),
            "listitem" => ("<li>", "</li>"),
            _ => ("", ""),
        };
        out.push_str(open);
        flatten(child, out, keep);
        out.push_str(close);
    }
}
