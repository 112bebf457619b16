//! Plain-text renderer — human-readable listing, one block per symbol.

use crate::model::Symbol;
use crate::render::Renderer;
use anyhow::Result;

pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, symbols: &[Symbol]) -> Result<String> {
        let mut out = String::new();
        for sym in symbols {
            out.push_str(&signature(sym));
            out.push('\n');
            out.push_str("  ");
            out.push_str(&sym.description);
            out.push('\n');
            if !sym.params.is_empty() {
                out.push_str("  Params:\n");
                for param in sym.params.values() {
                    out.push_str(&format!(
                        "    - {} {}: {}\n",
                        param.ty,
                        param.name,
                        param.description.as_deref().unwrap_or("")
                    ));
                }
            }
            out.push('\n');
        }
        Ok(out)
    }
}

/// One-line signature: `type name(type1 name1, type2 name2)`.
fn signature(sym: &Symbol) -> String {
    let params: Vec<String> = sym
        .params
        .values()
        .map(|p| format!("{} {}", p.ty, p.name))
        .collect();
    format!("{} {}({})", sym.ty, sym.name, params.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Kind, Param};
    use indexmap::IndexMap;

    #[test]
    fn renders_signature_description_and_params() {
        let mut params = IndexMap::new();
        params.insert(
            "x".to_string(),
            Param {
                name: "x".to_string(),
                ty: "int".to_string(),
                description: Some("the input".to_string()),
            },
        );
        params.insert(
            "flags".to_string(),
            Param {
                name: "flags".to_string(),
                ty: "uint8_t".to_string(),
                description: None,
            },
        );
        let sym = Symbol {
            kind: Kind::Function,
            name: "foo".to_string(),
            ty: "int".to_string(),
            params,
            description: "Does foo.".to_string(),
            return_desc: None,
            warning: None,
        };

        let out = TextRenderer.render(&[sym]).unwrap();
        assert_eq!(
            out,
            "int foo(int x, uint8_t flags)\n\
             \x20 Does foo.\n\
             \x20 Params:\n\
             \x20   - int x: the input\n\
             \x20   - uint8_t flags: \n\
             \n"
        );
    }

    #[test]
    fn paramless_symbol_has_no_params_block() {
        let sym = Symbol {
            kind: Kind::Define,
            name: "MAX_LEN".to_string(),
            ty: String::new(),
            params: IndexMap::new(),
            description: "<p>Maximum length.</p>".to_string(),
            return_desc: None,
            warning: None,
        };
        let out = TextRenderer.render(&[sym]).unwrap();
        assert_eq!(out, " MAX_LEN()\n  <p>Maximum length.</p>\n\n");
    }
}
