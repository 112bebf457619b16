//! JSON renderer — structured output for tooling integration.
//!
//! Emits an object keyed by symbol name. A later symbol with a duplicate
//! name overwrites the earlier entry; the key keeps its first position.

use crate::model::{Kind, Param, Symbol};
use crate::render::Renderer;
use anyhow::Result;
use indexmap::IndexMap;
use serde::Serialize;

pub struct JsonRenderer;

/// Reduced per-symbol record. Field order here is the serialized order.
#[derive(Serialize)]
struct Entry<'a> {
    returns: &'a str,
    name: &'a str,
    params: Vec<&'a Param>,
    description: &'a str,
    return_desc: Option<&'a str>,
    warning: Option<&'a str>,
    kind: Kind,
}

impl Renderer for JsonRenderer {
    fn render(&self, symbols: &[Symbol]) -> Result<String> {
        let mut map: IndexMap<&str, Entry> = IndexMap::new();
        for sym in symbols {
            map.insert(
                sym.name.as_str(),
                Entry {
                    returns: &sym.ty,
                    name: &sym.name,
                    params: sym.params.values().collect(),
                    description: &sym.description,
                    return_desc: sym.return_desc.as_deref(),
                    warning: sym.warning.as_deref(),
                    kind: sym.kind,
                },
            );
        }
        let mut out = serde_json::to_string_pretty(&map)?;
        out.push('\n');
        Ok(out)
    }
}
