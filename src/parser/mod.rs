//! Parser module — Doxygen XML in, symbol records out.

pub mod doxygen;
pub mod text;

use crate::model::Symbol;
use anyhow::{Context, Result};

/// Parse a Doxygen compound-definition document into symbol records.
///
/// Unparsable XML is fatal; missing optional structure inside a well-formed
/// document never is.
pub fn parse(xml: &str) -> Result<Vec<Symbol>> {
    let doc = roxmltree::Document::parse(xml).context("failed to parse Doxygen XML")?;
    Ok(doxygen::extract(doc.root_element()))
}
