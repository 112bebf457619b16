//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod text;

use crate::model::Symbol;
use anyhow::{anyhow, Result};

/// Trait for rendering extracted symbols into a specific output format.
pub trait Renderer {
    fn render(&self, symbols: &[Symbol]) -> Result<String>;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "text" => Ok(Box::new(text::TextRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use text or json", format)),
    }
}
