//! Tag selection and dropdown autocomplete handlers.

use super::render::{render_options, render_view};
use crate::filter::FilterEngine;
use crate::search::TagCategory;
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct TagRequest {
    /// Tag category
    pub category: TagCategory,
    /// Tag value, e.g. "coconut milk", "oven" or "knife"
    pub tag: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SuggestTagsRequest {
    /// Tag category
    pub category: TagCategory,
    /// Text typed in the category's dropdown input (may be empty)
    #[serde(default)]
    pub input: String,
}

pub fn handle_select_tag(engine: &mut FilterEngine, request: TagRequest) -> Result<String, String> {
    let tag = validate_tag(&request.tag)?;
    let view = engine.select_tag(request.category, tag);
    Ok(render_view(engine, &view))
}

pub fn handle_deselect_tag(
    engine: &mut FilterEngine,
    request: TagRequest,
) -> Result<String, String> {
    let tag = validate_tag(&request.tag)?;
    let view = engine.deselect_tag(request.category, tag);
    Ok(render_view(engine, &view))
}

pub fn handle_clear_tags(engine: &mut FilterEngine) -> Result<String, String> {
    let view = engine.clear_tags();
    Ok(render_view(engine, &view))
}

pub fn handle_suggest_tags(
    engine: &FilterEngine,
    request: SuggestTagsRequest,
) -> Result<String, String> {
    let options = engine.suggest_tags(request.category, &request.input);
    Ok(render_options(request.category, &options))
}

fn validate_tag(tag: &str) -> Result<&str, String> {
    let tag = tag.trim();
    if tag.is_empty() {
        return Err("Tag must not be empty".to_string());
    }
    Ok(tag)
}
