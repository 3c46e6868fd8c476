//! Free-text search and recipe-name autocomplete handlers.

use super::render::render_view;
use crate::filter::FilterEngine;
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchRequest {
    /// Free-text query matched against ingredients, recipe titles and descriptions.
    /// Queries shorter than three characters do not restrict the results.
    pub query: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SuggestRecipesRequest {
    /// Partial recipe name typed so far
    pub query: String,
}

/// Replace the current query and render the resulting view.
pub fn handle_search(engine: &mut FilterEngine, request: SearchRequest) -> Result<String, String> {
    let view = engine.set_query(&request.query);
    Ok(render_view(engine, &view))
}

/// Render the view for the current selection and query.
pub fn handle_current_view(engine: &FilterEngine) -> Result<String, String> {
    Ok(render_view(engine, &engine.view()))
}

/// List recipe names completing the query.
pub fn handle_suggest_recipes(
    engine: &FilterEngine,
    request: SuggestRecipesRequest,
) -> Result<String, String> {
    let suggestions = engine.suggest_recipes(&request.query);
    if suggestions.is_empty() {
        return Ok(format!("No recipe name suggestions for '{}'.", request.query));
    }

    let mut output = format!("Suggestions for '{}':\n", request.query.trim());
    for suggestion in suggestions {
        let _ = writeln!(output, "• {}", suggestion);
    }
    Ok(output)
}
