//! MCP server exposing a recipe search session over stdio.

use crate::filter::FilterEngine;
use crate::tools::search::{
    SearchRequest, SuggestRecipesRequest, handle_current_view, handle_search,
    handle_suggest_recipes,
};
use crate::tools::tags::{
    SuggestTagsRequest, TagRequest, handle_clear_tags, handle_deselect_tag, handle_select_tag,
    handle_suggest_tags,
};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    schemars::{self, JsonSchema, generate::SchemaSettings},
    tool, tool_handler, tool_router,
};
use std::sync::Arc;
use tokio::sync::Mutex;

/// MCP Server for recipe search and filtering
#[derive(Clone)]
pub struct RecipeServer {
    /// The single search session shared by all tool calls
    engine: Arc<Mutex<FilterEngine>>,

    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for RecipeServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecipeServer").finish_non_exhaustive()
    }
}

#[tool_router]
impl RecipeServer {
    pub fn new(engine: FilterEngine) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
            tool_router: Self::tool_router(),
        }
    }

    /// Get a handle on the shared engine.
    pub fn engine(&self) -> &Arc<Mutex<FilterEngine>> {
        &self.engine
    }

    #[tool(
        description = "Search recipes by free text. Matches ingredients, title words and description words by prefix (at least three characters), combined with the selected tags. Returns the visible recipes and the remaining tag options.",
        input_schema = inline_schema_for_type::<SearchRequest>()
    )]
    async fn search_recipes(
        &self,
        Parameters(request): Parameters<SearchRequest>,
    ) -> std::result::Result<String, String> {
        let mut engine = self.engine.lock().await;
        handle_search(&mut engine, request)
    }

    #[tool(
        description = "Select an ingredient, appliance or ustensil tag. Visible recipes must carry every selected tag.",
        input_schema = inline_schema_for_type::<TagRequest>()
    )]
    async fn select_tag(
        &self,
        Parameters(request): Parameters<TagRequest>,
    ) -> std::result::Result<String, String> {
        let mut engine = self.engine.lock().await;
        handle_select_tag(&mut engine, request)
    }

    #[tool(
        description = "Remove a previously selected tag.",
        input_schema = inline_schema_for_type::<TagRequest>()
    )]
    async fn deselect_tag(
        &self,
        Parameters(request): Parameters<TagRequest>,
    ) -> std::result::Result<String, String> {
        let mut engine = self.engine.lock().await;
        handle_deselect_tag(&mut engine, request)
    }

    #[tool(
        description = "Autocomplete a tag dropdown. Lists tag values of the category completing the input that still occur in the visible recipes.",
        input_schema = inline_schema_for_type::<SuggestTagsRequest>()
    )]
    async fn suggest_tags(
        &self,
        Parameters(request): Parameters<SuggestTagsRequest>,
    ) -> std::result::Result<String, String> {
        let engine = self.engine.lock().await;
        handle_suggest_tags(&engine, request)
    }

    #[tool(
        description = "Autocomplete recipe names for the search bar, including names that merely contain a word starting with the query.",
        input_schema = inline_schema_for_type::<SuggestRecipesRequest>()
    )]
    async fn suggest_recipes(
        &self,
        Parameters(request): Parameters<SuggestRecipesRequest>,
    ) -> std::result::Result<String, String> {
        let engine = self.engine.lock().await;
        handle_suggest_recipes(&engine, request)
    }

    #[tool(description = "Show the recipes and tag options for the current search and selection.")]
    async fn current_view(&self) -> std::result::Result<String, String> {
        let engine = self.engine.lock().await;
        handle_current_view(&engine)
    }

    #[tool(description = "Remove every selected tag. The free-text query is kept.")]
    async fn clear_tags(&self) -> std::result::Result<String, String> {
        let mut engine = self.engine.lock().await;
        handle_clear_tags(&mut engine)
    }
}

#[tool_handler]
impl ServerHandler for RecipeServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_protocol_version(ProtocolVersion::V_2024_11_05)
            .with_server_info(Implementation::from_build_env())
            .with_instructions(
                "recipe-finder: narrow a recipe catalog by free-text search and by \
                 ingredient, appliance and ustensil tags. Start with current_view or \
                 search_recipes; use suggest_tags to discover tag values.",
            )
    }
}

/// Generate an inline JSON schema for MCP tools
///
/// Unlike rmcp's default `schema_for_type()`, this function sets `inline_subschemas = true`
/// so the category enum is rendered inline instead of through a `$ref`.
pub fn inline_schema_for_type<T: JsonSchema>() -> Arc<JsonObject> {
    let mut settings = SchemaSettings::draft07();
    settings.transforms = vec![Box::new(schemars::transform::AddNullable::default())];
    settings.inline_subschemas = true;

    let generator = settings.into_generator();
    let schema = generator.into_root_schema_for::<T>();
    let object = serde_json::to_value(schema).expect("failed to serialize schema");

    let json_object = match object {
        serde_json::Value::Object(object) => object,
        _ => panic!("Schema serialization produced non-object value"),
    };

    Arc::new(json_object)
}
