use anyhow::Context;
use clap::Parser;
use recipe_finder::{Catalog, EngineConfig, FilterEngine, server::RecipeServer};
use rmcp::{ServiceExt, transport::stdio};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "recipe-finder")]
#[command(about = "Serve recipe search and tag filtering over MCP", long_about = None)]
struct Cli {
    /// JSON file holding the recipe catalog
    #[arg(long, env = "RECIPE_FINDER_CATALOG", default_value = "data/recipes.json")]
    catalog: PathBuf,

    /// Optional TOML file overriding engine limits
    #[arg(long, env = "RECIPE_FINDER_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> recipe_finder::error::Result<()> {
    recipe_finder::logging::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    let catalog = Catalog::load(&cli.catalog)
        .with_context(|| format!("Failed to load catalog from {}", cli.catalog.display()))?;

    tracing::info!("Starting recipe-finder MCP server");

    let server = RecipeServer::new(FilterEngine::from_catalog(catalog, config));
    let service = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("Error serving MCP server: {:?}", e);
    })?;

    service.waiting().await?;

    Ok(())
}
