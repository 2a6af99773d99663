use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::fs;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use pantry_match::api_connection::spoonacular::SpoonacularClient;
use pantry_match::api_connection::vision::Provider;
use pantry_match::api_connection::IngredientVision;
use pantry_match::cli::{mime_type_for, parse_args, Command};
use pantry_match::config::Config;
use pantry_match::matching::{split_ingredient_list, PantrySet};
use pantry_match::recipe_search::RecipeSearch;
use pantry_match::server::start_server;

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli_args = parse_args();
    let mut config = Config::load()?;

    match cli_args.command {
        Command::Serve { port } => {
            if let Some(port) = port {
                config.port = port;
            }
            start_server(&config).await?;
        }
        Command::Search { ingredients } => {
            let pantry = PantrySet::from_raw(ingredients.split(','));
            if pantry.is_empty() {
                anyhow::bail!("Ingredients are required");
            }
            let source = SpoonacularClient::new(
                &config.spoonacular_base_url,
                config.spoonacular_key.clone(),
            );
            let outcome = RecipeSearch::new(Arc::new(source))
                .search(&pantry)
                .await
                .context("Recipe search failed")?;
            info!(origin = ?outcome.origin, "found {} recipes", outcome.recipes.len());
            println!("{}", serde_json::to_string_pretty(&outcome.recipes)?);
        }
        Command::Snap { image } => {
            let bytes = fs::read(&image)
                .await
                .with_context(|| format!("Failed to read image file '{}'", image.display()))?;
            let provider = Provider::openrouter(
                &config.openrouter_base_url,
                &config.vision_model,
                config.openrouter_key.clone(),
                config.site.clone(),
            );
            let text = provider
                .describe_ingredients(&bytes, mime_type_for(&image))
                .await
                .context("Image analysis failed")?;
            let detected = PantrySet::from_raw(split_ingredient_list(&text));
            println!("{}", detected.tokens().join(", "));
        }
    }

    Ok(())
}
