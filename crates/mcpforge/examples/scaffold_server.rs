//! Scaffold a server project from a template.
//!
//! Seeds a minimal python template into a scratch directory, then runs the
//! full create-server path: validation, catalog lookup, rendering, and file
//! emission.

use mcpforge::prelude::*;
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), ForgeError> {
    tracing_subscriber::fmt::init();

    let root = std::env::temp_dir().join("mcpforge_scaffold_demo");
    let settings = Settings {
        output_dir: root.join("servers"),
        template_dir: root.join("templates"),
        workflow_dir: root.join("workflows"),
    };

    seed_template(&settings).await?;

    let mut ctx = ForgeContext::new(settings);
    ctx.initialize().await?;

    println!("{}", ops::list_templates(&ctx, None));

    let status = ops::create_server(
        &ctx,
        "Weather Server",
        "Fetches weather data for a city",
        "python",
        "basic",
        vec!["tools".to_string(), "resources".to_string()],
        None,
    )
    .await;
    println!("{status}");

    ctx.cleanup();
    Ok(())
}

async fn seed_template(settings: &Settings) -> Result<(), ForgeError> {
    let dir = settings
        .template_dir
        .join("languages")
        .join("python")
        .join("basic");
    tokio::fs::create_dir_all(&dir).await?;

    tokio::fs::write(
        dir.join("template.hbs"),
        "\"\"\"{{description}}\"\"\"\n\n\
         from mcp.server.fastmcp import FastMCP\n\n\
         mcp = FastMCP(\"{{server_name}}\")\n\n\
         if __name__ == \"__main__\":\n    mcp.run()\n",
    )
    .await?;

    tokio::fs::write(
        dir.join("metadata.json"),
        json!({
            "name": "basic",
            "description": "Minimal FastMCP server",
            "language": "python",
            "features": ["tools"],
        })
        .to_string(),
    )
    .await?;

    Ok(())
}
