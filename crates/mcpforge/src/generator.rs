//! Generation orchestrator: specification to on-disk project skeleton.

use crate::catalog::TemplateCatalog;
use crate::config::Settings;
use mcpforge_core::{ForgeError, ServerSpec};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

/// Name of the client-registration file written next to the generated code.
pub const CLIENT_CONFIG_FILE: &str = "claude_config.json";

/// Composes validation, template lookup, and file emission into the single
/// user-facing "create a server" operation.
pub struct ServerGenerator {
    catalog: TemplateCatalog,
    settings: Settings,
}

impl ServerGenerator {
    /// Creates a generator over the settings' template directory.
    pub fn new(settings: Settings) -> Self {
        Self {
            catalog: TemplateCatalog::new(settings.template_dir.clone()),
            settings,
        }
    }

    /// Discovers the template library.
    pub async fn initialize(&mut self) -> Result<(), ForgeError> {
        self.catalog.initialize().await
    }

    /// Read access to the template catalog.
    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    /// Drops catalog state.
    pub fn cleanup(&mut self) {
        self.catalog.cleanup();
    }

    /// Creates a server project on disk and returns a human-readable status.
    ///
    /// A missing template is not an error: the returned status enumerates up
    /// to three alternatives from the same language.
    pub async fn create_server(
        &self,
        name: &str,
        description: &str,
        language: &str,
        template_type: &str,
        features: Vec<String>,
        output_dir: Option<PathBuf>,
    ) -> Result<String, ForgeError> {
        let spec = ServerSpec::new(
            name,
            description,
            language,
            template_type,
            features,
            output_dir,
        )?;

        if self.catalog.get(&spec.template_key()).is_none() {
            return Ok(self.suggest_alternatives(&spec));
        }

        let server_dir = self.resolve_output_dir(&spec);
        fs::create_dir_all(&server_dir).await?;

        let variables = template_variables(&spec);
        let source = self.catalog.render(&spec.template_key(), &variables).await?;
        fs::write(server_dir.join(main_file_name(&spec.language)), source).await?;

        write_readme(&spec, &server_dir).await?;
        let config_content = write_client_config(&spec, &server_dir).await?;

        info!(name = %spec.name, dir = %server_dir.display(), "created server project");
        Ok(format_success(&spec, &server_dir, &config_content))
    }

    fn resolve_output_dir(&self, spec: &ServerSpec) -> PathBuf {
        let base = spec
            .output_dir
            .clone()
            .unwrap_or_else(|| self.settings.output_dir.clone());
        base.join(&spec.name)
    }

    fn suggest_alternatives(&self, spec: &ServerSpec) -> String {
        let available = self.catalog.list(Some(&spec.language));
        let Some(templates) = available.get(&spec.language) else {
            return format!("❌ No templates available for {}", spec.language);
        };

        let suggestions: Vec<String> = templates
            .iter()
            .take(3)
            .map(|t| format!("• {}: {}", t.name, t.description))
            .collect();

        format!(
            "❌ Template '{}' not found for {}\n\n\
             Available alternatives:\n{}\n\n\
             Use `list_templates` to see all options.",
            spec.template_type,
            spec.language,
            suggestions.join("\n"),
        )
    }
}

impl std::fmt::Debug for ServerGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerGenerator")
            .field("catalog", &self.catalog)
            .field("settings", &self.settings)
            .finish()
    }
}

fn main_file_name(language: &str) -> &'static str {
    match language {
        "python" | "gradio" => "main.py",
        "typescript" => "index.ts",
        _ => "main.txt",
    }
}

fn template_variables(spec: &ServerSpec) -> Value {
    json!({
        "server_name": spec.name,
        "description": spec.description,
        "features": spec.features,
        "class_name": spec.class_name(),
        "suggested_tools": suggest_tools(spec),
        "suggested_resources": suggest_resources(spec),
    })
}

/// Deterministic enhancement suggestions keyed off the description.
fn suggest_tools(spec: &ServerSpec) -> Vec<Value> {
    let description = spec.description.to_lowercase();
    let mut tools = vec![json!({
        "name": "process_data",
        "description": format!("Process data for {}", spec.description),
        "parameters": ["data: str", "operation: str = 'analyze'"],
    })];

    if description.contains("database") {
        tools.push(json!({
            "name": "query_database",
            "description": "Execute database queries safely",
            "parameters": ["query: str", "limit: int = 100"],
        }));
    }
    if description.contains("file") {
        tools.push(json!({
            "name": "process_file",
            "description": "Process and analyze files",
            "parameters": ["file_path: str", "operation: str"],
        }));
    }

    tools
}

fn suggest_resources(spec: &ServerSpec) -> Vec<Value> {
    let mut resources = vec![json!({
        "name": format!("{}://status", spec.name),
        "description": "Server status and health information",
    })];

    if spec.description.to_lowercase().contains("config") {
        resources.push(json!({
            "name": format!("{}://config", spec.name),
            "description": "Configuration data and settings",
        }));
    }

    resources
}

async fn write_readme(spec: &ServerSpec, server_dir: &Path) -> Result<(), ForgeError> {
    let title = spec
        .name
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    let features = spec
        .features
        .iter()
        .map(|f| format!("- {f}"))
        .collect::<Vec<_>>()
        .join("\n");

    let content = format!(
        "# {title}\n\n\
         {}\n\n\
         ## Features\n{features}\n\n\
         ## Installation\n```bash\nuv venv --python 3.12 --seed\nsource .venv/bin/activate\nuv add \"mcp[cli]\"\n```\n\n\
         ## Usage\n```bash\npython main.py\n```\n\n\
         ## Configuration\n\
         Add to your Claude Desktop config:\n\
         See `{CLIENT_CONFIG_FILE}` in this directory.\n\n\
         Generated by mcpforge\n",
        spec.description,
    );

    fs::write(server_dir.join("README.md"), content).await?;
    Ok(())
}

/// Writes the client-registration JSON. The `mcpServers` shape is consumed
/// verbatim by downstream clients and must not change.
async fn write_client_config(spec: &ServerSpec, server_dir: &Path) -> Result<String, ForgeError> {
    let absolute_dir = fs::canonicalize(server_dir)
        .await
        .unwrap_or_else(|_| server_dir.to_path_buf());

    let config = json!({
        "mcpServers": {
            (spec.name.clone()): {
                "command": "uv",
                "args": [
                    "--directory",
                    absolute_dir.to_string_lossy(),
                    "run",
                    "python",
                    "main.py",
                ],
            },
        },
    });

    let content = serde_json::to_string_pretty(&config)?;
    fs::write(server_dir.join(CLIENT_CONFIG_FILE), &content).await?;
    Ok(content)
}

fn format_success(spec: &ServerSpec, server_dir: &Path, config_content: &str) -> String {
    let features = if spec.features.is_empty() {
        "basic".to_string()
    } else {
        spec.features.join(", ")
    };

    format!(
        "✅ MCP Server '{}' created successfully!\n\n\
         📁 Location: {}\n\
         🛠 Language: {}\n\
         📋 Template: {}\n\
         ⚡ Features: {features}\n\n\
         📋 Next Steps:\n\
         1. Review the generated code in {}\n\
         2. Test the server: `cd {} && python main.py`\n\
         3. Add to Claude Desktop config:\n\n\
         {config_content}\n\n\
         🎉 Your MCP server is ready to use!",
        spec.name,
        server_dir.display(),
        spec.language,
        spec.template_type,
        server_dir.display(),
        server_dir.display(),
    )
}
