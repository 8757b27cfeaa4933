//! Template catalog: discovery, lookup, and rendering.
//!
//! Templates live under `<template_dir>/languages/<language>/<name>/`, each
//! holding a `template.hbs` source skeleton and an optional `metadata.json`.

use handlebars::Handlebars;
use mcpforge_core::ForgeError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use tokio::fs;
use tracing::{info, warn};

const TEMPLATE_SOURCE_FILE: &str = "template.hbs";

/// Descriptive metadata for one template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateMetadata {
    /// Template name (the directory name by default).
    pub name: String,
    /// Human-readable description.
    #[serde(default = "default_description")]
    pub description: String,
    /// Target language.
    pub language: String,
    /// Capability flags the template provides.
    #[serde(default)]
    pub features: Vec<String>,
}

fn default_description() -> String {
    "No description".to_string()
}

/// A discovered template: where it lives and what it claims to be.
#[derive(Debug, Clone)]
pub struct Template {
    /// Directory holding the template source.
    pub path: PathBuf,
    /// Parsed or defaulted metadata.
    pub metadata: TemplateMetadata,
}

impl Template {
    /// Template name.
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Target language.
    pub fn language(&self) -> &str {
        &self.metadata.language
    }
}

/// Listing entry, grouped by language in [`TemplateCatalog::list`].
#[derive(Debug, Clone, Serialize)]
pub struct TemplateInfo {
    /// Template name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Capability flags.
    pub features: Vec<String>,
}

/// Lookup service mapping a `"{language}:{name}"` key to renderable project
/// skeletons.
pub struct TemplateCatalog {
    template_dir: PathBuf,
    templates: HashMap<String, Template>,
}

impl TemplateCatalog {
    /// Creates a catalog rooted at the given template directory.
    pub fn new(template_dir: impl Into<PathBuf>) -> Self {
        Self {
            template_dir: template_dir.into(),
            templates: HashMap::new(),
        }
    }

    /// Discovers templates on disk. A template with invalid metadata is
    /// logged and skipped; a missing languages directory leaves the catalog
    /// empty.
    pub async fn initialize(&mut self) -> Result<(), ForgeError> {
        let languages_dir = self.template_dir.join("languages");
        if !languages_dir.is_dir() {
            warn!(path = %languages_dir.display(), "template languages directory not found");
            return Ok(());
        }

        let mut languages = fs::read_dir(&languages_dir).await?;
        while let Some(language_entry) = languages.next_entry().await? {
            if !language_entry.path().is_dir() {
                continue;
            }
            let language = language_entry.file_name().to_string_lossy().to_string();

            let mut templates = fs::read_dir(language_entry.path()).await?;
            while let Some(template_entry) = templates.next_entry().await? {
                if !template_entry.path().is_dir() {
                    continue;
                }
                self.load_template(template_entry.path(), &language).await;
            }
        }

        info!(count = self.templates.len(), "template catalog initialized");
        Ok(())
    }

    /// Returns the template registered under `"{language}:{name}"`.
    pub fn get(&self, key: &str) -> Option<&Template> {
        self.templates.get(key)
    }

    /// Lists templates grouped by language, optionally filtered to one
    /// language.
    pub fn list(&self, language: Option<&str>) -> BTreeMap<String, Vec<TemplateInfo>> {
        let mut result: BTreeMap<String, Vec<TemplateInfo>> = BTreeMap::new();

        for template in self.templates.values() {
            if language.is_some_and(|l| l != template.language()) {
                continue;
            }
            result
                .entry(template.language().to_string())
                .or_default()
                .push(TemplateInfo {
                    name: template.name().to_string(),
                    description: template.metadata.description.clone(),
                    features: template.metadata.features.clone(),
                });
        }

        for templates in result.values_mut() {
            templates.sort_by(|a, b| a.name.cmp(&b.name));
        }
        result
    }

    /// Renders the template's source skeleton with the given variables.
    pub async fn render(&self, key: &str, variables: &Value) -> Result<String, ForgeError> {
        let template = self.get(key).ok_or_else(|| lookup_error(key))?;
        let source = fs::read_to_string(template.path.join(TEMPLATE_SOURCE_FILE)).await?;

        // Templates emit source code, not HTML.
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        registry
            .render_template(&source, variables)
            .map_err(|e| ForgeError::Template(e.to_string()))
    }

    /// Drops the discovered template set.
    pub fn cleanup(&mut self) {
        self.templates.clear();
        info!("template catalog cleaned up");
    }

    async fn load_template(&mut self, path: PathBuf, language: &str) {
        let name = path.file_name().map(|n| n.to_string_lossy().to_string());
        let Some(name) = name else { return };

        let metadata_file = path.join("metadata.json");
        let metadata = if metadata_file.is_file() {
            match read_metadata(&metadata_file).await {
                Ok(metadata) => metadata,
                Err(e) => {
                    warn!(path = %metadata_file.display(), error = %e, "invalid template metadata");
                    return;
                }
            }
        } else {
            TemplateMetadata {
                name: name.clone(),
                description: format!("Template for {name}"),
                language: language.to_string(),
                features: Vec::new(),
            }
        };

        let key = format!("{language}:{name}");
        self.templates.insert(key, Template { path, metadata });
    }
}

impl std::fmt::Debug for TemplateCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateCatalog")
            .field("template_dir", &self.template_dir)
            .field("templates", &self.templates.keys().collect::<Vec<_>>())
            .finish()
    }
}

async fn read_metadata(path: &std::path::Path) -> Result<TemplateMetadata, ForgeError> {
    let content = fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&content)?)
}

fn lookup_error(key: &str) -> ForgeError {
    let (language, template_type) = key.split_once(':').unwrap_or((key, ""));
    ForgeError::TemplateNotFound {
        language: language.to_string(),
        template_type: template_type.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    async fn write_template(
        root: &std::path::Path,
        language: &str,
        name: &str,
        metadata: Option<&str>,
        source: &str,
    ) {
        let dir = root.join("languages").join(language).join(name);
        fs::create_dir_all(&dir).await.unwrap();
        fs::write(dir.join(TEMPLATE_SOURCE_FILE), source).await.unwrap();
        if let Some(metadata) = metadata {
            fs::write(dir.join("metadata.json"), metadata).await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_discovery_and_lookup() {
        let dir = tempdir().unwrap();
        write_template(
            dir.path(),
            "python",
            "basic",
            Some(r#"{"name": "basic", "description": "Basic server", "language": "python"}"#),
            "# {{server_name}}",
        )
        .await;

        let mut catalog = TemplateCatalog::new(dir.path());
        catalog.initialize().await.unwrap();

        let template = catalog.get("python:basic").unwrap();
        assert_eq!(template.name(), "basic");
        assert_eq!(template.metadata.description, "Basic server");
        assert!(catalog.get("python:advanced").is_none());
    }

    #[tokio::test]
    async fn test_missing_metadata_gets_defaults() {
        let dir = tempdir().unwrap();
        write_template(dir.path(), "typescript", "basic", None, "// skeleton").await;

        let mut catalog = TemplateCatalog::new(dir.path());
        catalog.initialize().await.unwrap();

        let template = catalog.get("typescript:basic").unwrap();
        assert_eq!(template.metadata.description, "Template for basic");
        assert_eq!(template.language(), "typescript");
    }

    #[tokio::test]
    async fn test_invalid_metadata_skipped() {
        let dir = tempdir().unwrap();
        write_template(dir.path(), "python", "broken", Some("not json"), "x").await;
        write_template(dir.path(), "python", "good", None, "y").await;

        let mut catalog = TemplateCatalog::new(dir.path());
        catalog.initialize().await.unwrap();

        assert!(catalog.get("python:broken").is_none());
        assert!(catalog.get("python:good").is_some());
    }

    #[tokio::test]
    async fn test_list_filters_by_language() {
        let dir = tempdir().unwrap();
        write_template(dir.path(), "python", "basic", None, "x").await;
        write_template(dir.path(), "typescript", "basic", None, "y").await;

        let mut catalog = TemplateCatalog::new(dir.path());
        catalog.initialize().await.unwrap();

        let all = catalog.list(None);
        assert_eq!(all.len(), 2);

        let python_only = catalog.list(Some("python"));
        assert_eq!(python_only.len(), 1);
        assert_eq!(python_only["python"].len(), 1);
    }

    #[tokio::test]
    async fn test_render_substitutes_variables() {
        let dir = tempdir().unwrap();
        write_template(
            dir.path(),
            "python",
            "basic",
            None,
            "# {{server_name}}: {{description}}",
        )
        .await;

        let mut catalog = TemplateCatalog::new(dir.path());
        catalog.initialize().await.unwrap();

        let rendered = catalog
            .render(
                "python:basic",
                &json!({"server_name": "weather", "description": "Weather data"}),
            )
            .await
            .unwrap();
        assert_eq!(rendered, "# weather: Weather data");
    }

    #[tokio::test]
    async fn test_render_unknown_key() {
        let catalog = TemplateCatalog::new("/nonexistent");
        let err = catalog.render("python:basic", &json!({})).await.unwrap_err();
        assert!(matches!(err, ForgeError::TemplateNotFound { .. }));
    }

    #[tokio::test]
    async fn test_missing_languages_dir_is_empty_catalog() {
        let dir = tempdir().unwrap();
        let mut catalog = TemplateCatalog::new(dir.path());
        catalog.initialize().await.unwrap();
        assert!(catalog.list(None).is_empty());
    }
}
