//! Server specification and identifier normalization.

use crate::error::ForgeError;
use std::path::PathBuf;

/// Prefix applied when a normalized name does not start with a letter.
const IDENTIFIER_PREFIX: &str = "mcp_";

/// Normalizes a raw server name into a safe lowercase identifier.
///
/// Leading/trailing whitespace is stripped, every character outside
/// `[A-Za-z0-9_]` becomes an underscore, and a `mcp_` prefix is prepended
/// when the first character is not a letter. Empty or whitespace-only input
/// fails with [`ForgeError::InvalidSpecification`] rather than substituting
/// a default. Pure and idempotent.
///
/// # Examples
///
/// ```
/// use mcpforge_core::normalize_identifier;
///
/// assert_eq!(normalize_identifier("My Server!").unwrap(), "my_server_");
/// assert_eq!(normalize_identifier("2fast").unwrap(), "mcp_2fast");
/// assert!(normalize_identifier("   ").is_err());
/// ```
pub fn normalize_identifier(raw: &str) -> Result<String, ForgeError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ForgeError::InvalidSpecification(
            "server name must not be empty".to_string(),
        ));
    }

    let mut cleaned: String = trimmed
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    let starts_with_letter = cleaned
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic());
    if !starts_with_letter {
        cleaned = format!("{IDENTIFIER_PREFIX}{cleaned}");
    }

    Ok(cleaned.to_ascii_lowercase())
}

/// Validated specification for one server generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSpec {
    /// Normalized server name.
    pub name: String,
    /// What the server does.
    pub description: String,
    /// Target language (`python`, `gradio`, `typescript`, ...).
    pub language: String,
    /// Template category (`basic`, `advanced`, ...).
    pub template_type: String,
    /// Requested capability flags.
    pub features: Vec<String>,
    /// Caller-chosen output directory, when given.
    pub output_dir: Option<PathBuf>,
}

impl ServerSpec {
    /// Builds a spec, normalizing the name.
    pub fn new(
        name: &str,
        description: impl Into<String>,
        language: impl Into<String>,
        template_type: impl Into<String>,
        features: Vec<String>,
        output_dir: Option<PathBuf>,
    ) -> Result<Self, ForgeError> {
        Ok(Self {
            name: normalize_identifier(name)?,
            description: description.into(),
            language: language.into(),
            template_type: template_type.into(),
            features,
            output_dir,
        })
    }

    /// Catalog lookup key: `"{language}:{template_type}"`.
    pub fn template_key(&self) -> String {
        format!("{}:{}", self.language, self.template_type)
    }

    /// PascalCase form of the name, used as a template variable.
    pub fn class_name(&self) -> String {
        self.name
            .split('_')
            .filter(|part| !part.is_empty())
            .map(|part| {
                let mut chars = part.chars();
                match chars.next() {
                    Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_replaces_special_chars() {
        assert_eq!(normalize_identifier("my-server.v2").unwrap(), "my_server_v2");
    }

    #[test]
    fn test_normalize_prefixes_non_letter() {
        assert_eq!(normalize_identifier("42tools").unwrap(), "mcp_42tools");
        assert_eq!(normalize_identifier("_hidden").unwrap(), "mcp__hidden");
    }

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize_identifier("WeatherAPI").unwrap(), "weatherapi");
    }

    #[test]
    fn test_normalize_rejects_empty() {
        assert!(matches!(
            normalize_identifier(""),
            Err(ForgeError::InvalidSpecification(_))
        ));
        assert!(normalize_identifier(" \t ").is_err());
    }

    #[test]
    fn test_normalize_idempotent() {
        for raw in ["My Server!", "42tools", "_x", "already_clean", "A b-C.9"] {
            let once = normalize_identifier(raw).unwrap();
            let twice = normalize_identifier(&once).unwrap();
            assert_eq!(once, twice, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn test_template_key() {
        let spec = ServerSpec::new(
            "weather",
            "Weather data",
            "python",
            "basic",
            vec![],
            None,
        )
        .unwrap();
        assert_eq!(spec.template_key(), "python:basic");
    }

    #[test]
    fn test_class_name() {
        let spec = ServerSpec::new(
            "weather_data_server",
            "Weather data",
            "python",
            "basic",
            vec![],
            None,
        )
        .unwrap();
        assert_eq!(spec.class_name(), "WeatherDataServer");
    }
}
