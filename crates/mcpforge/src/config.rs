//! Engine settings.

use mcpforge_core::ForgeError;
use std::path::PathBuf;
use tokio::fs;

/// Filesystem locations the engine works against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Where generated projects land when the caller gives no directory.
    pub output_dir: PathBuf,
    /// Root of the template library.
    pub template_dir: PathBuf,
    /// Where workflow records are persisted.
    pub workflow_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("./mcp_servers"),
            template_dir: PathBuf::from("./templates"),
            workflow_dir: PathBuf::from("./mcp_creator_workflows"),
        }
    }
}

impl Settings {
    /// Builds settings from the environment, falling back to defaults.
    ///
    /// Honors `MCPFORGE_OUTPUT_DIR`, `MCPFORGE_TEMPLATE_DIR`, and
    /// `MCPFORGE_WORKFLOW_DIR`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            output_dir: env_path("MCPFORGE_OUTPUT_DIR").unwrap_or(defaults.output_dir),
            template_dir: env_path("MCPFORGE_TEMPLATE_DIR").unwrap_or(defaults.template_dir),
            workflow_dir: env_path("MCPFORGE_WORKFLOW_DIR").unwrap_or(defaults.workflow_dir),
        }
    }

    /// Creates every configured directory.
    pub async fn ensure_dirs(&self) -> Result<(), ForgeError> {
        for dir in [&self.output_dir, &self.template_dir, &self.workflow_dir] {
            fs::create_dir_all(dir).await?;
        }
        Ok(())
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key).map(PathBuf::from)
}
