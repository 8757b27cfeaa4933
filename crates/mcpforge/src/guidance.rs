//! Built-in guidance content for MCP development topics.
//!
//! Deterministic replacement for AI-generated guidance: a fixed library of
//! topic texts with a fallback message for unknown topics.

const SAMPLING: &str = "\
# MCP Sampling Guide

Sampling lets an MCP server delegate text generation back to the client's
LLM, creating a bidirectional pattern.

- Keep prompts self-contained; the client has no server-side context.
- Budget tokens: sampling shares the client's context window.
- Handle refusal gracefully; clients may decline a sampling request.
";

const RESOURCES: &str = "\
# MCP Resources Guide

Resources expose read-only data under a URI scheme.

- Use stable, predictable URIs (`myserver://status`, `myserver://config`).
- Return plain text or JSON; document the shape.
- Prefer resources over tools for data the client only reads.
";

const TOOLS: &str = "\
# MCP Tools Guide

Tools are the callable operations a server exposes.

- Validate every argument and fail with a clear message.
- Return formatted status strings rather than raising across the boundary.
- Keep tool names verbs (`create_server`, `list_templates`).
";

const PROMPTS: &str = "\
# MCP Prompts Guide

Prompts are reusable message templates a client can instantiate.

- Parameterize with named arguments; document each one.
- Keep prompts short and composable.
";

const BEST_PRACTICES: &str = "\
# MCP Best Practices

- Log to stderr; stdout belongs to the protocol.
- Catch errors at the operation boundary and report them as results.
- Make every operation safe to retry.
- Keep server startup fast; defer heavy work until first use.
";

/// Fixed library of guidance topics.
#[derive(Debug, Default)]
pub struct GuidanceLibrary;

impl GuidanceLibrary {
    /// Creates the library.
    pub fn new() -> Self {
        Self
    }

    /// Returns guidance for a topic. Topic names are case-insensitive and
    /// accept `-` for `_`; unknown topics get a fixed fallback message.
    pub fn get(&self, topic: &str) -> String {
        let key = topic.to_lowercase().replace('-', "_");
        match key.as_str() {
            "sampling" => SAMPLING.to_string(),
            "resources" => RESOURCES.to_string(),
            "tools" => TOOLS.to_string(),
            "prompts" => PROMPTS.to_string(),
            "best_practices" => BEST_PRACTICES.to_string(),
            _ => format!("Guidance for '{key}' is not yet available."),
        }
    }
}
