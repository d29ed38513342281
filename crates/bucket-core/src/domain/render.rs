//! Template rendering.
//!
//! Templates are static strings with `{{OWNER}}` / `{{REPO}}` placeholders.
//! A [`RenderContext`] substitutes values either verbatim (plain-text
//! contexts like README.md and CNAME) or HTML-escaped (the homepage).
//!
//! The original bootstrap script interpolated names into HTML unescaped; a
//! repository name containing `<` or `"` would have corrupted the page.
//! Here the output context picks the escaping.

use std::collections::HashMap;

use crate::domain::remote::RepoSlug;

/// Escape the five HTML-significant characters.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Variable substitution context for the scaffold templates.
///
/// Built-in variables are `SCREAMING_SNAKE_CASE`:
///
/// | Variable | Example |
/// |----------|---------|
/// | `OWNER`  | `alice` |
/// | `REPO`   | `dharma-notes` |
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    /// Context substituting the slug's values verbatim.
    pub fn new(slug: &RepoSlug) -> Self {
        let mut variables = HashMap::new();
        variables.insert("OWNER".to_string(), slug.owner().to_string());
        variables.insert("REPO".to_string(), slug.repo().to_string());
        Self { variables }
    }

    /// Context substituting HTML-escaped values, for `.html` output.
    pub fn html(slug: &RepoSlug) -> Self {
        let mut variables = HashMap::new();
        variables.insert("OWNER".to_string(), escape_html(slug.owner()));
        variables.insert("REPO".to_string(), escape_html(slug.repo()));
        Self { variables }
    }

    /// Get a variable value if it exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// Unknown placeholders are left as-is. Substituted values are never
    /// re-scanned, so rendering is deterministic and idempotent.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();

        // Single-pass replacement. Order doesn't matter for independent variables.
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }

        result
    }
}
