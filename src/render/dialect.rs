//! Placeholder dialects and renderer configuration
//!
//! Plaintext templates use the stock `{{ }}`/`{% %}` syntax and print values
//! as-is. LaTeX templates use `<VAR>`, `<BLOCK>` and `<!-- -->` so braces and
//! percent signs stay literal, and every string they print has `#` escaped.
//! A [`RendererConfig`] bundles the dialect with the whitespace switches and
//! is handed to the renderer explicitly.

use minijinja::syntax::SyntaxConfig;

use crate::error::{ForgeError, Result};

pub const BLOCK_START: &str = "<BLOCK>";
pub const BLOCK_END: &str = "</BLOCK>";
pub const VARIABLE_START: &str = "<VAR>";
pub const VARIABLE_END: &str = "</VAR>";
pub const COMMENT_START: &str = "<!--";
pub const COMMENT_END: &str = "-->";

/// Placeholder convention a template is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    /// `{{ }}` / `{% %}` / `{# #}`, no escaping
    #[default]
    Default,
    /// `<VAR>` / `<BLOCK>` / `<!-- -->`, `#` escaped in string output
    MarkupSafe,
}

impl Dialect {
    pub fn name(self) -> &'static str {
        match self {
            Dialect::Default => "default",
            Dialect::MarkupSafe => "markup-safe",
        }
    }

    /// Whether string values are escaped before interpolation
    pub fn escapes_strings(self) -> bool {
        self == Dialect::MarkupSafe
    }

    pub(crate) fn syntax(self) -> Result<Option<SyntaxConfig>> {
        match self {
            Dialect::Default => Ok(None),
            Dialect::MarkupSafe => SyntaxConfig::builder()
                .block_delimiters(BLOCK_START, BLOCK_END)
                .variable_delimiters(VARIABLE_START, VARIABLE_END)
                .comment_delimiters(COMMENT_START, COMMENT_END)
                .build()
                .map(Some)
                .map_err(|e| ForgeError::template("<syntax>", e)),
        }
    }
}

/// Template environment settings handed to [`super::Renderer::new`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RendererConfig {
    pub dialect: Dialect,
    /// Drop the first newline after a block tag
    pub trim_blocks: bool,
    /// Strip leading whitespace before a block tag
    pub lstrip_blocks: bool,
    pub keep_trailing_newline: bool,
}

impl RendererConfig {
    pub fn for_dialect(dialect: Dialect) -> Self {
        Self {
            dialect,
            trim_blocks: true,
            lstrip_blocks: true,
            keep_trailing_newline: true,
        }
    }

    pub fn plaintext() -> Self {
        Self::for_dialect(Dialect::Default)
    }

    pub fn markup_safe() -> Self {
        Self::for_dialect(Dialect::MarkupSafe)
    }
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self::plaintext()
    }
}
