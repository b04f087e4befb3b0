//! Document rendering
//!
//! A [`Renderer`] owns one template environment built from an explicit
//! [`RendererConfig`], so plain and markup-safe renderers can live side by
//! side without sharing settings.

mod context;
mod dialect;
mod escape;

use std::fmt::Write as _;

use minijinja::{AutoEscape, Environment, Error, ErrorKind, UndefinedBehavior};

use crate::document::{DocumentRecord, Section};
use crate::error::{ForgeError, Result};
use crate::kind::DocumentKind;
use crate::templates::TemplateStore;

pub use context::{project, RenderContext};
pub use dialect::{
    Dialect, RendererConfig, BLOCK_END, BLOCK_START, COMMENT_END, COMMENT_START, VARIABLE_END,
    VARIABLE_START,
};
pub use escape::latex_escape;

/// Renders records through templates of a single dialect
pub struct Renderer {
    config: RendererConfig,
    store: TemplateStore,
    env: Environment<'static>,
}

impl Renderer {
    pub fn new(config: RendererConfig, store: TemplateStore) -> Result<Self> {
        let mut env = Environment::new();
        if let Some(syntax) = config.dialect.syntax()? {
            env.set_syntax(syntax);
        }
        env.set_trim_blocks(config.trim_blocks);
        env.set_lstrip_blocks(config.lstrip_blocks);
        env.set_keep_trailing_newline(config.keep_trailing_newline);
        // Missing keys, including lookups through them, render as empty
        env.set_undefined_behavior(UndefinedBehavior::Chainable);
        env.set_auto_escape_callback(|_| AutoEscape::None);

        if config.dialect.escapes_strings() {
            env.set_formatter(|out, state, value| match value.as_str() {
                Some(text) => out.write_str(&latex_escape(text)).map_err(|err| {
                    Error::new(ErrorKind::WriteFailure, "failed to write output").with_source(err)
                }),
                None => minijinja::escape_formatter(out, state, value),
            });
        }

        Ok(Self { config, store, env })
    }

    /// Renderer configured for the dialect `kind` is written in
    pub fn for_kind(kind: DocumentKind, store: TemplateStore) -> Result<Self> {
        Self::new(RendererConfig::for_dialect(kind.dialect()), store)
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Render the template bound to `kind`
    pub fn render_kind(&self, kind: DocumentKind, record: &DocumentRecord) -> Result<String> {
        self.render(kind.template_name(), kind.sections(), record)
    }

    /// Render template `name` with the given sections of `record`
    pub fn render(
        &self,
        name: &str,
        sections: &[Section],
        record: &DocumentRecord,
    ) -> Result<String> {
        let source = self.store.load(name)?;
        self.render_source(name, &source, sections, record)
    }

    /// Render template text that did not come from the store
    pub fn render_source(
        &self,
        name: &str,
        source: &str,
        sections: &[Section],
        record: &DocumentRecord,
    ) -> Result<String> {
        let context = project(record, sections);
        tracing::debug!(
            "Rendering {} ({} dialect, {} sections)",
            name,
            self.config.dialect.name(),
            context.len()
        );

        self.env
            .render_named_str(name, source, &context)
            .map_err(|e| ForgeError::template(name, e))
    }
}

/// Render `record` as a document of `kind`
pub fn render_document(
    kind: DocumentKind,
    record: &DocumentRecord,
    store: &TemplateStore,
) -> Result<String> {
    Renderer::for_kind(kind, store.clone())?.render_kind(kind, record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(yaml: &str) -> DocumentRecord {
        DocumentRecord::from_yaml_str(yaml).unwrap()
    }

    fn markup_safe() -> Renderer {
        Renderer::new(RendererConfig::markup_safe(), TemplateStore::builtin()).unwrap()
    }

    fn plaintext() -> Renderer {
        Renderer::new(RendererConfig::plaintext(), TemplateStore::builtin()).unwrap()
    }

    #[test]
    fn test_scalar_interpolation() {
        let out = plaintext()
            .render_source(
                "t",
                "Name: {{ Contact.name }}",
                &[Section::Contact],
                &record("Contact: {name: A. Lee}"),
            )
            .unwrap();
        assert_eq!(out, "Name: A. Lee");
    }

    #[test]
    fn test_markup_safe_escapes_strings_only() {
        let out = markup_safe()
            .render_source(
                "t",
                "<VAR>Contact.name</VAR>|<VAR>Contact.year</VAR>|<VAR>Contact.tags</VAR>",
                &[Section::Contact],
                &record("Contact: {name: '#1 Dev', year: 2024, tags: ['#a']}"),
            )
            .unwrap();
        assert!(out.starts_with(r"\#1 Dev|2024|"));
    }

    #[test]
    fn test_plaintext_leaves_hash_alone() {
        let out = plaintext()
            .render_source(
                "t",
                "{{ Contact.name }}",
                &[Section::Contact],
                &record("Contact: {name: '#1 Dev'}"),
            )
            .unwrap();
        assert_eq!(out, "#1 Dev");
    }

    #[test]
    fn test_markup_safe_leaves_braces_literal() {
        let out = markup_safe()
            .render_source(
                "t",
                r"\textbf{<VAR>Contact.name</VAR>} {{ not a tag }} <!-- note -->",
                &[Section::Contact],
                &record("Contact: {name: X}"),
            )
            .unwrap();
        assert_eq!(out, r"\textbf{X} {{ not a tag }} ");
    }

    #[test]
    fn test_iteration_preserves_order_and_duplicates() {
        let out = plaintext()
            .render_source(
                "t",
                "{% for e in Education %}[{{ e.school }}]{% endfor %}",
                &[Section::Education],
                &record("Education: [{school: B}, {school: A}, {school: B}]"),
            )
            .unwrap();
        assert_eq!(out, "[B][A][B]");
    }

    #[test]
    fn test_conditional_on_absent_section() {
        let template = "{% if Honors %}Honors:{% for h in Honors %} {{ h.title }}{% endfor %}{% endif %}end";
        let out = plaintext()
            .render_source("t", template, &Section::RESUME, &record("{}"))
            .unwrap();
        assert_eq!(out, "end");
    }

    #[test]
    fn test_nested_lookup_on_missing_section() {
        let out = markup_safe()
            .render_source(
                "t",
                "[<VAR>Contact.address.city</VAR>]",
                &[Section::Contact],
                &record("{}"),
            )
            .unwrap();
        assert_eq!(out, "[]");
    }

    #[test]
    fn test_malformed_placeholder() {
        let err = markup_safe()
            .render_source("broken", "<BLOCK>for x in</BLOCK>", &[], &record("{}"))
            .unwrap_err();
        assert_eq!(err.kind(), "TemplateError");
    }

    #[test]
    fn test_missing_template() {
        let err = plaintext()
            .render("missing.txt.jinja2", &Section::RESUME, &record("{}"))
            .unwrap_err();
        assert_eq!(err.kind(), "TemplateError");
    }

    #[test]
    fn test_renderers_coexist() {
        let plain = plaintext();
        let safe = markup_safe();
        let data = record("Contact: {name: '#x'}");

        let a = plain
            .render_source("a", "{{ Contact.name }}", &[Section::Contact], &data)
            .unwrap();
        let b = safe
            .render_source("b", "<VAR>Contact.name</VAR>", &[Section::Contact], &data)
            .unwrap();
        assert_eq!(a, "#x");
        assert_eq!(b, r"\#x");
    }
}
