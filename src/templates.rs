//! Template lookup
//!
//! Templates are resolved from an optional user directory first, then from
//! the set compiled into the binary.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::error::{ForgeError, Result};

/// Templates shipped with the binary, keyed by file name
const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    (
        "resume-plaintext.txt.jinja2",
        include_str!("../templates/resume-plaintext.txt.jinja2"),
    ),
    (
        "resume-minimalist.tex.jinja2",
        include_str!("../templates/resume-minimalist.tex.jinja2"),
    ),
    (
        "resume-two-column.tex.jinja2",
        include_str!("../templates/resume-two-column.tex.jinja2"),
    ),
    (
        "cover-letter.tex.jinja2",
        include_str!("../templates/cover-letter.tex.jinja2"),
    ),
];

/// Where a template was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateOrigin {
    Directory(PathBuf),
    Builtin,
}

/// Resolves template names to template source text
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    dir: Option<PathBuf>,
}

impl TemplateStore {
    /// Only the built-in templates
    pub fn builtin() -> Self {
        Self { dir: None }
    }

    /// Templates in `dir` take precedence over built-ins of the same name
    pub fn with_dir<P: Into<PathBuf>>(dir: P) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }

    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    /// Names of the built-in templates
    pub fn builtin_names() -> impl Iterator<Item = &'static str> {
        BUILTIN_TEMPLATES.iter().map(|(name, _)| *name)
    }

    /// Find where `name` would be loaded from
    pub fn locate(&self, name: &str) -> Option<TemplateOrigin> {
        if let Some(path) = self.dir_path(name) {
            if path.is_file() {
                return Some(TemplateOrigin::Directory(path));
            }
        }
        builtin_source(name).map(|_| TemplateOrigin::Builtin)
    }

    /// Load the source text of `name`
    pub fn load(&self, name: &str) -> Result<Cow<'static, str>> {
        match self.locate(name) {
            Some(TemplateOrigin::Directory(path)) => {
                tracing::debug!("Loading template {} from {}", name, path.display());
                std::fs::read_to_string(&path)
                    .map(Cow::Owned)
                    .map_err(|err| ForgeError::TemplateNotFound {
                        name: name.to_string(),
                        searched: format!("{} (unreadable: {})", path.display(), err),
                    })
            }
            Some(TemplateOrigin::Builtin) => {
                tracing::debug!("Using built-in template {}", name);
                builtin_source(name)
                    .map(Cow::Borrowed)
                    .ok_or_else(|| self.not_found(name))
            }
            None => Err(self.not_found(name)),
        }
    }

    fn dir_path(&self, name: &str) -> Option<PathBuf> {
        // Names are plain file names; anything path-like only resolves as a built-in miss
        if name.contains(['/', '\\']) || name == ".." {
            return None;
        }
        self.dir.as_ref().map(|dir| dir.join(name))
    }

    fn not_found(&self, name: &str) -> ForgeError {
        let searched = match &self.dir {
            Some(dir) => format!("{}, built-in", dir.display()),
            None => "built-in".to_string(),
        };
        ForgeError::TemplateNotFound {
            name: name.to_string(),
            searched,
        }
    }
}

fn builtin_source(name: &str) -> Option<&'static str> {
    BUILTIN_TEMPLATES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, source)| *source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::DocumentKind;

    #[test]
    fn test_every_kind_has_builtin_template() {
        let store = TemplateStore::builtin();
        assert_eq!(TemplateStore::builtin_names().count(), DocumentKind::ALL.len());
        for kind in DocumentKind::ALL {
            assert_eq!(
                store.locate(kind.template_name()),
                Some(TemplateOrigin::Builtin),
                "missing template for {}",
                kind
            );
        }
    }

    #[test]
    fn test_directory_overrides_builtin() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("cover-letter.tex.jinja2"), "custom").unwrap();

        let store = TemplateStore::with_dir(dir.path());
        assert_eq!(store.load("cover-letter.tex.jinja2").unwrap(), "custom");
        assert!(matches!(
            store.locate("resume-plaintext.txt.jinja2"),
            Some(TemplateOrigin::Builtin)
        ));
    }

    #[test]
    fn test_missing_template() {
        let dir = tempfile::tempdir().unwrap();
        let store = TemplateStore::with_dir(dir.path());
        let err = store.load("nope.jinja2").unwrap_err();
        assert_eq!(err.kind(), "TemplateError");
        assert!(err.to_string().contains("nope.jinja2"));
    }

    #[test]
    fn test_unreadable_template_is_template_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("latin1.txt.jinja2"), b"caf\xe9").unwrap();

        let store = TemplateStore::with_dir(dir.path());
        let err = store.load("latin1.txt.jinja2").unwrap_err();
        assert_eq!(err.kind(), "TemplateError");
        assert!(err.to_string().contains("unreadable"));
    }

    #[test]
    fn test_path_like_names_not_read_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = TemplateStore::with_dir(dir.path().join("templates"));
        assert!(store.load("../secret").is_err());
    }
}
