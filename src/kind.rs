//! Document kinds
//!
//! Each kind is bound to one template, one dialect and one section list.

use std::fmt;
use std::str::FromStr;

use crate::document::Section;
use crate::error::ForgeError;
use crate::render::Dialect;

/// A recognized kind of output document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    ResumePlaintext,
    ResumeMinimalist,
    ResumeTwoColumn,
    CoverLetter,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 4] = [
        DocumentKind::ResumePlaintext,
        DocumentKind::ResumeMinimalist,
        DocumentKind::ResumeTwoColumn,
        DocumentKind::CoverLetter,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DocumentKind::ResumePlaintext => "resume_plaintext",
            DocumentKind::ResumeMinimalist => "resume_minimalist",
            DocumentKind::ResumeTwoColumn => "resume_two_column",
            DocumentKind::CoverLetter => "cover_letter",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|k| k.name()).collect()
    }

    /// Template file this kind renders with
    pub fn template_name(self) -> &'static str {
        match self {
            DocumentKind::ResumePlaintext => "resume-plaintext.txt.jinja2",
            DocumentKind::ResumeMinimalist => "resume-minimalist.tex.jinja2",
            DocumentKind::ResumeTwoColumn => "resume-two-column.tex.jinja2",
            DocumentKind::CoverLetter => "cover-letter.tex.jinja2",
        }
    }

    pub fn dialect(self) -> Dialect {
        match self {
            DocumentKind::ResumePlaintext => Dialect::Default,
            _ => Dialect::MarkupSafe,
        }
    }

    pub fn sections(self) -> &'static [Section] {
        match self {
            DocumentKind::CoverLetter => &Section::COVER_LETTER,
            _ => &Section::RESUME,
        }
    }

    /// Short human description used by the `kinds` command
    pub fn description(self) -> &'static str {
        match self {
            DocumentKind::ResumePlaintext => "Plaintext resume",
            DocumentKind::ResumeMinimalist => "Minimalist LaTeX resume",
            DocumentKind::ResumeTwoColumn => "Two-column LaTeX resume",
            DocumentKind::CoverLetter => "LaTeX cover letter",
        }
    }
}

impl FromStr for DocumentKind {
    type Err = ForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| ForgeError::UnknownKind(s.to_string()))
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
