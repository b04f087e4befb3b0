//! Known top-level sections of a document record
//!
//! Contact, Company and Content hold a single mapping. The rest hold a list
//! of mappings. The shape decides what an absent section defaults to.

use std::fmt;

use serde_yaml::{Mapping, Value};

/// Whether a section holds one mapping or a sequence of mappings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionShape {
    Singular,
    Plural,
}

/// A named top-level entry in a document record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Contact,
    Education,
    Experience,
    Skills,
    Projects,
    Honors,
    Company,
    Content,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Contact,
        Section::Education,
        Section::Experience,
        Section::Skills,
        Section::Projects,
        Section::Honors,
        Section::Company,
        Section::Content,
    ];

    /// Sections substituted into resume templates
    pub const RESUME: [Section; 6] = [
        Section::Contact,
        Section::Education,
        Section::Experience,
        Section::Skills,
        Section::Projects,
        Section::Honors,
    ];

    /// Sections substituted into cover letter templates
    pub const COVER_LETTER: [Section; 3] = [Section::Contact, Section::Company, Section::Content];

    /// Key as it appears in the input file and in templates
    pub fn key(self) -> &'static str {
        match self {
            Section::Contact => "Contact",
            Section::Education => "Education",
            Section::Experience => "Experience",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Honors => "Honors",
            Section::Company => "Company",
            Section::Content => "Content",
        }
    }

    pub fn shape(self) -> SectionShape {
        match self {
            Section::Contact | Section::Company | Section::Content => SectionShape::Singular,
            _ => SectionShape::Plural,
        }
    }

    /// Value substituted when the section is absent
    pub fn empty_value(self) -> Value {
        match self.shape() {
            SectionShape::Singular => Value::Mapping(Mapping::new()),
            SectionShape::Plural => Value::Sequence(Vec::new()),
        }
    }

    pub fn from_key(key: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.key() == key)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values_follow_shape() {
        assert_eq!(Section::Contact.empty_value(), Value::Mapping(Mapping::new()));
        assert_eq!(Section::Content.empty_value(), Value::Mapping(Mapping::new()));
        assert_eq!(Section::Honors.empty_value(), Value::Sequence(vec![]));
        assert_eq!(Section::Education.empty_value(), Value::Sequence(vec![]));
    }

    #[test]
    fn test_from_key_is_case_sensitive() {
        assert_eq!(Section::from_key("Skills"), Some(Section::Skills));
        assert_eq!(Section::from_key("skills"), None);
    }
}
