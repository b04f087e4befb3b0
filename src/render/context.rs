//! Section projection
//!
//! Builds the template context from a record. Absent sections are replaced
//! here, at the renderer boundary, so templates never see a missing name.

use std::collections::BTreeMap;

use serde_yaml::Value;

use crate::document::{DocumentRecord, Section};

/// Named section values passed to a template
pub type RenderContext = BTreeMap<&'static str, Value>;

/// Project the requested sections out of a record, defaulting absent ones
pub fn project(record: &DocumentRecord, sections: &[Section]) -> RenderContext {
    sections
        .iter()
        .map(|section| {
            let value = match record.get(*section) {
                Some(value) => value.clone(),
                None => {
                    tracing::debug!("Section {} absent, using empty {:?}", section, section.shape());
                    section.empty_value()
                }
            };
            (section.key(), value)
        })
        .collect()
}
