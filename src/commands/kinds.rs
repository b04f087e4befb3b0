//! Kinds command: list the document kinds and their templates

use anyhow::Result;
use console::style;

use crate::config::Config;
use crate::kind::DocumentKind;
use crate::templates::TemplateOrigin;

/// Execute the kinds command
pub fn execute_kinds(config: &Config) -> Result<()> {
    let store = config.template_store();

    println!("{}", style("Document kinds:").bold());
    for kind in DocumentKind::ALL {
        let origin = match store.locate(kind.template_name()) {
            Some(TemplateOrigin::Builtin) => style("built-in".to_string()).dim(),
            Some(TemplateOrigin::Directory(path)) => style(path.display().to_string()).cyan(),
            None => style("missing".to_string()).red(),
        };
        println!(
            "  {:<18} {:<30} {:<12} {}",
            style(kind.name()).green(),
            kind.template_name(),
            kind.dialect().name(),
            origin
        );
    }

    Ok(())
}
