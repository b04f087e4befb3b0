//! LaTeX escaping for markup-safe templates
//!
//! Used by the markup-safe formatter on every printed string, and exported
//! for callers that prepare text outside a template.

use std::borrow::Cow;

/// Replace every `#` with `\#`
///
/// This is the only character escaped. `%`, `&`, `_` and `\` pass through
/// untouched so authors can keep using them as markup inside their data.
pub fn latex_escape(text: &str) -> Cow<'_, str> {
    if text.contains('#') {
        Cow::Owned(text.replace('#', r"\#"))
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_escaped() {
        assert_eq!(latex_escape("#1 Dev"), r"\#1 Dev");
        assert_eq!(latex_escape("C# and F#"), r"C\# and F\#");
    }

    #[test]
    fn test_other_characters_untouched() {
        let text = r"50% & more_stuff \textbf{x} $y$";
        assert!(matches!(latex_escape(text), Cow::Borrowed(_)));
        assert_eq!(latex_escape(text), text);
    }
}
