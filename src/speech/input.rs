//! What `speak` was asked to read
//!
//! Callers either know what they are passing (`Element`, `Text`) or hand
//! over a single untyped value (`Auto`) that is tried as an element id
//! first and spoken literally otherwise.

use crate::dom::Document;

/// Input to `SpeechReader::speak`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeakInput {
    /// Element id if such an element exists, otherwise literal text.
    /// `None` reads as empty text.
    Auto(Option<String>),
    /// Explicit element reference; a missing element reads as empty text
    Element(String),
    /// Literal text, never looked up
    Text(String),
}

impl SpeakInput {
    /// Resolve to the text that will be spoken
    ///
    /// Element text is the element's rendered text with surrounding
    /// whitespace trimmed.
    pub fn resolve(&self, doc: &dyn Document) -> String {
        match self {
            SpeakInput::Auto(value) => {
                let value = value.as_deref().unwrap_or("");
                if value.is_empty() {
                    return String::new();
                }
                match doc.element_text(value) {
                    Some(text) => text.trim().to_string(),
                    None => value.to_string(),
                }
            }
            SpeakInput::Element(id) => doc
                .element_text(id)
                .map(|text| text.trim().to_string())
                .unwrap_or_default(),
            SpeakInput::Text(text) => text.clone(),
        }
    }
}

impl From<&str> for SpeakInput {
    fn from(value: &str) -> Self {
        SpeakInput::Auto(Some(value.to_string()))
    }
}

impl From<String> for SpeakInput {
    fn from(value: String) -> Self {
        SpeakInput::Auto(Some(value))
    }
}

impl From<Option<&str>> for SpeakInput {
    fn from(value: Option<&str>) -> Self {
        SpeakInput::Auto(value.map(str::to_string))
    }
}

impl From<Option<String>> for SpeakInput {
    fn from(value: Option<String>) -> Self {
        SpeakInput::Auto(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryDocument;

    fn page() -> MemoryDocument {
        MemoryDocument::new()
            .with_element("greeting", "  Hi there  ")
            .with_element("blank", " \n\t ")
    }

    #[test]
    fn test_auto_prefers_element() {
        let doc = page();
        assert_eq!(SpeakInput::from("greeting").resolve(&doc), "Hi there");
    }

    #[test]
    fn test_auto_falls_back_to_literal() {
        let doc = page();
        assert_eq!(SpeakInput::from("hello").resolve(&doc), "hello");
        assert_eq!(SpeakInput::from("  padded  ").resolve(&doc), "  padded  ");
    }

    #[test]
    fn test_auto_absent_is_empty() {
        let doc = page();
        assert_eq!(SpeakInput::from(None::<&str>).resolve(&doc), "");
        assert_eq!(SpeakInput::from("").resolve(&doc), "");
    }

    #[test]
    fn test_whitespace_only_element_is_empty() {
        let doc = page();
        assert_eq!(SpeakInput::from("blank").resolve(&doc), "");
    }

    #[test]
    fn test_explicit_variants() {
        let doc = page();
        assert_eq!(SpeakInput::Element("greeting".into()).resolve(&doc), "Hi there");
        assert_eq!(SpeakInput::Element("hello".into()).resolve(&doc), "");
        assert_eq!(SpeakInput::Text("greeting".into()).resolve(&doc), "greeting");
    }
}
