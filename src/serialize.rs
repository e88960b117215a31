use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{book::Book, command::Capability, error::CommandError};

/// Text encodings a book can be serialized into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SerializeVariant {
    /// Compact JSON object: `{"title":...,"content":...}`
    Json,
    /// Single-line markup: `<book><title>...</title><content>...</content></book>`
    Xml,
}

impl SerializeVariant {
    /// Registry of serialize variants
    pub const ALL: [Self; 2] = [Self::Json, Self::Xml];

    /// Name used to select this variant
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
        }
    }

    /// Look up a variant by its exact name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|variant| variant.name() == name)
    }

    /// Encode the book
    ///
    /// # Errors
    ///
    /// Returns a `CommandError::Serialization` if the JSON encoder fails, or a
    /// `CommandError::UnrepresentableCharacter` if the title or content holds a character
    /// XML 1.0 cannot carry
    pub fn serialize(self, book: &Book) -> Result<String, CommandError> {
        match self {
            Self::Json => serde_json::to_string(book)
                .map_err(|source| CommandError::Serialization { format: self, source }),
            Self::Xml => to_xml(book),
        }
    }
}

/// Whether `c` matches the XML 1.0 `Char` production
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\r'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Escape a text node; `\r` becomes a character reference so parsers do not fold it into `\n`
fn escape_xml_text(field: &'static str, text: &str) -> Result<String, CommandError> {
    if let Some(character) = text.chars().find(|c| !is_xml_char(*c)) {
        return Err(CommandError::UnrepresentableCharacter {
            format: SerializeVariant::Xml,
            field,
            character,
        });
    }
    Ok(html_escape::encode_text(text).replace('\r', "&#13;"))
}

/// Build the `<book>` element with escaped text children and no declaration
fn to_xml(book: &Book) -> Result<String, CommandError> {
    let title = escape_xml_text("title", &book.title)?;
    let content = escape_xml_text("content", &book.content)?;
    Ok(format!("<book><title>{title}</title><content>{content}</content></book>"))
}

impl fmt::Display for SerializeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SerializeVariant {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| CommandError::UnknownVariant {
            capability: Capability::Serialize,
            variant: s.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::SerializeVariant;
    use crate::{book::Book, error::CommandError};

    /// Text of an element, with every character and entity reference resolved
    fn element_text(node: roxmltree::Node<'_, '_>) -> String {
        node.descendants().filter(roxmltree::Node::is_text).filter_map(|n| n.text()).collect()
    }

    /// Decode the markup with an XML parser and rebuild the book from its two children
    fn parse_xml(xml: &str) -> Option<Book> {
        let document = roxmltree::Document::parse(xml).ok()?;
        let root = document.root_element();
        if !root.has_tag_name("book") {
            return None;
        }
        let mut children = root.children().filter(roxmltree::Node::is_element);
        let title = children.next().filter(|n| n.has_tag_name("title"))?;
        let content = children.next().filter(|n| n.has_tag_name("content"))?;
        if children.next().is_some() {
            return None;
        }
        Some(Book::new(element_text(title), element_text(content)))
    }

    fn sample_book() -> Book {
        Book::new("Sample Book", "This is some sample content.")
    }

    #[test]
    fn test_json_is_compact_and_ordered() {
        let json = SerializeVariant::Json.serialize(&sample_book());
        assert!(matches!(
            json,
            Ok(ref s)
                if s == r#"{"title":"Sample Book","content":"This is some sample content."}"#
        ));
    }

    #[test]
    fn test_xml_sample_book() {
        let xml = SerializeVariant::Xml.serialize(&sample_book());
        assert!(matches!(
            xml,
            Ok(ref s) if s
                == "<book><title>Sample Book</title>\
                    <content>This is some sample content.</content></book>"
        ));
    }

    #[test]
    fn test_xml_escapes_markup_characters() {
        let book = Book::new("A & B", "1 < 2 > 0 \"quoted\"");
        let xml = SerializeVariant::Xml.serialize(&book);
        assert!(matches!(
            xml,
            Ok(ref s) if s
                == "<book><title>A &amp; B</title>\
                    <content>1 &lt; 2 &gt; 0 \"quoted\"</content></book>"
        ));
        assert_eq!(parse_xml(&xml.unwrap_or_default()), Some(book));
    }

    #[test]
    fn test_xml_keeps_carriage_returns() {
        let book = Book::new("T", "line one\r\nline two\rend");
        let xml = SerializeVariant::Xml.serialize(&book).unwrap_or_default();

        assert!(xml.contains("line one&#13;\nline two&#13;end"));
        assert_eq!(parse_xml(&xml), Some(book));
    }

    #[test]
    fn test_xml_rejects_unrepresentable_characters() {
        let book = Book::new("T", "bell\u{7}");
        assert!(matches!(
            SerializeVariant::Xml.serialize(&book),
            Err(CommandError::UnrepresentableCharacter {
                format: SerializeVariant::Xml,
                field: "content",
                character: '\u{7}',
            })
        ));

        let book = Book::new("nul\0", "");
        assert!(matches!(
            SerializeVariant::Xml.serialize(&book),
            Err(CommandError::UnrepresentableCharacter { field: "title", .. })
        ));
    }

    #[test]
    fn test_json_accepts_what_xml_rejects() {
        let book = Book::new("T", "bell\u{7}");
        let json = SerializeVariant::Json.serialize(&book);
        assert!(matches!(json, Ok(ref s) if s == r#"{"title":"T","content":"bell\u0007"}"#));
    }

    #[test]
    fn test_json_escapes_quotes_and_controls() {
        let book = Book::new("Say \"hi\"", "line one\nline\ttwo\\");
        let json = SerializeVariant::Json.serialize(&book);
        assert!(matches!(
            json,
            Ok(ref s) if s == r#"{"title":"Say \"hi\"","content":"line one\nline\ttwo\\"}"#
        ));
    }

    #[test]
    fn test_empty_book() {
        let book = Book::new("", "");
        assert!(matches!(
            SerializeVariant::Xml.serialize(&book),
            Ok(ref s) if s == "<book><title></title><content></content></book>"
        ));
        assert!(matches!(
            SerializeVariant::Json.serialize(&book),
            Ok(ref s) if s == r#"{"title":"","content":""}"#
        ));
    }

    /// Text made only of characters XML 1.0 can carry
    const XML_TEXT: &str =
        "[\\t\\n\\r\\x{20}-\\x{D7FF}\\x{E000}-\\x{FFFD}\\x{10000}-\\x{10FFFF}]{0,64}";

    proptest! {
        #[test]
        fn test_json_round_trip(title in any::<String>(), content in any::<String>()) {
            let book = Book::new(title, content);
            let json = SerializeVariant::Json.serialize(&book);
            prop_assert!(json.is_ok());
            let decoded: Result<Book, _> = serde_json::from_str(&json.unwrap_or_default());
            prop_assert!(matches!(decoded, Ok(ref d) if *d == book));
        }

        #[test]
        fn test_xml_round_trip(title in XML_TEXT, content in XML_TEXT) {
            let book = Book::new(title, content);
            let xml = SerializeVariant::Xml.serialize(&book);
            prop_assert!(xml.is_ok());
            prop_assert_eq!(parse_xml(&xml.unwrap_or_default()), Some(book));
        }
    }
}
