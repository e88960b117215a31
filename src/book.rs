use serde::{Deserialize, Serialize};

/// A book: the title and body every strategy acts upon
///
/// Field order matters for serialization: `title` is always emitted before `content`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Book {
    /// Title shown in print banners
    pub title: String,
    /// Body text, possibly empty
    pub content: String,
}

impl Book {
    /// Create a new book from a title and its content
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self { title: title.into(), content: content.into() }
    }

    /// The content with its character sequence reversed
    #[must_use]
    pub fn reversed_content(&self) -> String {
        reverse_chars(&self.content)
    }
}

/// Reverse a string character by character
#[must_use]
pub fn reverse_chars(text: &str) -> String {
    text.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{Book, reverse_chars};

    #[test]
    fn test_reversed_content() {
        let book = Book::new("Sample Book", "This is some sample content.");
        assert_eq!(book.reversed_content(), ".tnetnoc elpmas emos si sihT");
    }

    #[test]
    fn test_reverse_empty_and_multibyte() {
        assert_eq!(reverse_chars(""), "");
        assert_eq!(reverse_chars("añb"), "bña");
    }

    proptest! {
        #[test]
        fn test_reverse_twice_is_identity(text in any::<String>()) {
            prop_assert_eq!(reverse_chars(&reverse_chars(&text)), text);
        }
    }
}
