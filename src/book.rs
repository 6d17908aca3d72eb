use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// A book as it is stored and sent over the wire.
///
/// Missing keys and `null` values decode to empty strings and unknown keys are ignored,
/// emptiness is checked by the store and not by the decoder.
/// Keys are matched exactly, `"Title"` is an unknown key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Book {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[schemars(with = "Option<String>")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[schemars(with = "Option<String>")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[schemars(with = "Option<String>")]
    pub isbn: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
        }
    }

    /// Returns `true` if any of `title`, `author` or `isbn` is empty.
    ///
    /// Whitespace is not trimmed, `" "` counts as present.
    pub fn is_missing_field(&self) -> bool {
        self.title.is_empty() || self.author.is_empty() || self.isbn.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(data: &[u8]) -> serde_json::Result<Book> {
        serde_json::from_slice(data)
    }

    #[test]
    fn encodes_lowercase_keys() {
        let book = Book::new("Cloud Native Go", "M. L. Reimer", "0123456789");
        let json = serde_json::to_vec(&book).expect("Failed to encode");

        let value: serde_json::Value = serde_json::from_slice(&json).expect("Not JSON");
        let object = value.as_object().expect("Not an object");

        assert_eq!(object.len(), 3);
        assert_eq!(object["title"], "Cloud Native Go");
        assert_eq!(object["author"], "M. L. Reimer");
        assert_eq!(object["isbn"], "0123456789");
    }

    #[test]
    fn missing_keys_default_to_empty() {
        let book = decode(br#"{"title":"Only a title"}"#).expect("Failed to decode");

        assert_eq!(book, Book::new("Only a title", "", ""));
        assert!(book.is_missing_field());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let book = decode(br#"{"title":"A","author":"B","isbn":"1","year":1999}"#)
            .expect("Failed to decode");

        assert_eq!(book, Book::new("A", "B", "1"));
        assert!(!book.is_missing_field());
    }

    #[test]
    fn null_decodes_to_empty() {
        let book = decode(br#"{"title":null,"author":"B","isbn":"1"}"#).expect("Failed to decode");

        assert_eq!(book, Book::new("", "B", "1"));
        assert!(book.is_missing_field());
    }

    #[test]
    fn keys_are_case_sensitive() {
        let book = decode(br#"{"Title":"A","AUTHOR":"B","Isbn":"1"}"#).expect("Failed to decode");

        assert_eq!(book, Book::default());
        assert!(book.is_missing_field());
    }

    #[test]
    fn whitespace_is_not_missing() {
        assert!(!Book::new(" ", " ", " ").is_missing_field());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(decode(b"{\"title\":").is_err());
        assert!(decode(b"\"a string\"").is_err());
        assert!(decode(br#"{"title":1}"#).is_err());
    }
}
