//! Declaration names - WHICH declaration (library + declaration).
//!
//! A [`Name`] is written `library/Declaration`, e.g. `example/HEX_UINT16`.
//! The library part is a dotted [`LibraryName`]. Names are plain values:
//! cloning copies the strings, and nothing is interned globally.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::SummaryError;

/// A dotted library name such as `this.is.an.example.library`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LibraryName {
    parts: Vec<String>,
}

impl LibraryName {
    /// Parse and validate a dotted library name.
    pub fn parse(s: &str) -> Result<Self, SummaryError> {
        if s.is_empty() {
            return Err(SummaryError::invalid_name(s, "library name is empty"));
        }

        let mut parts = Vec::new();
        for part in s.split('.') {
            if let Some(reason) = check_library_component(part) {
                return Err(SummaryError::invalid_name(s, reason));
            }
            parts.push(part.to_string());
        }

        Ok(LibraryName { parts })
    }

    /// The dot-separated components.
    pub fn parts(&self) -> &[String] {
        &self.parts
    }
}

fn check_library_component(part: &str) -> Option<&'static str> {
    let mut chars = part.chars();
    match chars.next() {
        None => return Some("library name has an empty component"),
        Some(c) if !c.is_ascii_lowercase() => {
            return Some("library components must start with a lowercase letter")
        }
        Some(_) => {}
    }

    if chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_') {
        None
    } else {
        Some("library components may only contain lowercase letters, digits and `_`")
    }
}

impl fmt::Display for LibraryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.parts.join("."))
    }
}

impl FromStr for LibraryName {
    type Err = SummaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LibraryName::parse(s)
    }
}

/// A fully-qualified declaration name, `library/Declaration`.
///
/// The declaration part may carry a member suffix (`example/Color.RED`)
/// when it refers to a member of another declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name {
    library: LibraryName,
    declaration: String,
}

impl Name {
    /// Parse and validate a fully-qualified name.
    pub fn parse(s: &str) -> Result<Self, SummaryError> {
        let Some((library, declaration)) = s.split_once('/') else {
            return Err(SummaryError::invalid_name(
                s,
                "expected `library/Declaration`",
            ));
        };

        let library = LibraryName::parse(library)
            .map_err(|_| SummaryError::invalid_name(s, "invalid library part"))?;

        for segment in declaration.split('.') {
            if let Some(reason) = check_declaration_segment(segment) {
                return Err(SummaryError::invalid_name(s, reason));
            }
        }

        Ok(Name {
            library,
            declaration: declaration.to_string(),
        })
    }

    /// The library this declaration belongs to.
    pub fn library(&self) -> &LibraryName {
        &self.library
    }

    /// The declaration part, without the library.
    pub fn declaration(&self) -> &str {
        &self.declaration
    }

    /// For a member reference `lib/Decl.MEMBER`, the name `lib/Decl`.
    pub fn member_parent(&self) -> Option<Name> {
        let (parent, _) = self.declaration.rsplit_once('.')?;
        Some(Name {
            library: self.library.clone(),
            declaration: parent.to_string(),
        })
    }
}

fn check_declaration_segment(segment: &str) -> Option<&'static str> {
    let mut chars = segment.chars();
    match chars.next() {
        None => return Some("declaration name has an empty component"),
        Some(c) if !c.is_ascii_alphabetic() => {
            return Some("declaration names must start with a letter")
        }
        Some(_) => {}
    }

    if chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        None
    } else {
        Some("declaration names may only contain letters, digits and `_`")
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.library, self.declaration)
    }
}

impl FromStr for Name {
    type Err = SummaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Name::parse(s)
    }
}

impl Serialize for Name {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Name::parse(&s).map_err(de::Error::custom)
    }
}

impl Serialize for LibraryName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LibraryName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        LibraryName::parse(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_name_round_trip() {
        let name = LibraryName::parse("this.is.an.example.library").unwrap();
        assert_eq!(name.parts().len(), 5);
        assert_eq!(name.to_string(), "this.is.an.example.library");
    }

    #[test]
    fn test_library_name_rejects_bad_components() {
        assert!(LibraryName::parse("").is_err());
        assert!(LibraryName::parse("a..b").is_err());
        assert!(LibraryName::parse("Example").is_err());
        assert!(LibraryName::parse("1abc").is_err());
        assert!(LibraryName::parse("ex-ample").is_err());
    }

    #[test]
    fn test_name_parts() {
        let name = Name::parse("fuchsia.io/MAX_BUF").unwrap();
        assert_eq!(name.library().to_string(), "fuchsia.io");
        assert_eq!(name.declaration(), "MAX_BUF");
        assert_eq!(name.to_string(), "fuchsia.io/MAX_BUF");
        assert_eq!(name.member_parent(), None);
    }

    #[test]
    fn test_member_parent() {
        let name = Name::parse("example/Color.RED").unwrap();
        assert_eq!(
            name.member_parent(),
            Some(Name::parse("example/Color").unwrap())
        );
    }

    #[test]
    fn test_name_rejects_malformed() {
        assert!(Name::parse("NO_LIBRARY").is_err());
        assert!(Name::parse("example/").is_err());
        assert!(Name::parse("example/1ABC").is_err());
        assert!(Name::parse("example/A.").is_err());
        assert!(Name::parse("/A").is_err());

        let err = Name::parse("example/A-B").unwrap_err();
        assert!(matches!(err, SummaryError::InvalidName { .. }));
    }

    #[test]
    fn test_name_serde_as_string() {
        let name = Name::parse("example/A").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"example/A\"");

        let back: Name = serde_json::from_str(&json).unwrap();
        assert_eq!(back, name);

        assert!(serde_json::from_str::<Name>("\"bad name\"").is_err());
    }
}
