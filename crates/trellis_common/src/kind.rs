//! Content-type classification of open documents.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification of a document's content type.
///
/// The kind is supplied by the editor-facing layer alongside the document
/// key and version. A cached artifact is only valid for the kind it was
/// produced under: if a document is re-tagged (say a plain script file is
/// reopened as a component), derived artifacts must be recomputed even
/// though the key and version are unchanged.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageKind {
    /// A standalone template file.
    Template,
    /// A host-language file with embedded templates.
    Component,
    /// A plain host-language file with no template content.
    Script,
}

impl fmt::Display for LanguageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LanguageKind::Template => "template",
            LanguageKind::Component => "component",
            LanguageKind::Script => "script",
        };
        f.write_str(name)
    }
}

/// Error returned when parsing an unrecognized language kind name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLanguageKindError {
    /// The string that failed to parse.
    pub input: String,
}

impl fmt::Display for ParseLanguageKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown language kind '{}'", self.input)
    }
}

impl std::error::Error for ParseLanguageKindError {}

impl FromStr for LanguageKind {
    type Err = ParseLanguageKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "template" => Ok(LanguageKind::Template),
            "component" => Ok(LanguageKind::Component),
            "script" => Ok(LanguageKind::Script),
            _ => Err(ParseLanguageKindError {
                input: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names() {
        assert_eq!(LanguageKind::Template.to_string(), "template");
        assert_eq!(LanguageKind::Component.to_string(), "component");
        assert_eq!(LanguageKind::Script.to_string(), "script");
    }

    #[test]
    fn from_str_all_variants() {
        for kind in [
            LanguageKind::Template,
            LanguageKind::Component,
            LanguageKind::Script,
        ] {
            let parsed: LanguageKind = kind.to_string().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn from_str_unknown_errors() {
        let err = "stylesheet".parse::<LanguageKind>().unwrap_err();
        assert_eq!(err.input, "stylesheet");
        assert_eq!(format!("{err}"), "unknown language kind 'stylesheet'");
    }

    #[test]
    fn from_str_is_case_sensitive() {
        assert!("Template".parse::<LanguageKind>().is_err());
    }

    #[test]
    fn serde_lowercase() {
        let json = serde_json::to_string(&LanguageKind::Component).unwrap();
        assert_eq!(json, "\"component\"");
        let back: LanguageKind = serde_json::from_str("\"template\"").unwrap();
        assert_eq!(back, LanguageKind::Template);
    }
}
