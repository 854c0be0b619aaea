//! Installer languages.
//!
//! The catalog matches the message files shipped with Inno Setup 6: the
//! default English messages plus the official translations found under
//! `compiler:Languages\`.

use super::ConfigError;
use std::{fmt, str::FromStr};

/// A language the installer wizard can be displayed in.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Language {
    English,
    Armenian,
    BrazilianPortuguese,
    Bulgarian,
    Catalan,
    Corsican,
    Czech,
    Danish,
    Dutch,
    Finnish,
    French,
    German,
    Hebrew,
    Hungarian,
    Icelandic,
    Italian,
    Japanese,
    Korean,
    Norwegian,
    Polish,
    Portuguese,
    Russian,
    Slovak,
    Slovenian,
    Spanish,
    Turkish,
    Ukrainian,
}

impl Language {
    /// Every supported language, in catalog order.
    pub const ALL: [Language; 27] = [
        Self::English,
        Self::Armenian,
        Self::BrazilianPortuguese,
        Self::Bulgarian,
        Self::Catalan,
        Self::Corsican,
        Self::Czech,
        Self::Danish,
        Self::Dutch,
        Self::Finnish,
        Self::French,
        Self::German,
        Self::Hebrew,
        Self::Hungarian,
        Self::Icelandic,
        Self::Italian,
        Self::Japanese,
        Self::Korean,
        Self::Norwegian,
        Self::Polish,
        Self::Portuguese,
        Self::Russian,
        Self::Slovak,
        Self::Slovenian,
        Self::Spanish,
        Self::Turkish,
        Self::Ukrainian,
    ];

    /// Identifier used in the `Name:` field of the `[Languages]` section.
    pub fn name(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Armenian => "armenian",
            Self::BrazilianPortuguese => "brazilianportuguese",
            Self::Bulgarian => "bulgarian",
            Self::Catalan => "catalan",
            Self::Corsican => "corsican",
            Self::Czech => "czech",
            Self::Danish => "danish",
            Self::Dutch => "dutch",
            Self::Finnish => "finnish",
            Self::French => "french",
            Self::German => "german",
            Self::Hebrew => "hebrew",
            Self::Hungarian => "hungarian",
            Self::Icelandic => "icelandic",
            Self::Italian => "italian",
            Self::Japanese => "japanese",
            Self::Korean => "korean",
            Self::Norwegian => "norwegian",
            Self::Polish => "polish",
            Self::Portuguese => "portuguese",
            Self::Russian => "russian",
            Self::Slovak => "slovak",
            Self::Slovenian => "slovenian",
            Self::Spanish => "spanish",
            Self::Turkish => "turkish",
            Self::Ukrainian => "ukrainian",
        }
    }

    /// Message file reference used in the `MessagesFile:` field.
    pub fn messages_file(self) -> &'static str {
        match self {
            Self::English => "compiler:Default.isl",
            Self::Armenian => "compiler:Languages\\Armenian.isl",
            Self::BrazilianPortuguese => "compiler:Languages\\BrazilianPortuguese.isl",
            Self::Bulgarian => "compiler:Languages\\Bulgarian.isl",
            Self::Catalan => "compiler:Languages\\Catalan.isl",
            Self::Corsican => "compiler:Languages\\Corsican.isl",
            Self::Czech => "compiler:Languages\\Czech.isl",
            Self::Danish => "compiler:Languages\\Danish.isl",
            Self::Dutch => "compiler:Languages\\Dutch.isl",
            Self::Finnish => "compiler:Languages\\Finnish.isl",
            Self::French => "compiler:Languages\\French.isl",
            Self::German => "compiler:Languages\\German.isl",
            Self::Hebrew => "compiler:Languages\\Hebrew.isl",
            Self::Hungarian => "compiler:Languages\\Hungarian.isl",
            Self::Icelandic => "compiler:Languages\\Icelandic.isl",
            Self::Italian => "compiler:Languages\\Italian.isl",
            Self::Japanese => "compiler:Languages\\Japanese.isl",
            Self::Korean => "compiler:Languages\\Korean.isl",
            Self::Norwegian => "compiler:Languages\\Norwegian.isl",
            Self::Polish => "compiler:Languages\\Polish.isl",
            Self::Portuguese => "compiler:Languages\\Portuguese.isl",
            Self::Russian => "compiler:Languages\\Russian.isl",
            Self::Slovak => "compiler:Languages\\Slovak.isl",
            Self::Slovenian => "compiler:Languages\\Slovenian.isl",
            Self::Spanish => "compiler:Languages\\Spanish.isl",
            Self::Turkish => "compiler:Languages\\Turkish.isl",
            Self::Ukrainian => "compiler:Languages\\Ukrainian.isl",
        }
    }

    /// Comma separated list of every language name, for diagnostics.
    pub fn catalog() -> String {
        Self::ALL
            .iter()
            .map(|language| language.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Language {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|language| language.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConfigError::UnknownLanguage {
                value: s.to_string(),
                supported: Self::catalog(),
            })
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_parses_from_its_name() {
        for language in Language::ALL {
            assert_eq!(language.name().parse::<Language>().unwrap(), language);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("French".parse::<Language>().unwrap(), Language::French);
        assert_eq!(
            "BrazilianPortuguese".parse::<Language>().unwrap(),
            Language::BrazilianPortuguese
        );
    }

    #[test]
    fn test_unknown_language_lists_catalog() {
        let err = "klingon".parse::<Language>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("klingon"));
        assert!(message.contains("english"));
    }

    #[test]
    fn test_messages_files() {
        assert_eq!(Language::English.messages_file(), "compiler:Default.isl");
        assert_eq!(
            Language::German.messages_file(),
            "compiler:Languages\\German.isl"
        );
    }
}
