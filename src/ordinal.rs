//! Localized ordinal names for week indexes ("First", "Premier", …).

use std::{fmt, str::FromStr};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{WeekError, consts::MAX_ORDINAL, partition::WeekIndex};

/// Languages with an ordinal table, identified by a short tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Language {
    /// `eng`
    English,
    /// `fr`
    French,
    /// `ger`
    German,
    /// `jap`
    Japanese,
}

impl Language {
    pub const ALL: [Self; 4] = [Self::English, Self::French, Self::German, Self::Japanese];

    pub const fn tag(self) -> &'static str {
        match self {
            Self::English => "eng",
            Self::French => "fr",
            Self::German => "ger",
            Self::Japanese => "jap",
        }
    }

    const fn table(self) -> &'static [&'static str; MAX_ORDINAL as usize] {
        match self {
            Self::English => &WEEK_IN_ENGLISH,
            Self::French => &WEEK_IN_FRENCH,
            Self::German => &WEEK_IN_GERMAN,
            Self::Japanese => &WEEK_IN_JAPANESE,
        }
    }
}

const WEEK_IN_ENGLISH: [&str; MAX_ORDINAL as usize] =
    ["First", "Second", "Third", "Fourth", "Fifth", "Sixth", "Seventh"];

const WEEK_IN_FRENCH: [&str; MAX_ORDINAL as usize] = [
    "Premier",
    "Deuxième",
    "Troisième",
    "Quatrième",
    "Cinquième",
    "Sixième",
    "Septième",
];

const WEEK_IN_GERMAN: [&str; MAX_ORDINAL as usize] =
    ["Erste", "Zweite", "Dritte", "Vierte", "Fünfte", "Sechste", "Siebte"];

const WEEK_IN_JAPANESE: [&str; MAX_ORDINAL as usize] =
    ["第一", "第二", "第三", "第四", "第五", "第六", "第七"];

impl FromStr for Language {
    type Err = WeekError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.tag() == s)
            .ok_or_else(|| WeekError::UnknownLanguage(s.to_owned()))
            .inspect_err(|e| debug!("{e}"))
    }
}

impl TryFrom<String> for Language {
    type Error = WeekError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Language> for &'static str {
    fn from(lang: Language) -> Self {
        lang.tag()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Ordinal name of week `index` in `lang`.
///
/// # Errors
/// Returns `WeekError::OrdinalOutOfRange` if `index` is past the end of the table.
pub fn ordinal(lang: Language, index: WeekIndex) -> Result<&'static str, WeekError> {
    lang.table()
        .get(usize::from(index.get()) - 1)
        .copied()
        .ok_or(WeekError::OrdinalOutOfRange(index.get()))
        .inspect_err(|e| debug!("{e}"))
}

/// Like [`ordinal`], taking a raw language tag and index.
///
/// # Errors
/// Returns `WeekError::UnknownLanguage` for an unsupported tag and
/// `WeekError::OrdinalOutOfRange` for index 0 or past the end of the table.
pub fn ordinal_for_tag(tag: &str, index: u8) -> Result<&'static str, WeekError> {
    let lang = tag.parse::<Language>()?;
    let index = WeekIndex::new(index).ok_or(WeekError::OrdinalOutOfRange(index))?;
    ordinal(lang, index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(n: u8) -> WeekIndex {
        WeekIndex::new(n).unwrap()
    }

    #[test]
    fn test_language_tags_round_trip() {
        for lang in Language::ALL {
            assert_eq!(lang.tag().parse::<Language>().unwrap(), lang);
            assert_eq!(lang.to_string(), lang.tag());
        }
    }

    #[test]
    fn test_unknown_language() {
        for tag in ["", "en", "ENG", "es", "japanese", " eng", "fr ", "\tger\n"] {
            assert_eq!(
                tag.parse::<Language>(),
                Err(WeekError::UnknownLanguage(tag.to_owned())),
                "tag {tag:?}"
            );
        }
    }

    #[test]
    fn test_ordinal_cases() {
        struct TestCase {
            lang:     Language,
            index:    u8,
            expected: &'static str,
        }

        let cases = [
            TestCase {
                lang:     Language::English,
                index:    3,
                expected: "Third",
            },
            TestCase {
                lang:     Language::French,
                index:    5,
                expected: "Cinquième",
            },
            TestCase {
                lang:     Language::German,
                index:    1,
                expected: "Erste",
            },
            TestCase {
                lang:     Language::Japanese,
                index:    2,
                expected: "第二",
            },
            TestCase {
                lang:     Language::English,
                index:    7,
                expected: "Seventh",
            },
        ];

        for case in &cases {
            assert_eq!(ordinal(case.lang, index(case.index)).unwrap(), case.expected);
        }
    }

    #[test]
    fn test_ordinal_out_of_range() {
        for lang in Language::ALL {
            assert_eq!(ordinal(lang, index(8)), Err(WeekError::OrdinalOutOfRange(8)));
        }
    }

    #[test]
    fn test_every_table_covers_all_indexes() {
        for lang in Language::ALL {
            for n in 1..=MAX_ORDINAL {
                assert!(ordinal(lang, index(n)).is_ok(), "{lang} lacks index {n}");
            }
        }
    }

    #[test]
    fn test_ordinal_for_tag() {
        assert_eq!(ordinal_for_tag("eng", 3), Ok("Third"));
        assert_eq!(ordinal_for_tag("fr", 5), Ok("Cinquième"));
        assert_eq!(
            ordinal_for_tag("xx", 1),
            Err(WeekError::UnknownLanguage("xx".to_owned()))
        );
        assert_eq!(ordinal_for_tag("ger", 0), Err(WeekError::OrdinalOutOfRange(0)));
    }

    #[test]
    fn test_language_serde() {
        let json = serde_json::to_string(&Language::French).unwrap();
        assert_eq!(json, r#""fr""#);
        assert_eq!(serde_json::from_str::<Language>(r#""jap""#).unwrap(), Language::Japanese);
        assert!(serde_json::from_str::<Language>(r#""es""#).is_err());
    }
}
