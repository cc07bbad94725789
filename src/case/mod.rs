pub mod joiners;

pub use joiners::{acronym, dash_delimited, lower_camel_cased, snake_cased, upper_camel_cased};

use crate::error::Error;
use crate::tokenizer::{words, WordOptions};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Naming conventions a string can be rejoined into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseStyle {
    /// Example: `UpperCamelCase`
    UpperCamelCase,
    /// Example: `lowerCamelCase`
    LowerCamelCase,
    /// Example: `snake_case`
    SnakeCase,
}

impl CaseStyle {
    pub const ALL: [CaseStyle; 3] = [
        CaseStyle::UpperCamelCase,
        CaseStyle::LowerCamelCase,
        CaseStyle::SnakeCase,
    ];
}

/// Rejoin `input` in the given case style.
pub fn applying(input: &str, style: CaseStyle, options: WordOptions) -> String {
    match style {
        CaseStyle::UpperCamelCase => upper_camel_cased(input, options),
        CaseStyle::LowerCamelCase => lower_camel_cased(input, options),
        CaseStyle::SnakeCase => snake_cased(input, options),
    }
}

impl FromStr for CaseStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match canonical_name(s).as_str() {
            "upper_camel_case" | "upper_camel" | "pascal_case" | "pascal" => {
                Ok(CaseStyle::UpperCamelCase)
            }
            "lower_camel_case" | "lower_camel" | "camel_case" | "camel" => {
                Ok(CaseStyle::LowerCamelCase)
            }
            "snake_case" | "snake" => Ok(CaseStyle::SnakeCase),
            _ => Err(Error::UnknownCaseStyle(s.to_string())),
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseStyle::UpperCamelCase => write!(f, "upper-camel-case"),
            CaseStyle::LowerCamelCase => write!(f, "lower-camel-case"),
            CaseStyle::SnakeCase => write!(f, "snake-case"),
        }
    }
}

/// Every form the library can turn a string into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Conversion {
    /// The word list itself
    #[default]
    Words,
    Acronym,
    DashDelimited,
    Case(CaseStyle),
}

/// Output of [`Conversion::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Converted {
    Words(Vec<String>),
    Text(String),
}

impl Conversion {
    pub fn apply(self, input: &str, options: WordOptions) -> Converted {
        match self {
            Conversion::Words => Converted::Words(words(input, options)),
            Conversion::Acronym => Converted::Text(acronym(input, options)),
            Conversion::DashDelimited => Converted::Text(dash_delimited(input, options)),
            Conversion::Case(style) => Converted::Text(applying(input, style, options)),
        }
    }
}

impl FromStr for Conversion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match canonical_name(s).as_str() {
            "words" | "word" => Ok(Conversion::Words),
            "acronym" => Ok(Conversion::Acronym),
            "dash" | "dash_delimited" | "dashed" | "kebab" | "kebab_case" => {
                Ok(Conversion::DashDelimited)
            }
            _ => s
                .parse::<CaseStyle>()
                .map(Conversion::Case)
                .map_err(|_| Error::UnknownConversion(s.to_string())),
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conversion::Words => write!(f, "words"),
            Conversion::Acronym => write!(f, "acronym"),
            Conversion::DashDelimited => write!(f, "dash"),
            Conversion::Case(style) => write!(f, "{}", style),
        }
    }
}

impl TryFrom<String> for Conversion {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Conversion> for String {
    fn from(conversion: Conversion) -> Self {
        conversion.to_string()
    }
}

impl fmt::Display for Converted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Converted::Words(words) => write!(f, "{}", words.join(" ")),
            Converted::Text(text) => write!(f, "{}", text),
        }
    }
}

/// Normalize a user-supplied name so that `fooBar`, `foo-bar`, `FOO_BAR`
/// and `foo bar` all compare equal as `foo_bar`.
pub(crate) fn canonical_name(name: &str) -> String {
    snake_cased(name, WordOptions::DISTINGUISH_HYPHENATED_WORDS)
}
