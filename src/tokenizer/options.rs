//! Flags controlling how the tokenizer splits and cleans words.

use crate::case::canonical_name;
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};
use std::str::FromStr;

/// A set of independent tokenizer flags.
///
/// Flags combine with `|`; every combination is valid.
///
/// ```
/// use wordcase::WordOptions;
///
/// let options = WordOptions::STRIP_HYPHENS | WordOptions::STRIP_APOSTROPHES;
/// assert!(options.contains(WordOptions::STRIP_HYPHENS));
/// assert!(!options.contains(WordOptions::DISTINGUISH_HYPHENATED_WORDS));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct WordOptions(u8);

impl WordOptions {
    /// Hyphenated words are returned as separate words.
    ///
    /// Example: `"thick-skinned"` becomes `"thick"` and `"skinned"`.
    pub const DISTINGUISH_HYPHENATED_WORDS: Self = Self(1);

    /// Hyphens (`-`) are removed from the returned words.
    ///
    /// Example: `"thick-skinned"` becomes `"thickskinned"`.
    pub const STRIP_HYPHENS: Self = Self(1 << 1);

    /// Apostrophes (`'`) are removed from the returned words.
    ///
    /// Example: `"won't"` becomes `"wont"`.
    pub const STRIP_APOSTROPHES: Self = Self(1 << 2);

    /// Common acronyms (`api`, `url`, `id`) are uppercased.
    ///
    /// Example: `"Url"` becomes `"URL"`.
    pub const AUTOMATICALLY_UPPERCASE_COMMON_ACRONYMS: Self = Self(1 << 3);

    const FLAGS: [(Self, &'static str); 4] = [
        (Self::DISTINGUISH_HYPHENATED_WORDS, "distinguish-hyphenated-words"),
        (Self::STRIP_HYPHENS, "strip-hyphens"),
        (Self::STRIP_APOSTROPHES, "strip-apostrophes"),
        (
            Self::AUTOMATICALLY_UPPERCASE_COMMON_ACRONYMS,
            "automatically-uppercase-common-acronyms",
        ),
    ];

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn all() -> Self {
        Self(0b1111)
    }

    /// Build a set from raw bits, dropping bits that name no flag.
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & Self::all().0)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when every flag in `other` is also set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    /// Iterate over the single flags contained in this set, in bit order.
    pub fn iter(self) -> impl Iterator<Item = Self> {
        Self::FLAGS
            .into_iter()
            .map(|(flag, _)| flag)
            .filter(move |flag| self.contains(*flag))
    }

    /// Canonical name of a single flag, `None` for empty or combined sets.
    pub fn name(self) -> Option<&'static str> {
        Self::FLAGS
            .iter()
            .find(|(flag, _)| *flag == self)
            .map(|(_, name)| *name)
    }
}

impl BitOr for WordOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for WordOptions {
    fn bitor_assign(&mut self, rhs: Self) {
        self.insert(rhs);
    }
}

impl BitAnd for WordOptions {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl FromIterator<WordOptions> for WordOptions {
    fn from_iter<I: IntoIterator<Item = WordOptions>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::union)
    }
}

impl FromStr for WordOptions {
    type Err = Error;

    /// Parse a single flag name. Any spelling style is accepted, so
    /// `stripHyphens`, `strip_hyphens` and `STRIP-HYPHENS` are the same flag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match canonical_name(s).as_str() {
            "distinguish_hyphenated_words" | "distinguish_hyphens" => {
                Ok(Self::DISTINGUISH_HYPHENATED_WORDS)
            }
            "strip_hyphens" => Ok(Self::STRIP_HYPHENS),
            "strip_apostrophes" => Ok(Self::STRIP_APOSTROPHES),
            "automatically_uppercase_common_acronyms"
            | "uppercase_common_acronyms"
            | "uppercase_acronyms" => Ok(Self::AUTOMATICALLY_UPPERCASE_COMMON_ACRONYMS),
            _ => Err(Error::UnknownOption(s.to_string())),
        }
    }
}

impl fmt::Display for WordOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().filter_map(Self::name).collect();
        write!(f, "{}", names.join(", "))
    }
}

impl TryFrom<Vec<String>> for WordOptions {
    type Error = Error;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        names.iter().map(|name| name.parse::<Self>()).collect()
    }
}

impl From<WordOptions> for Vec<String> {
    fn from(options: WordOptions) -> Self {
        options
            .iter()
            .filter_map(WordOptions::name)
            .map(str::to_string)
            .collect()
    }
}
