pub mod options;

pub use options::WordOptions;

use tracing::trace;
use unicode_segmentation::UnicodeSegmentation;

const HYPHEN: char = '-';
const APOSTROPHE: char = '\'';

const COMMON_ACRONYMS: [&str; 3] = ["api", "url", "id"];

/// Split `input` into words.
///
/// Separators (whitespace, digits, punctuation other than `'` and `-`) are
/// dropped. A lowercase letter following a run of two or more uppercase
/// letters starts a new word, so `"WOWit"` yields `"WOW"` and `"it"`.
/// Every returned word is non-empty and contains at least one letter.
///
/// ```
/// use wordcase::{words, WordOptions};
///
/// assert_eq!(
///     words("HelloWorldWOWitWorks", WordOptions::empty()),
///     vec!["Hello", "World", "WOW", "it", "Works"]
/// );
/// ```
pub fn words(input: &str, options: WordOptions) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = Buffer::default();

    for grapheme in input.graphemes(true) {
        let Some(ch) = grapheme.chars().next() else {
            continue;
        };

        if is_uppercase_letter(ch) {
            if !current.is_uppercase_run() {
                current.flush_into(&mut words, options);
            }
            current.push(grapheme, true);
        } else if ch == APOSTROPHE {
            current.push(grapheme, false);
        } else if ch == HYPHEN && !options.contains(WordOptions::DISTINGUISH_HYPHENATED_WORDS) {
            current.push(grapheme, false);
        } else if ch.is_alphabetic() {
            if current.is_uppercase_run() && current.len > 1 {
                current.flush_into(&mut words, options);
            }
            current.push(grapheme, false);
        } else {
            current.flush_into(&mut words, options);
        }
    }
    current.flush_into(&mut words, options);

    words
}

/// Uppercase (Lu) or titlecase (Lt) letter. Titlecase digraphs such as `ǅ`
/// are neither `is_uppercase` nor `is_lowercase` but still change when
/// lowercased.
fn is_uppercase_letter(ch: char) -> bool {
    ch.is_uppercase() || (!ch.is_lowercase() && ch.to_lowercase().ne(std::iter::once(ch)))
}

/// The word being accumulated during a scan.
#[derive(Debug)]
struct Buffer {
    text: String,
    /// Number of graphemes in `text`
    len: usize,
    /// True while `text` holds nothing but uppercase letters (or nothing at all)
    uppercase_only: bool,
}

impl Default for Buffer {
    fn default() -> Self {
        Self {
            text: String::new(),
            len: 0,
            uppercase_only: true,
        }
    }
}

impl Buffer {
    fn push(&mut self, grapheme: &str, uppercase: bool) {
        self.text.push_str(grapheme);
        self.len += 1;
        self.uppercase_only &= uppercase;
    }

    fn is_uppercase_run(&self) -> bool {
        self.uppercase_only
    }

    /// Finish the current word, emit it if it still holds a letter, and reset.
    fn flush_into(&mut self, words: &mut Vec<String>, options: WordOptions) {
        let buffer = std::mem::take(self);
        if buffer.len == 0 {
            return;
        }

        if let Some(word) = finish_word(&buffer.text, options) {
            words.push(word);
        } else {
            trace!(fragment = %buffer.text, "discarding fragment without letters");
        }
    }
}

fn finish_word(raw: &str, options: WordOptions) -> Option<String> {
    let strip_hyphens = options.contains(WordOptions::STRIP_HYPHENS);
    let strip_apostrophes = options.contains(WordOptions::STRIP_APOSTROPHES);

    let mut word: String = raw
        .trim_matches(HYPHEN)
        .chars()
        .filter(|&c| !((strip_hyphens && c == HYPHEN) || (strip_apostrophes && c == APOSTROPHE)))
        .collect();

    if options.contains(WordOptions::AUTOMATICALLY_UPPERCASE_COMMON_ACRONYMS)
        && COMMON_ACRONYMS.contains(&word.to_lowercase().as_str())
    {
        word = word.to_uppercase();
    }

    if word.is_empty() || !word.chars().any(char::is_alphabetic) {
        return None;
    }

    Some(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_uppercase_letter_keeps_following_lowercase() {
        assert_eq!(words("Abc", WordOptions::empty()), vec!["Abc"]);
        assert_eq!(words("ABc", WordOptions::empty()), vec!["AB", "c"]);
    }

    #[test]
    fn test_uppercase_after_apostrophe_starts_new_word() {
        assert_eq!(words("A'B", WordOptions::empty()), vec!["A'", "B"]);
    }

    #[test]
    fn test_hyphen_only_fragments_are_dropped() {
        assert_eq!(words("-- --- -", WordOptions::empty()), Vec::<String>::new());
        assert_eq!(words("' '' '", WordOptions::empty()), Vec::<String>::new());
    }

    #[test]
    fn test_digits_separate_words() {
        assert_eq!(words("utf8string", WordOptions::empty()), vec!["utf", "string"]);
    }

    #[test]
    fn test_interior_hyphens_survive_trimming() {
        assert_eq!(
            words("--well-known--", WordOptions::empty()),
            vec!["well-known"]
        );
    }

    #[test]
    fn test_acronym_uppercasing_after_stripping() {
        let options = WordOptions::AUTOMATICALLY_UPPERCASE_COMMON_ACRONYMS
            | WordOptions::STRIP_APOSTROPHES;
        assert_eq!(words("i'd", options), vec!["ID"]);
        assert_eq!(words("i'd", WordOptions::AUTOMATICALLY_UPPERCASE_COMMON_ACRONYMS), vec!["i'd"]);
    }

    #[test]
    fn test_non_ascii_letters() {
        assert_eq!(
            words("ÉcoleNormale ŻółwŚpi", WordOptions::empty()),
            vec!["École", "Normale", "Żółw", "Śpi"]
        );
    }

    #[test]
    fn test_combining_marks_stay_with_their_letter() {
        // "e" followed by U+0301 COMBINING ACUTE ACCENT
        let input = "cafe\u{301}Noir";
        assert_eq!(
            words(input, WordOptions::empty()),
            vec!["cafe\u{301}", "Noir"]
        );
    }

    #[test]
    fn test_titlecase_letters_start_words() {
        assert!(is_uppercase_letter('\u{01C5}'));
        assert!(!is_uppercase_letter('\u{01C6}'));
        assert!(!is_uppercase_letter('漢'));
        assert_eq!(
            words("ab\u{01C5}cd", WordOptions::empty()),
            vec!["ab", "\u{01C5}cd"]
        );
        assert_eq!(
            words("\u{01C5}\u{01C8}x", WordOptions::empty()),
            vec!["\u{01C5}\u{01C8}", "x"]
        );
    }

    #[test]
    fn test_caseless_letters_are_letters() {
        assert_eq!(words("漢字 かな", WordOptions::empty()), vec!["漢字", "かな"]);
    }
}
