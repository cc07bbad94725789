use crate::tokenizer::{words, WordOptions};
use unicode_segmentation::UnicodeSegmentation;

/// Options every case-style joiner forces on top of the caller's.
const JOINER_OPTIONS: WordOptions = WordOptions::STRIP_HYPHENS.union(WordOptions::STRIP_APOSTROPHES);

const CAMEL_OPTIONS: WordOptions =
    JOINER_OPTIONS.union(WordOptions::AUTOMATICALLY_UPPERCASE_COMMON_ACRONYMS);

/// First letter of every word, uppercased.
pub fn acronym(input: &str, options: WordOptions) -> String {
    words(input, options | JOINER_OPTIONS)
        .iter()
        .filter_map(|word| word.graphemes(true).next())
        .collect::<String>()
        .to_uppercase()
}

/// Words joined with `-`. No options are forced.
pub fn dash_delimited(input: &str, options: WordOptions) -> String {
    words(input, options).join("-")
}

pub fn lower_camel_cased(input: &str, options: WordOptions) -> String {
    camel_case(words(input, options | CAMEL_OPTIONS), true)
}

pub fn upper_camel_cased(input: &str, options: WordOptions) -> String {
    camel_case(words(input, options | CAMEL_OPTIONS), false)
}

pub fn snake_cased(input: &str, options: WordOptions) -> String {
    words(input, options | JOINER_OPTIONS).join("_").to_lowercase()
}

/// Title-case each word, except that an all-uppercase word stays uppercase
/// only when the previous finished word is not itself all uppercase. This
/// keeps `IdUrlApi` readable as `IDurlAPI` instead of `IDURLAPI`.
fn camel_case(words: Vec<String>, lower_first: bool) -> String {
    let mut result: Vec<String> = Vec::with_capacity(words.len());

    for (index, word) in words.into_iter().enumerate() {
        let cased = if index == 0 && lower_first {
            word.to_lowercase()
        } else if is_uppercase(&word) {
            match result.last() {
                Some(previous) if is_uppercase(previous) => word.to_lowercase(),
                _ => word,
            }
        } else {
            capitalize(&word)
        };
        result.push(cased);
    }

    result.concat()
}

fn is_uppercase(word: &str) -> bool {
    word == word.to_uppercase()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => titlecase(first) + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Titlecase mapping of a single character. The standard library only maps
/// to upper and lower case, so digraphs are listed explicitly and multi-char
/// uppercase expansions (`ß` -> `SS`) keep only their first letter capital.
fn titlecase(ch: char) -> String {
    match ch {
        '\u{01C4}'..='\u{01C6}' => '\u{01C5}'.to_string(),
        '\u{01C7}'..='\u{01C9}' => '\u{01C8}'.to_string(),
        '\u{01CA}'..='\u{01CC}' => '\u{01CB}'.to_string(),
        '\u{01F1}'..='\u{01F3}' => '\u{01F2}'.to_string(),
        _ => {
            let mut upper = ch.to_uppercase();
            let first = upper.next().map(String::from).unwrap_or_default();
            first + &upper.collect::<String>().to_lowercase()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("hELLO"), "Hello");
        assert_eq!(capitalize("éCOLE"), "École");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_capitalize_uses_titlecase() {
        assert_eq!(capitalize("ßtraße"), "Sstraße");
        assert_eq!(capitalize("\u{01C6}ungla"), "\u{01C5}ungla");
        assert_eq!(capitalize("\u{01C4}UNGLA"), "\u{01C5}ungla");
        assert_eq!(capitalize("ﬁne"), "Fine");
        assert_eq!(
            upper_camel_cased("ßtraße \u{01C6}ungla", WordOptions::empty()),
            "Sstraße\u{01C5}ungla"
        );
    }

    #[test]
    fn test_camel_case_look_back_uses_finished_words() {
        let words = vec!["ID".to_string(), "URL".to_string(), "API".to_string()];
        assert_eq!(camel_case(words.clone(), false), "IDurlAPI");
        assert_eq!(camel_case(words, true), "idURLapi");
    }

    #[test]
    fn test_joiners_force_stripping() {
        let input = "don't-stop";
        assert_eq!(snake_cased(input, WordOptions::empty()), "dontstop");
        assert_eq!(upper_camel_cased(input, WordOptions::empty()), "Dontstop");
        assert_eq!(
            upper_camel_cased(input, WordOptions::DISTINGUISH_HYPHENATED_WORDS),
            "DontStop"
        );
        assert_eq!(dash_delimited(input, WordOptions::empty()), "don't-stop");
    }

    #[test]
    fn test_snake_case_does_not_force_acronyms() {
        assert_eq!(snake_cased("userId", WordOptions::empty()), "user_id");
        assert_eq!(
            snake_cased("userId", WordOptions::AUTOMATICALLY_UPPERCASE_COMMON_ACRONYMS),
            "user_id"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(acronym("", WordOptions::empty()), "");
        assert_eq!(lower_camel_cased("", WordOptions::empty()), "");
        assert_eq!(upper_camel_cased("123 !!", WordOptions::empty()), "");
        assert_eq!(snake_cased("", WordOptions::empty()), "");
    }
}
