//! Split strings into words and rejoin them in a chosen case style.
//!
//! ```
//! use wordcase::{WordCase, WordOptions};
//!
//! let options = WordOptions::empty();
//! assert_eq!("someObjectIdUrlApi".lower_camel_cased(options), "someObjectIDurlAPI");
//! assert_eq!("someObjectIdUrlApi".snake_cased(options), "some_object_id_url_api");
//! assert_eq!("let's invent some acronym".acronym(options), "LISA");
//! ```

pub mod case;
#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod config;
pub mod error;
pub mod tokenizer;

pub use case::{
    acronym, applying, dash_delimited, lower_camel_cased, snake_cased, upper_camel_cased,
    CaseStyle, Conversion, Converted,
};
#[cfg(feature = "cli")]
pub use config::Config;
pub use error::{Error, Result};
pub use tokenizer::{words, WordOptions};

/// Word splitting and case conversion as methods on string slices.
///
/// Each method is a thin wrapper over the free function of the same name.
pub trait WordCase {
    fn words(&self, options: WordOptions) -> Vec<String>;

    fn acronym(&self, options: WordOptions) -> String;

    fn dash_delimited(&self, options: WordOptions) -> String;

    fn lower_camel_cased(&self, options: WordOptions) -> String;

    fn upper_camel_cased(&self, options: WordOptions) -> String;

    fn snake_cased(&self, options: WordOptions) -> String;

    fn applying(&self, style: CaseStyle, options: WordOptions) -> String;
}

impl WordCase for str {
    fn words(&self, options: WordOptions) -> Vec<String> {
        words(self, options)
    }

    fn acronym(&self, options: WordOptions) -> String {
        acronym(self, options)
    }

    fn dash_delimited(&self, options: WordOptions) -> String {
        dash_delimited(self, options)
    }

    fn lower_camel_cased(&self, options: WordOptions) -> String {
        lower_camel_cased(self, options)
    }

    fn upper_camel_cased(&self, options: WordOptions) -> String {
        upper_camel_cased(self, options)
    }

    fn snake_cased(&self, options: WordOptions) -> String {
        snake_cased(self, options)
    }

    fn applying(&self, style: CaseStyle, options: WordOptions) -> String {
        applying(self, style, options)
    }
}
