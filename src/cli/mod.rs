pub mod output;

use crate::{Conversion, Converted, WordOptions};
use rayon::prelude::*;

/// One converted input, ready for printing.
#[derive(Debug, Clone)]
pub struct ConversionResult {
    pub input: String,
    pub conversion: Conversion,
    pub output: Converted,
}

/// Convert every input independently, keeping input order.
pub fn convert_all(
    inputs: &[String],
    conversion: Conversion,
    options: WordOptions,
) -> Vec<ConversionResult> {
    inputs
        .par_iter()
        .map(|input| ConversionResult {
            input: input.clone(),
            conversion,
            output: conversion.apply(input, options),
        })
        .collect()
}
