//! The pyramid-word predicate.
//!
//! A word is a pyramid word when its distinct characters, compared without
//! regard to case, occur 1, 2, ..., k times for some k. Characters are
//! extended grapheme clusters of the NFC form of the input.

use crate::core::WordEvaluator;
use crate::domain::model::FrequencyTable;
use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("word pattern is a valid regex"));

#[derive(Debug, Clone, Copy, Default)]
pub struct PyramidEvaluator;

impl WordEvaluator for PyramidEvaluator {
    fn evaluate(&self, word: &str) -> bool {
        is_pyramid_word(word)
    }
}

pub fn is_pyramid_word(text: &str) -> bool {
    // 先轉為 NFC，讓組合字元與預組字元一致
    let normalized: String = text.nfc().collect();
    if !WORD_PATTERN.is_match(&normalized) {
        return false;
    }

    // 依字素計數後排序，檢查是否為 1..=k
    let table = frequency_table(&normalized);
    let shape = table.shape();
    tracing::trace!(distinct = table.len(), shape = ?shape.as_slice(), "computed frequency shape");
    shape.is_pyramid()
}

/// Counts graphemes of `text` by case-folded identity. No normalization is applied.
pub fn frequency_table(text: &str) -> FrequencyTable {
    let mut table = FrequencyTable::default();
    for grapheme in text.graphemes(true) {
        table.record(fold_case(grapheme));
    }
    table
}

/// Unicode default full case folding (CaseFolding.txt C + F), independent of locale.
///
/// Turkic-only mappings are not applied, so dotless `ı` stays apart from `i`.
pub fn fold_case(grapheme: &str) -> String {
    caseless::default_case_fold_str(grapheme)
}
