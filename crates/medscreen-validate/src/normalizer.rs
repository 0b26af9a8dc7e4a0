//! Vocabulary-driven value normalization.

use medscreen_model::{ResultValue, Vocabulary};

/// Map a raw test value to its canonical form.
///
/// Membership is case-sensitive. Negative terms become `0`, positive terms
/// become `1`. Anything else passes through unchanged; if it is not actually
/// numeric it will fail later at the classifier's float cast, not here.
pub fn normalize_value(raw: &str, vocab: &Vocabulary) -> ResultValue {
    if vocab.is_negative(raw) {
        ResultValue::Number(0.0)
    } else if vocab.is_positive(raw) {
        ResultValue::Number(1.0)
    } else {
        ResultValue::Text(raw.to_string())
    }
}
