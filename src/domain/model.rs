use serde::Serialize;
use std::collections::HashMap;

/// Occurrence count per case-folded grapheme.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn record(&mut self, key: String) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    pub fn get(&self, key: &str) -> Option<usize> {
        self.counts.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn shape(&self) -> ShapeSequence {
        let mut counts: Vec<usize> = self.counts.values().copied().collect();
        counts.sort_unstable();
        ShapeSequence(counts)
    }
}

/// Frequency counts sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeSequence(Vec<usize>);

impl ShapeSequence {
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// True when the counts are exactly `1, 2, ..., k`.
    pub fn is_pyramid(&self) -> bool {
        self.0
            .iter()
            .enumerate()
            .all(|(index, &count)| count == index + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Missing,
    Undecodable { raw: String },
    NotPyramid { word: String },
    Pyramid { word: String },
}

impl Verdict {
    pub fn is_pyramid(&self) -> bool {
        matches!(self, Verdict::Pyramid { .. })
    }

    /// The decoded word, or the raw query when it could not be decoded.
    pub fn word(&self) -> Option<&str> {
        match self {
            Verdict::Missing => None,
            Verdict::Undecodable { raw } => Some(raw.as_str()),
            Verdict::NotPyramid { word } | Verdict::Pyramid { word } => Some(word.as_str()),
        }
    }

    pub fn message(&self) -> String {
        match self {
            Verdict::Missing => "🤷".to_string(),
            Verdict::Undecodable { raw } => format!("😕 ‘{}’ is NOT a pyramid word.", raw),
            Verdict::NotPyramid { word } => format!("☹️ ‘{}’ is NOT a pyramid word.", word),
            Verdict::Pyramid { word } => format!("😄 ‘{}’ is a pyramid word.", word),
        }
    }
}

/// JSON rendering of a verdict.
#[derive(Debug, Clone, Serialize)]
pub struct VerdictBody {
    pub message: String,
    pub word: Option<String>,
    pub pyramid: bool,
}

impl From<&Verdict> for VerdictBody {
    fn from(verdict: &Verdict) -> Self {
        Self {
            message: verdict.message(),
            word: verdict.word().map(str::to_string),
            pyramid: verdict.is_pyramid(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(keys: &[&str]) -> FrequencyTable {
        let mut table = FrequencyTable::default();
        for key in keys {
            table.record(key.to_string());
        }
        table
    }

    #[test]
    fn test_shape_is_sorted() {
        let table = table(&["c", "c", "c", "a", "b", "b"]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.get("c"), Some(3));
        assert_eq!(table.shape().as_slice(), &[1, 2, 3]);
        assert!(table.shape().is_pyramid());
    }

    #[test]
    fn test_shape_rejects_gaps_and_repeats() {
        assert!(!table(&["a", "a", "b", "b", "b"]).shape().is_pyramid());
        assert!(!table(&["a", "a", "b", "b"]).shape().is_pyramid());
        assert!(!table(&["a", "b", "b", "b"]).shape().is_pyramid());
    }

    #[test]
    fn test_verdict_messages() {
        assert_eq!(Verdict::Missing.message(), "🤷");
        assert_eq!(
            Verdict::Undecodable {
                raw: "abc%2".to_string()
            }
            .message(),
            "😕 ‘abc%2’ is NOT a pyramid word."
        );
        assert_eq!(
            Verdict::NotPyramid {
                word: "aabb".to_string()
            }
            .message(),
            "☹️ ‘aabb’ is NOT a pyramid word."
        );
        assert_eq!(
            Verdict::Pyramid {
                word: "Aab".to_string()
            }
            .message(),
            "😄 ‘Aab’ is a pyramid word."
        );
    }

    #[test]
    fn test_verdict_body() {
        let body = VerdictBody::from(&Verdict::Pyramid {
            word: "a".to_string(),
        });
        assert!(body.pyramid);
        assert_eq!(body.word.as_deref(), Some("a"));

        let missing = VerdictBody::from(&Verdict::Missing);
        assert!(!missing.pyramid);
        assert!(missing.word.is_none());
    }
}
