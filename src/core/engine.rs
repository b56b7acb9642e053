use crate::core::{QueryDecoder, Verdict, WordEvaluator};
use crate::core::{decoder::PercentDecoder, pyramid::PyramidEvaluator};

pub type DefaultEngine = PyramidEngine<PercentDecoder, PyramidEvaluator>;

/// Decodes a raw query and classifies the resulting word.
pub struct PyramidEngine<D: QueryDecoder, E: WordEvaluator> {
    decoder: D,
    evaluator: E,
}

impl<D: QueryDecoder, E: WordEvaluator> PyramidEngine<D, E> {
    pub fn new(decoder: D, evaluator: E) -> Self {
        Self { decoder, evaluator }
    }

    /// `raw` is the query string without its leading `?`; `None` when the URL has no `?`.
    pub fn classify(&self, raw: Option<&str>) -> Verdict {
        // 沒有 `?` 才算缺少查詢，空字串照常解碼和判斷
        let Some(raw) = raw else {
            return Verdict::Missing;
        };

        // 解碼查詢字串
        let word = match self.decoder.decode(raw.as_bytes()) {
            Ok(word) => word,
            Err(e) => {
                tracing::debug!("Query '{}' could not be decoded: {}", raw, e);
                return Verdict::Undecodable {
                    raw: raw.to_string(),
                };
            }
        };

        // 判斷是否為金字塔字
        if self.evaluator.evaluate(&word) {
            Verdict::Pyramid { word }
        } else {
            Verdict::NotPyramid { word }
        }
    }
}

impl Default for DefaultEngine {
    fn default() -> Self {
        Self::new(PercentDecoder, PyramidEvaluator)
    }
}
