use crate::utils::error::Result;

pub trait QueryDecoder: Send + Sync {
    fn decode(&self, raw: &[u8]) -> Result<String>;
}

pub trait WordEvaluator: Send + Sync {
    fn evaluate(&self, word: &str) -> bool;
}
