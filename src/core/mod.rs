pub mod decoder;
pub mod engine;
pub mod pyramid;

pub use crate::domain::model::{FrequencyTable, ShapeSequence, Verdict};
pub use crate::domain::ports::{QueryDecoder, WordEvaluator};
pub use crate::utils::error::Result;
