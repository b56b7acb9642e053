// Adapters layer: the HTTP surface in front of the classifier engine.

pub mod http;
