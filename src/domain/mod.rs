// Domain layer: request outcomes, frequency shapes and the ports the engine is generic over.

pub mod model;
pub mod ports;
