// Domain layer: operation models and ports. No HTTP types here.

pub mod model;
pub mod ports;
