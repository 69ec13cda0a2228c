// Domain layer: models and ports. Only std here.

pub mod model;
pub mod ports;
