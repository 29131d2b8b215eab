// Domain layer: core models and ports (interfaces).

pub mod color;
pub mod model;
pub mod ports;
