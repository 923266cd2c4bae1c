// Domain layer: request/config models and the ports adapters are built through.

pub mod model;
pub mod ports;
