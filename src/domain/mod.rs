// Domain layer: core models and ports (interfaces) shared by the engine and the adapters.

pub mod model;
pub mod ports;
