// Domain layer: models and ports. The calculation engines live under core.

pub mod model;
pub mod ports;
