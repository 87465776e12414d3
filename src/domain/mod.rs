// Domain layer: payload types and ports (capability contracts).

pub mod model;
pub mod ports;
