// Domain layer: artwork models and the ports the client and callers depend on.

pub mod model;
pub mod ports;
