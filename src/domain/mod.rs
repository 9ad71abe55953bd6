// Domain layer: listing and report models plus the source port.

pub mod model;
pub mod ports;
