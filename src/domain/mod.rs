// Domain layer: plain data types and the input port. No I/O here.

pub mod model;
pub mod ports;
