// Domain layer: vessel records and the adapter port. No network or markup handling here.

pub mod model;
pub mod ports;
