// Domain layer: the teaching types and the ports drills talk through.

pub mod animals;
pub mod model;
pub mod ports;
pub mod shapes;
