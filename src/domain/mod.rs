// Domain layer: the student record, the roster that owns them, and ports (interfaces).

pub mod model;
pub mod ports;
pub mod roster;
