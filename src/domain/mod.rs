// Domain layer: the values passed between holders and delegates, and the contracts delegates implement.

pub mod model;
pub mod ports;
