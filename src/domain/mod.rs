// Domain layer: plan/summary models and the storage port. std only.

pub mod model;
pub mod ports;
