// Domain layer - Fleet topology, reports and interval algebra
pub mod fleet;
pub mod interval;
