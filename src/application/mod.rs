// Application layer - Uptime use cases
pub mod fleet_evaluator;
pub mod fleet_source;
pub mod report_index;
pub mod uptime_service;
pub mod window_resolver;
