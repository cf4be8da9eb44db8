pub mod stats_service;
pub mod trip_service;
