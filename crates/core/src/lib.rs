//! User statistics for the voucher dashboard: role summary and growth series.

pub mod aggregator;
pub mod application;
pub mod boundary;
pub mod domain;
pub mod error;
pub mod ports;
pub mod utils;

pub use error::StatsError;
