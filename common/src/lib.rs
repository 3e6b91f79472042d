pub mod config;
pub mod error;
pub mod net;
pub mod topology;
