//! Core server infrastructure

pub mod config;

pub use config::Config;
