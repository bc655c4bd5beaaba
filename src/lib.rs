pub mod cli;
pub mod config;
pub mod error;
pub mod checker;
pub mod report;
pub mod batch;
pub mod interactive;
