//! Bias Audit CLI

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod scanner;
