// src/lib.rs

#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;

pub mod record;
pub mod runner;
pub mod scrape;
pub mod store;
