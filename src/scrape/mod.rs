// src/scrape/mod.rs
mod jar;

pub use jar::JarSnapshot;
pub use jar::extract;
pub use jar::fetch_and_extract;
