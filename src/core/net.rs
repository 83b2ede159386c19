// src/core/net.rs

// Single blocking GET. One attempt, hard timeout, no retries:
// if the jar page is down we want the run to fail loudly.

use std::error::Error;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT as AGENT};

pub fn http_get(url: &str) -> Result<String, Box<dyn Error>> {
    let client = Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?;

    let resp = client
        .get(url)
        .header(USER_AGENT, AGENT)
        .send()?
        .error_for_status()?;

    Ok(resp.text()?)
}
