// src/core/net.rs
// Blocking GET of the draw page. One attempt, no retry.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Error, Result};

fn client() -> Result<Client> {
    Ok(Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?)
}

/// Fetch `url` and return the body. Non-2xx is an error.
pub fn http_get(url: &str) -> Result<String> {
    let resp = client()?.get(url).send()?;

    let status = resp.status();
    if !status.is_success() {
        return Err(Error::Status { url: s!(url), status: status.as_u16() });
    }
    Ok(resp.text()?)
}
