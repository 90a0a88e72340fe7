// src/core/net.rs

// Blocking HTTP GET with an identifying User-Agent.

use std::error::Error;
use std::time::Duration;

use once_cell::sync::OnceCell;
use reqwest::blocking::Client;

use crate::config::consts::{PAGE_TIMEOUT_SECS, USER_AGENT};

static CLIENT: OnceCell<Client> = OnceCell::new();

fn client() -> Result<&'static Client, Box<dyn Error>> {
    let c = CLIENT.get_or_try_init(|| {
        Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(PAGE_TIMEOUT_SECS))
            .build()
    })?;
    Ok(c)
}

/// Fetch a page body. Non-success statuses are errors.
pub fn http_get(url: &str) -> Result<String, Box<dyn Error>> {
    let resp = client()?.get(url).send()?.error_for_status()?;
    Ok(resp.text()?)
}

/// Same, with a tighter per-request timeout (player-profile fetches).
pub fn http_get_with_timeout(url: &str, secs: u64) -> Result<String, Box<dyn Error>> {
    let resp = client()?
        .get(url)
        .timeout(Duration::from_secs(secs))
        .send()?
        .error_for_status()?;
    Ok(resp.text()?)
}
