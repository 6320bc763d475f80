// File: src/acquire/fetch.rs
use crate::error::{Error, Result};
use log::info;
use std::io::Read;

/// Something that can turn a URL into bytes.
///
/// Acquisition only talks to this trait, so tests can serve canned payloads
/// and count how often the network would have been hit.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// Blocking HTTP(S) fetcher. One request per call, no retries.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        info!("Downloading {url}");
        let mut response = self.client.get(url).send()?;
        if !response.status().is_success() {
            return Err(Error::HttpStatus {
                url: url.to_string(),
                status: response.status(),
            });
        }

        let mut body = Vec::new();
        response.read_to_end(&mut body)?;
        info!("Downloaded {} bytes from {url}", body.len());
        Ok(body)
    }
}
