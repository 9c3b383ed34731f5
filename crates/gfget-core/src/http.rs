//! Blocking HTTP GET over libcurl.
//!
//! One `Easy` handle per request, redirects followed, body collected in memory.
//! Anything but `200 OK` is reported as [`Error::Status`]; nothing here
//! retries or exits the process.

use crate::error::{Error, Result};
use std::time::Duration;

/// Transfer limits and identification for every request of a run.
#[derive(Debug, Clone)]
pub struct HttpOptions {
    /// Give up if the TCP/TLS connection is not up within this time.
    pub connect_timeout: Option<Duration>,
    /// Abort a transfer that moves less than one byte per second for this long.
    pub stall_timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Some(Duration::from_secs(30)),
            stall_timeout: Some(Duration::from_secs(120)),
            user_agent: concat!("gfget/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Performs GET requests with a fixed set of [`HttpOptions`].
#[derive(Debug, Clone, Default)]
pub struct Fetcher {
    opts: HttpOptions,
}

impl Fetcher {
    pub fn new(opts: HttpOptions) -> Self {
        Self { opts }
    }

    /// GET `url` and return the raw body.
    pub fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let transport = |source: curl::Error| Error::Transport {
            url: url.to_string(),
            source,
        };

        let mut body = Vec::new();
        let mut easy = curl::easy::Easy::new();
        easy.url(url).map_err(transport)?;
        easy.follow_location(true).map_err(transport)?;
        easy.max_redirections(10).map_err(transport)?;
        easy.useragent(&self.opts.user_agent).map_err(transport)?;
        if let Some(t) = self.opts.connect_timeout {
            easy.connect_timeout(t).map_err(transport)?;
        }
        if let Some(t) = self.opts.stall_timeout {
            easy.low_speed_limit(1).map_err(transport)?;
            easy.low_speed_time(t).map_err(transport)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(transport)?;
            transfer.perform().map_err(transport)?;
        }

        let code = easy.response_code().map_err(transport)?;
        if code != 200 {
            return Err(Error::Status {
                url: url.to_string(),
                code,
            });
        }
        tracing::debug!("GET {} -> {} bytes", url, body.len());
        Ok(body)
    }

    /// GET `url` and decode the body as UTF-8.
    pub fn get_text(&self, url: &str) -> Result<String> {
        let bytes = self.get_bytes(url)?;
        String::from_utf8(bytes).map_err(|source| Error::Encoding {
            url: url.to_string(),
            source,
        })
    }
}
