//! Availability queries against the shortening service's `free` endpoint.
//!
//! The service answers `GET {base}/free?long=<url>` and
//! `GET {base}/free?short=<slug>`. A long URL is usable only on an exact
//! `200`; any other status carries a human-readable reason in the body. A
//! slug is usable on any `2xx`.

use crate::error::availability::AvailabilityError;

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;
use std::time::Duration;

use log::debug;
use reqwest::Client;
use url::{Position, Url};

const FREE_CHECK_ENDPOINT: &str = "free";
const LONG_QUERY_KEY: &str = "long";
const SHORT_QUERY_KEY: &str = "short";

/// Verdict of the service for one candidate value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    Free,
    Taken {
        status: HttpStatusCode,
        /// Response body, verbatim. May be empty.
        reason: String,
    },
}

/// Source of availability verdicts.
///
/// Implemented over HTTP by [`AvailabilityClient`]; tests substitute their own.
#[allow(async_fn_in_trait)]
pub trait AvailabilityCheck {
    async fn check_long(&self, long_url: &str) -> Result<Availability, AvailabilityError>;

    async fn check_short(&self, slug: &str) -> Result<Availability, AvailabilityError>;
}

#[derive(Debug, Clone)]
pub struct AvailabilityClient {
    base_url: Url,
    client: Client,
}

impl AvailabilityClient {
    pub fn new(base_url_str: &str) -> Result<Self, AvailabilityError> {
        Self::with_timeout(base_url_str, None)
    }

    /// Build a client whose requests give up after `timeout`.
    ///
    /// The timeout is ignored on wasm32, where requests go through the
    /// browser's fetch.
    pub fn with_timeout(
        base_url_str: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, AvailabilityError> {
        let base_url = parse_base_url(base_url_str)?;

        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = match timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        let client = builder.build()?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/free?{key}={value}` with `value` percent-encoded.
    pub fn free_check_url(&self, key: &str, value: &str) -> Result<Url, AvailabilityError> {
        let mut url = self.base_url.join(FREE_CHECK_ENDPOINT)?;
        url.query_pairs_mut().append_pair(key, value);
        Ok(url)
    }

    async fn query(
        &self,
        key: &str,
        value: &str,
    ) -> Result<(HttpStatusCode, String), AvailabilityError> {
        let url = self.free_check_url(key, value)?;
        debug!("GET {url}");

        let response = self.client.get(url).send().await?;
        let status = HttpStatusCode::from(response.status().as_u16());

        let body = response
            .text()
            .await
            .map_err(|e| AvailabilityError::Body {
                message: format!("HTTP {status} - {e}"),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok((status, body))
    }
}

impl AvailabilityCheck for AvailabilityClient {
    async fn check_long(&self, long_url: &str) -> Result<Availability, AvailabilityError> {
        let (status, reason) = self.query(LONG_QUERY_KEY, long_url).await?;

        if status.is_ok() {
            return Ok(Availability::Free);
        }
        Ok(Availability::Taken { status, reason })
    }

    async fn check_short(&self, slug: &str) -> Result<Availability, AvailabilityError> {
        let (status, reason) = self.query(SHORT_QUERY_KEY, slug).await?;

        if status.is_success() {
            return Ok(Availability::Free);
        }
        Ok(Availability::Taken { status, reason })
    }
}

/// Parse a service base URL, rejecting anything that cannot carry a path.
///
/// The path always ends with `/`, so the endpoint joins below it:
/// `https://example.org/shorty` checks at `https://example.org/shorty/free`.
#[track_caller]
pub fn parse_base_url(base_url_str: &str) -> Result<Url, AvailabilityError> {
    let mut base_url = Url::parse(base_url_str)?;

    if base_url.cannot_be_a_base() || base_url.host_str().is_none() {
        return Err(AvailabilityError::UrlParse {
            message: format!("Not a usable service base URL: {base_url_str}"),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    if !base_url.path().ends_with('/') {
        let path = format!("{}/", base_url.path());
        base_url.set_path(&path);
    }

    Ok(base_url)
}

/// Label shown in front of the custom slug input, e.g. `sho.rt:8080/`.
pub fn prefix_label(base_url: &Url) -> String {
    format!("{}/", &base_url[Position::BeforeHost..Position::AfterPort])
}
