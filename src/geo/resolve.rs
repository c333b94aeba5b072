//! Shortlink resolution and the resolve-then-extract orchestration.
//!
//! Share links from the Google Maps app (`maps.app.goo.gl/...`) are
//! shortlinks that redirect to a canonical URL carrying the coordinates.
//! Resolution follows those redirects; extraction then runs on the final
//! URL, falling back to the original link when the final URL yields nothing.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::geo::{Coordinate, extract};

/// Follows HTTP redirects to the final effective URL.
///
/// Implementations must never fail: any transport error degrades to
/// "treat the link as already final" and returns the input unchanged.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RedirectResolver: Send + Sync {
    /// Returns the final URL reached from `link`, or the trimmed input
    /// when no redirect occurs or the fetch fails.
    async fn resolve(&self, link: &str) -> String;
}

/// [`RedirectResolver`] backed by a [`reqwest::Client`].
///
/// Relies on the client's defaults: redirects are followed up to the
/// built-in limit, and the request is bounded by the client's configured
/// timeout. One outbound call per invocation; no retries, no caching.
pub struct HttpRedirectResolver {
    client: reqwest::Client,
}

impl HttpRedirectResolver {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RedirectResolver for HttpRedirectResolver {
    async fn resolve(&self, link: &str) -> String {
        let link = link.trim();
        if link.is_empty() {
            return String::new();
        }

        match self.client.get(link).send().await {
            Ok(response) => response.url().to_string(),
            Err(e) => {
                debug!("redirect resolution failed for {link}: {e}");
                link.to_string()
            }
        }
    }
}

/// Outcome of a locate attempt.
///
/// The resolved URL is carried even on failure so it can be surfaced to
/// the submitting user for diagnosis.
#[derive(Debug, Clone, PartialEq)]
pub struct Located {
    pub resolved_url: String,
    pub coordinate: Option<Coordinate>,
}

/// Resolves a raw link and extracts a coordinate pair from it.
pub struct CoordinateLocator {
    resolver: Arc<dyn RedirectResolver>,
}

impl CoordinateLocator {
    pub fn new(resolver: Arc<dyn RedirectResolver>) -> Self {
        Self { resolver }
    }

    /// Resolves `raw_link`, then extracts from the resolved URL, then from
    /// the original trimmed link.
    ///
    /// The second attempt covers redirects that strip the query parameters
    /// holding the coordinates, and links that were already in final form
    /// while resolution returned something unexpected. `coordinate` is
    /// `None` only when both attempts fail; callers must treat that as a
    /// user-correctable input error, not a system fault.
    pub async fn locate(&self, raw_link: &str) -> Located {
        let raw_link = raw_link.trim();
        let resolved_url = self.resolver.resolve(raw_link).await;
        let coordinate = extract(&resolved_url).or_else(|| extract(raw_link));

        Located {
            resolved_url,
            coordinate,
        }
    }
}
