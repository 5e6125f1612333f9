use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::error::{AppError, Result};

/// Response body of the OAuth refresh endpoint
#[derive(Debug, Deserialize)]
pub struct FetchedToken {
    pub access_token: Option<String>,
    pub expires_in: u64,
}

/// Source of fresh bearer tokens (seam for tests)
#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn fetch(&self) -> Result<FetchedToken>;
}

/// Production token source: exchanges the static refresh credential at the
/// configured OAuth endpoint.
#[derive(Debug, Clone)]
pub struct OauthClient {
    http: reqwest::Client,
    token_url: String,
    client_id: String,
    client_secret: String,
    refresh_token: String,
}

impl OauthClient {
    pub fn new(
        http: reqwest::Client,
        token_url: String,
        client_id: String,
        client_secret: String,
        refresh_token: String,
    ) -> Self {
        Self {
            http,
            token_url,
            client_id,
            client_secret,
            refresh_token,
        }
    }
}

#[async_trait]
impl TokenSource for OauthClient {
    async fn fetch(&self) -> Result<FetchedToken> {
        let params = [
            ("refresh_token", self.refresh_token.as_str()),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("grant_type", "refresh_token"),
        ];

        let response = self
            .http
            .post(&self.token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::Auth(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::Auth(format!("HTTP {}", response.status())));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Auth(format!("invalid token response: {e}")))
    }
}

/// Cached token plus the instant it stops being valid
#[derive(Debug, Clone)]
struct CachedToken {
    token: String,
    expires_at: DateTime<Utc>,
}

/// Process-wide bearer credential slot.
///
/// The slot is guarded by an async mutex held across the refresh call, so
/// concurrent expirations serialize into one refresh instead of racing.
pub struct TokenCache<S> {
    slot: Mutex<Option<CachedToken>>,
    source: S,
    now: fn() -> DateTime<Utc>,
}

impl<S: TokenSource> TokenCache<S> {
    pub fn new(source: S) -> Self {
        Self::with_clock(source, Utc::now)
    }

    /// Construct with an injected clock (production uses `Utc::now`)
    pub fn with_clock(source: S, now: fn() -> DateTime<Utc>) -> Self {
        Self {
            slot: Mutex::new(None),
            source,
            now,
        }
    }

    /// Return the cached bearer token, refreshing first when absent or expired
    pub async fn bearer(&self) -> Result<String> {
        let mut slot = self.slot.lock().await;
        let now = (self.now)();

        if let Some(cached) = slot.as_ref() {
            if now < cached.expires_at {
                return Ok(cached.token.clone());
            }
        }

        tracing::debug!("Access token absent or expired, refreshing");
        let fetched = self.source.fetch().await?;
        let token = fetched
            .access_token
            .ok_or_else(|| AppError::Auth("response carried no access token".to_string()))?;

        *slot = Some(CachedToken {
            token: token.clone(),
            expires_at: now + Duration::seconds(fetched.expires_in as i64),
        });

        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingSource {
        calls: Arc<AtomicUsize>,
        token: &'static str,
        expires_in: u64,
    }

    #[async_trait]
    impl TokenSource for CountingSource {
        async fn fetch(&self) -> Result<FetchedToken> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(FetchedToken {
                access_token: Some(self.token.to_string()),
                expires_in: self.expires_in,
            })
        }
    }

    struct NullTokenSource;

    #[async_trait]
    impl TokenSource for NullTokenSource {
        async fn fetch(&self) -> Result<FetchedToken> {
            Ok(FetchedToken {
                access_token: None,
                expires_in: 3599,
            })
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).unwrap()
    }

    #[tokio::test]
    async fn test_token_reused_while_valid() {
        let calls = Arc::new(AtomicUsize::new(0));
        let cache = TokenCache::new(CountingSource {
            calls: calls.clone(),
            token: "tok-1",
            expires_in: 3600,
        });

        assert_eq!(cache.bearer().await.unwrap(), "tok-1");
        assert_eq!(cache.bearer().await.unwrap(), "tok-1");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_expired_token_triggers_single_refresh() {
        let calls = Arc::new(AtomicUsize::new(0));
        let cache = TokenCache::new(CountingSource {
            calls: calls.clone(),
            token: "tok-2",
            expires_in: 3600,
        });

        // Seed the slot with a token that expired an hour ago
        *cache.slot.lock().await = Some(CachedToken {
            token: "stale".to_string(),
            expires_at: Utc::now() - Duration::hours(1),
        });

        assert_eq!(cache.bearer().await.unwrap(), "tok-2");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_zero_lifetime_token_is_never_reused() {
        let calls = Arc::new(AtomicUsize::new(0));
        let cache = TokenCache::new(CountingSource {
            calls: calls.clone(),
            token: "tok",
            expires_in: 0,
        });

        cache.bearer().await.unwrap();
        cache.bearer().await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_frozen_clock_never_refreshes_twice() {
        let calls = Arc::new(AtomicUsize::new(0));
        let cache = TokenCache::with_clock(
            CountingSource {
                calls: calls.clone(),
                token: "tok",
                expires_in: 1,
            },
            fixed_now,
        );

        for _ in 0..5 {
            cache.bearer().await.unwrap();
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_missing_access_token_is_auth_error() {
        let cache = TokenCache::new(NullTokenSource);
        assert!(matches!(cache.bearer().await, Err(AppError::Auth(_))));
    }
}
