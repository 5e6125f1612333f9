//! Remote sheet row store.
//!
//! Persistence is a spreadsheet: each team owns one sheet (tab), addressed by
//! column ranges through the values API. Nothing is cached between requests;
//! every operation re-reads the range it is about to touch.

pub mod range;
pub mod token;

pub use range::Range;
pub use token::{OauthClient, TokenCache};

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use crate::config::Config;
use crate::constants::HTTP_TIMEOUT_SECS;
use crate::error::{AppError, Result};

/// Remote tabular store addressed by (team, column range).
///
/// Mirrors what the values API offers: range read, range overwrite, row
/// append, plus the sheet-level existence/creation pair used for teams.
#[async_trait]
pub trait RowStore: Send + Sync {
    /// Read the values of `range`; an empty range yields an empty vec
    async fn read(&self, team: &str, range: Range) -> Result<Vec<Vec<String>>>;

    /// Overwrite `range` with `values` verbatim (RAW input)
    async fn write(&self, team: &str, range: Range, values: Vec<Vec<String>>) -> Result<()>;

    /// Append `values` as new rows after the last data in `range`'s columns
    async fn append(&self, team: &str, range: Range, values: Vec<Vec<String>>) -> Result<()>;

    /// Whether a sheet (tab) named `team` exists
    async fn sheet_exists(&self, team: &str) -> Result<bool>;

    /// Create a new empty sheet (tab) named `team`
    async fn create_sheet(&self, team: &str) -> Result<()>;
}

/// Subset of a values API response this server cares about.
/// The `values` key is absent entirely when the range holds no data.
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct SpreadsheetMeta {
    #[serde(default)]
    sheets: Vec<SheetEntry>,
}

#[derive(Debug, Deserialize)]
struct SheetEntry {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
struct SheetProperties {
    title: String,
}

/// Production row store speaking the Sheets v4 API with a cached bearer token
pub struct SheetsClient {
    http: reqwest::Client,
    api_base: String,
    sheet_id: String,
    tokens: TokenCache<OauthClient>,
}

impl SheetsClient {
    /// Build the production client from startup configuration
    pub fn from_config(config: &Config) -> std::result::Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;

        let oauth = OauthClient::new(
            http.clone(),
            config.oauth_token_url.clone(),
            config.oauth_client_id.clone(),
            config.oauth_client_secret.clone(),
            config.oauth_refresh_token.clone(),
        );

        Ok(Self {
            http,
            api_base: config.sheets_api_base.clone(),
            sheet_id: config.sheet_id.clone(),
            tokens: TokenCache::new(oauth),
        })
    }

    fn values_url(&self, team: &str, range: Range) -> String {
        format!(
            "{}/{}/values/{}!{}",
            self.api_base, self.sheet_id, team, range
        )
    }
}

#[async_trait]
impl RowStore for SheetsClient {
    async fn read(&self, team: &str, range: Range) -> Result<Vec<Vec<String>>> {
        let token = self.tokens.bearer().await?;
        let response = self
            .http
            .get(self.values_url(team, range))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| AppError::RemoteRead(format!("GET {team}!{range}: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::RemoteRead(format!(
                "GET {team}!{range}: HTTP {}",
                response.status()
            )));
        }

        let body: ValueRange = response
            .json()
            .await
            .map_err(|e| AppError::RemoteRead(format!("GET {team}!{range}: bad body: {e}")))?;

        Ok(body.values)
    }

    async fn write(&self, team: &str, range: Range, values: Vec<Vec<String>>) -> Result<()> {
        let token = self.tokens.bearer().await?;
        let response = self
            .http
            .put(self.values_url(team, range))
            .query(&[("valueInputOption", "RAW")])
            .bearer_auth(token)
            .json(&json!({ "values": values }))
            .send()
            .await
            .map_err(|e| AppError::RemoteWrite(format!("PUT {team}!{range}: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::RemoteWrite(format!(
                "PUT {team}!{range}: HTTP {}",
                response.status()
            )));
        }

        Ok(())
    }

    async fn append(&self, team: &str, range: Range, values: Vec<Vec<String>>) -> Result<()> {
        let token = self.tokens.bearer().await?;
        let url = format!("{}:append", self.values_url(team, range));
        let response = self
            .http
            .post(url)
            .query(&[("valueInputOption", "USER_ENTERED")])
            .bearer_auth(token)
            .json(&json!({ "values": values }))
            .send()
            .await
            .map_err(|e| AppError::RemoteWrite(format!("append {team}!{range}: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::RemoteWrite(format!(
                "append {team}!{range}: HTTP {}",
                response.status()
            )));
        }

        Ok(())
    }

    async fn sheet_exists(&self, team: &str) -> Result<bool> {
        let token = self.tokens.bearer().await?;
        let url = format!("{}/{}", self.api_base, self.sheet_id);
        let response = self
            .http
            .get(url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| AppError::RemoteRead(format!("spreadsheet metadata: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::RemoteRead(format!(
                "spreadsheet metadata: HTTP {}",
                response.status()
            )));
        }

        let meta: SpreadsheetMeta = response
            .json()
            .await
            .map_err(|e| AppError::RemoteRead(format!("spreadsheet metadata: bad body: {e}")))?;

        Ok(meta.sheets.iter().any(|s| s.properties.title == team))
    }

    async fn create_sheet(&self, team: &str) -> Result<()> {
        let token = self.tokens.bearer().await?;
        let url = format!("{}/{}:batchUpdate", self.api_base, self.sheet_id);
        let body = json!({
            "requests": [
                { "addSheet": { "properties": { "title": team } } }
            ]
        });

        let response = self
            .http
            .post(url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::RemoteWrite(format!("addSheet {team}: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::RemoteWrite(format!(
                "addSheet {team}: HTTP {}",
                response.status()
            )));
        }

        tracing::info!("Sheet created for team {}", team);
        Ok(())
    }
}
