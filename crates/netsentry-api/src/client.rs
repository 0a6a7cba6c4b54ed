//! Typed client for the dashboard REST API.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::types::{
    ActivityEntry, AlertRecord, BlockedIp, CategoryCount, Stats, TimeBucket, TopIp,
    WhitelistEntry, WhitelistRequest,
};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

// List endpoints wrap their payload in a single-key envelope.
#[derive(Deserialize)]
struct BlockedEnvelope {
    blocked_ips: Vec<BlockedIp>,
}

#[derive(Deserialize)]
struct WhitelistEnvelope {
    whitelisted_ips: Vec<WhitelistEntry>,
}

#[derive(Deserialize)]
struct AlertsEnvelope {
    alerts: Vec<AlertRecord>,
}

#[derive(Deserialize)]
struct BucketsEnvelope {
    buckets: Vec<TimeBucket>,
}

#[derive(Deserialize)]
struct TopIpsEnvelope {
    top_ips: Vec<TopIp>,
}

#[derive(Deserialize)]
struct CategoriesEnvelope {
    categories: Vec<CategoryCount>,
}

#[derive(Deserialize)]
struct ActivityEnvelope {
    activity: Vec<ActivityEntry>,
}

/// Async client over the dashboard's `/api` routes.
///
/// Cheap to clone; all calls are independent of the live stream.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(host: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: format!("http://{}", host.trim_end_matches('/')),
        }
    }

    // ── Stats ─────────────────────────────────────────────────────

    pub async fn stats(&self) -> Result<Stats, ApiError> {
        self.get_json(&self.url("/api/stats"), &[]).await
    }

    pub async fn alert_buckets(&self, days: u32) -> Result<Vec<TimeBucket>, ApiError> {
        let envelope: BucketsEnvelope = self
            .get_json(
                &self.url("/api/stats/alerts/buckets"),
                &[("days", days.to_string())],
            )
            .await?;
        Ok(envelope.buckets)
    }

    pub async fn block_buckets(&self, days: u32) -> Result<Vec<TimeBucket>, ApiError> {
        let envelope: BucketsEnvelope = self
            .get_json(
                &self.url("/api/stats/blocks/buckets"),
                &[("days", days.to_string())],
            )
            .await?;
        Ok(envelope.buckets)
    }

    pub async fn top_ips(&self, limit: u32) -> Result<Vec<TopIp>, ApiError> {
        let envelope: TopIpsEnvelope = self
            .get_json(
                &self.url("/api/stats/top_ips"),
                &[("limit", limit.to_string())],
            )
            .await?;
        Ok(envelope.top_ips)
    }

    pub async fn categories(&self, days: u32) -> Result<Vec<CategoryCount>, ApiError> {
        let envelope: CategoriesEnvelope = self
            .get_json(
                &self.url("/api/stats/categories"),
                &[("days", days.to_string())],
            )
            .await?;
        Ok(envelope.categories)
    }

    pub async fn alerts_by_ip(&self, ip: &str) -> Result<Vec<AlertRecord>, ApiError> {
        let envelope: AlertsEnvelope = self
            .get_json(
                &self.url("/api/stats/alerts/by_ip"),
                &[("ip", ip.to_string())],
            )
            .await?;
        Ok(envelope.alerts)
    }

    // ── Blocklist ─────────────────────────────────────────────────

    pub async fn blocked(&self) -> Result<Vec<BlockedIp>, ApiError> {
        let envelope: BlockedEnvelope = self.get_json(&self.url("/api/blocked"), &[]).await?;
        Ok(envelope.blocked_ips)
    }

    pub async fn blocked_by_ip(&self, ip: &str) -> Result<Vec<BlockedIp>, ApiError> {
        let envelope: BlockedEnvelope = self
            .get_json(&self.url("/api/blocked/by_ip"), &[("ip", ip.to_string())])
            .await?;
        Ok(envelope.blocked_ips)
    }

    pub async fn unblock(&self, ip: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url(&format!("/api/unblock/{ip}")))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    // ── Whitelist ─────────────────────────────────────────────────

    pub async fn whitelist(&self) -> Result<Vec<WhitelistEntry>, ApiError> {
        let envelope: WhitelistEnvelope = self.get_json(&self.url("/api/whitelist"), &[]).await?;
        Ok(envelope.whitelisted_ips)
    }

    pub async fn whitelist_add(&self, ip: &str, description: Option<&str>) -> Result<(), ApiError> {
        let body = WhitelistRequest {
            ip: ip.to_owned(),
            description: description.unwrap_or_default().to_owned(),
        };
        let response = self
            .http
            .post(self.url(&format!("/api/whitelist/{ip}")))
            .json(&body)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    pub async fn whitelist_remove(&self, ip: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.url(&format!("/api/whitelist/{ip}")))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    // ── Activity ──────────────────────────────────────────────────

    pub async fn activity(
        &self,
        search: Option<&str>,
        kind: Option<&str>,
        limit: u32,
    ) -> Result<Vec<ActivityEntry>, ApiError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(search) = search.filter(|s| !s.is_empty()) {
            query.push(("search", search.to_string()));
        }
        if let Some(kind) = kind.filter(|k| !k.is_empty()) {
            query.push(("type", kind.to_string()));
        }
        query.push(("limit", limit.to_string()));

        let envelope: ActivityEnvelope =
            self.get_json(&self.url("/api/activity"), &query).await?;
        Ok(envelope.activity)
    }

    // ── Plumbing ──────────────────────────────────────────────────

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let response = self.http.get(url).query(query).send().await?;
        let response = Self::check(response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::Status { status, body })
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────
