use crate::config::Config;
use crate::error::{Result, ShowcaseError};
use crate::github::paging::{fetch_all_pages, PageSource};
use crate::github::types::{ProfileRecord, RepoRecord};
use crate::showcase::ShowcaseSource;
use async_trait::async_trait;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use serde::Serialize;

#[derive(Serialize)]
struct RepoPageParams {
    per_page: u8,
    page: u32,
    sort: &'static str,
}

#[derive(Clone)]
pub struct GitHubClient {
    octo: Octocrab,
    username: String,
    per_page: u8,
}

impl GitHubClient {
    pub fn new(config: &Config) -> Result<Self> {
        if config.username.is_empty() {
            return Err(ShowcaseError::MissingUsername);
        }

        let mut builder = Octocrab::builder()
            .base_uri(config.api_host.as_str())
            .map_err(|e| ShowcaseError::Config(format!("api_host: {e}")))?
            .add_retry_config(RetryConfig::None);
        if let Some(ref token) = config.github_token {
            builder = builder.personal_token(token.clone());
        }
        let octo = builder.build()?;

        Ok(Self {
            octo,
            username: config.username.clone(),
            per_page: config.per_page,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub async fn rate_limit(&self) -> Option<u32> {
        self.octo
            .ratelimit()
            .get()
            .await
            .ok()
            .map(|r| r.rate.remaining as u32)
    }
}

#[async_trait]
impl PageSource for GitHubClient {
    type Item = RepoRecord;

    async fn fetch_page(&self, page: u32, per_page: u8) -> Result<Vec<RepoRecord>> {
        let route = format!("/users/{}/repos", self.username);
        let params = RepoPageParams {
            per_page,
            page,
            sort: "updated",
        };
        let repos = self
            .octo
            .get::<Vec<RepoRecord>, _, _>(route, Some(&params))
            .await?;
        Ok(repos)
    }
}

#[async_trait]
impl ShowcaseSource for GitHubClient {
    async fn fetch_profile(&self) -> Result<ProfileRecord> {
        let route = format!("/users/{}", self.username);
        let profile = self.octo.get::<ProfileRecord, _, ()>(route, None).await?;
        tracing::info!(user = %self.username, "fetched profile");
        Ok(profile)
    }

    /// Every public repository of the user, in server order.
    async fn fetch_repos(&self) -> Result<Vec<RepoRecord>> {
        let repos = fetch_all_pages(self, self.per_page).await?;
        tracing::info!(user = %self.username, count = repos.len(), "fetched repositories");
        Ok(repos)
    }
}
