use crate::identity::{IdentityError, IdentityProvider, TokenSink};
use async_trait::async_trait;
use reqwest::Client;

fn http_client() -> Result<Client, IdentityError> {
    Ok(Client::builder().user_agent("showcase/0.1").build()?)
}

async fn post_form(
    client: &Client,
    url: &str,
    fields: &[(&str, &str)],
) -> Result<String, IdentityError> {
    // `form` sets Content-Type: application/x-www-form-urlencoded
    let response = client.post(url).form(fields).send().await?;
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(IdentityError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(body)
}

/// Posts `idtoken=<token>` to the configured backend.
pub struct HttpTokenSink {
    client: Client,
    endpoint: String,
}

impl HttpTokenSink {
    pub fn new(endpoint: Option<&str>) -> Result<Self, IdentityError> {
        let endpoint = endpoint
            .filter(|e| !e.is_empty())
            .ok_or(IdentityError::NoEndpoint)?;
        Ok(Self {
            client: http_client()?,
            endpoint: endpoint.to_string(),
        })
    }
}

#[async_trait]
impl TokenSink for HttpTokenSink {
    async fn submit(&self, token: &str) -> Result<String, IdentityError> {
        tracing::debug!(endpoint = %self.endpoint, "submitting id token");
        post_form(&self.client, &self.endpoint, &[("idtoken", token)]).await
    }
}

/// Google's OAuth revocation endpoint.
pub struct GoogleIdentity {
    client: Client,
    revoke_url: String,
}

impl GoogleIdentity {
    pub fn new(revoke_url: &str) -> Result<Self, IdentityError> {
        Ok(Self {
            client: http_client()?,
            revoke_url: revoke_url.to_string(),
        })
    }
}

#[async_trait]
impl IdentityProvider for GoogleIdentity {
    async fn revoke(&self, token: &str) -> Result<(), IdentityError> {
        post_form(&self.client, &self.revoke_url, &[("token", token)]).await?;
        Ok(())
    }
}
