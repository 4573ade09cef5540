//! Sign-in bridge: holds the identity a provider hands us and forwards its
//! bearer token to a backend.

pub mod credential;
pub mod http;

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("not signed in")]
    NotSignedIn,

    #[error("malformed credential: {0}")]
    Credential(String),

    #[error("no token endpoint configured")]
    NoEndpoint,

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("endpoint returned {status}: {body}")]
    Status { status: u16, body: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicProfile {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub email: String,
}

#[derive(Clone, PartialEq, Eq)]
pub struct AuthResponse {
    pub id_token: String,
}

impl fmt::Debug for AuthResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthResponse")
            .field("id_token", &"[REDACTED]")
            .finish()
    }
}

/// What the identity provider hands over once a user has signed in.
pub trait SignInCallback {
    fn basic_profile(&self) -> BasicProfile;
    fn auth_response(&self) -> AuthResponse;
}

/// The provider side of a session.
#[async_trait]
pub trait IdentityProvider: Sync {
    async fn revoke(&self, token: &str) -> Result<(), IdentityError>;
}

/// Backend that accepts the bearer token.
#[async_trait]
pub trait TokenSink: Sync {
    /// Returns the raw response body.
    async fn submit(&self, token: &str) -> Result<String, IdentityError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedInUser {
    pub profile: BasicProfile,
    pub auth: AuthResponse,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum IdentitySession {
    #[default]
    SignedOut,
    SignedIn(SignedInUser),
    TokenSubmitted {
        user: SignedInUser,
        response: String,
    },
}

impl IdentitySession {
    pub fn user(&self) -> Option<&SignedInUser> {
        match self {
            IdentitySession::SignedOut => None,
            IdentitySession::SignedIn(user) => Some(user),
            IdentitySession::TokenSubmitted { user, .. } => Some(user),
        }
    }

    /// Takes over the identity from a provider callback, replacing any
    /// previously held one.
    pub fn sign_in(&mut self, callback: &dyn SignInCallback) {
        let profile = callback.basic_profile();
        tracing::info!(
            id = %profile.id,
            name = %profile.name,
            image_url = %profile.image_url,
            email = %profile.email,
            "signed in"
        );
        *self = IdentitySession::SignedIn(SignedInUser {
            profile,
            auth: callback.auth_response(),
        });
    }

    pub async fn sign_out(&mut self, provider: &dyn IdentityProvider) -> Result<(), IdentityError> {
        let user = self.user().ok_or(IdentityError::NotSignedIn)?;
        provider.revoke(&user.auth.id_token).await?;
        tracing::info!(id = %user.profile.id, "signed out");
        *self = IdentitySession::SignedOut;
        Ok(())
    }

    /// Sends the held token to `sink` and keeps the raw response body.
    pub async fn submit_token(&mut self, sink: &dyn TokenSink) -> Result<String, IdentityError> {
        let user = self.user().ok_or(IdentityError::NotSignedIn)?.clone();
        let response = match sink.submit(&user.auth.id_token).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(error = %e, "token submission failed");
                return Err(e);
            }
        };
        tracing::info!(body = %response, "token endpoint response");
        *self = IdentitySession::TokenSubmitted {
            user,
            response: response.clone(),
        };
        Ok(response)
    }
}
