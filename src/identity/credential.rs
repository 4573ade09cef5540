use crate::identity::{AuthResponse, BasicProfile, IdentityError, SignInCallback};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    picture: String,
    #[serde(default)]
    email: String,
}

/// A Google ID token, read as a sign-in callback.
///
/// Only the payload is decoded; the signature is for the backend to check.
#[derive(Clone)]
pub struct GoogleCredential {
    token: String,
    profile: BasicProfile,
}

impl GoogleCredential {
    pub fn parse(token: &str) -> Result<Self, IdentityError> {
        let token = token.trim();
        let mut parts = token.split('.');
        let payload = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(_), Some(payload), Some(_), None) => payload,
            _ => {
                return Err(IdentityError::Credential(
                    "expected three dot-separated segments".to_string(),
                ))
            }
        };

        let bytes = URL_SAFE_NO_PAD
            .decode(payload.trim_end_matches('='))
            .map_err(|e| IdentityError::Credential(format!("payload is not base64url: {e}")))?;
        let claims: Claims = serde_json::from_slice(&bytes)
            .map_err(|e| IdentityError::Credential(format!("payload claims: {e}")))?;

        Ok(Self {
            token: token.to_string(),
            profile: BasicProfile {
                id: claims.sub,
                name: claims.name,
                image_url: claims.picture,
                email: claims.email,
            },
        })
    }
}

impl SignInCallback for GoogleCredential {
    fn basic_profile(&self) -> BasicProfile {
        self.profile.clone()
    }

    fn auth_response(&self) -> AuthResponse {
        AuthResponse {
            id_token: self.token.clone(),
        }
    }
}
