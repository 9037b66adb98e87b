//! Identity assertion decoding and role resolution.
//!
//! The assertion is the compact JWS handed over by the identity provider's
//! sign-in widget. Only the payload is decoded, for display fields; the
//! signature is not checked here and the token must not be treated as proof of
//! identity by anything downstream of the client.

use crate::{
    api::AttendanceApi,
    error::AttendError,
    types::{Identity, UserRoleResponse},
};
use base64ct::{Base64UrlUnpadded, Encoding};
use serde::Deserialize;
use tracing::debug;

pub const PROVIDER_LOGIN_FAILED: &str = "Google login failed. Please try again.";

/// Display claims read from the assertion payload.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct IdentityClaims {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

fn b64d_json<T: for<'de> Deserialize<'de>>(segment: &str) -> Result<T, AttendError> {
    let bytes = Base64UrlUnpadded::decode_vec(segment.trim_end_matches('='))
        .map_err(|_| AttendError::Decode("Invalid credential encoding".to_string()))?;
    serde_json::from_slice(&bytes)
        .map_err(|err| AttendError::Decode(format!("Invalid credential payload: {err}")))
}

/// Decodes the payload segment of `header.payload.signature`.
///
/// # Errors
/// Returns [`AttendError::Decode`] for a malformed token or a payload without an email.
pub fn decode_claims(credential: &str) -> Result<IdentityClaims, AttendError> {
    let mut parts = credential.trim().split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(AttendError::Decode("Invalid credential format".to_string()));
    };

    let claims: IdentityClaims = b64d_json(payload)?;
    if claims.email.trim().is_empty() {
        return Err(AttendError::Decode(
            "Credential does not contain an email".to_string(),
        ));
    }
    Ok(claims)
}

fn identity_from(claims: IdentityClaims, lookup: UserRoleResponse) -> Identity {
    let name = claims
        .name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| claims.email.clone());

    Identity {
        email: claims.email,
        name,
        picture: claims.picture,
        role: lookup.role,
    }
}

/// Decodes the credential and looks up the role for its email.
///
/// # Errors
/// Returns [`AttendError::NoCredential`] when the provider returned nothing,
/// decode errors for a malformed credential, and any error from the lookup.
pub async fn resolve_identity<A: AttendanceApi>(
    api: &A,
    credential: Option<&str>,
) -> Result<Identity, AttendError> {
    let credential = credential
        .filter(|value| !value.trim().is_empty())
        .ok_or(AttendError::NoCredential)?;
    let claims = decode_claims(credential)?;
    let lookup = api.check_user_role(&claims.email).await?;
    debug!(role = lookup.role.as_str(), "resolved user role");
    Ok(identity_from(claims, lookup))
}
