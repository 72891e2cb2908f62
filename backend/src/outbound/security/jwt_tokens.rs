//! HS256 session tokens via `jsonwebtoken`.
//!
//! Without a configured lifetime tokens carry only the `email` claim and never
//! expire. With one, `iat` and `exp` are stamped on issue and `exp` becomes a
//! required, validated claim.

use std::time::Duration;

use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    get_current_timestamp,
};
use zeroize::Zeroizing;

use crate::domain::ports::{TokenError, TokenService};
use crate::domain::{SessionToken, TokenClaims};

/// [`TokenService`] signing with a shared HMAC secret.
pub struct JwtTokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Option<Duration>,
}

impl JwtTokenService {
    /// Build the service from the signing secret and optional token lifetime.
    pub fn new(secret: &Zeroizing<String>, ttl: Option<Duration>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Issuer and verifier share a clock.
        validation.leeway = 0;
        if ttl.is_none() {
            validation.required_spec_claims.clear();
            validation.validate_exp = false;
        }
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    fn stamp(&self, claims: &TokenClaims) -> TokenClaims {
        let mut stamped = claims.clone();
        if let Some(ttl) = self.ttl {
            let now = get_current_timestamp();
            stamped.iat = Some(now);
            stamped.exp = Some(now.saturating_add(ttl.as_secs()));
        }
        stamped
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, claims: &TokenClaims) -> Result<SessionToken, TokenError> {
        encode(&Header::new(Algorithm::HS256), &self.stamp(claims), &self.encoding)
            .map(SessionToken::new)
            .map_err(|err| TokenError::signing(err.to_string()))
    }

    fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        decode::<TokenClaims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|err| TokenError::invalid(err.to_string()))
    }
}
