//! Basic-auth header derivation and injection

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use cloud_connect_http::ApiRequestBuilder;

/// How the `Authorization` value is derived from the user token.
///
/// Dashboard deployments have been observed using both variants, so the
/// scheme is configurable rather than hardcoded.
// TODO: confirm against the live API which variant (and suffix) is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenEncoding {
    /// Base64-encode `token:suffix`
    Base64,
    /// Send `token:suffix` unencoded
    Raw,
}

/// Configuration for the Basic-auth injection step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicAuth {
    suffix: String,
    encoding: TokenEncoding,
}

impl Default for BasicAuth {
    fn default() -> Self {
        Self {
            suffix: "ABC".to_string(),
            encoding: TokenEncoding::Base64,
        }
    }
}

impl BasicAuth {
    /// Create an auth configuration with an explicit encoding and suffix
    pub fn new(encoding: TokenEncoding, suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
            encoding,
        }
    }

    /// The `Authorization` header value for a user token
    pub fn header_value(&self, user_token: &str) -> String {
        match self.encoding {
            TokenEncoding::Base64 => {
                let encoded = STANDARD.encode(format!("{user_token}:{}", self.suffix));
                format!("Basic {encoded}")
            }
            TokenEncoding::Raw => format!("Basic {user_token}:{}", self.suffix),
        }
    }

    /// Attach the `Authorization` header when a non-empty token is present;
    /// with no token the request passes through untouched.
    pub(crate) fn apply(
        &self,
        builder: ApiRequestBuilder,
        user_token: Option<&str>,
    ) -> ApiRequestBuilder {
        match user_token {
            Some(token) if !token.is_empty() => {
                builder.headers([("Authorization", self.header_value(token))])
            }
            _ => builder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base64_encodes_token_and_suffix() {
        let auth = BasicAuth::default();

        assert_eq!(
            auth.header_value("token"),
            format!("Basic {}", STANDARD.encode("token:ABC"))
        );
    }

    #[test]
    fn raw_encoding_appends_suffix_unencoded() {
        let auth = BasicAuth::new(TokenEncoding::Raw, "X");

        assert_eq!(auth.header_value("token"), "Basic token:X");
    }

    #[test]
    fn applies_header_for_non_empty_token() {
        let auth = BasicAuth::default();
        let request = auth
            .apply(ApiRequestBuilder::new(), Some("token"))
            .build();

        assert_eq!(
            request.header("Authorization"),
            Some(auth.header_value("token").as_str())
        );
    }

    #[test]
    fn missing_or_empty_token_adds_no_header() {
        let auth = BasicAuth::default();

        let request = auth.apply(ApiRequestBuilder::new(), None).build();
        assert!(request.headers().is_none());

        let request = auth.apply(ApiRequestBuilder::new(), Some("")).build();
        assert!(request.headers().is_none());
    }
}
