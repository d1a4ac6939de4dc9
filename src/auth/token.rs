//! Token secret wrapper and the per-client token state.

// self
use crate::_prelude::*;

/// Redacted token secret wrapper keeping sensitive material out of logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSecret(String);
impl TokenSecret {
	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner token value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for TokenSecret {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("TokenSecret").field(&"<redacted>").finish()
	}
}
impl Display for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// Per-client OAuth state: an optional access token and an optional authorization code.
///
/// Only the code exchange stores a new access token; request-issuing operations read the
/// state without mutating it. Nothing is persisted across processes; callers reuse tokens
/// by seeding a fresh client with [`TokenState::store_access_token`] input.
#[derive(Clone, Debug, Default)]
pub struct TokenState {
	access_token: Option<TokenSecret>,
	authorization_code: Option<String>,
}
impl TokenState {
	/// Returns the access token, if one has been set or obtained.
	pub fn access_token(&self) -> Option<&TokenSecret> {
		self.access_token.as_ref()
	}

	/// Returns the pending authorization code, if any.
	pub fn authorization_code(&self) -> Option<&str> {
		self.authorization_code.as_deref()
	}

	/// Stores an access token obtained from the token endpoint or supplied by the caller.
	pub fn store_access_token(&mut self, token: TokenSecret) {
		self.access_token = Some(token);
	}

	/// Stores the authorization code returned by the authorization redirect.
	pub fn store_authorization_code(&mut self, code: impl Into<String>) {
		self.authorization_code = Some(code.into());
	}
}
