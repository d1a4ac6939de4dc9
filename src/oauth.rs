//! OAuth 2.0 authorization-code mechanics: authorize-URL assembly, the code exchange,
//! and the fixed outcome codes NationBuilder integrations expect.

pub use oauth2;

// crates.io
use oauth2::{
	AuthType, AuthUrl, AuthorizationCode, ClientId, ClientSecret, EndpointNotSet, EndpointSet,
	HttpClientError, RedirectUrl, RequestTokenError, TokenResponse, TokenUrl,
	basic::{BasicClient, BasicErrorResponse},
};
use serde::ser::SerializeMap;
// self
use crate::{
	_prelude::*,
	auth::TokenSecret,
	error::{ConfigError, TransportError},
	http::ApiHttpClient,
	provider::{Credentials, NationEndpoints},
};

type ConfiguredBasicClient =
	BasicClient<EndpointSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

/// Fixed message returned when the token endpoint rejects the code with `invalid_grant`.
pub const INVALID_GRANT_MESSAGE: &str = "Invalid Grant: code invalid, expired, or revoked";

/// Outcome of a [`generate_token`](crate::client::NationClient::generate_token) call.
///
/// The numeric codes (2, 4, 5) are flow markers consumed by existing NationBuilder
/// integrations; they are not HTTP status codes. Serialization reproduces the
/// `{"result": {"code": N, ...}}` envelope those integrations parse. The
/// `TokenObtained` case exposes the raw token on the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenOutcome {
	/// No authorization code is present; redirect the end user to this URL (code 2).
	AuthorizationRequired {
		/// Fully-formed authorize URL to send the end user to.
		redirect_url: Url,
	},
	/// The token endpoint rejected the grant (code 4). Obtain a fresh code and retry.
	GrantRejected {
		/// Human-readable rejection message.
		message: String,
	},
	/// The exchange succeeded and the token is attached to the client (code 5).
	TokenObtained {
		/// Freshly issued access token.
		token: TokenSecret,
	},
}
impl TokenOutcome {
	/// Returns the flow marker code (2, 4, or 5) for this outcome.
	pub const fn code(&self) -> u8 {
		match self {
			Self::AuthorizationRequired { .. } => 2,
			Self::GrantRejected { .. } => 4,
			Self::TokenObtained { .. } => 5,
		}
	}
}
impl Serialize for TokenOutcome {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		let body = match self {
			Self::AuthorizationRequired { redirect_url } =>
				serde_json::json!({ "code": self.code(), "redirect_url": redirect_url.as_str() }),
			Self::GrantRejected { message } =>
				serde_json::json!({ "code": self.code(), "message": message }),
			Self::TokenObtained { token } =>
				serde_json::json!({ "code": self.code(), "token": token.expose() }),
		};
		let mut envelope = serializer.serialize_map(Some(1))?;

		envelope.serialize_entry("result", &body)?;
		envelope.end()
	}
}

/// Builds the authorization redirect URL for the configured nation.
pub(crate) fn build_authorize_url(
	endpoints: &NationEndpoints,
	credentials: &Credentials,
) -> Url {
	let mut url = endpoints.authorize().clone();
	let mut pairs = url.query_pairs_mut();

	pairs.append_pair("response_type", "code");
	pairs.append_pair("client_id", credentials.client_id());
	pairs.append_pair("redirect_uri", credentials.redirect_uri().as_str());

	drop(pairs);

	url
}

/// Exchanges an authorization code for an access token.
///
/// OAuth-protocol rejections come back as [`TokenOutcome::GrantRejected`]; only
/// transport and decode failures are `Err` values.
pub(crate) async fn exchange_authorization_code<C>(
	credentials: &Credentials,
	endpoints: &NationEndpoints,
	http_client: &C,
	code: &str,
) -> Result<TokenOutcome>
where
	C: ApiHttpClient,
{
	let oauth_client = oauth_client(credentials, endpoints);
	let handle = http_client.handle();

	tracing::debug!(token_endpoint = %endpoints.token(), "Exchanging authorization code.");

	match oauth_client
		.exchange_code(AuthorizationCode::new(code.to_owned()))
		.request_async(&handle)
		.await
	{
		Ok(response) => Ok(TokenOutcome::TokenObtained {
			token: TokenSecret::new(response.access_token().secret().as_str()),
		}),
		Err(RequestTokenError::ServerResponse(response)) =>
			Ok(TokenOutcome::GrantRejected { message: grant_error_message(&response) }),
		Err(RequestTokenError::Request(err)) => Err(map_http_client_error(err)),
		Err(RequestTokenError::Parse(source, _body)) =>
			Err(Error::ResponseParse { status: None, source }),
		Err(RequestTokenError::Other(message)) => Err(TransportError::Other { message }.into()),
	}
}

// NationBuilder takes client credentials in the POST body, so the client is pinned to
// `AuthType::RequestBody`.
fn oauth_client(credentials: &Credentials, endpoints: &NationEndpoints) -> ConfiguredBasicClient {
	BasicClient::new(ClientId::new(credentials.client_id().to_owned()))
		.set_client_secret(ClientSecret::new(credentials.client_secret().to_owned()))
		.set_auth_uri(AuthUrl::from_url(endpoints.authorize().clone()))
		.set_token_uri(TokenUrl::from_url(endpoints.token().clone()))
		.set_redirect_uri(RedirectUrl::from_url(credentials.redirect_uri().clone()))
		.set_auth_type(AuthType::RequestBody)
}

fn grant_error_message(response: &BasicErrorResponse) -> String {
	let error = response.error().as_ref();

	if error == "invalid_grant" {
		return INVALID_GRANT_MESSAGE.to_owned();
	}

	let description = response.error_description().map(String::as_str).unwrap_or_default();

	format!("{error} - {description}")
}

/// Maps transport-layer failures onto the crate error taxonomy.
pub(crate) fn map_http_client_error<E>(err: HttpClientError<E>) -> Error
where
	E: 'static + Send + Sync + StdError,
{
	match err {
		HttpClientError::Reqwest(inner) => TransportError::network(*inner).into(),
		HttpClientError::Http(inner) => ConfigError::from(inner).into(),
		HttpClientError::Io(inner) => TransportError::Io(inner).into(),
		HttpClientError::Other(message) => TransportError::Other { message }.into(),
		_ => TransportError::Other {
			message: "HTTP client reported an unknown failure.".into(),
		}
		.into(),
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::auth::SiteSlug;

	fn fixture() -> (NationEndpoints, Credentials) {
		let slug = SiteSlug::new("my-nation").expect("Slug fixture should be valid.");
		let endpoints =
			NationEndpoints::for_slug(&slug).expect("Endpoints should derive from the slug.");
		let redirect = Url::parse("https://app.example.com/callback")
			.expect("Redirect URI fixture should parse.");
		let credentials = Credentials::new(slug, "id-123", "secret-456", redirect);

		(endpoints, credentials)
	}

	fn error_response(payload: Value) -> BasicErrorResponse {
		serde_json::from_value(payload).expect("Error response fixture should deserialize.")
	}

	#[test]
	fn authorize_url_carries_required_parameters() {
		let (endpoints, credentials) = fixture();
		let url = build_authorize_url(&endpoints, &credentials);

		assert!(url.as_str().starts_with("https://my-nation.nationbuilder.com/oauth/authorize?"));

		let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

		assert!(pairs.contains(&("response_type".into(), "code".into())));
		assert!(pairs.contains(&("client_id".into(), "id-123".into())));
		assert!(
			pairs.contains(&("redirect_uri".into(), "https://app.example.com/callback".into()))
		);
	}

	#[test]
	fn invalid_grant_maps_to_fixed_message() {
		let response = error_response(serde_json::json!({
			"error": "invalid_grant",
			"error_description": "ignored by the fixed mapping",
		}));

		assert_eq!(grant_error_message(&response), INVALID_GRANT_MESSAGE);
	}

	#[test]
	fn other_errors_concatenate_code_and_description() {
		let response = error_response(serde_json::json!({
			"error": "other_code",
			"error_description": "desc",
		}));

		assert_eq!(grant_error_message(&response), "other_code - desc");

		let bare = error_response(serde_json::json!({ "error": "other_code" }));

		assert_eq!(grant_error_message(&bare), "other_code - ");
	}

	#[test]
	fn outcomes_expose_flow_codes() {
		let redirect = Url::parse("https://my-nation.nationbuilder.com/oauth/authorize")
			.expect("Authorize URL fixture should parse.");

		assert_eq!(TokenOutcome::AuthorizationRequired { redirect_url: redirect }.code(), 2);
		assert_eq!(TokenOutcome::GrantRejected { message: "nope".into() }.code(), 4);
		assert_eq!(TokenOutcome::TokenObtained { token: TokenSecret::new("t") }.code(), 5);
	}

	#[test]
	fn outcomes_serialize_the_result_envelope() {
		let outcome = TokenOutcome::TokenObtained { token: TokenSecret::new("token-123") };
		let value = serde_json::to_value(&outcome).expect("Outcome should serialize.");

		assert_eq!(value, serde_json::json!({ "result": { "code": 5, "token": "token-123" } }));

		let rejected = TokenOutcome::GrantRejected { message: "other_code - desc".into() };
		let value = serde_json::to_value(&rejected).expect("Outcome should serialize.");

		assert_eq!(
			value,
			serde_json::json!({ "result": { "code": 4, "message": "other_code - desc" } })
		);
	}
}
