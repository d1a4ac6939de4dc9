//! The client type tying credentials, token state, endpoints, and transport together.

// crates.io
use oauth2::{
	AsyncHttpClient,
	http::{
		Request,
		header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
	},
};
// self
use crate::{
	_prelude::*,
	auth::{TokenSecret, TokenState},
	error::ConfigError,
	http::ApiHttpClient,
	oauth::{self, TokenOutcome},
	provider::{Credentials, NationEndpoints},
	request::{ApiResponse, EndpointRequest, ResourceType},
	resources::{BasicPages, Blogs, Nation, People, ResourceClient},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestNationClient = NationClient<ReqwestHttpClient>;

/// A self-contained NationBuilder client: credentials, token state, endpoints, transport.
///
/// Every operation issues at most one network call and awaits its completion. The client
/// holds no shared mutable state; callers wanting parallelism create independent
/// instances. [`NationClient::generate_token`] is the only operation that mutates token
/// state.
#[derive(Clone)]
pub struct NationClient<C>
where
	C: ApiHttpClient,
{
	credentials: Credentials,
	endpoints: NationEndpoints,
	tokens: TokenState,
	http_client: Arc<C>,
}
impl<C> NationClient<C>
where
	C: ApiHttpClient,
{
	/// Creates a client that reuses a caller-provided transport.
	///
	/// Endpoint URLs are derived from the credential slug up front so configuration
	/// problems fail here rather than on the first call.
	pub fn with_http_client(
		credentials: Credentials,
		http_client: impl Into<Arc<C>>,
	) -> Result<Self> {
		let endpoints = NationEndpoints::for_slug(credentials.site_slug())?;

		Ok(Self {
			credentials,
			endpoints,
			tokens: TokenState::default(),
			http_client: http_client.into(),
		})
	}

	/// Replaces the derived endpoints (mock servers, staging hosts).
	pub fn with_endpoints(mut self, endpoints: NationEndpoints) -> Self {
		self.endpoints = endpoints;

		self
	}

	/// Seeds the client with a previously obtained access token.
	pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
		self.tokens.store_access_token(TokenSecret::new(token));

		self
	}

	/// Seeds the client with an authorization code returned by the redirect.
	pub fn with_authorization_code(mut self, code: impl Into<String>) -> Self {
		self.tokens.store_authorization_code(code);

		self
	}

	/// Credentials this client was built with.
	pub fn credentials(&self) -> &Credentials {
		&self.credentials
	}

	/// Endpoints this client talks to.
	pub fn endpoints(&self) -> &NationEndpoints {
		&self.endpoints
	}

	/// Current access token, if one is set.
	pub fn access_token(&self) -> Option<&TokenSecret> {
		self.tokens.access_token()
	}

	/// One-shot token dispatcher.
	///
	/// Without an authorization code this returns the redirect URL result (code 2) and
	/// performs no network call. With a code it performs exactly one exchange: success
	/// stores the token on the client and returns code 5; an OAuth rejection returns
	/// code 4 and leaves the state untouched.
	pub async fn generate_token(&mut self) -> Result<TokenOutcome> {
		let Some(code) = self.tokens.authorization_code().map(str::to_owned) else {
			tracing::debug!(slug = %self.credentials.site_slug(), "No code present; issuing redirect URL.");

			return Ok(TokenOutcome::AuthorizationRequired {
				redirect_url: oauth::build_authorize_url(&self.endpoints, &self.credentials),
			});
		};
		let outcome = oauth::exchange_authorization_code(
			&self.credentials,
			&self.endpoints,
			self.http_client.as_ref(),
			&code,
		)
		.await?;

		if let TokenOutcome::TokenObtained { token } = &outcome {
			self.tokens.store_access_token(token.clone());
		}

		Ok(outcome)
	}

	/// Dispatches an assembled [`EndpointRequest`] and returns the raw JSON payload.
	///
	/// Fails fast with a [`ConfigError`] when no access token is set; non-2xx responses
	/// surface as [`Error::RemoteApi`] with the payload passed through verbatim.
	pub async fn request(&self, request: EndpointRequest) -> Result<ApiResponse> {
		let token =
			self.tokens.access_token().ok_or(ConfigError::MissingAccessToken)?;
		let url = request.build_url(&self.endpoints, self.credentials.sub_nation())?;
		let body = request.body_bytes()?.unwrap_or_default();

		tracing::debug!(
			method = %request.method,
			resource = %request.resource,
			url = %url,
			"Dispatching NationBuilder request."
		);

		let http_request = Request::builder()
			.method(request.method.clone())
			.uri(url.as_str())
			.header(AUTHORIZATION, token.expose())
			.header(CONTENT_TYPE, "application/json")
			.header(ACCEPT, "application/json")
			.body(body)
			.map_err(ConfigError::from)?;
		let response = self
			.http_client
			.handle()
			.call(http_request)
			.await
			.map_err(oauth::map_http_client_error)?;

		parse_api_response(response)
	}

	/// Generic handle for a resource family, exposing index/push/search/match.
	pub fn resource(&self, resource: ResourceType) -> ResourceClient<'_, C> {
		ResourceClient::new(self, resource)
	}

	/// People facade (create, me, search, match).
	pub fn people(&self) -> People<'_, C> {
		People::new(self)
	}

	/// Basic-pages facade (create, delete).
	pub fn basic_pages(&self) -> BasicPages<'_, C> {
		BasicPages::new(self)
	}

	/// Blogs facade (index).
	pub fn blogs(&self) -> Blogs<'_, C> {
		Blogs::new(self)
	}

	/// Nation facade (sites, settings lookups).
	pub fn nation(&self) -> Nation<'_, C> {
		Nation::new(self)
	}
}
#[cfg(feature = "reqwest")]
impl NationClient<ReqwestHttpClient> {
	/// Creates a client with a default reqwest transport.
	pub fn new(credentials: Credentials) -> Result<Self> {
		Self::with_http_client(credentials, ReqwestHttpClient::default())
	}
}
impl<C> Debug for NationClient<C>
where
	C: ApiHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("NationClient")
			.field("credentials", &self.credentials)
			.field("endpoints", &self.endpoints)
			.field("token_set", &self.tokens.access_token().is_some())
			.field("code_set", &self.tokens.authorization_code().is_some())
			.finish()
	}
}

fn parse_api_response(response: oauth2::HttpResponse) -> Result<ApiResponse> {
	let status = response.status();
	let body = response.into_body();

	if status.is_success() {
		let payload = decode_json(&body)
			.map_err(|source| Error::ResponseParse { status: Some(status), source })?;

		return Ok(ApiResponse { status, payload });
	}

	// Error pages are not always JSON; fall back to the raw text so nothing is lost.
	let payload = decode_json(&body)
		.unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).into_owned()));

	Err(Error::RemoteApi { status, payload })
}

fn decode_json(body: &[u8]) -> Result<Value, serde_path_to_error::Error<serde_json::Error>> {
	if body.iter().all(u8::is_ascii_whitespace) {
		return Ok(Value::Null);
	}

	let mut deserializer = serde_json::Deserializer::from_slice(body);

	serde_path_to_error::deserialize(&mut deserializer)
}

#[cfg(test)]
mod tests {
	// crates.io
	use oauth2::http::StatusCode;
	// self
	use super::*;

	fn response(status: StatusCode, body: &str) -> oauth2::HttpResponse {
		let mut response = oauth2::HttpResponse::new(body.as_bytes().to_vec());

		*response.status_mut() = status;

		response
	}

	#[test]
	fn success_payloads_pass_through() {
		let parsed = parse_api_response(response(StatusCode::OK, "{\"person\":{\"id\":7}}"))
			.expect("2xx JSON should parse.");

		assert_eq!(parsed.status, StatusCode::OK);
		assert_eq!(parsed.payload, serde_json::json!({ "person": { "id": 7 } }));
	}

	#[test]
	fn empty_bodies_become_null() {
		let parsed = parse_api_response(response(StatusCode::NO_CONTENT, ""))
			.expect("Empty 2xx bodies should parse.");

		assert_eq!(parsed.payload, Value::Null);
	}

	#[test]
	fn remote_errors_keep_their_payload() {
		let err = parse_api_response(response(StatusCode::NOT_FOUND, "{\"code\":\"not_found\"}"))
			.expect_err("Non-2xx must surface as an error.");

		match err {
			Error::RemoteApi { status, payload } => {
				assert_eq!(status, StatusCode::NOT_FOUND);
				assert_eq!(payload, serde_json::json!({ "code": "not_found" }));
			},
			other => panic!("Expected RemoteApi, got {other:?}."),
		}
	}

	#[test]
	fn non_json_error_pages_degrade_to_text() {
		let err = parse_api_response(response(StatusCode::BAD_GATEWAY, "<html>oops</html>"))
			.expect_err("Non-2xx must surface as an error.");

		match err {
			Error::RemoteApi { payload, .. } =>
				assert_eq!(payload, Value::String("<html>oops</html>".into())),
			other => panic!("Expected RemoteApi, got {other:?}."),
		}
	}

	#[test]
	fn malformed_success_bodies_are_parse_errors() {
		let err = parse_api_response(response(StatusCode::OK, "not json"))
			.expect_err("Malformed 2xx bodies must fail.");

		assert!(matches!(err, Error::ResponseParse { status: Some(StatusCode::OK), .. }));
	}
}
