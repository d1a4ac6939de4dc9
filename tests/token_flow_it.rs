#![cfg(feature = "reqwest")]

// crates.io
use httpmock::prelude::*;
// self
use nationbuilder_api::{
	_preludet::*,
	oauth::{INVALID_GRANT_MESSAGE, TokenOutcome},
};

#[tokio::test]
async fn missing_code_yields_redirect_url_without_network() {
	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/token");
			then.status(200);
		})
		.await;
	let mut client = test_client(&server.base_url(), test_credentials());
	let outcome = client.generate_token().await.expect("Redirect outcome should succeed.");

	assert_eq!(outcome.code(), 2);

	let TokenOutcome::AuthorizationRequired { redirect_url } = outcome else {
		panic!("Expected an authorization redirect outcome.");
	};

	assert!(redirect_url.as_str().starts_with(&server.url("/oauth/authorize?")));

	let pairs: Vec<(String, String)> = redirect_url.query_pairs().into_owned().collect();

	assert!(pairs.contains(&("response_type".into(), "code".into())));
	assert!(pairs.contains(&("client_id".into(), TEST_CLIENT_ID.into())));
	assert!(
		pairs.contains(&("redirect_uri".into(), "https://app.example.com/callback".into()))
	);
	assert_eq!(token_mock.hits_async().await, 0, "No network call may happen without a code.");
	assert!(client.access_token().is_none());
}

#[tokio::test]
async fn code_exchange_stores_token_and_attaches_it_to_requests() {
	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/oauth/token")
				.header("content-type", "application/x-www-form-urlencoded");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"access_token\":\"access-success\",\"token_type\":\"bearer\"}");
		})
		.await;
	let mut client =
		test_client(&server.base_url(), test_credentials()).with_authorization_code("valid-code");
	let outcome = client.generate_token().await.expect("Code exchange should succeed.");

	token_mock.assert_async().await;

	assert_eq!(outcome.code(), 5);
	assert!(matches!(
		&outcome,
		TokenOutcome::TokenObtained { token } if token.expose() == "access-success"
	));
	assert_eq!(
		client.access_token().map(|token| token.expose()),
		Some("access-success"),
		"The exchanged token must be stored on the client."
	);

	// The stored token rides on subsequent requests as a bare Authorization header.
	let me_mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/api/v1/people/me")
				.header("authorization", "access-success");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"person\":{\"id\":1}}");
		})
		.await;
	let response = client.people().me().await.expect("Request with the new token should succeed.");

	me_mock.assert_async().await;

	assert_eq!(response.payload["person"]["id"], 1);
}

#[tokio::test]
async fn invalid_grant_maps_to_the_fixed_code_4_message() {
	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/token");
			then.status(400)
				.header("content-type", "application/json")
				.body("{\"error\":\"invalid_grant\",\"error_description\":\"already used\"}");
		})
		.await;
	let mut client =
		test_client(&server.base_url(), test_credentials()).with_authorization_code("stale-code");
	let outcome = client.generate_token().await.expect("Grant rejections are outcomes, not errors.");

	token_mock.assert_async().await;

	assert_eq!(outcome.code(), 4);
	assert_eq!(
		outcome,
		TokenOutcome::GrantRejected { message: INVALID_GRANT_MESSAGE.into() }
	);
	assert!(client.access_token().is_none(), "A rejected grant must not change token state.");
}

#[tokio::test]
async fn other_grant_errors_concatenate_code_and_description() {
	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/token");
			then.status(400)
				.header("content-type", "application/json")
				.body("{\"error\":\"other_code\",\"error_description\":\"desc\"}");
		})
		.await;
	let mut client =
		test_client(&server.base_url(), test_credentials()).with_authorization_code("some-code");
	let outcome = client.generate_token().await.expect("Grant rejections are outcomes, not errors.");

	token_mock.assert_async().await;

	assert_eq!(outcome, TokenOutcome::GrantRejected { message: "other_code - desc".into() });
}

#[tokio::test]
async fn seeded_tokens_skip_the_flow_entirely() {
	let server = MockServer::start_async().await;
	let client =
		test_client(&server.base_url(), test_credentials()).with_access_token("seeded-token");

	assert_eq!(client.access_token().map(|token| token.expose()), Some("seeded-token"));
}
