//! Thin async client for the NationBuilder REST API: OAuth 2.0 authorization-code token
//! acquisition plus people/pages/blogs/sites/settings convenience endpoints.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod error;
pub mod http;
pub mod oauth;
pub mod provider;
pub mod request;
pub mod resources;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		auth::SiteSlug,
		client::{NationClient, ReqwestNationClient},
		provider::{Credentials, NationEndpoints},
	};

	/// Slug used by every test fixture.
	pub const TEST_SLUG: &str = "testnation";
	/// OAuth client identifier used by every test fixture.
	pub const TEST_CLIENT_ID: &str = "client-id";
	/// OAuth client secret used by every test fixture.
	pub const TEST_CLIENT_SECRET: &str = "client-secret";

	/// Builds the credential fixture shared across integration tests.
	pub fn test_credentials() -> Credentials {
		let slug = SiteSlug::new(TEST_SLUG).expect("Test slug should be considered valid.");
		let redirect = Url::parse("https://app.example.com/callback")
			.expect("Test redirect URI should parse successfully.");

		Credentials::new(slug, TEST_CLIENT_ID, TEST_CLIENT_SECRET, redirect)
	}

	/// Constructs a reqwest-backed [`NationClient`] whose endpoints point at a mock server.
	pub fn test_client(base_url: &str, credentials: Credentials) -> ReqwestNationClient {
		let base =
			Url::parse(base_url).expect("Mock server base URL should parse successfully.");
		let endpoints = NationEndpoints::from_base(base)
			.expect("Mock server endpoints should build successfully.");

		NationClient::new(credentials)
			.expect("Test client should build successfully.")
			.with_endpoints(endpoints)
	}
}

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::Value;
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(all(test, feature = "reqwest"))] use {httpmock as _, nationbuilder_api as _, tokio as _};
