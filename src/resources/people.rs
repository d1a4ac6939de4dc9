//! People facade. People requests always target the parent nation, never a sub-nation.

// crates.io
use oauth2::http::Method;
// self
use crate::{
	_prelude::*,
	client::NationClient,
	http::ApiHttpClient,
	request::{ApiResponse, EndpointRequest, ResourceType},
	resources::ResourceClient,
};

/// Convenience methods over the `people` endpoint family.
#[derive(Clone, Debug)]
pub struct People<'a, C>
where
	C: ApiHttpClient,
{
	inner: ResourceClient<'a, C>,
}
impl<'a, C> People<'a, C>
where
	C: ApiHttpClient,
{
	pub(crate) fn new(client: &'a NationClient<C>) -> Self {
		Self { inner: ResourceClient::new(client, ResourceType::People) }
	}

	/// Lists people (`GET people`).
	pub async fn index(&self) -> Result<ApiResponse> {
		self.inner.index().await
	}

	/// Creates or updates a person (`PUT people/push` with a JSON body).
	pub async fn create(&self, params: Value) -> Result<ApiResponse> {
		self.inner.push(params).await
	}

	/// Creates or updates a person; alias kept for parity with the generic operation.
	pub async fn push(&self, params: Value) -> Result<ApiResponse> {
		self.inner.push(params).await
	}

	/// Returns the person the access token belongs to (`GET people/me`).
	pub async fn me(&self) -> Result<ApiResponse> {
		self.inner
			.client()
			.request(EndpointRequest::new(Method::GET, ResourceType::People).with_action("me"))
			.await
	}

	/// Searches people (`GET people/search?...`).
	pub async fn search<I, K, V>(&self, params: I) -> Result<ApiResponse>
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		self.inner.search(params).await
	}

	/// Matches a person by exact criteria (`GET people/match?...`).
	pub async fn find<I, K, V>(&self, params: I) -> Result<ApiResponse>
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		self.inner.find(params).await
	}
}
