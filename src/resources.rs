//! Per-resource convenience facades.
//!
//! Facades fix a [`ResourceType`] plus an HTTP method/action pair and delegate to
//! [`NationClient::request`](crate::client::NationClient::request); they perform no
//! validation or transformation of their own.

pub mod blogs;
pub mod nation;
pub mod pages;
pub mod people;

pub use blogs::*;
pub use nation::*;
pub use pages::*;
pub use people::*;

// crates.io
use oauth2::http::Method;
// self
use crate::{
	_prelude::*,
	client::NationClient,
	http::ApiHttpClient,
	request::{ApiResponse, EndpointRequest, ResourceType},
};

/// Generic handle over one resource family, exposing the shared operations every
/// NationBuilder endpoint supports.
#[derive(Clone, Debug)]
pub struct ResourceClient<'a, C>
where
	C: ApiHttpClient,
{
	client: &'a NationClient<C>,
	resource: ResourceType,
}
impl<'a, C> ResourceClient<'a, C>
where
	C: ApiHttpClient,
{
	pub(crate) fn new(client: &'a NationClient<C>, resource: ResourceType) -> Self {
		Self { client, resource }
	}

	pub(crate) fn client(&self) -> &'a NationClient<C> {
		self.client
	}

	/// Resource family this handle addresses.
	pub fn resource(&self) -> ResourceType {
		self.resource
	}

	/// Lists the resource (`GET {resource}`).
	pub async fn index(&self) -> Result<ApiResponse> {
		self.client.request(EndpointRequest::new(Method::GET, self.resource)).await
	}

	/// Creates or updates a record (`PUT {resource}/push` with a JSON body).
	pub async fn push(&self, params: Value) -> Result<ApiResponse> {
		self.client
			.request(
				EndpointRequest::new(Method::PUT, self.resource)
					.with_action("push")
					.with_body(params),
			)
			.await
	}

	/// Searches the resource (`GET {resource}/search?...`).
	pub async fn search<I, K, V>(&self, params: I) -> Result<ApiResponse>
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		self.client
			.request(
				EndpointRequest::new(Method::GET, self.resource)
					.with_action("search")
					.with_query(params),
			)
			.await
	}

	/// Looks up a record by exact criteria (`GET {resource}/match?...`).
	pub async fn find<I, K, V>(&self, params: I) -> Result<ApiResponse>
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		self.client
			.request(
				EndpointRequest::new(Method::GET, self.resource)
					.with_action("match")
					.with_query(params),
			)
			.await
	}
}
