//! Basic-pages facade over the `pages` endpoint family.

// crates.io
use oauth2::http::Method;
// self
use crate::{
	_prelude::*,
	client::NationClient,
	http::ApiHttpClient,
	request::{ApiResponse, EndpointRequest, ResourceType},
};

/// Convenience methods for basic pages (`pages/basic_pages`).
#[derive(Clone, Debug)]
pub struct BasicPages<'a, C>
where
	C: ApiHttpClient,
{
	client: &'a NationClient<C>,
}
impl<'a, C> BasicPages<'a, C>
where
	C: ApiHttpClient,
{
	pub(crate) fn new(client: &'a NationClient<C>) -> Self {
		Self { client }
	}

	/// Creates a basic page (`POST pages/basic_pages` with a JSON body).
	pub async fn create(&self, params: Value) -> Result<ApiResponse> {
		self.client
			.request(
				EndpointRequest::new(Method::POST, ResourceType::Pages)
					.with_action("basic_pages")
					.with_body(params),
			)
			.await
	}

	/// Deletes a basic page by identifier (`DELETE pages/basic_pages/{id}`).
	pub async fn delete(&self, id: impl Display) -> Result<ApiResponse> {
		self.client
			.request(
				EndpointRequest::new(Method::DELETE, ResourceType::Pages)
					.with_action(format!("basic_pages/{id}")),
			)
			.await
	}
}
