//! Blogs facade over the `pages` endpoint family.

// crates.io
use oauth2::http::Method;
// self
use crate::{
	_prelude::*,
	client::NationClient,
	http::ApiHttpClient,
	request::{ApiResponse, EndpointRequest, ResourceType},
};

/// Convenience methods for blogs (`pages/blogs`).
#[derive(Clone, Debug)]
pub struct Blogs<'a, C>
where
	C: ApiHttpClient,
{
	client: &'a NationClient<C>,
}
impl<'a, C> Blogs<'a, C>
where
	C: ApiHttpClient,
{
	pub(crate) fn new(client: &'a NationClient<C>) -> Self {
		Self { client }
	}

	/// Lists blogs (`GET pages/blogs`).
	pub async fn index(&self) -> Result<ApiResponse> {
		self.client
			.request(EndpointRequest::new(Method::GET, ResourceType::Pages).with_action("blogs"))
			.await
	}
}
