//! Nation facade: site listings and nation-wide settings lookups.

// crates.io
use oauth2::http::Method;
// self
use crate::{
	_prelude::*,
	client::NationClient,
	http::ApiHttpClient,
	request::{ApiResponse, EndpointRequest, ResourceType},
};

/// Convenience methods over the `sites` and `settings` endpoint families.
#[derive(Clone, Debug)]
pub struct Nation<'a, C>
where
	C: ApiHttpClient,
{
	client: &'a NationClient<C>,
}
impl<'a, C> Nation<'a, C>
where
	C: ApiHttpClient,
{
	pub(crate) fn new(client: &'a NationClient<C>) -> Self {
		Self { client }
	}

	/// Lists the nation's sites (`GET sites`).
	pub async fn sites(&self) -> Result<ApiResponse> {
		self.client.request(EndpointRequest::new(Method::GET, ResourceType::Sites)).await
	}

	/// Lists the configured contact types (`GET settings/contact_types`).
	pub async fn contact_types(&self) -> Result<ApiResponse> {
		self.settings("contact_types").await
	}

	/// Lists the configured contact methods (`GET settings/contact_methods`).
	pub async fn contact_methods(&self) -> Result<ApiResponse> {
		self.settings("contact_methods").await
	}

	/// Lists the configured contact statuses (`GET settings/contact_statuses`).
	pub async fn contact_statuses(&self) -> Result<ApiResponse> {
		self.settings("contact_statuses").await
	}

	async fn settings(&self, action: &str) -> Result<ApiResponse> {
		self.client
			.request(EndpointRequest::new(Method::GET, ResourceType::Settings).with_action(action))
			.await
	}
}
