//! Endpoint request assembly: resource types, parameter encoding, and URL building.

// crates.io
use oauth2::http::{Method, StatusCode};
// self
use crate::{
	_prelude::*,
	auth::SubNationSlug,
	error::ConfigError,
	provider::NationEndpoints,
};

/// Top-level NationBuilder API categories addressed by this client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
	/// The `people` endpoint family.
	People,
	/// The `pages` endpoint family (basic pages, blogs).
	Pages,
	/// The `sites` endpoint family.
	Sites,
	/// The `settings` endpoint family.
	Settings,
}
impl ResourceType {
	/// Returns the path segment for this resource.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::People => "people",
			Self::Pages => "pages",
			Self::Sites => "sites",
			Self::Settings => "settings",
		}
	}

	// People requests always target the parent nation; every other resource honors a
	// configured sub-nation prefix. Fixed upstream routing rule, not a general pattern.
	pub(crate) const fn sub_nation_scoped(self) -> bool {
		!matches!(self, Self::People)
	}
}
impl Display for ResourceType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Request parameters: absent, URL-encoded query pairs, or a JSON body.
#[derive(Clone, Debug, Default)]
pub enum Params {
	/// No parameters.
	#[default]
	None,
	/// Query pairs appended to the request URL (reads).
	Query(Vec<(String, String)>),
	/// JSON request body (writes).
	Body(Value),
}

/// A single API request: method, resource, optional action segment, and parameters.
///
/// Constructed per call and consumed by
/// [`NationClient::request`](crate::client::NationClient::request).
#[derive(Clone, Debug)]
pub struct EndpointRequest {
	/// HTTP method for the request.
	pub method: Method,
	/// Resource family the request targets.
	pub resource: ResourceType,
	/// Optional action appended after the resource; may span several path segments
	/// separated by `/` (e.g. `basic_pages/42`).
	pub action: Option<String>,
	/// Query or body parameters.
	pub params: Params,
}
impl EndpointRequest {
	/// Creates a request with no action and no parameters.
	pub fn new(method: Method, resource: ResourceType) -> Self {
		Self { method, resource, action: None, params: Params::None }
	}

	/// Sets the action segment.
	pub fn with_action(mut self, action: impl Into<String>) -> Self {
		self.action = Some(action.into());

		self
	}

	/// Attaches URL-encoded query parameters.
	pub fn with_query<I, K, V>(mut self, pairs: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		self.params =
			Params::Query(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect());

		self
	}

	/// Attaches a JSON request body.
	pub fn with_body(mut self, body: Value) -> Self {
		self.params = Params::Body(body);

		self
	}

	/// Builds the fully qualified request URL against the given endpoints.
	pub fn build_url(
		&self,
		endpoints: &NationEndpoints,
		sub_nation: Option<&SubNationSlug>,
	) -> Result<Url, ConfigError> {
		let mut url = endpoints.api_base().clone();

		{
			let mut segments = url
				.path_segments_mut()
				.map_err(|()| ConfigError::OpaqueBase { url: endpoints.api_base().to_string() })?;

			segments.pop_if_empty();

			if let Some(sub_nation) = sub_nation
				&& self.resource.sub_nation_scoped()
			{
				segments.push("sites");
				segments.push(sub_nation);
			}

			segments.push(self.resource.as_str());

			if let Some(action) = &self.action {
				for part in action.split('/') {
					segments.push(part);
				}
			}
		}

		if let Params::Query(pairs) = &self.params {
			url.query_pairs_mut()
				.extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
		}

		Ok(url)
	}

	/// Serializes the JSON body, when one is attached.
	pub(crate) fn body_bytes(&self) -> Result<Option<Vec<u8>>, ConfigError> {
		match &self.params {
			Params::Body(value) => serde_json::to_vec(value)
				.map(Some)
				.map_err(|source| ConfigError::BodySerialize { source }),
			_ => Ok(None),
		}
	}
}

/// Successful API response: the HTTP status plus the payload exactly as received.
#[derive(Clone, Debug)]
pub struct ApiResponse {
	/// HTTP status code returned by the API.
	pub status: StatusCode,
	/// Response payload passed through verbatim (`Null` for empty bodies).
	pub payload: Value,
}
