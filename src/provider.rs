//! Nation endpoint derivation and client credentials.

// self
use crate::{
	_prelude::*,
	auth::{SiteSlug, SubNationSlug},
	error::ConfigError,
};

/// Endpoint set a client talks to: OAuth authorize/token plus the versioned API base.
///
/// [`NationEndpoints::for_slug`] derives the production `*.nationbuilder.com` URLs;
/// [`NationEndpoints::from_base`] points everything at an arbitrary host for mock
/// servers and staging instances.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NationEndpoints {
	authorize: Url,
	token: Url,
	api_base: Url,
}
impl NationEndpoints {
	/// Derives the production endpoints for a nation slug.
	pub fn for_slug(slug: &SiteSlug) -> Result<Self, ConfigError> {
		let base = Url::parse(&format!("https://{slug}.nationbuilder.com/"))
			.map_err(|source| ConfigError::InvalidEndpoint { source })?;

		Self::from_base(base)
	}

	/// Derives all endpoints from an arbitrary base URL (mock servers, staging hosts).
	pub fn from_base(base: Url) -> Result<Self, ConfigError> {
		if base.cannot_be_a_base() {
			return Err(ConfigError::OpaqueBase { url: base.to_string() });
		}

		let join = |path: &str| {
			base.join(path).map_err(|source| ConfigError::InvalidEndpoint { source })
		};

		Ok(Self {
			authorize: join("oauth/authorize")?,
			token: join("oauth/token")?,
			api_base: join("api/v1/")?,
		})
	}

	/// Authorization endpoint used for the end-user redirect.
	pub fn authorize(&self) -> &Url {
		&self.authorize
	}

	/// Token endpoint used for the code exchange.
	pub fn token(&self) -> &Url {
		&self.token
	}

	/// Versioned API base every resource request is built on.
	pub fn api_base(&self) -> &Url {
		&self.api_base
	}
}

/// Immutable OAuth client credentials plus the nation they address.
#[derive(Clone)]
pub struct Credentials {
	client_id: String,
	client_secret: String,
	site_slug: SiteSlug,
	sub_nation: Option<SubNationSlug>,
	redirect_uri: Url,
}
impl Credentials {
	/// Creates credentials for a nation.
	pub fn new(
		site_slug: SiteSlug,
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
		redirect_uri: Url,
	) -> Self {
		Self {
			client_id: client_id.into(),
			client_secret: client_secret.into(),
			site_slug,
			sub_nation: None,
			redirect_uri,
		}
	}

	/// Addresses a secondary site hosted under the parent nation.
	pub fn with_sub_nation(mut self, slug: SubNationSlug) -> Self {
		self.sub_nation = Some(slug);

		self
	}

	/// OAuth 2.0 client identifier.
	pub fn client_id(&self) -> &str {
		&self.client_id
	}

	/// OAuth 2.0 client secret. Callers must avoid logging this string.
	pub fn client_secret(&self) -> &str {
		&self.client_secret
	}

	/// Slug of the nation these credentials address.
	pub fn site_slug(&self) -> &SiteSlug {
		&self.site_slug
	}

	/// Optional sub-nation slug inserted into resource paths.
	pub fn sub_nation(&self) -> Option<&SubNationSlug> {
		self.sub_nation.as_ref()
	}

	/// Redirect URI registered with the nation's OAuth application.
	pub fn redirect_uri(&self) -> &Url {
		&self.redirect_uri
	}
}
impl Debug for Credentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Credentials")
			.field("client_id", &self.client_id)
			.field("client_secret_set", &!self.client_secret.is_empty())
			.field("site_slug", &self.site_slug)
			.field("sub_nation", &self.sub_nation)
			.field("redirect_uri", &self.redirect_uri)
			.finish()
	}
}
