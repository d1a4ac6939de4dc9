//! Client-level error types shared across the OAuth flow and request dispatch.

// crates.io
use oauth2::http::StatusCode;
// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
///
/// OAuth grant rejections during the code exchange are not errors; they surface as
/// [`TokenOutcome::GrantRejected`](crate::oauth::TokenOutcome) results instead.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// NationBuilder answered with a non-2xx status; the payload is passed through verbatim.
	#[error("NationBuilder returned HTTP {status}.")]
	RemoteApi {
		/// HTTP status code returned by the API.
		status: StatusCode,
		/// Response payload as received (JSON when it parses, raw text otherwise).
		payload: Value,
	},
	/// A response body that should have been JSON could not be decoded.
	#[error("Response body could not be decoded as JSON.")]
	ResponseParse {
		/// HTTP status code, when the transport exposed one.
		status: Option<StatusCode>,
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}

/// Configuration and validation failures raised before any network activity.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Slug validation failed.
	#[error(transparent)]
	InvalidSlug(#[from] crate::auth::SlugError),
	/// An endpoint URL could not be derived from the configured slug or base.
	#[error("Endpoint URL is invalid.")]
	InvalidEndpoint {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// The configured base URL cannot serve as a hierarchical base.
	#[error("Base URL `{url}` cannot carry path segments.")]
	OpaqueBase {
		/// Offending base URL.
		url: String,
	},
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] oauth2::http::Error),
	/// A JSON request body could not be serialized.
	#[error("Request body could not be serialized as JSON.")]
	BodySerialize {
		/// Underlying serialization failure.
		#[source]
		source: serde_json::Error,
	},

	/// A resource request was issued before an access token was obtained.
	#[error("No access token is set; run the authorization flow first.")]
	MissingAccessToken,
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling NationBuilder.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling NationBuilder.")]
	Io(#[from] std::io::Error),
	/// Unclassified failure reported by the HTTP client.
	#[error("HTTP client reported an unclassified failure: {message}.")]
	Other {
		/// Transport-supplied message.
		message: String,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
