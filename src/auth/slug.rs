//! Validated slug newtypes for nations and sub-nation sites.

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::_prelude::*;

macro_rules! def_slug {
	($name:ident, $doc:literal, $kind:literal) => {
		#[doc = $doc]
		#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		#[serde(try_from = "String", into = "String")]
		pub struct $name(String);
		impl $name {
			/// Creates a new slug after validation.
			pub fn new(value: impl AsRef<str>) -> Result<Self, SlugError> {
				let view = value.as_ref();

				validate_view($kind, view)?;

				Ok(Self(view.to_owned()))
			}
		}
		impl Deref for $name {
			type Target = str;

			fn deref(&self) -> &Self::Target {
				&self.0
			}
		}
		impl AsRef<str> for $name {
			fn as_ref(&self) -> &str {
				&self.0
			}
		}
		impl From<$name> for String {
			fn from(value: $name) -> Self {
				value.0
			}
		}
		impl TryFrom<String> for $name {
			type Error = SlugError;

			fn try_from(value: String) -> Result<Self, Self::Error> {
				validate_view($kind, &value)?;

				Ok(Self(value))
			}
		}
		impl Borrow<str> for $name {
			fn borrow(&self) -> &str {
				&self.0
			}
		}
		impl Debug for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				write!(f, concat!($kind, "({})"), self.0)
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str(&self.0)
			}
		}
		impl FromStr for $name {
			type Err = SlugError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				Self::new(s)
			}
		}
	};
}

// Slugs become DNS labels (`{slug}.nationbuilder.com`) or path segments (`sites/{slug}/`).
const SLUG_MAX_LEN: usize = 63;

/// Error returned when slug validation fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum SlugError {
	/// The slug was empty.
	#[error("{kind} slug cannot be empty.")]
	Empty {
		/// Kind of slug (nation, sub-nation).
		kind: &'static str,
	},
	/// The slug contains a character outside `[A-Za-z0-9_-]`.
	#[error("{kind} slug contains the invalid character {character:?}.")]
	InvalidCharacter {
		/// Kind of slug (nation, sub-nation).
		kind: &'static str,
		/// First offending character.
		character: char,
	},
	/// The slug exceeded the allowed byte count.
	#[error("{kind} slug exceeds {max} bytes.")]
	TooLong {
		/// Kind of slug (nation, sub-nation).
		kind: &'static str,
		/// Maximum permitted byte count.
		max: usize,
	},
}

def_slug! { SiteSlug, "Subdomain slug identifying a NationBuilder nation.", "Nation" }
def_slug! { SubNationSlug, "Slug of a secondary site hosted under a parent nation.", "Sub-nation" }

fn validate_view(kind: &'static str, view: &str) -> Result<(), SlugError> {
	if view.is_empty() {
		return Err(SlugError::Empty { kind });
	}
	if let Some(character) =
		view.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '-' && *c != '_')
	{
		return Err(SlugError::InvalidCharacter { kind, character });
	}
	if view.len() > SLUG_MAX_LEN {
		return Err(SlugError::TooLong { kind, max: SLUG_MAX_LEN });
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn slugs_validate_characters() {
		assert!(SiteSlug::new("my-nation").is_ok());
		assert!(SiteSlug::new("nation_42").is_ok());
		assert!(SiteSlug::new("").is_err(), "Empty slugs must be rejected.");
		assert!(SiteSlug::new("with space").is_err(), "Whitespace must be rejected.");
		assert!(SiteSlug::new("dot.com").is_err(), "Dots must be rejected.");

		let err = SubNationSlug::new("sub/nation").expect_err("Slashes must be rejected.");

		assert!(matches!(err, SlugError::InvalidCharacter { character: '/', .. }));
	}

	#[test]
	fn slug_length_limits() {
		let exact = "a".repeat(63);

		SiteSlug::new(&exact).expect("Exact length should succeed.");

		let too_long = "a".repeat(64);

		assert!(SiteSlug::new(&too_long).is_err());
	}

	#[test]
	fn serde_round_trip_enforces_validation() {
		let slug: SiteSlug =
			serde_json::from_str("\"my-nation\"").expect("Slug should deserialize successfully.");

		assert_eq!(slug.as_ref(), "my-nation");
		assert!(serde_json::from_str::<SiteSlug>("\"bad slug\"").is_err());
	}
}
