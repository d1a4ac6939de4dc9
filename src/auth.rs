//! Auth-domain slugs and token state.

pub mod slug;
pub mod token;

pub use slug::*;
pub use token::*;
