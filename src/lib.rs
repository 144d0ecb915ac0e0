//! # Accept
//!
//! HTTP content negotiation: pick the response media type from a client's
//! `Accept` header and the media types a server supports.
//!
//! This crate is a facade over [`accept_negotiation`]. The HTTP layer that reads
//! the header from a request and writes the response's `Content-Type` stays with
//! the caller.
//!
//! ## Feature Flags
//!
//! - `settings` (default) - Load negotiation settings from TOML or JSON files
//! - `full` - All features enabled
//!
//! ## Quick Example
//!
//! ```rust
//! use accept::prelude::*;
//!
//! let negotiation = ContentNegotiation::builder()
//!     .supported_media_types(["application/json", "text/html"])
//!     .build();
//!
//! // r.headers().get(ACCEPT)
//! let accept_header = "application/json,text/html;q=0.9";
//!
//! assert_eq!(negotiation.negotiate(accept_header), "application/json");
//! assert_eq!(negotiation.negotiate("*/*"), "application/json");
//! assert_eq!(negotiation.negotiate("image/png"), "text/plain");
//! ```

pub mod negotiation;

// Re-export the negotiation API at the crate root
pub use accept_negotiation::{
	AcceptHeader, ContentNegotiation, ContentNegotiationBuilder, FALLBACK_MEDIA_TYPE,
	NegotiationOption, WILDCARD, WeightedMediaType, WeightedMediaTypes, parse_accept_header,
};

#[cfg(feature = "settings")]
pub use accept_negotiation::{NegotiationSettings, SettingsError};

/// Commonly used types
pub mod prelude {
	pub use crate::{AcceptHeader, ContentNegotiation, NegotiationOption};

	#[cfg(feature = "settings")]
	pub use crate::NegotiationSettings;
}
