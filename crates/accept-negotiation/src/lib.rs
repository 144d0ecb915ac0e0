//! # Accept Negotiation
//!
//! Selects a response media type from an HTTP `Accept` header and the list of
//! media types a server can produce.
//!
//! ## Overview
//!
//! The header is split into weighted candidates ([`AcceptHeader`]), ordered by
//! descending `q` value with ties kept in header order, then matched against the
//! server's supported types ([`ContentNegotiation`]). A `*/*` candidate selects
//! the server's most preferred type. When nothing matches, the configured
//! default media type (`text/plain` unless set) is returned.
//!
//! Only the media type token and the `q` parameter are interpreted. Parsing and
//! negotiation never fail: an unparsable `q` counts as 1.0 and a header without
//! a match yields the default.
//!
//! ## Example
//!
//! ```
//! use accept_negotiation::{ContentNegotiation, NegotiationOption};
//!
//! let negotiation = ContentNegotiation::new([
//!     NegotiationOption::with_supported_media_types(["application/json", "text/html"]),
//!     NegotiationOption::with_default_media_type("application/xml"),
//! ]);
//!
//! // Value of the request's Accept header
//! let content_type = negotiation.negotiate("text/html;q=0.9,application/json;q=0.8");
//! assert_eq!(content_type, "text/html");
//!
//! assert_eq!(negotiation.negotiate("image/png"), "application/xml");
//! ```
//!
//! ## Feature Flags
//!
//! - `settings` (default): load [`NegotiationOption`]s from TOML or JSON files

pub mod accept;
pub mod media_type;
pub mod negotiator;
pub mod options;
mod quality;
#[cfg(feature = "settings")]
pub mod settings;

pub use accept::{AcceptHeader, parse_accept_header};
pub use media_type::{WILDCARD, WeightedMediaType, WeightedMediaTypes};
pub use negotiator::{ContentNegotiation, FALLBACK_MEDIA_TYPE};
pub use options::{ContentNegotiationBuilder, NegotiationOption};
#[cfg(feature = "settings")]
pub use settings::{NegotiationSettings, SettingsError};
