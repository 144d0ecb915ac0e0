//! Accept header parsing and media type negotiation module.
//!
//! # Examples
//!
//! ```rust
//! use accept::negotiation::accept::AcceptHeader;
//! use accept::negotiation::media_type::WeightedMediaType;
//!
//! let accept = AcceptHeader::parse("text/html;q=0.5,application/json");
//! assert_eq!(accept.media_types()[0], WeightedMediaType::new("application/json"));
//! ```

pub use accept_negotiation::*;
