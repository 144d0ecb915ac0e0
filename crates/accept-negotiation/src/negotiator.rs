//! Media type negotiation against a server's supported types

use crate::accept::AcceptHeader;
use crate::options::NegotiationOption;

/// Media type returned when nothing in the Accept header is supported
pub const FALLBACK_MEDIA_TYPE: &str = "text/plain";

/// Negotiates a response media type from an Accept header.
///
/// Built once from [`NegotiationOption`]s and immutable afterwards, so a single
/// instance can be shared across threads and requests.
///
/// # Examples
///
/// ```
/// use accept_negotiation::{ContentNegotiation, NegotiationOption};
///
/// let negotiation = ContentNegotiation::new([NegotiationOption::with_supported_media_types([
///     "application/json",
///     "text/html",
/// ])]);
///
/// assert_eq!(negotiation.negotiate("application/json,text/html;q=0.9"), "application/json");
/// assert_eq!(negotiation.negotiate("*/*"), "application/json");
/// assert_eq!(negotiation.negotiate("image/png"), "text/plain");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentNegotiation {
	pub(crate) default_media_type: String,
	pub(crate) supported_media_types: Vec<String>,
}

impl Default for ContentNegotiation {
	fn default() -> Self {
		Self {
			default_media_type: FALLBACK_MEDIA_TYPE.to_string(),
			supported_media_types: Vec::new(),
		}
	}
}

impl ContentNegotiation {
	/// Builds a negotiator, applying the options in order.
	///
	/// Later options of the same kind replace earlier ones.
	///
	/// # Examples
	///
	/// ```
	/// use accept_negotiation::{ContentNegotiation, NegotiationOption};
	///
	/// let negotiation = ContentNegotiation::new([
	///     NegotiationOption::with_default_media_type("application/xml"),
	///     NegotiationOption::with_supported_media_types(["application/json"]),
	/// ]);
	/// assert_eq!(negotiation.default_media_type(), "application/xml");
	/// assert_eq!(negotiation.supported_media_types(), ["application/json"]);
	///
	/// let defaults = ContentNegotiation::new([]);
	/// assert_eq!(defaults.default_media_type(), "text/plain");
	/// assert!(defaults.supported_media_types().is_empty());
	/// ```
	pub fn new(options: impl IntoIterator<Item = NegotiationOption>) -> Self {
		let mut negotiation = Self::default();
		for option in options {
			option.apply(&mut negotiation);
		}
		negotiation
	}

	/// Media type returned when no candidate matches
	pub fn default_media_type(&self) -> &str {
		&self.default_media_type
	}

	/// Supported media types, in the server's order of preference
	pub fn supported_media_types(&self) -> &[String] {
		&self.supported_media_types
	}

	/// Selects the response media type for an Accept header.
	///
	/// Candidates are scanned highest quality first. A `*/*` candidate selects
	/// the first supported type; any other candidate selects the supported type
	/// equal to it. When the scan ends without a match the default media type is
	/// returned.
	///
	/// # Examples
	///
	/// ```
	/// use accept_negotiation::ContentNegotiation;
	///
	/// let negotiation = ContentNegotiation::builder()
	///     .supported_media_types(["application/json", "text/html"])
	///     .default_media_type("text/html")
	///     .build();
	///
	/// assert_eq!(negotiation.negotiate("text/html;q=0.9,application/json;q=0.8"), "text/html");
	/// assert_eq!(negotiation.negotiate("application/json;q=0.7,*/*;q=0.5"), "application/json");
	/// assert_eq!(negotiation.negotiate("image/png"), "text/html");
	/// assert_eq!(negotiation.negotiate(""), "text/html");
	/// ```
	pub fn negotiate(&self, header: &str) -> &str {
		self.negotiate_parsed(&AcceptHeader::parse(header))
	}

	/// Selects the response media type for an already parsed Accept header
	pub fn negotiate_parsed(&self, accept: &AcceptHeader) -> &str {
		tracing::trace!(
			candidates = accept.len(),
			supported = self.supported_media_types.len(),
			"negotiating media type"
		);

		for candidate in accept.media_types() {
			if candidate.is_wildcard()
				&& let Some(preferred) = self.supported_media_types.first()
			{
				tracing::debug!(media_type = %preferred, wildcard = true, "negotiated media type");
				return preferred;
			}

			if let Some(supported) = self
				.supported_media_types
				.iter()
				.find(|supported| **supported == candidate.media_type)
			{
				tracing::debug!(media_type = %supported, wildcard = false, "negotiated media type");
				return supported;
			}
		}

		tracing::debug!(
			media_type = %self.default_media_type,
			"no acceptable media type, using default"
		);
		&self.default_media_type
	}
}
