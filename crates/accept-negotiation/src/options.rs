//! Construction options for [`ContentNegotiation`]

use crate::negotiator::ContentNegotiation;

/// A single named setting applied while building a [`ContentNegotiation`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NegotiationOption {
	/// Replaces the supported media types wholesale
	SupportedMediaTypes(Vec<String>),
	/// Replaces the fallback media type
	DefaultMediaType(String),
}

impl NegotiationOption {
	/// Sets the supported media types, most preferred first
	///
	/// # Examples
	///
	/// ```
	/// use accept_negotiation::{ContentNegotiation, NegotiationOption};
	///
	/// let negotiation = ContentNegotiation::new([
	///     NegotiationOption::with_supported_media_types(["text/html"]),
	///     NegotiationOption::with_supported_media_types(["application/json", "text/csv"]),
	/// ]);
	/// assert_eq!(negotiation.supported_media_types(), ["application/json", "text/csv"]);
	/// ```
	pub fn with_supported_media_types<I, S>(media_types: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self::SupportedMediaTypes(media_types.into_iter().map(Into::into).collect())
	}

	/// Sets the media type returned when negotiation finds no match
	pub fn with_default_media_type(media_type: impl Into<String>) -> Self {
		Self::DefaultMediaType(media_type.into())
	}

	pub(crate) fn apply(self, negotiation: &mut ContentNegotiation) {
		match self {
			Self::SupportedMediaTypes(media_types) => negotiation.supported_media_types = media_types,
			Self::DefaultMediaType(media_type) => negotiation.default_media_type = media_type,
		}
	}
}

/// Fluent builder for [`ContentNegotiation`]
#[derive(Debug, Clone, Default)]
pub struct ContentNegotiationBuilder {
	options: Vec<NegotiationOption>,
}

impl ContentNegotiationBuilder {
	/// Creates a builder with no options
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the supported media types, most preferred first
	pub fn supported_media_types<I, S>(self, media_types: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.option(NegotiationOption::with_supported_media_types(media_types))
	}

	/// Sets the fallback media type
	pub fn default_media_type(self, media_type: impl Into<String>) -> Self {
		self.option(NegotiationOption::with_default_media_type(media_type))
	}

	/// Appends an arbitrary option
	pub fn option(mut self, option: NegotiationOption) -> Self {
		self.options.push(option);
		self
	}

	/// Builds the negotiator, applying the options in the order they were added
	pub fn build(self) -> ContentNegotiation {
		ContentNegotiation::new(self.options)
	}
}

impl ContentNegotiation {
	/// Creates a builder for fluent configuration
	///
	/// # Examples
	///
	/// ```
	/// use accept_negotiation::ContentNegotiation;
	///
	/// let negotiation = ContentNegotiation::builder()
	///     .default_media_type("application/xml")
	///     .supported_media_types(["application/json", "text/html"])
	///     .build();
	///
	/// assert_eq!(negotiation.default_media_type(), "application/xml");
	/// assert_eq!(negotiation.negotiate("image/png"), "application/xml");
	/// ```
	pub fn builder() -> ContentNegotiationBuilder {
		ContentNegotiationBuilder::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_defaults() {
		let negotiation = ContentNegotiation::new(Vec::new());
		assert_eq!(negotiation.default_media_type(), "text/plain");
		assert!(negotiation.supported_media_types().is_empty());
		assert_eq!(negotiation, ContentNegotiation::default());
	}

	#[rstest]
	fn test_last_option_wins() {
		let negotiation = ContentNegotiation::new([
			NegotiationOption::with_default_media_type("text/html"),
			NegotiationOption::with_default_media_type("application/xml"),
			NegotiationOption::with_supported_media_types(["a/a", "b/b"]),
			NegotiationOption::with_supported_media_types(["c/c"]),
		]);

		assert_eq!(negotiation.default_media_type(), "application/xml");
		assert_eq!(negotiation.supported_media_types(), ["c/c"]);
	}

	#[rstest]
	fn test_option_kinds_are_order_independent() {
		let supported_first = ContentNegotiation::new([
			NegotiationOption::with_supported_media_types(["application/json"]),
			NegotiationOption::with_default_media_type("text/html"),
		]);
		let default_first = ContentNegotiation::new([
			NegotiationOption::with_default_media_type("text/html"),
			NegotiationOption::with_supported_media_types(["application/json"]),
		]);

		assert_eq!(supported_first, default_first);
	}

	#[rstest]
	fn test_values_are_not_validated() {
		let negotiation = ContentNegotiation::new([
			NegotiationOption::with_default_media_type(""),
			NegotiationOption::with_supported_media_types(["", "not a type", "", "a/a"]),
		]);

		assert_eq!(negotiation.default_media_type(), "");
		assert_eq!(
			negotiation.supported_media_types(),
			["", "not a type", "", "a/a"]
		);
	}

	#[rstest]
	fn test_builder_matches_options() {
		let built = ContentNegotiation::builder()
			.supported_media_types(["application/json"])
			.option(NegotiationOption::with_default_media_type("text/html"))
			.build();
		let from_options = ContentNegotiation::new([
			NegotiationOption::with_supported_media_types(["application/json"]),
			NegotiationOption::with_default_media_type("text/html"),
		]);

		assert_eq!(built, from_options);
	}

	#[rstest]
	fn test_supported_media_types_accept_owned_strings() {
		let owned = vec!["application/json".to_string()];
		let option = NegotiationOption::with_supported_media_types(owned);
		assert_eq!(
			option,
			NegotiationOption::SupportedMediaTypes(vec!["application/json".to_string()])
		);
	}
}
