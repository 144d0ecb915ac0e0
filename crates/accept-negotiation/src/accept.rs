//! Accept header parsing

use crate::media_type::{DEFAULT_QUALITY, WeightedMediaType, WeightedMediaTypes};
use crate::quality::parse_quality;

const QUALITY_PREFIX: &str = "q=";

/// Parsed Accept header, ordered by descending quality
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AcceptHeader {
	media_types: WeightedMediaTypes,
}

impl AcceptHeader {
	/// Parses an Accept header string into candidates sorted by quality.
	///
	/// Every comma-separated part yields exactly one candidate, so the empty
	/// header yields a single empty media type. A `q` value that does not parse
	/// leaves the quality at 1.0.
	///
	/// # Examples
	///
	/// ```
	/// use accept_negotiation::AcceptHeader;
	///
	/// let accept = AcceptHeader::parse("application/json;q=0.8,text/html");
	/// assert_eq!(accept.len(), 2);
	/// assert_eq!(accept.media_types()[0].media_type, "text/html");
	/// assert_eq!(accept.media_types()[1].quality, 0.8);
	///
	/// let empty = AcceptHeader::parse("");
	/// assert_eq!(empty.len(), 1);
	/// assert_eq!(empty.media_types()[0].media_type, "");
	/// ```
	pub fn parse(header: &str) -> Self {
		let mut media_types: WeightedMediaTypes = header.split(',').map(parse_part).collect();
		media_types.sort();

		Self { media_types }
	}

	/// Returns the candidates, highest quality first
	pub fn media_types(&self) -> &WeightedMediaTypes {
		&self.media_types
	}

	/// Consumes the header, returning its candidates
	pub fn into_media_types(self) -> WeightedMediaTypes {
		self.media_types
	}

	/// Number of candidates
	pub fn len(&self) -> usize {
		self.media_types.len()
	}

	/// Returns true when there are no candidates
	pub fn is_empty(&self) -> bool {
		self.media_types.is_empty()
	}
}

/// Parses an Accept header into its quality-ordered candidate list
pub fn parse_accept_header(header: &str) -> WeightedMediaTypes {
	AcceptHeader::parse(header).into_media_types()
}

fn parse_part(part: &str) -> WeightedMediaType {
	let mut segments = part.trim().split(';');
	let media_type = segments.next().unwrap_or_default().trim();

	// Parameters are matched as written; only an exact `q=` prefix is a weight.
	let quality = segments
		.filter_map(|param| param.strip_prefix(QUALITY_PREFIX))
		.filter_map(parse_quality)
		.last()
		.unwrap_or(DEFAULT_QUALITY);

	WeightedMediaType::with_quality(media_type, quality)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn types(accept: &AcceptHeader) -> Vec<(&str, f64)> {
		accept
			.media_types()
			.iter()
			.map(|m| (m.media_type.as_str(), m.quality))
			.collect()
	}

	#[rstest]
	fn test_parse_accept_header() {
		let accept = AcceptHeader::parse("application/json,text/html");
		assert_eq!(
			types(&accept),
			[("application/json", 1.0), ("text/html", 1.0)]
		);
	}

	#[rstest]
	fn test_parse_sorts_by_quality() {
		let accept = AcceptHeader::parse("text/plain;q=0.2, application/json;q=0.7,*/*;q=0.5");
		assert_eq!(
			types(&accept),
			[("application/json", 0.7), ("*/*", 0.5), ("text/plain", 0.2)]
		);
	}

	#[rstest]
	fn test_parse_empty_header_yields_one_empty_candidate() {
		let accept = AcceptHeader::parse("");
		assert_eq!(types(&accept), [("", 1.0)]);
		assert!(!accept.is_empty());
	}

	#[rstest]
	fn test_parse_keeps_empty_parts() {
		let accept = AcceptHeader::parse("text/html,,");
		assert_eq!(types(&accept), [("text/html", 1.0), ("", 1.0), ("", 1.0)]);
	}

	#[rstest]
	#[case("text/html;q=abc", 1.0)]
	#[case("text/html;q=", 1.0)]
	#[case("text/html;q=0.3;q=0.6", 0.6)]
	#[case("text/html;q=0.3;q=oops", 0.3)]
	#[case("text/html;level=1;q=0.4", 0.4)]
	#[case("text/html; q=0.4", 1.0)]
	#[case("text/html;Q=0.4", 1.0)]
	#[case("text/html;q=2", 2.0)]
	#[case("text/html;q=-1", -1.0)]
	#[case("text/html;q=1e999", 1.0)]
	#[case("text/html;q=-1e999", 1.0)]
	#[case("text/html;q=0x1p1", 2.0)]
	#[case("text/html;q=0.5;q=1e999", 0.5)]
	fn test_parse_quality_parameter(#[case] header: &str, #[case] expected: f64) {
		let accept = AcceptHeader::parse(header);
		assert_eq!(accept.len(), 1);
		assert_eq!(accept.media_types()[0].media_type, "text/html");
		assert_eq!(accept.media_types()[0].quality, expected);
	}

	#[rstest]
	fn test_parse_trims_media_type() {
		let accept = AcceptHeader::parse("  application/json  ;q=0.5 ,  text/html ");
		assert_eq!(
			types(&accept),
			[("text/html", 1.0), ("application/json", 0.5)]
		);
	}

	#[rstest]
	fn test_parse_preserves_duplicates_in_order() {
		let accept = AcceptHeader::parse("a/a;q=0.5,b/b,a/a;q=0.5,b/b");
		assert_eq!(
			types(&accept),
			[("b/b", 1.0), ("b/b", 1.0), ("a/a", 0.5), ("a/a", 0.5)]
		);
	}

	#[rstest]
	fn test_parse_out_of_range_and_hex_quality_ordering() {
		let overflow = AcceptHeader::parse("b/b,a/a;q=1e999");
		assert_eq!(types(&overflow), [("b/b", 1.0), ("a/a", 1.0)]);

		let hex = AcceptHeader::parse("b/b,a/a;q=0x1p1");
		assert_eq!(types(&hex), [("a/a", 2.0), ("b/b", 1.0)]);
	}

	#[rstest]
	fn test_parse_accept_header_function() {
		let list = parse_accept_header("text/html;q=0.9,application/json");
		assert_eq!(list[0].media_type, "application/json");
		assert_eq!(list[1].media_type, "text/html");
	}
}
