//! Weighted media types and ordering by quality

use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;

/// The media range that matches any media type
pub const WILDCARD: &str = "*/*";

/// Quality used when a candidate carries no usable `q` parameter
pub const DEFAULT_QUALITY: f64 = 1.0;

/// A media type candidate taken from an Accept header, with its quality
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedMediaType {
	/// Media type token as written in the header (e.g. "application/json")
	pub media_type: String,
	/// Value of the `q` parameter
	pub quality: f64,
}

impl WeightedMediaType {
	/// Creates a candidate with the default quality of 1.0
	///
	/// # Examples
	///
	/// ```
	/// use accept_negotiation::WeightedMediaType;
	///
	/// let json = WeightedMediaType::new("application/json");
	/// assert_eq!(json.media_type, "application/json");
	/// assert_eq!(json.quality, 1.0);
	/// ```
	pub fn new(media_type: impl Into<String>) -> Self {
		Self::with_quality(media_type, DEFAULT_QUALITY)
	}

	/// Creates a candidate with an explicit quality
	///
	/// # Examples
	///
	/// ```
	/// use accept_negotiation::WeightedMediaType;
	///
	/// let html = WeightedMediaType::with_quality("text/html", 0.9);
	/// assert_eq!(html.quality, 0.9);
	/// ```
	pub fn with_quality(media_type: impl Into<String>, quality: f64) -> Self {
		Self {
			media_type: media_type.into(),
			quality,
		}
	}

	/// Returns true for the `*/*` media range
	///
	/// # Examples
	///
	/// ```
	/// use accept_negotiation::WeightedMediaType;
	///
	/// assert!(WeightedMediaType::new("*/*").is_wildcard());
	/// assert!(!WeightedMediaType::new("text/*").is_wildcard());
	/// ```
	pub fn is_wildcard(&self) -> bool {
		self.media_type == WILDCARD
	}
}

impl fmt::Display for WeightedMediaType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.quality == DEFAULT_QUALITY {
			f.write_str(&self.media_type)
		} else {
			write!(f, "{};q={}", self.media_type, self.quality)
		}
	}
}

/// Descending order by quality.
///
/// NaN sorts after every number and ties with other NaNs, so this stays a total
/// preorder and a stable sort keeps equal candidates in header order.
fn by_descending_quality(a: &WeightedMediaType, b: &WeightedMediaType) -> Ordering {
	match b.quality.partial_cmp(&a.quality) {
		Some(ordering) => ordering,
		None => a.quality.is_nan().cmp(&b.quality.is_nan()),
	}
}

/// Ordered list of weighted media types
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightedMediaTypes(Vec<WeightedMediaType>);

impl WeightedMediaTypes {
	/// Creates an empty list
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a candidate at the end of the list
	pub fn push(&mut self, media_type: WeightedMediaType) {
		self.0.push(media_type);
	}

	/// Sorts by descending quality in place.
	///
	/// The sort is stable: candidates with equal quality keep their relative order.
	///
	/// # Examples
	///
	/// ```
	/// use accept_negotiation::{WeightedMediaType, WeightedMediaTypes};
	///
	/// let mut list: WeightedMediaTypes = vec![
	///     WeightedMediaType::with_quality("application/json", 0.8),
	///     WeightedMediaType::with_quality("text/html", 0.9),
	///     WeightedMediaType::with_quality("application/xml", 0.7),
	/// ]
	/// .into();
	/// list.sort();
	///
	/// let order: Vec<&str> = list.iter().map(|m| m.media_type.as_str()).collect();
	/// assert_eq!(order, ["text/html", "application/json", "application/xml"]);
	/// ```
	pub fn sort(&mut self) {
		self.0.sort_by(by_descending_quality);
	}

	/// Consumes the list, returning the underlying vector
	pub fn into_inner(self) -> Vec<WeightedMediaType> {
		self.0
	}
}

impl Deref for WeightedMediaTypes {
	type Target = [WeightedMediaType];

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl From<Vec<WeightedMediaType>> for WeightedMediaTypes {
	fn from(media_types: Vec<WeightedMediaType>) -> Self {
		Self(media_types)
	}
}

impl FromIterator<WeightedMediaType> for WeightedMediaTypes {
	fn from_iter<I: IntoIterator<Item = WeightedMediaType>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl IntoIterator for WeightedMediaTypes {
	type Item = WeightedMediaType;
	type IntoIter = std::vec::IntoIter<WeightedMediaType>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a> IntoIterator for &'a WeightedMediaTypes {
	type Item = &'a WeightedMediaType;
	type IntoIter = std::slice::Iter<'a, WeightedMediaType>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}
