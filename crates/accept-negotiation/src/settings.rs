//! Negotiation settings loaded from TOML or JSON
//!
//! Settings are an optional source of [`NegotiationOption`]s. Keys that are
//! absent leave the corresponding default untouched.
//!
//! ```toml
//! default_media_type = "application/json"
//! supported_media_types = ["application/json", "text/html"]
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::negotiator::ContentNegotiation;
use crate::options::NegotiationOption;

/// Errors raised while loading negotiation settings
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("Invalid source: {0}")]
	InvalidSource(String),
}

/// Declarative negotiation settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NegotiationSettings {
	/// Fallback media type
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub default_media_type: Option<String>,
	/// Supported media types, most preferred first
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub supported_media_types: Option<Vec<String>>,
}

impl NegotiationSettings {
	/// Parses settings from a TOML document
	///
	/// # Examples
	///
	/// ```
	/// use accept_negotiation::settings::NegotiationSettings;
	///
	/// let settings = NegotiationSettings::from_toml_str(
	///     r#"supported_media_types = ["application/json", "text/html"]"#,
	/// )
	/// .unwrap();
	/// assert_eq!(settings.default_media_type, None);
	/// assert_eq!(settings.supported_media_types.unwrap().len(), 2);
	/// ```
	pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
		Ok(toml::from_str(content)?)
	}

	/// Parses settings from a JSON document
	pub fn from_json_str(content: &str) -> Result<Self, SettingsError> {
		Ok(serde_json::from_str(content)?)
	}

	/// Loads settings from a `.toml` or `.json` file, chosen by extension
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let path = path.as_ref();
		let ext = path
			.extension()
			.and_then(|e| e.to_str())
			.ok_or_else(|| SettingsError::InvalidSource("No file extension".to_string()))?;

		let settings = match ext {
			"toml" => Self::from_toml_str(&fs::read_to_string(path)?)?,
			"json" => Self::from_json_str(&fs::read_to_string(path)?)?,
			_ => {
				return Err(SettingsError::InvalidSource(format!(
					"Unsupported file extension: {}",
					ext
				)));
			}
		};

		tracing::debug!(path = %path.display(), "loaded negotiation settings");
		Ok(settings)
	}

	/// Converts the settings into construction options.
	///
	/// Supported media types come before the default media type; since the two
	/// kinds are independent the order does not affect the result.
	pub fn into_options(self) -> Vec<NegotiationOption> {
		let mut options = Vec::with_capacity(2);
		if let Some(media_types) = self.supported_media_types {
			options.push(NegotiationOption::SupportedMediaTypes(media_types));
		}
		if let Some(media_type) = self.default_media_type {
			options.push(NegotiationOption::DefaultMediaType(media_type));
		}
		options
	}
}

impl ContentNegotiation {
	/// Builds a negotiator from loaded settings
	///
	/// # Examples
	///
	/// ```
	/// use accept_negotiation::ContentNegotiation;
	/// use accept_negotiation::settings::NegotiationSettings;
	///
	/// let settings = NegotiationSettings::from_json_str(
	///     r#"{"default_media_type": "text/html", "supported_media_types": ["application/json"]}"#,
	/// )
	/// .unwrap();
	/// let negotiation = ContentNegotiation::from_settings(settings);
	///
	/// assert_eq!(negotiation.negotiate("*/*"), "application/json");
	/// assert_eq!(negotiation.negotiate("image/png"), "text/html");
	/// ```
	pub fn from_settings(settings: NegotiationSettings) -> Self {
		Self::new(settings.into_options())
	}
}

impl From<NegotiationSettings> for ContentNegotiation {
	fn from(settings: NegotiationSettings) -> Self {
		Self::from_settings(settings)
	}
}
