//! Error types for configuring and mounting the confetti effect.

use thiserror::Error;

/// Invalid or malformed effect configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
	/// `count` must allow at least one particle.
	#[error("invalid configuration: count must be greater than zero")]
	ZeroCapacity,

	/// An explicit `colors` list was given but it is empty.
	#[error("invalid configuration: colors must contain at least one entry")]
	EmptyPalette,

	/// A palette entry is empty or whitespace only.
	#[error("invalid configuration: color at index {index} is blank")]
	BlankColor { index: usize },

	/// The options document could not be parsed.
	#[error("malformed options: {message}")]
	Malformed { message: String },
}

impl From<serde_json::Error> for ConfigError {
	fn from(err: serde_json::Error) -> Self {
		Self::Malformed {
			message: err.to_string(),
		}
	}
}

/// Failure to attach the effect to a browser page.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MountError {
	/// The options did not validate.
	#[error(transparent)]
	Config(#[from] ConfigError),

	/// No global `window` (not running in a browser main thread).
	#[error("no window available")]
	NoWindow,

	/// The window has no document.
	#[error("no document available")]
	NoDocument,

	/// The configured container id does not match any element.
	#[error("container element '#{id}' not found")]
	ContainerNotFound { id: String },
}
