//! Options accepted by the confetti effect and their validated form.

use serde::Deserialize;

use super::error::ConfigError;
use super::theme::Palette;

/// Default particle capacity.
pub const DEFAULT_COUNT: usize = 100;

/// Where a freshly created particle is placed among the surface's children.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Stacking {
	/// Append as the last child, so the newest particle renders on top.
	#[default]
	NewestOnTop,
	/// Insert as the first child, so the newest particle renders below
	/// everything already on the surface.
	NewestBelow,
}

/// Raw, unvalidated options as supplied by a page or a JS caller.
///
/// Every field is optional. Parsed from camelCase JSON, e.g.
/// `{ "count": 150, "colors": ["#fff", "gold"], "stacking": "newestBelow" }`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfettiOptions {
	/// Maximum number of live particles.
	pub count: Option<usize>,
	/// CSS colors to pick from; the classic five-color set when absent.
	pub colors: Option<Vec<String>>,
	/// Placement of new pieces among the container's children.
	pub stacking: Stacking,
	/// Seed for the random source; a fresh seed is drawn when absent.
	pub seed: Option<u64>,
	/// Element id of the container to attach particles to.
	pub container: Option<String>,
}

impl ConfettiOptions {
	/// Parse options from a camelCase JSON object.
	pub fn from_json(json: &str) -> Result<Self, ConfigError> {
		Ok(serde_json::from_str(json)?)
	}

	/// Validate into the configuration the controller runs with.
	pub fn to_config(&self) -> Result<ConfettiConfig, ConfigError> {
		let capacity = self.count.unwrap_or(DEFAULT_COUNT);
		let palette = match &self.colors {
			Some(colors) => Palette::new(colors.iter().cloned())?,
			None => Palette::default(),
		};
		Ok(ConfettiConfig::new(capacity, palette)?.with_stacking(self.stacking))
	}
}

/// Validated controller configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiConfig {
	capacity: usize,
	palette: Palette,
	stacking: Stacking,
}

impl ConfettiConfig {
	/// Reject a zero capacity; stacking defaults to newest on top.
	pub fn new(capacity: usize, palette: Palette) -> Result<Self, ConfigError> {
		if capacity == 0 {
			return Err(ConfigError::ZeroCapacity);
		}
		Ok(Self {
			capacity,
			palette,
			stacking: Stacking::default(),
		})
	}

	/// Replace the stacking policy.
	pub fn with_stacking(self, stacking: Stacking) -> Self {
		Self { stacking, ..self }
	}

	/// Maximum number of live particles.
	pub fn capacity(&self) -> usize {
		self.capacity
	}

	/// Colors new pieces are drawn from.
	pub fn palette(&self) -> &Palette {
		&self.palette
	}

	/// Placement of new pieces on the surface.
	pub fn stacking(&self) -> Stacking {
		self.stacking
	}
}

impl Default for ConfettiConfig {
	fn default() -> Self {
		Self {
			capacity: DEFAULT_COUNT,
			palette: Palette::default(),
			stacking: Stacking::default(),
		}
	}
}
