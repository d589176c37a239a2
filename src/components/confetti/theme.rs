//! Confetti colors.

use rand::Rng;

use super::error::ConfigError;

/// Red, green, blue, yellow and pink.
pub const CLASSIC: [&str; 5] = ["#ff0000", "#00ff00", "#0000ff", "#ffeb3b", "#e91e63"];

/// Non-empty ordered list of CSS color values.
///
/// Entries are passed through to the rendering surface untouched, so any CSS
/// color syntax works (`#fff`, `rgb(...)`, `hsl(...)`, named colors).
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
	colors: Vec<String>,
}

impl Palette {
	/// Build a palette from explicit CSS colors, rejecting empty or blank input.
	pub fn new<I, S>(colors: I) -> Result<Self, ConfigError>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
		if colors.is_empty() {
			return Err(ConfigError::EmptyPalette);
		}
		if let Some(index) = colors.iter().position(|c| c.trim().is_empty()) {
			return Err(ConfigError::BlankColor { index });
		}
		Ok(Self { colors })
	}

	/// Pick a color uniformly at random.
	pub fn pick<R: Rng>(&self, rng: &mut R) -> &str {
		&self.colors[rng.gen_range(0..self.colors.len())]
	}

	pub fn colors(&self) -> &[String] {
		&self.colors
	}

	pub fn len(&self) -> usize {
		self.colors.len()
	}

	/// Always false: a palette is never empty.
	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}
}

impl Default for Palette {
	fn default() -> Self {
		Self {
			colors: CLASSIC.iter().map(|c| c.to_string()).collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	#[test]
	fn default_is_the_classic_set() {
		assert_eq!(
			Palette::default().colors(),
			&["#ff0000", "#00ff00", "#0000ff", "#ffeb3b", "#e91e63"]
		);
	}

	#[test]
	fn rejects_empty_and_blank_palettes() {
		assert_eq!(Palette::new(Vec::<String>::new()), Err(ConfigError::EmptyPalette));
		assert_eq!(
			Palette::new(["#fff", "  "]),
			Err(ConfigError::BlankColor { index: 1 })
		);
		assert_eq!(Palette::new(["#fff"]).map(|p| p.len()), Ok(1));
	}

	#[test]
	fn pick_covers_every_entry() {
		let palette = Palette::new(["a", "b", "c"]).unwrap();
		let mut rng = SmallRng::seed_from_u64(7);
		let mut seen = [false; 3];
		for _ in 0..200 {
			let color = palette.pick(&mut rng);
			let idx = palette.colors().iter().position(|c| c == color).unwrap();
			seen[idx] = true;
		}
		assert_eq!(seen, [true, true, true]);
	}
}
