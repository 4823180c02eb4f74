/// The ten-colour categorical palette.
pub const CATEGORY10: &[&str] = &[
	"#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
	"#bcbd22", "#17becf",
];

/// Maps an index onto a fixed palette, wrapping around at the end.
#[derive(Clone, Copy, Debug)]
pub struct OrdinalScale {
	range: &'static [&'static str],
}

impl Default for OrdinalScale {
	fn default() -> Self {
		Self::new(CATEGORY10)
	}
}

impl OrdinalScale {
	pub fn new(range: &'static [&'static str]) -> Self {
		Self { range }
	}

	pub fn color(&self, i: usize) -> &'static str {
		self.range[i % self.range.len()]
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn wraps_around_palette() {
		let scale = OrdinalScale::default();
		assert_eq!(scale.color(0), "#1f77b4");
		assert_eq!(scale.color(9), "#17becf");
		assert_eq!(scale.color(10), "#1f77b4");
	}
}
