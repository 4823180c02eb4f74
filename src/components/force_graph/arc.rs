use super::error::{GraphError, Result};
use super::links::SiblingCounts;
use super::types::GraphLink;

/// Position of a node in graph space, at the simulation's `f32` precision so
/// coordinates print as the simulation stores them.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f32,
	pub y: f32,
}

impl Point {
	pub fn new(x: f32, y: f32) -> Self {
		Self { x, y }
	}

	pub fn distance(self, other: Point) -> f64 {
		let dx = f64::from(other.x) - f64::from(self.x);
		let dy = f64::from(other.y) - f64::from(self.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// Build the SVG elliptical-arc path for `link`.
///
/// `left_hand` draws from source to target with sweep 0, otherwise from target
/// to source with sweep 1. The radius is the source-target distance, shrunk
/// per sibling so parallel links fan out instead of overlapping.
pub fn arc_path(
	counts: &SiblingCounts,
	left_hand: bool,
	link: &GraphLink,
	source: Option<Point>,
	target: Option<Point>,
) -> Result<String> {
	let (Some(source), Some(target)) = (source, target) else {
		return Err(GraphError::NodeNotFound {
			from: link.source.clone(),
			to: link.target.clone(),
		});
	};

	let (start, end, sweep) = if left_hand {
		(source, target, 0u8)
	} else {
		(target, source, 1u8)
	};

	let mut dr = source.distance(target);
	if let Some(count) = counts.get(&link.source, &link.target).filter(|&c| c > 1) {
		let offset = f64::from(link.linkindex) - 1.0 - f64::from(sweep);
		dr /= 1.0 + offset / f64::from(count);
	}

	Ok(format!(
		"M{},{} A{dr},{dr} 0,0,{sweep} {},{}",
		start.x, start.y, end.x, end.y
	))
}
