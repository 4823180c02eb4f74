use super::arc::arc_path;
use super::error::Result;
use super::state::ForceGraphState;

/// Attribute values for one edge on one tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EdgeFrame {
	/// Visible arc, always drawn source to target.
	pub d: String,
	/// Invisible arc the label follows, drawn left to right.
	pub label_d: String,
}

/// Everything the SVG needs to redraw after a tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
	/// `transform` of each node group, in document order.
	pub nodes: Vec<String>,
	/// Paths of each link, in sorted link order.
	pub edges: Vec<EdgeFrame>,
}

/// Recompute node transforms and edge paths from the current positions.
///
/// Fails as a whole on the first link whose endpoint is missing, so the caller
/// keeps showing the previous frame.
pub fn frame(state: &ForceGraphState) -> Result<Frame> {
	let positions = state.positions();

	let nodes = state
		.nodes()
		.iter()
		.map(|node| {
			let p = positions.get(&node.id).copied().unwrap_or_default();
			format!("translate({}, {})", p.x, p.y)
		})
		.collect();

	let edges = state
		.links()
		.iter()
		.map(|link| -> Result<EdgeFrame> {
			let (source, target) = (
				positions.get(&link.source).copied(),
				positions.get(&link.target).copied(),
			);
			let left_to_right = matches!((source, target), (Some(s), Some(t)) if s.x < t.x);
			Ok(EdgeFrame {
				d: arc_path(state.counts(), true, link, source, target)?,
				label_d: arc_path(state.counts(), left_to_right, link, source, target)?,
			})
		})
		.collect::<Result<Vec<_>>>()?;

	Ok(Frame { nodes, edges })
}
