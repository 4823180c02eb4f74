use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData};
use log::{debug, error, info};

use super::arc::Point;
use super::config::GraphConfig;
use super::links::{SiblingCounts, index_links, sort_links};
use super::scale::OrdinalScale;
use super::types::{GraphData, GraphLink, NodeId};

/// Static per-node data for the SVG, in document order.
#[derive(Clone, Debug)]
pub struct NodeInfo {
	pub idx: DefaultNodeIdx,
	pub id: NodeId,
	pub caption: String,
	pub color: &'static str,
}

/// Everything the tick loop and pointer handlers share.
pub struct ForceGraphState {
	pub graph: ForceGraph<NodeId, ()>,
	/// Node under the pointer while a drag is in progress.
	pub dragging: Option<DefaultNodeIdx>,
	nodes: Vec<NodeInfo>,
	links: Vec<GraphLink>,
	counts: SiblingCounts,
}

impl ForceGraphState {
	pub fn new(data: &GraphData, config: &GraphConfig, width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(config.simulation.parameters());
		let colors = OrdinalScale::default();
		let mut id_to_idx = HashMap::new();
		let mut nodes = Vec::with_capacity(data.nodes.len());

		for (i, node) in data.nodes.iter().enumerate() {
			let angle = (i as f64) * 2.0 * PI / data.nodes.len() as f64;
			let (x, y) = (
				(width / 2.0 + 100.0 * angle.cos()) as f32,
				(height / 2.0 + 100.0 * angle.sin()) as f32,
			);

			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: config.simulation.node_mass,
				is_anchor: false,
				user_data: node.id.clone(),
			});
			id_to_idx.insert(node.id.clone(), idx);
			nodes.push(NodeInfo {
				idx,
				id: node.id.clone(),
				caption: node.caption(),
				color: colors.color(i),
			});
		}

		let mut links = data.links.clone();
		sort_links(&mut links);
		let counts = index_links(&mut links);

		for link in unresolved_links(&links, &id_to_idx) {
			error!(
				"Link {:?} references a missing node: {} -> {}",
				link.name, link.source, link.target
			);
		}
		for link in &links {
			if let (Some(&src), Some(&tgt)) = (id_to_idx.get(&link.source), id_to_idx.get(&link.target)) {
				if src != tgt {
					graph.add_edge(src, tgt, EdgeData::default());
				}
			}
		}
		info!(
			"Graph state built: {} nodes, {} links, {} node pairs",
			nodes.len(),
			links.len(),
			counts.len()
		);

		Self {
			graph,
			dragging: None,
			nodes,
			links,
			counts,
		}
	}

	pub fn nodes(&self) -> &[NodeInfo] {
		&self.nodes
	}

	/// Links sorted by source and target, with `linkindex` assigned.
	pub fn links(&self) -> &[GraphLink] {
		&self.links
	}

	pub fn counts(&self) -> &SiblingCounts {
		&self.counts
	}

	/// Current simulation positions keyed by node id.
	pub fn positions(&self) -> HashMap<NodeId, Point> {
		let mut positions = HashMap::with_capacity(self.nodes.len());
		self.graph.visit_nodes(|node| {
			positions.insert(
				node.data.user_data.clone(),
				Point::new(node.x(), node.y()),
			);
		});
		positions
	}

	pub fn start_drag(&mut self, idx: DefaultNodeIdx) {
		debug!("Drag start on node {idx:?}");
		self.dragging = Some(idx);
	}

	/// Move the dragged node to `(x, y)` and pin it there.
	pub fn drag_to(&mut self, x: f64, y: f64) {
		let Some(idx) = self.dragging else {
			return;
		};
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.x = x as f32;
				node.data.y = y as f32;
				node.data.is_anchor = true;
			}
		});
	}

	/// Release the drag; the node stays pinned where it was dropped.
	pub fn end_drag(&mut self) {
		if let Some(idx) = self.dragging.take() {
			debug!("Node {idx:?} pinned");
		}
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
	}
}

/// Links with an endpoint that is not among the graph's nodes.
fn unresolved_links<'a, V>(links: &'a [GraphLink], ids: &HashMap<NodeId, V>) -> Vec<&'a GraphLink> {
	links
		.iter()
		.filter(|l| !ids.contains_key(&l.source) || !ids.contains_key(&l.target))
		.collect()
}
