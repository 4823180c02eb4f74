use std::fmt;

use serde::Deserialize;

use super::error::GraphError;

/// Node identifier as it appears in the graph document.
///
/// Integers order numerically and strings lexicographically. A document that
/// mixes both orders every integer before every string.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(untagged)]
pub enum NodeId {
	Int(i64),
	Str(String),
}

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			NodeId::Int(id) => write!(f, "{id}"),
			NodeId::Str(id) => f.write_str(id),
		}
	}
}

impl From<i64> for NodeId {
	fn from(id: i64) -> Self {
		NodeId::Int(id)
	}
}

impl From<&str> for NodeId {
	fn from(id: &str) -> Self {
		NodeId::Str(id.to_owned())
	}
}

#[derive(Clone, Debug, Deserialize)]
pub struct GraphNode {
	pub id: NodeId,
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub text: String,
}

impl GraphNode {
	/// Text drawn next to the node circle.
	pub fn caption(&self) -> String {
		format!("{}:{}", self.name, self.text)
	}
}

#[derive(Clone, Debug, Deserialize)]
pub struct GraphLink {
	pub source: NodeId,
	pub target: NodeId,
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub key: Option<u64>,
	/// 1-based rank among consecutive links with the same source and target.
	/// Zero until `index_links` runs.
	#[serde(skip)]
	pub linkindex: u32,
}

impl GraphLink {
	#[cfg(test)]
	pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>, name: &str) -> Self {
		Self {
			source: source.into(),
			target: target.into(),
			name: name.to_owned(),
			key: None,
			linkindex: 0,
		}
	}

	/// DOM id of the invisible path the label is laid out along.
	pub fn label_path_id(&self) -> String {
		format!("invis_{}-{}-{}", self.source, self.linkindex, self.target)
	}
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}

impl GraphData {
	/// Parse a node-link document. Links without a `key` get their position
	/// in the document.
	pub fn from_json(text: &str) -> Result<Self, GraphError> {
		let mut data: GraphData = serde_json::from_str(text).map_err(|e| GraphError::Parse {
			message: e.to_string(),
		})?;
		for (i, link) in data.links.iter_mut().enumerate() {
			link.key.get_or_insert(i as u64);
		}
		Ok(data)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_node_link_document() {
		let doc = r#"{
			"directed": true,
			"multigraph": true,
			"graph": {},
			"nodes": [
				{"index": 0, "x": 0, "y": 0, "name": "read", "text": "load input", "id": 0},
				{"index": 1, "x": 1, "y": 0, "name": "write", "text": "", "id": 1}
			],
			"links": [
				{"source": 1, "target": 0, "name": "state.a", "id": 0, "key": 0},
				{"source": 1, "target": 0, "name": "state.b", "id": 1}
			]
		}"#;
		let data = GraphData::from_json(doc).unwrap();

		assert_eq!(data.nodes.len(), 2);
		assert_eq!(data.nodes[0].id, NodeId::Int(0));
		assert_eq!(data.nodes[0].caption(), "read:load input");
		assert_eq!(data.links[0].source, NodeId::Int(1));
		assert_eq!(data.links[0].key, Some(0));
		assert_eq!(data.links[1].key, Some(1));
		assert_eq!(data.links[1].linkindex, 0);
	}

	#[test]
	fn parses_string_ids_and_missing_labels() {
		let doc = r#"{"nodes": [{"id": "a"}, {"id": "b"}], "links": [{"source": "a", "target": "b"}]}"#;
		let data = GraphData::from_json(doc).unwrap();

		assert_eq!(data.nodes[1].id, NodeId::from("b"));
		assert_eq!(data.nodes[1].caption(), ":");
		assert_eq!(data.links[0].name, "");
	}

	#[test]
	fn malformed_document_is_a_parse_error() {
		let err = GraphData::from_json(r#"{"nodes": []"#).unwrap_err();
		assert!(matches!(err, GraphError::Parse { .. }));
	}

	#[test]
	fn integers_order_before_strings() {
		let mut ids = vec![NodeId::from("a"), NodeId::from(10i64), NodeId::from(2i64)];
		ids.sort();
		assert_eq!(ids, vec![NodeId::from(2i64), NodeId::from(10i64), NodeId::from("a")]);
	}

	#[test]
	fn label_path_id_uses_link_index() {
		let mut link = GraphLink::new(3i64, 7i64, "x");
		link.linkindex = 2;
		assert_eq!(link.label_path_id(), "invis_3-2-7");
	}
}
