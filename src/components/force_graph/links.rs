use std::collections::HashMap;

use super::types::{GraphLink, NodeId};

/// Number of parallel links recorded per node pair.
///
/// Only one of the two orderings of a pair is ever stored. Built once by
/// [`index_links`] and read-only afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SiblingCounts {
	counts: HashMap<(NodeId, NodeId), u32>,
}

impl SiblingCounts {
	/// Count stored for `(source, target)`, falling back to `(target, source)`.
	pub fn get(&self, source: &NodeId, target: &NodeId) -> Option<u32> {
		self.counts
			.get(&(source.clone(), target.clone()))
			.or_else(|| self.counts.get(&(target.clone(), source.clone())))
			.copied()
	}

	/// Count stored under exactly this ordering.
	#[cfg(test)]
	pub fn get_exact(&self, source: &NodeId, target: &NodeId) -> Option<u32> {
		self.counts.get(&(source.clone(), target.clone())).copied()
	}

	pub fn len(&self) -> usize {
		self.counts.len()
	}

	fn record(&mut self, source: &NodeId, target: &NodeId, linkindex: u32) {
		let reversed = (target.clone(), source.clone());
		if let Some(count) = self.counts.get_mut(&reversed) {
			*count = linkindex;
		} else {
			self.counts.insert((source.clone(), target.clone()), linkindex);
		}
	}
}

/// Stable sort by source, then target.
pub fn sort_links(links: &mut [GraphLink]) {
	links.sort_by(|a, b| a.source.cmp(&b.source).then_with(|| a.target.cmp(&b.target)));
}

/// Assign `linkindex` to each link of an already sorted slice and collect the
/// sibling counts.
///
/// A run is a sequence of adjacent links with the same `(source, target)`;
/// A -> B and B -> A are separate runs, each starting at 1. The count for a
/// pair is the last `linkindex` written for it, whichever direction that was.
pub fn index_links(links: &mut [GraphLink]) -> SiblingCounts {
	let mut counts = SiblingCounts::default();

	for i in 0..links.len() {
		let continues_run = i > 0
			&& links[i - 1].source == links[i].source
			&& links[i - 1].target == links[i].target;
		let linkindex = if continues_run {
			links[i - 1].linkindex + 1
		} else {
			1
		};
		links[i].linkindex = linkindex;
		counts.record(&links[i].source, &links[i].target, linkindex);
	}
	counts
}
