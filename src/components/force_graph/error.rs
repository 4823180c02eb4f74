use super::types::NodeId;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GraphError {
	#[error("no browser window available")]
	NoWindow,
	#[error("failed to fetch {url}: {message}")]
	Fetch { url: String, message: String },
	#[error("fetching {url} returned HTTP {status}")]
	Status { url: String, status: u16 },
	#[error("response body of {url} is not text")]
	Body { url: String },
	#[error("malformed graph data: {message}")]
	Parse { message: String },
	#[error("node not found for link {from} -> {to}")]
	NodeNotFound { from: NodeId, to: NodeId },
}

pub type Result<T> = std::result::Result<T, GraphError>;
