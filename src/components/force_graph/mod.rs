//! SVG force graph with curved, labelled parallel edges.

mod arc;
mod component;
mod config;
mod error;
mod links;
mod loader;
mod render;
mod scale;
mod state;
mod types;

pub use component::ForceGraphSvg;
pub use config::GraphConfig;
pub use error::GraphError;
pub use loader::load_graph;
pub use types::GraphData;
