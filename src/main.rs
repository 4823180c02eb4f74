use leptos::prelude::*;
use multi_edge_force_graph::{App, init_logging};

fn main() {
	init_logging();
	mount_to_body(App)
}
