use leptos::prelude::*;

use crate::components::force_graph::{ForceGraphSvg, GraphConfig, GraphData, GraphError, load_graph};

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<GraphPage config=GraphConfig::default() />
		<div class="graph-overlay">
			<h1>"Process Flow"</h1>
			<p class="subtitle">"Drag a node to pin it in place."</p>
		</div>
	}
}

/// Loads the document at `config.data_url` and mounts the graph once it parses.
#[component]
pub fn GraphPage(config: GraphConfig) -> impl IntoView {
	let loaded: RwSignal<Option<Result<GraphData, GraphError>>> = RwSignal::new(None);

	// One-shot load; a failure is shown below and the graph is never mounted.
	let url = config.data_url.clone();
	wasm_bindgen_futures::spawn_local(async move {
		loaded.set(Some(load_graph(url).await));
	});

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="fullscreen-graph">
				{move || {
					loaded
						.get()
						.map(|result| {
							let config = config.clone();
							result.map(|data| view! { <ForceGraphSvg data=data config=config /> })
						})
				}}
			</div>
		</ErrorBoundary>
	}
}
