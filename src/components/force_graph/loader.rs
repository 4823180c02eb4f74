use log::{error, info};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use super::error::{GraphError, Result};
use super::types::GraphData;

fn js_message(value: &JsValue) -> String {
	value
		.dyn_ref::<js_sys::Error>()
		.map(|e| String::from(e.message()))
		.or_else(|| value.as_string())
		.unwrap_or_else(|| format!("{value:?}"))
}

/// Fetch and parse the graph document at `url`. Called once at startup.
pub async fn load_graph(url: String) -> Result<GraphData> {
	let result = fetch_graph(&url).await;
	match &result {
		Ok(data) => info!(
			"Loaded {} nodes and {} links from {}",
			data.nodes.len(),
			data.links.len(),
			url
		),
		Err(e) => error!("Graph load failed: {e}"),
	}
	result
}

async fn fetch_graph(url: &str) -> Result<GraphData> {
	let window = web_sys::window().ok_or(GraphError::NoWindow)?;
	let fetch_err = |e: JsValue| GraphError::Fetch {
		url: url.to_owned(),
		message: js_message(&e),
	};

	let response: Response = JsFuture::from(window.fetch_with_str(url))
		.await
		.map_err(fetch_err)?
		.dyn_into()
		.map_err(fetch_err)?;
	if !response.ok() {
		return Err(GraphError::Status {
			url: url.to_owned(),
			status: response.status(),
		});
	}

	let body = JsFuture::from(response.text().map_err(fetch_err)?)
		.await
		.map_err(fetch_err)?;
	GraphData::from_json(&body_text(url, body)?)
}

fn body_text(url: &str, body: JsValue) -> Result<String> {
	body.as_string().ok_or_else(|| GraphError::Body {
		url: url.to_owned(),
	})
}
