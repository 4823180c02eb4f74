use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::error;
use wasm_bindgen::prelude::*;
use web_sys::{MouseEvent, Window};

use super::config::GraphConfig;
use super::render::{self, Frame};
use super::state::ForceGraphState;
use super::types::GraphData;

fn window_size(window: &Window) -> (f64, f64) {
	(
		window
			.inner_width()
			.ok()
			.and_then(|w| w.as_f64())
			.unwrap_or(800.0),
		window
			.inner_height()
			.ok()
			.and_then(|h| h.as_f64())
			.unwrap_or(600.0),
	)
}

fn edge_attr(frame: RwSignal<Frame>, i: usize, pick: fn(&render::EdgeFrame) -> &str) -> String {
	frame.with(|f| f.edges.get(i).map(pick).unwrap_or_default().to_owned())
}

#[component]
pub fn ForceGraphSvg(data: GraphData, #[prop(optional)] config: GraphConfig) -> impl IntoView {
	let window = web_sys::window();
	let fullscreen = config.width.is_none() || config.height.is_none();
	let (w, h) = match (config.width, config.height, &window) {
		(Some(w), Some(h), _) => (w, h),
		(_, _, Some(win)) => window_size(win),
		_ => (800.0, 600.0),
	};

	let state = ForceGraphState::new(&data, &config, w, h);
	let frame = RwSignal::new(render::frame(&state).unwrap_or_default());
	let size = RwSignal::new((w, h));
	let (nodes, links) = (state.nodes().to_vec(), state.links().to_vec());
	let tick_dt = config.tick_dt;

	let svg_ref = NodeRef::<leptos::svg::Svg>::new();
	let state = Rc::new(RefCell::new(state));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (state_init, animate_init, resize_cb_init) =
		(state.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(window) = web_sys::window() else {
			return;
		};

		if fullscreen {
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				if let Some(win) = web_sys::window() {
					size.set(window_size(&win));
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		let mut failing = false;
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			{
				let mut s = state_anim.borrow_mut();
				s.tick(tick_dt);
				match render::frame(&s) {
					Ok(next) => {
						failing = false;
						frame.set(next);
					}
					Err(e) => {
						// once per failure streak; the previous frame stays up
						if !failing {
							error!("Skipping edge paths: {e}");
						}
						failing = true;
					}
				}
			}
			if let (Some(win), Some(cb)) = (web_sys::window(), animate_inner.borrow().as_ref()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(svg) = svg_ref.get() else {
			return;
		};
		let rect = svg.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);
		state_mm.borrow_mut().drag_to(x, y);
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| state_mu.borrow_mut().end_drag();
	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| state_ml.borrow_mut().end_drag();

	let edges = links
		.iter()
		.enumerate()
		.map(|(i, link)| {
			view! {
				<path
					class="link"
					data-key=link.key.map(|k| k.to_string())
					fill="none"
					stroke="#999"
					marker-end="url(#arrowhead)"
					d=move || edge_attr(frame, i, |e| e.d.as_str())
				>
					<title>{link.name.clone()}</title>
				</path>
			}
		})
		.collect_view();

	let label_paths = links
		.iter()
		.enumerate()
		.map(|(i, link)| {
			view! {
				<path
					class="pathInvis"
					id=link.label_path_id()
					fill="none"
					stroke="none"
					d=move || edge_attr(frame, i, |e| e.label_d.as_str())
				/>
			}
		})
		.collect_view();

	let labels = links
		.iter()
		.map(|link| {
			view! {
				<text class="pathLabel" text-anchor="middle">
					<textPath
						startOffset="50%"
						href=format!("#{}", link.label_path_id())
						style="fill: #cccccc; font-size: 30px;"
					>
						{link.name.clone()}
					</textPath>
				</text>
			}
		})
		.collect_view();

	let radius = config.node_radius;
	let node_views = nodes
		.into_iter()
		.enumerate()
		.map(|(i, node)| {
			let state_md = state.clone();
			let idx = node.idx;
			view! {
				<g
					class="node"
					transform=move || frame.with(|f| f.nodes.get(i).cloned().unwrap_or_default())
					on:mousedown=move |ev: MouseEvent| {
						ev.prevent_default();
						state_md.borrow_mut().start_drag(idx);
					}
				>
					<circle r=radius fill=node.color />
					<title>{node.id.to_string()}</title>
					<text dy="-3">{node.caption}</text>
				</g>
			}
		})
		.collect_view();

	view! {
		<svg
			node_ref=svg_ref
			class="force-graph-svg"
			width=move || size.get().0
			height=move || size.get().1
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			style="display: block; cursor: grab;"
		>
			<defs>
				<marker
					id="arrowhead"
					viewBox="-0 -5 10 10"
					refX="13"
					refY="0"
					orient="auto"
					markerWidth="13"
					markerHeight="13"
				>
					<path d="M 0,-5 L 10 ,0 L 0,5" fill="#999" style="stroke: none;" />
				</marker>
			</defs>
			{edges}
			{label_paths}
			{labels}
			{node_views}
		</svg>
	}
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
	use wasm_bindgen_test::*;
	use web_sys::Element;

	use super::*;

	wasm_bindgen_test_configure!(run_in_browser);

	const DOC: &str = r#"{
		"nodes": [
			{"id": 0, "name": "start", "text": "a"},
			{"id": 1, "name": "end", "text": "b"}
		],
		"links": [
			{"source": 1, "target": 0, "name": "retry", "key": 7},
			{"source": 0, "target": 1, "name": "go"}
		]
	}"#;

	fn mount_graph() -> Element {
		let document = web_sys::window().unwrap().document().unwrap();
		let host = document.create_element("div").unwrap();
		document.body().unwrap().append_child(&host).unwrap();

		let data = GraphData::from_json(DOC).unwrap();
		let config = GraphConfig {
			width: Some(400.0),
			height: Some(300.0),
			..GraphConfig::default()
		};
		leptos::mount::mount_to(host.clone().unchecked_into(), move || {
			view! { <ForceGraphSvg data=data config=config /> }
		})
		.forget();
		host
	}

	fn all(host: &Element, selector: &str) -> Vec<Element> {
		let list = host.query_selector_all(selector).unwrap();
		(0..list.length())
			.filter_map(|i| list.item(i))
			.map(|node| node.unchecked_into())
			.collect()
	}

	fn attr(el: &Element, name: &str) -> String {
		el.get_attribute(name).unwrap_or_default()
	}

	#[wasm_bindgen_test]
	fn arrowhead_marker_is_defined() {
		let host = mount_graph();
		let marker = host.query_selector("defs marker#arrowhead").unwrap().unwrap();

		assert_eq!(attr(&marker, "viewBox"), "-0 -5 10 10");
		assert_eq!(attr(&marker, "refX"), "13");
		assert_eq!(attr(&marker, "refY"), "0");
		assert_eq!(attr(&marker, "orient"), "auto");
		assert_eq!(attr(&marker, "markerWidth"), "13");
		assert_eq!(attr(&marker, "markerHeight"), "13");
		let tip = marker.query_selector("path").unwrap().unwrap();
		assert_eq!(attr(&tip, "fill"), "#999");
	}

	#[wasm_bindgen_test]
	fn links_carry_key_and_arrow_in_sorted_order() {
		let host = mount_graph();
		let links = all(&host, "path.link");

		assert_eq!(links.len(), 2);
		// 0 -> 1 sorts before 1 -> 0; the second link got its position as key
		assert_eq!(attr(&links[0], "data-key"), "1");
		assert_eq!(attr(&links[1], "data-key"), "7");
		assert_eq!(attr(&links[0], "marker-end"), "url(#arrowhead)");
		assert!(attr(&links[0], "d").starts_with('M'));
		assert_eq!(links[1].text_content().unwrap_or_default(), "retry");
	}

	#[wasm_bindgen_test]
	fn labels_point_at_their_invisible_paths() {
		let host = mount_graph();
		let ids: Vec<_> = all(&host, "path.pathInvis").iter().map(|p| attr(p, "id")).collect();
		let hrefs: Vec<_> = all(&host, "text.pathLabel textPath")
			.iter()
			.map(|t| attr(t, "href"))
			.collect();

		assert_eq!(ids, ["invis_0-1-1", "invis_1-1-0"]);
		assert_eq!(hrefs, ["#invis_0-1-1", "#invis_1-1-0"]);
		let label = host.query_selector("textPath").unwrap().unwrap();
		assert_eq!(attr(&label, "startOffset"), "50%");
		assert_eq!(label.text_content().unwrap_or_default(), "go");
	}

	#[wasm_bindgen_test]
	fn node_groups_hold_circle_title_and_caption() {
		let host = mount_graph();
		let groups = all(&host, "g.node");

		assert_eq!(groups.len(), 2);
		let circle = groups[0].query_selector("circle").unwrap().unwrap();
		assert_eq!(attr(&circle, "r"), "5");
		assert_eq!(attr(&circle, "fill"), "#1f77b4");
		let title = groups[0].query_selector("title").unwrap().unwrap();
		assert_eq!(title.text_content().unwrap_or_default(), "0");
		let caption = groups[1].query_selector("text").unwrap().unwrap();
		assert_eq!(attr(&caption, "dy"), "-3");
		assert_eq!(caption.text_content().unwrap_or_default(), "end:b");
		assert!(attr(&groups[1], "transform").starts_with("translate("));
	}
}
