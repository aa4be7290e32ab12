use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Document, DomRect, MouseEvent, ResizeObserver, Window};

use super::anchor::{AnchorResolver, ElementBounds, Rect};
use super::graph::WorkflowGraph;
use super::highlight::{Highlight, NodeEmphasis};
use super::render::{ConnectorPath, connector_path};
use super::state::HoverState;
use super::theme::{ArrowStyle, EdgePalette, ResizeAction};
use super::types::{CardVariant, Layout, Placement, WorkflowNode};

/// Element rectangles measured from the live DOM, relative to the diagram root.
struct DomBounds {
	document: Document,
	origin: DomRect,
}

impl ElementBounds for DomBounds {
	fn bounds(&self, element_id: &str) -> Option<Rect> {
		let rect = self
			.document
			.get_element_by_id(element_id)?
			.get_bounding_client_rect();
		Some(Rect::new(
			rect.left() - self.origin.left(),
			rect.top() - self.origin.top(),
			rect.width(),
			rect.height(),
		))
	}
}

fn viewport_width() -> Option<f64> {
	web_sys::window()
		.and_then(|w| w.inner_width().ok())
		.and_then(|w| w.as_f64())
}

/// DOM listeners that keep the connectors in step with the layout.
struct LayoutWatch {
	window: Window,
	on_resize: Closure<dyn FnMut()>,
	observer: Option<ResizeObserver>,
	_on_observe: Closure<dyn FnMut()>,
}

impl LayoutWatch {
	fn detach(self) {
		if let Err(e) = self
			.window
			.remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref())
		{
			warn!("failed to remove resize listener: {e:?}");
		}
		if let Some(observer) = &self.observer {
			observer.disconnect();
		}
	}
}

/// Reactive handles shared by every node view of one diagram.
#[derive(Clone, Copy)]
struct DiagramContext {
	graph: StoredValue<WorkflowGraph>,
	hover: RwSignal<HoverState>,
	highlight: Memo<Highlight>,
}

impl DiagramContext {
	fn class_for(&self, base: &str, node: &WorkflowNode) -> String {
		let emphasis = self
			.graph
			.with_value(|g| self.highlight.with(|h| h.emphasis(g, node.id.as_str())));
		let emphasis = match emphasis {
			NodeEmphasis::Active => " is-active",
			NodeEmphasis::Muted => " is-muted",
			NodeEmphasis::Normal => "",
		};
		let variant = match node.variant {
			CardVariant::Default => "",
			CardVariant::Compact => " is-compact",
			CardVariant::Feedback => " is-feedback",
		};
		format!("{base}{variant}{emphasis}")
	}
}

#[component]
pub fn WorkflowDiagram(
	graph: WorkflowGraph,
	#[prop(default = ArrowStyle::default())] arrow_style: ArrowStyle,
	#[prop(default = EdgePalette::default())] palette: EdgePalette,
) -> impl IntoView {
	let graph = StoredValue::new(graph);
	let hover = RwSignal::new(HoverState::default());
	let layout = RwSignal::new(
		viewport_width()
			.map(Layout::for_viewport_width)
			.unwrap_or_default(),
	);
	let connectors = RwSignal::new(Vec::<Option<ConnectorPath>>::new());
	let highlight = Memo::new(move |_| {
		hover.with(|state| graph.with_value(|g| Highlight::compute(g, state.hovered())))
	});
	let ctx = DiagramContext {
		graph,
		hover,
		highlight,
	};

	let root_ref = NodeRef::<leptos::html::Div>::new();
	let watch = StoredValue::new_local(None::<LayoutWatch>);

	let measure = move || {
		let Some(root) = root_ref.get_untracked() else {
			return;
		};
		let Some(document) = web_sys::window().and_then(|w| w.document()) else {
			return;
		};
		let bounds = DomBounds {
			document,
			origin: root.get_bounding_client_rect(),
		};
		let current = layout.get_untracked();
		let paths: Vec<_> = graph.with_value(|g| {
			AnchorResolver::new(&bounds)
				.resolve_all(g, current)
				.into_iter()
				.map(|c| c.and_then(|c| connector_path(&c, &arrow_style)))
				.collect()
		});
		debug!(
			"measured {} of {} connectors ({current:?})",
			paths.iter().flatten().count(),
			paths.len()
		);
		connectors.set(paths);
	};

	Effect::new(move |_| {
		// Re-measure once the rows for a new layout have been rendered.
		layout.track();
		let Some(root) = root_ref.get() else {
			return;
		};
		measure();

		if watch.with_value(Option::is_some) {
			return;
		}
		let Some(window) = web_sys::window() else {
			return;
		};
		let on_resize = Closure::<dyn FnMut()>::new(move || {
			let Some(width) = viewport_width() else {
				measure();
				return;
			};
			match ResizeAction::for_viewport(layout.get_untracked(), width) {
				ResizeAction::Remeasure => measure(),
				ResizeAction::Switch(next) => {
					debug!("layout switched to {next:?}");
					// Views of the old layout are dropped without a pointer-leave.
					hover.set(HoverState::Idle);
					layout.set(next);
				}
			}
		});
		if let Err(e) =
			window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
		{
			warn!("failed to add resize listener: {e:?}");
		}

		// Reflow (scrollbars, fonts, re-slotted rows) resizes the diagram
		// without a window resize event.
		let on_observe = Closure::<dyn FnMut()>::new(measure);
		let observer = match ResizeObserver::new(on_observe.as_ref().unchecked_ref()) {
			Ok(observer) => {
				observer.observe(&root);
				Some(observer)
			}
			Err(e) => {
				warn!("ResizeObserver unavailable, connectors follow window resizes only: {e:?}");
				None
			}
		};

		watch.set_value(Some(LayoutWatch {
			window,
			on_resize,
			observer,
			_on_observe: on_observe,
		}));
	});

	on_cleanup(move || {
		if let Some(Some(watch)) = watch.try_update_value(Option::take) {
			watch.detach();
		}
	});

	let stroke_width = arrow_style.stroke_width.to_string();
	let draw_connectors = move || {
		let highlight = highlight.get();
		connectors
			.get()
			.into_iter()
			.enumerate()
			.filter_map(|(i, path)| {
				let path = path?;
				let color = palette.color(highlight.is_edge_active(i), highlight.is_hovering());
				Some(view! {
					<g class="workflow-connector">
						<path d=path.line fill="none" stroke=color stroke-width=stroke_width.clone() />
						<polygon points=path.head fill=color />
					</g>
				})
			})
			.collect_view()
	};

	view! {
		<div
			node_ref=root_ref
			class=move || {
				if hover.with(HoverState::is_idle) {
					"workflow-diagram"
				} else {
					"workflow-diagram is-hovering"
				}
			}
			style="position: relative;"
		>
			{move || {
				(layout.get() == Layout::Desktop)
					.then(|| row_view(Placement::Above, "workflow-row workflow-row-above", ctx))
			}}
			{row_view(Placement::Flow, "workflow-row workflow-row-flow", ctx)}
			{move || {
				(layout.get() == Layout::Mobile)
					.then(|| row_view(Placement::Above, "workflow-row workflow-row-below", ctx))
			}}
			{row_view(Placement::Below, "workflow-row workflow-row-below", ctx)}
			<svg
				class="workflow-connectors"
				style="position: absolute; inset: 0; width: 100%; height: 100%; pointer-events: none; overflow: visible;"
			>
				{draw_connectors}
			</svg>
		</div>
	}
}

fn row_view(placement: Placement, class: &'static str, ctx: DiagramContext) -> impl IntoView {
	let nodes: Vec<WorkflowNode> = ctx
		.graph
		.with_value(|g| g.top_level(placement).cloned().collect());
	view! {
		<div class=class>
			{nodes
				.into_iter()
				.map(|node| {
					if ctx.graph.with_value(|g| g.is_container(node.id.as_str())) {
						view! { <ContainerCard node=node ctx=ctx /> }.into_any()
					} else {
						view! { <NodeCard node=node ctx=ctx /> }.into_any()
					}
				})
				.collect_view()}
		</div>
	}
}

fn hover_handlers(
	node: &WorkflowNode,
	hover: RwSignal<HoverState>,
) -> (impl Fn(MouseEvent) + 'static, impl Fn(MouseEvent) + 'static) {
	let (enter_id, leave_id) = (node.id.clone(), node.id.clone());
	let on_enter = move |_: MouseEvent| hover.update(|h| h.enter(enter_id.clone()));
	let on_leave = move |_: MouseEvent| {
		hover.maybe_update(|h| h.leave(&leave_id));
	};
	(on_enter, on_leave)
}

#[component]
fn NodeCard(node: WorkflowNode, ctx: DiagramContext) -> impl IntoView {
	let (on_enter, on_leave) = hover_handlers(&node, ctx.hover);
	let class = {
		let node = node.clone();
		move || ctx.class_for("workflow-card", &node)
	};
	let WorkflowNode {
		id,
		title,
		icon,
		description,
		inputs,
		outputs,
		tip,
		..
	} = node;

	view! {
		<div
			id=id.to_string()
			class=class
			title=tip
			on:mouseenter=on_enter
			on:mouseleave=on_leave
		>
			<div class="card-header">
				{icon.map(|icon| view! { <span class="card-icon">{icon.glyph()}</span> })}
				<h4 class="card-title">{title}</h4>
			</div>
			{description.map(|text| view! { <p class="card-description">{text}</p> })}
			<ListSection label="Input" items=inputs />
			<ListSection label="Output" items=outputs />
		</div>
	}
}

#[component]
fn ContainerCard(node: WorkflowNode, ctx: DiagramContext) -> impl IntoView {
	let (on_enter, on_leave) = hover_handlers(&node, ctx.hover);
	let members: Vec<WorkflowNode> = ctx.graph.with_value(|g| {
		g.members(node.id.as_str())
			.iter()
			.filter_map(|id| g.node(id.as_str()).cloned())
			.collect()
	});
	let class = {
		let node = node.clone();
		move || ctx.class_for("workflow-container", &node)
	};

	view! {
		<div
			id=node.id.to_string()
			class=class
			on:mouseenter=on_enter
			on:mouseleave=on_leave
		>
			<h3 class="container-title">{node.title}</h3>
			<div class="container-members">
				{members.into_iter().map(|node| view! { <NodeCard node=node ctx=ctx /> }).collect_view()}
			</div>
		</div>
	}
}

#[component]
fn ListSection(label: &'static str, items: Vec<String>) -> impl IntoView {
	(!items.is_empty()).then(move || {
		view! {
			<div class="card-list">
				<div class="card-list-label">{label}</div>
				{items
					.into_iter()
					.map(|item| view! { <div class="card-list-item">{item}</div> })
					.collect_view()}
			</div>
		}
	})
}
