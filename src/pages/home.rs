use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use log::error;

use crate::components::workflow::{WorkflowDiagram, learning_workflow};

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	// `?presentation=true` switches to the full-screen slide styling.
	let query = use_query_map();
	let presentation = move || query.with(|q| q.get("presentation").as_deref() == Some("true"));

	let diagram = learning_workflow()
		.inspect_err(|e| error!("workflow definition rejected: {e}"))
		.map(|graph| view! { <WorkflowDiagram graph=graph /> });

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

			<main class=move || if presentation() { "home presentation-mode" } else { "home" }>
				<section id="workflow" class="workflow-section">
					<h2>"The Learning Design Workflow"</h2>
					<p class="subtitle">"Hover a step to see what it feeds into."</p>
					{diagram}
				</section>
			</main>
		</ErrorBoundary>
	}
}
