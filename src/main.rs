#[cfg(target_family = "wasm")]
fn main() {
	use users_console::{config::Config, App, AppProps};

	// the configured level narrows this once the meta tags are read
	wasm_logger::init(wasm_logger::Config::new(log::Level::Trace));
	let config = Config::load();
	log::set_max_level(config.log_level);
	log::info!(target: "users-console", "using graphql endpoint {}", config.endpoint);
	yew::Renderer::<App>::with_props(AppProps { config }).render();
}

#[cfg(not(target_family = "wasm"))]
fn main() {
	eprintln!("users-console renders in the browser, serve it with `trunk serve`");
}
