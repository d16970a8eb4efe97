use yew::prelude::*;

pub mod api;
pub mod components;
pub mod config;
pub mod data;
pub mod hooks;
pub mod page;
pub mod response;
pub mod util;

#[derive(Clone, PartialEq, Properties)]
pub struct AppProps {
	pub config: config::Config,
}

#[function_component]
pub fn App(AppProps { config }: &AppProps) -> Html {
	html! {
		<api::Provider config={config.clone()}>
			<page::users::Users />
		</api::Provider>
	}
}
