use crate::config::Config;
use yew::prelude::*;

pub mod cache;
pub mod graphql;
pub use graphql::{Client, Error, FetchPolicy};
pub mod users;
pub use users::UsersApi;

#[derive(Clone, PartialEq, Properties)]
pub struct ProviderProps {
	pub config: Config,
	#[prop_or_default]
	pub children: Html,
}

/// Creates the one GraphQL client of the page and shares it, alongside the config, with every child.
/// The client (and its response cache) lives as long as the page does.
#[function_component]
pub fn Provider(ProviderProps { config, children }: &ProviderProps) -> Html {
	let client = use_memo((), {
		let config = config.clone();
		move |_| {
			log::debug!(target: "graphql", "creating client for {}", config.endpoint);
			Client::new(&config)
		}
	});
	html! {
		<ContextProvider<Config> context={config.clone()}>
			<ContextProvider<Client> context={(*client).clone()}>
				{children.clone()}
			</ContextProvider<Client>>
		</ContextProvider<Config>>
	}
}
