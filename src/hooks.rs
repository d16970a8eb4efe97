use crate::{
	api::{Client, FetchPolicy},
	page::users::{Controller, UsersState},
	util::{alert, spawn_local},
};
use yew::prelude::*;
use yew_hooks::use_mount;

/// Holds the users page state and a controller bound to it.
/// The list is loaded once when the page mounts, and reloaded by the controller after each successful write.
#[hook]
pub fn use_users_controller(
	client: Client,
	clear_form_after_create: bool,
) -> (UseReducerHandle<UsersState>, Controller<Client>) {
	let state = use_reducer(move || UsersState::new(clear_form_after_create));
	// one controller per client, so every load draws from the same generation counter
	let controller = use_memo(client, {
		let dispatcher = state.dispatcher();
		move |client| Controller::new(client.clone(), move |action| dispatcher.dispatch(action), |notice| alert(notice))
	});
	let controller = (*controller).clone();
	use_mount({
		let controller = controller.clone();
		move || {
			spawn_local("users", async move { controller.load(FetchPolicy::CacheFirst).await });
		}
	});
	(state, controller)
}
