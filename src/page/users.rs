use crate::{
	api::Client,
	components::{CreateUserForm, SettingsForm, UserList},
	config::Config,
	hooks::use_users_controller,
	util::spawn_local,
};
use yew::prelude::*;

mod controller;
pub use controller::*;
mod state;
pub use state::*;

/// The whole screen: the user list and both forms.
#[function_component]
pub fn Users() -> Html {
	let config = use_context::<Config>().unwrap_or_default();
	match use_context::<Client>() {
		Some(client) => html! {
			<UsersPage {client} clear_form_after_create={config.clear_form_after_create} />
		},
		None => {
			log::error!(target: "users", "no graphql client in context");
			html!(<p>{"Error: GraphQL client is not available"}</p>)
		}
	}
}

#[derive(Clone, PartialEq, Properties)]
struct UsersPageProps {
	client: Client,
	clear_form_after_create: bool,
}

#[function_component]
fn UsersPage(props: &UsersPageProps) -> Html {
	let (state, controller) = use_users_controller(props.client.clone(), props.clear_form_after_create);

	let dispatch = |make: fn(String) -> Action| {
		let state = state.clone();
		Callback::from(move |value: String| state.dispatch(make(value)))
	};
	let toggle = |make: fn(bool) -> Action| {
		let state = state.clone();
		Callback::from(move |value: bool| state.dispatch(make(value)))
	};

	let on_create_user = {
		let state = state.clone();
		let controller = controller.clone();
		Callback::from(move |()| {
			let draft = state.create_user.clone();
			let controller = controller.clone();
			spawn_local("users", async move { controller.create_user(&draft).await });
		})
	};
	let on_update_settings = {
		let state = state.clone();
		let controller = controller.clone();
		Callback::from(move |()| {
			let draft = state.settings.clone();
			let controller = controller.clone();
			spawn_local("users", async move { controller.update_settings(&draft).await });
		})
	};

	let users = match &state.users {
		QueryStatus::Empty | QueryStatus::Pending => return html!(<p>{"Loading..."}</p>),
		QueryStatus::Failed(err) => return html!(<p>{format!("Error: {err}")}</p>),
		QueryStatus::Success(users) => users.clone(),
	};
	html! {
		<div class="users-page">
			<h1>{"Manage Users"}</h1>
			<section class="user-list">
				<h2>{"User List"}</h2>
				<UserList {users} reloading={state.reloading} />
			</section>
			<section>
				<h2>{"Create User"}</h2>
				<CreateUserForm
					draft={state.create_user.clone()}
					on_username={dispatch(Action::Username)}
					on_display_name={dispatch(Action::DisplayName)}
					on_submit={on_create_user}
				/>
			</section>
			<section>
				<h2>{"Update User Settings"}</h2>
				<SettingsForm
					draft={state.settings.clone()}
					on_user_id={dispatch(Action::UserId)}
					on_receive_notifications={toggle(Action::ReceiveNotifications)}
					on_receive_emails={toggle(Action::ReceiveEmails)}
					on_submit={on_update_settings}
				/>
			</section>
		</div>
	}
}
