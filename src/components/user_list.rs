use crate::data::User;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct UserListProps {
	pub users: Rc<Vec<User>>,
	#[prop_or_default]
	pub reloading: bool,
}

#[function_component]
pub fn UserList(UserListProps { users, reloading }: &UserListProps) -> Html {
	html! {
		<ul class={classes!("user-list", reloading.then_some("is-reloading"))}>
			{for users.iter().map(|user| html! {
				<li key={user.id.0}>{row_label(user)}</li>
			})}
		</ul>
	}
}

/// One line of the list: id, username, and both settings flags.
pub fn row_label(user: &User) -> String {
	let settings = user.settings.as_ref();
	format!(
		"{} - {} | Notifications: {} | Emails: {}",
		user.id,
		user.username,
		flag_label(settings.map(|settings| settings.receive_notifications)),
		flag_label(settings.map(|settings| settings.receive_emails)),
	)
}

/// A user without settings has no value for either flag, which is shown as nothing rather than `false`.
fn flag_label(flag: Option<bool>) -> String {
	flag.map(|flag| flag.to_string()).unwrap_or_default()
}
