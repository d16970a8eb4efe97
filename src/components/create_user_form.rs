use crate::{
	page::users::{SubmitStatus, UserDraft},
	util::web_ext::{CallbackOptExt, InputExt},
};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct CreateUserFormProps {
	pub draft: UserDraft,
	pub on_username: Callback<String>,
	pub on_display_name: Callback<String>,
	pub on_submit: Callback<()>,
}

#[function_component]
pub fn CreateUserForm(props: &CreateUserFormProps) -> Html {
	let CreateUserFormProps {
		draft,
		on_username,
		on_display_name,
		on_submit,
	} = props;
	let onsubmit = on_submit.reform(|event: SubmitEvent| event.prevent_default());
	let on_username = on_username.reform_some(|event: InputEvent| event.input_value());
	let on_display_name = on_display_name.reform_some(|event: InputEvent| event.input_value());
	html! {
		<form class="create-user" {onsubmit}>
			<input type="text" placeholder="Username" value={draft.username.clone()} oninput={on_username} />
			<input type="text" placeholder="Display Name" value={draft.display_name.clone()} oninput={on_display_name} />
			<button type="submit" disabled={draft.status == SubmitStatus::Submitting}>
				{"Create User"}
			</button>
		</form>
	}
}
