use crate::{
	page::users::{SettingsDraft, SubmitStatus},
	util::web_ext::{CallbackOptExt, InputExt},
};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct SettingsFormProps {
	pub draft: SettingsDraft,
	pub on_user_id: Callback<String>,
	pub on_receive_notifications: Callback<bool>,
	pub on_receive_emails: Callback<bool>,
	pub on_submit: Callback<()>,
}

#[function_component]
pub fn SettingsForm(props: &SettingsFormProps) -> Html {
	let SettingsFormProps {
		draft,
		on_user_id,
		on_receive_notifications,
		on_receive_emails,
		on_submit,
	} = props;
	let onsubmit = on_submit.reform(|event: SubmitEvent| event.prevent_default());
	let on_user_id = on_user_id.reform_some(|event: InputEvent| event.input_value());
	let on_receive_notifications = on_receive_notifications.reform_some(|event: Event| event.input_checked());
	let on_receive_emails = on_receive_emails.reform_some(|event: Event| event.input_checked());
	html! {
		<form class="user-settings" {onsubmit}>
			<input type="number" placeholder="User ID" value={draft.user_id.clone()} oninput={on_user_id} />
			<div class="flags">
				<label>
					<input type="checkbox" checked={draft.receive_notifications} onchange={on_receive_notifications} />
					{"Receive Notifications"}
				</label>
				<label>
					<input type="checkbox" checked={draft.receive_emails} onchange={on_receive_emails} />
					{"Receive Emails"}
				</label>
			</div>
			<button type="submit" disabled={draft.status == SubmitStatus::Submitting}>
				{"Update Settings"}
			</button>
		</form>
	}
}
