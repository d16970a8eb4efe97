use crate::{
	api::{
		users::{CreateUser, CreateUserSettings},
		Error,
	},
	data::{InvalidUserId, User, UserId},
};
use std::rc::Rc;
use yew::Reducible;

#[derive(Debug, Clone, PartialEq)]
pub enum QueryStatus<T, E> {
	Empty,
	Pending,
	Success(T),
	Failed(E),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
	#[default]
	Idle,
	Submitting,
	Succeeded,
	Failed,
}

/// Field values of the create-user form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserDraft {
	pub username: String,
	pub display_name: String,
	pub status: SubmitStatus,
}

impl UserDraft {
	pub fn intent(&self) -> CreateUser {
		CreateUser {
			username: self.username.clone(),
			display_name: self.display_name.clone(),
		}
	}
}

/// Field values of the update-settings form. The user id is kept as typed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SettingsDraft {
	pub user_id: String,
	pub receive_notifications: bool,
	pub receive_emails: bool,
	pub status: SubmitStatus,
}

impl SettingsDraft {
	pub fn intent(&self) -> Result<CreateUserSettings, InvalidUserId> {
		Ok(CreateUserSettings {
			user_id: self.user_id.parse::<UserId>()?,
			receive_notifications: self.receive_notifications,
			receive_emails: self.receive_emails,
		})
	}
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UsersState {
	pub users: QueryStatus<Rc<Vec<User>>, Error>,
	/// A reload is in flight while an older list is still on screen.
	pub reloading: bool,
	/// Generation of the most recently started load. Results of older loads are dropped.
	pub latest_load: u64,
	pub create_user: UserDraft,
	pub settings: SettingsDraft,
	pub clear_form_after_create: bool,
}

impl<T, E> Default for QueryStatus<T, E> {
	fn default() -> Self {
		Self::Empty
	}
}

impl UsersState {
	pub fn new(clear_form_after_create: bool) -> Self {
		Self {
			clear_form_after_create,
			..Default::default()
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
	Username(String),
	DisplayName(String),
	UserId(String),
	ReceiveNotifications(bool),
	ReceiveEmails(bool),
	LoadStarted(u64),
	Loaded(u64, Result<Vec<User>, Error>),
	CreateUser(SubmitStatus),
	UpdateSettings(SubmitStatus),
}

impl Reducible for UsersState {
	type Action = Action;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		let mut state = (*self).clone();
		match action {
			Action::Username(value) => state.create_user.username = value,
			Action::DisplayName(value) => state.create_user.display_name = value,
			Action::UserId(value) => state.settings.user_id = value,
			Action::ReceiveNotifications(value) => state.settings.receive_notifications = value,
			Action::ReceiveEmails(value) => state.settings.receive_emails = value,
			Action::LoadStarted(generation) => {
				state.latest_load = generation;
				// keep showing the old list until the new one arrives
				if matches!(state.users, QueryStatus::Success(_)) {
					state.reloading = true;
				} else {
					state.users = QueryStatus::Pending;
				}
			}
			Action::Loaded(generation, _) if generation != state.latest_load => {
				log::debug!(target: "users", "dropping superseded load {generation}");
			}
			Action::Loaded(_, result) => {
				state.reloading = false;
				state.users = match result {
					Ok(users) => QueryStatus::Success(Rc::new(users)),
					Err(err) => QueryStatus::Failed(err),
				};
			}
			Action::CreateUser(status) => {
				state.create_user.status = status;
				if status == SubmitStatus::Succeeded && state.clear_form_after_create {
					state.create_user.username.clear();
					state.create_user.display_name.clear();
				}
			}
			Action::UpdateSettings(status) => state.settings.status = status,
		}
		match state != *self {
			true => Rc::new(state),
			false => self,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn user(id: i32, username: &str) -> User {
		User {
			id: UserId(id),
			username: username.into(),
			display_name: None,
			settings: None,
		}
	}

	fn apply(state: UsersState, actions: impl IntoIterator<Item = Action>) -> Rc<UsersState> {
		actions
			.into_iter()
			.fold(Rc::new(state), |state, action| state.reduce(action))
	}

	#[test]
	fn first_load_goes_pending_then_loaded() {
		let state = apply(UsersState::default(), [Action::LoadStarted(1)]);
		assert_eq!(state.users, QueryStatus::Pending);
		assert!(!state.reloading);
		let state = state.reduce(Action::Loaded(1, Ok(vec![user(1, "alice")])));
		assert_eq!(state.users, QueryStatus::Success(Rc::new(vec![user(1, "alice")])));
	}

	#[test]
	fn reload_keeps_the_previous_list_visible() {
		let state = apply(
			UsersState::default(),
			[
				Action::LoadStarted(1),
				Action::Loaded(1, Ok(vec![user(1, "alice")])),
				Action::LoadStarted(2),
			],
		);
		assert!(state.reloading);
		assert_eq!(state.users, QueryStatus::Success(Rc::new(vec![user(1, "alice")])));
		let state = state.reduce(Action::Loaded(2, Ok(vec![user(1, "alice"), user(2, "bob")])));
		assert!(!state.reloading);
		assert!(matches!(&state.users, QueryStatus::Success(users) if users.len() == 2));
	}

	#[test]
	fn failed_load_replaces_the_list() {
		let error = Error::Request("connection refused".into());
		let state = apply(
			UsersState::default(),
			[
				Action::LoadStarted(1),
				Action::Loaded(1, Ok(vec![user(1, "alice")])),
				Action::LoadStarted(2),
				Action::Loaded(2, Err(error.clone())),
			],
		);
		assert_eq!(state.users, QueryStatus::Failed(error));
		assert!(!state.reloading);
	}

	#[test]
	fn superseded_load_results_are_dropped() {
		let state = apply(
			UsersState::default(),
			[
				Action::LoadStarted(1),
				Action::Loaded(1, Ok(vec![user(1, "alice")])),
				Action::LoadStarted(2),
				Action::LoadStarted(3),
				Action::Loaded(3, Ok(vec![user(1, "alice"), user(2, "bob")])),
				Action::Loaded(2, Ok(vec![user(1, "alice")])),
			],
		);
		assert!(!state.reloading);
		assert!(matches!(&state.users, QueryStatus::Success(users) if users.len() == 2));
	}

	#[test]
	fn stale_result_keeps_waiting_for_the_latest_load() {
		let state = apply(
			UsersState::default(),
			[
				Action::LoadStarted(1),
				Action::Loaded(1, Ok(vec![user(1, "alice")])),
				Action::LoadStarted(2),
				Action::LoadStarted(3),
				Action::Loaded(2, Err(Error::Request("connection refused".into()))),
			],
		);
		assert!(state.reloading);
		assert_eq!(state.users, QueryStatus::Success(Rc::new(vec![user(1, "alice")])));
	}

	#[test]
	fn created_user_keeps_fields_by_default() {
		let state = apply(
			UsersState::default(),
			[
				Action::Username("alice".into()),
				Action::DisplayName("Alice A".into()),
				Action::CreateUser(SubmitStatus::Submitting),
				Action::CreateUser(SubmitStatus::Succeeded),
			],
		);
		assert_eq!(state.create_user.username, "alice");
		assert_eq!(state.create_user.display_name, "Alice A");
		assert_eq!(state.create_user.status, SubmitStatus::Succeeded);
	}

	#[test]
	fn created_user_clears_fields_when_configured() {
		let state = apply(
			UsersState::new(true),
			[
				Action::Username("alice".into()),
				Action::DisplayName("Alice A".into()),
				Action::CreateUser(SubmitStatus::Succeeded),
			],
		);
		assert_eq!(state.create_user.username, "");
		assert_eq!(state.create_user.display_name, "");
	}

	#[test]
	fn failed_create_keeps_fields_even_when_clearing_is_configured() {
		let state = apply(
			UsersState::new(true),
			[Action::Username("alice".into()), Action::CreateUser(SubmitStatus::Failed)],
		);
		assert_eq!(state.create_user.username, "alice");
	}

	#[test]
	fn unchanged_state_is_not_reallocated() {
		let state = Rc::new(UsersState::default());
		let next = state.clone().reduce(Action::ReceiveEmails(false));
		assert!(Rc::ptr_eq(&state, &next));
	}

	#[test]
	fn settings_intent_parses_the_user_id() {
		let draft = SettingsDraft {
			user_id: "2".into(),
			receive_notifications: false,
			receive_emails: true,
			status: SubmitStatus::Idle,
		};
		assert_eq!(
			draft.intent(),
			Ok(CreateUserSettings {
				user_id: UserId(2),
				receive_notifications: false,
				receive_emails: true,
			})
		);
		let draft = SettingsDraft {
			user_id: "abc".into(),
			..draft
		};
		assert_eq!(draft.intent(), Err(InvalidUserId("abc".into())));
	}
}
