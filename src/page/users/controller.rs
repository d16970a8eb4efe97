use super::{Action, SettingsDraft, SubmitStatus, UserDraft};
use crate::{
	api::{Error, FetchPolicy, UsersApi},
	data::UserId,
};
use std::{cell::Cell, rc::Rc};

/// A message shown to the user once a submit settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
	UserCreated(String),
	CreateUserFailed,
	InvalidUserId,
	SettingsUpdated(UserId),
	UpdateSettingsFailed,
}

impl std::fmt::Display for Notice {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::UserCreated(username) => write!(f, "User Created: {username}"),
			Self::CreateUserFailed => write!(f, "Failed to create user"),
			Self::InvalidUserId => write!(f, "Invalid User ID"),
			Self::SettingsUpdated(user_id) => write!(f, "Settings Updated for User ID: {user_id}"),
			Self::UpdateSettingsFailed => write!(f, "Failed to update user settings"),
		}
	}
}

/// Runs the reads and writes of the users page.
///
/// State changes go out through `dispatch`, user facing messages through `notify`.
/// After a write succeeds the list is reloaded from the network before the call returns.
/// Every load is numbered so the state can drop results that a later load has superseded.
pub struct Controller<A> {
	api: A,
	dispatch: Rc<dyn Fn(Action)>,
	notify: Rc<dyn Fn(Notice)>,
	loads: Rc<Cell<u64>>,
}

impl<A: Clone> Clone for Controller<A> {
	fn clone(&self) -> Self {
		Self {
			api: self.api.clone(),
			dispatch: self.dispatch.clone(),
			notify: self.notify.clone(),
			loads: self.loads.clone(),
		}
	}
}

impl<A> Controller<A>
where
	A: UsersApi,
{
	pub fn new(api: A, dispatch: impl Fn(Action) + 'static, notify: impl Fn(Notice) + 'static) -> Self {
		Self {
			api,
			dispatch: Rc::new(dispatch),
			notify: Rc::new(notify),
			loads: Rc::new(Cell::new(0)),
		}
	}

	pub async fn load(&self, policy: FetchPolicy) -> Result<(), Error> {
		let generation = self.loads.get() + 1;
		self.loads.set(generation);
		(self.dispatch)(Action::LoadStarted(generation));
		let result = self.api.get_users(policy).await;
		let outcome = result.as_ref().map(|_| ()).map_err(Clone::clone);
		(self.dispatch)(Action::Loaded(generation, result));
		outcome
	}

	pub async fn reload(&self) -> Result<(), Error> {
		log::debug!(target: "users", "reloading users");
		self.load(FetchPolicy::NetworkOnly).await
	}

	pub async fn create_user(&self, draft: &UserDraft) -> Result<(), Error> {
		(self.dispatch)(Action::CreateUser(SubmitStatus::Submitting));
		let created = match self.api.create_user(draft.intent()).await {
			Ok(created) => created,
			Err(err) => {
				(self.dispatch)(Action::CreateUser(SubmitStatus::Failed));
				(self.notify)(Notice::CreateUserFailed);
				return Err(err);
			}
		};
		log::info!(target: "users", "created user {} ({})", created.username, created.id);
		(self.dispatch)(Action::CreateUser(SubmitStatus::Succeeded));
		(self.notify)(Notice::UserCreated(created.username));
		self.reload().await
	}

	/// An unparsable user id only produces a notice, nothing is sent.
	pub async fn update_settings(&self, draft: &SettingsDraft) -> Result<(), Error> {
		let intent = match draft.intent() {
			Ok(intent) => intent,
			Err(err) => {
				log::debug!(target: "users", "{err}");
				(self.notify)(Notice::InvalidUserId);
				return Ok(());
			}
		};
		(self.dispatch)(Action::UpdateSettings(SubmitStatus::Submitting));
		let settings = match self.api.create_user_settings(intent).await {
			Ok(settings) => settings,
			Err(err) => {
				(self.dispatch)(Action::UpdateSettings(SubmitStatus::Failed));
				(self.notify)(Notice::UpdateSettingsFailed);
				return Err(err);
			}
		};
		log::info!(target: "users", "updated settings of user {}", settings.user_id);
		(self.dispatch)(Action::UpdateSettings(SubmitStatus::Succeeded));
		(self.notify)(Notice::SettingsUpdated(settings.user_id));
		self.reload().await
	}
}
