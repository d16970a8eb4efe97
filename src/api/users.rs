use super::graphql::{Client, Error, FetchPolicy, Operation, OperationKind, Transport};
use crate::data::{CreatedUser, Settings, User, UserId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Every user along with their settings, if any.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GetUsers {}
impl Operation for GetUsers {
	type Output = GetUsersData;
	const KIND: OperationKind = OperationKind::Query;
	const NAME: &'static str = "GetUsers";
	const DOCUMENT: &'static str = r#"query GetUsers {
  getUsers {
    id
    username
    settings {
      userId
      receiveEmails
      receiveNotifications
    }
  }
}"#;
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetUsersData {
	pub get_users: Vec<User>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
	pub username: String,
	pub display_name: String,
}
impl Operation for CreateUser {
	type Output = CreateUserData;
	const KIND: OperationKind = OperationKind::Mutation;
	const NAME: &'static str = "CreateUser";
	const DOCUMENT: &'static str = r#"mutation CreateUser($username: String!, $displayName: String!) {
  createUser(
    createdUserData: {
      username: $username
      displayName: $displayName
    }
  ) {
    id
    username
    displayName
  }
}"#;
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserData {
	pub create_user: CreatedUser,
}

/// Creates or replaces the settings of a user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserSettings {
	pub user_id: UserId,
	pub receive_notifications: bool,
	pub receive_emails: bool,
}
impl Operation for CreateUserSettings {
	type Output = CreateUserSettingsData;
	const KIND: OperationKind = OperationKind::Mutation;
	const NAME: &'static str = "CreateUserSettings";
	const DOCUMENT: &'static str = r#"mutation CreateUserSettings($userId: Int!, $receiveNotifications: Boolean!, $receiveEmails: Boolean!) {
  createUserSettings(
    createUserSettingData: {
      userId: $userId
      receiveNotifications: $receiveNotifications
      receiveEmails: $receiveEmails
    }
  ) {
    userId
    receiveNotifications
    receiveEmails
  }
}"#;
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserSettingsData {
	pub create_user_settings: Settings,
}

/// The reads and writes the users page needs from the server.
#[async_trait(?Send)]
pub trait UsersApi {
	async fn get_users(&self, policy: FetchPolicy) -> Result<Vec<User>, Error>;
	async fn create_user(&self, input: CreateUser) -> Result<CreatedUser, Error>;
	async fn create_user_settings(&self, input: CreateUserSettings) -> Result<Settings, Error>;
}

#[async_trait(?Send)]
impl<T> UsersApi for Client<T>
where
	T: Transport,
{
	async fn get_users(&self, policy: FetchPolicy) -> Result<Vec<User>, Error> {
		let data = self.query(&GetUsers {}, policy).await?;
		log::debug!(target: "graphql", "received {} users", data.get_users.len());
		Ok(data.get_users)
	}

	async fn create_user(&self, input: CreateUser) -> Result<CreatedUser, Error> {
		Ok(self.mutate(&input).await?.create_user)
	}

	async fn create_user_settings(&self, input: CreateUserSettings) -> Result<Settings, Error> {
		Ok(self.mutate(&input).await?.create_user_settings)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::api::graphql::{Envelope, Request};
	use futures::executor::block_on;
	use serde_json::json;

	struct EchoServer {
		data: serde_json::Value,
	}

	#[async_trait(?Send)]
	impl Transport for EchoServer {
		async fn execute(&self, _request: &Request) -> Result<Envelope, Error> {
			Ok(Envelope {
				data: Some(self.data.clone()),
				errors: None,
			})
		}
	}

	fn client(data: serde_json::Value) -> Client<EchoServer> {
		Client::with_transport(EchoServer { data })
	}

	#[test]
	fn documents_name_their_operations() {
		assert!(GetUsers::DOCUMENT.starts_with("query GetUsers {"));
		assert!(CreateUser::DOCUMENT.starts_with("mutation CreateUser("));
		assert!(CreateUserSettings::DOCUMENT.starts_with("mutation CreateUserSettings("));
		assert!(CreateUserSettings::DOCUMENT.contains("createUserSettingData: {"));
	}

	#[test]
	fn create_user_variables_are_camel_case() {
		let request = Request::new(&CreateUser {
			username: "alice".into(),
			display_name: "Alice A".into(),
		})
		.unwrap();
		assert_eq!(request.operation_name, "CreateUser");
		assert_eq!(request.variables, json!({"username": "alice", "displayName": "Alice A"}));
	}

	#[test]
	fn settings_variables_carry_an_int_user_id() {
		let request = Request::new(&CreateUserSettings {
			user_id: UserId(2),
			receive_notifications: false,
			receive_emails: true,
		})
		.unwrap();
		assert_eq!(
			request.variables,
			json!({"userId": 2, "receiveNotifications": false, "receiveEmails": true})
		);
	}

	#[test]
	fn get_users_unwraps_the_list() {
		let client = client(json!({
			"getUsers": [
				{"id": 1, "username": "alice", "settings": {"userId": 1, "receiveEmails": true, "receiveNotifications": false}},
				{"id": 2, "username": "bob", "settings": null},
			]
		}));
		let users = block_on(client.get_users(FetchPolicy::CacheFirst)).unwrap();
		assert_eq!(users.len(), 2);
		assert_eq!(users[0].username, "alice");
		assert!(users[0].settings.unwrap().receive_emails);
		assert_eq!(users[1].settings, None);
	}

	#[test]
	fn create_user_returns_the_echo() {
		let client = client(json!({"createUser": {"id": 1, "username": "alice", "displayName": "Alice A"}}));
		let created = block_on(client.create_user(CreateUser {
			username: "alice".into(),
			display_name: "Alice A".into(),
		}))
		.unwrap();
		assert_eq!(created.id, UserId(1));
		assert_eq!(created.display_name.as_deref(), Some("Alice A"));
	}

	#[test]
	fn create_user_settings_returns_the_echo() {
		let client = client(json!({
			"createUserSettings": {"userId": 2, "receiveNotifications": false, "receiveEmails": true}
		}));
		let settings = block_on(client.create_user_settings(CreateUserSettings {
			user_id: UserId(2),
			receive_notifications: false,
			receive_emails: true,
		}))
		.unwrap();
		assert_eq!(settings.user_id, UserId(2));
		assert!(settings.receive_emails);
	}
}
