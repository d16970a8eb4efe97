use super::Settings;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Server assigned identifier of a user (a GraphQL `Int`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i32);

impl std::fmt::Display for UserId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid User ID: {0:?}")]
pub struct InvalidUserId(pub String);

impl FromStr for UserId {
	type Err = InvalidUserId;

	/// Reads the integer prefix of the input: leading whitespace, an optional sign, then digits.
	/// Trailing characters after the digits are ignored.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let invalid = || InvalidUserId(s.to_owned());
		let trimmed = s.trim_start();
		let (negative, unsigned) = match trimmed.strip_prefix('-') {
			Some(rest) => (true, rest),
			None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
		};
		let end = unsigned.find(|c: char| !c.is_ascii_digit()).unwrap_or(unsigned.len());
		let digits = &unsigned[..end];
		if digits.is_empty() {
			return Err(invalid());
		}
		let magnitude = digits.parse::<i64>().map_err(|_| invalid())?;
		let value = if negative { -magnitude } else { magnitude };
		i32::try_from(value).map(Self).map_err(|_| invalid())
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
	pub id: UserId,
	pub username: String,
	#[serde(default)]
	pub display_name: Option<String>,
	#[serde(default)]
	pub settings: Option<Settings>,
}

/// The fields the server echoes back after creating a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedUser {
	pub id: UserId,
	pub username: String,
	#[serde(default)]
	pub display_name: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_plain_ids() {
		assert_eq!("2".parse::<UserId>(), Ok(UserId(2)));
		assert_eq!("  42".parse::<UserId>(), Ok(UserId(42)));
		assert_eq!("-3".parse::<UserId>(), Ok(UserId(-3)));
		assert_eq!("+7".parse::<UserId>(), Ok(UserId(7)));
	}

	#[test]
	fn parses_integer_prefix() {
		assert_eq!("12abc".parse::<UserId>(), Ok(UserId(12)));
		assert_eq!("1.5".parse::<UserId>(), Ok(UserId(1)));
	}

	#[test]
	fn rejects_non_numeric_ids() {
		for input in ["abc", "", "   ", "-", "+-1", "x1"] {
			assert_eq!(input.parse::<UserId>(), Err(InvalidUserId(input.to_owned())), "{input:?}");
		}
	}

	#[test]
	fn rejects_ids_outside_graphql_int() {
		assert!("2147483648".parse::<UserId>().is_err());
		assert!("99999999999999999999".parse::<UserId>().is_err());
		assert_eq!("-2147483648".parse::<UserId>(), Ok(UserId(i32::MIN)));
	}

	#[test]
	fn decodes_user_without_settings() {
		let user: User = serde_json::from_str(r#"{"id":3,"username":"carol","settings":null}"#).unwrap();
		assert_eq!(user.id, UserId(3));
		assert_eq!(user.display_name, None);
		assert_eq!(user.settings, None);
	}

	#[test]
	fn decodes_nested_settings() {
		let user: User = serde_json::from_str(
			r#"{"id":1,"username":"alice","settings":{"userId":1,"receiveEmails":true,"receiveNotifications":false}}"#,
		)
		.unwrap();
		assert_eq!(
			user.settings,
			Some(Settings {
				user_id: UserId(1),
				receive_emails: true,
				receive_notifications: false,
			})
		);
	}
}
