use super::UserId;
use serde::{Deserialize, Serialize};

/// Notification preferences of a single user, keyed by the owner's id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
	pub user_id: UserId,
	pub receive_emails: bool,
	pub receive_notifications: bool,
}
