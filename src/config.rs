use std::str::FromStr;

pub static DEFAULT_ENDPOINT: &str = "http://localhost:5000/graphql";
static META_PREFIX: &str = "users-console:";
static META_KEYS: [&str; 3] = ["endpoint", "clear-form-after-create", "log-level"];

/// Settings for a single page session.
///
/// Values come from `<meta name="users-console:KEY" content="VALUE">` tags on the host page,
/// anything missing or invalid keeps its default.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
	/// The GraphQL endpoint every request is posted to.
	pub endpoint: String,
	/// Whether the create-user form is emptied after the server accepts a new user.
	pub clear_form_after_create: bool,
	pub log_level: log::LevelFilter,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			endpoint: DEFAULT_ENDPOINT.to_owned(),
			clear_form_after_create: false,
			log_level: log::LevelFilter::Info,
		}
	}
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
	#[error("unknown config key {0:?}")]
	UnknownKey(String),
	#[error("invalid endpoint {0:?}: {1}")]
	InvalidEndpoint(String, String),
	#[error("invalid value {1:?} for {0}")]
	InvalidValue(&'static str, String),
}

impl Config {
	/// Reads the config from the meta tags of the current document.
	pub fn load() -> Self {
		let mut config = Self::default();
		let document = gloo_utils::document();
		for key in META_KEYS {
			let selector = format!("meta[name=\"{META_PREFIX}{key}\"]");
			let Ok(Some(element)) = document.query_selector(&selector) else {
				continue;
			};
			let Some(value) = element.get_attribute("content") else {
				continue;
			};
			if let Err(err) = config.set(key, &value) {
				log::warn!(target: "config", "{err}");
			}
		}
		config
	}

	pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
		let value = value.trim();
		match key {
			"endpoint" => {
				let invalid = |reason: String| ConfigError::InvalidEndpoint(value.to_owned(), reason);
				let url = url::Url::parse(value).map_err(|err| invalid(err.to_string()))?;
				if !matches!(url.scheme(), "http" | "https") {
					return Err(invalid(format!("unsupported scheme {}", url.scheme())));
				}
				self.endpoint = url.to_string();
			}
			"clear-form-after-create" => {
				self.clear_form_after_create = bool::from_str(value)
					.map_err(|_| ConfigError::InvalidValue("clear-form-after-create", value.to_owned()))?;
			}
			"log-level" => {
				self.log_level = log::LevelFilter::from_str(value)
					.map_err(|_| ConfigError::InvalidValue("log-level", value.to_owned()))?;
			}
			_ => return Err(ConfigError::UnknownKey(key.to_owned())),
		}
		Ok(())
	}
}
