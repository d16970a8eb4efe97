use reqwest::{RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

/// A request that has not been sent yet, whose body decodes into `T` once it is.
pub struct Response<T> {
	builder: RequestBuilder,
	marker: std::marker::PhantomData<T>,
}
impl<T> std::fmt::Debug for Response<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.builder.fmt(f)
	}
}
impl<T> Response<T>
where
	T: DeserializeOwned,
{
	pub fn from(builder: RequestBuilder) -> Self {
		Self {
			builder,
			marker: Default::default(),
		}
	}

	pub fn with_json<Q>(mut self, json: &Q) -> Self
	where
		Q: Serialize + ?Sized,
	{
		self.builder = self.builder.json(json);
		self
	}

	pub async fn send(self) -> anyhow::Result<T> {
		let response: reqwest::Response = self.builder.send().await?;
		let status = response.status();
		let text = response.text().await?;
		decode_body(status, text)
	}
}

/// GraphQL servers answer some failures with a 4xx status and a regular json body,
/// so the status only matters when the body is unreadable.
pub fn decode_body<T: DeserializeOwned>(status: StatusCode, text: String) -> anyhow::Result<T> {
	match serde_json::from_str(&text) {
		Ok(data) => Ok(data),
		Err(_) if !status.is_success() => Err(UnexpectedStatus(status.as_u16(), text).into()),
		Err(err) => Err(InvalidJson(text, err).into()),
	}
}

#[derive(thiserror::Error, Debug)]
pub struct InvalidJson(pub String, pub serde_json::Error);
impl std::fmt::Display for InvalidJson {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Invalid json: {:?}\nError: {:?}", self.0, self.1)
	}
}

#[derive(thiserror::Error, Debug)]
#[error("Unexpected status {0}: {1:?}")]
pub struct UnexpectedStatus(pub u16, pub String);
