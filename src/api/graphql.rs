use super::cache::{Cache, CacheKey};
use crate::{
	config::Config,
	response::{InvalidJson, Response},
};
use async_trait::async_trait;
use itertools::Itertools;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{cell::RefCell, rc::Rc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
	Query,
	Mutation,
}

/// A fixed GraphQL document. The implementing type serializes into the document's variables.
pub trait Operation: Serialize {
	type Output: DeserializeOwned;
	const KIND: OperationKind;
	const NAME: &'static str;
	const DOCUMENT: &'static str;
}

/// Body of a GraphQL-over-HTTP POST.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
	pub query: &'static str,
	pub operation_name: &'static str,
	pub variables: serde_json::Value,
}

impl Request {
	pub fn new<O: Operation>(operation: &O) -> Result<Self, Error> {
		let variables = serde_json::to_value(operation).map_err(|err| Error::Encode {
			operation: O::NAME,
			reason: err.to_string(),
		})?;
		Ok(Self {
			query: O::DOCUMENT,
			operation_name: O::NAME,
			variables,
		})
	}
}

/// Body of a GraphQL-over-HTTP response.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Envelope {
	#[serde(default)]
	pub data: Option<serde_json::Value>,
	#[serde(default)]
	pub errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphqlError {
	pub message: String,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
	#[error("{0}")]
	Request(String),
	#[error("Invalid json response: {body:?} ({reason})")]
	InvalidJson { body: String, reason: String },
	#[error("{}", join_messages(.0))]
	Graphql(Vec<GraphqlError>),
	#[error("response contained neither data nor errors")]
	MissingData,
	#[error("failed to encode {operation} variables: {reason}")]
	Encode { operation: &'static str, reason: String },
	#[error("failed to decode {operation} data: {reason}")]
	Decode { operation: &'static str, reason: String },
}

fn join_messages(errors: &[GraphqlError]) -> String {
	errors.iter().map(|error| error.message.as_str()).join("; ")
}

impl Error {
	fn from_transport(err: anyhow::Error) -> Self {
		match err.downcast_ref::<InvalidJson>() {
			Some(InvalidJson(body, reason)) => Self::InvalidJson {
				body: body.clone(),
				reason: reason.to_string(),
			},
			None => Self::Request(format!("{err:#}")),
		}
	}
}

/// Sends a request to the server. The seam between the client and the network.
#[async_trait(?Send)]
pub trait Transport {
	async fn execute(&self, request: &Request) -> Result<Envelope, Error>;
}

pub struct HttpTransport {
	http: reqwest::Client,
	endpoint: String,
}

impl HttpTransport {
	pub fn new(endpoint: impl Into<String>) -> Self {
		Self {
			http: reqwest::Client::new(),
			endpoint: endpoint.into(),
		}
	}
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
	async fn execute(&self, request: &Request) -> Result<Envelope, Error> {
		let builder = self.http.post(&self.endpoint).header("Accept", "application/json");
		let response = Response::<Envelope>::from(builder).with_json(request);
		log::debug!(target: "graphql", "{} {response:?}", request.operation_name);
		response.send().await.map_err(Error::from_transport)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPolicy {
	/// Answer from the cache when an entry exists, otherwise go to the network.
	#[default]
	CacheFirst,
	/// Always go to the network, refreshing the cached entry.
	NetworkOnly,
}

struct ClientState<T> {
	transport: T,
	cache: RefCell<Cache>,
}

/// Shared handle to the GraphQL client and its response cache.
pub struct Client<T = HttpTransport>(Rc<ClientState<T>>);

impl<T> Clone for Client<T> {
	fn clone(&self) -> Self {
		Self(self.0.clone())
	}
}
impl<T> PartialEq for Client<T> {
	fn eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.0, &other.0)
	}
}
impl<T> std::fmt::Debug for Client<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Client")
			.field("cached", &self.0.cache.borrow().len())
			.finish()
	}
}

impl Client {
	pub fn new(config: &Config) -> Self {
		Self::with_transport(HttpTransport::new(config.endpoint.clone()))
	}
}

impl<T> Client<T>
where
	T: Transport,
{
	pub fn with_transport(transport: T) -> Self {
		Self(Rc::new(ClientState {
			transport,
			cache: RefCell::new(Cache::default()),
		}))
	}

	pub async fn query<O: Operation>(&self, operation: &O, policy: FetchPolicy) -> Result<O::Output, Error> {
		debug_assert_eq!(O::KIND, OperationKind::Query);
		let request = Request::new(operation)?;
		let key = CacheKey::new(O::NAME, &request.variables);
		if policy == FetchPolicy::CacheFirst {
			let cached = self.0.cache.borrow().get(&key).cloned();
			if let Some(data) = cached {
				log::debug!(target: "graphql", "{} answered from cache", O::NAME);
				return decode::<O>(data);
			}
		}
		let data = self.execute(&request).await?;
		let output = decode::<O>(data.clone())?;
		self.0.cache.borrow_mut().insert(key, data);
		Ok(output)
	}

	pub async fn mutate<O: Operation>(&self, operation: &O) -> Result<O::Output, Error> {
		debug_assert_eq!(O::KIND, OperationKind::Mutation);
		let request = Request::new(operation)?;
		let data = self.execute(&request).await?;
		let output = decode::<O>(data)?;
		let evicted = self.0.cache.borrow_mut().invalidate_all();
		log::debug!(target: "graphql", "{} evicted {evicted} cached results", O::NAME);
		Ok(output)
	}

	pub fn cached_results(&self) -> usize {
		self.0.cache.borrow().len()
	}

	async fn execute(&self, request: &Request) -> Result<serde_json::Value, Error> {
		let envelope = self.0.transport.execute(request).await?;
		match envelope {
			Envelope {
				errors: Some(errors), ..
			} if !errors.is_empty() => Err(Error::Graphql(errors)),
			Envelope { data: Some(data), .. } if !data.is_null() => Ok(data),
			_ => Err(Error::MissingData),
		}
	}
}

fn decode<O: Operation>(data: serde_json::Value) -> Result<O::Output, Error> {
	serde_json::from_value(data).map_err(|err| Error::Decode {
		operation: O::NAME,
		reason: err.to_string(),
	})
}
