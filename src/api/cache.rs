use std::collections::BTreeMap;

/// Identifies a cached query result: the operation plus its serialized variables.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CacheKey {
	operation: &'static str,
	variables: String,
}

impl CacheKey {
	pub fn new(operation: &'static str, variables: &serde_json::Value) -> Self {
		Self {
			operation,
			variables: variables.to_string(),
		}
	}
}

/// In-memory store of successful query results.
///
/// Only queries are stored, so any successful mutation may have changed what they describe.
/// The client evicts everything after one with [`Cache::invalidate_all`].
#[derive(Debug, Default)]
pub struct Cache {
	entries: BTreeMap<CacheKey, serde_json::Value>,
}

impl Cache {
	pub fn get(&self, key: &CacheKey) -> Option<&serde_json::Value> {
		self.entries.get(key)
	}

	pub fn insert(&mut self, key: CacheKey, data: serde_json::Value) {
		self.entries.insert(key, data);
	}

	/// Drops every entry, returning how many were evicted.
	pub fn invalidate_all(&mut self) -> usize {
		let count = self.entries.len();
		self.entries.clear();
		count
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
