//! # In-memory fake of the remote APIs
//!
//! [`MemoryTransport`] answers requests from per-collection JSON arrays so the
//! loaders, forms and flows can be tested without a network. It understands
//! the conventions the clients use:
//!
//! | Request | Behavior |
//! |---------|----------|
//! | `GET /{collection}?k=v` | items whose field `k` equals `v` (all items without query) |
//! | `GET /{collection}/{id}` | the item with that `id`, or 404 |
//! | `POST` / `PUT /{collection}` | replace the item with the body's `id`, or append with a fresh `id` |
//! | `DELETE /{collection}?id={id}` | remove that item, or 404 |
//!
//! Paths are taken relative to the host, so tests should use bare base URLs
//! such as `http://mesas.test`. Every request is recorded in order.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};

use serde_json::Value;

use super::{ApiRequest, Method, Transport};
use crate::error::ClientError;
use crate::models::de::value_as_id;

#[derive(Debug, Default)]
struct Inner {
    collections: HashMap<String, Vec<Value>>,
    requests: Vec<ApiRequest>,
    failures: VecDeque<ClientError>,
    next_id: u64,
}

/// In-memory Transport for testing.
#[derive(Clone, Debug, Default)]
pub struct MemoryTransport {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn inner(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Builder method to seed a collection with items.
    pub fn with_collection(self, name: &str, items: Vec<Value>) -> Self {
        self.inner().collections.insert(name.to_string(), items);
        self
    }

    /// Current contents of a collection.
    pub fn collection(&self, name: &str) -> Vec<Value> {
        self.inner()
            .collections
            .get(name)
            .cloned()
            .unwrap_or_default()
    }

    /// Make the next request fail with `error` instead of being served.
    pub fn fail_next(&self, error: ClientError) {
        self.inner().failures.push_back(error);
    }

    /// Every request received so far, in order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.inner().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.inner().requests.len()
    }

    fn serve(inner: &mut Inner, request: &ApiRequest) -> Result<Value, ClientError> {
        let segments = path_segments(&request.url);
        let Some(name) = segments.first() else {
            return Err(not_found());
        };
        let item_id = segments.get(1).cloned();

        match request.method {
            Method::Get => {
                let items = inner.collections.get(name).cloned().unwrap_or_default();
                if let Some(id) = item_id {
                    return items
                        .into_iter()
                        .find(|item| item_id_of(item).as_deref() == Some(id.as_str()))
                        .ok_or_else(not_found);
                }
                let matching = items
                    .into_iter()
                    .filter(|item| {
                        request
                            .query
                            .iter()
                            .all(|(k, v)| item.get(k).and_then(value_as_id).as_deref() == Some(v.as_str()))
                    })
                    .collect();
                Ok(Value::Array(matching))
            }
            Method::Post | Method::Put => {
                let Some(Value::Object(mut body)) = request.body.clone() else {
                    return Err(ClientError::Status {
                        status: 400,
                        body: "expected a JSON object".into(),
                    });
                };
                let items = inner.collections.entry(name.clone()).or_default();
                let existing = body.get("id").and_then(value_as_id);
                if let Some(id) = existing {
                    if let Some(slot) = items
                        .iter_mut()
                        .find(|item| item_id_of(item).as_deref() == Some(id.as_str()))
                    {
                        *slot = Value::Object(body.clone());
                        return Ok(Value::Object(body));
                    }
                    if request.method == Method::Put {
                        return Err(not_found());
                    }
                    items.push(Value::Object(body.clone()));
                    return Ok(Value::Object(body));
                }
                inner.next_id += 1;
                let id = format!("m{}", inner.next_id);
                body.insert("id".into(), Value::String(id));
                inner
                    .collections
                    .entry(name.clone())
                    .or_default()
                    .push(Value::Object(body.clone()));
                Ok(Value::Object(body))
            }
            Method::Delete => {
                let Some(id) = request.query_param("id").map(str::to_string).or(item_id) else {
                    return Err(ClientError::Status {
                        status: 400,
                        body: "missing id".into(),
                    });
                };
                let items = inner.collections.entry(name.clone()).or_default();
                let before = items.len();
                items.retain(|item| item_id_of(item).as_deref() != Some(id.as_str()));
                if items.len() == before {
                    return Err(not_found());
                }
                Ok(Value::Null)
            }
        }
    }
}

impl Transport for MemoryTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, ClientError> {
        let mut inner = self.inner();
        inner.requests.push(request.clone());
        if let Some(error) = inner.failures.pop_front() {
            return Err(error);
        }
        Self::serve(&mut inner, &request)
    }
}

fn path_segments(url: &str) -> Vec<String> {
    let without_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    without_scheme
        .split('/')
        .skip(1)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn item_id_of(item: &Value) -> Option<String> {
    item.get("id").and_then(value_as_id)
}

fn not_found() -> ClientError {
    ClientError::Status {
        status: 404,
        body: "Not found".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_filters_by_query() {
        let transport = MemoryTransport::new().with_collection(
            "Mesa",
            vec![
                json!({ "id": "1", "mestreId": "a" }),
                json!({ "id": "2", "mestreId": "b" }),
                json!({ "id": 3, "mestreId": "a" }),
            ],
        );

        let result = transport
            .send(ApiRequest::get("http://mesas.test/Mesa").with_query("mestreId", "a"))
            .await
            .unwrap();
        let ids: Vec<_> = result
            .as_array()
            .unwrap()
            .iter()
            .filter_map(item_id_of)
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn test_get_by_id_and_missing() {
        let transport =
            MemoryTransport::new().with_collection("foods", vec![json!({ "id": "1" })]);

        let found = transport
            .send(ApiRequest::get("http://catalog.test/foods/1"))
            .await
            .unwrap();
        assert_eq!(found["id"], "1");

        let missing = transport
            .send(ApiRequest::get("http://catalog.test/foods/2"))
            .await
            .unwrap_err();
        assert!(missing.is_not_found());
    }

    #[tokio::test]
    async fn test_post_creates_then_updates() {
        let transport = MemoryTransport::new();

        let created = transport
            .send(ApiRequest::send_json(
                Method::Post,
                "http://mesas.test/Mesa",
                json!({ "nome": "Nova Mesa" }),
            ))
            .await
            .unwrap();
        let id = created["id"].as_str().unwrap().to_string();

        transport
            .send(ApiRequest::send_json(
                Method::Post,
                "http://mesas.test/Mesa",
                json!({ "id": id, "nome": "Renomeada" }),
            ))
            .await
            .unwrap();

        let items = transport.collection("Mesa");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["nome"], "Renomeada");
    }

    #[tokio::test]
    async fn test_delete_by_query_id() {
        let transport = MemoryTransport::new()
            .with_collection("Ficha", vec![json!({ "id": "42" }), json!({ "id": "43" })]);

        transport
            .send(ApiRequest::delete("http://mesas.test/Ficha").with_query("id", "42"))
            .await
            .unwrap();
        assert_eq!(transport.collection("Ficha"), vec![json!({ "id": "43" })]);

        let again = transport
            .send(ApiRequest::delete("http://mesas.test/Ficha").with_query("id", "42"))
            .await
            .unwrap_err();
        assert!(again.is_not_found());
    }

    #[tokio::test]
    async fn test_injected_failure_is_consumed_once() {
        let transport = MemoryTransport::new();
        transport.fail_next(ClientError::Transport("offline".into()));

        let first = transport.send(ApiRequest::get("http://x.test/users")).await;
        assert_eq!(first, Err(ClientError::Transport("offline".into())));

        let second = transport.send(ApiRequest::get("http://x.test/users")).await;
        assert_eq!(second, Ok(json!([])));
        assert_eq!(transport.request_count(), 2);
    }
}
