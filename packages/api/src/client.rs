//! # Typed clients for the two remote APIs
//!
//! [`MesaApi`] talks to the configurable Mesa API (accounts, tables, character
//! sheets). [`CatalogApi`] talks to the read-only delivery catalog. Both are
//! generic over a [`Transport`] so tests can swap in
//! [`MemoryTransport`](crate::transport::MemoryTransport).
//!
//! ## Mesa API conventions
//!
//! | Operation | Request |
//! |-----------|---------|
//! | list by owner | `GET {base}/{Collection}?{ownerField}={owner}` |
//! | create | `POST {base}/{Collection}` with the fields as body |
//! | update | `POST` (or `PUT`, see [`UpdateMethod`]) `{base}/{Collection}` with `id` in the body |
//! | delete | `DELETE {base}/{Collection}?id={id}` |

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::{ApiConfig, UpdateMethod};
use crate::error::ClientError;
use crate::models::{Ficha, Food, Mesa, NewMestre, Restaurant, User};
use crate::session::Gate;
use crate::transport::{ApiRequest, Method, Transport};

/// A writable collection on the Mesa API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Mestre,
    Mesa,
    Ficha,
}

impl Collection {
    pub fn path(self) -> &'static str {
        match self {
            Collection::Mestre => "Mestre",
            Collection::Mesa => "Mesa",
            Collection::Ficha => "Ficha",
        }
    }

    /// Body field linking an entity to its owner, if the collection is scoped.
    pub fn owner_field(self) -> Option<&'static str> {
        match self {
            Collection::Mestre => None,
            Collection::Mesa => Some("mestreId"),
            Collection::Ficha => Some("mesaId"),
        }
    }
}

fn decode<D: DeserializeOwned>(value: Value) -> Result<D, ClientError> {
    Ok(serde_json::from_value(value)?)
}

/// Client for the Mesa API.
#[derive(Debug, Clone)]
pub struct MesaApi<T> {
    transport: T,
    base: String,
    update_method: UpdateMethod,
}

impl<T: Transport> MesaApi<T> {
    pub fn new(transport: T, config: &ApiConfig) -> Self {
        Self {
            transport,
            base: config.api_url.clone(),
            update_method: config.update_method,
        }
    }

    fn url(&self, collection: Collection) -> String {
        format!("{}/{}", self.base, collection.path())
    }

    async fn list_owned<D: DeserializeOwned>(
        &self,
        collection: Collection,
        owner: &str,
    ) -> Result<Vec<D>, ClientError> {
        let field = collection
            .owner_field()
            .ok_or(ClientError::MissingPrecondition("owner field"))?;
        if owner.is_empty() {
            return Err(ClientError::MissingPrecondition(field));
        }
        let request = ApiRequest::get(self.url(collection)).with_query(field, owner);
        decode(self.transport.send(request).await?)
    }

    /// Tables owned by a mestre.
    pub async fn list_tables(&self, owner: &str) -> Result<Vec<Mesa>, ClientError> {
        self.list_owned(Collection::Mesa, owner).await
    }

    /// Tables of the signed-in user. Fails without a request when anonymous.
    pub async fn tables_for(&self, gate: &Gate) -> Result<Vec<Mesa>, ClientError> {
        let owner = gate
            .user_id()
            .ok_or(ClientError::MissingPrecondition("mestreId"))?;
        self.list_tables(owner).await
    }

    /// Character sheets at a table.
    pub async fn list_sheets(&self, table: &str) -> Result<Vec<Ficha>, ClientError> {
        self.list_owned(Collection::Ficha, table).await
    }

    /// Create or update an entity. `body` already carries every field,
    /// including `id` for updates.
    pub async fn save(
        &self,
        collection: Collection,
        body: Value,
        is_update: bool,
    ) -> Result<Value, ClientError> {
        let method = match (is_update, self.update_method) {
            (true, UpdateMethod::Put) => Method::Put,
            _ => Method::Post,
        };
        let request = ApiRequest::send_json(method, self.url(collection), body);
        self.transport.send(request).await
    }

    pub async fn delete(&self, collection: Collection, id: &str) -> Result<(), ClientError> {
        if id.is_empty() {
            return Err(ClientError::MissingPrecondition("id"));
        }
        let request = ApiRequest::delete(self.url(collection)).with_query("id", id);
        self.transport.send(request).await?;
        Ok(())
    }

    /// Create an account.
    pub async fn register(&self, account: &NewMestre) -> Result<(), ClientError> {
        let body = serde_json::to_value(account)?;
        self.save(Collection::Mestre, body, false).await?;
        Ok(())
    }
}

/// Client for the read-only delivery catalog.
#[derive(Debug, Clone)]
pub struct CatalogApi<T> {
    transport: T,
    base: String,
}

impl<T: Transport> CatalogApi<T> {
    pub fn new(transport: T, config: &ApiConfig) -> Self {
        Self {
            transport,
            base: config.catalog_url.clone(),
        }
    }

    async fn get<D: DeserializeOwned>(&self, path: &str) -> Result<D, ClientError> {
        let request = ApiRequest::get(format!("{}/{path}", self.base));
        decode(self.transport.send(request).await?)
    }

    pub async fn users(&self) -> Result<Vec<User>, ClientError> {
        self.get("users").await
    }

    pub async fn user(&self, id: &str) -> Result<User, ClientError> {
        self.get(&format!("users/{id}")).await
    }

    pub async fn restaurants(&self) -> Result<Vec<Restaurant>, ClientError> {
        self.get("restaurants").await
    }

    pub async fn restaurant(&self, id: &str) -> Result<Restaurant, ClientError> {
        self.get(&format!("restaurants/{id}")).await
    }

    /// Menu of one restaurant. The catalog has no per-restaurant endpoint, so
    /// the full food list is fetched and filtered on `restaurantId`.
    pub async fn menu_for(&self, restaurant: &str) -> Result<Vec<Food>, ClientError> {
        let foods: Vec<Food> = self.get("foods").await?;
        Ok(foods
            .into_iter()
            .filter(|food| food.restaurant_id == restaurant)
            .collect())
    }

    pub async fn food(&self, id: &str) -> Result<Food, ClientError> {
        self.get(&format!("foods/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MemoryTransport;
    use serde_json::json;

    fn config() -> ApiConfig {
        ApiConfig {
            api_url: "http://mesas.test".into(),
            catalog_url: "http://catalog.test".into(),
            ..ApiConfig::default()
        }
    }

    #[tokio::test]
    async fn test_list_tables_is_scoped_to_owner() {
        let transport = MemoryTransport::new().with_collection(
            "Mesa",
            vec![
                json!({ "id": "1", "nome": "Floresta", "mestreId": "u1" }),
                json!({ "id": "2", "nome": "Cidade", "mestreId": "u2" }),
            ],
        );
        let api = MesaApi::new(transport.clone(), &config());

        let tables = api.list_tables("u1").await.unwrap();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].nome, "Floresta");

        let request = &transport.requests()[0];
        assert_eq!(request.url, "http://mesas.test/Mesa");
        assert_eq!(request.query_param("mestreId"), Some("u1"));
    }

    #[tokio::test]
    async fn test_missing_owner_sends_nothing() {
        let transport = MemoryTransport::new();
        let api = MesaApi::new(transport.clone(), &config());

        let err = api.list_sheets("").await.unwrap_err();
        assert_eq!(err, ClientError::MissingPrecondition("mesaId"));

        let err = api.tables_for(&Gate::Anonymous).await.unwrap_err();
        assert_eq!(err, ClientError::MissingPrecondition("mestreId"));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_update_verb_follows_config() {
        let transport = MemoryTransport::new()
            .with_collection("Mesa", vec![json!({ "id": "1", "nome": "A" })]);

        let post = MesaApi::new(transport.clone(), &config());
        post.save(Collection::Mesa, json!({ "id": "1", "nome": "B" }), true)
            .await
            .unwrap();

        let put = MesaApi::new(
            transport.clone(),
            &ApiConfig {
                update_method: UpdateMethod::Put,
                ..config()
            },
        );
        put.save(Collection::Mesa, json!({ "id": "1", "nome": "C" }), true)
            .await
            .unwrap();
        put.save(Collection::Mesa, json!({ "nome": "D" }), false)
            .await
            .unwrap();

        let methods: Vec<_> = transport.requests().iter().map(|r| r.method).collect();
        assert_eq!(methods, vec![Method::Post, Method::Put, Method::Post]);
    }

    #[tokio::test]
    async fn test_register_posts_account() {
        let transport = MemoryTransport::new();
        let api = MesaApi::new(transport.clone(), &config());

        api.register(&NewMestre {
            nome: "Mestre".into(),
            senha: "pw".into(),
        })
        .await
        .unwrap();

        let request = &transport.requests()[0];
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url, "http://mesas.test/Mestre");
        assert_eq!(request.body, Some(json!({ "nome": "Mestre", "senha": "pw" })));
    }

    #[tokio::test]
    async fn test_menu_only_contains_the_restaurants_items() {
        let transport = MemoryTransport::new().with_collection(
            "foods",
            vec![
                json!({ "id": "1", "name": "Pizza", "price": 40, "restaurantId": "1" }),
                json!({ "id": "2", "name": "Sushi", "price": 60, "restaurantId": "2" }),
                json!({ "id": "3", "name": "Calzone", "price": 35, "restaurantId": 1 }),
            ],
        );
        let catalog = CatalogApi::new(transport, &config());

        let menu = catalog.menu_for("1").await.unwrap();
        assert_eq!(menu.len(), 2);
        assert!(menu.iter().all(|item| item.restaurant_id == "1"));
    }

    #[tokio::test]
    async fn test_restaurant_by_id() {
        let transport = MemoryTransport::new()
            .with_collection("restaurants", vec![json!({ "id": "1", "name": "Casa" })]);
        let catalog = CatalogApi::new(transport, &config());

        let restaurant = catalog.restaurant("1").await.unwrap();
        assert_eq!(restaurant.name, "Casa");

        let err = catalog.restaurant("9").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_decode_error_on_unexpected_shape() {
        let transport =
            MemoryTransport::new().with_collection("users", vec![json!({ "name": "no id" })]);
        let catalog = CatalogApi::new(transport, &config());

        let err = catalog.users().await.unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }
}
