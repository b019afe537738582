//! # Mutation forms
//!
//! One form type serves every writable entity. What differs between a table
//! and a character sheet is data: an [`EntitySchema`] lists the fields, how
//! each one is edited ([`FieldKind`]) and which [`Collection`] receives the
//! write.
//!
//! A [`MutationForm`] holds the current value of every field as JSON. On
//! [`submit`](MutationForm::submit) the field map, the entity `id` (edits
//! only) and the owning scope identifier are serialized into one body and
//! sent as exactly one write. Success invokes the caller's completion
//! callback; the caller re-runs whichever loader shows the collection.
//! Failure is logged and the form keeps its values.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::client::{Collection, MesaApi};
use crate::error::ClientError;
use crate::models::de::value_as_id;
use crate::models::Atributos;
use crate::transport::Transport;

/// How a field is edited and encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line text.
    Text,
    /// Multi-line text.
    LongText,
    /// List of strings, one per line.
    List,
    /// The six character stats.
    Stats,
}

impl FieldKind {
    /// Value of the field in a blank form.
    pub fn empty(self) -> Value {
        match self {
            FieldKind::Text | FieldKind::LongText => Value::String(String::new()),
            FieldKind::List => Value::Array(Vec::new()),
            FieldKind::Stats => Value::from(Atributos::default().0.to_vec()),
        }
    }

    /// Render a value back into the text an input shows.
    pub fn display(self, value: &Value) -> String {
        match (self, value) {
            (_, Value::String(s)) => s.clone(),
            (FieldKind::List, Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join("\n"),
            (FieldKind::Stats, Value::Array(items)) => items
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(", "),
            (_, Value::Null) => String::new(),
            (_, other) => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Wire name of the field.
    pub name: &'static str,
    /// Label shown next to the input.
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { name, label, kind }
    }
}

/// The editable shape of one entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntitySchema {
    pub collection: Collection,
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
}

impl EntitySchema {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

pub const MESA_FORM: EntitySchema = EntitySchema {
    collection: Collection::Mesa,
    title: "Mesa",
    fields: &[
        FieldSpec::new("nome", "Nome", FieldKind::Text),
        FieldSpec::new("descricao", "Descrição", FieldKind::LongText),
        FieldSpec::new("tema", "Tema", FieldKind::Text),
    ],
};

pub const FICHA_FORM: EntitySchema = EntitySchema {
    collection: Collection::Ficha,
    title: "Personagem",
    fields: &[
        FieldSpec::new("nome", "Nome", FieldKind::Text),
        FieldSpec::new("classe", "Classe", FieldKind::Text),
        FieldSpec::new("descricao", "Descrição", FieldKind::LongText),
        FieldSpec::new("habilidades", "Habilidades", FieldKind::List),
        FieldSpec::new("atributos", "Atributos", FieldKind::Stats),
    ],
};

/// Editable field values for one create or edit.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationForm {
    schema: EntitySchema,
    id: Option<String>,
    owner: Option<String>,
    values: Map<String, Value>,
}

impl MutationForm {
    /// A blank form for a new entity.
    pub fn create(schema: EntitySchema) -> Self {
        let values = schema
            .fields
            .iter()
            .map(|f| (f.name.to_string(), f.kind.empty()))
            .collect();
        Self {
            schema,
            id: None,
            owner: None,
            values,
        }
    }

    /// A form pre-filled from an existing entity snapshot.
    pub fn edit<E: Serialize>(schema: EntitySchema, entity: &E) -> Result<Self, ClientError> {
        let Value::Object(snapshot) = serde_json::to_value(entity)? else {
            return Err(ClientError::Decode("entity is not an object".into()));
        };
        let mut form = Self::create(schema);
        form.id = snapshot.get("id").and_then(value_as_id);
        form.owner = schema
            .collection
            .owner_field()
            .and_then(|field| snapshot.get(field))
            .and_then(value_as_id);
        for spec in schema.fields {
            if let Some(value) = snapshot.get(spec.name) {
                form.values.insert(spec.name.to_string(), value.clone());
            }
        }
        Ok(form)
    }

    pub fn schema(&self) -> &EntitySchema {
        &self.schema
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn value(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    /// Current value of a field as input text.
    pub fn text(&self, field: &str) -> String {
        match (self.schema.field(field), self.values.get(field)) {
            (Some(spec), Some(value)) => spec.kind.display(value),
            _ => String::new(),
        }
    }

    /// One slot of a stats field.
    pub fn stat(&self, field: &str, index: usize) -> i64 {
        self.values
            .get(field)
            .and_then(|v| v.get(index))
            .and_then(Value::as_i64)
            .unwrap_or_default()
    }

    /// Set a field from raw input text, converting it per its [`FieldKind`].
    /// Unknown fields are ignored.
    pub fn set_text(&mut self, field: &str, input: &str) {
        let Some(spec) = self.schema.field(field).copied() else {
            tracing::warn!("Ignoring unknown field {field}");
            return;
        };
        let value = match spec.kind {
            FieldKind::Text | FieldKind::LongText => Value::String(input.to_string()),
            FieldKind::List => Value::Array(
                input
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(|line| Value::String(line.to_string()))
                    .collect(),
            ),
            FieldKind::Stats => {
                let mut stats: Vec<i64> = (0..6).map(|i| self.stat(field, i)).collect();
                let parsed = input
                    .split(|c: char| c == ',' || c.is_whitespace())
                    .filter(|s| !s.is_empty())
                    .map(|s| s.parse::<i64>());
                for (slot, n) in stats.iter_mut().zip(parsed) {
                    if let Ok(n) = n {
                        *slot = n;
                    }
                }
                Value::from(stats)
            }
        };
        self.values.insert(field.to_string(), value);
    }

    /// Set a field to an already-encoded value.
    pub fn set_value(&mut self, field: &str, value: Value) {
        if self.schema.field(field).is_some() {
            self.values.insert(field.to_string(), value);
        }
    }

    /// Edit one of the six stats.
    pub fn set_stat(&mut self, field: &str, index: usize, value: i64) {
        if index >= 6 {
            return;
        }
        let mut stats: Vec<i64> = (0..6).map(|i| self.stat(field, i)).collect();
        stats[index] = value;
        self.set_value(field, Value::from(stats));
    }

    /// The request body: every field, plus `id` for edits, plus the owning
    /// scope identifier for scoped collections.
    ///
    /// `scope` overrides the owner remembered from the edited snapshot.
    pub fn body(&self, scope: Option<&str>) -> Result<Value, ClientError> {
        let mut body = self.values.clone();
        if let Some(id) = &self.id {
            body.insert("id".into(), Value::String(id.clone()));
        }
        if let Some(field) = self.schema.collection.owner_field() {
            let owner = scope
                .filter(|s| !s.is_empty())
                .or(self.owner.as_deref())
                .ok_or(ClientError::MissingPrecondition(field))?;
            body.insert(field.into(), Value::String(owner.to_string()));
        }
        Ok(Value::Object(body))
    }

    /// Send the form as one create or update and call `on_complete` with the
    /// server's response on success.
    pub async fn submit<T, F>(
        &self,
        api: &MesaApi<T>,
        scope: Option<&str>,
        on_complete: F,
    ) -> Result<(), ClientError>
    where
        T: Transport,
        F: FnOnce(Value),
    {
        let body = self.body(scope).inspect_err(|e| {
            tracing::error!("Cannot submit {}: {e}", self.schema.title);
        })?;
        match api.save(self.schema.collection, body, self.is_edit()).await {
            Ok(saved) => {
                tracing::info!("Saved {}", self.schema.title);
                on_complete(saved);
                Ok(())
            }
            Err(e) => {
                tracing::error!("Failed to save {}: {e}", self.schema.title);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::loader::LoaderState;
    use crate::models::{Ficha, Mesa};
    use crate::transport::{MemoryTransport, Method};
    use serde_json::json;

    fn api(transport: &MemoryTransport) -> MesaApi<MemoryTransport> {
        MesaApi::new(
            transport.clone(),
            &ApiConfig {
                api_url: "http://mesas.test".into(),
                ..ApiConfig::default()
            },
        )
    }

    #[tokio::test]
    async fn test_create_character_sends_one_write_with_scope() {
        let transport = MemoryTransport::new();
        let api = api(&transport);

        let mut form = MutationForm::create(FICHA_FORM);
        form.set_text("nome", "Elara");
        form.set_text("classe", "Druida");
        form.set_text("descricao", "x");
        form.set_value("atributos", json!([10, 10, 10, 10, 10, 10]));

        let mut completions = 0;
        form.submit(&api, Some("mesa-1"), |_| completions += 1)
            .await
            .unwrap();

        assert_eq!(completions, 1);
        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].url, "http://mesas.test/Ficha");

        let body = requests[0].body.clone().unwrap();
        assert_eq!(body["nome"], "Elara");
        assert_eq!(body["classe"], "Druida");
        assert_eq!(body["descricao"], "x");
        assert_eq!(body["atributos"], json!([10, 10, 10, 10, 10, 10]));
        assert_eq!(body["mesaId"], "mesa-1");
        assert!(body.get("id").is_none());
    }

    #[tokio::test]
    async fn test_missing_scope_sends_nothing() {
        let transport = MemoryTransport::new();
        let api = api(&transport);
        let form = MutationForm::create(FICHA_FORM);

        let mut called = false;
        let err = form.submit(&api, None, |_| called = true).await.unwrap_err();

        assert_eq!(err, ClientError::MissingPrecondition("mesaId"));
        assert!(!called);
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_values_and_skips_callback() {
        let transport = MemoryTransport::new();
        let api = api(&transport);
        transport.fail_next(ClientError::Status {
            status: 500,
            body: "down".into(),
        });

        let mut form = MutationForm::create(MESA_FORM);
        form.set_text("nome", "Nova Mesa 1");
        let before = form.clone();

        let mut called = false;
        assert!(form.submit(&api, Some("u1"), |_| called = true).await.is_err());
        assert!(!called);
        assert_eq!(form, before);
        assert_eq!(form.text("nome"), "Nova Mesa 1");
    }

    #[tokio::test]
    async fn test_edit_carries_id_and_original_owner() {
        let ficha: Ficha = serde_json::from_value(json!({
            "id": "7",
            "nome": "Zephyr",
            "classe": "Ladino",
            "habilidades": ["Ataque Furtivo", "Evasão"],
            "atributos": [11, 18, 13, 14, 12, 15],
            "mesaId": "2"
        }))
        .unwrap();
        let transport = MemoryTransport::new()
            .with_collection("Ficha", vec![serde_json::to_value(&ficha).unwrap()]);
        let api = api(&transport);

        let mut form = MutationForm::edit(FICHA_FORM, &ficha).unwrap();
        assert!(form.is_edit());
        assert_eq!(form.text("habilidades"), "Ataque Furtivo\nEvasão");
        assert_eq!(form.stat("atributos", 1), 18);

        form.set_text("classe", "Assassino");
        form.set_stat("atributos", 0, 12);
        form.submit(&api, None, |_| {}).await.unwrap();

        let body = transport.requests()[0].body.clone().unwrap();
        assert_eq!(body["id"], "7");
        assert_eq!(body["mesaId"], "2");
        assert_eq!(body["atributos"], json!([12, 18, 13, 14, 12, 15]));

        let stored: Vec<Ficha> = serde_json::from_value(json!(transport.collection("Ficha"))).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].classe, "Assassino");
    }

    #[tokio::test]
    async fn test_delete_then_reload_drops_the_entity() {
        let transport = MemoryTransport::new().with_collection(
            "Ficha",
            vec![
                json!({ "id": "42", "nome": "Thorgar", "mesaId": "1" }),
                json!({ "id": "43", "nome": "Elara", "mesaId": "1" }),
            ],
        );
        let api = api(&transport);
        let mut sheets = LoaderState::<Vec<Ficha>>::new();
        sheets.run(api.list_sheets("1")).await;
        assert_eq!(sheets.data().map(Vec::len), Some(2));

        api.delete(Collection::Ficha, "42").await.unwrap();
        sheets.run(api.list_sheets("1")).await;

        let deletes: Vec<_> = transport
            .requests()
            .into_iter()
            .filter(|r| r.method == Method::Delete)
            .collect();
        assert_eq!(deletes.len(), 1);
        assert_eq!(deletes[0].query_param("id"), Some("42"));
        assert!(sheets.data().unwrap().iter().all(|f| f.id != "42"));
    }

    #[test]
    fn test_text_inputs_are_converted_per_kind() {
        let mut form = MutationForm::create(FICHA_FORM);
        form.set_text("habilidades", "Forma Selvagem\n\n  Conjurar Plantas  \n");
        form.set_text("atributos", "18, 12 16");
        form.set_text("desconhecido", "ignored");

        assert_eq!(
            form.value("habilidades"),
            Some(&json!(["Forma Selvagem", "Conjurar Plantas"]))
        );
        assert_eq!(form.value("atributos"), Some(&json!([18, 12, 16, 10, 10, 10])));
        assert!(form.value("desconhecido").is_none());
        assert_eq!(form.text("atributos"), "18, 12, 16, 10, 10, 10");
    }

    #[test]
    fn test_scope_argument_overrides_snapshot_owner() {
        let mesa = Mesa {
            id: "3".into(),
            nome: "Cidade".into(),
            descricao: String::new(),
            tema: "Mistério".into(),
            mestre_id: Some("old".into()),
        };
        let form = MutationForm::edit(MESA_FORM, &mesa).unwrap();

        assert_eq!(form.body(None).unwrap()["mestreId"], "old");
        assert_eq!(form.body(Some("new")).unwrap()["mestreId"], "new");
    }
}
