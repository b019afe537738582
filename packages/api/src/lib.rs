//! # API crate: client-side data synchronization for Mesas
//!
//! Everything the pages need to talk to the remote APIs, with no UI framework
//! attached so it can be tested on its own.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Base URLs, timeout and update verb from the environment |
//! | [`error`] | [`ClientError`], the single error type for remote calls |
//! | [`models`] | DTOs: catalog users, tables, character sheets, restaurants, menu items |
//! | [`transport`] | [`Transport`] trait, the `reqwest` implementation and an in-memory fake |
//! | [`client`] | [`MesaApi`] and [`CatalogApi`], the typed reads and writes |
//! | [`loader`] | [`LoaderState`], snapshot + loading flag + error with a stale-response guard |
//! | [`form`] | [`MutationForm`] and the per-entity [`EntitySchema`]s |
//! | [`session`] | [`Session`] and the [`Gate`] pages consult before loading |
//! | [`auth`] | Sign-in against the catalog users, registration, account deletion |
//!
//! ## Data flow
//!
//! Pages read through a loader: `begin`, await a client call, `settle`. Writes
//! go through a form and end with the caller re-running the loader. There is
//! no cache; every page fetches its own copy.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod loader;
pub mod models;
pub mod session;
pub mod transport;

pub use client::{CatalogApi, Collection, MesaApi};
pub use config::{ApiConfig, UpdateMethod};
pub use error::ClientError;
pub use form::{EntitySchema, FieldKind, FieldSpec, MutationForm, FICHA_FORM, MESA_FORM};
pub use loader::{LoaderState, Ticket};
pub use session::{Access, Gate, Redirect, Session};
pub use transport::{HttpTransport, MemoryTransport, Transport};
