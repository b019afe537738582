//! Shared API clients.
//!
//! One [`Clients`] value is built from [`ApiConfig`] at startup and provided
//! through context. Cloning it is cheap: both clients share one transport.

use std::future::Future;

use api::transport::ApiRequest;
use api::{ApiConfig, CatalogApi, ClientError, HttpTransport, MemoryTransport, MesaApi, Transport};
use dioxus::prelude::*;
use serde_json::Value;

/// The transport behind the app's clients: `reqwest` in the running app, the
/// in-memory fake under component tests.
#[derive(Clone, Debug)]
pub enum AppTransport {
    Http(HttpTransport),
    Memory(MemoryTransport),
}

impl Transport for AppTransport {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<Value, ClientError>> {
        let transport = self.clone();
        async move {
            match transport {
                AppTransport::Http(http) => http.send(request).await,
                AppTransport::Memory(memory) => memory.send(request).await,
            }
        }
    }
}

#[derive(Clone)]
pub struct Clients {
    pub mesa: MesaApi<AppTransport>,
    pub catalog: CatalogApi<AppTransport>,
}

impl Clients {
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::with_transport(AppTransport::Http(HttpTransport::new(config)), config)
    }

    /// Clients over an explicit transport, e.g. a seeded [`MemoryTransport`].
    pub fn with_transport(transport: AppTransport, config: &ApiConfig) -> Self {
        Self {
            mesa: MesaApi::new(transport.clone(), config),
            catalog: CatalogApi::new(transport, config),
        }
    }
}

/// Consume the [`Clients`] from context.
pub fn use_clients() -> Clients {
    use_context::<Clients>()
}

/// Provide [`Clients`] configured from the environment.
#[component]
pub fn ClientsProvider(children: Element) -> Element {
    use_context_provider(|| {
        let config = ApiConfig::from_env();
        tracing::info!(
            "Mesa API at {}, catalog at {}",
            config.api_url,
            config.catalog_url
        );
        Clients::from_config(&config)
    });

    rsx! {
        {children}
    }
}
