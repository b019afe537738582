//! Session context and hooks for the UI.
//!
//! The signed-in user lives in one [`api::Session`] held in a context
//! signal. Pages read the [`Gate`](api::Gate) from it; only the login,
//! logout and account deletion paths write to it.

use api::Session;
use dioxus::prelude::*;

/// Platform-appropriate session storage.
///
/// - **Web** (WASM + `web` feature): `window.localStorage`
/// - **Desktop** (native): `session.toml` in the data directory
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type AppSessionStore = store::LocalStorageStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type AppSessionStore = store::FileStore;

pub type SessionSignal = Signal<Session<AppSessionStore>>;

pub fn make_session_store() -> AppSessionStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("mesas");
        store::FileStore::new(base)
    }
}

/// Get the current session.
/// Returns a signal that updates when the user signs in or out.
pub fn use_session() -> SessionSignal {
    use_context::<SessionSignal>()
}

/// Provider component that restores the persisted session once.
/// Wrap your app with this component before any page that checks the gate.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(Session::restore(make_session_store())));

    rsx! {
        {children}
    }
}

/// Button that clears the session and hands control back to the caller.
#[component]
pub fn LogoutButton(
    on_logout: EventHandler<()>,
    #[props(default = "Sair".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut session = use_session();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| {
                session.write().sign_out();
                on_logout.call(());
            },
            "{label}"
        }
    }
}
