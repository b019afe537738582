//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

mod session;
pub use session::{
    make_session_store, use_session, AppSessionStore, LogoutButton, SessionProvider,
    SessionSignal,
};

mod clients;
pub use clients::{use_clients, AppTransport, Clients, ClientsProvider};

mod loader;
pub use loader::{use_loader, Loader};

mod status;
pub use status::{ErrorBanner, LoadStatus};

mod navbar;
pub use navbar::Navbar;

mod entity_form;
pub use entity_form::EntityForm;

mod character_card;
pub use character_card::{CharacterCard, CharacterDetail};

mod table_section;
pub use table_section::TableSection;
