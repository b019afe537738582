use api::ClientError;
use dioxus::prelude::*;

/// Loading and error placeholder shared by every page.
///
/// Renders nothing once data is available and no error is pending.
#[component]
pub fn LoadStatus(
    loading: bool,
    error: Option<ClientError>,
    #[props(default = "Carregando...".to_string())] loading_label: String,
) -> Element {
    if let Some(err) = error {
        return rsx! {
            div { class: "status status--error", "{err.user_message()}" }
        };
    }
    if loading {
        return rsx! {
            div { class: "status", "{loading_label}" }
        };
    }
    rsx! {}
}

/// Inline error banner used by forms.
#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div { class: "error-banner", "{message}" }
    }
}
