use dioxus::prelude::*;
use types::{EmployeeRecord, ViewState};

/// Body for a page whose data is not ready: a spinner or the fetch error.
pub fn pending<T>(state: &ViewState<T>) -> Element {
    match state.message() {
        Some(message) => rsx! {
            div { class: "error-message", "{message}" }
        },
        None => rsx! {
            div { class: "loading", "Loading..." }
        },
    }
}

#[component]
pub fn StatCard(icon: String, title: String, value: String) -> Element {
    rsx! {
        div { class: "stat-card",
            span { class: "stat-card-icon", "{icon}" }
            div {
                p { class: "stat-card-title", "{title}" }
                p { class: "stat-card-value", "{value}" }
            }
        }
    }
}

/// One employee: photo (or initial), name, position, department and contacts.
#[component]
pub fn MembersCard(record: EmployeeRecord) -> Element {
    let name = record.display_name();
    let initial = name
        .chars()
        .next()
        .unwrap_or('?')
        .to_uppercase()
        .to_string();

    rsx! {
        div { class: "member-card",
            div { class: "member-avatar",
                if let Some(src) = record.profile_image.clone() {
                    img { src, alt: "{name}'s profile" }
                } else {
                    "{initial}"
                }
            }
            div { class: "member-info",
                h3 { class: "member-name", "{name}" }
                if let Some(position) = &record.position {
                    p { class: "member-meta", "{position}" }
                }
                if let Some(department) = &record.department {
                    p { class: "member-meta", "{department}" }
                }
                if let Some(username) = &record.username {
                    p { class: "member-contact", "@{username}" }
                }
                if let Some(email) = &record.email {
                    p { class: "member-contact", "{email}" }
                }
                if let Some(phone) = &record.phone {
                    p { class: "member-contact", "{phone}" }
                }
            }
        }
    }
}
