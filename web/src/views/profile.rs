use dioxus::prelude::*;
use types::CurrentUser;

#[component]
pub fn Profile() -> Element {
    let user = use_context::<CurrentUser>();
    let full_name = user.full_name();
    let role = user.role.label();

    rsx! {
        div {
            div { class: "page-header",
                h1 { class: "page-title", "Profile" }
            }
            div { class: "stat-card",
                div {
                    div { class: "form-group",
                        span { class: "form-label", "Name" }
                        div { class: "form-value", "{full_name}" }
                    }
                    div { class: "form-group",
                        span { class: "form-label", "Username" }
                        div { class: "form-value", "@{user.username}" }
                    }
                    div { class: "form-group",
                        span { class: "form-label", "Role" }
                        div { class: "form-value", "{role}" }
                    }
                }
            }
        }
    }
}
