use dioxus::prelude::*;

fn error_message(code: &str) -> &'static str {
    match code {
        "invalid-credentials" => "Invalid username or password.",
        "session-expired" => "Your session has expired. Please sign in again.",
        _ => "Unable to reach the HR service. Please try again.",
    }
}

#[component]
pub fn Login(error: Option<String>) -> Element {
    let message = error.as_deref().map(error_message);

    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                div { class: "login-header",
                    h1 { class: "login-title", "Staffdesk" }
                    p { class: "login-subtitle", "HR Administration" }
                }
                if let Some(message) = message {
                    p { class: "login-error", "{message}" }
                }
                form {
                    action: "/auth/login",
                    method: "post",
                    div { class: "form-group",
                        label { class: "form-label", r#for: "username", "Username" }
                        input {
                            id: "username",
                            name: "username",
                            class: "form-input",
                            r#type: "text",
                            autocomplete: "username",
                            required: true,
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "password", "Password" }
                        input {
                            id: "password",
                            name: "password",
                            class: "form-input",
                            r#type: "password",
                            autocomplete: "current-password",
                            required: true,
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary login-btn",
                        "Sign in"
                    }
                }
            }
        }
    }
}
