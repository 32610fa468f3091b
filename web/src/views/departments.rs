use crate::views::components::pending;
use crate::{redirect_if_signed_out, view_state};
use dioxus::prelude::*;
use types::ViewState;

#[component]
pub fn Departments() -> Element {
    let shares = use_resource(api::department_distribution);

    let state = view_state(shares.read().as_ref());
    redirect_if_signed_out(&state);

    let shares = match state {
        ViewState::Ready(shares) => shares,
        other => return pending(&other),
    };

    rsx! {
        div {
            div { class: "page-header",
                div {
                    h1 { class: "page-title", "Departments" }
                    p { class: "page-subtitle", "How employees are spread across departments." }
                }
            }
            if shares.is_empty() {
                p { class: "empty-state", "No departments yet." }
            } else {
                table { class: "table",
                    thead {
                        tr {
                            th { "Department" }
                            th { "Employees" }
                        }
                    }
                    tbody {
                        for (row, share) in shares.iter().enumerate() {
                            tr { key: "{row}",
                                td { "{share.department}" }
                                td { "{share.employees}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
