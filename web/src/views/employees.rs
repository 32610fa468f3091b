use crate::views::components::{MembersCard, pending};
use crate::{redirect_if_signed_out, view_state};
use dioxus::prelude::*;
use types::ViewState;

#[component]
pub fn AdminEmployees() -> Element {
    rsx! {
        EmployeeList { title: "Manage Employees", subtitle: "Everyone on the payroll." }
    }
}

#[component]
pub fn HrEmployees() -> Element {
    rsx! {
        EmployeeList { title: "Employees List", subtitle: "All employees across departments." }
    }
}

#[component]
pub fn Team() -> Element {
    rsx! {
        EmployeeList { title: "My Department", subtitle: "The people you work with." }
    }
}

#[component]
fn EmployeeList(title: String, subtitle: String) -> Element {
    let employees = use_resource(api::list_employees);

    let state = view_state(employees.read().as_ref());
    redirect_if_signed_out(&state);

    let records = match state {
        ViewState::Ready(records) => records,
        other => return pending(&other),
    };

    rsx! {
        div {
            div { class: "page-header",
                div {
                    h1 { class: "page-title", "{title}" }
                    p { class: "page-subtitle", "{subtitle}" }
                }
            }
            if records.is_empty() {
                p { class: "empty-state", "No employees found." }
            }
            div { class: "member-list",
                for (i, record) in records.into_iter().enumerate() {
                    MembersCard { key: "{i}", record }
                }
            }
        }
    }
}
