use crate::views::components::{StatCard, pending};
use crate::{Route, redirect_if_signed_out, view_state};
use dioxus::prelude::*;
use jiff::Zoned;
use types::{CurrentUser, ViewState, greeting};

#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        MetricsDashboard { title: "Admin Dashboard",
            div { class: "action-row",
                Link { to: Route::AdminEmployees {}, class: "btn btn-primary", "Manage Employees" }
            }
        }
    }
}

#[component]
pub fn HrDashboard() -> Element {
    rsx! {
        MetricsDashboard { title: "HR Dashboard",
            div { class: "action-row",
                Link { to: Route::HrEmployees {}, class: "btn btn-primary", "Employees List" }
                Link { to: Route::Departments {}, class: "btn btn-primary", "Departments" }
            }
        }
    }
}

/// Employee count and department count, with role-specific actions below.
#[component]
fn MetricsDashboard(title: String, children: Element) -> Element {
    let user = use_context::<CurrentUser>();
    let metrics = use_resource(api::employee_metrics);

    let state = view_state(metrics.read().as_ref());
    redirect_if_signed_out(&state);

    let metrics = match state {
        ViewState::Ready(metrics) => metrics,
        other => return pending(&other),
    };

    let salutation = greeting(Zoned::now().hour());
    let full_name = user.full_name();
    let total = metrics.total.to_string();
    let departments = format!("{} Departments", metrics.department_count());

    rsx! {
        div {
            div { class: "page-header",
                h1 { class: "page-title", "{title}" }
                div { class: "greeting", "{salutation} {full_name}" }
            }
            div { class: "stat-grid",
                StatCard { icon: "👥", title: "Total Employees", value: total }
                StatCard { icon: "📊", title: "Department Distribution", value: departments }
            }
            {children}
        }
    }
}
