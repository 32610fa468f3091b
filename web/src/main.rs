use dioxus::prelude::*;

mod views;

use types::{CurrentUser, ErrorKind, Role, ViewState};
use views::{
    AdminDashboard, AdminEmployees, Departments, HrDashboard, HrEmployees, Login, Profile, Team,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login?:error")]
    Login { error: Option<String> },
    #[layout(AuthenticatedLayout)]
        #[route("/")]
        Home {},
        #[route("/admin/dashboard")]
        AdminDashboard {},
        #[route("/admin/employees")]
        AdminEmployees {},
        #[route("/hr/dashboard")]
        HrDashboard {},
        #[route("/hr/employees")]
        HrEmployees {},
        #[route("/hr/departments")]
        Departments {},
        #[route("/team")]
        Team {},
        #[route("/profile")]
        Profile {},
}

impl Route {
    pub fn home_for(role: Role) -> Self {
        match role {
            Role::Admin => Route::AdminDashboard {},
            Role::HrManager => Route::HrDashboard {},
            Role::Employee => Route::Team {},
        }
    }

    fn sidebar(role: Role) -> Vec<(Self, &'static str)> {
        match role {
            Role::Admin => vec![
                (Route::AdminDashboard {}, "Dashboard"),
                (Route::AdminEmployees {}, "Employees"),
                (Route::Profile {}, "Profile"),
            ],
            Role::HrManager => vec![
                (Route::HrDashboard {}, "Dashboard"),
                (Route::HrEmployees {}, "Employees List"),
                (Route::Departments {}, "Departments"),
                (Route::Profile {}, "Profile"),
            ],
            Role::Employee => vec![
                (Route::Team {}, "My Department"),
                (Route::Profile {}, "Profile"),
            ],
        }
    }
}

fn main() {
    #[cfg(feature = "server")]
    {
        server::init_tracing();
        dioxus::serve(|| async move {
            let routes = server::init()?;

            Ok(dioxus::server::router(App).merge(routes))
        });
    }

    #[cfg(all(feature = "web", not(feature = "server")))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Staffdesk" }
        document::Link { rel: "icon", href: asset!("/assets/favicon.svg") }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}

/// Fold a server function outcome into the state a page renders.
///
/// `None` is a request still in flight.
pub fn view_state<T: Clone>(outcome: Option<&ServerFnResult<types::Result<T>>>) -> ViewState<T> {
    ViewState::resolve(outcome.map(|result| match result {
        Ok(inner) => inner.clone(),
        Err(err) => Err(types::Error::fetch(err.to_string())),
    }))
}

/// Send the user back to the login page once their session is gone.
pub fn redirect_if_signed_out<T>(state: &ViewState<T>) {
    if let ViewState::Failed(ErrorKind::Unauthorized) = state {
        navigator().push(Route::Login {
            error: Some("session-expired".to_string()),
        });
    }
}

#[component]
fn Home() -> Element {
    let user = use_context::<CurrentUser>();
    navigator().replace(Route::home_for(user.role));

    rsx! {
        div { class: "loading", "Redirecting..." }
    }
}

#[component]
fn NavLink(to: Route, children: Element) -> Element {
    let current_route: Route = use_route();
    let is_active = current_route == to;

    rsx! {
        Link {
            to,
            class: if is_active { "active" },
            {children}
        }
    }
}

#[component]
fn AuthenticatedLayout() -> Element {
    let user = use_server_future(api::get_current_user)?;

    match &*user.read() {
        Some(Ok(Some(person))) => {
            let person = person.clone();
            use_context_provider(|| person.clone());
            let initial = person.initial();
            let full_name = person.full_name();
            let role_label = person.role.label();

            rsx! {
                div { class: "app-layout",
                    // Sidebar
                    aside { class: "sidebar",
                        div { class: "sidebar-header",
                            span { class: "sidebar-logo", "Staffdesk" }
                        }
                        nav { class: "sidebar-nav",
                            for (to, label) in Route::sidebar(person.role) {
                                NavLink { key: "{label}", to, "{label}" }
                            }
                        }
                        div { class: "sidebar-footer",
                            div { class: "sidebar-user",
                                div { class: "sidebar-avatar", "{initial}" }
                                div { class: "sidebar-user-info",
                                    div { class: "sidebar-user-name", "{full_name}" }
                                    div { class: "sidebar-user-role", "{role_label}" }
                                }
                            }
                            a { href: "/auth/logout", rel: "external", class: "sidebar-logout", "Sign out" }
                        }
                    }
                    // Main content
                    main { class: "main-content",
                        Outlet::<Route> {}
                    }
                }
            }
        }
        Some(Ok(None)) | Some(Err(_)) => {
            let nav = navigator();
            nav.push(Route::Login { error: None });
            rsx! {
                div { class: "loading", "Redirecting to login..." }
            }
        }
        None => {
            rsx! {
                div { class: "loading", "Loading..." }
            }
        }
    }
}
