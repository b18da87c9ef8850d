use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{DashboardView, GroupDetailView, GroupsView, MapView, ReportsView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", DashboardView)] Dashboard {},
        #[route("/groups", GroupsView)] Groups {},
        #[route("/groups/:group_id", GroupDetailView)] GroupDetail { group_id: String },
        #[route("/map", MapView)] Map {},
        #[route("/reports", ReportsView)] Reports {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Blitz" }
            ul {
                li { Link { to: Route::Dashboard {}, "Dashboard" } }
                li { Link { to: Route::Groups {}, "Grupos e Inst." } }
                li { Link { to: Route::Map {}, "Mapa Real-Time" } }
                li { Link { to: Route::Reports {}, "Reportes PDF" } }
            }
        }
    }
}
