//! Declarative route table for the admin area.
//!
//! Leaf routes are nested under a layout. The layout contributes chrome
//! (sidebar, user footer) but no path segment, so `dashboard` is served at
//! `/dashboard` rather than `/admin/dashboard`.

use actix_web::{HttpResponse, web};

use crate::handlers;

/// The view a leaf route renders into its layout's outlet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    AllUsers,
}

#[derive(Debug)]
pub struct Route {
    pub path: &'static str,
    pub label: &'static str,
    pub view: View,
}

impl Route {
    pub fn url(&self) -> String {
        format!("/{}", self.path)
    }
}

/// A layout wrapping a list of child routes.
#[derive(Debug)]
pub struct LayoutRoute {
    pub name: &'static str,
    pub children: &'static [Route],
}

pub const ADMIN_LAYOUT: LayoutRoute = LayoutRoute {
    name: "admin",
    children: &[
        Route { path: "dashboard", label: "Dashboard", view: View::Dashboard },
        Route { path: "all-users", label: "All Users", view: View::AllUsers },
    ],
};

const ROUTES: &[LayoutRoute] = &[ADMIN_LAYOUT];

pub fn route_table() -> &'static [LayoutRoute] {
    ROUTES
}

/// Mount every leaf route as `GET /<path>`, plus the root redirect.
pub fn configure(cfg: &mut web::ServiceConfig) {
    for layout in route_table() {
        for route in layout.children {
            let path = route.url();
            log::debug!("Mounting {} inside layout '{}'", path, layout.name);
            match route.view {
                View::Dashboard => cfg.route(&path, web::get().to(handlers::dashboard::index)),
                View::AllUsers => cfg.route(&path, web::get().to(handlers::user_handlers::list)),
            };
        }
    }

    cfg.route("/", web::get().to(|| async {
        HttpResponse::SeeOther()
            .insert_header(("Location", "/dashboard"))
            .finish()
    }));
}
