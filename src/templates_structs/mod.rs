// Template context structures for Askama templates, organized by page.

use crate::models::nav_item::{self, NavItem};
use crate::models::user::{avatar_initial, resolve_display_name};
use crate::routes::ADMIN_LAYOUT;
use crate::state::AppState;

/// Context shared by every page rendered inside the admin layout.
/// Templates access these as `ctx.username`, `ctx.nav_items`, etc.
pub struct PageContext {
    pub app_name: String,
    pub layout: &'static str,
    pub username: String,
    pub email: String,
    pub avatar_initial: String,
    pub avatar_url: Option<String>,
    pub nav_items: Vec<NavItem>,
}

impl PageContext {
    pub fn build(state: &AppState, current_path: &str) -> Self {
        let user = state.constants.user.as_ref();
        let username = resolve_display_name(user);
        let avatar_initial = avatar_initial(&username);
        Self {
            app_name: state.app_name.clone(),
            layout: ADMIN_LAYOUT.name,
            email: user.and_then(|u| u.email.clone()).unwrap_or_default(),
            avatar_url: user.and_then(|u| u.image_url.clone()),
            nav_items: nav_item::find_navigation(&ADMIN_LAYOUT, current_path),
            username,
            avatar_initial,
        }
    }
}

mod common;
mod dashboard;
mod user;

pub use self::common::Header;
pub use self::dashboard::DashboardTemplate;
pub use self::user::UserListTemplate;
