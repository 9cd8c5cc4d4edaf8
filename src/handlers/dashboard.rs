use actix_web::{HttpRequest, HttpResponse, web};

use crate::errors::{AppError, render};
use crate::models::constants::Constants;
use crate::models::dashboard::stats_cards;
use crate::models::trip::preview_cards;
use crate::models::user::resolve_display_name;
use crate::state::AppState;
use crate::templates_structs::{DashboardTemplate, Header, PageContext};

pub const DASHBOARD_DESCRIPTION: &str =
    "Track activity , trends and popular destinations in real time";

/// "Welcome Ann 👋", or "Welcome Guest 👋" without a named user.
pub fn greeting(constants: &Constants) -> String {
    format!("Welcome {} 👋", resolve_display_name(constants.user.as_ref()))
}

/// Assemble the dashboard page from the constants dataset.
pub fn dashboard_view(ctx: PageContext, constants: &Constants) -> DashboardTemplate {
    DashboardTemplate {
        ctx,
        header: Header::new(greeting(constants), DASHBOARD_DESCRIPTION),
        stats_cards: stats_cards(&constants.dashboard_stats),
        trips: preview_cards(&constants.all_trips),
    }
}

pub async fn index(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&state, req.path());
    let tmpl = dashboard_view(ctx, &state.constants);
    log::debug!("Rendering dashboard with {} trip cards", tmpl.trips.len());
    render(tmpl)
}
