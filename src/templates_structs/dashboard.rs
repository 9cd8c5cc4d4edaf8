use askama::Template;

use super::{Header, PageContext};
use crate::models::dashboard::StatsCard;
use crate::models::trip::TripCard;

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub ctx: PageContext,
    pub header: Header,
    pub stats_cards: Vec<StatsCard>,
    pub trips: Vec<TripCard>,
}
