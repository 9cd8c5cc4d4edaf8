//! Shared fixtures for dashboard and routing tests.
//!
//! Builds `Constants` in memory so each test controls exactly which trips and
//! which user the pages see.

#![allow(dead_code)]

use actix_web::web;

use tourvisto_admin::config::AppConfig;
use tourvisto_admin::models::constants::Constants;
use tourvisto_admin::models::dashboard::{DashboardStats, MonthlyCount, RoleCount};
use tourvisto_admin::models::trip::{ItineraryDay, Price, Trip, TripId};
use tourvisto_admin::models::user::User;
use tourvisto_admin::state::AppState;

pub fn user_named(name: Option<&str>) -> User {
    User {
        name: name.map(String::from),
        email: Some("ann@example.com".to_string()),
        image_url: None,
    }
}

pub fn sample_stats() -> DashboardStats {
    DashboardStats {
        total_users: 100,
        total_trips: 200,
        users_joined: MonthlyCount { current_month: 11, last_month: 12 },
        trips_created: MonthlyCount { current_month: 21, last_month: 22 },
        user_role: RoleCount { total: 30, current_month: 31, last_month: 32 },
    }
}

/// A trip with one itinerary day and one image.
pub fn sample_trip(id: i64) -> Trip {
    Trip {
        id: TripId::Number(id.into()),
        name: format!("Trip {id}"),
        image_urls: vec![format!("/img/{id}.jpg"), format!("/img/{id}-b.jpg")],
        itinerary: Some(vec![
            ItineraryDay { location: format!("Place {id}") },
            ItineraryDay { location: "Elsewhere".to_string() },
        ]),
        tags: vec!["Culture".to_string()],
        estimated_price: Price::Label(format!("${id},000")),
    }
}

pub fn constants_with_trips(count: i64, user: Option<User>) -> Constants {
    Constants {
        user,
        dashboard_stats: sample_stats(),
        all_trips: (1..=count).map(sample_trip).collect(),
        users: Vec::new(),
    }
}

pub fn test_state(constants: Constants) -> web::Data<AppState> {
    let config = AppConfig::from_lookup(|_| None).expect("default config");
    web::Data::new(AppState::new(&config, constants))
}
