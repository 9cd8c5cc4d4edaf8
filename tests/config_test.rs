/// Tests for environment-driven configuration and loading the constants
/// dataset from disk.

use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use tourvisto_admin::config::{AppConfig, DEFAULT_APP_NAME, DEFAULT_HOST, DEFAULT_PORT};
use tourvisto_admin::errors::AppError;
use tourvisto_admin::models::constants::Constants;

fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, AppError> {
    let env: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    AppConfig::from_lookup(|key| env.get(key).cloned())
}

#[test]
fn test_defaults_when_unset() {
    let config = config_from(&[]).expect("config");
    assert_eq!(config.host, DEFAULT_HOST);
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.app_name, DEFAULT_APP_NAME);
    assert!(config.constants_path.is_none());
    assert_eq!(config.static_dir, Path::new("./static"));
}

#[test]
fn test_overrides_are_applied() {
    let config = config_from(&[
        ("TOURVISTO_HOST", "0.0.0.0"),
        ("TOURVISTO_PORT", "9090"),
        ("TOURVISTO_APP_NAME", "Trips HQ"),
        ("TOURVISTO_CONSTANTS", "/srv/constants.json"),
        ("TOURVISTO_STATIC_DIR", "/srv/static"),
    ])
    .expect("config");

    assert_eq!(config.bind_addr(), ("0.0.0.0".to_string(), 9090));
    assert_eq!(config.app_name, "Trips HQ");
    assert_eq!(config.constants_path.as_deref(), Some(Path::new("/srv/constants.json")));
    assert_eq!(config.static_dir, Path::new("/srv/static"));
}

#[test]
fn test_blank_values_count_as_unset() {
    let config = config_from(&[("TOURVISTO_PORT", " "), ("TOURVISTO_CONSTANTS", "")]).expect("config");
    assert_eq!(config.port, DEFAULT_PORT);
    assert!(config.constants_path.is_none());
}

#[test]
fn test_invalid_port_is_config_error() {
    let result = config_from(&[("TOURVISTO_PORT", "eighty")]);
    assert!(matches!(result, Err(AppError::Config(_))));

    let result = config_from(&[("TOURVISTO_PORT", "70000")]);
    assert!(matches!(result, Err(AppError::Config(_))));
}

#[test]
fn test_constants_loaded_from_file() {
    let mut file = NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"{{
            "user": {{ "name": null }},
            "dashboardStats": {{
                "totalUsers": 5, "totalTrips": 6,
                "usersJoined": {{"currentMonth": 1, "lastMonth": 2}},
                "tripsCreated": {{"currentMonth": 3, "lastMonth": 4}},
                "userRole": {{"total": 7, "currentMonth": 8, "lastMonth": 9}}
            }},
            "allTrips": [
                {{ "id": "t-1", "name": "Solo", "imageUrls": [], "tags": [], "estimatedPrice": 250 }}
            ]
        }}"#
    )
    .expect("write constants");

    let constants = Constants::load(Some(file.path())).expect("load constants");
    assert_eq!(constants.dashboard_stats.total_trips, 6);
    assert_eq!(constants.dashboard_stats.user_role.last_month, 9);
    assert_eq!(constants.all_trips.len(), 1);
    assert_eq!(constants.all_trips[0].first_location(), "");
    assert!(constants.user.as_ref().and_then(|u| u.name.as_ref()).is_none());
}

#[test]
fn test_missing_constants_file_is_io_error() {
    let result = Constants::load(Some(Path::new("/definitely/not/here.json")));
    assert!(matches!(result, Err(AppError::Io(_))));
}

#[test]
fn test_load_without_path_uses_embedded_dataset() {
    let constants = Constants::load(None).expect("embedded");
    assert_eq!(constants.dashboard_stats.total_users, 12450);
}

const STATS_JSON: &str = r#""dashboardStats": {
    "totalUsers": 0, "totalTrips": 0,
    "usersJoined": {"currentMonth": 0, "lastMonth": 0},
    "tripsCreated": {"currentMonth": 0, "lastMonth": 0},
    "userRole": {"total": 0, "currentMonth": 0, "lastMonth": 0}
}"#;

#[test]
fn test_itinerary_day_without_location_loads_as_empty() {
    let raw = format!(
        r#"{{ {STATS_JSON}, "allTrips": [
            {{ "id": 1, "name": "Mystery", "itinerary": [{{"day": 1}}], "estimatedPrice": 10 }}
        ] }}"#
    );
    let constants = Constants::from_json(&raw).expect("load constants");
    assert_eq!(constants.all_trips[0].first_location(), "");
}

#[test]
fn test_fractional_trip_id_loads_and_stringifies() {
    let raw = format!(
        r#"{{ {STATS_JSON}, "allTrips": [
            {{ "id": 1.5, "name": "Half", "estimatedPrice": "$5" }}
        ] }}"#
    );
    let constants = Constants::from_json(&raw).expect("load constants");
    assert_eq!(constants.all_trips[0].id.to_string(), "1.5");
}
