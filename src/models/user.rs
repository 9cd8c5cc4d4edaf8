use chrono::NaiveDate;
use serde::Deserialize;

pub const GUEST_NAME: &str = "Guest";

/// The signed-in admin shown in the greeting and the sidebar footer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Display name for the current user, falling back to "Guest".
///
/// Never returns an empty string: a blank name is treated as missing.
/// Non-blank names are returned as given.
pub fn resolve_display_name(user: Option<&User>) -> String {
    user.and_then(|u| u.name.as_deref())
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(GUEST_NAME)
        .to_string()
}

pub fn avatar_initial(display_name: &str) -> String {
    display_name.trim_start().chars().next().unwrap_or('?').to_uppercase().to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Admin,
    User,
}

impl UserStatus {
    pub fn label(&self) -> &'static str {
        match self {
            UserStatus::Admin => "Admin",
            UserStatus::User => "User",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            UserStatus::Admin => "status-admin",
            UserStatus::User => "status-user",
        }
    }
}

/// One entry of the user directory listed on `/all-users`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub date_joined: NaiveDate,
    #[serde(default)]
    pub itinerary_created: u32,
    pub status: UserStatus,
}

/// Row projection of a `UserRecord` for the users table.
#[derive(Debug, Clone)]
pub struct UserRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub image_url: Option<String>,
    pub avatar_initial: String,
    pub date_joined: String,
    pub itinerary_created: u32,
    pub status: UserStatus,
}

impl From<&UserRecord> for UserRow {
    fn from(record: &UserRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            email: record.email.clone(),
            image_url: record.image_url.clone(),
            avatar_initial: avatar_initial(&record.name),
            date_joined: format_date(record.date_joined),
            itinerary_created: record.itinerary_created,
            status: record.status,
        }
    }
}

/// e.g. "January 05, 2025"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}
