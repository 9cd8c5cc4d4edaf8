use serde::Deserialize;

// ---------- Types ----------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCount {
    pub current_month: i64,
    pub last_month: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleCount {
    pub total: i64,
    pub current_month: i64,
    pub last_month: i64,
}

/// Aggregates shown in the dashboard's stats row.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_users: i64,
    pub total_trips: i64,
    pub users_joined: MonthlyCount,
    pub trips_created: MonthlyCount,
    pub user_role: RoleCount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Increment,
    Decrement,
    NoChange,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendResult {
    pub trend: Trend,
    pub percentage: f64,
}

impl TrendResult {
    pub fn rounded_percentage(&self) -> i64 {
        self.percentage.round() as i64
    }

    pub fn css_class(&self) -> &'static str {
        match self.trend {
            Trend::Increment => "trend-up",
            Trend::Decrement => "trend-down",
            Trend::NoChange => "trend-flat",
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self.trend {
            Trend::Increment => "▲",
            Trend::Decrement => "▼",
            Trend::NoChange => "■",
        }
    }
}

/// Month-over-month change between two counts.
pub fn trend(current_month: i64, last_month: i64) -> TrendResult {
    if last_month == 0 {
        return if current_month == 0 {
            TrendResult { trend: Trend::NoChange, percentage: 0.0 }
        } else {
            TrendResult { trend: Trend::Increment, percentage: 100.0 }
        };
    }

    // f64 so counts near the i64 bounds cannot overflow
    let change = current_month as f64 - last_month as f64;
    let percentage = (change / last_month as f64 * 100.0).abs();
    if change > 0.0 {
        TrendResult { trend: Trend::Increment, percentage }
    } else if change < 0.0 {
        TrendResult { trend: Trend::Decrement, percentage }
    } else {
        TrendResult { trend: Trend::NoChange, percentage: 0.0 }
    }
}

/// A total plus the two monthly figures it is compared against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsCard {
    pub header_title: &'static str,
    pub total: i64,
    pub current_month: i64,
    pub last_month: i64,
}

impl StatsCard {
    pub fn trend(&self) -> TrendResult {
        trend(self.current_month, self.last_month)
    }
}

/// The three dashboard cards, in display order.
///
/// "Active Users Today" is fed from `user_role`; the dataset has no daily
/// activity figure.
pub fn stats_cards(stats: &DashboardStats) -> Vec<StatsCard> {
    let DashboardStats { total_users, total_trips, users_joined, trips_created, user_role } = *stats;

    vec![
        StatsCard {
            header_title: "Total Users",
            total: total_users,
            current_month: users_joined.current_month,
            last_month: users_joined.last_month,
        },
        StatsCard {
            header_title: "Total Trips",
            total: total_trips,
            current_month: trips_created.current_month,
            last_month: trips_created.last_month,
        },
        StatsCard {
            header_title: "Active Users Today",
            total: user_role.total,
            current_month: user_role.current_month,
            last_month: user_role.last_month,
        },
    ]
}
