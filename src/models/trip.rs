use std::fmt;

use serde::Deserialize;

/// Number of trips shown in the dashboard's "Created Trips" grid.
pub const TRIP_PREVIEW_LIMIT: usize = 4;

/// Trip identifiers arrive either as numbers (integer or not) or as document ids.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TripId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TripId::Number(n) => write!(f, "{n}"),
            TripId::Text(s) => f.write_str(s),
        }
    }
}

/// Estimated price, either a bare amount or a preformatted label like "$1,000".
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(f64),
    Label(String),
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Amount(n) => write!(f, "{n}"),
            Price::Label(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItineraryDay {
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: TripId,
    pub name: String,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub itinerary: Option<Vec<ItineraryDay>>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub estimated_price: Price,
}

impl Trip {
    /// Location of the first itinerary day, or "" when there is none.
    pub fn first_location(&self) -> &str {
        self.itinerary
            .as_deref()
            .and_then(|days| days.first())
            .map(|day| day.location.as_str())
            .unwrap_or("")
    }
}

/// What a trip card needs to render.
#[derive(Debug, Clone, PartialEq)]
pub struct TripCard {
    pub id: String,
    pub name: String,
    pub location: String,
    /// `None` when the trip has no images; the card decides what to show.
    pub image_url: Option<String>,
    pub tags: Vec<String>,
    pub price: Price,
}

impl From<&Trip> for TripCard {
    fn from(trip: &Trip) -> Self {
        Self {
            id: trip.id.to_string(),
            name: trip.name.clone(),
            location: trip.first_location().to_string(),
            image_url: trip.image_urls.first().cloned(),
            tags: trip.tags.clone(),
            price: trip.estimated_price.clone(),
        }
    }
}

/// First `TRIP_PREVIEW_LIMIT` trips as cards, in source order.
pub fn preview_cards(trips: &[Trip]) -> Vec<TripCard> {
    trips.iter().take(TRIP_PREVIEW_LIMIT).map(TripCard::from).collect()
}
