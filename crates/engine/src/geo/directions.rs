use spyglass_shared::Location;

pub const DIRECTIONS_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/directions/json";

/// What [`Directions::distance`] reports for any pair of points.
pub const STUB_DISTANCE: i64 = 5;

/// Directions provider stand-in. It knows how to address the provider but
/// never sends a request.
#[derive(Clone, Debug, Default)]
pub struct Directions {
    api_key: Option<String>,
}

impl Directions {
    pub fn new(api_key: Option<String>) -> Self {
        Self { api_key }
    }

    pub fn request_url(&self, origin: &Location, destination: &Location) -> String {
        format!(
            "{}?origin={}&destination={}&key={}",
            DIRECTIONS_ENDPOINT,
            origin,
            destination,
            self.api_key.as_deref().unwrap_or("")
        )
    }

    /// Not implemented: always [`STUB_DISTANCE`].
    pub fn distance(&self, origin: &Location, destination: &Location) -> i64 {
        let _url = self.request_url(origin, destination);
        tracing::trace!(
            %origin,
            %destination,
            has_key = self.api_key.is_some(),
            "Directions lookup not implemented, using fixed distance"
        );
        STUB_DISTANCE
    }
}
