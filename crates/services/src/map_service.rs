use std::sync::Arc;

use api::ApiError;
use api::repository::MapRepository;
use blitz_core::model::MapPoint;

#[derive(Clone)]
pub struct MapService {
    map: Arc<dyn MapRepository>,
}

impl MapService {
    #[must_use]
    pub fn new(map: Arc<dyn MapRepository>) -> Self {
        Self { map }
    }

    /// Geocoded points; entries with missing or unparseable coordinates are dropped.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the backend cannot be read.
    pub async fn points(&self) -> Result<Vec<MapPoint>, ApiError> {
        let mut points = self.map.list_points().await?;
        points.retain(|p| p.coordinates().is_some());
        Ok(points)
    }
}
