use async_trait::async_trait;
use blitz_core::model::MapPoint;

use super::HttpRepository;
use crate::repository::{ApiError, MapRepository};

#[async_trait]
impl MapRepository for HttpRepository {
    async fn list_points(&self) -> Result<Vec<MapPoint>, ApiError> {
        let path = self.config().endpoints().map_locations.clone();
        self.get_list(&path).await
    }
}
