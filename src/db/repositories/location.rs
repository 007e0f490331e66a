use crate::entities::{locations, prelude::*};
use crate::models::Location;
use anyhow::Result;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

pub struct LocationRepository {
    conn: DatabaseConnection,
}

impl LocationRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model(m: locations::Model) -> Location {
        Location {
            search_query: m.search_query,
            formatted_query: m.formatted_query,
            latitude: m.latitude,
            longitude: m.longitude,
        }
    }

    /// Oldest row stored for `search_query`, matched exactly (case-sensitive).
    pub async fn find_first_by_query(&self, search_query: &str) -> Result<Option<Location>> {
        let row = Locations::find()
            .filter(locations::Column::SearchQuery.eq(search_query))
            .order_by_asc(locations::Column::Id)
            .one(&self.conn)
            .await?;

        Ok(row.map(Self::map_model))
    }

    /// Plain insert; an existing row for the same query is left untouched.
    pub async fn insert(&self, location: &Location) -> Result<i32> {
        let active_model = locations::ActiveModel {
            search_query: Set(location.search_query.clone()),
            formatted_query: Set(location.formatted_query.clone()),
            latitude: Set(location.latitude.clone()),
            longitude: Set(location.longitude.clone()),
            created_at: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        };

        let res = Locations::insert(active_model).exec(&self.conn).await?;
        Ok(res.last_insert_id)
    }

    pub async fn count_by_query(&self, search_query: &str) -> Result<u64> {
        let count = Locations::find()
            .filter(locations::Column::SearchQuery.eq(search_query))
            .count(&self.conn)
            .await?;

        Ok(count)
    }

    pub async fn list_recent(&self, limit: u64) -> Result<Vec<Location>> {
        let rows = Locations::find()
            .order_by_desc(locations::Column::Id)
            .limit(limit)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }
}
