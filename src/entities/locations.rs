use sea_orm::entity::prelude::*;

/// Geocoding results cached by the caller's search string.
///
/// `search_query` is indexed but not unique: concurrent misses on the same
/// key may each insert a row, and lookups read the oldest one.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "locations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub search_query: String,
    pub formatted_query: String,
    pub latitude: String,
    pub longitude: String,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
