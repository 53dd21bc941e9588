//! Blog entity for SeaORM.

use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::StringLen;

use blog_core::ports::BlogRecord;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blog")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_date: DateTimeWithTimeZone,
    pub last_modified_date: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to the repository record.
impl From<Model> for BlogRecord {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            title: model.title,
            content: model.content,
            created_date: model.created_date.into(),
            last_modified_date: model.last_modified_date.into(),
        }
    }
}

/// Conversion from the repository record to SeaORM ActiveModel.
///
/// A record without id becomes an insert with a database-generated key.
/// A record with id becomes an update that never touches `created_date`.
impl From<BlogRecord> for ActiveModel {
    fn from(record: BlogRecord) -> Self {
        match record.id {
            None => Self {
                id: NotSet,
                title: Set(record.title),
                content: Set(record.content),
                created_date: Set(record.created_date.into()),
                last_modified_date: Set(record.last_modified_date.into()),
            },
            Some(id) => Self {
                id: Unchanged(id),
                title: Set(record.title),
                content: Set(record.content),
                created_date: Unchanged(record.created_date.into()),
                last_modified_date: Set(record.last_modified_date.into()),
            },
        }
    }
}
