//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, Set};

/// Database rendition of the category enum. Stored as the exact literals
/// the schema's CHECK constraint allows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Category {
    #[sea_orm(string_value = "Fiction")]
    Fiction,
    #[sea_orm(string_value = "Non-Fiction")]
    NonFiction,
}

impl From<Category> for byline_core::domain::Category {
    fn from(category: Category) -> Self {
        match category {
            Category::Fiction => Self::Fiction,
            Category::NonFiction => Self::NonFiction,
        }
    }
}

impl From<byline_core::domain::Category> for Category {
    fn from(category: byline_core::domain::Category) -> Self {
        match category {
            byline_core::domain::Category::Fiction => Self::Fiction,
            byline_core::domain::Category::NonFiction => Self::NonFiction,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub summary: Option<String>,
    pub category: Category,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// Refresh `updated_at` on update writes; creation keeps the
    /// domain-assigned timestamps.
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if !insert {
            self.updated_at = Set(chrono::Utc::now().into());
        }
        Ok(self)
    }
}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for byline_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            summary: model.summary,
            category: model.category.into(),
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl From<byline_core::domain::Post> for ActiveModel {
    fn from(post: byline_core::domain::Post) -> Self {
        Self {
            id: Set(post.id),
            title: Set(post.title),
            content: Set(post.content),
            summary: Set(post.summary),
            category: Set(post.category.into()),
            created_at: Set(post.created_at.into()),
            updated_at: Set(post.updated_at.into()),
        }
    }
}
