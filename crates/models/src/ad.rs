//! `ads` entity and the queries the ad store is built from.
//!
//! Every listing is ordered by recency: `created_at DESC, id DESC`.
use sea_orm::{entity::prelude::*, sea_query::LikeExpr, PaginatorTrait, QueryOrder, Select, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{errors, user};

pub const TITLE_MAX_CHARS: usize = 200;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ads")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub img: Option<String>,
    pub active: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity)
                .from(Column::UserId)
                .to(user::Column::Id)
                .into(),
        }
    }
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Fields of an ad that callers may write.
#[derive(Clone, Debug, PartialEq)]
pub struct AdFields {
    pub title: String,
    pub content: String,
    pub img: Option<String>,
    pub active: bool,
}

pub fn validate_title(title: &str) -> Result<(), errors::ModelError> {
    if title.trim().is_empty() {
        return Err(errors::ModelError::Validation("title required".into()));
    }
    if title.chars().count() > TITLE_MAX_CHARS {
        return Err(errors::ModelError::Validation(format!("title longer than {TITLE_MAX_CHARS} characters")));
    }
    Ok(())
}

/// Escape LIKE wildcards so the keyword matches literally.
pub fn contains_pattern(keyword: &str) -> String {
    let mut out = String::with_capacity(keyword.len() + 2);
    out.push('%');
    for c in keyword.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('%');
    out
}

fn by_recency(select: Select<Entity>) -> Select<Entity> {
    select.order_by_desc(Column::CreatedAt).order_by_desc(Column::Id)
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    fields: AdFields,
) -> Result<Model, errors::ModelError> {
    validate_title(&fields.title)?;
    let am = ActiveModel {
        user_id: Set(user_id),
        title: Set(fields.title),
        content: Set(fields.content),
        img: Set(fields.img),
        active: Set(fields.active),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

/// Overwrite the writable fields; owner and `created_at` stay as stored.
pub async fn update<C: ConnectionTrait>(
    db: &C,
    id: i32,
    fields: AdFields,
) -> Result<Model, errors::ModelError> {
    validate_title(&fields.title)?;
    let mut found: ActiveModel = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| errors::ModelError::NotFound(format!("ad {id}")))?
        .into();
    found.title = Set(fields.title);
    found.content = Set(fields.content);
    found.img = Set(fields.img);
    found.active = Set(fields.active);
    Ok(found.update(db).await?)
}

pub async fn set_active<C: ConnectionTrait>(
    db: &C,
    id: i32,
    active: bool,
) -> Result<Model, errors::ModelError> {
    let mut found: ActiveModel = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| errors::ModelError::NotFound(format!("ad {id}")))?
        .into();
    found.active = Set(active);
    Ok(found.update(db).await?)
}

pub async fn find_by_id<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

/// Returns whether a row was removed.
pub async fn delete_by_id<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}

pub async fn find_all_active<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, errors::ModelError> {
    Ok(by_recency(Entity::find().filter(Column::Active.eq(true))).all(db).await?)
}

pub async fn find_by_title_containing_active<C: ConnectionTrait>(
    db: &C,
    keyword: &str,
) -> Result<Vec<Model>, errors::ModelError> {
    let pattern = LikeExpr::new(contains_pattern(keyword)).escape('\\');
    let select = Entity::find()
        .filter(Column::Active.eq(true))
        .filter(Column::Title.like(pattern));
    Ok(by_recency(select).all(db).await?)
}

pub async fn find_all_by_user<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
) -> Result<Vec<Model>, errors::ModelError> {
    Ok(by_recency(Entity::find().filter(Column::UserId.eq(user_id))).all(db).await?)
}

/// One page of every ad, active or not. `page_idx` is 0-based.
pub async fn find_page_by_recency<C: ConnectionTrait>(
    db: &C,
    page_idx: u64,
    per_page: u64,
) -> Result<Vec<Model>, errors::ModelError> {
    let paginator = by_recency(Entity::find()).paginate(db, per_page);
    Ok(paginator.fetch_page(page_idx).await?)
}

/// One page of active ads plus the number of active ads overall. `page_idx` is 0-based.
pub async fn find_active_page<C: ConnectionTrait>(
    db: &C,
    page_idx: u64,
    per_page: u64,
) -> Result<(Vec<Model>, u64), errors::ModelError> {
    let paginator = by_recency(Entity::find().filter(Column::Active.eq(true))).paginate(db, per_page);
    let total = paginator.num_items().await?;
    let items = paginator.fetch_page(page_idx).await?;
    Ok((items, total))
}
