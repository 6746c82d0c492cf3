use sea_orm::entity::prelude::*;

/// One delivered event reminder.
///
/// `key` is `event_id@offset_seconds`; a row existing for a key means that
/// reminder has fired and must never fire again.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sent_ping")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub key: String,
    pub event_id: String,
    pub offset_seconds: i64,
    pub sent_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
