//! Device tokens used to address push notifications, one per login id.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

pub struct PushTokenRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PushTokenRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores the device token for a user, replacing any previous token.
    pub async fn upsert(&self, login_id: &str, token: String) -> Result<(), DbErr> {
        entity::prelude::PushToken::insert(entity::push_token::ActiveModel {
            login_id: ActiveValue::Set(login_id.to_string()),
            token: ActiveValue::Set(token),
            updated_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::push_token::Column::LoginId)
                .update_columns([
                    entity::push_token::Column::Token,
                    entity::push_token::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Gets the device token registered for a user.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - A token is registered
    /// - `Ok(None)` - The user never registered a token
    /// - `Err(DbErr)` - Database error during query
    pub async fn find(&self, login_id: &str) -> Result<Option<String>, DbErr> {
        let entity = entity::prelude::PushToken::find_by_id(login_id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(|row| row.token))
    }
}
