//! Named per-item counters.
//!
//! Counters are rows keyed by `(counter_key, item_cd)`. Adjustments are a single
//! `INSERT .. ON CONFLICT DO UPDATE SET count = count + delta` statement, so concurrent
//! adjustments never lose updates and a missing counter starts from zero.

use migration::OnConflict;
use sea_orm::{sea_query::Expr, ActiveValue, ConnectionTrait, DbErr, EntityTrait, ExprTrait};

pub struct CounterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CounterRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Atomically adds `delta` (which may be negative) to a counter.
    ///
    /// # Arguments
    /// - `counter_key` - Counter name, e.g. `ORDER_CNT`
    /// - `item_cd` - Item the counter belongs to
    /// - `delta` - Amount to add
    ///
    /// # Returns
    /// - `Ok(())` - Counter created or adjusted
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn adjust(&self, counter_key: &str, item_cd: &str, delta: i64) -> Result<(), DbErr> {
        use entity::item_counter::Column;

        entity::prelude::ItemCounter::insert(entity::item_counter::ActiveModel {
            counter_key: ActiveValue::Set(counter_key.to_string()),
            item_cd: ActiveValue::Set(item_cd.to_string()),
            count: ActiveValue::Set(delta),
        })
        .on_conflict(
            OnConflict::columns([Column::CounterKey, Column::ItemCd])
                .value(
                    Column::Count,
                    Expr::col((entity::prelude::ItemCounter, Column::Count)).add(delta),
                )
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Gets the current value of a counter, or 0 if it was never adjusted.
    pub async fn get(&self, counter_key: &str, item_cd: &str) -> Result<i64, DbErr> {
        let entity = entity::prelude::ItemCounter::find_by_id((
            counter_key.to_string(),
            item_cd.to_string(),
        ))
        .one(self.db)
        .await?;

        Ok(entity.map_or(0, |counter| counter.count))
    }
}
