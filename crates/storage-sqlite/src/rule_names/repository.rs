use poseidon_core::rule_names::{NewRuleName, RuleName, RuleNameRepositoryTrait, RuleNameUpdate};
use poseidon_core::Result;

use super::model::{RuleNameChangesetDB, RuleNameDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::rule_names;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;
use uuid::Uuid;

pub struct RuleNameRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl RuleNameRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        RuleNameRepository { pool, writer }
    }
}

#[async_trait]
impl RuleNameRepositoryTrait for RuleNameRepository {
    fn get_by_id(&self, rule_id: &str) -> Result<RuleName> {
        let mut conn = get_connection(&self.pool)?;
        let row = rule_names::table
            .find(rule_id)
            .first::<RuleNameDB>(&mut conn)
            .into_core()?;
        Ok(RuleName::from(row))
    }

    fn list(&self) -> Result<Vec<RuleName>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = rule_names::table
            .load::<RuleNameDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(RuleName::from).collect())
    }

    async fn create(&self, new_rule: NewRuleName) -> Result<RuleName> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<RuleName> {
                let row = RuleNameDB::from_new(new_rule, Uuid::new_v4().to_string());
                let result = diesel::insert_into(rule_names::table)
                    .values(&row)
                    .returning(RuleNameDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(RuleName::from(result))
            })
            .await
    }

    async fn update(&self, rule_id: &str, update: RuleNameUpdate) -> Result<RuleName> {
        let id_owned = rule_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<RuleName> {
                let changes = RuleNameChangesetDB::from(update);
                diesel::update(rule_names::table.find(id_owned.clone()))
                    .set(&changes)
                    .execute(conn)
                    .into_core()?;
                let row = rule_names::table
                    .find(id_owned)
                    .first::<RuleNameDB>(conn)
                    .into_core()?;
                Ok(RuleName::from(row))
            })
            .await
    }

    async fn delete(&self, rule_id: &str) -> Result<usize> {
        let id_owned = rule_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(rule_names::table.find(id_owned))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}
