use std::sync::Arc;

use super::rule_names_model::{NewRuleName, RuleName, RuleNameUpdate};
use super::rule_names_traits::{RuleNameRepositoryTrait, RuleNameServiceTrait};
use crate::errors::{DatabaseError, Error, Result};
use async_trait::async_trait;

/// Service for managing rule names.
pub struct RuleNameService {
    repository: Arc<dyn RuleNameRepositoryTrait>,
}

impl RuleNameService {
    pub fn new(repository: Arc<dyn RuleNameRepositoryTrait>) -> Self {
        RuleNameService { repository }
    }
}

#[async_trait]
impl RuleNameServiceTrait for RuleNameService {
    fn get_rule_name(&self, rule_id: &str) -> Result<RuleName> {
        self.repository.get_by_id(rule_id)
    }

    fn get_rule_names(&self) -> Result<Vec<RuleName>> {
        self.repository.list()
    }

    async fn create_rule_name(&self, new_rule: NewRuleName) -> Result<RuleName> {
        new_rule.validate()?;
        self.repository.create(new_rule).await
    }

    async fn update_rule_name(&self, rule_id: &str, update: RuleNameUpdate) -> Result<RuleName> {
        update.validate()?;
        self.repository.update(rule_id, update).await
    }

    async fn delete_rule_name(&self, rule_id: &str) -> Result<()> {
        let affected = self.repository.delete(rule_id).await?;
        if affected == 0 {
            return Err(Error::Database(DatabaseError::NotFound(format!(
                "Rule name {} not found",
                rule_id
            ))));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::RwLock;

    struct MockRuleNameRepository {
        rules: RwLock<Vec<RuleName>>,
    }

    #[async_trait]
    impl RuleNameRepositoryTrait for MockRuleNameRepository {
        fn get_by_id(&self, rule_id: &str) -> Result<RuleName> {
            self.rules
                .read()
                .unwrap()
                .iter()
                .find(|r| r.id == rule_id)
                .cloned()
                .ok_or_else(|| {
                    Error::Database(DatabaseError::NotFound("Record not found".to_string()))
                })
        }

        fn list(&self) -> Result<Vec<RuleName>> {
            Ok(self.rules.read().unwrap().clone())
        }

        async fn create(&self, new_rule: NewRuleName) -> Result<RuleName> {
            let mut rules = self.rules.write().unwrap();
            let rule = RuleName {
                id: format!("rule-{}", rules.len() + 1),
                name: new_rule.name,
                description: new_rule.description,
                json: new_rule.json,
                template: new_rule.template,
                sql_str: new_rule.sql_str,
                sql_part: new_rule.sql_part,
            };
            rules.push(rule.clone());
            Ok(rule)
        }

        async fn update(&self, rule_id: &str, update: RuleNameUpdate) -> Result<RuleName> {
            let mut rules = self.rules.write().unwrap();
            let rule = rules.iter_mut().find(|r| r.id == rule_id).ok_or_else(|| {
                Error::Database(DatabaseError::NotFound("Record not found".to_string()))
            })?;
            rule.name = update.name;
            rule.description = update.description;
            rule.json = update.json;
            rule.template = update.template;
            rule.sql_str = update.sql_str;
            rule.sql_part = update.sql_part;
            Ok(rule.clone())
        }

        async fn delete(&self, rule_id: &str) -> Result<usize> {
            let mut rules = self.rules.write().unwrap();
            let before = rules.len();
            rules.retain(|r| r.id != rule_id);
            Ok(before - rules.len())
        }
    }

    fn service() -> RuleNameService {
        RuleNameService::new(Arc::new(MockRuleNameRepository {
            rules: RwLock::new(Vec::new()),
        }))
    }

    #[tokio::test]
    async fn blank_name_rejected() {
        let service = service();
        let rule = NewRuleName {
            name: "   ".to_string(),
            description: None,
            json: None,
            template: None,
            sql_str: None,
            sql_part: None,
        };
        assert!(matches!(
            service.create_rule_name(rule).await,
            Err(Error::Validation(_))
        ));
    }

    #[tokio::test]
    async fn create_update_delete_round_trip() {
        let service = service();
        let created = service
            .create_rule_name(NewRuleName {
                name: "max-notional".to_string(),
                description: Some("Reject trades above limit".to_string()),
                json: None,
                template: None,
                sql_str: None,
                sql_part: None,
            })
            .await
            .unwrap();

        let updated = service
            .update_rule_name(
                &created.id,
                RuleNameUpdate {
                    name: "max-notional".to_string(),
                    description: Some("Reject trades above the book limit".to_string()),
                    json: Some("{\"limit\": 1000000}".to_string()),
                    template: None,
                    sql_str: None,
                    sql_part: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.json.as_deref(), Some("{\"limit\": 1000000}"));

        service.delete_rule_name(&created.id).await.unwrap();
        assert!(service.get_rule_name(&created.id).is_err());
    }
}
