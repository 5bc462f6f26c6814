use crate::errors::Result;
use crate::rule_names::rule_names_model::{NewRuleName, RuleName, RuleNameUpdate};
use async_trait::async_trait;

/// Trait for rule name repository operations
#[async_trait]
pub trait RuleNameRepositoryTrait: Send + Sync {
    fn get_by_id(&self, rule_id: &str) -> Result<RuleName>;
    fn list(&self) -> Result<Vec<RuleName>>;
    async fn create(&self, new_rule: NewRuleName) -> Result<RuleName>;
    async fn update(&self, rule_id: &str, update: RuleNameUpdate) -> Result<RuleName>;
    async fn delete(&self, rule_id: &str) -> Result<usize>;
}

/// Trait for rule name service operations
#[async_trait]
pub trait RuleNameServiceTrait: Send + Sync {
    fn get_rule_name(&self, rule_id: &str) -> Result<RuleName>;
    fn get_rule_names(&self) -> Result<Vec<RuleName>>;
    async fn create_rule_name(&self, new_rule: NewRuleName) -> Result<RuleName>;
    async fn update_rule_name(&self, rule_id: &str, update: RuleNameUpdate) -> Result<RuleName>;
    async fn delete_rule_name(&self, rule_id: &str) -> Result<()>;
}
