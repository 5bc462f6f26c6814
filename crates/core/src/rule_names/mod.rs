//! Rule names module - domain models, services, and traits.

mod rule_names_model;
mod rule_names_service;
mod rule_names_traits;

pub use rule_names_model::{NewRuleName, RuleName, RuleNameUpdate};
pub use rule_names_service::RuleNameService;
pub use rule_names_traits::{RuleNameRepositoryTrait, RuleNameServiceTrait};
