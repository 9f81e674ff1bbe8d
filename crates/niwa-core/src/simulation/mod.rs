//! Rule sets and the tick scheduler

mod ecology;
mod granular;
mod rule_set;
mod scheduler;

pub use ecology::EcologyRules;
pub use granular::GranularRules;
pub use rule_set::RuleSet;
pub use scheduler::{Command, Simulation};
