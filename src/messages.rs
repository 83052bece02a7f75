use crate::errors::{Result, UnderwritingError};
use crate::types::MessageKey;

/// message lookup collaborator, keyed by the fixed catalog key strings
///
/// Implementations own localization; the validator only passes keys through
/// and propagates whatever failure the catalog signals for unknown keys.
pub trait MessageCatalog {
    fn lookup(&self, key: &str) -> Result<String>;
}

/// built-in english catalog for the fixed key set
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCatalog;

impl MessageCatalog for DefaultCatalog {
    fn lookup(&self, key: &str) -> Result<String> {
        let text = match key {
            "theloancannotexceed1000000" => "The loan cannot exceed 1000000",
            "debttoincometoohighcomparedtocreditscore" => {
                "Too big Debt-To-Income ratio compared to the credit score"
            }
            "toobigdebttoincomeratio" => "Too big Debt-To-Income ratio",
            "creditscorebelow200" => "Credit score below 200",
            "messagefiredinruletask" => "Message fired in the rule {0} of the task {1}",
            _ => {
                return Err(UnderwritingError::UnknownMessageKey {
                    key: key.to_string(),
                })
            }
        };
        Ok(text.to_string())
    }
}

/// format the rule/task trace line from the catalog template
pub fn format_trace<C: MessageCatalog>(
    catalog: &C,
    rule_name: &str,
    task_name: &str,
) -> Result<String> {
    let template = catalog.lookup(MessageKey::MessageFiredInRuleTask.as_str())?;
    Ok(template.replace("{0}", rule_name).replace("{1}", task_name))
}

/// escape double quotes and strip newlines for embedding in quoted output
pub fn escape_string(s: &str) -> String {
    s.replace('"', "\\\"").replace('\n', "")
}
