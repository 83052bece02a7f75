use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// unique identifier for a loan application
pub type ApplicationId = Uuid;

/// keys understood by the message lookup collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKey {
    /// loan amount over the absolute maximum
    LoanCannotExceedMaximum,
    /// debt-to-income bracket too high for the credit score
    DebtToIncomeTooHighForScore,
    /// repayment over 30% of yearly income
    TooBigDebtToIncomeRatio,
    /// credit score under the absolute floor
    CreditScoreBelowMinimum,
    /// trace template with {0} rule name and {1} task name
    MessageFiredInRuleTask,
}

impl MessageKey {
    /// the catalog key string, fixed external contract
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKey::LoanCannotExceedMaximum => "theloancannotexceed1000000",
            MessageKey::DebtToIncomeTooHighForScore => "debttoincometoohighcomparedtocreditscore",
            MessageKey::TooBigDebtToIncomeRatio => "toobigdebttoincomeratio",
            MessageKey::CreditScoreBelowMinimum => "creditscorebelow200",
            MessageKey::MessageFiredInRuleTask => "messagefiredinruletask",
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// the four underwriting checks, in pipeline order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckKind {
    MaximumAmount,
    RepaymentVsIncomeAndScore,
    MinimumIncome,
    CreditScoreFloor,
}

impl CheckKind {
    /// short name used in traces
    pub fn name(&self) -> &'static str {
        match self {
            CheckKind::MaximumAmount => "maximum amount",
            CheckKind::RepaymentVsIncomeAndScore => "repayment vs income and score",
            CheckKind::MinimumIncome => "minimum income",
            CheckKind::CreditScoreFloor => "credit score floor",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
