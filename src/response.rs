use serde::{Deserialize, Serialize};

use crate::loan::Loan;
use crate::validator::Decision;

/// serializable response document for one evaluated loan
///
/// Shape is a fixed external contract: `approved` plus a nested `response`
/// object whose `messages` field, when present, is the bracketed string
/// rendering of the message list, not a structured array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionResponse {
    pub approved: bool,
    pub response: ResponseBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseBody {
    pub decision: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<String>,
}

impl DecisionResponse {
    pub fn from_loan(loan: &Loan) -> Self {
        Self::build(loan.is_approved(), &loan.yearly_repayment().to_string(), loan.messages())
    }

    pub fn from_decision(decision: &Decision) -> Self {
        Self::build(
            decision.approved,
            &decision.yearly_repayment.to_string(),
            &decision.messages,
        )
    }

    fn build(approved: bool, yearly_repayment: &str, messages: &[String]) -> Self {
        if approved {
            Self {
                approved: true,
                response: ResponseBody {
                    decision: format!(
                        "Your loan is approved with a yearly repayment of {}",
                        yearly_repayment
                    ),
                    messages: None,
                },
            }
        } else {
            Self {
                approved: false,
                response: ResponseBody {
                    decision: "Your loan is rejected".to_string(),
                    messages: Some(render_messages(messages)),
                },
            }
        }
    }

    /// convert to compact json string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// bracketed, comma-space-separated rendering of the message list
pub fn render_messages(messages: &[String]) -> String {
    format!("[{}]", messages.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Money;
    use crate::loan::Borrower;
    use crate::validator::LoanValidator;

    fn evaluated(amount: i64, repayment: i64, score: i32, income: i64) -> Loan {
        let mut loan =
            Loan::new(Money::from_major(amount), Money::from_major(repayment)).unwrap();
        let borrower = Borrower::new("test", score, Money::from_major(income));
        LoanValidator::new().validate(&mut loan, &borrower).unwrap();
        loan
    }

    #[test]
    fn test_render_messages() {
        assert_eq!(render_messages(&[]), "[]");
        assert_eq!(render_messages(&["one".to_string()]), "[one]");
        assert_eq!(
            render_messages(&["one".to_string(), "two".to_string()]),
            "[one, two]"
        );
    }

    #[test]
    fn test_approved_response_shape() {
        let loan = evaluated(500_000, 50_000, 700, 200_000);
        let response = DecisionResponse::from_loan(&loan);

        let value: serde_json::Value =
            serde_json::from_str(&response.to_json().unwrap()).unwrap();
        assert_eq!(value["approved"], serde_json::json!(true));
        assert_eq!(
            value["response"]["decision"],
            serde_json::json!("Your loan is approved with a yearly repayment of 50000")
        );
        // no messages field on approval
        assert!(value["response"].get("messages").is_none());
    }

    #[test]
    fn test_rejected_response_embeds_messages_as_one_string() {
        let loan = evaluated(2_000_000, 0, 150, 0);
        let response = DecisionResponse::from_loan(&loan);

        let value: serde_json::Value =
            serde_json::from_str(&response.to_json().unwrap()).unwrap();
        assert_eq!(value["approved"], serde_json::json!(false));
        assert_eq!(
            value["response"]["decision"],
            serde_json::json!("Your loan is rejected")
        );
        assert_eq!(
            value["response"]["messages"],
            serde_json::json!("[The loan cannot exceed 1000000, Credit score below 200]")
        );
    }

    #[test]
    fn test_from_decision_matches_from_loan() {
        use hourglass_rs::{SafeTimeProvider, TimeSource};

        let mut loan =
            Loan::new(Money::from_major(2_000_000), Money::from_major(1_000)).unwrap();
        let borrower = Borrower::new("test", 700, Money::from_major(200_000));
        let validator = LoanValidator::new();
        let time = SafeTimeProvider::new(TimeSource::Test(chrono::Utc::now()));

        let decision = validator.decide(&mut loan, &borrower, &time).unwrap();

        assert_eq!(
            DecisionResponse::from_decision(&decision),
            DecisionResponse::from_loan(&loan)
        );
    }

    #[test]
    fn test_round_trip() {
        let loan = evaluated(2_000_000, 1_000, 700, 200_000);
        let response = DecisionResponse::from_loan(&loan);
        let parsed: DecisionResponse =
            serde_json::from_str(&response.to_json_pretty().unwrap()).unwrap();
        assert_eq!(parsed, response);
    }
}
