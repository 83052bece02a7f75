use chrono::{DateTime, Utc};
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};

use crate::checks::run_checks;
use crate::decimal::Money;
use crate::errors::Result;
use crate::loan::{Borrower, Loan};
use crate::messages::{DefaultCatalog, MessageCatalog};
use crate::types::ApplicationId;

/// the fixed four-check underwriting pipeline
///
/// Runs the checks in order, looks each rejection's message up in the
/// catalog and folds it into the loan. Not a rules engine: the check set
/// and order are fixed.
pub struct LoanValidator<C: MessageCatalog = DefaultCatalog> {
    catalog: C,
}

impl LoanValidator<DefaultCatalog> {
    /// validator with the built-in english catalog
    pub fn new() -> Self {
        Self {
            catalog: DefaultCatalog,
        }
    }
}

impl Default for LoanValidator<DefaultCatalog> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: MessageCatalog> LoanValidator<C> {
    /// validator with a caller-supplied message catalog
    pub fn with_catalog(catalog: C) -> Self {
        Self { catalog }
    }

    /// evaluate the loan in place
    ///
    /// Never errors on numeric input; the only failure source is the message
    /// catalog, whose error propagates untouched. Calling this twice on the
    /// same loan appends duplicate messages and never re-approves.
    pub fn validate(&self, loan: &mut Loan, borrower: &Borrower) -> Result<()> {
        for event in run_checks(loan, borrower) {
            let message = self.catalog.lookup(event.message_key.as_str())?;
            loan.reject(message);
        }
        Ok(())
    }

    /// evaluate the loan and produce an immutable decision record
    pub fn decide(
        &self,
        loan: &mut Loan,
        borrower: &Borrower,
        time: &SafeTimeProvider,
    ) -> Result<Decision> {
        self.validate(loan, borrower)?;
        Ok(Decision {
            application_id: loan.application_id(),
            approved: loan.is_approved(),
            yearly_repayment: loan.yearly_repayment(),
            messages: loan.messages().to_vec(),
            decided_at: time.now(),
        })
    }
}

/// immutable summary of one completed evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub application_id: ApplicationId,
    pub approved: bool,
    pub yearly_repayment: Money,
    pub messages: Vec<String>,
    pub decided_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::UnderwritingError;
    use hourglass_rs::TimeSource;

    fn loan(amount: i64, yearly_repayment: i64) -> Loan {
        Loan::new(Money::from_major(amount), Money::from_major(yearly_repayment)).unwrap()
    }

    fn borrower(credit_score: i32, yearly_income: i64) -> Borrower {
        Borrower::new("test", credit_score, Money::from_major(yearly_income))
    }

    #[test]
    fn test_worked_example_is_approved() {
        let validator = LoanValidator::new();
        let mut l = loan(500_000, 50_000);

        validator.validate(&mut l, &borrower(700, 200_000)).unwrap();

        assert!(l.is_approved());
        assert!(l.messages().is_empty());
    }

    #[test]
    fn test_amount_over_maximum_is_rejected() {
        let validator = LoanValidator::new();
        let mut l = loan(2_000_000, 50_000);

        validator.validate(&mut l, &borrower(700, 200_000)).unwrap();

        assert!(!l.is_approved());
        assert_eq!(l.messages(), ["The loan cannot exceed 1000000"]);
    }

    #[test]
    fn test_low_credit_score_rejects_regardless_of_other_inputs() {
        let validator = LoanValidator::new();
        let mut l = loan(1_000, 0);

        validator.validate(&mut l, &borrower(199, 1_000_000)).unwrap();

        assert!(!l.is_approved());
        assert_eq!(l.messages(), ["Credit score below 200"]);
    }

    #[test]
    fn test_zero_income_skips_ratio_check_but_fails_income_check() {
        let validator = LoanValidator::new();
        let mut l = loan(100_000, 10_000);

        validator.validate(&mut l, &borrower(100, 0)).unwrap();

        // check 2 skipped: no bracket message even though score is 100
        assert!(!l.is_approved());
        assert_eq!(
            l.messages(),
            ["Too big Debt-To-Income ratio", "Credit score below 200"]
        );
    }

    #[test]
    fn test_messages_accumulate_in_check_order() {
        let validator = LoanValidator::new();
        let mut l = loan(2_000_000, 60_000);

        // ratio 60, score 100: every check fires
        validator.validate(&mut l, &borrower(100, 100_000)).unwrap();

        assert_eq!(
            l.messages(),
            [
                "The loan cannot exceed 1000000",
                "Too big Debt-To-Income ratio compared to the credit score",
                "Too big Debt-To-Income ratio",
                "Credit score below 200",
            ]
        );
    }

    #[test]
    fn test_revalidation_appends_duplicates_and_never_re_approves() {
        let validator = LoanValidator::new();
        let mut l = loan(2_000_000, 50_000);
        let b = borrower(700, 200_000);

        validator.validate(&mut l, &b).unwrap();
        validator.validate(&mut l, &b).unwrap();

        assert!(!l.is_approved());
        assert_eq!(
            l.messages(),
            ["The loan cannot exceed 1000000", "The loan cannot exceed 1000000"]
        );
    }

    #[test]
    fn test_catalog_failure_propagates() {
        struct EmptyCatalog;
        impl MessageCatalog for EmptyCatalog {
            fn lookup(&self, key: &str) -> crate::errors::Result<String> {
                Err(UnderwritingError::UnknownMessageKey {
                    key: key.to_string(),
                })
            }
        }

        let validator = LoanValidator::with_catalog(EmptyCatalog);
        let mut l = loan(2_000_000, 50_000);

        let err = validator.validate(&mut l, &borrower(700, 200_000)).unwrap_err();
        assert!(matches!(
            err,
            UnderwritingError::UnknownMessageKey { key } if key == "theloancannotexceed1000000"
        ));
    }

    #[test]
    fn test_decide_produces_timestamped_record() {
        let validator = LoanValidator::new();
        let time = SafeTimeProvider::new(TimeSource::Test(Utc::now()));
        let mut l = loan(500_000, 50_000);

        let decision = validator.decide(&mut l, &borrower(700, 200_000), &time).unwrap();

        assert_eq!(decision.application_id, l.application_id());
        assert!(decision.approved);
        assert_eq!(decision.yearly_repayment, Money::from_major(50_000));
        assert!(decision.messages.is_empty());
        assert_eq!(decision.decided_at, time.now());
    }
}
