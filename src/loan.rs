use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::Money;
use crate::errors::{Result, UnderwritingError};
use crate::types::ApplicationId;

/// mutable decision holder for one loan application
///
/// A loan starts approved and accumulates rejection messages as the checks
/// run. Rejection is monotonic: once `reject` has been called the loan stays
/// rejected. A loan is single-use per decision; running validation twice on
/// the same instance appends duplicate messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    application_id: ApplicationId,
    amount: Money,
    yearly_repayment: Money,
    approved: bool,
    messages: Vec<String>,
}

impl Loan {
    /// create a new loan application; the amount must be positive
    pub fn new(amount: Money, yearly_repayment: Money) -> Result<Self> {
        if !amount.is_positive() {
            return Err(UnderwritingError::InvalidLoanAmount { amount });
        }

        Ok(Self {
            application_id: Uuid::new_v4(),
            amount,
            yearly_repayment,
            approved: true,
            messages: Vec::new(),
        })
    }

    pub fn application_id(&self) -> ApplicationId {
        self.application_id
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn yearly_repayment(&self) -> Money {
        self.yearly_repayment
    }

    pub fn is_approved(&self) -> bool {
        self.approved
    }

    /// rejection messages in the order they were appended
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// append a rejection message and mark the loan rejected
    pub fn reject(&mut self, message: String) {
        self.messages.push(message);
        self.approved = false;
    }
}

/// read-only financial profile of the applicant
///
/// Never mutated by validation. A zero or negative yearly income is legal
/// input; the ratio check guards against it rather than erroring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Borrower {
    name: String,
    credit_score: i32,
    yearly_income: Money,
}

impl Borrower {
    pub fn new(name: impl Into<String>, credit_score: i32, yearly_income: Money) -> Self {
        Self {
            name: name.into(),
            credit_score,
            yearly_income,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn credit_score(&self) -> i32 {
        self.credit_score
    }

    pub fn yearly_income(&self) -> Money {
        self.yearly_income
    }
}
