use rust_decimal::Decimal;

use crate::decimal::Money;
use crate::events::RejectionEvent;
use crate::loan::{Borrower, Loan};
use crate::types::{CheckKind, MessageKey};

/// absolute maximum loan amount, in major units
pub const MAXIMUM_LOAN_AMOUNT: i64 = 1_000_000;

/// absolute credit score floor
pub const MINIMUM_CREDIT_SCORE: i32 = 200;

/// repayment may not exceed this fraction of yearly income.
/// Compared in f64, deliberately distinct from the integer arithmetic of
/// the ratio brackets; the two checks can disagree near boundaries.
pub const MAXIMUM_REPAYMENT_INCOME_FRACTION: f64 = 0.3;

/// debt-to-income percentage brackets and the credit score each requires:
/// (ratio lower bound inclusive, ratio upper bound exclusive, score below
/// which the bracket rejects)
const RATIO_BRACKETS: [(u32, Option<u32>, i32); 4] = [
    (0, Some(30), 200),
    (30, Some(45), 400),
    (45, Some(50), 600),
    (50, None, 800),
];

/// a single underwriting check, pure over (loan, borrower)
pub type Check = fn(&Loan, &Borrower) -> Vec<RejectionEvent>;

/// the fixed pipeline; order determines message ordering only, the final
/// approval result is the OR of all failing conditions
pub const CHECK_PIPELINE: [Check; 4] = [
    check_maximum_amount,
    check_repayment_and_score,
    check_minimum_income,
    check_credit_score,
];

/// run every check in pipeline order and concatenate their events
pub fn run_checks(loan: &Loan, borrower: &Borrower) -> Vec<RejectionEvent> {
    CHECK_PIPELINE
        .iter()
        .flat_map(|check| check(loan, borrower))
        .collect()
}

/// truncated debt-to-income percentage, integer division semantics
///
/// The borrower's income must be positive; `check_repayment_and_score`
/// guards this before computing the ratio.
pub fn debt_to_income_percent(loan: &Loan, borrower: &Borrower) -> Decimal {
    loan.yearly_repayment().percent_of(borrower.yearly_income())
}

/// check 1: amount over the absolute maximum
pub fn check_maximum_amount(loan: &Loan, _borrower: &Borrower) -> Vec<RejectionEvent> {
    if loan.amount() > Money::from_major(MAXIMUM_LOAN_AMOUNT) {
        vec![RejectionEvent::new(
            CheckKind::MaximumAmount,
            MessageKey::LoanCannotExceedMaximum,
        )]
    } else {
        Vec::new()
    }
}

/// check 2: debt-to-income bracket against credit score
///
/// Skipped entirely for zero or negative income. The brackets are evaluated
/// independently with no early exit; as defined they are mutually exclusive
/// on the ratio, but overlapping definitions would append one event each.
pub fn check_repayment_and_score(loan: &Loan, borrower: &Borrower) -> Vec<RejectionEvent> {
    let mut events = Vec::new();

    if !borrower.yearly_income().is_positive() {
        return events;
    }

    let ratio = debt_to_income_percent(loan, borrower);
    let score = borrower.credit_score();

    for (low, high, score_cap) in RATIO_BRACKETS {
        let in_bracket = ratio >= Decimal::from(low)
            && high.map_or(true, |h| ratio < Decimal::from(h));
        if in_bracket && score >= 0 && score < score_cap {
            events.push(RejectionEvent::new(
                CheckKind::RepaymentVsIncomeAndScore,
                MessageKey::DebtToIncomeTooHighForScore,
            ));
        }
    }

    events
}

/// check 3: repayment over 30% of yearly income, double arithmetic
pub fn check_minimum_income(loan: &Loan, borrower: &Borrower) -> Vec<RejectionEvent> {
    let repayment = loan.yearly_repayment().to_f64();
    let income = borrower.yearly_income().to_f64();

    if repayment > income * MAXIMUM_REPAYMENT_INCOME_FRACTION {
        vec![RejectionEvent::new(
            CheckKind::MinimumIncome,
            MessageKey::TooBigDebtToIncomeRatio,
        )]
    } else {
        Vec::new()
    }
}

/// check 4: credit score under the absolute floor
pub fn check_credit_score(_loan: &Loan, borrower: &Borrower) -> Vec<RejectionEvent> {
    if borrower.credit_score() < MINIMUM_CREDIT_SCORE {
        vec![RejectionEvent::new(
            CheckKind::CreditScoreFloor,
            MessageKey::CreditScoreBelowMinimum,
        )]
    } else {
        Vec::new()
    }
}
