/// quick start - evaluate a loan and print the response document
use loan_underwriting_rs::{Borrower, DecisionResponse, Loan, LoanValidator, Money};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // a $500,000 loan repaid at $50,000 a year
    let mut loan = Loan::new(Money::from_major(500_000), Money::from_major(50_000))?;
    let borrower = Borrower::new("joe", 700, Money::from_major(200_000));

    // run the four underwriting checks
    let validator = LoanValidator::new();
    validator.validate(&mut loan, &borrower)?;

    // print the response document
    println!("{}", DecisionResponse::from_loan(&loan).to_json_pretty()?);

    Ok(())
}
