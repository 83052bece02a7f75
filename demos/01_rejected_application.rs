/// a rejected application - several checks fire and their messages accumulate
use loan_underwriting_rs::{
    Borrower, DecisionResponse, Loan, LoanValidator, Money, SafeTimeProvider, TimeSource,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // over the amount limit, thin income, weak credit score
    let mut loan = Loan::new(Money::from_major(2_000_000), Money::from_major(60_000))?;
    let borrower = Borrower::new("sasha", 100, Money::from_major(100_000));

    let validator = LoanValidator::new();
    let time = SafeTimeProvider::new(TimeSource::System);

    let decision = validator.decide(&mut loan, &borrower, &time)?;
    for message in &decision.messages {
        println!("rejected: {}", message);
    }

    println!("{}", DecisionResponse::from_decision(&decision).to_json()?);

    Ok(())
}
