pub mod checks;
pub mod decimal;
pub mod errors;
pub mod events;
pub mod loan;
pub mod messages;
pub mod response;
pub mod types;
pub mod validator;

// re-export key types
pub use decimal::Money;
pub use errors::{Result, UnderwritingError};
pub use events::RejectionEvent;
pub use loan::{Borrower, Loan};
pub use messages::{DefaultCatalog, MessageCatalog};
pub use response::{DecisionResponse, ResponseBody};
pub use types::{ApplicationId, CheckKind, MessageKey};
pub use validator::{Decision, LoanValidator};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
