mod audit_logs;
mod cases;
mod customers;
mod documents;
mod engagements;
mod reports;
mod users;

pub use audit_logs::*;
pub use cases::*;
pub use customers::*;
pub use documents::*;
pub use engagements::*;
pub use reports::*;
pub use users::*;
