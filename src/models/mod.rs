mod audit_log;
pub mod business_id;
mod case;
mod customer;
mod document;
mod engagement;
mod report;
mod user;
pub mod validators;

pub use audit_log::*;
pub use business_id::*;
pub use case::*;
pub use customer::*;
pub use document::*;
pub use engagement::*;
pub use report::*;
pub use user::*;
