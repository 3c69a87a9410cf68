//! dnslook domain layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod history;
pub mod query_result;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_query::QueryRequest;
pub use dns_record::RecordKind;
pub use errors::DomainError;
pub use history::History;
pub use query_result::{Outcome, QueryResult};
