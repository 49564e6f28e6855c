//! Data model for the domain editing workflow

mod connection;
mod domain;
mod form;

pub use connection::{ConnectionProbe, ConnectionReport, ServerCheck};
pub use domain::{DomainRecord, DomainUpsert, UpsertAck, UpsertErrorCode};
pub use form::{parse_port, DomainDefaults, DomainForm, SecurityMode};
