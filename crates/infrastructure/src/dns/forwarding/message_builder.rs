//! DNS Message Builder
//!
//! Constructs DNS query messages in wire format using `hickory-proto`.

use super::record_type_map::RecordTypeMapper;
use dnslook_domain::dns_query::to_fqdn;
use dnslook_domain::{DomainError, RecordKind};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a recursive query for `domain` and serialize it.
    ///
    /// The message carries:
    /// - a fresh random ID, returned alongside the bytes for response matching
    /// - the RD (Recursion Desired) flag
    /// - a single question of class IN, the name in fully-qualified form
    pub fn build_query(domain: &str, kind: &RecordKind) -> Result<(u16, Vec<u8>), DomainError> {
        let domain = domain.trim();
        if domain.is_empty() {
            return Err(DomainError::InvalidInput(
                "domain cannot be empty".to_string(),
            ));
        }

        let fqdn = to_fqdn(domain);
        let name = Name::from_str(&fqdn).map_err(|e| {
            DomainError::InvalidInput(format!("Invalid domain '{}': {}", domain, e))
        })?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordTypeMapper::to_hickory(kind));
        query.set_query_class(DNSClass::IN);

        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidInput(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
