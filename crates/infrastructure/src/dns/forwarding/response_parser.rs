use dnslook_domain::{DomainError, RecordKind};
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::RData;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub truncated: bool,

    pub message: Message,
}

impl DnsResponse {
    pub fn is_refused(&self) -> bool {
        self.rcode == ResponseCode::Refused
    }

    pub fn status(&self) -> &'static str {
        ResponseParser::rcode_to_status(self.rcode)
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::MalformedResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let rcode = message.response_code();
        let truncated = message.truncated();

        debug!(
            rcode = ?rcode,
            answers = message.answers().len(),
            truncated = truncated,
            "DNS response parsed"
        );

        Ok(DnsResponse {
            id: message.id(),
            rcode,
            truncated,
            message,
        })
    }

    /// Renders every supported answer entry by its own type, in answer order.
    ///
    /// A CNAME hop in an A answer is rendered alongside the addresses.
    /// Unsupported types (RRSIG, SOA, ...) are skipped. TXT records
    /// contribute one entry per character-string.
    pub fn decode(response: &DnsResponse, kind: RecordKind) -> Vec<String> {
        let answers = response.message.answers();
        let mut records = Vec::with_capacity(answers.len());
        let mut skipped = 0usize;

        for record in answers {
            match record.data() {
                RData::A(a) => records.push(a.0.to_string()),
                RData::AAAA(aaaa) => records.push(aaaa.0.to_string()),
                RData::CNAME(canonical) => records.push(canonical.to_utf8()),
                RData::NS(ns) => records.push(ns.to_utf8()),
                RData::MX(mx) => records.push(format!(
                    "{} {}",
                    mx.preference(),
                    mx.exchange().to_utf8()
                )),
                RData::TXT(txt) => records.extend(
                    txt.txt_data()
                        .iter()
                        .map(|segment| String::from_utf8_lossy(segment).into_owned()),
                ),
                _ => skipped += 1,
            }
        }

        if skipped > 0 {
            debug!(kind = %kind, skipped, "Skipped unsupported answer entries");
        }

        records
    }

    pub fn decode_bytes(response_bytes: &[u8], kind: RecordKind) -> Result<Vec<String>, DomainError> {
        let response = Self::parse(response_bytes)?;
        Ok(Self::decode(&response, kind))
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
