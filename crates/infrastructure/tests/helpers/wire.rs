use std::net::{Ipv4Addr, Ipv6Addr};

// Resource record type codes
const TYPE_A: u16 = 1;
const TYPE_NS: u16 = 2;
const TYPE_CNAME: u16 = 5;
const TYPE_MX: u16 = 15;
const TYPE_TXT: u16 = 16;
const TYPE_AAAA: u16 = 28;
const TYPE_RRSIG: u16 = 46;

pub const RCODE_NOERROR: u8 = 0;
pub const RCODE_SERVFAIL: u8 = 2;
pub const RCODE_NXDOMAIN: u8 = 3;
pub const RCODE_REFUSED: u8 = 5;

pub fn query_id(query: &[u8]) -> u16 {
    u16::from_be_bytes([query[0], query[1]])
}

/// Builds wire-format answers to a wire-format query, by hand.
///
/// Answer owner names point back at the question name (`0xc00c`), rdata
/// names are written as plain label sequences.
pub struct ResponseBuilder {
    id: u16,
    question: Vec<u8>,
    rcode: u8,
    truncated: bool,
    answers: Vec<Vec<u8>>,
}

impl ResponseBuilder {
    pub fn for_query(query: &[u8]) -> Self {
        Self {
            id: query_id(query),
            question: question_section(query).to_vec(),
            rcode: RCODE_NOERROR,
            truncated: false,
            answers: Vec::new(),
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn rcode(mut self, rcode: u8) -> Self {
        self.rcode = rcode;
        self
    }

    pub fn truncated(mut self) -> Self {
        self.truncated = true;
        self
    }

    pub fn a(self, ip: Ipv4Addr) -> Self {
        self.answer(TYPE_A, ip.octets().to_vec())
    }

    pub fn aaaa(self, ip: Ipv6Addr) -> Self {
        self.answer(TYPE_AAAA, ip.octets().to_vec())
    }

    pub fn cname(self, target: &str) -> Self {
        self.answer(TYPE_CNAME, encode_name(target))
    }

    pub fn ns(self, host: &str) -> Self {
        self.answer(TYPE_NS, encode_name(host))
    }

    pub fn mx(self, preference: u16, exchange: &str) -> Self {
        let mut rdata = preference.to_be_bytes().to_vec();
        rdata.extend(encode_name(exchange));
        self.answer(TYPE_MX, rdata)
    }

    pub fn txt(self, segments: &[&[u8]]) -> Self {
        let mut rdata = Vec::new();
        for segment in segments {
            rdata.push(segment.len() as u8);
            rdata.extend_from_slice(segment);
        }
        self.answer(TYPE_TXT, rdata)
    }

    /// An RRSIG-typed entry with opaque rdata, for skip tests.
    pub fn rrsig(self) -> Self {
        let mut rdata = Vec::new();
        rdata.extend_from_slice(&TYPE_A.to_be_bytes()); // type covered
        rdata.push(8); // algorithm
        rdata.push(2); // labels
        rdata.extend_from_slice(&300u32.to_be_bytes()); // original ttl
        rdata.extend_from_slice(&2_000_000_000u32.to_be_bytes()); // expiration
        rdata.extend_from_slice(&1_900_000_000u32.to_be_bytes()); // inception
        rdata.extend_from_slice(&12345u16.to_be_bytes()); // key tag
        rdata.extend(encode_name("example.com"));
        rdata.extend_from_slice(&[0xde, 0xad, 0xbe, 0xef]); // signature
        self.answer(TYPE_RRSIG, rdata)
    }

    fn answer(mut self, rtype: u16, rdata: Vec<u8>) -> Self {
        let mut record = vec![0xc0, 0x0c];
        record.extend_from_slice(&rtype.to_be_bytes());
        record.extend_from_slice(&[0x00, 0x01]); // class IN
        record.extend_from_slice(&300u32.to_be_bytes());
        record.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        record.extend(rdata);
        self.answers.push(record);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut response = Vec::with_capacity(512);
        response.extend_from_slice(&self.id.to_be_bytes());

        // QR=1, opcode 0, RD=1, TC as requested
        let mut flags_hi = 0x81;
        if self.truncated {
            flags_hi |= 0x02;
        }
        response.push(flags_hi);
        response.push(0x80 | (self.rcode & 0x0f)); // RA=1

        response.extend_from_slice(&[0x00, 0x01]); // QDCOUNT
        response.extend_from_slice(&(self.answers.len() as u16).to_be_bytes());
        response.extend_from_slice(&[0x00, 0x00]); // NSCOUNT
        response.extend_from_slice(&[0x00, 0x00]); // ARCOUNT

        response.extend_from_slice(&self.question);
        for answer in &self.answers {
            response.extend_from_slice(answer);
        }
        response
    }
}

/// The single question of a query: name labels up to the root, then type and class.
fn question_section(query: &[u8]) -> &[u8] {
    let mut pos = 12;
    while query[pos] != 0 {
        pos += query[pos] as usize + 1;
    }
    &query[12..pos + 5]
}

fn encode_name(name: &str) -> Vec<u8> {
    let mut encoded = Vec::new();
    for label in name.trim_end_matches('.').split('.') {
        encoded.push(label.len() as u8);
        encoded.extend_from_slice(label.as_bytes());
    }
    encoded.push(0);
    encoded
}
