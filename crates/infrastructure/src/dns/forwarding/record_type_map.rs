use dnslook_domain::RecordKind;
use hickory_proto::rr::RecordType as HickoryRecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert domain RecordKind → hickory RecordType (for building queries)
    pub fn to_hickory(kind: &RecordKind) -> HickoryRecordType {
        match kind {
            RecordKind::A => HickoryRecordType::A,
            RecordKind::AAAA => HickoryRecordType::AAAA,
            RecordKind::CNAME => HickoryRecordType::CNAME,
            RecordKind::MX => HickoryRecordType::MX,
            RecordKind::TXT => HickoryRecordType::TXT,
            RecordKind::NS => HickoryRecordType::NS,
        }
    }
}
