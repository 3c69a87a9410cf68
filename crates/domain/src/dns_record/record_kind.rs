use std::fmt;
use std::str::FromStr;

/// The closed set of record types the lookup tool can query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RecordKind {
    #[default]
    A,
    AAAA,
    CNAME,
    MX,
    TXT,
    NS,
}

impl RecordKind {
    /// Selector order, as presented to the user.
    pub const ALL: [RecordKind; 6] = [
        RecordKind::A,
        RecordKind::AAAA,
        RecordKind::CNAME,
        RecordKind::MX,
        RecordKind::TXT,
        RecordKind::NS,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::A => "A",
            RecordKind::AAAA => "AAAA",
            RecordKind::CNAME => "CNAME",
            RecordKind::MX => "MX",
            RecordKind::TXT => "TXT",
            RecordKind::NS => "NS",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RecordKind::A => "IPv4 address records",
            RecordKind::AAAA => "IPv6 address records",
            RecordKind::CNAME => "Canonical name records (aliases)",
            RecordKind::MX => "Mail exchange records",
            RecordKind::TXT => "Text records",
            RecordKind::NS => "Name server records",
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            RecordKind::A => 1,
            RecordKind::NS => 2,
            RecordKind::CNAME => 5,
            RecordKind::MX => 15,
            RecordKind::TXT => 16,
            RecordKind::AAAA => 28,
        }
    }

    /// Position of this kind in [`RecordKind::ALL`].
    pub fn index(&self) -> usize {
        match self {
            RecordKind::A => 0,
            RecordKind::AAAA => 1,
            RecordKind::CNAME => 2,
            RecordKind::MX => 3,
            RecordKind::TXT => 4,
            RecordKind::NS => 5,
        }
    }

    /// Kind at `index`, wrapping around the selector.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn next(&self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn previous(&self) -> Self {
        Self::from_index(self.index() + Self::ALL.len() - 1)
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(RecordKind::A),
            "AAAA" => Ok(RecordKind::AAAA),
            "CNAME" => Ok(RecordKind::CNAME),
            "MX" => Ok(RecordKind::MX),
            "TXT" => Ok(RecordKind::TXT),
            "NS" => Ok(RecordKind::NS),
            _ => Err(format!("Unsupported record type: {}", s)),
        }
    }
}
