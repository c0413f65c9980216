use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordType {
    A,
    AAAA,
    CNAME,
    MX,
    TXT,
    PTR,

    SRV,
    SOA,
    NS,
    NAPTR,
    SVCB,
    HTTPS,
    DNAME,
    URI,

    DS,
    DNSKEY,
    RRSIG,
    NSEC,
    NSEC3,
    NSEC3PARAM,
    CDS,
    CDNSKEY,

    CAA,
    CERT,
    TLSA,
    SMIMEA,
    SSHFP,
    HIP,
    IPSECKEY,
    OPENPGPKEY,

    NULL,
    HINFO,
    WKS,
    LOC,
    SPF,

    OPT,
    ZONEMD,
    ANAME,

    /// A code with no named variant, carried through as received.
    Unknown(u16),
}

/// Types an NSEC record may assert at an extension name. The set (and its
/// membership) must match what validating resolvers expect from the root.
pub const SUPPORTED_TYPES: [RecordType; 26] = [
    RecordType::A,
    RecordType::NS,
    RecordType::CNAME,
    RecordType::SOA,
    RecordType::HINFO,
    RecordType::MX,
    RecordType::TXT,
    RecordType::AAAA,
    RecordType::LOC,
    RecordType::SRV,
    RecordType::NAPTR,
    RecordType::CERT,
    RecordType::DS,
    RecordType::SSHFP,
    RecordType::RRSIG,
    RecordType::NSEC,
    RecordType::DNSKEY,
    RecordType::TLSA,
    RecordType::SMIMEA,
    RecordType::HIP,
    RecordType::CDS,
    RecordType::CDNSKEY,
    RecordType::OPENPGPKEY,
    RecordType::SPF,
    RecordType::URI,
    RecordType::CAA,
];

/// Bitmap of an empty non-terminal: the node exists, nothing is answerable.
pub const EMPTY_NON_TERMINAL_TYPES: [RecordType; 2] = [RecordType::RRSIG, RecordType::NSEC];

/// Every supported type except the one being denied.
pub fn denial_type_bitmap(queried: RecordType) -> Vec<RecordType> {
    SUPPORTED_TYPES
        .iter()
        .copied()
        .filter(|t| *t != queried)
        .collect()
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::CNAME => "CNAME",
            RecordType::MX => "MX",
            RecordType::TXT => "TXT",
            RecordType::PTR => "PTR",
            RecordType::SRV => "SRV",
            RecordType::SOA => "SOA",
            RecordType::NS => "NS",
            RecordType::NAPTR => "NAPTR",
            RecordType::SVCB => "SVCB",
            RecordType::HTTPS => "HTTPS",
            RecordType::DNAME => "DNAME",
            RecordType::URI => "URI",
            RecordType::DS => "DS",
            RecordType::DNSKEY => "DNSKEY",
            RecordType::RRSIG => "RRSIG",
            RecordType::NSEC => "NSEC",
            RecordType::NSEC3 => "NSEC3",
            RecordType::NSEC3PARAM => "NSEC3PARAM",
            RecordType::CDS => "CDS",
            RecordType::CDNSKEY => "CDNSKEY",
            RecordType::CAA => "CAA",
            RecordType::CERT => "CERT",
            RecordType::TLSA => "TLSA",
            RecordType::SMIMEA => "SMIMEA",
            RecordType::SSHFP => "SSHFP",
            RecordType::HIP => "HIP",
            RecordType::IPSECKEY => "IPSECKEY",
            RecordType::OPENPGPKEY => "OPENPGPKEY",
            RecordType::NULL => "NULL",
            RecordType::HINFO => "HINFO",
            RecordType::WKS => "WKS",
            RecordType::LOC => "LOC",
            RecordType::SPF => "SPF",
            RecordType::OPT => "OPT",
            RecordType::ZONEMD => "ZONEMD",
            RecordType::ANAME => "ANAME",
            RecordType::Unknown(_) => "UNKNOWN",
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::CNAME => 5,
            RecordType::SOA => 6,
            RecordType::NULL => 10,
            RecordType::WKS => 11,
            RecordType::PTR => 12,
            RecordType::HINFO => 13,
            RecordType::MX => 15,
            RecordType::TXT => 16,
            RecordType::AAAA => 28,
            RecordType::LOC => 29,
            RecordType::SRV => 33,
            RecordType::NAPTR => 35,
            RecordType::CERT => 37,
            RecordType::DNAME => 39,
            RecordType::OPT => 41,
            RecordType::DS => 43,
            RecordType::SSHFP => 44,
            RecordType::IPSECKEY => 45,
            RecordType::RRSIG => 46,
            RecordType::NSEC => 47,
            RecordType::DNSKEY => 48,
            RecordType::NSEC3 => 50,
            RecordType::NSEC3PARAM => 51,
            RecordType::TLSA => 52,
            RecordType::SMIMEA => 53,
            RecordType::HIP => 55,
            RecordType::CDS => 59,
            RecordType::CDNSKEY => 60,
            RecordType::OPENPGPKEY => 61,
            RecordType::ZONEMD => 63,
            RecordType::SVCB => 64,
            RecordType::HTTPS => 65,
            RecordType::SPF => 99,
            RecordType::URI => 256,
            RecordType::CAA => 257,
            RecordType::ANAME => 65305,
            RecordType::Unknown(code) => *code,
        }
    }

    /// Named variants only.
    pub fn from_u16(code: u16) -> Option<Self> {
        ALL_TYPES.iter().copied().find(|t| t.to_u16() == code)
    }

    /// Never fails: codes without a named variant become `Unknown`.
    pub fn from_code(code: u16) -> Self {
        Self::from_u16(code).unwrap_or(RecordType::Unknown(code))
    }

    pub fn is_dnssec(&self) -> bool {
        matches!(
            self,
            RecordType::DS
                | RecordType::DNSKEY
                | RecordType::RRSIG
                | RecordType::NSEC
                | RecordType::NSEC3
                | RecordType::NSEC3PARAM
                | RecordType::CDS
                | RecordType::CDNSKEY
        )
    }
}

const ALL_TYPES: [RecordType; 38] = [
    RecordType::A,
    RecordType::AAAA,
    RecordType::CNAME,
    RecordType::MX,
    RecordType::TXT,
    RecordType::PTR,
    RecordType::SRV,
    RecordType::SOA,
    RecordType::NS,
    RecordType::NAPTR,
    RecordType::SVCB,
    RecordType::HTTPS,
    RecordType::DNAME,
    RecordType::URI,
    RecordType::DS,
    RecordType::DNSKEY,
    RecordType::RRSIG,
    RecordType::NSEC,
    RecordType::NSEC3,
    RecordType::NSEC3PARAM,
    RecordType::CDS,
    RecordType::CDNSKEY,
    RecordType::CAA,
    RecordType::CERT,
    RecordType::TLSA,
    RecordType::SMIMEA,
    RecordType::SSHFP,
    RecordType::HIP,
    RecordType::IPSECKEY,
    RecordType::OPENPGPKEY,
    RecordType::NULL,
    RecordType::HINFO,
    RecordType::WKS,
    RecordType::LOC,
    RecordType::SPF,
    RecordType::OPT,
    RecordType::ZONEMD,
    RecordType::ANAME,
];

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordType::Unknown(code) => write!(f, "TYPE{}", code),
            _ => f.write_str(self.as_str()),
        }
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        if let Some(code) = upper.strip_prefix("TYPE").and_then(|c| c.parse::<u16>().ok()) {
            return Ok(Self::from_code(code));
        }
        ALL_TYPES
            .iter()
            .copied()
            .find(|t| t.as_str() == upper)
            .ok_or_else(|| format!("Unknown record type: {}", s))
    }
}
