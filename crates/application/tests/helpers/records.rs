use ferrous_root_application::ports::NativeResponse;
use ferrous_root_application::services::RecordCodec;
use hickory_proto::rr::rdata::{A, CNAME, NS, SOA, TXT};
use hickory_proto::rr::{Name, RData, Record};
use std::net::Ipv4Addr;
use std::str::FromStr;

pub fn name(s: &str) -> Name {
    Name::from_str(&format!("{}.", s.trim_end_matches('.'))).unwrap()
}

pub fn a_record(owner: &str, ip: Ipv4Addr) -> Record {
    Record::from_rdata(name(owner), 300, RData::A(A(ip)))
}

pub fn ns_record(owner: &str, target: &str) -> Record {
    Record::from_rdata(name(owner), 3600, RData::NS(NS(name(target))))
}

pub fn cname_record(owner: &str, target: &str) -> Record {
    Record::from_rdata(name(owner), 300, RData::CNAME(CNAME(name(target))))
}

pub fn txt_record(owner: &str, text: &str) -> Record {
    Record::from_rdata(name(owner), 300, RData::TXT(TXT::new(vec![text.to_string()])))
}

pub fn root_soa() -> Record {
    let soa = SOA::new(
        name("a.root-servers.net"),
        name("nstld.verisign-grs.com"),
        2026101800,
        1800,
        900,
        604800,
        86400,
    );
    Record::from_rdata(Name::root(), 86400, RData::SOA(soa))
}

pub fn payload(records: &[Record]) -> Vec<u8> {
    RecordCodec::encode(records).unwrap()
}

pub fn referral_response(owner: &str, targets: &[&str]) -> NativeResponse {
    let authority = targets.iter().map(|t| ns_record(owner, t)).collect();
    NativeResponse::new(Vec::new(), authority, false)
}

pub fn answer_response(records: Vec<Record>) -> NativeResponse {
    NativeResponse::new(records, Vec::new(), true)
}
