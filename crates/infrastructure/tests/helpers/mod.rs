#![allow(dead_code, unused_imports)]

mod dns_server_mock;
mod http_backend_mock;
mod records;
mod stub_ports;

pub use dns_server_mock::*;
pub use http_backend_mock::*;
pub use records::*;
pub use stub_ports::*;
