#![allow(dead_code)]
#![allow(unused_imports)]

mod mock_ports;
mod records;

pub use mock_ports::*;
pub use records::*;
