#![allow(dead_code)]

mod dns_server_mock;
mod wire;

pub use dns_server_mock::{closed_udp_port, MockDnsServer, Responder};
pub use wire::{query_id, ResponseBuilder};
