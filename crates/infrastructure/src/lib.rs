//! dnslook infrastructure layer: DNS wire codec, UDP/TCP transport and the
//! system resolver configuration reader.
pub mod dns;
pub mod system;
