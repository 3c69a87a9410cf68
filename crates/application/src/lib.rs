//! dnslook application layer: ports, the interactive session and use cases
pub mod ports;
pub mod session;
pub mod use_cases;
