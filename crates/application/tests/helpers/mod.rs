#![allow(dead_code)]

mod mock_lookup;

pub use mock_lookup::{answered, failed, MockRecordLookup, StaticServerSource};
