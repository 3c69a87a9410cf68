mod record_lookup;
mod server_source;

pub use record_lookup::RecordLookup;
pub use server_source::ServerSource;
