pub mod correlate;
pub mod discovery;
pub mod ingest;
pub mod inventory;
pub mod parse;
pub mod rows;
pub mod session;
pub mod snapshot;
