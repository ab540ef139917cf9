/// Export of the record list to a text file.
pub mod export;
mod store;

pub use export::{export_to_dir, ExportError};
pub use store::{RecordStore, StoreError};
