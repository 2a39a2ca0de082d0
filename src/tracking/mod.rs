mod get_process_memory;
pub use get_process_memory::{get_process_memory, get_process_memory_mb};
mod track;
pub use track::{TrackReport, measure, track};
