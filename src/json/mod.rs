mod read_json;
pub use read_json::read_json;
mod write_json;
pub use write_json::write_json;
