mod get_file_size;
pub use get_file_size::get_file_size;
mod read_file;
pub use read_file::read_file;
mod write_file;
pub use write_file::write_file;
