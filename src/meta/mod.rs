mod create_console_logger;
pub use create_console_logger::create_console_logger;
