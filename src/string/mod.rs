mod extract_datetime_from_filename;
pub use extract_datetime_from_filename::extract_datetime_from_filename;
mod to_camel_case;
pub use to_camel_case::to_camel_case;
mod to_snake_case;
pub use to_snake_case::to_snake_case;
