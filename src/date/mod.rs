mod add_working_days;
pub use add_working_days::add_working_days;
mod current_timestamp;
pub use current_timestamp::current_timestamp;
mod days_between;
pub use days_between::{days_between, days_between_with_format};
mod elapsed_since;
pub use elapsed_since::{elapsed_since, format_hms};
