pub mod clock;
pub mod time_format;
pub mod validate;

pub use clock::{Clock, ManualClock, SystemClock};
pub use time_format::{format_date_time, time_remaining_label};
pub use validate::sanitize_file_name;
