//! Utility functions and helpers.

pub mod dates;
pub mod numbers;

pub use dates::{format_calendar_date, parse_date, parse_date_input};
pub use numbers::{parse_int_input, parse_leading_int};
