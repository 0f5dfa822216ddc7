//! Text helpers shared by the format writers.
//!
//! - **Escaping**: XML/HTML entity escaping of element text
//! - **Dates**: the timestamp forms each syndication format expects
//!
//! # Examples
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use feedwright::util::{escape_text, iso8601, rfc822};
//!
//! assert_eq!(escape_text("AT&T"), "AT&amp;T");
//!
//! let date = Utc.with_ymd_and_hms(1973, 3, 15, 0, 0, 0).unwrap();
//! assert_eq!(iso8601(&date), "1973-03-15T00:00:00.000Z");
//! assert_eq!(rfc822(&date), "Thu, 15 Mar 1973 00:00:00 GMT");
//! ```

mod date;
mod escape;

pub use date::{iso8601, iso8601_seconds, rfc822};
pub use escape::escape_text;
