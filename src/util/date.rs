use chrono::{DateTime, SecondsFormat, Utc};

/// ISO-8601 UTC timestamp with milliseconds, as used by Atom date
/// constructs: `1973-03-15T00:00:00.000Z`.
pub fn iso8601(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// ISO-8601 UTC timestamp truncated to whole seconds:
/// `1973-03-15T00:00:00Z`. JSON Feed dates use this form.
pub fn iso8601_seconds(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// RFC 822 timestamp in GMT, as RSS 2.0 expects for `pubDate` and
/// `lastBuildDate`: `Thu, 15 Mar 1973 00:00:00 GMT`.
///
/// `chrono`'s `to_rfc2822` writes `+0000`; feed validators prefer the
/// literal `GMT` zone name.
pub fn rfc822(date: &DateTime<Utc>) -> String {
    date.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}
