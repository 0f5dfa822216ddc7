//! Renders syndication feeds as Atom 1.0, RSS 2.0 and JSON Feed 1.0 text.
//!
//! Build a [`Feed`](model::Feed) (or implement [`Syndicate`](model::Syndicate)
//! on your own type) and pass it to one of the format modules:
//!
//! - [`atom`] - Atom documents and entry fragments
//! - [`rss`] - RSS 2.0 channels with on-demand extension namespaces
//! - [`json`] - JSON Feed objects
//!
//! The primitive tag writers the XML formats are built from live in
//! [`writer`]. Rendering is a pure function of its input: no state is kept
//! between calls and caller records are never modified.
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use feedwright::model::{Entry, Feed, Text};
//!
//! let when = Utc.with_ymd_and_hms(1973, 3, 15, 0, 0, 0).unwrap();
//! let feed = Feed {
//!     id: Some("http://feed.com".into()),
//!     title: Some("Feed Title".into()),
//!     entry: vec![Entry {
//!         id: Some("id".into()),
//!         title: Some("title".into()),
//!         summary: Some(Text::html("<p>summary</p>")),
//!         updated: Some(when),
//!         ..Default::default()
//!     }],
//!     ..Default::default()
//! };
//!
//! let atom = feedwright::atom::render(&feed)?;
//! assert!(atom.contains(r#"<summary type="html">&lt;p&gt;summary&lt;/p&gt;</summary>"#));
//!
//! let rss = feedwright::rss::render(&feed)?;
//! assert!(rss.contains("<item><title>title</title>"));
//!
//! let json = feedwright::json::render(&feed)?;
//! assert!(json.contains(r#""version": "https://jsonfeed.org/version/1""#));
//! # Ok::<(), feedwright::RenderError>(())
//! ```

pub mod atom;
pub mod config;
pub mod error;
pub mod json;
pub mod model;
pub mod rss;
pub mod util;
pub mod writer;

pub use config::{ConfigError, RenderConfig};
pub use error::RenderError;
pub use model::{
    Category, Entry, Feed, Generator, Link, LinkRelation, OneOrMany, Person, Syndicate, Text,
    TextType,
};
