//! Atom 1.0 documents (RFC 4287).
//!
//! [`render`] writes a complete `<feed>` document; [`render_entry`] writes a
//! single `<entry>` fragment. Output is compact: no whitespace is inserted
//! between elements.
//!
//! ```
//! use feedwright::atom;
//! use feedwright::model::{Entry, Feed, Person};
//!
//! let feed = Feed {
//!     id: Some("http://example.com/".into()),
//!     title: Some("Example, Inc.".into()),
//!     author: Some(Person::new("John Doe").into()),
//!     entry: vec![Entry {
//!         id: Some("http://example.com/blog/1234".into()),
//!         title: Some("Atom-Powered Robots Run Amok".into()),
//!         ..Default::default()
//!     }],
//!     ..Default::default()
//! };
//!
//! let xml = atom::render(&feed).unwrap();
//! assert!(xml.starts_with(r#"<?xml version="1.0" encoding="utf-8"?><feed xmlns="http://www.w3.org/2005/Atom">"#));
//! assert!(xml.contains(r#"<title type="text">Atom-Powered Robots Run Amok</title>"#));
//! ```

use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::model::{Entry, Feed, OneOrMany, Person, Syndicate};
use crate::writer::{
    write_category, write_entity_tag, write_generator, write_link, write_person,
    write_text_tag, PersonRole,
};

/// Atom XML namespace.
pub const NAMESPACE: &str = "http://www.w3.org/2005/Atom";

pub(crate) const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

/// Renders `feed` as an Atom document with default options.
pub fn render(feed: &Feed) -> Result<String, RenderError> {
    render_with(feed, &RenderConfig::default())
}

/// Renders any [`Syndicate`] source as an Atom document.
pub fn render_source<S: Syndicate + ?Sized>(source: &S) -> Result<String, RenderError> {
    render(&source.syndicate())
}

/// Renders `feed` as an Atom document.
///
/// Entries whose author equals the feed author do not repeat it; Atom
/// entries inherit the feed author.
///
/// # Errors
///
/// Only on field-shape mismatches surfaced by the tag writers; missing data
/// is omitted, never an error.
pub fn render_with(feed: &Feed, config: &RenderConfig) -> Result<String, RenderError> {
    let mut out = String::new();
    if config.xml_declaration {
        out.push_str(XML_DECLARATION);
    }
    out.push_str(r#"<feed xmlns=""#);
    out.push_str(NAMESPACE);
    out.push_str(r#"">"#);

    out.push_str(&write_entity_tag("id", feed, None)?);
    out.push_str(&write_text_tag("title", feed)?);
    out.push_str(&write_text_tag("subtitle", feed)?);
    out.push_str(&write_entity_tag("updated", feed, None)?);
    if let Some(ref links) = feed.link {
        out.push_str(&write_link(links));
    }
    out.push_str(&write_text_tag("rights", feed)?);
    out.push_str(&write_entity_tag("icon", feed, None)?);
    out.push_str(&write_entity_tag("logo", feed, None)?);
    out.push_str(&write_person(PersonRole::Author, feed.author.as_ref())?);
    out.push_str(&write_person(PersonRole::Contributor, feed.contributor.as_ref())?);
    out.push_str(&write_category(feed.category.as_ref()));
    out.push_str(&write_generator(feed.generator.as_ref()));

    for entry in &feed.entry {
        out.push_str(&render_entry(entry, feed.author.as_ref())?);
    }
    out.push_str("</feed>");

    tracing::debug!(
        entries = feed.entry.len(),
        bytes = out.len(),
        "Rendered Atom feed"
    );
    Ok(out)
}

/// Renders one `<entry>` element.
///
/// `feed_author` is the author declared on the enclosing feed, if any. When
/// the entry's author is equal to it the entry author is left out.
pub fn render_entry(
    entry: &Entry,
    feed_author: Option<&OneOrMany<Person>>,
) -> Result<String, RenderError> {
    let mut out = String::from("<entry>");
    out.push_str(&write_entity_tag("id", entry, None)?);
    out.push_str(&write_text_tag("title", entry)?);
    if let Some(ref links) = entry.link {
        out.push_str(&write_link(links));
    }
    out.push_str(&write_entity_tag("updated", entry, None)?);
    out.push_str(&write_entity_tag("published", entry, None)?);

    if is_inherited_author(entry.author.as_ref(), feed_author) {
        tracing::trace!(id = ?entry.id, "Entry author matches feed author, not repeated");
    } else {
        out.push_str(&write_person(PersonRole::Author, entry.author.as_ref())?);
    }
    out.push_str(&write_person(PersonRole::Contributor, entry.contributor.as_ref())?);
    out.push_str(&write_category(entry.category.as_ref()));
    out.push_str(&write_text_tag("rights", entry)?);
    out.push_str(&write_text_tag("content", entry)?);
    out.push_str(&write_text_tag("summary", entry)?);
    out.push_str("</entry>");
    Ok(out)
}

/// Compares person by person, so `One(p)` equals `Many([p])`.
fn is_inherited_author(
    entry_author: Option<&OneOrMany<Person>>,
    feed_author: Option<&OneOrMany<Person>>,
) -> bool {
    match (entry_author, feed_author) {
        (Some(entry_author), Some(feed_author)) => entry_author.iter().eq(feed_author.iter()),
        _ => false,
    }
}
