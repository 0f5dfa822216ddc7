use std::collections::BTreeMap;

use super::tag::{write_attributes, Attributes};
use crate::model::{Link, OneOrMany};

/// Renders one or many links as self-closing `<link/>` elements.
///
/// Attributes are written in sorted key order (`href`, `hreflang`, `length`,
/// `rel`, `title`, `type`) and absent values are skipped. A list renders as
/// the concatenation of its links, in order.
///
/// # Examples
///
/// ```
/// use feedwright::model::{Link, LinkRelation, OneOrMany};
/// use feedwright::writer::write_link;
///
/// let shorthand: OneOrMany<Link> = "http://x.com".into();
/// let explicit: OneOrMany<Link> = Link::new("http://x.com")
///     .with_rel(LinkRelation::Alternate)
///     .into();
///
/// assert_eq!(write_link(&shorthand), r#"<link href="http://x.com" rel="alternate"/>"#);
/// assert_eq!(write_link(&shorthand), write_link(&explicit));
/// ```
pub fn write_link(links: &OneOrMany<Link>) -> String {
    links.iter().map(link_element).collect()
}

fn link_element(link: &Link) -> String {
    let mut sorted = BTreeMap::new();
    sorted.insert("href", link.href.clone());
    if let Some(ref rel) = link.rel {
        sorted.insert("rel", rel.as_str().to_string());
    }
    if let Some(ref mime_type) = link.mime_type {
        sorted.insert("type", mime_type.clone());
    }
    if let Some(length) = link.length {
        sorted.insert("length", length.to_string());
    }
    if let Some(ref title) = link.title {
        sorted.insert("title", title.clone());
    }
    if let Some(ref hreflang) = link.hreflang {
        sorted.insert("hreflang", hreflang.clone());
    }

    let attr: Attributes = sorted.into_iter().collect();
    format!("<link{}/>", write_attributes(Some(&attr)))
}
