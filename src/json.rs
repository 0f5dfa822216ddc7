//! JSON Feed 1.0 documents (<https://jsonfeed.org/version/1>).
//!
//! Optional members are left out rather than written as `null`. Output is
//! pretty-printed with [`RenderConfig::json_indent`] spaces per level.

use serde::Serialize;

use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::model::{Entry, Feed, Link, LinkRelation, OneOrMany, Person, Syndicate, TextType};
use crate::util::iso8601_seconds;

/// Value of the top-level `version` member.
pub const VERSION: &str = "https://jsonfeed.org/version/1";

#[derive(Debug, Serialize)]
struct JsonFeed<'a> {
    version: &'static str,
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    home_page_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    feed_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    favicon: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    author: Option<JsonAuthor<'a>>,
    items: Vec<JsonItem<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonAuthor<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct JsonItem<'a> {
    id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content_html: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content_text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date_published: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date_modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    author: Option<JsonAuthor<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tags: Vec<&'a str>,
}

/// Renders `feed` as a JSON Feed document with default options.
pub fn render(feed: &Feed) -> Result<String, RenderError> {
    render_with(feed, &RenderConfig::default())
}

/// Renders any [`Syndicate`] source as a JSON Feed document.
pub fn render_source<S: Syndicate + ?Sized>(source: &S) -> Result<String, RenderError> {
    render(&source.syndicate())
}

/// Renders `feed` as a JSON Feed document.
///
/// Member mapping: `home_page_url` is the first alternate link, `feed_url`
/// the first `self` link, `description` the subtitle, `icon` the logo and
/// `favicon` the icon. JSON Feed allows one author, so only the first person
/// of a list is written.
pub fn render_with(feed: &Feed, config: &RenderConfig) -> Result<String, RenderError> {
    let document = JsonFeed {
        version: VERSION,
        title: feed.title.as_ref().map(|t| t.value.as_str()).unwrap_or(""),
        home_page_url: link_href(feed.link.as_ref(), &LinkRelation::Alternate),
        feed_url: link_href(feed.link.as_ref(), &LinkRelation::SelfLink),
        description: feed.subtitle.as_ref().map(|t| t.value.as_str()),
        icon: feed.logo.as_deref(),
        favicon: feed.icon.as_deref(),
        author: first_author(feed.author.as_ref()),
        items: feed.entry.iter().map(json_item).collect(),
    };

    let out = to_json(&document, config.json_indent)?;
    tracing::debug!(
        items = document.items.len(),
        bytes = out.len(),
        "Rendered JSON feed"
    );
    Ok(out)
}

fn json_item(entry: &Entry) -> JsonItem<'_> {
    let url = link_href(entry.link.as_ref(), &LinkRelation::Alternate);
    let (content_html, content_text) = match entry.content {
        Some(ref content) if content.kind == TextType::Text => (None, Some(content.value.as_str())),
        Some(ref content) => (Some(content.value.as_str()), None),
        None => (None, None),
    };

    JsonItem {
        id: entry.id.as_deref().or(url).unwrap_or(""),
        url,
        title: entry.title.as_ref().map(|t| t.value.as_str()),
        content_html,
        content_text,
        summary: entry.summary.as_ref().map(|t| t.value.as_str()),
        image: entry.image.as_deref(),
        date_published: entry.published.as_ref().map(iso8601_seconds),
        date_modified: entry.updated.as_ref().map(iso8601_seconds),
        author: first_author(entry.author.as_ref()),
        tags: entry
            .category
            .iter()
            .flat_map(|categories| categories.iter())
            .map(|category| category.term.as_str())
            .collect(),
    }
}

fn link_href<'a>(
    links: Option<&'a OneOrMany<Link>>,
    rel: &LinkRelation,
) -> Option<&'a str> {
    links
        .and_then(|links| links.find_rel(rel))
        .map(|link| link.href.as_str())
}

fn first_author(persons: Option<&OneOrMany<Person>>) -> Option<JsonAuthor<'_>> {
    persons.and_then(OneOrMany::first).map(|person| JsonAuthor {
        name: &person.name,
        url: person.uri.as_deref(),
    })
}

fn to_json<T: Serialize>(value: &T, indent: usize) -> Result<String, RenderError> {
    if indent == 0 {
        return Ok(serde_json::to_string(value)?);
    }

    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
