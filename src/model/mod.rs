//! Feed records consumed by the writers.
//!
//! Every type here is a plain immutable value. Callers build a [`Feed`] (or
//! implement [`Syndicate`] on their own type), hand it to one of the format
//! renderers, and get a `String` back. Nothing in this module is mutated
//! during rendering.
//!
//! Fields that the syndication formats allow to be either a single value or a
//! list use [`OneOrMany`]. Text constructs that may carry markup use
//! [`Text`]. Both deserialize from the loose JSON shapes feed data usually
//! arrives in (a bare string or an object, a value or an array).

mod entity;

pub use entity::{Entity, Field, FieldKind};

use chrono::{DateTime, Utc};
use serde::Deserialize;

// ============================================================================
// One-or-many
// ============================================================================

/// A field that holds either a single value or an ordered list of them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    /// Iterates the contained values in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            OneOrMany::One(value) => std::slice::from_ref(value).iter(),
            OneOrMany::Many(values) => values.iter(),
        }
    }

    pub fn first(&self) -> Option<&T> {
        self.iter().next()
    }

    pub fn len(&self) -> usize {
        match self {
            OneOrMany::One(_) => 1,
            OneOrMany::Many(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> From<T> for OneOrMany<T> {
    fn from(value: T) -> Self {
        OneOrMany::One(value)
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(values: Vec<T>) -> Self {
        OneOrMany::Many(values)
    }
}

impl From<&str> for OneOrMany<Link> {
    fn from(href: &str) -> Self {
        OneOrMany::One(Link::from(href))
    }
}

impl<'a, T> IntoIterator for &'a OneOrMany<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Text constructs
// ============================================================================

/// How the value of a [`Text`] is meant to be interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextType {
    #[default]
    Text,
    Html,
    Xhtml,
}

impl TextType {
    /// The value written to the `type` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextType::Text => "text",
            TextType::Html => "html",
            TextType::Xhtml => "xhtml",
        }
    }
}

impl std::fmt::Display for TextType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Human-readable text tagged with its encoding.
///
/// A bare string converts into plain `text`:
///
/// ```
/// use feedwright::model::{Text, TextType};
///
/// let title: Text = "AT&T bought by SBC!".into();
/// assert_eq!(title.kind, TextType::Text);
///
/// let summary = Text::html("<p>Some <b>bold</b> text</p>");
/// assert_eq!(summary.kind, TextType::Html);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "TextRepr")]
pub struct Text {
    pub value: String,
    pub kind: TextType,
}

impl Text {
    pub fn new(value: impl Into<String>, kind: TextType) -> Self {
        Self {
            value: value.into(),
            kind,
        }
    }

    pub fn plain(value: impl Into<String>) -> Self {
        Self::new(value, TextType::Text)
    }

    pub fn html(value: impl Into<String>) -> Self {
        Self::new(value, TextType::Html)
    }

    pub fn xhtml(value: impl Into<String>) -> Self {
        Self::new(value, TextType::Xhtml)
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Text::plain(value)
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        Text::plain(value)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextRepr {
    Bare(String),
    Typed {
        value: String,
        #[serde(rename = "type", default)]
        kind: TextType,
    },
}

impl From<TextRepr> for Text {
    fn from(repr: TextRepr) -> Self {
        match repr {
            TextRepr::Bare(value) => Text::plain(value),
            TextRepr::Typed { value, kind } => Text { value, kind },
        }
    }
}

// ============================================================================
// Persons, links, categories, generator
// ============================================================================

/// An author or contributor. Rendered positionally; no identity beyond the
/// three fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Person {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            uri: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }
}

/// The `rel` of a [`Link`]. Unregistered relations are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum LinkRelation {
    Alternate,
    Enclosure,
    Related,
    SelfLink,
    Via,
    Hub,
    Other(String),
}

impl LinkRelation {
    pub fn as_str(&self) -> &str {
        match self {
            LinkRelation::Alternate => "alternate",
            LinkRelation::Enclosure => "enclosure",
            LinkRelation::Related => "related",
            LinkRelation::SelfLink => "self",
            LinkRelation::Via => "via",
            LinkRelation::Hub => "hub",
            LinkRelation::Other(rel) => rel,
        }
    }
}

impl From<&str> for LinkRelation {
    fn from(rel: &str) -> Self {
        match rel {
            "alternate" => LinkRelation::Alternate,
            "enclosure" => LinkRelation::Enclosure,
            "related" => LinkRelation::Related,
            "self" => LinkRelation::SelfLink,
            "via" => LinkRelation::Via,
            "hub" => LinkRelation::Hub,
            other => LinkRelation::Other(other.to_string()),
        }
    }
}

impl From<String> for LinkRelation {
    fn from(rel: String) -> Self {
        LinkRelation::from(rel.as_str())
    }
}

impl std::fmt::Display for LinkRelation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reference from a feed or entry to a Web resource.
///
/// A bare URL converts into an `alternate` link, matching the Atom default
/// for a link without `rel`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "LinkRepr")]
pub struct Link {
    pub href: String,
    pub rel: Option<LinkRelation>,
    /// MIME type of the referenced resource.
    pub mime_type: Option<String>,
    /// Size in bytes.
    pub length: Option<u64>,
    pub title: Option<String>,
    /// Language of the referenced resource.
    pub hreflang: Option<String>,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            rel: None,
            mime_type: None,
            length: None,
            title: None,
            hreflang: None,
        }
    }

    pub fn with_rel(mut self, rel: LinkRelation) -> Self {
        self.rel = Some(rel);
        self
    }

    pub fn with_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    pub fn with_length(mut self, length: u64) -> Self {
        self.length = Some(length);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_hreflang(mut self, hreflang: impl Into<String>) -> Self {
        self.hreflang = Some(hreflang.into());
        self
    }

    /// True when the link has relation `rel`. A missing `rel` counts as
    /// `alternate`.
    pub fn is_rel(&self, rel: &LinkRelation) -> bool {
        self.rel.as_ref().unwrap_or(&LinkRelation::Alternate) == rel
    }
}

impl From<&str> for Link {
    fn from(href: &str) -> Self {
        Link::new(href).with_rel(LinkRelation::Alternate)
    }
}

impl From<String> for Link {
    fn from(href: String) -> Self {
        Link::new(href).with_rel(LinkRelation::Alternate)
    }
}

impl OneOrMany<Link> {
    /// First link with the given relation.
    pub fn find_rel(&self, rel: &LinkRelation) -> Option<&Link> {
        self.iter().find(|link| link.is_rel(rel))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LinkRepr {
    Href(String),
    Full {
        href: String,
        #[serde(default)]
        rel: Option<LinkRelation>,
        #[serde(rename = "type", default)]
        mime_type: Option<String>,
        #[serde(default)]
        length: Option<u64>,
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        hreflang: Option<String>,
    },
}

impl From<LinkRepr> for Link {
    fn from(repr: LinkRepr) -> Self {
        match repr {
            LinkRepr::Href(href) => Link::from(href),
            LinkRepr::Full {
                href,
                rel,
                mime_type,
                length,
                title,
                hreflang,
            } => Link {
                href,
                rel,
                mime_type,
                length,
                title,
                hreflang,
            },
        }
    }
}

/// A category the feed or entry belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Category {
    pub term: String,
    /// Categorization scheme URI.
    #[serde(default)]
    pub scheme: Option<String>,
    /// Human readable label.
    #[serde(default)]
    pub label: Option<String>,
}

impl Category {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            scheme: None,
            label: None,
        }
    }

    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Software that generated the feed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Generator {
    pub name: String,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

impl Generator {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uri: None,
            version: None,
        }
    }

    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}

// ============================================================================
// Feed and entry
// ============================================================================

/// A feed document: metadata plus an ordered list of entries.
///
/// `id` and `title` are required by every target format, but the writers
/// omit the tag rather than fail when they are missing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Feed {
    pub id: Option<String>,
    pub title: Option<Text>,
    pub subtitle: Option<Text>,
    /// Last time the feed was modified in a significant way.
    pub updated: Option<DateTime<Utc>>,
    pub author: Option<OneOrMany<Person>>,
    pub contributor: Option<OneOrMany<Person>>,
    pub link: Option<OneOrMany<Link>>,
    /// Small square image identifying the feed.
    pub icon: Option<String>,
    /// Larger image identifying the feed, twice as wide as tall.
    pub logo: Option<String>,
    pub rights: Option<Text>,
    pub generator: Option<Generator>,
    pub category: Option<OneOrMany<Category>>,
    pub entry: Vec<Entry>,
}

/// A single item of a feed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Entry {
    pub id: Option<String>,
    pub title: Option<Text>,
    pub link: Option<OneOrMany<Link>>,
    /// Time of initial creation or first availability.
    pub published: Option<DateTime<Utc>>,
    /// Last time the entry was modified in a significant way.
    pub updated: Option<DateTime<Utc>>,
    pub summary: Option<Text>,
    pub content: Option<Text>,
    pub rights: Option<Text>,
    /// May be omitted when the feed declares an author.
    pub author: Option<OneOrMany<Person>>,
    pub contributor: Option<OneOrMany<Person>>,
    pub category: Option<OneOrMany<Category>>,
    /// URL of an image representing the entry.
    pub image: Option<String>,
}

/// A type that can be rendered as a feed.
///
/// Implement this on application types (a blog, a photo album) to render
/// them with the `render_source` function of any format module.
pub trait Syndicate {
    fn syndicate(&self) -> Feed;
}

impl Syndicate for Feed {
    fn syndicate(&self) -> Feed {
        self.clone()
    }
}
