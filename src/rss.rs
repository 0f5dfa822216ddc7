//! RSS 2.0 documents.
//!
//! The channel is assembled in two passes. Item fragments are rendered first
//! while noting which extension modules they use; only then is the `<rss>`
//! root written, carrying `xmlns:content` and `xmlns:atom` declarations
//! exactly when `content:encoded` or `atom:link` elements appear in the
//! document.

use crate::atom;
use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::model::{Entry, Feed, LinkRelation, Person, Syndicate};
use crate::util::rfc822;
use crate::writer::{write_attributes, write_tag, Attributes};

/// Namespace of the `content:encoded` element.
pub const CONTENT_NAMESPACE: &str = "http://purl.org/rss/1.0/modules/content/";

/// Renders `feed` as an RSS 2.0 document with default options.
pub fn render(feed: &Feed) -> Result<String, RenderError> {
    render_with(feed, &RenderConfig::default())
}

/// Renders any [`Syndicate`] source as an RSS 2.0 document.
pub fn render_source<S: Syndicate + ?Sized>(source: &S) -> Result<String, RenderError> {
    render(&source.syndicate())
}

/// Rendered `<item>` plus the extension modules it needed.
struct ItemFragment {
    xml: String,
    uses_content_module: bool,
}

/// Renders `feed` as an RSS 2.0 document.
///
/// Channel mapping: `title`, `link` (first alternate link), `description`
/// (subtitle), `lastBuildDate` (updated), `docs`, `generator`, `image`
/// (logo), `copyright` (rights), `category`, and `atom:link` for the `self`
/// and `hub` links. Text constructs are written by value; RSS has no `type`
/// attribute.
pub fn render_with(feed: &Feed, config: &RenderConfig) -> Result<String, RenderError> {
    let items: Vec<ItemFragment> = feed.entry.iter().map(render_item).collect();
    let used_content_module = items.iter().any(|item| item.uses_content_module);

    let atom_links = channel_atom_links(feed);
    let used_atom_link = !atom_links.is_empty();

    let mut root = Attributes::new().with("version", "2.0");
    if used_content_module {
        root.insert("xmlns:content", CONTENT_NAMESPACE);
    }
    if used_atom_link {
        root.insert("xmlns:atom", atom::NAMESPACE);
    }

    let title = feed.title.as_ref().map(|t| t.value.as_str()).unwrap_or("");
    let home = feed
        .link
        .as_ref()
        .and_then(|links| links.find_rel(&LinkRelation::Alternate))
        .map(|link| link.href.as_str())
        .unwrap_or("");

    let mut out = String::new();
    if config.xml_declaration {
        out.push_str(atom::XML_DECLARATION);
    }
    out.push_str(&format!("<rss{}><channel>", write_attributes(Some(&root))));

    out.push_str(&write_tag("title", title, None));
    out.push_str(&write_tag("link", home, None));
    out.push_str(&write_tag(
        "description",
        feed.subtitle.as_ref().map(|t| t.value.as_str()).unwrap_or(""),
        None,
    ));
    if let Some(ref updated) = feed.updated {
        out.push_str(&write_tag("lastBuildDate", &rfc822(updated), None));
    }
    out.push_str(&write_tag("docs", &config.rss_docs, None));
    let generator = feed
        .generator
        .as_ref()
        .map(|g| g.name.as_str())
        .unwrap_or(config.default_generator.as_str());
    out.push_str(&write_tag("generator", generator, None));

    if let Some(ref logo) = feed.logo {
        out.push_str("<image>");
        out.push_str(&write_tag("title", title, None));
        out.push_str(&write_tag("url", logo, None));
        out.push_str(&write_tag("link", home, None));
        out.push_str("</image>");
    }

    out.push_str(&write_tag(
        "copyright",
        feed.rights.as_ref().map(|t| t.value.as_str()).unwrap_or(""),
        None,
    ));
    if let Some(ref categories) = feed.category {
        for category in categories {
            out.push_str(&category_tag(&category.term, category.scheme.as_deref()));
        }
    }
    out.push_str(&atom_links);

    for item in &items {
        out.push_str(&item.xml);
    }
    out.push_str("</channel></rss>");

    tracing::debug!(
        items = items.len(),
        content_module = used_content_module,
        atom_link = used_atom_link,
        "Rendered RSS channel"
    );
    Ok(out)
}

/// `atom:link` elements for the feed's `self` and `hub` links.
fn channel_atom_links(feed: &Feed) -> String {
    let Some(ref links) = feed.link else {
        return String::new();
    };

    let mut out = String::new();
    if let Some(link) = links.find_rel(&LinkRelation::SelfLink) {
        let attr = Attributes::new()
            .with("href", link.href.as_str())
            .with("rel", "self")
            .with("type", "application/rss+xml");
        out.push_str(&format!("<atom:link{}/>", write_attributes(Some(&attr))));
    }
    if let Some(link) = links.find_rel(&LinkRelation::Hub) {
        let attr = Attributes::new()
            .with("href", link.href.as_str())
            .with("rel", "hub");
        out.push_str(&format!("<atom:link{}/>", write_attributes(Some(&attr))));
    }
    out
}

fn render_item(entry: &Entry) -> ItemFragment {
    let link = entry
        .link
        .as_ref()
        .and_then(|links| links.find_rel(&LinkRelation::Alternate))
        .map(|link| link.href.as_str());

    let mut xml = String::from("<item>");
    xml.push_str(&write_tag(
        "title",
        entry.title.as_ref().map(|t| t.value.as_str()).unwrap_or(""),
        None,
    ));
    xml.push_str(&write_tag("link", link.unwrap_or(""), None));
    xml.push_str(&write_tag(
        "guid",
        entry.id.as_deref().or(link).unwrap_or(""),
        None,
    ));
    if let Some(date) = entry.published.as_ref().or(entry.updated.as_ref()) {
        xml.push_str(&write_tag("pubDate", &rfc822(date), None));
    }
    xml.push_str(&write_tag(
        "description",
        entry.summary.as_ref().map(|t| t.value.as_str()).unwrap_or(""),
        None,
    ));

    let content = entry.content.as_ref().map(|t| t.value.as_str()).unwrap_or("");
    let uses_content_module = !content.is_empty();
    xml.push_str(&write_tag("content:encoded", content, None));

    if let Some(author) = entry
        .author
        .as_ref()
        .and_then(|persons| persons.iter().find_map(rss_author))
    {
        xml.push_str(&write_tag("author", &author, None));
    }
    if let Some(ref categories) = entry.category {
        for category in categories {
            xml.push_str(&category_tag(&category.term, category.scheme.as_deref()));
        }
    }
    xml.push_str(&enclosure(entry));
    xml.push_str("</item>");

    ItemFragment {
        xml,
        uses_content_module,
    }
}

/// RSS authors are `email (name)`; persons lacking either are skipped.
fn rss_author(person: &Person) -> Option<String> {
    let email = person.email.as_deref()?;
    if email.is_empty() || person.name.is_empty() {
        return None;
    }
    Some(format!("{} ({})", email, person.name))
}

fn category_tag(term: &str, domain: Option<&str>) -> String {
    match domain {
        Some(domain) => {
            let attr = Attributes::new().with("domain", domain);
            write_tag("category", term, Some(&attr))
        }
        None => write_tag("category", term, None),
    }
}

/// First `enclosure` link, falling back to the entry image.
fn enclosure(entry: &Entry) -> String {
    let link = entry
        .link
        .as_ref()
        .and_then(|links| links.find_rel(&LinkRelation::Enclosure));

    let attr = match (link, entry.image.as_deref()) {
        (Some(link), _) => {
            let mut attr = Attributes::new().with("url", link.href.as_str());
            if let Some(length) = link.length {
                attr.insert("length", length.to_string());
            }
            if let Some(ref mime_type) = link.mime_type {
                attr.insert("type", mime_type.as_str());
            }
            attr
        }
        (None, Some(image)) => Attributes::new().with("url", image),
        (None, None) => return String::new(),
    };
    format!("<enclosure{}/>", write_attributes(Some(&attr)))
}
