//! Integration tests for complete RSS 2.0 documents.

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use quick_xml::events::Event;
use quick_xml::Reader;

use feedwright::model::{Entry, Feed, Link, LinkRelation, Person, Text};
use feedwright::{rss, RenderConfig};

fn podcast() -> Feed {
    let when = Utc.with_ymd_and_hms(2024, 1, 5, 12, 30, 0).unwrap();
    Feed {
        title: Some("Episodes".into()),
        subtitle: Some("Weekly talk".into()),
        updated: Some(when),
        link: Some(
            vec![
                Link::from("http://pod.example.com"),
                Link::new("http://pod.example.com/rss").with_rel(LinkRelation::SelfLink),
            ]
            .into(),
        ),
        entry: vec![
            Entry {
                id: Some("ep-2".into()),
                title: Some("Second".into()),
                published: Some(when),
                content: Some(Text::html("<p>Show notes</p>")),
                link: Some(
                    vec![
                        Link::from("http://pod.example.com/2"),
                        Link::new("http://pod.example.com/2.mp3")
                            .with_rel(LinkRelation::Enclosure)
                            .with_type("audio/mpeg")
                            .with_length(2048),
                    ]
                    .into(),
                ),
                author: Some(Person::new("Ann").with_email("ann@example.com").into()),
                ..Default::default()
            },
            Entry {
                id: Some("ep-1".into()),
                title: Some("First".into()),
                ..Default::default()
            },
        ],
        ..Default::default()
    }
}

/// Collects `(prefix:)name` of every element in document order.
fn element_names(xml: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    let mut names = Vec::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                names.push(String::from_utf8_lossy(e.name().as_ref()).into_owned());
            }
            Ok(Event::Eof) => break,
            Err(e) => panic!("Malformed XML: {e}\n{xml}"),
            _ => {}
        }
    }
    names
}

#[test]
fn test_podcast_document() {
    let config = RenderConfig {
        xml_declaration: false,
        rss_docs: String::new(),
        ..Default::default()
    };
    let expected = concat!(
        r#"<rss version="2.0" xmlns:content="http://purl.org/rss/1.0/modules/content/" xmlns:atom="http://www.w3.org/2005/Atom">"#,
        "<channel>",
        "<title>Episodes</title>",
        "<link>http://pod.example.com</link>",
        "<description>Weekly talk</description>",
        "<lastBuildDate>Fri, 05 Jan 2024 12:30:00 GMT</lastBuildDate>",
        "<generator>feedwright</generator>",
        r#"<atom:link href="http://pod.example.com/rss" rel="self" type="application/rss+xml"/>"#,
        "<item>",
        "<title>Second</title>",
        "<link>http://pod.example.com/2</link>",
        "<guid>ep-2</guid>",
        "<pubDate>Fri, 05 Jan 2024 12:30:00 GMT</pubDate>",
        "<content:encoded>&lt;p&gt;Show notes&lt;/p&gt;</content:encoded>",
        "<author>ann@example.com (Ann)</author>",
        r#"<enclosure url="http://pod.example.com/2.mp3" length="2048" type="audio/mpeg"/>"#,
        "</item>",
        "<item><title>First</title><guid>ep-1</guid></item>",
        "</channel></rss>"
    );
    assert_eq!(rss::render_with(&podcast(), &config).unwrap(), expected);
}

#[test]
fn test_every_prefix_is_declared() {
    let xml = rss::render(&podcast()).unwrap();
    let names = element_names(&xml);

    assert!(names.iter().any(|n| n == "content:encoded"));
    assert!(names.iter().any(|n| n == "atom:link"));
    assert!(xml.contains("xmlns:content="));
    assert!(xml.contains("xmlns:atom="));
}

#[test]
fn test_no_namespaces_without_extension_elements() {
    let mut feed = podcast();
    feed.link = Some("http://pod.example.com".into());
    for entry in &mut feed.entry {
        entry.content = None;
    }

    let xml = rss::render(&feed).unwrap();
    assert!(!xml.contains("xmlns:"));
    assert!(element_names(&xml).iter().all(|n| !n.contains(':')));
}

#[test]
fn test_item_order_follows_entries() {
    let xml = rss::render(&podcast()).unwrap();
    let second = xml.find("<guid>ep-2</guid>").unwrap();
    let first = xml.find("<guid>ep-1</guid>").unwrap();
    assert!(second < first);
}

#[test]
fn test_rendering_is_idempotent() {
    let feed = podcast();
    assert_eq!(rss::render(&feed).unwrap(), rss::render(&feed).unwrap());
}
