//! Reads rendered documents back with an independent feed parser.
//!
//! Every format is fed through `feed-rs`, which a typical aggregator would
//! use to consume these documents.

use chrono::{TimeZone, Utc};
use feed_rs::model::FeedType;
use feed_rs::parser;

use feedwright::model::{Category, Entry, Feed, Link, LinkRelation, Person, Text};
use feedwright::{atom, json, rss};

fn blog() -> Feed {
    let when = Utc.with_ymd_and_hms(1973, 3, 15, 0, 0, 0).unwrap();
    Feed {
        id: Some("http://feed.com".into()),
        title: Some("Feed Title".into()),
        subtitle: Some("Feed Subtitle".into()),
        updated: Some(when),
        author: Some(Person::new("Bob").with_email("bob@test.com").into()),
        link: Some(
            vec![
                Link::from("http://feed.com"),
                Link::new("http://feed.com/feed").with_rel(LinkRelation::SelfLink),
            ]
            .into(),
        ),
        category: Some(Category::new("tech").into()),
        entry: vec![Entry {
            id: Some("id".into()),
            title: Some("title".into()),
            link: Some("http://feed.com/1".into()),
            summary: Some(Text::html("<p>summary</p>")),
            content: Some(Text::html("<p>body</p>")),
            published: Some(when),
            updated: Some(when),
            author: Some(Person::new("Fred").with_email("fred@his-house.com").into()),
            ..Default::default()
        }],
        ..Default::default()
    }
}

#[test]
fn test_atom_is_readable() {
    let xml = atom::render(&blog()).unwrap();
    let parsed = parser::parse(xml.as_bytes()).unwrap();

    assert_eq!(parsed.feed_type, FeedType::Atom);
    assert_eq!(parsed.id, "http://feed.com");
    assert_eq!(parsed.title.unwrap().content, "Feed Title");
    assert_eq!(parsed.authors[0].name, "Bob");
    assert_eq!(parsed.entries.len(), 1);

    let entry = &parsed.entries[0];
    assert_eq!(entry.id, "id");
    assert_eq!(entry.title.as_ref().unwrap().content, "title");
    assert_eq!(entry.links[0].href, "http://feed.com/1");
    assert_eq!(
        entry.updated,
        Some(Utc.with_ymd_and_hms(1973, 3, 15, 0, 0, 0).unwrap())
    );
    assert!(entry.summary.as_ref().unwrap().content.contains("summary"));
}

#[test]
fn test_rss_is_readable() {
    let xml = rss::render(&blog()).unwrap();
    let parsed = parser::parse(xml.as_bytes()).unwrap();

    assert_eq!(parsed.feed_type, FeedType::RSS2);
    assert_eq!(parsed.title.unwrap().content, "Feed Title");
    assert_eq!(parsed.entries.len(), 1);

    let entry = &parsed.entries[0];
    assert_eq!(entry.id, "id");
    assert_eq!(entry.title.as_ref().unwrap().content, "title");
    assert_eq!(
        entry.published,
        Some(Utc.with_ymd_and_hms(1973, 3, 15, 0, 0, 0).unwrap())
    );
    assert!(entry.content.is_some());
}

#[test]
fn test_json_is_readable() {
    let out = json::render(&blog()).unwrap();
    let parsed = parser::parse(out.as_bytes()).unwrap();

    assert_eq!(parsed.feed_type, FeedType::JSON);
    assert_eq!(parsed.title.unwrap().content, "Feed Title");
    assert_eq!(parsed.entries.len(), 1);
    assert_eq!(parsed.entries[0].id, "id");
}
