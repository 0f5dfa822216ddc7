//! Rendering driven by a `RenderConfig` loaded from TOML.

use pretty_assertions::assert_eq;

use feedwright::model::{Feed, Generator, Syndicate};
use feedwright::{atom, json, rss, RenderConfig};

struct Changelog {
    name: &'static str,
    releases: Vec<&'static str>,
}

impl Syndicate for Changelog {
    fn syndicate(&self) -> Feed {
        Feed {
            id: Some(format!("urn:{}", self.name)),
            title: Some(self.name.into()),
            entry: self
                .releases
                .iter()
                .map(|version| feedwright::Entry {
                    id: Some(format!("urn:{}:{version}", self.name)),
                    title: Some(format!("Release {version}").into()),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }
}

fn changelog() -> Changelog {
    Changelog {
        name: "widgets",
        releases: vec!["1.1", "1.0"],
    }
}

#[test]
fn test_toml_config_applies_to_every_format() {
    let config = RenderConfig::from_toml_str(
        r#"
xml_declaration = false
default_generator = "widgets-release-bot"
rss_docs = ""
json_indent = 0
"#,
    )
    .unwrap();
    let feed = changelog().syndicate();

    let atom_xml = atom::render_with(&feed, &config).unwrap();
    assert!(atom_xml.starts_with("<feed "));

    let rss_xml = rss::render_with(&feed, &config).unwrap();
    assert!(rss_xml.starts_with("<rss "));
    assert!(rss_xml.contains("<generator>widgets-release-bot</generator>"));
    assert!(!rss_xml.contains("<docs>"));

    let json_out = json::render_with(&feed, &config).unwrap();
    assert!(!json_out.contains('\n'));
}

#[test]
fn test_feed_generator_wins_over_default() {
    let config = RenderConfig::from_toml_str(r#"default_generator = "fallback""#).unwrap();
    let mut feed = changelog().syndicate();
    feed.generator = Some(Generator::new("Hand Rolled"));

    let xml = rss::render_with(&feed, &config).unwrap();
    assert!(xml.contains("<generator>Hand Rolled</generator>"));
}

#[test]
fn test_render_source_matches_render() {
    let source = changelog();
    let feed = source.syndicate();

    assert_eq!(
        atom::render_source(&source).unwrap(),
        atom::render(&feed).unwrap()
    );
    assert_eq!(rss::render_source(&source).unwrap(), rss::render(&feed).unwrap());
    assert_eq!(
        json::render_source(&source).unwrap(),
        json::render(&feed).unwrap()
    );
}

#[test]
fn test_empty_config_is_default() {
    assert_eq!(
        RenderConfig::from_toml_str("").unwrap(),
        RenderConfig::default()
    );
}
