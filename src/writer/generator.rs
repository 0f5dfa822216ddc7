use super::tag::{write_tag, Attributes};
use crate::model::Generator;

/// Derives the `<generator>` attribute set: every field except `name`, in
/// declaration order.
pub fn generator_attributes(generator: &Generator) -> Attributes {
    let mut attr = Attributes::new();
    if let Some(ref uri) = generator.uri {
        attr.insert("uri", uri.as_str());
    }
    if let Some(ref version) = generator.version {
        attr.insert("version", version.as_str());
    }
    attr
}

/// Renders `<generator uri=".." version="..">name</generator>`.
///
/// The generator's name becomes the element text and its remaining fields
/// become attributes. The generator itself is only borrowed.
///
/// ```
/// use feedwright::model::Generator;
/// use feedwright::writer::write_generator;
///
/// let g = Generator::new("Example Toolkit").with_uri("/myblog.php").with_version("1.0");
/// assert_eq!(
///     write_generator(Some(&g)),
///     r#"<generator uri="/myblog.php" version="1.0">Example Toolkit</generator>"#
/// );
/// ```
pub fn write_generator(generator: Option<&Generator>) -> String {
    let Some(generator) = generator else {
        return String::new();
    };
    let attr = generator_attributes(generator);
    write_tag("generator", &generator.name, Some(&attr))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_only_generator() {
        assert_eq!(
            write_generator(Some(&Generator::new("feedwright"))),
            "<generator>feedwright</generator>"
        );
    }

    #[test]
    fn test_absent_generator() {
        assert_eq!(write_generator(None), "");
    }

    #[test]
    fn test_rendering_leaves_generator_untouched() {
        let g = Generator::new("Toolkit").with_version("2.1");
        let before = g.clone();
        let first = write_generator(Some(&g));
        let second = write_generator(Some(&g));
        assert_eq!(g, before);
        assert_eq!(first, second);
        assert_eq!(first, r#"<generator version="2.1">Toolkit</generator>"#);
    }

    #[test]
    fn test_attributes_exclude_name() {
        let g = Generator::new("Toolkit").with_uri("http://x.com");
        let attr = generator_attributes(&g);
        assert_eq!(attr.get("name"), None);
        assert_eq!(attr.get("uri"), Some("http://x.com"));
        assert_eq!(attr.len(), 1);
    }
}
