use super::tag::{write_attributes, Attributes};
use crate::model::{Category, OneOrMany};

/// Renders one or many Atom categories as `<category term=".."/>` elements
/// with optional `scheme` and `label` attributes.
pub fn write_category(categories: Option<&OneOrMany<Category>>) -> String {
    let Some(categories) = categories else {
        return String::new();
    };
    categories.iter().map(category_element).collect()
}

fn category_element(category: &Category) -> String {
    let mut attr = Attributes::new().with("term", category.term.as_str());
    if let Some(ref scheme) = category.scheme {
        attr.insert("scheme", scheme.as_str());
    }
    if let Some(ref label) = category.label {
        attr.insert("label", label.as_str());
    }
    format!("<category{}/>", write_attributes(Some(&attr)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_only() {
        assert_eq!(
            write_category(Some(&Category::new("sports").into())),
            r#"<category term="sports"/>"#
        );
    }

    #[test]
    fn test_full_category_list() {
        let categories: OneOrMany<Category> = vec![
            Category::new("rust")
                .with_scheme("http://x.com/tags")
                .with_label("Rust"),
            Category::new("xml"),
        ]
        .into();
        assert_eq!(
            write_category(Some(&categories)),
            r#"<category term="rust" scheme="http://x.com/tags" label="Rust"/><category term="xml"/>"#
        );
    }

    #[test]
    fn test_absent_category() {
        assert_eq!(write_category(None), "");
    }
}
