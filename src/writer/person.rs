use super::tag::write_entity_tag;
use crate::error::RenderError;
use crate::model::{OneOrMany, Person};

/// Element name wrapping a person construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonRole {
    Author,
    Contributor,
}

impl PersonRole {
    pub fn tag(&self) -> &'static str {
        match self {
            PersonRole::Author => "author",
            PersonRole::Contributor => "contributor",
        }
    }
}

/// Renders one or many persons wrapped in `<author>` or `<contributor>`.
///
/// Inner `name`, `uri` and `email` elements are written in that order and
/// each is left out when absent. An absent person renders nothing; a list
/// renders as the concatenation of its persons.
///
/// ```
/// use feedwright::model::Person;
/// use feedwright::writer::{write_person, PersonRole};
///
/// let bob = Person::new("Bob").with_email("bob@test.com");
/// assert_eq!(
///     write_person(PersonRole::Author, Some(&bob.into())).unwrap(),
///     "<author><name>Bob</name><email>bob@test.com</email></author>"
/// );
/// ```
pub fn write_person(
    role: PersonRole,
    persons: Option<&OneOrMany<Person>>,
) -> Result<String, RenderError> {
    let Some(persons) = persons else {
        return Ok(String::new());
    };
    persons.iter().map(|p| person_element(role, p)).collect()
}

fn person_element(role: PersonRole, person: &Person) -> Result<String, RenderError> {
    let tag = role.tag();
    Ok(format!(
        "<{tag}>{}{}{}</{tag}>",
        write_entity_tag("name", person, None)?,
        write_entity_tag("uri", person, None)?,
        write_entity_tag("email", person, None)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_writes_person() {
        let person1 = Person::new("Person");
        let person2 = Person::new("Bob").with_email("bob@test.com");
        let expect1 = "<author><name>Person</name></author>";
        let expect2 = "<author><name>Bob</name><email>bob@test.com</email></author>";

        assert_eq!(
            write_person(PersonRole::Author, Some(&person1.clone().into())).unwrap(),
            expect1
        );
        assert_eq!(
            write_person(PersonRole::Author, Some(&person2.clone().into())).unwrap(),
            expect2
        );
        assert_eq!(
            write_person(PersonRole::Author, Some(&vec![person1, person2].into())).unwrap(),
            format!("{expect1}{expect2}")
        );
    }

    #[test]
    fn test_full_person_field_order() {
        let person = Person::new("Mark Pilgrim")
            .with_email("f8dy@example.com")
            .with_uri("http://example.org/");
        assert_eq!(
            write_person(PersonRole::Contributor, Some(&person.into())).unwrap(),
            "<contributor><name>Mark Pilgrim</name><uri>http://example.org/</uri><email>f8dy@example.com</email></contributor>"
        );
    }

    #[test]
    fn test_absent_person_renders_nothing() {
        assert_eq!(write_person(PersonRole::Author, None).unwrap(), "");
    }

    #[test]
    fn test_person_name_is_escaped() {
        let person = Person::new("Tom & Jerry");
        assert_eq!(
            write_person(PersonRole::Author, Some(&person.into())).unwrap(),
            "<author><name>Tom &amp; Jerry</name></author>"
        );
    }

    fn person_strategy() -> impl Strategy<Value = Person> {
        (
            "[a-zA-Z ]{1,12}",
            proptest::option::of("[a-z]{1,8}@[a-z]{1,8}\\.com"),
            proptest::option::of("https://[a-z]{1,8}\\.org/"),
        )
            .prop_map(|(name, email, uri)| Person { name, email, uri })
    }

    proptest! {
        #[test]
        fn person_list_is_concatenation(persons in proptest::collection::vec(person_strategy(), 0..5)) {
            let joined: String = persons
                .iter()
                .map(|p| write_person(PersonRole::Author, Some(&p.clone().into())).unwrap())
                .collect();
            let list = write_person(PersonRole::Author, Some(&persons.into())).unwrap();
            prop_assert_eq!(list, joined);
        }
    }
}
