//! Person entries for `editor`, `author` and `creator`.

use serde::Serialize;

use crate::config::Person;

/// Manifest form of a configured person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonEntry {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub affiliation: Organization,
}

/// Affiliation of a person. Always present, even when no company is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Organization {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl From<&Person> for PersonEntry {
    fn from(person: &Person) -> Self {
        Self {
            kind: "Person",
            name: person.name.clone(),
            id: person.url.clone(),
            affiliation: Organization {
                kind: "Organization",
                name: person.company.clone(),
                url: person.company_url.clone(),
            },
        }
    }
}

/// Map a configured list; `None` stays `None` so the field is omitted.
pub fn entries(people: Option<&[Person]>) -> Option<Vec<PersonEntry>> {
    people.map(|people| people.iter().map(PersonEntry::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_person_without_url_has_no_id() {
        let entry = PersonEntry::from(&Person::new("A").with_company("C"));
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({
                "type": "Person",
                "name": "A",
                "affiliation": { "type": "Organization", "name": "C" }
            })
        );
    }

    #[test]
    fn test_person_with_all_fields() {
        let person = Person::new("B")
            .with_url("https://b.example/")
            .with_company("Org")
            .with_company_url("https://org.example/");
        assert_eq!(
            serde_json::to_value(PersonEntry::from(&person)).unwrap(),
            json!({
                "type": "Person",
                "name": "B",
                "id": "https://b.example/",
                "affiliation": {
                    "type": "Organization",
                    "name": "Org",
                    "url": "https://org.example/"
                }
            })
        );
    }

    #[test]
    fn test_entries_absent_vs_empty() {
        assert_eq!(entries(None), None);
        assert_eq!(entries(Some(&[])), Some(vec![]));
    }
}
