//! People listed in the configuration (`editors`, `authors`, `creators`).

use serde::{Deserialize, Serialize};

/// A person as written in the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Display name.
    pub name: String,

    /// Personal home page or identifier (ORCID, W3C profile).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Affiliation name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Affiliation home page.
    #[serde(
        default,
        rename = "companyURL",
        alias = "companyUrl",
        skip_serializing_if = "Option::is_none"
    )]
    pub company_url: Option<String>,
}

#[cfg(test)]
impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn with_company_url(mut self, url: impl Into<String>) -> Self {
        self.company_url = Some(url.into());
        self
    }
}
