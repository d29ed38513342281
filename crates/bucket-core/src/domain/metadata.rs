//! Archival deposit metadata (`.zenodo.json`).
//!
//! The descriptor is modeled as typed structs and serialized with
//! `serde_json`, so owner/repo values are JSON-string-escaped by
//! construction. The original script spliced names into a raw JSON
//! template, which broke for any name containing a quote.

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::remote::RepoSlug;

/// Zenodo deposit descriptor for a content bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositMetadata {
    pub title: String,
    pub keywords: Vec<String>,
    pub upload_type: String,
    pub description: String,
    pub creators: Vec<Creator>,
    pub access_right: String,
    pub license: String,
    pub related_identifiers: Vec<RelatedIdentifier>,
    pub subjects: Vec<Subject>,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creator {
    pub name: String,
    pub orcid: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedIdentifier {
    pub relation: String,
    pub identifier: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub term: String,
    pub identifier: String,
    pub scheme: String,
}

impl DepositMetadata {
    /// The fixed descriptor for a bucket, with the repository name in the
    /// title and the repository URL among the related identifiers.
    pub fn for_slug(slug: &RepoSlug) -> Self {
        Self {
            title: format!("The Open Buddhist University {}", slug.repo()),
            keywords: vec!["buddhism".to_string()],
            upload_type: "lesson".to_string(),
            description: "<p>A collection of free-distribution files for teaching Buddhism \
                          and related topics.</p>"
                .to_string(),
            creators: vec![Creator {
                name: "Khemarato Bhikkhu".to_string(),
                orcid: "0000-0003-4738-7882".to_string(),
            }],
            access_right: "open".to_string(),
            license: "cc-by-nc-4.0".to_string(),
            related_identifiers: vec![
                RelatedIdentifier {
                    relation: "isPartOf".to_string(),
                    identifier: "https://www.buddhistuniversity.net".to_string(),
                },
                RelatedIdentifier {
                    relation: "isPreviousVersionOf".to_string(),
                    identifier: slug.github_url(),
                },
                RelatedIdentifier {
                    relation: "isRequiredBy".to_string(),
                    identifier: "https://doi.org/10.5281/zenodo.4448510".to_string(),
                },
            ],
            subjects: vec![Subject {
                term: "Buddhism".to_string(),
                identifier: "https://id.loc.gov/authorities/subjects/sh85017454.html".to_string(),
                scheme: "url".to_string(),
            }],
            language: "eng".to_string(),
        }
    }

    /// Pretty-printed JSON with a trailing newline.
    pub fn to_json_string(&self) -> Result<String, DomainError> {
        let mut json =
            serde_json::to_string_pretty(self).map_err(|e| DomainError::MetadataSerialization {
                reason: e.to_string(),
            })?;
        json.push('\n');
        Ok(json)
    }
}
