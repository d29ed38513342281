//! The scaffold plan: the five artifacts a content bucket starts with.
//!
//! Rendering is deterministic; the same slug always yields byte-identical
//! content, so re-running the tool rewrites the same files in place.

use std::path::Path;

use crate::domain::error::DomainError;
use crate::domain::metadata::DepositMetadata;
use crate::domain::remote::RepoSlug;
use crate::domain::render::RenderContext;

/// Marker file: tells GitHub Pages not to run the Jekyll preprocessor.
pub const NOJEKYLL_PATH: &str = ".nojekyll";
pub const HOMEPAGE_PATH: &str = "index.html";
pub const README_PATH: &str = "README.md";
pub const METADATA_PATH: &str = ".zenodo.json";
pub const CNAME_PATH: &str = "CNAME";

const README_TEMPLATE: &str = "# {{REPO}}

This is a simple collection of mostly
[Creative Commons Non-Commercial (No Derivatives) Licence](https://creativecommons.org/licenses/by-nc-nd/4.0/)d
content used by the [Open Buddhist University](https://www.buddhistuniversity.net/).

For more information about an item's source,
[look up its entry on the website](https://www.buddhistuniversity.net/search/)
or cross reference these files against [our BibTex database](https://buddhistuniversity.net/content.bib).
";

const HOMEPAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{{REPO}} @ The Open Buddhist University</title>
    <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bulma@1.0.2/css/bulma.min.css">
  </head>
  <body>
    <div class="container">
      <h1 class="title">The {{REPO}} Content Bucket</h1>
      <h2 class="subtitle">@ The Open Buddhist University</h2>
      <p>
        <a href="https://github.com/{{OWNER}}/{{REPO}}">https://github.com/{{OWNER}}/{{REPO}}</a>
      </p>
    </div>
  </body>
</html>
"#;

const CNAME_TEMPLATE: &str = "buddhistuniversity.net/{{REPO}}";

/// One artifact to write, path relative to the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldFile {
    path: &'static str,
    content: String,
}

impl ScaffoldFile {
    pub fn path(&self) -> &Path {
        Path::new(self.path)
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// The ordered list of artifacts to write for one bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldPlan {
    files: Vec<ScaffoldFile>,
}

impl ScaffoldPlan {
    /// Render every artifact for the given slug.
    ///
    /// Substitution is context-aware: the homepage gets HTML-escaped values,
    /// the metadata descriptor goes through `serde_json`, and the plain-text
    /// artifacts (README, CNAME) get the slug verbatim.
    pub fn for_slug(slug: &RepoSlug) -> Result<Self, DomainError> {
        let plain = RenderContext::new(slug);
        let html = RenderContext::html(slug);

        let files = vec![
            ScaffoldFile {
                path: NOJEKYLL_PATH,
                content: String::new(),
            },
            ScaffoldFile {
                path: HOMEPAGE_PATH,
                content: html.render(HOMEPAGE_TEMPLATE),
            },
            ScaffoldFile {
                path: README_PATH,
                content: plain.render(README_TEMPLATE),
            },
            ScaffoldFile {
                path: METADATA_PATH,
                content: DepositMetadata::for_slug(slug).to_json_string()?,
            },
            ScaffoldFile {
                path: CNAME_PATH,
                content: plain.render(CNAME_TEMPLATE),
            },
        ];

        Ok(Self { files })
    }

    pub fn files(&self) -> impl Iterator<Item = &ScaffoldFile> {
        self.files.iter()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
