use std::path::PathBuf;

use chrono::NaiveDateTime;

pub mod content_file;
pub mod front_matter;

/// One authored post, validated and immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentRecord {
    pub title: String,
    pub description: String,
    pub slug: String,
    pub published_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
    /// As authored. The first one is the primary tag.
    pub tags: Vec<String>,
    pub draft: bool,
    pub source: PathBuf,
    pub body: String,
}

impl ContentRecord {
    pub fn primary_tag(&self) -> Option<&str> {
        self.tags.first().map(|t| t.as_str())
    }
}

/// Every record of a content directory, loaded once per build.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    records: Vec<ContentRecord>,
}

impl Collection {
    pub fn new(mut records: Vec<ContentRecord>) -> Self {
        records.sort_by(|a, b| a.slug.cmp(&b.slug));
        Collection { records }
    }

    pub fn records(&self) -> &[ContentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
