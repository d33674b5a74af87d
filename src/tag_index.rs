use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::build_mode::BuildMode;
use crate::content::ContentRecord;

/// Which records contribute tags.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum TagScope {
    /// Drafts included, so a tag used only by drafts still gets a page.
    #[default]
    AllRecords,
    /// Only records the build mode publishes.
    Published(BuildMode),
}

impl TagScope {
    fn includes(&self, record: &ContentRecord) -> bool {
        match self {
            TagScope::AllRecords => true,
            TagScope::Published(mode) => mode.includes(record),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// Distinct lower-cased tags of every record, drafts included.
pub fn enumerate_tags(records: &[ContentRecord]) -> BTreeSet<String> {
    enumerate_tags_with(records, TagScope::AllRecords)
}

pub fn enumerate_tags_with(records: &[ContentRecord], scope: TagScope) -> BTreeSet<String> {
    records.iter()
        .filter(|record| scope.includes(record))
        .flat_map(|record| record.tags.iter())
        .map(|tag| tag.to_lowercase())
        .collect()
}

/// Number of records per tag, most used first. A record counts once per tag even if it
/// repeats the tag with a different case.
pub fn tag_frequencies(records: &[ContentRecord], scope: TagScope) -> Vec<TagCount> {
    let mut tag_map: BTreeMap<String, usize> = BTreeMap::new();

    for record in records.iter().filter(|record| scope.includes(record)) {
        let record_tags: BTreeSet<String> = record.tags.iter().map(|t| t.to_lowercase()).collect();
        for tag in record_tags {
            *tag_map.entry(tag).or_insert(0) += 1;
        }
    }

    let mut tag_list: Vec<TagCount> = tag_map.into_iter()
        .map(|(tag, count)| TagCount { tag, count })
        .collect();
    // BTreeMap order keeps ties alphabetical, the sort is stable
    tag_list.sort_by(|a, b| b.count.cmp(&a.count));
    tag_list
}
