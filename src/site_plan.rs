//! Static pages derived from a collection: the paginated blog listing and one paginated
//! listing per tag. The plan is handed to the renderer as JSON.

use std::collections::HashMap;

use serde::Serialize;
use spdlog::{info, warn};

use crate::build_mode::BuildMode;
use crate::content::ContentRecord;
use crate::paginator::Paginator;
use crate::tag_filter::{published, records_for_tag, TagMatch};
use crate::tag_index::{enumerate_tags_with, tag_frequencies, TagCount, TagScope};
use crate::text_utils::{format_date_time, slugify};

pub const BLOG_ROOT: &str = "/blog/";
pub const TAGS_ROOT: &str = "/tags/";

#[derive(Debug, Clone, Copy)]
pub struct PlanOptions {
    pub mode: BuildMode,
    pub tag_match: TagMatch,
    pub tag_scope: TagScope,
    pub page_size: u32,
}

#[derive(Debug, Serialize)]
pub struct EntrySummary {
    pub slug: String,
    pub link: String,
    pub title: String,
    pub description: String,
    pub published: String,
    pub tags: Vec<String>,
    pub primary_tag: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PlannedPage {
    pub path: String,
    pub page: u32,
    pub page_count: u32,
    pub entries: Vec<EntrySummary>,
}

#[derive(Debug, Serialize)]
pub struct TagPages {
    pub tag: String,
    /// Path segment of the tag, unique within a plan.
    pub slug: String,
    pub pages: Vec<PlannedPage>,
}

#[derive(Debug, Serialize)]
pub struct SitePlan {
    pub mode: BuildMode,
    pub tag_match: TagMatch,
    pub tags: Vec<TagCount>,
    pub listing: Vec<PlannedPage>,
    pub tag_pages: Vec<TagPages>,
}

impl From<&ContentRecord> for EntrySummary {
    fn from(record: &ContentRecord) -> Self {
        let (published, _) = format_date_time(&record.published_at);
        EntrySummary {
            slug: record.slug.clone(),
            link: post_path(&record.slug),
            title: record.title.clone(),
            description: record.description.clone(),
            published,
            tags: record.tags.clone(),
            primary_tag: record.primary_tag().map(|t| t.to_string()),
        }
    }
}

pub fn post_path(slug: &str) -> String {
    format!("{}{}/", BLOG_ROOT, slug)
}

/// `/tags/<tag>/` for the first page, `/tags/<tag>/page/<n>/` after it.
pub fn tag_path(tag: &str, page: u32) -> String {
    tag_slug_path(&slugify(tag), page)
}

fn tag_slug_path(slug: &str, page: u32) -> String {
    paged_path(&format!("{}{}/", TAGS_ROOT, slug), page)
}

pub fn listing_path(page: u32) -> String {
    paged_path(BLOG_ROOT, page)
}

fn paged_path(base: &str, page: u32) -> String {
    if page <= 1 {
        base.to_string()
    } else {
        format!("{}page/{}/", base, page)
    }
}

fn paginate(records: &[&ContentRecord], page_size: u32, path_of: impl Fn(u32) -> String) -> Vec<PlannedPage> {
    let paginator = Paginator::from(records, page_size);
    let pages = paginator.pages();
    let page_count = pages.len() as u32;

    pages.into_iter()
        .map(|(page, records)| PlannedPage {
            path: path_of(page),
            page,
            page_count,
            entries: records.iter().map(|&r| EntrySummary::from(r)).collect(),
        })
        .collect()
}

/// Hands out one path segment per tag. Tags that slugify to a segment already taken get a
/// numeric suffix: `c#` keeps `c`, `c++` becomes `c-2`.
#[derive(Default)]
struct TagSlugs {
    owners: HashMap<String, String>,
}

impl TagSlugs {
    fn assign(&mut self, tag: &str) -> Option<String> {
        let base = slugify(tag);
        if base.is_empty() {
            return None;
        }

        let mut slug = base.clone();
        let mut suffix = 2;
        while let Some(owner) = self.owners.get(&slug) {
            warn!("Tags {:?} and {:?} share the path segment {}, trying {}-{}", owner, tag, slug, base, suffix);
            slug = format!("{}-{}", base, suffix);
            suffix += 1;
        }

        self.owners.insert(slug.clone(), tag.to_string());
        Some(slug)
    }
}

pub fn plan_site(records: &[ContentRecord], options: &PlanOptions) -> SitePlan {
    let listed = published(records, options.mode);
    let listing = paginate(&listed, options.page_size, listing_path);

    let mut slugs = TagSlugs::default();
    let mut tag_pages = vec![];
    for tag in enumerate_tags_with(records, options.tag_scope) {
        let Some(slug) = slugs.assign(&tag) else {
            warn!("Tag {:?} has no usable characters for a path, skipping its page", tag);
            continue;
        };

        let tagged = records_for_tag(records, &tag, options.mode, options.tag_match);
        if tagged.is_empty() {
            warn!("Tag {} has no published posts, its page will be empty", tag);
        }
        let pages = paginate(&tagged, options.page_size, |page| tag_slug_path(&slug, page));
        tag_pages.push(TagPages { tag, slug, pages });
    }

    info!("Planned {} listing pages and {} tag pages ({} build)", listing.len(), tag_pages.len(), options.mode);

    SitePlan {
        mode: options.mode,
        tag_match: options.tag_match,
        tags: tag_frequencies(records, options.tag_scope),
        listing,
        tag_pages,
    }
}

impl SitePlan {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
