use std::path::PathBuf;

use crate::content::ContentRecord;
use crate::text_utils::parse_date_time;

pub const POST_DATA_YAML: &str = "---
title: Angular signals in practice
description: What changed when we moved to signals
publishedAt: 2024-01-01
tags: [\"Angular\", \"TypeScript\"]
heroImage: /images/signals.png
---
# Angular signals in practice

Signals landed and we rewrote the dashboard with them.
";

pub const POST_DATA_TOML: &str = "+++
title = \"Notes on ownership\"
description = \"Borrowing explained with a bookshelf\"
slug = \"rust-ownership\"
publishedAt = 2022-05-22T10:54:25
updatedAt = 2022-06-01
tags = [\"rust\"]
draft = true
+++

Who owns the book?
";

pub fn record(slug: &str, published_at: &str, tags: &[&str], draft: bool) -> ContentRecord {
    ContentRecord {
        title: slug.to_uppercase(),
        description: format!("About {}", slug),
        slug: slug.to_string(),
        published_at: parse_date_time(published_at).unwrap(),
        updated_at: None,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        draft,
        source: PathBuf::from(format!("content/blog/{}.md", slug)),
        body: String::new(),
    }
}

/// Posts A, B and C: two live Angular posts and an older draft.
pub fn angular_posts() -> Vec<ContentRecord> {
    let mut a = record("a", "2023-01-01", &["Angular"], false);
    a.title = "A".to_string();
    let mut b = record("b", "2024-01-01", &["angular", "React"], false);
    b.title = "B".to_string();
    let mut c = record("c", "2022-01-01", &["Angular"], true);
    c.title = "C".to_string();
    vec![a, b, c]
}
