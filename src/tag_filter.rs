use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use spdlog::debug;

use crate::build_mode::BuildMode;
use crate::content::ContentRecord;

/// How a tag page query is compared with the tags of a record.
#[derive(Deserialize, Serialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TagMatch {
    /// Query used as a case-insensitive, unanchored pattern: `ang` finds `Angular`.
    #[default]
    Pattern,
    /// Case-insensitive equality.
    Exact,
}

enum Compiled {
    Pattern(Regex),
    Substring(String),
    Exact(String),
}

pub struct TagMatcher {
    compiled: Compiled,
}

impl TagMatcher {
    pub fn new(query: &str, how: TagMatch) -> TagMatcher {
        let compiled = match how {
            TagMatch::Exact => Compiled::Exact(query.to_lowercase()),
            TagMatch::Pattern => match RegexBuilder::new(query).case_insensitive(true).build() {
                Ok(re) => Compiled::Pattern(re),
                Err(e) => {
                    debug!("Tag {} is not a valid pattern, matching it literally: {}", query, e);
                    Compiled::Substring(query.to_lowercase())
                }
            },
        };

        TagMatcher { compiled }
    }

    pub fn matches(&self, tag: &str) -> bool {
        match &self.compiled {
            Compiled::Pattern(re) => re.is_match(tag),
            Compiled::Substring(query) => tag.to_lowercase().contains(query.as_str()),
            Compiled::Exact(query) => tag.to_lowercase() == *query,
        }
    }

    pub fn matches_record(&self, record: &ContentRecord) -> bool {
        record.tags.iter().any(|tag| self.matches(tag))
    }
}

/// Newest first. Stable, so equal dates keep their input order.
pub fn sort_by_date_desc(records: &mut [&ContentRecord]) {
    records.sort_by(|a, b| b.published_at.cmp(&a.published_at));
}

/// Records of one tag page: matching, published under `mode`, newest first.
pub fn records_for_tag<'a>(records: &'a [ContentRecord], tag: &str, mode: BuildMode, how: TagMatch) -> Vec<&'a ContentRecord> {
    let matcher = TagMatcher::new(tag, how);
    let mut tagged: Vec<&ContentRecord> = records.iter()
        .filter(|record| mode.includes(record))
        .filter(|record| matcher.matches_record(record))
        .collect();
    sort_by_date_desc(&mut tagged);
    tagged
}

/// The main listing: everything published under `mode`, newest first.
pub fn published(records: &[ContentRecord], mode: BuildMode) -> Vec<&ContentRecord> {
    let mut listed: Vec<&ContentRecord> = records.iter()
        .filter(|record| mode.includes(record))
        .collect();
    sort_by_date_desc(&mut listed);
    listed
}

#[cfg(test)]
mod tests {
    use crate::test_data::{angular_posts, record};

    use super::*;

    fn titles(records: &[&ContentRecord]) -> Vec<String> {
        records.iter().map(|r| r.title.clone()).collect()
    }

    #[test]
    fn test_scenario_production() {
        let records = angular_posts();
        let tagged = records_for_tag(&records, "angular", BuildMode::Production, TagMatch::Pattern);
        assert_eq!(titles(&tagged), ["B", "A"]);
    }

    #[test]
    fn test_scenario_development_keeps_drafts() {
        let records = angular_posts();
        let tagged = records_for_tag(&records, "angular", BuildMode::Development, TagMatch::Pattern);
        assert_eq!(titles(&tagged), ["B", "A", "C"]);
    }

    #[test]
    fn test_partial_tag_matches_with_pattern() {
        let records = vec![record("a", "2023-01-01", &["Angular"], false)];

        let tagged = records_for_tag(&records, "ang", BuildMode::Production, TagMatch::Pattern);
        assert_eq!(tagged.len(), 1);

        let tagged = records_for_tag(&records, "ang", BuildMode::Production, TagMatch::Exact);
        assert!(tagged.is_empty());
        let tagged = records_for_tag(&records, "angular", BuildMode::Production, TagMatch::Exact);
        assert_eq!(tagged.len(), 1);
    }

    #[test]
    fn test_pattern_is_a_regex() {
        let records = vec![
            record("js", "2023-01-01", &["JavaScript"], false),
            record("ts", "2023-01-02", &["TypeScript"], false),
            record("rs", "2023-01-03", &["Rust"], false),
        ];

        let tagged = records_for_tag(&records, "^(java|type)script$", BuildMode::Production, TagMatch::Pattern);
        assert_eq!(titles(&tagged), ["TS", "JS"]);

        // `.` is a wildcard
        let tagged = records_for_tag(&records, "r.st", BuildMode::Production, TagMatch::Pattern);
        assert_eq!(titles(&tagged), ["RS"]);
    }

    #[test]
    fn test_repeated_quantifier_is_a_pattern() {
        let records = vec![
            record("csharp", "2023-01-01", &["C#"], false),
            record("cpp", "2023-01-02", &["C++"], false),
            record("go", "2023-01-03", &["Go"], false),
        ];

        // `c++` compiles as a repeated `c`, so it is not matched literally
        let tagged = records_for_tag(&records, "c++", BuildMode::Production, TagMatch::Pattern);
        assert_eq!(titles(&tagged), ["CPP", "CSHARP"]);

        let tagged = records_for_tag(&records, "c\\+\\+", BuildMode::Production, TagMatch::Pattern);
        assert_eq!(titles(&tagged), ["CPP"]);

        let tagged = records_for_tag(&records, "c++", BuildMode::Production, TagMatch::Exact);
        assert_eq!(titles(&tagged), ["CPP"]);
    }

    #[test]
    fn test_invalid_pattern_matches_literally() {
        let records = vec![
            record("bracketed", "2023-01-01", &["[WIP] notes"], false),
            record("plain", "2023-01-02", &["wip"], false),
        ];

        let tagged = records_for_tag(&records, "[wip", BuildMode::Production, TagMatch::Pattern);
        assert_eq!(titles(&tagged), ["BRACKETED"]);
    }

    #[test]
    fn test_no_match() {
        let records = angular_posts();
        assert!(records_for_tag(&records, "vue", BuildMode::Production, TagMatch::Pattern).is_empty());
        assert!(records_for_tag(&[], "angular", BuildMode::Production, TagMatch::Pattern).is_empty());
    }

    #[test]
    fn test_results_hold_properties() {
        let records = vec![
            record("a", "2021-06-01", &["Rust", "cli"], false),
            record("b", "2023-02-01 10:00", &["rust"], true),
            record("c", "2023-02-01 09:00", &["RUST"], false),
            record("d", "2022-01-01", &["go"], false),
            record("e", "2020-01-01", &["rustacean"], false),
        ];

        let tagged = records_for_tag(&records, "rust", BuildMode::Production, TagMatch::Pattern);
        assert_eq!(titles(&tagged), ["C", "A", "E"]);
        for pair in tagged.windows(2) {
            assert!(pair[0].published_at >= pair[1].published_at);
        }
        for rec in &tagged {
            assert!(!rec.draft);
            assert!(rec.tags.iter().any(|t| t.to_lowercase().contains("rust")));
        }

        let again = records_for_tag(&records, "rust", BuildMode::Production, TagMatch::Pattern);
        assert_eq!(tagged, again);
    }

    #[test]
    fn test_published() {
        let records = angular_posts();
        assert_eq!(titles(&published(&records, BuildMode::Production)), ["B", "A"]);
        assert_eq!(titles(&published(&records, BuildMode::Development)), ["B", "A", "C"]);
        assert!(published(&[], BuildMode::Production).is_empty());
    }
}
