use std::io;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;

use crate::content::ContentRecord;
use crate::util::content_date::ContentDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontMatterFormat {
    /// `---` fenced
    Yaml,
    /// `+++` fenced
    Toml,
}

impl FrontMatterFormat {
    pub fn delimiter(&self) -> &'static str {
        match self {
            Self::Yaml => "---",
            Self::Toml => "+++",
        }
    }
}

/// Header of a post, as written by the author. Unknown keys are ignored.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct FrontMatter {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(alias = "pubDate", alias = "date")]
    pub published_at: Option<ContentDate>,
    pub updated_at: Option<ContentDate>,
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub draft: bool,
    pub slug: Option<String>,
}

/// Splits a file into its fenced header and the body after the closing fence.
/// The opening fence has to be the first non-blank line. A leading byte order mark is skipped.
pub fn split_front_matter(raw: &str) -> Option<(FrontMatterFormat, &str, &str)> {
    let content = raw.strip_prefix('\u{feff}').unwrap_or(raw).trim_start();

    let format = if content.starts_with(FrontMatterFormat::Yaml.delimiter()) {
        FrontMatterFormat::Yaml
    } else if content.starts_with(FrontMatterFormat::Toml.delimiter()) {
        FrontMatterFormat::Toml
    } else {
        return None;
    };
    let delimiter = format.delimiter();

    let after_open = content[delimiter.len()..].trim_start_matches([' ', '\t']);
    let after_open = after_open.strip_prefix("\r\n")
        .or_else(|| after_open.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in after_open.split_inclusive('\n') {
        if line.trim_end() == delimiter {
            let header = &after_open[..offset];
            let body = &after_open[offset + line.len()..];
            return Some((format, header, body));
        }
        offset += line.len();
    }

    None
}

fn invalid(file_name: &Path, desc: impl AsRef<str>) -> io::Error {
    io::Error::new(ErrorKind::InvalidData, format!("{} - file={}", desc.as_ref(), file_name.display()))
}

pub fn parse_front_matter<'a>(file_name: &Path, raw: &'a str) -> io::Result<(FrontMatter, &'a str)> {
    let Some((format, header, body)) = split_front_matter(raw) else {
        return Err(invalid(file_name, "Front matter is missing"));
    };

    let front_matter = match format {
        FrontMatterFormat::Yaml if header.trim().is_empty() => FrontMatter::default(),
        FrontMatterFormat::Yaml => serde_yaml::from_str::<FrontMatter>(header)
            .map_err(|e| invalid(file_name, format!("Invalid YAML front matter: {}", e)))?,
        FrontMatterFormat::Toml => toml::from_str::<FrontMatter>(header)
            .map_err(|e| invalid(file_name, format!("Invalid TOML front matter: {}", e)))?,
    };

    Ok((front_matter, body))
}

impl FrontMatter {
    /// Checks the required fields and fills the defaults. `default_slug` comes from the file location.
    pub fn into_record(self, file_name: &Path, default_slug: &str, body: &str) -> io::Result<ContentRecord> {
        let title = match self.title {
            Some(title) if !title.trim().is_empty() => title,
            _ => return Err(invalid(file_name, "Missing title")),
        };

        let Some(ContentDate(published_at)) = self.published_at else {
            return Err(invalid(file_name, "Missing publishedAt"));
        };

        let slug = match self.slug {
            Some(slug) if !slug.trim().is_empty() => slug.trim().to_string(),
            _ => default_slug.to_string(),
        };

        Ok(ContentRecord {
            title,
            description: self.description.unwrap_or_default(),
            slug,
            published_at,
            updated_at: self.updated_at.map(|ContentDate(d)| d),
            tags: self.tags.unwrap_or_default(),
            draft: self.draft,
            source: file_name.to_path_buf(),
            body: body.to_string(),
        })
    }
}
