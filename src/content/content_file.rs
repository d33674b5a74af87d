use std::{fs, io};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::content::ContentRecord;
use crate::content::front_matter::parse_front_matter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    Markdown,
    Mdx,
}

impl ContentFormat {
    pub fn from_path(file_name: &Path) -> Option<ContentFormat> {
        match file_name.extension()?.to_str()? {
            "md" | "markdown" => Some(ContentFormat::Markdown),
            "mdx" => Some(ContentFormat::Mdx),
            _ => None,
        }
    }
}

pub struct ContentFile {
    pub slug: String,
    pub file_path: PathBuf,
    pub format: ContentFormat,
    pub raw_content: String,
}

impl ContentFile {
    pub fn from_file(slug: String, file_path: PathBuf) -> io::Result<ContentFile> {
        let format = match ContentFormat::from_path(&file_path) {
            None => return Err(io::Error::new(ErrorKind::Unsupported, format!("Could not guess the type of the file {}", file_path.display()))),
            Some(format) => format,
        };

        let raw_content = fs::read_to_string(&file_path)
            .map_err(|e| io::Error::new(e.kind(), format!("Error reading {}: {}", file_path.display(), e)))?;

        Ok(ContentFile {
            slug,
            file_path,
            format,
            raw_content,
        })
    }

    /// Both formats share the same front matter. The body stays as written.
    pub fn parse(&self) -> io::Result<ContentRecord> {
        let (front_matter, body) = parse_front_matter(&self.file_path, &self.raw_content)?;
        front_matter.into_record(&self.file_path, &self.slug, body)
    }
}
