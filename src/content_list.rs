use std::{fs, io};
use std::path::{Path, PathBuf};

use crate::content::content_file::ContentFormat;

#[derive(Debug, PartialEq)]
pub struct ContentLink {
    pub slug: String,
    pub path: PathBuf,
}

/// Finds posts in a content directory. A post is either a markdown file directly inside it,
/// or a sub-directory holding an index file (`<dir>/index.md`), named after the directory.
pub struct ContentList {
    pub root_dir: PathBuf,
    pub index_base_name: String,
}

impl ContentList {
    pub fn retrieve_files(&self) -> io::Result<Vec<PathBuf>> {
        let mut posts = vec![];
        for entry in fs::read_dir(self.root_dir.as_path())? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let path = entry.path();
            if ContentFormat::from_path(&path).is_some() {
                posts.push(path);
            }
        }
        Ok(posts)
    }

    pub fn retrieve_dirs(&self) -> io::Result<Vec<(PathBuf, PathBuf)>> {
        let dirs = Self::list_dirs(self.root_dir.as_path())?;
        let mut post_dirs = vec![];
        for dir in dirs {
            if let Some(index_file) = Self::find_index(&dir, &self.index_base_name)? {
                post_dirs.push((dir, index_file));
            }
        }
        Ok(post_dirs)
    }

    /// Every post of the directory, ordered by slug.
    pub fn content_links(&self) -> io::Result<Vec<ContentLink>> {
        let mut links = vec![];

        for (dir, index_file) in self.retrieve_dirs()? {
            if let Some(slug) = file_name_of(&dir) {
                links.push(ContentLink { slug, path: index_file });
            }
        }

        for file in self.retrieve_files()? {
            let slug = file.file_stem().and_then(|s| s.to_str()).map(|s| s.to_string());
            if let Some(slug) = slug {
                links.push(ContentLink { slug, path: file });
            }
        }

        links.sort_by(|a, b| a.slug.cmp(&b.slug).then_with(|| a.path.cmp(&b.path)));
        Ok(links)
    }

    fn list_dirs(root_dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut dirs: Vec<PathBuf> = vec![];
        for entry in fs::read_dir(root_dir)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                dirs.push(entry.path());
            }
        }
        Ok(dirs)
    }

    fn find_index(dir: &Path, base_name: &str) -> io::Result<Option<PathBuf>> {
        let mut candidates = vec![];
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let path = entry.path();
            let stem_matches = path.file_stem().and_then(|s| s.to_str()) == Some(base_name);
            if stem_matches && ContentFormat::from_path(&path).is_some() {
                candidates.push(path);
            }
        }
        candidates.sort_by_key(|path| index_rank(path));
        Ok(candidates.into_iter().next())
    }
}

/// Preferred index file when a directory holds more than one: `.md`, then `.markdown`, then `.mdx`.
fn index_rank(path: &Path) -> usize {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("md") => 0,
        Some("markdown") => 1,
        _ => 2,
    }
}

fn file_name_of(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.to_string())
}
