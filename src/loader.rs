use std::io;
use std::io::ErrorKind;
use std::path::Path;

use spdlog::{debug, info};

use crate::content::Collection;
use crate::content::content_file::ContentFile;
use crate::content_list::ContentList;

/// Reads and validates every post below `content_dir`. The first invalid file stops the load.
pub fn load_collection(content_dir: &Path, index_base_name: &str) -> io::Result<Collection> {
    if !content_dir.is_dir() {
        return Err(io::Error::new(ErrorKind::NotFound, format!("Content directory not found: {}", content_dir.display())));
    }

    info!("Loading content from {}", content_dir.display());
    let content_list = ContentList {
        root_dir: content_dir.to_path_buf(),
        index_base_name: index_base_name.to_string(),
    };

    let mut records = vec![];
    for link in content_list.content_links()? {
        debug!("Reading {} from {}", link.slug, link.path.display());
        let content_file = ContentFile::from_file(link.slug, link.path)?;
        records.push(content_file.parse()?);
    }

    let drafts = records.iter().filter(|r| r.draft).count();
    info!("Loaded {} posts ({} drafts)", records.len(), drafts);

    Ok(Collection::new(records))
}
