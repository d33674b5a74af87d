use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

const CONFIG_SAMPLE: &str = r#"# For the file locations, If you want it to be relative to the executable directory
# use ${exe_dir}/location
[paths]
content_dir = "content/blog"

# Posts kept in a directory use <dir>/index.md
[defaults]
index_base_name = "index"
page_size = 10
# "pattern" finds every tag containing the query, "exact" needs the whole tag
tag_match = "pattern"
# "all" makes pages for tags used only by drafts, "published" does not
tag_scope = "all"

[build]
mode = "production"

[log]
level = "Info"
log_to_console = true
"#;

/// Never overwrites an existing file.
pub(crate) fn write_sample_cfg(file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Creating {}", parent.display()))?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(file_path)
        .with_context(|| format!("Creating {}", file_path.display()))?;
    file.write_all(CONFIG_SAMPLE.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use folio::config::parse_config;

    use super::*;

    #[test]
    fn test_sample_is_valid() {
        let cfg = parse_config(CONFIG_SAMPLE).unwrap();
        assert_eq!(cfg.defaults.page_size, 10);
        assert!(cfg.log.is_some());
    }

    #[test]
    fn test_does_not_overwrite() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("folio.toml");
        write_sample_cfg(&path).unwrap();
        assert!(write_sample_cfg(&path).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), CONFIG_SAMPLE);
    }
}
