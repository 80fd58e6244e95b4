use crate::models::{Topic, TopicFile};
use crate::quiz::{Catalog, CatalogError};
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid topics directory: {0}")]
    InvalidTopicsDir(String),
    #[error("Invalid catalog {path}: {source}")]
    Catalog {
        path: PathBuf,
        #[source]
        source: CatalogError,
    },
}

/// Read a theory file relative to the topics root
pub fn read_file(relative_path: &RelativePath, topics_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(topics_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Find all `*.md` theory files under the topics root, sorted by path
pub fn scan_topics(topics_root: &Path) -> Result<Vec<TopicFile>, IoError> {
    validate_topics_dir(topics_root)?;

    let mut files = Vec::new();
    scan_directory_recursive(topics_root, &mut files)?;

    let mut topics: Vec<TopicFile> = files
        .iter()
        .filter_map(|path| {
            let relative = path.strip_prefix(topics_root).ok()?;
            match RelativePathBuf::from_path(relative) {
                Ok(relative) => Some(TopicFile::new(relative)),
                Err(e) => {
                    log::warn!("skipping {}: {e}", path.display());
                    None
                }
            }
        })
        .collect();
    topics.sort();
    log::debug!("found {} topics under {}", topics.len(), topics_root.display());
    Ok(topics)
}

/// Load one topic's theory text
pub fn load_topic(file: &TopicFile, topics_root: &Path) -> Result<Topic, IoError> {
    let theory = read_file(file.relative_path(), topics_root)?;
    Ok(Topic::new(file.clone(), theory))
}

/// Load every readable topic; unreadable files are logged and skipped
pub fn load_topics(topics_root: &Path) -> Result<Vec<Topic>, IoError> {
    let topics = scan_topics(topics_root)?
        .into_iter()
        .filter_map(|file| match load_topic(&file, topics_root) {
            Ok(topic) => Some(topic),
            Err(e) => {
                log::warn!("skipping topic {}: {e}", file.relative_path());
                None
            }
        })
        .collect();
    Ok(topics)
}

/// Load a flashcard catalog from a TOML file
pub fn load_catalog(path: &Path) -> Result<Catalog, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    Catalog::from_toml_str(&content).map_err(|source| IoError::Catalog {
        path: path.to_path_buf(),
        source,
    })
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            if let Err(e) = scan_directory_recursive(&path, files) {
                log::warn!("skipping directory {}: {e}", path.display());
            }
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_topics_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidTopicsDir(format!(
            "{} is not a directory",
            path.display()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_file, create_test_topics_dir};

    #[test]
    fn test_scan_topics() {
        // Given a topics directory with theory files
        let topics_dir = create_test_topics_dir();
        create_test_file(&topics_dir, "stacks.md", "LIFO.");
        create_test_file(&topics_dir, "binary-heaps.md", "- push\n- pop");

        // When scanning
        let topics = scan_topics(topics_dir.path()).unwrap();

        // Then both are found, sorted, with titles
        let titles: Vec<_> = topics.iter().map(TopicFile::title).collect();
        assert_eq!(titles, vec!["Binary Heaps", "Stacks"]);
    }

    #[test]
    fn test_scan_nested_directories() {
        let topics_dir = create_test_topics_dir();
        create_test_file(&topics_dir, "arrays.md", "Contiguous.");
        create_test_file(&topics_dir, "graphs/bfs.md", "Queue based.");

        let topics = scan_topics(topics_dir.path()).unwrap();

        let slugs: Vec<_> = topics.iter().map(TopicFile::slug).collect();
        assert_eq!(slugs, vec!["arrays", "graphs/bfs"]);
    }

    #[test]
    fn test_ignore_non_markdown_files() {
        let topics_dir = create_test_topics_dir();
        create_test_file(&topics_dir, "trees.md", "Hierarchical.");
        create_test_file(&topics_dir, "cards.toml", "[[cards]]");
        create_test_file(&topics_dir, "diagram.png", "fake image data");

        let topics = scan_topics(topics_dir.path()).unwrap();
        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].slug(), "trees");
    }

    #[test]
    fn test_invalid_topics_directory() {
        let result = scan_topics(Path::new("/this/path/does/not/exist"));
        assert!(matches!(result, Err(IoError::InvalidTopicsDir(_))));
    }

    #[test]
    fn test_validate_topics_dir_rejects_file() {
        let topics_dir = create_test_topics_dir();
        let file = create_test_file(&topics_dir, "stacks.md", "LIFO.");
        assert!(validate_topics_dir(topics_dir.path()).is_ok());
        assert!(validate_topics_dir(&file).is_err());
    }

    #[test]
    fn test_load_topic() {
        let topics_dir = create_test_topics_dir();
        create_test_file(&topics_dir, "queues.md", "FIFO.\n\n- enqueue");

        let file = TopicFile::from("queues.md");
        let topic = load_topic(&file, topics_dir.path()).unwrap();
        assert_eq!(topic.theory, "FIFO.\n\n- enqueue");
        assert_eq!(topic.blocks().len(), 2);
    }

    #[test]
    fn test_load_topic_not_found() {
        let topics_dir = create_test_topics_dir();
        let result = load_topic(&TopicFile::from("missing.md"), topics_dir.path());
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_load_topics_skips_unreadable() {
        let topics_dir = create_test_topics_dir();
        create_test_file(&topics_dir, "good.md", "Readable.");
        create_test_file(&topics_dir, "bad.md", "");
        std::fs::write(topics_dir.path().join("bad.md"), [0xff, 0xfe, 0xfd]).unwrap();

        let topics = load_topics(topics_dir.path()).unwrap();
        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].title(), "Good");
    }

    #[test]
    fn test_load_catalog() {
        let topics_dir = create_test_topics_dir();
        let path = create_test_file(
            &topics_dir,
            "cards.toml",
            r#"
[[cards]]
id = "queue"
category = "data-structures"
question = "Queue order?"
choices = ["FIFO", "LIFO"]
answer = 0
"#,
        );

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_load_catalog_invalid() {
        let topics_dir = create_test_topics_dir();
        let path = create_test_file(&topics_dir, "cards.toml", "cards = 3");

        let err = load_catalog(&path).unwrap_err();
        assert!(matches!(err, IoError::Catalog { .. }));
        assert!(err.to_string().contains("cards.toml"));
    }

    #[test]
    fn test_load_catalog_missing() {
        let result = load_catalog(Path::new("/nonexistent/cards.toml"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }
}
