use relative_path::{RelativePath, RelativePathBuf};

use crate::parsing::{blocks::Block, parse_theory_str};

/// A theory file under the topics root, identified by its relative path.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TopicFile {
    relative_path: RelativePathBuf,
    slug: String,
    title: String,
}

impl TopicFile {
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let slug = {
            let path_str = relative_path.as_str();
            path_str.strip_suffix(".md").unwrap_or(path_str).to_string()
        };
        let title = Self::title_from_stem(relative_path.file_stem().unwrap_or("untitled"));

        Self {
            relative_path,
            slug,
            title,
        }
    }

    pub fn from_relative_str(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }

    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// Relative path without the `.md` extension, e.g. `graphs/bfs`.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Human title, e.g. `binary-heaps.md` → `Binary Heaps`.
    pub fn title(&self) -> &str {
        &self.title
    }

    fn title_from_stem(stem: &str) -> String {
        stem.split(['-', '_', ' '])
            .filter(|w| !w.is_empty())
            .map(|w| {
                let mut chars = w.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<String>>()
            .join(" ")
    }
}

impl From<&str> for TopicFile {
    fn from(path: &str) -> Self {
        Self::from_relative_str(path)
    }
}

/// A topic with its theory text loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub file: TopicFile,
    pub theory: String,
}

impl Topic {
    pub fn new(file: TopicFile, theory: String) -> Self {
        Self { file, theory }
    }

    pub fn title(&self) -> &str {
        self.file.title()
    }

    /// Parses the theory text into blocks.
    pub fn blocks(&self) -> Vec<Block> {
        parse_theory_str(&self.theory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("binary-heaps.md", "Binary Heaps")]
    #[case("graphs/breadth_first_search.md", "Breadth First Search")]
    #[case("big-o.md", "Big O")]
    #[case("stacks.md", "Stacks")]
    fn title_from_file_name(#[case] path: &str, #[case] title: &str) {
        assert_eq!(TopicFile::from(path).title(), title);
    }

    #[test]
    fn slug_keeps_directories() {
        let file = TopicFile::from("graphs/bfs.md");
        assert_eq!(file.slug(), "graphs/bfs");
        assert_eq!(file.relative_path().as_str(), "graphs/bfs.md");
    }

    #[test]
    fn topic_parses_theory() {
        let topic = Topic::new(
            TopicFile::from("queues.md"),
            "FIFO order.\n\n- enqueue\n- dequeue".to_string(),
        );
        assert_eq!(topic.title(), "Queues");
        assert_eq!(
            topic.blocks()[1],
            Block::UnorderedList {
                items: vec!["enqueue".into(), "dequeue".into()]
            }
        );
    }
}
