use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use super::models::{Category, Filter, FlashCard};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Invalid card {id}: {reason}")]
    InvalidCard { id: String, reason: &'static str },
    #[error("Duplicate card id: {0}")]
    DuplicateId(String),
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Ordered, validated set of flashcards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    cards: Vec<FlashCard>,
}

#[derive(Deserialize)]
struct CatalogFile {
    cards: Vec<FlashCard>,
}

struct BuiltinCard {
    id: &'static str,
    category: Category,
    question: &'static str,
    choices: &'static [&'static str],
    answer: usize,
    explanation: &'static str,
}

const BUILTIN: &[BuiltinCard] = &[
    BuiltinCard {
        id: "array-index",
        category: Category::DataStructures,
        question: "What is the cost of reading `a[i]` from an array?",
        choices: &["O(1)", "O(log n)", "O(n)", "O(n log n)"],
        answer: 0,
        explanation: "Elements are contiguous, so the address is computed directly from the index.",
    },
    BuiltinCard {
        id: "linked-list-insert-head",
        category: Category::DataStructures,
        question: "Inserting at the head of a singly linked list costs?",
        choices: &["O(1)", "O(n)", "O(log n)", "O(n^2)"],
        answer: 0,
        explanation: "Only the new node and the head pointer change.",
    },
    BuiltinCard {
        id: "heap-peek",
        category: Category::DataStructures,
        question: "Which operation on a binary min-heap is O(1)?",
        choices: &["Insert", "Extract min", "Peek min", "Delete arbitrary key"],
        answer: 2,
        explanation: "The minimum always sits at the root.",
    },
    BuiltinCard {
        id: "hash-map-worst",
        category: Category::DataStructures,
        question: "Worst-case lookup in a hash map with chaining?",
        choices: &["O(1)", "O(log n)", "O(n)", "O(n log n)"],
        answer: 2,
        explanation: "If every key collides, lookup scans one long chain.",
    },
    BuiltinCard {
        id: "bst-balanced-search",
        category: Category::DataStructures,
        question: "Search in a balanced binary search tree costs?",
        choices: &["O(1)", "O(log n)", "O(n)", "O(sqrt n)"],
        answer: 1,
        explanation: "Each comparison halves the remaining height.",
    },
    BuiltinCard {
        id: "binary-search-precondition",
        category: Category::Algorithms,
        question: "What must hold before running binary search?",
        choices: &[
            "The input is sorted",
            "The input has no duplicates",
            "The input fits in cache",
            "The input length is a power of two",
        ],
        answer: 0,
        explanation: "Discarding half the range relies on ordering.",
    },
    BuiltinCard {
        id: "bfs-structure",
        category: Category::Algorithms,
        question: "Breadth-first search keeps its frontier in a?",
        choices: &["Stack", "Queue", "Priority queue", "Set"],
        answer: 1,
        explanation: "FIFO order visits nodes level by level.",
    },
    BuiltinCard {
        id: "dijkstra-negative",
        category: Category::Algorithms,
        question: "Dijkstra's algorithm is incorrect when the graph has?",
        choices: &[
            "Cycles",
            "Negative edge weights",
            "More edges than nodes",
            "Self loops",
        ],
        answer: 1,
        explanation: "A settled node could later be reached more cheaply through a negative edge.",
    },
    BuiltinCard {
        id: "quicksort-worst",
        category: Category::Algorithms,
        question: "Quicksort's worst case is triggered by?",
        choices: &[
            "Random input",
            "Consistently unbalanced pivots",
            "Too many distinct keys",
            "Small arrays",
        ],
        answer: 1,
        explanation: "Each partition removes one element, giving O(n^2).",
    },
    BuiltinCard {
        id: "merge-sort-stable",
        category: Category::Algorithms,
        question: "Which of these sorts is stable?",
        choices: &["Heap sort", "Quicksort", "Merge sort", "Selection sort"],
        answer: 2,
        explanation: "Merging takes from the left run on ties.",
    },
    BuiltinCard {
        id: "nested-loops",
        category: Category::Complexity,
        question: "Two nested loops over `n` items each run in?",
        choices: &["O(n)", "O(2n)", "O(n^2)", "O(n log n)"],
        answer: 2,
        explanation: "The inner body runs n times for each of n outer iterations.",
    },
    BuiltinCard {
        id: "halving-loop",
        category: Category::Complexity,
        question: "A loop that halves `n` until it reaches 1 runs in?",
        choices: &["O(1)", "O(log n)", "O(n)", "O(sqrt n)"],
        answer: 1,
        explanation: "n can be halved log2(n) times.",
    },
    BuiltinCard {
        id: "amortized-push",
        category: Category::Complexity,
        question: "Amortized cost of pushing onto a doubling dynamic array?",
        choices: &["O(1)", "O(log n)", "O(n)", "O(n^2)"],
        answer: 0,
        explanation: "Occasional O(n) copies are spread over the pushes that preceded them.",
    },
    BuiltinCard {
        id: "two-pointers",
        category: Category::Patterns,
        question: "Finding a pair with a target sum in a sorted array suits?",
        choices: &["Two pointers", "Backtracking", "Union-find", "Topological sort"],
        answer: 0,
        explanation: "Move the left pointer up or the right pointer down depending on the sum.",
    },
    BuiltinCard {
        id: "sliding-window",
        category: Category::Patterns,
        question: "Longest substring without repeating characters suits?",
        choices: &["Divide and conquer", "Sliding window", "Greedy coin change", "Bit masking"],
        answer: 1,
        explanation: "Grow the window and shrink it from the left on a repeat.",
    },
    BuiltinCard {
        id: "memoization",
        category: Category::Patterns,
        question: "Caching results of overlapping subproblems is called?",
        choices: &["Memoization", "Backtracking", "Pruning", "Hashing"],
        answer: 0,
        explanation: "Top-down dynamic programming stores each subproblem's answer once.",
    },
];

impl Catalog {
    /// Cards shipped with the program.
    pub fn builtin() -> Self {
        let cards = BUILTIN
            .iter()
            .map(|c| FlashCard {
                id: c.id.to_string(),
                category: c.category,
                question: c.question.to_string(),
                choices: c.choices.iter().map(|s| s.to_string()).collect(),
                answer: c.answer,
                explanation: c.explanation.to_string(),
            })
            .collect();
        Self { cards }
    }

    /// Validates cards and builds a catalog.
    pub fn new(cards: Vec<FlashCard>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::new();
        for card in &cards {
            validate_card(card)?;
            if !ids.insert(card.id.as_str()) {
                return Err(CatalogError::DuplicateId(card.id.clone()));
            }
        }
        Ok(Self { cards })
    }

    /// Parses a catalog from TOML `[[cards]]` tables.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::new(file.cards)
    }

    pub fn cards(&self) -> &[FlashCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards matching `filter`, in catalog order.
    pub fn filtered(&self, filter: Filter) -> Vec<FlashCard> {
        self.cards
            .iter()
            .filter(|c| filter.matches(c.category))
            .cloned()
            .collect()
    }

    pub fn count(&self, filter: Filter) -> usize {
        self.cards.iter().filter(|c| filter.matches(c.category)).count()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate_card(card: &FlashCard) -> Result<(), CatalogError> {
    let invalid = |reason| CatalogError::InvalidCard {
        id: card.id.clone(),
        reason,
    };
    if card.id.trim().is_empty() {
        return Err(invalid("empty id"));
    }
    if card.question.trim().is_empty() {
        return Err(invalid("empty question"));
    }
    if card.choices.len() < 2 {
        return Err(invalid("needs at least two choices"));
    }
    if card.answer >= card.choices.len() {
        return Err(invalid("answer index out of range"));
    }
    Ok(())
}
