use std::{fmt, str::FromStr};

use serde::Deserialize;

use super::CatalogError;

/// Topic area a flashcard belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    DataStructures,
    Algorithms,
    Complexity,
    Patterns,
}

/// Fixed highlight colour per category; front ends map it to their palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Green,
    Amber,
    Purple,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::DataStructures,
        Category::Algorithms,
        Category::Complexity,
        Category::Patterns,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Category::DataStructures => "data-structures",
            Category::Algorithms => "algorithms",
            Category::Complexity => "complexity",
            Category::Patterns => "patterns",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::DataStructures => "Data Structures",
            Category::Algorithms => "Algorithms",
            Category::Complexity => "Complexity",
            Category::Patterns => "Patterns",
        }
    }

    pub fn accent(self) -> Accent {
        match self {
            Category::DataStructures => Accent::Blue,
            Category::Algorithms => Accent::Green,
            Category::Complexity => Accent::Amber,
            Category::Patterns => Accent::Purple,
        }
    }
}

impl Accent {
    /// CSS class for HTML front ends.
    pub fn css_class(self) -> &'static str {
        match self {
            Accent::Blue => "accent-blue",
            Accent::Green => "accent-green",
            Accent::Amber => "accent-amber",
            Accent::Purple => "accent-purple",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.slug() == s.trim())
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

/// Which part of the catalog a session draws from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Only(Category),
}

impl Filter {
    pub fn matches(self, category: Category) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(c) => c == category,
        }
    }

    /// The next filter in `All → each category → All` order.
    pub fn cycle(self) -> Filter {
        match self {
            Filter::All => Filter::Only(Category::ALL[0]),
            Filter::Only(c) => {
                let i = Category::ALL.iter().position(|&x| x == c).unwrap_or(0);
                Category::ALL
                    .get(i + 1)
                    .map_or(Filter::All, |&next| Filter::Only(next))
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Only(c) => c.label(),
        }
    }
}

impl FromStr for Filter {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Filter::All)
        } else {
            s.parse().map(Filter::Only)
        }
    }
}

/// One multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FlashCard {
    pub id: String,
    pub category: Category,
    pub question: String,
    pub choices: Vec<String>,
    /// Zero-based index into `choices`.
    pub answer: usize,
    #[serde(default)]
    pub explanation: String,
}

impl FlashCard {
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.answer
    }

    pub fn correct_choice(&self) -> Option<&str> {
        self.choices.get(self.answer).map(String::as_str)
    }
}
