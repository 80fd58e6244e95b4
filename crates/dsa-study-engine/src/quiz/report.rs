use std::collections::BTreeMap;

use super::{models::Category, session::Tally};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryScore {
    pub category: Category,
    pub correct: usize,
    pub total: usize,
    pub percent: u32,
}

/// Summary of a session, shown on completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizReport {
    pub score: usize,
    pub answered: usize,
    pub cards: usize,
    /// Score against answered questions.
    pub percent: u32,
    /// Categories with at least one answer, in category order.
    pub categories: Vec<CategoryScore>,
}

impl QuizReport {
    pub fn new(
        score: usize,
        answered: usize,
        cards: usize,
        tallies: &BTreeMap<Category, Tally>,
    ) -> Self {
        let categories = tallies
            .iter()
            .filter(|(_, t)| t.total > 0)
            .map(|(&category, t)| CategoryScore {
                category,
                correct: t.correct,
                total: t.total,
                percent: percent(t.correct, t.total),
            })
            .collect();
        Self {
            score,
            answered,
            cards,
            percent: percent(score, answered),
            categories,
        }
    }
}

/// `correct / total` as a whole percentage, rounding halves up. Zero when
/// nothing was answered.
pub fn percent(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((correct * 200 + total) / (total * 2)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0, 0)]
    #[case(0, 3, 0)]
    #[case(1, 3, 33)]
    #[case(2, 3, 67)]
    #[case(1, 2, 50)]
    #[case(1, 8, 13)]
    #[case(5, 5, 100)]
    fn rounds_percent(#[case] correct: usize, #[case] total: usize, #[case] expected: u32) {
        assert_eq!(percent(correct, total), expected);
    }

    #[test]
    fn skips_untouched_categories() {
        let mut tallies = BTreeMap::new();
        tallies.insert(Category::Patterns, Tally { correct: 1, total: 2 });
        tallies.insert(Category::Complexity, Tally::default());
        tallies.insert(Category::Algorithms, Tally { correct: 2, total: 2 });

        let report = QuizReport::new(3, 4, 10, &tallies);
        assert_eq!(report.percent, 75);
        let cats: Vec<_> = report
            .categories
            .iter()
            .map(|c| (c.category, c.percent))
            .collect();
        assert_eq!(
            cats,
            vec![(Category::Algorithms, 100), (Category::Patterns, 50)]
        );
    }
}
