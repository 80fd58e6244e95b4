use std::collections::BTreeMap;

use rand::{Rng, seq::SliceRandom};

use super::{
    catalog::Catalog,
    input::QuizKey,
    models::{Category, Filter, FlashCard},
    report::QuizReport,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No choice recorded for the current card.
    Answering,
    /// A choice was recorded; the explanation is visible.
    Revealed,
    /// Every card has been answered.
    Complete,
}

/// Outcome of one `select_choice`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answer {
    pub choice: usize,
    pub correct: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub correct: usize,
    pub total: usize,
}

/// What a key press did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Selected(Answer),
    Advanced,
    Completed,
    Ignored,
}

/// One pass over a shuffled deck.
///
/// Position and `answered` only grow until the next `reset`. Each card is
/// scored at most once, so `score <= answered <= len()` and the per-category
/// totals always sum to `answered`.
#[derive(Debug, Clone)]
pub struct QuizSession {
    cards: Vec<FlashCard>,
    position: usize,
    selected: Option<usize>,
    score: usize,
    answered: usize,
    tallies: BTreeMap<Category, Tally>,
    filter: Filter,
}

impl QuizSession {
    pub fn new<R: Rng + ?Sized>(catalog: &Catalog, filter: Filter, rng: &mut R) -> Self {
        let mut session = Self {
            cards: Vec::new(),
            position: 0,
            selected: None,
            score: 0,
            answered: 0,
            tallies: BTreeMap::new(),
            filter,
        };
        session.reset(catalog, None, rng);
        session
    }

    /// Rebuilds the deck from `catalog` and zeroes all progress.
    ///
    /// `None` keeps the current filter.
    pub fn reset<R: Rng + ?Sized>(&mut self, catalog: &Catalog, filter: Option<Filter>, rng: &mut R) {
        if let Some(filter) = filter {
            self.filter = filter;
        }
        self.cards = catalog.filtered(self.filter);
        self.cards.shuffle(rng);
        self.position = 0;
        self.selected = None;
        self.score = 0;
        self.answered = 0;
        self.tallies.clear();
        log::info!(
            "quiz reset: {} cards, filter {}",
            self.cards.len(),
            self.filter.label()
        );
    }

    pub fn phase(&self) -> Phase {
        if self.position >= self.cards.len() {
            Phase::Complete
        } else if self.selected.is_some() {
            Phase::Revealed
        } else {
            Phase::Answering
        }
    }

    pub fn current(&self) -> Option<&FlashCard> {
        self.cards.get(self.position)
    }

    /// Records a choice for the current card.
    ///
    /// No-op outside `Answering` or when `choice` is out of range.
    pub fn select_choice(&mut self, choice: usize) -> Option<Answer> {
        if self.phase() != Phase::Answering {
            return None;
        }
        let card = self.cards.get(self.position)?;
        if choice >= card.choices.len() {
            return None;
        }

        let correct = card.is_correct(choice);
        let tally = self.tallies.entry(card.category).or_default();
        tally.total += 1;
        if correct {
            tally.correct += 1;
            self.score += 1;
        }
        self.answered += 1;
        self.selected = Some(choice);

        log::debug!("card {} answered {choice} correct={correct}", card.id);
        Some(Answer { choice, correct })
    }

    /// Moves past a revealed card. Returns whether anything changed.
    pub fn advance(&mut self) -> bool {
        if self.phase() != Phase::Revealed {
            return false;
        }
        self.selected = None;
        self.position += 1;
        log::debug!("quiz advanced to {}/{}", self.position, self.cards.len());
        true
    }

    /// Applies a key press as at most one transition.
    pub fn handle_key(&mut self, key: QuizKey) -> Transition {
        match key {
            QuizKey::Choice(i) => self
                .select_choice(i)
                .map_or(Transition::Ignored, Transition::Selected),
            QuizKey::Next if self.advance() => {
                if self.phase() == Phase::Complete {
                    Transition::Completed
                } else {
                    Transition::Advanced
                }
            }
            QuizKey::Next => Transition::Ignored,
        }
    }

    pub fn report(&self) -> QuizReport {
        QuizReport::new(self.score, self.answered, self.cards.len(), &self.tallies)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn answered(&self) -> usize {
        self.answered
    }

    pub fn tallies(&self) -> &BTreeMap<Category, Tally> {
        &self.tallies
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }
}
