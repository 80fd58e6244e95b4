use anyhow::Result;
use dsa_study_engine::{
    Catalog, Filter, QuizKey, QuizSession, RenderedBlock, TopicFile, io, render_theory,
    quiz::Transition,
};
use rand::{SeedableRng, rngs::StdRng};
use ratatui::widgets::ListState;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Topics,
    Quiz,
}

pub struct App {
    pub mode: Mode,
    topics_path: PathBuf,
    pub topics: Vec<TopicFile>,
    pub topic_list_state: ListState,
    /// Rendered theory of the selected topic, or the reason it failed to load.
    pub current: Result<Vec<RenderedBlock>, String>,
    catalog: Catalog,
    pub session: QuizSession,
    rng: StdRng,
}

impl App {
    pub fn new(
        topics_path: PathBuf,
        catalog: Catalog,
        filter: Filter,
        seed: Option<u64>,
    ) -> Result<Self> {
        let topics = io::scan_topics(&topics_path)?;
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let session = QuizSession::new(&catalog, filter, &mut rng);

        let mut app = Self {
            mode: Mode::Topics,
            topics_path,
            topics,
            topic_list_state: ListState::default(),
            current: Ok(Vec::new()),
            catalog,
            session,
            rng,
        };

        // Select first topic if available
        if !app.topics.is_empty() {
            app.topic_list_state.select(Some(0));
            app.update_content_for_selection();
        }

        Ok(app)
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            Mode::Topics => Mode::Quiz,
            Mode::Quiz => Mode::Topics,
        };
    }

    pub fn next_topic(&mut self) {
        if self.topics.is_empty() {
            return;
        }
        let i = match self.topic_list_state.selected() {
            Some(i) => (i + 1) % self.topics.len(),
            None => 0,
        };
        self.topic_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    pub fn previous_topic(&mut self) {
        if self.topics.is_empty() {
            return;
        }
        let i = match self.topic_list_state.selected() {
            Some(0) | None => self.topics.len() - 1,
            Some(i) => i - 1,
        };
        self.topic_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    pub fn selected_topic(&self) -> Option<&TopicFile> {
        self.topic_list_state
            .selected()
            .and_then(|i| self.topics.get(i))
    }

    fn update_content_for_selection(&mut self) {
        let Some(file) = self.selected_topic() else {
            return;
        };
        self.current = match io::load_topic(file, &self.topics_path) {
            Ok(topic) => Ok(render_theory(&topic.blocks())),
            Err(e) => {
                log::warn!("failed to load {}: {e}", file.relative_path());
                Err(format!("Error reading topic: {e}"))
            }
        };
    }

    pub fn quiz_key(&mut self, key: QuizKey) -> Transition {
        let transition = self.session.handle_key(key);
        log::debug!("quiz key {key:?} -> {transition:?}");
        transition
    }

    /// Moves to the next category filter and starts a fresh deck.
    pub fn cycle_filter(&mut self) {
        let next = self.session.filter().cycle();
        self.session.reset(&self.catalog, Some(next), &mut self.rng);
    }

    pub fn reshuffle(&mut self) {
        self.session.reset(&self.catalog, None, &mut self.rng);
    }
}
