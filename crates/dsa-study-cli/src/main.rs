mod app;
mod quiz_view;
mod theory_view;

use anyhow::{Context, Result};
use app::{App, Mode};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use dsa_study_config::Config;
use dsa_study_engine::{Catalog, Filter, QuizKey, io};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use std::{
    env,
    io::{Stdout, stdout},
    path::PathBuf,
    process,
};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Determine topics path from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Usage: {} [topics-folder-path]", args[0]);
            process::exit(1);
        }
    };

    let (config, from_config) = match (args.len(), config) {
        (2, Some(mut config)) => {
            config.topics_path = PathBuf::from(&args[1]);
            (config, false)
        }
        (2, None) => {
            // First run: remember the folder so later runs need no argument
            let config = Config::new(PathBuf::from(&args[1]));
            if let Err(e) = config.save() {
                log::warn!("could not write {}: {e}", config_path.display());
            }
            (config, false)
        }
        (1, Some(config)) => (config, true),
        (1, None) => {
            eprintln!("Error: No topics path provided and no config file found");
            eprintln!("Usage: {} <topics-folder-path>", args[0]);
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
        _ => {
            eprintln!("Usage: {} [topics-folder-path]", args[0]);
            process::exit(1);
        }
    };

    // Validate topics directory using engine
    if let Err(e) = io::validate_topics_dir(&config.topics_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Topics path '{}'{} is invalid: {e}",
            config.topics_path.display(),
            source
        );
        process::exit(1);
    }

    let catalog = match &config.quiz.catalog_path {
        Some(path) => io::load_catalog(path)
            .with_context(|| format!("loading flashcards from {}", path.display()))?,
        None => Catalog::builtin(),
    };
    let filter = match &config.quiz.filter {
        Some(s) => s
            .parse::<Filter>()
            .with_context(|| format!("quiz filter in {}", config_path.display()))?,
        None => Filter::All,
    };

    let mut app = App::new(config.topics_path.clone(), catalog, filter, config.quiz.seed)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match (app.mode, key.code) {
            (_, KeyCode::Char('q')) => return Ok(()),
            (_, KeyCode::Tab) => app.toggle_mode(),
            (Mode::Topics, KeyCode::Down | KeyCode::Char('j')) => app.next_topic(),
            (Mode::Topics, KeyCode::Up | KeyCode::Char('k')) => app.previous_topic(),
            (Mode::Quiz, KeyCode::Enter) => {
                app.quiz_key(QuizKey::Next);
            }
            (Mode::Quiz, KeyCode::Char('f')) => app.cycle_filter(),
            (Mode::Quiz, KeyCode::Char('r')) => app.reshuffle(),
            (Mode::Quiz, KeyCode::Char(c)) => {
                if let Some(k) = QuizKey::from_char(c) {
                    app.quiz_key(k);
                }
            }
            _ => {}
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    match app.mode {
        Mode::Topics => topics_ui(f, app, rows[0]),
        Mode::Quiz => quiz_ui(f, app, rows[0]),
    }

    let help = match app.mode {
        Mode::Topics => "q: Quit | Tab: Quiz | ↑/k: Previous | ↓/j: Next",
        Mode::Quiz => "q: Quit | Tab: Topics | 1-9: Answer | Enter/Space: Next | f: Filter | r: Reshuffle",
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            help,
            Style::default().fg(Color::DarkGray),
        ))),
        rows[1],
    );
}

fn topics_ui(f: &mut Frame, app: &mut App, area: ratatui::layout::Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(area);

    let topic_items: Vec<ListItem> = app
        .topics
        .iter()
        .map(|t| ListItem::new(Line::from(t.title().to_string())))
        .collect();

    let topics_list = List::new(topic_items)
        .block(Block::default().borders(Borders::ALL).title("Topics"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(topics_list, chunks[0], &mut app.topic_list_state);

    let title = app
        .selected_topic()
        .map_or("Theory".to_string(), |t| t.title().to_string());
    let content_text = match &app.current {
        Ok(blocks) if blocks.is_empty() => vec![Line::from("Select a topic to view its theory")],
        Ok(blocks) => theory_view::theory_lines(blocks),
        Err(message) => vec![Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Red),
        ))],
    };

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false });

    f.render_widget(content, chunks[1]);
}

fn quiz_ui(f: &mut Frame, app: &mut App, area: ratatui::layout::Rect) {
    let title = format!("Quiz · {}", app.session.filter().label());
    let quiz = Paragraph::new(quiz_view::quiz_lines(&app.session))
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false });

    f.render_widget(quiz, area);
}
