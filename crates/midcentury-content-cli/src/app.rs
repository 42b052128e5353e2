use anyhow::Result;
use crossterm::event::{self, Event, KeyCode};
use midcentury_content_engine::{Library, load_posts, load_posts_with_drafts, render_post};
use ratatui::{
    Frame, Terminal,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::path::PathBuf;

use crate::text::document_lines;

pub struct App {
    posts_path: PathBuf,
    show_drafts: bool,
    library: Library,
    list_state: ListState,
    current_content: Vec<String>,
}

impl App {
    pub fn new(posts_path: PathBuf, show_drafts: bool) -> Result<Self> {
        let mut app = Self {
            posts_path,
            show_drafts,
            library: Library::default(),
            list_state: ListState::default(),
            current_content: Vec::new(),
        };
        app.reload()?;
        Ok(app)
    }

    fn reload(&mut self) -> Result<()> {
        self.library = if self.show_drafts {
            load_posts_with_drafts(&self.posts_path)?
        } else {
            load_posts(&self.posts_path)?
        };

        let selected = if self.library.is_empty() {
            None
        } else {
            Some(0)
        };
        self.list_state.select(selected);
        self.update_content_for_selection();
        Ok(())
    }

    fn toggle_drafts(&mut self) -> Result<()> {
        self.show_drafts = !self.show_drafts;
        self.reload()
    }

    fn next_post(&mut self) {
        let len = self.library.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % len,
            None => 0,
        };
        self.list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn previous_post(&mut self) {
        let len = self.library.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn update_content_for_selection(&mut self) {
        self.current_content = match self
            .list_state
            .selected()
            .and_then(|index| self.library.listing().get(index))
        {
            Some(post) => document_lines(&render_post(post)),
            None => self.empty_message(),
        };
    }

    fn empty_message(&self) -> Vec<String> {
        let mut lines = vec![format!("No posts in {}", self.posts_path.display())];
        if !self.library.issues().is_empty() {
            lines.push(String::new());
            lines.push(format!(
                "{} files were skipped; run `midcentury-content check` for details",
                self.library.issues().len()
            ));
        }
        lines
    }
}

pub fn run_app<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: ratatui::backend::Backend,
    B::Error: Send + Sync + 'static,
{
    loop {
        draw(terminal, app)?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_post(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_post(),
                KeyCode::Char('d') => app.toggle_drafts()?,
                _ => {}
            }
        }
    }
}

fn draw<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: ratatui::backend::Backend,
    B::Error: Send + Sync + 'static,
{
    terminal.draw(|f| ui(f, app))?;
    Ok(())
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(rows[0]);

    // Post list panel
    let post_items: Vec<ListItem> = app
        .library
        .listing()
        .iter()
        .map(|post| {
            let marker = if post.featured { "★ " } else { "  " };
            let mut spans = vec![
                Span::raw(marker),
                Span::raw(post.metadata.title.clone()),
                Span::styled(
                    format!("  {}", post.metadata.date),
                    Style::default().fg(Color::DarkGray),
                ),
            ];
            if !post.published {
                spans.push(Span::styled(
                    " (draft)",
                    Style::default().add_modifier(Modifier::ITALIC),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list_title = if app.show_drafts {
        "Posts (with drafts)"
    } else {
        "Posts"
    };
    let posts_list = List::new(post_items)
        .block(Block::default().borders(Borders::ALL).title(list_title))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(posts_list, chunks[0], &mut app.list_state);

    // Content panel
    let content_text: Vec<Line> = app
        .current_content
        .iter()
        .map(|line| Line::from(line.as_str()))
        .collect();

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title("Post"))
        .wrap(Wrap { trim: false });

    f.render_widget(content, chunks[1]);

    let help = Paragraph::new(Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next | "),
        Span::raw("d: Toggle drafts"),
    ]));

    f.render_widget(help, rows[1]);
}
