use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{GameStatus, Position, Snapshot};
use crate::metrics::SessionStats;

const BOARD_BG: Color = Color::Rgb(39, 39, 42);
const FOOD_COLOR: Color = Color::Rgb(255, 201, 51);

/// Red at the head fading to black at the tail
pub fn segment_color(index: usize, len: usize) -> Color {
    let t = if len <= 1 {
        0.0
    } else {
        index as f64 / (len - 1) as f64
    };
    let red = (255.0 * (1.0 - t)).round() as u8;
    Color::Rgb(red, 0, 0)
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, snapshot: &Snapshot<'_>, stats: &SessionStats) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(2), // Status and start prompt
                Constraint::Min(0),    // Board
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(snapshot, stats), chunks[0]);
        frame.render_widget(self.render_status(snapshot.status), chunks[1]);
        if fits_board(chunks[2], snapshot.board_size) {
            frame.render_widget(self.render_grid(snapshot), chunks[2]);
        } else {
            frame.render_widget(self.render_too_small(chunks[2], snapshot.board_size), chunks[2]);
        }
        frame.render_widget(self.render_controls(), chunks[3]);
    }

    fn render_grid(&self, snapshot: &Snapshot<'_>) -> Paragraph<'_> {
        let len = snapshot.snake.len();
        let mut lines = Vec::with_capacity(snapshot.board_size);

        for y in 0..snapshot.board_size {
            let mut spans = Vec::with_capacity(snapshot.board_size);

            for x in 0..snapshot.board_size {
                let pos = Position::new(x as i32, y as i32);

                let cell = if let Some(index) = snapshot.segment_index(pos) {
                    Span::styled(
                        "██",
                        Style::default().fg(segment_color(index, len)).bg(BOARD_BG),
                    )
                } else if snapshot.food == Some(pos) {
                    Span::styled("██", Style::default().fg(FOOD_COLOR).bg(BOARD_BG))
                } else {
                    Span::styled("  ", Style::default().bg(BOARD_BG))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_too_small(&self, area: Rect, board_size: usize) -> Paragraph<'_> {
        let (width, height) = board_footprint(board_size);
        let text = vec![
            Line::from(Span::styled(
                "Terminal too small",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(format!(
                "board needs {}x{}, have {}x{}",
                width, height, area.width, area.height
            )),
        ];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_stats(&self, snapshot: &Snapshot<'_>, stats: &SessionStats) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                snapshot.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(stats.best_score().to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Games: ", Style::default().fg(Color::Yellow)),
            Span::styled(stats.games_played().to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Wins: ", Style::default().fg(Color::Yellow)),
            Span::styled(stats.wins().to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(stats.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    /// Outcome line plus a start prompt that is hidden mid-game
    fn render_status(&self, status: GameStatus) -> Paragraph<'_> {
        let outcome = match status {
            GameStatus::GameOver => Line::from(Span::styled(
                "Game Over!",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            GameStatus::Won => Line::from(Span::styled(
                "You won!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            GameStatus::Idle | GameStatus::Running => Line::from(""),
        };

        let prompt = match status {
            GameStatus::Running => Line::from(""),
            GameStatus::Idle => start_prompt("Start Game"),
            GameStatus::GameOver | GameStatus::Won => start_prompt("Restart Game"),
        };

        Paragraph::new(vec![outcome, prompt]).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(", "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("mouse swipe", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::TOP))
    }
}

/// Columns and rows the bordered grid takes; each cell is two columns wide
fn board_footprint(board_size: usize) -> (usize, usize) {
    (board_size * 2 + 2, board_size + 2)
}

fn fits_board(area: Rect, board_size: usize) -> bool {
    let (width, height) = board_footprint(board_size);
    usize::from(area.width) >= width && usize::from(area.height) >= height
}

fn start_prompt(label: &str) -> Line<'_> {
    Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::Gray)),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" to ", Style::default().fg(Color::Gray)),
        Span::styled(label, Style::default().fg(Color::Green)),
    ])
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
