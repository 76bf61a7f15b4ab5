use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::projection::{Mark, Plane, Projection};
use crate::game::{CollisionType, GameSession};
use crate::metrics::GameMetrics;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render_menu(&self, frame: &mut Frame) {
        let title = Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD);
        let key = Style::default().fg(Color::Cyan);

        let text = vec![
            Line::from(""),
            Line::from(Span::styled("SNAKE 3D", title)),
            Line::from(""),
            Line::from(Span::styled(
                "Press any key to play",
                Style::default().fg(Color::Yellow),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("8", key),
                Span::raw(" / "),
                Span::styled("5", key),
                Span::raw("   up / down    (+Y / -Y)"),
            ]),
            Line::from(vec![
                Span::styled("3", key),
                Span::raw(" / "),
                Span::styled("7", key),
                Span::raw("   right / left (+X / -X)"),
            ]),
            Line::from(vec![
                Span::styled("4", key),
                Span::raw(" / "),
                Span::styled("6", key),
                Span::raw("   near / far   (+Z / -Z)"),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::raw("or "),
                Span::styled("WASD", key),
                Span::raw(" + "),
                Span::styled("Q/E", key),
                Span::raw(" | "),
                Span::styled("Esc", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ]),
        ];

        let menu = Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White)),
        );
        frame.render_widget(menu, frame.area());
    }

    pub fn render_play(&self, frame: &mut Frame, session: &GameSession, flash: bool) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Projections
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(session, flash), chunks[0]);

        let views = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(chunks[1]);

        for (plane, area) in Plane::ALL.into_iter().zip(views.iter()) {
            let projection = Projection::of_session(session, plane);
            frame.render_widget(self.render_projection(&projection), *area);
        }

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    /// Result of the last finished run, as recorded in `metrics`
    pub fn render_game_over(&self, frame: &mut Frame, metrics: &GameMetrics) {
        let area = centered(frame.area(), 60, 14);

        let cause = match metrics.last_collision {
            Some(CollisionType::Wall) => "You left the cube",
            Some(CollisionType::SelfCollision) => "You bit your own tail",
            None => "",
        };
        let value = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);
        let label = Style::default().fg(Color::Yellow);

        let mut text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(cause, Style::default().fg(Color::Gray))),
            Line::from(""),
            Line::from(vec![
                Span::styled("Score: ", label),
                Span::styled(metrics.last_score.to_string(), value),
                Span::raw("    "),
                Span::styled("Time: ", label),
                Span::styled(metrics.format_time(metrics.last_run_ticks), value),
            ]),
            Line::from(vec![
                Span::styled("Best: ", label),
                Span::styled(metrics.high_score.to_string(), value),
                Span::raw("    "),
                Span::styled("Runs: ", label),
                Span::styled(metrics.games_played.to_string(), value),
            ]),
        ];
        if metrics.is_new_high_score() {
            text.push(Line::from(Span::styled(
                "New high score!",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        text.push(Line::from(""));
        text.push(Line::from(Span::styled(
            "Press any key to try again",
            Style::default().fg(Color::Gray),
        )));

        let game_over = Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
        frame.render_widget(game_over, area);
    }

    fn render_projection(&self, projection: &Projection) -> Paragraph<'_> {
        let lines: Vec<Line> = projection
            .rows()
            .map(|row| Line::from(row.iter().map(|&mark| mark_span(mark)).collect::<Vec<_>>()))
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::White))
                    .title(projection.plane.title()),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, session: &GameSession, flash: bool) -> Paragraph<'_> {
        let score_style = if flash {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        };
        let head = session.snake().head();

        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(session.score().to_string(), score_style),
            Span::raw("    "),
            Span::styled("Length: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                session.snake().len().to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Heading: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                session.snake().direction().label(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Head: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("({}, {}, {})", head.x, head.y, head.z),
                Style::default().fg(Color::White),
            ),
        ])];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::BOTTOM))
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("8/5", Style::default().fg(Color::Cyan)),
            Span::raw(" ±Y  "),
            Span::styled("3/7", Style::default().fg(Color::Cyan)),
            Span::raw(" ±X  "),
            Span::styled("4/6", Style::default().fg(Color::Cyan)),
            Span::raw(" ±Z | "),
            Span::styled("Esc", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn mark_span(mark: Mark) -> Span<'static> {
    match mark {
        Mark::Head => Span::styled(
            "■ ",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ),
        Mark::Body => Span::styled("□ ", Style::default().fg(Color::Green)),
        Mark::Coin => Span::styled(
            "● ",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Mark::Empty => Span::styled(". ", Style::default().fg(Color::DarkGray)),
    }
}

/// A `width` x `height` rectangle centred in `area`, clipped to it
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
