use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::tiles::{compose_tiles, Tile};
use crate::lake::{LakeState, Outcome, Position};
use crate::metrics::EpisodeMetrics;

/// Mode-specific text drawn around the lake
pub struct Hud<'a> {
    /// Block title, e.g. " Watch "
    pub title: &'a str,
    /// Extra status shown in the header (speed, pause state)
    pub status: Option<String>,
    /// Key / description pairs for the footer
    pub controls: &'a [(&'a str, &'a str)],
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Fixed colour per tile category
    pub fn tile_color(tile: Tile) -> Color {
        match tile {
            Tile::Start => Color::Red,
            Tile::Goal => Color::Blue,
            Tile::Hazard => Color::Green,
            Tile::Empty => Color::Magenta,
            Tile::Path => Color::Rgb(255, 127, 0),
            Tile::Agent => Color::Yellow,
        }
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        state: &LakeState,
        path: &[Position],
        metrics: &EpisodeMetrics,
        hud: &Hud,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Lake area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(state, metrics, hud), chunks[0]);

        let lake_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        frame.render_widget(self.render_grid(state, path, hud), lake_area);
        frame.render_widget(self.render_controls(hud), chunks[2]);
    }

    fn render_grid(&self, state: &LakeState, path: &[Position], hud: &Hud) -> Paragraph<'_> {
        let tiles = compose_tiles(&state.grid, path, state.agent);

        let lines: Vec<Line> = tiles
            .iter()
            .map(|row| {
                let spans: Vec<Span> = row
                    .iter()
                    .map(|tile| {
                        Span::styled(
                            format!(" {} ", tile.symbol()),
                            Style::default()
                                .fg(Color::Black)
                                .bg(Self::tile_color(*tile))
                                .add_modifier(Modifier::BOLD),
                        )
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        let border_color = match state.outcome {
            Some(Outcome::ReachedGoal) => Color::Blue,
            Some(Outcome::FellInHazard) => Color::Red,
            None => Color::White,
        };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(border_color))
                    .title(hud.title.to_string()),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(
        &self,
        state: &LakeState,
        metrics: &EpisodeMetrics,
        hud: &Hud,
    ) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let mut spans = vec![
            Span::styled("Steps: ", label),
            Span::styled(state.steps.to_string(), value.add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled("Reward: ", label),
            Span::styled(format!("{:+.1}", state.total_reward), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
        ];

        if let Some(status) = &hud.status {
            spans.push(Span::raw("    "));
            spans.push(Span::styled(status.clone(), Style::default().fg(Color::Cyan)));
        }

        let mut text = vec![Line::from(spans)];

        match state.outcome {
            Some(Outcome::ReachedGoal) => text.push(Line::from(Span::styled(
                "Reached the goal!",
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ))),
            Some(Outcome::FellInHazard) => text.push(Line::from(Span::styled(
                "Fell into a hazard",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ))),
            None => {}
        }

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self, hud: &Hud) -> Paragraph<'_> {
        let mut spans = Vec::new();

        for (i, (key, description)) in hud.controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(key.to_string(), Style::default().fg(Color::Cyan)));
            spans.push(Span::raw(format!(" {}", description)));
        }

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lake::{Grid, LakeState};
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(state: &LakeState, path: &[Position]) -> String {
        let backend = TestBackend::new(60, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        let renderer = Renderer::new();
        let metrics = EpisodeMetrics::new();
        let hud = Hud {
            title: " Test ",
            status: Some("Paused".to_string()),
            controls: &[("Q", "quit")],
        };

        terminal
            .draw(|frame| renderer.render(frame, state, path, &metrics, &hud))
            .unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn state() -> LakeState {
        let grid = Grid::from_rows(&["S.H", "...", "..G"]).unwrap();
        LakeState::new(grid, Position::new(0, 0), Position::new(2, 2))
    }

    #[test]
    fn test_render_shows_grid_and_hud() {
        let screen = draw(&state(), &[]);

        assert!(screen.contains("Steps: 0"));
        assert!(screen.contains("Paused"));
        assert!(screen.contains("Test"));
        assert!(screen.contains(" A "));
        assert!(screen.contains(" H "));
        assert!(screen.contains(" G "));
        assert!(screen.contains("quit"));
    }

    #[test]
    fn test_render_outcome_banner() {
        let mut state = state();
        state.agent = Position::new(2, 2);
        state.outcome = Some(Outcome::ReachedGoal);

        let screen = draw(&state, &[Position::new(0, 1)]);

        assert!(screen.contains("Reached the goal!"));
        assert!(screen.contains(" * "));
    }

    #[test]
    fn test_tile_colors_are_distinct() {
        let tiles = [
            Tile::Start,
            Tile::Goal,
            Tile::Hazard,
            Tile::Empty,
            Tile::Path,
            Tile::Agent,
        ];
        let colors: std::collections::HashSet<String> = tiles
            .iter()
            .map(|t| format!("{:?}", Renderer::tile_color(*t)))
            .collect();
        assert_eq!(colors.len(), 6);
    }
}
