//! Status bar rendering with keybindings and state indicators

use crate::sort::AlgorithmKind;
use crate::ui::app::Phase;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Everything the status bar shows
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub steps: u64,
    pub algorithm: AlgorithmKind,
    pub phase: Phase,
    pub is_paused: bool,
}

fn phase_badge(phase: Phase) -> (&'static str, Color) {
    match phase {
        Phase::NotStarted => (" READY ", DEFAULT_THEME.success),
        Phase::Running => (" ▶ RUNNING ", DEFAULT_THEME.secondary),
        Phase::Paused => (" ⏸ PAUSED ", DEFAULT_THEME.primary),
        Phase::Finished => (" SORTED ", DEFAULT_THEME.success),
        Phase::Quit => (" QUIT ", DEFAULT_THEME.error),
    }
}

/// Left half of the bar: step counter, algorithm, message
pub fn status_line(data: &StatusRenderData<'_>) -> Line<'static> {
    let (_, badge_color) = phase_badge(data.phase);
    let text_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.fg);

    Line::from(vec![
        Span::styled(
            format!(" Step {} ", data.steps),
            Style::default()
                .bg(badge_color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                " Paused: {} | Algorithm: {} ",
                data.is_paused, data.algorithm
            ),
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.title),
        ),
        Span::styled(
            "│",
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(format!(" {} ", data.message), text_style),
    ])
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: &StatusRenderData<'_>) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let left_paragraph = Paragraph::new(status_line(data))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.comment);

    let (badge, badge_color) = phase_badge(data.phase);
    let right_spans = vec![
        Span::styled(" s ", key_style),
        Span::styled(" start ", desc_style),
        Span::styled(" p ", key_style),
        Span::styled(" pause ", desc_style),
        Span::styled(" ⎵ ", key_style),
        Span::styled(" step ", desc_style),
        Span::styled(" r ", key_style),
        Span::styled(" reset ", desc_style),
        Span::styled(" 1/2 ", key_style),
        Span::styled(" algo ", desc_style),
        Span::styled(" q ", key_style),
        Span::styled(" quit ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(
            badge,
            Style::default()
                .bg(badge_color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_text() {
        let data = StatusRenderData {
            message: "Sorting...",
            steps: 12,
            algorithm: AlgorithmKind::Selection,
            phase: Phase::Running,
            is_paused: false,
        };
        let text: String = status_line(&data)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();

        assert_eq!(
            text,
            " Step 12  Paused: false | Algorithm: Selection │ Sorting... "
        );
    }
}
