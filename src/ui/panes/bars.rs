//! Array pane: one vertical bar per element

use crate::sort::StepArray;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
    Frame,
};

/// Columns given to each element. Elements that do not fit are not drawn.
pub fn bar_width(len: usize, width: u16) -> u16 {
    if len == 0 || width == 0 {
        return 0;
    }
    (width as usize / len).clamp(1, width as usize) as u16
}

/// Rows for `value`, scaled so `max_value` fills `height`.
/// Any non-zero value gets at least one row.
pub fn bar_height(value: u32, max_value: u32, height: u16) -> u16 {
    if value == 0 || max_value == 0 || height == 0 {
        return 0;
    }
    let scaled = u64::from(value) * u64::from(height) / u64::from(max_value);
    (scaled as u16).clamp(1, height)
}

/// Bars for a [`StepArray`], bottom-aligned
pub struct ArrayBars<'a> {
    array: &'a StepArray,
    highlight: Option<(usize, usize)>,
    sorted: bool,
}

impl<'a> ArrayBars<'a> {
    pub fn new(array: &'a StepArray) -> Self {
        ArrayBars {
            array,
            highlight: None,
            sorted: false,
        }
    }

    pub fn highlight(mut self, indices: Option<(usize, usize)>) -> Self {
        self.highlight = indices;
        self
    }

    pub fn sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    fn color_for(&self, index: usize) -> Color {
        if self.sorted {
            return DEFAULT_THEME.bar_sorted;
        }
        match self.highlight {
            Some((a, b)) if index == a || index == b => DEFAULT_THEME.bar_highlight,
            _ => DEFAULT_THEME.bar,
        }
    }
}

impl Widget for ArrayBars<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = bar_width(self.array.len(), area.width);
        if width == 0 || area.height == 0 {
            return;
        }
        // Leave a gap between wide bars so neighbours stay distinguishable
        let filled = if width >= 3 { width - 1 } else { width };

        for (index, &value) in self.array.values().iter().enumerate() {
            let left = area.x as usize + index * width as usize;
            if left >= area.right() as usize {
                break;
            }
            let left = left as u16;
            let height = bar_height(value, self.array.max_value(), area.height);
            let color = self.color_for(index);

            for x in left..left.saturating_add(filled).min(area.right()) {
                for row in 0..height {
                    let y = area.bottom() - 1 - row;
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.set_symbol(" ").set_bg(color);
                    }
                }
            }
        }
    }
}

/// Render the bordered array pane
pub fn render_bars_pane(
    frame: &mut Frame,
    area: Rect,
    array: &StepArray,
    highlight: Option<(usize, usize)>,
    sorted: bool,
) {
    let border_color = if sorted {
        DEFAULT_THEME.success
    } else {
        DEFAULT_THEME.comment
    };
    let block = Block::default()
        .title(format!(
            " {} values, max {} ",
            array.len(),
            array.max_value()
        ))
        .title_style(
            Style::default()
                .fg(DEFAULT_THEME.title)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(
        ArrayBars::new(array).highlight(highlight).sorted(sorted),
        inner,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_rows(buf: &Buffer, x: u16, area: Rect) -> u16 {
        (area.y..area.bottom())
            .filter(|&y| buf.cell((x, y)).is_some_and(|c| c.bg != Color::Reset))
            .count() as u16
    }

    #[test]
    fn test_bar_width() {
        assert_eq!(bar_width(10, 40), 4);
        assert_eq!(bar_width(100, 40), 1);
        assert_eq!(bar_width(0, 40), 0);
        assert_eq!(bar_width(5, 0), 0);
    }

    #[test]
    fn test_bar_height_scales() {
        assert_eq!(bar_height(30, 30, 10), 10);
        assert_eq!(bar_height(15, 30, 10), 5);
        assert_eq!(bar_height(1, 30, 10), 1);
        assert_eq!(bar_height(0, 30, 10), 0);
    }

    #[test]
    fn test_render_heights() {
        let array = StepArray::from_values(vec![4, 0, 2], 4);
        let area = Rect::new(0, 0, 3, 4);
        let mut buf = Buffer::empty(area);

        ArrayBars::new(&array).render(area, &mut buf);

        assert_eq!(filled_rows(&buf, 0, area), 4);
        assert_eq!(filled_rows(&buf, 1, area), 0);
        assert_eq!(filled_rows(&buf, 2, area), 2);
        // Bars grow from the bottom
        assert_eq!(buf.cell((2, 3)).unwrap().bg, DEFAULT_THEME.bar);
        assert_eq!(buf.cell((2, 0)).unwrap().bg, Color::Reset);
    }

    #[test]
    fn test_render_highlight_and_sorted() {
        let array = StepArray::from_values(vec![1, 1, 1], 1);
        let area = Rect::new(0, 0, 3, 1);

        let mut buf = Buffer::empty(area);
        ArrayBars::new(&array)
            .highlight(Some((1, 2)))
            .render(area, &mut buf);
        assert_eq!(buf.cell((0, 0)).unwrap().bg, DEFAULT_THEME.bar);
        assert_eq!(buf.cell((1, 0)).unwrap().bg, DEFAULT_THEME.bar_highlight);
        assert_eq!(buf.cell((2, 0)).unwrap().bg, DEFAULT_THEME.bar_highlight);

        let mut buf = Buffer::empty(area);
        ArrayBars::new(&array)
            .highlight(Some((1, 2)))
            .sorted(true)
            .render(area, &mut buf);
        assert_eq!(buf.cell((1, 0)).unwrap().bg, DEFAULT_THEME.bar_sorted);
    }

    #[test]
    fn test_render_clips_to_area() {
        let array = StepArray::from_values(vec![3; 10], 3);
        let area = Rect::new(2, 1, 4, 3);
        let mut buf = Buffer::empty(Rect::new(0, 0, 8, 5));

        ArrayBars::new(&array).render(area, &mut buf);

        assert_eq!(buf.cell((1, 3)).unwrap().bg, Color::Reset);
        assert_eq!(buf.cell((5, 3)).unwrap().bg, DEFAULT_THEME.bar);
        assert_eq!(buf.cell((6, 3)).unwrap().bg, Color::Reset);
        assert_eq!(buf.cell((3, 0)).unwrap().bg, Color::Reset);
    }
}
