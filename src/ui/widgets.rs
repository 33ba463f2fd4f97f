use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Gauge, Widget},
};

use crate::assets::Picture;
use crate::config::{TimeField, UiSettings};

use super::layout;

/// Format a `Duration` as `M:SS`.
pub fn format_clock(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Build the elapsed/total/remaining text per `UiSettings`.
pub fn time_text(elapsed: Duration, total: Option<Duration>, ui: &UiSettings) -> String {
    let total_or_zero = total.unwrap_or(Duration::ZERO);
    ui.time_fields
        .iter()
        .map(|f| match f {
            TimeField::Elapsed => format_clock(elapsed),
            TimeField::Total => format_clock(total_or_zero),
            TimeField::Remaining => {
                format!("-{}", format_clock(total_or_zero.saturating_sub(elapsed)))
            }
        })
        .collect::<Vec<String>>()
        .join(&ui.time_separator)
}

/// A bordered progress bar with the time text as its label.
pub fn progress_gauge<'a>(ratio: f64, label: String) -> Gauge<'a> {
    Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" progress "))
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(label)
}

/// Renders a `Picture` with half-block characters, scaled to fit and centered.
///
/// Each cell shows two pixels: the upper one as foreground of `▀`, the lower
/// one as background.
pub struct PictureView<'a> {
    picture: &'a Picture,
}

impl<'a> PictureView<'a> {
    pub fn new(picture: &'a Picture) -> Self {
        Self { picture }
    }
}

fn rgb(c: [u8; 3]) -> Color {
    Color::Rgb(c[0], c[1], c[2])
}

impl Widget for PictureView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(fit) = layout::fit_picture(area, self.picture.width(), self.picture.height())
        else {
            return;
        };
        let (x0, y0, cols, rows, px_rows) = (
            fit.rect.x,
            fit.rect.y,
            fit.rect.width,
            fit.rect.height,
            fit.pixel_rows,
        );

        for row in 0..rows {
            for col in 0..cols {
                let fx = (col as f32 + 0.5) / cols as f32;
                let top = 2 * row;
                let bottom = top + 1;
                let fg = rgb(
                    self.picture
                        .sample(fx, (top as f32 + 0.5) / px_rows as f32),
                );
                let bg = if bottom < px_rows {
                    rgb(self
                        .picture
                        .sample(fx, (bottom as f32 + 0.5) / px_rows as f32))
                } else {
                    Color::Reset
                };
                if let Some(cell) = buf.cell_mut((x0 + col, y0 + row)) {
                    cell.set_char('\u{2580}').set_fg(fg).set_bg(bg);
                }
            }
        }
    }
}
