//! Main render/view function (View in TEA pattern)

use elong_app::state::{AppState, LoadingState, UiMode};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::theme::{palette, styles};
use crate::widgets;

/// Render the complete UI (View function in TEA)
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with the background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let show_footer = state.settings.ui.show_footer;
    let mut constraints = vec![Constraint::Length(4), Constraint::Min(0)];
    if show_footer {
        constraints.push(Constraint::Length(1));
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    frame.render_widget(widgets::Header, rows[0]);

    let panel = centered_panel(rows[1]);

    match state.ui_mode {
        UiMode::Form => {
            let form = widgets::UrlForm::new(&state.url_input).error(state.error.as_deref());
            frame.render_widget(form, panel);
        }
        UiMode::Loading => {
            // Dimmed form stays behind the loading popup
            let form = widgets::UrlForm::new(&state.url_input).active(false);
            frame.render_widget(form, panel);

            if let Some(ref loading) = state.loading {
                render_loading_popup(frame, loading, area);
            }
        }
        UiMode::Success => {
            if let Some(ref short_url) = state.result_url {
                let card =
                    widgets::ResultCard::new(short_url, &state.url_input).copied(state.is_copied());
                frame.render_widget(card, panel);
            }
        }
    }

    if show_footer {
        frame.render_widget(widgets::Footer::new(state.ui_mode), rows[2]);
    }
}

/// Center the form/result panel inside the body area
fn centered_panel(area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Length(9),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(15),
            Constraint::Percentage(70),
            Constraint::Percentage(15),
        ])
        .split(vertical[1]);

    horizontal[1]
}

/// Render the loading popup while the request is in flight
///
/// Centered box with an animated spinner and the current loading message.
fn render_loading_popup(frame: &mut Frame, loading: &LoadingState, area: Rect) {
    // Braille spinner characters for smooth animation
    const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

    let spinner_idx = (loading.animation_frame as usize) % SPINNER.len();
    let spinner_char = SPINNER[spinner_idx];

    let vertical_center = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Length(5),
            Constraint::Percentage(35),
        ])
        .split(area);

    let horizontal_center = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_center[1]);

    let center_area = horizontal_center[1];

    // Only clear the popup area, not the entire screen
    frame.render_widget(Clear, center_area);

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(spinner_char, styles::accent_bold()),
            Span::raw(" "),
            Span::styled(&loading.message, styles::text_secondary()),
        ]),
    ];

    let block = styles::glass_block(false).style(Style::default().bg(palette::POPUP_BG));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, center_area);
}
