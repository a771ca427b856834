//! UI rendering helpers for the terminal overlay.
//!
//! This module contains functions to render the TUI using `ratatui`. It reads
//! only the [`App`] model, which is itself fed by player events.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style, Stylize},
    widgets::{Block, Borders, Gauge, List, ListItem, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock};

use crate::app::{App, PlaybackState};
use crate::config::{ControlsSettings, UiSettings};

static CONTROLS_MAP: LazyLock<BTreeMap<String, String>> = LazyLock::new(|| {
    let mut map: BTreeMap<String, String> = BTreeMap::new();
    map.insert("j/k".to_string(), "up/down".to_string());
    map.insert("g/G".to_string(), "top/bottom".to_string());
    map.insert("enter".to_string(), "play selected song".to_string());
    map.insert("space/p".to_string(), "play/pause".to_string());
    map.insert("h/l".to_string(), "prev/next song".to_string());
    // H/L is filled dynamically from config.
    map.insert("0-9".to_string(), "jump to 0-90%".to_string());
    map.insert("+/-".to_string(), "volume".to_string());
    map.insert("r".to_string(), "random song".to_string());
    map.insert("q".to_string(), "quit".to_string());
    map
});

/// Render the controls help text, incorporating scrub seconds.
fn controls_text(scrub_seconds: u64) -> String {
    let order = [
        "j/k", "h/l", "H/L", "enter", "space/p", "g/G", "0-9", "+/-", "r", "q",
    ];
    order
        .iter()
        .filter_map(|k| {
            if *k == "H/L" {
                Some(format!("[H/L] scrub -/+{}s", scrub_seconds))
            } else {
                CONTROLS_MAP.get(*k).map(|v| format!("[{}] {}", k, v))
            }
        })
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Format seconds as `m:ss`; negative or non-finite values render as `-:--`.
pub(crate) fn format_time(seconds: f64) -> String {
    if !(seconds.is_finite() && seconds >= 0.0) {
        return "-:--".to_string();
    }
    let secs = seconds.floor() as u64;
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// `position / duration`, with an unknown (zero) duration shown as `-:--`.
pub(crate) fn time_label(position: f64, duration: f64) -> String {
    let total = if duration > 0.0 {
        format_time(duration)
    } else {
        format_time(-1.0)
    };
    format!("{} / {}", format_time(position), total)
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw(
    frame: &mut Frame,
    app: &App,
    ui_settings: &UiSettings,
    controls_settings: &ControlsSettings,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(4),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" cadenza ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Now playing
    let now_playing = {
        let mut lines: Vec<String> = Vec::new();
        match app.now_playing.as_ref() {
            Some(info) => {
                lines.push(format!(
                    "{} ({}/{})",
                    info.title,
                    info.track + 1,
                    app.playlist.len()
                ));
                if ui_settings.show_art {
                    lines.push(format!("Art: {}", info.art.as_deref().unwrap_or("-")));
                }
            }
            None => lines.push("Nothing loaded".to_string()),
        }

        let state = match app.playback {
            PlaybackState::Playing => "Playing",
            PlaybackState::Paused => "Paused",
            PlaybackState::Stopped => "Stopped",
        };
        lines.push(format!(
            "{} • Volume: {:.0}%",
            state,
            (app.volume * 100.0).round()
        ));
        lines.join("\n")
    };

    let now_playing_par = Paragraph::new(now_playing)
        .block(
            Block::bordered()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(" now playing "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(now_playing_par, chunks[1]);

    // Progress
    let label = app
        .now_playing
        .as_ref()
        .map(|info| time_label(info.position, info.duration))
        .unwrap_or_else(|| time_label(0.0, 0.0));
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" progress "))
        .gauge_style(Style::default().add_modifier(Modifier::BOLD))
        .ratio(app.progress_ratio())
        .label(label);
    frame.render_widget(gauge, chunks[2]);

    // Playlist
    {
        let current = app.current_track();
        let total = app.playlist.len();
        let list_height = chunks[3].height.saturating_sub(2) as usize;

        // Center the selected item when possible by creating a visible window.
        let (start, end, selected_pos_in_visible) = if total <= list_height || list_height == 0 {
            (0, total, app.selected)
        } else {
            let half = list_height / 2;
            let mut start = app.selected.saturating_sub(half);
            if start + list_height > total {
                start = total - list_height;
            }
            (start, start + list_height, app.selected - start)
        };

        let visible_items: Vec<ListItem> = app
            .playlist
            .iter()
            .enumerate()
            .skip(start)
            .take(end - start)
            .map(|(i, track)| {
                let marker = if current == Some(i) { "♪ " } else { "  " };
                let duration = track.duration.as_deref().unwrap_or("-:--");
                let item = ListItem::new(format!("{}{:>6}  {}", marker, duration, track.title));
                if current == Some(i) {
                    item.bold()
                } else {
                    item
                }
            })
            .collect();

        let list = List::new(visible_items)
            .block(Block::default().borders(Borders::ALL).title(" playlist "))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ratatui::widgets::ListState::default();
        if total > 0 {
            state.select(Some(selected_pos_in_visible));
        }
        frame.render_stateful_widget(list, chunks[3], &mut state);
    }

    let footer_text = controls_text(controls_settings.scrub_seconds);
    let footer = Paragraph::new(footer_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(footer, chunks[4]);
}
