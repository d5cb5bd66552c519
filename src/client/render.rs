use std::fmt::Display;

use chrono::{Local, TimeZone};

use super::page::JournalPage;
use crate::models::mood::MoodEntry;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders the page with timestamps in the local time zone.
pub fn render(page: &JournalPage) -> String {
    render_in(page, &Local)
}

pub fn render_in<Tz>(page: &JournalPage, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut lines = vec![
        "Mood Tracker".to_string(),
        "Log how you're feeling and keep a history of your moods.".to_string(),
        String::new(),
    ];

    if let Some(error) = page.error() {
        lines.push(format!("! {error}"));
        lines.push(String::new());
    }

    if page.is_submitting() {
        lines.push("Saving...".to_string());
        lines.push(String::new());
    }

    lines.push("Recent Moods".to_string());
    if page.is_loading() {
        lines.push("Loading...".to_string());
    } else if page.entries().is_empty() {
        lines.push("No mood entries yet. Start by submitting one above.".to_string());
    } else {
        for entry in page.entries() {
            lines.extend(render_entry(entry, tz));
        }
    }

    lines.join("\n")
}

fn render_entry<Tz>(entry: &MoodEntry, tz: &Tz) -> Vec<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let at = entry.created_at.with_timezone(tz).format(TIMESTAMP_FORMAT);
    let mut lines = vec![format!("- {} ({at})", entry.mood)];
    if let Some(note) = entry.note.as_deref().filter(|n| !n.is_empty()) {
        lines.push(format!("    {note}"));
    }
    lines
}
