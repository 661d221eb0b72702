//! iCalendar export for poker events.

use super::models::PokerEvent;
use chrono::{DateTime, Duration, Utc};

/// Length blocked out in calendars for one poker night
pub const EVENT_LENGTH_HOURS: i64 = 4;

fn format_ics_date(date: &DateTime<Utc>) -> String {
    date.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Escape `,` `;` `\` and newlines for an iCalendar text value
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            ',' | ';' | '\\' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Render a single-event VCALENDAR document with CRLF line endings
pub fn ics_for(event: &PokerEvent, notes: Option<&str>) -> String {
    let end = event.date + Duration::hours(EVENT_LENGTH_HOURS);

    let mut description = format!("Buy-in: ${}", event.buy_in);
    if let Some(notes) = notes {
        description.push('\n');
        description.push_str(notes);
    }

    [
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        "CALSCALE:GREGORIAN".to_string(),
        "METHOD:PUBLISH".to_string(),
        "BEGIN:VEVENT".to_string(),
        format!("DTSTART:{}", format_ics_date(&event.date)),
        format!("DTEND:{}", format_ics_date(&end)),
        format!("SUMMARY:{}", escape_text(&event.title)),
        format!("DESCRIPTION:{}", escape_text(&description)),
        format!("LOCATION:{}", escape_text(&event.location)),
        "END:VEVENT".to_string(),
        "END:VCALENDAR".to_string(),
    ]
    .join("\r\n")
}
