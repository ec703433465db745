use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::error::{Error, Result};

/// Interviews start at 10:00 UTC on the scheduled day unless rescheduled
/// through the interview entity itself.
const DEFAULT_START_HOUR: u32 = 10;

const EVENT_DURATION_HOURS: i64 = 1;

pub struct InterviewInvite<'a> {
    pub position: &'a str,
    pub company_name: &'a str,
    pub candidate_name: &'a str,
    pub candidate_email: &'a str,
    pub organizer_name: &'a str,
    pub organizer_email: &'a str,
    pub interview_date: DateTime<Utc>,
}

/// Renders an RFC 5545 calendar invite (METHOD:REQUEST) for an interview.
/// `uid` and `dtstamp` are passed in so callers control identity and time.
pub fn render_invite(
    invite: &InterviewInvite<'_>,
    uid: Uuid,
    dtstamp: DateTime<Utc>,
) -> Result<String> {
    if invite.candidate_email.trim().is_empty() || !invite.candidate_email.contains('@') {
        return Err(Error::Internal(
            "calendar event attendee email is missing or malformed".to_string(),
        ));
    }
    if invite.position.trim().is_empty() {
        return Err(Error::Internal(
            "calendar event position is empty".to_string(),
        ));
    }

    let start = invite
        .interview_date
        .date_naive()
        .and_hms_opt(DEFAULT_START_HOUR, 0, 0)
        .ok_or_else(|| Error::Internal("invalid interview start time".to_string()))?
        .and_utc();
    let end = start + Duration::hours(EVENT_DURATION_HOURS);

    let lines = [
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        "PRODID:-//CEP//Candidate Engagement Platform//EN".to_string(),
        "CALSCALE:GREGORIAN".to_string(),
        "METHOD:REQUEST".to_string(),
        "BEGIN:VEVENT".to_string(),
        format!("UID:{}@cep", uid),
        format!("DTSTAMP:{}", format_utc(dtstamp)),
        format!("DTSTART:{}", format_utc(start)),
        format!("DTEND:{}", format_utc(end)),
        format!("SUMMARY:{}", escape_text(&format!("Interview - {}", invite.position))),
        format!(
            "DESCRIPTION:{}",
            escape_text(&format!("Interview scheduled at {}", invite.company_name))
        ),
        format!(
            "LOCATION:{}",
            escape_text("Zoom / Office (to be confirmed)")
        ),
        "STATUS:CONFIRMED".to_string(),
        format!(
            "ORGANIZER;CN={}:mailto:{}",
            escape_text(invite.organizer_name),
            invite.organizer_email
        ),
        format!(
            "ATTENDEE;CN={};RSVP=TRUE:mailto:{}",
            escape_text(invite.candidate_name),
            invite.candidate_email
        ),
        "END:VEVENT".to_string(),
        "END:VCALENDAR".to_string(),
    ];

    Ok(lines.join("\r\n") + "\r\n")
}

fn format_utc(dt: DateTime<Utc>) -> String {
    dt.format("%Y%m%dT%H%M%SZ").to_string()
}

// RFC 5545 §3.3.11 TEXT escaping.
fn escape_text(raw: &str) -> String {
    raw.replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_invite(date: DateTime<Utc>) -> InterviewInvite<'static> {
        InterviewInvite {
            position: "Backend Engineer",
            company_name: "Tech Corp",
            candidate_name: "Jane Candidate",
            candidate_email: "candidate@email.com",
            organizer_name: "CEP Team",
            organizer_email: "cep@gmail.com",
            interview_date: date,
        }
    }

    #[test]
    fn renders_one_hour_event_at_ten_utc() {
        let date = Utc.with_ymd_and_hms(2026, 8, 21, 17, 45, 0).unwrap();
        let stamp = Utc.with_ymd_and_hms(2026, 8, 7, 9, 0, 0).unwrap();
        let uid = Uuid::nil();
        let ics = render_invite(&sample_invite(date), uid, stamp).unwrap();

        assert!(ics.contains("DTSTART:20260821T100000Z\r\n"));
        assert!(ics.contains("DTEND:20260821T110000Z\r\n"));
        assert!(ics.contains("METHOD:REQUEST\r\n"));
        assert!(ics.contains("STATUS:CONFIRMED\r\n"));
        assert!(ics.contains("SUMMARY:Interview - Backend Engineer\r\n"));
        assert!(ics.contains("UID:00000000-0000-0000-0000-000000000000@cep\r\n"));
        assert!(ics.contains("ATTENDEE;CN=Jane Candidate;RSVP=TRUE:mailto:candidate@email.com"));
        assert!(ics.ends_with("END:VCALENDAR\r\n"));
    }

    #[test]
    fn lines_are_crlf_delimited() {
        let date = Utc.with_ymd_and_hms(2026, 8, 21, 0, 0, 0).unwrap();
        let ics = render_invite(&sample_invite(date), Uuid::nil(), date).unwrap();
        for line in ics.split("\r\n").filter(|l| !l.is_empty()) {
            assert!(!line.contains('\n'), "bare newline in line: {:?}", line);
        }
    }

    #[test]
    fn escapes_special_characters() {
        let date = Utc.with_ymd_and_hms(2026, 8, 21, 0, 0, 0).unwrap();
        let mut invite = sample_invite(date);
        invite.company_name = "Smith, Jones; Partners";
        let ics = render_invite(&invite, Uuid::nil(), date).unwrap();
        assert!(ics.contains("Smith\\, Jones\\; Partners"));
    }

    #[test]
    fn rejects_missing_attendee_email() {
        let date = Utc.with_ymd_and_hms(2026, 8, 21, 0, 0, 0).unwrap();
        let mut invite = sample_invite(date);
        invite.candidate_email = "";
        assert!(render_invite(&invite, Uuid::nil(), date).is_err());
    }
}
