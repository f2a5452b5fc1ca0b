//! Timestamp based event identifiers.
//!
//! Ids are UTC instants with 100 ns precision, rendered in the ISO-8601
//! round-trip form with an explicit offset (`2024-01-01T00:00:00.0000000+00:00`)
//! that browsers echo back in the `Last-Event-ID` header on reconnect.
use chrono::{DateTime, ParseError, TimeDelta, Utc};
use std::fmt;

const TICK_NANOS: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventId(DateTime<Utc>);

impl EventId {
    /// Parses any RFC 3339 timestamp, `Z` or numeric offset, normalizing it to
    /// UTC ticks.
    pub fn parse(value: &str) -> Result<Self, ParseError> {
        let parsed = DateTime::parse_from_rfc3339(value.trim())?;
        Ok(Self::from(parsed.with_timezone(&Utc)))
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.0
    }

    fn successor(&self) -> Self {
        Self(self.0 + TimeDelta::nanoseconds(i64::from(TICK_NANOS)))
    }
}

impl From<DateTime<Utc>> for EventId {
    fn from(at: DateTime<Utc>) -> Self {
        let sub_tick = at.timestamp_subsec_nanos() % TICK_NANOS;
        Self(at - TimeDelta::nanoseconds(i64::from(sub_tick)))
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Leap seconds report up to 1_999_999_999 nanos; clamp into the second.
        let ticks = self.0.timestamp_subsec_nanos().min(999_999_999) / TICK_NANOS;
        write!(f, "{}.{ticks:07}+00:00", self.0.format("%Y-%m-%dT%H:%M:%S"))
    }
}

/// Issues strictly increasing ids for a single stream, even when the wall
/// clock stalls or steps backwards between events.
#[derive(Debug, Default)]
pub struct EventIdClock {
    last: Option<EventId>,
}

impl EventIdClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> EventId {
        self.next_id_at(Utc::now())
    }

    fn next_id_at(&mut self, now: DateTime<Utc>) -> EventId {
        let candidate = EventId::from(now);
        let id = match self.last {
            Some(last) if candidate <= last => last.successor(),
            _ => candidate,
        };
        self.last = Some(id);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(nanos: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + TimeDelta::nanoseconds(i64::from(nanos))
    }

    #[test]
    fn test_formats_round_trip_seven_digit_fraction() {
        assert_eq!(
            EventId::from(at(0)).to_string(),
            "2024-01-01T00:00:00.0000000+00:00"
        );
        assert_eq!(
            EventId::from(at(123_456_789)).to_string(),
            "2024-01-01T00:00:00.1234567+00:00"
        );
    }

    #[test]
    fn test_parse_accepts_both_utc_designators() {
        let zulu = EventId::parse("2024-01-01T00:00:00.1234567Z").unwrap();
        let offset = EventId::parse("2024-01-01T00:00:00.1234567+00:00").unwrap();

        assert_eq!(zulu, offset);
        assert_eq!(zulu, EventId::from(at(123_456_700)));
        assert_eq!(zulu.to_string(), "2024-01-01T00:00:00.1234567+00:00");
    }

    #[test]
    fn test_rendered_id_parses_back_to_itself() {
        let id = EventId::from(at(987_654_321));
        assert_eq!(EventId::parse(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_parse_normalizes_offsets_to_utc() {
        let id = EventId::parse("2024-01-01T02:00:00.5+02:00").unwrap();
        assert_eq!(id.to_string(), "2024-01-01T00:00:00.5000000+00:00");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(EventId::parse("not-a-timestamp").is_err());
        assert!(EventId::parse("").is_err());
    }

    #[test]
    fn test_clock_ids_strictly_increase_when_time_stalls() {
        let mut clock = EventIdClock::new();
        let first = clock.next_id_at(at(500));
        let second = clock.next_id_at(at(500));
        let third = clock.next_id_at(at(550));

        assert!(first < second);
        assert!(second < third);
        assert_eq!(second.to_string(), "2024-01-01T00:00:00.0000006+00:00");
        assert_eq!(third.to_string(), "2024-01-01T00:00:00.0000007+00:00");
    }

    #[test]
    fn test_clock_survives_backwards_steps() {
        let mut clock = EventIdClock::new();
        let first = clock.next_id_at(at(1_000_000));
        let second = clock.next_id_at(at(0));

        assert!(second > first);
    }

    #[test]
    fn test_clock_follows_wall_time_when_it_advances() {
        let mut clock = EventIdClock::new();
        clock.next_id_at(at(0));
        let later = clock.next_id_at(at(1_000_000_000 - 1));
        assert_eq!(later.to_string(), "2024-01-01T00:00:00.9999999+00:00");
    }

    #[test]
    fn test_real_clock_ids_carry_utc_offset() {
        let id = EventIdClock::new().next_id().to_string();
        assert!(id.ends_with("+00:00"), "{id}");
        assert_eq!(id.len(), "2024-01-01T00:00:00.0000000+00:00".len());
    }

    #[test]
    fn test_real_clock_issues_increasing_ids() {
        let mut clock = EventIdClock::new();
        let ids: Vec<EventId> = (0..1_000).map(|_| clock.next_id()).collect();
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
