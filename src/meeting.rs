// src/meeting.rs
//
// The meeting scheduler shown on the portfolio: given everyone's calendar
// for a day, find every window long enough to fit a requested meeting.

use chrono::{Duration, NaiveTime, Timelike};
use std::collections::HashSet;
use std::fmt;

/// A half-open range of minutes within a single day, `[start, end)`.
///
/// Minute 0 is midnight; minute 1440 is the following midnight and is only
/// valid as an exclusive end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeRange {
    start: u16,
    end: u16,
}

impl TimeRange {
    /// First minute of the day.
    pub const START_OF_DAY: u16 = 0;
    /// One past the last minute of the day.
    pub const END_OF_DAY: u16 = 24 * 60;
    /// The entire day.
    pub const WHOLE_DAY: TimeRange = TimeRange {
        start: Self::START_OF_DAY,
        end: Self::END_OF_DAY,
    };

    /// Creates a range from its bounds.
    ///
    /// # Panics
    /// Panics if `end` is before `start` or either bound is past the end of
    /// the day.
    pub fn from_start_end(start: u16, end: u16) -> Self {
        if end < start {
            panic!("A time range cannot end before it starts.");
        }
        if end > Self::END_OF_DAY {
            panic!("A time range cannot extend past the end of the day.");
        }
        TimeRange { start, end }
    }

    /// Creates a range from a start minute and a length in minutes.
    ///
    /// # Panics
    /// Panics if the range would extend past the end of the day.
    pub fn from_start_duration(start: u16, minutes: u16) -> Self {
        Self::from_start_end(start, start + minutes)
    }

    /// Creates a range from wall-clock times, seconds ignored.
    ///
    /// `NaiveTime` cannot express the end of the day; for a range running
    /// to midnight use [`from_start_end`](Self::from_start_end) with
    /// [`END_OF_DAY`](Self::END_OF_DAY).
    ///
    /// # Panics
    /// Panics if `end` is before `start`.
    pub fn from_clock(start: NaiveTime, end: NaiveTime) -> Self {
        let minutes = |t: NaiveTime| (t.hour() * 60 + t.minute()) as u16;
        Self::from_start_end(minutes(start), minutes(end))
    }

    pub fn start(&self) -> u16 {
        self.start
    }

    pub fn end(&self) -> u16 {
        self.end
    }

    pub fn duration(&self) -> u16 {
        self.end - self.start
    }

    /// Whether the given minute lies inside this range.
    pub fn contains(&self, minute: u16) -> bool {
        self.start <= minute && minute < self.end
    }

    /// Whether the two ranges share at least one minute.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}-{:02}:{:02}",
            self.start / 60,
            self.start % 60,
            self.end / 60,
            self.end % 60
        )
    }
}

/// A calendar entry occupying some of the day for its attendees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    title: String,
    when: TimeRange,
    attendees: HashSet<String>,
}

impl Event {
    pub fn new<I, S>(title: impl Into<String>, when: TimeRange, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Event {
            title: title.into(),
            when,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn when(&self) -> TimeRange {
        self.when
    }

    pub fn attendees(&self) -> &HashSet<String> {
        &self.attendees
    }
}

/// What the meeting needs: who must attend, who would be nice to have, and
/// how long it runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingRequest {
    attendees: HashSet<String>,
    optional_attendees: HashSet<String>,
    duration_minutes: u32,
}

impl MeetingRequest {
    /// Creates a request for the given mandatory attendees.
    ///
    /// # Panics
    /// Panics if the duration is negative. Durations longer than a day are
    /// allowed and simply never fit.
    pub fn new<I, S>(attendees: I, duration: Duration) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let minutes = duration.num_minutes();
        if minutes < 0 {
            panic!("A meeting duration cannot be negative.");
        }
        MeetingRequest {
            attendees: attendees.into_iter().map(Into::into).collect(),
            optional_attendees: HashSet::new(),
            duration_minutes: u32::try_from(minutes).unwrap_or(u32::MAX),
        }
    }

    /// Adds attendees whose calendars are respected when possible but
    /// never allowed to leave the meeting without a slot.
    pub fn with_optional_attendees<I, S>(mut self, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional_attendees
            .extend(attendees.into_iter().map(Into::into));
        self
    }

    pub fn attendees(&self) -> &HashSet<String> {
        &self.attendees
    }

    pub fn optional_attendees(&self) -> &HashSet<String> {
        &self.optional_attendees
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }
}

/// Finds every window of the day in which the requested meeting fits.
///
/// A window must clear the calendars of all mandatory attendees. Optional
/// attendees narrow the result when that still leaves at least one window;
/// otherwise they are ignored and the mandatory-only windows are returned.
/// Events whose attendees are not part of the request never block anything.
///
/// # Examples
/// ```rust
/// use chrono::Duration;
/// use portfolio_rs::meeting::{find_meeting_times, Event, MeetingRequest, TimeRange};
///
/// let events = [Event::new(
///     "Standup",
///     TimeRange::from_start_duration(9 * 60, 30),
///     ["alice"],
/// )];
/// let request = MeetingRequest::new(["alice"], Duration::minutes(60));
///
/// let windows = find_meeting_times(&events, &request);
/// assert_eq!(
///     windows,
///     [
///         TimeRange::from_start_end(0, 9 * 60),
///         TimeRange::from_start_end(9 * 60 + 30, TimeRange::END_OF_DAY),
///     ]
/// );
/// ```
pub fn find_meeting_times(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    if request.duration_minutes() > u32::from(TimeRange::WHOLE_DAY.duration()) {
        return Vec::new();
    }

    let mut busy_mandatory = Vec::new();
    let mut busy_all = Vec::new();
    for event in events {
        let has = |group: &HashSet<String>| event.attendees().iter().any(|a| group.contains(a));
        if has(request.attendees()) {
            busy_mandatory.push(event.when());
            busy_all.push(event.when());
        } else if has(request.optional_attendees()) {
            busy_all.push(event.when());
        }
    }

    let with_optional = open_windows(busy_all, request.duration_minutes());
    if with_optional.is_empty() {
        return open_windows(busy_mandatory, request.duration_minutes());
    }
    with_optional
}

/// Sweeps the sorted busy ranges and collects every gap long enough for the
/// meeting. An empty calendar yields the whole day.
fn open_windows(mut busy: Vec<TimeRange>, duration: u32) -> Vec<TimeRange> {
    let mut windows = Vec::new();
    if busy.is_empty() {
        windows.push(TimeRange::WHOLE_DAY);
        return windows;
    }
    busy.sort_by_key(|range| range.start());

    let fits = |start: u16, end: u16| end > start && u32::from(end - start) >= duration;

    let mut start = TimeRange::START_OF_DAY;
    let mut end = busy[0].start();
    for (i, slot) in busy.iter().enumerate() {
        if fits(start, end) {
            windows.push(TimeRange::from_start_end(start, end));
        }
        // Busy ranges may overlap or nest; the cursor only ever moves forward.
        if slot.end() > start {
            start = slot.end();
        }
        end = match busy.get(i + 1) {
            Some(next) => next.start(),
            None => TimeRange::END_OF_DAY,
        };
    }
    if fits(start, end) {
        windows.push(TimeRange::from_start_end(start, end));
    }
    windows
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: u16 = 60;

    fn t(hours: u16, minutes: u16) -> u16 {
        hours * HOUR + minutes
    }

    fn range(start: u16, end: u16) -> TimeRange {
        TimeRange::from_start_end(start, end)
    }

    fn request(attendees: &[&str], minutes: i64) -> MeetingRequest {
        MeetingRequest::new(attendees.iter().copied(), Duration::minutes(minutes))
    }

    #[test]
    fn whole_day_when_nobody_is_requested() {
        let events = [Event::new("Lunch", range(t(12, 0), t(13, 0)), ["alice"])];
        let req = request(&[], 30);

        assert_eq!(
            find_meeting_times(&events, &req),
            [TimeRange::WHOLE_DAY]
        );
    }

    #[test]
    fn no_options_for_a_request_longer_than_a_day() {
        let req = request(&["alice"], i64::from(TimeRange::END_OF_DAY) + 1);
        assert!(find_meeting_times(&[], &req).is_empty());
    }

    #[test]
    fn very_long_durations_do_not_overflow() {
        let req = MeetingRequest::new(["alice"], Duration::weeks(52 * 9000));
        assert!(find_meeting_times(&[], &req).is_empty());
    }

    #[test]
    fn one_event_splits_the_day() {
        let events = [Event::new(
            "Standup",
            range(t(8, 30), t(9, 0)),
            ["alice"],
        )];
        let req = request(&["alice"], 30);

        assert_eq!(
            find_meeting_times(&events, &req),
            [
                range(TimeRange::START_OF_DAY, t(8, 30)),
                range(t(9, 0), TimeRange::END_OF_DAY),
            ]
        );
    }

    #[test]
    fn every_requested_attendee_is_considered() {
        let events = [
            Event::new("A's event", range(t(8, 0), t(9, 0)), ["alice"]),
            Event::new("B's event", range(t(9, 0), t(10, 0)), ["bob"]),
        ];
        let req = request(&["alice", "bob"], 30);

        assert_eq!(
            find_meeting_times(&events, &req),
            [
                range(TimeRange::START_OF_DAY, t(8, 0)),
                range(t(10, 0), TimeRange::END_OF_DAY),
            ]
        );
    }

    #[test]
    fn overlapping_events_merge_into_one_block() {
        let events = [
            Event::new("Early", range(t(8, 0), t(10, 0)), ["alice"]),
            Event::new("Late", range(t(9, 0), t(11, 0)), ["bob"]),
        ];
        let req = request(&["alice", "bob"], 60);

        assert_eq!(
            find_meeting_times(&events, &req),
            [
                range(TimeRange::START_OF_DAY, t(8, 0)),
                range(t(11, 0), TimeRange::END_OF_DAY),
            ]
        );
    }

    #[test]
    fn nested_events_do_not_reopen_the_outer_block() {
        let events = [
            Event::new("All morning", range(t(8, 0), t(12, 0)), ["alice"]),
            Event::new("Inside it", range(t(9, 0), t(10, 0)), ["bob"]),
        ];
        let req = request(&["alice", "bob"], 30);

        assert_eq!(
            find_meeting_times(&events, &req),
            [
                range(TimeRange::START_OF_DAY, t(8, 0)),
                range(t(12, 0), TimeRange::END_OF_DAY),
            ]
        );
    }

    #[test]
    fn double_booked_attendees_count_once() {
        let events = [
            Event::new("First", range(t(8, 0), t(9, 0)), ["alice"]),
            Event::new("Second", range(t(8, 0), t(9, 0)), ["bob"]),
        ];
        let req = request(&["alice", "bob"], 30);

        assert_eq!(
            find_meeting_times(&events, &req),
            [
                range(TimeRange::START_OF_DAY, t(8, 0)),
                range(t(9, 0), TimeRange::END_OF_DAY),
            ]
        );
    }

    #[test]
    fn just_enough_room_counts() {
        let events = [
            Event::new("Morning", range(TimeRange::START_OF_DAY, t(8, 30)), ["alice"]),
            Event::new("Rest of day", range(t(9, 0), TimeRange::END_OF_DAY), ["alice"]),
        ];
        let req = request(&["alice"], 30);

        assert_eq!(find_meeting_times(&events, &req), [range(t(8, 30), t(9, 0))]);
    }

    #[test]
    fn a_slot_ending_exactly_at_midnight_counts() {
        let events = [Event::new(
            "Evening",
            range(TimeRange::START_OF_DAY, t(23, 0)),
            ["alice"],
        )];
        let req = request(&["alice"], 60);

        assert_eq!(
            find_meeting_times(&events, &req),
            [range(t(23, 0), TimeRange::END_OF_DAY)]
        );
    }

    #[test]
    fn uninvolved_calendars_are_ignored() {
        let events = [Event::new(
            "Someone else's day",
            range(t(8, 0), t(18, 0)),
            ["carol"],
        )];
        let req = request(&["alice"], 30);

        assert_eq!(find_meeting_times(&events, &req), [TimeRange::WHOLE_DAY]);
    }

    #[test]
    fn no_room_means_no_options() {
        let events = [
            Event::new("Morning", range(TimeRange::START_OF_DAY, t(8, 30)), ["alice"]),
            Event::new("Rest of day", range(t(9, 0), TimeRange::END_OF_DAY), ["alice"]),
        ];
        let req = request(&["alice"], 60);

        assert!(find_meeting_times(&events, &req).is_empty());
    }

    #[test]
    fn optional_attendees_narrow_the_windows() {
        let events = [
            Event::new("Mandatory block", range(t(8, 0), t(8, 30)), ["alice"]),
            Event::new("Optional block", range(t(9, 0), t(10, 0)), ["bob"]),
        ];
        let req = request(&["alice"], 30).with_optional_attendees(["bob"]);

        assert_eq!(
            find_meeting_times(&events, &req),
            [
                range(TimeRange::START_OF_DAY, t(8, 0)),
                range(t(8, 30), t(9, 0)),
                range(t(10, 0), TimeRange::END_OF_DAY),
            ]
        );
    }

    #[test]
    fn optional_attendees_never_eliminate_every_window() {
        let events = [
            Event::new("Morning", range(TimeRange::START_OF_DAY, t(8, 0)), ["alice"]),
            Event::new("Afternoon", range(t(9, 0), TimeRange::END_OF_DAY), ["alice"]),
            Event::new("The only gap", range(t(8, 0), t(9, 0)), ["bob"]),
        ];
        let req = request(&["alice"], 30).with_optional_attendees(["bob"]);

        // Honoring bob would leave nothing, so his calendar is ignored.
        assert_eq!(find_meeting_times(&events, &req), [range(t(8, 0), t(9, 0))]);
    }

    #[test]
    fn fully_booked_optional_only_request_falls_back_to_the_whole_day() {
        let events = [Event::new(
            "All day",
            TimeRange::WHOLE_DAY,
            ["bob"],
        )];
        let req = request(&[], 30).with_optional_attendees(["bob"]);

        assert_eq!(find_meeting_times(&events, &req), [TimeRange::WHOLE_DAY]);
    }

    #[test]
    fn ranges_expose_their_arithmetic() {
        let morning = TimeRange::from_clock(
            NaiveTime::from_hms_opt(8, 30, 0).unwrap(),
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        );

        assert_eq!(morning.start(), t(8, 30));
        assert_eq!(morning.duration(), 90);
        assert!(morning.contains(t(9, 59)));
        assert!(!morning.contains(t(10, 0)));
        assert!(morning.overlaps(&range(t(9, 0), t(9, 30))));
        assert!(!morning.overlaps(&range(t(10, 0), t(11, 0))));
        assert_eq!(morning.to_string(), "08:30-10:00");
        assert_eq!(TimeRange::WHOLE_DAY.to_string(), "00:00-24:00");
    }

    #[test]
    #[should_panic(expected = "cannot end before it starts")]
    fn inverted_ranges_are_rejected() {
        let _ = TimeRange::from_start_end(t(10, 0), t(9, 0));
    }

    #[test]
    #[should_panic(expected = "past the end of the day")]
    fn ranges_cannot_run_past_midnight() {
        let _ = TimeRange::from_start_duration(t(23, 30), 31);
    }

    #[test]
    #[should_panic(expected = "cannot be negative")]
    fn negative_durations_are_rejected() {
        let _ = MeetingRequest::new(["alice"], Duration::minutes(-5));
    }
}
