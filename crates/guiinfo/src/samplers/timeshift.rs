#![forbid(unsafe_code)]

use crate::domain::{EpgEvent, TimeBase};

/// One playback-engine sample, gathered before the snapshot lock is taken.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeshiftInput {
    /// Whether any live channel is playing at all.
    pub playing: bool,
    pub timeshifting: bool,
    /// Engine-reported stream start, unix seconds, 0 = unknown yet.
    pub start_time: i64,
    pub play_position_secs: i64,
    pub min_offset_secs: i64,
    pub max_offset_secs: i64,
    pub at_normal_speed: bool,
}

/// Fold one sample into the cached time base.
///
/// The start time anchors to the first observed moment and is reused while
/// the engine keeps reporting 0, so elapsed time never jumps backward. When
/// the backend reports no usable window the play position falls back to
/// wall clock minus the drift carried over from the previous cycle; the
/// drift itself is recomputed every cycle so pause/resume and speed changes
/// are absorbed without a visible jump.
pub fn reconcile(timebase: &mut TimeBase, input: &TimeshiftInput, now: i64) {
    if !input.playing {
        // Nothing playing (anymore): drop the whole time base rather than
        // letting the UI show a frozen stale position.
        if timebase.has_data {
            timebase.clear();
        }
        return;
    }

    let start_time = if input.start_time == 0 {
        if timebase.start_time == 0 {
            now
        } else {
            timebase.start_time
        }
    } else {
        input.start_time
    };

    timebase.last_update = now;
    timebase.timeshifting = input.timeshifting;
    timebase.start_time = start_time;
    timebase.window_start = start_time + input.min_offset_secs;
    // A backend reporting max < min yields a degenerate (zero-width) window.
    timebase.window_end = (start_time + input.max_offset_secs).max(timebase.window_start);

    if timebase.window_end > timebase.window_start {
        timebase.play_time = start_time + input.play_position_secs;
    } else if input.at_normal_speed {
        timebase.play_time = now - timebase.drift_offset;
    }

    timebase.drift_offset = now - timebase.play_time;
    timebase.has_data = true;
}

/// Seconds elapsed since the later anchor of event start or stream start,
/// measured at the cached play position, floored at zero.
pub fn elapsed_secs(timebase: &TimeBase, event: Option<&EpgEvent>) -> i64 {
    if event.is_none() && timebase.start_time == 0 {
        return 0;
    }
    let anchor = event.map_or(timebase.start_time, |event| event.start);
    (timebase.play_time - anchor).max(0)
}

/// How far the shiftable window begins after the event (or stream) start.
pub fn start_offset_secs(timebase: &TimeBase, event: Option<&EpgEvent>) -> i64 {
    if !timebase.timeshifting {
        return 0;
    }
    let anchor = event.map_or(timebase.start_time, |event| event.start);
    (timebase.window_start - anchor).max(0)
}

/// Span the shiftable window reaches back before the playing event's start.
pub fn before_event_secs(timebase: &TimeBase, event: Option<&EpgEvent>) -> i64 {
    match event {
        Some(event) if timebase.timeshifting => (event.start - timebase.window_start).max(0),
        _ => 0,
    }
}

/// How far wall clock has run past the playing event's scheduled end.
pub fn after_event_secs(timebase: &TimeBase, event: Option<&EpgEvent>, now: i64) -> i64 {
    match event {
        Some(event) if timebase.timeshifting => (now - event.end).max(0),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn window_never_inverted(
            start_time in 0i64..2_000_000_000,
            play in -100_000i64..100_000,
            min in -100_000i64..100_000,
            max in -100_000i64..100_000,
            shifting: bool,
            normal_speed: bool,
            now in 0i64..2_000_000_000,
        ) {
            let mut timebase = TimeBase::default();
            let input = TimeshiftInput {
                playing: true,
                timeshifting: shifting,
                start_time,
                play_position_secs: play,
                min_offset_secs: min,
                max_offset_secs: max,
                at_normal_speed: normal_speed,
            };
            reconcile(&mut timebase, &input, now);
            prop_assert!(timebase.window_end >= timebase.window_start);
            prop_assert!(timebase.has_data);
        }
    }
}
