//! Mock scan scheduler.
//!
//! The "scan" is pure theatre: a browser interval that walks a finite
//! progress sequence (10, 20, …, 100) and mirrors each value into the
//! page's [`ScanState`]. No file is read and no request is made.
//!
//! The sequence is modelled as an explicit iterator rather than a
//! counter mutated inside the timer callback, so the terminal condition
//! lives in one place and the whole schedule is testable off the browser.

use gloo_timers::callback::Interval;
use leptos::{store_value, StoredValue, WriteSignal, SignalSet};

use crate::config::{SCAN_COMPLETE, SCAN_STEP, SCAN_TICK_MS};
use crate::types::ScanState;

// =============================================================================
// Progress sequence
// =============================================================================

/// Finite mock scan progress sequence: emits 10, 20, …, 100, then ends.
///
/// One emission per timer tick. Not restartable; a new scan gets a new
/// sequence.
#[derive(Debug)]
pub struct ProgressSequence {
    next: u8,
}

impl ProgressSequence {
    pub fn new() -> Self {
        Self { next: SCAN_STEP }
    }
}

impl Default for ProgressSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for ProgressSequence {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.next > SCAN_COMPLETE {
            return None;
        }
        let value = self.next;
        self.next += SCAN_STEP;
        Some(value)
    }
}

/// What a single timer tick does to the scan state.
#[derive(Debug, PartialEq, Eq)]
enum Tick {
    /// Show this progress value and keep ticking.
    Advance(u8),
    /// Pin progress at 100, finish the scan, stop ticking.
    Complete,
}

/// Maps the next sequence emission to a tick outcome.
///
/// The emission of 100 is the terminal tick: progress reaches 100 and the
/// scan ends in the same update. An exhausted sequence also completes, so
/// a stray extra firing can never rewind the bar.
fn advance(sequence: &mut ProgressSequence) -> Tick {
    match sequence.next() {
        Some(progress) if progress < SCAN_COMPLETE => Tick::Advance(progress),
        _ => Tick::Complete,
    }
}

// =============================================================================
// Scheduler
// =============================================================================

/// Drives the mock scan animation.
///
/// Owns the repeating interval behind a [`StoredValue`] so that starting a
/// new scan while one is in flight first drops (and thereby cancels) the
/// previous interval. Two timers can never increment the same bar.
#[derive(Clone, Copy)]
pub struct ScanScheduler {
    state: WriteSignal<ScanState>,
    timer: StoredValue<Option<Interval>>,
}

impl ScanScheduler {
    /// Must be created inside a reactive scope (a component body).
    pub fn new(state: WriteSignal<ScanState>) -> Self {
        Self {
            state,
            timer: store_value(None),
        }
    }

    /// Starts a mock scan, cancelling any scan already in flight.
    ///
    /// Resets progress to 0, then arms a repeating interval of
    /// [`SCAN_TICK_MS`]. Each firing advances the bar by [`SCAN_STEP`];
    /// the tenth firing pins it at 100, flips the state back to
    /// [`ScanState::Idle`] and disarms the interval.
    pub fn start(&self) {
        // Dropping the previous Interval clears it browser-side.
        self.timer.set_value(None);

        log::info!("🔍 Mock scan started");
        self.state.set(ScanState::Scanning { progress: 0 });

        let mut sequence = ProgressSequence::new();
        let state = self.state;
        let timer = self.timer;

        let interval = Interval::new(SCAN_TICK_MS, move || match advance(&mut sequence) {
            Tick::Advance(progress) => {
                log::debug!("scan progress: {progress}%");
                state.set(ScanState::Scanning { progress });
            }
            Tick::Complete => {
                // Final frame shows 100%, then the card unmounts.
                state.set(ScanState::Scanning {
                    progress: SCAN_COMPLETE,
                });
                state.set(ScanState::Idle);
                log::info!("✅ Mock scan complete");
                timer.set_value(None);
            }
        });

        self.timer.set_value(Some(interval));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_emits_ten_steps_then_ends() {
        let values: Vec<u8> = ProgressSequence::new().collect();
        assert_eq!(values, [10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);

        let mut sequence = ProgressSequence::new();
        for _ in 0..10 {
            assert!(sequence.next().is_some());
        }
        assert_eq!(sequence.next(), None);
        assert_eq!(sequence.next(), None);
    }

    #[test]
    fn test_scan_advances_then_completes_on_tenth_tick() {
        let mut sequence = ProgressSequence::new();

        for expected in [10, 20, 30, 40, 50, 60, 70, 80, 90] {
            assert_eq!(advance(&mut sequence), Tick::Advance(expected));
        }

        // The tick that would reach 100 finishes the scan in the same
        // update instead of leaving the bar frozen.
        assert_eq!(advance(&mut sequence), Tick::Complete);
    }

    #[test]
    fn test_exhausted_sequence_stays_complete() {
        let mut sequence = ProgressSequence::new();
        while advance(&mut sequence) != Tick::Complete {}

        assert_eq!(advance(&mut sequence), Tick::Complete);
        assert_eq!(advance(&mut sequence), Tick::Complete);
    }
}
