// Typewriter text effect
// Types a word one character at a time, pauses, deletes it, then moves on to
// the next word, forever. A separate blink timer toggles the cursor. Both run
// off one TimerQueue so teardown is a single clear().

use std::time::Duration;

use super::timers::TimerQueue;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypewriterTimings {
    /// Delay between typed characters.
    pub speed: Duration,
    /// Delay between deleted characters.
    pub delete_speed: Duration,
    /// Hold time once a word is fully typed.
    pub pause: Duration,
    /// Cursor blink half-period.
    pub blink: Duration,
}

impl Default for TypewriterTimings {
    fn default() -> Self {
        Self {
            speed: Duration::from_millis(100),
            delete_speed: Duration::from_millis(50),
            pause: Duration::from_millis(2000),
            blink: Duration::from_millis(500),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeMode {
    Typing,
    PausedAfterComplete,
    Deleting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TypeEvent {
    Step,
    Resume,
    Blink,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypewriterError {
    #[error("typewriter needs at least one word")]
    NoWords,
    #[error("typewriter {0} period must be greater than zero")]
    ZeroPeriod(&'static str),
}

pub struct Typewriter {
    words: Vec<String>,
    timings: TypewriterTimings,
    word_index: usize,
    /// Length of the visible prefix, in chars.
    visible_chars: usize,
    mode: TypeMode,
    cursor_visible: bool,
    timers: TimerQueue<TypeEvent>,
    mounted: bool,
}

impl Typewriter {
    pub fn new(words: Vec<String>, timings: TypewriterTimings) -> Result<Self, TypewriterError> {
        if words.is_empty() {
            return Err(TypewriterError::NoWords);
        }
        // Each of these reschedules itself; a zero period would refire forever
        // inside one update. A zero pause is fine since it always leads to a
        // delete step.
        for (name, period) in [
            ("speed", timings.speed),
            ("delete speed", timings.delete_speed),
            ("blink", timings.blink),
        ] {
            if period.is_zero() {
                return Err(TypewriterError::ZeroPeriod(name));
            }
        }
        Ok(Self {
            words,
            timings,
            word_index: 0,
            visible_chars: 0,
            mode: TypeMode::Typing,
            cursor_visible: true,
            timers: TimerQueue::new(),
            mounted: false,
        })
    }

    /// Start from the first word with an empty line and a visible cursor.
    pub fn mount(&mut self, now: Duration) {
        self.timers.clear();
        self.word_index = 0;
        self.visible_chars = 0;
        self.mode = TypeMode::Typing;
        self.cursor_visible = true;
        self.timers.schedule(now + self.timings.speed, TypeEvent::Step);
        self.timers.schedule(now + self.timings.blink, TypeEvent::Blink);
        self.mounted = true;
    }

    /// Drop every pending timer. Later updates do nothing.
    pub fn unmount(&mut self) {
        self.timers.clear();
        self.mounted = false;
    }

    /// Fire every timer due at or before `now`, in due order.
    pub fn update(&mut self, now: Duration) {
        if !self.mounted {
            return;
        }
        while let Some((at, event)) = self.timers.pop_due(now) {
            match event {
                TypeEvent::Step => self.step(at),
                TypeEvent::Resume => {
                    self.mode = TypeMode::Deleting;
                    self.timers.schedule(at + self.timings.delete_speed, TypeEvent::Step);
                }
                TypeEvent::Blink => {
                    self.cursor_visible = !self.cursor_visible;
                    self.timers.schedule(at + self.timings.blink, TypeEvent::Blink);
                }
            }
        }
    }

    fn step(&mut self, at: Duration) {
        match self.mode {
            TypeMode::Typing => {
                if self.visible_chars < self.current_word().chars().count() {
                    self.visible_chars += 1;
                    self.timers.schedule(at + self.timings.speed, TypeEvent::Step);
                } else {
                    self.mode = TypeMode::PausedAfterComplete;
                    self.timers.schedule(at + self.timings.pause, TypeEvent::Resume);
                }
            }
            TypeMode::Deleting => {
                if self.visible_chars > 0 {
                    self.visible_chars -= 1;
                    self.timers.schedule(at + self.timings.delete_speed, TypeEvent::Step);
                } else {
                    self.word_index = (self.word_index + 1) % self.words.len();
                    self.mode = TypeMode::Typing;
                    self.timers.schedule(at + self.timings.speed, TypeEvent::Step);
                }
            }
            // Steps are never scheduled while paused.
            TypeMode::PausedAfterComplete => {}
        }
    }

    pub fn current_word(&self) -> &str {
        &self.words[self.word_index]
    }

    pub fn visible_text(&self) -> &str {
        let word = self.current_word();
        match word.char_indices().nth(self.visible_chars) {
            Some((end, _)) => &word[..end],
            None => word,
        }
    }

    pub fn word_index(&self) -> usize {
        self.word_index
    }

    pub fn mode(&self) -> TypeMode {
        self.mode
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::clock::{Clock, FakeClock};

    fn timings(speed: u64, delete: u64, pause: u64) -> TypewriterTimings {
        TypewriterTimings {
            speed: Duration::from_millis(speed),
            delete_speed: Duration::from_millis(delete),
            pause: Duration::from_millis(pause),
            blink: Duration::from_millis(500),
        }
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    /// Step the clock in 10 ms increments and record every change of the visible text.
    fn record(tw: &mut Typewriter, clock: &FakeClock, total_ms: u64) -> Vec<String> {
        let mut seen = vec![tw.visible_text().to_string()];
        for _ in 0..total_ms / 10 {
            clock.advance_ms(10);
            tw.update(clock.now());
            if seen.last().map(String::as_str) != Some(tw.visible_text()) {
                seen.push(tw.visible_text().to_string());
            }
        }
        seen
    }

    #[test]
    fn test_two_word_cycle() {
        let clock = FakeClock::new();
        let mut tw = Typewriter::new(words(&["AB", "C"]), timings(100, 50, 0)).unwrap();
        tw.mount(clock.now());

        let seen = record(&mut tw, &clock, 950);
        assert_eq!(seen, vec!["", "A", "AB", "A", "", "C", "", "A", "AB"]);
        assert_eq!(tw.word_index(), 0);
    }

    #[test]
    fn test_index_advances_after_word_is_deleted() {
        let clock = FakeClock::new();
        let mut tw = Typewriter::new(words(&["AB", "C"]), timings(100, 50, 0)).unwrap();
        tw.mount(clock.now());

        // "AB" typed at 200, paused/resumed at 300, deleted by 400, index moves at 450
        clock.advance_ms(440);
        tw.update(clock.now());
        assert_eq!(tw.word_index(), 0);
        assert_eq!(tw.mode(), TypeMode::Deleting);
        clock.advance_ms(10);
        tw.update(clock.now());
        assert_eq!(tw.word_index(), 1);
        assert_eq!(tw.mode(), TypeMode::Typing);
    }

    #[test]
    fn test_pause_holds_full_word() {
        let clock = FakeClock::new();
        let mut tw = Typewriter::new(words(&["Hi"]), timings(100, 50, 2000)).unwrap();
        tw.mount(clock.now());

        clock.advance_ms(300);
        tw.update(clock.now());
        assert_eq!(tw.visible_text(), "Hi");
        assert_eq!(tw.mode(), TypeMode::PausedAfterComplete);

        clock.advance_ms(1_900);
        tw.update(clock.now());
        assert_eq!(tw.visible_text(), "Hi");

        clock.advance_ms(150);
        tw.update(clock.now());
        assert_eq!(tw.mode(), TypeMode::Deleting);
        assert_eq!(tw.visible_text(), "H");
    }

    #[test]
    fn test_single_word_retypes_itself() {
        let clock = FakeClock::new();
        let mut tw = Typewriter::new(words(&["X"]), timings(100, 50, 0)).unwrap();
        tw.mount(clock.now());

        let seen = record(&mut tw, &clock, 450);
        assert_eq!(seen, vec!["", "X", "", "X"]);
        assert_eq!(tw.word_index(), 0);
    }

    #[test]
    fn test_late_update_catches_up() {
        let clock = FakeClock::new();
        let mut tw = Typewriter::new(words(&["AB", "C"]), timings(100, 50, 0)).unwrap();
        tw.mount(clock.now());

        clock.advance_ms(550);
        tw.update(clock.now());
        assert_eq!(tw.word_index(), 1);
        assert_eq!(tw.visible_text(), "C");
    }

    #[test]
    fn test_cursor_blinks_every_half_second() {
        let clock = FakeClock::new();
        let mut tw = Typewriter::new(words(&["AB"]), TypewriterTimings::default()).unwrap();
        tw.mount(clock.now());
        assert!(tw.cursor_visible());

        clock.advance_ms(499);
        tw.update(clock.now());
        assert!(tw.cursor_visible());
        clock.advance_ms(1);
        tw.update(clock.now());
        assert!(!tw.cursor_visible());
        clock.advance_ms(500);
        tw.update(clock.now());
        assert!(tw.cursor_visible());
    }

    #[test]
    fn test_multibyte_prefixes() {
        let clock = FakeClock::new();
        let mut tw = Typewriter::new(words(&["né"]), timings(100, 50, 0)).unwrap();
        tw.mount(clock.now());
        clock.advance_ms(100);
        tw.update(clock.now());
        assert_eq!(tw.visible_text(), "n");
        clock.advance_ms(100);
        tw.update(clock.now());
        assert_eq!(tw.visible_text(), "né");
    }

    #[test]
    fn test_no_mutation_after_unmount() {
        let clock = FakeClock::new();
        let mut tw = Typewriter::new(words(&["AB", "C"]), timings(100, 50, 0)).unwrap();
        tw.mount(clock.now());
        clock.advance_ms(100);
        tw.update(clock.now());
        assert_eq!(tw.visible_text(), "A");

        tw.unmount();
        assert_eq!(tw.next_deadline(), None);
        clock.advance_ms(10_000);
        tw.update(clock.now());
        assert_eq!(tw.visible_text(), "A");
        assert_eq!(tw.word_index(), 0);
        assert!(tw.cursor_visible());
    }

    #[test]
    fn test_empty_word_list_rejected() {
        let result = Typewriter::new(Vec::new(), TypewriterTimings::default());
        assert!(matches!(result, Err(TypewriterError::NoWords)));
    }

    #[test]
    fn test_zero_blink_rejected() {
        let mut t = timings(100, 50, 2000);
        t.blink = Duration::ZERO;
        let result = Typewriter::new(words(&["AB"]), t);
        assert_eq!(result.err(), Some(TypewriterError::ZeroPeriod("blink")));
    }

    #[test]
    fn test_zero_step_periods_rejected() {
        let result = Typewriter::new(words(&["AB"]), timings(0, 0, 0));
        assert_eq!(result.err(), Some(TypewriterError::ZeroPeriod("speed")));
        let result = Typewriter::new(words(&["AB"]), timings(100, 0, 0));
        assert_eq!(result.err(), Some(TypewriterError::ZeroPeriod("delete speed")));
    }

    #[test]
    fn test_zero_pause_still_cycles() {
        let clock = FakeClock::new();
        let mut tw = Typewriter::new(words(&["AB"]), timings(100, 50, 0)).unwrap();
        tw.mount(clock.now());
        clock.advance_ms(1_000);
        tw.update(clock.now());
        assert!(tw.is_mounted());
        assert!(tw.next_deadline().is_some_and(|due| due > clock.now()));
    }
}
