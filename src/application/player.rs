use crate::domain::{Snapshot, SnapshotSequence};

/// SequencePlayer owns playback over the received generation sequence:
/// the current index, the auto-cycle flag, and the accumulator driving
/// the periodic auto advance.
///
/// The accumulator is the cancellable timer: it is reset and held at
/// zero whenever auto-cycle is off or the sequence is empty, so no
/// stale tick can move the index, and dropping the player tears the
/// timer down with it.
pub struct SequencePlayer {
    sequence: SnapshotSequence,
    current_index: usize,
    auto_cycle: bool,
    cycle_timer: f32,
    period: f32,
}

impl SequencePlayer {
    /// Start playback at index 0 with auto-cycle on.
    pub fn new(sequence: SnapshotSequence, period_ms: u64) -> Self {
        Self {
            sequence,
            current_index: 0,
            auto_cycle: true,
            cycle_timer: 0.0,
            period: period_ms as f32 / 1000.0,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn auto_cycle(&self) -> bool {
        self.auto_cycle
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// The snapshot under the current index; None when the sequence is
    /// empty.
    pub fn current_snapshot(&self) -> Option<&Snapshot> {
        self.sequence.get(self.current_index)
    }

    fn advance(&mut self) {
        let len = self.sequence.len();
        if len > 0 {
            self.current_index = (self.current_index + 1) % len;
        }
    }

    fn retreat(&mut self) {
        let len = self.sequence.len();
        if len > 0 {
            self.current_index = (self.current_index + len - 1) % len;
        }
    }

    /// Manual forward navigation. Always turns auto-cycle off.
    pub fn next(&mut self) {
        self.auto_cycle = false;
        self.cycle_timer = 0.0;
        self.advance();
    }

    /// Manual backward navigation. Always turns auto-cycle off.
    pub fn previous(&mut self) {
        self.auto_cycle = false;
        self.cycle_timer = 0.0;
        self.retreat();
    }

    /// Flip auto-cycle without moving the index.
    pub fn toggle_auto_cycle(&mut self) {
        self.auto_cycle = !self.auto_cycle;
        self.cycle_timer = 0.0;
    }

    /// Accumulate frame time and auto-advance once per period while
    /// auto-cycle is on and the sequence is non-empty.
    pub fn tick(&mut self, delta_time: f32) {
        if !self.auto_cycle || self.sequence.is_empty() {
            self.cycle_timer = 0.0;
            return;
        }
        self.cycle_timer += delta_time;
        if self.cycle_timer >= self.period {
            self.advance();
            self.cycle_timer = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Point, Snapshot};

    fn sequence_of(len: usize) -> SnapshotSequence {
        SnapshotSequence::new(
            (0..len)
                .map(|i| Snapshot::new(vec![Point::new(i as u32, 0)]))
                .collect(),
        )
    }

    #[test]
    fn test_starts_at_zero_with_auto_cycle_on() {
        let player = SequencePlayer::new(sequence_of(4), 200);
        assert_eq!(player.current_index(), 0);
        assert!(player.auto_cycle());
    }

    #[test]
    fn test_advancing_len_times_cycles_back() {
        let mut player = SequencePlayer::new(sequence_of(5), 200);
        for _ in 0..5 {
            player.advance();
        }
        assert_eq!(player.current_index(), 0);
    }

    #[test]
    fn test_retreat_then_advance_restores_index() {
        let mut player = SequencePlayer::new(sequence_of(4), 200);
        player.advance();
        player.advance();
        let start = player.current_index();
        player.retreat();
        player.advance();
        assert_eq!(player.current_index(), start);
    }

    #[test]
    fn test_retreat_from_zero_wraps_to_last() {
        let mut player = SequencePlayer::new(sequence_of(3), 200);
        player.previous();
        assert_eq!(player.current_index(), 2);
    }

    #[test]
    fn test_manual_navigation_turns_auto_cycle_off() {
        let mut player = SequencePlayer::new(sequence_of(3), 200);
        assert!(player.auto_cycle());
        player.next();
        assert!(!player.auto_cycle());

        player.toggle_auto_cycle();
        assert!(player.auto_cycle());
        player.previous();
        assert!(!player.auto_cycle());
    }

    #[test]
    fn test_toggle_flips_without_moving_index() {
        let mut player = SequencePlayer::new(sequence_of(3), 200);
        player.next();
        let index = player.current_index();
        player.toggle_auto_cycle();
        assert!(player.auto_cycle());
        assert_eq!(player.current_index(), index);
    }

    #[test]
    fn test_tick_advances_once_per_period() {
        let mut player = SequencePlayer::new(sequence_of(4), 200);
        player.tick(0.1);
        assert_eq!(player.current_index(), 0);
        player.tick(0.1);
        assert_eq!(player.current_index(), 1);
        player.tick(0.25);
        assert_eq!(player.current_index(), 2);
    }

    #[test]
    fn test_tick_is_inert_while_auto_cycle_off() {
        let mut player = SequencePlayer::new(sequence_of(4), 200);
        player.toggle_auto_cycle();
        player.tick(5.0);
        assert_eq!(player.current_index(), 0);

        // Re-enabling starts from a fresh accumulator, not a stale one.
        player.toggle_auto_cycle();
        player.tick(0.1);
        assert_eq!(player.current_index(), 0);
    }

    #[test]
    fn test_empty_sequence_is_a_no_op_everywhere() {
        let mut player = SequencePlayer::new(SnapshotSequence::empty(), 200);
        player.next();
        player.previous();
        player.tick(1.0);
        assert_eq!(player.current_index(), 0);
        assert!(player.current_snapshot().is_none());
    }
}
