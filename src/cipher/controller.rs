use gloo_timers::callback::Timeout;
use log::{debug, info};
use rand::Rng;

use super::gate::MediaGate;
use super::state::{PuzzleState, TapOutcome};

/// One-shot scheduler. Dropping the returned handle cancels the task.
pub trait Timer {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// `setTimeout` through gloo.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

/// Owns the puzzle for a page session and opens the media gate once it is
/// solved. A reset before the open delay elapses cancels the open.
pub struct CipherController<G, T: Timer, R> {
    state: PuzzleState,
    gate: G,
    timer: T,
    rng: R,
    unlock_delay_ms: u32,
    pending_open: Option<T::Handle>,
}

impl<G, T, R> CipherController<G, T, R>
where
    G: MediaGate + Clone + 'static,
    T: Timer,
    R: Rng,
{
    pub fn new(mut state: PuzzleState, gate: G, timer: T, mut rng: R, unlock_delay_ms: u32) -> Self {
        state.shuffle(&mut rng);
        Self {
            state,
            gate,
            timer,
            rng,
            unlock_delay_ms,
            pending_open: None,
        }
    }

    pub fn state(&self) -> &PuzzleState {
        &self.state
    }

    pub fn set_gate(&mut self, gate: G) {
        self.gate = gate;
    }

    /// `position` is the tile's display slot, only used for logging here.
    pub fn tap(&mut self, ch: char, position: usize) -> TapOutcome {
        let outcome = self.state.tap(ch);
        match outcome {
            TapOutcome::Ignored => {}
            TapOutcome::Advanced => debug!("Tile {} '{}' accepted", position, ch),
            TapOutcome::Rejected => debug!("Tile {} '{}' broke the sequence", position, ch),
            TapOutcome::Unlocked => {
                info!("Cipher solved, opening video in {}ms", self.unlock_delay_ms);
                let gate = self.gate.clone();
                self.pending_open = Some(
                    self.timer
                        .schedule(self.unlock_delay_ms, Box::new(move || gate.open())),
                );
            }
        }
        outcome
    }

    pub fn reset(&mut self) {
        if self.pending_open.take().is_some() {
            debug!("Dropped pending video open");
        }
        self.state.shuffle(&mut self.rng);
        debug!("Reshuffled {} tiles", self.state.tile_set().len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    struct Scheduled {
        delay_ms: u32,
        task: Option<Box<dyn FnOnce()>>,
        cancelled: Rc<Cell<bool>>,
    }

    #[derive(Clone, Default)]
    struct ManualTimer {
        queue: Rc<RefCell<Vec<Scheduled>>>,
    }

    struct ManualHandle(Rc<Cell<bool>>);

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    impl Timer for ManualTimer {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
            let cancelled = Rc::new(Cell::new(false));
            self.queue.borrow_mut().push(Scheduled {
                delay_ms,
                task: Some(task),
                cancelled: cancelled.clone(),
            });
            ManualHandle(cancelled)
        }
    }

    impl ManualTimer {
        fn fire_all(&self) {
            let due: Vec<Box<dyn FnOnce()>> = self
                .queue
                .borrow_mut()
                .iter_mut()
                .filter(|s| !s.cancelled.get())
                .filter_map(|s| s.task.take())
                .collect();
            for task in due {
                task();
            }
        }

        fn delays(&self) -> Vec<u32> {
            self.queue.borrow().iter().map(|s| s.delay_ms).collect()
        }
    }

    #[derive(Clone, Default)]
    struct CountingGate {
        opened: Rc<Cell<u32>>,
    }

    impl MediaGate for CountingGate {
        fn open(&self) {
            self.opened.set(self.opened.get() + 1);
        }

        fn close(&self) {}
    }

    fn controller() -> (CipherController<CountingGate, ManualTimer, StdRng>, ManualTimer, CountingGate) {
        let timer = ManualTimer::default();
        let gate = CountingGate::default();
        let state = PuzzleState::new("CAT", "CATXY").unwrap();
        let controller = CipherController::new(
            state,
            gate.clone(),
            timer.clone(),
            StdRng::seed_from_u64(1),
            900,
        );
        (controller, timer, gate)
    }

    fn solve(controller: &mut CipherController<CountingGate, ManualTimer, StdRng>) -> TapOutcome {
        let mut last = TapOutcome::Ignored;
        for (i, ch) in "CAT".chars().enumerate() {
            last = controller.tap(ch, i);
        }
        last
    }

    #[test]
    fn unlock_opens_gate_after_delay() {
        let (mut controller, timer, gate) = controller();
        assert_eq!(solve(&mut controller), TapOutcome::Unlocked);
        assert_eq!(gate.opened.get(), 0);
        assert_eq!(timer.delays(), vec![900]);

        timer.fire_all();
        assert_eq!(gate.opened.get(), 1);

        timer.fire_all();
        assert_eq!(gate.opened.get(), 1);
    }

    #[test]
    fn reset_before_delay_cancels_open() {
        let (mut controller, timer, gate) = controller();
        solve(&mut controller);
        controller.reset();
        timer.fire_all();
        assert_eq!(gate.opened.get(), 0);
        assert!(!controller.state().is_unlocked());
        assert_eq!(controller.state().attempt(), "");
    }

    #[test]
    fn taps_after_unlock_schedule_nothing() {
        let (mut controller, timer, _gate) = controller();
        solve(&mut controller);
        assert_eq!(controller.tap('C', 0), TapOutcome::Ignored);
        assert_eq!(timer.delays().len(), 1);
    }

    #[test]
    fn rejected_tap_schedules_nothing() {
        let (mut controller, timer, gate) = controller();
        controller.tap('C', 0);
        assert_eq!(controller.tap('X', 3), TapOutcome::Rejected);
        timer.fire_all();
        assert!(timer.delays().is_empty());
        assert_eq!(gate.opened.get(), 0);
    }

    #[test]
    fn solving_again_after_reset_opens_again() {
        let (mut controller, timer, gate) = controller();
        solve(&mut controller);
        timer.fire_all();
        controller.reset();
        assert_eq!(solve(&mut controller), TapOutcome::Unlocked);
        timer.fire_all();
        assert_eq!(gate.opened.get(), 2);
    }

    #[test]
    fn swapped_gate_receives_later_opens() {
        let (mut controller, timer, old_gate) = controller();
        let new_gate = CountingGate::default();
        controller.set_gate(new_gate.clone());
        solve(&mut controller);
        timer.fire_all();
        assert_eq!(old_gate.opened.get(), 0);
        assert_eq!(new_gate.opened.get(), 1);
    }

    #[test]
    fn construction_shuffles_tiles_into_a_permutation() {
        let (controller, _timer, _gate) = controller();
        let mut tiles = controller.state().tiles().to_vec();
        tiles.sort_unstable();
        assert_eq!(tiles, vec!['A', 'C', 'T', 'X', 'Y']);
    }
}
