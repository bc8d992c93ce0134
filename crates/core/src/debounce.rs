//! Coalescing bursts of resize events into one delayed rebuild.

/// Default quiet period before a resize-triggered rebuild runs.
pub const RESIZE_DEBOUNCE_MS: f64 = 250.0;

/// Handle for one scheduled run. Only the newest ticket can settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Pending {
    generation: u64,
    due_ms: f64,
}

/// Debounce state owned by the resize handler.
///
/// Every [`schedule`](Self::schedule) supersedes the previous pending run;
/// the caller arms a timer for [`delay_ms`](Self::delay_ms) and, when it
/// fires, asks [`settle`](Self::settle) whether the run is still current.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay_ms: f64,
    generation: u64,
    pending: Option<Pending>,
}

impl Debouncer {
    pub fn new(delay_ms: f64) -> Self {
        Self {
            delay_ms,
            generation: 0,
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> f64 {
        self.delay_ms
    }

    /// Register a trigger at `now_ms`, cancelling any pending run.
    pub fn schedule(&mut self, now_ms: f64) -> Ticket {
        self.generation += 1;
        self.pending = Some(Pending {
            generation: self.generation,
            due_ms: now_ms + self.delay_ms,
        });
        Ticket {
            generation: self.generation,
        }
    }

    /// When the pending run is due, if any.
    pub fn due_ms(&self) -> Option<f64> {
        self.pending.map(|p| p.due_ms)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Consume the pending run if `ticket` is the newest one. Stale or
    /// already-settled tickets return `false`.
    pub fn settle(&mut self, ticket: Ticket) -> bool {
        match self.pending {
            Some(p) if p.generation == ticket.generation => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(RESIZE_DEBOUNCE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays timer expiries in due order, like a browser event loop.
    fn run_timers(debouncer: &mut Debouncer, mut timers: Vec<(f64, Ticket)>) -> Vec<f64> {
        timers.sort_by(|a, b| a.0.total_cmp(&b.0));
        timers
            .into_iter()
            .filter(|(_, ticket)| debouncer.settle(*ticket))
            .map(|(at, _)| at)
            .collect()
    }

    #[test]
    fn burst_runs_once_after_last_event() {
        let mut debouncer = Debouncer::default();
        let timers: Vec<(f64, Ticket)> = [0.0, 25.0, 50.0, 75.0, 100.0]
            .into_iter()
            .map(|t| (t + debouncer.delay_ms(), debouncer.schedule(t)))
            .collect();
        assert_eq!(debouncer.due_ms(), Some(350.0));

        let runs = run_timers(&mut debouncer, timers);
        assert_eq!(runs, vec![350.0]);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn separate_quiet_periods_each_run() {
        let mut debouncer = Debouncer::new(250.0);
        let first = debouncer.schedule(0.0);
        assert!(debouncer.settle(first));
        let second = debouncer.schedule(1_000.0);
        assert!(debouncer.settle(second));
    }

    #[test]
    fn settled_ticket_does_not_fire_twice() {
        let mut debouncer = Debouncer::default();
        let ticket = debouncer.schedule(0.0);
        assert!(debouncer.settle(ticket));
        assert!(!debouncer.settle(ticket));
    }

    #[test]
    fn stale_ticket_is_ignored() {
        let mut debouncer = Debouncer::default();
        let stale = debouncer.schedule(0.0);
        let fresh = debouncer.schedule(10.0);
        assert!(!debouncer.settle(stale));
        assert!(debouncer.is_pending());
        assert!(debouncer.settle(fresh));
    }
}
