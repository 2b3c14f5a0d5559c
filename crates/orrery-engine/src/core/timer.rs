/// Handle to a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Pending<T> {
    id: TimerId,
    fire_at: f64,
    payload: T,
}

/// One-shot, cancellable timers for a single-threaded frame loop.
///
/// Nothing ever blocks: a timer is a deadline plus a payload, and the owner
/// polls `due(now)` once per tick to collect the payloads whose deadline has
/// passed. Times are in seconds on the same clock the frame loop uses.
#[derive(Debug)]
pub struct Timers<T> {
    next_id: u64,
    pending: Vec<Pending<T>>,
}

impl<T> Timers<T> {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            pending: Vec::new(),
        }
    }

    /// Schedule `payload` to fire `delay` seconds after `now`.
    pub fn schedule(&mut self, now: f64, delay: f64, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            id,
            fire_at: now + delay.max(0.0),
            payload,
        });
        id
    }

    /// Cancel a pending timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.pending.iter().position(|p| p.id == id) {
            Some(idx) => {
                self.pending.swap_remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|p| p.id == id)
    }

    /// Remove and return every payload whose deadline is at or before `now`,
    /// earliest first.
    pub fn due(&mut self, now: f64) -> Vec<T> {
        if self.pending.iter().all(|p| p.fire_at > now) {
            return Vec::new();
        }
        let (mut fired, rest): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|p| p.fire_at <= now);
        self.pending = rest;
        fired.sort_by(|a, b| a.fire_at.total_cmp(&b.fire_at).then(a.id.0.cmp(&b.id.0)));
        fired.into_iter().map(|p| p.payload).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<T> Default for Timers<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_only_after_deadline() {
        let mut timers = Timers::new();
        timers.schedule(1.0, 0.2, "hide");
        assert!(timers.due(1.1).is_empty());
        assert!(timers.due(1.19).is_empty());
        assert_eq!(timers.due(1.25), vec!["hide"]);
        assert!(timers.is_empty());
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut timers = Timers::new();
        let id = timers.schedule(0.0, 0.2, 1u32);
        assert!(timers.is_pending(id));
        assert!(timers.cancel(id));
        assert!(!timers.is_pending(id));
        assert!(!timers.cancel(id));
        assert!(timers.due(10.0).is_empty());
    }

    #[test]
    fn due_returns_earliest_first() {
        let mut timers = Timers::new();
        timers.schedule(0.0, 0.5, 'b');
        timers.schedule(0.0, 0.1, 'a');
        timers.schedule(0.0, 5.0, 'c');
        assert_eq!(timers.due(1.0), vec!['a', 'b']);
        assert_eq!(timers.len(), 1);
    }

    #[test]
    fn negative_delay_fires_immediately() {
        let mut timers = Timers::new();
        timers.schedule(2.0, -1.0, ());
        assert_eq!(timers.due(2.0).len(), 1);
    }
}
