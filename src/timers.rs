use crate::clock::Millis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Entry<E> {
    id: TimerId,
    due: Millis,
    period: Option<Millis>,
    event: E,
}

#[derive(Debug)]
pub struct Timers<E> {
    next_id: u64,
    entries: Vec<Entry<E>>,
}

impl<E> Default for Timers<E> {
    fn default() -> Self {
        Self { next_id: 0, entries: Vec::new() }
    }
}

impl<E: Clone> Timers<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn once(&mut self, now: Millis, delay: Millis, event: E) -> TimerId {
        self.insert(now + delay, None, event)
    }

    // First firing at `now + period`; a zero period counts as 1 ms
    pub fn repeat(&mut self, now: Millis, period: Millis, event: E) -> TimerId {
        let period = period.max(1);
        self.insert(now + period, Some(period), event)
    }

    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // Earliest first. Repeating timers that fell behind fire once per missed period.
    pub fn drain_due(&mut self, now: Millis) -> Vec<E> {
        let mut fired: Vec<(Millis, TimerId, E)> = Vec::new();

        self.entries.retain_mut(|entry| {
            while entry.due <= now {
                fired.push((entry.due, entry.id, entry.event.clone()));
                match entry.period {
                    Some(period) => entry.due += period,
                    None => return false,
                }
            }
            true
        });

        fired.sort_by_key(|(due, id, _)| (*due, id.0));
        fired.into_iter().map(|(_, _, event)| event).collect()
    }

    fn insert(&mut self, due: Millis, period: Option<Millis>, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, due, period, event });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn one_shot_fires_once() {
        let mut timers = Timers::new();
        timers.once(0, 150, "resume");
        assert!(timers.drain_due(149).is_empty());
        assert_eq!(timers.drain_due(150), vec!["resume"]);
        assert!(timers.drain_due(1_000).is_empty());
        assert!(timers.is_empty());
    }

    #[test]
    fn repeating_timer_catches_up_in_order() {
        let mut timers = Timers::new();
        timers.repeat(0, 4_000, "advance");
        timers.once(0, 5_000, "resume");
        assert_eq!(timers.drain_due(8_000), vec!["advance", "resume", "advance"]);
        assert_eq!(timers.len(), 1);
    }

    #[test]
    fn cancel_removes_only_that_timer() {
        let mut timers = Timers::new();
        let a = timers.repeat(0, 100, 1);
        timers.once(0, 100, 2);
        assert!(timers.cancel(a));
        assert!(!timers.cancel(a));
        assert_eq!(timers.len(), 1);
        assert_eq!(timers.drain_due(100), vec![2]);
    }

    #[test]
    fn clear_drops_everything() {
        let mut timers = Timers::new();
        timers.repeat(0, 10, ());
        timers.once(0, 10, ());
        timers.clear();
        assert!(timers.drain_due(1_000).is_empty());
    }
}
