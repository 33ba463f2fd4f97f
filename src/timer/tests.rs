use super::*;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Kind {
    A,
    B,
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn one_shot_fires_once_at_deadline() {
    let t0 = Instant::now();
    let mut timers = Timers::new();
    let h = timers.schedule_once(Kind::A, t0, ms(500));

    assert!(timers.pop_due(t0 + ms(499)).is_none());
    let fired = timers.pop_due(t0 + ms(500)).unwrap();
    assert_eq!(fired.handle, h);
    assert_eq!(fired.kind, Kind::A);
    assert!(timers.pop_due(t0 + ms(10_000)).is_none());
    assert!(!timers.is_active(h));
}

#[test]
fn repeating_task_reschedules_by_period() {
    let t0 = Instant::now();
    let mut timers = Timers::new();
    timers.schedule_repeating(Kind::A, t0, ms(100));

    // Far behind: every missed period is handed out, one at a time.
    let mut dues = Vec::new();
    while let Some(f) = timers.pop_due(t0 + ms(350)) {
        dues.push(f.due - t0);
    }
    assert_eq!(dues, vec![ms(100), ms(200), ms(300)]);
    assert_eq!(timers.next_deadline(), Some(t0 + ms(400)));
}

#[test]
fn cancel_removes_pending_task() {
    let t0 = Instant::now();
    let mut timers = Timers::new();
    let h = timers.schedule_once(Kind::A, t0, ms(10));
    assert!(timers.cancel(h));
    assert!(!timers.cancel(h));
    assert!(timers.pop_due(t0 + ms(20)).is_none());
}

#[test]
fn earliest_deadline_first_then_creation_order() {
    let t0 = Instant::now();
    let mut timers = Timers::new();
    timers.schedule_once(Kind::B, t0, ms(20));
    timers.schedule_once(Kind::A, t0, ms(10));
    timers.schedule_once(Kind::B, t0, ms(10));

    let order: Vec<Kind> = std::iter::from_fn(|| timers.pop_due(t0 + ms(30)))
        .map(|f| f.kind)
        .collect();
    assert_eq!(order, vec![Kind::A, Kind::B, Kind::B]);
}

#[test]
fn slot_replace_cancels_previous_task() {
    let t0 = Instant::now();
    let mut timers = Timers::new();
    let mut slot = TimerSlot::default();

    let first = timers.schedule_once(Kind::A, t0, ms(100));
    slot.replace(&mut timers, first);
    let second = timers.schedule_once(Kind::A, t0, ms(200));
    slot.replace(&mut timers, second);

    assert!(!timers.is_active(first));
    assert!(slot.holds(second));
    assert_eq!(timers.len(), 1);

    slot.clear(&mut timers);
    assert!(timers.is_empty());
    assert!(!slot.is_armed());
}

#[test]
fn handler_cancelling_a_due_task_prevents_it_from_firing() {
    let t0 = Instant::now();
    let mut timers = Timers::new();
    let _first = timers.schedule_once(Kind::A, t0, ms(10));
    let second = timers.schedule_once(Kind::B, t0, ms(10));

    let f = timers.pop_due(t0 + ms(10)).unwrap();
    assert_eq!(f.kind, Kind::A);
    // The A handler cancels B, which was also due.
    timers.cancel(second);
    assert!(timers.pop_due(t0 + ms(10)).is_none());
}

#[test]
fn zero_period_still_advances() {
    let t0 = Instant::now();
    let mut timers = Timers::new();
    timers.schedule_repeating(Kind::A, t0, Duration::ZERO);
    assert!(timers.pop_due(t0 + ms(1)).is_some());
    assert!(timers.pop_due(t0 + ms(1)).is_none());
}
