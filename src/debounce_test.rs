use super::*;

const QUIET: Duration = Duration::from_millis(3000);

#[test]
fn new_slot_is_empty() {
    let d: Debouncer<u32> = Debouncer::new(QUIET);
    assert!(!d.is_armed());
    assert_eq!(d.deadline(), None);
    assert_eq!(d.quiet_period(), QUIET);
}

#[test]
fn arm_sets_deadline_one_quiet_period_out() {
    let now = Instant::now();
    let mut d = Debouncer::new(QUIET);
    assert_eq!(d.arm(1, now), None);
    assert_eq!(d.deadline(), Some(now + QUIET));
}

#[test]
fn not_due_before_quiet_period() {
    let now = Instant::now();
    let mut d = Debouncer::new(QUIET);
    d.arm(1, now);
    assert_eq!(d.take_due(now + Duration::from_millis(2999)), None);
    assert!(d.is_armed());
}

#[test]
fn due_at_deadline_and_clears_slot() {
    let now = Instant::now();
    let mut d = Debouncer::new(QUIET);
    d.arm(7, now);
    assert_eq!(d.take_due(now + QUIET), Some(7));
    assert!(!d.is_armed());
    assert_eq!(d.take_due(now + QUIET * 2), None);
}

#[test]
fn rearm_supersedes_and_restarts_timer() {
    let now = Instant::now();
    let mut d = Debouncer::new(QUIET);
    d.arm(1, now);
    let later = now + Duration::from_millis(2000);
    assert_eq!(d.arm(2, later), Some(1));
    assert_eq!(d.take_due(now + QUIET), None);
    assert_eq!(d.take_due(later + QUIET), Some(2));
}

#[test]
fn cancel_drops_pending_value() {
    let now = Instant::now();
    let mut d = Debouncer::new(QUIET);
    d.arm(5, now);
    assert_eq!(d.cancel(), Some(5));
    assert_eq!(d.take_due(now + QUIET), None);
    assert_eq!(d.cancel(), None);
}
