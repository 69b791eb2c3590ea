use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use backtrack_match::{matches, Config, Error, Matcher, PlusStrategy};

const RUN: &str = "aaaaaaaaaaaaaaaaaaaaaab";
const LIMIT: Duration = Duration::from_secs(60);

/// Run `f` on its own thread; `None` if it did not finish in time.
fn within<T, F>(limit: Duration, f: F) -> Option<T>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(f());
    });
    rx.recv_timeout(limit).ok()
}

#[test]
fn stacked_plus_matches_leading_run() {
    let result = within(LIMIT, || matches("a+a+a+a+a+a+a+a+", RUN));
    assert_eq!(result, Some(true));
}

#[test]
fn end_anchored_stacked_plus_fails() {
    let result = within(LIMIT, || matches("^a+a+a+a+a+a+a+a+$", RUN));
    assert_eq!(result, Some(false));
}

#[test]
fn end_anchored_stacked_plus_fails_lazily() {
    let result = within(LIMIT, || {
        Matcher::with_config(
            "^a+a+a+a+a+a+a+a+$",
            Config::new().with_plus_strategy(PlusStrategy::Lazy),
        )
        .is_match(RUN)
    });
    assert_eq!(result, Some(false));
}

#[test]
fn step_budget_cuts_the_search_short() {
    let matcher = Matcher::with_config(
        "a+a+a+a+a+a+a+a+a+a+a+$",
        Config::new().with_step_budget(Some(50_000)),
    );
    let result = within(LIMIT, move || matcher.try_is_match(RUN));
    assert_eq!(result, Some(Err(Error::BudgetExhausted { limit: 50_000 })));
}

#[test]
fn stacked_star_fails_within_limit() {
    let result = within(LIMIT, || matches("^a*a*a*a*a*a*c", RUN));
    assert_eq!(result, Some(false));
}
