// SPDX-License-Identifier: MPL-2.0
//! End-to-end toast lifetimes driven by real Tokio timers on a paused clock.

use std::time::Duration;
use toastline::ui::notifications::{
    Category, Expirations, Manager, Request, TokioScheduler,
};

/// Feeds every timer that already fired back into the manager.
fn drain(manager: &mut Manager<TokioScheduler>, expirations: &mut Expirations) -> usize {
    let mut expired = 0;
    while let Some(id) = expirations.try_next() {
        if manager.expire(id) {
            expired += 1;
        }
    }
    expired
}

async fn advance_ms(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

#[tokio::test(start_paused = true)]
async fn toast_expires_after_default_duration() {
    let (scheduler, mut expirations) = TokioScheduler::new();
    let mut manager = Manager::new(scheduler);

    let id = manager.create(Request::success("Saved")).expect("created");
    let toast = manager.get(id).expect("visible");
    assert_eq!(toast.message(), "Saved");
    assert_eq!(toast.category(), Category::Success);
    assert_eq!(toast.duration(), Duration::from_millis(3000));

    advance_ms(2999).await;
    assert_eq!(drain(&mut manager, &mut expirations), 0);
    assert!(manager.contains(id));

    advance_ms(2).await;
    assert_eq!(drain(&mut manager, &mut expirations), 1);
    assert!(manager.is_empty());
}

#[tokio::test(start_paused = true)]
async fn negative_duration_schedules_nothing() {
    let (scheduler, mut expirations) = TokioScheduler::new();
    let mut manager = Manager::new(scheduler);

    assert!(manager
        .create(Request::error("x").duration_ms(-1))
        .is_none());
    assert!(manager.is_empty());

    advance_ms(10_000).await;
    assert!(expirations.try_next().is_none());
}

#[tokio::test(start_paused = true)]
async fn early_dismissal_cancels_the_timer() {
    let (scheduler, mut expirations) = TokioScheduler::new();
    let mut manager = Manager::new(scheduler);

    let a = manager.create(Request::info("A")).expect("created");
    let b = manager
        .create(Request::warning("B").duration_ms(10_000))
        .expect("created");

    advance_ms(1000).await;
    assert!(manager.dismiss(a));
    assert_eq!(manager.notifications().map(|n| n.id()).collect::<Vec<_>>(), vec![b]);

    // A's timer would have fired at 3000 ms had it not been aborted.
    advance_ms(5000).await;
    assert!(expirations.try_next().is_none());
    assert!(manager.contains(b));

    advance_ms(4001).await;
    assert_eq!(drain(&mut manager, &mut expirations), 1);
    assert!(manager.is_empty());
}

#[tokio::test(start_paused = true)]
async fn toasts_stay_in_creation_order_as_others_expire() {
    let (scheduler, mut expirations) = TokioScheduler::new();
    let mut manager = Manager::new(scheduler);

    let first = manager
        .create(Request::info("first").duration_ms(5000))
        .expect("created");
    let middle = manager
        .create(Request::info("middle").duration_ms(1000))
        .expect("created");
    let last = manager
        .create(Request::info("last").duration_ms(5000))
        .expect("created");
    assert!(first < middle && middle < last);

    advance_ms(1001).await;
    assert_eq!(drain(&mut manager, &mut expirations), 1);

    let messages: Vec<_> = manager.notifications().map(|n| n.message()).collect();
    assert_eq!(messages, ["first", "last"]);
}

#[tokio::test(start_paused = true)]
async fn zero_duration_expires_on_next_tick() {
    let (scheduler, mut expirations) = TokioScheduler::new();
    let mut manager = Manager::new(scheduler);

    let id = manager
        .create(Request::info("blink").duration_ms(0))
        .expect("created");
    assert!(manager.contains(id));

    advance_ms(1).await;
    assert_eq!(drain(&mut manager, &mut expirations), 1);
    assert!(manager.is_empty());
}

#[tokio::test(start_paused = true)]
async fn subscribers_observe_each_change() {
    let (scheduler, mut expirations) = TokioScheduler::new();
    let mut manager = Manager::new(scheduler);
    let mut receiver = manager.subscribe();
    assert!(receiver.borrow_and_update().is_empty());

    manager.create(Request::success("Saved"));
    receiver.changed().await.expect("manager alive");
    assert_eq!(receiver.borrow_and_update().len(), 1);

    advance_ms(3001).await;
    drain(&mut manager, &mut expirations);
    receiver.changed().await.expect("manager alive");
    assert!(receiver.borrow_and_update().is_empty());
}

#[tokio::test(start_paused = true)]
async fn dropping_the_manager_aborts_pending_timers() {
    let (scheduler, mut expirations) = TokioScheduler::new();
    let mut manager = Manager::new(scheduler);
    manager.create(Request::info("A"));
    manager.create(Request::info("B").duration_ms(50));

    drop(manager);
    advance_ms(5000).await;

    assert!(expirations.try_next().is_none());
    // Aborted tasks release their sender clones, closing the channel.
    assert!(expirations.next().await.is_none());
}
