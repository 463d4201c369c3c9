//! Unit tests for the shared tracker adapter.

use crate::game::adapters::{SharedTracker, ThreadRngBonus};
use crate::game::domain::GestureKind;
use crate::game::services::ProgressTracker;
use eyre::{ensure, eyre};
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use std::sync::Arc;
use std::thread;

type TestShared = SharedTracker<DefaultClock, ThreadRngBonus>;

#[fixture]
fn shared() -> TestShared {
    SharedTracker::new(ProgressTracker::new(
        Arc::new(DefaultClock),
        Arc::new(ThreadRngBonus),
    ))
}

#[rstest]
fn clones_share_the_same_session(shared: TestShared) -> eyre::Result<()> {
    let writer = shared.clone();
    writer.add_points(25)?;

    ensure!(shared.points()? == 25);
    Ok(())
}

#[rstest]
fn concurrent_gestures_apply_atomically(shared: TestShared) -> eyre::Result<()> {
    let mut handles = Vec::new();
    for _ in 0..10 {
        let handle = shared.clone();
        handles.push(thread::spawn(move || {
            handle.record_gesture(GestureKind::Tap)
        }));
    }
    for handle in handles {
        let outcome = handle.join().map_err(|_| eyre!("worker panicked"))?;
        outcome?;
    }

    let snapshot = shared.snapshot()?;
    let tap = snapshot
        .tasks
        .iter()
        .find(|task| task.kind() == GestureKind::Tap)
        .ok_or_else(|| eyre!("tap task missing"))?;
    ensure!(tap.progress() == 10, "no tap increment may be lost");
    ensure!(tap.is_completed());
    ensure!(snapshot.stage.index() == 1);
    Ok(())
}

#[rstest]
fn snapshot_reflects_the_latest_committed_update(shared: TestShared) -> eyre::Result<()> {
    shared.record_gesture(GestureKind::Pinch)?;
    let before = shared.snapshot()?;
    ensure!(before.points == 0);
    ensure!(before.stage.index() == 1);

    shared.add_points(10)?;
    let after = shared.snapshot()?;
    ensure!(after.points == 10);
    ensure!(after.stage.index() == 1);
    Ok(())
}
