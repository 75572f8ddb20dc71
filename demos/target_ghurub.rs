use hilal::display::SnapshotDisplay;
use hilal::engine::HilalEngine;
use hilal::hilal_errors::HilalError;
use hilal::time::TARGET_GHURUB_UTC;

/// Evaluate the built-in sunset target at Gorontalo and at a few neighbouring evenings.
fn main() -> Result<(), HilalError> {
    let engine = HilalEngine::default();

    let target = engine.snapshot_at_str(TARGET_GHURUB_UTC)?;
    println!("{}\n", SnapshotDisplay::new(&target, &engine));

    for day in 18..=20 {
        let instant = format!("2026-02-{day}T10:05:00");
        let snap = engine.snapshot_at_str(&instant)?;
        println!(
            "{} | moon alt {:>8.4}° | elongation {:>8.4}° | {}",
            engine.local_time(&snap),
            snap.moon.altitude,
            snap.elongation,
            snap.verdict
        );
    }

    Ok(())
}
