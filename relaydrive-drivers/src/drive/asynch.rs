//! Async move loop on an embassy ticker
//!
//! The cooperative alternative to [`DriveController::move_blocking`]: the
//! drive is polled once per tick and the executor runs other tasks in
//! between.
//!
//! ```ignore
//! #[embassy_executor::task]
//! async fn gate_task(mut gate: Gate) {
//!     let status = move_drive(&mut gate, Direction::Forward, Duration::from_millis(10)).await;
//!     info!("gate closed: {}", status);
//! }
//! ```
//!
//! [`DriveController::move_blocking`]: super::DriveController::move_blocking

use embassy_time::{Duration, Ticker};

use relaydrive_core::state::DriveStatus;
use relaydrive_core::traits::{Direction, DriveControl};

/// Poll a started drive every `period` until its move ends
pub async fn run_until_done<D: DriveControl>(drive: &mut D, period: Duration) -> DriveStatus {
    let mut ticker = Ticker::every(period);
    loop {
        let status = drive.step();
        if status.is_terminal() {
            return status;
        }
        ticker.next().await;
    }
}

/// Start a move in `dir` and poll it every `period` until it ends
pub async fn move_drive<D: DriveControl>(
    drive: &mut D,
    dir: Direction,
    period: Duration,
) -> DriveStatus {
    drive.set_direction(dir);
    drive.start();
    run_until_done(drive, period).await
}
