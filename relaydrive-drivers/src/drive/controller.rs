//! Drive controller
//!
//! Runs one move at a time toward a limit switch and stops the relays as
//! soon as the move ends. A move ends when, checked in this order on each
//! poll:
//!
//! 1. the limit switch for the current direction is pressed (`Ok`)
//! 2. the run-time ceiling has been exceeded (`Overtime`)
//! 3. the overcurrent latch trips (`Overload`)
//!
//! Reaching the limit therefore always wins over a timeout or overload
//! detected in the same poll.
//!
//! # Usage
//!
//! ```ignore
//! let mut drive = DriveController::new(outputs, switches, clock);
//! drive.set_max_run_time(20);
//! drive.enable_overload(&CURRENT, 4.0, 300)?;
//!
//! // Non-blocking, from the main loop:
//! drive.set_direction(Direction::Backward);
//! drive.start();
//! while drive.step() == DriveStatus::InProgress {
//!     // other work
//! }
//!
//! // Or blocking:
//! let status = drive.move_blocking(Direction::Forward, 0);
//! ```
//!
//! A direction without a wired limit switch can only end by timeout or
//! overload. With neither configured, a move in that direction never ends.

use heapless::String;

use relaydrive_core::config::{label_from_str, DriveConfig, MAX_LABEL_LEN};
use relaydrive_core::safety::{OverloadCheck, OverloadMonitor, OverloadSettings, RunTimer};
use relaydrive_core::state::DriveStatus;
use relaydrive_core::traits::{CurrentSource, Direction, DriveControl, DriveError, NoSensor};
use relaydrive_hal::{Clock, InputPin, Instant, OutputPin};

use super::limit::{LimitSwitch, LimitSwitches};
use super::outputs::RelayOutputs;

/// Overcurrent protection attached to a controller
struct Overload<S> {
    source: S,
    monitor: OverloadMonitor,
}

/// Polled limit-switch drive controller
pub struct DriveController<O, I, C, S = NoSensor> {
    label: String<MAX_LABEL_LEN>,
    outputs: RelayOutputs<O>,
    switches: LimitSwitches<I>,
    clock: C,
    direction: Direction,
    timer: RunTimer,
    /// None = protection disabled
    overload: Option<Overload<S>>,
    status: DriveStatus,
}

impl<O, I, C, S> DriveController<O, I, C, S>
where
    O: OutputPin,
    I: InputPin,
    C: Clock,
    S: CurrentSource,
{
    /// Create a controller with the relays released
    ///
    /// The direction defaults to forward, the run time is unlimited, and
    /// overload protection is disabled.
    pub fn new(mut outputs: RelayOutputs<O>, switches: LimitSwitches<I>, clock: C) -> Self {
        outputs.release();
        Self {
            label: String::new(),
            outputs,
            switches,
            clock,
            direction: Direction::Forward,
            timer: RunTimer::new(0),
            overload: None,
            status: DriveStatus::Ok,
        }
    }

    /// Create a controller from a config
    ///
    /// The switch idle levels come from `config`. `current` is required
    /// when the config enables overload protection and ignored otherwise.
    pub fn from_config(
        outputs: RelayOutputs<O>,
        forward_switch: Option<I>,
        backward_switch: Option<I>,
        clock: C,
        config: &DriveConfig,
        current: Option<S>,
    ) -> Result<Self, DriveError> {
        config.validate()?;

        let switches = LimitSwitches::new(
            LimitSwitch::from_option(forward_switch, config.forward_idle),
            LimitSwitch::from_option(backward_switch, config.backward_idle),
        );
        let mut drive = Self::new(outputs, switches, clock);
        drive.label = config.label.clone();
        drive.direction = config.direction;
        drive.timer.set_limit_s(config.max_run_time_s);

        if let Some(overload) = &config.overload {
            let source = current.ok_or(DriveError::MissingCurrentSource)?;
            drive.enable_overload(source, overload.max_current, overload.grace_ms)?;
        }

        Ok(drive)
    }

    /// Name used in log output
    pub fn label(&self) -> &str {
        self.label.as_str()
    }

    /// Set the name used in log output
    pub fn set_label(&mut self, label: &str) -> Result<(), DriveError> {
        self.label = label_from_str(label)?;
        Ok(())
    }

    /// Enable overcurrent protection
    ///
    /// The drive trips when `source` reads above `max_current` for at least
    /// `grace_ms` milliseconds. Replaces any source already attached.
    ///
    /// # Errors
    /// - [`DriveError::ZeroGracePeriod`] if `grace_ms` is zero
    /// - [`DriveError::InvalidThreshold`] if `max_current` is NaN or negative
    pub fn enable_overload(
        &mut self,
        source: S,
        max_current: f32,
        grace_ms: u32,
    ) -> Result<(), DriveError> {
        let settings = OverloadSettings::new(max_current, grace_ms)?;
        self.overload = Some(Overload {
            source,
            monitor: OverloadMonitor::new(settings),
        });
        Ok(())
    }

    /// Disable overcurrent protection, returning the detached source
    pub fn disable_overload(&mut self) -> Option<S> {
        self.overload.take().map(|o| o.source)
    }

    /// Check if overcurrent protection is enabled
    pub fn overload_enabled(&self) -> bool {
        self.overload.is_some()
    }

    /// Overcurrent thresholds, if protection is enabled
    pub fn overload_settings(&self) -> Option<&OverloadSettings> {
        self.overload.as_ref().map(|o| o.monitor.settings())
    }

    /// Release both relays, then energize the one for `dir`
    pub fn drive_outputs(&mut self, dir: Direction) {
        self.outputs.drive(dir);
    }

    /// Release both relays
    pub fn stop_outputs(&mut self) {
        self.outputs.release();
    }

    /// Direction currently energized, if any
    pub fn active_output(&self) -> Option<Direction> {
        self.outputs.active()
    }

    /// Check if the limit switch at the end of travel in `dir` is pressed
    pub fn read_limit_switch(&self, dir: Direction) -> bool {
        self.switches.is_pressed(dir)
    }

    /// Time the current move was started
    pub fn started_at(&self) -> Instant {
        self.timer.started_at()
    }

    /// Move in `dir` and block until the move ends
    ///
    /// A non-zero `max_time_s` replaces the run-time ceiling; zero keeps the
    /// configured one. Spins on [`DriveControl::step`] without yielding, so
    /// nothing else runs on this thread until the move ends.
    pub fn move_blocking(&mut self, dir: Direction, max_time_s: u32) -> DriveStatus {
        self.direction = dir;
        if max_time_s != 0 {
            self.timer.set_limit_s(max_time_s);
        }
        self.start();
        while self.status.is_in_progress() {
            self.step();
        }
        self.status
    }

    /// Move with the configured direction and ceiling, blocking until done
    pub fn run_to_limit(&mut self) -> DriveStatus {
        self.move_blocking(self.direction, 0)
    }

    /// Evaluate the overcurrent latch, if enabled
    fn overload_tripped(&mut self, now: Instant) -> bool {
        let Some(overload) = self.overload.as_mut() else {
            return false;
        };
        let current = overload.source.current();
        let check = overload.monitor.check(current, now);

        #[cfg(feature = "defmt")]
        match check {
            OverloadCheck::Armed => defmt::debug!(
                "{}: current {} above {}, grace period started",
                self.label.as_str(),
                current,
                overload.monitor.settings().max_current()
            ),
            OverloadCheck::Released => {
                defmt::debug!("{}: current back to {}", self.label.as_str(), current)
            }
            _ => {}
        }

        check == OverloadCheck::Tripped
    }

    /// End the move with `status`
    fn finish(&mut self, status: DriveStatus) {
        self.outputs.release();
        self.status = status;

        #[cfg(feature = "defmt")]
        match status {
            DriveStatus::Ok => defmt::info!(
                "{}: {} limit reached",
                self.label.as_str(),
                self.direction
            ),
            DriveStatus::Overtime => defmt::warn!(
                "{}: no {} limit after {} s, stopped",
                self.label.as_str(),
                self.direction,
                self.timer.limit_s()
            ),
            DriveStatus::Overload => defmt::warn!(
                "{}: overcurrent moving {}, stopped",
                self.label.as_str(),
                self.direction
            ),
            DriveStatus::Stopped => defmt::warn!(
                "{}: move {} aborted",
                self.label.as_str(),
                self.direction
            ),
            DriveStatus::InProgress => {}
        }
    }
}

impl<O, I, C, S> DriveControl for DriveController<O, I, C, S>
where
    O: OutputPin,
    I: InputPin,
    C: Clock,
    S: CurrentSource,
{
    fn set_direction(&mut self, dir: Direction) {
        self.direction = dir;
    }

    fn direction(&self) -> Direction {
        self.direction
    }

    fn set_max_run_time(&mut self, seconds: u32) {
        self.timer.set_limit_s(seconds);
    }

    fn max_run_time(&self) -> u32 {
        self.timer.limit_s()
    }

    fn start(&mut self) {
        self.outputs.drive(self.direction);
        self.status = DriveStatus::InProgress;
        self.timer.start(self.clock.now());
        if let Some(overload) = self.overload.as_mut() {
            overload.monitor.reset();
        }

        #[cfg(feature = "defmt")]
        defmt::info!(
            "{}: moving {}, limit {} s",
            self.label.as_str(),
            self.direction,
            self.timer.limit_s()
        );
    }

    fn step(&mut self) -> DriveStatus {
        if !self.status.is_in_progress() {
            return self.status;
        }

        let now = self.clock.now();
        if self.switches.is_pressed(self.direction) {
            self.finish(DriveStatus::Ok);
        } else if self.timer.is_expired(now) {
            self.finish(DriveStatus::Overtime);
        } else if self.overload_tripped(now) {
            self.finish(DriveStatus::Overload);
        }

        self.status
    }

    fn stop(&mut self) {
        self.outputs.release();
    }

    fn abort(&mut self) {
        if self.status.is_in_progress() {
            self.finish(DriveStatus::Stopped);
        } else {
            self.outputs.release();
        }
    }

    fn status(&self) -> DriveStatus {
        self.status
    }
}
