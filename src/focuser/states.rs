//! Per-state handlers.
//!
//! Each handler does one bounded piece of work and returns the requested
//! wait in microseconds.

use crate::command::check_for_commands;
use crate::config::TimingParams;
use crate::error::HardwareError;
use crate::interface::{DebugInterface, HardwareInterface, NetInterface, Pin, PinState};
use crate::state::{Direction, State, StateArg};

use super::engine::{Focuser, MotorState};

impl<N, H, D> Focuser<N, H, D>
where
    N: NetInterface,
    H: HardwareInterface,
    D: DebugInterface,
{
    pub(super) fn state_accept_commands(&mut self) -> u32 {
        if let Some(packet) = check_for_commands(&mut self.net) {
            self.process_command(packet);
            return 0;
        }

        let timing = self.params.timing;
        let idle_ms = self.time_ms - self.last_interrupt_ms;
        if idle_ms > u64::from(timing.ms_inactivity_to_sleep) {
            diag!(self, "Idle for {} ms, entering low power mode", idle_ms);
            self.stack.push_state(State::Sleep);
            return 0;
        }

        TimingParams::us_to_next_epoch(self.time_ms, timing.ms_between_command_checks)
    }

    pub(super) fn state_set_dir(&mut self) -> Result<u32, HardwareError> {
        let Some(desired) = self.stack.top_arg().dir() else {
            return Ok(self.bad_arg());
        };
        self.stack.pop();

        if desired == self.dir {
            return Ok(0);
        }

        let level = match desired {
            Direction::Forward => PinState::DirForward,
            Direction::Reverse => PinState::DirBackward,
        };
        self.hardware.digital_write(Pin::Dir, level)?;
        self.dir = desired;

        // Give the driver time to latch DIR before the next STEP edge.
        Ok(self.params.timing.us_step_pulse)
    }

    pub(super) fn state_do_steps(&mut self) -> Result<u32, HardwareError> {
        let Some(remaining) = self.stack.top_arg().int() else {
            return Ok(self.bad_arg());
        };
        if remaining <= 0 {
            self.stack.pop();
            return Ok(0);
        }

        let timing = self.params.timing;
        if self.steps_since_check >= timing.max_steps_between_checks {
            self.steps_since_check = 0;
            if self.check_for_interrupt() {
                return Ok(0);
            }
        }

        if self.motor == MotorState::Off {
            self.set_motor(MotorState::On)?;
            return Ok(timing.ms_to_power_stepper.saturating_mul(1000));
        }

        self.stack.top_arg_set(remaining - 1);
        self.stack.push_state(State::StepperInactiveAndWait);
        self.stack.push_state(State::StepperActiveAndWait);
        self.position = self.position.saturating_add(self.dir.sign());
        self.steps_since_check += 1;
        Ok(0)
    }

    pub(super) fn state_step_pulse(&mut self, level: PinState) -> Result<u32, HardwareError> {
        self.hardware.digital_write(Pin::Step, level)?;
        self.stack.pop();
        Ok(self.params.timing.us_step_pulse)
    }

    /// First visit: plan the move and mark the frame as planned by clearing
    /// its argument. Second visit (nested frames done): finish.
    pub(super) fn state_moving(&mut self) -> u32 {
        let target = match self.stack.top_arg() {
            StateArg::Int(target) => target,
            StateArg::None => {
                self.stack.pop();
                return 0;
            }
            StateArg::Dir(_) => return self.bad_arg(),
        };

        let delta = target.saturating_sub(self.position);
        diag!(self, "Moving from {} to {}", self.position, target);
        if delta == 0 {
            self.stack.pop();
            return 0;
        }

        self.stack.top_arg_set(StateArg::None);
        self.stack.push(State::DoSteps, delta.saturating_abs());
        self.stack.push(State::SetDir, Direction::from_delta(delta));
        0
    }

    pub(super) fn state_stop_at_home(&mut self) -> Result<u32, HardwareError> {
        if !self.params.has_home {
            diag!(self, "No home switch fitted, abandoning home seek");
            self.stack.pop();
            return Ok(0);
        }

        if self.hardware.digital_read(Pin::Home)? == PinState::HomeActive {
            diag!(self, "Hit home at position {}, resetting position to 0", self.position);
            self.position = 0;
            self.synched = true;
            self.stack.pop();
            return Ok(0);
        }

        self.stack.push(State::DoSteps, 1);
        self.stack.push(State::SetDir, Direction::Reverse);
        Ok(0)
    }

    pub(super) fn state_sleep(&mut self) -> Result<u32, HardwareError> {
        let timing = self.params.timing;

        if let Some(packet) = check_for_commands(&mut self.net) {
            diag!(self, "Leaving low power mode");
            // Status requests are answered while SLEEP is still on top so
            // `mstatus` reports LOW_POWER.
            if packet.command.interrupts() {
                self.stack.pop();
                self.process_command(packet);
            } else {
                self.process_command(packet);
                self.stack.pop();
            }
            if packet.command.interrupts() && self.motor == MotorState::Off {
                self.set_motor(MotorState::On)?;
                return Ok(timing.ms_to_power_stepper.saturating_mul(1000));
            }
            return Ok(0);
        }

        if self.motor != MotorState::Off {
            self.set_motor(MotorState::Off)?;
        }

        Ok(TimingParams::us_to_next_epoch(self.time_ms, timing.ms_between_sleep_checks))
    }

    /// Report the fault and back off until the next sleep epoch, so a fault
    /// that recurs on every attempt costs one retry per epoch.
    pub(super) fn state_error(&mut self) -> u32 {
        let arg = self.stack.top_arg();
        diag!(self, "Error state, diagnostic {}", arg);
        self.stack.pop();
        TimingParams::us_to_next_epoch(self.time_ms, self.params.timing.ms_between_sleep_checks)
    }

    /// Look at the network between step batches.
    ///
    /// Returns `true` if an interrupting command replaced the stack.
    fn check_for_interrupt(&mut self) -> bool {
        let Some(packet) = check_for_commands(&mut self.net) else {
            return false;
        };

        let interrupts = packet.command.interrupts();
        if interrupts {
            diag!(self, "Interrupted by {}", packet.command.keyword());
            self.stack.reset();
        }
        self.process_command(packet);
        interrupts
    }
}
