//! Engine plus simulated peripherals on a virtual clock.

use crate::config::BuildParams;
use crate::focuser::Focuser;
use crate::interface::Line;
use crate::status::Connection;

use super::{SimDebug, SimHardware, SimNet};

/// Focuser type driven by the simulator.
pub type SimFocuser = Focuser<SimNet, SimHardware, SimDebug>;

/// A focuser running against simulated hardware.
pub struct SimFirmware {
    focuser: SimFocuser,
    /// Unspent virtual time in microseconds. Goes negative when the last
    /// wait ran past the end of an advance.
    budget_us: i64,
    elapsed_ms: u64,
}

impl SimFirmware {
    /// Boot a focuser on fresh simulated hardware.
    pub fn new(params: BuildParams) -> Self {
        Self::with_hardware(params, SimHardware::new())
    }

    /// Boot a focuser on the given simulated hardware.
    pub fn with_hardware(params: BuildParams, hardware: SimHardware) -> Self {
        Self::with_parts(params, hardware, SimDebug::new())
    }

    /// Boot a focuser on the given simulated hardware and debug sink.
    pub fn with_parts(params: BuildParams, hardware: SimHardware, debug: SimDebug) -> Self {
        Self {
            focuser: Focuser::new(SimNet::new(), hardware, debug, params),
            budget_us: 0,
            elapsed_ms: 0,
        }
    }

    /// Queue one line for the firmware. A missing `\n` is added.
    pub fn send(&mut self, line: &str) {
        let net = self.focuser.net_mut();
        net.receive(line);
        if !line.ends_with('\n') {
            net.receive("\n");
        }
    }

    /// Run the engine for `ms` of virtual time.
    ///
    /// `loop_once` is called until the waits it requested cover the advance.
    /// A wait that overruns is carried into the next advance.
    pub fn advance_time(&mut self, ms: u32) {
        self.budget_us += i64::from(ms) * 1000;
        self.elapsed_ms += u64::from(ms);
        while self.budget_us > 0 {
            let wait_us = self.focuser.loop_once();
            self.budget_us -= i64::from(wait_us);
        }
    }

    /// Virtual time handed to [`advance_time`](Self::advance_time) so far.
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Take everything the firmware has written to the network.
    pub fn take_output(&mut self) -> String {
        self.focuser.net_mut().take_output()
    }

    /// Diagnostic lines written so far.
    pub fn debug_lines(&self) -> Vec<String> {
        self.focuser.debug().lines()
    }

    /// The engine.
    pub fn focuser(&self) -> &SimFocuser {
        &self.focuser
    }

    /// The engine, mutably.
    pub fn focuser_mut(&mut self) -> &mut SimFocuser {
        &mut self.focuser
    }

    /// The simulated pins.
    pub fn hardware(&self) -> &SimHardware {
        self.focuser.hardware()
    }

    /// The simulated pins, mutably.
    pub fn hardware_mut(&mut self) -> &mut SimHardware {
        self.focuser.hardware_mut()
    }
}

impl Connection for SimFirmware {
    fn read_line(&mut self) -> Option<Line> {
        self.focuser.net_mut().take_output_line()
    }

    fn send(&mut self, text: &str) {
        self.focuser.net_mut().receive(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Build;
    use crate::state::State;

    #[test]
    fn test_boot_energizes_motor_and_idles() {
        let mut sim = SimFirmware::new(Build::UnitTestBuildHyperstar.into());
        assert!(sim.hardware().motor_enabled());
        sim.advance_time(10);
        assert_eq!(sim.focuser().top_state(), State::AcceptCommands);
        assert!(sim.take_output().is_empty());
    }

    #[test]
    fn test_overrun_carries_into_next_advance() {
        let mut sim = SimFirmware::new(Build::UnitTestBuildHyperstar.into());
        // Idle waits land on 10 ms command epochs.
        sim.advance_time(3);
        let after_first = sim.focuser().uptime_ms();
        sim.advance_time(3);
        assert_eq!(sim.focuser().uptime_ms(), after_first);
        assert_eq!(sim.elapsed_ms(), 6);
    }
}
