//! Command handlers.

use crate::command::{Command, CommandPacket};
use crate::interface::{DebugInterface, HardwareInterface, NetInterface};
use crate::state::State;

use super::engine::{Focuser, FIRMWARE_VERSION};

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "YES"
    } else {
        "NO"
    }
}

impl<N, H, D> Focuser<N, H, D>
where
    N: NetInterface,
    H: HardwareInterface,
    D: DebugInterface,
{
    pub(super) fn dispatch_command(&mut self, packet: CommandPacket) {
        match packet.command {
            Command::Abort => self.do_abort(),
            Command::Home => self.do_home(),
            Command::LHome => self.do_lazy_home(),
            Command::PStatus => self.do_pstatus(),
            Command::MStatus => self.do_mstatus(),
            Command::SStatus => self.do_sstatus(),
            Command::AbsPos => self.do_abs_pos(packet.arg),
            Command::RelPos => self.do_rel_pos(packet.arg),
            Command::Sync => self.do_sync(packet.arg),
            Command::Firmware => self.do_firmware(),
            Command::Caps => self.do_caps(),
            Command::NoCommand => self.do_error(),
        }
    }

    fn do_abort(&mut self) {
        diag!(self, "Aborting at position {}", self.position);
        self.stack.reset();
    }

    fn do_home(&mut self) {
        if !self.params.has_home {
            diag!(self, "Ignoring home: no home switch fitted");
            return;
        }
        self.stack.push_state(State::StopAtHome);
    }

    fn do_lazy_home(&mut self) {
        if !self.params.has_home {
            diag!(self, "Ignoring lazyhome: no home switch fitted");
            return;
        }
        if self.synched {
            diag!(self, "Already synched, skipping home");
            return;
        }
        self.stack.push_state(State::StopAtHome);
    }

    fn do_pstatus(&mut self) {
        diag!(self, "Processing pstatus request");
        reply!(self, "Position: {}", self.position);
    }

    fn do_mstatus(&mut self) {
        diag!(self, "Processing mstatus request");
        let mode = self.mode_state();
        reply!(self, "State: {}", mode.name());
    }

    fn do_sstatus(&mut self) {
        diag!(self, "Processing sstatus request");
        reply!(self, "Synched: {}", yes_no(self.synched));
        reply!(self, "MaxPos: {}", self.params.max_abs_pos);
    }

    fn do_firmware(&mut self) {
        diag!(self, "Processing firmware request");
        reply!(self, "Firmware: {}", FIRMWARE_VERSION);
    }

    fn do_caps(&mut self) {
        diag!(self, "Processing capabilities request");
        reply!(self, "MaxPos: {}", self.params.max_abs_pos);
        reply!(self, "CanHome: {}", yes_no(self.params.has_home));
    }

    fn do_abs_pos(&mut self, requested: i32) {
        let target = requested.clamp(0, self.params.max_position());
        if target != requested {
            diag!(self, "Clamped target {} to {}", requested, target);
        }

        self.stack.push(State::Moving, target);

        // Inward moves overshoot and come back out so the final approach
        // always takes up backlash the same way.
        if target < self.position {
            let approach = i32::try_from(self.params.backlash_approach).unwrap_or(i32::MAX);
            let overshoot = target.saturating_sub(approach).max(0);
            if overshoot != target {
                self.stack.push(State::Moving, overshoot);
            }
        }
    }

    fn do_rel_pos(&mut self, delta: i32) {
        self.do_abs_pos(self.position.saturating_add(delta));
    }

    fn do_sync(&mut self, position: i32) {
        diag!(self, "Synched position {} as {}", self.position, position);
        self.position = position;
        self.synched = true;
    }

    fn do_error(&mut self) {
        diag!(self, "Ignoring unrecognized command");
    }
}
