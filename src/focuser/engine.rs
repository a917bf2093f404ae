//! Focuser state, construction and the tick dispatcher.

use crate::command::CommandPacket;
use crate::config::BuildParams;
use crate::error::HardwareError;
use crate::interface::{DebugInterface, HardwareInterface, NetInterface, Pin, PinIoMode, PinState};
use crate::state::{Direction, State, StateArg, StateStack};

/// Version reported by the `firmware` command.
pub const FIRMWARE_VERSION: &str = "1.0";

/// `ERROR_STATE` argument pushed when a frame carries the wrong payload.
pub const DIAG_BAD_ARG: i32 = 3;

/// Electrical state of the stepper coils.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorState {
    /// Coils energized; the carriage holds position.
    On,
    /// Coils released.
    Off,
}

impl MotorState {
    /// Lower-case name for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            MotorState::On => "on",
            MotorState::Off => "off",
        }
    }
}

/// The focuser engine.
///
/// Generic over:
/// - `N`: network transport (must implement [`NetInterface`])
/// - `H`: pin access (must implement [`HardwareInterface`])
/// - `D`: diagnostic sink (must implement [`DebugInterface`])
///
/// One instance lives for one connection. It never blocks: every call to
/// [`loop_once`](Self::loop_once) does a bounded amount of work.
pub struct Focuser<N, H, D>
where
    N: NetInterface,
    H: HardwareInterface,
    D: DebugInterface,
{
    pub(super) net: N,
    pub(super) hardware: H,
    pub(super) debug: D,
    pub(super) params: BuildParams,
    pub(super) stack: StateStack,

    /// Absolute position in steps.
    pub(super) position: i32,
    /// Whether `position` has been tied to a physical reference.
    pub(super) synched: bool,
    /// Last direction written to the DIR pin.
    pub(super) dir: Direction,
    pub(super) motor: MotorState,

    /// Uptime accumulated from requested waits.
    pub(super) time_ms: u64,
    pub(super) us_remainder: u32,
    pub(super) last_interrupt_ms: u64,
    /// Steps taken since the last look at the network.
    pub(super) steps_since_check: u32,
}

impl<N, H, D> Focuser<N, H, D>
where
    N: NetInterface,
    H: HardwareInterface,
    D: DebugInterface,
{
    /// Bring up the network, configure the pins and energize the motor.
    ///
    /// A pin failure here leaves an `ERROR_STATE` frame for the first tick.
    pub fn new(net: N, hardware: H, debug: D, params: BuildParams) -> Self {
        let mut focuser = Self {
            net,
            hardware,
            debug,
            params,
            stack: StateStack::new(),
            position: 0,
            synched: false,
            dir: Direction::Forward,
            motor: MotorState::Off,
            time_ms: 0,
            us_remainder: 0,
            last_interrupt_ms: 0,
            steps_since_check: 0,
        };

        diag!(focuser, "Bringing up net interface");
        focuser.net.setup(&mut focuser.debug);

        if let Err(err) = focuser.init_pins() {
            focuser.hardware_fault(err);
        }

        diag!(focuser, "Focuser is up");
        focuser
    }

    fn init_pins(&mut self) -> Result<(), HardwareError> {
        let modes = [
            (Pin::Step, PinIoMode::Output),
            (Pin::Dir, PinIoMode::Output),
            (Pin::MotorEnable, PinIoMode::Output),
            (Pin::Home, PinIoMode::Input),
        ];
        for (pin, mode) in modes {
            self.hardware.pin_mode(pin, mode)?;
        }

        self.set_motor(MotorState::On)?;

        self.dir = Direction::Forward;
        self.hardware.digital_write(Pin::Dir, PinState::DirForward)?;
        self.hardware.digital_write(Pin::Step, PinState::StepInactive)?;
        Ok(())
    }

    /// Run one unit of work.
    ///
    /// Returns the number of microseconds to wait before the next call.
    /// Zero means "call again straight away". Calling early is harmless;
    /// calling late only adds latency.
    pub fn loop_once(&mut self) -> u32 {
        let state = self.stack.top_state();
        let wait_us = match self.run_state(state) {
            Ok(wait_us) => wait_us,
            Err(err) => self.hardware_fault(err),
        };
        self.advance_clock(wait_us);
        wait_us
    }

    fn run_state(&mut self, state: State) -> Result<u32, HardwareError> {
        match state {
            State::AcceptCommands => Ok(self.state_accept_commands()),
            State::DoSteps => self.state_do_steps(),
            State::StepperInactiveAndWait => self.state_step_pulse(PinState::StepInactive),
            State::StepperActiveAndWait => self.state_step_pulse(PinState::StepActive),
            State::SetDir => self.state_set_dir(),
            State::Moving => Ok(self.state_moving()),
            State::StopAtHome => self.state_stop_at_home(),
            State::Sleep => self.state_sleep(),
            State::ErrorState => Ok(self.state_error()),
        }
    }

    fn advance_clock(&mut self, wait_us: u32) {
        let total_us = u64::from(self.us_remainder) + u64::from(wait_us);
        self.time_ms += total_us / 1000;
        self.us_remainder = (total_us % 1000) as u32;
    }

    /// Abandon whatever was running and report the failed pin.
    pub(super) fn hardware_fault(&mut self, err: HardwareError) -> u32 {
        diag!(self, "Hardware fault: {}", err);
        self.stack.reset();
        self.stack.push(State::ErrorState, err.code());
        0
    }

    /// Replace a frame whose payload does not fit its state.
    pub(super) fn bad_arg(&mut self) -> u32 {
        let state = self.stack.top_state();
        let arg = self.stack.top_arg();
        diag!(self, "Bad argument '{}' for {}", arg, state);
        self.stack.pop();
        self.stack.push(State::ErrorState, DIAG_BAD_ARG);
        0
    }

    pub(super) fn set_motor(&mut self, state: MotorState) -> Result<(), HardwareError> {
        let level = match state {
            MotorState::On => PinState::MotorOn,
            MotorState::Off => PinState::MotorOff,
        };
        self.hardware.digital_write(Pin::MotorEnable, level)?;
        self.motor = state;
        diag!(self, "Motor set {}", state.name());
        Ok(())
    }

    /// Run a command handler, noting when it interrupts.
    pub(super) fn process_command(&mut self, packet: CommandPacket) {
        if packet.command.interrupts() {
            self.last_interrupt_ms = self.time_ms;
        }
        self.dispatch_command(packet);
    }

    /// The state reported by `mstatus`: the nearest non-transient frame.
    pub fn mode_state(&self) -> State {
        self.stack
            .iter()
            .map(|frame| frame.state)
            .find(|state| !state.is_transient())
            .unwrap_or(State::AcceptCommands)
    }

    /// State on top of the stack.
    #[inline]
    pub fn top_state(&self) -> State {
        self.stack.top_state()
    }

    /// Argument on top of the stack.
    #[inline]
    pub fn top_arg(&self) -> StateArg {
        self.stack.top_arg()
    }

    /// The state stack.
    #[inline]
    pub fn stack(&self) -> &StateStack {
        &self.stack
    }

    /// Current absolute position in steps.
    #[inline]
    pub fn position(&self) -> i32 {
        self.position
    }

    /// Whether the position has been synched to a reference.
    #[inline]
    pub fn is_synched(&self) -> bool {
        self.synched
    }

    /// Direction currently on the DIR pin.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.dir
    }

    /// Electrical state of the motor.
    #[inline]
    pub fn motor_state(&self) -> MotorState {
        self.motor
    }

    /// Milliseconds of requested waits so far.
    #[inline]
    pub fn uptime_ms(&self) -> u64 {
        self.time_ms
    }

    /// The build profile.
    #[inline]
    pub fn params(&self) -> &BuildParams {
        &self.params
    }

    /// The network interface.
    pub fn net(&self) -> &N {
        &self.net
    }

    /// The network interface, mutably.
    pub fn net_mut(&mut self) -> &mut N {
        &mut self.net
    }

    /// The hardware interface.
    pub fn hardware(&self) -> &H {
        &self.hardware
    }

    /// The hardware interface, mutably.
    pub fn hardware_mut(&mut self) -> &mut H {
        &mut self.hardware
    }

    /// The debug interface.
    pub fn debug(&self) -> &D {
        &self.debug
    }

    /// The debug interface, mutably.
    pub fn debug_mut(&mut self) -> &mut D {
        &mut self.debug
    }
}
