//! Command line parser.
//!
//! Lines look like `pstatus` or `ABS_POS=1234`. Keywords are matched without
//! regard to case because the host driver sends both `SSTATUS` and `sstatus`.

use core::fmt;

use crate::interface::NetInterface;

/// Commands understood by the firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Drop everything and return to accepting commands.
    Abort,
    /// Seek the home switch.
    Home,
    /// Seek the home switch unless already synched.
    LHome,
    /// Report position.
    PStatus,
    /// Report mode.
    MStatus,
    /// Report sync state.
    SStatus,
    /// Move to an absolute position.
    AbsPos,
    /// Move by a relative amount.
    RelPos,
    /// Declare the current position without moving.
    Sync,
    /// Report firmware version.
    Firmware,
    /// Report capabilities.
    Caps,
    /// Unrecognized or malformed line.
    NoCommand,
}

impl Command {
    /// Whether receiving this command pre-empts motion in progress.
    pub const fn interrupts(self) -> bool {
        match self {
            Command::Abort
            | Command::Home
            | Command::LHome
            | Command::AbsPos
            | Command::RelPos
            | Command::Sync => true,
            Command::PStatus
            | Command::MStatus
            | Command::SStatus
            | Command::Firmware
            | Command::Caps
            | Command::NoCommand => false,
        }
    }

    /// Wire keyword.
    pub const fn keyword(self) -> &'static str {
        match self {
            Command::Abort => "abort",
            Command::Home => "home",
            Command::LHome => "lazyhome",
            Command::PStatus => "pstatus",
            Command::MStatus => "mstatus",
            Command::SStatus => "sstatus",
            Command::AbsPos => "ABS_POS",
            Command::RelPos => "REL_POS",
            Command::Sync => "SYNC",
            Command::Firmware => "firmware",
            Command::Caps => "caps",
            Command::NoCommand => "",
        }
    }

    /// Whether the command carries an `=<int>` argument.
    pub const fn takes_arg(self) -> bool {
        matches!(self, Command::AbsPos | Command::RelPos | Command::Sync)
    }

    const KNOWN: [Command; 11] = [
        Command::Abort,
        Command::Home,
        Command::LHome,
        Command::PStatus,
        Command::MStatus,
        Command::SStatus,
        Command::AbsPos,
        Command::RelPos,
        Command::Sync,
        Command::Firmware,
        Command::Caps,
    ];

    fn from_keyword(word: &str) -> Command {
        Self::KNOWN
            .iter()
            .copied()
            .find(|c| c.keyword().eq_ignore_ascii_case(word))
            .unwrap_or(Command::NoCommand)
    }
}

/// A parsed command and its optional argument (0 when absent).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CommandPacket {
    /// Which command.
    pub command: Command,
    /// Argument for `ABS_POS`, `REL_POS` and `SYNC`.
    pub arg: i32,
}

impl CommandPacket {
    /// Packet for an argument-less command.
    pub const fn new(command: Command) -> Self {
        Self { command, arg: 0 }
    }

    /// Packet carrying an argument.
    pub const fn with_arg(command: Command, arg: i32) -> Self {
        Self { command, arg }
    }
}

impl fmt::Display for CommandPacket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.command.takes_arg() {
            write!(f, "{}={}", self.command.keyword(), self.arg)
        } else {
            f.write_str(self.command.keyword())
        }
    }
}

/// Parse one line.
///
/// Returns `None` for a blank line. Anything that is not a well-formed
/// command comes back as [`Command::NoCommand`].
pub fn parse_line(line: &str) -> Option<CommandPacket> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (word, arg) = match line.split_once('=') {
        Some((word, arg)) => (word.trim(), Some(arg.trim())),
        None => (line, None),
    };

    let command = Command::from_keyword(word);
    let packet = match (command.takes_arg(), arg) {
        (true, Some(arg)) => match arg.parse::<i32>() {
            Ok(value) => CommandPacket::with_arg(command, value),
            Err(_) => CommandPacket::new(Command::NoCommand),
        },
        (false, None) => CommandPacket::new(command),
        _ => CommandPacket::new(Command::NoCommand),
    };
    Some(packet)
}

/// Pull lines from the network until one holds a command.
///
/// Blank lines are skipped. Returns `None` once no complete line is waiting.
pub fn check_for_commands<N: NetInterface + ?Sized>(net: &mut N) -> Option<CommandPacket> {
    while let Some(line) = net.get_line() {
        if let Some(packet) = parse_line(&line) {
            return Some(packet);
        }
    }
    None
}
