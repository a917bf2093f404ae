//! Unit tests for the command line parser.

use beefocus::{parse_line, Command, CommandPacket};

/// Test that every command's wire form parses back to itself.
#[test]
fn test_wire_form_parses_back() {
    let packets = [
        CommandPacket::new(Command::Abort),
        CommandPacket::new(Command::Home),
        CommandPacket::new(Command::LHome),
        CommandPacket::new(Command::PStatus),
        CommandPacket::new(Command::MStatus),
        CommandPacket::new(Command::SStatus),
        CommandPacket::new(Command::Firmware),
        CommandPacket::new(Command::Caps),
        CommandPacket::with_arg(Command::AbsPos, 1234),
        CommandPacket::with_arg(Command::RelPos, -250),
        CommandPacket::with_arg(Command::Sync, 0),
    ];

    for packet in packets {
        let wire = packet.to_string();
        assert_eq!(parse_line(&wire), Some(packet), "wire form {wire:?}");
    }
}

/// Test the exact wire text of argument commands.
#[test]
fn test_argument_wire_text() {
    assert_eq!(CommandPacket::with_arg(Command::AbsPos, 1234).to_string(), "ABS_POS=1234");
    assert_eq!(CommandPacket::with_arg(Command::RelPos, -5).to_string(), "REL_POS=-5");
    assert_eq!(CommandPacket::new(Command::PStatus).to_string(), "pstatus");
}

/// Test malformed lines.
#[test]
fn test_malformed_lines_are_no_command() {
    for line in ["bogus", "ABS_POS", "ABS_POS=", "ABS_POS=12x", "pstatus=4", "REL_POS=99999999999"] {
        assert_eq!(
            parse_line(line).map(|p| p.command),
            Some(Command::NoCommand),
            "line {line:?}"
        );
    }
}

/// Test blank lines.
#[test]
fn test_blank_lines_are_skipped() {
    assert_eq!(parse_line(""), None);
    assert_eq!(parse_line("  \r"), None);
}

/// Test the interrupt table.
#[test]
fn test_interrupting_commands() {
    let interrupting = [
        Command::Abort,
        Command::Home,
        Command::LHome,
        Command::AbsPos,
        Command::RelPos,
        Command::Sync,
    ];
    let passive = [
        Command::PStatus,
        Command::MStatus,
        Command::SStatus,
        Command::Firmware,
        Command::Caps,
        Command::NoCommand,
    ];

    assert!(interrupting.iter().all(|c| c.interrupts()));
    assert!(passive.iter().all(|c| !c.interrupts()));
}
