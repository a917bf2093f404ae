//! Example: A focuser session against simulated hardware.
//!
//! This example demonstrates how to:
//! - Pick a build profile, optionally from a TOML file
//! - Drive the engine with virtual time
//! - Read status replies back into a `HardwareState`
//!
//! Run with: `cargo run --example simulated_focuser --features std [config.toml]`

use beefocus::{
    config::{load_config, Build, BuildParams},
    error::Result,
    sim::{SimDebug, SimFirmware, SimHardware},
    status::{Connection, HardwareState},
    Command, CommandPacket,
};

fn report(sim: &mut SimFirmware, known: HardwareState) -> HardwareState {
    sim.send("pstatus\nmstatus\nsstatus\n");
    sim.advance_time(1100);
    let state = known.merge(HardwareState::read_from(sim));

    println!(
        "  t={:>6} ms  {:<28} position={:<6} synched={}",
        sim.elapsed_ms(),
        state.mode().map(|m| m.friendly_name()).unwrap_or("?"),
        state.position().unwrap_or(0),
        state.is_synced().unwrap_or(false),
    );
    state
}

fn main() -> Result<()> {
    let params = match std::env::args().nth(1) {
        Some(path) => load_config(path)?,
        None => BuildParams::for_build(Build::UnitTestBuildHyperstar),
    };

    println!("=== beefocus simulated session ===\n");
    println!(
        "Profile: max position {}, home switch {}, {} steps between checks",
        params.max_abs_pos,
        if params.has_home { "fitted" } else { "absent" },
        params.timing.max_steps_between_checks
    );

    let debug = SimDebug::new().with_echo(std::env::var_os("BEEFOCUS_DEBUG").is_some());
    let mut sim = SimFirmware::with_parts(params, SimHardware::with_carriage(400), debug);

    let mut state = HardwareState::default();
    state = report(&mut sim, state);

    println!("\nlazyhome");
    sim.send_command(CommandPacket::new(Command::LHome));
    sim.advance_time(2000);
    state = report(&mut sim, state);

    println!("\nABS_POS=1500");
    sim.send_command(CommandPacket::with_arg(Command::AbsPos, 1500));
    sim.advance_time(500);
    state = report(&mut sim, state);
    sim.advance_time(3000);
    state = report(&mut sim, state);

    println!("\nREL_POS=-200 (approached from below)");
    sim.send_command(CommandPacket::with_arg(Command::RelPos, -200));
    sim.advance_time(5000);
    state = report(&mut sim, state);

    println!("\nidle until low power");
    sim.advance_time(5000);
    let _ = report(&mut sim, state);

    println!(
        "\nCarriage ended {} steps from home after {} step pulses",
        sim.hardware().carriage(),
        sim.hardware().step_pulses()
    );
    println!("{} diagnostic lines captured", sim.focuser().debug().line_count());

    Ok(())
}
