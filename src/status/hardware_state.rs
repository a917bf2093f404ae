//! Snapshot of focuser state rebuilt from status lines.

use super::connection::Connection;
use super::mode::Mode;

/// Focuser state as reported over the wire.
///
/// Every field is independently optional: a snapshot only holds what the
/// lines drained in one pass actually reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HardwareState {
    mode: Option<Mode>,
    position: Option<u32>,
    synced: Option<bool>,
    max_abs_pos: Option<u32>,
}

impl HardwareState {
    /// Drain every line the connection has ready and parse it.
    pub fn read_from<C: Connection + ?Sized>(connection: &mut C) -> Self {
        let mut state = Self::default();
        while let Some(line) = connection.read_line() {
            state.apply_line(&line);
        }
        state
    }

    /// Parse one status line into this snapshot.
    ///
    /// Lines with fewer than two tokens and unknown verbs are ignored, as are
    /// numbers that do not parse. Tokens past the second are ignored.
    pub fn apply_line(&mut self, line: &str) {
        let mut tokens = line.split_whitespace();
        let (Some(verb), Some(noun)) = (tokens.next(), tokens.next()) else {
            return;
        };

        match verb {
            "State:" => self.mode = Some(Mode::from_status_noun(noun)),
            "Position:" => {
                if let Ok(position) = noun.parse::<i64>() {
                    self.position = Some(position.clamp(0, i64::from(u32::MAX)) as u32);
                }
            }
            "Synched:" => self.synced = Some(noun == "YES"),
            "MaxPos:" => {
                if let Ok(max) = noun.parse::<u32>() {
                    self.max_abs_pos = Some(max);
                }
            }
            _ => {}
        }
    }

    /// Overlay a newer snapshot: fields it reports win, the rest are kept.
    pub fn merge(self, newer: HardwareState) -> HardwareState {
        HardwareState {
            mode: newer.mode.or(self.mode),
            position: newer.position.or(self.position),
            synced: newer.synced.or(self.synced),
            max_abs_pos: newer.max_abs_pos.or(self.max_abs_pos),
        }
    }

    /// Reported mode.
    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    /// Reported position. Negative reports read as 0.
    pub fn position(&self) -> Option<u32> {
        self.position
    }

    /// Reported sync flag.
    pub fn is_synced(&self) -> Option<bool> {
        self.synced
    }

    /// Reported maximum position.
    pub fn max_abs_pos(&self) -> Option<u32> {
        self.max_abs_pos
    }

    /// Whether nothing was reported.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
