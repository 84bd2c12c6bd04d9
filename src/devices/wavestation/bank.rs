//! Wavestation bank numbering
//!
//! Three numberings are in play: the logical bank used by the model (`RAM 1`
//! through `Card`, in display order), the bank number the remote parameter
//! interface expects, and the grouped numbering stored inside patch and
//! performance records (bank within a group of four, group in a side field).

use crate::error::{Error, Result};

/// Bank names in logical order
pub const BANKS: [&str; 12] = [
    "RAM 1", "RAM 2", "RAM 3", "ROM 4", "ROM 5", "ROM 6", "ROM 7", "ROM 8", "ROM 9", "ROM10", "ROM11",
    "Card",
];

pub const NUM_BANKS: usize = BANKS.len();

/// Logical index of the card bank
pub const BANK_CARD: usize = 11;

/// Logical bank to remote parameter bank
pub const EDISYN_TO_WS_BANK: [usize; NUM_BANKS] = [0, 1, 4, 5, 6, 7, 8, 9, 10, 11, 2, 3];

/// Remote parameter bank to logical bank
pub const WS_TO_EDISYN_BANK: [usize; NUM_BANKS] = [0, 1, 10, 11, 2, 3, 4, 5, 6, 7, 8, 9];

/// Grouped record bank (`group * 4 + bank`) to logical bank
pub const WS_BANK_EXP_TO_EDISYN: [usize; NUM_BANKS] = [0, 1, 10, 11, 3, 4, 2, 5, 6, 7, 8, 9];

/// Logical bank to grouped record bank
pub const EDISYN_TO_WS_BANK_EXP: [usize; NUM_BANKS] = [0, 1, 6, 4, 5, 7, 8, 9, 10, 11, 2, 3];

/// Bank select value sent before a performance program change
pub const MIDI_BANKS: [i32; NUM_BANKS] = [0, 0, 2, 2, 3, 3, 4, 4, 5, 5, 1, 1];

/// Program change offset for the upper half of a shared MIDI bank
pub const MIDI_PROG_CHANGE_OFFSETS: [i32; NUM_BANKS] = [0, 50, 0, 50, 0, 50, 0, 50, 0, 50, 0, 50];

/// Clamp a model bank value into a table index
pub fn index(bank: i32) -> usize {
    bank.clamp(0, NUM_BANKS as i32 - 1) as usize
}

pub fn to_ws(bank: i32) -> i32 {
    EDISYN_TO_WS_BANK[index(bank)] as i32
}

/// Logical bank for the remote bank byte of a received dump
pub fn from_ws(device: &'static str, bank: i32) -> Result<i32> {
    usize::try_from(bank)
        .ok()
        .and_then(|b| WS_TO_EDISYN_BANK.get(b))
        .map(|&b| b as i32)
        .ok_or(Error::InvalidBank {
            device,
            bank,
            max: NUM_BANKS as i32,
        })
}

pub fn to_ws_exp(bank: i32) -> i32 {
    EDISYN_TO_WS_BANK_EXP[index(bank)] as i32
}

/// Logical bank for a grouped record bank, or `None` past the table
pub fn from_ws_exp(bank: i32) -> Option<i32> {
    usize::try_from(bank)
        .ok()
        .and_then(|b| WS_BANK_EXP_TO_EDISYN.get(b))
        .map(|&b| b as i32)
}

/// Display name of a logical bank
pub fn name(bank: i32) -> &'static str {
    BANKS[index(bank)]
}

/// Location name such as `RAM 1 07`
pub fn location_name(bank: i32, number: i32) -> String {
    format!("{} {:02}", name(bank), number)
}
