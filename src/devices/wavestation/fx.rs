//! Performance effect block
//!
//! The 21-byte block opens with a five-byte header (effect types, mix and
//! modulation routing) followed by eight bytes of packed data per effect.
//! Effect data is described per class by the tables in [`super::fx_tables`].

use super::fx_tables::{
    FIRST_EXTENDED_FX, FX_INDICES, FX_MAP, FX_PARAMETERS, FX_PCL, FX_PRESETS, NUM_FX_TYPES,
};
use super::params as p;
use super::param_message;
use crate::codec::bitfield;
use crate::model::Model;
use tracing::warn;

pub const BLOCK_LEN: usize = 21;

/// Effects per performance
pub const NUM_FX: usize = 2;

/// Header keys in slot order
pub const HEADER_KEYS: [&str; 6] = [
    "fxmix3amount",
    "fxmod3source",
    "fxmod3amount",
    "fxmix4amount",
    "fxmod4source",
    "fxmod4amount",
];

/// Header slots map one to one onto the header descriptors' parameter numbers
const HEADER_INDICES: [u8; 6] = [0, 1, 2, 3, 4, 5];

/// Type field value meaning no effect
const NO_EFFECT_FIELD: u8 = 2;

/// Byte offset of an effect's packed data; its low nibble also holds the
/// extended type
fn base(fx: usize) -> usize {
    5 + 8 * (fx - 1)
}

/// Effect type clamped into the type tables
pub fn type_index(fx_type: i32) -> usize {
    fx_type.clamp(0, NUM_FX_TYPES as i32 - 1) as usize
}

/// Class an effect type's data is packed with
pub fn class_of(fx_type: i32) -> usize {
    FX_MAP[type_index(fx_type)]
}

pub fn type_key(fx: usize) -> String {
    format!("fx{fx}type")
}

pub fn slot_key(fx: usize, class: usize, slot: usize) -> String {
    format!("fx{fx}class{class}param{slot}")
}

/// Split `fx2class7param3` into (2, 7, 3)
pub fn parse_slot_key(key: &str) -> Option<(usize, usize, usize)> {
    let rest = key.strip_prefix("fx")?;
    let (fx, rest) = rest.split_once("class")?;
    let (class, slot) = rest.split_once("param")?;
    let fx: usize = fx.parse().ok()?;
    let class: usize = class.parse().ok()?;
    let slot: usize = slot.parse().ok()?;
    if !(1..=NUM_FX).contains(&fx) || slot >= FX_INDICES.get(class)?.len() {
        return None;
    }
    Some((fx, class, slot))
}

/// Read the effect block into `m`
pub fn decode(block: &[u8], m: &mut Model) {
    let header = bitfield::decode(block, 0, FX_PCL[0], &HEADER_INDICES);
    for (key, value) in HEADER_KEYS.iter().zip(header) {
        m.set(*key, value);
    }
    m.set("fxseries", (block[0] >> 7) as i32);
    let extended = block[1] & 0x80 != 0;

    for fx in 1..=NUM_FX {
        let field = (block[fx - 1] & 0x3F) as i32 - NO_EFFECT_FIELD as i32;
        let nibble = (block[base(fx)] & 0x0F) as i32;
        let mut fx_type = if extended && field == 0 && nibble > 0 {
            FIRST_EXTENDED_FX - 1 + nibble
        } else {
            field
        };
        if !(0..NUM_FX_TYPES as i32).contains(&fx_type) {
            warn!("fx{}: type field {} out of range, treating as off", fx, fx_type);
            fx_type = 0;
        }
        m.set(type_key(fx), fx_type);
        if fx_type == 0 {
            continue;
        }

        let class = class_of(fx_type);
        let slots = bitfield::decode(block, base(fx), FX_PCL[class], FX_INDICES[class]);
        for (slot, value) in slots.into_iter().enumerate() {
            m.set(slot_key(fx, class, slot), value);
        }
    }
}

/// Build the effect block from `m`. Extended mode is always set.
pub fn encode(m: &Model) -> [u8; BLOCK_LEN] {
    let mut block = [0u8; BLOCK_LEN];
    let header: Vec<i32> = HEADER_KEYS.iter().map(|k| m.get(k)).collect();
    bitfield::encode(&mut block, 0, FX_PCL[0], &HEADER_INDICES, &header);
    block[0] |= ((m.get("fxseries") & 1) as u8) << 7;
    block[1] |= 0x80;

    for fx in 1..=NUM_FX {
        let fx_type = type_index(m.get(&type_key(fx))) as i32;
        if fx_type != 0 {
            let class = class_of(fx_type);
            let slots: Vec<i32> = (0..FX_INDICES[class].len())
                .map(|slot| m.get(&slot_key(fx, class, slot)))
                .collect();
            bitfield::encode(&mut block, base(fx), FX_PCL[class], FX_INDICES[class], &slots);
        }

        // type fields go in last; the class data shares these bytes
        if fx_type >= FIRST_EXTENDED_FX {
            block[fx - 1] |= NO_EFFECT_FIELD;
            let at = base(fx);
            block[at] = (block[at] & 0xF0) | (fx_type - FIRST_EXTENDED_FX + 1) as u8;
        } else {
            block[fx - 1] |= (fx_type as u8 + NO_EFFECT_FIELD) & 0x3F;
        }
    }
    block
}

/// Set effect `fx` to `fx_type` with that type's factory settings
pub fn apply_preset(m: &mut Model, fx: usize, fx_type: i32) {
    let fx_type = type_index(fx_type);
    m.set(type_key(fx), fx_type as i32);
    let class = FX_MAP[fx_type];
    let values: Vec<i32> = FX_PRESETS[fx_type].iter().map(|&v| v as i32).collect();
    let slots = bitfield::assemble(&values, FX_PCL[class], FX_INDICES[class]);
    for (slot, value) in slots.into_iter().enumerate() {
        m.set(slot_key(fx, class, slot), value);
    }
}

fn prog_param(fx: usize) -> u16 {
    if fx == 1 {
        p::FX1_PROG
    } else {
        p::FX2_PROG
    }
}

/// Messages for one effect key, or `None` when `key` is not an effect key
pub fn emit(m: &Model, key: &str, channel: u8) -> Option<Vec<Vec<u8>>> {
    let value = m.get(key);
    let param = match key {
        "fxseries" => p::FX_PLACEMENT,
        "fxmix3amount" => p::FX_MIX_3,
        "fxmix4amount" => p::FX_MIX_4,
        "fxmod3source" => p::FX_MOD_3,
        "fxmod4source" => p::FX_MOD_4,
        "fxmod3amount" => p::FX_MOD_AMT_3,
        "fxmod4amount" => p::FX_MOD_AMT_4,
        "fx1type" => p::FX1_PROG,
        "fx2type" => p::FX2_PROG,
        _ => {
            let (fx, class, slot) = parse_slot_key(key)?;
            return Some(vec![
                param_message(channel, prog_param(fx), m.get(&type_key(fx))),
                param_message(channel, p::CURRENT_FX, fx as i32),
                param_message(channel, FX_PARAMETERS[class][slot], value),
            ]);
        }
    };
    Some(vec![param_message(channel, param, value)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::wavestation::fx_tables::NUM_FX_CLASSES;

    fn with_preset(fx: usize, fx_type: i32) -> Model {
        let mut m = Model::new();
        apply_preset(&mut m, fx, fx_type);
        m
    }

    #[test]
    fn test_tables_agree() {
        for class in 0..NUM_FX_CLASSES {
            assert_eq!(FX_INDICES[class].len(), FX_PARAMETERS[class].len(), "class {}", class);
        }
        for fx_type in 1..NUM_FX_TYPES {
            let class = FX_MAP[fx_type];
            assert_eq!(FX_PRESETS[fx_type].len(), FX_PCL[class].len(), "type {}", fx_type);
        }
    }

    #[test]
    fn test_all_zero_descriptors_per_class() {
        for class in 1..NUM_FX_CLASSES {
            let zeros = vec![0; FX_INDICES[class].len()];
            let mut block = [0xFFu8; BLOCK_LEN];
            bitfield::encode(&mut block, 5, FX_PCL[class], FX_INDICES[class], &zeros);
            let decoded = bitfield::decode(&block, 5, FX_PCL[class], FX_INDICES[class]);
            assert_eq!(decoded, zeros, "class {}", class);
        }
    }

    #[test]
    fn test_preset_round_trip_every_type() {
        for fx_type in 1..NUM_FX_TYPES as i32 {
            for fx in 1..=NUM_FX {
                let m = with_preset(fx, fx_type);
                let mut back = Model::new();
                decode(&encode(&m), &mut back);
                assert_eq!(back.get(&type_key(fx)), fx_type);
                let class = class_of(fx_type);
                for slot in 0..FX_INDICES[class].len() {
                    let key = slot_key(fx, class, slot);
                    assert_eq!(back.get(&key), m.get(&key), "type {} {}", fx_type, key);
                }
            }
        }
    }

    #[test]
    fn test_extended_types_use_nibble() {
        for fx_type in FIRST_EXTENDED_FX..NUM_FX_TYPES as i32 {
            let m = with_preset(2, fx_type);
            let block = encode(&m);
            assert_eq!(block[1] & 0x3F, NO_EFFECT_FIELD);
            assert_eq!((block[13] & 0x0F) as i32, fx_type - 47);
            assert_eq!(block[1] & 0x80, 0x80);
        }
    }

    #[test]
    fn test_extended_nibble_ignored_without_extended_mode() {
        let mut block = [0u8; BLOCK_LEN];
        block[0] = NO_EFFECT_FIELD;
        block[1] = NO_EFFECT_FIELD;
        block[5] = 3;
        let mut m = Model::new();
        decode(&block, &mut m);
        assert_eq!(m.get("fx1type"), 0);

        block[1] |= 0x80;
        decode(&block, &mut m);
        assert_eq!(m.get("fx1type"), 50);
    }

    #[test]
    fn test_standard_type_field() {
        let m = with_preset(1, 21);
        let block = encode(&m);
        assert_eq!(block[0] & 0x3F, 23);
        assert_eq!(block[1] & 0x3F, NO_EFFECT_FIELD);
    }

    #[test]
    fn test_header_round_trip_with_signs() {
        let mut m = Model::new();
        m.set("fxseries", 1);
        m.set("fxmix3amount", 11);
        m.set("fxmod3source", 7);
        m.set("fxmod3amount", -3);
        m.set("fxmix4amount", 4);
        m.set("fxmod4source", 15);
        m.set("fxmod4amount", -15);
        let block = encode(&m);
        assert_eq!(block[0] & 0xC0, 0xC0);
        let mut back = Model::new();
        decode(&block, &mut back);
        for key in HEADER_KEYS.iter().chain(&["fxseries"]) {
            assert_eq!(back.get(key), m.get(key), "{}", key);
        }

        m.set("fxmod3amount", 9);
        let mut back = Model::new();
        decode(&encode(&m), &mut back);
        assert_eq!(back.get("fxmod3amount"), 9);
    }

    #[test]
    fn test_out_of_range_type_field_is_off() {
        let mut block = [0u8; BLOCK_LEN];
        block[0] = 63;
        let mut m = Model::new();
        decode(&block, &mut m);
        assert_eq!(m.get("fx1type"), 0);
    }

    #[test]
    fn test_parse_slot_key() {
        assert_eq!(parse_slot_key("fx2class7param3"), Some((2, 7, 3)));
        assert_eq!(parse_slot_key("fx3class7param3"), None);
        assert_eq!(parse_slot_key("fx1class7param99"), None);
        assert_eq!(parse_slot_key("fx1class99param0"), None);
        assert_eq!(parse_slot_key("fxseries"), None);
    }

    #[test]
    fn test_emit() {
        let m = with_preset(2, 21);
        let class = class_of(21);
        let msgs = emit(&m, &slot_key(2, class, 1), 0).unwrap();
        assert_eq!(msgs.len(), 3);
        assert_eq!(msgs[0], param_message(0, p::FX2_PROG, 21));
        assert_eq!(msgs[1], param_message(0, p::CURRENT_FX, 2));
        assert_eq!(
            msgs[2],
            param_message(0, FX_PARAMETERS[class][1], m.get(&slot_key(2, class, 1)))
        );

        let mut m = Model::new();
        m.set("fxmod4amount", -4);
        assert_eq!(emit(&m, "fxmod4amount", 0).unwrap(), vec![param_message(0, 265, -4)]);
        assert!(emit(&m, "part1volume", 0).is_none());
    }
}
