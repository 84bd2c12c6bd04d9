//! Wavestation performance codec

use super::params as p;
use super::{bank, fx, header, is_message, msg, pack, param_message, unpack};
use crate::codec::bytes::{Reader, Writer};
use crate::codec::name::{name_bytes, name_from_bytes};
use crate::devices::{check_location, check_number, Destination, EncodeOptions, PatchCodec};
use crate::error::{Error, Result};
use crate::frame::{self, cc, status};
use crate::model::Model;
use tracing::warn;

pub const NAME: &str = "wavestation-performance";

/// Raw performance record: name, effect block, eight parts
pub const RECORD_LEN: usize = 16 + fx::BLOCK_LEN + NUM_PARTS * PART_LEN;

pub const DUMP_LEN: usize = 7 + RECORD_LEN * 2 + 2;

pub const PERFORMANCES_PER_BANK: usize = 50;

pub const BANK_DUMP_LEN: usize = 6 + PERFORMANCES_PER_BANK * RECORD_LEN * 2 + 2;

pub const NUM_PARTS: usize = 8;

const PART_LEN: usize = 18;

/// Part sub-keys and the parameters they are sent with
const PART_KEYS: &[(&str, u16)] = &[
    ("bank", p::PART_PATCH_BANK),
    ("number", p::PART_PATCH_NUM),
    ("sustain", p::PART_SUS_ENABLE),
    ("voicemode", p::PART_MODE),
    ("keypriority", p::PART_UNI_NOTE_PRIORITY),
    ("scale", p::PART_MTUNE_TAB),
    ("playmode", p::PART_PLAY_MODE),
    ("scalekey", p::PART_MTUNE_KEY),
    ("volume", p::PART_VOLUME),
    ("fxbus", p::PART_OUTPUT),
    ("delay", p::PART_DELAY),
    ("transpose", p::PART_TRANSPOSE),
    ("detune", p::PART_DETUNE),
    ("lowkey", p::PART_KEY_LIMIT_LOW),
    ("hikey", p::PART_KEY_LIMIT_HIGH),
    ("lowvel", p::PART_VEL_LIMIT_LOW),
    ("hivel", p::PART_VEL_LIMIT_HIGH),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Part {
    bank_num: i32,
    patch_num: i32,
    level: i32,
    output: i32,
    part_mode: i32,
    lo_key: i32,
    hi_key: i32,
    lo_vel: i32,
    hi_vel: i32,
    trans: i32,
    detune: i32,
    tune_tab: i32,
    micro_tune_key: i32,
    midi_out_chan: i32,
    midi_prog_num: i32,
    sus_enable: i32,
    delay: i32,
}

impl Part {
    fn read(r: &mut Reader) -> Result<Self> {
        Ok(Self {
            bank_num: r.byte()? as i32,
            patch_num: r.byte()? as i32,
            level: r.ubyte()? as i32,
            output: r.byte()? as i32,
            part_mode: r.ubyte()? as i32,
            lo_key: r.ubyte()? as i32,
            hi_key: r.ubyte()? as i32,
            lo_vel: r.ubyte()? as i32,
            hi_vel: r.ubyte()? as i32,
            trans: r.byte()? as i32,
            detune: r.byte()? as i32,
            tune_tab: r.ubyte()? as i32,
            micro_tune_key: r.ubyte()? as i32,
            midi_out_chan: r.ubyte()? as i32,
            midi_prog_num: r.byte()? as i32,
            sus_enable: r.byte()? as i32,
            delay: r.uword()? as i32,
        })
    }

    fn write(&self, w: &mut Writer) {
        w.byte(self.bank_num as i8);
        w.byte(self.patch_num as i8);
        w.ubyte(self.level as u8);
        w.byte(self.output as i8);
        w.ubyte(self.part_mode as u8);
        w.ubyte(self.lo_key as u8);
        w.ubyte(self.hi_key as u8);
        w.ubyte(self.lo_vel as u8);
        w.ubyte(self.hi_vel as u8);
        w.byte(self.trans as i8);
        w.byte(self.detune as i8);
        w.ubyte(self.tune_tab as u8);
        w.ubyte(self.micro_tune_key as u8);
        w.ubyte(self.midi_out_chan as u8);
        w.byte(self.midi_prog_num as i8);
        w.byte(self.sus_enable as i8);
        w.uword(self.delay as u16);
    }

    fn to_model(&self, m: &mut Model, part: &str) {
        let k = |s: &str| format!("{part}{s}");
        // unused parts carry a negative bank
        let bank = if (0..=4).contains(&self.bank_num) {
            bank::from_ws_exp(((self.part_mode >> 6) & 3) * 4 + self.bank_num).unwrap_or(0)
        } else {
            0
        };
        m.set(k("bank"), bank);
        m.set(k("playmode"), ((self.part_mode >> 4) & 3) - 1);
        m.set(k("voicemode"), ((self.part_mode >> 2) & 3) - 1);
        m.set(k("keypriority"), self.part_mode & 3);
        m.set(k("number"), self.patch_num);
        m.set(k("volume"), self.level);
        m.set(k("fxbus"), self.output);
        m.set(k("lowkey"), self.lo_key);
        m.set(k("hikey"), self.hi_key);
        m.set(k("lowvel"), self.lo_vel);
        m.set(k("hivel"), self.hi_vel);
        m.set(k("transpose"), self.trans);
        m.set(k("detune"), self.detune);
        m.set(k("scale"), self.tune_tab);
        m.set(k("scalekey"), self.micro_tune_key + 1);
        m.set(k("sustain"), self.sus_enable);
        m.set(k("delay"), self.delay);
    }

    fn from_model(m: &Model, part: &str) -> Self {
        let get = |s: &str| m.get(&format!("{part}{s}"));
        let b = bank::to_ws_exp(get("bank"));
        Self {
            bank_num: b % 4,
            patch_num: get("number"),
            level: get("volume"),
            output: get("fxbus"),
            part_mode: (((b / 4) & 3) << 6)
                | ((get("playmode") + 1) << 4)
                | ((get("voicemode") + 1) << 2)
                | get("keypriority"),
            lo_key: get("lowkey"),
            hi_key: get("hikey"),
            lo_vel: get("lowvel"),
            hi_vel: get("hivel"),
            trans: get("transpose"),
            detune: get("detune"),
            tune_tab: get("scale"),
            micro_tune_key: get("scalekey") - 1,
            midi_out_chan: 0,
            midi_prog_num: 0,
            sus_enable: get("sustain"),
            delay: get("delay"),
        }
    }
}

/// Decode one performance record into a model
fn decode_record(record: &[u8]) -> Result<Model> {
    let mut r = Reader::new(record);
    let name = r.bytes::<16>()?;
    let block = r.bytes::<{ fx::BLOCK_LEN }>()?;

    let mut m = Model::new();
    m.set_str("name", name_from_bytes(&name));
    fx::decode(&block, &mut m);
    for i in 1..=NUM_PARTS {
        Part::read(&mut r)?.to_model(&mut m, &format!("part{i}"));
    }
    Ok(m)
}

/// Encode a model into a raw performance record
fn encode_record(m: &Model) -> Vec<u8> {
    let mut w = Writer::with_capacity(RECORD_LEN);
    w.bytes(&name_bytes::<16>(m.get_str("name", "Untitled")));
    w.bytes(&fx::encode(m));
    for i in 1..=NUM_PARTS {
        Part::from_model(m, &format!("part{i}")).write(&mut w);
    }
    w.into_inner()
}

/// Split `part3volume` into (3, "volume")
fn split_part_key(key: &str) -> Option<(i32, &str)> {
    let rest = key.strip_prefix("part")?;
    let digit = rest.chars().next()?.to_digit(10)? as usize;
    if !(1..=NUM_PARTS).contains(&digit) {
        return None;
    }
    Some((digit as i32, &rest[1..]))
}

/// Wavestation SR performance codec
#[derive(Debug, Default)]
pub struct WavestationPerformance;

impl WavestationPerformance {
    pub fn new() -> Self {
        Self
    }

    fn is_single(data: &[u8]) -> bool {
        is_message(data, msg::PERFORMANCE_DUMP, DUMP_LEN)
    }

    fn is_bank(data: &[u8]) -> bool {
        is_message(data, msg::PERFORMANCE_BANK_DUMP, BANK_DUMP_LEN)
    }

    /// Apply factory settings for `fx_type` to effect 1 or 2
    pub fn apply_fx_preset(&self, model: &mut Model, fx_num: usize, fx_type: i32) {
        fx::apply_preset(model, fx_num, fx_type);
    }
}

impl PatchCodec for WavestationPerformance {
    fn name(&self) -> &'static str {
        NAME
    }

    fn recognize(&self, data: &[u8]) -> bool {
        Self::is_single(data) || Self::is_bank(data)
    }

    fn decode(&self, data: &[u8], number: Option<i32>) -> Result<Model> {
        let (record, number) = if Self::is_single(data) {
            if !frame::verify_checksum(data, 7) {
                warn!("{}: checksum mismatch", NAME);
            }
            (unpack(data, 7, RECORD_LEN), data[6] as i32)
        } else if Self::is_bank(data) {
            let number = number.unwrap_or(0);
            check_number(self, number)?;
            let offset = 6 + number as usize * RECORD_LEN * 2;
            (unpack(data, offset, RECORD_LEN), number)
        } else {
            return Err(Error::Unrecognized(format!(
                "{} bytes is not a Wavestation performance dump",
                data.len()
            )));
        };

        let mut model = decode_record(&record)?;
        model.set("bank", bank::from_ws(NAME, data[5] as i32)?);
        model.set("number", number);
        self.revise(&mut model);
        Ok(model)
    }

    fn encode(&self, model: &Model, options: &EncodeOptions) -> Result<Vec<Vec<u8>>> {
        check_location(self, model)?;
        let mut head = header(options.channel).to_vec();
        head.push(msg::PERFORMANCE_DUMP);
        head.push(bank::to_ws(model.get("bank")) as u8);
        head.push(model.get("number") as u8);

        let mut out = vec![pack(&head, &encode_record(model))];
        if options.destination == Destination::Store {
            out.push(param_message(options.channel, p::EXECUTE_WRITE, 1));
        }
        Ok(out)
    }

    fn emit_parameter(&self, model: &Model, key: &str, channel: u8) -> Vec<Vec<u8>> {
        match key {
            "bank" | "number" => return Vec::new(),
            "name" => return vec![param_message(channel, p::PROG_NAME, model.get_str("name", ""))],
            _ => {}
        }

        if let Some(msgs) = fx::emit(model, key, channel) {
            return msgs;
        }

        if let Some((part, sub)) = split_part_key(key) {
            if let Some(&(_, param)) = PART_KEYS.iter().find(|(k, _)| *k == sub) {
                let value = model.get(key);
                let value = match sub {
                    "bank" => bank::to_ws(value),
                    "voicemode" | "playmode" => value + 1,
                    _ => value,
                };
                return vec![
                    param_message(channel, p::CURRENT_PART, part),
                    param_message(channel, param, value),
                ];
            }
        }

        warn!("{}: unknown parameter {}", NAME, key);
        Vec::new()
    }

    fn request_dump(&self, model: &Model, channel: u8) -> Vec<u8> {
        let mut out = header(channel).to_vec();
        out.extend_from_slice(&[
            msg::PERFORMANCE_REQUEST,
            bank::to_ws(model.get("bank")) as u8,
            (model.get("number") & 0x7F) as u8,
            status::EOX,
        ]);
        out
    }

    fn change_patch(&self, model: &Model, channel: u8) -> Vec<Vec<u8>> {
        let b = bank::index(model.get("bank"));
        let number = model.get("number");
        vec![
            param_message(channel, p::MIDI_MODE, super::MULTISET_MIDI_MODE),
            param_message(channel, p::MIDI_MODE, super::PERFORMANCE_MIDI_MODE),
            frame::control_change(channel, cc::BANK_SELECT, bank::MIDI_BANKS[b]),
            frame::program_change(channel, number + bank::MIDI_PROG_CHANGE_OFFSETS[b]),
            param_message(channel, p::CURRENT_BANK, bank::to_ws(b as i32)),
            param_message(channel, p::CURRENT_PROG, number),
        ]
    }

    fn revise(&self, model: &mut Model) {
        let name = super::sanitize_name(model.get_str("name", "Init"));
        model.set_str("name", name);
    }

    fn init_model(&self) -> Model {
        let mut m = Model::new();
        m.set("bank", 0);
        m.set("number", 0);
        m.set_str("name", "Init");
        m.set("fxseries", 0);
        for key in fx::HEADER_KEYS {
            m.set(key, 0);
        }
        for fx_num in 1..=fx::NUM_FX {
            m.set(fx::type_key(fx_num), 0);
        }
        for i in 1..=NUM_PARTS {
            let k = |s: &str| format!("part{i}{s}");
            m.set(k("bank"), 0);
            m.set(k("number"), 0);
            m.set(k("volume"), if i == 1 { 99 } else { 0 });
            m.set(k("fxbus"), 0);
            m.set(k("lowkey"), 0);
            m.set(k("hikey"), 127);
            m.set(k("lowvel"), 1);
            m.set(k("hivel"), 127);
            m.set(k("transpose"), 0);
            m.set(k("detune"), 0);
            m.set(k("scale"), 0);
            m.set(k("scalekey"), 1);
            m.set(k("sustain"), 1);
            m.set(k("delay"), 0);
            m.set(k("playmode"), 0);
            m.set(k("voicemode"), 0);
            m.set(k("keypriority"), 0);
        }
        m
    }

    fn location_name(&self, model: &Model) -> String {
        bank::location_name(model.get("bank"), model.get("number"))
    }

    fn num_banks(&self) -> usize {
        bank::NUM_BANKS
    }

    fn patches_per_bank(&self) -> usize {
        PERFORMANCES_PER_BANK
    }

    fn pause_after_parameter_ms(&self) -> u32 {
        40
    }

    fn pause_after_change_patch_ms(&self) -> u32 {
        300
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::wavestation::fx_tables::FX_INDICES;

    /// Helper to build a performance with every part and both effects in use
    fn busy_model() -> Model {
        let codec = WavestationPerformance::new();
        let mut m = codec.init_model();
        m.set("bank", 10);
        m.set("number", 42);
        m.set_str("name", "Night Train");
        m.set("fxseries", 1);
        m.set("fxmod3amount", -7);
        m.set("fxmix4amount", 9);
        codec.apply_fx_preset(&mut m, 1, 3);
        codec.apply_fx_preset(&mut m, 2, 49);
        for i in 1..=NUM_PARTS as i32 {
            let k = |s: &str| format!("part{i}{s}");
            m.set(k("bank"), (i * 3) % 12);
            m.set(k("number"), i * 4);
            m.set(k("volume"), 90 - i);
            m.set(k("fxbus"), i % 4);
            m.set(k("lowkey"), i);
            m.set(k("hikey"), 120 - i);
            m.set(k("transpose"), -i);
            m.set(k("detune"), i - 4);
            m.set(k("scale"), i % 3);
            m.set(k("scalekey"), (i % 12) + 1);
            m.set(k("delay"), i * 100);
            m.set(k("playmode"), i % 3 - 1);
            m.set(k("voicemode"), (i + 1) % 3 - 1);
            m.set(k("keypriority"), i % 3);
        }
        m
    }

    #[test]
    fn test_lengths() {
        assert_eq!(RECORD_LEN, 181);
        assert_eq!(DUMP_LEN, 371);
        assert_eq!(BANK_DUMP_LEN, 18108);
        assert_eq!(encode_record(&Model::new()).len(), RECORD_LEN);
    }

    #[test]
    fn test_round_trip() {
        let codec = WavestationPerformance::new();
        let model = busy_model();
        let msgs = codec.encode(&model, &EncodeOptions::default()).unwrap();
        assert_eq!(msgs.len(), 1);
        assert_eq!(&msgs[0][..7], &[0xF0, 0x42, 0x30, 0x28, 0x49, 2, 42]);
        assert!(frame::verify_checksum(&msgs[0], 7));
        let back = codec.decode(&msgs[0], None).unwrap();
        for (key, value) in model.iter() {
            assert_eq!(back.iter().find(|(k, _)| *k == key).map(|(_, v)| v), Some(value), "{}", key);
        }
        let class = fx::class_of(49);
        assert!(back.contains(&fx::slot_key(2, class, FX_INDICES[class].len() - 1)));
    }

    #[test]
    fn test_part_mode_bits() {
        let mut m = Model::new();
        m.set("part1bank", 9);
        m.set("part1playmode", 1);
        m.set("part1voicemode", -1);
        m.set("part1keypriority", 2);
        let part = Part::from_model(&m, "part1");
        // logical 9 is grouped bank 11: group 2, bank 3
        assert_eq!(part.bank_num, 3);
        assert_eq!(part.part_mode, (2 << 6) | (2 << 4) | 2);
    }

    #[test]
    fn test_unused_part_bank_decodes_to_zero() {
        let part = Part {
            bank_num: -1,
            part_mode: 0xC0,
            ..Part::default()
        };
        let mut m = Model::new();
        part.to_model(&mut m, "part2");
        assert_eq!(m.get("part2bank"), 0);

        let part = Part {
            bank_num: 4,
            part_mode: 0xC0,
            ..Part::default()
        };
        part.to_model(&mut m, "part2");
        assert_eq!(m.get("part2bank"), 0);
    }

    #[test]
    fn test_bank_dump_selects_performance() {
        let codec = WavestationPerformance::new();
        let mut target = codec.init_model();
        target.set_str("name", "Picked");
        target.set("part1volume", 55);
        let filler = encode_record(&codec.init_model());
        let chosen = encode_record(&target);

        let mut records = Vec::new();
        for i in 0..PERFORMANCES_PER_BANK {
            records.extend_from_slice(if i == 13 { &chosen } else { &filler });
        }
        let mut head = header(0).to_vec();
        head.extend_from_slice(&[msg::PERFORMANCE_BANK_DUMP, 4]);
        let dump = pack(&head, &records);
        assert_eq!(dump.len(), BANK_DUMP_LEN);
        assert!(codec.recognize(&dump));

        let m = codec.decode(&dump, Some(13)).unwrap();
        assert_eq!(m.get_str("name", ""), "Picked");
        assert_eq!(m.get("part1volume"), 55);
        assert_eq!(m.get("bank"), 2);
        assert_eq!(m.get("number"), 13);
        assert!(matches!(
            codec.decode(&dump, Some(50)),
            Err(Error::InvalidPatchNumber { number: 50, .. })
        ));
    }

    #[test]
    fn test_unknown_bank_byte_is_rejected() {
        let codec = WavestationPerformance::new();
        let mut dump = codec
            .encode(&codec.init_model(), &EncodeOptions::default())
            .unwrap()
            .remove(0);
        dump[5] = 0x40;
        assert!(matches!(
            codec.decode(&dump, None),
            Err(Error::InvalidBank { bank: 0x40, .. })
        ));
    }

    #[test]
    fn test_store_appends_execute_write() {
        let codec = WavestationPerformance::new();
        let m = codec.init_model();
        let msgs = codec.encode(&m, &EncodeOptions::new(0, Destination::Store)).unwrap();
        assert_eq!(msgs.len(), 2);
        assert_eq!(msgs[1], param_message(0, p::EXECUTE_WRITE, 1));
        let msgs = codec.encode(&m, &EncodeOptions::new(0, Destination::WorkingMemory)).unwrap();
        assert_eq!(msgs.len(), 1);
    }

    #[test]
    fn test_emit_part_parameters() {
        let codec = WavestationPerformance::new();
        let m = busy_model();
        let msgs = codec.emit_parameter(&m, "part3volume", 1);
        assert_eq!(
            msgs,
            vec![param_message(1, p::CURRENT_PART, 3), param_message(1, p::PART_VOLUME, 87)]
        );
        let msgs = codec.emit_parameter(&m, "part2playmode", 0);
        assert_eq!(msgs[1], param_message(0, p::PART_PLAY_MODE, 2));
        let msgs = codec.emit_parameter(&m, "part4bank", 0);
        assert_eq!(msgs[1], param_message(0, p::PART_PATCH_BANK, 0));
        let msgs = codec.emit_parameter(&m, "part1bank", 0);
        assert_eq!(msgs[1], param_message(0, p::PART_PATCH_BANK, bank::to_ws(3)));
    }

    #[test]
    fn test_emit_name_fx_and_unknown() {
        let codec = WavestationPerformance::new();
        let m = busy_model();
        assert_eq!(
            codec.emit_parameter(&m, "name", 0),
            vec![param_message(0, p::PROG_NAME, "Night Train")]
        );
        assert_eq!(
            codec.emit_parameter(&m, "fxseries", 0),
            vec![param_message(0, p::FX_PLACEMENT, 1)]
        );
        assert_eq!(codec.emit_parameter(&m, "fx1type", 0), vec![param_message(0, p::FX1_PROG, 3)]);
        assert!(codec.emit_parameter(&m, "bank", 0).is_empty());
        assert!(codec.emit_parameter(&m, "part9volume", 0).is_empty());
        assert!(codec.emit_parameter(&m, "part1bogus", 0).is_empty());
    }

    #[test]
    fn test_change_patch() {
        let codec = WavestationPerformance::new();
        let mut m = Model::new();
        m.set("bank", 3);
        m.set("number", 7);
        let msgs = codec.change_patch(&m, 2);
        assert_eq!(msgs.len(), 6);
        assert_eq!(msgs[0], param_message(2, p::MIDI_MODE, 1));
        assert_eq!(msgs[1], param_message(2, p::MIDI_MODE, 0));
        assert_eq!(msgs[2], vec![0xB2, 0, 2]);
        assert_eq!(msgs[3], vec![0xC2, 57]);
        assert_eq!(msgs[4], param_message(2, p::CURRENT_BANK, 5));
        assert_eq!(msgs[5], param_message(2, p::CURRENT_PROG, 7));
        assert_eq!(codec.pause_after_change_patch_ms(), 300);
    }

    #[test]
    fn test_request_dump() {
        let codec = WavestationPerformance::new();
        let mut m = Model::new();
        m.set("bank", 2);
        m.set("number", 49);
        assert_eq!(
            codec.request_dump(&m, 12),
            vec![0xF0, 0x42, 0x3C, 0x28, 0x19, 4, 49, 0xF7]
        );
    }
}
