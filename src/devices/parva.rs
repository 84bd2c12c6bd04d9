//! Futuresonus Parva patch codec
//!
//! A Parva patch is a flat table of 217 one-byte parameters, sent high nibble
//! first after a 16-character name. Single parameters travel as control
//! changes (table index below 128) or NRPNs (index minus 128).

use crate::codec::name::name_from_bytes;
use crate::codec::nybble::{denybblize_len, nybblize, NybbleOrder};
use crate::codec::table::ParamTable;
use crate::devices::{check_location, Destination, EncodeOptions, PatchCodec};
use crate::error::{Error, Result};
use crate::frame::{self, cc, status};
use crate::model::Model;
use tracing::{debug, warn};

pub const NAME: &str = "parva";

/// Futuresonus uses the non-commercial manufacturer ID
pub const MANUFACTURER_ID: u8 = 0x7D;

pub const NYBBLE_ORDER: NybbleOrder = NybbleOrder::HighFirst;

pub const NAME_LENGTH: usize = 16;

/// Header bytes before the name: F0 7D 00 7F, bank, number
const HEADER_LEN: usize = 6;

/// Offset of the first parameter nibble
const DATA_OFFSET: usize = HEADER_LEN + NAME_LENGTH * 2;

/// Shortest frame that holds a header, a name and EOX
pub const MIN_DUMP_LEN: usize = DATA_OFFSET + 1;

/// Full frame as written by [`Parva`]
pub const DUMP_LEN: usize = DATA_OFFSET + PARAMETERS.len() * 2 + 1;

/// Highest table index addressed by a control change; later entries use NRPN
pub const NUM_CC: usize = 128;

pub const BANKS: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

pub const PATCHES_PER_BANK: usize = 64;

const DUMP: u8 = 0x40;
const REQUEST: u8 = 0x50;
const REQUEST_CURRENT: u8 = 0x5F;

pub const VOICE_CONFIGURATIONS: [&str; 3] = ["Poly", "Unison", "Mono"];
pub const CURVES: [&str; 2] = ["Exponential", "Linear"];
pub const GLIDE_MODES: [&str; 3] = ["Off", "Rate", "Time"];
pub const LFO_WAVES: [&str; 5] = ["Triangle", "Sawtooth", "Ramp", "Square", "Sample & Hold"];
pub const VCF_TYPES: [&str; 5] = ["24dB LP", "12dB LP", "24dB HP", "12dB HP", "12dB BP"];

/// MIDI clock divisions for LFO sync
pub const TICKS: [&str; 16] = [
    "Off", "8 Bars", "4 Bars", "2 Bars", "1.5 Bars", "Whole Note", "Dotted Half", "Half Note",
    "Quarter Note", "Dotted 8th", "Quarter Triplet", "8th Note", "Dotted 16th", "8th Triplet",
    "16th Note", "16th Triplet",
];

pub const MOD_SOURCES: [&str; 14] = [
    "Off", "Velocity", "Aftertouch", "Mod Wheel", "LFO1", "LFO2", "LFO3", "LFO4", "ENV1", "ENV2",
    "ENV3", "ENV4", "Breath", "Note",
];

pub const MOD_DESTINATIONS: [&str; 53] = [
    "Off", "OSC1 Freq.", "OSC2 Freq.", "OSC3 Freq.", "OSC* Freq.", "OSC1 Level", "OSC2 Level",
    "OSC3 Level", "Noise Level", "OSC1 PWM", "OSC2 PWM", "OSC3 PWM", "OSC* PWM", "VCF Cutoff",
    "VCF Resonance", "VCF OSC3 Mod", "VCA Level", "Pan", "LFO1 Freq.", "LFO2 Freq.", "LFO3 Freq.",
    "LFO4 Freq.", "LFO* Freq.", "LFO1 Level", "LFO2 Level", "LFO3 Level", "LFO4 Level",
    "LFO* Level", "ENV1 Level", "ENV2 Level", "ENV3 Level", "ENV4 Level", "ENV* Level",
    "ENV1 Attack", "ENV2 Attack", "ENV3 Attack", "ENV4 Attack", "ENV* Attack", "ENV1 Decay",
    "ENV2 Decay", "ENV3 Decay", "ENV4 Decay", "ENV* Decay", "ENV1 Sustain", "ENV2 Sustain",
    "ENV3 Sustain", "ENV4 Sustain", "ENV* Sustain", "ENV1 Release", "ENV2 Release",
    "ENV3 Release", "ENV4 Release", "ENV* Release",
];

/// Parameter at each payload byte. Index is also the CC number (below 128)
/// or the NRPN number plus 128.
#[rustfmt::skip]
const PARAMETERS: [&str; 217] = [
    "-", "-", "-", "-", "-", "-", "-", "-", "-", "-", "spread", "-", "slop", "pan",    // 0
    "noise", "osc1range", "osc1fine", "osc1wave", "osc1level", "osc1glide",            // 14
    "osc2range", "osc2fine", "osc2wave", "osc2level", "osc2glide", "osc2sync",         // 20
    "osc3range", "osc3fine", "osc3wave", "osc3level", "osc3glide", "osc3sync", "-",    // 26
    "-", "glide", "-", "-", "-", "-", "lfo1rate", "lfo1wave", "lfo1depth",             // 33
    "lfo1moddst", "lfo1keysync", "lfo2rate", "lfo2wave", "lfo2depth", "lfo2moddst",    // 42
    "lfo2keysync", "lfo3rate", "lfo3wave", "lfo3depth", "lfo3moddst", "lfo3keysync",   // 48
    "lfo4rate", "lfo4wave", "lfo4depth", "lfo4moddst", "lfo4keysync", "-", "range",    // 54
    "-", "-", "-", "-", "-", "-", "-", "-", "vcfcutofffine", "vcfcutoff",              // 61
    "vcfresonance", "vcfkeyamt", "vcfaudamt", "-", "vcftype", "env1amount",            // 71
    "env1velocity", "env1attack", "env1decay", "env1sustain", "env1release",           // 77
    "env2amount", "env2velocity", "env2attack", "env2decay", "env2sustain",            // 82
    "env2release", "-", "-", "-", "-", "-", "-", "-", "-", "-", "-", "-", "-", "-",    // 87
    "-", "env3moddst", "env3amount", "env3velocity", "env3attack", "env3decay",        // 101
    "env3sustain", "env3release", "env4moddst", "env4amount", "env4velocity",          // 107
    "env4attack", "env4decay", "env4sustain", "env4release", "-", "-", "-", "-", "-",  // 112
    "-", "-", "-", "-", "-", "-", "-", "-", "-", "mod1source", "mod1destination",      // 121
    "mod1amount", "mod2source", "mod2destination", "mod2amount", "mod3source",         // 132
    "mod3destination", "mod3amount", "mod4source", "mod4destination", "mod4amount",    // 137
    "mod5source", "mod5destination", "mod5amount", "mod6source", "mod6destination",    // 142
    "mod6amount", "mod7source", "mod7destination", "mod7amount", "mod8source",         // 147
    "mod8destination", "mod8amount", "mod9source", "mod9destination", "mod9amount",    // 152
    "mod10source", "mod10destination", "mod10amount", "mod11source",                   // 157
    "mod11destination", "mod11amount", "mod12source", "mod12destination",              // 161
    "mod12amount", "mod13source", "mod13destination", "mod13amount", "mod14source",    // 165
    "mod14destination", "mod14amount", "mod15source", "mod15destination",              // 170
    "mod15amount", "mod16source", "mod16destination", "mod16amount", "voicecfg",       // 174
    "bendup", "benddown", "detune", "glidemode", "-", "cleanosc", "lfo1polar",         // 179
    "lfo2polar", "lfo3polar", "lfo4polar", "lfo1midiclk", "lfo2midiclk",               // 186
    "lfo3midiclk", "lfo4midiclk", "env1loop", "env2loop", "env3loop", "env4loop",      // 191
    "osc1pulse", "osc2pulse", "osc3pulse", "osc1key", "osc2key", "osc3key",            // 197
    "env1curve", "env2curve", "env3curve", "env4curve", "-", "-", "-", "-", "-", "-",  // 203
    "-", "-", "-", "-",                                                                // 213
];

pub const TABLE: ParamTable = ParamTable::new(&PARAMETERS);

/// Printable ASCII only; DEL is not accepted
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if (' '..='~').contains(&c) { c } else { ' ' })
        .collect()
}

fn name_field(name: &str) -> [u8; NAME_LENGTH] {
    let mut out = [b' '; NAME_LENGTH];
    for (dst, c) in out.iter_mut().zip(name.chars()) {
        *dst = (c as u32 & 0x7F) as u8;
    }
    out
}

/// Futuresonus Parva
#[derive(Debug, Default)]
pub struct Parva;

impl Parva {
    pub fn new() -> Self {
        Self
    }

    fn message(kind: u8, number: u8) -> Vec<u8> {
        vec![status::SYSEX, MANUFACTURER_ID, 0x00, 0x7F, kind, number, status::EOX]
    }

    /// Messages for one table entry: a CC below index 128, an NRPN above
    fn emit_index(index: usize, value: i32, channel: u8) -> Vec<Vec<u8>> {
        if index < NUM_CC {
            vec![frame::control_change(channel, index as u8, value)]
        } else {
            frame::nrpn(channel, (index - NUM_CC) as i32, value)
        }
    }

    /// Every named parameter as a CC or NRPN stream, in table order
    pub fn emit_all(&self, model: &Model, channel: u8) -> Vec<Vec<u8>> {
        (0..TABLE.len())
            .filter_map(|i| TABLE.name(i).map(|name| (i, name)))
            .flat_map(|(i, name)| Self::emit_index(i, model.get(name), channel))
            .collect()
    }

    /// Apply an incoming control change; returns the parameter it set
    pub fn apply_cc(&self, model: &mut Model, number: u8, value: i32) -> Option<&'static str> {
        let index = number as usize;
        if index >= NUM_CC {
            return None;
        }
        let name = TABLE.name(index)?;
        model.set(name, value);
        Some(name)
    }

    /// Apply an incoming NRPN; returns the parameter it set
    pub fn apply_nrpn(&self, model: &mut Model, number: i32, value: i32) -> Option<&'static str> {
        let index = usize::try_from(number).ok()? + NUM_CC;
        let name = TABLE.name(index)?;
        model.set(name, value);
        Some(name)
    }
}

impl PatchCodec for Parva {
    fn name(&self) -> &'static str {
        NAME
    }

    fn recognize(&self, data: &[u8]) -> bool {
        data.len() >= MIN_DUMP_LEN
            && data[..4] == [status::SYSEX, MANUFACTURER_ID, 0x00, 0x7F]
            && (data[4] & 0xF0) == DUMP
            && data[5] < PATCHES_PER_BANK as u8
            && data[data.len() - 1] == status::EOX
    }

    fn decode(&self, data: &[u8], _number: Option<i32>) -> Result<Model> {
        if !self.recognize(data) {
            return Err(Error::Unrecognized(format!(
                "{} bytes is not a Parva patch dump",
                data.len()
            )));
        }

        let mut model = Model::new();
        model.set("bank", (data[4] & 0x0F) as i32);
        model.set("number", data[5] as i32);

        let payload = denybblize_len(data, DATA_OFFSET, data.len() - DATA_OFFSET - 1, NYBBLE_ORDER);
        if payload.len() < TABLE.len() {
            debug!("{}: short dump, {} of {} parameters", NAME, payload.len(), TABLE.len());
        }
        TABLE.decode(&payload, &mut model);

        let name = denybblize_len(data, HEADER_LEN, NAME_LENGTH * 2, NYBBLE_ORDER);
        model.set_str("name", name_from_bytes(&name));

        self.revise(&mut model);
        Ok(model)
    }

    fn encode(&self, model: &Model, options: &EncodeOptions) -> Result<Vec<Vec<u8>>> {
        check_location(self, model)?;
        if options.destination == Destination::WorkingMemory {
            return Ok(self.emit_all(model, options.channel));
        }

        let head = [
            status::SYSEX,
            MANUFACTURER_ID,
            0x00,
            0x7F,
            DUMP | model.get("bank") as u8,
            model.get("number") as u8,
        ];
        let mut payload = nybblize(&name_field(self.patch_name(model)), NYBBLE_ORDER);
        payload.extend(nybblize(&TABLE.encode(model), NYBBLE_ORDER));
        Ok(vec![frame::build(&head, &payload, false)])
    }

    fn emit_parameter(&self, model: &Model, key: &str, channel: u8) -> Vec<Vec<u8>> {
        if matches!(key, "bank" | "number" | "name") {
            return Vec::new();
        }
        match TABLE.index_of(key) {
            Some(index) => Self::emit_index(index, model.get(key), channel),
            None => {
                warn!("{}: unknown parameter {}", NAME, key);
                Vec::new()
            }
        }
    }

    fn request_dump(&self, model: &Model, _channel: u8) -> Vec<u8> {
        Self::message(
            REQUEST | (model.get("bank") & 0x0F) as u8,
            (model.get("number") & 0x7F) as u8,
        )
    }

    fn request_current_dump(&self, _channel: u8) -> Option<Vec<u8>> {
        Some(Self::message(REQUEST_CURRENT, 0))
    }

    fn change_patch(&self, model: &Model, channel: u8) -> Vec<Vec<u8>> {
        vec![
            frame::control_change(channel, cc::BANK_SELECT, model.get("bank")),
            frame::program_change(channel, model.get("number")),
        ]
    }

    fn revise(&self, model: &mut Model) {
        let name = sanitize_name(model.get_str("name", "Init"));
        model.set_str("name", name);
    }

    fn init_model(&self) -> Model {
        let mut m = Model::new();
        m.set("bank", 0);
        m.set("number", 0);
        m.set_str("name", "Init");
        for name in TABLE.names() {
            m.set(name, 0);
        }
        m.set("pan", 64);
        for osc in 1..=3 {
            m.set(format!("osc{osc}range"), 60);
            m.set(format!("osc{osc}fine"), 50);
            m.set(format!("osc{osc}wave"), 1);
        }
        m.set("osc1level", 127);
        for env in 1..=4 {
            m.set(format!("env{env}amount"), 64);
            m.set(format!("env{env}sustain"), 127);
        }
        for slot in 1..=16 {
            m.set(format!("mod{slot}amount"), 64);
        }
        m.set("vcfcutoff", 127);
        m.set("bendup", 2);
        m.set("benddown", 2);
        m
    }

    fn location_name(&self, model: &Model) -> String {
        let bank = model.get("bank").clamp(0, BANKS.len() as i32 - 1) as usize;
        format!("{}{:02}", BANKS[bank], model.get("number"))
    }

    fn num_banks(&self) -> usize {
        BANKS.len()
    }

    fn patches_per_bank(&self) -> usize {
        PATCHES_PER_BANK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_file(model: &Model) -> Vec<u8> {
        let mut msgs = Parva::new().encode(model, &EncodeOptions::default()).unwrap();
        assert_eq!(msgs.len(), 1);
        msgs.remove(0)
    }

    #[test]
    fn test_table_shape() {
        assert_eq!(TABLE.len(), 217);
        assert_eq!(TABLE.index_of("spread"), Some(10));
        assert_eq!(TABLE.index_of("mod1source"), Some(130));
        assert_eq!(TABLE.index_of("voicecfg"), Some(178));
        assert_eq!(TABLE.index_of("env4curve"), Some(206));
        assert_eq!(TABLE.name(216), None);
    }

    #[test]
    fn test_init_frame() {
        let codec = Parva::new();
        let data = encode_file(&codec.init_model());
        assert_eq!(data.len(), DUMP_LEN);
        assert_eq!(data.len(), 473);
        assert_eq!(&data[..6], &[0xF0, 0x7D, 0x00, 0x7F, 0x40, 0x00]);
        assert_eq!(data[data.len() - 1], 0xF7);
        // "I" = 0x49, high nibble first
        assert_eq!(&data[6..8], &[0x4, 0x9]);
        assert!(data[1..data.len() - 1].iter().all(|&b| b < 0x80));
        assert!(codec.recognize(&data));
    }

    #[test]
    fn test_round_trip() {
        let codec = Parva::new();
        let mut m = codec.init_model();
        m.set("bank", 4);
        m.set("number", 63);
        m.set_str("name", "Bass Thing");
        m.set("osc2wave", 53);
        m.set("mod16amount", 127);
        m.set("lfo3midiclk", 15);
        m.set("env4curve", 1);

        let back = codec.decode(&encode_file(&m), None).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn test_short_payload_decodes_prefix() {
        let codec = Parva::new();
        let mut m = codec.init_model();
        m.set("spread", 77);
        m.set("voicecfg", 2);
        let full = encode_file(&m);

        // header, name and the first 20 parameters
        let mut short = full[..DATA_OFFSET + 40].to_vec();
        short.push(0xF7);
        let back = codec.decode(&short, None).unwrap();
        assert_eq!(back.get("spread"), 77);
        assert!(back.contains("osc1glide"));
        assert!(!back.contains("voicecfg"));
    }

    #[test]
    fn test_name_sanitized() {
        let codec = Parva::new();
        let mut m = codec.init_model();
        m.set_str("name", "Tab\there\u{7f}!");
        let back = codec.decode(&encode_file(&m), None).unwrap();
        assert_eq!(back.get_str("name", ""), "Tab here !");
    }

    #[test]
    fn test_recognize() {
        let codec = Parva::new();
        let data = encode_file(&codec.init_model());
        let mut bad = data.clone();
        bad[4] = 0x50;
        assert!(!codec.recognize(&bad));
        let mut bad = data.clone();
        bad[5] = 64;
        assert!(!codec.recognize(&bad));
        assert!(!codec.recognize(&data[..MIN_DUMP_LEN - 1]));
        assert!(matches!(codec.decode(&bad, None), Err(Error::Unrecognized(_))));
    }

    #[test]
    fn test_emit_cc_and_nrpn() {
        let codec = Parva::new();
        let mut m = Model::new();
        m.set("pan", 70);
        m.set("mod1amount", 200);
        assert_eq!(codec.emit_parameter(&m, "pan", 3), vec![vec![0xB3, 13, 70]]);
        assert_eq!(
            codec.emit_parameter(&m, "mod1amount", 0),
            vec![
                vec![0xB0, 99, 0],
                vec![0xB0, 98, 4],
                vec![0xB0, 6, 1],
                vec![0xB0, 38, 72],
            ]
        );
        assert!(codec.emit_parameter(&m, "name", 0).is_empty());
        assert!(codec.emit_parameter(&m, "bank", 0).is_empty());
        assert!(codec.emit_parameter(&m, "nonsense", 0).is_empty());
    }

    #[test]
    fn test_working_memory_sends_parameters() {
        let codec = Parva::new();
        let m = codec.init_model();
        let msgs = codec
            .encode(&m, &EncodeOptions::new(0, Destination::WorkingMemory))
            .unwrap();
        let ccs = (0..NUM_CC).filter(|&i| TABLE.name(i).is_some()).count();
        let nrpns = TABLE.names().count() - ccs;
        assert_eq!(msgs.len(), ccs + 4 * nrpns);
    }

    #[test]
    fn test_apply_incoming() {
        let codec = Parva::new();
        let mut m = Model::new();
        assert_eq!(codec.apply_cc(&mut m, 14, 99), Some("noise"));
        assert_eq!(m.get("noise"), 99);
        assert_eq!(codec.apply_cc(&mut m, 0, 5), None);
        assert_eq!(codec.apply_nrpn(&mut m, 178 - 128, 1), Some("voicecfg"));
        assert_eq!(m.get("voicecfg"), 1);
        assert_eq!(codec.apply_nrpn(&mut m, 500, 1), None);
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn test_requests_and_change_patch() {
        let codec = Parva::new();
        let mut m = Model::new();
        m.set("bank", 2);
        m.set("number", 7);
        assert_eq!(codec.request_dump(&m, 0), vec![0xF0, 0x7D, 0x00, 0x7F, 0x52, 7, 0xF7]);
        assert_eq!(
            codec.request_current_dump(0),
            Some(vec![0xF0, 0x7D, 0x00, 0x7F, 0x5F, 0x00, 0xF7])
        );
        assert_eq!(codec.change_patch(&m, 1), vec![vec![0xB1, 0, 2], vec![0xC1, 7]]);
        assert_eq!(codec.location_name(&m), "C07");
    }
}
