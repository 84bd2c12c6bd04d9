//! Wavestation SR patch dump codec

use super::params as p;
use super::{bank, header, is_message, msg, pack, param_message, rate, unpack};
use crate::codec::bytes::{Reader, Writer};
use crate::codec::name::{name_bytes, name_from_bytes};
use crate::devices::{check_location, check_number, Destination, EncodeOptions, PatchCodec};
use crate::error::{Error, Result};
use crate::frame::{self, status};
use crate::model::Model;
use tracing::warn;

pub const NAME: &str = "wavestation-patch";

/// Patch record size before nibblization
pub const RECORD_LEN: usize = 426;

/// Single patch frame: 7 header bytes, record nibbles, checksum, EOX
pub const DUMP_LEN: usize = 7 + RECORD_LEN * 2 + 2;

pub const PATCHES_PER_BANK: usize = 35;

/// Bulk frame holding a whole bank
pub const BANK_DUMP_LEN: usize = 6 + PATCHES_PER_BANK * RECORD_LEN * 2 + 2;

pub const NUM_OSCILLATORS: usize = 4;

/// Highest wave number that fits the base field
const MAX_BASE_WAVE: i32 = 396;

/// Macro selection meaning "user edited"
const MACRO_USER: i32 = -1;

/// Per-oscillator keys sent after selecting the oscillator with CURRENT_WAVE
const SUBKEYS: &[(&str, u16)] = &[
    ("pitchbendmod1source", p::PITCH_SOURCE_1),
    ("pitchbendmod2source", p::PITCH_SOURCE_2),
    ("pitchbendmod1amount", p::PITCH_SOURCE_1_AMOUNT),
    ("pitchbendmod2amount", p::PITCH_SOURCE_2_AMOUNT),
    ("pitchbendrange", p::PATCH_PITCH_BEND_RANGE),
    ("pitchrampamount", p::PATCH_PITCH_RAMP_AMT),
    ("pitchramptime", p::PATCH_PITCH_RAMP_RATE),
    ("pitchrampvelocitymod", p::PATCH_PITCH_VEL_AMT),
    ("lfo1ratemodsource", p::LFO1_RATE_MOD_SOURCE),
    ("lfo1depthmodsource", p::LFO1_DEPTH_MOD_SOURCE),
    ("lfo1shape", p::LFO1_SHAPE),
    ("lfo1sync", p::LFO1_SYNC),
    ("lfo1rate", p::LFO1_RATE),
    ("lfo1amount", p::LFO1_INITIAL_AMOUNT),
    ("lfo1delay", p::LFO1_DELAY),
    ("lfo1fadein", p::LFO1_FADE_IN),
    ("lfo1ratemod", p::LFO1_RATE_MOD_SRC_AMT),
    ("lfo1depthmod", p::LFO1_DEPTH_MOD_SRC_AMT),
    ("ampmod1source", p::AMP_MOD_SOURCE_1),
    ("ampmod2source", p::AMP_MOD_SOURCE_2),
    ("ampmod1amount", p::AMP_MOD_SOURCE_1_AMOUNT),
    ("ampmod2amount", p::AMP_MOD_SOURCE_2_AMOUNT),
    ("lfo2ratemodsource", p::LFO2_RATE_MOD_SOURCE),
    ("lfo2depthmodsource", p::LFO2_DEPTH_MOD_SOURCE),
    ("lfo2shape", p::LFO2_SHAPE),
    ("lfo2sync", p::LFO2_SYNC),
    ("lfo2rate", p::LFO2_RATE),
    ("lfo2amount", p::LFO2_INITIAL_AMOUNT),
    ("lfo2delay", p::LFO2_DELAY),
    ("lfo2fadein", p::LFO2_FADE_IN),
    ("lfo2ratemod", p::LFO2_RATE_MOD_SRC_AMT),
    ("lfo2depthmod", p::LFO2_DEPTH_MOD_SRC_AMT),
    ("pankeyboardmod", p::PAN_KEYBOARD_AMOUNT),
    ("panvelocitymod", p::PAN_VELOCITY_AMOUNT),
    ("env1level0a", p::GP_ENV_LEVEL_0),
    ("env1time1b", p::GP_ENV_RATE_1),
    ("env1level1b", p::GP_ENV_LEVEL_1),
    ("env1time2c", p::GP_ENV_RATE_2),
    ("env1level2c", p::GP_ENV_LEVEL_2),
    ("env1time3d", p::GP_ENV_RATE_3),
    ("env1level3d", p::GP_ENV_LEVEL_3),
    ("env1time4e", p::GP_ENV_RATE_4),
    ("env1level4e", p::GP_ENV_LEVEL_4),
    ("env1amountvelocitymod", p::GP_VEL_ENV_AMT),
    ("env1attackvelocitymod", p::ENV1_MOD_VEL_RATE),
    ("env1ratekeyboardmod", p::ENV1_MOD_KBD_RATE),
    ("env2level0a", p::AMP_ENV_LEVEL_0),
    ("env2time1b", p::AMP_ENV_RATE_1),
    ("env2level1b", p::AMP_ENV_LEVEL_1),
    ("env2time2c", p::AMP_ENV_RATE_2),
    ("env2level2c", p::AMP_ENV_LEVEL_2),
    ("env2time3d", p::AMP_ENV_RATE_3),
    ("env2level3d", p::AMP_ENV_LEVEL_3),
    ("env2time4e", p::AMP_ENV_RATE_4),
    ("env2amountvelocitymod", p::AMP_MOD_VEL_ENV_AMOUNT),
    ("env2attackvelocitymod", p::AMP_MOD_VEL_ATTACK_RATE),
    ("env2ratekeyboardmod", p::AMP_MOD_KBD_DECAY_RATE),
    ("filtermod1source", p::FILTER_MOD_SOURCE1),
    ("filtermod2source", p::FILTER_MOD_SOURCE2),
    ("filtercutoff", p::FILTER_MOD_CUTOFF),
    ("filterexciter", p::FILTER_EXCITER_AMOUNT),
    ("filterkeyboardtracking", p::FILTER_MOD_TRACKING),
    ("filtermod1amount", p::FILTER_MOD_SOURCE1_AMT),
    ("filtermod2amount", p::FILTER_MOD_SOURCE2_AMT),
];

/// Per-oscillator keys with their own parameter number; offsets from WAVEA_*
const OSC_KEYS: &[(&str, u16)] = &[
    ("wavebank", p::WAVEA_BANK),
    ("wave", p::WAVEA_NUM),
    ("amplevel", p::WAVEA_LEVEL),
    ("tuningcoarse", p::WAVEA_TUNE_COARSE),
    ("tuningfine", p::WAVEA_TUNE_FINE),
    ("tuningslope", p::WAVEA_TUNE_SLOPE),
];

const BUS_KEYS: [&str; 4] = ["busa", "busb", "busc", "busd"];

/// Patch-wide keys with their own parameter number
const KEYS: &[(&str, u16)] = &[
    ("hardsync", p::PATCH_HARD_SYNC),
    ("mixloop", p::MIX_ENV_LOOP),
    ("mixlooprepeats", p::MIX_ENV_REPEATS),
    ("mixxmod1source", p::MIX_MOD_X_SOURCE1),
    ("mixxmod2source", p::MIX_MOD_X_SOURCE2),
    ("mixymod1source", p::MIX_MOD_Y_SOURCE1),
    ("mixymod2source", p::MIX_MOD_Y_SOURCE2),
    ("mixxmod1amount", p::MIX_MOD_X_SRC1_AMT),
    ("mixxmod2amount", p::MIX_MOD_X_SRC2_AMT),
    ("mixymod1amount", p::MIX_MOD_Y_SRC1_AMT),
    ("mixymod2amount", p::MIX_MOD_Y_SRC2_AMT),
    ("numoscillators", p::PATCH_STRUCTURE),
];

/// One LFO inside an oscillator record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Lfo {
    rate: i32,
    amount: i32,
    delay: i32,
    fade: i32,
    /// Shape in bits 0-6, key sync in bit 7
    shape: i32,
    rate_mod_source: i32,
    rate_mod_amount: i32,
    depth_mod_source: i32,
    depth_mod_amount: i32,
}

impl Lfo {
    fn read(r: &mut Reader) -> Result<Self> {
        Ok(Self {
            rate: r.ubyte()? as i32,
            amount: r.ubyte()? as i32,
            delay: r.ubyte()? as i32,
            fade: r.ubyte()? as i32,
            shape: r.ubyte()? as i32,
            rate_mod_source: r.byte()? as i32,
            rate_mod_amount: r.byte()? as i32,
            depth_mod_source: r.byte()? as i32,
            depth_mod_amount: r.byte()? as i32,
        })
    }

    fn write(&self, w: &mut Writer) {
        w.ubyte(self.rate as u8);
        w.ubyte(self.amount as u8);
        w.ubyte(self.delay as u8);
        w.ubyte(self.fade as u8);
        w.ubyte(self.shape as u8);
        w.byte(self.rate_mod_source as i8);
        w.byte(self.rate_mod_amount as i8);
        w.byte(self.depth_mod_source as i8);
        w.byte(self.depth_mod_amount as i8);
    }

    /// Fade-in increment the synth expects alongside the LFO settings
    fn increment(&self) -> u32 {
        let full = 0x7F_FFFF_i64 * self.amount as i64;
        let steps = if self.fade == 0 {
            127
        } else {
            rate(self.fade) as i64 * 127
        };
        (full / steps) as u32
    }

    fn to_model(&self, m: &mut Model, prefix: &str) {
        m.set(format!("{prefix}rate"), self.rate);
        m.set(format!("{prefix}amount"), self.amount);
        m.set(format!("{prefix}delay"), self.delay);
        m.set(format!("{prefix}fadein"), self.fade);
        m.set(format!("{prefix}shape"), self.shape & 0x7F);
        m.set(format!("{prefix}sync"), (self.shape >> 7) & 1);
        m.set(format!("{prefix}ratemodsource"), self.rate_mod_source);
        m.set(format!("{prefix}ratemod"), self.rate_mod_amount);
        m.set(format!("{prefix}depthmodsource"), self.depth_mod_source);
        m.set(format!("{prefix}depthmod"), self.depth_mod_amount);
    }

    fn from_model(m: &Model, prefix: &str) -> Self {
        let get = |k: &str| m.get(&format!("{prefix}{k}"));
        Self {
            rate: get("rate"),
            amount: get("amount"),
            delay: get("delay"),
            fade: get("fadein"),
            shape: (get("sync") << 7) | (get("shape") & 0x7F),
            rate_mod_source: get("ratemodsource"),
            rate_mod_amount: get("ratemod"),
            depth_mod_source: get("depthmodsource"),
            depth_mod_amount: get("depthmod"),
        }
    }
}

/// One oscillator ("wave") record, 84 bytes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Wave {
    coarse: i32,
    fine: i32,
    bank: i32,
    number: i32,
    scale: i32,
    lfo1: Lfo,
    lfo2: Lfo,
    /// Envelope 1 rates 1-4
    eg_rate: [i32; 4],
    /// Envelope 1 levels 0-4
    eg_level: [i32; 5],
    vel_eg_amount: i32,
    /// Amp envelope rates 1-4
    aeg_rate: [i32; 4],
    /// Amp envelope levels 0-3
    aeg_level: [i32; 4],
    /// Pitch, filter, amp, pan and envelope macros
    macros: [i32; 5],
    bend_range: i32,
    pitch_mod: [i32; 4],
    key_filter: i32,
    filter_mod: [i32; 4],
    vel_aeg_amount: i32,
    vel_aeg_rate: i32,
    key_aeg_rate: i32,
    amp_mod: [i32; 4],
    key_pan: i32,
    vel_pan: i32,
    cutoff: i32,
    exciter: i32,
    vel_eg_rate: i32,
    key_eg_rate: i32,
    ramp_amount: i32,
    ramp_rate: i32,
    vel_ramp_amount: i32,
    level: i32,
    lfo1_inc: u32,
    lfo2_inc: u32,
    /// Bus A-D in bits 0-3
    output: i32,
    number_exp: i32,
}

/// Read `N` signed bytes
fn read_bytes<const N: usize>(r: &mut Reader) -> Result<[i32; N]> {
    let mut out = [0; N];
    for v in out.iter_mut() {
        *v = r.byte()? as i32;
    }
    Ok(out)
}

/// Read `N` unsigned bytes
fn read_ubytes<const N: usize>(r: &mut Reader) -> Result<[i32; N]> {
    let mut out = [0; N];
    for v in out.iter_mut() {
        *v = r.ubyte()? as i32;
    }
    Ok(out)
}

fn write_bytes(w: &mut Writer, values: &[i32]) {
    for &v in values {
        w.byte(v as i8);
    }
}

impl Wave {
    fn read(r: &mut Reader) -> Result<Self> {
        Ok(Self {
            coarse: r.byte()? as i32,
            fine: r.byte()? as i32,
            bank: r.ubyte()? as i32,
            number: r.uword()? as i32,
            scale: r.byte()? as i32,
            lfo1: Lfo::read(r)?,
            lfo2: Lfo::read(r)?,
            eg_rate: read_ubytes(r)?,
            eg_level: read_ubytes(r)?,
            vel_eg_amount: r.byte()? as i32,
            aeg_rate: read_ubytes(r)?,
            aeg_level: read_ubytes(r)?,
            macros: read_bytes(r)?,
            bend_range: r.byte()? as i32,
            pitch_mod: read_bytes(r)?,
            key_filter: r.byte()? as i32,
            filter_mod: read_bytes(r)?,
            vel_aeg_amount: r.byte()? as i32,
            vel_aeg_rate: r.byte()? as i32,
            key_aeg_rate: r.byte()? as i32,
            amp_mod: read_bytes(r)?,
            key_pan: r.byte()? as i32,
            vel_pan: r.byte()? as i32,
            cutoff: r.ubyte()? as i32,
            exciter: r.ubyte()? as i32,
            vel_eg_rate: r.byte()? as i32,
            key_eg_rate: r.byte()? as i32,
            ramp_amount: r.byte()? as i32,
            ramp_rate: r.ubyte()? as i32,
            vel_ramp_amount: r.byte()? as i32,
            level: r.byte()? as i32,
            lfo1_inc: r.ulong()?,
            lfo2_inc: r.ulong()?,
            output: r.byte()? as i32,
            number_exp: r.byte()? as i32,
        })
    }

    fn write(&self, w: &mut Writer) {
        w.byte(self.coarse as i8);
        w.byte(self.fine as i8);
        w.ubyte(self.bank as u8);
        w.uword(self.number as u16);
        w.byte(self.scale as i8);
        self.lfo1.write(w);
        self.lfo2.write(w);
        for &v in self.eg_rate.iter().chain(&self.eg_level) {
            w.ubyte(v as u8);
        }
        w.byte(self.vel_eg_amount as i8);
        for &v in self.aeg_rate.iter().chain(&self.aeg_level) {
            w.ubyte(v as u8);
        }
        write_bytes(w, &self.macros);
        w.byte(self.bend_range as i8);
        write_bytes(w, &self.pitch_mod);
        w.byte(self.key_filter as i8);
        write_bytes(w, &self.filter_mod);
        write_bytes(w, &[self.vel_aeg_amount, self.vel_aeg_rate, self.key_aeg_rate]);
        write_bytes(w, &self.amp_mod);
        write_bytes(w, &[self.key_pan, self.vel_pan]);
        w.ubyte(self.cutoff as u8);
        w.ubyte(self.exciter as u8);
        write_bytes(w, &[self.vel_eg_rate, self.key_eg_rate, self.ramp_amount]);
        w.ubyte(self.ramp_rate as u8);
        write_bytes(w, &[self.vel_ramp_amount, self.level]);
        w.ulong(self.lfo1_inc);
        w.ulong(self.lfo2_inc);
        w.byte(self.output as i8);
        w.byte(self.number_exp as i8);
    }

    fn to_model(&self, m: &mut Model, osc: &str) {
        let mut set = |k: &str, v: i32| m.set(format!("{osc}{k}"), v);
        set("tuningcoarse", self.coarse);
        set("tuningfine", self.fine);
        set("tuningslope", self.scale);
        set("wave", self.number + self.number_exp);
        set("amplevel", self.level);
        for (i, key) in ["pitchbendmod1source", "pitchbendmod1amount", "pitchbendmod2source", "pitchbendmod2amount"]
            .iter()
            .enumerate()
        {
            set(key, self.pitch_mod[i]);
        }
        set("pitchbendrange", self.bend_range);
        set("pitchrampamount", self.ramp_amount);
        set("pitchramptime", self.ramp_rate);
        set("pitchrampvelocitymod", self.vel_ramp_amount);
        for (i, key) in ["ampmod1source", "ampmod1amount", "ampmod2source", "ampmod2amount"]
            .iter()
            .enumerate()
        {
            set(key, self.amp_mod[i]);
        }
        set("pankeyboardmod", self.key_pan);
        set("panvelocitymod", self.vel_pan);
        for (i, key) in ["env1level0a", "env1level1b", "env1level2c", "env1level3d", "env1level4e"]
            .iter()
            .enumerate()
        {
            set(key, self.eg_level[i]);
        }
        for (i, key) in ["env1time1b", "env1time2c", "env1time3d", "env1time4e"].iter().enumerate() {
            set(key, self.eg_rate[i]);
        }
        set("env1amountvelocitymod", self.vel_eg_amount);
        set("env1attackvelocitymod", self.vel_eg_rate);
        set("env1ratekeyboardmod", self.key_eg_rate);
        for (i, key) in ["env2level0a", "env2level1b", "env2level2c", "env2level3d"].iter().enumerate() {
            set(key, self.aeg_level[i]);
        }
        for (i, key) in ["env2time1b", "env2time2c", "env2time3d", "env2time4e"].iter().enumerate() {
            set(key, self.aeg_rate[i]);
        }
        set("env2amountvelocitymod", self.vel_aeg_amount);
        set("env2attackvelocitymod", self.vel_aeg_rate);
        set("env2ratekeyboardmod", self.key_aeg_rate);
        for (i, key) in ["filtermod1source", "filtermod1amount", "filtermod2source", "filtermod2amount"]
            .iter()
            .enumerate()
        {
            set(key, self.filter_mod[i]);
        }
        set("filtercutoff", self.cutoff);
        set("filterexciter", self.exciter);
        set("filterkeyboardtracking", self.key_filter);
        for (i, key) in BUS_KEYS.iter().enumerate() {
            set(key, (self.output >> i) & 1);
        }
        self.lfo1.to_model(m, &format!("{osc}lfo1"));
        self.lfo2.to_model(m, &format!("{osc}lfo2"));
    }

    /// Everything but the bank, which depends on all four oscillators
    fn from_model(m: &Model, osc: &str) -> Self {
        let get = |k: &str| m.get(&format!("{osc}{k}"));
        let wave = get("wave");
        let (number, number_exp) = split_wave(wave);
        let lfo1 = Lfo::from_model(m, &format!("{osc}lfo1"));
        let lfo2 = Lfo::from_model(m, &format!("{osc}lfo2"));
        let output = BUS_KEYS
            .iter()
            .enumerate()
            .fold(0, |acc, (i, key)| acc | ((get(key) & 1) << i));

        Self {
            coarse: get("tuningcoarse"),
            fine: get("tuningfine"),
            bank: 0,
            number,
            scale: get("tuningslope"),
            lfo1_inc: lfo1.increment(),
            lfo2_inc: lfo2.increment(),
            lfo1,
            lfo2,
            eg_rate: ["env1time1b", "env1time2c", "env1time3d", "env1time4e"].map(get),
            eg_level: ["env1level0a", "env1level1b", "env1level2c", "env1level3d", "env1level4e"].map(get),
            vel_eg_amount: get("env1amountvelocitymod"),
            aeg_rate: ["env2time1b", "env2time2c", "env2time3d", "env2time4e"].map(get),
            aeg_level: ["env2level0a", "env2level1b", "env2level2c", "env2level3d"].map(get),
            macros: [MACRO_USER; 5],
            bend_range: get("pitchbendrange"),
            pitch_mod: ["pitchbendmod1source", "pitchbendmod1amount", "pitchbendmod2source", "pitchbendmod2amount"]
                .map(get),
            key_filter: get("filterkeyboardtracking"),
            filter_mod: ["filtermod1source", "filtermod1amount", "filtermod2source", "filtermod2amount"].map(get),
            vel_aeg_amount: get("env2amountvelocitymod"),
            vel_aeg_rate: get("env2attackvelocitymod"),
            key_aeg_rate: get("env2ratekeyboardmod"),
            amp_mod: ["ampmod1source", "ampmod1amount", "ampmod2source", "ampmod2amount"].map(get),
            key_pan: get("pankeyboardmod"),
            vel_pan: get("panvelocitymod"),
            cutoff: get("filtercutoff"),
            exciter: get("filterexciter"),
            vel_eg_rate: get("env1attackvelocitymod"),
            key_eg_rate: get("env1ratekeyboardmod"),
            ramp_amount: get("pitchrampamount"),
            ramp_rate: get("pitchramptime"),
            vel_ramp_amount: get("pitchrampvelocitymod"),
            level: get("amplevel"),
            output,
            number_exp,
        }
    }
}

/// Split a wave number into the base field and the expansion offset
pub fn split_wave(wave: i32) -> (i32, i32) {
    if wave <= MAX_BASE_WAVE {
        (wave, 0)
    } else {
        (MAX_BASE_WAVE, wave - MAX_BASE_WAVE)
    }
}

/// Bank-group bits for one oscillator and its bank within the group
fn bank_group(logical_bank: i32, osc: usize) -> (i32, i32) {
    let b = bank::to_ws(logical_bank);
    let bits = if b >= 8 {
        16 << osc
    } else if b >= 4 {
        1 << osc
    } else {
        0
    };
    (bits, b % 4)
}

/// Logical bank from an oscillator's bank field and the shared group bits.
/// The high group bit wins when both are set.
fn bank_from_group(bank_exp: i32, wave_bank: i32, osc: usize) -> i32 {
    let group = if (bank_exp >> (osc + 4)) & 1 == 1 {
        8
    } else if (bank_exp >> osc) & 1 == 1 {
        4
    } else {
        0
    };
    bank::from_ws_exp(group + (wave_bank & 3)).unwrap_or(0)
}

/// Mix envelope slope between two points; negative slopes wrap to u32
fn slope(from: i32, to: i32, rate_index: i32) -> u32 {
    let delta = (to - from) as i64;
    let magnitude = 0x100_0000_i64 * delta.abs() / rate(rate_index) as i64;
    (if delta < 0 { -magnitude } else { magnitude }) as u32
}

/// Patch record: 90 bytes of patch data followed by four oscillators
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct PatchRecord {
    name: [u8; 16],
    mix_rate: [i32; 4],
    /// Counts 1, 2, 3, 3B, 2B, 1B, 4 in record order
    mix_count: [i32; 7],
    mix_x_slope: [u32; 4],
    mix_y_slope: [u32; 4],
    mix_x: [i32; 5],
    mix_y: [i32; 5],
    mix_repeats: i32,
    mix_loop: i32,
    /// (source, amount) for X1, X2, Y1, Y2
    mix_mod: [(i32, i32); 4],
    num_waves: i32,
    hard_sync: i32,
    bank_exp: i32,
    reserved: i32,
    waves: [Wave; NUM_OSCILLATORS],
}

impl PatchRecord {
    fn read(data: &[u8]) -> Result<Self> {
        let mut r = Reader::new(data);
        let name = r.bytes::<16>()?;
        let mix_rate = read_ubytes(&mut r)?;
        let mut mix_count = [0; 7];
        for v in mix_count.iter_mut() {
            *v = r.uword()? as i32;
        }
        let mut slopes = [0u32; 8];
        for v in slopes.iter_mut() {
            *v = r.ulong()?;
        }
        let mix_x = read_ubytes(&mut r)?;
        let mix_y = read_ubytes(&mut r)?;
        let mix_repeats = r.ubyte()? as i32;
        let mix_loop = r.ubyte()? as i32;
        let mut mix_mod = [(0, 0); 4];
        for m in mix_mod.iter_mut() {
            *m = (r.ubyte()? as i32, r.byte()? as i32);
        }
        let num_waves = r.byte()? as i32;
        let hard_sync = r.ubyte()? as i32;
        let bank_exp = r.byte()? as i32;
        let reserved = r.byte()? as i32;
        let waves = [
            Wave::read(&mut r)?,
            Wave::read(&mut r)?,
            Wave::read(&mut r)?,
            Wave::read(&mut r)?,
        ];

        Ok(Self {
            name,
            mix_rate,
            mix_count,
            mix_x_slope: [slopes[0], slopes[1], slopes[2], slopes[3]],
            mix_y_slope: [slopes[4], slopes[5], slopes[6], slopes[7]],
            mix_x,
            mix_y,
            mix_repeats,
            mix_loop,
            mix_mod,
            num_waves,
            hard_sync,
            bank_exp,
            reserved,
            waves,
        })
    }

    fn write(&self) -> Vec<u8> {
        let mut w = Writer::with_capacity(RECORD_LEN);
        w.bytes(&self.name);
        for &v in &self.mix_rate {
            w.ubyte(v as u8);
        }
        for &v in &self.mix_count {
            w.uword(v as u16);
        }
        for &v in self.mix_x_slope.iter().chain(&self.mix_y_slope) {
            w.ulong(v);
        }
        for &v in self.mix_x.iter().chain(&self.mix_y) {
            w.ubyte(v as u8);
        }
        w.ubyte(self.mix_repeats as u8);
        w.ubyte(self.mix_loop as u8);
        for &(source, amount) in &self.mix_mod {
            w.ubyte(source as u8);
            w.byte(amount as i8);
        }
        w.byte(self.num_waves as i8);
        w.ubyte(self.hard_sync as u8);
        w.byte(self.bank_exp as i8);
        w.byte(self.reserved as i8);
        for wave in &self.waves {
            wave.write(&mut w);
        }
        w.into_inner()
    }

    fn to_model(&self, m: &mut Model) {
        m.set_str("name", name_from_bytes(&self.name));
        for i in 0..5 {
            m.set(format!("mixx{i}"), self.mix_x[i]);
            m.set(format!("mixy{i}"), self.mix_y[i]);
        }
        for i in 0..4 {
            m.set(format!("mixtime{}", i + 1), self.mix_rate[i]);
        }
        m.set("hardsync", self.hard_sync);
        m.set("mixloop", self.mix_loop);
        m.set("mixlooprepeats", self.mix_repeats);
        for (i, axis) in ["mixxmod1", "mixxmod2", "mixymod1", "mixymod2"].iter().enumerate() {
            m.set(format!("{axis}source"), self.mix_mod[i].0);
            m.set(format!("{axis}amount"), self.mix_mod[i].1);
        }
        m.set("numoscillators", self.num_waves);
        for (i, wave) in self.waves.iter().enumerate() {
            let osc = format!("osc{}", i + 1);
            wave.to_model(m, &osc);
            m.set(format!("{osc}wavebank"), bank_from_group(self.bank_exp, wave.bank, i));
        }
    }

    fn from_model(m: &Model) -> Self {
        let mix_x = [0, 1, 2, 3, 4].map(|i| m.get(&format!("mixx{i}")));
        let mix_y = [0, 1, 2, 3, 4].map(|i| m.get(&format!("mixy{i}")));
        let mix_rate = [1, 2, 3, 4].map(|i| m.get(&format!("mixtime{i}")));
        let counts = mix_rate.map(rate);
        let mix_x_slope = [0, 1, 2, 3].map(|i| slope(mix_x[i], mix_x[i + 1], mix_rate[i]));
        let mix_y_slope = [0, 1, 2, 3].map(|i| slope(mix_y[i], mix_y[i + 1], mix_rate[i]));

        let mut bank_exp = 0;
        let waves = [0, 1, 2, 3].map(|i| {
            let osc = format!("osc{}", i + 1);
            let mut wave = Wave::from_model(m, &osc);
            let (bits, wave_bank) = bank_group(m.get(&format!("{osc}wavebank")), i);
            bank_exp |= bits;
            wave.bank = wave_bank;
            wave
        });

        Self {
            name: name_bytes(m.get_str("name", "Untitled")),
            mix_rate,
            mix_count: [counts[0], counts[1], counts[2], counts[2], counts[1], counts[0], counts[3]],
            mix_x_slope,
            mix_y_slope,
            mix_x,
            mix_y,
            mix_repeats: m.get("mixlooprepeats"),
            mix_loop: m.get("mixloop"),
            mix_mod: ["mixxmod1", "mixxmod2", "mixymod1", "mixymod2"]
                .map(|axis| (m.get(&format!("{axis}source")), m.get(&format!("{axis}amount")))),
            num_waves: m.get("numoscillators"),
            hard_sync: m.get("hardsync"),
            bank_exp,
            reserved: 0,
            waves,
        }
    }
}

/// Decode one patch record into a model
fn decode_record(record: &[u8]) -> Result<Model> {
    let mut m = Model::new();
    PatchRecord::read(record)?.to_model(&mut m);
    Ok(m)
}

/// Encode a model into a raw patch record
fn encode_record(model: &Model) -> Vec<u8> {
    PatchRecord::from_model(model).write()
}

/// Wavestation SR patch codec
#[derive(Debug, Default)]
pub struct WavestationPatch;

impl WavestationPatch {
    pub fn new() -> Self {
        Self
    }

    fn is_single(data: &[u8]) -> bool {
        is_message(data, msg::PATCH_DUMP, DUMP_LEN)
    }

    fn is_bank(data: &[u8]) -> bool {
        is_message(data, msg::PATCH_BANK_DUMP, BANK_DUMP_LEN)
    }

    /// `CURRENT_WAVE` selection followed by one sub-parameter
    fn emit_subkey(channel: u8, osc: usize, param: u16, value: i32) -> Vec<Vec<u8>> {
        vec![
            param_message(channel, p::CURRENT_WAVE, osc as i32 - 1),
            param_message(channel, param, value),
        ]
    }

    /// Mute every oscillator but `osc` (1-4)
    pub fn solo(&self, osc: usize, channel: u8) -> Option<Vec<u8>> {
        let mask = super::MUTES.get(osc.checked_sub(1)?)?;
        Some(param_message(channel, p::WAVE_MUTE, *mask))
    }

    /// Unmute all oscillators
    pub fn reset_solo(&self, channel: u8) -> Vec<u8> {
        param_message(channel, p::WAVE_MUTE, 0)
    }
}

/// Split `osc3filtercutoff` into (3, "filtercutoff")
fn split_osc_key(key: &str) -> Option<(usize, &str)> {
    let rest = key.strip_prefix("osc")?;
    let digit = rest.chars().next()?.to_digit(10)? as usize;
    if !(1..=NUM_OSCILLATORS).contains(&digit) {
        return None;
    }
    Some((digit, &rest[1..]))
}

/// Split `mixtime3` into ("mixtime", 3)
fn split_mix_key(key: &str) -> Option<(&str, i32)> {
    ["mixx", "mixy", "mixtime"].iter().find_map(|prefix| {
        let n: i32 = key.strip_prefix(prefix)?.parse().ok()?;
        (0..=4).contains(&n).then_some((*prefix, n))
    })
}

impl PatchCodec for WavestationPatch {
    fn name(&self) -> &'static str {
        NAME
    }

    fn recognize(&self, data: &[u8]) -> bool {
        Self::is_single(data) || Self::is_bank(data)
    }

    fn decode(&self, data: &[u8], number: Option<i32>) -> Result<Model> {
        let (mut model, bank, number) = if Self::is_single(data) {
            if !frame::verify_checksum(data, 7) {
                warn!("{}: checksum mismatch", NAME);
            }
            let model = decode_record(&unpack(data, 7, RECORD_LEN))?;
            (model, data[5] as i32, data[6] as i32)
        } else if Self::is_bank(data) {
            let number = number.unwrap_or(0);
            check_number(self, number)?;
            let offset = 6 + number as usize * RECORD_LEN * 2;
            let model = decode_record(&unpack(data, offset, RECORD_LEN))?;
            (model, data[5] as i32, number)
        } else {
            return Err(Error::Unrecognized(format!(
                "{} bytes is not a Wavestation patch dump",
                data.len()
            )));
        };

        model.set("bank", bank::from_ws(NAME, bank)?);
        model.set("number", number);
        self.revise(&mut model);
        Ok(model)
    }

    fn encode(&self, model: &Model, options: &EncodeOptions) -> Result<Vec<Vec<u8>>> {
        check_location(self, model)?;
        let mut head = header(options.channel).to_vec();
        head.push(msg::PATCH_DUMP);
        head.push(bank::to_ws(model.get("bank")) as u8);
        head.push(model.get("number") as u8);

        let dump = pack(&head, &encode_record(model));
        let mut out = vec![dump];
        if options.destination == Destination::Store {
            let mut write = header(options.channel).to_vec();
            write.extend_from_slice(&[msg::PATCH_WRITE, head[5], head[6], status::EOX]);
            out.push(write);
        }
        Ok(out)
    }

    fn emit_parameter(&self, model: &Model, key: &str, channel: u8) -> Vec<Vec<u8>> {
        let value = model.get(key);
        match key {
            "bank" | "number" => return Vec::new(),
            "name" => {
                return vec![param_message(
                    channel,
                    p::PART_PATCH_NAME,
                    model.get_str("name", ""),
                )]
            }
            _ => {}
        }

        if let Some(&(_, param)) = KEYS.iter().find(|(k, _)| *k == key) {
            return vec![param_message(channel, param, value)];
        }

        if let Some((osc, subkey)) = split_osc_key(key) {
            let index = (osc - 1) as u16;
            if let Some(&(_, base)) = OSC_KEYS.iter().find(|(k, _)| *k == subkey) {
                let value = match subkey {
                    "wavebank" => bank::to_ws(value),
                    "tuningslope" => value * 2,
                    _ => value,
                };
                return vec![param_message(channel, base + index * p::WAVE_STRIDE, value)];
            }
            if let Some(bus) = BUS_KEYS.iter().position(|&k| k == subkey) {
                let param = p::WAVEA_BUS_A + index * p::BUS_STRIDE + bus as u16;
                return vec![param_message(channel, param, value)];
            }
            if let Some(&(_, param)) = SUBKEYS.iter().find(|(k, _)| *k == subkey) {
                return Self::emit_subkey(channel, osc, param, value);
            }
        }

        if let Some((prefix, point)) = split_mix_key(key) {
            let param = match prefix {
                "mixx" => p::MIX_ENV_X,
                "mixy" => p::MIX_ENV_Y,
                _ => p::MIX_ENV_RATE,
            };
            return vec![
                param_message(channel, p::MIX_ENV_POINT, point),
                param_message(channel, param, value),
            ];
        }

        warn!("{}: unknown parameter {}", NAME, key);
        Vec::new()
    }

    fn request_dump(&self, model: &Model, channel: u8) -> Vec<u8> {
        let mut out = header(channel).to_vec();
        out.extend_from_slice(&[
            msg::PATCH_REQUEST,
            bank::to_ws(model.get("bank")) as u8,
            (model.get("number") & 0x7F) as u8,
            status::EOX,
        ]);
        out
    }

    fn change_patch(&self, model: &Model, channel: u8) -> Vec<Vec<u8>> {
        vec![
            param_message(channel, p::MIDI_MODE, super::MULTISET_MIDI_MODE),
            param_message(channel, p::MIDI_MODE, super::PERFORMANCE_MIDI_MODE),
            param_message(channel, p::PART_PATCH_BANK, bank::to_ws(model.get("bank"))),
            param_message(channel, p::PART_PATCH_NUM, model.get("number")),
            param_message(channel, p::MIDI_MODE, 1),
            param_message(channel, p::PERF_MIDI_MODE, 1),
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
        m.set("numoscillators", 0);
        for osc in 1..=NUM_OSCILLATORS {
            m.set(format!("osc{osc}amplevel"), 99);
            m.set(format!("osc{osc}filtercutoff"), 99);
            m.set(format!("osc{osc}env2level1b"), 99);
            m.set(format!("osc{osc}env2level2c"), 99);
            m.set(format!("osc{osc}env2level3d"), 99);
            m.set(format!("osc{osc}busa"), 1);
            m.set(format!("osc{osc}busb"), 1);
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
        PATCHES_PER_BANK
    }

    fn pause_after_parameter_ms(&self) -> u32 {
        40
    }

    fn pause_after_change_patch_ms(&self) -> u32 {
        300
    }
}
