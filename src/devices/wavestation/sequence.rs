//! Wavestation wave sequence codec
//!
//! The synth only sends wave sequences as a whole bank: 32 sequence headers,
//! a shared pool of 501 linked steps and 32 names. A single sequence is
//! decoded by walking its step chain. Nothing can be sent back in bulk, so a
//! sequence is saved in a private file format and transmitted as a stream of
//! parameter edits that rebuild it step by step.

use super::params as p;
use super::{bank, header, is_message, msg, param_message, unpack};
use crate::codec::bytes::Reader;
use crate::codec::name::{name_bytes, name_from_bytes};
use crate::devices::{check_location, check_number, Destination, EncodeOptions, PatchCodec};
use crate::error::{Error, Result};
use crate::frame::status;
use crate::model::Model;
use tracing::warn;

pub const NAME: &str = "wavestation-sequence";

pub const NUM_SEQUENCES: usize = 32;

/// Longest sequence the editor models
pub const NUM_STEPS: i32 = 255;

pub const NAME_LENGTH: usize = 8;

/// Steps in the shared pool of a bank
const POOL_STEPS: usize = 501;

const SEQ_LEN: usize = 16;

const STEP_LEN: usize = 16;

/// Raw bank block: sequence headers, step pool, names
pub const BLOCK_LEN: usize = NUM_SEQUENCES * SEQ_LEN + POOL_STEPS * STEP_LEN + NUM_SEQUENCES * NAME_LENGTH;

pub const BANK_DUMP_LEN: usize = 6 + BLOCK_LEN * 2 + 2;

/// Header of the private file format (manufacturer 0x7D is reserved for
/// non-commercial use)
pub const FILE_MAGIC: &[u8; 22] = b"\xF0\x7DEDISYN KORGWSSR SEQ\x00";

/// Sequence-wide keys stored in the file, in order
pub const MAIN_KEYS: [&str; 8] = [
    "length",
    "looprepeats",
    "loopbackandforth",
    "start",
    "loopstart",
    "loopend",
    "modulationamount",
    "modsource",
];

/// Per-step keys stored in the file, in order
pub const STEP_KEYS: [&str; 7] = ["semitone", "fine", "level", "duration", "crossfade", "number", "bank"];

pub const FILE_LEN: usize =
    FILE_MAGIC.len() + 2 + NAME_LENGTH + MAIN_KEYS.len() * 2 + NUM_STEPS as usize * STEP_KEYS.len() * 2 + 1;

/// Extra pause per step index after inserting a step
pub const MS_PER_STEP_BY_INDEX: u32 = 7;
/// Base pause after inserting a step
pub const MS_PER_STEP: u32 = 250;
/// Pause after initializing a sequence
pub const MS_PER_INITIALIZATION: u32 = 1000;
/// Pause after each step or sequence parameter
pub const MS_PER_STEP_DATA: u32 = 80;

/// Wave numbers in steps count the 32 wave sequences first
const WAVE_OFFSET: i32 = 32;

/// Expanded PCM waves are flagged through the coarse tuning byte
const EXPANDED_COARSE: i32 = 48;
const EXPANDED_COARSE_SHIFT: i32 = 72;
const EXPANDED_WAVE_SHIFT: i32 = 365;

#[derive(Debug, Clone, Copy, Default)]
struct Seq {
    link: usize,
    loop_start: i32,
    loop_end: i32,
    loop_count: i32,
    start_step: i32,
    mod_src: i32,
    mod_amt: i32,
}

impl Seq {
    fn read(r: &mut Reader) -> Result<Self> {
        let link = r.uword()? as usize;
        r.uword()?; // sLink
        let loop_start = r.ubyte()? as i32;
        let loop_end = r.ubyte()? as i32;
        let loop_count = r.ubyte()? as i32;
        let start_step = r.ubyte()? as i32;
        let mod_src = r.ubyte()? as i32;
        let mod_amt = r.byte()? as i32;
        r.word()?; // dynoMod
        r.uword()?; // startTime
        r.uword()?; // time
        Ok(Self {
            link,
            loop_start,
            loop_end,
            loop_count,
            start_step,
            mod_src,
            mod_amt,
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Step {
    f_link: usize,
    wave_num: i32,
    coarse: i32,
    fine: i32,
    x_fade: i32,
    duration: i32,
    level: i32,
}

impl Step {
    fn read(r: &mut Reader) -> Result<Self> {
        let f_link = r.uword()? as usize;
        r.uword()?; // bLink
        r.uword()?; // lLink
        let high = r.byte()?;
        let mut wave_num = r.ubyte()? as i32;
        match high {
            -127 => wave_num += 256,
            -128 | 0 => {}
            _ => warn!("{}: unusual wave high byte {}", NAME, high),
        }
        let mut coarse = r.byte()? as i32;
        if coarse >= EXPANDED_COARSE {
            coarse -= EXPANDED_COARSE_SHIFT;
            wave_num += EXPANDED_WAVE_SHIFT;
        }
        let fine = r.byte()? as i32;
        let x_fade = r.uword()? as i32;
        let duration = r.uword()? as i32;
        let level = r.ubyte()? as i32;
        r.ubyte()?; // modIndex
        Ok(Self {
            f_link,
            wave_num,
            coarse,
            fine,
            x_fade,
            duration,
            level,
        })
    }
}

/// A whole bank of sequences as sent by the synth
struct Block {
    seqs: Vec<Seq>,
    steps: Vec<Step>,
    names: Vec<[u8; NAME_LENGTH]>,
}

impl Block {
    fn read(data: &[u8]) -> Result<Self> {
        let mut r = Reader::new(data);
        let seqs = (0..NUM_SEQUENCES)
            .map(|_| Seq::read(&mut r))
            .collect::<Result<Vec<_>>>()?;
        let steps = (0..POOL_STEPS)
            .map(|_| Step::read(&mut r))
            .collect::<Result<Vec<_>>>()?;
        let names = (0..NUM_SEQUENCES)
            .map(|_| r.bytes::<NAME_LENGTH>())
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { seqs, steps, names })
    }

    /// Steps of sequence `n` in play order
    fn chain(&self, n: usize) -> Vec<Step> {
        let mut out = Vec::new();
        let mut link = self.seqs[n].link;
        while link != 0 {
            let Some(step) = self.steps.get(link) else {
                warn!("{}: step link {} outside the pool", NAME, link);
                break;
            };
            if out.len() == NUM_STEPS as usize {
                warn!("{}: sequence {} runs past {} steps, truncating", NAME, n, NUM_STEPS);
                break;
            }
            out.push(*step);
            link = step.f_link;
        }
        out
    }

    fn to_model(&self, n: usize, m: &mut Model) {
        m.set_str("name", name_from_bytes(&self.names[n]));
        clear_steps(m, 1);

        let chain = self.chain(n);
        for (i, step) in chain.iter().enumerate() {
            let k = |s: &str| step_key(i as i32 + 1, s);
            m.set(k("semitone"), step.coarse);
            m.set(k("fine"), step.fine);
            m.set(k("level"), step.level);
            m.set(k("duration"), step.duration);
            m.set(k("crossfade"), step.x_fade);
            m.set(k("number"), step.wave_num - WAVE_OFFSET);
            m.set(k("bank"), 0);
        }
        m.set("length", chain.len() as i32);

        let seq = &self.seqs[n];
        m.set("start", seq.start_step);
        m.set("loopstart", seq.loop_start + 1);
        m.set("loopend", seq.loop_end + 1);
        m.set("modulationamount", seq.mod_amt);
        m.set("modsource", seq.mod_src & 0x7F);
        m.set("looprepeats", seq.loop_count & 0x7F);
        m.set("loopbackandforth", (seq.loop_count >> 7) & 1);
    }
}

pub fn step_key(step: i32, field: &str) -> String {
    format!("step{step}{field}")
}

/// Split `step12crossfade` into (12, "crossfade")
fn split_step_key(key: &str) -> Option<(i32, &str)> {
    let rest = key.strip_prefix("step")?;
    let digits = rest.find(|c: char| !c.is_ascii_digit())?;
    let step: i32 = rest[..digits].parse().ok()?;
    let field = &rest[digits..];
    ((1..=NUM_STEPS).contains(&step) && STEP_KEYS.contains(&field)).then_some((step, field))
}

/// Reset steps `from..=NUM_STEPS` to an empty step
fn clear_steps(m: &mut Model, from: i32) {
    for step in from..=NUM_STEPS {
        for field in STEP_KEYS {
            m.set(step_key(step, field), if field == "duration" { 1 } else { 0 });
        }
    }
}

fn copy_step(m: &mut Model, from: i32, to: i32) {
    for field in STEP_KEYS {
        let default = if field == "duration" { 1 } else { 0 };
        let value = m.get_or(&step_key(from, field), default);
        m.set(step_key(to, field), value);
    }
}

/// Two seven-bit bytes, high first
fn put14(out: &mut Vec<u8>, value: i32) {
    out.push(((value >> 7) & 0x7F) as u8);
    out.push((value & 0x7F) as u8);
}

/// Fourteen-bit two's complement value
fn get14(hi: u8, lo: u8) -> i32 {
    let v = (((hi & 0x7F) as i32) << 7) | (lo & 0x7F) as i32;
    if v & 0x2000 != 0 {
        v - 0x4000
    } else {
        v
    }
}

fn write_file(m: &Model) -> Vec<u8> {
    let mut out = Vec::with_capacity(FILE_LEN);
    out.extend_from_slice(FILE_MAGIC);
    out.push((m.get("bank") & 0x7F) as u8);
    out.push((m.get("number") & 0x7F) as u8);
    out.extend_from_slice(&name_bytes::<NAME_LENGTH>(m.get_str("name", "")));
    for key in MAIN_KEYS {
        put14(&mut out, m.get(key));
    }
    for step in 1..=NUM_STEPS {
        for field in STEP_KEYS {
            put14(&mut out, m.get(&step_key(step, field)));
        }
    }
    out.push(status::EOX);
    out
}

fn read_file(data: &[u8]) -> Result<Model> {
    if data.len() < FILE_LEN {
        return Err(Error::Sysex(format!(
            "sequence file is {} bytes, expected {}",
            data.len(),
            FILE_LEN
        )));
    }
    let mut m = Model::new();
    let mut pos = FILE_MAGIC.len();
    m.set("bank", data[pos] as i32);
    m.set("number", data[pos + 1] as i32);
    pos += 2;
    m.set_str("name", name_from_bytes(&data[pos..pos + NAME_LENGTH]));
    pos += NAME_LENGTH;
    for key in MAIN_KEYS {
        m.set(key, get14(data[pos], data[pos + 1]));
        pos += 2;
    }
    for step in 1..=NUM_STEPS {
        for field in STEP_KEYS {
            m.set(step_key(step, field), get14(data[pos], data[pos + 1]));
            pos += 2;
        }
    }
    Ok(m)
}

/// Pause after message `index` of the list built by
/// [`WavestationSequence::length_messages`] for a sequence of `length` steps
pub fn length_pause_ms(index: usize, length: i32) -> u32 {
    let first_step_data = 1 + 2 * (length.max(1) as usize - 1);
    if index == 0 {
        MS_PER_INITIALIZATION
    } else if index >= first_step_data {
        MS_PER_STEP_DATA
    } else if index % 2 == 0 {
        index as u32 * MS_PER_STEP_BY_INDEX + MS_PER_STEP
    } else {
        0
    }
}

/// Wavestation SR wave sequence codec
#[derive(Debug, Default)]
pub struct WavestationSequence;

impl WavestationSequence {
    pub fn new() -> Self {
        Self
    }

    fn is_file(data: &[u8]) -> bool {
        data.len() > FILE_MAGIC.len() && data.starts_with(FILE_MAGIC)
    }

    fn is_bank(data: &[u8]) -> bool {
        is_message(data, msg::SEQUENCE_BANK_DUMP, BANK_DUMP_LEN)
    }

    /// Select the model's sequence before a parameter edit
    fn address(model: &Model, channel: u8) -> Vec<Vec<u8>> {
        vec![
            param_message(channel, p::WAVE_SEQ_BANK, bank::to_ws(model.get("bank"))),
            param_message(channel, p::WAVE_SEQ_NUM, model.get("number")),
        ]
    }

    /// Rebuild the sequence from scratch: initialize, insert `length - 1`
    /// steps, then set every step's data
    pub fn length_messages(&self, model: &Model, channel: u8) -> Vec<Vec<u8>> {
        let length = model.get("length").clamp(0, NUM_STEPS);
        let init = param_message(channel, p::EXECUTE_WAVESEQ_INIT, 1);
        if length == 0 {
            // initializing leaves one step behind
            return vec![init, param_message(channel, p::EXECUTE_DELETE_WS_STEP, 1)];
        }

        let mut out = vec![init];
        for _ in 1..length {
            out.push(param_message(channel, p::WAVE_SEQ_STEP, 0));
            out.push(param_message(channel, p::EXECUTE_INSERT_WS_STEP, 1));
        }
        for step in 1..=length {
            let get = |field: &str| model.get(&step_key(step, field));
            out.push(param_message(channel, p::WAVE_SEQ_STEP, step));
            out.push(param_message(channel, p::WAVE_SEQ_COARSE, get("semitone")));
            out.push(param_message(channel, p::WAVE_SEQ_FINE, get("fine")));
            out.push(param_message(channel, p::WAVE_SEQ_LEVEL, get("level")));
            out.push(param_message(channel, p::WAVE_SEQ_DURATION, get("duration")));
            out.push(param_message(channel, p::WAVE_SEQ_XFADE, get("crossfade")));
            out.push(param_message(channel, p::WAVE_SEQ_WAVE_BANK, bank::to_ws(get("bank"))));
            out.push(param_message(channel, p::WAVE_SEQ_WAVE_NUM, get("number") + WAVE_OFFSET));
        }
        out
    }

    /// Per-message pauses for the list returned by `encode` when sending to
    /// the synth
    pub fn transmit_pauses(&self, model: &Model) -> Vec<u32> {
        let length = model.get("length").clamp(0, NUM_STEPS);
        let expansion = if length == 0 {
            2
        } else {
            1 + 2 * (length as usize - 1) + 8 * length as usize
        };
        let mut out = vec![0, 0];
        out.extend((0..expansion).map(|i| length_pause_ms(i, length)));
        out.extend(std::iter::repeat(MS_PER_STEP_DATA).take(MAIN_KEYS.len() - 1));
        out
    }

    /// Insert a step next to the current `step`, copying it. Returns the
    /// messages that perform the same insert on the synth.
    pub fn insert_step(&self, model: &mut Model, before: bool, channel: u8) -> Vec<Vec<u8>> {
        let length = model.get("length") + 1;
        let current = model.get_or("step", 1).clamp(1, length.max(1));
        if length > NUM_STEPS {
            warn!("{}: sequence full, cannot insert", NAME);
            return Vec::new();
        }

        if length == 1 {
            model.set("length", 1);
            model.set("step", 1);
            clear_steps(model, 1);
            return vec![
                param_message(channel, p::WAVE_SEQ_STEP, 1),
                param_message(channel, p::EXECUTE_INSERT_WS_STEP, 1),
            ];
        }

        for i in (current + 1..=length).rev() {
            copy_step(model, i - 1, i);
        }
        model.set("length", length);
        model.set("step", if before { current } else { current + 1 });
        vec![
            param_message(channel, p::WAVE_SEQ_STEP, current),
            param_message(channel, p::EXECUTE_INSERT_WS_STEP, 1),
        ]
    }

    /// Delete the current `step`. Returns the messages that perform the same
    /// delete on the synth.
    pub fn delete_step(&self, model: &mut Model, channel: u8) -> Vec<Vec<u8>> {
        let length = model.get("length");
        if length <= 0 {
            warn!("{}: sequence empty, cannot delete", NAME);
            return Vec::new();
        }
        let current = model.get_or("step", 1).clamp(1, length);
        for i in current..length {
            copy_step(model, i + 1, i);
        }
        clear_steps(model, length);
        model.set("length", length - 1);
        // the synth backs up one step after a delete
        model.set("step", if current > 1 { current - 1 } else { current });
        vec![
            param_message(channel, p::WAVE_SEQ_STEP, current),
            param_message(channel, p::EXECUTE_DELETE_WS_STEP, 1),
        ]
    }
}

impl PatchCodec for WavestationSequence {
    fn name(&self) -> &'static str {
        NAME
    }

    fn recognize(&self, data: &[u8]) -> bool {
        Self::is_file(data) || Self::is_bank(data)
    }

    fn decode(&self, data: &[u8], number: Option<i32>) -> Result<Model> {
        let mut model = if Self::is_file(data) {
            read_file(data)?
        } else if Self::is_bank(data) {
            let number = number.unwrap_or(0);
            check_number(self, number)?;
            let block = Block::read(&unpack(data, 6, BLOCK_LEN))?;
            let mut m = Model::new();
            block.to_model(number as usize, &mut m);
            m.set("bank", bank::from_ws(NAME, data[5] as i32)?);
            m.set("number", number);
            m
        } else {
            return Err(Error::Unrecognized(format!(
                "{} bytes is not a Wavestation sequence bank or file",
                data.len()
            )));
        };
        model.set("step", 1);
        self.revise(&mut model);
        Ok(model)
    }

    fn encode(&self, model: &Model, options: &EncodeOptions) -> Result<Vec<Vec<u8>>> {
        check_location(self, model)?;
        if options.destination == Destination::File {
            return Ok(vec![write_file(model)]);
        }

        // sequences are edited in place, so working memory and store are alike
        let channel = options.channel;
        let mut out = Self::address(model, channel);
        out.extend(self.length_messages(model, channel));
        for key in MAIN_KEYS.iter().filter(|k| **k != "length") {
            if let Some(param) = main_param(key) {
                out.push(param_message(channel, param, model.get(key)));
            }
        }
        Ok(out)
    }

    fn emit_parameter(&self, model: &Model, key: &str, channel: u8) -> Vec<Vec<u8>> {
        // the SR corrupts names sent as parameters, so names only travel in files
        if matches!(key, "bank" | "number" | "name") {
            return Vec::new();
        }

        let mut out = Self::address(model, channel);
        if key == "step" {
            out.push(param_message(channel, p::WAVE_SEQ_STEP, model.get(key)));
        } else if key == "length" {
            out.extend(self.length_messages(model, channel));
        } else if let Some((step, field)) = split_step_key(key) {
            if step > model.get("length") {
                return Vec::new();
            }
            let value = model.get(key);
            let (param, value) = match field {
                "semitone" => (p::WAVE_SEQ_COARSE, value),
                "fine" => (p::WAVE_SEQ_FINE, value),
                "level" => (p::WAVE_SEQ_LEVEL, value),
                "duration" => (p::WAVE_SEQ_DURATION, value),
                "crossfade" => (p::WAVE_SEQ_XFADE, value),
                "number" => (p::WAVE_SEQ_WAVE_NUM, value + WAVE_OFFSET),
                _ => (p::WAVE_SEQ_WAVE_BANK, bank::to_ws(value)),
            };
            out.push(param_message(channel, p::WAVE_SEQ_STEP, step));
            out.push(param_message(channel, param, value));
        } else if let Some(param) = main_param(key) {
            out.push(param_message(channel, param, model.get(key)));
        } else {
            warn!("{}: unknown parameter {}", NAME, key);
            return Vec::new();
        }
        out
    }

    fn request_dump(&self, model: &Model, channel: u8) -> Vec<u8> {
        let mut out = header(channel).to_vec();
        out.extend_from_slice(&[
            msg::SEQUENCE_BANK_REQUEST,
            bank::to_ws(model.get("bank")) as u8,
            status::EOX,
        ]);
        out
    }

    fn change_patch(&self, model: &Model, channel: u8) -> Vec<Vec<u8>> {
        vec![
            param_message(channel, p::MIDI_MODE, super::MULTISET_MIDI_MODE),
            param_message(channel, p::MIDI_MODE, super::PERFORMANCE_MIDI_MODE),
            param_message(channel, p::WAVE_BANK, bank::to_ws(model.get("bank"))),
            param_message(channel, p::WAVE_NUM, model.get("number")),
        ]
    }

    fn revise(&self, model: &mut Model) {
        let name: String = super::sanitize_name(model.get_str("name", "Init"))
            .chars()
            .take(NAME_LENGTH)
            .collect();
        model.set_str("name", name);

        model.clamp("length", 0, NUM_STEPS);
        let length = model.get("length");
        let fit = |v: i32| if length == 0 { 1 } else { v.min(length) };

        let start = fit(model.get_or("start", 1));
        model.set("start", start);
        let loopend = fit(model.get_or("loopend", 1));
        model.set("loopend", loopend);
        let loopstart = model.get_or("loopstart", 1);
        model.set("loopstart", if length == 0 { 1 } else { loopstart.min(loopend) });
        if model.contains("step") {
            let step = fit(model.get("step"));
            model.set("step", step);
        }
    }

    fn init_model(&self) -> Model {
        let mut m = Model::new();
        m.set("bank", 0);
        m.set("number", 0);
        m.set_str("name", "Init");
        clear_steps(&mut m, 1);
        m.set(step_key(1, "level"), 99);
        m.set(step_key(1, "duration"), 24);
        m.set("length", 1);
        m.set("step", 1);
        m.set("start", 1);
        m.set("loopstart", 1);
        m.set("loopend", 1);
        m.set("looprepeats", 0);
        m.set("loopbackandforth", 0);
        m.set("modulationamount", 0);
        m.set("modsource", 0);
        m
    }

    fn location_name(&self, model: &Model) -> String {
        bank::location_name(model.get("bank"), model.get("number"))
    }

    fn num_banks(&self) -> usize {
        bank::NUM_BANKS
    }

    fn patches_per_bank(&self) -> usize {
        NUM_SEQUENCES
    }

    fn pause_after_parameter_ms(&self) -> u32 {
        MS_PER_STEP_DATA
    }

    fn pause_after_change_patch_ms(&self) -> u32 {
        300
    }
}

/// Parameter for a sequence-wide key other than `length`
fn main_param(key: &str) -> Option<u16> {
    Some(match key {
        "start" => p::WAVE_SEQ_START_STEP,
        "loopbackandforth" => p::WAVE_SEQ_LOOP_DIR,
        "looprepeats" => p::WAVE_SEQ_REPEATS,
        "loopstart" => p::WAVE_SEQ_LOOP_START,
        "loopend" => p::WAVE_SEQ_LOOP_END,
        "modulationamount" => p::WAVE_SEQ_MOD_AMT,
        "modsource" => p::WAVE_SEQ_MOD_SRC,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::bytes::Writer;
    use crate::devices::wavestation::pack;

    /// Raw step: (next link, wave high byte, wave low byte, coarse, fine, level, duration)
    type RawStep = (u16, i8, u8, i8, i8, u8, u16);

    /// Helper to build a bank dump whose sequence `n` is the chain `steps`
    fn bank_dump(n: usize, steps: &[RawStep], name: &[u8; 8], seq_bytes: [u8; 6]) -> Vec<u8> {
        let mut w = Writer::with_capacity(BLOCK_LEN);
        for i in 0..NUM_SEQUENCES {
            w.uword(if i == n && !steps.is_empty() { 1 } else { 0 });
            w.uword(0);
            if i == n {
                w.bytes(&seq_bytes);
            } else {
                w.bytes(&[0; 6]);
            }
            w.word(0);
            w.uword(0);
            w.uword(0);
        }
        for i in 0..POOL_STEPS {
            let step = if i >= 1 { steps.get(i - 1) } else { None };
            let (next, high, low, coarse, fine, level, duration) =
                step.copied().unwrap_or((0, 0, 0, 0, 0, 0, 0));
            w.uword(next);
            w.uword(0);
            w.uword(0);
            w.byte(high);
            w.ubyte(low);
            w.byte(coarse);
            w.byte(fine);
            w.uword(7);
            w.uword(duration);
            w.ubyte(level);
            w.ubyte(0);
        }
        for i in 0..NUM_SEQUENCES {
            w.bytes(if i == n { name } else { b"        " });
        }
        let block = w.into_inner();
        assert_eq!(block.len(), BLOCK_LEN);
        let mut head = header(0).to_vec();
        head.extend_from_slice(&[msg::SEQUENCE_BANK_DUMP, 4]);
        pack(&head, &block)
    }

    fn three_steps() -> Vec<RawStep> {
        vec![
            (2, -128, 40, 0, 5, 99, 24),
            (3, -127, 10, -12, -3, 80, 48),
            // expanded PCM: coarse 50 is really -22 and the wave moves up 365
            (0, 0, 100, 50, 0, 70, 12),
        ]
    }

    #[test]
    fn test_lengths() {
        assert_eq!(BLOCK_LEN, 8784);
        assert_eq!(BANK_DUMP_LEN, 17576);
        assert_eq!(FILE_LEN, 3619);
        assert_eq!(write_file(&WavestationSequence::new().init_model()).len(), FILE_LEN);
    }

    #[test]
    fn test_decode_walks_chain() {
        let codec = WavestationSequence::new();
        let dump = bank_dump(5, &three_steps(), b"Arpeggio", [2, 3, 0x83, 1, 0x85, 0xF6]);
        assert!(codec.recognize(&dump));
        let m = codec.decode(&dump, Some(5)).unwrap();
        assert_eq!(m.get("bank"), 2);
        assert_eq!(m.get("number"), 5);
        assert_eq!(m.get_str("name", ""), "Arpeggio");
        assert_eq!(m.get("length"), 3);
        assert_eq!(m.get("step1number"), 40 - 32);
        assert_eq!(m.get("step1fine"), 5);
        assert_eq!(m.get("step2number"), 256 + 10 - 32);
        assert_eq!(m.get("step2semitone"), -12);
        assert_eq!(m.get("step3semitone"), 50 - 72);
        assert_eq!(m.get("step3number"), 100 + 365 - 32);
        assert_eq!(m.get("step3level"), 70);
        assert_eq!(m.get("step3crossfade"), 7);
        assert_eq!(m.get("step4duration"), 1);
        assert_eq!(m.get("step255level"), 0);
        assert_eq!(m.get("loopstart"), 3);
        assert_eq!(m.get("loopend"), 3);
        assert_eq!(m.get("looprepeats"), 3);
        assert_eq!(m.get("loopbackandforth"), 1);
        assert_eq!(m.get("start"), 1);
        assert_eq!(m.get("modsource"), 5);
        assert_eq!(m.get("modulationamount"), -10);
    }

    #[test]
    fn test_unknown_bank_byte_is_rejected() {
        let codec = WavestationSequence::new();
        let mut dump = bank_dump(5, &three_steps(), b"Arpeggio", [0; 6]);
        dump[5] = 20;
        assert!(matches!(
            codec.decode(&dump, Some(5)),
            Err(Error::InvalidBank { bank: 20, .. })
        ));
    }

    #[test]
    fn test_decode_stops_on_cycle() {
        let codec = WavestationSequence::new();
        let steps = vec![(2, 0, 40, 0, 0, 99, 24), (1, 0, 41, 0, 0, 99, 24)];
        let dump = bank_dump(0, &steps, b"Loop    ", [0; 6]);
        let m = codec.decode(&dump, Some(0)).unwrap();
        assert_eq!(m.get("length"), NUM_STEPS);
        assert_eq!(m.get("step254number"), 41 - 32);
        assert_eq!(m.get("step255number"), 40 - 32);
    }

    #[test]
    fn test_decode_other_sequence_is_empty() {
        let codec = WavestationSequence::new();
        let dump = bank_dump(5, &three_steps(), b"Arpeggio", [0; 6]);
        let m = codec.decode(&dump, Some(6)).unwrap();
        assert_eq!(m.get("length"), 0);
        assert_eq!(m.get("start"), 1);
        assert!(matches!(
            codec.decode(&dump, Some(32)),
            Err(Error::InvalidPatchNumber { number: 32, .. })
        ));
    }

    #[test]
    fn test_file_round_trip_keeps_negative_values() {
        let codec = WavestationSequence::new();
        let dump = bank_dump(5, &three_steps(), b"Arpeggio", [2, 3, 0x83, 1, 0x85, 0xF6]);
        let model = codec.decode(&dump, Some(5)).unwrap();
        let file = codec.encode(&model, &EncodeOptions::default()).unwrap();
        assert_eq!(file.len(), 1);
        assert_eq!(file[0].len(), FILE_LEN);
        assert!(file[0].starts_with(FILE_MAGIC));
        let back = codec.decode(&file[0], None).unwrap();
        assert_eq!(back, model);
        assert_eq!(back.get("step3semitone"), -22);
    }

    #[test]
    fn test_get14_sign() {
        let mut out = Vec::new();
        put14(&mut out, -3);
        put14(&mut out, 8191);
        assert_eq!(get14(out[0], out[1]), -3);
        assert_eq!(get14(out[2], out[3]), 8191);
    }

    #[test]
    fn test_truncated_file_is_an_error() {
        let codec = WavestationSequence::new();
        let mut data = FILE_MAGIC.to_vec();
        data.extend_from_slice(&[0, 0, 0xF7]);
        assert!(codec.recognize(&data));
        assert!(matches!(codec.decode(&data, None), Err(Error::Sysex(_))));
    }

    #[test]
    fn test_length_expansion_uses_step_values() {
        let codec = WavestationSequence::new();
        let mut m = codec.init_model();
        m.set("length", 3);
        m.set("step2semitone", -5);
        m.set("step3number", 100);
        m.set("step3bank", 10);
        let msgs = codec.length_messages(&m, 0);
        assert_eq!(msgs.len(), 1 + 4 + 24);
        assert_eq!(msgs[0], param_message(0, p::EXECUTE_WAVESEQ_INIT, 1));
        assert_eq!(msgs[1], param_message(0, p::WAVE_SEQ_STEP, 0));
        assert_eq!(msgs[2], param_message(0, p::EXECUTE_INSERT_WS_STEP, 1));
        // step 2 data starts after step 1's eight messages
        assert_eq!(msgs[13], param_message(0, p::WAVE_SEQ_STEP, 2));
        assert_eq!(msgs[14], param_message(0, p::WAVE_SEQ_COARSE, -5));
        assert_eq!(msgs[27], param_message(0, p::WAVE_SEQ_WAVE_BANK, 2));
        assert_eq!(msgs[28], param_message(0, p::WAVE_SEQ_WAVE_NUM, 132));
    }

    #[test]
    fn test_length_zero() {
        let codec = WavestationSequence::new();
        let mut m = codec.init_model();
        m.set("length", 0);
        let msgs = codec.length_messages(&m, 0);
        assert_eq!(
            msgs,
            vec![
                param_message(0, p::EXECUTE_WAVESEQ_INIT, 1),
                param_message(0, p::EXECUTE_DELETE_WS_STEP, 1),
            ]
        );
    }

    #[test]
    fn test_length_pause_policy() {
        assert_eq!(length_pause_ms(0, 3), MS_PER_INITIALIZATION);
        assert_eq!(length_pause_ms(1, 3), 0);
        assert_eq!(length_pause_ms(2, 3), 2 * 7 + 250);
        assert_eq!(length_pause_ms(4, 3), 4 * 7 + 250);
        assert_eq!(length_pause_ms(5, 3), MS_PER_STEP_DATA);
        assert_eq!(length_pause_ms(1, 1), MS_PER_STEP_DATA);
    }

    #[test]
    fn test_transmit_pauses_match_encode() {
        let codec = WavestationSequence::new();
        for length in [0, 1, 4] {
            let mut m = codec.init_model();
            m.set("length", length);
            let msgs = codec.encode(&m, &EncodeOptions::new(0, Destination::WorkingMemory)).unwrap();
            assert_eq!(codec.transmit_pauses(&m).len(), msgs.len(), "length {}", length);
        }
    }

    #[test]
    fn test_emit_parameter() {
        let codec = WavestationSequence::new();
        let mut m = codec.init_model();
        m.set("bank", 3);
        m.set("number", 9);
        m.set("length", 2);
        m.set("step2crossfade", 40);
        let msgs = codec.emit_parameter(&m, "step2crossfade", 0);
        assert_eq!(
            msgs,
            vec![
                param_message(0, p::WAVE_SEQ_BANK, 5),
                param_message(0, p::WAVE_SEQ_NUM, 9),
                param_message(0, p::WAVE_SEQ_STEP, 2),
                param_message(0, p::WAVE_SEQ_XFADE, 40),
            ]
        );
        assert!(codec.emit_parameter(&m, "step3level", 0).is_empty());
        assert!(codec.emit_parameter(&m, "name", 0).is_empty());
        assert!(codec.emit_parameter(&m, "bogus", 0).is_empty());

        m.set("looprepeats", 12);
        let msgs = codec.emit_parameter(&m, "looprepeats", 0);
        assert_eq!(msgs[2], param_message(0, p::WAVE_SEQ_REPEATS, 12));
        let msgs = codec.emit_parameter(&m, "length", 0);
        assert_eq!(msgs.len(), 2 + 1 + 2 + 16);
    }

    #[test]
    fn test_revise() {
        let codec = WavestationSequence::new();
        let mut m = codec.init_model();
        m.set_str("name", "Much Too Long\u{1}");
        m.set("length", 300);
        m.set("start", 400);
        m.set("loopend", 10);
        m.set("loopstart", 20);
        codec.revise(&mut m);
        assert_eq!(m.get_str("name", ""), "Much Too");
        assert_eq!(m.get("length"), 255);
        assert_eq!(m.get("start"), 255);
        assert_eq!(m.get("loopstart"), 10);

        m.set("length", 0);
        codec.revise(&mut m);
        assert_eq!(m.get("start"), 1);
        assert_eq!(m.get("loopstart"), 1);
        assert_eq!(m.get("loopend"), 1);
    }

    #[test]
    fn test_insert_and_delete_steps() {
        let codec = WavestationSequence::new();
        let mut m = codec.init_model();
        m.set("length", 2);
        m.set("step1level", 11);
        m.set("step2level", 22);
        m.set("step", 2);

        let msgs = codec.insert_step(&mut m, false, 0);
        assert_eq!(msgs[0], param_message(0, p::WAVE_SEQ_STEP, 2));
        assert_eq!(m.get("length"), 3);
        assert_eq!(m.get("step"), 3);
        assert_eq!(m.get("step2level"), 22);
        assert_eq!(m.get("step3level"), 22);

        m.set("step", 1);
        let msgs = codec.delete_step(&mut m, 0);
        assert_eq!(msgs[1], param_message(0, p::EXECUTE_DELETE_WS_STEP, 1));
        assert_eq!(m.get("length"), 2);
        assert_eq!(m.get("step1level"), 22);
        assert_eq!(m.get("step"), 1);
        assert_eq!(m.get("step3level"), 0);

        m.set("length", 0);
        assert!(codec.delete_step(&mut m, 0).is_empty());
        codec.insert_step(&mut m, true, 0);
        assert_eq!(m.get("length"), 1);
        assert_eq!(m.get("step1duration"), 1);
    }

    #[test]
    fn test_change_patch_and_request() {
        let codec = WavestationSequence::new();
        let mut m = Model::new();
        m.set("bank", 10);
        m.set("number", 4);
        let msgs = codec.change_patch(&m, 0);
        assert_eq!(msgs[2], param_message(0, p::WAVE_BANK, 2));
        assert_eq!(msgs[3], param_message(0, p::WAVE_NUM, 4));
        assert_eq!(codec.request_dump(&m, 1), vec![0xF0, 0x42, 0x31, 0x28, 0x0C, 2, 0xF7]);
    }
}
