//! Synthesizer patch codecs

pub mod parva;
pub mod wavestation;

use crate::error::{Error, Result};
use crate::model::Model;
use tracing::debug;

/// Where an encoded patch is headed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Destination {
    /// Saved to disk; no store command is appended
    #[default]
    File,
    /// Sent to the synth's edit buffer
    WorkingMemory,
    /// Sent and then written to the patch's bank and number
    Store,
}

/// Per-call encoding options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncodeOptions {
    /// Zero-based MIDI channel, 0..=15
    pub channel: u8,
    pub destination: Destination,
}

impl EncodeOptions {
    pub fn new(channel: u8, destination: Destination) -> Self {
        Self {
            channel: channel & 0x0F,
            destination,
        }
    }
}

/// Patch codec trait
pub trait PatchCodec: Send + Sync {
    /// Device name as accepted by [`create_codec`]
    fn name(&self) -> &'static str;

    /// Whether `data` is a dump this codec can decode
    fn recognize(&self, data: &[u8]) -> bool;

    /// Decode a dump. `number` selects an entry of a bulk dump.
    fn decode(&self, data: &[u8], number: Option<i32>) -> Result<Model>;

    /// Encode a model into the messages to send or save, in order
    fn encode(&self, model: &Model, options: &EncodeOptions) -> Result<Vec<Vec<u8>>>;

    /// Messages that update one parameter on the synth; empty when the
    /// parameter cannot be sent on its own
    fn emit_parameter(&self, model: &Model, key: &str, channel: u8) -> Vec<Vec<u8>>;

    /// Request for the dump holding the model's bank and number
    fn request_dump(&self, model: &Model, channel: u8) -> Vec<u8>;

    /// Request for the edit buffer, when the device supports one
    fn request_current_dump(&self, _channel: u8) -> Option<Vec<u8>> {
        None
    }

    /// Messages that select the model's bank and number on the synth
    fn change_patch(&self, model: &Model, channel: u8) -> Vec<Vec<u8>>;

    /// Bring out-of-range values back into range
    fn revise(&self, model: &mut Model);

    /// Model of a freshly initialized patch
    fn init_model(&self) -> Model;

    fn patch_name<'a>(&self, model: &'a Model) -> &'a str {
        model.get_str("name", "Init")
    }

    /// Human-readable bank and number
    fn location_name(&self, model: &Model) -> String;

    fn num_banks(&self) -> usize;

    fn patches_per_bank(&self) -> usize;

    /// Milliseconds to wait after each single-parameter message
    fn pause_after_parameter_ms(&self) -> u32 {
        0
    }

    /// Milliseconds to wait after a change-patch sequence
    fn pause_after_change_patch_ms(&self) -> u32 {
        0
    }
}

/// Fail unless the model's bank and number fit the device
pub fn check_location(codec: &dyn PatchCodec, model: &Model) -> Result<()> {
    let bank = model.get("bank");
    let max_bank = codec.num_banks() as i32;
    if !(0..max_bank).contains(&bank) {
        return Err(Error::InvalidBank {
            device: codec.name(),
            bank,
            max: max_bank,
        });
    }
    check_number(codec, model.get("number"))
}

/// Fail unless `number` is a valid patch number for the device
pub fn check_number(codec: &dyn PatchCodec, number: i32) -> Result<()> {
    let max = codec.patches_per_bank() as i32;
    if !(0..max).contains(&number) {
        return Err(Error::InvalidPatchNumber {
            device: codec.name(),
            number,
            max,
        });
    }
    Ok(())
}

/// Kinds of dump the crate can decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DumpKind {
    Parva,
    WavestationPatch,
    WavestationPerformance,
    WavestationSequence,
}

impl DumpKind {
    pub const ALL: [DumpKind; 4] = [
        DumpKind::Parva,
        DumpKind::WavestationPatch,
        DumpKind::WavestationPerformance,
        DumpKind::WavestationSequence,
    ];

    pub fn codec(self) -> Box<dyn PatchCodec> {
        match self {
            DumpKind::Parva => Box::new(parva::Parva::new()),
            DumpKind::WavestationPatch => Box::new(wavestation::WavestationPatch::new()),
            DumpKind::WavestationPerformance => {
                Box::new(wavestation::WavestationPerformance::new())
            }
            DumpKind::WavestationSequence => Box::new(wavestation::WavestationSequence::new()),
        }
    }

    pub fn device_name(self) -> &'static str {
        match self {
            DumpKind::Parva => parva::NAME,
            DumpKind::WavestationPatch => wavestation::patch::NAME,
            DumpKind::WavestationPerformance => wavestation::performance::NAME,
            DumpKind::WavestationSequence => wavestation::sequence::NAME,
        }
    }
}

/// Create a codec by device name
pub fn create_codec(name: &str) -> Result<Box<dyn PatchCodec>> {
    let kind = match name.to_ascii_lowercase().as_str() {
        "parva" | "futuresonus-parva" => DumpKind::Parva,
        "wavestation-patch" | "ws-patch" => DumpKind::WavestationPatch,
        "wavestation-performance" | "ws-performance" | "ws-perf" => {
            DumpKind::WavestationPerformance
        }
        "wavestation-sequence" | "ws-sequence" | "ws-seq" => DumpKind::WavestationSequence,
        _ => return Err(Error::UnknownDevice(name.to_string())),
    };
    Ok(kind.codec())
}

/// List all available device names
pub fn list_devices() -> Vec<&'static str> {
    DumpKind::ALL.iter().map(|k| k.device_name()).collect()
}

/// Classify an incoming buffer
pub fn identify(data: &[u8]) -> Option<DumpKind> {
    let kind = DumpKind::ALL
        .into_iter()
        .find(|kind| kind.codec().recognize(data));
    match kind {
        Some(k) => debug!("{} byte dump recognized as {}", data.len(), k.device_name()),
        None => debug!("{} byte dump not recognized", data.len()),
    }
    kind
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_codec_by_name() {
        for name in list_devices() {
            let codec = create_codec(name).unwrap();
            assert_eq!(codec.name(), name);
        }
        assert_eq!(create_codec("WS-PERF").unwrap().name(), "wavestation-performance");
        assert!(matches!(create_codec("dx7"), Err(Error::UnknownDevice(_))));
    }

    #[test]
    fn test_identify_own_init_dumps() {
        for kind in DumpKind::ALL {
            let codec = kind.codec();
            let model = codec.init_model();
            let msgs = codec.encode(&model, &EncodeOptions::default()).unwrap();
            assert_eq!(identify(&msgs[0]), Some(kind), "{}", kind.device_name());
        }
    }

    #[test]
    fn test_identify_rejects_garbage() {
        assert_eq!(identify(&[]), None);
        assert_eq!(identify(&[0xF0, 0x00, 0xF7]), None);
        assert_eq!(identify(&[0x90, 0x40, 0x7F]), None);
    }

    #[test]
    fn test_check_location() {
        let codec = create_codec("parva").unwrap();
        let mut m = Model::new();
        m.set("bank", 5);
        m.set("number", 63);
        assert!(check_location(codec.as_ref(), &m).is_ok());
        m.set("number", 64);
        assert!(matches!(
            check_location(codec.as_ref(), &m),
            Err(Error::InvalidPatchNumber { number: 64, .. })
        ));
        m.set("number", 0);
        m.set("bank", 6);
        assert!(matches!(
            check_location(codec.as_ref(), &m),
            Err(Error::InvalidBank { bank: 6, .. })
        ));
    }

    #[test]
    fn test_encode_options_mask_channel() {
        assert_eq!(EncodeOptions::new(17, Destination::Store).channel, 1);
    }
}
