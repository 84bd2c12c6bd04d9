//! Human-readable parameter values
//!
//! Labels follow the front panels. Parameters without a dedicated label are
//! shown as plain numbers.

use crate::devices::parva;
use crate::devices::wavestation::{bank, fx_tables::FX_NAMES, waves};
use crate::devices::DumpKind;
use crate::model::Model;

pub const WS_WAVE_COUNTS: [&str; 3] = ["1: A", "2: A C", "4: A B C D"];
pub const WS_LOOPS: [&str; 7] = ["Off", "0 -> 3", "1 -> 3", "2 -> 3", "0 <-> 3", "1 <-> 3", "2 <-> 3"];
pub const WS_LFO_SHAPES: [&str; 5] = ["Triangle", "Square", "Sawtooth", "Ramp", "Random"];
pub const WS_PLAY_MODES: [&str; 3] = ["Local", "MIDI (Off)", "Local + MIDI"];
pub const WS_VOICE_MODES: [&str; 3] = ["Polyphonic", "Unison Retrigger", "Unison Legato"];
pub const WS_KEY_PRIORITIES: [&str; 3] = ["Low Note", "High Note", "Last Note"];
pub const WS_SCALES: [&str; 16] = [
    "Equal Temperament 1", "Equal Temperament 2", "Pure Major", "Pure Minor", "User 1", "User 2",
    "User 3", "User 4", "User 5", "User 6", "User 7", "User 8", "User 9", "User 10", "User 11",
    "User 12",
];

fn pick(labels: &[&str], value: i32) -> String {
    usize::try_from(value)
        .ok()
        .and_then(|i| labels.get(i))
        .map(|s| s.to_string())
        .unwrap_or_else(|| value.to_string())
}

fn on_off(value: i32) -> String {
    let label = if value == 0 { "Off" } else { "On" };
    label.to_string()
}

/// MIDI note name such as `C4` for 60
pub fn note_name(note: i32) -> String {
    format!("{}{}", waves::KEYS[note.rem_euclid(12) as usize], note.div_euclid(12) - 1)
}

/// Split `osc3lfo1shape` with prefix `osc` into `(3, "lfo1shape")`
fn split_indexed<'a>(key: &'a str, prefix: &str) -> Option<(i32, &'a str)> {
    let rest = key.strip_prefix(prefix)?;
    let digits = rest.chars().take_while(char::is_ascii_digit).count();
    let n = rest[..digits].parse().ok()?;
    Some((n, &rest[digits..]))
}

fn is_mod_source(key: &str) -> bool {
    key.ends_with("source")
}

fn parva_value(key: &str, value: i32) -> String {
    if let Some((_, field)) = split_indexed(key, "osc") {
        return match field {
            "wave" => match value {
                1 => "Saw".to_string(),
                2 => "Tri".to_string(),
                _ => format!("PW {}", value - 3),
            },
            "pulse" | "key" | "sync" => on_off(value),
            _ => value.to_string(),
        };
    }
    if let Some((_, field)) = split_indexed(key, "lfo") {
        return match field {
            "rate" if value == 0 => "Off".to_string(),
            "wave" => pick(&parva::LFO_WAVES, value),
            "moddst" => pick(&parva::MOD_DESTINATIONS, value),
            "midiclk" => pick(&parva::TICKS, value),
            "polar" => if value == 0 { "Bipolar" } else { "Unipolar" }.to_string(),
            "keysync" => on_off(value),
            _ => value.to_string(),
        };
    }
    if let Some((_, field)) = split_indexed(key, "env") {
        return match field {
            "curve" => pick(&parva::CURVES, value),
            "moddst" => pick(&parva::MOD_DESTINATIONS, value),
            "loop" => on_off(value),
            _ => value.to_string(),
        };
    }
    if let Some((_, field)) = split_indexed(key, "mod") {
        return match field {
            "source" => pick(&parva::MOD_SOURCES, value),
            "destination" => pick(&parva::MOD_DESTINATIONS, value),
            _ => value.to_string(),
        };
    }
    match key {
        "bank" => pick(&parva::BANKS, value),
        "voicecfg" => pick(&parva::VOICE_CONFIGURATIONS, value),
        "glidemode" => pick(&parva::GLIDE_MODES, value),
        "vcftype" => pick(&parva::VCF_TYPES, value),
        "cleanosc" => on_off(value),
        _ => value.to_string(),
    }
}

fn ws_patch_value(key: &str, value: i32) -> String {
    if let Some((_, field)) = split_indexed(key, "osc") {
        return match field {
            "wavebank" => bank::name(value).to_string(),
            "wave" => waves::wave_name(0, value),
            "tuningslope" => format!("{}", value as f64 / 50.0),
            "pitchbendrange" => match value {
                0 => "Off".to_string(),
                -1 => "Global".to_string(),
                _ => value.to_string(),
            },
            "pitchramptime" if value == 100 => "On".to_string(),
            "lfo1shape" | "lfo2shape" => pick(&WS_LFO_SHAPES, value),
            "lfo1sync" | "lfo2sync" | "busa" | "busb" | "busc" | "busd" => on_off(value),
            f if is_mod_source(f) => pick(&waves::SOURCES, value),
            _ => value.to_string(),
        };
    }
    match key {
        "bank" => bank::name(value).to_string(),
        "numoscillators" => pick(&WS_WAVE_COUNTS, value),
        "mixloop" => pick(&WS_LOOPS, value),
        "mixlooprepeats" => match value {
            0 => "Off".to_string(),
            127 => "Inf".to_string(),
            _ => value.to_string(),
        },
        "hardsync" => on_off(value),
        k if is_mod_source(k) => pick(&waves::SOURCES, value),
        _ => value.to_string(),
    }
}

fn ws_performance_value(key: &str, value: i32) -> String {
    if let Some((_, field)) = split_indexed(key, "part") {
        return match field {
            "bank" => bank::name(value).to_string(),
            "playmode" => pick(&WS_PLAY_MODES, value),
            "voicemode" => pick(&WS_VOICE_MODES, value),
            "keypriority" => pick(&WS_KEY_PRIORITIES, value),
            "scale" => pick(&WS_SCALES, value),
            "scalekey" => waves::KEYS[(value - 1).rem_euclid(12) as usize].to_string(),
            "lowkey" | "hikey" => note_name(value),
            "sustain" => on_off(value),
            _ => value.to_string(),
        };
    }
    match key {
        "bank" => bank::name(value).to_string(),
        "fx1type" | "fx2type" => pick(&FX_NAMES, value),
        "fxmod3source" | "fxmod4source" => pick(&waves::FX_SOURCES, value),
        "fxseries" => if value == 0 { "Parallel" } else { "Series" }.to_string(),
        _ => value.to_string(),
    }
}

fn ws_sequence_value(key: &str, value: i32) -> String {
    if let Some((_, field)) = split_indexed(key, "step") {
        return match field {
            "bank" => bank::name(value).to_string(),
            "number" => waves::wave_name(0, value + waves::NUM_WAVE_SEQUENCES),
            "semitone" | "fine" if value > 0 => format!("+{}", value),
            _ => value.to_string(),
        };
    }
    match key {
        "bank" => bank::name(value).to_string(),
        "modsource" => pick(&waves::SOURCES, value),
        "loopbackandforth" => if value == 0 { "Forward" } else { "Back and Forth" }.to_string(),
        "looprepeats" => match value {
            0 => "Off".to_string(),
            127 => "Inf".to_string(),
            _ => value.to_string(),
        },
        _ => value.to_string(),
    }
}

/// Label for `value` of parameter `key` on device `kind`
pub fn format_value(kind: DumpKind, key: &str, value: i32) -> String {
    match kind {
        DumpKind::Parva => parva_value(key, value),
        DumpKind::WavestationPatch => ws_patch_value(key, value),
        DumpKind::WavestationPerformance => ws_performance_value(key, value),
        DumpKind::WavestationSequence => ws_sequence_value(key, value),
    }
}

/// Label for `key` as stored in `model`. Wave numbers are named from the
/// bank stored alongside them.
pub fn format_param(kind: DumpKind, model: &Model, key: &str) -> String {
    if key == "name" {
        return model.get_str("name", "").to_string();
    }
    let value = model.get(key);
    match kind {
        DumpKind::WavestationPatch => {
            if let Some((osc, "wave")) = split_indexed(key, "osc") {
                return waves::wave_name(model.get(&format!("osc{osc}wavebank")), value);
            }
        }
        DumpKind::WavestationSequence => {
            if let Some((step, "number")) = split_indexed(key, "step") {
                let bank = model.get(&format!("step{step}bank"));
                return waves::wave_name(bank, value + waves::NUM_WAVE_SEQUENCES);
            }
        }
        _ => {}
    }
    format_value(kind, key, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parva_labels() {
        let k = DumpKind::Parva;
        assert_eq!(format_value(k, "osc1wave", 1), "Saw");
        assert_eq!(format_value(k, "osc3wave", 2), "Tri");
        assert_eq!(format_value(k, "osc2wave", 10), "PW 7");
        assert_eq!(format_value(k, "lfo4rate", 0), "Off");
        assert_eq!(format_value(k, "lfo4rate", 9), "9");
        assert_eq!(format_value(k, "mod12source", 3), "Mod Wheel");
        assert_eq!(format_value(k, "mod12destination", 13), "VCF Cutoff");
        assert_eq!(format_value(k, "voicecfg", 2), "Mono");
        assert_eq!(format_value(k, "bank", 5), "F");
        assert_eq!(format_value(k, "vcftype", 99), "99");
    }

    #[test]
    fn test_wavestation_patch_labels() {
        let k = DumpKind::WavestationPatch;
        assert_eq!(format_value(k, "mixlooprepeats", 127), "Inf");
        assert_eq!(format_value(k, "osc2pitchbendrange", -1), "Global");
        assert_eq!(format_value(k, "osc1tuningslope", 50), "1");
        assert_eq!(format_value(k, "osc1tuningslope", 25), "0.5");
        assert_eq!(format_value(k, "osc4lfo2ratemodsource", 4), "LFO1");
        assert_eq!(format_value(k, "mixxmod1source", 9), "Mod Wheel");
        assert_eq!(format_value(k, "osc1wavebank", 11), "Card");
    }

    #[test]
    fn test_wavestation_performance_labels() {
        let k = DumpKind::WavestationPerformance;
        assert_eq!(format_value(k, "fx1type", 0), "Off");
        assert_eq!(format_value(k, "fxmod3source", 1), "Mod Wheel");
        assert_eq!(format_value(k, "part3lowkey", 60), "C4");
        assert_eq!(format_value(k, "part3hikey", 0), "C-1");
        assert_eq!(format_value(k, "part1scalekey", 1), "C");
        assert_eq!(format_value(k, "part1scalekey", 12), "B");
        assert_eq!(format_value(k, "part8voicemode", 1), "Unison Retrigger");
    }

    #[test]
    fn test_wave_names_follow_bank() {
        let mut m = Model::new();
        m.set("osc1wave", 32);
        m.set("osc1wavebank", 11);
        m.set("osc2wave", 32);
        assert_eq!(format_param(DumpKind::WavestationPatch, &m, "osc1wave"), "Card Wave 32");
        assert_eq!(format_param(DumpKind::WavestationPatch, &m, "osc2wave"), "Soft EP");

        m.set("step1number", 1);
        assert_eq!(format_param(DumpKind::WavestationSequence, &m, "step1number"), "Hard EP");
    }

    #[test]
    fn test_split_indexed() {
        assert_eq!(split_indexed("osc3lfo1shape", "osc"), Some((3, "lfo1shape")));
        assert_eq!(split_indexed("step255bank", "step"), Some((255, "bank")));
        assert_eq!(split_indexed("oscillators", "osc"), None);
    }
}
