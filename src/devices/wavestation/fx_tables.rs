//! Wavestation effect tables

use crate::codec::bitfield::Pcl;

/// Number of effect types, including Off
pub const NUM_FX_TYPES: usize = 56;

/// Number of effect classes; class 0 describes the shared FX header
pub const NUM_FX_CLASSES: usize = 31;

/// First effect type stored in the extended nibble
pub const FIRST_EXTENDED_FX: i32 = 48;

pub const FX_NAMES: [&str; NUM_FX_TYPES] = [
    "Off",
    "Small Hall",
    "Medium Hall",
    "Large Hall",
    "Small Room",
    "Large Room",
    "Live Stage",
    "Wet Plate",
    "Dry Plate",
    "Spring Reverb",
    "Early Reflections 1",
    "Early Reflections 2",
    "Early Reflections 3",
    "Gated Reverb",
    "Reverse Gate",
    "Stereo Delay",
    "Ping-Pong Delay",
    "Dual Mono Delay",
    "Multi-Tap Delay 1",
    "Multi-Tap Delay 2",
    "Multi-Tap Delay 3",
    "Stereo Chorus",
    "Quadrature Chorus",
    "Crossover Chorus",
    "Harmonic Chorus",
    "Stereo Flanger 1",
    "Stereo Flanger 2",
    "Crossover Flanger",
    "Enhancer/Exciter",
    "Distortion-Filter",
    "Overdrive-Filter",
    "Stereo Phaser 1",
    "Stereo Phaser 2",
    "Rotary Speaker",
    "Stereo Mod-Pan",
    "Quadrature Mod-Pan",
    "Stereo Parametric EQ",
    "Chorus-Stereo Delay",
    "Flanger-Stereo Delay",
    "Dual Mono Delay/Hall Reverb",
    "Dual Mono Delay/Room Reverb",
    "Dual Mono Delay/Chorus",
    "Dual Mono Delay/Flanger",
    "Dual Mono Delay/Distortion",
    "Dual Mono Delay/Overdrive",
    "Dual Mono Delay/Phaser",
    "Dual Mono Delay/Rotary Speaker",
    "Stereo Pitch Shifter",
    "Modulatable Pitch Shifter-Delay",
    "Stereo Compressor-Limiter/Gate",
    "Small Vocoder 1",
    "Small Vocoder 2",
    "Small Vocoder 3",
    "Small Vocoder 4",
    "Stereo Vocoder 1",
    "Stereo Vocoder 2",
];

/// Effect type to effect class
pub const FX_MAP: [usize; NUM_FX_TYPES] = [
    0, 1, 1, 2, 1, 1, 1, 1, 1, 1, 3, 3, 3, 4,
    4, 5, 5, 6, 7, 7, 7, 8, 8, 8, 9, 10, 10, 10,
    11, 12, 12, 13, 13, 14, 15, 15, 16, 17, 18, 19, 20, 21,
    22, 23, 23, 24, 25, 26, 27, 28, 29, 29, 29, 29, 30, 30,
];

/// Per class, the parameter group of each slot
pub const FX_INDICES: [&[u8]; NUM_FX_CLASSES] = [
    &[],
    &[0, 1, 2, 5, 3, 4, 6, 11, 12],
    &[0, 1, 2, 5, 3, 4, 6, 11, 12],
    &[0, 1, 2, 4, 3, 5, 6],
    &[0, 5, 4, 1, 2, 3],
    &[0, 1, 2, 6, 4, 5, 7, 3, 10, 11],
    &[0, 1, 2, 3, 4, 5],
    &[0, 1, 2, 6, 7, 8, 4, 5, 9, 10],
    &[8, 5, 6, 7, 9, 3, 4, 1, 10, 11],
    &[7, 8, 9, 4, 5, 6, 10, 2, 3, 1],
    &[4, 5, 6, 7, 8, 3, 0, 1, 9, 10],
    &[0, 1, 2, 3, 4, 5, 6],
    &[0, 2, 3, 4, 5, 6, 9, 10, 11, 1, 7, 8],
    &[0, 6, 7, 8, 3, 4, 5, 2, 9, 1],
    &[0, 2, 6, 7, 5, 4, 1],
    &[0, 1, 2, 4, 5, 6, 3, 7, 8],
    &[7, 8, 2, 5, 6, 3, 4, 0, 1],
    &[4, 0, 2, 1, 3, 5, 8, 6, 9, 10],
    &[4, 0, 2, 1, 3, 5, 8, 6, 9, 10],
    &[0, 1, 2, 3, 5, 4, 6],
    &[0, 1, 2, 3, 5, 4, 6],
    &[0, 1, 2, 3, 5, 4, 6],
    &[0, 1, 2, 3, 5, 4, 6],
    &[0, 1, 2, 3, 4, 5, 6],
    &[0, 1, 2, 3, 5, 4, 6],
    &[0, 1, 2, 6, 7, 5, 4],
    &[0, 1, 2, 3, 4, 5],
    &[0, 1, 2, 3, 4, 5, 6, 8, 7, 9],
    &[0, 1, 2, 3, 4, 5],
    &[0, 1, 2, 3, 4, 5, 6],
    &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10],
];

/// Per class, the bit descriptors in wire order
pub const FX_PCL: [&[Pcl]; NUM_FX_CLASSES] = [
    // 0
    &[
        Pcl::new(2, 0, 4, 0, 0),
        Pcl::new(3, 0, 4, 1, 0),
        Pcl::new(4, 0, 4, 2, 0),
        Pcl::new(0, 6, -1, 2, 4),
        Pcl::new(2, 4, 4, 3, 0),
        Pcl::new(3, 4, 4, 4, 0),
        Pcl::new(4, 4, 4, 5, 0),
        Pcl::new(1, 6, -1, 5, 4),
    ],
    // 1
    &[
        Pcl::new(0, 0, 4, 0, 0),
        Pcl::new(6, 5, 3, 0, 4),
        Pcl::new(0, 4, 4, 1, 0),
        Pcl::new(1, 0, 4, 2, 0),
        Pcl::new(3, 7, -1, 2, 4),
        Pcl::new(2, 0, 8, 3, 0),
        Pcl::new(7, 5, 1, 3, 8),
        Pcl::new(5, 4, 4, 4, 0),
        Pcl::new(4, 0, 7, 5, 0),
        Pcl::new(3, 0, 7, 6, 0),
        Pcl::new(5, 0, 4, 7, 0),
        Pcl::new(1, 4, 4, 8, 0),
        Pcl::new(4, 7, -1, 8, 4),
        Pcl::new(6, 0, -5, 11, 0),
        Pcl::new(7, 0, -5, 12, 0),
    ],
    // 2
    &[
        Pcl::new(0, 0, 4, 0, 0),
        Pcl::new(6, 5, 3, 0, 4),
        Pcl::new(0, 4, 4, 1, 0),
        Pcl::new(1, 0, 4, 2, 0),
        Pcl::new(3, 7, -1, 2, 4),
        Pcl::new(2, 0, 8, 3, 0),
        Pcl::new(7, 5, 1, 3, 8),
        Pcl::new(5, 4, 4, 4, 0),
        Pcl::new(4, 0, 7, 5, 0),
        Pcl::new(3, 0, 7, 6, 0),
        Pcl::new(5, 0, 4, 7, 0),
        Pcl::new(1, 4, 4, 8, 0),
        Pcl::new(4, 7, -1, 8, 4),
        Pcl::new(6, 0, -5, 11, 0),
        Pcl::new(7, 0, -5, 12, 0),
    ],
    // 3
    &[
        Pcl::new(0, 0, 7, 0, 0),
        Pcl::new(1, 0, 4, 1, 0),
        Pcl::new(2, 0, -5, 2, 0),
        Pcl::new(3, 0, 8, 3, 0),
        Pcl::new(4, 0, 8, 4, 0),
        Pcl::new(5, 0, -5, 5, 0),
        Pcl::new(6, 0, -5, 6, 0),
    ],
    // 4
    &[
        Pcl::new(0, 0, 7, 0, 0),
        Pcl::new(1, 0, 7, 1, 0),
        Pcl::new(2, 0, 4, 2, 0),
        Pcl::new(3, 0, 8, 3, 0),
        Pcl::new(4, 0, 8, 4, 0),
        Pcl::new(5, 0, 8, 5, 0),
    ],
    // 5
    &[
        Pcl::new(0, 0, 4, 0, 0),
        Pcl::new(7, 2, 3, 0, 4),
        Pcl::new(0, 4, 4, 1, 0),
        Pcl::new(3, 6, 2, 2, 0),
        Pcl::new(5, 0, -3, 2, 2),
        Pcl::new(1, 0, 4, 10, 0),
        Pcl::new(5, 3, -5, 11, 0),
        Pcl::new(6, 0, 8, 6, 0),
        Pcl::new(7, 0, 2, 6, 8),
        Pcl::new(1, 4, 4, 4, 0),
        Pcl::new(2, 0, -8, 5, 0),
        Pcl::new(3, 0, 6, 7, 0),
        Pcl::new(4, 0, -8, 13, 0),
    ],
    // 6
    &[
        Pcl::new(0, 0, 4, 0, 0),
        Pcl::new(1, 0, 8, 1, 0),
        Pcl::new(2, 0, 2, 1, 8),
        Pcl::new(3, 0, -8, 2, 0),
        Pcl::new(4, 0, 4, 3, 0),
        Pcl::new(5, 0, 8, 4, 0),
        Pcl::new(6, 0, 2, 4, 8),
        Pcl::new(7, 0, -8, 5, 0),
    ],
    // 7
    &[
        Pcl::new(0, 0, 4, 0, 0),
        Pcl::new(7, 5, 3, 0, 4),
        Pcl::new(0, 4, 4, 1, 0),
        Pcl::new(1, 0, 4, 2, 0),
        Pcl::new(2, 5, -1, 2, 4),
        Pcl::new(1, 4, 4, 4, 0),
        Pcl::new(2, 0, -5, 5, 0),
        Pcl::new(3, 0, 8, 6, 0),
        Pcl::new(6, 5, 1, 6, 8),
        Pcl::new(4, 0, 8, 7, 0),
        Pcl::new(6, 6, 1, 7, 8),
        Pcl::new(5, 0, -8, 8, 0),
        Pcl::new(6, 0, -5, 9, 0),
        Pcl::new(7, 0, -5, 10, 0),
    ],
    // 8
    &[
        Pcl::new(6, 7, 1, 1, 0),
        Pcl::new(0, 0, 8, 3, 0),
        Pcl::new(4, 7, 1, 3, 8),
        Pcl::new(1, 0, 8, 4, 0),
        Pcl::new(5, 7, 1, 4, 8),
        Pcl::new(2, 0, 8, 5, 0),
        Pcl::new(3, 0, 4, 6, 0),
        Pcl::new(3, 4, 4, 7, 0),
        Pcl::new(7, 7, -1, 7, 4),
        Pcl::new(4, 0, 7, 8, 0),
        Pcl::new(5, 0, -7, 9, 0),
        Pcl::new(6, 0, -5, 10, 0),
        Pcl::new(7, 0, -5, 11, 0),
    ],
    // 9
    &[
        Pcl::new(6, 7, 1, 1, 0),
        Pcl::new(0, 0, 8, 2, 0),
        Pcl::new(5, 7, 1, 2, 8),
        Pcl::new(1, 0, 8, 3, 0),
        Pcl::new(7, 7, 1, 3, 8),
        Pcl::new(2, 0, 8, 4, 0),
        Pcl::new(4, 4, 4, 5, 0),
        Pcl::new(7, 0, -5, 6, 0),
        Pcl::new(3, 0, 7, 7, 0),
        Pcl::new(4, 0, 4, 8, 0),
        Pcl::new(5, 0, -5, 9, 0),
        Pcl::new(6, 0, 7, 10, 0),
    ],
    // 10
    &[
        Pcl::new(7, 0, -5, 0, 0),
        Pcl::new(1, 7, 1, 1, 0),
        Pcl::new(0, 0, 8, 3, 0),
        Pcl::new(1, 0, 7, 4, 0),
        Pcl::new(2, 0, 8, 5, 0),
        Pcl::new(3, 0, 4, 6, 0),
        Pcl::new(4, 0, -8, 7, 0),
        Pcl::new(5, 0, -8, 8, 0),
        Pcl::new(6, 0, 4, 9, 0),
        Pcl::new(6, 4, 4, 10, 0),
        Pcl::new(3, 4, -1, 9, 5),
        Pcl::new(3, 5, -1, 10, 5),
    ],
    // 11
    &[
        Pcl::new(0, 0, 4, 0, 0),
        Pcl::new(1, 0, 7, 1, 0),
        Pcl::new(2, 0, 4, 2, 0),
        Pcl::new(3, 0, 7, 3, 0),
        Pcl::new(4, 0, 7, 4, 0),
        Pcl::new(5, 0, -5, 5, 0),
        Pcl::new(6, 0, -5, 6, 0),
    ],
    // 12
    &[
        Pcl::new(0, 0, 4, 0, 0),
        Pcl::new(2, 7, 1, 1, 0),
        Pcl::new(1, 0, 8, 2, 0),
        Pcl::new(2, 0, 7, 3, 0),
        Pcl::new(0, 4, 4, 4, 0),
        Pcl::new(3, 0, -5, 5, 0),
        Pcl::new(4, 0, 7, 6, 0),
        Pcl::new(5, 0, -5, 7, 0),
        Pcl::new(6, 0, -5, 8, 0),
        Pcl::new(7, 0, 7, 9, 0),
        Pcl::new(3, 5, 3, 10, 0),
        Pcl::new(4, 7, 1, 10, 3),
        Pcl::new(5, 5, 3, 11, 0),
        Pcl::new(6, 5, -2, 11, 3),
    ],
    // 13
    &[
        Pcl::new(0, 0, -5, 0, 0),
        Pcl::new(1, 7, 1, 1, 0),
        Pcl::new(1, 0, 7, 2, 0),
        Pcl::new(2, 0, 8, 3, 0),
        Pcl::new(5, 4, 4, 4, 0),
        Pcl::new(3, 0, -5, 5, 0),
        Pcl::new(4, 0, 7, 6, 0),
        Pcl::new(5, 0, 4, 7, 0),
        Pcl::new(6, 0, -5, 8, 0),
        Pcl::new(7, 0, -8, 9, 0),
    ],
    // 14
    &[
        Pcl::new(6, 0, 4, 0, 0),
        Pcl::new(6, 4, 1, 1, 0),
        Pcl::new(5, 4, 4, 2, 0),
        Pcl::new(4, 4, 4, 4, 0),
        Pcl::new(4, 0, 4, 5, 0),
        Pcl::new(3, 0, 8, 6, 0),
        Pcl::new(2, 0, 8, 7, 0),
        Pcl::new(1, 0, 8, 8, 0),
        Pcl::new(0, 0, 8, 9, 0),
    ],
    // 15
    &[
        Pcl::new(0, 0, 4, 0, 0),
        Pcl::new(0, 4, 4, 1, 0),
        Pcl::new(1, 0, -5, 2, 0),
        Pcl::new(2, 0, 8, 3, 0),
        Pcl::new(3, 0, 4, 4, 0),
        Pcl::new(3, 4, 4, 5, 0),
        Pcl::new(4, 0, -5, 6, 0),
        Pcl::new(5, 0, -5, 7, 0),
        Pcl::new(6, 0, -5, 8, 0),
    ],
    // 16
    &[
        Pcl::new(6, 0, 6, 0, 0),
        Pcl::new(0, 0, 4, 1, 0),
        Pcl::new(1, 7, -1, 1, 4),
        Pcl::new(1, 0, 7, 2, 0),
        Pcl::new(4, 0, 4, 3, 0),
        Pcl::new(2, 0, 4, 4, 0),
        Pcl::new(3, 7, -1, 4, 4),
        Pcl::new(5, 0, -5, 5, 0),
        Pcl::new(3, 0, 7, 6, 0),
        Pcl::new(7, 0, 6, 7, 0),
        Pcl::new(4, 4, 4, 8, 0),
        Pcl::new(5, 5, -1, 8, 4),
    ],
    // 17
    &[
        Pcl::new(5, 4, 4, 0, 0),
        Pcl::new(6, 5, 2, 0, 4),
        Pcl::new(0, 0, 8, 1, 0),
        Pcl::new(1, 0, 7, 2, 0),
        Pcl::new(2, 0, -8, 3, 0),
        Pcl::new(5, 0, 4, 4, 0),
        Pcl::new(7, 5, 3, 4, 4),
        Pcl::new(3, 0, 8, 5, 0),
        Pcl::new(1, 7, 1, 5, 8),
        Pcl::new(6, 7, 1, 7, 0),
        Pcl::new(4, 0, -8, 8, 0),
        Pcl::new(6, 0, -5, 9, 0),
        Pcl::new(7, 0, -5, 10, 0),
    ],
    // 18
    &[
        Pcl::new(5, 4, 4, 0, 0),
        Pcl::new(6, 5, 2, 0, 4),
        Pcl::new(0, 0, 8, 1, 0),
        Pcl::new(1, 0, 7, 2, 0),
        Pcl::new(2, 0, -8, 3, 0),
        Pcl::new(5, 0, 4, 4, 0),
        Pcl::new(7, 5, 3, 4, 4),
        Pcl::new(3, 0, 8, 5, 0),
        Pcl::new(1, 7, 1, 5, 8),
        Pcl::new(6, 7, 1, 7, 0),
        Pcl::new(4, 0, -8, 8, 0),
        Pcl::new(6, 0, -5, 9, 0),
        Pcl::new(7, 0, -5, 10, 0),
    ],
    // 19
    &[
        Pcl::new(0, 0, 4, 0, 0),
        Pcl::new(1, 0, 8, 1, 0),
        Pcl::new(2, 0, 2, 1, 8),
        Pcl::new(3, 0, -8, 2, 0),
        Pcl::new(4, 0, 7, 3, 0),
        Pcl::new(5, 0, 8, 4, 0),
        Pcl::new(2, 2, 2, 4, 0),
        Pcl::new(6, 0, 7, 5, 0),
        Pcl::new(7, 0, 7, 6, 0),
    ],
    // 20
    &[
        Pcl::new(0, 0, 4, 0, 0),
        Pcl::new(1, 0, 8, 1, 0),
        Pcl::new(2, 0, 2, 1, 8),
        Pcl::new(3, 0, -8, 2, 0),
        Pcl::new(4, 0, 7, 3, 0),
        Pcl::new(5, 0, 8, 4, 0),
        Pcl::new(2, 2, 2, 4, 0),
        Pcl::new(6, 0, 7, 5, 0),
        Pcl::new(7, 0, 7, 6, 0),
    ],
    // 21
    &[
        Pcl::new(0, 0, 4, 0, 0),
        Pcl::new(1, 0, 8, 1, 0),
        Pcl::new(2, 0, 2, 1, 8),
        Pcl::new(3, 0, -8, 2, 0),
        Pcl::new(4, 0, 8, 3, 0),
        Pcl::new(5, 0, 8, 4, 0),
        Pcl::new(6, 0, 7, 5, 0),
        Pcl::new(7, 0, -8, 6, 0),
    ],
    // 22
    &[
        Pcl::new(0, 0, 4, 0, 0),
        Pcl::new(1, 0, 8, 1, 0),
        Pcl::new(2, 0, 2, 1, 8),
        Pcl::new(3, 0, -8, 2, 0),
        Pcl::new(4, 0, 8, 3, 0),
        Pcl::new(5, 0, 8, 4, 0),
        Pcl::new(6, 0, 7, 5, 0),
        Pcl::new(7, 0, -8, 6, 0),
    ],
    // 23
    &[
        Pcl::new(0, 0, 4, 0, 0),
        Pcl::new(1, 0, 8, 1, 0),
        Pcl::new(2, 0, 2, 1, 8),
        Pcl::new(3, 0, -8, 2, 0),
        Pcl::new(4, 0, 8, 3, 0),
        Pcl::new(5, 0, 8, 4, 0),
        Pcl::new(6, 0, 8, 5, 0),
        Pcl::new(7, 0, 8, 6, 0),
    ],
    // 24
    &[
        Pcl::new(0, 0, 4, 0, 0),
        Pcl::new(1, 0, 8, 1, 0),
        Pcl::new(2, 0, 2, 1, 8),
        Pcl::new(3, 0, -8, 2, 0),
        Pcl::new(4, 0, 7, 3, 0),
        Pcl::new(5, 0, 8, 4, 0),
        Pcl::new(6, 0, 7, 5, 0),
        Pcl::new(7, 0, -8, 6, 0),
    ],
    // 25
    &[
        Pcl::new(0, 0, 4, 0, 0),
        Pcl::new(1, 0, 8, 1, 0),
        Pcl::new(2, 0, 2, 1, 8),
        Pcl::new(3, 0, -8, 2, 0),
        Pcl::new(6, 0, 4, 4, 0),
        Pcl::new(6, 4, 4, 5, 0),
        Pcl::new(4, 0, 8, 6, 0),
        Pcl::new(5, 0, 8, 7, 0),
    ],
    // 26
    &[
        Pcl::new(0, 0, 8, 0, 0),
        Pcl::new(1, 0, 8, 1, 0),
        Pcl::new(2, 0, 8, 2, 0),
        Pcl::new(3, 0, 8, 3, 0),
        Pcl::new(4, 0, 8, 4, 0),
        Pcl::new(6, 0, 1, 4, 8),
        Pcl::new(5, 0, 8, 5, 0),
        Pcl::new(7, 0, 1, 5, 8),
    ],
    // 27
    &[
        Pcl::new(0, 4, 4, 0, 0),
        Pcl::new(1, 0, 4, 1, 0),
        Pcl::new(1, 4, 4, 2, 0),
        Pcl::new(4, 5, -1, 2, 4),
        Pcl::new(2, 0, 4, 3, 0),
        Pcl::new(4, 6, -1, 3, 4),
        Pcl::new(3, 0, 7, 4, 0),
        Pcl::new(2, 4, 4, 5, 0),
        Pcl::new(4, 0, -5, 6, 0),
        Pcl::new(5, 0, 8, 7, 0),
        Pcl::new(3, 7, 1, 7, 8),
        Pcl::new(6, 0, 8, 8, 0),
        Pcl::new(4, 7, 1, 8, 8),
        Pcl::new(7, 0, 8, 9, 0),
    ],
    // 28
    &[
        Pcl::new(1, 0, 5, 0, 0),
        Pcl::new(2, 0, 7, 1, 0),
        Pcl::new(3, 0, 7, 2, 0),
        Pcl::new(4, 0, 7, 3, 0),
        Pcl::new(5, 0, 7, 4, 0),
        Pcl::new(6, 0, 7, 5, 0),
    ],
    // 29
    &[
        Pcl::new(0, 4, 2, 0, 0),
        Pcl::new(1, 0, 7, 1, 0),
        Pcl::new(0, 6, 2, 2, 0),
        Pcl::new(2, 0, 7, 3, 0),
        Pcl::new(3, 0, 4, 4, 0),
        Pcl::new(3, 4, 4, 5, 0),
        Pcl::new(4, 0, -5, 6, 0),
    ],
    // 30
    &[
        Pcl::new(3, 4, 2, 0, 0),
        Pcl::new(2, 0, 7, 1, 0),
        Pcl::new(3, 6, 2, 2, 0),
        Pcl::new(1, 0, 7, 3, 0),
        Pcl::new(0, 4, 4, 4, 0),
        Pcl::new(3, 0, 4, 5, 0),
        Pcl::new(4, 0, 4, 6, 0),
        Pcl::new(2, 7, -1, 6, 4),
        Pcl::new(4, 4, 4, 7, 0),
        Pcl::new(5, 0, 8, 8, 0),
        Pcl::new(6, 7, 1, 8, 8),
        Pcl::new(7, 7, 1, 8, 9),
        Pcl::new(6, 0, 7, 9, 0),
        Pcl::new(7, 0, 7, 10, 0),
    ],
];

/// Per class, the parameter-set number of each slot
pub const FX_PARAMETERS: [&[u16]; NUM_FX_CLASSES] = [
    &[],
    &[296, 271, 318, 307, 305, 306, 308, 327, 328],
    &[296, 271, 318, 307, 305, 306, 308, 327, 328],
    &[296, 271, 318, 306, 305, 321, 322],
    &[296, 307, 306, 303, 272, 305],
    &[296, 271, 318, 308, 274, 321, 289, 329, 279, 327],
    &[356, 303, 318, 357, 306, 321],
    &[296, 271, 318, 308, 309, 324, 274, 321, 325, 326],
    &[310, 283, 276, 323, 270, 305, 306, 268, 326, 327],
    &[309, 278, 325, 282, 275, 322, 288, 304, 305, 268],
    &[306, 359, 276, 323, 324, 305, 316, 268, 325, 326],
    &[356, 303, 304, 305, 306, 321, 322],
    &[299, 304, 305, 274, 321, 308, 311, 279, 327, 268, 323, 324],
    &[299, 308, 277, 324, 281, 274, 321, 304, 325, 268],
    &[299, 304, 284, 285, 275, 306, 268],
    &[356, 271, 318, 306, 275, 322, 281, 323, 324],
    &[294, 324, 304, 321, 308, 273, 320, 292, 317],
    &[298, 302, 304, 280, 319, 307, 324, 269, 325, 326],
    &[298, 302, 304, 280, 319, 307, 324, 269, 325, 326],
    &[356, 303, 318, 297, 307, 306, 308],
    &[356, 303, 318, 297, 307, 306, 308],
    &[356, 303, 318, 305, 307, 282, 322],
    &[356, 303, 318, 305, 307, 282, 322],
    &[356, 303, 318, 305, 306, 307, 308],
    &[356, 303, 318, 305, 307, 282, 322],
    &[356, 303, 318, 284, 285, 275, 306],
    &[356, 271, 318, 305, 306, 307],
    &[356, 271, 318, 319, 306, 275, 322, 310, 309, 311],
    &[405, 303, 304, 305, 306, 307],
    &[397, 303, 398, 305, 306, 275, 322],
    &[397, 303, 398, 305, 306, 275, 322, 309, 310, 311, 312],
];

/// Per effect type, factory values in descriptor order
pub const FX_PRESETS: [&[i16]; NUM_FX_TYPES] = [
    // Off
    &[],
    // Small Hall
    &[14, 1, 0, 0, 0, 55, 0, 5, 55, 40, 0, 0, 0, -2, 0],
    // Medium Hall
    &[14, 1, 0, 0, 0, 65, 0, 5, 65, 45, 0, 0, 0, -2, -2],
    // Large Hall
    &[14, 1, 0, 0, 0, 170, 0, 5, 70, 40, 0, 0, 0, 0, -2],
    // Small Room
    &[13, 2, 0, 0, 0, 22, 0, 7, 12, 20, 0, 0, 0, 1, -1],
    // Large Room
    &[3, 2, 0, 0, 0, 55, 0, 8, 25, 20, 0, 0, 0, 1, -4],
    // Live Stage
    &[3, 2, 0, 0, 0, 25, 0, 8, 40, 30, 0, 0, 0, -1, -1],
    // Wet Plate
    &[14, 1, 0, 0, 0, 50, 0, 1, 60, 30, 0, 0, 0, -1, -1],
    // Dry Plate
    &[4, 1, 0, 0, 0, 60, 0, 10, 40, 20, 0, 0, 0, 2, 6],
    // Spring Reverb
    &[4, 1, 0, 0, 0, 0, 0, 5, 50, 30, 0, 0, 0, 3, 4],
    // Early Reflections 1
    &[50, 0, 0, 20, 40, 0, 0],
    // Early Reflections 2
    &[50, 0, 0, 20, 40, 0, 0],
    // Early Reflections 3
    &[50, 0, 0, 20, 40, 0, 0],
    // Gated Reverb
    &[50, 10, 6, 50, 0, 30],
    // Reverse Gate
    &[50, 30, 6, 50, 20, 35],
    // Stereo Delay
    &[8, 2, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 40],
    // Ping-Pong Delay
    &[8, 2, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 40],
    // Dual Mono Delay
    &[5, 200, 0, 55, 5, 144, 1, 45],
    // Multi-Tap Delay 1
    &[2, 3, 0, 0, 0, 0, 0, 44, 1, 144, 1, 50, 0, 0],
    // Multi-Tap Delay 2
    &[2, 3, 0, 0, 0, 0, 0, 11, 1, 144, 1, 50, 0, 0],
    // Multi-Tap Delay 3
    &[2, 3, 0, 0, 0, 0, 0, 44, 1, 144, 1, 50, 0, 0],
    // Stereo Chorus
    &[0, 11, 0, 23, 0, 15, 0, 0, 0, 60, 10, 0, 0],
    // Quadrature Chorus
    &[0, 11, 0, 23, 0, 33, 0, 0, 0, 50, -11, 0, 0],
    // Crossover Chorus
    &[0, 11, 0, 23, 0, 33, 0, 0, 0, 50, -11, 0, 0],
    // Harmonic Chorus
    &[0, 22, 0, 46, 0, 35, 2, 7, 100, 2, -7, 1],
    // Stereo Flanger 1
    &[-8, 0, 5, 100, 20, 12, 2, -85, 0, 0, 0, 0],
    // Stereo Flanger 2
    &[5, 0, 10, 100, 20, 0, 0, -85, 0, 0, 0, 0],
    // Crossover Flanger
    &[-5, 0, 50, 100, 0, 5, -15, -85, 3, 3, 0, 0],
    // Enhancer/Exciter
    &[11, 80, 1, 50, 25, 1, 1],
    // Distortion-Filter
    &[10, 0, 111, 5, 5, 5, 80, 2, -12, 10, 0, 0, 0, 0],
    // Overdrive-Filter
    &[10, 0, 50, 45, 0, 0, 0, 3, -3, 20, 0, 0, 0, 0],
    // Stereo Phaser 1
    &[-5, 0, 40, 6, 12, 5, 30, 0, 0, 70],
    // Stereo Phaser 2
    &[5, 0, 27, 20, 12, 2, 97, 0, 0, -30],
    // Rotary Speaker
    &[10, 0, 9, 4, 12, 25, 70, 20, 60],
    // Stereo Mod-Pan
    &[11, 0, 0, 20, 10, 0, 0, 0, 0],
    // Quadrature Mod-Pan
    &[11, 0, 0, 20, 10, 0, 0, 0, 0],
    // Stereo Parametric EQ
    &[12, 12, 0, 8, 12, 6, 0, 12, 50, 20, 12, 0],
    // Chorus-Stereo Delay
    &[27, 0, 30, 50, 10, 14, 1, 110, 0, 0, -10, 2, 2],
    // Flanger-Stereo Delay
    &[0, 0, 10, 50, -90, 2, 3, 144, 1, 0, 60, 0, 0],
    // Dual Mono Delay/Hall Reverb
    &[5, 250, 0, 40, 20, 150, 0, 99, 30],
    // Dual Mono Delay/Room Reverb
    &[5, 250, 0, 40, 40, 0, 0, 30, 30],
    // Dual Mono Delay/Chorus
    &[5, 250, 0, 40, 50, 30, 50, 0],
    // Dual Mono Delay/Flanger
    &[5, 250, 0, 40, 0, 9, 50, 85],
    // Dual Mono Delay/Distortion
    &[5, 250, 0, 40, 111, 50, 75, 5],
    // Dual Mono Delay/Overdrive
    &[5, 250, 0, 40, 50, 90, 0, 15],
    // Dual Mono Delay/Phaser
    &[5, 250, 0, 40, 35, 5, 30, 70],
    // Dual Mono Delay/Rotary Speaker
    &[5, 250, 0, 40, 4, 12, 25, 70],
    // Stereo Pitch Shifter
    &[6, 0, 0, 12, 30, 0, 50, 0],
    // Modulatable Pitch Shifter-Delay
    &[6, 0, 0, 0, 7, 0, 100, 0, 0, 30, 0, 50, 0, 20],
    // Stereo Compressor-Limiter/Gate
    &[0, 100, 95, 1, 1, 20],
    // Small Vocoder 1
    &[0, 50, 1, 50, 0, 6, 8],
    // Small Vocoder 2
    &[0, 50, 1, 50, 0, 6, 8],
    // Small Vocoder 3
    &[0, 50, 1, 50, 0, 6, 8],
    // Small Vocoder 4
    &[0, 50, 1, 50, 0, 6, 8],
    // Stereo Vocoder 1
    &[0, 50, 1, 50, 0, 6, 8, 0, 10, 50, 0, 0, 30, 70],
    // Stereo Vocoder 2
    &[0, 50, 1, 50, 0, 6, 8, 0, 10, 50, 0, 0, 30, 70],
];
