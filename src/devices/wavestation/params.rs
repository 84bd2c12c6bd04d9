//! Wavestation SR remote parameter numbers

// Global and performance
pub const CURRENT_BANK: u16 = 0;
pub const CURRENT_PROG: u16 = 2;
pub const PROG_NAME: u16 = 3;
pub const MIDI_MODE: u16 = 4;

// Parts
pub const CURRENT_PART: u16 = 56;
pub const PART_PATCH_BANK: u16 = 57;
pub const PART_PATCH_NUM: u16 = 58;
pub const PART_PATCH_NAME: u16 = 59;
pub const PART_MODE: u16 = 60;
pub const PART_VOLUME: u16 = 61;
pub const PART_OUTPUT: u16 = 62;
pub const PART_KEY_LIMIT_LOW: u16 = 63;
pub const PART_KEY_LIMIT_HIGH: u16 = 64;
pub const PART_VEL_LIMIT_LOW: u16 = 65;
pub const PART_VEL_LIMIT_HIGH: u16 = 66;
pub const PART_TRANSPOSE: u16 = 67;
pub const PART_DETUNE: u16 = 68;
pub const PART_SUS_ENABLE: u16 = 69;
pub const PART_DELAY: u16 = 70;
pub const PART_UNI_NOTE_PRIORITY: u16 = 71;
pub const PART_MTUNE_TAB: u16 = 72;
pub const PART_MTUNE_KEY: u16 = 73;
pub const PART_PLAY_MODE: u16 = 75;

// Patch
pub const PATCH_STRUCTURE: u16 = 77;
pub const PATCH_HARD_SYNC: u16 = 78;
pub const CURRENT_WAVE: u16 = 79;
pub const PATCH_PITCH_BEND_RANGE: u16 = 85;
pub const PATCH_PITCH_RAMP_AMT: u16 = 86;
pub const PATCH_PITCH_RAMP_RATE: u16 = 87;
pub const PATCH_PITCH_VEL_AMT: u16 = 88;
pub const PITCH_SOURCE_1: u16 = 89;
pub const PITCH_SOURCE_1_AMOUNT: u16 = 90;
pub const PITCH_SOURCE_2: u16 = 91;
pub const PITCH_SOURCE_2_AMOUNT: u16 = 92;
pub const FILTER_MOD_CUTOFF: u16 = 93;
pub const FILTER_MOD_TRACKING: u16 = 94;
pub const FILTER_EXCITER_AMOUNT: u16 = 95;
pub const FILTER_MOD_SOURCE1: u16 = 96;
pub const FILTER_MOD_SOURCE1_AMT: u16 = 97;
pub const FILTER_MOD_SOURCE2: u16 = 98;
pub const FILTER_MOD_SOURCE2_AMT: u16 = 99;
pub const GP_ENV_LEVEL_0: u16 = 100;
pub const GP_ENV_LEVEL_1: u16 = 101;
pub const GP_ENV_LEVEL_2: u16 = 102;
pub const GP_ENV_LEVEL_3: u16 = 103;
pub const GP_ENV_LEVEL_4: u16 = 104;
pub const GP_ENV_RATE_1: u16 = 105;
pub const GP_ENV_RATE_2: u16 = 106;
pub const GP_ENV_RATE_3: u16 = 107;
pub const GP_ENV_RATE_4: u16 = 108;
pub const GP_VEL_ENV_AMT: u16 = 109;
pub const AMP_ENV_LEVEL_0: u16 = 110;
pub const AMP_ENV_LEVEL_1: u16 = 111;
pub const AMP_ENV_LEVEL_2: u16 = 112;
pub const AMP_ENV_LEVEL_3: u16 = 113;
pub const AMP_ENV_RATE_1: u16 = 114;
pub const AMP_ENV_RATE_2: u16 = 115;
pub const AMP_ENV_RATE_3: u16 = 116;
pub const AMP_ENV_RATE_4: u16 = 117;
pub const AMP_MOD_VEL_ENV_AMOUNT: u16 = 118;
pub const AMP_MOD_SOURCE_1: u16 = 119;
pub const AMP_MOD_SOURCE_1_AMOUNT: u16 = 120;
pub const AMP_MOD_SOURCE_2: u16 = 121;
pub const AMP_MOD_SOURCE_2_AMOUNT: u16 = 122;
pub const AMP_MOD_VEL_ATTACK_RATE: u16 = 123;
pub const AMP_MOD_KBD_DECAY_RATE: u16 = 124;
pub const LFO1_RATE: u16 = 125;
pub const LFO1_INITIAL_AMOUNT: u16 = 126;
pub const LFO1_SHAPE: u16 = 127;
pub const LFO1_SYNC: u16 = 128;
pub const LFO1_DELAY: u16 = 129;
pub const LFO1_FADE_IN: u16 = 130;
pub const LFO1_DEPTH_MOD_SOURCE: u16 = 131;
pub const LFO1_DEPTH_MOD_SRC_AMT: u16 = 132;
pub const LFO1_RATE_MOD_SOURCE: u16 = 133;
pub const LFO1_RATE_MOD_SRC_AMT: u16 = 134;
pub const LFO2_RATE: u16 = 135;
pub const LFO2_INITIAL_AMOUNT: u16 = 136;
pub const LFO2_SHAPE: u16 = 137;
pub const LFO2_SYNC: u16 = 138;
pub const LFO2_DELAY: u16 = 139;
pub const LFO2_FADE_IN: u16 = 140;
pub const LFO2_DEPTH_MOD_SOURCE: u16 = 141;
pub const LFO2_DEPTH_MOD_SRC_AMT: u16 = 142;
pub const LFO2_RATE_MOD_SOURCE: u16 = 143;
pub const LFO2_RATE_MOD_SRC_AMT: u16 = 144;
pub const PAN_VELOCITY_AMOUNT: u16 = 145;
pub const PAN_KEYBOARD_AMOUNT: u16 = 146;
pub const ENV1_MOD_VEL_RATE: u16 = 347;
pub const ENV1_MOD_KBD_RATE: u16 = 348;

// Oscillators; WAVEB, WAVEC and WAVED follow WAVEA at a stride of 7
pub const WAVEA_BANK: u16 = 147;
pub const WAVEA_NUM: u16 = 148;
pub const WAVEA_LEVEL: u16 = 150;
pub const WAVEA_TUNE_COARSE: u16 = 151;
pub const WAVEA_TUNE_FINE: u16 = 152;
pub const WAVEA_TUNE_SLOPE: u16 = 153;

// Bus routing; four buses per oscillator
pub const WAVEA_BUS_A: u16 = 362;

// Mix envelope
pub const MIX_ENV_POINT: u16 = 193;
pub const MIX_ENV_RATE: u16 = 194;
pub const MIX_ENV_X: u16 = 195;
pub const MIX_ENV_Y: u16 = 196;
pub const MIX_ENV_LOOP: u16 = 201;
pub const MIX_ENV_REPEATS: u16 = 202;
pub const MIX_MOD_X_SOURCE1: u16 = 203;
pub const MIX_MOD_X_SRC1_AMT: u16 = 204;
pub const MIX_MOD_X_SOURCE2: u16 = 205;
pub const MIX_MOD_X_SRC2_AMT: u16 = 206;
pub const MIX_MOD_Y_SOURCE1: u16 = 207;
pub const MIX_MOD_Y_SRC1_AMT: u16 = 208;
pub const MIX_MOD_Y_SOURCE2: u16 = 209;
pub const MIX_MOD_Y_SRC2_AMT: u16 = 210;

// Wave sequences
pub const WAVE_SEQ_NUM: u16 = 175;
pub const WAVE_SEQ_BANK: u16 = 176;
pub const WAVE_SEQ_STEP: u16 = 178;
pub const WAVE_SEQ_WAVE_BANK: u16 = 179;
pub const WAVE_SEQ_WAVE_NUM: u16 = 180;
pub const WAVE_SEQ_COARSE: u16 = 182;
pub const WAVE_SEQ_FINE: u16 = 183;
pub const WAVE_SEQ_LEVEL: u16 = 184;
pub const WAVE_SEQ_DURATION: u16 = 185;
pub const WAVE_SEQ_XFADE: u16 = 186;
pub const WAVE_SEQ_LOOP_START: u16 = 187;
pub const WAVE_SEQ_LOOP_END: u16 = 188;
pub const WAVE_SEQ_REPEATS: u16 = 189;
pub const WAVE_SEQ_START_STEP: u16 = 190;
pub const WAVE_SEQ_MOD_SRC: u16 = 191;
pub const WAVE_SEQ_MOD_AMT: u16 = 192;
pub const WAVE_SEQ_LOOP_DIR: u16 = 338;
pub const WAVE_BANK: u16 = 410;
pub const WAVE_NUM: u16 = 411;

// Effects
pub const FX_PLACEMENT: u16 = 257;
pub const FX1_PROG: u16 = 258;
pub const FX2_PROG: u16 = 259;
pub const FX_MIX_3: u16 = 260;
pub const FX_MIX_4: u16 = 261;
pub const FX_MOD_3: u16 = 262;
pub const FX_MOD_4: u16 = 263;
pub const FX_MOD_AMT_3: u16 = 264;
pub const FX_MOD_AMT_4: u16 = 265;
pub const CURRENT_FX: u16 = 266;

// Modes and commands
pub const WAVE_MUTE: u16 = 336;
pub const PERF_MIDI_MODE: u16 = 427;
pub const EXECUTE_INSERT_WS_STEP: u16 = 459;
pub const EXECUTE_DELETE_WS_STEP: u16 = 460;
pub const EXECUTE_WRITE: u16 = 466;
pub const EXECUTE_WAVESEQ_INIT: u16 = 475;

/// Distance between consecutive oscillators' parameter blocks
pub const WAVE_STRIDE: u16 = 7;
/// Distance between consecutive oscillators' bus parameters
pub const BUS_STRIDE: u16 = 4;
