//! Wavestation wave, wave sequence and modulation source names

use super::bank::{self, BANK_CARD};

/// Numbers below this select a wave sequence of the bank
pub const NUM_WAVE_SEQUENCES: i32 = 32;

/// ROM waves, numbered from [`NUM_WAVE_SEQUENCES`]
pub const WAVES: [&str; 486] = [
    "Soft EP", "Hard EP", "EP Tine", "EP Body1", "EP Body2", "EP Body3", "Digi EP", "E_PIAN03",
    "CLAV_DSM", "Organ 1", "Organ 2", "Organ 3", "PipeOrg1", "PipeOrg2", "Pluck 1", "Pluck 2",
    "Pluck 3", "A. Guitar", "E. Guitar", "Dist. Gtr", "EGuitChEme", "MuteGtr1", "MuteGtr2",
    "MuteGtr3", "Koto", "harmonic", "Stick", "E. Bass", "Synbass1", "Synbass2", "BassHarm",
    "Vibes", "Hi Bell", "Jar", "TinCup", "Agogo", "Gendar", "Tubular", "New Pole", "Soft Mrmba",
    "Thai Mrmba", "Glass Hit", "Crystal", "Flute", "FluteTrans", "Overblown", "Bottle",
    "BassnOboe", "Clarinet", "BariSax", "TenorSax", "AltoSax", "BrassEns", "TromTrp",
    "Tuba&Flu", "Bowing", "Synorch", "PWM String", "SynString", "Airvox", "Voices", "Choir",
    "Glass Vox", "\"OO\" Vox", "\"AH\" Vox", "MV Wave", "FV Wave", "DW Voice", "SynthPad",
    "Birdland", "ChromRes", "ProSync", "SuperSaw", "Ping Wave", "Digital1", "Digital2",
    "Digital3", "Bellwave", "PercWave", "ShellDrum", "BD head", "Tambourine", "Cabasa",
    "Woodblock", "HH Loop", "WhiteNoi", "Spectrm1", "Spectrm2", "Spectrm3", "Spectrm4", "Sonar",
    "Metal 1TR", "Metal 2TR", "KalimbaTR", "GamelanTR", "MarimbaTR", "Potnoise", "Ticker",
    "VibeHit", "Whack 1", "Whack 2", "HDulciTR", "HoseHit1", "HoseHit2", "SynbassTR",
    "A.BassTR", "\"ch\"", "\"hhh\"", "\"kkk\"", "\"puh\"", "\"sss\"", "\"tnn\"", "Inharm1",
    "Inharm2", "Inharm3", "Inharm4", "Inharm5", "Inharm6", "Inharm7", "Inharm8", "Inharm9",
    "Inharm10", "Formant1", "Formant2", "Formant3", "Formant4", "Formant5", "Formant6",
    "Formant7", "Sine", "Triangle", "VS 35", "VS 36", "VS 37", "VS 38", "VS 39", "VS 40",
    "VS 41", "VS 42", "VS 43", "VS 44", "VS 45", "VS 46", "VS 47", "VS 48", "VS 49", "VS 50",
    "VS 51", "VS 52", "VS 53", "VS 54", "VS 55", "VS 56", "VS 57", "VS 58", "VS 59", "VS 60",
    "VS 61", "VS 62", "VS 63", "VS 64", "VS 65", "VS 66", "VS 67", "VS 68", "VS 69", "VS 70",
    "VS 71", "VS 72", "VS 73", "VS 74", "VS 75", "VS 76", "VS 77", "VS 78", "VS 79", "VS 80",
    "VS 81", "VS 82", "VS 83", "VS 84", "VS 85", "VS 86", "VS 87", "VS 88", "VS 89", "VS 90",
    "VS 91", "VS 92", "VS 93", "VS 94", "VS 95", "VS 96", "VS 97", "VS 98", "VS 99", "VS 100",
    "VS 101", "VS 102", "VS 103", "VS 104", "VS 105", "VS 106", "VS 107", "VS 108", "VS 109",
    "VS 110", "VS 111", "VS 112", "VS 113", "VS 114", "VS 115", "VS 116", "VS 117", "VS 118",
    "VS 119", "VS 120", "VS 121", "VS 122", "VS 123", "VS 124", "VS 125", "saw", "OBPUL1",
    "OBPUL3", "OBPUL4", "OBPUL5", "OBPUL6", "OBPUL7", "OBRES1", "OBRES2", "OBRES3", "OBSAW3",
    "OBTRESB", "OBTRESD", "OBTRESF", "OBTRESH", "OBTRESJ", "DBTRESL", "OBTRESN", "PPUL2",
    "PPUL3", "PPUL4", "PPUL5", "PPUL6", "PSAW2", "13 - 01", "13 - 03", "13 - 05", "13 - 07",
    "13 - 09", "13 - 11", "13 - 13", "13 - 15", "13 - 17", "13 - 19", "13 - 21", "13 - 23",
    "13 - 25", "13 - 27", "13 - 29", "13 - 31", "13 - 33", "13 - 35", "13 - 37", "13 - 39",
    "13 - 41", "13 - 43", "13 - 45", "13 - 47", "13 - 49", "13 - 51", "13 - 53", "13 - 55",
    "13 - 57", "13 - 59", "13 - 61", "13 - 63", "resx001", "resx002", "resx003", "resx004",
    "resx005", "resx006", "resx007", "resx008", "resx009", "resx010", "resx011", "resx012",
    "resx013", "resx014", "resx015", "resx016", "resx017", "resx018", "resx019", "resx020",
    "resx021", "resx022", "resx023", "resx024", "resx025", "resx026", "resx027", "resx028",
    "resx029", "resx030", "resx031", "resx032", "Min1 - 01a", "Min1 - 02a", "Min1 - 04a",
    "Min1 - 05a", "Min1 - 06a", "Min1 - 07a", "Min1 - 08a", "Min1 - 09a", "Min1 - 12a",
    "Min1 - 13a", "Pres321", "Pres335", "Pres349", "Pres363", "Pres377", "Pres384", "Pres391",
    "Pres398", "Pres110", "Pres3112", "Pres3119", "Pres3126", "Sax .1sec", "Sax 1 sec",
    "Sax 1.3sec", "Sax 1.5sec", "Sax 1.7sec", "Sax 2 sec", "Sax 2.2sec", "Sax 2.4sec",
    "Sax 2.7sec", "Sax 2.9sec", "Sax 3 sec", "Sax 3.4sec", "Sax 3.6sec", "Sax 4.3sec",
    "Sax 4.7sec", "Sax 5 sec", "Square", "Pulse02", "Pulse04", "Pulse06", "Pulse08", "Pulse10",
    "Pulse12", "Pulse14", "Pulse16", "Pulse18", "Pulse20", "Pulse22", "Pulse24", "Pulse26",
    "Pulse28", "Pulse30", "Pulse31", "MagicOrgan", "Magic 1a", "Crickets", "Noise 2",
    "GrandPiano", "DigiPiano", "SynthPd2", "SynPad2a", "AirSynth", "VoiceSyn", "VoiSyn1a",
    "BellWind", "PWM", "AnaStrings", "Square Res", "Res Wave", "TrashWave", "TrshWv1a",
    "PsychoWave", "SynBass3", "SynBas3a", "DynoBass", "DynoBs1a", "DeepBass", "DeepBs1a",
    "MiniBass", "MiniBs1a", "Slap Bass", "Fretless", "Fretles1a", "Cello", "Cello 1a",
    "AltoSax2", "Horn Sectn", "FrenchHorn", "PanFlute", "PanFl 1a", "Hard Flute", "Wood Flute",
    "Harmonium", "Hrmnium1a", "Guitar 1", "Guitar 2", "Harp", "Harp 1a", "Shamisen", "Shamsn1a",
    "Marimba", "Marim 1a", "Marim Loop", "HrdKalimba", "SofKalimba", "SftKalim1a", "Vibes 2",
    "PercBell", "M.Heaven", "BrightBell", "BrBel 1a", "Drum Kit", "Kick", "AmbiKick",
    "Crack Snar", "Snare", "Sidestick", "Tom", "HiHat Clos", "HiHat Open", "Conga",
    "Conga Loop", "Claves", "Tenny Hit", "Thonk", "Tick Hit", "Pot Hit", "Hammer", "PianoHit",
    "NoiseVibe", "\"Tuunn\"", "\"Pehh\"", "\"Thuum\"", "\"Kaahh\"", "\"Tchh\"", "\"Pan\"",
    "\"Ti\"", "\"Cap\"", "\"Chhi\"", "\"Tinn\"", "\"Haaa\"", "Glottal", "VS 126", "VS 127",
    "VS 128", "VS 129", "VS 130", "VS 131", "VS 132", "VS 133", "VS 134", "VS 135", "VS 136",
    "VS 137", "VS 138", "VS 139", "VS 140", "VS 141", "VS 142", "VS 143", "VS 144", "VS 145",
    "VS 146", "VS 147", "VS 148", "VS 149", "VS 150", "VS 151", "VS 152", "VS 153", "VS 154",
    "VS 155", "Input1 [A/D]", "Input2 [A/D]",
];

/// Factory wave sequence names per logical bank
pub const WAVE_SEQUENCES: [[&str; 32]; bank::NUM_BANKS] = [
    [
        "Partial", "Invashn", "PulsMod", "OB Res1", "OB Res2", "Wave 13", "Sparks", "SonaNoi",
        "Whisper", "WhSweep", "WavTabl", "Chrome", "DreamSq", "BellSwp", "XWind 1", "TineVel",
        "Str Oct", "Breath", "OB Sax", "VelTran", "SynWav2", "PlukRez", "TineRez", "RezStep",
        "AtSweep", "Haitian", "Rez Seq", "3/4 Jam", "SpecJam", "RaspRap", "MIDISki", "MIDsong",
    ],
    [
        "", "", "", "", "", "", "", "", "", "", "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    [
        "String", "Wave01", "Wave02", "EnvSwee", "DigiPlk", "Vox Seq", "Wave 06", "Wave 07",
        "Wave 08", "StrgTrm", "SlowRes", "FastRes", "ResoSeq", "Breath", "Beat", "PulSeq",
        "ResoPd1", "OB-13", "ResoPd2", "Sonar", "VS Wave", "DigiPow", "Reswing", "SftRing",
        "FormaWv", "VoxWv", "Resbell", "Brswing", "Vswing1", "Vswing2", "SftRise", "RptRise",
    ],
    [
        "Snare 1", "16 Rthm", "Kick", "DSdrms", "Afrika", "DSbass", "Helicop", "BizyVox",
        "MagiWnd", "Gtr+Pno", "Orch WS", "NoizBug", "Rain D1", "RedRain", "W echoL", "Drum R",
        "Drum L", "W echoR", "Mr.Funk", "Kinko", "1/4 Kik", "HHts 1", "TikTok", "Snare 2",
        "Jungle1", "Crazy’X", "Kik+Snr", "JoVox", "LoopDrm", "FunW/16", "Indstrl", "Jungle2",
    ],
    [
        "Chug", "Chug5th", "Brite 1", "Harpsi1", "ZooLoo1", "PlukOB2", "Res&Pul", "AeroPad",
        "Bas&Pad", "VibrSaw", "WaterPh", "GlasLoo", "TubelGl", "TinAgo", "Bass 3", "ChifTyn",
        "HdChif1", "Mini 4", "Mini 2", "Mini 6", "BrasTrn", "WveStas", "E.Bass1", "Ch+Kkk",
        "PGDance", "AngelBl", "AnglBl2", "Mystery", "RezDown", "RezBass", "Pulses3", "Resomin",
    ],
    [
        "Life1", "Life 2", "StdyKik", "RunHats", "Heebie", "Jeebies", "Noizz1", "Trmnatr",
        "PanMal1", "PanMal2", "AvengrB", "Mr. 4/4", "IbidBox", "Iso Box", "Swirls", "TrasHyb",
        "HarpPad", "Cross B", "Groove1", "Bounce1", "BasiKik", "Hats 3", "Conga 1", "FunSnar",
        "Bounce2", "Hatties", "SynWav2", "KikPat1", "Kuntry1", "Kuntry2", "8_6/8KS", "Haties2",
    ],
    [
        "WS Harp", "WS Bell", "Inharmo", "HouseBs", "HipHop", "OB)PWM", "OB(PWM", "Owwaah!",
        "Inharmc", "Harpsi", "HarpGl", "Ping!", "BentMin", "SDB2", "String", "PWM", "Atmos",
        "Haunted", "Alien1", "Freddie", "AnglBl3", "Bell1", "Subtle", "Digits", "B-Stng",
        "Orient", "Tin Stg", "Swerl", "Evolver", "OB Wow", "Tribes", "Wildlie",
    ],
    [
        "Rap Hat", "RapFill", "Rap K&S", "RapVar2", "Rap Var", "EPnoPad", "VelEPno", "PanBell",
        "SaxBrss", "HrnyBrs", "RapKick", "ZapKick", "ZapSnar", "HarpRun", "SpdMtl", "TingStr",
        "BowdPad", "BowdStr", "BowdSyn", "BowCelo", "Nyloner", "AckGits", "SonrVox", "NylnFlt",
        "TickSyn", "AirPerc", "BrthPad", "THOKbas", "KUHLbas", "HarmBas", "KlikBas", "MidiEko",
    ],
    [
        "Unknown", "Strince", "Taurust", "Celsia2", "SlowRes", "Ariane", "HellBel", "Organic",
        "Quicky2", "Drums!", "Chromes", "Spectrm", "WSNois2", "Tubular", "BendUp", "Inharma",
        "WetDrem", "VSWave3", "BusyBas", "Heaven1", "Heaven2", "Waiting", "SlapSeq", "PolySeq",
        "HowHats", "HowKik+", "HowSnar", "HowDity", "KotoPad", "FeedBck", "DarkSid", "Tremol",
    ],
    [
        "WhlVox", "KikS", "Quar", "Stri", "Hats", "S. Pole", "Galaxis", "SpSail", "RappaWv",
        "SlowGls", "2->3 Pt", "Samba 1", "Samba 2", "Tambou", "Forest", "Caba", "Galax2",
        "Chime", "Agogo", "WoodBrc", "Tremolo", "PoppaBs", "Morgan", "Bassing", "Bassier",
        "Afro 1", "E.Bass", "Brass 1", "BassHar", "Orbits", "SloWav2", "TaDream",
    ],
    [
        "WSTouch", "DeepWav", "Quarks", "ResXwav", "Strings", "Unison", "WSMetal", "WS S&H",
        "WSTable", "WSVoice", "ResMove", "WSNoise", "LobWave", "FolowMe", "P5 Res", "Complex",
        "WS Fade", "VelHarm", "Mini", "SoftWav", "Spectra", "WSGrowl", "SynWav1", "EnSweep",
        "GateRez", "Marbles", "Ostinat", "Drops", "SloWave", "WavRytm", "Ski Jam", "WavSong",
    ],
    [
        "", "", "", "", "", "", "", "", "", "", "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
];

/// Modulation sources for patches
pub const SOURCES: [&str; 13] = [
    "Linear Keyboard", "Centered Keyboard", "Linear Velocity", "Exponential Velocity", "LFO1",
    "LFO2", "Envelope 1", "Aftertouch", "AT + Mod Wheel", "Mod Wheel", "MIDI 1", "MIDI 2",
    "MIDI Mod Pedal",
];

/// Modulation sources for the effects
pub const FX_SOURCES: [&str; 15] = [
    "None", "Mod Wheel", "Aftertouch", "Last Key Velocity", "High Key Velocity",
    "All Amp Envelopes", "Key Down Gate", "Effects Switch", "Effects Toggle", "MIDI Mod Pedal",
    "MIDI 1", "MIDI 2", "AT + Mod Wheel", "Joystick AC", "Joystick BD",
];

pub const KEYS: [&str; 12] = ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"];
/// Display name of wave `number` in logical `bank`. Numbers below 32 are the
/// bank's wave sequences; card waves have no fixed names.
pub fn wave_name(bank: i32, number: i32) -> String {
    if (0..NUM_WAVE_SEQUENCES).contains(&number) {
        let names = &WAVE_SEQUENCES[bank::index(bank)];
        return format!("WS{} {}", number, names[number as usize]);
    }
    if bank::index(bank) == BANK_CARD {
        return format!("Card Wave {}", number);
    }
    usize::try_from(number - NUM_WAVE_SEQUENCES)
        .ok()
        .and_then(|i| WAVES.get(i))
        .map(|name| name.to_string())
        .unwrap_or_else(|| format!("Wave {}", number))
}
