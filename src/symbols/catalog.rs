//! Static catalogues of NES memory-mapped register names, one table per
//! hardware subsystem. Addresses are the canonical (unmirrored) PPU/APU
//! register locations; mirroring beyond `$2007`/`$4017` is an emitter
//! concern, not the core's.

/// `(address, read_name, write_name)`. Either name may be absent when the
/// register is write-only or read-only.
pub type Entry = (u16, Option<&'static str>, Option<&'static str>);

pub static VIDEO: &[Entry] = &[
    (0x2000, None, Some("PPUCTRL")),
    (0x2001, None, Some("PPUMASK")),
    (0x2002, Some("PPUSTATUS"), None),
    (0x2003, None, Some("OAMADDR")),
    (0x2004, Some("OAMDATA"), Some("OAMDATA")),
    (0x2005, None, Some("PPUSCROLL")),
    (0x2006, None, Some("PPUADDR")),
    (0x2007, Some("PPUDATA"), Some("PPUDATA")),
    (0x4014, None, Some("OAMDMA")),
];

pub static AUDIO: &[Entry] = &[
    (0x4000, None, Some("SQ1_VOL")),
    (0x4001, None, Some("SQ1_SWEEP")),
    (0x4002, None, Some("SQ1_LO")),
    (0x4003, None, Some("SQ1_HI")),
    (0x4004, None, Some("SQ2_VOL")),
    (0x4005, None, Some("SQ2_SWEEP")),
    (0x4006, None, Some("SQ2_LO")),
    (0x4007, None, Some("SQ2_HI")),
    (0x4008, None, Some("TRI_LINEAR")),
    (0x400A, None, Some("TRI_LO")),
    (0x400B, None, Some("TRI_HI")),
    (0x400C, None, Some("NOISE_VOL")),
    (0x400E, None, Some("NOISE_LO")),
    (0x400F, None, Some("NOISE_HI")),
    (0x4010, None, Some("DMC_FREQ")),
    (0x4011, None, Some("DMC_RAW")),
    (0x4012, None, Some("DMC_START")),
    (0x4013, None, Some("DMC_LEN")),
    (0x4015, Some("SND_CHN"), Some("SND_CHN")),
    // $4017's write face belongs here (APU frame counter); its read
    // face belongs to the controller catalogue below -- no collision,
    // since a duplicate-symbol conflict is only raised per read/write
    // face, not per address.
    (0x4017, None, Some("FRAME_COUNTER")),
];

pub static CONTROLLER: &[Entry] = &[
    (0x4016, Some("JOY1"), Some("JOY1")),
    (0x4017, Some("JOY2"), None),
];
