//! iNES container loader: strips the 16-byte header (and optional
//! 512-byte trainer) from a `.nes` image and exposes the PRG/CHR banks
//! the rest of the engine operates on. Out of scope for the core proper
//! (spec.md §1): this is the "Loader" external collaborator, with its
//! own error type rather than the core's `crate::error::Error`.

const HEADER_LEN: usize = 16;
const TRAINER_LEN: usize = 512;
const PRG_BANK_LEN: usize = 16 * 1024;
const CHR_BANK_LEN: usize = 8 * 1024;
const MAGIC: &[u8; 4] = b"NES\x1a";

/// Errors loading an iNES-container image. Distinct from
/// `crate::error::Error`: these are properties of the container format,
/// not of the program traced out of it.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("missing iNES magic number")]
    BadMagic,
    #[error("PRG size overflows the file")]
    PrgOverflow,
    #[error("CHR size overflows the file")]
    ChrOverflow,
    #[error("file is shorter than its declared PRG/CHR banks")]
    Truncated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mirroring {
    Horizontal,
    Vertical,
    FourScreen,
}

/// Flags 9 bit 0: the television system the image was authored for.
/// Carried through to the emitter as a header comment; it has no effect
/// on tracing or disassembly, which are television-system agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoFormat {
    Ntsc,
    Pal,
}

/// The header-derived facts spec.md §6 calls out as "forwarded to the
/// emitter unchanged": properties of the cartridge that the tracer never
/// consults but that a complete listing still records for the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RomMeta {
    pub mapper: u16,
    pub mirroring: Mirroring,
    pub battery_backed: bool,
    pub trainer_present: bool,
    pub prg_ram_present: bool,
    pub video_format: VideoFormat,
}

#[derive(Debug, Clone)]
pub struct RomImage {
    pub prg: Vec<u8>,
    pub chr: Vec<u8>,
    pub meta: RomMeta,
}

impl RomImage {
    /// The address a PRG offset of 0 is mapped to once loaded at the top
    /// of the CPU address space. Matches how a single, un-banked PRG
    /// region of an NROM-style image appears to the 6502: the last bank
    /// always ends at `$FFFF`.
    #[must_use]
    pub fn code_base(&self) -> u16 {
        0x10000_u32
            .saturating_sub(self.prg.len() as u32)
            .try_into()
            .unwrap_or(0)
    }

    /// Parses a raw `.nes` file. Fails if the magic number is wrong or
    /// the declared bank counts don't fit inside the file.
    pub fn parse(data: &[u8]) -> Result<Self, Error> {
        if data.len() < HEADER_LEN || &data[0..4] != MAGIC {
            return Err(Error::BadMagic);
        }
        let header = &data[0..HEADER_LEN];
        let prg_banks = header[4] as usize;
        let chr_banks = header[5] as usize;
        let flags6 = header[6];
        let flags7 = header[7];
        let flags9 = header[9];
        let flags10 = header[10];

        let has_trainer = flags6 & 0x04 != 0;
        let four_screen = flags6 & 0x08 != 0;
        let mirroring = if four_screen {
            Mirroring::FourScreen
        } else if flags6 & 0x01 != 0 {
            Mirroring::Vertical
        } else {
            Mirroring::Horizontal
        };
        let battery_backed = flags6 & 0x02 != 0;
        let mapper = u16::from((flags7 & 0xF0) | (flags6 >> 4));
        let video_format = if flags9 & 0x01 != 0 {
            VideoFormat::Pal
        } else {
            VideoFormat::Ntsc
        };
        let prg_ram_present = flags10 & 0x10 == 0;

        let mut offset = HEADER_LEN;
        if has_trainer {
            offset += TRAINER_LEN;
        }

        let prg_len = prg_banks * PRG_BANK_LEN;
        let chr_len = chr_banks * CHR_BANK_LEN;
        let prg_end = offset.checked_add(prg_len).ok_or(Error::PrgOverflow)?;
        let chr_end = prg_end.checked_add(chr_len).ok_or(Error::ChrOverflow)?;
        if data.len() < chr_end {
            return Err(Error::Truncated);
        }

        Ok(Self {
            prg: data[offset..prg_end].to_vec(),
            chr: data[prg_end..chr_end].to_vec(),
            meta: RomMeta {
                mapper,
                mirroring,
                battery_backed,
                trainer_present: has_trainer,
                prg_ram_present,
                video_format,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(prg_banks: u8, chr_banks: u8, flags6: u8) -> Vec<u8> {
        let mut data = vec![0u8; HEADER_LEN];
        data[0..4].copy_from_slice(MAGIC);
        data[4] = prg_banks;
        data[5] = chr_banks;
        data[6] = flags6;
        data.extend(vec![0u8; prg_banks as usize * PRG_BANK_LEN]);
        data.extend(vec![0u8; chr_banks as usize * CHR_BANK_LEN]);
        data
    }

    #[test]
    fn parses_nrom_image() {
        let data = sample(2, 1, 0);
        let rom = RomImage::parse(&data).unwrap();
        assert_eq!(rom.prg.len(), 2 * PRG_BANK_LEN);
        assert_eq!(rom.chr.len(), CHR_BANK_LEN);
        assert_eq!(rom.meta.mirroring, Mirroring::Horizontal);
        assert_eq!(rom.code_base(), 0x8000);
        assert!(!rom.meta.trainer_present);
        assert_eq!(rom.meta.video_format, VideoFormat::Ntsc);
    }

    #[test]
    fn rejects_missing_magic() {
        let mut data = sample(1, 1, 0);
        data[0] = b'X';
        assert!(RomImage::parse(&data).is_err());
    }

    #[test]
    fn rejects_truncated_file() {
        let mut data = sample(2, 1, 0);
        data.truncate(data.len() - 10);
        assert!(RomImage::parse(&data).is_err());
    }

    #[test]
    fn decodes_mapper_number_from_both_flag_bytes() {
        let mut data = sample(1, 1, 0x10); // mapper low nibble = 1
        data[7] = 0x20; // mapper high nibble = 2
        let rom = RomImage::parse(&data).unwrap();
        assert_eq!(rom.meta.mapper, 0x21);
    }

    #[test]
    fn decodes_trainer_video_format_and_prg_ram_flags() {
        let mut data = sample(1, 1, 0x04); // trainer present
        data[9] = 0x01; // PAL
        data[10] = 0x10; // no PRG RAM
        data.splice(HEADER_LEN..HEADER_LEN, vec![0u8; TRAINER_LEN]);
        let rom = RomImage::parse(&data).unwrap();
        assert!(rom.meta.trainer_present);
        assert_eq!(rom.meta.video_format, VideoFormat::Pal);
        assert!(!rom.meta.prg_ram_present);
    }
}
