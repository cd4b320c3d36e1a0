//! Code/data log ingester (component H): an optional emulator-produced
//! hint file, one byte per PRG byte, recording which addresses were
//! observed executing versus being read/written as data during real
//! play. Used only to seed extra entry points tracing wouldn't otherwise
//! discover (e.g. code reached only through runtime bank switching this
//! engine doesn't model); never overrides what the tracer itself finds.

use crate::error::Error;

/// Bit layout per spec.md §4.H. Only these two bits carry meaning to the
/// core; any other bit an external tool sets (e.g. a real code/data
/// logger's PCM-read or PPU-access bits) is preserved in the raw byte
/// but otherwise ignored.
#[derive(Debug, Clone, Copy)]
pub struct CodeDataLogFlags;

impl CodeDataLogFlags {
    pub const CODE: u8 = 0x01;
    pub const SUB_ENTRY_POINT: u8 = 0x02;
}

#[derive(Debug, Clone)]
pub struct CodeDataLog {
    flags: Vec<u8>,
}

impl CodeDataLog {
    /// Builds a log from raw bytes. The log's shape must match the PRG
    /// it was recorded against exactly; a mismatch is recoverable, since
    /// the rest of tracing proceeds fine without hints.
    pub fn parse(raw: &[u8], prg_len: usize) -> Result<Self, Error> {
        if raw.len() != prg_len {
            return Err(Error::CodeDataLogShape(
                "code/data log length does not match the PRG image",
            ));
        }
        Ok(Self {
            flags: raw.to_vec(),
        })
    }

    /// Addresses whose Code bit is set: enqueued onto `parseQueue`
    /// alongside the interrupt vectors.
    pub fn executed_addresses(&self, code_base: u16) -> impl Iterator<Item = u16> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter(|(_, f)| **f & CodeDataLogFlags::CODE != 0)
            .map(move |(i, _)| code_base.wrapping_add(i as u16))
    }

    /// Addresses whose SubEntryPoint bit is set: pre-marked as
    /// `CallDestination` before tracing begins.
    pub fn sub_entry_points(&self, code_base: u16) -> impl Iterator<Item = u16> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter(|(_, f)| **f & CodeDataLogFlags::SUB_ENTRY_POINT != 0)
            .map(move |(i, _)| code_base.wrapping_add(i as u16))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_length() {
        assert!(CodeDataLog::parse(&[0u8; 3], 4).is_err());
    }

    #[test]
    fn reports_executed_addresses_and_sub_entry_points() {
        let raw = vec![
            CodeDataLogFlags::CODE,
            0,
            CodeDataLogFlags::CODE | CodeDataLogFlags::SUB_ENTRY_POINT,
        ];
        let log = CodeDataLog::parse(&raw, 3).unwrap();
        let executed: Vec<u16> = log.executed_addresses(0x8000).collect();
        assert_eq!(executed, vec![0x8000, 0x8002]);
        let subs: Vec<u16> = log.sub_entry_points(0x8000).collect();
        assert_eq!(subs, vec![0x8002]);
    }

    #[test]
    fn ignores_unknown_bits() {
        let raw = vec![0x80u8]; // only an unknown high bit set
        let log = CodeDataLog::parse(&raw, 1).unwrap();
        assert_eq!(log.executed_addresses(0x8000).count(), 0);
        assert_eq!(log.sub_entry_points(0x8000).count(), 0);
    }
}
