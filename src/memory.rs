//! A pure, read-only view over a PRG image mapped into the 16-bit address
//! space starting at a configured code-base address. Never mutates.

use crate::error::Error;

/// Address-space window over an immutable PRG byte array.
#[derive(Debug, Clone, Copy)]
pub struct MemoryView<'prg> {
    prg: &'prg [u8],
    code_base: u16,
}

impl<'prg> MemoryView<'prg> {
    /// The interrupt vector region occupies the final 6 bytes of the image:
    /// NMI, RESET, IRQ/BRK, two bytes each, in that order.
    pub const VECTOR_REGION_LEN: u16 = 6;

    #[must_use]
    pub fn new(prg: &'prg [u8], code_base: u16) -> Self {
        Self { prg, code_base }
    }

    #[must_use]
    pub fn code_base(&self) -> u16 {
        self.code_base
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.prg.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prg.is_empty()
    }

    #[must_use]
    pub fn contains(&self, addr: u16) -> bool {
        self.offset_of(addr).is_some()
    }

    /// One past the final address where instructions may legally appear;
    /// excludes the fixed vector region at the image's tail.
    #[must_use]
    pub fn last_code_address(&self) -> u16 {
        self.end_address().saturating_sub(Self::VECTOR_REGION_LEN)
    }

    #[must_use]
    pub fn end_address(&self) -> u16 {
        self.code_base
            .saturating_add(u16::try_from(self.prg.len()).unwrap_or(u16::MAX))
    }

    #[must_use]
    pub fn offset_of(&self, addr: u16) -> Option<usize> {
        let offset = addr.checked_sub(self.code_base)? as usize;
        (offset < self.prg.len()).then_some(offset)
    }

    pub fn read(&self, addr: u16) -> Result<u8, Error> {
        self.offset_of(addr)
            .map(|o| self.prg[o])
            .ok_or(Error::OutOfRangeAddress(u32::from(addr)))
    }

    /// Little-endian 16-bit word spanning `addr` and `addr+1`.
    pub fn read_word(&self, addr: u16) -> Result<u16, Error> {
        let lo = self.read(addr)?;
        let hi = self.read(addr.wrapping_add(1))?;
        Ok(u16::from_le_bytes([lo, hi]))
    }

    /// Reads the fixed vector word at `end_address() - offset_from_end`.
    /// `offset_from_end` must be 2, 4 or 6 (IRQ, RESET, NMI respectively).
    pub fn read_tail_word(&self, offset_from_end: u16) -> Result<u16, Error> {
        self.read_word(self.end_address().wrapping_sub(offset_from_end))
    }

    #[must_use]
    pub fn as_slice(&self) -> &'prg [u8] {
        self.prg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_offsets_to_addresses() {
        let prg = [0xAAu8; 4];
        let view = MemoryView::new(&prg, 0x8000);
        assert_eq!(view.read(0x8000).unwrap(), 0xAA);
        assert!(view.read(0x7FFF).is_err());
        assert!(view.read(0x8004).is_err());
        assert_eq!(view.end_address(), 0x8004);
    }

    #[test]
    fn reads_little_endian_words() {
        let prg = [0x34, 0x12];
        let view = MemoryView::new(&prg, 0x8000);
        assert_eq!(view.read_word(0x8000).unwrap(), 0x1234);
    }

    #[test]
    fn last_code_address_excludes_vectors() {
        let prg = [0u8; 16];
        let view = MemoryView::new(&prg, 0x8000);
        assert_eq!(view.last_code_address(), 0x800A);
    }

    #[test]
    fn reads_tail_vectors() {
        let mut prg = [0u8; 16];
        prg[10] = 0x00;
        prg[11] = 0x80; // reset vector = 0x8000
        let view = MemoryView::new(&prg, 0x8000);
        assert_eq!(view.read_tail_word(4).unwrap(), 0x8000);
    }
}
