//! Classification store (component D): a random-access array of one
//! record per PRG byte, created empty and mutated in place by the
//! tracer, jump-engine detector and finaliser in turn. No pointer graph
//! -- `inbound_branches` stores addresses, not references, and the
//! store itself is a single contiguous `Vec<Offset>` indexed by PRG
//! offset.

use bitflags::bitflags;

use crate::cpu::AddressingMode;
use crate::memory::MemoryView;

bitflags! {
    /// A bitset, not a sum type: some combinations are legitimate
    /// (`CODE | CALL_DESTINATION`; `DATA_OFFSET | CODE_AS_DATA`). A
    /// tagged enum would force the demotion path (see `crate::tracer`)
    /// to copy a record rather than clear one bit.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct OffsetFlags: u16 {
        const CODE                = 1 << 0;
        const CODE_AS_DATA        = 1 << 1;
        const DATA_OFFSET         = 1 << 2;
        const CALL_DESTINATION    = 1 << 3;
        const JUMP_TABLE          = 1 << 4;
        const JUMP_ENGINE         = 1 << 5;
        const FUNCTION_REFERENCE  = 1 << 6;
    }
}

/// What kind of reference a branch/call/jump-table site made to a given
/// address. Recorded so that `inbound_branches` can be displayed and so
/// invariants about successors can be checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Branch,
    Call,
    Jump,
    JumpTableEntry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InboundBranch {
    pub from: u16,
    pub kind: ReferenceKind,
}

/// One record per PRG byte. Multi-byte instructions/data only populate
/// `bytes` on the first (primary) offset; continuation offsets carry an
/// empty `bytes` slice and no type of their own.
#[derive(Debug, Clone, Default)]
pub struct Offset {
    pub address: u16,
    pub flags: OffsetFlags,
    pub bytes: Vec<u8>,
    /// Bare mnemonic for a `Code` offset (e.g. `"LDA"`); empty for data.
    /// Operand syntax is a dialect concern, built from `mode` and
    /// `operand_address` at emission time, not stored as text here.
    pub code: String,
    pub mode: Option<AddressingMode>,
    /// The absolute address an instruction's operand refers to, when its
    /// addressing mode carries one (zero-page, absolute, indirect). A
    /// dialect emitter resolves this through the finalised label/symbol
    /// map rather than printing the raw hex itself.
    pub operand_address: Option<u16>,
    pub label: String,
    pub label_comment: String,
    pub comment: String,
    pub inbound_branches: Vec<InboundBranch>,
    /// Address of the enclosing function (call destination); 0 if none.
    pub context: u16,
}

impl Offset {
    fn new(address: u16) -> Self {
        Self {
            address,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn is_type(&self, flags: OffsetFlags) -> bool {
        self.flags.contains(flags)
    }

    #[must_use]
    pub fn intersects_type(&self, flags: OffsetFlags) -> bool {
        self.flags.intersects(flags)
    }

    #[must_use]
    pub fn is_primary(&self) -> bool {
        !self.bytes.is_empty()
    }

    #[must_use]
    pub fn has_label(&self) -> bool {
        !self.label.is_empty()
    }
}

/// Single-owner store over every PRG byte, indexed by offset from
/// `code_base`. Exposes in-place mutation only; callers never see a
/// pointer graph, only addresses.
#[derive(Debug, Clone)]
pub struct Store {
    code_base: u16,
    offsets: Vec<Offset>,
}

impl Store {
    #[must_use]
    pub fn new(code_base: u16, len: usize) -> Self {
        let offsets = (0..len)
            .map(|i| Offset::new(code_base.wrapping_add(i as u16)))
            .collect();
        Self { code_base, offsets }
    }

    #[must_use]
    pub fn code_base(&self) -> u16 {
        self.code_base
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    #[must_use]
    pub fn index_of(&self, addr: u16) -> Option<usize> {
        let i = addr.checked_sub(self.code_base)? as usize;
        (i < self.offsets.len()).then_some(i)
    }

    #[must_use]
    pub fn get(&self, addr: u16) -> Option<&Offset> {
        self.index_of(addr).map(|i| &self.offsets[i])
    }

    pub fn get_mut(&mut self, addr: u16) -> Option<&mut Offset> {
        self.index_of(addr).map(move |i| &mut self.offsets[i])
    }

    #[must_use]
    pub fn get_by_index(&self, index: usize) -> &Offset {
        &self.offsets[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Offset> {
        self.offsets.iter()
    }

    #[must_use]
    pub fn is_type(&self, addr: u16, flags: OffsetFlags) -> bool {
        self.get(addr).is_some_and(|o| o.is_type(flags))
    }

    pub fn set_type(&mut self, addr: u16, flags: OffsetFlags) {
        if let Some(o) = self.get_mut(addr) {
            o.flags.insert(flags);
        }
    }

    pub fn clear_type(&mut self, addr: u16, flags: OffsetFlags) {
        if let Some(o) = self.get_mut(addr) {
            o.flags.remove(flags);
        }
    }

    pub fn attach_label(&mut self, addr: u16, name: impl Into<String>) {
        if let Some(o) = self.get_mut(addr) {
            if !o.has_label() {
                o.label = name.into();
            }
        }
    }

    pub fn add_inbound_branch(&mut self, addr: u16, from: u16, kind: ReferenceKind) {
        if let Some(o) = self.get_mut(addr) {
            if !o
                .inbound_branches
                .iter()
                .any(|b| b.from == from && b.kind == kind)
            {
                o.inbound_branches.push(InboundBranch { from, kind });
            }
        }
    }

    pub fn set_bytes_and_code(&mut self, addr: u16, bytes: Vec<u8>, code: impl Into<String>) {
        if let Some(o) = self.get_mut(addr) {
            o.bytes = bytes;
            o.code = code.into();
        }
    }

    /// Populates a decoded instruction's primary offset: raw bytes,
    /// mnemonic, addressing mode and (if the mode carries one) the
    /// resolved absolute operand address.
    pub fn set_instruction(
        &mut self,
        addr: u16,
        bytes: Vec<u8>,
        mnemonic: &'static str,
        mode: AddressingMode,
        operand_address: Option<u16>,
    ) {
        if let Some(o) = self.get_mut(addr) {
            o.bytes = bytes;
            o.code = mnemonic.to_string();
            o.mode = Some(mode);
            o.operand_address = operand_address;
        }
    }

    pub fn set_context(&mut self, addr: u16, context: u16) {
        if let Some(o) = self.get_mut(addr) {
            if o.context == 0 {
                o.context = context;
            }
        }
    }

    /// Walk back from `addr` to find the primary offset (non-empty
    /// `bytes`) owning the instruction that `addr` falls inside. Bounded
    /// to 3 bytes back since no 6502 instruction is longer than that.
    #[must_use]
    pub fn owning_instruction(&self, addr: u16) -> Option<u16> {
        for back in 0..3u16 {
            let candidate = addr.wrapping_sub(back);
            let offset = self.get(candidate)?;
            if offset.is_primary() {
                // A primary found further back than its own length
                // doesn't actually span `addr`: `addr` belongs to nobody.
                return (usize::from(back) < offset.bytes.len()).then_some(candidate);
            }
            if back > 0 && offset.flags.is_empty() {
                // Ran into an offset with no type at all before finding
                // a primary one: `addr` wasn't inside a decoded instruction.
                return None;
            }
        }
        None
    }

    /// Every byte as a `(Code, bytes[0])` pair, for the
    /// "every Code-classified byte decodes to a valid opcode" property.
    pub fn code_opcodes(&self) -> impl Iterator<Item = (u16, u8)> + '_ {
        self.offsets
            .iter()
            .filter(|o| o.is_type(OffsetFlags::CODE) && !o.bytes.is_empty())
            .map(|o| (o.address, o.bytes[0]))
    }

    #[must_use]
    pub fn memory_view<'a>(&self, prg: &'a [u8]) -> MemoryView<'a> {
        MemoryView::new(prg, self.code_base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owning_instruction_finds_primary_offset() {
        let mut store = Store::new(0x8000, 4);
        store.set_bytes_and_code(0x8000, vec![0xAD, 0x00, 0x20], "LDA $2000");
        store.set_type(0x8000, OffsetFlags::CODE);
        store.set_type(0x8001, OffsetFlags::CODE);
        store.set_type(0x8002, OffsetFlags::CODE);
        assert_eq!(store.owning_instruction(0x8002), Some(0x8000));
        assert_eq!(store.owning_instruction(0x8001), Some(0x8000));
        assert_eq!(store.owning_instruction(0x8000), Some(0x8000));
    }

    #[test]
    fn flags_accumulate() {
        let mut store = Store::new(0x8000, 1);
        store.set_type(0x8000, OffsetFlags::CODE);
        store.set_type(0x8000, OffsetFlags::CALL_DESTINATION);
        assert!(store.is_type(0x8000, OffsetFlags::CODE | OffsetFlags::CALL_DESTINATION));
    }

    #[test]
    fn label_is_sticky() {
        let mut store = Store::new(0x8000, 1);
        store.attach_label(0x8000, "Reset");
        store.attach_label(0x8000, "_label_8000");
        assert_eq!(store.get(0x8000).unwrap().label, "Reset");
    }
}
