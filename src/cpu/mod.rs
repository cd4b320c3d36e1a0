//! Instruction-set adapter (component A): given an opcode byte, exposes
//! mnemonic, addressing mode, instruction length and the semantic class
//! the tracer and jump-engine detector branch on. No dynamic dispatch —
//! a single precomputed table indexed by opcode byte, built once at
//! construction and validated for a handful of essential mnemonics.

mod table;

use crate::error::Error;
pub use table::OPCODES;

/// 6502 addressing modes. Operand length follows directly from the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Relative,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    IndirectX,
    IndirectY,
}

impl AddressingMode {
    #[must_use]
    pub fn operand_len(self) -> u8 {
        match self {
            Self::Implied | Self::Accumulator => 0,
            Self::Immediate
            | Self::ZeroPage
            | Self::ZeroPageX
            | Self::ZeroPageY
            | Self::Relative
            | Self::IndirectX
            | Self::IndirectY => 1,
            Self::Absolute | Self::AbsoluteX | Self::AbsoluteY | Self::Indirect => 2,
        }
    }

    /// Whether this mode's operand is itself a 16-bit absolute address
    /// that can carry a symbol (as opposed to zero-page, relative or an
    /// indirect-indexed mode whose base is the pointer, not the target).
    #[must_use]
    pub fn is_absolute(self) -> bool {
        matches!(self, Self::Absolute | Self::AbsoluteX | Self::AbsoluteY)
    }

    #[must_use]
    pub fn is_zero_page(self) -> bool {
        matches!(self, Self::ZeroPage | Self::ZeroPageX | Self::ZeroPageY)
    }
}

/// Semantic class of an opcode: what the worklist tracer must do to find
/// its successors and whether the jump-engine detector or data-reference
/// discovery should look at its operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticClass {
    Regular,
    MemoryRead,
    MemoryWrite,
    MemoryReadWrite,
    ConditionalBranch,
    UnconditionalJumpAbsolute,
    UnconditionalJumpIndirect,
    SubroutineCall,
    SubroutineReturn,
    InterruptReturn,
    Unofficial,
}

impl SemanticClass {
    /// Does this class read a memory operand (register-alias lookups use
    /// the read-name face, and absolute operands are data-reference
    /// candidates)?
    #[must_use]
    pub fn reads_memory(self) -> bool {
        matches!(self, Self::MemoryRead | Self::MemoryReadWrite)
    }

    /// Does this class write a memory operand (register-alias lookups
    /// use the write-name face)?
    #[must_use]
    pub fn writes_memory(self) -> bool {
        matches!(self, Self::MemoryWrite | Self::MemoryReadWrite)
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::SubroutineReturn | Self::InterruptReturn)
    }
}

/// One row of the opcode table: everything the tracer needs to decode and
/// classify a single instruction without executing it.
#[derive(Debug, Clone, Copy)]
pub struct OpcodeInfo {
    /// Empty for an opcode value that carries no defined mnemonic
    /// (including the NMOS jam/halt opcodes): the tracer treats these as
    /// data rather than code.
    pub mnemonic: &'static str,
    pub mode: AddressingMode,
    pub class: SemanticClass,
    pub unofficial: bool,
}

impl OpcodeInfo {
    #[must_use]
    pub fn is_assigned(&self) -> bool {
        !self.mnemonic.is_empty()
    }

    #[must_use]
    pub fn operand_len(&self) -> u8 {
        self.mode.operand_len()
    }

    /// Total instruction length in bytes (opcode + operand).
    #[must_use]
    pub fn len(&self) -> u8 {
        1 + self.operand_len()
    }
}

/// Read-only capability set over the opcode table. Cheap to construct;
/// holds no state beyond a reference to the static table.
#[derive(Debug, Clone, Copy)]
pub struct InstructionSet;

impl InstructionSet {
    /// Validates the static table's essential invariants. Fatal at
    /// startup if violated -- this would indicate a corrupted build of
    /// the table, not a property of any particular program image.
    pub fn new() -> Result<Self, Error> {
        let essential: &[(&str, SemanticClass)] = &[
            ("BRK", SemanticClass::Regular),
            ("JSR", SemanticClass::SubroutineCall),
            ("RTS", SemanticClass::SubroutineReturn),
            ("RTI", SemanticClass::InterruptReturn),
            ("JMP", SemanticClass::UnconditionalJumpAbsolute),
        ];
        for (mnemonic, class) in essential {
            let found = OPCODES
                .iter()
                .any(|info| info.mnemonic == *mnemonic && info.class == *class);
            if !found {
                return Err(Error::MalformedInstructionTable(mnemonic));
            }
        }
        if OPCODES.len() != 256 {
            return Err(Error::MalformedInstructionTable("table length is not 256"));
        }
        for info in &OPCODES {
            if info.is_assigned() && info.len() > 3 {
                return Err(Error::MalformedInstructionTable(
                    "instruction length exceeds 3 bytes",
                ));
            }
        }
        Ok(Self)
    }

    #[must_use]
    pub fn decode(self, opcode: u8) -> OpcodeInfo {
        OPCODES[opcode as usize]
    }

    /// One past the final address where instructions may legally appear;
    /// this is a property of the image, not the instruction set, so it's
    /// exposed through `crate::memory::MemoryView::last_code_address`
    /// instead. Kept here as a re-export point for callers that only
    /// hold an `InstructionSet`.
    #[must_use]
    pub fn vector_region_len() -> u16 {
        crate::memory::MemoryView::VECTOR_REGION_LEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_successfully() {
        InstructionSet::new().unwrap();
    }

    #[test]
    fn decodes_known_opcodes() {
        let set = InstructionSet::new().unwrap();
        let jmp = set.decode(0x4C);
        assert_eq!(jmp.mnemonic, "JMP");
        assert_eq!(jmp.mode, AddressingMode::Absolute);
        assert_eq!(jmp.class, SemanticClass::UnconditionalJumpAbsolute);
        assert_eq!(jmp.len(), 3);

        let rts = set.decode(0x60);
        assert_eq!(rts.mnemonic, "RTS");
        assert!(rts.class.is_terminal());
    }

    #[test]
    fn jam_opcodes_are_unassigned() {
        let set = InstructionSet::new().unwrap();
        assert!(!set.decode(0x02).is_assigned());
        assert!(!set.decode(0xF2).is_assigned());
    }

    #[test]
    fn unofficial_opcodes_are_flagged() {
        let set = InstructionSet::new().unwrap();
        let lax = set.decode(0xA7);
        assert_eq!(lax.mnemonic, "LAX");
        assert!(lax.unofficial);
        assert_eq!(lax.class, SemanticClass::Unofficial);
    }
}
