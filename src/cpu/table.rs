//! The static 6502 opcode table: mnemonic, addressing mode and semantic
//! class for every byte value 0x00..=0xFF, including the well-known NMOS
//! unofficial opcodes and the handful of jam/halt opcodes (left
//! unassigned since execution never meaningfully continues past them).
//!
//! Definitions from the usual 6502 references (e.g. the 6502.org and
//! "NMOS 6510 unintended opcodes" tables); unofficial mnemonics follow
//! the naming most emulators use (`LAX`, `SAX`, `DCP`, `ISC`, `SLO`,
//! `RLA`, `SRE`, `RRA`, `ANC`, `ALR`, `ARR`, `SBX`, `SHA`/`SHX`/`SHY`,
//! `TAS`, `LAS`, `XAA`).

use super::{AddressingMode, OpcodeInfo, SemanticClass};

const fn op(
    _opcode: u8,
    mnemonic: &'static str,
    mode: AddressingMode,
    class: SemanticClass,
    unofficial: bool,
) -> OpcodeInfo {
    OpcodeInfo {
        mnemonic,
        mode,
        class,
        unofficial,
    }
}

pub static OPCODES: [OpcodeInfo; 256] = [
    op(0x00, "BRK", AddressingMode::Immediate, SemanticClass::Regular, false),
    op(0x01, "ORA", AddressingMode::IndirectX, SemanticClass::MemoryRead, false),
    op(0x02, "", AddressingMode::Implied, SemanticClass::Regular, false),
    op(0x03, "SLO", AddressingMode::IndirectX, SemanticClass::Unofficial, true),
    op(0x04, "NOP", AddressingMode::ZeroPage, SemanticClass::Unofficial, true),
    op(0x05, "ORA", AddressingMode::ZeroPage, SemanticClass::MemoryRead, false),
    op(0x06, "ASL", AddressingMode::ZeroPage, SemanticClass::MemoryReadWrite, false),
    op(0x07, "SLO", AddressingMode::ZeroPage, SemanticClass::Unofficial, true),
    op(0x08, "PHP", AddressingMode::Implied, SemanticClass::Regular, false),
    op(0x09, "ORA", AddressingMode::Immediate, SemanticClass::MemoryRead, false),
    op(0x0A, "ASL", AddressingMode::Accumulator, SemanticClass::MemoryReadWrite, false),
    op(0x0B, "ANC", AddressingMode::Immediate, SemanticClass::Unofficial, true),
    op(0x0C, "NOP", AddressingMode::Absolute, SemanticClass::Unofficial, true),
    op(0x0D, "ORA", AddressingMode::Absolute, SemanticClass::MemoryRead, false),
    op(0x0E, "ASL", AddressingMode::Absolute, SemanticClass::MemoryReadWrite, false),
    op(0x0F, "SLO", AddressingMode::Absolute, SemanticClass::Unofficial, true),
    op(0x10, "BPL", AddressingMode::Relative, SemanticClass::ConditionalBranch, false),
    op(0x11, "ORA", AddressingMode::IndirectY, SemanticClass::MemoryRead, false),
    op(0x12, "", AddressingMode::Implied, SemanticClass::Regular, false),
    op(0x13, "SLO", AddressingMode::IndirectY, SemanticClass::Unofficial, true),
    op(0x14, "NOP", AddressingMode::ZeroPageX, SemanticClass::Unofficial, true),
    op(0x15, "ORA", AddressingMode::ZeroPageX, SemanticClass::MemoryRead, false),
    op(0x16, "ASL", AddressingMode::ZeroPageX, SemanticClass::MemoryReadWrite, false),
    op(0x17, "SLO", AddressingMode::ZeroPageX, SemanticClass::Unofficial, true),
    op(0x18, "CLC", AddressingMode::Implied, SemanticClass::Regular, false),
    op(0x19, "ORA", AddressingMode::AbsoluteY, SemanticClass::MemoryRead, false),
    op(0x1A, "NOP", AddressingMode::Implied, SemanticClass::Unofficial, true),
    op(0x1B, "SLO", AddressingMode::AbsoluteY, SemanticClass::Unofficial, true),
    op(0x1C, "NOP", AddressingMode::AbsoluteX, SemanticClass::Unofficial, true),
    op(0x1D, "ORA", AddressingMode::AbsoluteX, SemanticClass::MemoryRead, false),
    op(0x1E, "ASL", AddressingMode::AbsoluteX, SemanticClass::MemoryReadWrite, false),
    op(0x1F, "SLO", AddressingMode::AbsoluteX, SemanticClass::Unofficial, true),
    op(0x20, "JSR", AddressingMode::Absolute, SemanticClass::SubroutineCall, false),
    op(0x21, "AND", AddressingMode::IndirectX, SemanticClass::MemoryRead, false),
    op(0x22, "", AddressingMode::Implied, SemanticClass::Regular, false),
    op(0x23, "RLA", AddressingMode::IndirectX, SemanticClass::Unofficial, true),
    op(0x24, "BIT", AddressingMode::ZeroPage, SemanticClass::MemoryRead, false),
    op(0x25, "AND", AddressingMode::ZeroPage, SemanticClass::MemoryRead, false),
    op(0x26, "ROL", AddressingMode::ZeroPage, SemanticClass::MemoryReadWrite, false),
    op(0x27, "RLA", AddressingMode::ZeroPage, SemanticClass::Unofficial, true),
    op(0x28, "PLP", AddressingMode::Implied, SemanticClass::Regular, false),
    op(0x29, "AND", AddressingMode::Immediate, SemanticClass::MemoryRead, false),
    op(0x2A, "ROL", AddressingMode::Accumulator, SemanticClass::MemoryReadWrite, false),
    op(0x2B, "ANC", AddressingMode::Immediate, SemanticClass::Unofficial, true),
    op(0x2C, "BIT", AddressingMode::Absolute, SemanticClass::MemoryRead, false),
    op(0x2D, "AND", AddressingMode::Absolute, SemanticClass::MemoryRead, false),
    op(0x2E, "ROL", AddressingMode::Absolute, SemanticClass::MemoryReadWrite, false),
    op(0x2F, "RLA", AddressingMode::Absolute, SemanticClass::Unofficial, true),
    op(0x30, "BMI", AddressingMode::Relative, SemanticClass::ConditionalBranch, false),
    op(0x31, "AND", AddressingMode::IndirectY, SemanticClass::MemoryRead, false),
    op(0x32, "", AddressingMode::Implied, SemanticClass::Regular, false),
    op(0x33, "RLA", AddressingMode::IndirectY, SemanticClass::Unofficial, true),
    op(0x34, "NOP", AddressingMode::ZeroPageX, SemanticClass::Unofficial, true),
    op(0x35, "AND", AddressingMode::ZeroPageX, SemanticClass::MemoryRead, false),
    op(0x36, "ROL", AddressingMode::ZeroPageX, SemanticClass::MemoryReadWrite, false),
    op(0x37, "RLA", AddressingMode::ZeroPageX, SemanticClass::Unofficial, true),
    op(0x38, "SEC", AddressingMode::Implied, SemanticClass::Regular, false),
    op(0x39, "AND", AddressingMode::AbsoluteY, SemanticClass::MemoryRead, false),
    op(0x3A, "NOP", AddressingMode::Implied, SemanticClass::Unofficial, true),
    op(0x3B, "RLA", AddressingMode::AbsoluteY, SemanticClass::Unofficial, true),
    op(0x3C, "NOP", AddressingMode::AbsoluteX, SemanticClass::Unofficial, true),
    op(0x3D, "AND", AddressingMode::AbsoluteX, SemanticClass::MemoryRead, false),
    op(0x3E, "ROL", AddressingMode::AbsoluteX, SemanticClass::MemoryReadWrite, false),
    op(0x3F, "RLA", AddressingMode::AbsoluteX, SemanticClass::Unofficial, true),
    op(0x40, "RTI", AddressingMode::Implied, SemanticClass::InterruptReturn, false),
    op(0x41, "EOR", AddressingMode::IndirectX, SemanticClass::MemoryRead, false),
    op(0x42, "", AddressingMode::Implied, SemanticClass::Regular, false),
    op(0x43, "SRE", AddressingMode::IndirectX, SemanticClass::Unofficial, true),
    op(0x44, "NOP", AddressingMode::ZeroPage, SemanticClass::Unofficial, true),
    op(0x45, "EOR", AddressingMode::ZeroPage, SemanticClass::MemoryRead, false),
    op(0x46, "LSR", AddressingMode::ZeroPage, SemanticClass::MemoryReadWrite, false),
    op(0x47, "SRE", AddressingMode::ZeroPage, SemanticClass::Unofficial, true),
    op(0x48, "PHA", AddressingMode::Implied, SemanticClass::Regular, false),
    op(0x49, "EOR", AddressingMode::Immediate, SemanticClass::MemoryRead, false),
    op(0x4A, "LSR", AddressingMode::Accumulator, SemanticClass::MemoryReadWrite, false),
    op(0x4B, "ALR", AddressingMode::Immediate, SemanticClass::Unofficial, true),
    op(0x4C, "JMP", AddressingMode::Absolute, SemanticClass::UnconditionalJumpAbsolute, false),
    op(0x4D, "EOR", AddressingMode::Absolute, SemanticClass::MemoryRead, false),
    op(0x4E, "LSR", AddressingMode::Absolute, SemanticClass::MemoryReadWrite, false),
    op(0x4F, "SRE", AddressingMode::Absolute, SemanticClass::Unofficial, true),
    op(0x50, "BVC", AddressingMode::Relative, SemanticClass::ConditionalBranch, false),
    op(0x51, "EOR", AddressingMode::IndirectY, SemanticClass::MemoryRead, false),
    op(0x52, "", AddressingMode::Implied, SemanticClass::Regular, false),
    op(0x53, "SRE", AddressingMode::IndirectY, SemanticClass::Unofficial, true),
    op(0x54, "NOP", AddressingMode::ZeroPageX, SemanticClass::Unofficial, true),
    op(0x55, "EOR", AddressingMode::ZeroPageX, SemanticClass::MemoryRead, false),
    op(0x56, "LSR", AddressingMode::ZeroPageX, SemanticClass::MemoryReadWrite, false),
    op(0x57, "SRE", AddressingMode::ZeroPageX, SemanticClass::Unofficial, true),
    op(0x58, "CLI", AddressingMode::Implied, SemanticClass::Regular, false),
    op(0x59, "EOR", AddressingMode::AbsoluteY, SemanticClass::MemoryRead, false),
    op(0x5A, "NOP", AddressingMode::Implied, SemanticClass::Unofficial, true),
    op(0x5B, "SRE", AddressingMode::AbsoluteY, SemanticClass::Unofficial, true),
    op(0x5C, "NOP", AddressingMode::AbsoluteX, SemanticClass::Unofficial, true),
    op(0x5D, "EOR", AddressingMode::AbsoluteX, SemanticClass::MemoryRead, false),
    op(0x5E, "LSR", AddressingMode::AbsoluteX, SemanticClass::MemoryReadWrite, false),
    op(0x5F, "SRE", AddressingMode::AbsoluteX, SemanticClass::Unofficial, true),
    op(0x60, "RTS", AddressingMode::Implied, SemanticClass::SubroutineReturn, false),
    op(0x61, "ADC", AddressingMode::IndirectX, SemanticClass::MemoryRead, false),
    op(0x62, "", AddressingMode::Implied, SemanticClass::Regular, false),
    op(0x63, "RRA", AddressingMode::IndirectX, SemanticClass::Unofficial, true),
    op(0x64, "NOP", AddressingMode::ZeroPage, SemanticClass::Unofficial, true),
    op(0x65, "ADC", AddressingMode::ZeroPage, SemanticClass::MemoryRead, false),
    op(0x66, "ROR", AddressingMode::ZeroPage, SemanticClass::MemoryReadWrite, false),
    op(0x67, "RRA", AddressingMode::ZeroPage, SemanticClass::Unofficial, true),
    op(0x68, "PLA", AddressingMode::Implied, SemanticClass::Regular, false),
    op(0x69, "ADC", AddressingMode::Immediate, SemanticClass::MemoryRead, false),
    op(0x6A, "ROR", AddressingMode::Accumulator, SemanticClass::MemoryReadWrite, false),
    op(0x6B, "ARR", AddressingMode::Immediate, SemanticClass::Unofficial, true),
    op(0x6C, "JMP", AddressingMode::Indirect, SemanticClass::UnconditionalJumpIndirect, false),
    op(0x6D, "ADC", AddressingMode::Absolute, SemanticClass::MemoryRead, false),
    op(0x6E, "ROR", AddressingMode::Absolute, SemanticClass::MemoryReadWrite, false),
    op(0x6F, "RRA", AddressingMode::Absolute, SemanticClass::Unofficial, true),
    op(0x70, "BVS", AddressingMode::Relative, SemanticClass::ConditionalBranch, false),
    op(0x71, "ADC", AddressingMode::IndirectY, SemanticClass::MemoryRead, false),
    op(0x72, "", AddressingMode::Implied, SemanticClass::Regular, false),
    op(0x73, "RRA", AddressingMode::IndirectY, SemanticClass::Unofficial, true),
    op(0x74, "NOP", AddressingMode::ZeroPageX, SemanticClass::Unofficial, true),
    op(0x75, "ADC", AddressingMode::ZeroPageX, SemanticClass::MemoryRead, false),
    op(0x76, "ROR", AddressingMode::ZeroPageX, SemanticClass::MemoryReadWrite, false),
    op(0x77, "RRA", AddressingMode::ZeroPageX, SemanticClass::Unofficial, true),
    op(0x78, "SEI", AddressingMode::Implied, SemanticClass::Regular, false),
    op(0x79, "ADC", AddressingMode::AbsoluteY, SemanticClass::MemoryRead, false),
    op(0x7A, "NOP", AddressingMode::Implied, SemanticClass::Unofficial, true),
    op(0x7B, "RRA", AddressingMode::AbsoluteY, SemanticClass::Unofficial, true),
    op(0x7C, "NOP", AddressingMode::AbsoluteX, SemanticClass::Unofficial, true),
    op(0x7D, "ADC", AddressingMode::AbsoluteX, SemanticClass::MemoryRead, false),
    op(0x7E, "ROR", AddressingMode::AbsoluteX, SemanticClass::MemoryReadWrite, false),
    op(0x7F, "RRA", AddressingMode::AbsoluteX, SemanticClass::Unofficial, true),
    op(0x80, "NOP", AddressingMode::Immediate, SemanticClass::Unofficial, true),
    op(0x81, "STA", AddressingMode::IndirectX, SemanticClass::MemoryWrite, false),
    op(0x82, "NOP", AddressingMode::Immediate, SemanticClass::Unofficial, true),
    op(0x83, "SAX", AddressingMode::IndirectX, SemanticClass::Unofficial, true),
    op(0x84, "STY", AddressingMode::ZeroPage, SemanticClass::MemoryWrite, false),
    op(0x85, "STA", AddressingMode::ZeroPage, SemanticClass::MemoryWrite, false),
    op(0x86, "STX", AddressingMode::ZeroPage, SemanticClass::MemoryWrite, false),
    op(0x87, "SAX", AddressingMode::ZeroPage, SemanticClass::Unofficial, true),
    op(0x88, "DEY", AddressingMode::Implied, SemanticClass::Regular, false),
    op(0x89, "NOP", AddressingMode::Immediate, SemanticClass::Unofficial, true),
    op(0x8A, "TXA", AddressingMode::Implied, SemanticClass::Regular, false),
    op(0x8B, "XAA", AddressingMode::Immediate, SemanticClass::Unofficial, true),
    op(0x8C, "STY", AddressingMode::Absolute, SemanticClass::MemoryWrite, false),
    op(0x8D, "STA", AddressingMode::Absolute, SemanticClass::MemoryWrite, false),
    op(0x8E, "STX", AddressingMode::Absolute, SemanticClass::MemoryWrite, false),
    op(0x8F, "SAX", AddressingMode::Absolute, SemanticClass::Unofficial, true),
    op(0x90, "BCC", AddressingMode::Relative, SemanticClass::ConditionalBranch, false),
    op(0x91, "STA", AddressingMode::IndirectY, SemanticClass::MemoryWrite, false),
    op(0x92, "", AddressingMode::Implied, SemanticClass::Regular, false),
    op(0x93, "SHA", AddressingMode::IndirectY, SemanticClass::Unofficial, true),
    op(0x94, "STY", AddressingMode::ZeroPageX, SemanticClass::MemoryWrite, false),
    op(0x95, "STA", AddressingMode::ZeroPageX, SemanticClass::MemoryWrite, false),
    op(0x96, "STX", AddressingMode::ZeroPageY, SemanticClass::MemoryWrite, false),
    op(0x97, "SAX", AddressingMode::ZeroPageY, SemanticClass::Unofficial, true),
    op(0x98, "TYA", AddressingMode::Implied, SemanticClass::Regular, false),
    op(0x99, "STA", AddressingMode::AbsoluteY, SemanticClass::MemoryWrite, false),
    op(0x9A, "TXS", AddressingMode::Implied, SemanticClass::Regular, false),
    op(0x9B, "TAS", AddressingMode::AbsoluteY, SemanticClass::Unofficial, true),
    op(0x9C, "SHY", AddressingMode::AbsoluteX, SemanticClass::Unofficial, true),
    op(0x9D, "STA", AddressingMode::AbsoluteX, SemanticClass::MemoryWrite, false),
    op(0x9E, "SHX", AddressingMode::AbsoluteY, SemanticClass::Unofficial, true),
    op(0x9F, "SHA", AddressingMode::AbsoluteY, SemanticClass::Unofficial, true),
    op(0xA0, "LDY", AddressingMode::Immediate, SemanticClass::MemoryRead, false),
    op(0xA1, "LDA", AddressingMode::IndirectX, SemanticClass::MemoryRead, false),
    op(0xA2, "LDX", AddressingMode::Immediate, SemanticClass::MemoryRead, false),
    op(0xA3, "LAX", AddressingMode::IndirectX, SemanticClass::Unofficial, true),
    op(0xA4, "LDY", AddressingMode::ZeroPage, SemanticClass::MemoryRead, false),
    op(0xA5, "LDA", AddressingMode::ZeroPage, SemanticClass::MemoryRead, false),
    op(0xA6, "LDX", AddressingMode::ZeroPage, SemanticClass::MemoryRead, false),
    op(0xA7, "LAX", AddressingMode::ZeroPage, SemanticClass::Unofficial, true),
    op(0xA8, "TAY", AddressingMode::Implied, SemanticClass::Regular, false),
    op(0xA9, "LDA", AddressingMode::Immediate, SemanticClass::MemoryRead, false),
    op(0xAA, "TAX", AddressingMode::Implied, SemanticClass::Regular, false),
    op(0xAB, "LAX", AddressingMode::Immediate, SemanticClass::Unofficial, true),
    op(0xAC, "LDY", AddressingMode::Absolute, SemanticClass::MemoryRead, false),
    op(0xAD, "LDA", AddressingMode::Absolute, SemanticClass::MemoryRead, false),
    op(0xAE, "LDX", AddressingMode::Absolute, SemanticClass::MemoryRead, false),
    op(0xAF, "LAX", AddressingMode::Absolute, SemanticClass::Unofficial, true),
    op(0xB0, "BCS", AddressingMode::Relative, SemanticClass::ConditionalBranch, false),
    op(0xB1, "LDA", AddressingMode::IndirectY, SemanticClass::MemoryRead, false),
    op(0xB2, "", AddressingMode::Implied, SemanticClass::Regular, false),
    op(0xB3, "LAX", AddressingMode::IndirectY, SemanticClass::Unofficial, true),
    op(0xB4, "LDY", AddressingMode::ZeroPageX, SemanticClass::MemoryRead, false),
    op(0xB5, "LDA", AddressingMode::ZeroPageX, SemanticClass::MemoryRead, false),
    op(0xB6, "LDX", AddressingMode::ZeroPageY, SemanticClass::MemoryRead, false),
    op(0xB7, "LAX", AddressingMode::ZeroPageY, SemanticClass::Unofficial, true),
    op(0xB8, "CLV", AddressingMode::Implied, SemanticClass::Regular, false),
    op(0xB9, "LDA", AddressingMode::AbsoluteY, SemanticClass::MemoryRead, false),
    op(0xBA, "TSX", AddressingMode::Implied, SemanticClass::Regular, false),
    op(0xBB, "LAS", AddressingMode::AbsoluteY, SemanticClass::Unofficial, true),
    op(0xBC, "LDY", AddressingMode::AbsoluteX, SemanticClass::MemoryRead, false),
    op(0xBD, "LDA", AddressingMode::AbsoluteX, SemanticClass::MemoryRead, false),
    op(0xBE, "LDX", AddressingMode::AbsoluteY, SemanticClass::MemoryRead, false),
    op(0xBF, "LAX", AddressingMode::AbsoluteY, SemanticClass::Unofficial, true),
    op(0xC0, "CPY", AddressingMode::Immediate, SemanticClass::MemoryRead, false),
    op(0xC1, "CMP", AddressingMode::IndirectX, SemanticClass::MemoryRead, false),
    op(0xC2, "NOP", AddressingMode::Immediate, SemanticClass::Unofficial, true),
    op(0xC3, "DCP", AddressingMode::IndirectX, SemanticClass::Unofficial, true),
    op(0xC4, "CPY", AddressingMode::ZeroPage, SemanticClass::MemoryRead, false),
    op(0xC5, "CMP", AddressingMode::ZeroPage, SemanticClass::MemoryRead, false),
    op(0xC6, "DEC", AddressingMode::ZeroPage, SemanticClass::MemoryReadWrite, false),
    op(0xC7, "DCP", AddressingMode::ZeroPage, SemanticClass::Unofficial, true),
    op(0xC8, "INY", AddressingMode::Implied, SemanticClass::Regular, false),
    op(0xC9, "CMP", AddressingMode::Immediate, SemanticClass::MemoryRead, false),
    op(0xCA, "DEX", AddressingMode::Implied, SemanticClass::Regular, false),
    op(0xCB, "SBX", AddressingMode::Immediate, SemanticClass::Unofficial, true),
    op(0xCC, "CPY", AddressingMode::Absolute, SemanticClass::MemoryRead, false),
    op(0xCD, "CMP", AddressingMode::Absolute, SemanticClass::MemoryRead, false),
    op(0xCE, "DEC", AddressingMode::Absolute, SemanticClass::MemoryReadWrite, false),
    op(0xCF, "DCP", AddressingMode::Absolute, SemanticClass::Unofficial, true),
    op(0xD0, "BNE", AddressingMode::Relative, SemanticClass::ConditionalBranch, false),
    op(0xD1, "CMP", AddressingMode::IndirectY, SemanticClass::MemoryRead, false),
    op(0xD2, "", AddressingMode::Implied, SemanticClass::Regular, false),
    op(0xD3, "DCP", AddressingMode::IndirectY, SemanticClass::Unofficial, true),
    op(0xD4, "NOP", AddressingMode::ZeroPageX, SemanticClass::Unofficial, true),
    op(0xD5, "CMP", AddressingMode::ZeroPageX, SemanticClass::MemoryRead, false),
    op(0xD6, "DEC", AddressingMode::ZeroPageX, SemanticClass::MemoryReadWrite, false),
    op(0xD7, "DCP", AddressingMode::ZeroPageX, SemanticClass::Unofficial, true),
    op(0xD8, "CLD", AddressingMode::Implied, SemanticClass::Regular, false),
    op(0xD9, "CMP", AddressingMode::AbsoluteY, SemanticClass::MemoryRead, false),
    op(0xDA, "NOP", AddressingMode::Implied, SemanticClass::Unofficial, true),
    op(0xDB, "DCP", AddressingMode::AbsoluteY, SemanticClass::Unofficial, true),
    op(0xDC, "NOP", AddressingMode::AbsoluteX, SemanticClass::Unofficial, true),
    op(0xDD, "CMP", AddressingMode::AbsoluteX, SemanticClass::MemoryRead, false),
    op(0xDE, "DEC", AddressingMode::AbsoluteX, SemanticClass::MemoryReadWrite, false),
    op(0xDF, "DCP", AddressingMode::AbsoluteX, SemanticClass::Unofficial, true),
    op(0xE0, "CPX", AddressingMode::Immediate, SemanticClass::MemoryRead, false),
    op(0xE1, "SBC", AddressingMode::IndirectX, SemanticClass::MemoryRead, false),
    op(0xE2, "NOP", AddressingMode::Immediate, SemanticClass::Unofficial, true),
    op(0xE3, "ISC", AddressingMode::IndirectX, SemanticClass::Unofficial, true),
    op(0xE4, "CPX", AddressingMode::ZeroPage, SemanticClass::MemoryRead, false),
    op(0xE5, "SBC", AddressingMode::ZeroPage, SemanticClass::MemoryRead, false),
    op(0xE6, "INC", AddressingMode::ZeroPage, SemanticClass::MemoryReadWrite, false),
    op(0xE7, "ISC", AddressingMode::ZeroPage, SemanticClass::Unofficial, true),
    op(0xE8, "INX", AddressingMode::Implied, SemanticClass::Regular, false),
    op(0xE9, "SBC", AddressingMode::Immediate, SemanticClass::MemoryRead, false),
    op(0xEA, "NOP", AddressingMode::Implied, SemanticClass::Regular, false),
    op(0xEB, "SBC", AddressingMode::Immediate, SemanticClass::Unofficial, true),
    op(0xEC, "CPX", AddressingMode::Absolute, SemanticClass::MemoryRead, false),
    op(0xED, "SBC", AddressingMode::Absolute, SemanticClass::MemoryRead, false),
    op(0xEE, "INC", AddressingMode::Absolute, SemanticClass::MemoryReadWrite, false),
    op(0xEF, "ISC", AddressingMode::Absolute, SemanticClass::Unofficial, true),
    op(0xF0, "BEQ", AddressingMode::Relative, SemanticClass::ConditionalBranch, false),
    op(0xF1, "SBC", AddressingMode::IndirectY, SemanticClass::MemoryRead, false),
    op(0xF2, "", AddressingMode::Implied, SemanticClass::Regular, false),
    op(0xF3, "ISC", AddressingMode::IndirectY, SemanticClass::Unofficial, true),
    op(0xF4, "NOP", AddressingMode::ZeroPageX, SemanticClass::Unofficial, true),
    op(0xF5, "SBC", AddressingMode::ZeroPageX, SemanticClass::MemoryRead, false),
    op(0xF6, "INC", AddressingMode::ZeroPageX, SemanticClass::MemoryReadWrite, false),
    op(0xF7, "ISC", AddressingMode::ZeroPageX, SemanticClass::Unofficial, true),
    op(0xF8, "SED", AddressingMode::Implied, SemanticClass::Regular, false),
    op(0xF9, "SBC", AddressingMode::AbsoluteY, SemanticClass::MemoryRead, false),
    op(0xFA, "NOP", AddressingMode::Implied, SemanticClass::Unofficial, true),
    op(0xFB, "ISC", AddressingMode::AbsoluteY, SemanticClass::Unofficial, true),
    op(0xFC, "NOP", AddressingMode::AbsoluteX, SemanticClass::Unofficial, true),
    op(0xFD, "SBC", AddressingMode::AbsoluteX, SemanticClass::MemoryRead, false),
    op(0xFE, "INC", AddressingMode::AbsoluteX, SemanticClass::MemoryReadWrite, false),
    op(0xFF, "ISC", AddressingMode::AbsoluteX, SemanticClass::Unofficial, true),
];
