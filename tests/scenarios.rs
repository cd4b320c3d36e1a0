//! Integration coverage for spec.md §8's six concrete scenarios, driven
//! end to end through the public `Engine` entry point against small
//! synthetic PRG images built as byte-array literals -- no fixture files,
//! matching SPEC_FULL.md E8.

use nesdisasm::offsets::OffsetFlags;
use nesdisasm::Engine;

const CODE_BASE: u16 = 0x8000;

fn with_reset_vector(mut prg: Vec<u8>, reset: u16) -> Vec<u8> {
    let len = prg.len();
    prg[len - 4] = (reset & 0xFF) as u8;
    prg[len - 3] = (reset >> 8) as u8;
    prg
}

/// Scenario: a conditional branch is traced down both the taken and the
/// fall-through path, and the branch operand resolves to the synthetic
/// label attached at its target.
#[test]
fn conditional_branch_traces_both_successors() {
    let mut prg = vec![0u8; 0x10];
    prg[0x00] = 0xA9; // LDA #$00
    prg[0x01] = 0x00;
    prg[0x02] = 0xF0; // BEQ +2
    prg[0x03] = 0x02;
    prg[0x04] = 0xEA; // NOP (fall-through)
    prg[0x05] = 0xEA; // NOP
    prg[0x06] = 0x4C; // JMP $8000 (branch target, loops back)
    prg[0x07] = 0x00;
    prg[0x08] = 0x80;
    let prg = with_reset_vector(prg, CODE_BASE);

    let mut engine = Engine::new(&prg, CODE_BASE).unwrap();
    engine.trace();
    let image = engine.finalize(&[]);

    assert!(image.store.is_type(0x8000, OffsetFlags::CODE));
    assert!(image.store.is_type(0x8002, OffsetFlags::CODE));
    assert_eq!(image.store.get(0x8002).unwrap().operand_address, Some(0x8006));
    // both successors of the branch were followed.
    assert!(image.store.is_type(0x8004, OffsetFlags::CODE));
    assert!(image.store.is_type(0x8006, OffsetFlags::CODE));
    assert_eq!(image.store.get(0x8006).unwrap().label, "_label_8006");
}

/// Scenario: a `JSR`/`RTS` pair produces a deferred return entry that
/// resumes the caller's fall-through once the callee is fully traced, and
/// the callee's entry point is marked a call destination with a synthetic
/// subroutine label.
#[test]
fn subroutine_call_resumes_caller_fallthrough_after_return() {
    let mut prg = vec![0u8; 0x10];
    prg[0x00] = 0x20; // JSR $8005
    prg[0x01] = 0x05;
    prg[0x02] = 0x80;
    prg[0x03] = 0xEA; // NOP (caller fall-through, reached only via the deferred return)
    prg[0x04] = 0xEA; // NOP (filler)
    prg[0x05] = 0xEA; // NOP (subroutine body)
    prg[0x06] = 0x60; // RTS
    let prg = with_reset_vector(prg, CODE_BASE);

    let mut engine = Engine::new(&prg, CODE_BASE).unwrap();
    engine.trace();
    let image = engine.finalize(&[]);

    assert!(image.store.is_type(0x8005, OffsetFlags::CALL_DESTINATION));
    assert_eq!(image.store.get(0x8005).unwrap().label, "_sub_8005");
    assert!(image.store.is_type(0x8000, OffsetFlags::CODE));
    assert!(image.store.is_type(0x8003, OffsetFlags::CODE));
    assert!(image.store.is_type(0x8006, OffsetFlags::CODE));

    let asm = nesdisasm::dialect::render(
        &image,
        nesdisasm::dialect::OutputDialect::ca65(),
        nesdisasm::dialect::EmitOptions::default(),
    );
    assert!(asm.contains("_sub_8005:"));
    assert!(asm.contains("jsr _sub_8005"));
    assert!(asm.contains("rts"));
}

/// Scenario: an indirect jump fed by two adjacent absolute memory
/// references is recognised as a jump engine, and the bytes immediately
/// after the caller's `JSR` -- never decoded as code themselves -- are
/// reclaimed as that engine's function-pointer table.
#[test]
fn jump_engine_reclaims_callers_fallthrough_as_table() {
    let mut prg = vec![0u8; 0x40];
    // caller
    prg[0x00] = 0x20; // JSR $8010
    prg[0x01] = 0x10;
    prg[0x02] = 0x80;
    // table entries live at 0x8003 (the caller's own fall-through address):
    // entry 0 -> 0x8020 (valid handler); entry 1 stays zero, out of range,
    // terminating the walk after a single accepted entry.
    prg[0x03] = 0x20;
    prg[0x04] = 0x80;
    // engine body at 0x8010: two adjacent absolute references within the
    // code range (0x8030/0x8031) and one function context is what
    // `jumpengine` recognises -- an out-of-range reference wouldn't count
    // (spec.md §4.E only feeds the side-list with in-range absolute reads).
    prg[0x10] = 0xBD; // LDA $8030,X
    prg[0x11] = 0x30;
    prg[0x12] = 0x80;
    prg[0x13] = 0x85; // STA $10
    prg[0x14] = 0x10;
    prg[0x15] = 0xBD; // LDA $8031,X
    prg[0x16] = 0x31;
    prg[0x17] = 0x80;
    prg[0x18] = 0x85; // STA $11
    prg[0x19] = 0x11;
    prg[0x1A] = 0x6C; // JMP ($0010)
    prg[0x1B] = 0x10;
    prg[0x1C] = 0x00;
    // handler reached through the reclaimed table's single live entry.
    prg[0x20] = 0x60; // RTS
    let prg = with_reset_vector(prg, CODE_BASE);

    let mut engine = Engine::new(&prg, CODE_BASE).unwrap();
    engine.trace();
    let image = engine.finalize(&[]);

    assert!(image.store.is_type(0x8010, OffsetFlags::JUMP_ENGINE));
    assert!(image.store.is_type(0x8003, OffsetFlags::JUMP_TABLE));
    assert!(image.store.is_type(0x8003, OffsetFlags::FUNCTION_REFERENCE));
    assert!(image.store.is_type(0x8020, OffsetFlags::CODE));
    // the table entry's target is a branch destination: it gets a label.
    assert_eq!(image.store.get(0x8020).unwrap().label, "_sub_8020");
    // the table bytes were never independently decoded as instructions.
    assert!(!image.store.is_type(0x8003, OffsetFlags::CODE));
}

/// Scenario: a branch discovered late targets a byte inside an
/// already-decoded instruction's operand, forcing that earlier
/// instruction to be demoted. Re-decoding at the re-entry point itself
/// collides with bytes already claimed further ahead, so the demoted byte
/// ends up as plain `CodeAsData` carrying only a label -- not a second,
/// overlapping instruction.
#[test]
fn overlapping_branch_target_demotes_earlier_instruction() {
    // extra headroom past the second JMP's last byte so it doesn't brush
    // up against the fixed vector region at the tail of the image.
    let mut prg = vec![0u8; 0x14];
    prg[0x00] = 0xA9; // LDA #$4c  (operand byte 0x8001 coincidentally spells JMP's opcode)
    prg[0x01] = 0x4C;
    prg[0x02] = 0x4C; // JMP $8006
    prg[0x03] = 0x06;
    prg[0x04] = 0x80;
    prg[0x06] = 0xA9; // LDA #$01
    prg[0x07] = 0x01;
    prg[0x08] = 0x4C; // JMP $8001 -- targets the first LDA's operand byte.
    prg[0x09] = 0x01;
    prg[0x0A] = 0x80;
    let prg = with_reset_vector(prg, CODE_BASE);

    let mut engine = Engine::new(&prg, CODE_BASE).unwrap();
    engine.trace();
    let image = engine.finalize(&[]);

    // the second JMP's own 3 bytes still decode cleanly.
    assert!(image.store.is_type(0x8008, OffsetFlags::CODE));
    assert!(image.store.is_type(0x8009, OffsetFlags::CODE));
    assert!(image.store.is_type(0x800A, OffsetFlags::CODE));
    // 0x8000 was demoted: no longer the first byte of a live instruction.
    assert!(!image.store.is_type(0x8000, OffsetFlags::CODE));
    // re-decoding at the re-entry point collided with 0x8002/0x8003 (already
    // claimed by the first JMP), so it became labeled data, not new code.
    assert!(image.store.is_type(0x8001, OffsetFlags::CODE_AS_DATA));
    assert_eq!(image.store.get(0x8001).unwrap().label, "_label_8001");
    assert!(image.store.is_type(0x8002, OffsetFlags::CODE));
}

/// Scenario 6a: an unassigned opcode reached by an explicit entry-point
/// (here, the reset vector itself) is classified `CodeAsData` -- a
/// one-byte data item sitting where code was expected, not silently
/// skipped.
#[test]
fn unassigned_opcode_at_explicit_entry_point_is_code_as_data() {
    let mut prg = vec![0u8; 0x10];
    prg[0x00] = 0x02; // JAM: never assigned a mnemonic.
    let prg = with_reset_vector(prg, CODE_BASE);

    let mut engine = Engine::new(&prg, CODE_BASE).unwrap();
    engine.trace();
    let image = engine.finalize(&[]);

    assert!(image.store.is_type(0x8000, OffsetFlags::CODE_AS_DATA));
    assert!(!image.store.is_type(0x8000, OffsetFlags::DATA_OFFSET));
}

/// Scenario 6b: the same unassigned opcode reached only by ordinary
/// fall-through is left unclassified by the tracer -- it has no actual
/// evidence it's an instruction -- and is swept to plain `DataOffset` by
/// the finaliser instead.
#[test]
fn unassigned_opcode_reached_by_fallthrough_is_plain_data() {
    let mut prg = vec![0u8; 0x10];
    prg[0x00] = 0xEA; // NOP
    prg[0x01] = 0x02; // JAM, reached only via NOP's fall-through.
    let prg = with_reset_vector(prg, CODE_BASE);

    let mut engine = Engine::new(&prg, CODE_BASE).unwrap();
    engine.trace();
    let image = engine.finalize(&[]);

    assert!(image.store.is_type(0x8000, OffsetFlags::CODE));
    assert!(image.store.is_type(0x8001, OffsetFlags::DATA_OFFSET));
    assert!(!image.store.is_type(0x8001, OffsetFlags::CODE_AS_DATA));
}
