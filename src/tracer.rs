//! The worklist-driven tracer (component E): starting from the three
//! interrupt vectors, decodes reachable code breadth-first, discovers
//! data references and jump engines as it goes, and demotes a previously
//! classified instruction if a later path reaches one of its interior
//! bytes as a new instruction start.

use std::collections::{HashMap, VecDeque};

use crate::cpu::{AddressingMode, InstructionSet, SemanticClass};
use crate::error::Error;
use crate::jumpengine::JumpEngineState;
use crate::memory::MemoryView;
use crate::offsets::{OffsetFlags, ReferenceKind, Store};
use crate::queue::{ParseEntry, ReturnEntry, WorkQueues};
use crate::symbols::SymbolTables;

/// How many of the most recently decoded memory-referencing instructions
/// in a function context are kept on hand for jump-engine recognition.
const RECENT_REFS_WINDOW: usize = 16;

pub struct Tracer<'prg> {
    memory: MemoryView<'prg>,
    isa: InstructionSet,
    pub store: Store,
    pub symbols: SymbolTables,
    queues: WorkQueues,
    jump_engines: JumpEngineState,
    recent_refs: HashMap<u16, VecDeque<u16>>,
}

impl<'prg> Tracer<'prg> {
    pub fn new(prg: &'prg [u8], code_base: u16) -> Result<Self, Error> {
        Ok(Self {
            memory: MemoryView::new(prg, code_base),
            isa: InstructionSet::new()?,
            store: Store::new(code_base, prg.len()),
            symbols: SymbolTables::new()?,
            queues: WorkQueues::new(),
            jump_engines: JumpEngineState::new(),
            recent_refs: HashMap::new(),
        })
    }

    /// Seeds the worklist from the NMI, Reset and IRQ/BRK vectors at the
    /// tail of the image. A zero vector, or one pointing outside the
    /// code region, is left as the literal `"0"` handler name and is not
    /// traced.
    pub fn seed_from_vectors(&mut self) {
        for (offset_from_end, name, label) in [
            (6u16, "nmi", "NMI"),
            (4u16, "reset", "Reset"),
            (2u16, "irq", "IRQ"),
        ] {
            let Ok(vector) = self.memory.read_tail_word(offset_from_end) else {
                continue;
            };
            if vector == 0 || !self.is_in_code_region(vector) {
                continue;
            }
            match name {
                "nmi" => self.symbols.handlers.nmi = label.to_string(),
                "reset" => self.symbols.handlers.reset = label.to_string(),
                _ => self.symbols.handlers.irq = label.to_string(),
            }
            self.store.attach_label(vector, label);
            self.store.set_type(vector, OffsetFlags::CALL_DESTINATION);
            self.queues.push_parse(ParseEntry {
                addr: vector,
                from: None,
                kind: ReferenceKind::Call,
                from_branch: true,
                context: vector,
            });
        }
    }

    /// Also ingests externally discovered entry points (e.g. from a
    /// code/data log's marked-code ranges that aren't otherwise reached
    /// by tracing).
    pub fn seed_entry_point(&mut self, addr: u16) {
        if !self.is_in_code_region(addr) {
            return;
        }
        self.queues.push_parse(ParseEntry {
            addr,
            from: None,
            kind: ReferenceKind::Call,
            from_branch: true,
            context: addr,
        });
    }

    fn is_in_code_region(&self, addr: u16) -> bool {
        self.memory.contains(addr) && addr < self.memory.last_code_address()
    }

    /// Drains the worklist, interleaving jump-engine table walking, until
    /// neither queue nor the scanner can make further progress.
    pub fn run(&mut self) {
        loop {
            let mut progress = false;
            while let Some(entry) = self.queues.pop_parse() {
                self.trace_from(entry);
                progress = true;
            }
            if self
                .jump_engines
                .scan_for_new_entry(&mut self.store, &self.memory, &mut self.queues)
            {
                progress = true;
            }
            if !progress {
                if self.queues.return_is_empty() {
                    break;
                }
                self.queues.promote_returns_to_parse();
            }
        }
    }

    fn trace_from(&mut self, entry: ParseEntry) {
        let addr = entry.addr;
        if !self.is_in_code_region(addr) {
            log::debug!("dropping out-of-range worklist entry {addr:#06x}");
            return;
        }

        if self.store.get(addr).is_some_and(|o| o.is_primary()) {
            self.record_reference(&entry);
            return;
        }
        if let Some(owner) = self.store.owning_instruction(addr) {
            if owner != addr {
                self.demote(owner);
            }
        }

        self.record_reference(&entry);

        let opcode = match self.memory.read(addr) {
            Ok(b) => b,
            Err(e) => {
                log::debug!("{e}");
                return;
            }
        };
        let info = self.isa.decode(opcode);

        if !info.is_assigned() {
            if entry.from_branch {
                // Reached via an explicit branch/call/entry-point target:
                // the destination was expected to be code but isn't: a
                // one-byte data item, per spec.md §4.E.1.
                self.store.set_type(addr, OffsetFlags::CODE_AS_DATA);
                self.store.set_bytes_and_code(addr, vec![opcode], String::new());
                self.store.set_context(addr, entry.context);
            } else {
                // Reached by plain fall-through: stop this thread and
                // leave the byte unclassified (scenario 6); the finaliser
                // sweep picks it up as ordinary data.
                log::debug!(
                    "unassigned opcode {opcode:#04x} at {addr:#06x} reached by fall-through; stopping thread"
                );
            }
            return;
        }

        let len = u16::from(info.len());
        let last = addr.wrapping_add(len.saturating_sub(1));
        if !self.memory.contains(last) || last >= self.memory.last_code_address() {
            log::debug!("instruction at {addr:#06x} would overrun the code region");
            return;
        }
        if (1..len).any(|i| self.store.is_type(addr.wrapping_add(i), OffsetFlags::CODE)) {
            // A non-first byte of this decode already belongs to another
            // instruction: stop this thread rather than let the two
            // overlap (the reverse direction is handled by `demote`).
            log::debug!("instruction at {addr:#06x} would overlap an already-coded byte");
            return;
        }

        let bytes: Vec<u8> = (0..len)
            .map(|i| self.memory.read(addr.wrapping_add(i)).unwrap_or(0))
            .collect();
        let operand_address = Self::operand_address(addr, info.mode, &bytes);

        self.store
            .set_instruction(addr, bytes, info.mnemonic, info.mode, operand_address);
        // A demoted neighbour may have left stale DataOffset|CodeAsData
        // bits on these bytes; this decode supersedes them.
        self.store
            .clear_type(addr, OffsetFlags::DATA_OFFSET | OffsetFlags::CODE_AS_DATA);
        self.store.set_type(addr, OffsetFlags::CODE);
        for i in 1..len {
            let a = addr.wrapping_add(i);
            self.store
                .clear_type(a, OffsetFlags::DATA_OFFSET | OffsetFlags::CODE_AS_DATA);
            self.store.set_type(a, OffsetFlags::CODE);
        }
        self.store.set_context(addr, entry.context);

        if info.class.reads_memory() || info.class.writes_memory() {
            if let Some(operand) = operand_address {
                self.note_data_reference(entry.context, operand, info.class, info.mode);
            }
        }

        self.dispatch_successors(addr, len, info.class, operand_address, entry.context);
    }

    fn record_reference(&mut self, entry: &ParseEntry) {
        if let Some(from) = entry.from {
            self.store.add_inbound_branch(entry.addr, from, entry.kind);
        }
        if entry.from_branch && !self.store.get(entry.addr).is_some_and(|o| o.has_label()) {
            let label = match entry.kind {
                ReferenceKind::Call | ReferenceKind::JumpTableEntry => {
                    format!("_sub_{:04x}", entry.addr)
                }
                ReferenceKind::Branch | ReferenceKind::Jump => format!("_label_{:04x}", entry.addr),
            };
            self.store.attach_label(entry.addr, label);
        }
    }

    fn operand_address(addr: u16, mode: AddressingMode, bytes: &[u8]) -> Option<u16> {
        match mode {
            AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => Some(u16::from(bytes[1])),
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => Some(u16::from_le_bytes([bytes[1], bytes[2]])),
            AddressingMode::Relative => {
                let displacement = bytes[1] as i8;
                Some(addr.wrapping_add(2).wrapping_add(displacement as u16))
            }
            AddressingMode::Implied | AddressingMode::Accumulator | AddressingMode::Immediate => {
                None
            }
        }
    }

    fn note_data_reference(
        &mut self,
        context: u16,
        operand: u16,
        class: SemanticClass,
        mode: AddressingMode,
    ) {
        // Jump-engine table-base candidates are absolute references inside
        // the code range only (§4.E/§4.F.1); zero-page operands (e.g. a
        // pointer build via `STA $10; STA $11`) never feed the window.
        if mode.is_absolute() && self.is_in_code_region(operand) {
            let window = self.recent_refs.entry(context).or_default();
            window.push_back(operand);
            while window.len() > RECENT_REFS_WINDOW {
                window.pop_front();
            }
        }

        if self.symbols.is_constant(operand) {
            self.symbols
                .lookup_face(operand, class.reads_memory(), class.writes_memory());
            return;
        }
        if self.is_in_code_region(operand) {
            if !self.store.is_type(operand, OffsetFlags::CODE) {
                self.store.set_type(operand, OffsetFlags::DATA_OFFSET);
            } else {
                self.store.set_type(operand, OffsetFlags::CODE_AS_DATA);
            }
        } else {
            self.symbols.variable_name(operand);
        }
    }

    fn dispatch_successors(
        &mut self,
        addr: u16,
        len: u16,
        class: SemanticClass,
        operand_address: Option<u16>,
        context: u16,
    ) {
        let fallthrough = addr.wrapping_add(len);
        match class {
            SemanticClass::Regular | SemanticClass::MemoryRead | SemanticClass::MemoryWrite
            | SemanticClass::MemoryReadWrite | SemanticClass::Unofficial => {
                self.queues.push_parse(ParseEntry {
                    addr: fallthrough,
                    from: None,
                    kind: ReferenceKind::Branch,
                    from_branch: false,
                    context,
                });
            }
            SemanticClass::ConditionalBranch => {
                let target = operand_address.expect("relative branch always carries a target");
                self.queues.push_parse(ParseEntry {
                    addr: target,
                    from: Some(addr),
                    kind: ReferenceKind::Branch,
                    from_branch: true,
                    context,
                });
                self.queues.push_parse(ParseEntry {
                    addr: fallthrough,
                    from: None,
                    kind: ReferenceKind::Branch,
                    from_branch: false,
                    context,
                });
            }
            SemanticClass::UnconditionalJumpAbsolute => {
                let target = operand_address.expect("absolute jump always carries a target");
                let engine_tail_call = self.jump_engines.is_engine(target);
                self.queues.push_parse(ParseEntry {
                    addr: target,
                    from: Some(addr),
                    kind: ReferenceKind::Jump,
                    from_branch: true,
                    context: if engine_tail_call { target } else { context },
                });
            }
            SemanticClass::UnconditionalJumpIndirect => {
                let window: Vec<u16> = self
                    .recent_refs
                    .get(&context)
                    .map(|w| w.iter().copied().collect())
                    .unwrap_or_default();
                if self.jump_engines.try_recognize_engine(context, &window) {
                    self.jump_engines.claim_pending_callers(context, &mut self.queues);
                }
                self.store.set_type(context, OffsetFlags::JUMP_ENGINE);
            }
            SemanticClass::SubroutineCall => {
                let target = operand_address.expect("JSR always carries a target");
                self.store.set_type(target, OffsetFlags::CALL_DESTINATION);
                self.queues.push_parse(ParseEntry {
                    addr: target,
                    from: Some(addr),
                    kind: ReferenceKind::Call,
                    from_branch: true,
                    context: target,
                });
                if self.jump_engines.is_engine(target) {
                    self.jump_engines
                        .register_caller(addr, target, fallthrough, &mut self.queues);
                } else {
                    self.queues.push_return(ReturnEntry {
                        addr: fallthrough,
                        call_site: addr,
                        context,
                        callee: target,
                    });
                }
            }
            SemanticClass::SubroutineReturn | SemanticClass::InterruptReturn => {}
        }
    }

    /// Un-decodes a previously-committed instruction byte by byte: each of
    /// its bytes becomes its own `DataOffset | CodeAsData` record. The
    /// address the new decode re-enters at gets overwritten again right
    /// after this returns, so only its neighbours keep this marking.
    fn demote(&mut self, owner: u16) {
        let Some(existing_len) = self.store.get(owner).map(|o| o.bytes.len() as u16) else {
            return;
        };
        log::debug!("demoting instruction at {owner:#06x}, reclassified by an overlapping entry");
        for i in 0..existing_len {
            let addr = owner.wrapping_add(i);
            self.store.clear_type(addr, OffsetFlags::CODE);
            self.store
                .set_type(addr, OffsetFlags::DATA_OFFSET | OffsetFlags::CODE_AS_DATA);
            let byte = self.memory.read(addr).unwrap_or(0);
            self.store.set_bytes_and_code(addr, vec![byte], String::new());
        }
    }

    #[must_use]
    pub fn into_parts(self) -> (Store, SymbolTables) {
        (self.store, self.symbols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nrom(prg_len: usize) -> Vec<u8> {
        vec![0xEA; prg_len] // NOP filler
    }

    #[test]
    fn traces_simple_fallthrough_chain() {
        let mut prg = nrom(0x20);
        // Reset vector -> 0x8000: LDA #$01 ; STA $2000 ; JMP back
        prg[0] = 0xA9; // LDA #imm
        prg[1] = 0x01;
        prg[2] = 0x8D; // STA abs
        prg[3] = 0x00;
        prg[4] = 0x20;
        prg[5] = 0x4C; // JMP abs
        prg[6] = 0x02;
        prg[7] = 0x80;
        prg[prg.len() - 4] = 0x00;
        prg[prg.len() - 3] = 0x80; // reset vector = 0x8000

        let mut tracer = Tracer::new(&prg, 0x8000).unwrap();
        tracer.seed_from_vectors();
        tracer.run();

        assert!(tracer.store.is_type(0x8000, OffsetFlags::CODE));
        assert!(tracer.store.is_type(0x8002, OffsetFlags::CODE));
        assert!(tracer.store.is_type(0x8005, OffsetFlags::CODE));
        assert_eq!(tracer.symbols.handlers.reset, "Reset");
    }

    #[test]
    fn subroutine_call_creates_deferred_return_and_call_destination() {
        let mut prg = nrom(0x20);
        prg[0] = 0x20; // JSR abs
        prg[1] = 0x05;
        prg[2] = 0x80;
        prg[3] = 0xEA; // NOP (fallthrough after call)
        prg[5] = 0x60; // RTS at 0x8005
        prg[prg.len() - 4] = 0x00;
        prg[prg.len() - 3] = 0x80;

        let mut tracer = Tracer::new(&prg, 0x8000).unwrap();
        tracer.seed_from_vectors();
        tracer.run();

        assert!(tracer.store.is_type(0x8005, OffsetFlags::CALL_DESTINATION));
        assert!(tracer.store.is_type(0x8003, OffsetFlags::CODE));
    }

    #[test]
    fn jam_opcode_classified_as_code_as_data() {
        let mut prg = nrom(0x20);
        prg[0] = 0x02; // JAM
        prg[prg.len() - 4] = 0x00;
        prg[prg.len() - 3] = 0x80;

        let mut tracer = Tracer::new(&prg, 0x8000).unwrap();
        tracer.seed_from_vectors();
        tracer.run();

        assert!(tracer.store.is_type(0x8000, OffsetFlags::CODE_AS_DATA));
        assert!(!tracer.store.is_type(0x8000, OffsetFlags::CODE));
    }

    #[test]
    fn adjacent_zero_page_stores_do_not_trigger_jump_engine_recognition() {
        // A function that builds a zero-page pointer (`STA $10; STA $11`)
        // before an indirect jump is an ordinary pointer-indexed dispatch,
        // not a jump engine: zero-page operands never enter the
        // jump-engine side-list (only in-range absolute ones do), so the
        // caller's fall-through byte is classified as ordinary code
        // instead of being stolen as a bogus function-pointer table entry.
        let mut prg = nrom(0x20);
        prg[0x00] = 0x20; // JSR $8010
        prg[0x01] = 0x10;
        prg[0x02] = 0x80;
        prg[0x03] = 0xEA; // NOP: caller fall-through
        prg[0x10] = 0x85; // STA $10
        prg[0x11] = 0x10;
        prg[0x12] = 0x85; // STA $11
        prg[0x13] = 0x11;
        prg[0x14] = 0x6C; // JMP ($0010)
        prg[0x15] = 0x10;
        prg[0x16] = 0x00;
        prg[prg.len() - 4] = 0x00;
        prg[prg.len() - 3] = 0x80;

        let mut tracer = Tracer::new(&prg, 0x8000).unwrap();
        tracer.seed_from_vectors();
        tracer.run();

        assert!(tracer.store.is_type(0x8003, OffsetFlags::CODE));
        assert!(!tracer.store.is_type(0x8003, OffsetFlags::FUNCTION_REFERENCE));
    }
}
