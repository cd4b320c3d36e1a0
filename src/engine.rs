//! Top-level entry point gluing the tracer, the optional code/data-log
//! ingester and the finaliser into the sequence spec.md §2's data-flow
//! diagram describes: `Loader -> B,C,D initialise -> H seeds E (optional)
//! -> E drives D ... -> G sweeps D -> external dialect emits text`.
//!
//! This is the one piece of public API a caller (the CLI, or a test, or
//! an embedder) needs: construct an `Engine`, optionally ingest a
//! code/data log, `trace()`, then `finalize()` to get the frozen model a
//! `crate::dialect` renderer consumes.

use crate::codedatalog::CodeDataLog;
use crate::error::Error;
use crate::finalize::{self, FinalizedImage};
use crate::offsets::OffsetFlags;
use crate::tracer::Tracer;

pub struct Engine<'prg> {
    tracer: Tracer<'prg>,
    prg: &'prg [u8],
}

impl<'prg> Engine<'prg> {
    pub fn new(prg: &'prg [u8], code_base: u16) -> Result<Self, Error> {
        Ok(Self {
            tracer: Tracer::new(prg, code_base)?,
            prg,
        })
    }

    /// Seeds extra entry points from an optional code/data log (component
    /// H). Must be called before `trace()`; has no effect afterwards.
    pub fn ingest_code_data_log(&mut self, log: &CodeDataLog) {
        let code_base = self.tracer.store.code_base();
        for addr in log.executed_addresses(code_base) {
            self.tracer.seed_entry_point(addr);
        }
        for addr in log.sub_entry_points(code_base) {
            self.tracer.store.set_type(addr, OffsetFlags::CALL_DESTINATION);
        }
    }

    /// Runs the worklist tracer to completion: seeds the interrupt
    /// vectors, drains `parseQueue`/`functionReturnQueue`, and iterates
    /// the jump-engine scanner until neither makes further progress.
    pub fn trace(&mut self) {
        self.tracer.seed_from_vectors();
        self.tracer.run();
    }

    /// Runs the finaliser (component G) and hands back the frozen model
    /// a dialect emitter renders. Consumes the engine: the classification
    /// store passes from tracer-owned to finaliser-owned, matching
    /// spec.md §5's single-owner-at-a-time policy.
    #[must_use]
    pub fn finalize(self, chr: &[u8]) -> FinalizedImage {
        let (store, symbols) = self.tracer.into_parts();
        let memory = store.memory_view(self.prg);
        finalize::finalize(store, symbols, &memory, chr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offsets::OffsetFlags;

    #[test]
    fn trivial_reset_loop_is_traced_and_finalized() {
        // §8 scenario 1: CLI SEI ; CLD ; JMP $8000 at the reset vector.
        let mut prg = vec![0u8; 0x10];
        prg[0] = 0x78; // SEI
        prg[1] = 0xD8; // CLD
        prg[2] = 0x4C; // JMP abs
        prg[3] = 0x00;
        prg[4] = 0x80;
        let len = prg.len();
        prg[len - 4] = 0x00;
        prg[len - 3] = 0x80; // reset vector = 0x8000

        let mut engine = Engine::new(&prg, 0x8000).unwrap();
        engine.trace();
        let image = engine.finalize(&[]);

        assert!(image.store.is_type(0x8000, OffsetFlags::CODE));
        assert_eq!(image.store.get(0x8000).unwrap().label, "Reset");
        assert!(image.store.is_type(0x8000, OffsetFlags::CALL_DESTINATION));
        assert!(image.store.is_type(0x8002, OffsetFlags::CODE));
        // the JMP operand targets the entry point itself, not a fresh
        // synthetic label: the entry-point label dominates.
        assert_eq!(
            image.store.get(0x8002).unwrap().operand_address,
            Some(0x8000)
        );
        // unreferenced tail bytes (before the vectors) are data.
        assert!(image.store.is_type(0x8005, OffsetFlags::DATA_OFFSET));
    }

    #[test]
    fn missing_nmi_and_irq_vectors_stay_unlabeled() {
        let mut prg = vec![0u8; 0x10];
        let len = prg.len();
        prg[len - 4] = 0x00;
        prg[len - 3] = 0x80; // reset only
        let mut engine = Engine::new(&prg, 0x8000).unwrap();
        engine.trace();
        assert_eq!(engine.tracer.symbols.handlers.nmi, "0");
        assert_eq!(engine.tracer.symbols.handlers.irq, "0");
    }
}
