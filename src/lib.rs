//! Tracing disassembly engine for 6502-based NES/Famicom program images.
//!
//! Reconstructs a classified, symbolised model of a program image by
//! following control flow from its interrupt vectors -- without
//! executing it. The crate root wires together the components named in
//! the design: the instruction-set adapter (`cpu`), the address-space
//! view (`memory`), the static/dynamic symbol tables (`symbols`), the
//! per-byte classification store (`offsets`), the worklist tracer
//! (`tracer`) and its jump-engine detector (`jumpengine`), the finaliser
//! (`finalize`), the optional code/data-log ingester (`codedatalog`) and
//! the output dialects (`dialect`). `engine` ties these into the single
//! entry point most callers want.
//!
//! The binary at `src/bin/nesdisasm.rs` is one consumer of this library;
//! it is not required to use the engine -- an embedder can link this
//! crate directly.

/// Instruction-set adapter (component A).
pub mod cpu;
/// Address-space view over a PRG image (component B).
pub mod memory;
/// Static register catalogue and dynamic variable/handler names (component C).
pub mod symbols;
/// Per-byte classification store (component D).
pub mod offsets;
/// Worklist entries and dedup sets driving the tracer.
pub mod queue;
/// Worklist-driven tracer (component E).
pub mod tracer;
/// Indirect-dispatch ("jump engine") recogniser and table walker (component F).
pub mod jumpengine;
/// Cross-reference resolution, checksums and data sweep (component G).
pub mod finalize;
/// Optional code/data-log ingester (component H).
pub mod codedatalog;
/// The errors the core itself can raise.
pub mod error;
/// Top-level `Engine`: construct once per image, `trace()`, `finalize()`.
pub mod engine;
/// iNES container loading, outside the core proper.
pub mod ines;
/// Textual emission in the three supported assembler dialects.
pub mod dialect;
/// CLI argument surface, logging setup and the optional verification pass.
pub mod cli;

pub use engine::Engine;
pub use error::Error;
