//! Output dialects (component E6): turn a finalised trace into assembler
//! source text. The three supported dialects share every decision about
//! *what* to print (instruction order, label placement, operand
//! resolution); they differ only in directive spelling and a couple of
//! syntax quirks, captured by the small `Syntax` trait below.

mod asm6;
mod ca65;
mod nesasm;

pub use asm6::Asm6;
pub use ca65::Ca65;
pub use nesasm::Nesasm;

use std::fmt::Write as _;

use crate::cpu::AddressingMode;
use crate::finalize::FinalizedImage;
use crate::ines::{RomMeta, VideoFormat};
use crate::offsets::{Offset, OffsetFlags, Store};
use crate::symbols::SymbolTables;

/// Maximum plain data bytes grouped onto one directive line.
const DATA_RUN_WIDTH: usize = 8;

pub trait Syntax {
    fn name(&self) -> &'static str;
    fn origin(&self, addr: u16) -> String;
    fn byte_directive(&self) -> &'static str;
    fn word_directive(&self) -> &'static str;
    /// A zero-filled reservation of `count` bytes, used when
    /// `EmitOptions::trim_zero_bytes` collapses a trailing run of
    /// zero data instead of emitting it byte by byte.
    fn fill_directive(&self, count: usize) -> String;
    /// Some dialects require an explicit operand on accumulator-mode
    /// opcodes (`asl a`); others print the mnemonic bare (`asl`).
    fn accumulator_operand(&self) -> Option<&'static str> {
        None
    }
    /// A segment-switch directive, for dialects that segment their output
    /// (ca65's `.segment "CODE"` / `.segment "VECTORS"`); `None` for
    /// dialects that place everything at a single `.org`.
    fn segment_header(&self, _name: &str) -> Option<String> {
        None
    }
    /// A symbol-constant assignment (`name = $addr`), shared syntax across
    /// all three dialects.
    fn constant_directive(&self, name: &str, addr: u16) -> String {
        format!("{name} = ${addr:04x}")
    }
}

/// CLI-controlled emission knobs (spec.md §6's comment-verbosity and
/// zero-byte-trimming flags). The dialects themselves are agnostic to
/// these; `render` applies them uniformly across all three.
#[derive(Debug, Clone, Copy)]
pub struct EmitOptions {
    /// 0 = no address/provenance comments, 1 = address only, 2 = address
    /// plus inbound-branch provenance.
    pub comment_verbosity: u8,
    /// Collapse a trailing run of zero-valued data bytes at the tail of
    /// the image into a single fill directive.
    pub trim_zero_bytes: bool,
    /// Cartridge-header facts forwarded unchanged into the listing header
    /// comment (spec.md §6); `None` for a headerless `--raw` input.
    pub rom_meta: Option<RomMeta>,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            comment_verbosity: 1,
            trim_zero_bytes: false,
            rom_meta: None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum OutputDialect {
    Asm6(Asm6),
    Ca65(Ca65),
    Nesasm(Nesasm),
}

impl OutputDialect {
    #[must_use]
    pub fn asm6() -> Self {
        Self::Asm6(Asm6)
    }

    #[must_use]
    pub fn ca65() -> Self {
        Self::Ca65(Ca65)
    }

    #[must_use]
    pub fn nesasm() -> Self {
        Self::Nesasm(Nesasm)
    }

    fn syntax(&self) -> &dyn Syntax {
        match self {
            Self::Asm6(s) => s,
            Self::Ca65(s) => s,
            Self::Nesasm(s) => s,
        }
    }
}

/// Renders a finalised image as assembler source text in the given
/// dialect, honoring `opts`.
#[must_use]
pub fn render(image: &FinalizedImage, dialect: OutputDialect, opts: EmitOptions) -> String {
    let syntax = dialect.syntax();
    let mut out = String::new();
    let _ = writeln!(
        out,
        "; prg crc32 {:08x}  chr crc32 {:08x}  combined {:08x}",
        image.checksums.prg, image.checksums.chr, image.checksums.combined
    );
    if let Some(meta) = &opts.rom_meta {
        render_rom_meta_comment(&mut out, meta);
    }
    out.push('\n');

    render_symbol_declarations(&mut out, syntax, &image.symbols);

    let _ = writeln!(out, "{} ; generated by nesdisasm", syntax.origin(image.store.code_base()));
    if let Some(header) = syntax.segment_header("CODE") {
        let _ = writeln!(out, "{header}");
    }

    // The last 6 bytes of the image are the fixed NMI/RESET/IRQ vector
    // region (spec.md §3's glossary); rendered separately below rather
    // than falling through the ordinary per-offset loop as anonymous data.
    let has_vector_region = image.store.len() >= 6;
    let end_address = image
        .store
        .code_base()
        .wrapping_add(image.store.len() as u16);
    let vector_region_start = if has_vector_region {
        end_address.wrapping_sub(6)
    } else {
        end_address
    };

    let trim_from = opts
        .trim_zero_bytes
        .then(|| trailing_zero_run_start(&image.store))
        .flatten();

    let mut data_run: Vec<u8> = Vec::new();
    let mut run_start: Option<u16> = None;

    for offset in image.store.iter() {
        if has_vector_region && offset.address == vector_region_start {
            break;
        }
        if let Some(trim_from) = trim_from {
            if offset.address == trim_from {
                flush_data_run(&mut out, syntax, &mut data_run, &mut run_start);
                let count = vector_region_start
                    .wrapping_sub(trim_from) as usize;
                let _ = writeln!(out, "    {}", syntax.fill_directive(count));
                break;
            }
        }

        let is_plain_data = offset.is_type(OffsetFlags::DATA_OFFSET) && offset.is_primary() && offset.bytes.len() == 1;
        if !is_plain_data || offset.has_label() {
            flush_data_run(&mut out, syntax, &mut data_run, &mut run_start);
        }

        if offset.has_label() {
            out.push_str(&offset.label);
            out.push(':');
            write_comment(&mut out, &offset.label_comment, offset, &opts);
            out.push('\n');
        }

        if offset.is_type(OffsetFlags::CODE) && offset.is_primary() {
            render_instruction(&mut out, syntax, &image.store, &image.symbols, offset, &opts);
        } else if offset.is_type(OffsetFlags::FUNCTION_REFERENCE) && offset.bytes.len() == 2 {
            render_word(&mut out, syntax, &image.store, offset, &opts);
        } else if offset.is_type(OffsetFlags::CODE_AS_DATA) && offset.is_primary() {
            render_data_bytes(&mut out, syntax, &offset.bytes);
        } else if is_plain_data {
            if run_start.is_none() {
                run_start = Some(offset.address);
            }
            data_run.push(offset.bytes[0]);
            if data_run.len() >= DATA_RUN_WIDTH {
                flush_data_run(&mut out, syntax, &mut data_run, &mut run_start);
            }
        }
    }
    flush_data_run(&mut out, syntax, &mut data_run, &mut run_start);

    if has_vector_region {
        render_vectors(&mut out, syntax, &image.symbols, vector_region_start);
    }

    out
}

/// The address the trailing run of zero-valued, label-free, plain-data
/// bytes begins at, if the image ends with one at all. Never reaches
/// into the fixed vector region, which always renders explicitly.
fn trailing_zero_run_start(store: &Store) -> Option<u16> {
    let vector_region_start = store
        .code_base()
        .wrapping_add(store.len().saturating_sub(6) as u16);
    let mut start = None;
    for offset in store.iter().rev() {
        if store.len() >= 6 && offset.address >= vector_region_start {
            continue;
        }
        let is_trimmable = offset.is_type(OffsetFlags::DATA_OFFSET)
            && offset.is_primary()
            && offset.bytes == [0]
            && !offset.has_label();
        if !is_trimmable {
            break;
        }
        start = Some(offset.address);
    }
    start
}

/// Emits the iNES header facts the tracer never consults but a complete
/// listing still records: mapper, mirroring, battery/trainer presence,
/// PRG-RAM and television-system flags, all forwarded unchanged.
fn render_rom_meta_comment(out: &mut String, meta: &RomMeta) {
    let video = match meta.video_format {
        VideoFormat::Ntsc => "NTSC",
        VideoFormat::Pal => "PAL",
    };
    let _ = writeln!(
        out,
        "; mapper {} ; mirroring {:?} ; battery {} ; trainer {} ; prg-ram {} ; {video}",
        meta.mapper,
        meta.mirroring,
        meta.battery_backed,
        meta.trainer_present,
        meta.prg_ram_present,
    );
}

/// Emits a `name = $addr` declaration for every constant and variable the
/// tracer actually referenced, sorted by address for deterministic output.
fn render_symbol_declarations(out: &mut String, syntax: &dyn Syntax, symbols: &SymbolTables) {
    let mut lines: Vec<(u16, String)> = Vec::new();
    for (addr, names) in symbols.used_constants() {
        if let Some(name) = names.read.or(names.write) {
            lines.push((addr, syntax.constant_directive(name, addr)));
        }
        if let (Some(read), Some(write)) = (names.read, names.write) {
            if read != write {
                lines.push((addr, syntax.constant_directive(write, addr)));
            }
        }
    }
    for (addr, name) in symbols.used_variables() {
        lines.push((addr, syntax.constant_directive(name, addr)));
    }
    if lines.is_empty() {
        return;
    }
    lines.sort_by_key(|(addr, _)| *addr);
    lines.dedup();
    for (_, line) in &lines {
        let _ = writeln!(out, "{line}");
    }
    out.push('\n');
}

/// Emits the fixed NMI/RESET/IRQ vector words at the tail of the image,
/// referencing the finalised handler labels (or the literal `"0"` for an
/// unused vector) rather than the raw bytes the finaliser's data sweep
/// would otherwise have left them as.
fn render_vectors(out: &mut String, syntax: &dyn Syntax, symbols: &SymbolTables, start: u16) {
    if let Some(header) = syntax.segment_header("VECTORS") {
        let _ = writeln!(out, "{header}");
    } else {
        let _ = writeln!(out, "{}", syntax.origin(start));
    }
    let _ = writeln!(
        out,
        "    {} {}, {}, {}",
        syntax.word_directive(),
        symbols.handlers.nmi,
        symbols.handlers.reset,
        symbols.handlers.irq,
    );
}

/// Appends an inline `; ...` comment built from an explicit comment
/// string (if any) and, per `opts.comment_verbosity`, a synthesized
/// address/provenance annotation.
fn write_comment(out: &mut String, explicit: &str, offset: &Offset, opts: &EmitOptions) {
    let mut parts: Vec<String> = Vec::new();
    if !explicit.is_empty() {
        parts.push(explicit.to_string());
    }
    if opts.comment_verbosity >= 1 {
        let mut addr_comment = format!("{:#06x}", offset.address);
        if opts.comment_verbosity >= 2 && !offset.inbound_branches.is_empty() {
            let refs: Vec<String> = offset
                .inbound_branches
                .iter()
                .map(|b| format!("{:#06x} ({})", b.from, reference_kind_name(b.kind)))
                .collect();
            let _ = write!(addr_comment, " <- {}", refs.join(", "));
        }
        parts.push(addr_comment);
    }
    if !parts.is_empty() {
        let _ = write!(out, " ; {}", parts.join(" -- "));
    }
}

fn reference_kind_name(kind: crate::offsets::ReferenceKind) -> &'static str {
    use crate::offsets::ReferenceKind;
    match kind {
        ReferenceKind::Branch => "branch",
        ReferenceKind::Call => "call",
        ReferenceKind::Jump => "jump",
        ReferenceKind::JumpTableEntry => "jump table",
    }
}

fn flush_data_run(out: &mut String, syntax: &dyn Syntax, run: &mut Vec<u8>, start: &mut Option<u16>) {
    if run.is_empty() {
        return;
    }
    render_data_bytes(out, syntax, run);
    run.clear();
    *start = None;
}

fn render_data_bytes(out: &mut String, syntax: &dyn Syntax, bytes: &[u8]) {
    let rendered: Vec<String> = bytes.iter().map(|b| format!("${b:02x}")).collect();
    let _ = writeln!(out, "    {} {}", syntax.byte_directive(), rendered.join(", "));
}

fn render_word(out: &mut String, syntax: &dyn Syntax, store: &Store, offset: &Offset, opts: &EmitOptions) {
    let target = u16::from_le_bytes([offset.bytes[0], offset.bytes[1]]);
    let operand = resolve_operand(store, None, target);
    let mut line = format!("    {} {}", syntax.word_directive(), operand);
    write_comment(&mut line, "", offset, opts);
    let _ = writeln!(out, "{line}");
}

fn render_instruction(
    out: &mut String,
    syntax: &dyn Syntax,
    store: &Store,
    symbols: &SymbolTables,
    offset: &Offset,
    opts: &EmitOptions,
) {
    let mode = offset.mode.unwrap_or(AddressingMode::Implied);
    let operand = format_operand(syntax, store, symbols, mode, offset);
    let mut line = String::from("    ");
    line.push_str(&offset.code.to_lowercase());
    if !operand.is_empty() {
        line.push(' ');
        line.push_str(&operand);
    }
    write_comment(&mut line, &offset.comment, offset, opts);
    let _ = writeln!(out, "{line}");
}

fn format_operand(
    syntax: &dyn Syntax,
    store: &Store,
    symbols: &SymbolTables,
    mode: AddressingMode,
    offset: &Offset,
) -> String {
    let imm = offset.bytes.get(1).copied();
    match mode {
        AddressingMode::Implied => String::new(),
        AddressingMode::Accumulator => syntax.accumulator_operand().unwrap_or("").to_string(),
        AddressingMode::Immediate => format!("#${:02x}", imm.unwrap_or(0)),
        AddressingMode::ZeroPage => resolve_operand(store, Some((symbols, offset)), offset.operand_address.unwrap_or(0)),
        AddressingMode::ZeroPageX => {
            format!("{},x", resolve_operand(store, Some((symbols, offset)), offset.operand_address.unwrap_or(0)))
        }
        AddressingMode::ZeroPageY => {
            format!("{},y", resolve_operand(store, Some((symbols, offset)), offset.operand_address.unwrap_or(0)))
        }
        AddressingMode::Absolute | AddressingMode::Relative => {
            resolve_operand(store, Some((symbols, offset)), offset.operand_address.unwrap_or(0))
        }
        AddressingMode::AbsoluteX => {
            format!("{},x", resolve_operand(store, Some((symbols, offset)), offset.operand_address.unwrap_or(0)))
        }
        AddressingMode::AbsoluteY => {
            format!("{},y", resolve_operand(store, Some((symbols, offset)), offset.operand_address.unwrap_or(0)))
        }
        AddressingMode::Indirect => {
            format!("({})", resolve_operand(store, Some((symbols, offset)), offset.operand_address.unwrap_or(0)))
        }
        AddressingMode::IndirectX => {
            format!("(${:02x},x)", offset.operand_address.unwrap_or(0))
        }
        AddressingMode::IndirectY => {
            format!("(${:02x}),y", offset.operand_address.unwrap_or(0))
        }
    }
}

/// Resolves an address to the text an operand should print: a store
/// label if one was attached, a known register/variable symbol name
/// failing that, or a bare hex literal.
fn resolve_operand(store: &Store, symbols: Option<(&SymbolTables, &Offset)>, addr: u16) -> String {
    if let Some(label) = store.get(addr).map(|o| &o.label).filter(|l| !l.is_empty()) {
        return label.clone();
    }
    if let Some((symbols, offset)) = symbols {
        let is_store = matches!(offset.code.as_str(), "STA" | "STX" | "STY");
        if let Some(names) = symbols.lookup(addr) {
            let name = if is_store {
                names.write.or(names.read)
            } else {
                names.read.or(names.write)
            };
            if let Some(name) = name {
                return name.to_string();
            }
        }
        if let Some(var) = symbols.existing_variable_name(addr) {
            return var.to_string();
        }
    }
    if addr <= 0xFF {
        format!("${addr:02x}")
    } else {
        format!("${addr:04x}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finalize::Checksums;
    use crate::memory::MemoryView;
    use crate::offsets::Store;
    use crate::symbols::SymbolTables;

    fn image(store: Store) -> FinalizedImage {
        let prg = vec![0u8; store.len()];
        let memory = MemoryView::new(&prg, store.code_base());
        FinalizedImage {
            checksums: Checksums::compute(memory.as_slice(), &[]),
            symbols: SymbolTables::new().unwrap(),
            store,
        }
    }

    #[test]
    fn renders_a_labeled_instruction_in_each_dialect() {
        let mut store = Store::new(0x8000, 3);
        store.attach_label(0x8000, "Reset");
        store.set_instruction(
            0x8000,
            vec![0x4C, 0x00, 0x80],
            "JMP",
            AddressingMode::Absolute,
            Some(0x8000),
        );
        store.set_type(0x8000, OffsetFlags::CODE);
        store.set_type(0x8001, OffsetFlags::CODE);
        store.set_type(0x8002, OffsetFlags::CODE);

        let opts = EmitOptions {
            comment_verbosity: 0,
            trim_zero_bytes: false,
            ..EmitOptions::default()
        };
        for dialect in [OutputDialect::asm6(), OutputDialect::ca65(), OutputDialect::nesasm()] {
            let text = render(&image(store.clone()), dialect, opts);
            assert!(text.contains("Reset:"));
            assert!(text.contains("jmp Reset"));
        }
    }

    #[test]
    fn comment_verbosity_zero_omits_address_comments() {
        let mut store = Store::new(0x8000, 1);
        store.set_type(0x8000, OffsetFlags::DATA_OFFSET);
        store.set_bytes_and_code(0x8000, vec![0x00], String::new());
        let opts = EmitOptions {
            comment_verbosity: 0,
            trim_zero_bytes: false,
            ..EmitOptions::default()
        };
        let text = render(&image(store), OutputDialect::ca65(), opts);
        assert!(!text.contains("0x8000"));
    }

    #[test]
    fn trims_trailing_zero_run_into_fill_directive() {
        let mut store = Store::new(0x8000, 4);
        for addr in 0x8000u16..0x8004 {
            store.set_type(addr, OffsetFlags::DATA_OFFSET);
            store.set_bytes_and_code(addr, vec![0x00], String::new());
        }
        let opts = EmitOptions {
            comment_verbosity: 0,
            trim_zero_bytes: true,
            ..EmitOptions::default()
        };
        let text = render(&image(store), OutputDialect::ca65(), opts);
        assert!(text.contains(".res 4"));
    }

    #[test]
    fn emits_vector_words_using_handler_labels_not_raw_bytes() {
        let mut store = Store::new(0x8000, 6);
        store.attach_label(0x8000, "Reset");
        store.set_type(0x8000, OffsetFlags::DATA_OFFSET);
        store.set_bytes_and_code(0x8000, vec![0x00], String::new());
        for addr in 0x8001u16..0x8006 {
            store.set_type(addr, OffsetFlags::DATA_OFFSET);
            store.set_bytes_and_code(addr, vec![0x00], String::new());
        }
        let mut img = image(store);
        img.symbols.handlers.reset = "Reset".to_string();
        let text = render(&img, OutputDialect::ca65(), EmitOptions::default());
        assert!(text.contains(".segment \"VECTORS\""));
        assert!(text.contains(".word 0, Reset, 0"));
    }

    #[test]
    fn emits_used_constant_declarations() {
        let mut store = Store::new(0x8000, 3);
        store.set_instruction(
            0x8000,
            vec![0xAD, 0x02, 0x20],
            "LDA",
            AddressingMode::Absolute,
            Some(0x2002),
        );
        store.set_type(0x8000, OffsetFlags::CODE);
        store.set_type(0x8001, OffsetFlags::CODE);
        store.set_type(0x8002, OffsetFlags::CODE);
        let mut img = image(store);
        img.symbols.lookup_face(0x2002, true, false);
        let text = render(&img, OutputDialect::ca65(), EmitOptions::default());
        assert!(text.contains("PPUSTATUS = $2002"));
    }

    #[test]
    fn emits_rom_meta_header_comment_when_present() {
        let store = Store::new(0x8000, 1);
        let opts = EmitOptions {
            rom_meta: Some(crate::ines::RomMeta {
                mapper: 1,
                mirroring: crate::ines::Mirroring::Vertical,
                battery_backed: true,
                trainer_present: false,
                prg_ram_present: true,
                video_format: VideoFormat::Ntsc,
            }),
            ..EmitOptions::default()
        };
        let text = render(&image(store), OutputDialect::ca65(), opts);
        assert!(text.contains("mapper 1"));
        assert!(text.contains("NTSC"));
    }
}
