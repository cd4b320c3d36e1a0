//! Process-level surface (spec.md §6): argument parsing, logging setup,
//! batch globbing and the optional assemble-and-compare verification
//! pass. Everything here is a collaborator around the core, not part of
//! it -- `crate::engine::Engine` has no idea any of this exists.

use std::fmt::Write as _;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::process::Command;

use clap::{Parser, ValueEnum};

use crate::codedatalog::CodeDataLog;
use crate::dialect::{EmitOptions, OutputDialect};
use crate::engine::Engine;
use crate::ines::{self, RomImage};

/// The boundary error type shown to the user: wraps collaborator
/// failures (I/O, container parsing, external assembler invocation)
/// alongside whatever the core itself could report.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("loading {path}: {source}")]
    Container {
        path: PathBuf,
        #[source]
        source: ines::Error,
    },
    #[error("{0}")]
    Core(#[from] crate::error::Error),
    #[error("{0}")]
    Glob(#[from] glob::PatternError),
    #[error("no input files matched mask {mask:?} under {dir}")]
    NoMatches { dir: PathBuf, mask: String },
    #[error("verification: failed to spawn {assembler:?}: {source}")]
    VerifySpawn {
        assembler: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("verification: {assembler:?} exited with status {status}")]
    VerifyAssembleFailed {
        assembler: PathBuf,
        status: std::process::ExitStatus,
    },
    #[error("verification: output differs from input at PRG offset {offset:#06x}")]
    VerificationMismatch { offset: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lower")]
pub enum DialectArg {
    Asm6,
    Ca65,
    Nesasm,
}

impl From<DialectArg> for OutputDialect {
    fn from(value: DialectArg) -> Self {
        match value {
            DialectArg::Asm6 => OutputDialect::asm6(),
            DialectArg::Ca65 => OutputDialect::ca65(),
            DialectArg::Nesasm => OutputDialect::nesasm(),
        }
    }
}

/// `nesdisasm [OPTIONS] <INPUT>` -- see spec.md §6 / SPEC_FULL.md E4.
#[derive(Debug, Parser)]
#[command(name = "nesdisasm", about = "Tracing disassembler for 6502/NES program images")]
pub struct Args {
    /// Path to an iNES (`.nes`) file, or a directory when `--mask` is given.
    pub input: PathBuf,

    /// Output listing path; stdout if omitted (ignored in batch mode).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output assembler dialect.
    #[arg(long, value_enum, default_value = "ca65")]
    pub dialect: DialectArg,

    /// Batch mode: `input` is a directory, `mask` a glob within it.
    #[arg(long)]
    pub mask: Option<String>,

    /// Optional code/data-log hint file (component H).
    #[arg(long)]
    pub code_data_log: Option<PathBuf>,

    /// 0 = none, 1 = minimal (addresses only), 2 = full (+ inbound-branch provenance).
    #[arg(long, default_value_t = 1)]
    pub comment_verbosity: u8,

    /// Replace trailing zero-filled data runs with a fill directive.
    #[arg(long)]
    pub trim_zero_bytes: bool,

    /// Raise logging to debug.
    #[arg(short, long)]
    pub debug: bool,

    /// Lower logging to error only.
    #[arg(short, long)]
    pub quiet: bool,

    /// Assemble the emitted listing with this assembler and byte-compare
    /// the result against the input image.
    #[arg(long)]
    pub verify: Option<PathBuf>,

    /// Treat `input` as a headerless PRG blob rather than an iNES file.
    #[arg(long)]
    pub raw: bool,

    /// Code-base address for `--raw` input; defaults to `0x10000 - len(prg)`.
    #[arg(long, value_parser = parse_hex_or_dec)]
    pub code_base: Option<u16>,
}

fn parse_hex_or_dec(s: &str) -> Result<u16, std::num::ParseIntError> {
    match s.strip_prefix("0x").or_else(|| s.strip_prefix('$')) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => s.parse(),
    }
}

/// Top-level entry point the binary calls. Returns the process exit code
/// spec.md §6 specifies: 0 success, 1 fatal error (clap itself uses 2 for
/// usage errors, before this function ever runs).
pub fn run(args: Args) -> Result<i32, Error> {
    init_logging(&args);

    if let Some(mask) = &args.mask {
        return run_batch(&args, mask);
    }

    let prg_src = fs::read(&args.input).map_err(|source| Error::Io {
        path: args.input.clone(),
        source,
    })?;
    disassemble_one(&args, &prg_src, args.output.as_deref())?;
    Ok(0)
}

fn run_batch(args: &Args, mask: &str) -> Result<i32, Error> {
    let pattern = args.input.join(mask);
    let pattern_str = pattern.to_string_lossy().into_owned();
    let mut matched = 0usize;
    for entry in glob::glob(&pattern_str)? {
        let path = entry.map_err(|e| Error::Io {
            path: e.path().to_path_buf(),
            source: e.into_error(),
        })?;
        let data = fs::read(&path).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;
        let out_path = match &args.output {
            Some(dir) if dir.is_dir() => dir.join(sibling_asm_name(&path)),
            Some(dir) => dir.clone(),
            None => path.with_extension("asm"),
        };
        disassemble_one(args, &data, Some(&out_path))?;
        matched += 1;
    }
    if matched == 0 {
        return Err(Error::NoMatches {
            dir: args.input.clone(),
            mask: mask.to_string(),
        });
    }
    Ok(0)
}

fn sibling_asm_name(path: &Path) -> PathBuf {
    path.file_name()
        .map(|name| {
            let mut name = name.to_os_string();
            name.push(".asm");
            PathBuf::from(name)
        })
        .unwrap_or_else(|| PathBuf::from("out.asm"))
}

fn disassemble_one(args: &Args, data: &[u8], output: Option<&Path>) -> Result<(), Error> {
    let rom = load_image(args, data)?;
    let code_base = args.code_base.unwrap_or_else(|| rom.code_base());

    let mut engine = Engine::new(&rom.prg, code_base)?;

    if let Some(cdl_path) = &args.code_data_log {
        let raw = fs::read(cdl_path).map_err(|source| Error::Io {
            path: cdl_path.clone(),
            source,
        })?;
        match CodeDataLog::parse(&raw, rom.prg.len()) {
            Ok(log) => engine.ingest_code_data_log(&log),
            Err(e) => log::warn!("code/data log ignored: {e}"),
        }
    }

    engine.trace();
    let image = engine.finalize(&rom.chr);

    let opts = EmitOptions {
        comment_verbosity: args.comment_verbosity,
        trim_zero_bytes: args.trim_zero_bytes,
        rom_meta: (!args.raw).then_some(rom.meta),
    };
    let text = crate::dialect::render(&image, args.dialect.into(), opts);

    if let Some(assembler) = &args.verify {
        verify(assembler, &text, &rom.prg, &rom.chr)?;
    }

    match output {
        Some(path) => fs::write(path, text).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?,
        None => {
            let _ = std::io::stdout().write_all(text.as_bytes());
        }
    }
    Ok(())
}

fn load_image(args: &Args, data: &[u8]) -> Result<RomImage, Error> {
    if args.raw {
        return Ok(RomImage {
            prg: data.to_vec(),
            chr: Vec::new(),
            meta: ines::RomMeta {
                mapper: 0,
                mirroring: ines::Mirroring::Horizontal,
                battery_backed: false,
                trainer_present: false,
                prg_ram_present: false,
                video_format: ines::VideoFormat::Ntsc,
            },
        });
    }
    RomImage::parse(data).map_err(|source| Error::Container {
        path: args.input.clone(),
        source,
    })
}

fn init_logging(args: &Args) {
    let level = if args.debug {
        "debug"
    } else if args.quiet {
        "error"
    } else {
        "info"
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .try_init();
}

/// Assembles `listing` with `assembler` in a scratch directory and
/// byte-compares its output against the input PRG/CHR. This is
/// deliberately outside the core (spec.md §4.G.5's "hand the frozen
/// model to the external emission dialect" ends the core's job); the
/// core's own round-trip properties are checked by the crate's tests
/// without invoking an external process.
fn verify(assembler: &Path, listing: &str, prg: &[u8], _chr: &[u8]) -> Result<(), Error> {
    let dir = tempfile::tempdir().map_err(|source| Error::Io {
        path: PathBuf::from("<tempdir>"),
        source,
    })?;
    let src_path = dir.path().join("out.asm");
    let bin_path = dir.path().join("out.bin");
    fs::write(&src_path, listing).map_err(|source| Error::Io {
        path: src_path.clone(),
        source,
    })?;

    let status = Command::new(assembler)
        .arg(&src_path)
        .arg("-o")
        .arg(&bin_path)
        .current_dir(dir.path())
        .status()
        .map_err(|source| Error::VerifySpawn {
            assembler: assembler.to_path_buf(),
            source,
        })?;
    if !status.success() {
        return Err(Error::VerifyAssembleFailed {
            assembler: assembler.to_path_buf(),
            status,
        });
    }

    let produced = fs::read(&bin_path).map_err(|source| Error::Io {
        path: bin_path.clone(),
        source,
    })?;
    for (i, (a, b)) in prg.iter().zip(produced.iter()).enumerate() {
        if a != b {
            return Err(Error::VerificationMismatch { offset: i });
        }
    }
    if produced.len() != prg.len() {
        return Err(Error::VerificationMismatch {
            offset: prg.len().min(produced.len()),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_and_decimal_code_base() {
        assert_eq!(parse_hex_or_dec("0x8000").unwrap(), 0x8000);
        assert_eq!(parse_hex_or_dec("$8000").unwrap(), 0x8000);
        assert_eq!(parse_hex_or_dec("32768").unwrap(), 0x8000);
    }

    #[test]
    fn sibling_asm_name_replaces_extension() {
        assert_eq!(sibling_asm_name(Path::new("/tmp/game.nes")), PathBuf::from("game.nes.asm"));
    }

    #[test]
    fn dialect_arg_maps_to_output_dialect() {
        let _: OutputDialect = DialectArg::Asm6.into();
        let _: OutputDialect = DialectArg::Ca65.into();
        let _: OutputDialect = DialectArg::Nesasm.into();
    }
}
