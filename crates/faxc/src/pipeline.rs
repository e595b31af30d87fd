//! Pipeline orchestration (spec §5, §7): read the source file, run it
//! through lex → strip whitespace → parse → analyze → emit in strict
//! forward order, and write the result. Fails fast at the first error
//! raised by any stage.

use crate::config::Config;
use crate::error::FaxError;
use anyhow::Context;
use log::{debug, info, warn};

pub fn run(config: &Config) -> Result<(), FaxError> {
    info!("reading {}", config.input_path.display());
    let source = std::fs::read_to_string(&config.input_path)
        .with_context(|| format!("while reading '{}'", config.input_path.display()))?;

    debug!("lexing {} bytes", source.len());
    let tokens = fax_lex::strip_whitespace(fax_lex::tokenize(&source)?);
    info!("produced {} tokens", tokens.len());

    debug!("parsing");
    let program = fax_par::parse(tokens)?;
    info!("parsed {} top-level lines", program.lines.len());

    debug!("analyzing");
    let (symbols, handler) = fax_sem::analyze(&program)?;
    info!("resolved {} symbols", symbols.len());
    for diagnostic in handler.diagnostics() {
        warn!("{diagnostic}");
    }

    debug!("emitting");
    let emitted = fax_gen::emit(&program)?;
    info!("emitted {} lines", emitted.lines().count());

    std::fs::write(&config.output_path, emitted)
        .with_context(|| format!("while writing '{}'", config.output_path.display()))?;
    println!(
        "compiled {} -> {}",
        config.input_path.display(),
        config.output_path.display()
    );

    Ok(())
}
