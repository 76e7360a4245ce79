//! Build script: compile the generated Hare parser.
//!
//! Sources are looked up in `$TREE_SITTER_HARE_SRC` first and then in
//! `grammar/src`, which holds the output of `tree-sitter generate` run over
//! `grammar/grammar.js`.

use std::{env, path::PathBuf};

use hare_build_util::{SOURCE_OVERRIDE_VAR, locate_parser_sources};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-env-changed={SOURCE_OVERRIDE_VAR}");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let override_dir = env::var_os(SOURCE_OVERRIDE_VAR).map(PathBuf::from);

    let mut warnings = Vec::new();
    let sources = locate_parser_sources(&manifest_dir, override_dir.as_deref(), &mut warnings);
    for warning in &warnings {
        println!("cargo:warning={warning}");
    }

    let sources = sources.ok_or(
        "generated Hare parser not found; run `tree-sitter generate` in grammar/ or set \
         TREE_SITTER_HARE_SRC",
    )?;

    let mut build = cc::Build::new();
    build
        .std("c11")
        .include(sources.src_dir())
        .warnings(false)
        .flag_if_supported("-Wno-unused-parameter")
        .flag_if_supported("-Wno-unused-but-set-variable")
        .flag_if_supported("-Wno-trigraphs");

    #[cfg(target_env = "msvc")]
    build.flag("-utf-8");

    println!("cargo:rerun-if-changed={}", sources.parser().display());
    build.file(sources.parser());
    if let Some(scanner) = sources.scanner() {
        println!("cargo:rerun-if-changed={}", scanner.display());
        build.file(scanner);
    }

    build.compile("tree-sitter-hare");
    Ok(())
}
