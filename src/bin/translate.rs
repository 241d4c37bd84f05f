//! Message-catalog maintenance for translators.
//!
//! Wraps the gettext tooling the same way the usual `makefile` targets
//! would: `update` re-extracts strings and merges them into every
//! existing catalog, `compile` produces the binary catalogs, and
//! `init <lang>` seeds a new language. Any non-zero exit of the
//! underlying tool aborts the run.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

const POT_FILE: &str = "po/messages.pot";
const PO_DIR: &str = "po";

fn main() {
    if let Err(e) = run() {
        eprintln!("translate: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);

    match args.next().as_deref() {
        Some("update") => update(),
        Some("compile") => compile(),
        Some("init") => {
            let lang = args
                .next()
                .context("usage: translate init <lang>")?;
            init(&lang)
        }
        _ => {
            eprintln!("usage: translate <update|compile|init <lang>>");
            std::process::exit(2);
        }
    }
}

/// Re-extract translatable strings and merge them into every catalog.
fn update() -> Result<()> {
    extract()?;

    for po in po_files()? {
        run_tool(
            Command::new("msgmerge")
                .arg("--update")
                .arg(&po)
                .arg(POT_FILE),
            "msgmerge",
        )?;
        println!("updated {}", po.display());
    }

    fs::remove_file(POT_FILE).context("failed to remove messages.pot")?;
    Ok(())
}

/// Compile every catalog into `po/mo/<lang>/LC_MESSAGES/microblog.mo`.
fn compile() -> Result<()> {
    for po in po_files()? {
        let lang = po
            .file_stem()
            .and_then(|s| s.to_str())
            .context("catalog file without a language stem")?
            .to_string();

        let out_dir = PathBuf::from(PO_DIR).join("mo").join(&lang).join("LC_MESSAGES");
        fs::create_dir_all(&out_dir)
            .with_context(|| format!("failed to create {}", out_dir.display()))?;

        let out_file = out_dir.join("microblog.mo");
        run_tool(
            Command::new("msgfmt").arg("-o").arg(&out_file).arg(&po),
            "msgfmt",
        )?;
        println!("compiled {}", out_file.display());
    }

    Ok(())
}

/// Extract strings and seed a new language catalog.
fn init(lang: &str) -> Result<()> {
    extract()?;

    let po_file = PathBuf::from(PO_DIR).join(format!("{lang}.po"));
    run_tool(
        Command::new("msginit")
            .arg("--no-translator")
            .arg("--input")
            .arg(POT_FILE)
            .arg("--locale")
            .arg(lang)
            .arg("--output")
            .arg(&po_file),
        "msginit",
    )?;
    println!("initialized {}", po_file.display());

    fs::remove_file(POT_FILE).context("failed to remove messages.pot")?;
    Ok(())
}

/// Run `xtr` over the crate root to produce the template catalog.
fn extract() -> Result<()> {
    fs::create_dir_all(PO_DIR).context("failed to create po directory")?;

    run_tool(
        Command::new("xtr")
            .arg("--output")
            .arg(POT_FILE)
            .arg("src/main.rs"),
        "xtr",
    )
}

fn po_files() -> Result<Vec<PathBuf>> {
    let dir = Path::new(PO_DIR);
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .context("failed to read po directory")?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("po"))
        .collect();
    files.sort();
    Ok(files)
}

fn run_tool(cmd: &mut Command, name: &str) -> Result<()> {
    let status = cmd
        .status()
        .with_context(|| format!("failed to spawn {name}; is it installed?"))?;

    if !status.success() {
        bail!("{name} exited with {status}");
    }
    Ok(())
}
