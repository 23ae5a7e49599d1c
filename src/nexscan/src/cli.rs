// nexscan/src/cli.rs

//! Command-line front end: read a NEXUS file, scan it, print the result.

use crate::scanner::{ScanOptions, Scanned, Scanner, SEPARATOR};
use crate::statements::split_statements;
use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "nexscan")]
#[command(about = "Strip comments from NEXUS files and split them into statements", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Input file ("-" or omitted reads stdin)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Reject '[' inside special [&...] comments
    #[arg(long)]
    pub strict: bool,

    /// Print one statement per line instead of the cleaned text
    #[arg(long)]
    pub statements: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    pub fn scan_options(&self) -> ScanOptions {
        if self.strict {
            ScanOptions::strict()
        } else {
            ScanOptions::default()
        }
    }

    fn input_name(&self) -> String {
        match self.input.as_deref() {
            Some(path) if path != Path::new("-") => path.display().to_string(),
            _ => "<stdin>".to_string(),
        }
    }
}

/// Read the whole input, from stdin when `path` is `None` or `-`.
pub fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs_err::read_to_string(path)
            .context(format!("Error reading {} to string.", path.display())),
        _ => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Error reading stdin.")?;
            Ok(content)
        }
    }
}

/// Format a scan result for output.
pub fn render(scanned: &Scanned, statements: bool, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text if statements => {
            let mut out = String::new();
            for statement in split_statements(&scanned.text) {
                out.push_str(statement);
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Text => Ok(scanned.text.replace(SEPARATOR, ";\n")),
        OutputFormat::Json => render_json(scanned, statements),
    }
}

#[cfg(feature = "json")]
fn render_json(scanned: &Scanned, statements: bool) -> anyhow::Result<String> {
    let json = if statements {
        let statements: Vec<&str> = split_statements(&scanned.text).collect();
        serde_json::to_string_pretty(&statements)?
    } else {
        crate::to_json(scanned)?
    };
    Ok(json)
}

#[cfg(not(feature = "json"))]
fn render_json(_scanned: &Scanned, _statements: bool) -> anyhow::Result<String> {
    anyhow::bail!("JSON output requires nexscan to be built with the `json` feature")
}

/// Run the command described by `cli`.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let content = read_input(cli.input.as_deref())?;
    let scanned = Scanner::new()
        .with_options(cli.scan_options())
        .scan_with_diagnostics(&content)
        .context(format!("Malformed NEXUS input: {}", cli.input_name()))?;

    let rendered = render(&scanned, cli.statements, cli.format)?;
    match &cli.output {
        Some(path) => fs_err::write(path, rendered)
            .context(format!("Error writing {}.", path.display()))?,
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(rendered.as_bytes())?;
            handle.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn test_parse_arguments() {
        let cli = Cli::parse_from(["nexscan", "trees.nex", "--strict", "--statements"]);
        assert_eq!(cli.input, Some(PathBuf::from("trees.nex")));
        assert!(cli.scan_options().is_strict());
        assert!(cli.statements);
        assert_eq!(cli.format, OutputFormat::Text);

        let cli = Cli::parse_from(["nexscan"]);
        assert_eq!(cli.input, None);
        assert!(!cli.scan_options().is_strict());
        assert_eq!(cli.input_name(), "<stdin>");
    }

    #[test]
    fn test_read_input_from_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("input.nex");
        fs_err::write(&path, "begin taxa; end;")?;

        assert_eq!(read_input(Some(path.as_path()))?, "begin taxa; end;");
        assert!(read_input(Some(dir.path().join("missing.nex").as_path())).is_err());
        Ok(())
    }

    #[test]
    fn test_render_text() -> anyhow::Result<()> {
        let scanned = Scanner::new().scan_with_diagnostics("begin taxa; [x] end;")?;

        assert_eq!(
            render(&scanned, false, OutputFormat::Text)?,
            "begin taxa;\n  end;\n"
        );
        assert_eq!(
            render(&scanned, true, OutputFormat::Text)?,
            "begin taxa\nend\n"
        );
        Ok(())
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_render_json_statements() -> anyhow::Result<()> {
        let scanned = Scanner::new().scan_with_diagnostics("a; b;")?;
        let json = render(&scanned, true, OutputFormat::Json)?;
        let statements: Vec<String> = serde_json::from_str(&json)?;
        assert_eq!(statements, vec!["a", "b"]);
        Ok(())
    }

    #[test]
    fn test_run_writes_output_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("input.nex");
        let output = dir.path().join("out.txt");
        fs_err::write(&input, "#NEXUS [written by hand]\nbegin trees;\n")?;

        let cli = Cli::parse_from([
            OsStr::new("nexscan"),
            input.as_os_str(),
            OsStr::new("--statements"),
            OsStr::new("-o"),
            output.as_os_str(),
        ]);
        run(&cli)?;

        assert_eq!(fs_err::read_to_string(&output)?, "#NEXUS \nbegin trees\n");
        Ok(())
    }

    #[test]
    fn test_run_keeps_warnings_out_of_output() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("open_quote.nex");
        let output = dir.path().join("out.txt");
        fs_err::write(&input, "taxlabels 'never closed;")?;

        let cli = Cli::parse_from([
            OsStr::new("nexscan"),
            input.as_os_str(),
            OsStr::new("-o"),
            output.as_os_str(),
        ]);
        run(&cli)?;

        // Warnings go to the log only; the output holds just the scanned text
        assert_eq!(
            fs_err::read_to_string(&output)?,
            "taxlabels 'never closed;"
        );
        Ok(())
    }

    #[test]
    fn test_run_reports_malformed_input() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("bad.nex");
        fs_err::write(&input, "begin taxa; [never closed")?;

        let cli = Cli::parse_from([OsStr::new("nexscan"), input.as_os_str()]);
        let err = run(&cli).unwrap_err();
        assert!(err.to_string().contains("Malformed NEXUS input"));
        Ok(())
    }
}
