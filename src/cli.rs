//! Command-line driver for batch parsing.
use anyhow::Context;
use colored::Colorize;
use hhp_parser::Batch;
use hhp_parser::Parser;
use hhp_parser::Patterns;
use hhp_parser::Report;
use hhp_records::RawHand;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Hand history files, or directories of them (one level deep).
    #[arg(required = true)]
    paths: Vec<PathBuf>,
    /// Print every accepted hand to stdout as one JSON object per line.
    #[arg(long)]
    json: bool,
    /// Worker threads; defaults to the number of logical CPUs.
    #[arg(long)]
    threads: Option<usize>,
    /// Extra regex for gap lines that may be dropped silently. Repeatable.
    #[arg(long = "ignore", value_name = "REGEX")]
    ignore: Vec<String>,
    /// Log every hand, not just rejections.
    #[arg(long, short)]
    verbose: bool,
}

impl Args {
    /// Parses everything named on the command line. `Ok(false)` means at
    /// least one hand was rejected.
    pub fn run(self) -> anyhow::Result<bool> {
        hhp_core::log(match self.verbose {
            true => log::LevelFilter::Debug,
            false => log::LevelFilter::Warn,
        })?;
        rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads.unwrap_or_else(num_cpus::get))
            .build_global()
            .context("thread pool")?;
        let patterns = Patterns::new()?.with_ignorable(&self.ignore)?;
        let hands = self.read(&patterns)?;
        log::info!("read {} hands from {} paths", hands.len(), self.paths.len());
        let report = Batch::new(&patterns).run(hands);
        if self.json {
            self.dump(&report)?;
        }
        self.summarize(&report);
        Ok(report.is_clean())
    }

    fn read(&self, patterns: &Patterns) -> anyhow::Result<Vec<RawHand>> {
        let parser = Parser::new(patterns);
        let mut hands = Vec::new();
        for path in self.files()? {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            hands.extend(parser.blocks(&path.display().to_string(), &text));
        }
        Ok(hands)
    }

    fn files(&self) -> anyhow::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for path in self.paths.iter() {
            if path.is_dir() {
                files.extend(Self::listing(path)?);
            } else {
                files.push(path.clone());
            }
        }
        Ok(files)
    }

    fn listing(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
        let mut files = std::fs::read_dir(dir)
            .with_context(|| format!("listing {}", dir.display()))?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect::<Vec<PathBuf>>();
        files.sort();
        Ok(files)
    }

    fn dump(&self, report: &Report) -> anyhow::Result<()> {
        let ref mut out = std::io::BufWriter::new(std::io::stdout().lock());
        for hand in report.hands() {
            serde_json::to_writer(&mut *out, hand)?;
            writeln!(out)?;
        }
        out.flush()?;
        Ok(())
    }

    fn summarize(&self, report: &Report) {
        for failure in report.failures() {
            eprintln!("{} {}", "REJECT".red(), failure);
        }
        let line = format!(
            "{} hands: {} full, {} partial, {} rejected",
            report.total(),
            report.full(),
            report.partial(),
            report.failures().len()
        );
        if report.is_clean() {
            eprintln!("{}", line.green());
        } else {
            eprintln!("{}", line.yellow());
        }
        for (reason, count) in report.rejected() {
            eprintln!("  {:<26}{:>6}", reason.to_string(), count);
        }
    }
}
