// src/app.rs
use std::{
    io::{self, Write},
    ops::Range,
    path::Path,
    process::ExitCode,
};

use anyhow::{Context, Result, bail};
use livecount_infra::{FileDocuments, FileReader, LogNotifier, MemoryDocuments, StderrNotifier};
use livecount_ports::{DocumentSource, Notifier};
use livecount_shared_kernel::DocumentId;
use livecount_usecase::WordCounter;

use crate::{
    cli::{self, Args},
    presentation::{OutputFormat, Report, write_report},
    replay::{self, EditBatch},
};

const STDIN_NAME: &str = "<stdin>";

/// Where reports go and which selections they include.
struct Session<'w, W: Write> {
    out: &'w mut W,
    format: OutputFormat,
    selections: Vec<Range<usize>>,
    failures: usize,
}

impl<W: Write> Session<'_, W> {
    fn report(
        &mut self,
        counter: &mut WordCounter<'_>,
        id: &DocumentId,
        source: &dyn DocumentSource,
        batch: Option<usize>,
    ) -> Result<()> {
        let document = counter.document_statistic(id, source)?;
        let selection = counter.selection_statistic(id, &self.selections, source)?;
        let report = Report {
            name: id.to_string(),
            batch,
            count: counter.config().count_mode,
            document,
            selection,
        };
        write_report(&mut *self.out, &report, self.format).context("failed to write report")
    }
}

pub fn run(args: Args) -> Result<ExitCode> {
    let options = cli::load_options(&args.counting).context("failed to load configuration")?;
    let notifier = notifier(args.output.quiet);
    let mut counter = WordCounter::from_options(&options, notifier.as_ref()).context("invalid configuration")?;
    log::debug!("livecount v{} with {:?}", crate::VERSION, counter.config());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut session = Session {
        out: &mut out,
        format: args.output.format.into(),
        selections: args.input.selections.iter().map(|selection| selection.0.clone()).collect(),
        failures: 0,
    };

    match &args.input.edits {
        Some(script) => {
            if args.files.len() > 1 {
                bail!("--edits replays a single document; got {} files", args.files.len());
            }
            let batches = replay::load_script(script)?;
            run_replay(&mut session, &mut counter, notifier.as_ref(), args.files.first().map(|p| p.as_path()), &batches)?;
        }
        None if args.files.is_empty() => {
            let id = DocumentId::new(STDIN_NAME);
            let mut docs = MemoryDocuments::new();
            docs.insert(id.clone(), FileReader::read_stdin()?);
            session.report(&mut counter, &id, &docs, None)?;
        }
        None => {
            for path in &args.files {
                let id = DocumentId::new(path.to_string_lossy());
                if let Err(err) = session.report(&mut counter, &id, &FileDocuments, None) {
                    notifier.error(&format!("{}: {err:#}", path.display()));
                    session.failures += 1;
                }
            }
        }
    }

    Ok(if session.failures == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Open the base document, report it, then report after every batch of the script.
fn run_replay<W: Write>(
    session: &mut Session<'_, W>,
    counter: &mut WordCounter<'_>,
    notifier: &dyn Notifier,
    path: Option<&Path>,
    batches: &[EditBatch],
) -> Result<()> {
    let (id, text) = match path {
        Some(path) => (DocumentId::new(path.to_string_lossy()), FileReader::read_text(path)?),
        None => (DocumentId::new(STDIN_NAME), FileReader::read_stdin()?),
    };
    let mut docs = MemoryDocuments::new();
    counter.on_open(&id, &text);
    docs.insert(id.clone(), text);
    session.report(counter, &id, &docs, Some(0))?;

    for (index, batch) in batches.iter().enumerate() {
        let step = index + 1;
        if let Err(err) = replay::apply_batch(counter, &mut docs, &id, batch) {
            notifier.error(&format!("{id} #{step}: {err}"));
            session.failures += 1;
        }
        session.report(counter, &id, &docs, Some(step))?;
    }
    Ok(())
}

/// Plain `[level] message` lines on stderr, unless `RUST_LOG` asks for the log stream.
fn notifier(quiet: bool) -> Box<dyn Notifier> {
    if std::env::var_os("RUST_LOG").is_some() {
        Box::new(LogNotifier)
    } else {
        Box::new(StderrNotifier { quiet })
    }
}
