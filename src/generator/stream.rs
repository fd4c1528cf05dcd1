use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use log::{debug, error, info};
use crate::error::Result;
use crate::font::classify;
use crate::models::{Config, FileDescriptor, WriteMode};
use crate::utils::{append_to_file, prepare_output};
use super::css::render_font_face;

/// Counts gathered over one generator run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Report {
    /// Items handed back downstream
    pub forwarded: usize,
    /// Rules appended to the stylesheet
    pub written: usize,
    /// Items skipped because their stem was already seen
    pub duplicates: usize,
    /// Appends that failed
    pub failed: usize,
}

/// Stream stage turning font file descriptors into `@font-face` rules.
///
/// Every descriptor passed to [`process`](Self::process) is returned as is.
/// The first descriptor for each stem also gets a rule appended to the
/// configured stylesheet.
pub struct FontFaceGenerator {
    config: Config,
    output: PathBuf,
    processed: HashSet<String>,
    report: Report,
    pending: usize,
    outcome_tx: Sender<bool>,
    outcome_rx: Receiver<bool>,
}

impl FontFaceGenerator {
    /// Prepare the output location and create an empty generator.
    ///
    /// Fails with [`Error::OutputExists`](crate::Error::OutputExists) in
    /// strict mode when the stylesheet is already there; nothing is touched.
    pub fn new(config: Config) -> Result<Self> {
        let output = prepare_output(&config)?;
        debug!(
            "Writing @font-face rules to {} (init: {}, writes: {}, naming: {})",
            output.display(),
            config.init_policy,
            config.write_mode,
            config.naming
        );

        let (outcome_tx, outcome_rx) = mpsc::channel();
        Ok(Self {
            config,
            output,
            processed: HashSet::new(),
            report: Report::default(),
            pending: 0,
            outcome_tx,
            outcome_rx,
        })
    }

    /// Path of the stylesheet being generated
    pub fn output_path(&self) -> &Path {
        &self.output
    }

    /// Whether a rule for `stem` has been written or submitted
    pub fn is_processed(&self, stem: &str) -> bool {
        self.processed.contains(stem)
    }

    /// Handle one descriptor and hand it back unchanged
    pub fn process<F: FileDescriptor>(&mut self, file: F) -> F {
        let stem = file.stem();
        self.report.forwarded += 1;

        if self.processed.contains(&stem) {
            info!("{} has already been processed", stem);
            self.report.duplicates += 1;
            return file;
        }

        let record = classify(&stem, self.config.naming);
        debug!(
            "{} -> family '{}', style {}, weight {}",
            stem, record.family, record.style, record.weight
        );
        let css = render_font_face(&record);

        match self.config.write_mode {
            WriteMode::Sync => match append_to_file(&self.output, &css) {
                Ok(()) => {
                    self.report.written += 1;
                    self.processed.insert(stem);
                }
                Err(e) => {
                    error!("{}", e);
                    self.report.failed += 1;
                }
            },
            WriteMode::Background => {
                self.submit(css);
                self.processed.insert(stem);
            }
        }

        file
    }

    fn submit(&mut self, css: String) {
        let output = self.output.clone();
        let outcome_tx = self.outcome_tx.clone();
        self.pending += 1;

        rayon::spawn(move || {
            let ok = match append_to_file(&output, &css) {
                Ok(()) => true,
                Err(e) => {
                    error!("{}", e);
                    false
                }
            };
            let _ = outcome_tx.send(ok);
        });
    }

    /// Wait for outstanding background appends and return the run's counts
    pub fn finish(mut self) -> Report {
        self.drain();

        info!(
            "{}: {} rules written, {} duplicates skipped, {} failed",
            self.output.display(),
            self.report.written,
            self.report.duplicates,
            self.report.failed
        );
        self.report
    }

    /// Block until every submitted append has reported back
    fn drain(&mut self) {
        while self.pending > 0 {
            match self.outcome_rx.recv() {
                Ok(true) => self.report.written += 1,
                Ok(false) => self.report.failed += 1,
                Err(_) => break,
            }
            self.pending -= 1;
        }
    }
}

impl Drop for FontFaceGenerator {
    fn drop(&mut self) {
        if self.pending > 0 {
            debug!("Waiting for {} pending appends to {}", self.pending, self.output.display());
            self.drain();
        }
    }
}

/// Iterator adapter that runs each item through a [`FontFaceGenerator`]
pub struct FontFaceStream<'a, I> {
    inner: I,
    generator: &'a mut FontFaceGenerator,
}

impl<I> Iterator for FontFaceStream<'_, I>
where
    I: Iterator,
    I::Item: FileDescriptor,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let file = self.inner.next()?;
        Some(self.generator.process(file))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Adds [`font_faces`](FontFaceExt::font_faces) to every iterator
pub trait FontFaceExt: Iterator + Sized {
    fn font_faces(self, generator: &mut FontFaceGenerator) -> FontFaceStream<'_, Self> {
        FontFaceStream {
            inner: self,
            generator,
        }
    }
}

impl<I: Iterator> FontFaceExt for I {}
