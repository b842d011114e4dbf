// crates/usecase/src/word_counter.rs
use std::ops::Range;

use livecount_domain::{
    Config, ConfigOptions, DisplayStatistic, DisplayToggles, DocumentDisplay, SelectionDisplay,
    SelectionStatistic, TextEdit,
};
use livecount_ports::{DocumentSource, Notifier};
use livecount_shared_kernel::{DocumentId, Result, Statistic};
use log::{debug, warn};

use crate::cache_manager::{CacheManager, self_check_policy};

/// Reacts to host events (open, change, close, configuration) and answers statistic queries.
pub struct WordCounter<'a> {
    cache: CacheManager,
    config: Config,
    toggles: DisplayToggles,
    notifier: &'a dyn Notifier,
}

impl<'a> WordCounter<'a> {
    pub fn new(config: Config, notifier: &'a dyn Notifier) -> Self {
        let cache = CacheManager::from_config(&config);
        let toggles = DisplayToggles::from_config(&config);
        Self { cache, config, toggles, notifier }
    }

    /// Build from raw options.
    ///
    /// # Errors
    ///
    /// Any configuration error from [`Config::from_options`].
    pub fn from_options(options: &ConfigOptions, notifier: &'a dyn Notifier) -> Result<Self> {
        Ok(Self::new(Config::from_options(options)?, notifier))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn toggles(&self) -> DisplayToggles {
        self.toggles
    }

    pub fn cache(&self) -> &CacheManager {
        &self.cache
    }

    /// Apply new options. Valid options replace the configuration, reset the toggles to their
    /// configured defaults and drop every cached statistic.
    ///
    /// # Errors
    ///
    /// An invalid configuration is reported to the user and returned; the previous
    /// configuration and cache stay in effect.
    pub fn update_config(&mut self, options: &ConfigOptions) -> Result<()> {
        let config = match Config::from_options(options) {
            Ok(config) => config,
            Err(err) => {
                warn!("keeping previous configuration: {err}");
                self.notifier.error(&format!("Invalid wc configuration: {err}"));
                return Err(err.into());
            }
        };

        self.cache.reconfigure(config.rules.clone(), config.encoder());
        self.cache.set_self_check(self_check_policy(&config));
        self.toggles = DisplayToggles::from_config(&config);
        debug!("configuration updated: mode={} encoding={}", config.count_mode, config.encoding);
        self.config = config;
        Ok(())
    }

    pub fn on_open(&mut self, id: &DocumentId, text: &str) -> Statistic {
        self.cache.full_update(id, text)
    }

    /// Fold an edit batch into the statistic of `id`.
    ///
    /// A detected drift is surfaced through the notifier; the returned statistic is whatever
    /// the cache now holds.
    ///
    /// # Errors
    ///
    /// When the batch does not fit the previous text. The document is then recounted from
    /// `full_text` so that later batches line up again.
    pub fn on_change(&mut self, id: &DocumentId, full_text: &str, edits: &[TextEdit]) -> Result<Statistic> {
        match self.cache.incremental_update(id, full_text, edits) {
            Ok(report) => {
                if let Some(mismatch) = report.mismatch {
                    let err = mismatch.to_error(id);
                    warn!("{err}");
                    self.notifier.error(&format!("Incremental wc failed: {err}"));
                }
                Ok(report.statistic)
            }
            Err(err) => {
                warn!("rejected edits for {id}: {err}; recounting");
                self.notifier.warn(&format!("Rejected edits for {id}: {err}"));
                self.cache.full_update(id, full_text);
                Err(err.into())
            }
        }
    }

    /// Forget `id`. Returns whether it was cached.
    pub fn on_close(&mut self, id: &DocumentId) -> bool {
        self.cache.invalidate(id)
    }

    /// The document statistic to display, loading the text from `source` on a cache miss.
    ///
    /// # Errors
    ///
    /// Whatever `source` fails with.
    pub fn document_statistic(&mut self, id: &DocumentId, source: &dyn DocumentSource) -> Result<DocumentDisplay> {
        if !self.toggles.document {
            return Ok(DocumentDisplay::Disabled);
        }
        let statistic = self.cache.get_or_create(id, || source.full_text(id))?;
        Ok(DocumentDisplay::Shown(DisplayStatistic::from_statistic(&statistic, self.config.count_mode)))
    }

    /// The summed statistic of the selected `ranges` to display.
    ///
    /// Selections are counted fresh from `source` and never cached.
    ///
    /// # Errors
    ///
    /// Whatever `source` fails with, including out-of-range selections.
    pub fn selection_statistic(
        &self,
        id: &DocumentId,
        ranges: &[Range<usize>],
        source: &dyn DocumentSource,
    ) -> Result<SelectionDisplay> {
        if !self.toggles.selection {
            let selected = ranges.iter().any(|range| !range.is_empty());
            return Ok(if selected { SelectionDisplay::Disabled } else { SelectionDisplay::Hidden });
        }

        let mut total = Statistic::ZERO;
        for range in ranges {
            total += self.cache.compute(&source.range_text(id, range.clone())?);
        }
        if total.characters.is_zero() {
            return Ok(SelectionDisplay::Hidden);
        }
        Ok(SelectionDisplay::Shown(SelectionStatistic {
            statistic: DisplayStatistic::from_statistic(&total, self.config.count_mode),
            selections: ranges.len(),
        }))
    }

    /// Returns the new state.
    pub fn toggle_document(&mut self) -> bool {
        self.toggles.toggle_document()
    }

    /// Returns the new state.
    pub fn toggle_selection(&mut self) -> bool {
        self.toggles.toggle_selection()
    }
}
