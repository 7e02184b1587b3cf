//! Liuyao - read hexagram casting sheets into validated chart records.
//!
//! Parsing and validation for the plain-text casting sheets that Liuyao
//! divination apps export. A valid sheet becomes a [`ChartRecord`] that
//! serializes to JSON with fixed Chinese keys; an invalid one yields coded
//! diagnostics and a user-facing report.

pub mod config;

mod command;
mod error;

pub use liuyao_core::{glyph, record};
pub use liuyao_parser::format_errors;

pub use error::LiuyaoError;

use log::{debug, info, trace, warn};

use liuyao_core::ChartRecord;
use liuyao_parser::error::ChartError;

use config::AppConfig;

/// Reader for Liuyao casting sheets.
///
/// Runs the parse and validate stages and serializes the resulting record.
///
/// # Examples
///
/// ```
/// use liuyao::{ChartReader, LiuyaoError};
///
/// let reader = ChartReader::default();
///
/// match reader.read("/liuyao 虎 财戌 官酉 - - 父子 - -") {
///     Ok(record) => println!("{}", reader.to_json(&record).unwrap()),
///     Err(LiuyaoError::Invalid { err, .. }) => {
///         println!("{}", liuyao::format_errors(err.diagnostics()));
///     }
///     Err(err) => panic!("{err}"),
/// }
/// ```
#[derive(Default)]
pub struct ChartReader {
    config: AppConfig,
}

impl ChartReader {
    /// Create a new chart reader with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including output settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this reader was built with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse and validate a casting sheet.
    ///
    /// A leading `/liuyao` command word is removed first. The validated error
    /// list is stored on the record in both the success and failure case.
    ///
    /// # Arguments
    ///
    /// * `input` - Casting-sheet text, optionally prefixed by `/liuyao`
    ///
    /// # Errors
    ///
    /// Returns [`LiuyaoError::EmptyInput`] if no text remains after the
    /// command word, and [`LiuyaoError::Invalid`] if the record fails
    /// validation.
    pub fn read(&self, input: &str) -> Result<ChartRecord, LiuyaoError> {
        let source = command::strip_command(input);
        if source.is_empty() {
            warn!("No chart text after command word");
            return Err(LiuyaoError::EmptyInput);
        }

        info!(chars = source.chars().count(); "Reading chart");

        let mut record = liuyao_parser::parse(source);
        let (ok, errors) = liuyao_parser::validate(&record);
        record.errors = errors;
        trace!(record:?; "Validated record");

        if !ok {
            info!(errors = record.errors.len(); "Chart failed validation");
            let err = ChartError::new(record.errors.clone());
            return Err(LiuyaoError::new_invalid(err, record, source));
        }

        debug!(lines = record.yao_lines.len(); "Chart read successfully");
        Ok(record)
    }

    /// Serialize a record to JSON, indented unless disabled in the config.
    ///
    /// Non-ASCII text is written as-is, not escaped.
    ///
    /// # Errors
    ///
    /// Returns [`LiuyaoError::Json`] if serialization fails.
    pub fn to_json(&self, record: &ChartRecord) -> Result<String, LiuyaoError> {
        let json = if self.config.output().pretty() {
            serde_json::to_string_pretty(record)?
        } else {
            serde_json::to_string(record)?
        };
        Ok(json)
    }
}
