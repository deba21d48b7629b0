//! # Application
//!
//! the application module drives the report over the configured sources

// -- modules
mod config;

pub use config::{Config, Format};

use chainstat::report::{Report, Source};

use std::io::Write;

/// Chainstat application
pub struct Application {
    format: Format,
    sources: Vec<Source>,
}

impl Application {
    /// Initialize new `Application`
    pub fn init(config: Config) -> Self {
        let sources = config.sources();
        for source in sources.iter() {
            debug!("{} -> {}", source.label(), source.path().display());
        }
        Self {
            format: config.format(),
            sources,
        }
    }

    /// run application, writing the report to `out`.
    ///
    /// Nothing is written unless every source has been analyzed
    pub fn run<W>(self, out: &mut W) -> anyhow::Result<()>
    where
        W: Write,
    {
        let report = Report::run(&self.sources)?;
        info!("analyzed {} sources", report.entries().len());
        match self.format {
            Format::Text => report.write_text(out)?,
            Format::Json => report.write_json(out)?,
        }
        out.flush()?;
        Ok(())
    }
}
