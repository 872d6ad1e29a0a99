//! Whirlpool listing inspector
//!
//! One GET, one decode, one summary. Failures are carried as
//! `InspectorError` up to [`Inspector::run_and_report`], the only place that
//! turns them into user-facing messages.

pub mod payload;
pub mod report;


pub use payload::Payload;

use crate::apis::PayloadSource;
use crate::errors::InspectorResult;
use crate::logger::{self, LogTag};
use std::io::Write;

pub struct Inspector<S: PayloadSource> {
    source: S,
    pool_filter: Option<String>,
}

impl<S: PayloadSource> Inspector<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            pool_filter: None,
        }
    }

    /// Also print the whirlpool entry with this address
    pub fn with_pool_filter(mut self, pool_filter: Option<String>) -> Self {
        self.pool_filter = pool_filter;
        self
    }

    /// Fetch and classify the listing
    pub async fn fetch(&self) -> InspectorResult<Payload> {
        let body = self.source.fetch_body().await?;
        let payload = Payload::decode(&body)?;

        logger::debug(
            LogTag::Inspector,
            &format!("Decoded {} payload from {}", payload.type_name(), self.source.endpoint()),
        );
        Ok(payload)
    }

    /// Fetch, classify and write the summary
    pub async fn run<W: Write>(&self, out: &mut W) -> InspectorResult<()> {
        let payload = self.fetch().await?;
        report::write_summary(out, &payload, self.pool_filter.as_deref())?;
        out.flush()?;
        Ok(())
    }

    /// Like [`Inspector::run`], but failures are also written to `out`
    ///
    /// The error is still returned so the caller can pick an exit status.
    pub async fn run_and_report<W: Write>(&self, out: &mut W) -> InspectorResult<()> {
        let result = self.run(out).await;

        if let Err(err) = &result {
            logger::debug(
                LogTag::Inspector,
                &format!("Inspection of {} failed ({} error)", self.source.endpoint(), err.kind()),
            );
            let written = report::write_failure(out, err).and_then(|_| out.flush());
            if let Err(write_err) = written {
                logger::error(
                    LogTag::Inspector,
                    &format!("Failed to write error message: {} (original error: {})", write_err, err),
                );
            }
        }

        result
    }
}
