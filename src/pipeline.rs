use std::path::PathBuf;
use std::time::Duration;

use tracing::{error, info};

use crate::extract;
use crate::fetch::Fetcher;
use crate::filter::{self, Bounds};
use crate::page::Page;
use crate::persist;
use crate::settings::Settings;

/// What to keep and what to do with it once the page is fetched.
#[derive(Debug, Clone, Default)]
pub struct ScrapeOptions {
    pub bounds: Bounds,
    /// Destination to write the filtered values to, one per line.
    pub save_to: Option<PathBuf>,
}

/// Run the full pipeline for one address.
///
/// A fetch failure is reported once through the diagnostic channel and yields
/// `None`; nothing is written in that case. A persistence failure is reported
/// the same way, and the computed values are still returned.
pub fn scrape_numbers(url: &str, options: &ScrapeOptions, settings: &Settings) -> Option<Vec<f64>> {
    let timeout = Duration::from_secs(settings.timeout_secs);
    let fetcher = match Fetcher::new(timeout, &settings.user_agent) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            error!("{e}");
            return None;
        }
    };

    let html = match fetcher.fetch_page(url) {
        Ok(html) => html,
        Err(e) => {
            error!("{e}");
            return None;
        }
    };

    let values = process_page(&html, options.bounds);

    if let Some(path) = &options.save_to {
        match persist::save_numbers(&values, path) {
            Ok(()) => info!("saved {} values to {}", values.len(), path.display()),
            Err(e) => error!("{e}"),
        }
    }

    Some(values)
}

/// Parse, flatten, extract and filter one already-fetched document.
pub fn process_page(html: &str, bounds: Bounds) -> Vec<f64> {
    let text = Page::parse(html).flatten_text();
    filter::within_bounds(extract::numeric_tokens(&text), bounds)
}
