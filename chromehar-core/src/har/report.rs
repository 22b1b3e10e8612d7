use crate::config::CreatorConfig;
use crate::correlate::PageAggregate;
use crate::har::{Creator, Entry, Har, Log, Page, PageTimings, wall_time_to_datetime};

pub const HAR_VERSION: &str = "1.2";

impl From<&CreatorConfig> for Creator {
    fn from(cfg: &CreatorConfig) -> Self {
        Creator {
            name: cfg.name.clone(),
            version: cfg.version.clone(),
        }
    }
}

/// The page record. Its start is the wall time of the first request seen.
pub fn build_page(page: &PageAggregate<'_>, id: &str) -> Page {
    Page {
        started_date_time: wall_time_to_datetime(
            page.first_request().map_or(0.0, |r| r.wall_time),
        ),
        id: id.to_string(),
        title: page.document_url().unwrap_or_default().to_string(),
        page_timings: PageTimings {
            on_content_load: page.on_content_load(),
            on_load: page.on_load(),
        },
    }
}

/// Attaches the entries to `page` and wraps both in a versioned HAR log.
///
/// Entries keep the order they are given in.
pub fn assemble_report(page: Page, entries: Vec<Entry>, creator: Creator) -> Har {
    let entries = entries
        .into_iter()
        .map(|mut entry| {
            entry.page_ref = Some(page.id.clone());
            entry
        })
        .collect();

    Har {
        log: Log {
            version: HAR_VERSION.to_string(),
            creator,
            pages: vec![page],
            entries,
        },
    }
}
