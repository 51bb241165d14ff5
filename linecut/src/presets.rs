//! Built-in jobs.
//!
//! Three one-off removals from the profile page, kept so they can be
//! replayed or inspected. The ranges are one-based and inclusive as an
//! editor shows them. Each is taken to be numbered against the unmodified
//! page; nothing records the order the removals originally ran in, so a
//! preset run on its own after another has shifted the page may hit other
//! lines.

use crate::constants::PROFILE_PAGE;
use crate::job::{Job, JobOrigin};
use crate::range::LineRange;
use std::path::PathBuf;

/// (name, first line, last line), one-based inclusive.
const PRESETS: &[(&str, usize, usize)] = &[
    ("section", 473, 658),
    ("reviews", 785, 880),
    ("offers", 888, 996),
];

/// The built-in jobs, in file order.
#[must_use]
pub fn builtin_jobs() -> Vec<Job> {
    PRESETS
        .iter()
        .filter_map(|&(name, first, last)| {
            let range = LineRange::from_one_based(first, last).ok()?;
            Some(Job {
                name: name.to_owned(),
                path: PathBuf::from(PROFILE_PAGE),
                range,
                expect_first: None,
                expect_last: None,
                origin: JobOrigin::Preset,
            })
        })
        .collect()
}
