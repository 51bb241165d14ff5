use serde::Deserialize;
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::constants::CONFIG_FILENAME;
use crate::error::{RemoveError, Result};
use crate::job::{Job, JobOrigin, JobSet};
use crate::range::LineRange;

#[derive(Debug, Deserialize, Default, Clone)]
/// Top-level configuration struct.
pub struct Config {
    #[serde(default)]
    /// The main configuration section for linecut.
    pub linecut: LinecutConfig,
    /// The path to the configuration file this was loaded from.
    /// Set during `load_from_path`, `None` if using defaults or programmatic config.
    #[serde(skip)]
    pub config_file_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default, Clone)]
/// Configuration options for linecut.
pub struct LinecutConfig {
    /// Preview removals without writing.
    pub dry_run: Option<bool>,
    /// Print `[VERBOSE]` diagnostics to stderr.
    pub verbose: Option<bool>,
    /// Project root for job paths, relative to the config file.
    pub root: Option<PathBuf>,
    /// Named jobs, added to (or overriding) the presets.
    #[serde(default)]
    pub jobs: Vec<JobConfig>,
}

/// A `[[linecut.jobs]]` entry.
///
/// The range is given either as zero-based `start`/`end` (half-open) or as
/// one-based inclusive `lines = "FIRST-LAST"`.
#[derive(Debug, Deserialize, Clone)]
pub struct JobConfig {
    /// Job name.
    pub name: String,
    /// Target file, relative to the project root.
    pub path: PathBuf,
    /// Zero-based first line to remove.
    pub start: Option<usize>,
    /// Zero-based exclusive end.
    pub end: Option<usize>,
    /// One-based inclusive `FIRST-LAST`.
    pub lines: Option<String>,
    /// Pattern the first removed line must match.
    pub expect_first: Option<String>,
    /// Pattern the last removed line must match.
    pub expect_last: Option<String>,
}

impl JobConfig {
    /// Converts this entry into a validated [`Job`].
    ///
    /// # Errors
    ///
    /// [`RemoveError::InvalidNotation`] when the range is missing or given
    /// both ways, or any error from building the range.
    pub fn to_job(&self) -> Result<Job> {
        let range = match (&self.lines, self.start, self.end) {
            (Some(lines), None, None) => lines.parse::<LineRange>()?,
            (None, Some(start), Some(end)) => LineRange::new(start, end)?,
            _ => {
                return Err(RemoveError::InvalidNotation(format!(
                    "job `{}` needs either `lines` or both `start` and `end`",
                    self.name
                )))
            }
        };
        Ok(Job {
            name: self.name.clone(),
            path: self.path.clone(),
            range,
            expect_first: self.expect_first.clone(),
            expect_last: self.expect_last.clone(),
            origin: JobOrigin::Config,
        })
    }
}

impl Config {
    /// Loads configuration from the current directory upwards.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from_path(Path::new("."))
    }

    /// Loads configuration starting from a specific path and traversing up.
    ///
    /// A relative `path` is taken against the current directory, so the walk
    /// continues past it.
    #[must_use]
    pub fn load_from_path(path: &Path) -> Self {
        let mut current = absolute_start(path);
        if current.is_file() {
            current.pop();
        }

        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                if let Ok(content) = fs::read_to_string(&candidate) {
                    if let Ok(mut config) = toml::from_str::<Config>(&content) {
                        config.config_file_path = Some(candidate);
                        return config;
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        Config::default()
    }

    /// Presets overlaid with this file's jobs.
    ///
    /// # Errors
    ///
    /// The first job entry that fails [`JobConfig::to_job`].
    pub fn jobs(&self) -> Result<JobSet> {
        let mut set = JobSet::with_presets();
        for entry in &self.linecut.jobs {
            set.insert(entry.to_job()?);
        }
        Ok(set)
    }

    /// Project root implied by the config file: its `root` key resolved
    /// against the file's directory, or the directory itself.
    #[must_use]
    pub fn project_root(&self) -> Option<PathBuf> {
        let dir = self.config_file_path.as_ref()?.parent()?.to_path_buf();
        Some(match &self.linecut.root {
            Some(root) => dir.join(root),
            None => dir,
        })
    }
}

/// `path` made absolute against the current directory, with `.` components
/// dropped so that popping walks real parents.
fn absolute_start(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => path.to_path_buf(),
        }
    };
    joined
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_path_no_config() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from_path(dir.path());
        assert!(config.linecut.dry_run.is_none());
        assert!(config.linecut.jobs.is_empty());
        assert!(config.project_root().is_none());
    }

    #[test]
    fn test_load_from_path_linecut_toml() {
        let dir = TempDir::new().unwrap();
        let mut file = fs::File::create(dir.path().join(CONFIG_FILENAME)).unwrap();
        writeln!(
            file,
            r#"[linecut]
dry_run = true

[[linecut.jobs]]
name = "header"
path = "README.md"
lines = "1-3"
expect_first = "^# "

[[linecut.jobs]]
name = "footer"
path = "README.md"
start = 10
end = 12
"#
        )
        .unwrap();

        let config = Config::load_from_path(dir.path());
        assert_eq!(config.linecut.dry_run, Some(true));
        assert_eq!(config.linecut.jobs.len(), 2);

        let jobs = config.jobs().unwrap();
        let header = jobs.get("header").unwrap();
        assert_eq!(header.range, LineRange::new(0, 3).unwrap());
        assert_eq!(header.expect_first.as_deref(), Some("^# "));
        assert_eq!(jobs.get("footer").unwrap().range.as_range(), 10..12);
        assert!(jobs.get("offers").is_ok());
    }

    #[test]
    fn test_load_from_path_traverses_up() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("v2").join("src");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            "[linecut]\nverbose = true\n",
        )
        .unwrap();

        let config = Config::load_from_path(&nested);
        assert_eq!(config.linecut.verbose, Some(true));
        assert_eq!(config.project_root().as_deref(), Some(dir.path()));
    }

    #[test]
    fn test_relative_start_is_anchored_at_current_dir() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(absolute_start(Path::new(".")), cwd);
        assert_eq!(absolute_start(Path::new("./v2/./src")), cwd.join("v2").join("src"));
        assert_eq!(absolute_start(Path::new("v2")).parent(), Some(cwd.as_path()));
    }

    #[test]
    fn test_load_from_file_path() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "[linecut]\nroot = \"web\"\n").unwrap();
        let page = dir.path().join("page.svelte");
        fs::write(&page, "<p/>\n").unwrap();

        let config = Config::load_from_path(&page);
        assert_eq!(config.project_root(), Some(dir.path().join("web")));
    }

    #[test]
    fn test_unparsable_config_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "[linecut\nbroken").unwrap();
        let config = Config::load_from_path(dir.path());
        assert!(config.config_file_path.is_none());
    }

    #[test]
    fn test_job_needs_exactly_one_range_form() {
        let entry = JobConfig {
            name: "both".to_owned(),
            path: PathBuf::from("a.txt"),
            start: Some(0),
            end: Some(2),
            lines: Some("1-2".to_owned()),
            expect_first: None,
            expect_last: None,
        };
        assert!(matches!(
            entry.to_job(),
            Err(RemoveError::InvalidNotation(_))
        ));

        let config = Config {
            linecut: LinecutConfig {
                jobs: vec![JobConfig {
                    lines: None,
                    start: Some(4),
                    end: Some(4),
                    ..entry
                }],
                ..LinecutConfig::default()
            },
            config_file_path: None,
        };
        assert!(matches!(
            config.jobs(),
            Err(RemoveError::EmptyRange { .. })
        ));
    }
}
