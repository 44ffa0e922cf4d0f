//! Range document selection
//!
//! Candidates, highest priority first:
//! 1. the path in `ISBN_RANGE_MESSAGE`
//! 2. `RangeMessage.xml` in the data directory
//! 3. `RangeMessage.xml` in the working directory
//!
//! Only the first candidate that exists is parsed. If it cannot be read or
//! parsed the built-in snapshot is used; lower candidates are not tried.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::builtin::builtin_table;
use super::parser::{ParseOutcome, RangeDocumentParser};
use crate::domain::{RangeError, RangeTable, RangeWarning};
use crate::infrastructure::config::Config;

pub const RANGE_MESSAGE_FILE: &str = "RangeMessage.xml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateKind {
    Override,
    DataDir,
    WorkingDir,
}

/// Table chosen by the resolver, plus the warnings raised on the way.
#[derive(Debug)]
pub struct Resolved {
    pub table: Arc<RangeTable>,
    pub warnings: Vec<RangeWarning>,
}

#[derive(Debug, Clone)]
pub struct SourceResolver {
    override_path: Option<PathBuf>,
    data_dir: PathBuf,
    working_dir: PathBuf,
}

impl SourceResolver {
    pub fn new(
        override_path: Option<PathBuf>,
        data_dir: impl Into<PathBuf>,
        working_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            override_path,
            data_dir: data_dir.into(),
            working_dir: working_dir.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let working_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::new(
            config.range_message.clone(),
            config.data_dir.clone(),
            working_dir,
        )
    }

    /// All candidate locations in priority order, existing or not.
    pub fn candidates(&self) -> Vec<(CandidateKind, PathBuf)> {
        let mut candidates = Vec::with_capacity(3);
        if let Some(path) = &self.override_path {
            candidates.push((CandidateKind::Override, path.clone()));
        }
        candidates.push((CandidateKind::DataDir, self.data_dir.join(RANGE_MESSAGE_FILE)));
        candidates.push((CandidateKind::WorkingDir, self.working_dir.join(RANGE_MESSAGE_FILE)));
        candidates
    }

    /// First candidate that exists. Warns about a configured override that
    /// does not.
    pub fn pick(&self, warnings: &mut Vec<RangeWarning>) -> Option<(CandidateKind, PathBuf)> {
        for (kind, path) in self.candidates() {
            if path.exists() {
                return Some((kind, path));
            }
            if kind == CandidateKind::Override {
                let warning = RangeWarning::MissingOverride(path);
                tracing::warn!("{}", warning);
                warnings.push(warning);
            }
        }
        None
    }

    /// Always yields a usable table.
    pub fn resolve(&self) -> Resolved {
        let mut warnings = Vec::new();

        let Some((kind, path)) = self.pick(&mut warnings) else {
            tracing::info!("No range document found, using built-in ranges");
            return Resolved {
                table: builtin_table(),
                warnings,
            };
        };

        match load_candidate(&path) {
            Ok(outcome) => {
                let table = outcome.table;
                for (prefix, short, long) in table.prefix_collisions() {
                    tracing::warn!(
                        "Group {}-{} is a prefix of {}-{} in {}",
                        prefix,
                        short,
                        prefix,
                        long,
                        path.display()
                    );
                }
                tracing::info!(
                    "Loaded {} registration groups from {} ({:?}, serial {})",
                    table.len(),
                    path.display(),
                    kind,
                    table.metadata().serial.as_deref().unwrap_or("unknown")
                );
                warnings.extend(outcome.warnings);
                Resolved {
                    table: Arc::new(table),
                    warnings,
                }
            }
            Err(err) => {
                let warning = RangeWarning::Fallback(err);
                tracing::warn!("{}", warning);
                warnings.push(warning);
                Resolved {
                    table: builtin_table(),
                    warnings,
                }
            }
        }
    }
}

fn load_candidate(path: &Path) -> Result<ParseOutcome, RangeError> {
    let outcome = RangeDocumentParser::parse_file(path)?;
    if outcome.table.is_empty() {
        return Err(RangeError::structure(
            path.display().to_string(),
            "no usable registration groups",
        ));
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Prefix, RangeSource};
    use std::fs;
    use tempfile::TempDir;

    const GOOD: &str = r#"<ISBNRangeMessage>
  <MessageSerialNumber>serial-from-disk</MessageSerialNumber>
  <MessageDate>Tue, 7 Oct 2025 09:00:00 CEST</MessageDate>
  <RegistrationGroups>
    <Group><Prefix>978-2</Prefix><Agency>Francophone (disk)</Agency>
      <Rules><Rule><Range>0000000-1999999</Range><Length>2</Length></Rule></Rules>
    </Group>
  </RegistrationGroups>
</ISBNRangeMessage>"#;

    const BROKEN: &str = "<ISBNRangeMessage><MessageSerialNumber>x</MessageSerialNumber></ISBNRangeMessage>";

    struct Dirs {
        _root: TempDir,
        data: PathBuf,
        work: PathBuf,
        other: PathBuf,
    }

    fn dirs() -> Dirs {
        let root = tempfile::tempdir().unwrap();
        let data = root.path().join("data");
        let work = root.path().join("work");
        let other = root.path().join("other");
        for dir in [&data, &work, &other] {
            fs::create_dir_all(dir).unwrap();
        }
        Dirs {
            _root: root,
            data,
            work,
            other,
        }
    }

    fn write(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join(RANGE_MESSAGE_FILE);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_nothing_on_disk_uses_builtin() {
        let d = dirs();
        let resolved = SourceResolver::new(None, &d.data, &d.work).resolve();
        assert_eq!(resolved.table.metadata().source, RangeSource::BuiltIn);
        assert!(resolved.warnings.is_empty());
    }

    #[test]
    fn test_override_wins_when_present() {
        let d = dirs();
        let override_path = write(&d.other, GOOD);
        write(&d.data, BROKEN);
        let resolved = SourceResolver::new(Some(override_path.clone()), &d.data, &d.work).resolve();
        assert_eq!(resolved.table.metadata().source, RangeSource::File(override_path));
        assert_eq!(
            resolved.table.agency_name(Prefix::Isbn978, "2"),
            Some("Francophone (disk)")
        );
        assert_eq!(
            resolved.table.metadata().serial.as_deref(),
            Some("serial-from-disk")
        );
    }

    #[test]
    fn test_missing_override_warns_and_falls_through_in_order() {
        let d = dirs();
        let missing = d.other.join("nope.xml");
        let resolver = SourceResolver::new(Some(missing.clone()), &d.data, &d.work);

        let kinds: Vec<CandidateKind> = resolver.candidates().into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            kinds,
            vec![
                CandidateKind::Override,
                CandidateKind::DataDir,
                CandidateKind::WorkingDir
            ]
        );

        let work_file = write(&d.work, GOOD);
        let mut warnings = Vec::new();
        assert_eq!(
            resolver.pick(&mut warnings),
            Some((CandidateKind::WorkingDir, work_file.clone()))
        );
        assert!(matches!(&warnings[..], [RangeWarning::MissingOverride(p)] if *p == missing));

        let data_file = write(&d.data, GOOD);
        let mut warnings = Vec::new();
        assert_eq!(
            resolver.pick(&mut warnings),
            Some((CandidateKind::DataDir, data_file.clone()))
        );

        let resolved = resolver.resolve();
        assert_eq!(resolved.table.metadata().source, RangeSource::File(data_file));
        assert!(matches!(
            resolved.warnings.first(),
            Some(RangeWarning::MissingOverride(_))
        ));
    }

    #[test]
    fn test_existence_not_parseability_picks_candidate() {
        let d = dirs();
        let data_file = write(&d.data, BROKEN);
        write(&d.work, GOOD);
        let resolver = SourceResolver::new(None, &d.data, &d.work);

        let mut warnings = Vec::new();
        assert_eq!(
            resolver.pick(&mut warnings),
            Some((CandidateKind::DataDir, data_file))
        );

        // The broken data-dir file short-circuits to the built-in table even
        // though the working-dir file would parse.
        let resolved = resolver.resolve();
        assert_eq!(resolved.table.metadata().source, RangeSource::BuiltIn);
        assert_eq!(
            resolved.table.agency_name(Prefix::Isbn978, "2"),
            Some("French language")
        );
        assert!(matches!(
            resolved.warnings.last(),
            Some(RangeWarning::Fallback(RangeError::Structure { .. }))
        ));
    }

    #[test]
    fn test_unreadable_candidate_falls_back() {
        let d = dirs();
        // A directory exists but cannot be read as a document.
        let resolver = SourceResolver::new(Some(d.other.clone()), &d.data, &d.work);
        let resolved = resolver.resolve();
        assert_eq!(resolved.table.metadata().source, RangeSource::BuiltIn);
        assert!(matches!(
            resolved.warnings.last(),
            Some(RangeWarning::Fallback(RangeError::SourceUnavailable { .. }))
        ));
    }

    #[test]
    fn test_empty_document_falls_back() {
        let d = dirs();
        write(
            &d.work,
            "<ISBNRangeMessage><RegistrationGroups></RegistrationGroups></ISBNRangeMessage>",
        );
        let resolved = SourceResolver::new(None, &d.data, &d.work).resolve();
        assert_eq!(resolved.table.metadata().source, RangeSource::BuiltIn);
        assert!(!resolved.table.is_empty());
    }

    #[test]
    fn test_parse_warnings_are_passed_on() {
        let d = dirs();
        write(
            &d.work,
            r#"<ISBNRangeMessage><RegistrationGroups>
                <Group><Agency>No prefix</Agency></Group>
                <Group><Prefix>978-3</Prefix><Agency>German language</Agency></Group>
            </RegistrationGroups></ISBNRangeMessage>"#,
        );
        let resolved = SourceResolver::new(None, &d.data, &d.work).resolve();
        assert_eq!(resolved.table.len(), 1);
        assert!(matches!(
            &resolved.warnings[..],
            [RangeWarning::GroupSkipped { index: 0, .. }]
        ));
    }
}
