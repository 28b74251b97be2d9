use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Position of a diagnostic: the parameter file and, when applicable, the 1-based line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub file: Arc<str>,
    pub line: Option<usize>,
}

impl Location {
    pub fn new(file: Arc<str>, line: Option<usize>) -> Self {
        Self { file, line }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}", self.file, line),
            None => write!(f, "{}", self.file),
        }
    }
}

#[derive(Debug, Error)]
pub enum ParsError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Syntax error at {location}: {kind}")]
    Syntax {
        location: Location,
        kind: SyntaxErrorKind,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    #[error("line does not contain a colon")]
    MissingColon,
    #[error("line does not have text after the colon")]
    NoTextAfterColon,
    #[error("prefix '{0}' contains whitespace")]
    WhitespaceInPrefix(String),
    /// The text after the colon yields no command token.
    #[error("line does not have a command after the prefix")]
    MissingCommand,
    #[error("command '{0}' is not followed by data")]
    MissingData(String),
}

/// Entries of a single command: `(line number, data)` pairs in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLines {
    file: Arc<str>,
    entries: Vec<(usize, String)>,
}

impl ParsedLines {
    fn empty(file: Arc<str>) -> Self {
        Self {
            file,
            entries: Vec::new(),
        }
    }

    pub fn file(&self) -> &Arc<str> {
        &self.file
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.entries.iter().map(|(line, data)| (*line, data.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn location(&self, line: usize) -> Location {
        Location::new(self.file.clone(), Some(line))
    }

    pub fn file_location(&self) -> Location {
        Location::new(self.file.clone(), None)
    }
}

/// All commands of one prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSection {
    file: Arc<str>,
    prefix: String,
    commands: BTreeMap<String, ParsedLines>,
}

impl ParsedSection {
    fn empty(file: Arc<str>, prefix: &str) -> Self {
        Self {
            file,
            prefix: prefix.to_string(),
            commands: BTreeMap::new(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn file(&self) -> &Arc<str> {
        &self.file
    }

    pub fn commands(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    /// Returns the entries of `command`, or an empty list if the command is absent.
    pub fn command(&self, command: &str) -> ParsedLines {
        self.commands
            .get(&command.to_uppercase())
            .cloned()
            .unwrap_or_else(|| ParsedLines::empty(self.file.clone()))
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn file_location(&self) -> Location {
        Location::new(self.file.clone(), None)
    }
}

/// A parsed parameter file: prefix -> command -> ordered `(line, data)` entries.
///
/// Each non-blank line has the form `PREFIX: COMMAND DATA`. Everything after `#` is a
/// comment. Prefixes and commands are case-insensitive and stored uppercase; data is
/// kept verbatim (trimmed) for the generator that owns the prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPars {
    file: Arc<str>,
    sections: BTreeMap<String, ParsedSection>,
}

impl ParsedPars {
    pub fn load(path: &Path) -> Result<Self, ParsError> {
        let content = std::fs::read_to_string(path).map_err(|e| ParsError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::parse_str(&content, &path.to_string_lossy())
    }

    pub fn parse_str(content: &str, file: &str) -> Result<Self, ParsError> {
        let file: Arc<str> = Arc::from(file);
        let mut sections: BTreeMap<String, ParsedSection> = BTreeMap::new();

        for (index, raw) in content.lines().enumerate() {
            let line_num = index + 1;
            let syntax = |kind| ParsError::Syntax {
                location: Location::new(file.clone(), Some(line_num)),
                kind,
            };

            let line = match raw.find('#') {
                Some(pos) => &raw[..pos],
                None => raw,
            }
            .trim();
            if line.is_empty() {
                continue;
            }

            let (prefix, rest) = line
                .split_once(':')
                .ok_or_else(|| syntax(SyntaxErrorKind::MissingColon))?;
            let prefix = prefix.trim().to_uppercase();
            let rest = rest.trim();
            if rest.is_empty() {
                return Err(syntax(SyntaxErrorKind::NoTextAfterColon));
            }
            if prefix.split_whitespace().count() > 1 {
                return Err(syntax(SyntaxErrorKind::WhitespaceInPrefix(prefix)));
            }

            let Some(command) = rest.split_whitespace().next() else {
                return Err(syntax(SyntaxErrorKind::MissingCommand));
            };
            let data = rest[command.len()..].trim();
            let command = command.to_uppercase();
            if data.is_empty() {
                return Err(syntax(SyntaxErrorKind::MissingData(command)));
            }

            sections
                .entry(prefix.clone())
                .or_insert_with(|| ParsedSection::empty(file.clone(), &prefix))
                .commands
                .entry(command)
                .or_insert_with(|| ParsedLines::empty(file.clone()))
                .entries
                .push((line_num, data.to_string()));
        }

        Ok(Self { file, sections })
    }

    pub fn file(&self) -> &Arc<str> {
        &self.file
    }

    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Returns the section of `prefix`, or an empty section if the prefix is absent.
    pub fn section(&self, prefix: &str) -> ParsedSection {
        let prefix = prefix.to_uppercase();
        self.sections
            .get(&prefix)
            .cloned()
            .unwrap_or_else(|| ParsedSection::empty(self.file.clone(), &prefix))
    }

    pub fn contains(&self, prefix: &str) -> bool {
        self.sections.contains_key(&prefix.to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn data(lines: &ParsedLines) -> Vec<(usize, String)> {
        lines.iter().map(|(n, d)| (n, d.to_string())).collect()
    }

    fn syntax_kind(result: Result<ParsedPars, ParsError>) -> (Option<usize>, SyntaxErrorKind) {
        match result {
            Err(ParsError::Syntax { location, kind }) => (location.line, kind),
            other => panic!("expected syntax error, got {:?}", other),
        }
    }

    #[test]
    fn repeated_commands_keep_data_in_file_order() {
        let text = "\
# bonds
BONDHARM: UNIT K kjmol/angstrom**2
BONDHARM: PARS C C 3000.0 1.5

bondharm: pars C H  2000.0   1.1   # trailing comment
BONDHARM: UNIT R0 angstrom
";
        let pars = ParsedPars::parse_str(text, "test.pars").unwrap();
        let section = pars.section("BONDHARM");
        assert_eq!(
            data(&section.command("PARS")),
            vec![(3, "C C 3000.0 1.5".to_string()), (5, "C H  2000.0   1.1".to_string())]
        );
        assert_eq!(
            data(&section.command("UNIT")),
            vec![
                (2, "K kjmol/angstrom**2".to_string()),
                (6, "R0 angstrom".to_string())
            ]
        );
        assert_eq!(section.commands().collect::<Vec<_>>(), vec!["PARS", "UNIT"]);
    }

    #[test]
    fn prefixes_and_commands_are_case_insensitive() {
        let pars = ParsedPars::parse_str("fixq: dielectric 1.0", "f").unwrap();
        assert!(pars.contains("FIXQ"));
        assert_eq!(pars.section("fixq").command("Dielectric").len(), 1);
        assert_eq!(pars.prefixes().collect::<Vec<_>>(), vec!["FIXQ"]);
    }

    #[test]
    fn absent_keys_yield_empty_sections() {
        let pars = ParsedPars::parse_str("", "empty.pars").unwrap();
        let section = pars.section("EXPREP");
        assert!(section.is_empty());
        assert_eq!(section.prefix(), "EXPREP");
        assert!(section.command("PARS").is_empty());
        assert_eq!(section.command("PARS").file().as_ref(), "empty.pars");
    }

    #[test]
    fn tabs_separate_command_from_data() {
        let pars = ParsedPars::parse_str("EXPREP:\tPARS\tC 1.0 2.0", "f").unwrap();
        assert_eq!(
            data(&pars.section("EXPREP").command("PARS")),
            vec![(1, "C 1.0 2.0".to_string())]
        );
    }

    #[test]
    fn rejects_line_without_colon() {
        let result = ParsedPars::parse_str("\nBONDHARM PARS C C 1 2", "f");
        assert_eq!(syntax_kind(result), (Some(2), SyntaxErrorKind::MissingColon));
    }

    #[test]
    fn rejects_line_without_text_after_colon() {
        let result = ParsedPars::parse_str("BONDHARM:   # nothing", "f");
        assert_eq!(
            syntax_kind(result),
            (Some(1), SyntaxErrorKind::NoTextAfterColon)
        );
    }

    #[test]
    fn rejects_prefix_with_whitespace() {
        let result = ParsedPars::parse_str("# header\n\nBOND HARM: PARS C C 1 2", "f");
        assert_eq!(
            syntax_kind(result),
            (
                Some(3),
                SyntaxErrorKind::WhitespaceInPrefix("BOND HARM".to_string())
            )
        );
    }

    #[test]
    fn rejects_command_without_data() {
        let result = ParsedPars::parse_str("FIXQ: DIELECTRIC 1.0\nFIXQ: SCALE   ", "f");
        assert_eq!(
            syntax_kind(result),
            (Some(2), SyntaxErrorKind::MissingData("SCALE".to_string()))
        );
    }

    #[test]
    fn syntax_error_message_names_file_and_line() {
        let err = ParsedPars::parse_str("oops", "ff.pars").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Syntax error at ff.pars:1: line does not contain a colon"
        );
    }

    #[test]
    fn load_reads_file_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pars.txt");
        fs::write(&path, "BONDHARM: PARS C C 1.0 2.0\n").unwrap();
        let pars = ParsedPars::load(&path).unwrap();
        assert_eq!(pars.section("BONDHARM").command("PARS").len(), 1);
        assert!(pars.file().ends_with("pars.txt"));
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = ParsedPars::load(&dir.path().join("missing.txt"));
        assert!(matches!(result, Err(ParsError::Io { .. })));
    }
}
