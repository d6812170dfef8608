use super::Aliases;

/// Separator between an alias name and its target.
pub const DELIMITER: char = '=';

/// A line that could not be read as `name=target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLine {
    /// 1-based line number in the file.
    pub line: usize,
    /// The trimmed line text.
    pub text: String,
}

/// Result of parsing an alias file.
#[derive(Debug, Default)]
pub struct Parsed {
    /// Every well-formed record, later duplicates overriding earlier ones.
    pub aliases: Aliases,
    /// Lines that were skipped.
    pub malformed: Vec<MalformedLine>,
}

/// Parse alias file contents.
///
/// Each line is trimmed and blank lines are dropped. The rest are split on the
/// first `=`; a line without one, or with nothing before it, is reported in
/// [`Parsed::malformed`] and otherwise ignored.
#[must_use]
pub fn parse(content: &str) -> Parsed {
    parse_bytes(content.as_bytes())
}

/// Parse raw alias file contents.
///
/// Same rules as [`parse`], except that a line which is not valid UTF-8 is
/// reported as malformed instead of failing the whole file.
#[must_use]
pub fn parse_bytes(content: &[u8]) -> Parsed {
    let mut parsed = Parsed::default();

    for (i, raw) in content.split(|&b| b == b'\n').enumerate() {
        let number = i + 1;
        let record = std::str::from_utf8(raw).map(str::trim);
        if matches!(record, Ok("")) {
            continue;
        }

        match record.ok().and_then(split_record) {
            Some((name, target)) => {
                parsed.aliases.insert(name.to_string(), target.to_string());
            }
            None => parsed.malformed.push(MalformedLine {
                line: number,
                text: String::from_utf8_lossy(raw).trim().to_string(),
            }),
        }
    }

    parsed
}

fn split_record(line: &str) -> Option<(&str, &str)> {
    line.split_once(DELIMITER).filter(|(name, _)| !name.is_empty())
}

/// Render one record the way it is stored on disk.
pub(super) fn format_record(name: &str, target: &str) -> String {
    format!("{name}{DELIMITER}{target}\n")
}
