//! Markdown to board parsing.

use super::{DONE_TASK_PREFIX, HEADING_PREFIX, OPEN_TASK_PREFIX};
use crate::board::domain::{Board, ColumnSet, Task};

/// Task line with an uppercase marker; read as an open task.
const UPPERCASE_MARKER_PREFIX: &str = "- [X] ";

/// A recognised line of the checklist dialect.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Heading(&'a str),
    Task { done: bool, text: &'a str },
    Other,
}

/// Parses markdown checklist text into a board.
///
/// Parsing is best effort and never fails:
///
/// - `## <name>` selects the current column when `<name>` is configured;
///   other headings leave the current column as it was.
/// - `- [ ] <text>` and `- [x] <text>` add a task to the current column.
///   Only a lowercase `x` marks a task done: `- [X] <text>` is kept as an
///   open task so that hand-edited files do not lose it on the next save.
/// - Task lines before the first recognized heading, task lines with blank
///   text, and every other line are dropped.
///
/// The result holds every configured column, and each parsed task receives
/// a freshly generated identifier.
#[must_use]
pub fn parse(text: &str, columns: &ColumnSet) -> Board {
    let mut board = Board::empty(columns);
    let mut current: Option<&str> = None;

    for raw_line in text.lines() {
        match classify(raw_line) {
            Line::Heading(name) => {
                if let Some(known) = columns.names().iter().find(|column| *column == name) {
                    current = Some(known.as_str());
                }
            }
            Line::Task { done, text: task_text } => {
                if let Some(column) = current {
                    board.push_task(column, Task::with_fresh_id(task_text, done));
                }
            }
            Line::Other => {}
        }
    }

    board
}

fn classify(line: &str) -> Line<'_> {
    if let Some(name) = line.strip_prefix(HEADING_PREFIX) {
        return Line::Heading(name.trim());
    }

    let (done, rest) = if let Some(rest) = line.strip_prefix(DONE_TASK_PREFIX) {
        (true, rest)
    } else if let Some(rest) = line
        .strip_prefix(OPEN_TASK_PREFIX)
        .or_else(|| line.strip_prefix(UPPERCASE_MARKER_PREFIX))
    {
        (false, rest)
    } else {
        return Line::Other;
    };

    let text = rest.trim();
    if text.is_empty() {
        return Line::Other;
    }
    Line::Task { done, text }
}

#[cfg(test)]
mod tests {
    use super::{Line, classify};
    use rstest::rstest;

    #[rstest]
    #[case("## Backlog", Line::Heading("Backlog"))]
    #[case("##  Active  ", Line::Heading("Active"))]
    #[case("- [ ] write spec", Line::Task { done: false, text: "write spec" })]
    #[case("- [x]   draft design  ", Line::Task { done: true, text: "draft design" })]
    #[case("- [X] shouting", Line::Task { done: false, text: "shouting" })]
    #[case("- [ ]    ", Line::Other)]
    #[case("-[ ] no space", Line::Other)]
    #[case("* [ ] wrong bullet", Line::Other)]
    #[case("# Projects", Line::Other)]
    #[case("### Nested", Line::Other)]
    #[case("", Line::Other)]
    fn classify_recognises_dialect_lines(#[case] line: &str, #[case] expected: Line<'_>) {
        assert_eq!(classify(line), expected);
    }
}
