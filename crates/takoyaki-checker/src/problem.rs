use std::{io::Read, str::FromStr};

use takoyaki_core::Board;

use crate::{BoardKind, CheckError, ProblemError};

/// A parsed problem description.
///
/// The textual format is a header line `n m v` followed by `n` rows of the
/// initial board and `n` rows of the target board, each row being `n`
/// characters of `'0'`/`'1'`:
///
/// ```text
/// 2 1 1
/// 10
/// 00
/// 00
/// 10
/// ```
///
/// `m` (the number of takoyaki) and `v` (the number of arm vertices) are
/// kept for reference but do not affect simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    /// Board side length `n`.
    pub size: usize,
    /// Number of takoyaki `m`.
    pub takoyaki_count: usize,
    /// Number of arm vertices `v`.
    pub arm_vertices: usize,
    /// Board the agent starts on.
    pub initial: Board,
    /// Board the agent should reach.
    pub target: Board,
}

impl Problem {
    /// Parses a problem description.
    ///
    /// Lines after the target board are ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`ProblemError`] if the header or any board row is malformed,
    /// or if the description ends early.
    ///
    /// # Examples
    ///
    /// ```
    /// use takoyaki_checker::Problem;
    ///
    /// let problem = Problem::parse("2 1 1\n10\n00\n00\n10\n")?;
    /// assert_eq!(problem.size, 2);
    /// assert_eq!(problem.initial.to_string(), "10\n00\n");
    /// assert_eq!(problem.target.to_string(), "00\n10\n");
    /// # Ok::<(), takoyaki_checker::ProblemError>(())
    /// ```
    pub fn parse(s: &str) -> Result<Self, ProblemError> {
        let mut lines = s.lines();
        let header = lines.next().ok_or(ProblemError::MissingHeader)?;
        let [size, takoyaki_count, arm_vertices] = parse_header(header)?;

        let initial = read_board(&mut lines, size, BoardKind::Initial)?;
        let target = read_board(&mut lines, size, BoardKind::Target)?;

        log::debug!(
            "parsed problem: n={size} m={takoyaki_count} v={arm_vertices}, {} takoyaki on the initial board",
            initial.count()
        );

        Ok(Self {
            size,
            takoyaki_count,
            arm_vertices,
            initial,
            target,
        })
    }

    /// Reads and parses a problem description from `reader`.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Io`] if reading fails and [`CheckError::Problem`]
    /// if the description is malformed.
    pub fn from_reader<R>(mut reader: R) -> Result<Self, CheckError>
    where
        R: Read,
    {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Self::parse(&text)?)
    }
}

impl FromStr for Problem {
    type Err = ProblemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_header(line: &str) -> Result<[usize; 3], ProblemError> {
    let invalid = || ProblemError::InvalidHeader {
        line: line.to_owned(),
    };
    let values = line
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<Vec<usize>, _>>()
        .map_err(|_| invalid())?;
    let header: [usize; 3] = values.try_into().map_err(|_| invalid())?;
    if header[0] == 0 {
        return Err(invalid());
    }
    Ok(header)
}

fn read_board<'a, I>(lines: &mut I, size: usize, kind: BoardKind) -> Result<Board, ProblemError>
where
    I: Iterator<Item = &'a str>,
{
    // Rows are collected before allocating so that `n` never exceeds the input.
    let rows: Vec<&str> = lines.by_ref().take(size).collect();
    if rows.len() < size {
        return Err(ProblemError::MissingRow {
            board: kind,
            row: rows.len(),
        });
    }
    Board::from_rows(rows).map_err(|source| ProblemError::Board {
        board: kind,
        source,
    })
}

#[cfg(test)]
mod tests {
    use takoyaki_core::{BoardParseError, Position};

    use super::*;

    #[test]
    fn test_parse_problem() {
        let problem = Problem::parse("3 2 1\n100\n000\n001\n000\n010\n010\n").unwrap();
        assert_eq!(problem.size, 3);
        assert_eq!(problem.takoyaki_count, 2);
        assert_eq!(problem.arm_vertices, 1);
        assert!(problem.initial.has_takoyaki(Position::new(0, 0)));
        assert!(problem.initial.has_takoyaki(Position::new(2, 2)));
        assert_eq!(problem.initial.count(), 2);
        assert!(problem.target.has_takoyaki(Position::new(1, 1)));
        assert!(problem.target.has_takoyaki(Position::new(2, 1)));
        assert_eq!(problem.target.count(), 2);
    }

    #[test]
    fn test_parse_accepts_crlf_and_trailing_lines() {
        let problem: Problem = "2 1 1\r\n10\r\n00\r\n00\r\n10\r\nextra\n".parse().unwrap();
        assert_eq!(problem.initial.to_string(), "10\n00\n");
        assert_eq!(problem.target.to_string(), "00\n10\n");
    }

    #[test]
    fn test_from_reader() {
        let problem = Problem::from_reader("1 1 1\n1\n1\n".as_bytes()).unwrap();
        assert_eq!(problem.size, 1);
        assert_eq!(problem.initial, problem.target);
        assert!(matches!(
            Problem::from_reader(&b"1 1 1\n\xff\n"[..]),
            Err(CheckError::Io(_))
        ));
    }

    #[test]
    fn test_parse_header_errors() {
        assert_eq!(Problem::parse(""), Err(ProblemError::MissingHeader));
        for header in ["2 1", "2 1 1 1", "a 1 1", "-2 1 1", "0 0 1"] {
            assert_eq!(
                Problem::parse(&format!("{header}\n10\n00\n00\n10\n")),
                Err(ProblemError::InvalidHeader {
                    line: header.to_owned()
                }),
                "header {header:?}"
            );
        }
    }

    #[test]
    fn test_parse_missing_rows() {
        assert_eq!(
            Problem::parse("2 1 1\n10\n"),
            Err(ProblemError::MissingRow {
                board: BoardKind::Initial,
                row: 1
            })
        );
        assert_eq!(
            Problem::parse("2 1 1\n10\n00\n00\n"),
            Err(ProblemError::MissingRow {
                board: BoardKind::Target,
                row: 1
            })
        );
    }

    #[test]
    fn test_parse_oversized_header_is_missing_row() {
        assert_eq!(
            Problem::parse("100000 1 1\n0\n"),
            Err(ProblemError::MissingRow {
                board: BoardKind::Initial,
                row: 1
            })
        );
        // Does not fit in `usize` on 32-bit targets, whose parse rejects the header.
        assert!(matches!(
            Problem::parse("4294967296 1 1\n0\n"),
            Err(ProblemError::MissingRow {
                board: BoardKind::Initial,
                row: 1
            } | ProblemError::InvalidHeader { .. })
        ));
    }

    #[test]
    fn test_parse_malformed_rows() {
        assert_eq!(
            Problem::parse("2 1 1\n100\n00\n00\n10\n"),
            Err(ProblemError::Board {
                board: BoardKind::Initial,
                source: BoardParseError::RowLength {
                    row: 0,
                    expected: 2,
                    actual: 3
                }
            })
        );
        assert_eq!(
            Problem::parse("2 1 1\n10\n00\n00\n1x\n"),
            Err(ProblemError::Board {
                board: BoardKind::Target,
                source: BoardParseError::InvalidCell {
                    row: 1,
                    col: 1,
                    ch: 'x'
                }
            })
        );
    }
}
