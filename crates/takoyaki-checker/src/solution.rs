use std::io;

use crate::{CheckError, SolutionError};

/// The lines of a candidate solution that precede the moves.
///
/// A solver prints its arm first: a line with the number of arm vertices
/// (`1` for the single-node arm) and then the start coordinates `x y`.
/// The arm line may be omitted, in which case the first line is the start
/// position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolutionHeader {
    /// Number of arm vertices, if the arm line was present and numeric.
    pub arm_vertices: Option<usize>,
    /// Start row and column, not yet checked against the board.
    pub start: (isize, isize),
}

impl SolutionHeader {
    /// Reads the header from the front of `lines`, leaving the move lines.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Io`] if reading fails, and
    /// [`SolutionError::MissingStart`] or [`SolutionError::InvalidStart`] if
    /// the start position line is missing or malformed.
    ///
    /// # Examples
    ///
    /// ```
    /// use takoyaki_checker::SolutionHeader;
    ///
    /// let mut lines = ["1", "0 2", "DP"].into_iter().map(|l| Ok(l.to_owned()));
    /// let header = SolutionHeader::read(&mut lines)?;
    /// assert_eq!(header.arm_vertices, Some(1));
    /// assert_eq!(header.start, (0, 2));
    /// assert_eq!(lines.next().transpose()?, Some("DP".to_owned()));
    /// # Ok::<(), takoyaki_checker::CheckError>(())
    /// ```
    pub fn read<I>(lines: &mut I) -> Result<Self, CheckError>
    where
        I: Iterator<Item = io::Result<String>>,
    {
        let first = lines.next().ok_or(SolutionError::MissingStart)??;
        if let Some(start) = parse_start(&first) {
            return Ok(Self {
                arm_vertices: None,
                start,
            });
        }

        let arm_vertices = first.trim().parse::<usize>().ok();
        match arm_vertices {
            Some(1) => {}
            Some(v) => log::warn!("arm has {v} vertices; only the root is simulated"),
            None => log::warn!("ignoring unrecognised arm line {first:?}"),
        }

        let line = lines.next().ok_or(SolutionError::MissingStart)??;
        let start = parse_start(&line).ok_or(SolutionError::InvalidStart { line })?;
        Ok(Self {
            arm_vertices,
            start,
        })
    }
}

fn parse_start(line: &str) -> Option<(isize, isize)> {
    let mut fields = line.split_whitespace().map(str::parse::<isize>);
    match (fields.next(), fields.next(), fields.next()) {
        (Some(Ok(x)), Some(Ok(y)), None) => Some((x, y)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(text: &str) -> Result<SolutionHeader, CheckError> {
        let mut lines = text.lines().map(|line| Ok(line.to_owned()));
        SolutionHeader::read(&mut lines)
    }

    #[test]
    fn test_read_with_arm_line() {
        let header = read("1\n2 3\nDP\n").unwrap();
        assert_eq!(header.arm_vertices, Some(1));
        assert_eq!(header.start, (2, 3));
    }

    #[test]
    fn test_read_without_arm_line() {
        let header = read("0 0\nDP\n").unwrap();
        assert_eq!(header.arm_vertices, None);
        assert_eq!(header.start, (0, 0));
    }

    #[test]
    fn test_read_skips_unrecognised_arm_line() {
        let header = read("arm\n-1 4\n").unwrap();
        assert_eq!(header.arm_vertices, None);
        assert_eq!(header.start, (-1, 4));
    }

    #[test]
    fn test_read_errors() {
        assert!(matches!(
            read(""),
            Err(CheckError::Solution(SolutionError::MissingStart))
        ));
        assert!(matches!(
            read("1\n"),
            Err(CheckError::Solution(SolutionError::MissingStart))
        ));
        assert!(matches!(
            read("1\n0 x\n"),
            Err(CheckError::Solution(SolutionError::InvalidStart { line })) if line == "0 x"
        ));
    }

    #[test]
    fn test_read_propagates_io_errors() {
        let mut lines =
            std::iter::once(Err(io::Error::new(io::ErrorKind::InvalidData, "bad utf-8")));
        assert!(matches!(
            SolutionHeader::read(&mut lines),
            Err(CheckError::Io(_))
        ));
    }
}
