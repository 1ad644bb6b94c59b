use std::io::{self, BufRead, Read};

use crate::{CheckError, CheckOptions, Problem, SimulationReport, Simulator, SolutionHeader};

/// Result of a successful validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// The parsed problem.
    pub problem: Problem,
    /// The solution lines preceding the moves.
    pub header: SolutionHeader,
    /// Final state after the last move.
    pub simulation: SimulationReport,
}

/// Validates a candidate solution read from `solution` against the problem
/// read from `problem`.
///
/// The solution is consumed line by line; the problem is read in full first.
///
/// # Errors
///
/// Returns [`CheckError::Io`] if reading fails, [`CheckError::Problem`] or
/// [`CheckError::Solution`] for malformed input, and
/// [`CheckError::Violation`] for the first rule violation.
pub fn check<P, S>(
    problem: P,
    solution: S,
    options: &CheckOptions,
) -> Result<CheckReport, CheckError>
where
    P: Read,
    S: BufRead,
{
    let problem = Problem::from_reader(problem)?;
    simulate(problem, solution.lines(), options)
}

/// Validates an in-memory candidate solution against an in-memory problem.
///
/// # Errors
///
/// Same as [`check`], except that reading cannot fail.
pub fn check_str(
    problem: &str,
    solution: &str,
    options: &CheckOptions,
) -> Result<CheckReport, CheckError> {
    let problem = Problem::parse(problem)?;
    simulate(
        problem,
        solution.lines().map(|line| Ok(line.to_owned())),
        options,
    )
}

/// Replays the solution `lines` (header included) against `problem`.
///
/// # Errors
///
/// Same as [`check`].
pub fn simulate<I>(
    problem: Problem,
    lines: I,
    options: &CheckOptions,
) -> Result<CheckReport, CheckError>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    let mut lines = lines.into_iter();
    let header = SolutionHeader::read(&mut lines)?;
    let (x, y) = header.start;

    let mut simulator = Simulator::new(problem.initial.clone(), x, y, options)?;
    for line in lines {
        simulator.apply_line(&line?)?;
    }
    let simulation = simulator.finish()?;

    Ok(CheckReport {
        problem,
        header,
        simulation,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use takoyaki_core::Position;

    use super::*;
    use crate::{ProblemError, SolutionError, ViolationError, ViolationKind};

    const PROBLEM: &str = "2 1 1\n10\n00\n00\n10\n";

    #[test]
    fn test_check_reads_streams() {
        let report = check(
            Cursor::new(PROBLEM),
            Cursor::new("1\n0 0\n.P\nDP\n"),
            &CheckOptions::default(),
        )
        .unwrap();
        assert_eq!(report.header.arm_vertices, Some(1));
        assert_eq!(report.simulation.turns, 2);
        assert_eq!(report.simulation.position, Position::new(1, 0));
        assert_eq!(report.simulation.board, report.problem.target);
    }

    #[test]
    fn test_check_does_not_compare_with_target() {
        let report = check_str(PROBLEM, "1\n0 0\nR.\n", &CheckOptions::default()).unwrap();
        assert_ne!(report.simulation.board, report.problem.target);
    }

    #[test]
    fn test_empty_script_is_legal() {
        let report = check_str(PROBLEM, "1\n1 1\n", &CheckOptions::default()).unwrap();
        assert_eq!(report.simulation.turns, 0);
        assert_eq!(report.simulation.position, Position::new(1, 1));
    }

    #[test]
    fn test_check_reports_input_errors() {
        assert!(matches!(
            check_str("2 1\n", "1\n0 0\n", &CheckOptions::default()),
            Err(CheckError::Problem(ProblemError::InvalidHeader { .. }))
        ));
        assert!(matches!(
            check_str(PROBLEM, "1\n", &CheckOptions::default()),
            Err(CheckError::Solution(SolutionError::MissingStart))
        ));
        assert!(matches!(
            check(
                Cursor::new(PROBLEM),
                Cursor::new(b"1\n0 0\n\xff\xfe\n".to_vec()),
                &CheckOptions::default()
            ),
            Err(CheckError::Io(_))
        ));
    }

    #[test]
    fn test_check_rejects_board_size_beyond_input() {
        assert!(matches!(
            check_str("100000 1 1\n0\n", "1\n0 0\n", &CheckOptions::default()),
            Err(CheckError::Problem(ProblemError::MissingRow { row: 1, .. }))
        ));
    }

    #[test]
    fn test_check_reports_start_outside_board() {
        let err = check_str(PROBLEM, "1\n2 0\n", &CheckOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            CheckError::Violation(ViolationError::InvalidStartPosition { x: 2, y: 0, size: 2 })
        ));
    }

    #[test]
    fn test_check_stops_at_first_violation() {
        let err = check_str(PROBLEM, "1\n0 0\nDP\nXX\n", &CheckOptions::default()).unwrap_err();
        assert_eq!(err.violation_kind(), Some(ViolationKind::NotFoundTakoyaki));
        assert_eq!(err.to_string(), "not found takoyaki (turn 1) at (1, 0)");
    }

    #[test]
    fn test_blank_move_line_is_illegal_direction() {
        let err = check_str(PROBLEM, "1\n0 0\n.P\n\nDP\n", &CheckOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            CheckError::Violation(ViolationError::IllegalDirection { turn: 2, token: '\n' })
        ));
    }
}
