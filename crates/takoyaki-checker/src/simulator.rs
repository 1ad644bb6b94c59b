use takoyaki_core::{Board, Direction, Interaction, Move, Position};

use crate::{CheckOptions, ViolationError};

/// Character reported when a move line ends before its direction or
/// interaction token.
pub const END_OF_LINE: char = '\n';

/// Whether a [`Simulator`] can still accept moves.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SimulatorStatus {
    /// Every move so far was legal.
    Running,
    /// A move broke a rule; the simulator rejects all further input.
    Failed(ViolationError),
}

/// Final state of a fully legal script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationReport {
    /// Number of turns in the script.
    pub turns: usize,
    /// Final agent position.
    pub position: Position,
    /// Whether the agent ends holding a takoyaki.
    pub holding: bool,
    /// Final board.
    pub board: Board,
}

/// Replays a move script against a board and enforces the movement and
/// interaction rules.
///
/// Each turn first moves the agent, then checks that it is still on the
/// board, then applies the interaction at the new position:
///
/// - `P` on an occupied cell while empty-handed picks the takoyaki up;
/// - `P` on an empty cell while holding places the takoyaki there;
/// - `P` on an empty cell while empty-handed is [`ViolationError::NotFoundTakoyaki`];
/// - `P` on an occupied cell while holding is [`ViolationError::DuplicationTakoyaki`];
/// - `.` never touches the board.
///
/// The first violation is terminal: it is returned from the failing call and
/// from every later call. The turn limit is only checked by [`finish`],
/// once the script has ended.
///
/// # Examples
///
/// ```
/// use takoyaki_checker::{CheckOptions, Simulator, ViolationError};
/// use takoyaki_core::{Board, Position};
///
/// let board: Board = "10\n00".parse()?;
/// let mut sim = Simulator::new(board, 0, 0, &CheckOptions::default())?;
///
/// sim.apply_line(".P")?;
/// assert!(sim.is_holding());
/// assert!(!sim.board().has_takoyaki(Position::new(0, 0)));
///
/// let err = sim.apply_line("UP").unwrap_err();
/// assert_eq!(err, ViolationError::OutOfBoard { turn: 2, x: -1, y: 0 });
/// assert!(sim.status().is_failed());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// [`finish`]: Simulator::finish
#[derive(Debug, Clone)]
pub struct Simulator {
    board: Board,
    position: Position,
    holding: bool,
    turn: usize,
    max_operation_turns: usize,
    status: SimulatorStatus,
}

impl Simulator {
    /// Creates a simulator with the agent at `(x, y)`, empty-handed.
    ///
    /// # Errors
    ///
    /// Returns [`ViolationError::InvalidStartPosition`] if `(x, y)` is not on
    /// the board.
    pub fn new(
        board: Board,
        x: isize,
        y: isize,
        options: &CheckOptions,
    ) -> Result<Self, ViolationError> {
        let position = board
            .position(x, y)
            .ok_or(ViolationError::InvalidStartPosition {
                x,
                y,
                size: board.size(),
            })?;
        Ok(Self {
            board,
            position,
            holding: false,
            turn: 0,
            max_operation_turns: options.max_operation_turns,
            status: SimulatorStatus::Running,
        })
    }

    /// Returns the live board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the agent's position.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns `true` if the agent holds a takoyaki.
    #[must_use]
    pub fn is_holding(&self) -> bool {
        self.holding
    }

    /// Returns the number of turns processed so far, including a failing one.
    #[must_use]
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Returns the current status.
    #[must_use]
    pub fn status(&self) -> &SimulatorStatus {
        &self.status
    }

    /// Processes one raw line of the move script.
    ///
    /// The direction character is validated and applied before the
    /// interaction character is even looked at, so a line such as `"UX"`
    /// at the top edge fails with [`ViolationError::OutOfBoard`]. A missing
    /// character is reported as [`END_OF_LINE`]. Characters after the
    /// second are ignored.
    ///
    /// # Errors
    ///
    /// Returns the violation caused by this line, or the earlier violation
    /// if the simulator has already failed.
    pub fn apply_line(&mut self, line: &str) -> Result<(), ViolationError> {
        self.ensure_running()?;
        let result = self.process_line(line);
        self.record(result)
    }

    /// Processes one parsed move.
    ///
    /// # Errors
    ///
    /// Returns the violation caused by this move, or the earlier violation
    /// if the simulator has already failed.
    pub fn apply(&mut self, mv: Move) -> Result<(), ViolationError> {
        self.ensure_running()?;
        self.turn += 1;
        let result = self
            .advance(mv.direction)
            .and_then(|()| self.interact(mv.interaction));
        self.record(result)
    }

    /// Ends the script and checks the turn limit.
    ///
    /// # Errors
    ///
    /// Returns the earlier violation if the simulator has failed, or
    /// [`ViolationError::ExceedMaxOperationTurn`] if the script had more
    /// turns than allowed.
    pub fn finish(self) -> Result<SimulationReport, ViolationError> {
        self.ensure_running()?;
        if self.turn > self.max_operation_turns {
            return Err(ViolationError::ExceedMaxOperationTurn {
                count: self.turn,
                max: self.max_operation_turns,
            });
        }
        log::info!(
            "script is legal: {} turns, agent at {}, holding={}",
            self.turn,
            self.position,
            self.holding
        );
        Ok(SimulationReport {
            turns: self.turn,
            position: self.position,
            holding: self.holding,
            board: self.board,
        })
    }

    /// Applies every line of `lines` and then [`finish`](Self::finish)es.
    ///
    /// # Errors
    ///
    /// Returns the first violation.
    pub fn run<I, S>(mut self, lines: I) -> Result<SimulationReport, ViolationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.apply_line(line.as_ref())?;
        }
        self.finish()
    }

    fn ensure_running(&self) -> Result<(), ViolationError> {
        match &self.status {
            SimulatorStatus::Running => Ok(()),
            SimulatorStatus::Failed(err) => Err(err.clone()),
        }
    }

    fn record(&mut self, result: Result<(), ViolationError>) -> Result<(), ViolationError> {
        if let Err(err) = &result {
            log::debug!("turn {}: {err}", self.turn);
            self.status = SimulatorStatus::Failed(err.clone());
        }
        result
    }

    fn process_line(&mut self, line: &str) -> Result<(), ViolationError> {
        self.turn += 1;
        let turn = self.turn;
        let mut chars = line.trim_end_matches(['\r', '\n']).chars();

        let token = chars.next().unwrap_or(END_OF_LINE);
        let direction = Direction::try_from(token)
            .map_err(|_| ViolationError::IllegalDirection { turn, token })?;
        self.advance(direction)?;

        let token = chars.next().unwrap_or(END_OF_LINE);
        let interaction = Interaction::try_from(token)
            .map_err(|_| ViolationError::IllegalInteraction { turn, token })?;
        self.interact(interaction)
    }

    fn advance(&mut self, direction: Direction) -> Result<(), ViolationError> {
        let (x, y) = self.position.step(direction);
        self.position = self.board.position(x, y).ok_or(ViolationError::OutOfBoard {
            turn: self.turn,
            x,
            y,
        })?;
        Ok(())
    }

    fn interact(&mut self, interaction: Interaction) -> Result<(), ViolationError> {
        let turn = self.turn;
        let position = self.position;
        if interaction.is_pick_or_place() {
            match (self.board[position], self.holding) {
                (false, false) => {
                    log::debug!("board at turn {turn}:\n{}", self.board);
                    return Err(ViolationError::NotFoundTakoyaki { turn, position });
                }
                (true, true) => {
                    return Err(ViolationError::DuplicationTakoyaki { turn, position });
                }
                (occupied, _) => {
                    self.board.set_takoyaki(position, !occupied);
                    self.holding = occupied;
                }
            }
        }
        log::trace!(
            "turn {turn}: {interaction} at {position}, holding={}",
            self.holding
        );
        Ok(())
    }
}
