//! Game loop: seats take turns on one grid until a win or a draw.

use std::io::{BufRead, Write};

use agents::{Agent, AgentConfig, SavedState};
use anyhow::{anyhow, Context, Result};
use games_connect4::{GameState, Grid, Player};
use tracing::debug;

use crate::config::SeatKind;

/// One side of the table.
#[derive(Debug)]
pub enum Seat {
    Human,
    Agent {
        agent: Agent,
        saved_state: Option<SavedState>,
    },
}

impl Seat {
    pub fn new(kind: SeatKind, config: &AgentConfig) -> Self {
        match kind {
            SeatKind::Human => Seat::Human,
            SeatKind::Agent(kind) => Seat::Agent {
                agent: Agent::new(kind, config),
                saved_state: None,
            },
        }
    }

    pub fn kind(&self) -> SeatKind {
        match self {
            Seat::Human => SeatKind::Human,
            Seat::Agent { agent, .. } => SeatKind::Agent(agent.kind()),
        }
    }

    /// Column this seat plays for `player` on `grid`.
    fn choose<R: BufRead, W: Write>(
        &mut self,
        grid: &Grid,
        player: Player,
        input: &mut R,
        output: &mut W,
    ) -> Result<usize> {
        match self {
            Seat::Human => prompt_column(grid, player, input, output),
            Seat::Agent { agent, saved_state } => {
                let (column, state) = agent
                    .generate_move(grid, player, saved_state.take())
                    .with_context(|| format!("{} agent failed to move", agent.kind()))?;
                *saved_state = state;
                writeln!(output, "{player} plays column {column}")?;
                Ok(column)
            }
        }
    }
}

/// Ask on `input` until a playable column is entered.
fn prompt_column<R: BufRead, W: Write>(
    grid: &Grid,
    player: Player,
    input: &mut R,
    output: &mut W,
) -> Result<usize> {
    let last = grid.cols() - 1;
    loop {
        write!(output, "{player}, choose a column [0-{last}]: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line).context("failed to read from stdin")? == 0 {
            return Err(anyhow!("input closed while waiting for {player}"));
        }

        match line.trim().parse::<usize>() {
            Ok(column) if grid.is_valid_move(column) => return Ok(column),
            Ok(column) if column < grid.cols() => {
                writeln!(output, "Column {column} is full, try again.")?;
            }
            _ => writeln!(output, "Enter a number between 0 and {last}.")?,
        }
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    /// None for a draw
    pub winner: Option<Player>,
    pub moves: u32,
    pub final_grid: Grid,
}

/// Play one game from an empty grid shaped like `template`. `seats[0]`
/// plays `Player::One`.
pub fn play_game<R: BufRead, W: Write>(
    template: &Grid,
    seats: &mut [Seat; 2],
    input: &mut R,
    output: &mut W,
) -> Result<GameOutcome> {
    let mut grid = Grid::with_dimensions(template.rows(), template.cols(), template.connect_n())?;
    let mut player = Player::One;
    let mut moves = 0;

    writeln!(output, "{grid}")?;

    loop {
        let seat = &mut seats[seat_index(player)];
        let column = seat.choose(&grid, player, input, output)?;
        grid.apply_move(column, player)
            .with_context(|| format!("{player} chose column {column}"))?;
        moves += 1;

        writeln!(output, "{grid}")?;
        debug!(player = %player, column, moves, "Move applied");

        match state_after_move(&grid, column, player) {
            GameState::Win => {
                writeln!(output, "{player} wins after {moves} moves!")?;
                return Ok(GameOutcome {
                    winner: Some(player),
                    moves,
                    final_grid: grid,
                });
            }
            GameState::Draw => {
                writeln!(output, "Draw after {moves} moves.")?;
                return Ok(GameOutcome {
                    winner: None,
                    moves,
                    final_grid: grid,
                });
            }
            GameState::Ongoing => player = player.opponent(),
        }
    }
}

/// State once `player` has dropped into `column` during a game that was
/// still open before the move, so only lines through that disc can be new.
fn state_after_move(grid: &Grid, column: usize, player: Player) -> GameState {
    if grid.wins_with(column, player) {
        GameState::Win
    } else if grid.is_full() {
        GameState::Draw
    } else {
        GameState::Ongoing
    }
}

fn seat_index(player: Player) -> usize {
    match player {
        Player::One => 0,
        Player::Two => 1,
    }
}

/// Results across a match, counted per seat as configured (player1,
/// player2) even when seats swap sides between games.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    pub games: u32,
    pub wins: [u32; 2],
    pub draws: u32,
    pub total_moves: u64,
}

impl Tally {
    /// Record `outcome`; `swapped` means the configured player2 moved first.
    pub fn record(&mut self, outcome: &GameOutcome, swapped: bool) {
        self.games += 1;
        self.total_moves += outcome.moves as u64;

        match outcome.winner {
            Some(player) => {
                let index = seat_index(player) ^ usize::from(swapped);
                self.wins[index] += 1;
            }
            None => self.draws += 1,
        }
    }

    pub fn avg_moves(&self) -> f64 {
        if self.games > 0 {
            self.total_moves as f64 / self.games as f64
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agents::AgentKind;
    use std::io::Cursor;

    fn humans() -> [Seat; 2] {
        [Seat::Human, Seat::Human]
    }

    fn run(template: &Grid, seats: &mut [Seat; 2], script: &str) -> (Result<GameOutcome>, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let outcome = play_game(template, seats, &mut input, &mut output);
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn human_game_vertical_win() {
        let (outcome, output) = run(&Grid::new(), &mut humans(), "0\n1\n0\n1\n0\n1\n0\n");
        let outcome = outcome.unwrap();

        assert_eq!(outcome.winner, Some(Player::One));
        assert_eq!(outcome.moves, 7);
        assert!(outcome.final_grid.connected(Player::One));
        assert!(output.contains("Player 1 (X) wins after 7 moves!"));
    }

    #[test]
    fn human_input_is_reprompted() {
        let (outcome, output) = run(&Grid::new(), &mut humans(), "abc\n7\n\n0\n1\n0\n1\n0\n1\n0\n");

        assert_eq!(outcome.unwrap().moves, 7);
        assert_eq!(output.matches("Enter a number between 0 and 6.").count(), 3);
    }

    #[test]
    fn full_column_is_reprompted() {
        // One row, no room for three in a row after O takes the middle
        let template = Grid::with_dimensions(1, 3, 3).unwrap();
        let (outcome, output) = run(&template, &mut humans(), "0\n0\n1\n2\n");
        let outcome = outcome.unwrap();

        assert!(output.contains("Column 0 is full, try again."));
        assert_eq!(outcome.winner, None);
        assert_eq!(outcome.moves, 3);
        assert!(output.contains("Draw after 3 moves."));
    }

    #[test]
    fn closed_input_is_an_error() {
        let (outcome, _) = run(&Grid::new(), &mut humans(), "3\n");
        let err = outcome.unwrap_err();
        assert!(err.to_string().contains("input closed"));
    }

    #[test]
    fn agent_game_reaches_an_end() {
        let config = AgentConfig::default()
            .with_seed(8)
            .with_minimax_depth(2)
            .with_mcts_iterations(100);
        for (first, second) in [
            (AgentKind::Random, AgentKind::Minimax),
            (AgentKind::Mcts, AgentKind::Random),
        ] {
            let mut seats = [
                Seat::new(SeatKind::Agent(first), &config),
                Seat::new(SeatKind::Agent(second), &config),
            ];
            let (outcome, output) = run(&Grid::new(), &mut seats, "");
            let outcome = outcome.unwrap();

            assert!(outcome.final_grid.is_terminal());
            assert!(outcome.moves >= 7);
            assert_eq!(outcome.final_grid.winner(), outcome.winner);
            assert!(output.contains("plays column"));
        }
    }

    #[test]
    fn move_state_matches_full_scan_during_play() {
        let (outcome, _) = run(&Grid::new(), &mut humans(), "3\n3\n4\n4\n5\n5\n6\n");
        let outcome = outcome.unwrap();
        let grid = &outcome.final_grid;

        assert_eq!(outcome.winner, Some(Player::One));
        assert_eq!(state_after_move(grid, 6, Player::One), GameState::Win);
        assert_eq!(grid.check_state(Player::One, None), GameState::Win);
        // O's last disc in column 5 does not connect
        assert_eq!(state_after_move(grid, 5, Player::Two), GameState::Ongoing);
    }

    #[test]
    fn tally_counts_per_configured_seat() {
        let win = |player| GameOutcome {
            winner: Some(player),
            moves: 10,
            final_grid: Grid::new(),
        };
        let draw = GameOutcome {
            winner: None,
            moves: 42,
            final_grid: Grid::new(),
        };

        let mut tally = Tally::default();
        tally.record(&win(Player::One), false);
        tally.record(&win(Player::One), true);
        tally.record(&win(Player::Two), true);
        tally.record(&draw, false);

        assert_eq!(tally.games, 4);
        assert_eq!(tally.wins, [2, 1]);
        assert_eq!(tally.draws, 1);
        assert!((tally.avg_moves() - 18.0).abs() < f64::EPSILON);
    }

    #[test]
    fn seat_kind_round_trip() {
        let config = AgentConfig::default().with_seed(0);
        for kind in [SeatKind::Human, SeatKind::Agent(AgentKind::Mcts)] {
            assert_eq!(Seat::new(kind, &config).kind(), kind);
        }
    }
}
