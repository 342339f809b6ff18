//! Static board evaluation.
//!
//! A run of length `k` is counted from every `player` cell whose
//! `connect_n`-long window (scanning right, up, up-right or down-right) fits
//! on the board, starts with `k` discs of `player` and is empty afterwards.
//! Such a run can still be completed in place, so it is "open".

use games_connect4::{Grid, Player};

/// Weight of a completed connect.
pub const FOUR_WEIGHT: i64 = 100_000;
pub const THREE_WEIGHT: i64 = 100;
pub const TWO_WEIGHT: i64 = 10;
/// Score of any grid on which the opponent has already connected.
pub const LOSS_SCORE: i64 = -100_000;

/// Scan directions as (column step, row step): right, up, up-right and
/// down-right.
const SCAN_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Number of open runs of exactly `k` discs for `player`.
///
/// `k` larger than the grid's win length never matches.
pub fn count_open_runs(grid: &Grid, player: Player, k: usize) -> usize {
    let n = grid.connect_n();
    if k > n {
        return 0;
    }

    let mut count = 0;
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            if grid.cell(col, row) != Some(player) {
                continue;
            }
            count += SCAN_DIRECTIONS
                .iter()
                .filter(|&&direction| open_window(grid, col, row, direction, player, k, n))
                .count();
        }
    }
    count
}

/// The window of `n` cells from (col, row) fits on the board, holds `player`
/// in its first `k` cells and nothing in the rest.
fn open_window(
    grid: &Grid,
    col: usize,
    row: usize,
    direction: (isize, isize),
    player: Player,
    k: usize,
    n: usize,
) -> bool {
    (0..n).all(|steps| match grid.cell_along(col, row, direction, steps) {
        None => false,
        Some(cell) if steps < k => cell == Some(player),
        Some(cell) => cell.is_none(),
    })
}

/// Heuristic value of `grid` for `player`.
///
/// Returns [`LOSS_SCORE`] as soon as the opponent holds a connect, whatever
/// `player` holds. Otherwise the weighted difference of open fours, threes and
/// twos between `player` and the opponent.
pub fn score(grid: &Grid, player: Player) -> i64 {
    let opponent = player.opponent();

    let opp_fours = count_open_runs(grid, opponent, 4) as i64;
    if opp_fours > 0 {
        return LOSS_SCORE;
    }

    let my_fours = count_open_runs(grid, player, 4) as i64;
    let my_threes = count_open_runs(grid, player, 3) as i64;
    let my_twos = count_open_runs(grid, player, 2) as i64;
    let opp_threes = count_open_runs(grid, opponent, 3) as i64;
    let opp_twos = count_open_runs(grid, opponent, 2) as i64;

    (my_fours - opp_fours) * FOUR_WEIGHT
        + (my_threes - opp_threes) * THREE_WEIGHT
        + (my_twos - opp_twos) * TWO_WEIGHT
}
