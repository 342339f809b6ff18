use super::*;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Play columns alternately, starting with `Player::One`.
fn play(moves: &[usize]) -> Grid {
    let mut grid = Grid::new();
    let mut player = Player::One;
    for &col in moves {
        grid.apply_move(col, player).unwrap();
        player = player.opponent();
    }
    grid
}

fn occupied(grid: &Grid) -> usize {
    (0..grid.rows())
        .flat_map(|row| (0..grid.cols()).map(move |col| (col, row)))
        .filter(|&(col, row)| grid.cell(col, row).is_some())
        .count()
}

/// Full board with no four in a row for either player:
/// ```text
/// Row 5: X O X O X O X
/// Row 4: X O X O X O X
/// Row 3: O X O X O X O
/// Row 2: O X O X O X O
/// Row 1: X O X O X O X
/// Row 0: X O X O X O X
/// ```
fn draw_grid() -> Grid {
    let mut grid = Grid::new();
    for col in 0..COLS {
        for row in 0..ROWS {
            let player = if (col % 2 == 0) == ((row / 2) % 2 == 0) {
                Player::One
            } else {
                Player::Two
            };
            grid.set_cell(col, row, Some(player));
        }
    }
    grid
}

fn mirror(grid: &Grid) -> Grid {
    let mut mirrored = grid.clone();
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            mirrored.set_cell(grid.cols() - 1 - col, row, grid.cell(col, row));
        }
    }
    mirrored
}

fn transpose(grid: &Grid) -> Grid {
    let mut transposed = Grid::with_dimensions(grid.cols(), grid.rows(), grid.connect_n()).unwrap();
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            transposed.set_cell(row, col, grid.cell(col, row));
        }
    }
    transposed
}

#[test]
fn test_initial_state() {
    let grid = Grid::new();
    assert_eq!(grid.rows(), ROWS);
    assert_eq!(grid.cols(), COLS);
    assert_eq!(grid.connect_n(), CONNECT_N);
    assert_eq!(occupied(&grid), 0);
    assert_eq!(grid.check_state(Player::One, None), GameState::Ongoing);
    assert_eq!(grid.check_state(Player::Two, None), GameState::Ongoing);
    assert_eq!(grid, Grid::default());
    assert!(!grid.is_terminal());
}

#[test]
fn test_invalid_dimensions() {
    for (rows, cols, n) in [(0, 7, 4), (6, 0, 4), (6, 7, 0)] {
        assert_eq!(
            Grid::with_dimensions(rows, cols, n),
            Err(BoardError::InvalidDimensions {
                rows,
                cols,
                connect_n: n
            })
        );
    }
    assert!(Grid::with_dimensions(1, 1, 1).is_ok());
}

#[test]
fn test_valid_moves() {
    let grid = Grid::new();
    assert_eq!(grid.valid_moves(), (0..COLS).collect::<Vec<_>>());
    assert!(grid.has_valid_move());
    assert!(!grid.is_valid_move(COLS));

    // After one move every column is still open
    let grid = play(&[3]);
    assert_eq!(grid.valid_moves().len(), COLS);
}

#[test]
fn test_player_helpers() {
    assert_eq!(Player::One.opponent(), Player::Two);
    assert_eq!(Player::Two.opponent(), Player::One);
    assert_eq!(Player::MAX, Player::One);
    assert_eq!(Player::from_symbol(Player::One.symbol()), Some(Player::One));
    assert_eq!(Player::from_symbol(Player::Two.symbol()), Some(Player::Two));
    assert_eq!(Player::from_symbol('?'), None);
    assert_eq!(Player::Two.to_string(), "Player 2 (O)");
}

#[test]
fn test_stacking_pieces() {
    let mut grid = Grid::new();

    for row in 0..ROWS {
        assert_eq!(grid.apply_move(0, Player::One), Ok(row));
        assert_eq!(grid.top_row(0), Some(row));
    }

    // Column 0 is now full
    assert!(!grid.is_valid_move(0));
    assert!(!grid.valid_moves().contains(&0));
    assert_eq!(grid.valid_moves().len(), COLS - 1);
}

#[test]
fn test_invalid_move_full_column() {
    let mut grid = Grid::new();
    for _ in 0..ROWS {
        grid.apply_move(0, Player::Two).unwrap();
    }

    let before = grid.clone();
    assert_eq!(
        grid.apply_move(0, Player::One),
        Err(BoardError::InvalidMove { column: 0 })
    );
    assert_eq!(grid, before);
}

#[test]
fn test_column_out_of_range() {
    let mut grid = play(&[1, 2]);
    let before = grid.clone();
    assert_eq!(
        grid.apply_move(COLS, Player::One),
        Err(BoardError::ColumnOutOfRange {
            column: COLS,
            cols: COLS
        })
    );
    assert_eq!(grid, before);
    assert_eq!(grid.top_row(COLS), None);
}

#[test]
fn test_with_move_does_not_alias() {
    let grid = play(&[3]);
    let next = grid.with_move(3, Player::Two).unwrap();

    assert_eq!(occupied(&grid), 1);
    assert_eq!(occupied(&next), 2);
    assert_eq!(next.cell(3, 1), Some(Player::Two));
    assert_eq!(grid.cell(3, 1), None);
}

#[test]
fn test_moves_only_fill_one_cell() {
    for seed in 0..20 {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut grid = Grid::new();
        let mut player = Player::One;

        while let Some(&col) = grid.valid_moves().choose(&mut rng) {
            let before = grid.clone();
            let row = grid.apply_move(col, player).unwrap();

            assert_eq!(occupied(&grid), occupied(&before) + 1, "seed={seed}");
            assert_eq!(grid.cell(col, row), Some(player));
            for r in 0..ROWS {
                for c in 0..COLS {
                    if (c, r) != (col, row) {
                        assert_eq!(grid.cell(c, r), before.cell(c, r), "seed={seed}");
                    }
                }
            }
            player = player.opponent();
        }

        assert!(grid.is_full());
        assert!(!grid.has_valid_move());
    }
}

#[test]
fn test_horizontal_win() {
    // X: 0, 1, 2, 3 on the bottom row; O stacks on top
    let grid = play(&[0, 0, 1, 1, 2, 2, 3]);

    assert_eq!(grid.check_state(Player::One, Some(3)), GameState::Win);
    assert_eq!(grid.check_state(Player::One, None), GameState::Win);
    assert_eq!(grid.check_state(Player::Two, None), GameState::Ongoing);
    assert_eq!(grid.winner(), Some(Player::One));
    assert!(grid.is_terminal());
}

#[test]
fn test_vertical_win() {
    let grid = play(&[0, 1, 0, 1, 0, 1]);
    assert_eq!(grid.check_state(Player::One, Some(0)), GameState::Ongoing);

    let grid = play(&[0, 1, 0, 1, 0, 1, 0]);
    assert_eq!(grid.check_state(Player::One, Some(0)), GameState::Win);
    assert_eq!(grid.winner(), Some(Player::One));
}

#[test]
fn test_diagonal_win_ascending() {
    // X at (0,0), (1,1), (2,2), (3,3)
    let grid = play(&[0, 1, 1, 2, 2, 3, 2, 3, 3, 6, 3]);

    assert_eq!(grid.cell(3, 3), Some(Player::One));
    assert_eq!(grid.check_state(Player::One, Some(3)), GameState::Win);
    assert_eq!(grid.check_state(Player::One, None), GameState::Win);
    assert_eq!(grid.check_state(Player::Two, None), GameState::Ongoing);
}

#[test]
fn test_diagonal_win_descending() {
    // X at (3,0), (2,1), (1,2), (0,3)
    let grid = play(&[3, 2, 2, 1, 1, 0, 1, 0, 0, 4, 0]);

    assert_eq!(grid.check_state(Player::One, Some(0)), GameState::Win);
    assert_eq!(grid.check_state(Player::One, None), GameState::Win);
    assert_eq!(grid.winner(), Some(Player::One));
}

#[test]
fn test_draw_game() {
    let grid = draw_grid();

    assert!(grid.is_full());
    assert_eq!(grid.winner(), None);
    assert_eq!(grid.check_state(Player::One, None), GameState::Draw);
    assert_eq!(grid.check_state(Player::Two, Some(6)), GameState::Draw);
    assert!(grid.is_terminal());
    assert!(grid.valid_moves().is_empty());
}

#[test]
fn test_hint_matches_full_scan_over_random_games() {
    for seed in 0..50 {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut grid = Grid::new();
        let mut player = Player::One;

        while let Some(&col) = grid.valid_moves().choose(&mut rng) {
            grid.apply_move(col, player).unwrap();
            let hinted = grid.check_state(player, Some(col));
            assert_eq!(hinted, grid.check_state(player, None), "seed={seed}");
            if hinted == GameState::Win {
                assert_eq!(grid.winner(), Some(player));
                break;
            }
            player = player.opponent();
        }
    }
}

#[test]
fn test_hint_falls_back_to_full_scan() {
    // X wins on the bottom row, then O drops on column 6
    let mut grid = play(&[0, 0, 1, 1, 2, 2, 3]);
    grid.apply_move(6, Player::Two).unwrap();

    // Top disc of the hinted column belongs to O
    assert_eq!(grid.check_state(Player::One, Some(6)), GameState::Win);
    // Empty hinted column
    assert_eq!(grid.check_state(Player::One, Some(5)), GameState::Win);
}

#[test]
fn test_hint_never_hides_an_existing_win() {
    // X already holds the bottom row 0-3; the hint names a later X move
    let mut grid = play(&[0, 0, 1, 1, 2, 2, 3]);
    grid.apply_move(6, Player::Two).unwrap();
    grid.apply_move(5, Player::One).unwrap();

    assert!(!grid.wins_with(5, Player::One));
    assert_eq!(grid.check_state(Player::One, None), GameState::Win);
    assert_eq!(grid.check_state(Player::One, Some(5)), GameState::Win);
    for col in 0..grid.cols() {
        assert_eq!(grid.check_state(Player::One, Some(col)), GameState::Win);
    }
}

#[test]
fn test_hint_equals_full_scan_on_parsed_grids() {
    for seed in 0..30 {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut grid = Grid::new();
        let mut player = Player::One;

        // Keep playing past the first connect so older wins stay on the board
        for _ in 0..30 {
            let Some(&col) = grid.valid_moves().choose(&mut rng) else {
                break;
            };
            grid.apply_move(col, player).unwrap();
            player = player.opponent();
        }

        let parsed: Grid = grid.to_string().parse().unwrap();
        for p in [Player::One, Player::Two] {
            let full = parsed.check_state(p, None);
            for col in 0..parsed.cols() {
                assert_eq!(parsed.check_state(p, Some(col)), full, "seed={seed} col={col}");
            }
        }
    }
}

#[test]
fn test_wins_with_checks_the_top_disc() {
    let grid = play(&[0, 1, 0, 1, 0, 1, 0]);
    assert!(grid.wins_with(0, Player::One));
    // Top disc of column 1 is O's, and O has no line
    assert!(!grid.wins_with(1, Player::One));
    assert!(!grid.wins_with(1, Player::Two));
    // Empty and out-of-range columns
    assert!(!grid.wins_with(4, Player::One));
    assert!(!grid.wins_with(9, Player::One));
}

#[test]
fn test_mirror_invariance() {
    for seed in 0..20 {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut grid = Grid::new();
        let mut player = Player::One;

        while let Some(&col) = grid.valid_moves().choose(&mut rng) {
            grid.apply_move(col, player).unwrap();
            let mirrored = mirror(&grid);
            for p in [Player::One, Player::Two] {
                assert_eq!(grid.check_state(p, None), mirrored.check_state(p, None));
            }
            if grid.is_terminal() {
                break;
            }
            player = player.opponent();
        }
    }
}

#[test]
fn test_transpose_swaps_vertical_and_horizontal() {
    let mut grid = Grid::with_dimensions(7, 7, 4).unwrap();
    for _ in 0..4 {
        grid.apply_move(2, Player::Two).unwrap();
    }
    assert_eq!(grid.check_state(Player::Two, Some(2)), GameState::Win);

    let transposed = transpose(&grid);
    // Vertical run in column 2 becomes a horizontal run in row 2
    for col in 0..4 {
        assert_eq!(transposed.cell(col, 2), Some(Player::Two));
    }
    assert_eq!(transposed.check_state(Player::Two, None), GameState::Win);
    assert_eq!(transposed.winner(), Some(Player::Two));
}

#[test]
fn test_custom_connect_n() {
    let mut grid = Grid::with_dimensions(3, 3, 3).unwrap();
    grid.apply_move(0, Player::One).unwrap();
    grid.apply_move(1, Player::One).unwrap();
    assert_eq!(grid.check_state(Player::One, Some(1)), GameState::Ongoing);
    grid.apply_move(2, Player::One).unwrap();
    assert_eq!(grid.check_state(Player::One, Some(2)), GameState::Win);

    // Connect one: any disc wins
    let mut grid = Grid::with_dimensions(2, 2, 1).unwrap();
    assert_eq!(grid.winner(), None);
    grid.apply_move(1, Player::Two).unwrap();
    assert_eq!(grid.check_state(Player::Two, Some(1)), GameState::Win);
}

#[test]
fn test_cell_along_leaves_grid() {
    let grid = play(&[0]);
    assert_eq!(grid.cell_along(0, 0, (1, 0), 0), Some(Some(Player::One)));
    assert_eq!(grid.cell_along(0, 0, (1, 0), 6), Some(None));
    assert_eq!(grid.cell_along(0, 0, (1, 0), 7), None);
    assert_eq!(grid.cell_along(0, 0, (1, -1), 1), None);
}
