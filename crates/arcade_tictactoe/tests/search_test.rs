//! Tests for the minimax engine.

use arcade_tictactoe::{
    Board, EngineError, GameState, Geometry, Minimax, Mode, Outcome, Player, Position, Rules,
};

fn board(text: &str) -> Board {
    text.parse().expect("valid board")
}

/// Plays every human reply against the engine and returns the terminal
/// outcomes reached.
fn explore(game: &GameState, outcomes: &mut Vec<Outcome>) {
    let outcome = game.outcome();
    if outcome.is_terminal() {
        outcomes.push(outcome);
        return;
    }
    if game.is_computers_turn() {
        let next = game.request_computer_move().expect("computer move");
        explore(&next, outcomes);
        return;
    }
    for index in game.valid_moves() {
        let next = game.request_move(index).expect("legal human move");
        explore(&next, outcomes);
    }
}

#[test]
fn test_corner_reply_to_center_opening() {
    let rules = Rules::standard();
    let mut b = board("____X____");

    let report = Minimax::new(&rules, Player::O).analyze(&mut b).unwrap();
    let chosen = Position::from_index(report.index).unwrap();

    assert!(chosen.is_corner(), "expected a corner, got {}", chosen);
    assert_eq!(report.score, 0);
}

#[test]
fn test_empty_board_is_a_draw_and_ties_go_to_lowest_index() {
    let rules = Rules::standard();
    let mut b = Board::standard();

    let report = Minimax::new(&rules, Player::X).analyze(&mut b).unwrap();

    assert_eq!(report.index, 0);
    assert_eq!(report.score, 0);
    assert!(report.nodes > 0);
}

#[test]
fn test_prefers_immediate_win() {
    // O X X / X O _ / _ _ _  -- only square 8 wins now.
    let rules = Rules::standard();
    let mut b = board("OXX XO_ ___");

    let report = Minimax::new(&rules, Player::O).analyze(&mut b).unwrap();

    assert_eq!(report.index, 8);
    assert_eq!(report.score, 10);
}

#[test]
fn test_blocks_open_line() {
    // O _ _ / X X _ / _ _ _  -- X threatens square 5.
    let rules = Rules::standard();
    let mut b = board("O__ XX_ ___");

    assert_eq!(Minimax::new(&rules, Player::O).best_move(&mut b), Ok(5));
}

#[test]
fn test_reply_to_corner_and_center_leaves_no_forced_loss() {
    // X _ _ / _ O _ / _ _ _ with the engine playing X.
    let rules = Rules::standard();
    let mut b = board("X__ _O_ ___");

    let report = Minimax::new(&rules, Player::X).analyze(&mut b).unwrap();
    assert_eq!(report.score, 0);

    let mut after = b.apply_move(report.index, Player::X).unwrap();
    let reply = Minimax::new(&rules, Player::O).analyze(&mut after).unwrap();
    assert!(
        reply.score <= 0,
        "O can force a win after X plays {}",
        report.index
    );
}

#[test]
fn test_search_restores_board() {
    let rules = Rules::standard();
    let mut b = board("X__ _O_ __X");
    let before = b.clone();

    Minimax::new(&rules, Player::O).analyze(&mut b).unwrap();
    assert_eq!(b, before);

    let mut search = Minimax::new(&rules, Player::O);
    search.minimax(&mut b, 0, true);
    assert_eq!(b, before);
}

#[test]
fn test_search_is_deterministic() {
    let rules = Rules::standard();
    let mut b = board("_X_ ___ ___");

    let first = Minimax::new(&rules, Player::O).analyze(&mut b).unwrap();
    let second = Minimax::new(&rules, Player::O).analyze(&mut b).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_full_board_has_no_moves() {
    let rules = Rules::standard();
    let mut b = board("XOX OXO OXO");

    assert_eq!(
        Minimax::new(&rules, Player::O).best_move(&mut b),
        Err(EngineError::NoMovesAvailable)
    );
}

#[test]
fn test_terminal_scores() {
    let rules = Rules::standard();
    let mut search = Minimax::new(&rules, Player::O);

    assert_eq!(search.minimax(&mut board("OOO XX_ X__"), 3, true), 7);
    assert_eq!(search.minimax(&mut board("XXX OO_ ___"), 4, false), -6);
    assert_eq!(search.minimax(&mut board("XOX OXO OXO"), 8, true), 0);
}

#[test]
fn test_win_base_override() {
    let rules = Rules::standard();
    let mut b = board("OXX XO_ ___");

    let report = Minimax::new(&rules, Player::O)
        .with_win_base(100)
        .unwrap()
        .analyze(&mut b)
        .unwrap();
    assert_eq!(report.index, 8);
    assert_eq!(report.score, 100);
}

#[test]
fn test_win_base_must_exceed_square_count() {
    let rules = Rules::standard();

    assert!(Minimax::new(&rules, Player::O).with_win_base(0).is_err());
    assert!(Minimax::new(&rules, Player::O).with_win_base(9).is_err());
    assert_eq!(
        Minimax::new(&rules, Player::O).with_win_base(10).unwrap().win_base(),
        10
    );
}

#[test]
fn test_self_play_draws() {
    let mut game = GameState::standard(Mode::TwoPlayer);

    while !game.outcome().is_terminal() {
        let report = game.search(game.active_player()).unwrap();
        game = game.request_move(report.index).unwrap();
    }

    assert_eq!(game.outcome(), Outcome::Draw);
    assert_eq!(game.history().len(), 9);
}

#[test]
fn test_engine_as_o_never_loses() {
    let game = GameState::standard(Mode::VsComputer {
        computer: Player::O,
    });
    let mut outcomes = Vec::new();
    explore(&game, &mut outcomes);

    assert!(!outcomes.is_empty());
    assert!(!outcomes.contains(&Outcome::Won(Player::X)));
}

#[test]
fn test_engine_as_x_never_loses() {
    let game = GameState::standard(Mode::VsComputer {
        computer: Player::X,
    });
    let mut outcomes = Vec::new();
    explore(&game, &mut outcomes);

    assert!(!outcomes.is_empty());
    assert!(!outcomes.contains(&Outcome::Won(Player::O)));
}

#[test]
fn test_first_player_wins_two_by_two() {
    let rules = Rules::from_geometry(&Geometry::new(2, 2, 2).unwrap());
    let mut b = rules.empty_board();

    let report = Minimax::new(&rules, Player::X).analyze(&mut b).unwrap();

    // X, O, X: the third ply completes a line.
    assert_eq!(report.score, 5 - 2);
    assert_eq!(report.index, 0);
}
