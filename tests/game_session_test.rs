//! Full games played through the session state machine.

use noughts::{
    Board, CellPicker, ComputerTurn, FirstOpenPicker, GameSession, HumanTurn, Outcome, Player,
    Position,
};

/// Plays the top-right corner whenever the random fallback is reached.
struct TopRightPicker;

impl CellPicker for TopRightPicker {
    fn pick(&mut self, open: &[Position]) -> Option<Position> {
        open.iter()
            .copied()
            .find(|&pos| pos == Position::TopRight)
            .or_else(|| open.first().copied())
    }
}

/// Plays one human move and, if the game continues, the computer's reply.
fn play<P: CellPicker>(session: &mut GameSession, index: usize, picker: &mut P) -> Option<Outcome> {
    match session.process_human_move(index) {
        HumanTurn::AwaitingComputer(ticket) => {
            match session.complete_computer_move(ticket, picker).expect("Valid reply") {
                ComputerTurn::Finished { outcome, .. } => Some(outcome),
                ComputerTurn::Continue { .. } => None,
                ComputerTurn::Stale => panic!("Ticket should be current"),
            }
        }
        HumanTurn::Finished(outcome) => Some(outcome),
        HumanTurn::Ignored(reason) => panic!("Move {index} ignored: {reason}"),
    }
}

#[test]
fn test_top_row_win_on_the_ledger() {
    let mut board = Board::new();
    board.apply(Player::Human, Position::TopLeft).unwrap();
    board.apply(Player::Human, Position::TopCenter).unwrap();
    assert!(!noughts_rules::has_won(&board, Player::Human));

    board.apply(Player::Human, Position::TopRight).unwrap();
    assert!(noughts_rules::has_won(&board, Player::Human));
}

#[test]
fn test_draw_leaves_scores_unchanged() {
    let mut session = GameSession::new();
    let mut picker = FirstOpenPicker;

    for index in [4, 8, 2, 3] {
        assert_eq!(play(&mut session, index, &mut picker), None);
    }
    assert_eq!(play(&mut session, 7, &mut picker), Some(Outcome::Draw));

    assert!(session.board().is_full());
    assert_eq!(session.scores().human(), 0);
    assert_eq!(session.scores().computer(), 0);
    assert_eq!(session.alert().map(|a| a.title()), Some("Draw!"));
}

#[test]
fn test_computer_takes_win_over_block() {
    let mut session = GameSession::new();
    let mut picker = FirstOpenPicker;

    // Human 0, computer center; human 1, computer blocks at 2.
    assert_eq!(play(&mut session, 0, &mut picker), None);
    assert_eq!(play(&mut session, 1, &mut picker), None);
    assert_eq!(
        session.board().occupant(Position::TopRight),
        Some(Player::Computer)
    );

    // Human threatens the left column, but the computer completes 2-4-6.
    assert_eq!(play(&mut session, 3, &mut picker), Some(Outcome::ComputerWin));
    assert_eq!(
        session.board().occupant(Position::BottomLeft),
        Some(Player::Computer)
    );
    assert_eq!(session.scores().computer(), 1);
}

#[test]
fn test_human_fork_wins() {
    let mut session = GameSession::new();
    let mut picker = TopRightPicker;

    assert_eq!(play(&mut session, 0, &mut picker), None); // computer: center
    assert_eq!(play(&mut session, 8, &mut picker), None); // computer: random -> 2
    assert_eq!(play(&mut session, 6, &mut picker), None); // computer blocks 7
    assert_eq!(play(&mut session, 3, &mut picker), Some(Outcome::HumanWin));

    assert_eq!(session.scores().human(), 1);
    assert_eq!(session.alert().map(|a| a.title()), Some("You Win!"));
}

#[test]
fn test_moves_after_game_over_are_ignored() {
    let mut session = GameSession::new();
    let mut picker = FirstOpenPicker;
    for index in [0, 1, 3] {
        play(&mut session, index, &mut picker);
    }
    assert!(session.is_over());

    let before = session.board().clone();
    assert!(matches!(
        session.process_human_move(5),
        HumanTurn::Ignored(_)
    ));
    assert_eq!(session.board(), &before);
}

#[test]
fn test_replay_after_reset_keeps_running_score() {
    let mut session = GameSession::new();
    let mut picker = FirstOpenPicker;
    for index in [0, 1, 3] {
        play(&mut session, index, &mut picker);
    }
    session.reset_game();
    assert_eq!(session.board(), &Board::new());

    for index in [0, 1, 3] {
        play(&mut session, index, &mut picker);
    }
    assert_eq!(session.scores().computer(), 2);
}
