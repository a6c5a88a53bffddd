use rand::SeedableRng;
use rand::rngs::SmallRng;
use sapper_core::*;

fn session(size: Coord2, mines: &[Coord2]) -> GameSession {
    let (config, mines) = MineSet::from_coords(size, mines).unwrap();
    GameSession::with_mines(config, &mines, SmallRng::seed_from_u64(0xdead_beef))
}

fn revealed(session: &GameSession) -> Vec<Coord2> {
    session
        .board()
        .iter()
        .filter(|cell| cell.state() == CellState::Revealed)
        .map(Cell::coords)
        .collect()
}

#[test]
fn trivial_win() {
    let mut session = session((2, 2), &[(0, 0)]);

    // every safe cell touches the mine, so none of them cascades
    let event = session.handle(Command::Reveal((1, 1))).unwrap();
    assert_eq!(event.outcome, Outcome::Revealed);
    assert_eq!(session.revealed_count(), 1);

    session.handle(Command::Reveal((0, 1))).unwrap();
    let event = session.handle(Command::Reveal((1, 0))).unwrap();

    assert_eq!(event.outcome, Outcome::GameWon);
    assert_eq!(session.status(), GameStatus::Won);
    assert_eq!(session.revealed_count(), 3);
    for coords in [(0, 1), (1, 0), (1, 1)] {
        assert_eq!(session.cell_view(coords).unwrap().adjacent_mines, Some(1));
    }
    // mines are shown once the game is over
    assert_eq!(session.cell_view((0, 0)).unwrap().state, CellState::Revealed);
    assert_eq!(session.cell_view((0, 0)).unwrap().is_mine, Some(true));
}

#[test]
fn immediate_loss() {
    let mut session = session((3, 3), &[(1, 1)]);

    let event = session.handle(Command::Reveal((1, 1))).unwrap();

    assert_eq!(event.outcome, Outcome::GameLost);
    assert_eq!(session.status(), GameStatus::Lost);
    assert_eq!(session.revealed_count(), 1);
    assert_eq!(revealed(&session), [(1, 1)]);
}

#[test]
fn cascade_across_zero_region() {
    let mut session = session((3, 3), &[(0, 0)]);

    let event = session.handle(Command::Reveal((2, 2))).unwrap();

    assert_eq!(event.outcome, Outcome::GameWon);
    assert_eq!(session.status(), GameStatus::Won);
    assert_eq!(session.revealed_count(), 8);
    assert_eq!(event.changed.first().map(|change| change.coords), Some((2, 2)));
    assert_eq!(event.changed.len(), 9);

    let view = session.cell_view((2, 2)).unwrap();
    assert_eq!(view.adjacent_mines, Some(0));
    for coords in [(0, 1), (1, 0), (1, 1)] {
        assert_eq!(session.cell_view(coords).unwrap().adjacent_mines, Some(1));
    }
}

#[test]
fn flag_protects_from_reveal() {
    let mut session = session((2, 2), &[(0, 0)]);

    let event = session.handle(Command::ToggleFlag((0, 0))).unwrap();
    assert_eq!(event.outcome, Outcome::Flagged);
    assert_eq!(session.flag_budget(), 0);

    let event = session.handle(Command::Reveal((0, 0))).unwrap();
    assert!(event.is_noop());
    assert!(event.changed.is_empty());
    assert_eq!(session.status(), GameStatus::Playing);

    session.handle(Command::ToggleFlag((0, 0))).unwrap();
    assert_eq!(session.flag_budget(), 1);
    let event = session.handle(Command::Reveal((0, 0))).unwrap();
    assert_eq!(event.outcome, Outcome::GameLost);
}

#[test]
fn terminal_state_ignores_commands() {
    let mut session = session((3, 3), &[(1, 1)]);
    session.handle(Command::Reveal((1, 1))).unwrap();
    let before = session.snapshot();

    let reveal = session.handle(Command::Reveal((0, 0))).unwrap();
    let flag = session.handle(Command::ToggleFlag((2, 2))).unwrap();

    assert!(reveal.is_noop());
    assert!(flag.is_noop());
    assert_eq!(flag.status, GameStatus::Lost);
    assert_eq!(session.snapshot(), before);
}

#[test]
fn difficulty_change_resets_state() {
    let mut session = GameSession::from_difficulty(Difficulty::Medium, SmallRng::seed_from_u64(7));
    let safe: Vec<Coord2> = session
        .board()
        .iter()
        .filter(|cell| !cell.is_mine())
        .map(Cell::coords)
        .take(3)
        .collect();
    for coords in safe {
        session.handle(Command::Reveal(coords)).unwrap();
    }
    session.handle(Command::ToggleFlag((15, 15))).unwrap();
    assert!(session.revealed_count() > 0);
    assert_eq!(session.status(), GameStatus::Playing);

    let event = session
        .handle(Command::ApplyDifficulty(Difficulty::Easy))
        .unwrap();

    assert_eq!(event.outcome, Outcome::Reset);
    assert_eq!(session.dimensions(), (9, 9));
    assert_eq!(session.status(), GameStatus::Playing);
    assert_eq!(session.revealed_count(), 0);
    assert_eq!(session.flag_budget(), 10);
    assert_eq!(session.board().mine_positions().count(), 10);
    assert!(
        session
            .board()
            .iter()
            .all(|cell| cell.state() == CellState::Covered)
    );
}

#[test]
fn new_game_after_loss_plays_again() {
    let mut session = session((3, 3), &[(1, 1)]);
    session.handle(Command::ToggleFlag((0, 0))).unwrap();
    session.handle(Command::Reveal((1, 1))).unwrap();

    let event = session.handle(Command::NewGame).unwrap();

    assert_eq!(event.outcome, Outcome::Reset);
    assert_eq!(event.status, GameStatus::Playing);
    assert_eq!(session.flag_budget(), 1);
    assert_eq!(session.triggered_mine(), None);
    assert_eq!(session.board().mine_positions().count(), 1);
    assert!(revealed(&session).is_empty());
}

#[test]
fn same_seed_same_game() {
    let config = Difficulty::Hard.config();
    let mut a = GameSession::seeded(config, 99);
    let mut b = GameSession::seeded(config, 99);
    let commands = [
        Command::Reveal((8, 16)),
        Command::ToggleFlag((0, 0)),
        Command::Reveal((15, 31)),
        Command::NewGame,
        Command::Reveal((3, 3)),
    ];

    for command in commands {
        assert_eq!(a.handle(command).unwrap(), b.handle(command).unwrap());
    }
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn snapshot_serializes() {
    let mut session = session((2, 3), &[(0, 0)]);
    session.handle(Command::Reveal((1, 2))).unwrap();

    let json = serde_json::to_string(&session.snapshot()).unwrap();
    let back: Snapshot = serde_json::from_str(&json).unwrap();

    assert_eq!(back, session.snapshot());
}

#[test]
fn largest_board_clears_in_one_cascade() {
    let mut session = session((255, 255), &[(254, 254)]);

    let event = session.handle(Command::Reveal((0, 0))).unwrap();

    assert_eq!(event.outcome, Outcome::GameWon);
    assert_eq!(session.revealed_count(), 65024);
    assert_eq!(event.changed.len(), 65025);
    assert_eq!(session.cell_view((253, 253)).unwrap().adjacent_mines, Some(1));
}
