use super::*;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::A.opponent(), Player::B);
    assert_eq!(Player::B.opponent(), Player::A);
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(2, 3);
    assert_eq!(pos.row, 2);
    assert_eq!(pos.col, 3);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(2, 1);
    assert_eq!(pos.to_index(), 9);

    let pos2 = Pos::from_index(9);
    assert_eq!(pos2, pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(3, 3));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(4, 0));
    assert!(!Pos::is_valid(0, 4));
    assert_eq!(Pos::try_new(4, 1), None);
    assert_eq!(Pos::try_new(1, 2), Some(Pos::new(1, 2)));
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 4);
    assert_eq!(TOTAL_CELLS, 16);
    assert_eq!(INITIAL_PIECES, 4);
}

#[test]
fn test_pos_ordering() {
    assert!(Pos::new(0, 3) < Pos::new(1, 0));
    assert!(Pos::new(1, 0) < Pos::new(1, 1));
}

#[test]
fn test_adjacency() {
    let center = Pos::new(1, 1);
    assert!(center.is_adjacent(Pos::new(0, 1)));
    assert!(center.is_adjacent(Pos::new(1, 2)));
    assert!(!center.is_adjacent(center));
    assert!(!center.is_adjacent(Pos::new(2, 2)));
    assert!(!center.is_adjacent(Pos::new(1, 3)));
}

#[test]
fn test_zero_distance_move_is_not_a_step() {
    let pos = Pos::new(2, 2);
    assert!(!Move::new(pos, pos).is_step());
    assert!(Move::new(pos, Pos::new(3, 2)).is_step());
}

#[test]
fn test_initial_board() {
    let board = Board::initial();
    for col in 0..4 {
        assert_eq!(board.get(Pos::new(0, col)), Some(Player::B));
        assert_eq!(board.get(Pos::new(3, col)), Some(Player::A));
        assert!(board.is_empty(Pos::new(1, col)));
        assert!(board.is_empty(Pos::new(2, col)));
    }
    assert_eq!(board.piece_count(Player::A), 4);
    assert_eq!(board.piece_count(Player::B), 4);
    assert_eq!(board.total_pieces(), 8);
}

#[test]
fn test_with_piece_returns_new_board() {
    let board = Board::initial();
    let moved = board.without_piece(Pos::new(3, 0)).with_piece(Pos::new(2, 0), Player::A);

    assert_eq!(board.get(Pos::new(3, 0)), Some(Player::A));
    assert!(board.is_empty(Pos::new(2, 0)));
    assert!(moved.is_empty(Pos::new(3, 0)));
    assert_eq!(moved.get(Pos::new(2, 0)), Some(Player::A));
}

#[test]
fn test_with_piece_replaces_occupant() {
    let board = Board::initial().with_piece(Pos::new(0, 0), Player::A);
    assert_eq!(board.get(Pos::new(0, 0)), Some(Player::A));
    assert_eq!(board.piece_count(Player::B), 3);
}

#[test]
fn test_notation_display() {
    assert_eq!(Board::initial().to_string(), "BBBB/..../..../AAAA");
    assert_eq!(Board::new().to_string(), "..../..../..../....");
}

#[test]
fn test_notation_parse() {
    let board: Board = "BBBB/..../..../AAAA".parse().unwrap();
    assert_eq!(board, Board::initial());

    let flat: Board = "B...  .A..  ....  ...A".parse().unwrap();
    assert_eq!(flat.get(Pos::new(0, 0)), Some(Player::B));
    assert_eq!(flat.get(Pos::new(1, 1)), Some(Player::A));
    assert_eq!(flat.get(Pos::new(3, 3)), Some(Player::A));
    assert_eq!(flat.total_pieces(), 3);
}

#[test]
fn test_notation_parse_errors() {
    assert_eq!(
        "BBBB/..../....".parse::<Board>(),
        Err(ParseBoardError::CellCount(12))
    );
    assert_eq!(
        "BBBX/..../..../AAAA".parse::<Board>(),
        Err(ParseBoardError::InvalidSymbol('X'))
    );
    assert_eq!(
        "BBBB/B.../..../AAAA".parse::<Board>(),
        Err(ParseBoardError::TooManyPieces(Player::B, 5))
    );
}
