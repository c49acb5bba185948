//! Wire encodings: sides as +1/-1, boards as 8x8 integer grids

use reversi::{apply_move, Board, Cell, EngineConfig, GameOutcome, Pos, Side, Strategy};
use serde_json::json;

#[test]
fn test_side_and_cell_encoding() {
    assert_eq!(serde_json::to_value(Side::Black).unwrap(), json!(1));
    assert_eq!(serde_json::to_value(Side::White).unwrap(), json!(-1));
    assert_eq!(serde_json::to_value(Cell::Empty).unwrap(), json!(0));

    assert_eq!(serde_json::from_value::<Side>(json!(-1)).unwrap(), Side::White);
    assert!(serde_json::from_value::<Side>(json!(0)).is_err());
    assert!(serde_json::from_value::<Cell>(json!(2)).is_err());
}

#[test]
fn test_initial_board_grid() {
    let value = serde_json::to_value(Board::initial()).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 8);
    assert_eq!(rows[0], json!([0, 0, 0, 0, 0, 0, 0, 0]));
    assert_eq!(rows[3], json!([0, 0, 0, -1, 1, 0, 0, 0]));
    assert_eq!(rows[4], json!([0, 0, 0, 1, -1, 0, 0, 0]));
}

#[test]
fn test_board_grid_roundtrip_after_moves() {
    let board = apply_move(&Board::initial(), Pos::new(2, 3), Side::Black).unwrap();
    let board = apply_move(&board, Pos::new(2, 2), Side::White).unwrap();

    let text = serde_json::to_string(&board).unwrap();
    let decoded: Board = serde_json::from_str(&text).unwrap();
    assert_eq!(decoded, board);
}

#[test]
fn test_board_rejects_bad_cell() {
    let mut grid = vec![vec![0i8; 8]; 8];
    grid[5][5] = 3;
    assert!(serde_json::from_value::<Board>(json!(grid)).is_err());
}

#[test]
fn test_pos_and_outcome_encoding() {
    assert_eq!(
        serde_json::to_value(Pos::new(2, 3)).unwrap(),
        json!({"row": 2, "col": 3})
    );
    assert_eq!(
        serde_json::to_value(GameOutcome::Winner(Side::White)).unwrap(),
        json!({"Winner": -1})
    );
    assert_eq!(serde_json::to_value(GameOutcome::Draw).unwrap(), json!("Draw"));
}

#[test]
fn test_pos_rejects_off_board_coordinates() {
    assert!(serde_json::from_str::<Pos>(r#"{"row":9,"col":9}"#).is_err());
    assert!(serde_json::from_str::<Pos>(r#"{"row":-1,"col":0}"#).is_err());
    assert_eq!(
        serde_json::from_str::<Pos>(r#"{"row":7,"col":0}"#).unwrap(),
        Pos::new(7, 0)
    );
}

#[test]
fn test_engine_config_roundtrip() {
    let config = EngineConfig::from_level(4).with_strategy(Strategy::Greedy);
    let value = serde_json::to_value(config).unwrap();
    assert_eq!(value, json!({"depth": 4, "strategy": "greedy"}));
    assert_eq!(serde_json::from_value::<EngineConfig>(value).unwrap(), config);
}
