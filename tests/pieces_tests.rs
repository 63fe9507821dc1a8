//! Piece shape tests: templates, rotation law, spawn placement.

use gridfall::core::pieces::spawn_x;
use gridfall::core::Shape;
use gridfall::types::PieceKind;

#[test]
fn rotate_four_times_is_identity() {
    for kind in PieceKind::ALL {
        let template = Shape::template(kind);
        let mut shape = template.clone();
        for _ in 0..4 {
            shape = shape.rotated_cw();
        }
        assert_eq!(shape, template, "{:?}", kind);
    }
}

#[test]
fn rotation_preserves_cell_count() {
    for kind in PieceKind::ALL {
        let template = Shape::template(kind);
        let rotated = template.rotated_cw();
        assert_eq!(rotated.cells().count(), template.cells().count());
    }
}

#[test]
fn rotation_swaps_dimensions() {
    for kind in PieceKind::ALL {
        let template = Shape::template(kind);
        let rotated = template.rotated_cw();
        assert_eq!(rotated.width(), template.height());
        assert_eq!(rotated.height(), template.width());
    }
}

#[test]
fn l_and_j_are_mirrored() {
    let l = Shape::template(PieceKind::L);
    let j = Shape::template(PieceKind::J);

    for row in 0..3 {
        for col in 0..2 {
            assert_eq!(l.is_filled(col, row), j.is_filled(1 - col, row));
        }
    }
}

#[test]
fn spawn_positions_match_centering_rule() {
    // x = GRID_WIDTH / 2 - shape_width / 2
    for kind in PieceKind::ALL {
        let shape = Shape::template(kind);
        let expected = 5 - (shape.width() as i8) / 2;
        assert_eq!(spawn_x(&shape), expected, "{:?}", kind);
    }
}
