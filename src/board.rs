//! Dartboard sector layout.

pub const BULL: u32 = 25;

/// Sectors clockwise from the top of a standard board.
pub static BOARD_ORDER: [u32; 20] = [20, 1, 18, 4, 13, 6, 10, 15, 2, 17, 3, 19, 7, 16, 8, 11, 14, 9, 12, 5];

// ADJACENT[v - 1] = [counterclockwise, clockwise] neighbours of sector v.
static ADJACENT: [[u32; 2]; 20] = [
    [20, 18], // 1
    [15, 17], // 2
    [17, 19], // 3
    [18, 13], // 4
    [12, 20], // 5
    [13, 10], // 6
    [19, 16], // 7
    [16, 11], // 8
    [14, 12], // 9
    [6, 15],  // 10
    [8, 14],  // 11
    [9, 5],   // 12
    [4, 6],   // 13
    [11, 9],  // 14
    [10, 2],  // 15
    [7, 8],   // 16
    [2, 3],   // 17
    [1, 4],   // 18
    [3, 7],   // 19
    [5, 1],   // 20
];

/// Sectors physically next to `value`. The bull borders every sector.
pub fn neighbors(value: u32) -> Option<&'static [u32]> {
    match value {
        1..=20 => Some(&ADJACENT[(value - 1) as usize]),
        BULL => Some(&BOARD_ORDER),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_agrees_with_board_order() {
        for (i, &v) in BOARD_ORDER.iter().enumerate() {
            let ccw = BOARD_ORDER[(i + 19) % 20];
            let cw = BOARD_ORDER[(i + 1) % 20];
            assert_eq!(neighbors(v), Some(&[ccw, cw][..]), "sector {v}");
        }
    }

    #[test]
    fn bull_and_unknown() {
        assert_eq!(neighbors(BULL).map(<[u32]>::len), Some(20));
        assert_eq!(neighbors(0), None);
        assert_eq!(neighbors(21), None);
    }
}
