use std::ops::Add;

/// A grid coordinate, row-major.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

#[macro_export]
macro_rules! pos {
    ($row:expr, $col:expr) => {
        Pos {
            row: $row,
            col: $col,
        }
    };
}

impl Add for Pos {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        pos!(self.row + rhs.row, self.col + rhs.col)
    }
}

#[test]
fn test_add() {
    assert_eq!(pos!(1, 2) + pos!(-1, 1), pos!(0, 3));
}
