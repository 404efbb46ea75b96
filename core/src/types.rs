/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`, also used for board sizes.
pub type Coord2 = (Coord, Coord);

pub trait CoordExt: Copy {
    /// Index into an `Array2` laid out as `[row, col]`.
    fn to_nd_index(self) -> [usize; 2];

    /// Number of cells in a board of this size.
    fn area(self) -> CellCount;
}

impl CoordExt for Coord2 {
    fn to_nd_index(self) -> [usize; 2] {
        [self.0.into(), self.1.into()]
    }

    fn area(self) -> CellCount {
        // 255 * 255 still fits in a u16
        CellCount::from(self.0) * CellCount::from(self.1)
    }
}
