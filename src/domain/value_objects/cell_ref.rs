use crate::domain::errors::DomainError;

/// Zero-based worksheet coordinate, ordered row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellRef {
    row: u32,
    col: u16,
}

impl CellRef {
    pub const fn new(row: u32, col: u16) -> Self {
        Self { row, col }
    }

    /// Parse an A1-style reference in a const context.
    ///
    /// Only single-letter columns (`A`..=`Z`) are accepted; the label
    /// templates never reach past column `T`. Invalid input fails the build.
    pub const fn a1(reference: &str) -> Self {
        let bytes = reference.as_bytes();
        Self::parse_span(bytes, 0, bytes.len())
    }

    /// Column index of a single column letter, in a const context
    pub const fn column(letter: &str) -> u16 {
        let bytes = letter.as_bytes();
        assert!(bytes.len() == 1, "expected a single column letter");
        assert!(bytes[0] >= b'A' && bytes[0] <= b'Z', "column letter out of range");
        (bytes[0] - b'A') as u16
    }

    const fn parse_span(bytes: &[u8], start: usize, end: usize) -> Self {
        assert!(end > start + 1, "cell reference too short");
        let letter = bytes[start];
        assert!(letter >= b'A' && letter <= b'Z', "column letter out of range");

        let mut row: u32 = 0;
        let mut i = start + 1;
        while i < end {
            let digit = bytes[i];
            assert!(digit >= b'0' && digit <= b'9', "row must be decimal");
            row = row * 10 + (digit - b'0') as u32;
            i += 1;
        }
        assert!(row >= 1, "rows are numbered from 1");

        Self {
            row: row - 1,
            col: (letter - b'A') as u16,
        }
    }

    pub fn row(&self) -> u32 {
        self.row
    }

    pub fn col(&self) -> u16 {
        self.col
    }

    /// Spreadsheet column name for a zero-based index (`0` -> `A`, `26` -> `AA`)
    pub fn column_name(col: u16) -> String {
        let mut n = u32::from(col) + 1;
        let mut name = Vec::new();
        while n > 0 {
            let rem = (n - 1) % 26;
            name.push(b'A' + rem as u8);
            n = (n - 1) / 26;
        }
        name.reverse();
        String::from_utf8(name).unwrap_or_default()
    }
}

impl std::fmt::Display for CellRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", Self::column_name(self.col), self.row + 1)
    }
}

impl std::str::FromStr for CellRef {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidCellReference(s.to_string());

        let split = s
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(invalid)?;
        let (letters, digits) = s.split_at(split);
        if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(invalid());
        }

        let col = letters
            .bytes()
            .try_fold(0u32, |acc, b| {
                acc.checked_mul(26)?.checked_add(u32::from(b - b'A') + 1)
            })
            .and_then(|c| u16::try_from(c - 1).ok())
            .ok_or_else(invalid)?;
        let row: u32 = digits.parse().map_err(|_| invalid())?;
        if row == 0 {
            return Err(invalid());
        }

        Ok(Self::new(row - 1, col))
    }
}

/// Inclusive rectangular block of cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRange {
    first: CellRef,
    last: CellRef,
}

impl CellRange {
    pub const fn new(first: CellRef, last: CellRef) -> Self {
        Self { first, last }
    }

    /// Parse `"B2:M6"` (or a single `"A1"`) in a const context
    pub const fn a1(range: &str) -> Self {
        let bytes = range.as_bytes();
        let mut colon = 0;
        while colon < bytes.len() && bytes[colon] != b':' {
            colon += 1;
        }
        if colon == bytes.len() {
            let cell = CellRef::parse_span(bytes, 0, bytes.len());
            return Self::new(cell, cell);
        }
        Self::new(
            CellRef::parse_span(bytes, 0, colon),
            CellRef::parse_span(bytes, colon + 1, bytes.len()),
        )
    }

    pub fn first(&self) -> CellRef {
        self.first
    }

    pub fn last(&self) -> CellRef {
        self.last
    }

    pub fn contains(&self, cell: CellRef) -> bool {
        (self.first.row..=self.last.row).contains(&cell.row)
            && (self.first.col..=self.last.col).contains(&cell.col)
    }

    /// Cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = CellRef> {
        let (first, last) = (self.first, self.last);
        (first.row..=last.row)
            .flat_map(move |row| (first.col..=last.col).map(move |col| CellRef::new(row, col)))
    }

    pub fn cell_count(&self) -> usize {
        let rows = (self.last.row - self.first.row + 1) as usize;
        let cols = (self.last.col - self.first.col + 1) as usize;
        rows * cols
    }
}

impl std::fmt::Display for CellRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.first, self.last)
    }
}
