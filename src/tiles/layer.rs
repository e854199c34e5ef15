use super::types::TilePos;

/// One rectangular layer of cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Copy> Layer<T> {
    /// Create a layer with every cell set to `value`
    pub fn filled(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            cells: vec![value; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, pos: TilePos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Whether the cell is on the outermost ring
    pub fn is_border(&self, x: usize, y: usize) -> bool {
        x == 0 || y == 0 || x + 1 == self.width || y + 1 == self.height
    }

    /// Get a cell, `None` when out of bounds
    pub fn get(&self, pos: TilePos) -> Option<T> {
        if !self.contains(pos) {
            return None;
        }
        Some(self.cells[self.index(pos.x as usize, pos.y as usize)])
    }

    /// Set a cell. Returns false when out of bounds.
    pub fn set(&mut self, x: usize, y: usize, value: T) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = self.index(x, y);
        self.cells[index] = value;
        true
    }

    /// Iterate `(x, y, value)` row by row
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &value)| (i % self.width, i / self.width, value))
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_get_set() {
        let mut layer = Layer::filled(4, 3, 0u8);

        assert!(layer.set(3, 2, 7));
        assert_eq!(layer.get(TilePos::new(3, 2)), Some(7));
        assert_eq!(layer.get(TilePos::new(2, 2)), Some(0));

        // Out of bounds
        assert!(!layer.set(4, 0, 1));
        assert_eq!(layer.get(TilePos::new(4, 0)), None);
        assert_eq!(layer.get(TilePos::new(-1, 0)), None);
        assert_eq!(layer.get(TilePos::new(0, 3)), None);
    }

    #[test]
    fn test_border_ring() {
        let layer = Layer::filled(5, 4, ());
        assert!(layer.is_border(0, 2));
        assert!(layer.is_border(4, 1));
        assert!(layer.is_border(2, 3));
        assert!(!layer.is_border(1, 1));
        assert!(!layer.is_border(3, 2));
    }

    #[test]
    fn test_iter_is_row_major() {
        let mut layer = Layer::filled(3, 2, 0);
        layer.set(2, 0, 5);
        layer.set(0, 1, 9);
        let cells: Vec<_> = layer.iter().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[2], (2, 0, 5));
        assert_eq!(cells[3], (0, 1, 9));
    }
}
