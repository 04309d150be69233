use crate::{error::LinalgError, matrix::Matrix};

/// Number of save slots.
pub const SLOT_COUNT: usize = 10;

/// Restricts which saved matrices are offered for an operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotFilter {
    /// Only square matrices.
    pub square_only: bool,
    /// Exact row count, if set.
    pub rows: Option<usize>,
    /// Exact column count, if set.
    pub cols: Option<usize>,
}

impl SlotFilter {
    /// A filter for operations that need a square matrix.
    pub fn square() -> Self {
        Self {
            square_only: true,
            ..Default::default()
        }
    }

    /// A filter requiring an exact shape.
    pub fn shape(rows: usize, cols: usize) -> Self {
        Self {
            square_only: false,
            rows: Some(rows),
            cols: Some(cols),
        }
    }

    /// Whether `matrix` passes the filter.
    pub fn accepts(&self, matrix: &Matrix) -> bool {
        (!self.square_only || matrix.is_square())
            && self.rows.map_or(true, |r| r == matrix.nrows())
            && self.cols.map_or(true, |c| c == matrix.ncols())
    }
}

/// A fixed set of in-memory slots for reusing results across operations.
///
/// # Example
///
/// ```
/// use ratla_linalg::{slots::{SaveSlots, SlotFilter}, Matrix};
///
/// let mut slots = SaveSlots::default();
/// slots.save(2, Matrix::identity(3).unwrap()).unwrap();
/// assert_eq!(slots.matching(SlotFilter::square()), vec![2]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SaveSlots {
    slots: [Option<Matrix>; SLOT_COUNT],
}

impl SaveSlots {
    fn check(slot: usize) -> Result<usize, LinalgError> {
        if slot >= SLOT_COUNT {
            return Err(LinalgError::InvalidArgument(format!(
                "slot {slot} is out of range, there are {SLOT_COUNT} slots"
            )));
        }
        Ok(slot)
    }

    /// Store `matrix` in `slot`, returning the matrix it replaces.
    pub fn save(&mut self, slot: usize, matrix: Matrix) -> Result<Option<Matrix>, LinalgError> {
        let slot = Self::check(slot)?;
        log::debug!("saving {:?} matrix to slot {slot}", matrix.shape());
        Ok(self.slots[slot].replace(matrix))
    }

    /// The matrix in `slot`, if any.
    pub fn get(&self, slot: usize) -> Result<Option<&Matrix>, LinalgError> {
        Ok(self.slots[Self::check(slot)?].as_ref())
    }

    /// Remove and return the matrix in `slot`.
    pub fn take(&mut self, slot: usize) -> Result<Option<Matrix>, LinalgError> {
        Ok(self.slots[Self::check(slot)?].take())
    }

    /// Empty every slot.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
    }

    /// Indices of the slots holding a matrix.
    pub fn occupied(&self) -> Vec<usize> {
        self.matching(SlotFilter::default())
    }

    /// Indices of the occupied slots whose matrix passes `filter`.
    pub fn matching(&self, filter: SlotFilter) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| match slot {
                Some(m) if filter.accepts(m) => Some(i),
                _ => None,
            })
            .collect()
    }
}
