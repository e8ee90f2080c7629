//! Checked-in-debug indexing for the per-cell loops
//!
//! The step loop reads every cell and up to eight neighbors per
//! generation. Indices there come from `GridDimensions::checked_index`
//! or a `0..size` range, so release builds skip the second bounds check.
//!
//! ```rust
//! use life_engine::fast;
//!
//! let cells = vec![0u8, 1, 1, 0];
//! assert_eq!(*fast!(cells, [2]), 1);
//!
//! let mut ages = vec![0u32; 4];
//! fast!(ages, [1] = 7);
//! assert_eq!(ages[1], 7);
//! ```

/// `fast!(slice, [i])` reads, `fast!(slice, [i] = v)` writes.
///
/// Debug builds index normally and panic on a bad index; release builds
/// use `get_unchecked`. Callers must only pass indices already proven to
/// be in range.
#[macro_export]
macro_rules! fast {
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$slice.get_unchecked_mut($index) = $val; }
        }
    }};
}

#[cfg(test)]
mod tests {
    use crate::domain::cell::Cell;

    #[test]
    fn reads_cells() {
        let cells = vec![Cell::Dead, Cell::Alive, Cell::Dead];
        assert_eq!(*fast!(cells, [1]), Cell::Alive);
    }

    #[test]
    fn writes_ages() {
        let mut ages = vec![0u32; 3];
        fast!(ages, [2] = 41);
        assert_eq!(ages, vec![0, 0, 41]);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn out_of_range_panics_in_debug() {
        let ages = vec![0u32; 3];
        let _ = *fast!(ages, [3]);
    }
}
