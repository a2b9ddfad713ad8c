//! Column access over rectangular arrays of rows.
//!
//! Rows are anything that views as a slice (`Vec<T>`, `[T; N]`, `&[T]`).

use std::iter::FusedIterator;
use std::marker::PhantomData;

/// The sequence returned by [`column`].
#[derive(Debug)]
pub struct Column<'a, T, R> {
    rows: std::slice::Iter<'a, R>,
    index: usize,
    element: PhantomData<&'a T>,
}

impl<T, R> Clone for Column<'_, T, R> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows.clone(),
            index: self.index,
            element: PhantomData,
        }
    }
}

impl<'a, T: 'a, R: AsRef<[T]>> Iterator for Column<'a, T, R> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.rows.next()?;
        let element = row.as_ref().get(self.index);
        if element.is_none() {
            // A row too short for this column ends it.
            self.rows = std::slice::Iter::default();
        }
        element
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.rows.len()))
    }
}

impl<'a, T: 'a, R: AsRef<[T]>> FusedIterator for Column<'a, T, R> {}

/// Yields the element at `index` of each row, top to bottom.
///
/// Rows are expected to be rectangular. A row shorter than `index + 1`
/// ends the column.
///
/// # Examples
///
/// ```
/// use seqpipe::sequence::column;
///
/// let grid = vec![vec![1, 2, 3], vec![4, 5, 6]];
/// assert_eq!(column(1, &grid).copied().collect::<Vec<_>>(), vec![2, 5]);
/// ```
#[inline]
pub fn column<T, R: AsRef<[T]>>(index: usize, rows: &[R]) -> Column<'_, T, R> {
    Column {
        rows: rows.iter(),
        index,
        element: PhantomData,
    }
}

/// The sequence returned by [`transpose`].
#[derive(Debug)]
pub struct Transpose<'a, T, R> {
    rows: &'a [R],
    next_column: usize,
    width: usize,
    element: PhantomData<&'a T>,
}

impl<T, R> Clone for Transpose<'_, T, R> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows,
            next_column: self.next_column,
            width: self.width,
            element: PhantomData,
        }
    }
}

impl<'a, T: Clone + 'a, R: AsRef<[T]>> Iterator for Transpose<'a, T, R> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_column >= self.width {
            return None;
        }
        let transposed = column(self.next_column, self.rows).cloned().collect();
        self.next_column += 1;
        Some(transposed)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.width.saturating_sub(self.next_column);
        (remaining, Some(remaining))
    }
}

impl<'a, T: Clone + 'a, R: AsRef<[T]>> ExactSizeIterator for Transpose<'a, T, R> {}

impl<'a, T: Clone + 'a, R: AsRef<[T]>> FusedIterator for Transpose<'a, T, R> {}

/// Yields each column of a rectangular array of rows as a fresh `Vec`.
///
/// The number of columns is the length of the first row; an empty array
/// yields nothing.
///
/// # Examples
///
/// ```
/// use seqpipe::sequence::transpose;
///
/// let grid = vec![vec!['a', 'b'], vec!['c', 'd'], vec!['e', 'f']];
/// let columns: Vec<Vec<char>> = transpose(&grid).collect();
/// assert_eq!(columns, vec![vec!['a', 'c', 'e'], vec!['b', 'd', 'f']]);
/// ```
#[inline]
pub fn transpose<T: Clone, R: AsRef<[T]>>(rows: &[R]) -> Transpose<'_, T, R> {
    Transpose {
        rows,
        next_column: 0,
        width: rows.first().map_or(0, |row| row.as_ref().len()),
        element: PhantomData,
    }
}
