/// Largest number of optional query parameters the bitmask can cover.
pub const MAX_COMBINATION_WIDTH: usize = 32;

/// Iterates over every non-empty subset of `items` exactly once.
///
/// Subset `mask` contains `items[i]` when bit `i` is set, so members always
/// keep the order of `items`. The empty subset is not produced.
pub struct NonEmptySubsets<'a, T> {
  items: &'a [T],
  mask: u64,
  end: u64,
}

impl<'a, T> NonEmptySubsets<'a, T> {
  /// # Panics
  ///
  /// Panics if `items` is wider than [`MAX_COMBINATION_WIDTH`].
  #[must_use]
  pub fn new(items: &'a [T]) -> Self {
    assert!(
      items.len() <= MAX_COMBINATION_WIDTH,
      "cannot combine {} items, limit is {MAX_COMBINATION_WIDTH}",
      items.len()
    );
    Self {
      items,
      mask: 1,
      end: 1u64 << items.len(),
    }
  }

  /// Number of subsets still to be produced.
  #[must_use]
  pub fn remaining(&self) -> u64 {
    self.end - self.mask
  }
}

impl<'a, T> Iterator for NonEmptySubsets<'a, T> {
  type Item = Vec<&'a T>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.mask >= self.end {
      return None;
    }

    let mask = self.mask;
    self.mask += 1;

    Some(
      self
        .items
        .iter()
        .enumerate()
        .filter(|(bit, _)| mask & (1u64 << bit) != 0)
        .map(|(_, item)| item)
        .collect(),
    )
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let remaining = usize::try_from(self.remaining()).unwrap_or(usize::MAX);
    (remaining, Some(remaining))
  }
}
