//! Containment checkers over collections of containers
//!
//! These answer "which of these strings mention X?" style questions. They work
//! on anything implementing [`Contains`], so substrings of strings and
//! elements of sequences are handled the same way.

use std::fmt;

use crate::predicate::Contains;

/// Whether at least one element holds `needle`.
///
/// # Example
///
/// ```
/// use checkers::any_element_contains;
///
/// assert!(any_element_contains(&["apple", "banana"], "an"));
/// assert!(!any_element_contains(&["apple", "cherry"], "an"));
/// ```
pub fn any_element_contains<C, N>(elements: &[C], needle: &N) -> bool
where
    C: Contains<N>,
    N: ?Sized,
{
    elements.iter().any(|element| element.contains_part(needle))
}

/// Whether every element holds `needle`. True for no elements.
///
/// # Example
///
/// ```
/// use checkers::all_elements_contains;
///
/// assert!(all_elements_contains(&["banana", "mango"], "an"));
/// assert!(!all_elements_contains(&["banana", "apple"], "an"));
/// ```
pub fn all_elements_contains<C, N>(elements: &[C], needle: &N) -> bool
where
    C: Contains<N>,
    N: ?Sized,
{
    elements.iter().all(|element| element.contains_part(needle))
}

/// Lazily yield the elements holding `needle`, in their original order.
///
/// # Example
///
/// ```
/// use checkers::get_elements_containing;
///
/// let fruit = ["apple", "banana", "mango"];
/// let found: Vec<_> = get_elements_containing(&fruit, "an").collect();
/// assert_eq!(found, vec![&"banana", &"mango"]);
/// ```
pub fn get_elements_containing<'a, 'n, C, N>(
    elements: &'a [C],
    needle: &'n N,
) -> ElementsContaining<'a, 'n, C, N>
where
    C: Contains<N>,
    N: ?Sized,
{
    ElementsContaining {
        elements: elements.iter(),
        needle,
    }
}

/// Iterator returned by [`get_elements_containing`].
///
/// Yielded items borrow from the elements only, so they may outlive the needle.
pub struct ElementsContaining<'a, 'n, C, N: ?Sized> {
    elements: std::slice::Iter<'a, C>,
    needle: &'n N,
}

impl<'a, C, N> Iterator for ElementsContaining<'a, '_, C, N>
where
    C: Contains<N>,
    N: ?Sized,
{
    type Item = &'a C;

    fn next(&mut self) -> Option<Self::Item> {
        let needle = self.needle;
        self.elements.find(|element| element.contains_part(needle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.elements.size_hint().1)
    }
}

impl<C, N> DoubleEndedIterator for ElementsContaining<'_, '_, C, N>
where
    C: Contains<N>,
    N: ?Sized,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        let needle = self.needle;
        self.elements.rfind(|element| element.contains_part(needle))
    }
}

impl<C, N> std::iter::FusedIterator for ElementsContaining<'_, '_, C, N>
where
    C: Contains<N>,
    N: ?Sized,
{
}

impl<C, N: ?Sized> Clone for ElementsContaining<'_, '_, C, N> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            needle: self.needle,
        }
    }
}

impl<C: fmt::Debug, N: ?Sized> fmt::Debug for ElementsContaining<'_, '_, C, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementsContaining")
            .field("remaining", &self.elements.as_slice())
            .finish_non_exhaustive()
    }
}
