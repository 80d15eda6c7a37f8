use std::fmt::{self, Debug, Formatter};

/// Debug-formats the items of a cloneable iterator as a list, without collecting them first.
#[cfg(any(feature = "contiguous", feature = "linked", feature = "queue"))]
pub struct DebugList<I>(pub I);

#[cfg(any(feature = "contiguous", feature = "linked", feature = "queue"))]
impl<I> Debug for DebugList<I>
where
    I: Iterator + Clone,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.clone()).finish()
    }
}

/// Debug-formats the items of a cloneable iterator as a set.
#[cfg(feature = "hash")]
pub struct DebugSet<I>(pub I);

#[cfg(feature = "hash")]
impl<I> Debug for DebugSet<I>
where
    I: Iterator + Clone,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.clone()).finish()
    }
}

/// Writes the items of an iterator with [`Display`](fmt::Display), separated by `sep`.
pub fn write_joined<I>(f: &mut Formatter<'_>, iter: I, sep: &str) -> fmt::Result
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    for (index, item) in iter.into_iter().enumerate() {
        if index > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
