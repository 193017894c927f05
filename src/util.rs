/// A slice of `len` elements could not be split evenly into `width` wide arrays
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CastError {
    pub len: usize,
    pub width: usize,
}

impl std::fmt::Display for CastError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for CastError {}

/// Cast a slice to a slice of arrays, failing if anything would be left over
#[rustfmt::skip]
pub fn try_cast_as_arrays<T, const N: usize>(slice: &[T]) -> Result<&[[T; N]], CastError> {
    let (arrays, rmdr) = slice.as_chunks::<N>();
    if !rmdr.is_empty() {
        return Err(CastError { len: slice.len(), width: N });
    }
    Ok(arrays)
}
