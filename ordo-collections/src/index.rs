//! Sentinel-based node index.
//!
//! Node links store a reserved sentinel (`NONE`, the type's `MAX`) instead of
//! `Option<Idx>`, so a tree node carries two plain integers for its children.

/// A copyable arena index with a sentinel "no node" value.
///
/// # Example
///
/// ```
/// use ordo_collections::Index;
///
/// let idx: u32 = 5;
/// let none: u32 = u32::NONE;
///
/// assert!(idx.is_some());
/// assert!(none.is_none());
/// ```
pub trait Index: Copy + Eq + core::fmt::Debug {
    /// Sentinel value representing "no node".
    const NONE: Self;

    /// Returns `true` if this is the sentinel value.
    #[inline]
    fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Returns `true` if this is not the sentinel value.
    #[inline]
    fn is_some(self) -> bool {
        !self.is_none()
    }

    /// Returns the index as a slot offset.
    fn as_usize(self) -> usize;

    /// Creates an index from a slot offset.
    ///
    /// The conversion truncates: offsets at or above `NONE` wrap or collide
    /// with the sentinel. Callers check the bound first; [`Arena`]'s insert
    /// panics before handing out such an offset.
    ///
    /// [`Arena`]: crate::Arena
    fn from_usize(val: usize) -> Self;
}

macro_rules! impl_index_for_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Index for $ty {
                const NONE: Self = <$ty>::MAX;

                #[inline]
                fn as_usize(self) -> usize {
                    self as usize
                }

                #[inline]
                fn from_usize(val: usize) -> Self {
                    val as Self
                }
            }
        )*
    };
}

impl_index_for_unsigned!(u8, u16, u32, u64, usize);
