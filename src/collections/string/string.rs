use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter, Write};
use std::hash::{Hash, Hasher};
use std::mem::MaybeUninit;
use std::ops::{AddAssign, Deref};
use std::ptr;
use std::slice;
use std::str::{self, FromStr};

use super::CapacityExceeded;
use crate::util::result::ResultExtension;

/// A string with a fixed capacity of `N` bytes, stored inline.
///
/// The capacity is part of the type and never changes, so a BoundedString never allocates. Length
/// is measured in bytes of UTF-8, the same as [`str::len`].
///
/// Operations that would grow the string past `N` fail with [`CapacityExceeded`] and leave the
/// string exactly as it was.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The length of the BoundedString.
/// - `m`: The length of the provided string slice.
///
/// | Method | Complexity |
/// |-|-|
/// | `new` | `O(1)` |
/// | `try_from_str` | `O(m)` |
/// | `append` | `O(m)` |
/// | `len` | `O(1)` |
/// | `cap` | `O(1)` |
/// | `as_str` | `O(1)` |
/// | `to_string` | `O(n)` |
#[derive(Clone, Copy)]
pub struct BoundedString<const N: usize> {
    pub(crate) buf: [MaybeUninit<u8>; N],
    pub(crate) len: usize,
}

impl<const N: usize> BoundedString<N> {
    /// The capacity of every `BoundedString<N>`.
    pub const CAP: usize = N;

    /// Creates a new, empty BoundedString.
    ///
    /// # Examples
    /// ```
    /// # use bounded_string::collections::string::BoundedString;
    /// let string = BoundedString::<10>::new();
    /// assert_eq!(string.len(), 0);
    /// assert_eq!(string.cap(), 10);
    /// ```
    pub const fn new() -> BoundedString<N> {
        BoundedString {
            buf: [MaybeUninit::uninit(); N],
            len: 0,
        }
    }

    /// Creates a BoundedString containing a copy of `value`.
    ///
    /// # Errors
    /// Returns [`CapacityExceeded`] if `value` is longer than `N`. No string is produced in that
    /// case.
    ///
    /// # Examples
    /// ```
    /// # use bounded_string::collections::string::BoundedString;
    /// let string = BoundedString::<7>::try_from_str("Podnah!").unwrap();
    /// assert_eq!(string.len(), 7);
    ///
    /// assert!(BoundedString::<6>::try_from_str("Podnah!").is_err());
    /// ```
    pub fn try_from_str(value: &str) -> Result<BoundedString<N>, CapacityExceeded> {
        let mut string = BoundedString::new();
        string.append(value)?;
        Ok(string)
    }

    /// Copies `value` onto the end of this BoundedString.
    ///
    /// # Errors
    /// Returns [`CapacityExceeded`] if the combined length would be greater than `N`. The string
    /// is left unmodified when this happens.
    ///
    /// # Examples
    /// ```
    /// # use bounded_string::collections::string::BoundedString;
    /// let mut string = BoundedString::<13>::try_from_str("Howdy!").unwrap();
    /// string.append("Podnah!").unwrap();
    /// assert_eq!(string, "Howdy!Podnah!");
    ///
    /// assert!(string.append("!").is_err());
    /// assert_eq!(string, "Howdy!Podnah!");
    /// ```
    pub fn append(&mut self, value: &str) -> Result<(), CapacityExceeded> {
        // Saturating is enough here, no array can actually be usize::MAX bytes long.
        let requested = self.len.saturating_add(value.len());
        if requested > N {
            return Err(CapacityExceeded { requested, cap: N });
        }

        // SAFETY: requested <= N, so len..requested is within buf. value is a separate borrow, so
        // the two ranges can't overlap. Copying a whole str onto valid UTF-8 keeps the prefix
        // valid UTF-8.
        unsafe {
            ptr::copy_nonoverlapping(
                value.as_ptr(),
                self.buf.as_mut_ptr().add(self.len).cast::<u8>(),
                value.len(),
            );
        }
        self.len = requested;

        Ok(())
    }

    /// Returns the length of the BoundedString, in bytes.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the BoundedString contains no bytes.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the capacity of the BoundedString, which is always `N`.
    pub const fn cap(&self) -> usize {
        N
    }

    /// Returns the number of bytes that can still be appended.
    ///
    /// # Examples
    /// ```
    /// # use bounded_string::collections::string::BoundedString;
    /// let string = BoundedString::<10>::try_from_str("Howdy!").unwrap();
    /// assert_eq!(string.remaining(), 4);
    /// ```
    pub const fn remaining(&self) -> usize {
        N - self.len
    }

    /// Returns the initialized bytes of the BoundedString.
    pub const fn as_bytes(&self) -> &[u8] {
        // SAFETY: The first len bytes of buf are always initialized and len <= N. The borrow
        // checker prevents mutation for the lifetime of the slice.
        unsafe { slice::from_raw_parts(self.buf.as_ptr().cast::<u8>(), self.len) }
    }

    /// Returns the contents of the BoundedString as a string slice.
    pub const fn as_str(&self) -> &str {
        // SAFETY: Only whole string slices are ever copied into buf, so the initialized prefix is
        // valid UTF-8.
        unsafe { str::from_utf8_unchecked(self.as_bytes()) }
    }
}

impl<const N: usize> Default for BoundedString<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Deref for BoundedString<N> {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl<const N: usize> AsRef<str> for BoundedString<N> {
    fn as_ref(&self) -> &str {
        self
    }
}

impl<const N: usize> AsRef<[u8]> for BoundedString<N> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<const N: usize> Borrow<str> for BoundedString<N> {
    fn borrow(&self) -> &str {
        self
    }
}

impl<const N: usize> TryFrom<&str> for BoundedString<N> {
    type Error = CapacityExceeded;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        BoundedString::try_from_str(value)
    }
}

impl<const N: usize> FromStr for BoundedString<N> {
    type Err = CapacityExceeded;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BoundedString::try_from_str(s)
    }
}

impl<const N: usize> From<BoundedString<N>> for String {
    fn from(value: BoundedString<N>) -> Self {
        String::from(value.as_str())
    }
}

impl<const N: usize> AddAssign<&str> for BoundedString<N> {
    /// Appends `rhs`, like [`BoundedString::append`].
    ///
    /// # Panics
    /// Panics if the combined length would be greater than `N`. The string is left unmodified.
    fn add_assign(&mut self, rhs: &str) {
        self.append(rhs).throw()
    }
}

impl<const N: usize> Write for BoundedString<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append(s).map_err(|_| fmt::Error)
    }

    /// Writes all of `args` or nothing. If any piece overflows, the pieces written before it are
    /// discarded again.
    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        let len = self.len;
        let result = fmt::write(&mut *self, args);
        if result.is_err() {
            // Bytes past len are never read, so moving len back is enough.
            self.len = len;
        }
        result
    }
}

impl<const N: usize, const M: usize> PartialEq<BoundedString<M>> for BoundedString<N> {
    fn eq(&self, other: &BoundedString<M>) -> bool {
        self.as_str() == other.as_str()
    }
}

impl<const N: usize> Eq for BoundedString<N> {}

impl<const N: usize> PartialEq<str> for BoundedString<N> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<const N: usize> PartialEq<&str> for BoundedString<N> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl<const N: usize> PartialEq<BoundedString<N>> for str {
    fn eq(&self, other: &BoundedString<N>) -> bool {
        self == other.as_str()
    }
}

impl<const N: usize> PartialEq<BoundedString<N>> for &str {
    fn eq(&self, other: &BoundedString<N>) -> bool {
        *self == other.as_str()
    }
}

impl<const N: usize, const M: usize> PartialOrd<BoundedString<M>> for BoundedString<N> {
    fn partial_cmp(&self, other: &BoundedString<M>) -> Option<Ordering> {
        Some(self.as_str().cmp(other.as_str()))
    }
}

impl<const N: usize> Ord for BoundedString<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl<const N: usize> Hash for BoundedString<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<const N: usize> Debug for BoundedString<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedString")
            .field("contents", &self.as_str())
            .field("len", &self.len)
            .field("cap", &N)
            .finish()
    }
}

impl<const N: usize> Display for BoundedString<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self.as_str(), f)
    }
}
