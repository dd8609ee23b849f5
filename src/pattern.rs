use std::fmt;
use std::str::FromStr;

use crate::error::VennError;

/// Smallest number of sets a diagram can show.
pub const MIN_SETS: usize = 2;
/// Largest number of sets a diagram can show.
pub const MAX_SETS: usize = 6;

/// Which sets an element belongs to.
///
/// `bits` read as a `len`-digit binary number is the pattern's display
/// string: the leftmost digit is set 0, the rightmost is set `len - 1`.
/// Ordering follows `(len, bits)`, so a map of patterns iterates in the
/// same order as counting from `1` to `2^len - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pattern {
    len: u8,
    bits: u8,
}

impl Pattern {
    /// Build a pattern for `len` sets. Fails for `len` outside `2..=6`,
    /// a zero pattern, or bits that do not fit in `len` digits.
    pub fn new(len: usize, bits: u8) -> Result<Self, VennError> {
        check_set_count(len)?;
        if bits == 0 || u32::from(bits) >= 1u32 << len {
            return Err(VennError::InvalidPattern(format!("{bits:b}/{len}")));
        }
        Ok(Self {
            len: len as u8,
            bits,
        })
    }

    /// Every non-empty pattern for `len` sets, in counting order.
    pub fn all(len: usize) -> Result<impl Iterator<Item = Pattern>, VennError> {
        check_set_count(len)?;
        let len8 = len as u8;
        Ok((1u8..(1u8 << len)).map(move |bits| Pattern { len: len8, bits }))
    }

    pub fn len(self) -> usize {
        usize::from(self.len)
    }

    /// Whether set `index` is marked present.
    pub fn contains(self, index: usize) -> bool {
        index < self.len() && (self.bits >> (self.len() - 1 - index)) & 1 == 1
    }

    /// Indices of the sets marked present.
    pub fn included(self) -> impl Iterator<Item = usize> {
        (0..self.len()).filter(move |&i| self.contains(i))
    }

    /// Indices of the sets marked absent.
    pub fn excluded(self) -> impl Iterator<Item = usize> {
        (0..self.len()).filter(move |&i| !self.contains(i))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$b}", self.bits, width = self.len())
    }
}

impl FromStr for Pattern {
    type Err = VennError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || VennError::InvalidPattern(s.to_string());
        if !(MIN_SETS..=MAX_SETS).contains(&s.len()) || !s.bytes().all(|b| b == b'0' || b == b'1')
        {
            return Err(invalid());
        }
        let bits = u8::from_str_radix(s, 2).map_err(|_| invalid())?;
        Pattern::new(s.len(), bits).map_err(|_| invalid())
    }
}

pub(crate) fn check_set_count(n: usize) -> Result<(), VennError> {
    if (MIN_SETS..=MAX_SETS).contains(&n) {
        Ok(())
    } else {
        Err(VennError::SetCount(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_zero_padded_binary() {
        let p = Pattern::new(4, 0b0011).unwrap();
        assert_eq!(p.to_string(), "0011");
        assert!(!p.contains(0));
        assert!(!p.contains(1));
        assert!(p.contains(2));
        assert!(p.contains(3));
        assert_eq!(p.included().collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(p.excluded().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn parse_and_display_agree() {
        for n in MIN_SETS..=MAX_SETS {
            for p in Pattern::all(n).unwrap() {
                assert_eq!(p.to_string().parse::<Pattern>().unwrap(), p);
            }
        }
    }

    #[test]
    fn all_counts_non_empty_patterns() {
        assert_eq!(Pattern::all(2).unwrap().count(), 3);
        assert_eq!(Pattern::all(6).unwrap().count(), 63);
        let keys: Vec<String> = Pattern::all(2).unwrap().map(|p| p.to_string()).collect();
        assert_eq!(keys, vec!["01", "10", "11"]);
    }

    #[test]
    fn rejects_bad_patterns() {
        assert!(Pattern::new(3, 0).is_err());
        assert!(Pattern::new(3, 0b1000).is_err());
        assert_eq!(Pattern::new(7, 1), Err(VennError::SetCount(7)));
        assert!("000".parse::<Pattern>().is_err());
        assert!("1".parse::<Pattern>().is_err());
        assert!("1021".parse::<Pattern>().is_err());
        assert!("1111111".parse::<Pattern>().is_err());
        assert_eq!(Pattern::all(1).err(), Some(VennError::SetCount(1)));
    }

    #[test]
    fn contains_out_of_range_is_false() {
        let p = Pattern::new(2, 0b11).unwrap();
        assert!(!p.contains(2));
    }
}
