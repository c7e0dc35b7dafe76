//! Byte-level scanning over molecular formula text.
//!
//! Formulas are treated as raw bytes: matching is case-sensitive and has
//! no notion of multi-character element symbols, so the `C` of `Cl` counts
//! as carbon.

/// Returns the atom count attached to the first occurrence of `symbol`.
///
/// Finds the first occurrence of the symbol byte, then accumulates the
/// ASCII digits that immediately follow, saturating at `u32::MAX`. A
/// symbol with no trailing digits counts as 1, and a formula without the
/// symbol at all also counts as 1. The two cases deliberately collapse to
/// the same default; an explicit `0` digit is honored.
pub fn element_count(formula: &str, symbol: u8) -> u32 {
    let bytes = formula.as_bytes();
    let Some(pos) = bytes.iter().position(|&b| b == symbol) else {
        return 1;
    };

    let digits = &bytes[pos + 1..];
    let len = digits.iter().take_while(|b| b.is_ascii_digit()).count();
    if len == 0 {
        return 1;
    }

    digits[..len].iter().fold(0u32, |count, &b| {
        count.saturating_mul(10).saturating_add(u32::from(b - b'0'))
    })
}

/// A run of element symbols that must each carry an explicit count,
/// optionally capped by one bare trailing symbol.
///
/// `CountedRun { elements: b"CHNO", tail: Some(b'P') }` matches
/// `C10H16N5O13P3` anywhere in a formula, but not `C3H7NO2`, whose `N`
/// carries no digits.
#[derive(Debug, Clone, Copy)]
pub struct CountedRun<'a> {
    pub elements: &'a [u8],
    pub tail: Option<u8>,
}

impl CountedRun<'_> {
    /// True when the run occurs anywhere in the formula.
    pub fn is_match(&self, formula: &str) -> bool {
        let bytes = formula.as_bytes();
        (0..bytes.len()).any(|start| self.matches_at(bytes, start))
    }

    fn matches_at(&self, bytes: &[u8], mut pos: usize) -> bool {
        for &element in self.elements {
            if bytes.get(pos) != Some(&element) {
                return false;
            }
            pos += 1;

            let digits = bytes[pos..]
                .iter()
                .take_while(|b| b.is_ascii_digit())
                .count();
            if digits == 0 {
                return false;
            }
            pos += digits;
        }

        match self.tail {
            Some(tail) => bytes.get(pos) == Some(&tail),
            None => true,
        }
    }
}
