//! Extended Euclidean algorithm.
//!
//! Used to decode an id back into its matrix: the Bézout coefficients of the id
//! components supply the two matrix entries that are not persisted.

/// Result of [`extended_gcd`]: `s·a + t·m = gcd`.
///
/// Coefficients are reported at double width so that every pair of `i64` inputs has a
/// representable result (the gcd of `i64::MIN` and `0` does not fit in an `i64`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bezout {
    /// Coefficient of `a`
    pub s: i128,
    /// Coefficient of `m`
    pub t: i128,
    /// Greatest common divisor of `a` and `m`; its sign follows the inputs
    pub gcd: i128,
    /// The inverse of `a` modulo `m` in `[0, |m|)`, present only when `|gcd| == 1`
    pub inverse: Option<i128>,
}

impl Bezout {
    /// Returns true if the inputs were coprime.
    pub fn is_coprime(&self) -> bool {
        self.gcd.abs() == 1
    }
}

/// Computes Bézout coefficients, the gcd, and the modular inverse of `a` mod `m`.
///
/// A gcd other than ±1 is an ordinary outcome, reported as an absent inverse.
/// `m == 0` yields `gcd == a` with no inverse.
///
/// ```
/// use matpath::euclid::extended_gcd;
///
/// let r = extended_gcd(3, 11);
/// assert_eq!(r.gcd, 1);
/// assert_eq!(r.inverse, Some(4));
/// assert_eq!(r.s * 3 + r.t * 11, 1);
/// ```
pub fn extended_gcd(a: i64, m: i64) -> Bezout {
    let (a, m) = (i128::from(a), i128::from(m));
    if m == 0 {
        return Bezout {
            s: 1,
            t: 0,
            gcd: a,
            inverse: None,
        };
    }

    let (mut r0, mut r1) = (a, m);
    let (mut s0, mut s1) = (1i128, 0i128);
    while r1 != 0 {
        let q = r0 / r1;
        (r0, r1) = (r1, r0 - q * r1);
        (s0, s1) = (s1, s0 - q * s1);
    }

    let gcd = r0;
    let t = (gcd - s0 * a) / m;
    // s·a ≡ gcd (mod m), so for gcd == -1 the inverse is -s
    let inverse = (gcd.abs() == 1).then(|| (s0 * gcd).rem_euclid(m));

    Bezout {
        s: s0,
        t,
        gcd,
        inverse,
    }
}
