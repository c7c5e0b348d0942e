//! Definitions for angular momentum quantum numbers and related quantities.

use std::hash::Hash;

/// A single spin-projection quantum number.
///
/// This type is backed by a single `i32` representing the number of halves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpinProj(i32);

impl SpinProj {
    /// Create a new spin projection.
    pub fn new(m: i32) -> Self { Self(m) }

    /// Reflect the projection quantum number across the orthogonal plane, i.e.
    /// apply a minus sign.
    pub fn reflect(&mut self) { self.0 = -self.0 }

    /// Return a [reflected][Self::reflect] copy of `self`.
    pub fn reflected(self) -> Self { Self(-self.0) }

    /// Return `self` as a bare number of halves.
    pub fn halves(self) -> i32 { self.0 }

    /// Return `self` as an `f64`.
    ///
    /// This reflects the "true" value of the projection quantum number; i.e.
    /// there is a relative factor of 2 between this and [`Self::halves`].
    pub fn f(self) -> f64 { f64::from(self.0) / 2.0 }

    /// Create a new spin-projection quantum number from a `f64` value, rounding
    /// to the nearest half-integer.
    pub fn from_f64(f: f64) -> Self { Self((2.0 * f).round() as i32) }
}

impl std::ops::Deref for SpinProj {
    type Target = i32;

    fn deref(&self) -> &Self::Target { &self.0 }
}

impl<M> From<M> for SpinProj
where M: Into<i32>
{
    fn from(m: M) -> Self { Self(m.into()) }
}

impl From<SpinProj> for f64 {
    fn from(m: SpinProj) -> Self { m.f() }
}

/// A single total-spin quantum number.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpinTotal(u32);

impl SpinTotal {
    /// Create a new total spin.
    pub fn new(j: u32) -> Self { Self(j) }

    /// Return `self` as a bare number of halves.
    pub fn halves(self) -> u32 { self.0 }

    /// Return `self` as an `f64`.
    ///
    /// This reflects the "true" numerical value of the total-spin quantum
    /// number; i.e. there is a relative factor of 2 between this and
    /// [`Self::halves`].
    pub fn f(self) -> f64 { f64::from(self.0) / 2.0 }

    /// Create a new total-spin quantum number from a `f64` value, rounding
    /// to the nearest half-integer.
    ///
    /// Negative inputs are passed through [`f64::abs`] before rounding.
    pub fn from_f64(f: f64) -> Self { Self((2.0 * f.abs()).round() as u32) }

    /// Return the number of projection states available to `self`.
    pub fn multiplicity(self) -> usize { self.0 as usize + 1 }

    /// Return an iterator over available [`Spin`] pairs by ascending projection
    /// number.
    pub fn iter(self) -> SpinProjections {
        SpinProjections { j: self, m: Some(SpinProj(-(self.0 as i32))) }
    }
}

impl IntoIterator for SpinTotal {
    type IntoIter = SpinProjections;
    type Item = Spin;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl std::ops::Deref for SpinTotal {
    type Target = u32;

    fn deref(&self) -> &Self::Target { &self.0 }
}

impl<J> From<J> for SpinTotal
where J: Into<u32>
{
    fn from(j: J) -> Self { Self(j.into()) }
}

impl From<SpinTotal> for f64 {
    fn from(j: SpinTotal) -> Self { j.f() }
}

/// A `(total, projection)` spin quantum number pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Spin(SpinTotal, SpinProj);

impl Spin {
    /// Create a new spin if the given spin-projection number is valid for the
    /// given total-spin number.
    pub fn new(j: u32, m: i32) -> Option<Self> {
        let j_i64 = i64::from(j);
        let m_i64 = i64::from(m);
        (
            (-j_i64..=j_i64).contains(&m_i64)
            && m_i64.saturating_sub(j_i64) % 2 == 0
        )
        .then_some(Self(SpinTotal(j), SpinProj(m)))
    }

    /// Return the [total-spin][SpinTotal] quantum number.
    pub fn total(self) -> SpinTotal { self.0 }

    /// Return the [spin-projection][SpinProj] quantum number.
    pub fn proj(self) -> SpinProj { self.1 }

    /// Reflect the projection quantum number across the orthogonal plane, i.e.
    /// apply a minus sign.
    pub fn reflect(&mut self) { self.1.reflect() }

    /// Return a [reflected][Self::reflect] copy of `self`.
    pub fn reflected(self) -> Self { Self(self.0, self.1.reflected()) }

    /// Return `true` if the projection number saturates the range of available
    /// spin values.
    pub fn is_stretched(self) -> bool {
        let j_i64 = i64::from(self.0.0);
        let m_i64 = i64::from(self.1.0);
        (m_i64 >= j_i64) || (m_i64 <= -j_i64)
    }

    /// Return `self` as a bare pair of halves.
    pub fn halves(self) -> (u32, i32) { (self.0.halves(), self.1.halves()) }

    /// Return `self` as a `(f64, f64)`.
    ///
    /// This reflects the "true" numerical values of the quantum numbers; i.e.
    /// there are factors of two relative to both numbers returned by
    /// [`Self::halves`].
    pub fn f(self) -> (f64, f64) { (self.0.f(), self.1.f()) }

    /// Create new spin quantum numbers from a pair of `f64`s, rounding to the
    /// nearest half-integers according to [`SpinTotal::from_f64`] and
    /// [`SpinProj::from_f64`].
    pub fn from_f64(f: (f64, f64)) -> Self {
        Self(SpinTotal::from_f64(f.0), SpinProj::from_f64(f.1))
    }
}

impl<J, M> From<(J, M)> for Spin
where
    J: Into<SpinTotal>,
    M: Into<SpinProj>,
{
    fn from(jm: (J, M)) -> Self {
        let (j, m) = jm;
        Self::new(j.into().halves(), m.into().halves())
            .expect("Spin::From: invalid spin total-projection combination")
    }
}

impl From<Spin> for (f64, f64) {
    fn from(jm: Spin) -> Self { jm.f() }
}

/// Iterator over spin projection states for a fixed total spin magnitude.
///
/// Projection states are visited in ascending order.
#[derive(Copy, Clone, Debug)]
pub struct SpinProjections {
    j: SpinTotal,
    m: Option<SpinProj>,
}

impl Iterator for SpinProjections {
    type Item = Spin;

    fn next(&mut self) -> Option<Self::Item> {
        let m = self.m?;
        self.m
            = (m.0 < self.j.0 as i32)
            .then_some(SpinProj(m.0 + 2));
        Some(Spin(self.j, m))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n
            = self.m
            .map(|m| ((self.j.0 as i32 - m.0) / 2) as usize + 1)
            .unwrap_or(0);
        (n, Some(n))
    }
}

impl ExactSizeIterator for SpinProjections { }

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn proj_rounding() {
        assert_eq!(SpinProj::from_f64(0.5).halves(), 1);
        assert_eq!(SpinProj::from_f64(-0.5).halves(), -1);
        assert_eq!(SpinTotal::from_f64(0.5).halves(), 1);
        assert_eq!(SpinTotal::from_f64(-1.5).halves(), 3);
    }

    #[test]
    fn spin_validity() {
        assert!(Spin::new(1, 1).is_some());
        assert!(Spin::new(1, -1).is_some());
        assert!(Spin::new(1, 2).is_none()); // |m| > j
        assert!(Spin::new(2, 1).is_none()); // parity mismatch
    }

    #[test]
    fn projections() {
        let half = SpinTotal::new(1);
        let ms: Vec<i32>
            = half.iter().map(|jm| jm.proj().halves()).collect();
        assert_eq!(ms, vec![-1, 1]);
        assert_eq!(half.iter().len(), half.multiplicity());
    }
}
