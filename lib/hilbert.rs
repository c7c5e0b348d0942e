//! Definitions to describe defect-center states, bases, and combinations
//! thereof.

use std::{ hash::Hash, ops::{ Deref, DerefMut } };
use ndarray as nd;
use indexmap::IndexMap;
use itertools::Itertools;
use num_complex::Complex64 as C64;
use num_traits::{ Zero, One };
use crate::spin::Spin;

/* States *********************************************************************/

/// A single basis state.
pub trait BasisState: Clone + Eq + Hash + std::fmt::Debug {
    /// Return `true` if two states can be coupled by a stimulated electric
    /// dipole transition.
    ///
    /// This method should be reflexive in its inputs.
    fn couples_to(&self, other: &Self) -> bool;
}

/// Extends [`BasisState`] to include electron spin state properties.
pub trait SpinState: BasisState {
    /// Get the electron [`Spin`] of the basis state.
    fn spin(&self) -> Spin;
}

/// Projection of an orbital doublet onto the angular momentum eigenbasis.
///
/// The two branches `e₊` and `e₋` are the L_z = ±1 eigenstates of an E ⊗ e
/// Jahn-Teller doublet.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OrbitalProj {
    /// `e₊` branch with L_z = +1
    Plus,
    /// `e₋` branch with L_z = -1
    Minus,
}

impl OrbitalProj {
    /// Return the appropriate L_z eigenvalue.
    pub fn ell(&self) -> f64 {
        match *self {
            Self::Plus => 1.0,
            Self::Minus => -1.0,
        }
    }

    /// Return the opposite branch.
    pub fn flipped(self) -> Self {
        match self {
            Self::Plus => Self::Minus,
            Self::Minus => Self::Plus,
        }
    }
}

/// Simple representation of a spin-1/2 system.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HSpin {
    /// Spin-down state with spin J = 1/2, mJ = -1/2
    Dn,
    /// Spin-up state with spin J = 1/2, mJ = +1/2
    Up,
}

impl HSpin {
    /// Return the appropriate S_z eigenvalue.
    pub fn sz(&self) -> f64 {
        match *self {
            Self::Dn => -0.5,
            Self::Up => 0.5,
        }
    }

    /// Return the opposite projection.
    pub fn flipped(self) -> Self {
        match self {
            Self::Dn => Self::Up,
            Self::Up => Self::Dn,
        }
    }
}

impl BasisState for HSpin {
    fn couples_to(&self, other: &Self) -> bool {
        matches!((*self, *other), (Self::Dn, Self::Up) | (Self::Up, Self::Dn))
    }
}

impl SpinState for HSpin {
    fn spin(&self) -> Spin {
        match *self {
            Self::Dn => (1_u32, -1_i32).into(),
            Self::Up => (1_u32,  1_i32).into(),
        }
    }
}

/// Extends [`SpinState`] for basis states of an E ⊗ e dynamic Jahn-Teller
/// doublet carrying an electron spin and a single nuclear spin.
pub trait DjtState: SpinState {
    /// Get the orbital branch of the basis state.
    fn orbital(&self) -> OrbitalProj;

    /// Get the nuclear [`Spin`] of the basis state.
    fn nuclear(&self) -> Spin;
}

/// Compute the outer product of two state vectors.
pub fn outer_prod(a: &nd::Array1<C64>, b: &nd::Array1<C64>)
    -> nd::Array2<C64>
{
    let na = a.len();
    let nb = b.len();
    nd::Array2::from_shape_vec(
        (na, nb),
        a.iter().cartesian_product(b)
            .map(|(ai, bj)| *ai * bj.conj())
            .collect(),
    )
    .unwrap()
}

/* Bases **********************************************************************/

#[derive(Clone)]
pub struct States<'a, S> {
    iter: indexmap::map::Keys<'a, S, f64>
}

impl<'a, S> Iterator for States<'a, S> {
    type Item = &'a S;

    fn next(&mut self) -> Option<Self::Item> { self.iter.next() }
}

pub trait StateIter<'a> {
    type State;

    fn num_states(&'a self) -> usize;

    fn state_iter(&'a self) -> States<'a, Self::State>;
}

/// A collection of unique [`BasisState`]s with associated energies in units of
/// frequency.
///
/// This collection is backed by a single [`IndexMap`], which can be accessed
/// via [`AsRef`], [`AsMut`], [`Deref`] and [`DerefMut`]. The iteration order
/// of the map fixes the matrix representation used by the Hamiltonian
/// builders.
#[derive(Clone, Debug, PartialEq)]
pub struct Basis<S>
where S: Clone + Eq + Hash
{
    energies: IndexMap<S, f64>,
}

impl<S> AsRef<IndexMap<S, f64>> for Basis<S>
where S: Clone + Eq + Hash
{
    fn as_ref(&self) -> &IndexMap<S, f64> { &self.energies }
}

impl<S> AsMut<IndexMap<S, f64>> for Basis<S>
where S: Clone + Eq + Hash
{
    fn as_mut(&mut self) -> &mut IndexMap<S, f64> { &mut self.energies }
}

impl<S> Deref for Basis<S>
where S: Clone + Eq + Hash
{
    type Target = IndexMap<S, f64>;

    fn deref(&self) -> &Self::Target { &self.energies }
}

impl<S> DerefMut for Basis<S>
where S: Clone + Eq + Hash
{
    fn deref_mut(&mut self) -> &mut Self::Target { &mut self.energies }
}

impl<S> Default for Basis<S>
where S: Clone + Eq + Hash
{
    fn default() -> Self { Self { energies: IndexMap::default() } }
}

impl<S> FromIterator<(S, f64)> for Basis<S>
where S: Clone + Eq + Hash
{
    fn from_iter<I>(iter: I) -> Self
    where I: IntoIterator<Item = (S, f64)>
    {
        Self { energies: iter.into_iter().collect() }
    }
}

impl<'a, S> StateIter<'a> for Basis<S>
where S: Clone + Eq + Hash
{
    type State = S;

    fn num_states(&'a self) -> usize { self.energies.len() }

    fn state_iter(&'a self) -> States<'a, Self::State> {
        States { iter: self.energies.keys() }
    }
}

impl<S> Basis<S>
where S: Clone + Eq + Hash
{
    /// Create a new, empty basis.
    pub fn new() -> Self { Self::default() }

    /// Get the energy in units of frequency of a particular basis state.
    pub fn get_energy(&self, state: &S) -> Option<f64> {
        self.energies.get(state).copied()
    }

    /// Get the energy in units of frequency of a particular basis state.
    pub fn get_energy_mut(&mut self, state: &S) -> Option<&mut f64> {
        self.energies.get_mut(state)
    }

    /// Get the energy in units of frequency of a particular basis state by
    /// index.
    pub fn get_energy_index(&self, index: usize) -> Option<f64> {
        self.energies.get_index(index).map(|(_, e)| e).copied()
    }

    /// Get an array representation of a particular basis state.
    ///
    /// The array is sized to match the number of states currently in `self`.
    pub fn get_vector(&self, state: &S) -> Option<nd::Array1<C64>> {
        self.energies.get_index_of(state)
            .map(|k| {
                let n = self.energies.len();
                (0..n).map(|j| if j == k { C64::one() } else { C64::zero() })
                    .collect()
            })
    }

    /// Get an array representation of a particular basis state by index.
    ///
    /// The array is sized to match the number of states currently in `self`.
    pub fn get_vector_index(&self, index: usize) -> Option<nd::Array1<C64>> {
        let n = self.energies.len();
        (index < n).then(|| {
            (0..n).map(|j| if j == index { C64::one() } else { C64::zero() })
                .collect()
        })
    }

    /// Get an array representation of a linear combination of basis states,
    /// with weights determined by a weighting function.
    ///
    /// The weighting function will be passed a state, its index, and its
    /// energy. The array is sized to match the number of states currently in
    /// `self`.
    pub fn get_vector_weighted<F>(&self, weights: F) -> nd::Array1<C64>
    where F: Fn(&S, usize, f64) -> C64
    {
        self.energies.iter().enumerate()
            .map(|(index, (state, energy))| weights(state, index, *energy))
            .collect()
    }

    /// Get an array representation of the density matrix for a particular
    /// basis state.
    ///
    /// The array is sized to match the number of states currently in `self`.
    pub fn get_density(&self, state: &S) -> Option<nd::Array2<C64>> {
        self.get_vector(state)
            .map(|diag| nd::Array2::from_diag(&diag))
    }

    /// Get an array representation of the density matrix for a linear
    /// combination of basis states (corresponding to a pure state) with
    /// weights determined by a weighting function.
    ///
    /// The weighting function will be passed a state, its index, and its
    /// energy. The array is sized to match the number of states currently in
    /// `self`.
    pub fn get_density_weighted_pure<F>(&self, weights: F) -> nd::Array2<C64>
    where F: Fn(&S, usize, f64) -> C64
    {
        let vector: nd::Array1<C64> = self.get_vector_weighted(weights);
        outer_prod(&vector, &vector)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn basis_vectors() {
        let basis: Basis<HSpin>
            = [(HSpin::Dn, 0.0), (HSpin::Up, 1.0)].into_iter().collect();
        assert_eq!(basis.num_states(), 2);
        assert_eq!(basis.get_energy(&HSpin::Up), Some(1.0));
        let v = basis.get_vector(&HSpin::Up).unwrap();
        assert_eq!(v.len(), 2);
        assert_eq!(v[0], C64::zero());
        assert_eq!(v[1], C64::one());
        let rho = basis.get_density(&HSpin::Dn).unwrap();
        assert_eq!(rho[[0, 0]], C64::one());
        assert_eq!(rho[[1, 1]], C64::zero());
    }

    #[test]
    fn weighted_density() {
        let basis: Basis<HSpin>
            = [(HSpin::Dn, 0.0), (HSpin::Up, 1.0)].into_iter().collect();
        let rho
            = basis.get_density_weighted_pure(|_, _, _| {
                C64::from(0.5_f64.sqrt())
            });
        let trace: C64 = rho.diag().iter().sum();
        assert!((trace - C64::one()).norm() < 1e-15);
    }

    #[test]
    fn orbital_branches() {
        assert_eq!(OrbitalProj::Plus.ell(), 1.0);
        assert_eq!(OrbitalProj::Minus.ell(), -1.0);
        assert_eq!(OrbitalProj::Plus.flipped(), OrbitalProj::Minus);
        assert_eq!(HSpin::Dn.sz(), -0.5);
        assert_eq!(HSpin::Dn.flipped(), HSpin::Up);
    }
}
