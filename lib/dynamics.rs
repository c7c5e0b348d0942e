//! Constructs to calculate the static level structure of dynamic Jahn-Teller
//! defect manifolds in an applied magnetic field, and the optical transitions
//! between them.
//!
//! All couplings and eigenvalues are in units of GHz; magnetic fields are in
//! units of T.

use itertools::Itertools;
use ndarray::{ self as nd, s };
use ndarray_linalg::{ EighInto, UPLO };
use num_complex::Complex64 as C64;
use crate::hilbert::{ Basis, BasisState, DjtState };

// Bohr magneton [GHz / T]
pub const MU_B: f64 = 13.996245168425658;

// electron spin g-factor, taken as 2 per the gyromagnetic ratio convention of
// the hyperfine parameter sets
pub const G_S: f64 = 2.0;

/// Hyperfine coupling parameters in the dynamic Jahn-Teller form.
///
/// All values are in GHz. `a_par` and `a_perp` act within an orbital branch;
/// `a1` and `a2` couple the two branches.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HyperfineParams {
    /// [GHz] off-diagonal coupling A1
    pub a1: f64,
    /// [GHz] off-diagonal coupling A2
    pub a2: f64,
    /// [GHz] parallel coupling A∥
    pub a_par: f64,
    /// [GHz] perpendicular coupling A⊥
    pub a_perp: f64,
}

impl HyperfineParams {
    /// All couplings set to zero.
    pub fn zero() -> Self {
        Self { a1: 0.0, a2: 0.0, a_par: 0.0, a_perp: 0.0 }
    }

    /// Return the parameter set as a fixed-shape `[A1, A2, A∥, A⊥]` array.
    pub fn as_array(self) -> [f64; 4] {
        [self.a1, self.a2, self.a_par, self.a_perp]
    }
}

/// Complete parameter set for a single E ⊗ e manifold.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DjtParams {
    /// [] orbital magnetic field susceptibility
    pub q: f64,
    /// [GHz] spin-orbit coupling
    pub lambda: f64,
    /// [] ratio of nuclear to electron gyromagnetic ratios
    pub rg: f64,
    /// [GHz] hyperfine couplings
    pub hyperfine: HyperfineParams,
}

/// Hamiltonian builder for a single dynamic Jahn-Teller manifold in a static
/// magnetic field.
///
/// The effective Hamiltonian comprises the spin-orbit interaction
/// `-λ L_z S_z`, the Zeeman interaction
/// `μ_B (g_s B·S + q B_z L_z - rg g_s B·I)` with the orbital moment quenched
/// to its z-component, and the hyperfine interaction
/// ```text
/// A∥ S_z I_z + A⊥ (S_x I_x + S_y I_y)
///     + A1 τ_x (S_x I_x - S_y I_y) + A2 τ_y (S_x I_y + S_y I_x)
/// ```
/// where `τ_x`, `τ_y` act on the orbital doublet.
#[derive(Clone, Debug)]
pub struct HBuilderDjt<'a, S>
where S: DjtState
{
    pub(crate) basis: &'a Basis<S>,
    pub params: DjtParams,
    pub field: [f64; 3],
}

impl<'a, S> HBuilderDjt<'a, S>
where S: DjtState
{
    /// Create a new `HBuilderDjt` for a magnetic field `[B_x, B_y, B_z]` in T.
    pub fn new(basis: &'a Basis<S>, params: DjtParams, field: [f64; 3])
        -> Self
    {
        Self { basis, params, field }
    }

    /// Get a reference to the basis.
    pub fn basis(&self) -> &Basis<S> { self.basis }

    /// Compute the matrix element `⟨s2|H|s1⟩`.
    fn matrix_element(&self, s2: &S, s1: &S) -> C64 {
        let DjtParams { q, lambda, rg, hyperfine } = self.params;
        let HyperfineParams { a1, a2, a_par, a_perp } = hyperfine;
        let [bx, by, bz] = self.field;
        let l1 = s1.orbital().ell();
        let ms1 = s1.spin().proj().f();
        let mi1 = s1.nuclear().proj().f();
        let orb_flip = s2.orbital() != s1.orbital();
        let dms = s2.spin().proj().halves() - s1.spin().proj().halves();
        let dmi = s2.nuclear().proj().halves() - s1.nuclear().proj().halves();
        match (orb_flip, dms, dmi) {
            (false, 0, 0) => {
                let e = self.basis.get_energy(s1).unwrap_or(0.0);
                C64::from(
                    e
                    - lambda * l1 * ms1
                    + MU_B * (G_S * ms1 + q * l1 - rg * G_S * mi1) * bz
                    + a_par * ms1 * mi1
                )
            },
            (false, 2, 0) => G_S * MU_B * C64::new(bx, -by) / 2.0,
            (false, -2, 0) => G_S * MU_B * C64::new(bx, by) / 2.0,
            (false, 0, 2) => -rg * G_S * MU_B * C64::new(bx, -by) / 2.0,
            (false, 0, -2) => -rg * G_S * MU_B * C64::new(bx, by) / 2.0,
            (false, 2, -2) | (false, -2, 2) => C64::from(a_perp / 2.0),
            (true, 2, 2) => C64::from((a1 + l1 * a2) / 2.0),
            (true, -2, -2) => C64::from((a1 - l1 * a2) / 2.0),
            _ => C64::from(0.0),
        }
    }

    /// Compute the Hamiltonian as a 2D array.
    pub fn gen(&self) -> nd::Array2<C64> {
        let n = self.basis.len();
        nd::Array2::from_shape_vec(
            (n, n),
            self.basis.keys().cartesian_product(self.basis.keys())
                .map(|(s2, s1)| self.matrix_element(s2, s1))
                .collect(),
        )
        .expect("HBuilderDjt::gen: error reshaping array")
    }

    /// Diagonalize the [generated][Self::gen] Hamiltonian.
    ///
    /// Eigenvalues are returned in ascending order, with eigenvectors as the
    /// columns of the second returned array.
    pub fn diagonalize(&self) -> (nd::Array1<f64>, nd::Array2<C64>) {
        match self.gen().eigh_into(UPLO::Lower) {
            Ok((E, V)) => (E, V),
            Err(err) => panic!("unexpected diagonalization error: {}", err),
        }
    }

    /// Compute only the eigenvalues of the [generated][Self::gen]
    /// Hamiltonian, in ascending order.
    pub fn levels(&self) -> nd::Array1<f64> { self.diagonalize().0 }

    /// Diagonalize the [generated][Self::gen] Hamiltonian and return a ground
    /// state of the manifold.
    ///
    /// Note that, in general, there may be more than one state that minimizes
    /// the energy of the manifold; this method offers no guarantees about
    /// which ground state is returned.
    pub fn ground_state(&self) -> (f64, nd::Array1<C64>) {
        let (E, V) = self.diagonalize();
        let e: f64 = E[0];
        let v: nd::Array1<C64> = V.slice(s![.., 0]).to_owned();
        (e, v)
    }
}

/// Construct the electric-dipole coupling matrix between the basis states of
/// an upper and a lower manifold.
///
/// `D[[i, j]]` is 1 if the `i`-th upper state [couples to]
/// [BasisState::couples_to] the `j`-th lower state and 0 otherwise.
pub fn dipole_matrix<S>(upper: &Basis<S>, lower: &Basis<S>)
    -> nd::Array2<C64>
where S: BasisState
{
    let nu = upper.len();
    let nl = lower.len();
    nd::Array2::from_shape_vec(
        (nu, nl),
        upper.keys().cartesian_product(lower.keys())
            .map(|(su, sl)| {
                if su.couples_to(sl) { C64::from(1.0) } else { C64::from(0.0) }
            })
            .collect(),
    )
    .expect("dipole_matrix: error reshaping array")
}

/// Frequencies and relative strengths of the electric-dipole transitions
/// between two diagonalized manifolds.
///
/// Both arrays are indexed by `(upper, lower)` eigenstate pairs.
#[derive(Clone, Debug)]
pub struct Spectrum {
    /// [GHz] transition frequencies, relative to the manifolds' zero-point
    /// separation
    pub freq: nd::Array2<f64>,
    /// [] relative transition strengths
    pub strength: nd::Array2<f64>,
}

/// Compute the optical transition spectrum between an upper and a lower
/// manifold.
///
/// Transition frequencies are differences of manifold eigenvalues, i.e.
/// relative to the zero-phonon line unless the bases carry explicit
/// zero-point energies. Strengths are squared moduli of the dipole matrix
/// taken between manifold eigenstates.
///
/// *Panics* if the two bases have unequal sizes.
pub fn transition_spectrum<S>(
    upper: &HBuilderDjt<S>,
    lower: &HBuilderDjt<S>,
) -> Spectrum
where S: DjtState
{
    if upper.basis().len() != lower.basis().len() {
        panic!("transition_spectrum: mismatched basis sizes");
    }
    let (E_u, V_u) = upper.diagonalize();
    let (E_l, V_l) = lower.diagonalize();
    let D = dipole_matrix(upper.basis(), lower.basis());
    let overlap: nd::Array2<C64>
        = V_u.t().mapv(|a| a.conj()).dot(&D).dot(&V_l);
    let strength: nd::Array2<f64> = overlap.mapv(|a| (a * a.conj()).re);
    let freq: nd::Array2<f64>
        = nd::Array2::from_shape_fn(
            (E_u.len(), E_l.len()), |(i, j)| E_u[i] - E_l[j]);
    Spectrum { freq, strength }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::systems::snv117;

    fn approx(a: f64, b: f64) -> bool { (a - b).abs() < 1e-9 }

    fn params_zero() -> DjtParams {
        DjtParams {
            q: 0.0,
            lambda: 0.0,
            rg: 0.0,
            hyperfine: HyperfineParams::zero(),
        }
    }

    #[test]
    fn hermitian() {
        let basis = snv117::basis();
        let builder
            = HBuilderDjt::new(&basis, snv117::ground(), [0.3, 0.2, 0.1]);
        let H = builder.gen();
        let n = basis.len();
        for i in 0..n {
            for j in 0..n {
                let hij = H[[i, j]];
                let hji = H[[j, i]];
                assert!(
                    approx(hij.re, hji.re) && approx(hij.im, -hji.im),
                    "H[[{}, {}]] = {} vs H[[{}, {}]] = {}", i, j, hij, j, i, hji,
                );
            }
        }
    }

    #[test]
    fn spin_orbit_splitting() {
        let basis = snv117::basis();
        let mut params = params_zero();
        params.lambda = 830.0;
        let builder = HBuilderDjt::new(&basis, params, [0.0; 3]);
        let E = builder.levels();
        E.iter().take(4)
            .for_each(|e| assert!(approx(*e, -415.0), "lower branch: {}", e));
        E.iter().skip(4)
            .for_each(|e| assert!(approx(*e, 415.0), "upper branch: {}", e));
    }

    #[test]
    fn axial_hyperfine_splitting() {
        let basis = snv117::basis();
        let mut params = params_zero();
        params.hyperfine.a_par = 0.488;
        let builder = HBuilderDjt::new(&basis, params, [0.0; 3]);
        let E = builder.levels();
        E.iter().take(4)
            .for_each(|e| assert!(approx(*e, -0.488 / 4.0), "lower: {}", e));
        E.iter().skip(4)
            .for_each(|e| assert!(approx(*e, 0.488 / 4.0), "upper: {}", e));
    }

    #[test]
    fn transverse_hyperfine_splitting() {
        let basis = snv117::basis();
        let mut params = params_zero();
        params.hyperfine.a_perp = 1.0297;
        let builder = HBuilderDjt::new(&basis, params, [0.0; 3]);
        let E = builder.levels();
        // flip-flop couples |↓↑⟩ and |↑↓⟩ in each branch; stretched spin pairs
        // are unshifted
        assert!(approx(E[0], -1.0297 / 2.0));
        assert!(approx(E[1], -1.0297 / 2.0));
        (2..6).for_each(|k| assert!(approx(E[k], 0.0), "center: {}", E[k]));
        assert!(approx(E[6], 1.0297 / 2.0));
        assert!(approx(E[7], 1.0297 / 2.0));
    }

    #[test]
    fn zeeman_spread() {
        let basis = snv117::basis();
        let mut params = params_zero();
        params.rg = snv117::RG;
        let bz = 0.5;
        let builder = HBuilderDjt::new(&basis, params, [0.0, 0.0, bz]);
        let E = builder.levels();
        let spread = E[7] - E[0];
        assert!(approx(spread, G_S * MU_B * bz * (1.0 + snv117::RG)));
    }

    #[test]
    fn spectrum_normalization() {
        let basis = snv117::basis();
        let gnd = HBuilderDjt::new(&basis, snv117::ground(), [0.1, 0.0, 0.2]);
        let exc = HBuilderDjt::new(&basis, snv117::excited(), [0.1, 0.0, 0.2]);
        let spectrum = transition_spectrum(&exc, &gnd);
        assert_eq!(spectrum.freq.dim(), (8, 8));
        assert_eq!(spectrum.strength.dim(), (8, 8));
        // the dipole matrix maps lower eigenstates one-to-one into the upper
        // manifold, so total strength out of each lower eigenstate is 1
        spectrum.strength.sum_axis(nd::Axis(0)).iter()
            .for_each(|col| assert!(approx(*col, 1.0), "column sum: {}", col));
    }
}
