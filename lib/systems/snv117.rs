//! Parameters for the ¹¹⁷SnV⁻ center in diamond (for use with the DJT
//! Hamiltonian).
//!
//! Reduction parameters are for the ¹¹⁷SnV⁻ defect center from paper
//! [10.1103/PhysRevX.8.021063][reduction]. Hyperfine parameters are for the
//! ¹¹⁷SnV⁻ defect center from paper [10.1103/fq19-lfmv][hyperfine], and use
//! the DJT form with A1, A2, A∥, A⊥.
//!
//! [reduction]: https://doi.org/10.1103/PhysRevX.8.021063
//! [hyperfine]: https://doi.org/10.1103/fq19-lfmv

use crate::{
    dynamics::{ DjtParams, HyperfineParams },
    hilbert::{ Basis, BasisState, DjtState, OrbitalProj, SpinState },
    spin::Spin,
};

// Spin values
pub const S: f64 = 0.5; // electron spin
pub const SN: f64 = 0.5; // nuclear spin (117Sn)

// Orbital magnetic field susceptibility
pub const Q: f64 = 0.328 * 0.471; // [] ground state
pub const Q_EXC: f64 = 0.782 * 0.125; // [] excited state

// Spin-orbit coupling
pub const L: f64 = 830.0; // [GHz] ground state
pub const L_EXC: f64 = 3000.0; // [GHz] excited state

// Ratio of electron to proton mass
pub const RMEP: f64 = 5.44617021e-4;
// Ratio of nuclear/electron gyromagnetic ratio (assuming g ~ 2 for electrons)
pub const RG: f64 = 2.00208 * RMEP / 2.0;

// Ground state hyperfine parameters (117Sn, SN = 1/2)
// DJT form: A1, A2, A_parallel, A_perpendicular
pub const A1_GND: f64 = 1.1 / 1000.0; // [GHz] off-diagonal coupling A1 (1.1 MHz)
pub const A2_GND: f64 = 1.9 / 1000.0; // [GHz] off-diagonal coupling A2 (1.9 MHz)
pub const APAR_GND: f64 = 488.0 / 1000.0; // [GHz] parallel coupling A∥ (488.0 MHz)
pub const APERP_GND: f64 = 1029.7 / 1000.0; // [GHz] perpendicular coupling A⊥ (1029.7 MHz)

// Excited state hyperfine parameters (117Sn, SN = 1/2)
// DJT form: A1, A2, A_parallel, A_perpendicular
pub const A1_EXC: f64 = 0.1 / 1000.0; // [GHz] off-diagonal coupling A1 (0.1 MHz)
pub const A2_EXC: f64 = -0.43 / 1000.0; // [GHz] off-diagonal coupling A2 (-0.43 MHz)
pub const APAR_EXC: f64 = 15.0 / 1000.0; // [GHz] parallel coupling A∥ (15.0 MHz)
pub const APERP_EXC: f64 = 32.3 / 1000.0; // [GHz] perpendicular coupling A⊥ (32.3 MHz)

/// Ground-manifold parameter set.
pub fn ground() -> DjtParams {
    DjtParams {
        q: Q,
        lambda: L,
        rg: RG,
        hyperfine: HyperfineParams {
            a1: A1_GND,
            a2: A2_GND,
            a_par: APAR_GND,
            a_perp: APERP_GND,
        },
    }
}

/// Excited-manifold parameter set.
pub fn excited() -> DjtParams {
    DjtParams {
        q: Q_EXC,
        lambda: L_EXC,
        rg: RG,
        hyperfine: HyperfineParams {
            a1: A1_EXC,
            a2: A2_EXC,
            a_par: APAR_EXC,
            a_perp: APERP_EXC,
        },
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum State {
    P0, // e₊  mS = -1/2  mI = -1/2
    P1, // e₊  mS = -1/2  mI = +1/2
    P2, // e₊  mS = +1/2  mI = -1/2
    P3, // e₊  mS = +1/2  mI = +1/2
    M0, // e₋  mS = -1/2  mI = -1/2
    M1, // e₋  mS = -1/2  mI = +1/2
    M2, // e₋  mS = +1/2  mI = -1/2
    M3, // e₋  mS = +1/2  mI = +1/2
}
use State::*;

impl State {
    /// All eight states of one manifold in canonical basis order.
    pub const ALL: [Self; 8] = [P0, P1, P2, P3, M0, M1, M2, M3];
}

impl BasisState for State {
    // transitions between the ground and excited manifolds preserve orbital
    // branch, electron spin, and nuclear spin
    fn couples_to(&self, other: &Self) -> bool { self == other }
}

impl SpinState for State {
    fn spin(&self) -> Spin {
        match *self {
            P0 | P1 | M0 | M1 => (1_u32, -1_i32).into(),
            P2 | P3 | M2 | M3 => (1_u32,  1_i32).into(),
        }
    }
}

impl DjtState for State {
    fn orbital(&self) -> OrbitalProj {
        match *self {
            P0 | P1 | P2 | P3 => OrbitalProj::Plus,
            M0 | M1 | M2 | M3 => OrbitalProj::Minus,
        }
    }

    fn nuclear(&self) -> Spin {
        match *self {
            P0 | P2 | M0 | M2 => (1_u32, -1_i32).into(),
            P1 | P3 | M1 | M3 => (1_u32,  1_i32).into(),
        }
    }
}

/// All eight basis states of one manifold in canonical order, with zero
/// zero-point energy.
pub fn basis() -> Basis<State> {
    State::ALL.into_iter().map(|s| (s, 0.0)).collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::spin::SpinTotal;

    #[test]
    fn literature_values() {
        assert_eq!(S, 0.5);
        assert_eq!(SN, 0.5);
        assert_eq!(Q, 0.328 * 0.471);
        assert_eq!(Q_EXC, 0.782 * 0.125);
        assert_eq!(L, 830.0);
        assert_eq!(L_EXC, 3000.0);
        assert_eq!(RMEP, 5.44617021e-4);
        assert_eq!(RG, 2.00208 * RMEP / 2.0);
        assert_eq!(A1_GND, 1.1 / 1000.0);
        assert_eq!(A2_GND, 1.9 / 1000.0);
        assert_eq!(APAR_GND, 488.0 / 1000.0);
        assert_eq!(APERP_GND, 1029.7 / 1000.0);
        assert_eq!(A1_EXC, 0.1 / 1000.0);
        assert_eq!(A2_EXC, -0.43 / 1000.0);
        assert_eq!(APAR_EXC, 15.0 / 1000.0);
        assert_eq!(APERP_EXC, 32.3 / 1000.0);
    }

    #[test]
    fn hyperfine_shapes() {
        assert_eq!(ground().hyperfine.as_array().len(), 4);
        assert_eq!(excited().hyperfine.as_array().len(), 4);
        assert_eq!(
            ground().hyperfine.as_array(),
            [A1_GND, A2_GND, APAR_GND, APERP_GND],
        );
        assert_eq!(
            excited().hyperfine.as_array(),
            [A1_EXC, A2_EXC, APAR_EXC, APERP_EXC],
        );
    }

    #[test]
    fn spin_values() {
        State::ALL.iter()
            .for_each(|s| {
                assert_eq!(s.spin().total(), SpinTotal::from_f64(S));
                assert_eq!(s.nuclear().total(), SpinTotal::from_f64(SN));
            });
    }

    #[test]
    fn canonical_basis() {
        let basis = basis();
        assert_eq!(basis.len(), 8);
        State::ALL.iter().enumerate()
            .for_each(|(k, s)| assert_eq!(basis.get_index_of(s), Some(k)));
    }
}
