//! Scalar field arithmetic modulo
//! r = 0x12ab655e9a2ca55660b44d1e5c37b00159aa76fed00000010a11800000000001

use crate::ORDER_HEX;
use core::ops::{Shr, ShrAssign};
use elliptic_curve::{
    bigint::{
        Encoding, U256, impl_modulus,
        modular::constant_mod::{Residue, ResidueParams},
    },
    ff::{Field, PrimeField},
    rand_core::RngCore,
    subtle::{
        Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeGreater, ConstantTimeLess,
        CtOption,
    },
    zeroize::DefaultIsZeroes,
};

impl_modulus!(
    FrModulus,
    U256,
    "12ab655e9a2ca55660b44d1e5c37b00159aa76fed00000010a11800000000001"
);

/// The scalar modulus `r` as an integer.
pub(crate) const ORDER: U256 = FrModulus::MODULUS;

/// (r - 1) / 2
const FRAC_MODULUS_2: U256 =
    U256::from_be_hex("0955b2af4d1652ab305a268f2e1bd800acd53b7f680000008508c00000000000");

/// (T - 1) / 2 where r - 1 = 2^47 * T
const T_MINUS_1_DIV_2: U256 =
    U256::from_be_hex("00000000000012ab655e9a2ca55660b44d1e5c37b00159aa76fed00000010a11");

/// 22^T mod r
const ROOT_OF_UNITY: Scalar =
    Scalar::from_hex("11d4b7f60cb92cc160c69477d1a8a12f9b506ee363e3f04a476ef4a4ec2a895e");

/// Scalars are elements in the finite field modulo r, the order of the
/// BLS12-377 G1 and G2 subgroups.
///
/// # Trait impls
///
/// Much of the important functionality of scalars is provided by traits from
/// the [`ff`](https://docs.rs/ff/) crate, which is re-exported as
/// `bls12377::elliptic_curve::ff`:
///
/// - [`Field`] - `random`, `double`, `square`, `invert` and `sqrt`
/// - [`PrimeField`] - `from_repr`/`to_repr` for converting scalars from/to
///   fixed-width big-endian integers, plus the two-adic constants
#[derive(Clone, Copy)]
pub struct Scalar(pub(crate) Residue<FrModulus, { FrModulus::LIMBS }>);

impl_field_element!(
    Scalar,
    U256,
    FrModulus,
    bytes: 32,
    frac_modulus_2: FRAC_MODULUS_2,
    t_minus_1_div_2: T_MINUS_1_DIV_2,
    s: 47,
    root_of_unity: ROOT_OF_UNITY
);

/// Fixed-width big-endian serialization of a [`Scalar`].
pub type ScalarBytes = [u8; 32];

impl Scalar {
    /// Returns the big-endian encoding of this scalar.
    pub fn to_bytes(&self) -> ScalarBytes {
        let mut bytes = [0u8; 32];
        self.write_be_bytes(&mut bytes);
        bytes
    }

    /// Returns the little-endian encoding of this scalar.
    pub fn to_le_bytes(&self) -> ScalarBytes {
        let mut bytes = self.to_bytes();
        bytes.reverse();
        bytes
    }

    /// Returns `self >> shift`, treating the canonical representative as an
    /// integer.
    ///
    /// Note: not constant-time with respect to the `shift` parameter.
    pub fn shr_vartime(&self, shift: usize) -> Self {
        Self::from_uint(&self.0.retrieve().shr_vartime(shift))
    }
}

impl PrimeField for Scalar {
    type Repr = ScalarBytes;

    const MODULUS: &'static str = ORDER_HEX;
    const NUM_BITS: u32 = 253;
    const CAPACITY: u32 = 252;
    const TWO_INV: Self =
        Self::from_hex("0955b2af4d1652ab305a268f2e1bd800acd53b7f680000008508c00000000001");
    const MULTIPLICATIVE_GENERATOR: Self = Self::from_u64(22);
    const S: u32 = 47;
    const ROOT_OF_UNITY: Self = ROOT_OF_UNITY;
    const ROOT_OF_UNITY_INV: Self =
        Self::from_hex("121f44ada1ad7cf19a268d137647675436ead8da6e23b3ce2542c2b2b9112c51");
    const DELTA: Self =
        Self::from_hex("127792cccf6bd9471c926f0ce998b49c14b23c06b2d540af47d67a5c71d17f54");

    /// Attempts to parse the given byte array as a big-endian scalar.
    ///
    /// Returns None if the byte array does not contain a big-endian integer in
    /// the range `[0, r)`.
    fn from_repr(bytes: ScalarBytes) -> CtOption<Self> {
        Self::from_be_slice(&bytes)
    }

    fn to_repr(&self) -> ScalarBytes {
        self.to_bytes()
    }

    fn is_odd(&self) -> Choice {
        Scalar::is_odd(self)
    }
}

impl From<u64> for Scalar {
    fn from(k: u64) -> Self {
        Self::from_u64(k)
    }
}

impl From<u32> for Scalar {
    fn from(k: u32) -> Self {
        Self::from_u64(k.into())
    }
}

impl Shr<usize> for Scalar {
    type Output = Self;

    fn shr(self, rhs: usize) -> Self::Output {
        self.shr_vartime(rhs)
    }
}

impl ShrAssign<usize> for Scalar {
    fn shr_assign(&mut self, rhs: usize) {
        *self = *self >> rhs;
    }
}

#[cfg(feature = "hash2curve")]
impl elliptic_curve::hash2curve::FromOkm for Scalar {
    type Length = elliptic_curve::consts::U48;

    #[allow(deprecated)] // generic_array 0.14
    fn from_okm(data: &elliptic_curve::generic_array::GenericArray<u8, Self::Length>) -> Self {
        Self::from_wide_be_bytes(data)
    }
}

#[cfg(test)]
mod tests {
    use super::Scalar;
    use elliptic_curve::ff::{Field, PrimeField};
    use hex_literal::hex;
    use num_bigint::BigUint;
    use num_traits::Num;
    use proptest::{prelude::any, prop_compose, proptest};

    fn modulus() -> BigUint {
        BigUint::from_str_radix(&Scalar::MODULUS[2..], 16).unwrap()
    }

    prop_compose! {
        fn scalar()(bytes in any::<[u8; 32]>()) -> Scalar {
            Scalar::from_wide_be_bytes(&bytes)
        }
    }

    #[test]
    fn two_adic_constants() {
        assert_eq!(Scalar::from(2u64) * Scalar::TWO_INV, Scalar::ONE);
        assert_eq!(Scalar::ROOT_OF_UNITY * Scalar::ROOT_OF_UNITY_INV, Scalar::ONE);
        assert_eq!(
            Scalar::ROOT_OF_UNITY.pow_vartime([1u64 << Scalar::S]),
            Scalar::ONE
        );
        assert_eq!(
            Scalar::MULTIPLICATIVE_GENERATOR.pow_vartime([1u64 << Scalar::S]),
            Scalar::DELTA
        );
        assert_eq!(Scalar::MULTIPLICATIVE_GENERATOR, Scalar::from(22u64));
    }

    #[test]
    fn inverse_of_nine() {
        let inv = Scalar::from(9u64).invert().unwrap();
        assert_eq!(
            inv.to_repr(),
            hex!("0a5f38510051b12ffcd5f1f46c1ef000c0095e8d9000000093d0d55555555556")
        );
    }

    #[test]
    fn sqrt_of_nine() {
        let root = Scalar::from(9u64).sqrt().unwrap();
        assert!(root == Scalar::from(3u64) || root == -Scalar::from(3u64));
        assert!(bool::from(Scalar::MULTIPLICATIVE_GENERATOR.sqrt().is_none()));
    }

    #[test]
    fn repr_rejects_modulus() {
        let mut bytes = (-Scalar::ONE).to_repr();
        assert!(bool::from(Scalar::from_repr(bytes).is_some()));
        bytes[31] += 1;
        assert!(bool::from(Scalar::from_repr(bytes).is_none()));
    }

    #[test]
    fn shift_right() {
        let x = Scalar::from(5u64);
        assert_eq!(x >> 2, Scalar::from(1u64));
        assert_eq!((-Scalar::ONE) >> 252, Scalar::from(1u64));
    }

    proptest! {
        #[test]
        fn mul_matches_bigint(a in scalar(), b in scalar()) {
            let to_big = |s: &Scalar| BigUint::from_bytes_be(&s.to_repr());
            let expected = (to_big(&a) * to_big(&b)) % modulus();
            assert_eq!(to_big(&(a * b)), expected);
        }

        #[test]
        fn repr_roundtrip(a in scalar()) {
            assert_eq!(Scalar::from_repr(a.to_repr()).unwrap(), a);
        }

        #[test]
        fn sqrt_ratio(a in scalar(), b in scalar()) {
            let num = a.square() * b;
            let (is_square, root) = Scalar::sqrt_ratio(&num, &b);
            if !bool::from(b.is_zero()) {
                assert!(bool::from(is_square));
                assert_eq!(root.square(), a.square());
            }
        }
    }
}
