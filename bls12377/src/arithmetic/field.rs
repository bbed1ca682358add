//! Base field arithmetic modulo
//! p = 0x01ae3a4617c510eac63b05c06ca1493b1a22d9f300f5138f1ef3622fba094800170b5d44300000008508c00000000001

use elliptic_curve::{
    bigint::{
        Encoding, U384, impl_modulus,
        modular::constant_mod::{Residue, ResidueParams},
    },
    ff::Field,
    rand_core::RngCore,
    subtle::{
        Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeGreater, ConstantTimeLess,
        CtOption,
    },
    zeroize::DefaultIsZeroes,
};

impl_modulus!(
    FpModulus,
    U384,
    "01ae3a4617c510eac63b05c06ca1493b1a22d9f300f5138f1ef3622fba094800170b5d44300000008508c00000000001"
);

/// (p - 1) / 2
const FRAC_MODULUS_2: U384 = U384::from_be_hex(
    "00d71d230be28875631d82e03650a49d8d116cf9807a89c78f79b117dd04a4000b85aea2180000004284600000000000",
);

/// (T - 1) / 2 where p - 1 = 2^46 * T
const T_MINUS_1_DIV_2: U384 = U384::from_be_hex(
    "000000000000035c748c2f8a21d58c760b80d94292763445b3e601ea271e3de6c45f741290002e16ba88600000010a11",
);

/// 5^T mod p, a primitive 2^46-th root of unity.
const ROOT_OF_UNITY: Fp = Fp::from_hex(
    "00382d3d99cdbc5d8fe9dee6aa914b0ad14fcaca7022110ec6eaa2bc56228ac41ea03d28cc795186ba6b5ef26b00bbe8",
);

/// An element of the BLS12-377 base field.
///
/// Backed by a Montgomery-form [`Residue`]; every value is fully reduced.
#[derive(Clone, Copy)]
pub struct Fp(pub(crate) Residue<FpModulus, { FpModulus::LIMBS }>);

impl_field_element!(
    Fp,
    U384,
    FpModulus,
    bytes: 48,
    frac_modulus_2: FRAC_MODULUS_2,
    t_minus_1_div_2: T_MINUS_1_DIV_2,
    s: 46,
    root_of_unity: ROOT_OF_UNITY
);

impl Fp {
    /// Sign of the element as defined by RFC 9380 section 4.1.
    pub fn sgn0(&self) -> Choice {
        self.is_odd()
    }
}

#[cfg(feature = "hash2curve")]
impl elliptic_curve::hash2curve::FromOkm for Fp {
    // 384-bit modulus plus 128 bits of security, rounded up.
    type Length = elliptic_curve::consts::U64;

    #[allow(deprecated)] // generic_array 0.14
    fn from_okm(data: &elliptic_curve::generic_array::GenericArray<u8, Self::Length>) -> Self {
        Self::from_wide_be_bytes(data)
    }
}
