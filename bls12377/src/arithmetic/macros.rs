//! Macros for defining prime field element types on top of
//! [`crypto_bigint`]'s constant-modulus Montgomery residues.
//!
//! [`crypto_bigint`]: elliptic_curve::bigint

/// Implements a prime field element type wrapping a
/// `Residue<$params, LIMBS>`.
///
/// The type must be a tuple struct around the residue type.
///
/// # Inherent impls
/// - `const ZERO: Self`, `const ONE: Self`, `const BYTES: usize`
/// - `const fn from_uint`, `const fn from_hex`, `const fn from_u64`
/// - `fn from_wide_be_bytes`, `fn from_be_slice`, `fn write_be_bytes`
/// - `fn add`, `fn sub`, `fn neg`, `fn double`, `fn multiply`, `fn square`
/// - `fn pow_uint`, `fn invert`, `fn sqrt`, `fn is_square`
/// - `fn is_zero`, `fn is_odd`, `fn lexicographically_largest`
///
/// # Trait impls
/// - `ConditionallySelectable`, `ConstantTimeEq`, `PartialEq`, `Eq`
/// - `Default`, `Debug`, `DefaultIsZeroes`
/// - `Field`
/// - `Add`, `Sub`, `Mul`, `Neg` plus the `*Assign`, by-reference, `Sum`
///   and `Product` variants
macro_rules! impl_field_element {
    (
        $fe:ident,
        $uint:ident,
        $params:ident,
        bytes: $bytes:expr,
        frac_modulus_2: $frac_modulus_2:expr,
        t_minus_1_div_2: $t_minus_1_div_2:expr,
        s: $s:expr,
        root_of_unity: $root_of_unity:expr
    ) => {
        impl $fe {
            /// Zero element.
            pub const ZERO: Self = Self(Residue::ZERO);

            /// Multiplicative identity.
            pub const ONE: Self = Self(Residue::ONE);

            /// Size of the canonical big-endian encoding in bytes.
            pub const BYTES: usize = $bytes;

            /// Converts an integer into a field element, reducing it modulo
            /// the field modulus.
            pub const fn from_uint(n: &$uint) -> Self {
                Self(Residue::new(n))
            }

            /// Parses a big-endian hexadecimal constant of exactly
            #[doc = stringify!($bytes)]
            /// bytes.
            pub(crate) const fn from_hex(hex: &str) -> Self {
                Self::from_uint(&$uint::from_be_hex(hex))
            }

            /// Converts a `u64` into a field element.
            pub const fn from_u64(w: u64) -> Self {
                Self::from_uint(&$uint::from_u64(w))
            }

            /// Reduces a big-endian integer of at most twice
            #[doc = stringify!($bytes)]
            /// bytes.
            pub fn from_wide_be_bytes(bytes: &[u8]) -> Self {
                debug_assert!(bytes.len() <= 2 * $bytes);
                let (hi, lo) = bytes.split_at(bytes.len().saturating_sub($bytes));

                // `R` is `2^(8 * BYTES) mod modulus` as a plain integer.
                let shift = Self::from_uint(&$params::R);
                Self::from_uint(&Self::padded_uint(hi))
                    .multiply(&shift)
                    .add(&Self::from_uint(&Self::padded_uint(lo)))
            }

            /// Left-pads a big-endian integer of at most `BYTES` bytes.
            fn padded_uint(bytes: &[u8]) -> $uint {
                let mut buf = [0u8; $bytes];
                buf[$bytes - bytes.len()..].copy_from_slice(bytes);
                $uint::from_be_slice(&buf)
            }

            /// Decodes a canonical big-endian encoding of exactly
            #[doc = stringify!($bytes)]
            /// bytes.
            ///
            /// Returns `None` on a length mismatch or a value `>= modulus`.
            pub fn from_be_slice(bytes: &[u8]) -> CtOption<Self> {
                if bytes.len() != Self::BYTES {
                    return CtOption::new(Self::ZERO, Choice::from(0));
                }

                let n = $uint::from_be_slice(bytes);
                let in_range = ConstantTimeLess::ct_lt(&n, &$params::MODULUS);
                CtOption::new(Self::from_uint(&n), in_range)
            }

            /// Writes the canonical big-endian encoding into `out`, which
            /// must be
            #[doc = stringify!($bytes)]
            /// bytes long.
            pub fn write_be_bytes(&self, out: &mut [u8]) {
                out.copy_from_slice(&self.0.retrieve().to_be_bytes());
            }

            /// Returns `self + rhs`.
            pub const fn add(&self, rhs: &Self) -> Self {
                Self(Residue::add(&self.0, &rhs.0))
            }

            /// Returns `self - rhs`.
            pub const fn sub(&self, rhs: &Self) -> Self {
                Self(Residue::sub(&self.0, &rhs.0))
            }

            /// Returns `-self`.
            pub const fn neg(&self) -> Self {
                Self(Residue::neg(&self.0))
            }

            /// Returns `2 * self`.
            pub const fn double(&self) -> Self {
                Self(Residue::add(&self.0, &self.0))
            }

            /// Returns `self * rhs`.
            pub const fn multiply(&self, rhs: &Self) -> Self {
                Self(Residue::mul(&self.0, &rhs.0))
            }

            /// Returns `self * self`.
            pub const fn square(&self) -> Self {
                Self(Residue::square(&self.0))
            }

            /// Exponentiates `self` by the integer `exp`.
            pub const fn pow_uint(&self, exp: &$uint) -> Self {
                Self(Residue::pow(&self.0, exp))
            }

            /// Returns the multiplicative inverse of self, if self is non-zero.
            pub fn invert(&self) -> CtOption<Self> {
                let (inv, is_some) = Residue::invert(&self.0);
                CtOption::new(Self(inv), is_some.into())
            }

            /// Returns a square root of self, if one exists.
            ///
            /// Constant-time Tonelli-Shanks for `modulus - 1 = 2^S * T`, T odd.
            /// <https://eprint.iacr.org/2012/685.pdf> (page 12, algorithm 5)
            #[allow(clippy::many_single_char_names)]
            pub fn sqrt(&self) -> CtOption<Self> {
                let w = self.pow_uint(&$t_minus_1_div_2);

                let mut v = $s;
                let mut x = *self * w;
                let mut b = x * w;
                let mut z = $root_of_unity;

                for max_v in (1..=$s).rev() {
                    let mut k = 1;
                    let mut tmp = b.square();
                    let mut j_less_than_v = Choice::from(1);

                    for j in 2..max_v {
                        let tmp_is_one = tmp.ct_eq(&Self::ONE);
                        let squared = Self::conditional_select(&tmp, &z, tmp_is_one).square();
                        tmp = Self::conditional_select(&squared, &tmp, tmp_is_one);
                        let new_z = Self::conditional_select(&z, &squared, tmp_is_one);
                        j_less_than_v &= !j.ct_eq(&v);
                        k = u32::conditional_select(&j, &k, tmp_is_one);
                        z = Self::conditional_select(&z, &new_z, j_less_than_v);
                    }

                    let result = x * z;
                    x = Self::conditional_select(&result, &x, b.ct_eq(&Self::ONE));
                    z = z.square();
                    b *= z;
                    v = k;
                }

                CtOption::new(x, x.square().ct_eq(self))
            }

            /// Euler's criterion: is self a square (zero included)?
            pub fn is_square(&self) -> Choice {
                let legendre = self.pow_uint(&$frac_modulus_2);
                legendre.ct_eq(&Self::ONE) | self.is_zero()
            }

            /// Is this element zero?
            pub fn is_zero(&self) -> Choice {
                self.ct_eq(&Self::ZERO)
            }

            /// Is the canonical representative odd?
            pub fn is_odd(&self) -> Choice {
                Choice::from((self.0.retrieve().as_words()[0] & 1) as u8)
            }

            /// Is the canonical representative even?
            pub fn is_even(&self) -> Choice {
                !self.is_odd()
            }

            /// Returns true iff the canonical representative is greater than
            /// `(modulus - 1) / 2`, i.e. `self > -self` as integers.
            pub fn lexicographically_largest(&self) -> Choice {
                ConstantTimeGreater::ct_gt(&self.0.retrieve(), &$frac_modulus_2)
            }
        }

        impl ConditionallySelectable for $fe {
            fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
                Self(Residue::conditional_select(&a.0, &b.0, choice))
            }
        }

        impl ConstantTimeEq for $fe {
            fn ct_eq(&self, other: &Self) -> Choice {
                self.0.ct_eq(&other.0)
            }
        }

        impl PartialEq for $fe {
            fn eq(&self, other: &Self) -> bool {
                self.ct_eq(other).into()
            }
        }

        impl Eq for $fe {}

        impl Default for $fe {
            fn default() -> Self {
                Self::ZERO
            }
        }

        impl DefaultIsZeroes for $fe {}

        impl core::fmt::Debug for $fe {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}(0x{:x})", stringify!($fe), self.0.retrieve())
            }
        }

        impl Field for $fe {
            const ZERO: Self = Self::ZERO;
            const ONE: Self = Self::ONE;

            fn random(mut rng: impl RngCore) -> Self {
                let mut bytes = [0u8; 2 * $bytes];
                rng.fill_bytes(&mut bytes);
                Self::from_wide_be_bytes(&bytes)
            }

            fn square(&self) -> Self {
                $fe::square(self)
            }

            fn double(&self) -> Self {
                $fe::double(self)
            }

            fn invert(&self) -> CtOption<Self> {
                $fe::invert(self)
            }

            fn sqrt(&self) -> CtOption<Self> {
                $fe::sqrt(self)
            }

            fn sqrt_ratio(num: &Self, div: &Self) -> (Choice, Self) {
                let a = div.invert().unwrap_or(Self::ZERO) * num;
                let sqrt = a.sqrt();
                (sqrt.is_some(), sqrt.unwrap_or(Self::ZERO))
            }
        }

        impl_field_ops!($fe);
    };
}

/// Implements the arithmetic operator traits in terms of the inherent
/// `add`, `sub`, `multiply` and `neg` methods.
macro_rules! impl_field_ops {
    ($fe:ident) => {
        impl core::ops::Add<$fe> for $fe {
            type Output = $fe;

            #[inline]
            fn add(self, rhs: $fe) -> $fe {
                $fe::add(&self, &rhs)
            }
        }

        impl core::ops::Add<&$fe> for $fe {
            type Output = $fe;

            #[inline]
            fn add(self, rhs: &$fe) -> $fe {
                $fe::add(&self, rhs)
            }
        }

        impl core::ops::Add<&$fe> for &$fe {
            type Output = $fe;

            #[inline]
            fn add(self, rhs: &$fe) -> $fe {
                $fe::add(self, rhs)
            }
        }

        impl core::ops::AddAssign<$fe> for $fe {
            #[inline]
            fn add_assign(&mut self, other: $fe) {
                *self = *self + other;
            }
        }

        impl core::ops::AddAssign<&$fe> for $fe {
            #[inline]
            fn add_assign(&mut self, other: &$fe) {
                *self = *self + other;
            }
        }

        impl core::ops::Sub<$fe> for $fe {
            type Output = $fe;

            #[inline]
            fn sub(self, rhs: $fe) -> $fe {
                $fe::sub(&self, &rhs)
            }
        }

        impl core::ops::Sub<&$fe> for $fe {
            type Output = $fe;

            #[inline]
            fn sub(self, rhs: &$fe) -> $fe {
                $fe::sub(&self, rhs)
            }
        }

        impl core::ops::Sub<&$fe> for &$fe {
            type Output = $fe;

            #[inline]
            fn sub(self, rhs: &$fe) -> $fe {
                $fe::sub(self, rhs)
            }
        }

        impl core::ops::SubAssign<$fe> for $fe {
            #[inline]
            fn sub_assign(&mut self, other: $fe) {
                *self = *self - other;
            }
        }

        impl core::ops::SubAssign<&$fe> for $fe {
            #[inline]
            fn sub_assign(&mut self, other: &$fe) {
                *self = *self - other;
            }
        }

        impl core::ops::Mul<$fe> for $fe {
            type Output = $fe;

            #[inline]
            fn mul(self, rhs: $fe) -> $fe {
                $fe::multiply(&self, &rhs)
            }
        }

        impl core::ops::Mul<&$fe> for $fe {
            type Output = $fe;

            #[inline]
            fn mul(self, rhs: &$fe) -> $fe {
                $fe::multiply(&self, rhs)
            }
        }

        impl core::ops::Mul<&$fe> for &$fe {
            type Output = $fe;

            #[inline]
            fn mul(self, rhs: &$fe) -> $fe {
                $fe::multiply(self, rhs)
            }
        }

        impl core::ops::MulAssign<$fe> for $fe {
            #[inline]
            fn mul_assign(&mut self, other: $fe) {
                *self = *self * other;
            }
        }

        impl core::ops::MulAssign<&$fe> for $fe {
            #[inline]
            fn mul_assign(&mut self, other: &$fe) {
                *self = *self * other;
            }
        }

        impl core::ops::Neg for $fe {
            type Output = $fe;

            #[inline]
            fn neg(self) -> $fe {
                $fe::neg(&self)
            }
        }

        impl core::ops::Neg for &$fe {
            type Output = $fe;

            #[inline]
            fn neg(self) -> $fe {
                $fe::neg(self)
            }
        }

        impl core::iter::Sum for $fe {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.reduce(core::ops::Add::add).unwrap_or(Self::ZERO)
            }
        }

        impl<'a> core::iter::Sum<&'a $fe> for $fe {
            fn sum<I: Iterator<Item = &'a $fe>>(iter: I) -> Self {
                iter.copied().sum()
            }
        }

        impl core::iter::Product for $fe {
            fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.reduce(core::ops::Mul::mul).unwrap_or(Self::ONE)
            }
        }

        impl<'a> core::iter::Product<&'a $fe> for $fe {
            fn product<I: Iterator<Item = &'a $fe>>(iter: I) -> Self {
                iter.copied().product()
            }
        }
    };
}
