//! Fixed vectors shared with other implementations.

#![cfg(all(feature = "bls12377", feature = "p256"))]

use curves::{BigUint, Bls12377G1, Bls12377G2, Point, P256};
use hex_literal::hex;
use num_traits::Num;

fn big(hex: &str) -> BigUint {
    BigUint::from_str_radix(hex, 16).unwrap()
}

/// A point from gnark-crypto's BLS12-377 G1 serialization tests.
const G1_UNCOMPRESSED: [u8; 96] = hex!(
    "00d0aeeaaaf1f6005939333c6016af68862d3ac17324dd02b649de0fe742e8100fabd163ed13da00691b207dcd7107ef"
    "01783fbdd4bd7cf57afd33450739f2b7104c1ec52b93046754888b57690f7440f4585bd7766358d97b6d468e5089c47d"
);
const G1_COMPRESSED: [u8; 48] = hex!(
    "a0d0aeeaaaf1f6005939333c6016af68862d3ac17324dd02b649de0fe742e8100fabd163ed13da00691b207dcd7107ef"
);

/// A point from gnark-crypto's BLS12-377 G2 serialization tests.
const G2_UNCOMPRESSED: [u8; 192] = hex!(
    "0188f432ec6072d3767786cd44ce915a3ab513e2811041a1391ee28a5f5ff12e72abc5625c99565dd4339a6163d48e7c"
    "00ec460bc422d9e074e6797b558d8f9bf759651097e31218d376035887c7824c4280a20a3d66feb6edd9384505be4032"
    "000d6994485e03d4512af60af04bd842c4c366b87715af8bee68c3fe164dd05b970c166cfe9e0ce0e315336c81c1931e"
    "0113fc17f29ce061e4583abaedd92f54ddc37fdfc031891ff3cf9cac7c0d918a84f8abcc7755b672f4b01345bb3d44fe"
);
const G2_COMPRESSED: [u8; 96] = hex!(
    "8188f432ec6072d3767786cd44ce915a3ab513e2811041a1391ee28a5f5ff12e72abc5625c99565dd4339a6163d48e7c"
    "00ec460bc422d9e074e6797b558d8f9bf759651097e31218d376035887c7824c4280a20a3d66feb6edd9384505be4032"
);

#[test]
fn bls12377_g1_gnark_encoding() {
    let p = Point::<Bls12377G1>::from_affine_uncompressed(&G1_UNCOMPRESSED).unwrap();
    assert_eq!(p.to_affine_compressed(), G1_COMPRESSED);
    assert_eq!(Point::<Bls12377G1>::from_affine_compressed(&G1_COMPRESSED), Ok(p));
    assert_eq!(p.x(), BigUint::from_bytes_be(&G1_UNCOMPRESSED[..48]));
    assert_eq!(p.y(), BigUint::from_bytes_be(&G1_UNCOMPRESSED[48..]));
}

#[test]
fn bls12377_g2_gnark_encoding() {
    let p = Point::<Bls12377G2>::from_affine_uncompressed(&G2_UNCOMPRESSED).unwrap();
    assert_eq!(p.to_affine_compressed(), G2_COMPRESSED);
    assert_eq!(Point::<Bls12377G2>::from_affine_compressed(&G2_COMPRESSED), Ok(p));
    assert_eq!(p.to_affine_uncompressed(), G2_UNCOMPRESSED);
}

#[test]
fn bls12377_g1_hash() {
    let p = Point::<Bls12377G1>::hash(&[0u8; 32]).unwrap();
    assert_eq!(
        p.to_affine_uncompressed(),
        hex!(
            "012522ea72cf948e2ff8450754596f9684f903c6bfb716a8c5c428656f45db4b2e7b9dc60b37f127371e837bb5ef082a"
            "01a0c2698b16a614dc7a99773d990d68500d0f2ed766564e5ea604e881b9beb422ba5b16c5624720ba2a75638b878afd"
        )
    );
}

#[test]
fn bls12377_g2_hash() {
    let p = Point::<Bls12377G2>::hash(&[0u8; 32]).unwrap();
    assert_eq!(
        p.to_affine_uncompressed(),
        hex!(
            "00010959b03fe0b932924ca586e6c1642323d162e4cd45045ee900f1519e1d3f5710ea6a4dfc5b283af3ac782836cf03"
            "001d454a444d939be354daaa36bc14584fc9b87a4bed2645ca4354e657b0ec95fc43d081cfe851b0341bc4561e7275d4"
            "019fc73e80b93a8e7dde723406cdc29c7085aa16d9cc12d1c941f66960c645a6c8dc0bed860c8ddfb389e34f634dad0c"
            "0128ba41e0e177b8b526b272565eb30f68455e94d34779d390ea97ef35fa8c3a81db774db0d9aae9837c39813d978a2d"
        )
    );
}

/// Hash outputs for 32 zero bytes published alongside the Go BLS12-377
/// bindings. Their map constants differ from this crate's, so only the
/// coordinates are checked here.
const G1_HASH_X: &str = "42c5fae5c40ad7c0d0e5908ba04ec0bddcf0ec0ef9d7b22cd225f17ddeb6a4ba681fba08b84a29a6674a69309e85a7";
const G1_HASH_Y: &str = "1518be16767ad4a9e6d1258c62a47f099230933c5a8afa2ba078e78fa406a82467cafb515cd03e3922fff8c73ad63c3";
const G2_HASH_X: &str = "50a89336be1545eec26987f9572e1769c1a4499f545abd3111bd162b64dc43fc7227dfb840242f0caced6a562895d000422b081e5f831056317db371fdaf86380153a2e6b1cbf839962bd380474570cd2df1f0dd4dc0e925268848827e5143";
const G2_HASH_Y: &str = "158e9ebafe8b179e2fc04e8efcf77bcc902ab9e60b6bdcd3f725a199dc8cdb8c91f9018d9bfe93d55a0631180d37f1700d510faac5a49ebdebe781636904ac7949c094ec9530d849a47e96e3cf7d0bb74167b32a90caac2dbeacff015103367";

#[test]
fn bls12377_foreign_hash_outputs_are_subgroup_points() {
    let p = Point::<Bls12377G1>::set(&big(G1_HASH_X), &big(G1_HASH_Y)).unwrap();
    assert!(p.is_on_curve());
    assert_eq!(p.x(), big(G1_HASH_X));
    assert_eq!(p.y(), big(G1_HASH_Y));
    let bytes = p.to_affine_uncompressed();
    assert_eq!(Point::<Bls12377G1>::from_affine_uncompressed(&bytes), Ok(p));

    // G2 coordinates are `c1 || c0`, 96 bytes each.
    let q = Point::<Bls12377G2>::set(&big(G2_HASH_X), &big(G2_HASH_Y)).unwrap();
    assert!(q.is_on_curve());
    assert_eq!(q.x(), big(G2_HASH_X));
    assert_eq!(q.y(), big(G2_HASH_Y));
    let bytes = q.to_affine_compressed();
    assert_eq!(Point::<Bls12377G2>::from_affine_compressed(&bytes), Ok(q));

    // Off by one in `y` must not decode.
    let y = big(G1_HASH_Y) + 1u32;
    assert!(Point::<Bls12377G1>::set(&big(G1_HASH_X), &y).is_err());
}

/// RFC 9380 appendix J.1.1, suite P256_XMD:SHA-256_SSWU_RO_.
#[test]
fn p256_rfc9380_hash_to_curve() {
    const DST: &[u8] = b"QUUX-V01-CS02-with-P256_XMD:SHA-256_SSWU_RO_";

    struct TestVector {
        msg: &'static [u8],
        x: &'static str,
        y: &'static str,
    }

    const VECTORS: &[TestVector] = &[
        TestVector {
            msg: b"",
            x: "2c15230b26dbc6fc9a37051158c95b79656e17a1a920b11394ca91c44247d3e4",
            y: "8a7a74985cc5c776cdfe4b1f19884970453912e9d31528c060be9ab5c43e8415",
        },
        TestVector {
            msg: b"abc",
            x: "0bb8b87485551aa43ed54f009230450b492fead5f1cc91658775dac4a3388a0f",
            y: "5c41b3d0731a27a7b14bc0bf0ccded2d8751f83493404c84a88e71ffd424212e",
        },
        TestVector {
            msg: b"abcdef0123456789",
            x: "65038ac8f2b1def042a5df0b33b1f4eca6bff7cb0f9c6c1526811864e544ed80",
            y: "cad44d40a656e7aff4002a8de287abc8ae0482b5ae825822bb870d6df9b56ca3",
        },
    ];

    for vector in VECTORS {
        let p = Point::<P256>::hash_with_dst(vector.msg, DST).unwrap();
        assert_eq!(p.x(), big(vector.x));
        assert_eq!(p.y(), big(vector.y));
        assert_eq!(Point::<P256>::set(&p.x(), &p.y()), Ok(p));
    }
}
