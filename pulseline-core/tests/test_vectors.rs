//! Known-answer test vectors for every coding, scrambling and modulation
//! scheme, including the textbook examples and hand-derived substitution
//! patterns.

use pulseline_core::{
    encoder::{encode, LineCode},
    modulator::{delta_mod_encode, pcm_encode},
    scrambler::{scramble, ZeroSubstitution},
    types::{parse_symbols, symbols_to_string},
};

fn encoded_i8(code: LineCode, bits: &str) -> Vec<i8> {
    let symbols = parse_symbols(bits).unwrap();
    encode(code, &symbols).unwrap().to_i8()
}

fn scrambled_i8(code: ZeroSubstitution, bits: &str) -> Vec<i8> {
    let symbols = parse_symbols(bits).unwrap();
    let mut train = encode(LineCode::Ami, &symbols).unwrap();
    scramble(code, &symbols, &mut train).unwrap();
    train.to_i8()
}

#[test]
fn nrz_l_vectors() {
    assert_eq!(encoded_i8(LineCode::NrzL, "1101"), vec![1, 1, -1, 1]);
    assert_eq!(encoded_i8(LineCode::NrzL, "0"), vec![-1]);
    assert_eq!(encoded_i8(LineCode::NrzL, "1"), vec![1]);
}

#[test]
fn nrz_i_vectors() {
    assert_eq!(encoded_i8(LineCode::NrzI, "1101"), vec![1, -1, -1, 1]);
    assert_eq!(encoded_i8(LineCode::NrzI, "0000"), vec![-1, -1, -1, -1]);
    assert_eq!(encoded_i8(LineCode::NrzI, "1111"), vec![1, -1, 1, -1]);
}

#[test]
fn manchester_vectors() {
    assert_eq!(encoded_i8(LineCode::Manchester, "0"), vec![1, -1]);
    assert_eq!(encoded_i8(LineCode::Manchester, "1"), vec![-1, 1]);
    assert_eq!(
        encoded_i8(LineCode::Manchester, "1101"),
        vec![-1, 1, -1, 1, 1, -1, -1, 1]
    );
}

#[test]
fn diff_manchester_vectors() {
    assert_eq!(encoded_i8(LineCode::DiffManchester, "0"), vec![1, -1]);
    assert_eq!(encoded_i8(LineCode::DiffManchester, "1"), vec![-1, 1]);
    assert_eq!(
        encoded_i8(LineCode::DiffManchester, "101"),
        vec![-1, 1, -1, 1, 1, -1]
    );
}

#[test]
fn ami_vectors() {
    assert_eq!(encoded_i8(LineCode::Ami, "1101"), vec![1, -1, 0, -1]);
    assert_eq!(encoded_i8(LineCode::Ami, "10101"), vec![1, 0, -1, 0, 1]);
}

#[test]
fn b8zs_vectors() {
    // Preceding mark +1: the run becomes 000+-0-+.
    assert_eq!(
        scrambled_i8(ZeroSubstitution::B8zs, "1000000001"),
        vec![1, 0, 0, 0, 1, -1, 0, -1, 1, -1]
    );
    // No preceding mark: flag still at its initial sense, run 000-+0+-.
    assert_eq!(
        scrambled_i8(ZeroSubstitution::B8zs, "00000000"),
        vec![0, 0, 0, -1, 1, 0, 1, -1]
    );
    // Sixteen zeros trigger two substitutions with the same flag sense.
    assert_eq!(
        scrambled_i8(ZeroSubstitution::B8zs, "0000000000000000"),
        vec![0, 0, 0, -1, 1, 0, 1, -1, 0, 0, 0, -1, 1, 0, 1, -1]
    );
    // Seven zeros: below the threshold, plain AMI survives.
    assert_eq!(
        scrambled_i8(ZeroSubstitution::B8zs, "100000001"),
        vec![1, 0, 0, 0, 0, 0, 0, 0, -1]
    );
}

#[test]
fn hdb3_vectors() {
    // One mark before each run (odd parity): 000V with V matching the mark.
    assert_eq!(
        scrambled_i8(ZeroSubstitution::Hdb3, "10000100001"),
        vec![1, 0, 0, 0, 1, -1, 0, 0, 0, -1, 1]
    );
    // Two marks before the run (even parity): B00V.
    assert_eq!(
        scrambled_i8(ZeroSubstitution::Hdb3, "1100001"),
        vec![1, -1, 1, 0, 0, 1, -1]
    );
    // Leading run with no marks at all: even parity from the start.
    assert_eq!(
        scrambled_i8(ZeroSubstitution::Hdb3, "0000"),
        vec![1, 0, 0, 1]
    );
    // Three zeros never qualify.
    assert_eq!(
        scrambled_i8(ZeroSubstitution::Hdb3, "10001"),
        vec![1, 0, 0, 0, -1]
    );
}

#[test]
fn pcm_vectors() {
    let symbols = pcm_encode(&[0.0, 1.0, 2.0, 3.0], 2).unwrap();
    assert_eq!(symbols_to_string(&symbols), "00011011");

    // Negative range, 3 bits: step = 4.0 / 8 = 0.5.
    let symbols = pcm_encode(&[-2.0, -1.0, 0.0, 2.0], 3).unwrap();
    assert_eq!(symbols_to_string(&symbols), "000010100111");
}

#[test]
fn delta_mod_vectors() {
    assert_eq!(symbols_to_string(&delta_mod_encode(&[1.0, 2.0, 3.0])), "111");
    assert_eq!(
        symbols_to_string(&delta_mod_encode(&[-1.0, -2.0, -3.0])),
        "000"
    );
    assert_eq!(
        symbols_to_string(&delta_mod_encode(&[1.0, 1.0, 1.0, 1.0])),
        "1101"
    );
}
