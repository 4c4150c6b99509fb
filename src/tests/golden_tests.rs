use crate::*;

const B24: [u64; 16] = [
    0x9AF, 0x9EB, 0xA6F, 0xA7B, 0xB3D, 0xB4F, 0xBCD, 0xBD3, 0xCBD, 0xD2F, 0xD79, 0xDE5, 0xF2D,
    0xF4B, 0xF59, 0xF65,
];

#[test]
fn test_order_one_is_single_bit() {
    assert_eq!(collect(1).unwrap(), vec![0b1]);
}

#[test]
fn test_order_two() {
    assert_eq!(collect(2).unwrap(), vec![0b0011]);
}

#[test]
fn test_order_three() {
    assert_eq!(collect(3).unwrap(), vec![0b0001_0111, 0b0001_1101]);
}

#[test]
fn test_order_four_first() {
    assert_eq!(first(4).unwrap(), Some(0x9AF));
}

#[test]
fn test_order_four_all() {
    assert_eq!(collect(4).unwrap(), B24.to_vec());
}

#[test]
fn test_order_five_ends() {
    let all = collect(5).unwrap();
    assert_eq!(all.first(), Some(&0x0465_3ADF));
    assert_eq!(all.last(), Some(&0x07DC_D629));
}

#[test]
fn test_order_six_first() {
    assert_eq!(first(6).unwrap(), Some(0x0218_A392_CD3D_5DBF));
}
