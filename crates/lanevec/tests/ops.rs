use lanevec::{FixedVector, REGISTER_SIZE, Result};

#[test]
fn test_add_wraps() {
    let sum = FixedVector::splat(250u8) + FixedVector::splat(10u8);
    assert_eq!(sum, FixedVector::splat(4u8));

    let diff = FixedVector::splat(i16::MIN) - FixedVector::splat(1i16);
    assert_eq!(diff, FixedVector::splat(i16::MAX));
}

#[test]
fn test_lane_wise_arithmetic() -> Result<()> {
    let a = FixedVector::from_lanes(&[1i32, 2, 3, 4])?;
    let b = FixedVector::from_lanes(&[10i32, 20, 30, 40])?;

    assert_eq!((a + b).to_vec(), vec![11, 22, 33, 44]);
    assert_eq!((b - a).to_vec(), vec![9, 18, 27, 36]);
    assert_eq!((a * FixedVector::splat(3)).to_vec(), vec![3, 6, 9, 12]);

    let x = FixedVector::from_lanes(&[1.5f64, -2.0])?;
    assert_eq!((x * x).to_vec(), vec![2.25, 4.0]);
    assert_eq!((x - FixedVector::one()).to_vec(), vec![0.5, -3.0]);
    Ok(())
}

#[test]
fn test_assign_operators() {
    let mut v = FixedVector::splat(5u64);
    v += FixedVector::one();
    assert_eq!(v, FixedVector::splat(6));
    v *= FixedVector::splat(7);
    assert_eq!(v, FixedVector::splat(42));
    v -= FixedVector::splat(2);
    assert_eq!(v, FixedVector::splat(40));

    v &= FixedVector::splat(0b1100);
    assert_eq!(v, FixedVector::splat(8));
    v |= FixedVector::splat(1);
    assert_eq!(v, FixedVector::splat(9));
    v ^= FixedVector::splat(9);
    assert_eq!(v, FixedVector::zero());
}

#[test]
fn test_bitwise_operators() {
    let a = FixedVector::splat(0xF0F0u32);
    let b = FixedVector::splat(0x0FF0u32);

    assert_eq!(a & b, FixedVector::splat(0x00F0));
    assert_eq!(a | b, FixedVector::splat(0xFFF0));
    assert_eq!(a ^ b, FixedVector::splat(0xFF00));
    assert_eq!(!FixedVector::<u32>::zero(), FixedVector::all_bits_set());
}

#[test]
fn test_bitwise_on_float_lanes() {
    let sign_mask = FixedVector::splat(-0.0f32);
    let v = FixedVector::splat(-3.5f32);

    assert_eq!(v & !sign_mask, FixedVector::splat(3.5));
    assert_eq!(v ^ sign_mask, FixedVector::splat(3.5));
    assert_eq!(
        (!FixedVector::<f64>::zero()).as_bytes(),
        &[u8::MAX; REGISTER_SIZE]
    );
}

#[test]
fn test_map_and_zip_lanes() -> Result<()> {
    let v = FixedVector::from_lanes(&[1u16, 2, 3, 4, 5, 6, 7, 8])?;
    assert_eq!(
        v.map_lanes(|x| x * 2).to_vec(),
        vec![2, 4, 6, 8, 10, 12, 14, 16]
    );
    assert_eq!(
        v.zip_lanes(FixedVector::splat(4), u16::max).to_vec(),
        vec![4, 4, 4, 4, 5, 6, 7, 8]
    );
    Ok(())
}
