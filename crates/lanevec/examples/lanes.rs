use std::env;

use lanevec::{DynVector, FixedVector, LaneKind, Locale, Result};

fn main() -> Result<()> {
    let locale = Locale::current();
    let format = env::args().nth(1);
    let format = format.as_deref();

    for kind in LaneKind::ALL {
        let layout = kind.layout();
        println!(
            "{:>4}: {:>2} lanes x {} bytes  one={}  all_bits_set={}",
            kind,
            layout.lane_count(),
            layout.element_size(),
            DynVector::one(kind).to_string_with(None, &locale)?,
            DynVector::all_bits_set(kind).to_string_with(None, &locale)?,
        );
    }

    let v = FixedVector::from_lanes(&[1.25f32, -2.5, 1e6, f32::NAN])?;
    println!("{}", v.to_string_with(format, &locale)?);
    println!("hash: {:#010x}", v.hash_code());

    let ramp = FixedVector::from_lanes(&(0..16).collect::<Vec<u8>>())?;
    println!("{}", (ramp * FixedVector::splat(17)).to_string_with(Some("X2"), &locale)?);

    Ok(())
}
