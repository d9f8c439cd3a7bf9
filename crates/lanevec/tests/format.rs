use lanevec::{
    Error, FixedVector, FormatKind, FormatSpec, LaneKind, Locale, Result, Scalar, format_scalar,
};

fn render<T: lanevec::Lane>(lanes: &[T], format: Option<&str>) -> Result<String> {
    FixedVector::from_lanes(lanes)?.to_string_with(format, &Locale::invariant())
}

#[test]
fn test_two_lane_i64() -> Result<()> {
    assert_eq!(render(&[3i64, 5], None)?, "<3, 5>");
    Ok(())
}

#[test]
fn test_general_format() -> Result<()> {
    assert_eq!(render(&[-1i32, 0, 1, i32::MAX], None)?, "<-1, 0, 1, 2147483647>");
    assert_eq!(render(&[1.0f32; 4], Some("G"))?, "<1, 1, 1, 1>");
    assert_eq!(render(&[1.5f64, -2.25], None)?, "<1.5, -2.25>");
    assert_eq!(render(&[3.14159f64, 2.0], Some("G3"))?, "<3.14, 2>");
    assert_eq!(render(&[u64::MAX, 0], Some(""))?, "<18446744073709551615, 0>");
    Ok(())
}

#[test]
fn test_special_floats() -> Result<()> {
    assert_eq!(render(&[f64::NAN, f64::INFINITY], None)?, "<NaN, Infinity>");
    assert_eq!(render(&[f64::NEG_INFINITY, -0.0], None)?, "<-Infinity, -0>");
    assert_eq!(render(&[-0.0f32, 1.0, 0.0, -0.0], Some("F1"))?, "<-0.0, 1.0, 0.0, -0.0>");

    let locale = Locale::invariant()
        .with_nan_symbol("nan")
        .with_infinity_symbol("inf");
    let vec = FixedVector::from_lanes(&[f32::NAN, f32::INFINITY, f32::NEG_INFINITY, 1.0])?;
    assert_eq!(vec.to_string_with(None, &locale)?, "<nan, inf, -inf, 1>");
    Ok(())
}

#[test]
fn test_decimal_format() -> Result<()> {
    assert_eq!(
        render(&[42u16, 7, 0, 65535, 1, 2, 3, 4], Some("D5"))?,
        "<00042, 00007, 00000, 65535, 00001, 00002, 00003, 00004>"
    );
    assert_eq!(render(&[-7i32, 7, 100, 1000], Some("d3"))?, "<-007, 007, 100, 1000>");
    Ok(())
}

#[test]
fn test_hex_format() -> Result<()> {
    assert_eq!(
        render(&[255u32; 4], Some("X4"))?,
        "<00FF, 00FF, 00FF, 00FF>"
    );
    assert_eq!(
        render(&[-2i16; 8], Some("x"))?,
        "<fffe, fffe, fffe, fffe, fffe, fffe, fffe, fffe>"
    );
    assert_eq!(render(&[-1i64, 16], Some("X"))?, "<FFFFFFFFFFFFFFFF, 10>");

    let bytes = render(&[-1i8; 16], Some("X2"))?;
    assert_eq!(bytes, format!("<{}>", vec!["FF"; 16].join(", ")));
    Ok(())
}

#[test]
fn test_fixed_and_number_formats() -> Result<()> {
    assert_eq!(
        render(&[1i32, -2, 30, 400], Some("F"))?,
        "<1.00, -2.00, 30.00, 400.00>"
    );
    assert_eq!(render(&[1.5f64, -0.25], Some("F3"))?, "<1.500, -0.250>");
    assert_eq!(render(&[2.75f64, 7.0], Some("F0"))?, "<3, 7>");
    assert_eq!(render(&[1_234_567i64, -1000], Some("N0"))?, "<1,234,567, -1,000>");
    assert_eq!(render(&[1234.5f64, 0.5], Some("N2"))?, "<1,234.50, 0.50>");
    assert_eq!(render(&[123u64, 0], Some("N"))?, "<123.00, 0.00>");
    Ok(())
}

#[test]
fn test_exponential_format() -> Result<()> {
    assert_eq!(render(&[1234.5678f64, 0.25], Some("E"))?, "<1.234568E+003, 2.500000E-001>");
    assert_eq!(render(&[1234.5678f64, -0.25], Some("e2"))?, "<1.23e+003, -2.50e-001>");
    assert_eq!(render(&[1500u32, 0, 1, 10], Some("E1"))?, "<1.5E+003, 0.0E+000, 1.0E+000, 1.0E+001>");
    Ok(())
}

#[test]
fn test_exponential_format_keeps_every_integer_digit() -> Result<()> {
    assert_eq!(
        render(&[u64::MAX, 9_007_199_254_740_993], Some("E19"))?,
        "<1.8446744073709551615E+019, 9.0071992547409930000E+015>"
    );
    assert_eq!(
        render(&[i64::MIN, i64::MAX], Some("e18"))?,
        "<-9.223372036854775808e+018, 9.223372036854775807e+018>"
    );
    assert_eq!(render(&[u64::MAX, 7], Some("E0"))?, "<2E+019, 7E+000>");
    Ok(())
}

#[test]
fn test_exponential_format_rounds_integers_half_away_from_zero() -> Result<()> {
    assert_eq!(
        render(&[999_999u32, 1_250, 1_249, 5], Some("E2"))?,
        "<1.00E+006, 1.25E+003, 1.25E+003, 5.00E+000>"
    );
    assert_eq!(render(&[-1_250i64, 1_250], Some("E1"))?, "<-1.3E+003, 1.3E+003>");
    Ok(())
}

#[test]
fn test_locale_separators() -> Result<()> {
    let german = Locale::from_tag("de_DE.UTF-8").ok_or(Error::InvalidFormatSpec("de".into()))?;
    assert_eq!(german.group_separator(), ".");
    assert_eq!(german.decimal_separator(), ",");

    let vec = FixedVector::from_lanes(&[1.5f64, -2.25])?;
    assert_eq!(vec.to_string_with(None, &german)?, "<1,5. -2,25>");

    let big = FixedVector::from_lanes(&[1_234_567.891f64, 0.0])?;
    assert_eq!(big.to_string_with(Some("N2"), &german)?, "<1.234.567,89. 0,00>");

    let custom: Locale = (";", ".").into();
    assert_eq!(FixedVector::from_lanes(&[3i64, 5])?.to_string_with(None, &custom)?, "<3; 5>");

    let minus = Locale::invariant().with_negative_sign("\u{2212}");
    assert_eq!(FixedVector::splat(-1i64).to_string_with(None, &minus)?, "<\u{2212}1, \u{2212}1>");
    assert_eq!(minus.negative_infinity(), "\u{2212}Infinity");
    Ok(())
}

#[test]
fn test_locale_tags() {
    assert_eq!(Locale::from_tag("C"), Some(Locale::invariant()));
    assert_eq!(Locale::from_tag("en-US"), Some(Locale::invariant()));
    assert_eq!(
        Locale::from_tag("fr_FR").map(|l| l.group_separator().to_string()),
        Some("\u{a0}".to_string())
    );
    assert_eq!(Locale::from_tag("tlh"), None);
    assert_eq!(Locale::default(), Locale::invariant());
}

#[test]
fn test_display_uses_current_locale() {
    Locale::set_current(Locale::invariant());
    assert_eq!(Locale::current(), Locale::invariant());
    assert_eq!(FixedVector::splat(7u32).to_string(), "<7, 7, 7, 7>");
    assert_eq!(FixedVector::from_lanes(&[3i64, 5]).unwrap().to_string(), "<3, 5>");
}

#[test]
fn test_integer_only_formats_reject_floats() {
    assert_eq!(
        render(&[1.0f32; 4], Some("D")),
        Err(Error::FormatNotSupported {
            spec: 'D',
            kind: LaneKind::F32
        })
    );
    assert_eq!(
        render(&[1.0f64; 2], Some("x8")),
        Err(Error::FormatNotSupported {
            spec: 'x',
            kind: LaneKind::F64
        })
    );
}

#[test]
fn test_invalid_format_specs() {
    for spec in ["Q", "F100", "Fx", "G-1", "N 2", "é"] {
        assert_eq!(
            spec.parse::<FormatSpec>(),
            Err(Error::InvalidFormatSpec(spec.to_string())),
            "{spec}"
        );
    }
}

#[test]
fn test_parse_format_spec() -> Result<()> {
    assert_eq!("".parse::<FormatSpec>()?, FormatSpec::GENERAL);
    assert_eq!(
        "X8".parse::<FormatSpec>()?,
        FormatSpec::new(FormatKind::Hex { upper: true }, Some(8))
    );
    assert_eq!(
        "e".parse::<FormatSpec>()?,
        FormatSpec::new(FormatKind::Exponential { upper: false }, None)
    );
    assert_eq!("n99".parse::<FormatSpec>()?.precision(), Some(99));
    Ok(())
}

#[test]
fn test_format_scalar_directly() -> Result<()> {
    let mut out = String::new();
    format_scalar(
        Scalar::Signed {
            value: -128,
            bits: 8,
        },
        &"X".parse::<FormatSpec>()?,
        &Locale::invariant(),
        &mut out,
    )?;
    assert_eq!(out, "80");
    Ok(())
}
