use jde_julian::{
    options::{CodecOptions, DayOverflow, PairedFieldPolicy, ValidationPolicy},
    sync::{DateFieldPair, FieldUpdate},
    CalendarDate, CompactCode, DateCodec,
};

fn codecs() -> [DateCodec; 2] {
    [
        DateCodec::new(CodecOptions::PERMISSIVE),
        DateCodec::new(CodecOptions::STRICT),
    ]
}

#[test]
fn accepted_codes_round_trip_to_canonical_form() {
    for codec in codecs() {
        for century in 0..=1 {
            for year_of_century in [0, 23, 24, 99] {
                for day in [1, 59, 60, 200, 365, 366] {
                    let code = format!("{century}{year_of_century:02}{day:03}");
                    if !codec.validate(&code) {
                        assert_eq!(day, 366, "{code}");
                        continue;
                    }
                    let date = codec.decode(&code).unwrap();
                    assert_eq!(codec.encode(date).to_string(), code);
                }
            }
        }
    }
}

#[test]
fn short_codes_round_trip_to_padded_form() {
    for codec in codecs() {
        let date = codec.decode("12301").unwrap();
        assert_eq!(date, CalendarDate::try_new(2023, 1, 1).unwrap());
        assert_eq!(codec.encode(date).to_string(), "123001");
    }
}

#[test]
fn leap_year_boundaries() {
    for codec in codecs() {
        assert!(codec.validate("123365"));
        assert!(!codec.validate("123366"));
        assert!(codec.validate("124366"));
        assert!(!codec.validate("124367"));
        assert!(codec.validate("100366"));
        assert!(!codec.validate("000366"));
    }
    assert!(jde_julian::is_leap_year(2000));
    assert!(!jde_julian::is_leap_year(1900));
}

#[test]
fn options_built_from_strings() {
    let options = CodecOptions::default()
        .with_validation_policy("strict".parse::<ValidationPolicy>().unwrap())
        .with_paired_field_policy("clear".parse::<PairedFieldPolicy>().unwrap())
        .with_overflow("balance".parse::<DayOverflow>().unwrap());

    let codec = DateCodec::new(options);
    assert_eq!(
        codec.decode("099400").unwrap(),
        CalendarDate::try_new(2000, 2, 4).unwrap()
    );
}

#[test]
fn editing_both_fields() {
    let start = CalendarDate::try_new(2024, 1, 1).unwrap();
    let mut fields = DateFieldPair::with_date(start, CodecOptions::PERMISSIVE);
    assert_eq!(fields.calendar().value(), "2024-01-01");
    assert_eq!(fields.code().value(), "124001");

    let update = fields.set_calendar_input("2024-03-01");
    assert_eq!(
        update,
        FieldUpdate::Synced {
            date: CalendarDate::try_new(2024, 3, 1).unwrap(),
            code: "124061".parse::<CompactCode>().unwrap(),
        }
    );
    assert_eq!(fields.code().value(), "124061");

    fields.set_code_input("099001");
    assert_eq!(fields.calendar().value(), "1999-01-01");

    let update = fields.set_code_input("9");
    assert_eq!(update, FieldUpdate::Rejected { cleared_paired: false });
    assert_eq!(fields.calendar().value(), "1999-01-01");
}

#[cfg(feature = "sys")]
#[test]
fn today_fills_both_fields() {
    let fields = DateFieldPair::today(CodecOptions::STRICT).unwrap();
    let date: CalendarDate = fields.calendar().value().parse().unwrap();
    assert_eq!(fields.code().value(), jde_julian::encode(date).to_string());
    assert!(!fields.code().is_invalid());
}
