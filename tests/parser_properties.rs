use navdat::io::{parse_airport_line, parse_navaid};
use navdat::prelude::*;
use proptest::prelude::*;

fn identifier() -> impl Strategy<Value = String> {
    "[A-Z]{2,3}"
}

#[allow(clippy::too_many_arguments)]
fn navaid_line(
    code: i64,
    lat: f64,
    lon: f64,
    elev: i64,
    freq: i64,
    range: i64,
    var: f64,
    id: &str,
) -> String {
    format!("{code} {lat} {lon} {elev} {freq} {range} {var} {id}")
}

fn tokens(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

proptest! {
    #[test]
    fn navaid_fields_round_trip(
        code in 1i64..14,
        lat in -90.0f64..90.0,
        lon in -180.0f64..180.0,
        elev in -1000i64..30000,
        freq in 0i64..200_000,
        range in 0i64..500,
        var in -360.0f64..360.0,
        id in identifier(),
        extra in prop::collection::vec("[A-Za-z0-9-]{1,8}", 0..4),
    ) {
        let mut line = navaid_line(code, lat, lon, elev, freq, range, var, &id);
        for token in &extra {
            line.push(' ');
            line.push_str(token);
        }

        let navaid = parse_navaid(&tokens(&line)).unwrap();

        prop_assert_eq!(i64::from(navaid.type_code), code);
        prop_assert_eq!(navaid.pos, Coords::new(lat, lon));
        prop_assert_eq!(navaid.elevation, elev);
        prop_assert_eq!(navaid.frequency, freq);
        prop_assert_eq!(navaid.range, range);
        prop_assert_eq!(navaid.variation, var);
        prop_assert_eq!(navaid.identifier, id);
        prop_assert_eq!(navaid.extra, extra);
    }

    #[test]
    fn navaid_kind_outside_range_is_rejected(
        code in prop_oneof![-1000i64..=0, 14i64..1000],
        id in identifier(),
    ) {
        let line = navaid_line(code, 40.0, -3.0, 0, 11030, 130, 0.0, &id);
        prop_assert!(parse_navaid(&tokens(&line)).is_none());
    }

    #[test]
    fn short_navaid_lines_are_rejected(
        code in 1i64..14,
        id in identifier(),
        keep in 0usize..8,
    ) {
        let line = navaid_line(code, 40.0, -3.0, 0, 11030, 130, 0.0, &id);
        let fields = tokens(&line);
        prop_assert!(parse_navaid(&fields[..keep]).is_none());
    }

    #[test]
    fn parsing_is_idempotent(
        code in 1i64..14,
        lat in -90.0f64..90.0,
        lon in -180.0f64..180.0,
        id in identifier(),
    ) {
        let line = navaid_line(code, lat, lon, 0, 11030, 130, 0.0, &id);

        let first = SourceFormat::Navaids.parse_line(&line);
        let second = SourceFormat::Navaids.parse_line(&line);

        prop_assert!(first.is_some());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn airport_header_round_trip(
        elev in -1000i64..15000,
        code in "[A-Z0-9]{3,4}",
        name in prop::collection::vec("[A-Za-z]{1,10}", 1..5),
    ) {
        let line = format!("1 {elev} 0 0 {code} {}", name.join(" "));

        let record = parse_airport_line(&tokens(&line));

        prop_assert_eq!(
            record,
            Some(Record::Airport(Airport { code, name: name.join(" "), elevation: elev }))
        );
    }

    #[test]
    fn short_airport_headers_are_rejected(keep in 0usize..6) {
        let fields = tokens("1 500 0 0 LEMD Madrid Barajas");
        prop_assert!(parse_airport_line(&fields[..keep]).is_none());
    }

    #[test]
    fn runway_requires_exact_column_count(count in 0usize..40) {
        prop_assume!(count != 26);

        let mut fields = vec!["100"];
        fields.extend(std::iter::repeat_n("1", count.saturating_sub(1)));
        let fields = &fields[..count.min(fields.len())];

        prop_assert!(parse_airport_line(fields).is_none());
    }
}
