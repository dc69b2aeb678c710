use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::json;
use urania::matching::{MatchError, Matchable};
use urania::{Body, EphemerisSettings, HoroscopeSearch, LinearEphemeris, SearchError, StarCatalog};

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap()
}

/// Sun entering Taurus on day 5, ascendant turning once a day from 1 degree.
fn sky() -> LinearEphemeris {
    let mut ephemeris = LinearEphemeris::new(start()).with_ascendant(1.0, 360.0);
    for (i, body) in Body::ALL.iter().enumerate() {
        ephemeris = ephemeris.with_body(*body, 200.0 + 9.0 * i as f64, 0.0, 0.1);
    }
    ephemeris.with_body(Body::Sun, 25.0, 0.0, 1.0)
}

fn sun_in(sign: &str) -> serde_json::Value {
    json!({"planets": {"sun": {"position": {"sign": sign}}}})
}

#[test]
fn test_all_horoscopes_includes_both_ends() {
    let ephemeris = sky();
    let catalog = StarCatalog::new();
    let search = HoroscopeSearch::new(&ephemeris, &catalog, EphemerisSettings::default());
    let all = search
        .all_horoscopes(start(), start() + Duration::days(10), Duration::days(1))
        .unwrap();
    assert_eq!(all.len(), 11);
    assert_eq!(all[0].0, start());
    assert_eq!(all[10].0, start() + Duration::days(10));
}

#[test]
fn test_find_range_collapses_consecutive_matches() {
    let ephemeris = sky();
    let catalog = StarCatalog::new();
    let search = HoroscopeSearch::new(&ephemeris, &catalog, EphemerisSettings::default());

    let ranges = search
        .find_range(start(), start() + Duration::days(10), Duration::days(1), &sun_in("taurus"))
        .unwrap();
    assert_eq!(ranges.len(), 1);
    assert_eq!(ranges[0].start, start() + Duration::days(5));
    assert_eq!(ranges[0].end, start() + Duration::days(10));
    assert_eq!(ranges[0].step, Duration::days(1));

    let none = search
        .find_range(start(), start() + Duration::days(3), Duration::days(1), &sun_in("leo"))
        .unwrap();
    assert!(none.is_empty());
}

#[test]
fn test_find_range_rejects_empty_step() {
    let ephemeris = sky();
    let catalog = StarCatalog::new();
    let search = HoroscopeSearch::new(&ephemeris, &catalog, EphemerisSettings::default());
    let result = search.find_range(start(), start(), Duration::zero(), &sun_in("aries"));
    assert!(matches!(result, Err(SearchError::InvalidStep(_))));
}

#[test]
fn test_find_datetime_range_refines_each_day() {
    let ephemeris = sky();
    let catalog = StarCatalog::new();
    let search = HoroscopeSearch::new(&ephemeris, &catalog, EphemerisSettings::default());

    let time_filter = json!({"ascendant": {"sign": "aries"}});
    let ranges = search
        .find_datetime_range(start(), start() + Duration::days(10), &sun_in("taurus"), &time_filter)
        .unwrap();

    // the ascendant spends its first 105 minutes of each day in aries
    assert_eq!(ranges.len(), 7);
    assert_eq!(ranges[0].start, start() + Duration::days(5));
    assert_eq!(
        ranges[0].end,
        start() + Duration::days(5) + Duration::minutes(105)
    );
    assert_eq!(ranges[0].step, Duration::minutes(15));
    assert_eq!(ranges[6].start, start() + Duration::days(11));
    assert_eq!(ranges[6].end, start() + Duration::days(11));
}

#[test]
fn test_filter_type_mismatch_is_error() {
    let ephemeris = sky();
    let catalog = StarCatalog::new();
    let search = HoroscopeSearch::new(&ephemeris, &catalog, EphemerisSettings::default());
    let (_, horoscope) = search
        .all_horoscopes(start(), start(), Duration::days(1))
        .unwrap()
        .remove(0);

    assert!(horoscope.matches(&sun_in("ARIES")).unwrap());
    let err = horoscope.matches(&json!({"planets": {"sun": {"position": {"sign": 5}}}}));
    assert!(matches!(err, Err(MatchError::TypeMismatch { .. })));
}
