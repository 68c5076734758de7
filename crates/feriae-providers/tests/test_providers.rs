//! Integration tests exercising the registry, the country providers, and
//! the region composition / override rules end to end.

use chrono::{Datelike, NaiveDate, Weekday};
use feriae_providers::{holidays, holidays_with, HolidaySet, HolidayType, REGIONS};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Assert `region`'s output keys are a superset of `parent`'s for `year`.
fn check_superset(region: &str, parent: &str, year: i32) {
    let parent_set = holidays(parent, year).unwrap();
    let region_set = holidays(region, year).unwrap();
    for key in parent_set.keys() {
        assert!(
            region_set.contains(key),
            "{region} {year}: missing inherited {key}"
        );
    }
}

// ─── Finland scenarios ────────────────────────────────────────────────────────

#[test]
fn finland_1954_st_johns_day_is_june_24() {
    let set = holidays("Finland", 1954).unwrap();
    assert_eq!(set.get("stJohnsDay").unwrap().date(), date(1954, 6, 24));
}

#[test]
fn finland_1956_st_johns_day_is_the_midsummer_saturday() {
    let set = holidays("Finland", 1956).unwrap();
    let d = set.get("stJohnsDay").unwrap().date();
    assert_eq!(d, date(1956, 6, 23));
    assert_eq!(d.weekday(), Weekday::Sat);
}

#[test]
fn finland_independence_day_gate() {
    assert!(!holidays("Finland", 1916).unwrap().contains("independenceDay"));
    assert_eq!(
        holidays("Finland", 1917)
            .unwrap()
            .get("independenceDay")
            .unwrap()
            .date(),
        date(1917, 12, 6)
    );
}

#[test]
fn finland_st_johns_day_weekday_rule_across_eras() {
    for year in 1900..1955 {
        let set = holidays("Finland", year).unwrap();
        assert_eq!(set.get("stJohnsDay").unwrap().date(), date(year, 6, 24));
    }
    for year in 1955..2050 {
        let set = holidays("Finland", year).unwrap();
        let d = set.get("stJohnsDay").unwrap().date();
        assert_eq!(d.weekday(), Weekday::Sat, "{year}");
        assert!((20..=26).contains(&d.day()), "{year}: {d}");
    }
}

// ─── Spain and regions ────────────────────────────────────────────────────────

#[test]
fn madrid_dos_de_mayo_every_year() {
    for year in [1920, 1975, 2008, 2024] {
        let set = holidays("Spain/CommunityOfMadrid", year).unwrap();
        let h = set.get("dosdeMayoUprisingDay").unwrap();
        assert_eq!(h.date(), date(year, 5, 2));
        assert_eq!(h.kind(), HolidayType::National);
    }
}

#[test]
fn madrid_overrides_are_observances() {
    let set = holidays("Spain/CommunityOfMadrid", 2024).unwrap();
    for key in ["stJosephsDay", "maundyThursday", "corpusChristi"] {
        assert_eq!(set.get(key).unwrap().kind(), HolidayType::Observance);
    }
    // The rest of the inherited set stays national.
    assert_eq!(set.get("christmasDay").unwrap().kind(), HolidayType::National);
}

#[test]
fn regions_are_supersets_of_spain() {
    for year in [1977, 1981, 2000, 2024] {
        check_superset("Spain/CommunityOfMadrid", "Spain", year);
        check_superset("Spain/Catalonia", "Spain", year);
        check_superset("Spain/Andalusia", "Spain", year);
    }
}

#[test]
fn spanish_year_gates() {
    let spain_1977 = holidays("Spain", 1977).unwrap();
    assert!(!spain_1977.contains("constitutionDay"));
    assert!(!spain_1977.contains("nationalDay"));

    let spain_1979 = holidays("Spain", 1979).unwrap();
    assert!(spain_1979.contains("constitutionDay"));
    assert!(!spain_1979.contains("nationalDay"));

    let spain_1981 = holidays("Spain", 1981).unwrap();
    assert!(spain_1981.contains("constitutionDay"));
    assert!(spain_1981.contains("nationalDay"));
}

#[test]
fn catalonia_additions() {
    let set = holidays("Spain/Catalonia", 2024).unwrap();
    assert_eq!(set.get("stJohnsDay").unwrap().date(), date(2024, 6, 24));
    assert_eq!(set.get("nationalCataloniaDay").unwrap().date(), date(2024, 9, 11));
    assert_eq!(set.get("easterMonday").unwrap().date(), date(2024, 4, 1));
    assert_eq!(set.get("stStephensDay").unwrap().date(), date(2024, 12, 26));
}

// ─── Cross-cutting properties ─────────────────────────────────────────────────

#[test]
fn compute_is_idempotent() {
    for region in REGIONS {
        let first = holidays(region, 2024).unwrap();
        let second = holidays(region, 2024).unwrap();
        assert_eq!(first, second, "{region}");
        // Same keys in the same insertion order.
        assert_eq!(
            first.keys().collect::<Vec<_>>(),
            second.keys().collect::<Vec<_>>()
        );
    }
}

#[test]
fn keys_are_unique_within_an_output_set() {
    for region in REGIONS {
        let set = holidays(region, 2024).unwrap();
        let mut keys: Vec<_> = set.keys().collect();
        keys.sort_unstable();
        let before = keys.len();
        keys.dedup();
        assert_eq!(before, keys.len(), "{region} emitted a duplicate key");
    }
}

#[test]
fn dates_always_fall_in_the_queried_year() {
    for region in REGIONS {
        for year in [1910, 1956, 1990, 2024] {
            let set = holidays(region, year).unwrap();
            assert!(!set.is_empty());
            for h in &set {
                assert_eq!(h.date().year(), year, "{region} {}", h.key());
            }
        }
    }
}

#[test]
fn locale_fallback_to_base_locale() {
    let set = holidays_with("Finland", 2024, None, Some("sv_SE")).unwrap();
    let easter = set.get("easter").unwrap();
    // No Swedish translation exists; the base-locale name is served.
    assert_eq!(easter.locale(), "sv_SE");
    assert_eq!(easter.display_name(), "Easter Sunday");
    // The native translation is still carried on the record.
    assert_eq!(easter.name("fi_FI"), "Pääsiäispäivä");

    let native = holidays_with("Finland", 2024, None, Some("fi_FI")).unwrap();
    assert_eq!(native.get("easter").unwrap().display_name(), "Pääsiäispäivä");
}

#[test]
fn type_filtering() {
    let set = holidays("Spain/CommunityOfMadrid", 2024).unwrap();
    let observances: Vec<_> = set.of_kind(HolidayType::Observance).map(|h| h.key()).collect();
    assert_eq!(observances, vec!["stJosephsDay", "maundyThursday", "corpusChristi"]);
    assert_eq!(set.of_kind(HolidayType::Bank).count(), 0);
    assert_eq!(set.of_kind(HolidayType::Season).count(), 0);
}

#[test]
fn outputs_are_plain_values() {
    // Sets are independently owned; mutating one query's result cannot
    // affect another.
    let mut first = holidays("Finland", 2024).unwrap();
    let second = holidays("Finland", 2024).unwrap();
    let extra = second.get("easter").unwrap().clone();
    first.add(extra);
    assert_eq!(first.len(), second.len());
    assert_eq!(second, holidays("Finland", 2024).unwrap());
}

fn keys_of(set: &HolidaySet) -> Vec<&'static str> {
    set.keys().collect()
}

#[test]
fn insertion_order_is_reproducible() {
    let a = holidays("Spain/Catalonia", 2024).unwrap();
    let b = holidays("Spain/Catalonia", 2024).unwrap();
    assert_eq!(keys_of(&a), keys_of(&b));
    // Parent records come first, regional additions after.
    let spain = holidays("Spain", 2024).unwrap();
    assert_eq!(&keys_of(&a)[..spain.len()], keys_of(&spain).as_slice());
}
