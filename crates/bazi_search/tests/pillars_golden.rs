//! Golden-value integration tests for four-pillar assembly.

use bazi_base::{
    BalanceConfig, Branch, ElementTally, Pillar, Stem, count_elements, ganzhi_from_year,
};
use bazi_search::{
    JieqiConfig, JieqiEngine, bazi_chart_for_date, day_pillar, four_pillars_for_date,
    year_pillar,
};
use bazi_time::CivilTime;

fn engine() -> JieqiEngine {
    JieqiEngine::new(JieqiConfig::default()).unwrap()
}

fn ts(text: &str) -> CivilTime {
    text.parse().unwrap()
}

#[test]
fn ground_truth_1984() {
    let fp = four_pillars_for_date(&engine(), &ts("1984-08-08 08:30")).unwrap();
    assert_eq!(fp.year.full(), "甲子");
    assert_eq!(fp.month.full(), "壬申");
    assert_eq!(fp.day.full(), "甲戌");
    assert_eq!(fp.hour.full(), "戊辰");
    assert_eq!(fp.day_master(), Stem::Jia);
    assert_eq!(fp.solar_term.name(), "立秋");
}

#[test]
fn year_flips_one_minute_around_lichun() {
    let e = engine();
    // 立春 2024 = 2024-02-04T08:13:18
    let before = year_pillar(&e, &ts("2024-02-04T08:12:18")).unwrap();
    let after = year_pillar(&e, &ts("2024-02-04T08:14:18")).unwrap();
    assert_eq!(before, Pillar::from(ganzhi_from_year(2023).0));
    assert_eq!(after, Pillar::from(ganzhi_from_year(2024).0));
    assert_eq!(before.full(), "癸卯");
    assert_eq!(after.full(), "甲辰");
}

#[test]
fn month_flips_with_lichun() {
    let e = engine();
    let before = four_pillars_for_date(&e, &ts("2024-02-04T08:12")).unwrap();
    let after = four_pillars_for_date(&e, &ts("2024-02-04T08:14")).unwrap();
    assert_eq!(before.month.full(), "乙丑");
    assert_eq!(after.month.full(), "丙寅");
    assert_eq!(after.month_number(), 1);
}

#[test]
fn hour_boundaries() {
    let e = engine();
    let branch = |text: &str| four_pillars_for_date(&e, &ts(text)).unwrap().hour.branch();
    assert_eq!(branch("2024-06-01T20:59"), Branch::Xu);
    assert_eq!(branch("2024-06-01T21:00"), Branch::Hai);
    assert_eq!(branch("2024-06-01T22:59"), Branch::Hai);
    assert_eq!(branch("2024-06-01T23:00"), Branch::Zi);
    assert_eq!(branch("2024-06-01T00:59"), Branch::Zi);
    assert_eq!(branch("2024-06-01T01:00"), Branch::Chou);
}

#[test]
fn day_pillar_tracks_day_count() {
    let base = ts("1949-10-01T00:00");
    let base_pillar = day_pillar(&base).unwrap();
    let mut t = ts("0001-01-01T00:00");
    loop {
        let delta = base.days_until(&t);
        let p = day_pillar(&t).unwrap();
        let ds = i64::from(p.stem().index()) - i64::from(base_pillar.stem().index());
        let db = i64::from(p.branch().index()) - i64::from(base_pillar.branch().index());
        assert_eq!(ds.rem_euclid(10), delta.rem_euclid(10), "{t}");
        assert_eq!(db.rem_euclid(12), delta.rem_euclid(12), "{t}");
        match t.offset_seconds(86_400 * 9_973) {
            Ok(next) => t = next,
            Err(_) => break,
        }
    }
}

#[test]
fn consecutive_days_advance_one_step() {
    let mut t = ts("2023-12-25T12:00");
    let mut prev = day_pillar(&t).unwrap();
    for _ in 0..30 {
        t = t.offset_seconds(86_400).unwrap();
        let p = day_pillar(&t).unwrap();
        assert_eq!(p.ganzhi(), prev.ganzhi().advance(1));
        prev = p;
    }
}

#[test]
fn tally_always_eight() {
    let e = engine();
    let mut t = ts("1900-01-01T00:00");
    while t.year < 2100 {
        let fp = four_pillars_for_date(&e, &t).unwrap();
        let tally: ElementTally = count_elements(&fp);
        assert_eq!(tally.total(), 8, "{t}");
        t = t.offset_seconds(86_400 * 97 + 3_600 * 5).unwrap();
    }
}

#[test]
fn repeated_evaluation_is_identical() {
    let e = engine();
    let t = ts("1995-03-17T14:45");
    let cfg = BalanceConfig::default();
    let a = bazi_chart_for_date(&e, &t, &cfg).unwrap();
    let b = bazi_chart_for_date(&e, &t, &cfg).unwrap();
    assert_eq!(a, b);
    let fresh = bazi_chart_for_date(&engine(), &t, &cfg).unwrap();
    assert_eq!(a, fresh);
}

#[test]
fn earliest_supported_instant() {
    let fp = four_pillars_for_date(&engine(), &ts("0001-01-01T00:00")).unwrap();
    // before 立春 of year 1, so the sexagenary year is 0: (0 - 4) mod 60 = 56
    assert_eq!(fp.year.full(), "庚申");
    assert_eq!(fp.month.branch(), Branch::Zi);
}
