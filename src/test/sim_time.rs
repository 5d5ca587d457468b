use crate::sim::{SimTime, TICKS_PER_UNIT};

#[test]
fn sim_time_unit_conversions() {
    assert_eq!(SimTime::from_units(1), SimTime(TICKS_PER_UNIT));
    assert_eq!(SimTime::from_units_f64(2.5), SimTime(2 * TICKS_PER_UNIT + TICKS_PER_UNIT / 2));
    assert_eq!(SimTime::from_units(10_000).as_units_f64(), 10_000.0);
}

#[test]
fn sim_time_unit_conversions_saturate_and_clamp() {
    assert_eq!(SimTime::from_units(u64::MAX), SimTime(u64::MAX));
    assert_eq!(SimTime::from_units_f64(f64::INFINITY), SimTime(u64::MAX));
    assert_eq!(SimTime::from_units_f64(-3.0), SimTime::ZERO);
    assert_eq!(SimTime::from_units_f64(f64::NAN), SimTime::ZERO);
    assert_eq!(SimTime(u64::MAX).saturating_add(SimTime(1)), SimTime(u64::MAX));
}
