//! IF97 provider integration tests.
//!
//! Values are checked at the pressures of the regenerative cycle study
//! (70 / 8 / 0.1 bar) plus physical-plausibility trends along isobars.

use proptest::prelude::*;
use rk_core::units::{bar, degc, to_degc};
use rk_fluids::{If97Water, PropertyError, PropertyProvider, flow_work};

#[test]
fn feedwater_heater_saturation_states() {
    let water = If97Water::new();

    let h1 = water.saturated_liquid_enthalpy(bar(0.1)).unwrap();
    let h3 = water.saturated_liquid_enthalpy(bar(8.0)).unwrap();
    assert!((h1 - 191.812_295_193_564_4).abs() < 1e-6, "h1 = {h1}");
    assert!((h3 - 721.017_848_419_753_4).abs() < 1e-6, "h3 = {h3}");

    let v1 = water.saturated_liquid_volume(bar(0.1)).unwrap();
    let h2 = h1 + flow_work(v1, bar(8.0) - bar(0.1)) / 0.9;
    assert!((h2 - 192.699_079_474_046_13).abs() < 1e-6, "h2 = {h2}");
}

#[test]
fn turbine_bleed_state() {
    let water = If97Water::new();
    let (h5, s5) = water.enthalpy_entropy_pt(bar(70.0), degc(500.0)).unwrap();
    let h6s = water.enthalpy_ps(bar(8.0), s5).unwrap();
    let h6 = h5 - 0.9 * (h5 - h6s);
    assert!((h6 - 2889.324_980_534_770_5).abs() < 1e-5, "h6 = {h6}");
}

#[test]
fn saturation_temperature_increases_with_pressure() {
    let water = If97Water::new();
    let mut last = f64::NEG_INFINITY;
    for p in [0.1, 1.0, 8.0, 70.0, 150.0] {
        let t = to_degc(water.saturation_temperature(bar(p)).unwrap());
        assert!(t > last, "Tsat({p} bar) = {t}");
        last = t;
    }
}

#[test]
fn two_phase_enthalpy_lies_between_saturation_limits() {
    let water = If97Water::new();
    let hf = water.saturated_liquid_enthalpy(bar(0.1)).unwrap();
    let hg = water.saturated_vapor_enthalpy(bar(0.1)).unwrap();
    let h = water.enthalpy_ps(bar(0.1), 6.0).unwrap();
    assert!(h > hf && h < hg, "hf = {hf}, h = {h}, hg = {hg}");
}

#[test]
fn supercritical_liquid_side_is_rejected() {
    let water = If97Water::new();
    let err = water.enthalpy_entropy_pt(bar(300.0), degc(400.0)).unwrap_err();
    assert!(matches!(err, PropertyError::OutOfRange { .. }), "{err}");
}

#[test]
fn provider_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<If97Water>();
}

proptest! {
    #[test]
    fn ps_inverts_pt_for_superheated_steam(t_c in 200.0f64..780.0) {
        let water = If97Water::new();
        let (h, s) = water.enthalpy_entropy_pt(bar(8.0), degc(t_c)).unwrap();
        let h_back = water.enthalpy_ps(bar(8.0), s).unwrap();
        prop_assert!((h_back - h).abs() < 1e-4, "t = {}, h = {}, back = {}", t_c, h, h_back);
    }

    #[test]
    fn enthalpy_increases_along_isobar(t_c in 300.0f64..700.0, dt in 1.0f64..50.0) {
        let water = If97Water::new();
        let h_lo = water.enthalpy_pt(bar(70.0), degc(t_c)).unwrap();
        let h_hi = water.enthalpy_pt(bar(70.0), degc(t_c + dt)).unwrap();
        prop_assert!(h_hi > h_lo);
    }
}
