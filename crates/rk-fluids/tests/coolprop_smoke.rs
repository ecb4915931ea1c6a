//! CoolProp integration tests.
//!
//! CoolProp evaluates IAPWS-95 while the in-tree backend is IF97, so the two are
//! compared with tolerances that cover the IF97 consistency limits rather than
//! exact agreement.

use proptest::prelude::*;
use rk_core::units::{bar, degc, to_degc};
use rk_fluids::{CoolPropWater, If97Water, PropertyError, PropertyProvider, flow_work};

#[test]
fn feedwater_train_agrees_with_if97() {
    let coolprop = CoolPropWater::new();
    let if97 = If97Water::new();

    for p in [0.1, 8.0, 70.0] {
        let hf_cp = coolprop.saturated_liquid_enthalpy(bar(p)).unwrap();
        let hf_97 = if97.saturated_liquid_enthalpy(bar(p)).unwrap();
        assert!((hf_cp - hf_97).abs() < 0.2, "hf({p} bar): {hf_cp} vs {hf_97}");

        let vf_cp = coolprop.saturated_liquid_volume(bar(p)).unwrap();
        let vf_97 = if97.saturated_liquid_volume(bar(p)).unwrap();
        assert!((vf_cp - vf_97).abs() / vf_97 < 1e-3, "vf({p} bar): {vf_cp} vs {vf_97}");
    }

    let v1 = coolprop.saturated_liquid_volume(bar(0.1)).unwrap();
    let w_pump = flow_work(v1, bar(8.0) - bar(0.1)) / 0.9;
    assert!((w_pump - 0.886_78).abs() < 1e-3, "w = {w_pump}");
}

#[test]
fn turbine_states_agree_with_if97() {
    let coolprop = CoolPropWater::new();
    let if97 = If97Water::new();

    let (h5, s5) = coolprop.enthalpy_entropy_pt(bar(70.0), degc(500.0)).unwrap();
    let (h5_97, s5_97) = if97.enthalpy_entropy_pt(bar(70.0), degc(500.0)).unwrap();
    assert!((h5 - h5_97).abs() < 0.5, "h5: {h5} vs {h5_97}");
    assert!((s5 - s5_97).abs() < 1e-3, "s5: {s5} vs {s5_97}");

    for p in [8.0, 0.1] {
        let h_cp = coolprop.enthalpy_ps(bar(p), s5).unwrap();
        let h_97 = if97.enthalpy_ps(bar(p), s5).unwrap();
        assert!((h_cp - h_97).abs() < 0.5, "hs({p} bar): {h_cp} vs {h_97}");
    }
}

#[test]
fn saturation_temperature_increases_with_pressure() {
    let water = CoolPropWater::new();
    let mut last = f64::NEG_INFINITY;
    for p in [0.1, 1.0, 8.0, 70.0, 150.0, 200.0] {
        let t = to_degc(water.saturation_temperature(bar(p)).unwrap());
        assert!(t > last, "Tsat({p} bar) = {t}");
        last = t;
    }
}

#[test]
fn two_phase_enthalpy_lies_between_saturation_limits() {
    let water = CoolPropWater::new();
    let hf = water.saturated_liquid_enthalpy(bar(0.1)).unwrap();
    let hg = water.saturated_vapor_enthalpy(bar(0.1)).unwrap();
    let h = water.enthalpy_ps(bar(0.1), 6.0).unwrap();
    assert!(h > hf && h < hg, "hf = {hf}, h = {h}, hg = {hg}");
}

#[test]
fn supercritical_saturation_is_rejected() {
    let water = CoolPropWater::new();
    let err = water.saturated_vapor_enthalpy(bar(300.0)).unwrap_err();
    assert!(matches!(err, PropertyError::OutOfRange { .. }), "{err}");
}

#[test]
fn provider_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CoolPropWater>();
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn ps_inverts_pt_for_superheated_steam(t_c in 200.0f64..780.0) {
        let water = CoolPropWater::new();
        let (h, s) = water.enthalpy_entropy_pt(bar(8.0), degc(t_c)).unwrap();
        let h_back = water.enthalpy_ps(bar(8.0), s).unwrap();
        prop_assert!((h_back - h).abs() < 1e-3, "t = {}, h = {}, back = {}", t_c, h, h_back);
    }
}
