//! Region 4: the saturation line, plus the region 2/3 boundary (B23).

/// Saturation-line coefficients n1..n10 of IF97 equation 30.
const N: [f64; 10] = [
    1_167.052_145_276_7,
    -724_213.167_032_06,
    -17.073_846_940_092,
    12_020.824_702_47,
    -3_232_555.032_233_3,
    14.915_108_613_53,
    -4_823.265_736_159_1,
    405_113.405_420_57,
    -0.238_555_575_678_49,
    650.175_348_447_98,
];

/// B23 boundary coefficients n1..n5 of IF97 equations 5 and 6.
const B23: [f64; 5] = [
    348.051_856_289_69,
    -1.167_185_987_997_5,
    1.019_297_003_932_6e-3,
    572.544_598_627_46,
    13.918_839_778_870,
];

/// Saturation pressure [MPa] at temperature `t_k` [K].
pub(super) fn psat_mpa(t_k: f64) -> f64 {
    let theta = t_k + N[8] / (t_k - N[9]);
    let a = theta * theta + N[0] * theta + N[1];
    let b = N[2] * theta * theta + N[3] * theta + N[4];
    let c = N[5] * theta * theta + N[6] * theta + N[7];
    (2.0 * c / (-b + (b * b - 4.0 * a * c).sqrt())).powi(4)
}

/// Saturation temperature [K] at pressure `p_mpa` [MPa].
pub(super) fn tsat_k(p_mpa: f64) -> f64 {
    let beta = p_mpa.powf(0.25);
    let e = beta * beta + N[2] * beta + N[5];
    let f = N[0] * beta * beta + N[3] * beta + N[6];
    let g = N[1] * beta * beta + N[4] * beta + N[7];
    let d = 2.0 * g / (-f - (f * f - 4.0 * e * g).sqrt());
    (N[9] + d - ((N[9] + d).powi(2) - 4.0 * (N[8] + N[9] * d)).sqrt()) / 2.0
}

/// Pressure [MPa] on the region 2/3 boundary at temperature `t_k` [K].
pub(super) fn b23_p_mpa(t_k: f64) -> f64 {
    B23[0] + B23[1] * t_k + B23[2] * t_k * t_k
}

/// Temperature [K] on the region 2/3 boundary at pressure `p_mpa` [MPa].
pub(super) fn b23_t_k(p_mpa: f64) -> f64 {
    B23[3] + ((p_mpa - B23[4]) / B23[2]).sqrt()
}
