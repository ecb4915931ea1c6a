//! Region 2: superheated and saturated vapour.

use super::{GibbsProps, R_KJ_KG_K};

/// Reducing pressure [MPa].
const P_STAR: f64 = 1.0;
/// Reducing temperature [K].
const T_STAR: f64 = 540.0;

// Ideal-gas part
const J0: [i32; 9] = [0, 1, -5, -4, -3, -2, -1, 2, 3];
const N0: [f64; 9] = [
    -9.692_768_650_021_7,
    10.086_655_968_018,
    -0.005_608_791_128_302,
    0.071_452_738_081_455,
    -0.407_104_982_239_28,
    1.424_081_917_144_4,
    -4.383_951_131_945,
    -0.284_086_324_607_72,
    0.021_268_463_753_307,
];

// Residual part
const IR: [i32; 43] = [
    1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 4, 4, 4, 5, 6, 6, 6, 7, 7, 7, 8, 8, 9, 10, 10, 10,
    16, 16, 18, 20, 20, 20, 21, 22, 23, 24, 24, 24,
];
const JR: [i32; 43] = [
    0, 1, 2, 3, 6, 1, 2, 4, 7, 36, 0, 1, 3, 6, 35, 1, 2, 3, 7, 3, 16, 35, 0, 11, 25, 8, 36, 13, 4,
    10, 14, 29, 50, 57, 20, 35, 48, 21, 53, 39, 26, 40, 58,
];
const NR: [f64; 43] = [
    -1.773_174_247_321_3e-3,
    -0.017_834_862_292_358,
    -0.045_996_013_696_365,
    -0.057_581_259_083_432,
    -0.050_325_278_727_93,
    -3.303_264_167_020_3e-5,
    -1.894_898_751_631_5e-4,
    -3.939_277_724_335_5e-3,
    -0.043_797_295_650_573,
    -2.667_454_791_408_7e-5,
    2.048_173_769_230_9e-8,
    4.387_066_728_443_5e-7,
    -3.227_767_723_857e-5,
    -1.503_392_454_214_8e-3,
    -0.040_668_253_562_649,
    -7.884_730_955_936_7e-10,
    1.279_071_785_228_5e-8,
    4.822_537_271_850_7e-7,
    2.292_207_633_766_1e-6,
    -1.671_476_645_106_1e-11,
    -2.117_147_232_135_5e-3,
    -23.895_741_934_104,
    -5.905_956_432_427e-18,
    -1.262_180_889_910_1e-6,
    -0.038_946_842_435_739,
    1.125_621_136_045_9e-11,
    -8.231_134_089_799_8,
    1.980_971_280_208_8e-8,
    1.040_696_521_017_4e-19,
    -1.023_474_709_592_9e-13,
    -1.001_817_937_951_1e-9,
    -8.088_290_864_698_5e-11,
    0.106_930_318_794_09,
    -0.336_622_505_741_71,
    8.918_584_535_542_1e-25,
    3.062_931_687_623_2e-13,
    -4.200_246_769_820_8e-6,
    -5.905_602_968_563_9e-26,
    3.782_694_761_345_7e-6,
    -1.276_860_893_468_1e-15,
    7.308_761_059_506_1e-29,
    5.541_471_535_077_8e-17,
    -9.436_970_724_121e-7,
];

/// Evaluates the ideal-gas and residual parts of the dimensionless Gibbs free
/// energy at (`p_mpa`, `t_k`) and returns v, h and s.
pub(super) fn props(p_mpa: f64, t_k: f64) -> GibbsProps {
    let pi = p_mpa / P_STAR;
    let tau = T_STAR / t_k;

    let mut gamma0 = pi.ln();
    let mut gamma0_tau = 0.0;
    for (&n, &j) in N0.iter().zip(J0.iter()) {
        gamma0 += n * tau.powi(j);
        gamma0_tau += n * f64::from(j) * tau.powi(j - 1);
    }

    let b = tau - 0.5;
    let mut gammar = 0.0;
    let mut gammar_pi = 0.0;
    let mut gammar_tau = 0.0;
    for ((&n, &i), &j) in NR.iter().zip(IR.iter()).zip(JR.iter()) {
        gammar += n * pi.powi(i) * b.powi(j);
        gammar_pi += n * f64::from(i) * pi.powi(i - 1) * b.powi(j);
        gammar_tau += n * pi.powi(i) * f64::from(j) * b.powi(j - 1);
    }

    GibbsProps {
        v: R_KJ_KG_K * t_k / p_mpa * pi * (1.0 / pi + gammar_pi) / 1000.0,
        h: R_KJ_KG_K * t_k * tau * (gamma0_tau + gammar_tau),
        s: R_KJ_KG_K * (tau * (gamma0_tau + gammar_tau) - (gamma0 + gammar)),
    }
}
