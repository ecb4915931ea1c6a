// rk-core/src/units.rs

use uom::si::f64::{
    Pressure as UomPressure, ThermodynamicTemperature as UomThermodynamicTemperature,
};
use uom::si::pressure::{bar as bar_unit, megapascal, pascal};
use uom::si::thermodynamic_temperature::{degree_celsius, kelvin};

// Public canonical unit types (SI, f64)
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn bar(v: f64) -> Pressure {
    Pressure::new::<bar_unit>(v)
}

#[inline]
pub fn pa(v: f64) -> Pressure {
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn degc(v: f64) -> Temperature {
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn to_bar(p: Pressure) -> f64 {
    p.get::<bar_unit>()
}

#[inline]
pub fn to_mpa(p: Pressure) -> f64 {
    p.get::<megapascal>()
}

#[inline]
pub fn to_degc(t: Temperature) -> f64 {
    t.get::<degree_celsius>()
}

#[inline]
pub fn to_kelvin(t: Temperature) -> f64 {
    t.get::<kelvin>()
}
