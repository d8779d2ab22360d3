#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Rooftop solar sizing and savings estimator.
//!
//! Sizes a system from a household's daily consumption using fixed panel,
//! irradiance, emission, and tariff constants. The estimate is pure
//! arithmetic: the same input always produces the same output.

/// Rated output of a single panel, in watts.
pub const PANEL_WATTS: f64 = 500.0;

/// Average effective sun-hours per day.
pub const SUN_HOURS_PER_DAY: f64 = 4.0;

/// Energy one panel produces per day, in kWh.
pub const PANEL_DAILY_KWH: f64 = PANEL_WATTS / 1000.0 * SUN_HOURS_PER_DAY;

/// Grid emissions avoided per kWh of solar generation, in kg CO2.
pub const CO2_KG_PER_KWH: f64 = 0.4;

/// Electricity tariff, in INR per kWh.
pub const TARIFF_INR_PER_KWH: f64 = 8.0;

/// Daily consumption (kWh) at or above which solar is recommended.
pub const WORTH_IT_THRESHOLD_KWH: f64 = 5.0;

/// Largest daily consumption (kWh) accepted for an estimate.
///
/// At this bound the system needs 500,000 panels, and every derived figure
/// stays exactly representable in its integer field.
pub const MAX_DAILY_KWH: f64 = 1_000_000.0;

const RECOMMENDED_SUMMARY: &str = "Based on your energy consumption and regional factors, solar installation is recommended for your location.";

const LOW_USAGE_SUMMARY: &str = "Your energy usage is relatively low. Solar installation may not provide optimal return on investment for your current consumption patterns.";

/// Result of sizing a system for a given daily consumption.
#[derive(Debug, Clone, PartialEq)]
pub struct SolarEstimate {
    /// Daily consumption the estimate was computed for (kWh).
    pub daily_kwh: f64,
    /// Whether installation is recommended at this consumption level.
    pub worth_it: bool,
    /// Minimum number of panels whose output meets the demand.
    pub panels: u32,
    /// Total rated capacity (kW).
    pub system_size_kw: f64,
    /// Expected daily generation (kWh).
    pub daily_production_kwh: f64,
    /// Share of daily demand covered by generation, capped at 100.
    pub energy_offset_percent: u32,
    /// Annual CO2 avoided, in tonnes, rounded to one decimal.
    pub annual_co2_reduction_tons: f64,
    /// Annual bill savings in INR, rounded to the nearest rupee.
    pub annual_savings_inr: u64,
    /// Human-readable recommendation.
    pub summary: &'static str,
}

/// Sizes a solar installation for `daily_kwh` of daily consumption.
///
/// `daily_kwh` must be finite, non-negative, and at most
/// [`MAX_DAILY_KWH`]; callers validate this before calling. Zero
/// consumption yields zero panels and an energy offset of 0%.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn estimate(daily_kwh: f64) -> SolarEstimate {
    let panels = (daily_kwh / PANEL_DAILY_KWH).ceil() as u32;
    let system_size_kw = f64::from(panels) * PANEL_WATTS / 1000.0;
    let daily_production_kwh = f64::from(panels) * PANEL_DAILY_KWH;

    let energy_offset_percent = if daily_kwh > 0.0 {
        ((daily_production_kwh / daily_kwh * 100.0).round() as u32).min(100)
    } else {
        0
    };

    let annual_kwh = daily_production_kwh * 365.0;
    let annual_co2_reduction_tons = (annual_kwh * CO2_KG_PER_KWH / 1000.0 * 10.0).round() / 10.0;
    let annual_savings_inr = (annual_kwh * TARIFF_INR_PER_KWH).round() as u64;

    let worth_it = daily_kwh >= WORTH_IT_THRESHOLD_KWH;
    if !worth_it {
        log::debug!(
            "Daily usage {daily_kwh} kWh is below the {WORTH_IT_THRESHOLD_KWH} kWh threshold"
        );
    }

    SolarEstimate {
        daily_kwh,
        worth_it,
        panels,
        system_size_kw,
        daily_production_kwh,
        energy_offset_percent,
        annual_co2_reduction_tons,
        annual_savings_inr,
        summary: if worth_it {
            RECOMMENDED_SUMMARY
        } else {
            LOW_USAGE_SUMMARY
        },
    }
}
