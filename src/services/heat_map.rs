//! Three-tier classification of every known city for a given house size.
//!
//! balance = standard horizontal output - scaled usage
//!   balance > 50        → green
//!   0 ≤ balance ≤ 50    → yellow
//!   balance < 0         → red

use crate::models::estimate::{CityColor, HeatColor, HeatMap};
use crate::models::reference::City;
use crate::services::recommendation::scaled_usage;
use crate::services::reference_data::CityTable;
use crate::services::solar_output::standard_output;

/// Balance (kWh/month) above which a city is green.
pub const GREEN_SURPLUS_KWH: f64 = 50.0;

pub fn energy_balance(city: &City, house_size_sqft: f64) -> f64 {
    standard_output(city, house_size_sqft) - scaled_usage(city, house_size_sqft)
}

pub fn heat_color(balance: f64) -> HeatColor {
    if balance > GREEN_SURPLUS_KWH {
        HeatColor::Green
    } else if balance >= 0.0 {
        HeatColor::Yellow
    } else {
        HeatColor::Red
    }
}

/// Colors every city, keeping reference-table order.
pub fn classify_cities(table: &CityTable, house_size_sqft: f64) -> Vec<CityColor> {
    table
        .iter()
        .map(|city| {
            let balance = energy_balance(city, house_size_sqft);
            #[cfg(feature = "verbose_log")]
            tracing::debug!(city = %city.name, balance, "Heat map balance");
            CityColor {
                city: city.name.clone(),
                color: heat_color(balance),
                energy_balance_kwh: balance,
            }
        })
        .collect()
}

pub fn cities_with_color(colors: &[CityColor], color: HeatColor) -> Vec<String> {
    colors
        .iter()
        .filter(|c| c.color == color)
        .map(|c| c.city.clone())
        .collect()
}

/// Share of all classified cities that carry `color`, in percent.
/// An empty classification has no share of anything.
pub fn color_percent(colors: &[CityColor], color: HeatColor) -> f64 {
    if colors.is_empty() {
        return 0.0;
    }
    let count = colors.iter().filter(|c| c.color == color).count();
    count as f64 / colors.len() as f64 * 100.0
}

pub fn display_colors(colors: &[CityColor]) -> Vec<String> {
    colors.iter().map(|c| c.color.hex_code().to_string()).collect()
}

pub fn heat_map(table: &CityTable, house_size_sqft: f64) -> HeatMap {
    let cities = classify_cities(table, house_size_sqft);
    HeatMap {
        display_colors: display_colors(&cities),
        red: cities_with_color(&cities, HeatColor::Red),
        yellow: cities_with_color(&cities, HeatColor::Yellow),
        green: cities_with_color(&cities, HeatColor::Green),
        red_percent: color_percent(&cities, HeatColor::Red),
        yellow_percent: color_percent(&cities, HeatColor::Yellow),
        green_percent: color_percent(&cities, HeatColor::Green),
        cities,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::city_with;
    use approx::assert_relative_eq;

    #[test]
    fn color_thresholds() {
        assert_eq!(heat_color(50.01), HeatColor::Green);
        assert_eq!(heat_color(50.0), HeatColor::Yellow);
        assert_eq!(heat_color(0.0), HeatColor::Yellow);
        assert_eq!(heat_color(-0.01), HeatColor::Red);
    }

    fn mixed_table() -> CityTable {
        // At 1000 sqft standard output is 87.09675 kWh per unit of radiation.
        CityTable::from_cities([
            city_with("Sunny", 10.0, 100.0),   // 870.97 - 50 → green
            city_with("Gloomy", 1.0, 20000.0), // 87.10 - 10000 → red
            city_with("Even", 1.0, 160.0),     // 87.10 - 80 → yellow
            city_with("Bright", 8.0, 200.0),   // 696.77 - 100 → green
        ])
        .unwrap()
    }

    #[test]
    fn lists_keep_table_order() {
        let map = heat_map(&mixed_table(), 1000.0);
        assert_eq!(map.green, ["Sunny", "Bright"]);
        assert_eq!(map.yellow, ["Even"]);
        assert_eq!(map.red, ["Gloomy"]);
        assert_eq!(map.display_colors, ["#008000", "#FF0000", "#FFFF00", "#008000"]);
    }

    #[test]
    fn percentages_use_real_table_size() {
        let map = heat_map(&mixed_table(), 1000.0);
        assert_relative_eq!(map.green_percent, 50.0);
        assert_relative_eq!(map.yellow_percent, 25.0);
        assert_relative_eq!(map.red_percent, 25.0);
        assert_relative_eq!(map.red_percent + map.yellow_percent + map.green_percent, 100.0);
    }

    #[test]
    fn empty_table_yields_empty_map() {
        let map = heat_map(&CityTable::new(), 1000.0);
        assert!(map.cities.is_empty());
        assert_eq!(map.red_percent + map.yellow_percent + map.green_percent, 0.0);
    }
}
