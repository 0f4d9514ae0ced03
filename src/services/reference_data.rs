//! Reference tables: cities with their solar/energy statistics and the
//! fixed panel-brand catalog.
//!
//! Both tables arrive as header-less comma-delimited rows:
//!
//! ```text
//! energy.csv: name,north,west,temperature,horizontal_rad,tilt_angle,tilt_rad,avg_energy,cost_factor,company;company;...
//! solar.csv:  brand,efficiency_percent,wattage,unit_area_m2,unit_price
//! ```
//!
//! They are loaded once at startup and never mutated afterwards.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use tracing::{info, warn};

use crate::error::{EngineError, LoadError};
use crate::models::reference::{City, PanelBrand, PanelSpec};

const CITY_FIELDS: usize = 10;
const PANEL_FIELDS: usize = 5;
const COMPANY_SEPARATOR: char = ';';

// ─── City table ──────────────────────────────────────────────────────────────

/// Cities in source order, indexed by name.
#[derive(Debug, Clone, Default)]
pub struct CityTable {
    cities: Vec<City>,
    index: HashMap<String, usize>,
}

impl CityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from in-memory records. Records with an empty name are
    /// dropped; a repeated name is reported with its 1-based position.
    pub fn from_cities<I>(cities: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = City>,
    {
        let mut table = Self::new();
        for (i, city) in cities.into_iter().enumerate() {
            if city.name.is_empty() {
                continue;
            }
            if let Err(city) = table.insert(city) {
                return Err(LoadError::DuplicateCity {
                    line: i as u64 + 1,
                    name: city.name,
                });
            }
        }
        Ok(table)
    }

    fn insert(&mut self, city: City) -> Result<(), City> {
        if self.index.contains_key(&city.name) {
            return Err(city);
        }
        self.index.insert(city.name.clone(), self.cities.len());
        self.cities.push(city);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&City, EngineError> {
        self.index
            .get(name)
            .map(|&i| &self.cities[i])
            .ok_or_else(|| EngineError::UnknownCity(name.to_string()))
    }

    /// Cities in the order they appeared in the source table.
    pub fn iter(&self) -> std::slice::Iter<'_, City> {
        self.cities.iter()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

impl<'a> IntoIterator for &'a CityTable {
    type Item = &'a City;
    type IntoIter = std::slice::Iter<'a, City>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ─── Panel catalog ───────────────────────────────────────────────────────────

/// Exactly one spec per [`PanelBrand`], stored at the brand's index.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelCatalog {
    specs: [PanelSpec; PanelBrand::COUNT],
}

impl PanelCatalog {
    pub fn new(specs: [PanelSpec; PanelBrand::COUNT]) -> Self {
        Self { specs }
    }

    pub fn spec(&self, brand: PanelBrand) -> &PanelSpec {
        &self.specs[brand.index()]
    }

    /// Brands with their specs, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (PanelBrand, &PanelSpec)> + '_ {
        PanelBrand::ALL.into_iter().map(move |brand| (brand, self.spec(brand)))
    }
}

// ─── Loading ─────────────────────────────────────────────────────────────────

/// The immutable context every engine operation reads from.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub cities: CityTable,
    pub panels: PanelCatalog,
}

impl ReferenceData {
    pub fn new(cities: CityTable, panels: PanelCatalog) -> Self {
        Self { cities, panels }
    }

    pub fn load(
        cities_path: impl AsRef<Path>,
        panels_path: impl AsRef<Path>,
    ) -> Result<Self, LoadError> {
        let cities = read_cities(open(cities_path.as_ref())?)?;
        let panels = read_panels(open(panels_path.as_ref())?)?;
        info!(
            cities = cities.len(),
            brands = PanelBrand::COUNT,
            "Reference data loaded"
        );
        Ok(Self::new(cities, panels))
    }
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })
}

fn reader<R: Read>(source: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source)
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map_or(0, |p| p.line())
}

fn check_width(record: &StringRecord, expected: usize) -> Result<(), LoadError> {
    if record.len() == expected {
        Ok(())
    } else {
        Err(LoadError::FieldCount {
            line: line_of(record),
            expected,
            found: record.len(),
        })
    }
}

fn number(record: &StringRecord, idx: usize, column: &'static str) -> Result<f64, LoadError> {
    let raw = record.get(idx).unwrap_or_default();
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(LoadError::InvalidNumber {
            line: line_of(record),
            column,
            value: raw.to_string(),
        }),
    }
}

/// Parses the city table. Rows whose name field is empty are skipped.
pub fn read_cities<R: Read>(source: R) -> Result<CityTable, LoadError> {
    let mut table = CityTable::new();

    for result in reader(source).records() {
        let record = result?;
        let name = record.get(0).unwrap_or_default();
        if name.is_empty() {
            warn!(line = line_of(&record), "Dropping city row with empty name");
            continue;
        }
        check_width(&record, CITY_FIELDS)?;

        let city = City {
            name: name.to_string(),
            coord_north: number(&record, 1, "coord_north")?,
            coord_west: number(&record, 2, "coord_west")?,
            temperature: number(&record, 3, "temperature")?,
            horizontal_radiation: number(&record, 4, "horizontal_radiation")?,
            optimal_tilt_angle: number(&record, 5, "optimal_tilt_angle")?,
            optimal_tilt_radiation: number(&record, 6, "optimal_tilt_radiation")?,
            average_monthly_energy_units: number(&record, 7, "average_monthly_energy_units")?,
            installation_cost_factor: number(&record, 8, "installation_cost_factor")?,
            servicing_companies: record
                .get(9)
                .unwrap_or_default()
                .split(COMPANY_SEPARATOR)
                .map(str::trim)
                .filter(|company| !company.is_empty())
                .map(str::to_string)
                .collect(),
        };

        if let Err(city) = table.insert(city) {
            return Err(LoadError::DuplicateCity {
                line: line_of(&record),
                name: city.name,
            });
        }
    }

    Ok(table)
}

/// Parses the panel table. Every catalog brand must appear exactly once.
pub fn read_panels<R: Read>(source: R) -> Result<PanelCatalog, LoadError> {
    let mut specs = [PanelSpec::default(); PanelBrand::COUNT];
    let mut seen = [false; PanelBrand::COUNT];

    for result in reader(source).records() {
        let record = result?;
        let name = record.get(0).unwrap_or_default();
        if name.is_empty() {
            warn!(line = line_of(&record), "Dropping panel row with empty name");
            continue;
        }
        check_width(&record, PANEL_FIELDS)?;

        let brand: PanelBrand = name.parse().map_err(|_| LoadError::UnknownBrand {
            line: line_of(&record),
            name: name.to_string(),
        })?;
        if seen[brand.index()] {
            return Err(LoadError::DuplicateBrand {
                line: line_of(&record),
                brand,
            });
        }

        specs[brand.index()] = PanelSpec {
            efficiency_percent: number(&record, 1, "efficiency_percent")?,
            wattage: number(&record, 2, "wattage")?,
            unit_area_m2: number(&record, 3, "unit_area_m2")?,
            unit_price: number(&record, 4, "unit_price")?,
        };
        seen[brand.index()] = true;
    }

    if let Some(missing) = PanelBrand::ALL.into_iter().find(|b| !seen[b.index()]) {
        return Err(LoadError::MissingBrand(missing));
    }
    Ok(PanelCatalog::new(specs))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CITIES: &str = "\
Boston,42.36,71.06,10.5,4.2,40.1,4.9,950,3.1,Sunrun;Tesla Energy
Phoenix,33.45,112.07,23.9,5.8,31.0,6.6,1150,2.4,SunPower
";

    const PANELS: &str = "\
Suntech,16.4,275,1.63,210
Samsung,19.8,360,1.7,350
Kyocera,16.1,265,1.65,230
CanadianSolar,17.1,290,1.62,240
GrapeSolar390W,15.4,390,2.6,470
GrapeSolar250,15.2,250,1.62,190
";

    #[test]
    fn reads_cities_in_source_order() {
        let table = read_cities(CITIES.as_bytes()).unwrap();
        let names: Vec<_> = table.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Boston", "Phoenix"]);

        let boston = table.get("Boston").unwrap();
        assert_eq!(boston.coord_north, 42.36);
        assert_eq!(boston.optimal_tilt_angle, 40.1);
        assert_eq!(boston.optimal_tilt_radiation, 4.9);
        assert_eq!(boston.servicing_companies, ["Sunrun", "Tesla Energy"]);
    }

    #[test]
    fn empty_name_rows_are_dropped() {
        let data = format!("{CITIES},1,2,3,4,5,6,7,8,\n");
        let table = read_cities(data.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.get("").is_err());
    }

    #[test]
    fn malformed_number_rejects_whole_load() {
        let data = "Boston,42.36,abc,10.5,4.2,40.1,4.9,950,3.1,Sunrun\n";
        match read_cities(data.as_bytes()) {
            Err(LoadError::InvalidNumber { line, column, value }) => {
                assert_eq!(line, 1);
                assert_eq!(column, "coord_west");
                assert_eq!(value, "abc");
            }
            other => panic!("expected InvalidNumber, got {other:?}"),
        }
    }

    #[test]
    fn missing_field_is_reported_not_zero_filled() {
        let data = "Boston,42.36,71.06,10.5,4.2,40.1\n";
        assert!(matches!(
            read_cities(data.as_bytes()),
            Err(LoadError::FieldCount { expected: 10, found: 6, .. })
        ));
    }

    #[test]
    fn duplicate_city_is_rejected() {
        let data = format!("{CITIES}Boston,1,1,1,1,1,1,1,1,X\n");
        assert!(matches!(
            read_cities(data.as_bytes()),
            Err(LoadError::DuplicateCity { line: 3, .. })
        ));
    }

    #[test]
    fn unknown_city_lookup_is_an_error() {
        let table = read_cities(CITIES.as_bytes()).unwrap();
        assert_eq!(
            table.get("Atlantis"),
            Err(EngineError::UnknownCity("Atlantis".to_string()))
        );
    }

    #[test]
    fn reads_full_panel_catalog() {
        let catalog = read_panels(PANELS.as_bytes()).unwrap();
        assert_eq!(catalog.spec(PanelBrand::Samsung).efficiency_percent, 19.8);
        assert_eq!(catalog.spec(PanelBrand::GrapeSolar390W).unit_area_m2, 2.6);
        let order: Vec<_> = catalog.iter().map(|(brand, _)| brand).collect();
        assert_eq!(order, PanelBrand::ALL);
    }

    #[test]
    fn catalog_must_be_complete_and_closed() {
        let missing = PANELS.replace("Kyocera,16.1,265,1.65,230\n", "");
        assert!(matches!(
            read_panels(missing.as_bytes()),
            Err(LoadError::MissingBrand(PanelBrand::Kyocera))
        ));

        let unknown = format!("{PANELS}SunPower,22.0,400,1.7,500\n");
        assert!(matches!(
            read_panels(unknown.as_bytes()),
            Err(LoadError::UnknownBrand { line: 7, .. })
        ));

        let twice = format!("{PANELS}Suntech,16.4,275,1.63,210\n");
        assert!(matches!(
            read_panels(twice.as_bytes()),
            Err(LoadError::DuplicateBrand { brand: PanelBrand::Suntech, .. })
        ));
    }

    #[test]
    fn from_cities_drops_empty_names() {
        let blank = City {
            name: String::new(),
            coord_north: 0.0,
            coord_west: 0.0,
            temperature: 0.0,
            horizontal_radiation: 0.0,
            optimal_tilt_angle: 0.0,
            optimal_tilt_radiation: 0.0,
            average_monthly_energy_units: 0.0,
            installation_cost_factor: 0.0,
            servicing_companies: Vec::new(),
        };
        let named = City { name: "Tucson".to_string(), ..blank.clone() };
        let table = CityTable::from_cities([blank, named]).unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.get("Tucson").is_ok());
    }
}
