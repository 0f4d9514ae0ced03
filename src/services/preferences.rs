use crate::models::estimate::{BrandQuote, Preferences};
use crate::models::reference::{City, MountingMode, PanelBrand};
use crate::services::reference_data::PanelCatalog;
use crate::services::solar_output::monthly_output;

/// Walks brands in catalog order and keeps the first one no later brand
/// strictly beats.
fn first_best<I, F>(candidates: I, beats: F) -> PanelBrand
where
    I: IntoIterator<Item = (PanelBrand, f64)>,
    F: Fn(f64, f64) -> bool,
{
    let mut candidates = candidates.into_iter();
    let Some(mut best) = candidates.next() else {
        return PanelBrand::ALL[0];
    };
    for candidate in candidates {
        if beats(candidate.1, best.1) {
            best = candidate;
        }
    }
    best.0
}

pub fn min_cost_brand(quotes: &[BrandQuote]) -> PanelBrand {
    first_best(quotes.iter().map(|q| (q.brand, q.cost_usd)), |a, b| a < b)
}

pub fn max_efficiency_brand(catalog: &PanelCatalog) -> PanelBrand {
    first_best(
        catalog.iter().map(|(brand, spec)| (brand, spec.efficiency_percent)),
        |a, b| a > b,
    )
}

/// Brand whose own efficiency yields the most horizontal output here.
pub fn max_output_brand(catalog: &PanelCatalog, city: &City, house_size_sqft: f64) -> PanelBrand {
    first_best(
        catalog.iter().map(|(brand, spec)| {
            let output = monthly_output(
                city,
                MountingMode::Horizontal,
                spec.efficiency_percent,
                house_size_sqft,
            );
            (brand, output)
        }),
        |a, b| a > b,
    )
}

pub fn select(
    quotes: &[BrandQuote],
    catalog: &PanelCatalog,
    city: &City,
    house_size_sqft: f64,
) -> Preferences {
    Preferences {
        min_cost: min_cost_brand(quotes),
        max_output: max_output_brand(catalog, city, house_size_sqft),
        max_efficiency: max_efficiency_brand(catalog),
    }
}
