//! House construction pricing.
//!
//! A pure engine: area-banded base rate per m², independent additive
//! surcharges for floors, floor heights, roof type, and house shape, and
//! a fixed-percentage cost split. No I/O, never errors — inputs outside
//! the supported range degrade to a zero quote.

use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Smallest quotable area, m².
pub const AREA_MIN: f64 = 10.0;
/// Largest quotable area, m².
pub const AREA_MAX: f64 = 1500.0;

const FOUNDATION_SHARE: f64 = 0.14;
const HOUSE_KIT_SHARE: f64 = 0.71;
const ASSEMBLY_SHARE: f64 = 0.15;

/// Number of storeys. Labels are the stored enumeration values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FloorCount {
    #[serde(rename = "1 этаж")]
    One,
    #[serde(rename = "2 этажа")]
    Two,
}

/// Ceiling height of a storey.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FloorHeight {
    #[serde(rename = "2,5 метра")]
    H250,
    #[serde(rename = "2,8 метра")]
    H280,
    #[serde(rename = "3 метра")]
    H300,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoofType {
    #[serde(rename = "1-скатная")]
    Shed,
    #[serde(rename = "2-скатная")]
    Gable,
    #[serde(rename = "4-скатная")]
    Hip,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum HouseShape {
    #[serde(rename = "Простая форма")]
    Simple,
    #[serde(rename = "Сложная форма")]
    Complex,
}

impl fmt::Display for FloorCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FloorCount::One => "1 этаж",
            FloorCount::Two => "2 этажа",
        })
    }
}

impl fmt::Display for FloorHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FloorHeight::H250 => "2,5 метра",
            FloorHeight::H280 => "2,8 метра",
            FloorHeight::H300 => "3 метра",
        })
    }
}

impl fmt::Display for RoofType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RoofType::Shed => "1-скатная",
            RoofType::Gable => "2-скатная",
            RoofType::Hip => "4-скатная",
        })
    }
}

impl fmt::Display for HouseShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HouseShape::Simple => "Простая форма",
            HouseShape::Complex => "Сложная форма",
        })
    }
}

/// Calculator input. The second-floor height is carried even for
/// single-storey requests (the form keeps it around) but only priced
/// when `floors` is `Two`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub area: f64,
    pub floors: FloorCount,
    pub first_floor_height: FloorHeight,
    pub second_floor_height: FloorHeight,
    pub roof_type: RoofType,
    pub house_shape: HouseShape,
}

impl QuoteRequest {
    /// Request with the calculator form's defaults.
    pub fn with_area(area: f64) -> Self {
        Self {
            area,
            floors: FloorCount::One,
            first_floor_height: FloorHeight::H250,
            second_floor_height: FloorHeight::H250,
            roof_type: RoofType::Shed,
            house_shape: HouseShape::Simple,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub price_per_sqm: i64,
    pub total_price: f64,
}

impl Quote {
    pub fn zero() -> Self {
        Self {
            price_per_sqm: 0,
            total_price: 0.0,
        }
    }
}

/// Cost split of a total construction price. Each component is rounded
/// independently, so the three do not always sum back to the total.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub foundation: i64,
    pub house_kit: i64,
    pub assembly: i64,
}

struct AreaBand {
    min: f64,
    max: f64,
    rate: i64,
}

static BASE_RATE_BANDS: Lazy<Vec<AreaBand>> = Lazy::new(|| {
    [
        (10.0, 24.0, 131_772),
        (25.0, 49.0, 109_586),
        (50.0, 74.0, 89_981),
        (75.0, 99.0, 86_163),
        (100.0, 149.0, 75_352),
        (150.0, 199.0, 65_361),
        (200.0, 249.0, 61_000),
        (250.0, 299.0, 56_641),
        (300.0, 349.0, 56_091),
        (350.0, 399.0, 54_991),
        (400.0, 499.0, 53_891),
        (500.0, 1500.0, 52_791),
    ]
    .into_iter()
    .map(|(min, max, rate)| AreaBand { min, max, rate })
    .collect()
});

/// Base rate per m² for an area. Both band ends are inclusive; a
/// fractional area falling between two bands (e.g. 24.5) matches none
/// and yields 0, while its surcharges still apply.
fn base_rate(area: f64) -> i64 {
    BASE_RATE_BANDS
        .iter()
        .find(|band| area >= band.min && area <= band.max)
        .map(|band| band.rate)
        .unwrap_or(0)
}

fn floor_surcharge(floors: FloorCount) -> i64 {
    match floors {
        FloorCount::One => 7295,
        FloorCount::Two => 1619,
    }
}

fn height_surcharge(height: FloorHeight) -> i64 {
    match height {
        FloorHeight::H250 => 0,
        FloorHeight::H280 => 3798,
        FloorHeight::H300 => 5290,
    }
}

fn roof_surcharge(roof: RoofType, floors: FloorCount) -> i64 {
    match roof {
        RoofType::Shed => 0,
        RoofType::Gable => 1616,
        RoofType::Hip => match floors {
            FloorCount::One => 7085,
            FloorCount::Two => 4723,
        },
    }
}

fn shape_surcharge(shape: HouseShape) -> i64 {
    match shape {
        HouseShape::Simple => 0,
        HouseShape::Complex => 4676,
    }
}

/// Prices a request. Areas outside `[AREA_MIN, AREA_MAX]` produce a zero
/// quote — a defined result, not an error.
pub fn compute_price(request: &QuoteRequest) -> Quote {
    if !(AREA_MIN..=AREA_MAX).contains(&request.area) {
        return Quote::zero();
    }

    let mut rate = base_rate(request.area);
    rate += floor_surcharge(request.floors);
    rate += height_surcharge(request.first_floor_height);
    if request.floors == FloorCount::Two {
        rate += height_surcharge(request.second_floor_height);
    }
    rate += roof_surcharge(request.roof_type, request.floors);
    rate += shape_surcharge(request.house_shape);

    Quote {
        price_per_sqm: rate,
        total_price: rate as f64 * request.area,
    }
}

/// Splits a total into foundation / house kit / assembly at 14% / 71% /
/// 15%, each rounded on its own.
pub fn cost_breakdown(total_price: f64) -> CostBreakdown {
    CostBreakdown {
        foundation: (total_price * FOUNDATION_SHARE).round() as i64,
        house_kit: (total_price * HOUSE_KIT_SHARE).round() as i64,
        assembly: (total_price * ASSEMBLY_SHARE).round() as i64,
    }
}

/// Plain-text commercial proposal for a quoted request, one parameter or
/// price per line. The second-floor line appears only for two storeys.
pub fn commercial_proposal(request: &QuoteRequest, quote: &Quote) -> String {
    use crate::currency::display_amount;

    let breakdown = cost_breakdown(quote.total_price);
    let mut lines = vec![
        format!("Площадь: {} м²", request.area),
        format!("Этажность: {}", request.floors),
        format!("Высота 1-го этажа: {}", request.first_floor_height),
    ];
    if request.floors == FloorCount::Two {
        lines.push(format!(
            "Высота 2-го этажа: {}",
            request.second_floor_height
        ));
    }
    lines.push(format!("Тип крыши: {}", request.roof_type));
    lines.push(format!("Форма дома: {}", request.house_shape));
    lines.push(format!(
        "Стоимость за м²: {}",
        display_amount(quote.price_per_sqm)
    ));
    lines.push(format!(
        "Общая стоимость: {}",
        display_amount(quote.total_price.round() as i64)
    ));
    lines.push(format!(
        "Стоимость фундамента: {}",
        display_amount(breakdown.foundation)
    ));
    lines.push(format!(
        "Стоимость домокомплекта: {}",
        display_amount(breakdown.house_kit)
    ));
    lines.push(format!(
        "Стоимость монтажа: {}",
        display_amount(breakdown.assembly)
    ));
    lines.join("\n")
}
