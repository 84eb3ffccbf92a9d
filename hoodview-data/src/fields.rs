//! Column names of the housing dataset.

pub const NEIGHBORHOOD: &str = "Neighborhood";
pub const PROPERTY_TYPE: &str = "Property Type";
pub const YEAR_BUILT: &str = "Year Built";

pub const BEDROOMS: &str = "Bedrooms";
pub const BATHROOM: &str = "Bathroom";
pub const FINISHED_SIZE: &str = "Finished Size (Sq.Ft.)";
pub const LOT_SIZE: &str = "Lot Size (Sq.Ft.)";
pub const RENT_AMOUNT: &str = "Rent Amount";
pub const SALE_AMOUNT: &str = "Sale Amount";
pub const TAX_ASSESSMENT: &str = "Tax Assessment Amt";
pub const TOTAL_ROOMS: &str = "Total Rooms";

pub const LAST_SOLD_DATE: &str = "Last Sold Date";
pub const LAST_SOLD_PRICE: &str = "Last Sold Price";
pub const DELTA_VALUE: &str = "Delta Value";
pub const DELTA_VALUE_PER_YEAR: &str = "Delta Value per Year";
pub const PERCENT_CHANGE: &str = "Percent Change in Value";
