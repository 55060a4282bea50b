/// Edge weight type
pub type Weight = f64;
/// Identifier of a city as it appears in the route table
pub type CityId = i64;
