use serde::Deserialize;

/// Client-input failures. Each maps to a 400 response; store failures are
/// handled separately at the route layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingField,
    InvalidCoordinate,
    CoordinateOutOfRange,
}

impl ValidationError {
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::MissingField => "Name and address are required",
            ValidationError::InvalidCoordinate => "Valid coordinates required",
            ValidationError::CoordinateOutOfRange => "Coordinates out of range",
        }
    }
}

/// Coordinate as it arrives at the boundary: JSON number, or text from a
/// JSON string / query parameter.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawCoord {
    Number(f64),
    Text(String),
}

fn parse_coord(raw: Option<&RawCoord>) -> Result<f64, ValidationError> {
    let value = match raw {
        Some(RawCoord::Number(n)) => *n,
        Some(RawCoord::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| ValidationError::InvalidCoordinate)?,
        // A missing coordinate reads the same as an unparseable one.
        None => return Err(ValidationError::InvalidCoordinate),
    };
    if !value.is_finite() {
        return Err(ValidationError::InvalidCoordinate);
    }
    Ok(value)
}

/// Parses a latitude/longitude pair and enforces the coordinate ranges.
/// Shared by the insertion and listing paths.
pub fn parse_coordinates(
    latitude: Option<&RawCoord>,
    longitude: Option<&RawCoord>,
) -> Result<(f64, f64), ValidationError> {
    let lat = parse_coord(latitude)?;
    let lon = parse_coord(longitude)?;

    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return Err(ValidationError::CoordinateOutOfRange);
    }

    Ok((lat, lon))
}

/// Trims a required text field, rejecting absent or whitespace-only values.
pub fn require_field(value: Option<&str>) -> Result<&str, ValidationError> {
    let trimmed = value.unwrap_or("").trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField);
    }
    Ok(trimmed)
}
