use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    Empty,
    ZeroExtent { axis: usize },
    CapacityOverflow,
    RankMismatch { expected: usize, actual: usize },
    AxisOutOfRange { axis: usize, rank: usize },
    OutOfBounds { axis: usize, coord: usize, extent: usize },
    OffsetOutOfRange { offset: usize, capacity: usize },
    TooLarge { capacity: usize, limit: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::Empty => write!(f, "Layout needs at least one dimension"),
            LayoutError::ZeroExtent { axis } => write!(f, "Extent of axis {} is zero", axis),
            LayoutError::CapacityOverflow => write!(f, "Product of extents overflows usize"),
            LayoutError::RankMismatch { expected, actual } => {
                write!(f, "Expected {} coordinates, got {}", expected, actual)
            }
            LayoutError::AxisOutOfRange { axis, rank } => {
                write!(f, "Axis {} out of range for rank {}", axis, rank)
            }
            LayoutError::OutOfBounds { axis, coord, extent } => write!(
                f,
                "Coordinate {} on axis {} out of bounds for extent {}",
                coord, axis, extent
            ),
            LayoutError::OffsetOutOfRange { offset, capacity } => {
                write!(f, "Offset {} out of range for capacity {}", offset, capacity)
            }
            LayoutError::TooLarge { capacity, limit } => {
                write!(f, "Capacity {} exceeds verification limit {}", capacity, limit)
            }
        }
    }
}

impl std::error::Error for LayoutError {}

#[derive(Debug)]
pub enum NdError {
    Layout(LayoutError),
    Io(std::io::Error),
    Json(serde_json::Error),
    Other(String),
}

impl fmt::Display for NdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NdError::Layout(e) => write!(f, "Layout error: {}", e),
            NdError::Io(e) => write!(f, "IO error: {}", e),
            NdError::Json(e) => write!(f, "JSON error: {}", e),
            NdError::Other(e) => write!(f, "Error: {}", e),
        }
    }
}

impl std::error::Error for NdError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NdError::Layout(e) => Some(e),
            NdError::Io(e) => Some(e),
            NdError::Json(e) => Some(e),
            NdError::Other(_) => None,
        }
    }
}

impl From<LayoutError> for NdError {
    fn from(err: LayoutError) -> Self {
        NdError::Layout(err)
    }
}

impl From<std::io::Error> for NdError {
    fn from(err: std::io::Error) -> Self {
        NdError::Io(err)
    }
}

impl From<serde_json::Error> for NdError {
    fn from(err: serde_json::Error) -> Self {
        NdError::Json(err)
    }
}

impl From<String> for NdError {
    fn from(err: String) -> Self {
        NdError::Other(err)
    }
}

impl From<&str> for NdError {
    fn from(err: &str) -> Self {
        NdError::Other(err.to_string())
    }
}
