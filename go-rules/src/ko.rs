use serde::{Deserialize, Serialize};

use crate::Point;

/// The point of a single-stone capture. Closed to both colors for the next ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ko {
    pub pos: Point,
}
