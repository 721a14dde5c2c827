//! H3 index types

pub mod bits;
mod cell;
mod edge;
mod iterator;
mod mode;
mod triangle;
mod vertex;

pub use cell::CellIndex;
pub use edge::{DirectedEdgeIndex, Edge};
pub use mode::IndexMode;
pub use vertex::{Vertex, VertexIndex};

use iterator::{Children, Compact, GridPathCells};
use triangle::Triangle;
