mod json;
mod multipoint;
mod plotter;
mod to_cells;
mod triangle;
