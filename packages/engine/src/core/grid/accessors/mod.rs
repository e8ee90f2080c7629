mod ages;
mod cells;
