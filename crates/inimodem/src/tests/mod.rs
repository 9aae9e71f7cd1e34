mod property_lines;
mod utils;
