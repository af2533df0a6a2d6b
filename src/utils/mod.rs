pub mod columns;
pub mod fuzzy;
pub mod logging;
pub mod text;
