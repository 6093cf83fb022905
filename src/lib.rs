pub mod astrocarta;
pub mod astrocarta_errors;
pub mod bodies;
pub mod constants;
pub mod coordinates;
pub mod ephemeris;
pub mod horizon;
pub mod rising_line;
pub mod time;
