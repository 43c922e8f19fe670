pub mod discrepancy;
pub mod record;
pub mod table;
