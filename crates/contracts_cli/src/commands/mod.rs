pub mod check;
pub mod scan;
