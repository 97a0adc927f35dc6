pub mod currency;
pub mod path;
pub mod rate_model;
pub mod rate_table;
