pub mod fields;
pub mod measure;
