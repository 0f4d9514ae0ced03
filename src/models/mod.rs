pub mod estimate;
pub mod reference;
