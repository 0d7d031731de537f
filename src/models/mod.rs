pub mod earthquake;
pub mod feature;
