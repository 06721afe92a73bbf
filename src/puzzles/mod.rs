pub mod dumbo_octopus;
pub mod sea_cucumber;
pub mod smoke_basin;
