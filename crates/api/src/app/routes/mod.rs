pub mod beers;
pub mod system;
