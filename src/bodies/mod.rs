pub mod earth;
pub mod heavens;

pub use earth::{Earth, EarthTime};
pub use heavens::{Moon, Sol, StarField};
