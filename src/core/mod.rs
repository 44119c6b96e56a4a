pub mod body;
pub mod chart;
pub mod house;
pub mod profile;
pub mod rashi;
pub mod types;

pub use body::Body;
pub use chart::{ChartData, PlanetPosition};
pub use house::HouseNumber;
pub use profile::BirthProfile;
pub use rashi::Rashi;
pub use types::{Point, Viewport};
