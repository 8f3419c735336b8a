pub mod basemap;
pub mod graticule;
pub mod layer;
pub mod symbology;
pub mod tracks;

pub use basemap::*;
pub use graticule::*;
pub use layer::*;
pub use symbology::*;
pub use tracks::*;
