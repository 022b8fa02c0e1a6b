pub mod maldonado2010;
pub mod simbad;

pub use maldonado2010::Maldonado2010Catalog;
pub use simbad::SimbadResolver;
