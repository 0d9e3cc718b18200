mod layout;
mod parse;
mod raster;
mod regions;
mod surd;
