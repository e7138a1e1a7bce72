mod application;
mod area;
mod public;
mod upload;
