pub mod path;
pub mod sample;
pub mod track;
