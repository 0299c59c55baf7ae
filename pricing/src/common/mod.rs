pub mod mesh;
pub mod models;
