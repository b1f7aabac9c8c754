//! Pages
//!
//! Top-level page components for each route.

pub mod chat;
pub mod drug_disease_graph;
pub mod home;
pub mod hospitals;

pub use chat::Chat;
pub use drug_disease_graph::DrugDiseaseGraph;
pub use home::Home;
pub use hospitals::Hospitals;
