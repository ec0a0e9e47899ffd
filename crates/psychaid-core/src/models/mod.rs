pub mod answer;
pub mod assessment;
pub mod category;
pub mod narrative;
pub mod result;
pub mod severity;
pub mod user;
