mod gateway;
mod polarity_model;

pub use gateway::IReviewGateway;
pub use polarity_model::IPolarityModel;
