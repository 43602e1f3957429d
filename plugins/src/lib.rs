pub mod factory;
pub mod predictor;
