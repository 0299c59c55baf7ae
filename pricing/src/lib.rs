//! Closed-form prices and sensitivities of European and perpetual American options
//! under the generalized Black-Scholes model, and sweeps of these over meshes of
//! spot, maturity or volatility.

pub mod analytic;
pub mod common;
pub mod error;

pub use analytic::{EuropeanOption, OptionPrice, PerpetualAmericanOption};
pub use common::mesh::Mesh;
pub use common::models::{
    ContractNumber, DividedDifference, Greek, MeshAxis, OptionParameters, OptionType,
    PerpetualParameters,
};
pub use error::PricingError;
