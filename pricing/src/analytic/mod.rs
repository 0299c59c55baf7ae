pub mod black_scholes;
pub mod normal;
pub mod perpetual_american;

use crate::common::mesh::Mesh;
use crate::common::models::OptionType;
use crate::error::PricingError;

pub use black_scholes::EuropeanOption;
pub use perpetual_american::PerpetualAmericanOption;

/// Closed-form option price as a function of the spot.
pub trait OptionPrice {
    fn price(&self, option_type: OptionType, spot: f64) -> Result<f64, PricingError>;

    fn call(&self, spot: f64) -> Result<f64, PricingError> {
        self.price(OptionType::Call, spot)
    }

    fn put(&self, spot: f64) -> Result<f64, PricingError> {
        self.price(OptionType::Put, spot)
    }

    /// Prices on the mesh `start_spot, ..., end_spot` with `steps + 1` points,
    /// as `(spot, price)` pairs.
    fn price_range(
        &self,
        option_type: OptionType,
        steps: usize,
        start_spot: f64,
        end_spot: f64,
    ) -> Result<Vec<(f64, f64)>, PricingError> {
        Mesh::new(steps, start_spot, end_spot)?.evaluate(|spot| self.price(option_type, spot))
    }
}
