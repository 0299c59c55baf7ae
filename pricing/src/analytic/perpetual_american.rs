use tracing::debug;

use crate::analytic::OptionPrice;
use crate::common::models::{ContractNumber, OptionType, PerpetualParameters};
use crate::error::{checked, positive, PricingError};

/// Perpetual American put and call options, i.e. American options without expiry.
/// ```math
/// C = K / (y1 - 1) * ((y1 - 1) / y1 * S / K)^y1
/// P = K / (1 - y2) * ((y2 - 1) / y2 * S / K)^y2
/// y1,2 = 1/2 - b / sigma^2 +- sqrt((b / sigma^2 - 1/2)^2 + 2r / sigma^2)
/// ```
/// The price is time-homogeneous and is the limit of the American price as T tends to infinity.
/// Spots beyond the exercise boundary are priced by the same formula.
#[derive(Clone, Debug, PartialEq)]
pub struct PerpetualAmericanOption {
    params: PerpetualParameters,
    contract: Option<ContractNumber>,
}

impl PerpetualAmericanOption {
    pub fn new(params: PerpetualParameters) -> Self {
        Self {
            params,
            contract: None,
        }
    }

    pub fn with_contract(mut self, contract: ContractNumber) -> Self {
        self.contract = Some(contract);
        self
    }

    pub fn params(&self) -> &PerpetualParameters {
        &self.params
    }

    pub fn contract(&self) -> Option<ContractNumber> {
        self.contract
    }

    /// The roots y1 (call) and y2 (put) of the characteristic equation
    /// `sigma^2 / 2 * y (y - 1) + b y - r = 0`.
    pub fn characteristic_root(&self, option_type: OptionType) -> Result<f64, PricingError> {
        let vola_sq = self.params.vola().powi(2);
        let carry_ratio = self.params.cost_of_carry() / vola_sq;
        let discriminant = (carry_ratio - 0.5).powi(2) + 2.0 * self.params.rfr() / vola_sq;
        if discriminant < 0.0 {
            return Err(PricingError::invalid(
                "rfr",
                self.params.rfr(),
                "no real characteristic root",
            ));
        }
        let root = discriminant.sqrt();
        Ok(match option_type {
            OptionType::Call => 0.5 - carry_ratio + root,
            OptionType::Put => 0.5 - carry_ratio - root,
        })
    }

    /// The spot at which immediate exercise becomes optimal, `K y / (y - 1)`.
    /// There the price equals the intrinsic value.
    pub fn exercise_boundary(&self, option_type: OptionType) -> Result<f64, PricingError> {
        let y = self.characteristic_root(option_type)?;
        if y == 1.0 {
            return Err(PricingError::NoExerciseBoundary);
        }
        if y == 0.0 {
            return Err(PricingError::ZeroCharacteristicRoot);
        }
        let strike = self.params.strike();
        checked("exercise boundary", strike, strike * y / (y - 1.0))
    }
}

impl From<PerpetualParameters> for PerpetualAmericanOption {
    fn from(params: PerpetualParameters) -> Self {
        Self::new(params)
    }
}

impl OptionPrice for PerpetualAmericanOption {
    fn price(&self, option_type: OptionType, spot: f64) -> Result<f64, PricingError> {
        let spot = positive("spot", spot)?;
        let y = self.characteristic_root(option_type)?;
        if y == 1.0 {
            // the denominator vanishes, the limit is the spot itself
            debug!(?option_type, spot, "degenerate characteristic root");
            return Ok(spot);
        }
        if y == 0.0 {
            return Err(PricingError::ZeroCharacteristicRoot);
        }

        let strike = self.params.strike();
        let moneyness = (y - 1.0) / y * spot / strike;
        let price = match option_type {
            OptionType::Call => strike / (y - 1.0) * moneyness.powf(y),
            OptionType::Put => strike / (1.0 - y) * moneyness.powf(y),
        };
        checked("price", spot, price)
    }
}
