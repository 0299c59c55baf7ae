use std::fmt;

use rand::Rng;

use crate::error::{finite, positive, PricingError};

/// Call or put, the only thing distinguishing the two closed-form branches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// The other side of put-call parity.
    pub fn counterpart(&self) -> Self {
        match self {
            OptionType::Call => OptionType::Put,
            OptionType::Put => OptionType::Call,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Greek {
    Delta,
    Gamma,
    Vega,
    Theta,
}

/// Greeks approximated by divided differences in the spot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DividedDifference {
    Delta,
    Gamma,
}

/// The parameter varied by a mesh sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MeshAxis {
    Spot,
    TimeToExpiration,
    Vola,
}

/// Parameters of a European option under the generalized Black-Scholes model.
///
/// Constructed through [`OptionParameters::new`], so an instance always satisfies
/// `vola > 0`, `strike > 0` and `time_to_expiration > 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "raw::RawOptionParameters"))]
pub struct OptionParameters {
    /// the annualized risk-free interest rate
    rfr: f64,
    /// the annualized standard deviation of the stock's returns
    vola: f64,
    /// the strike or exercise price of the asset
    strike: f64,
    /// (T - t) in years, where T is the time of the option's expiration and t is the current time
    time_to_expiration: f64,
    /// net cost of holding the underlying, equal to `rfr` for non-dividend stocks
    cost_of_carry: f64,
}

impl OptionParameters {
    pub fn new(
        rfr: f64,
        vola: f64,
        strike: f64,
        time_to_expiration: f64,
        cost_of_carry: f64,
    ) -> Result<Self, PricingError> {
        Ok(Self {
            rfr: finite("rfr", rfr)?,
            vola: positive("vola", vola)?,
            strike: positive("strike", strike)?,
            time_to_expiration: positive("time_to_expiration", time_to_expiration)?,
            cost_of_carry: finite("cost_of_carry", cost_of_carry)?,
        })
    }

    /// Stock option without dividends, i.e. cost of carry equal to the risk-free rate.
    pub fn stock(
        rfr: f64,
        vola: f64,
        strike: f64,
        time_to_expiration: f64,
    ) -> Result<Self, PricingError> {
        Self::new(rfr, vola, strike, time_to_expiration, rfr)
    }

    pub fn rfr(&self) -> f64 {
        self.rfr
    }

    pub fn vola(&self) -> f64 {
        self.vola
    }

    pub fn strike(&self) -> f64 {
        self.strike
    }

    pub fn time_to_expiration(&self) -> f64 {
        self.time_to_expiration
    }

    pub fn cost_of_carry(&self) -> f64 {
        self.cost_of_carry
    }

    pub fn with_rfr(&self, rfr: f64) -> Result<Self, PricingError> {
        Ok(Self {
            rfr: finite("rfr", rfr)?,
            ..*self
        })
    }

    pub fn with_vola(&self, vola: f64) -> Result<Self, PricingError> {
        Ok(Self {
            vola: positive("vola", vola)?,
            ..*self
        })
    }

    pub fn with_strike(&self, strike: f64) -> Result<Self, PricingError> {
        Ok(Self {
            strike: positive("strike", strike)?,
            ..*self
        })
    }

    pub fn with_time_to_expiration(&self, time_to_expiration: f64) -> Result<Self, PricingError> {
        Ok(Self {
            time_to_expiration: positive("time_to_expiration", time_to_expiration)?,
            ..*self
        })
    }

    pub fn with_cost_of_carry(&self, cost_of_carry: f64) -> Result<Self, PricingError> {
        Ok(Self {
            cost_of_carry: finite("cost_of_carry", cost_of_carry)?,
            ..*self
        })
    }

    /// e^(-rT)
    pub fn discount_factor(&self) -> f64 {
        (-self.rfr * self.time_to_expiration).exp()
    }

    /// e^((b-r)T)
    pub fn carry_factor(&self) -> f64 {
        ((self.cost_of_carry - self.rfr) * self.time_to_expiration).exp()
    }
}

/// Parameters of a perpetual American option. There is no maturity: the option
/// can be exercised at any time.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "raw::RawPerpetualParameters"))]
pub struct PerpetualParameters {
    rfr: f64,
    vola: f64,
    strike: f64,
    cost_of_carry: f64,
}

impl PerpetualParameters {
    pub fn new(
        rfr: f64,
        vola: f64,
        strike: f64,
        cost_of_carry: f64,
    ) -> Result<Self, PricingError> {
        Ok(Self {
            rfr: finite("rfr", rfr)?,
            vola: positive("vola", vola)?,
            strike: positive("strike", strike)?,
            cost_of_carry: finite("cost_of_carry", cost_of_carry)?,
        })
    }

    pub fn rfr(&self) -> f64 {
        self.rfr
    }

    pub fn vola(&self) -> f64 {
        self.vola
    }

    pub fn strike(&self) -> f64 {
        self.strike
    }

    pub fn cost_of_carry(&self) -> f64 {
        self.cost_of_carry
    }
}

impl From<&OptionParameters> for PerpetualParameters {
    fn from(params: &OptionParameters) -> Self {
        Self {
            rfr: params.rfr,
            vola: params.vola,
            strike: params.strike,
            cost_of_carry: params.cost_of_carry,
        }
    }
}

/// Display label of a contract. Has no influence on any price.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContractNumber(u32);

impl ContractNumber {
    pub const MAX: u32 = 1_000_000;

    /// Draws a number uniformly from `1..=ContractNumber::MAX`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen_range(1..=Self::MAX))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for ContractNumber {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for ContractNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(feature = "serde")]
mod raw {
    use super::{OptionParameters, PerpetualParameters};
    use crate::error::PricingError;

    #[derive(serde::Deserialize)]
    pub(super) struct RawOptionParameters {
        rfr: f64,
        vola: f64,
        strike: f64,
        time_to_expiration: f64,
        cost_of_carry: f64,
    }

    impl TryFrom<RawOptionParameters> for OptionParameters {
        type Error = PricingError;

        fn try_from(raw: RawOptionParameters) -> Result<Self, Self::Error> {
            OptionParameters::new(
                raw.rfr,
                raw.vola,
                raw.strike,
                raw.time_to_expiration,
                raw.cost_of_carry,
            )
        }
    }

    #[derive(serde::Deserialize)]
    pub(super) struct RawPerpetualParameters {
        rfr: f64,
        vola: f64,
        strike: f64,
        cost_of_carry: f64,
    }

    impl TryFrom<RawPerpetualParameters> for PerpetualParameters {
        type Error = PricingError;

        fn try_from(raw: RawPerpetualParameters) -> Result<Self, Self::Error> {
            PerpetualParameters::new(raw.rfr, raw.vola, raw.strike, raw.cost_of_carry)
        }
    }
}
