use crate::analytic::normal::{cdf, pdf};
use crate::analytic::OptionPrice;
use crate::common::mesh::Mesh;
use crate::common::models::{
    ContractNumber, DividedDifference, Greek, MeshAxis, OptionParameters, OptionType,
};
use crate::error::{checked, positive, PricingError};

/// European put and call options under the generalized Black-Scholes model,
/// with cost of carry `b`:
/// ```math
/// C = S e^((b-r)T) N(d1) - K e^(-rT) N(d2)
/// P = K e^(-rT) N(-d2) - S e^((b-r)T) N(-d1)
/// ```
/// For stock options without dividends `b = r`.
/// https://en.wikipedia.org/wiki/Black-Scholes_model
#[derive(Clone, Debug, PartialEq)]
pub struct EuropeanOption {
    params: OptionParameters,
    contract: Option<ContractNumber>,
}

fn d1_d2(dp: &OptionParameters, spot: f64) -> (f64, f64) {
    let sigma_exp = dp.vola() * dp.time_to_expiration().sqrt();
    let d1 = ((spot / dp.strike()).ln()
        + (dp.cost_of_carry() + dp.vola().powi(2) / 2.0) * dp.time_to_expiration())
        / sigma_exp;
    let d2 = d1 - sigma_exp;
    (d1, d2)
}

fn price_with(
    dp: &OptionParameters,
    option_type: OptionType,
    spot: f64,
) -> Result<f64, PricingError> {
    let spot = positive("spot", spot)?;
    let (d1, d2) = d1_d2(dp, spot);
    let carried_spot = spot * dp.carry_factor();
    let discounted_strike = dp.strike() * dp.discount_factor();
    let price = match option_type {
        OptionType::Call => carried_spot * cdf(d1) - discounted_strike * cdf(d2),
        OptionType::Put => discounted_strike * cdf(-d2) - carried_spot * cdf(-d1),
    };
    checked("price", spot, price)
}

fn greek_with(
    dp: &OptionParameters,
    option_type: OptionType,
    greek: Greek,
    spot: f64,
) -> Result<f64, PricingError> {
    let spot = positive("spot", spot)?;
    let (d1, d2) = d1_d2(dp, spot);
    let sqrt_t = dp.time_to_expiration().sqrt();
    let carry = dp.carry_factor();
    let carry_rate = dp.cost_of_carry() - dp.rfr();

    let value = match (greek, option_type) {
        (Greek::Delta, OptionType::Call) => carry * cdf(d1),
        (Greek::Delta, OptionType::Put) => carry * (cdf(d1) - 1.0),
        (Greek::Gamma, _) => carry * pdf(d1) / (spot * dp.vola() * sqrt_t),
        (Greek::Vega, _) => spot * carry * pdf(d1) * sqrt_t,
        (Greek::Theta, _) => {
            let decay = -spot * carry * pdf(d1) * dp.vola() / (2.0 * sqrt_t);
            let discounted_strike = dp.strike() * dp.discount_factor();
            match option_type {
                OptionType::Call => {
                    decay
                        - carry_rate * spot * carry * cdf(d1)
                        - dp.rfr() * discounted_strike * cdf(d2)
                }
                OptionType::Put => {
                    decay
                        + carry_rate * spot * carry * cdf(-d1)
                        + dp.rfr() * discounted_strike * cdf(-d2)
                }
            }
        }
    };
    checked("greek", spot, value)
}

impl EuropeanOption {
    pub fn new(params: OptionParameters) -> Self {
        Self {
            params,
            contract: None,
        }
    }

    pub fn with_contract(mut self, contract: ContractNumber) -> Self {
        self.contract = Some(contract);
        self
    }

    pub fn params(&self) -> &OptionParameters {
        &self.params
    }

    pub fn contract(&self) -> Option<ContractNumber> {
        self.contract
    }

    /// Put price from a given call price via put-call parity `C + K e^(-rT) = P + S`.
    pub fn put_from_call(&self, call_price: f64, spot: f64) -> f64 {
        call_price + self.params.strike() * self.params.discount_factor() - spot
    }

    /// Call price from a given put price via put-call parity `C + K e^(-rT) = P + S`.
    pub fn call_from_put(&self, put_price: f64, spot: f64) -> f64 {
        put_price + spot - self.params.strike() * self.params.discount_factor()
    }

    /// Prices `option_type` in closed form and returns the price of the opposite type
    /// implied by put-call parity.
    pub fn parity_counterpart(
        &self,
        option_type: OptionType,
        spot: f64,
    ) -> Result<f64, PricingError> {
        let price = self.price(option_type, spot)?;
        Ok(match option_type.counterpart() {
            OptionType::Put => self.put_from_call(price, spot),
            OptionType::Call => self.call_from_put(price, spot),
        })
    }

    pub fn greek(
        &self,
        option_type: OptionType,
        greek: Greek,
        spot: f64,
    ) -> Result<f64, PricingError> {
        greek_with(&self.params, option_type, greek, spot)
    }

    /// dV/dS
    pub fn delta(&self, option_type: OptionType, spot: f64) -> Result<f64, PricingError> {
        self.greek(option_type, Greek::Delta, spot)
    }

    /// d^2V/dS^2, equal for calls and puts.
    pub fn gamma(&self, option_type: OptionType, spot: f64) -> Result<f64, PricingError> {
        self.greek(option_type, Greek::Gamma, spot)
    }

    /// dV/d(sigma), equal for calls and puts.
    pub fn vega(&self, option_type: OptionType, spot: f64) -> Result<f64, PricingError> {
        self.greek(option_type, Greek::Vega, spot)
    }

    /// -dV/dT, the decay of the value as time passes.
    pub fn theta(&self, option_type: OptionType, spot: f64) -> Result<f64, PricingError> {
        self.greek(option_type, Greek::Theta, spot)
    }

    /// Central divided difference `(V(S+h) - V(S-h)) / 2h`.
    pub fn delta_divided_difference(
        &self,
        option_type: OptionType,
        spot: f64,
        h: f64,
    ) -> Result<f64, PricingError> {
        let h = positive("h", h)?;
        let up = self.price(option_type, spot + h)?;
        let down = self.price(option_type, spot - h)?;
        checked("delta", spot, (up - down) / (2.0 * h))
    }

    /// Second order divided difference `(V(S+h) - 2V(S) + V(S-h)) / h^2`.
    pub fn gamma_divided_difference(
        &self,
        option_type: OptionType,
        spot: f64,
        h: f64,
    ) -> Result<f64, PricingError> {
        let h = positive("h", h)?;
        let up = self.price(option_type, spot + h)?;
        let mid = self.price(option_type, spot)?;
        let down = self.price(option_type, spot - h)?;
        checked("gamma", spot, (up - 2.0 * mid + down) / (h * h))
    }

    pub fn divided_difference(
        &self,
        option_type: OptionType,
        method: DividedDifference,
        spot: f64,
        h: f64,
    ) -> Result<f64, PricingError> {
        match method {
            DividedDifference::Delta => self.delta_divided_difference(option_type, spot, h),
            DividedDifference::Gamma => self.gamma_divided_difference(option_type, spot, h),
        }
    }

    /// The greek on a mesh of spots, as `(spot, value)` pairs.
    pub fn greek_range(
        &self,
        option_type: OptionType,
        greek: Greek,
        steps: usize,
        start_spot: f64,
        end_spot: f64,
    ) -> Result<Vec<(f64, f64)>, PricingError> {
        Mesh::new(steps, start_spot, end_spot)?
            .evaluate(|spot| self.greek(option_type, greek, spot))
    }

    /// Divided-difference greeks with bump `h` on a mesh of spots, as `(spot, value)` pairs.
    pub fn divided_difference_range(
        &self,
        option_type: OptionType,
        method: DividedDifference,
        steps: usize,
        h: f64,
        start_spot: f64,
        end_spot: f64,
    ) -> Result<Vec<(f64, f64)>, PricingError> {
        Mesh::new(steps, start_spot, end_spot)?
            .evaluate(|spot| self.divided_difference(option_type, method, spot, h))
    }

    /// Prices at a fixed spot while `axis` runs through the mesh `start, ..., end`,
    /// as `(axis value, price)` pairs. Every point is priced on a copy of the
    /// parameters, the option itself is left as is. `spot` is ignored for
    /// `MeshAxis::Spot`.
    pub fn price_range_over(
        &self,
        option_type: OptionType,
        axis: MeshAxis,
        spot: f64,
        steps: usize,
        start: f64,
        end: f64,
    ) -> Result<Vec<(f64, f64)>, PricingError> {
        let mesh = Mesh::new(steps, start, end)?;
        match axis {
            MeshAxis::Spot => mesh.evaluate(|s| price_with(&self.params, option_type, s)),
            MeshAxis::TimeToExpiration => mesh.evaluate(|t| {
                price_with(&self.params.with_time_to_expiration(t)?, option_type, spot)
            }),
            MeshAxis::Vola => {
                mesh.evaluate(|vola| price_with(&self.params.with_vola(vola)?, option_type, spot))
            }
        }
    }
}

impl From<OptionParameters> for EuropeanOption {
    fn from(params: OptionParameters) -> Self {
        Self::new(params)
    }
}

impl OptionPrice for EuropeanOption {
    fn price(&self, option_type: OptionType, spot: f64) -> Result<f64, PricingError> {
        price_with(&self.params, option_type, spot)
    }
}
