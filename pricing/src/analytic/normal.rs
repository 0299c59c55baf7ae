use probability::distribution::{Continuous, Distribution, Gaussian};

fn standard_normal() -> Gaussian {
    Gaussian::new(0.0, 1.0)
}

/// Standard normal probability density n(x).
pub fn pdf(x: f64) -> f64 {
    standard_normal().density(x)
}

/// Standard normal cumulative distribution N(x).
pub fn cdf(x: f64) -> f64 {
    standard_normal().distribution(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn normal_cdf() {
        let center_value = cdf(0.0);
        assert_eq!(center_value, 0.5);

        let sigma_top = cdf(1.0); // mu + 1 sigma
        assert_approx_eq!(sigma_top, 0.8413447460685429, 1e-10);
    }

    #[test]
    fn normal_cdf_tails() {
        // reference values of 1 - N(x) = N(-x)
        assert_approx_eq!(cdf(-3.0), 1.3498980316300946e-3, 1e-10);
        assert_approx_eq!(cdf(-5.0), 2.866515718791939e-7, 1e-10);
        assert_approx_eq!(cdf(-8.0), 6.22096057427178e-16, 1e-10);
        assert_approx_eq!(cdf(5.0), 1.0 - 2.866515718791939e-7, 1e-10);
        assert!(cdf(-9.9) >= 0.0);
        assert!(cdf(9.9) <= 1.0);
    }

    #[test]
    fn normal_cdf_symmetry() {
        for x in [0.1, 0.5, 1.3, 2.7, 4.2] {
            assert_approx_eq!(cdf(x) + cdf(-x), 1.0, 1e-12);
        }
    }

    #[test]
    fn normal_pdf() {
        assert_approx_eq!(pdf(0.0), 0.3989422804014327, 1e-12);
        assert_approx_eq!(pdf(1.0), 0.24197072451914337, 1e-12);
        assert_eq!(pdf(2.0), pdf(-2.0));
    }
}
