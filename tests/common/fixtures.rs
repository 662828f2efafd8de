//! Reusable test content.

/// Minimal Stan program used as the template in CLI tests
pub const TEMPLATE: &str = r#"data {
  int<lower=0> N;
  vector[N] y;
}
parameters {
  real mu;
}
model {
  y ~ normal(mu, 1);
}
"#;
